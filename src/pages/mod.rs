//! Top-level routed pages.

pub mod add_channel;
pub mod channel;
pub mod topics;
