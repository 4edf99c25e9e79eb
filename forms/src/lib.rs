//! Form state and submission lifecycle for the channelboard client.
//!
//! This crate owns everything a form workflow needs before any network or
//! rendering code gets involved: field values and their validators, the
//! validate-then-submit gate, and the submission lifecycle state machine.
//! It has no UI dependency; the Leptos layer holds a [`form::Form`] inside a
//! signal and re-renders from it, while non-reactive consumers can use the
//! [`form::Form::subscribe`] observer contract directly.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`field`] | A single named field: value, validator, displayed error |
//! | [`form`] | The field set: mutation, validation, submit gating, reset |
//! | [`submit`] | Editing / Submitting / Done lifecycle with re-entry gating |

pub mod field;
pub mod form;
pub mod submit;
