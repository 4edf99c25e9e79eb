//! Static enumeration data for the registration selects.
//!
//! Region and language codes are fixed lists; the catalog's categories come
//! from the server instead (see [`crate::net::api::fetch_categories`]).
//! Every code is rendered with a localized label under `common.geo.*` /
//! `common.languages.*`.

/// Geographic-region codes a channel's audience can be registered under.
pub const GEO: &[&str] = &[
    "us", "gb", "de", "fr", "es", "it", "br", "in", "ru", "ua",
];

/// Language codes a channel's content can be registered under.
pub const LANGUAGES: &[&str] = &["en", "de", "fr", "es", "it", "pt", "ru", "uk", "hi"];
