//! Localization collaborator: message keys in, display strings out.
//!
//! Every user-visible label and error routes through [`t`] (or [`t_with`]
//! for messages with interpolation parameters). English is the only bundled
//! locale; [`en::MESSAGES`] is the seam where additional locales would hang.
//! Unknown keys resolve to the key itself so a missing translation stays
//! visible instead of failing silently.


mod en;

/// Resolve `key` to its display string in the active locale.
#[must_use]
pub fn t(key: &str) -> String {
    lookup(key).map_or_else(|| key.to_owned(), ToOwned::to_owned)
}

/// Resolve `key` and substitute `{{name}}` interpolation parameters.
#[must_use]
pub fn t_with(key: &str, params: &[(&str, &str)]) -> String {
    let mut message = t(key);
    for (name, value) in params {
        message = message.replace(&format!("{{{{{name}}}}}"), value);
    }
    message
}

fn lookup(key: &str) -> Option<&'static str> {
    en::MESSAGES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, message)| *message)
}
