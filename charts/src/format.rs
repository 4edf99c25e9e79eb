//! Compact number formatting for axis ticks and tooltips.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Abbreviate a value for display: `1500` -> `"1.5K"`, `2_000_000` -> `"2M"`.
///
/// One decimal place, with a trailing `.0` stripped. Values below a thousand
/// pass through (fractional ones keep one decimal).
#[must_use]
pub fn short_number(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    if abs >= 1e9 {
        format!("{sign}{}B", one_decimal(abs / 1e9))
    } else if abs >= 1e6 {
        format!("{sign}{}M", one_decimal(abs / 1e6))
    } else if abs >= 1e3 {
        format!("{sign}{}K", one_decimal(abs / 1e3))
    } else {
        format!("{sign}{}", one_decimal(abs))
    }
}

/// Format a point value for display.
///
/// Default mode truncates to an integer before abbreviating; `float` keeps
/// the decimal part. `percent` appends a percent sign.
#[must_use]
pub fn format_value(raw: f64, float: bool, percent: bool) -> String {
    let value = if float { raw } else { raw.trunc() };
    let mut out = short_number(value);
    if percent {
        out.push('%');
    }
    out
}

fn one_decimal(value: f64) -> String {
    let s = format!("{value:.1}");
    match s.strip_suffix(".0") {
        Some(trimmed) => trimmed.to_owned(),
        None => s,
    }
}
