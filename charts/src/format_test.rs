use super::*;

#[test]
fn small_integers_pass_through() {
    assert_eq!(short_number(0.0), "0");
    assert_eq!(short_number(45.0), "45");
    assert_eq!(short_number(999.0), "999");
}

#[test]
fn small_fractions_keep_one_decimal() {
    assert_eq!(short_number(12.34), "12.3");
    assert_eq!(short_number(4.56), "4.6");
}

#[test]
fn thousands_abbreviate_with_k() {
    assert_eq!(short_number(1000.0), "1K");
    assert_eq!(short_number(1500.0), "1.5K");
    assert_eq!(short_number(12_300.0), "12.3K");
}

#[test]
fn millions_and_billions_abbreviate() {
    assert_eq!(short_number(2_000_000.0), "2M");
    assert_eq!(short_number(1_260_000.0), "1.3M");
    assert_eq!(short_number(2_000_000_000.0), "2B");
}

#[test]
fn negative_values_keep_their_sign() {
    assert_eq!(short_number(-1500.0), "-1.5K");
    assert_eq!(short_number(-12.0), "-12");
}

#[test]
fn format_value_truncates_by_default() {
    assert_eq!(format_value(12.7, false, false), "12");
    assert_eq!(format_value(1234.0, false, false), "1.2K");
}

#[test]
fn format_value_float_mode_keeps_decimals() {
    assert_eq!(format_value(12.34, true, false), "12.3");
}

#[test]
fn format_value_percent_appends_suffix() {
    assert_eq!(format_value(12.34, true, true), "12.3%");
    assert_eq!(format_value(50.0, false, true), "50%");
}
