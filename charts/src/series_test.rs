#![allow(clippy::float_cmp)]

use chrono::{DateTime, Utc};

use super::*;

fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("valid timestamp")
        .with_timezone(&Utc)
}

#[test]
fn metric_wire_names_match_serde_encoding() {
    for metric in Metric::VALUES {
        let encoded = serde_json::to_string(&metric).expect("serialize");
        assert_eq!(encoded, format!("\"{}\"", metric.as_str()));
    }
}

#[test]
fn metric_engagement_rate_uses_the_err_wire_name() {
    assert_eq!(Metric::EngagementRate.as_str(), "eRRStatDay");
    assert_eq!(Metric::EngagementRate.key(), "err");
}

#[test]
fn range_and_step_wire_names_are_lowercase() {
    for range in Range::VALUES {
        let encoded = serde_json::to_string(&range).expect("serialize");
        assert_eq!(encoded, format!("\"{}\"", range.as_str()));
    }
    for step in Step::VALUES {
        let encoded = serde_json::to_string(&step).expect("serialize");
        assert_eq!(encoded, format!("\"{}\"", step.as_str()));
    }
}

#[test]
fn defaults_match_the_initial_chart_selection() {
    assert_eq!(Range::default(), Range::Month);
    assert_eq!(Step::default(), Step::Day);
    assert_eq!(SortOrder::default(), SortOrder::Asc);
}

#[test]
fn day_label_is_the_full_calendar_date() {
    assert_eq!(Step::Day.label(at("2025-06-11T12:30:00Z")), "June 11 2025");
}

#[test]
fn week_label_spans_sunday_to_saturday_for_a_wednesday_sample() {
    // June 11 2025 is a Wednesday; its week runs June 8 (Sunday) through
    // June 14 (Saturday).
    assert_eq!(
        Step::Week.label(at("2025-06-11T00:00:00Z")),
        "June 8 2025 - June 14 2025"
    );
}

#[test]
fn week_label_is_stable_across_the_whole_week() {
    let expected = "June 8 2025 - June 14 2025";
    assert_eq!(Step::Week.label(at("2025-06-08T00:00:00Z")), expected);
    assert_eq!(Step::Week.label(at("2025-06-14T23:59:59Z")), expected);
}

#[test]
fn week_label_crosses_month_and_year_boundaries() {
    // January 3 2024 is a Wednesday in the week of December 31 2023.
    assert_eq!(
        Step::Week.label(at("2024-01-03T00:00:00Z")),
        "December 31 2023 - January 6 2024"
    );
}

#[test]
fn month_label_is_month_and_year_only() {
    assert_eq!(Step::Month.label(at("2025-06-11T00:00:00Z")), "June 2025");
}

#[test]
fn sample_deserializes_from_the_wire_shape() {
    let sample: Sample =
        serde_json::from_str(r#"{"createdAt":"2025-06-11T00:00:00Z","amount":50}"#)
            .expect("deserialize");
    assert_eq!(sample.amount, 50.0);
    assert_eq!(sample.created_at, at("2025-06-11T00:00:00Z"));
}
