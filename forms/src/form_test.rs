use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::field::Field;

fn channel_form() -> Form {
    Form::new(vec![
        Field::required("username", "add.channel.validation.username"),
        Field::required("geo", "add.channel.validation.geo"),
        Field::required("language", "add.channel.validation.language"),
        Field::required("category", "add.channel.validation.category"),
    ])
}

#[test]
fn set_value_updates_and_revalidates_only_that_field() {
    let mut form = channel_form();
    form.set_value("username", "abc");
    assert_eq!(form.value("username"), "abc");
    assert_eq!(form.error("username"), None);
    // Other fields were not validated yet, so they carry no error.
    assert_eq!(form.error("geo"), None);
}

#[test]
fn clearing_a_value_resurfaces_its_error() {
    let mut form = channel_form();
    form.set_value("username", "abc");
    form.set_value("username", "");
    assert_eq!(form.error("username"), Some("add.channel.validation.username"));
}

#[test]
fn set_value_ignores_unknown_field() {
    let mut form = channel_form();
    form.set_value("nope", "x");
    assert_eq!(form.value("nope"), "");
}

#[test]
fn submit_with_empty_required_field_does_not_invoke_callback() {
    let mut form = channel_form();
    form.set_value("username", "abc");
    form.set_value("language", "US");
    form.set_value("category", "news");

    let mut called = false;
    let submitted = form.submit(|_| called = true);

    assert!(!submitted);
    assert!(!called);
    // Only the missing field shows its required-field message.
    assert_eq!(form.error("geo"), Some("add.channel.validation.geo"));
    assert_eq!(form.error("username"), None);
    assert_eq!(form.error("language"), None);
    assert_eq!(form.error("category"), None);
}

#[test]
fn submit_with_all_fields_filled_invokes_callback_with_values() {
    let mut form = channel_form();
    form.set_value("username", "durov");
    form.set_value("geo", "us");
    form.set_value("language", "en");
    form.set_value("category", "news");

    let mut seen = None;
    let submitted = form.submit(|values| seen = Some(values.clone()));

    assert!(submitted);
    let values = seen.expect("callback should have run");
    assert_eq!(values.get("username"), Some("durov"));
    assert_eq!(values.get("geo"), Some("us"));
    assert_eq!(values.get("language"), Some("en"));
    assert_eq!(values.get("category"), Some("news"));
}

#[test]
fn submit_accepts_whitespace_only_values() {
    let mut form = Form::new(vec![Field::required("name", "required.name")]);
    form.set_value("name", "   ");
    assert!(form.submit(|_| {}));
}

#[test]
fn failed_submit_keeps_entered_values() {
    let mut form = channel_form();
    form.set_value("username", "durov");
    form.submit(|_| {});
    assert_eq!(form.value("username"), "durov");
}

#[test]
fn is_valid_does_not_record_errors() {
    let form = channel_form();
    assert!(!form.is_valid());
    assert_eq!(form.error("username"), None);
}

#[test]
fn reset_restores_initials_and_clears_errors() {
    let mut form = channel_form();
    form.set_value("username", "durov");
    form.submit(|_| {});
    assert!(form.error("geo").is_some());

    form.reset();
    assert_eq!(form.value("username"), "");
    assert_eq!(form.error("geo"), None);
}

#[test]
fn reset_honors_non_empty_initial_values() {
    let mut form = Form::new(vec![Field::required("geo", "required.geo").with_initial("us")]);
    form.set_value("geo", "de");
    form.reset();
    assert_eq!(form.value("geo"), "us");
}

#[test]
fn values_preserve_declaration_order() {
    let form = channel_form();
    let values = form.values();
    let names: Vec<&str> = values
        .entries()
        .iter()
        .map(|(n, _)| n.as_str())
        .collect();
    assert_eq!(names, ["username", "geo", "language", "category"]);
}

#[test]
fn subscribers_are_notified_synchronously_after_each_mutation() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = calls.clone();

    let mut form = channel_form();
    form.subscribe(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });

    form.set_value("username", "a");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    form.validate();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    form.reset();
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn subscribers_observe_the_mutated_state() {
    let observed = Arc::new(std::sync::Mutex::new(String::new()));
    let sink = observed.clone();

    let mut form = channel_form();
    form.subscribe(move |f| {
        if let Ok(mut slot) = sink.lock() {
            *slot = f.value("username").to_owned();
        }
    });

    form.set_value("username", "durov");
    assert_eq!(observed.lock().expect("lock").as_str(), "durov");
}

#[test]
fn get_or_empty_falls_back_for_unknown_names() {
    let form = channel_form();
    assert_eq!(form.values().get_or_empty("missing"), "");
}
