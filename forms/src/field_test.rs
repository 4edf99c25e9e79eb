use super::*;

#[test]
fn required_fails_on_empty_value() {
    let field = Field::required("username", "add.channel.validation.username");
    assert_eq!(
        field.validator.check(field.value()),
        Some("add.channel.validation.username".to_owned())
    );
}

#[test]
fn required_passes_on_non_empty_value() {
    let field = Field::required("username", "add.channel.validation.username").with_initial("abc");
    assert_eq!(field.validator.check(field.value()), None);
}

#[test]
fn required_accepts_whitespace_only_value() {
    // Length-based check only: "   " counts as filled in.
    let validator = Validator::Required {
        message: "required".to_owned(),
    };
    assert_eq!(validator.check("   "), None);
}

#[test]
fn none_validator_always_passes() {
    assert_eq!(Validator::None.check(""), None);
    assert_eq!(Validator::None.check("anything"), None);
}

#[test]
fn custom_validator_runs_the_given_rule() {
    fn no_spaces(value: &str) -> Option<String> {
        value.contains(' ').then(|| "no-spaces".to_owned())
    }

    let validator = Validator::Custom(no_spaces);
    assert_eq!(validator.check("one two"), Some("no-spaces".to_owned()));
    assert_eq!(validator.check("one"), None);
}

#[test]
fn with_initial_sets_both_initial_and_current_value() {
    let field = Field::new("geo").with_initial("us");
    assert_eq!(field.value(), "us");
    assert_eq!(field.initial, "us");
}

#[test]
fn new_field_starts_without_error() {
    let field = Field::required("name", "required");
    assert_eq!(field.error(), None);
}
