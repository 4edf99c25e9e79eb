//! A single form field: name, value, validator, and the displayed error.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

/// Validation rule attached to a field.
///
/// Rules are plain data, which keeps fields `Send + Sync + Clone` and lets
/// a whole form live inside a reactive state container. [`Validator::Custom`]
/// covers rules that do not fit the built-in variants.
#[derive(Clone, Debug)]
pub enum Validator {
    /// Always passes.
    None,
    /// Fails with `message` when the value is the empty string.
    ///
    /// The check is length-based only: whitespace-only input passes. This
    /// matches the behavior every workflow in the application relies on.
    Required {
        /// Message key surfaced when the check fails.
        message: String,
    },
    /// Arbitrary rule as a plain function pointer.
    Custom(fn(&str) -> Option<String>),
}

impl Validator {
    /// Run the rule against `value`, returning the error message key on
    /// failure.
    #[must_use]
    pub fn check(&self, value: &str) -> Option<String> {
        match self {
            Self::None => None,
            Self::Required { message } => {
                if value.is_empty() {
                    Some(message.clone())
                } else {
                    None
                }
            }
            Self::Custom(rule) => rule(value),
        }
    }
}

/// A named field with its current value and last validation outcome.
#[derive(Clone, Debug)]
pub struct Field {
    pub(crate) name: String,
    pub(crate) initial: String,
    pub(crate) value: String,
    pub(crate) error: Option<String>,
    pub(crate) validator: Validator,
}

impl Field {
    /// Create a field with an empty initial value and no validation rule.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            initial: String::new(),
            value: String::new(),
            error: None,
            validator: Validator::None,
        }
    }

    /// Create a field whose value must be non-empty, surfacing `message`
    /// when it is not.
    #[must_use]
    pub fn required(name: &str, message: &str) -> Self {
        Self {
            validator: Validator::Required {
                message: message.to_owned(),
            },
            ..Self::new(name)
        }
    }

    /// Replace the initial (and current) value.
    #[must_use]
    pub fn with_initial(mut self, initial: &str) -> Self {
        self.initial = initial.to_owned();
        self.value = initial.to_owned();
        self
    }

    /// Attach a custom validation rule.
    #[must_use]
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    /// Field name as given at construction.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Error message key from the most recent validation, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Re-run this field's validator against its current value and record
    /// the outcome.
    pub(crate) fn revalidate(&mut self) {
        self.error = self.validator.check(&self.value);
    }
}
