//! The field set behind a form: mutation, validation, submit gating, reset.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::fmt;
use std::sync::Arc;

use crate::field::Field;

/// Observer invoked synchronously after every form mutation.
pub type Listener = Arc<dyn Fn(&Form) + Send + Sync>;

/// Snapshot of field values handed to the submit callback.
///
/// Field order matches the order fields were declared in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues(Vec<(String, String)>);

impl FormValues {
    /// Value of `name`, if such a field exists.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Value of `name`, or the empty string for an unknown field.
    #[must_use]
    pub fn get_or_empty(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    /// All `(name, value)` pairs in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[(String, String)] {
        &self.0
    }
}

/// Local form state: fields, validation outcomes, and change observers.
///
/// Purely local: no network or rendering side effects happen in here. The
/// rendering layer is just one subscriber, either through [`Form::subscribe`]
/// or by holding the form inside its own reactive container.
#[derive(Default)]
pub struct Form {
    fields: Vec<Field>,
    listeners: Vec<Listener>,
}

impl Form {
    /// Build a form from its fields, in display order.
    #[must_use]
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            fields,
            listeners: Vec::new(),
        }
    }

    /// Current value of `name`, or the empty string for an unknown field.
    #[must_use]
    pub fn value(&self, name: &str) -> &str {
        self.field(name).map(Field::value).unwrap_or_default()
    }

    /// Displayed error message key for `name`, if any.
    #[must_use]
    pub fn error(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Field::error)
    }

    /// Whether every field currently passes its validator.
    ///
    /// Pure check: displayed errors are left untouched.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.fields
            .iter()
            .all(|f| f.validator.check(&f.value).is_none())
    }

    /// Set the value of `name` and re-run that field's validator.
    ///
    /// Unknown names are ignored. Observers are notified afterwards.
    pub fn set_value(&mut self, name: &str, value: &str) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.name == name) {
            field.value = value.to_owned();
            field.revalidate();
            self.notify();
        }
    }

    /// Run every field's validator and record the outcomes.
    ///
    /// Returns whether all fields passed. Observers are notified afterwards.
    pub fn validate(&mut self) -> bool {
        for field in &mut self.fields {
            field.revalidate();
        }
        let ok = self.fields.iter().all(|f| f.error.is_none());
        self.notify();
        ok
    }

    /// Validate everything and invoke `on_valid` with a value snapshot only
    /// if all fields pass.
    ///
    /// On failure the respective error messages are recorded and the
    /// callback is not invoked. Returns whether the callback ran.
    pub fn submit<F>(&mut self, on_valid: F) -> bool
    where
        F: FnOnce(&FormValues),
    {
        if self.validate() {
            on_valid(&self.values());
            true
        } else {
            false
        }
    }

    /// Snapshot of all current values in declaration order.
    #[must_use]
    pub fn values(&self) -> FormValues {
        FormValues(
            self.fields
                .iter()
                .map(|f| (f.name.clone(), f.value.clone()))
                .collect(),
        )
    }

    /// Restore every field to its initial value and clear all errors.
    ///
    /// Observers are notified afterwards.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clone_from(&field.initial);
            field.error = None;
        }
        self.notify();
    }

    /// Register an observer called synchronously after each mutation.
    pub fn subscribe(&mut self, listener: impl Fn(&Form) + Send + Sync + 'static) {
        self.listeners.push(Arc::new(listener));
    }

    fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn notify(&mut self) {
        let listeners = self.listeners.clone();
        for listener in &listeners {
            listener(self);
        }
    }
}

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("fields", &self.fields)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
