//! Host form framework adapter
//!
//! Validators work on plain strings. This module reads the value out of a
//! host control and renders a [`ValidationResult`] as the `null`-or-object
//! JSON the host's validation pipeline consumes.

use serde_json::{json, Value};
use std::borrow::Cow;

use crate::error::{ValidationError, ValidationResult};

/// Anything exposing a form control's current value
pub trait Control {
    /// The raw field content, or `None` for a null-like value.
    ///
    /// Borrowed for text controls; owned when the value has to be rendered,
    /// e.g. a JSON number or boolean. Numbers are rendered exactly as
    /// `serde_json` prints them, so `01234567890` sent as a number arrives
    /// as `1234567890`.
    fn value(&self) -> Option<Cow<'_, str>>;
}

impl Control for str {
    fn value(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl Control for String {
    fn value(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }
}

impl<T: Control> Control for Option<T> {
    fn value(&self) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(Control::value)
    }
}

impl Control for Value {
    fn value(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Null => None,
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            // rendered as-is: a CPF sent as a number has already lost its leading zeros
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            // a `{ "value": ... }` control object
            Value::Object(map) => map.get("value").and_then(Control::value),
            Value::Array(_) => Some(Cow::Owned(self.to_string())),
        }
    }
}

/// Render a validation outcome as `null` or the error object
pub fn to_errors_json(result: &ValidationResult) -> Value {
    match result {
        Ok(()) => Value::Null,
        Err(ValidationError::Invalid { is_invalid }) => json!({
            "isInvalid": {
                "expected": is_invalid.expected,
                "message": is_invalid.message,
            }
        }),
        Err(ValidationError::Message { message }) => json!({ "message": message }),
    }
}
