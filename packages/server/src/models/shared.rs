use crate::error::AppError;

/// Accumulates human-readable validation messages so a client sees every
/// failed rule at once, joined with `", "` in the order the rules ran.
#[derive(Debug, Default)]
pub struct FieldErrors {
    messages: Vec<String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `"{field} {message}"`, e.g. `"Url is invalid"`.
    pub fn add(&mut self, field: &str, message: &str) {
        self.messages.push(format!("{field} {message}"));
    }

    /// Record `"{field} can't be blank"` when `value` is blank.
    /// Returns whether the value was present.
    pub fn require_present(&mut self, field: &str, value: &str) -> bool {
        if is_blank(value) {
            self.add(field, "can't be blank");
            false
        } else {
            true
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn into_result(self) -> Result<(), AppError> {
        if self.messages.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self.messages.join(", ")))
        }
    }
}

/// True for empty or whitespace-only strings.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
