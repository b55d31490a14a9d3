//! Validation rules for text fields of create forms

use crate::shared::inline_create::{push_field_error, FieldErrors};

pub const MSG_REQUIRED: &str = "This field is required.";

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min_length: None,
            max_length: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            min_length: None,
            max_length: None,
        }
    }

    pub const fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub const fn with_min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules.
    ///
    /// Lengths are counted in characters. An empty optional value passes.
    pub fn validate_string(&self, value: &str) -> Result<(), String> {
        let value = value.trim();
        if value.is_empty() {
            return if self.required {
                Err(MSG_REQUIRED.to_string())
            } else {
                Ok(())
            };
        }

        let len = value.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(format!(
                    "Ensure this value has at least {min} characters (it has {len})."
                ));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(format!(
                    "Ensure this value has at most {max} characters (it has {len})."
                ));
            }
        }

        Ok(())
    }

    /// Validate and record the failure under `field` in `errors`.
    pub fn check(&self, errors: &mut FieldErrors, field: &str, value: Option<&str>) {
        if let Err(message) = self.validate_string(value.unwrap_or_default()) {
            push_field_error(errors, field, message);
        }
    }
}
