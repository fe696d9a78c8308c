use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// One contact form draft. Starts empty, mutated field by field, replaced
/// wholesale once a submission goes through.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFormData {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }
}

#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

/// Admissibility of a single field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Aggregate of [`validate_field`] over the whole form. Fields that pass
/// are absent from `field_errors`; they never appear with an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValidationOutcome {
    pub is_valid: bool,
    pub field_errors: HashMap<Field, Vec<String>>,
}

impl FormValidationOutcome {
    pub fn errors_for(&self, field: Field) -> &[String] {
        match self.field_errors.get(&field) {
            Some(errors) => errors,
            None => &[],
        }
    }
}

/// Checks a single field value against the form rules.
///
/// At most one message is produced per call: a value that is empty after
/// trimming gets the "required" message and the secondary length/format
/// check is never reached.
pub fn validate_field(field: Field, value: &str) -> ValidationResult {
    let trimmed = value.trim();
    let mut errors = Vec::new();

    match field {
        Field::Name => {
            if trimmed.is_empty() {
                errors.push("Name is required".to_owned());
            } else if trimmed.chars().count() < 2 {
                errors.push("Name must be at least 2 characters long".to_owned());
            }
        }
        Field::Email => {
            if trimmed.is_empty() {
                errors.push("Email is required".to_owned());
            } else if !EMAIL_PATTERN.is_match(trimmed) {
                errors.push("Please enter a valid email address".to_owned());
            }
        }
        Field::Subject => {
            if trimmed.is_empty() {
                errors.push("Subject is required".to_owned());
            } else if trimmed.chars().count() < 3 {
                errors.push("Subject must be at least 3 characters long".to_owned());
            }
        }
        Field::Message => {
            if trimmed.is_empty() {
                errors.push("Message is required".to_owned());
            } else if trimmed.chars().count() < 10 {
                errors.push("Message must be at least 10 characters long".to_owned());
            }
        }
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Runs every field through [`validate_field`] and aggregates the failures.
///
/// Pure: same input, same outcome, no side effects.
pub fn validate_form(data: &ContactFormData) -> FormValidationOutcome {
    let mut outcome = FormValidationOutcome {
        is_valid: true,
        field_errors: HashMap::new(),
    };

    for &field in Field::VARIANTS {
        let result = validate_field(field, data.field(field));
        if !result.is_valid {
            outcome.field_errors.insert(field, result.errors);
            outcome.is_valid = false;
        }
    }

    outcome
}
