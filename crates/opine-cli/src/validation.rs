//! Form validation for the interactive pages.
//!
//! Validators run against a field/value map collected from flags or
//! prompts, before any request is sent. Each validator owns one rule for
//! one field; the composite returns the first error reported for a field.

use std::collections::HashMap;

/// Field/value map a form collects before submitting.
pub type FormInput = HashMap<String, String>;

/// One validation rule bound to one field.
pub trait FieldValidation: Send + Sync {
    /// The field this rule applies to.
    fn field(&self) -> &str;

    /// Check the rule, returning a user-facing message on failure.
    fn validate(&self, input: &FormInput) -> Option<String>;
}

// ============================================================================
// Validators
// ============================================================================

/// Fails when the field is absent or empty.
pub struct RequiredFieldValidation {
    field: String,
}

impl RequiredFieldValidation {
    /// Require `field` to be present and non-empty.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl FieldValidation for RequiredFieldValidation {
    fn field(&self) -> &str {
        &self.field
    }

    fn validate(&self, input: &FormInput) -> Option<String> {
        match input.get(&self.field) {
            Some(value) if !value.is_empty() => None,
            _ => Some("required field".to_string()),
        }
    }
}

/// Fails when a non-empty value does not look like an e-mail address.
///
/// An absent or empty value passes; that is the required validator's
/// concern.
pub struct EmailValidation {
    field: String,
}

impl EmailValidation {
    /// Validate `field` as an e-mail address.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

fn looks_like_email(value: &str) -> bool {
    if value.contains(' ') {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

impl FieldValidation for EmailValidation {
    fn field(&self) -> &str {
        &self.field
    }

    fn validate(&self, input: &FormInput) -> Option<String> {
        match input.get(&self.field) {
            Some(value) if !value.is_empty() && !looks_like_email(value) => {
                Some("invalid e-mail".to_string())
            }
            _ => None,
        }
    }
}

/// Fails when a present value is shorter than the minimum.
pub struct MinLengthValidation {
    field: String,
    min_length: usize,
}

impl MinLengthValidation {
    /// Require `field` to hold at least `min_length` characters.
    pub fn new(field: impl Into<String>, min_length: usize) -> Self {
        Self {
            field: field.into(),
            min_length,
        }
    }
}

impl FieldValidation for MinLengthValidation {
    fn field(&self) -> &str {
        &self.field
    }

    fn validate(&self, input: &FormInput) -> Option<String> {
        match input.get(&self.field) {
            Some(value) if value.chars().count() < self.min_length => {
                Some("value is too short".to_string())
            }
            _ => None,
        }
    }
}

/// Fails when the field differs from its counterpart.
pub struct CompareFieldsValidation {
    field: String,
    field_to_compare: String,
}

impl CompareFieldsValidation {
    /// Require `field` to equal `field_to_compare`.
    pub fn new(field: impl Into<String>, field_to_compare: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            field_to_compare: field_to_compare.into(),
        }
    }
}

impl FieldValidation for CompareFieldsValidation {
    fn field(&self) -> &str {
        &self.field
    }

    fn validate(&self, input: &FormInput) -> Option<String> {
        if input.get(&self.field) == input.get(&self.field_to_compare) {
            None
        } else {
            Some("fields do not match".to_string())
        }
    }
}

// ============================================================================
// Composite
// ============================================================================

/// Runs every rule registered for a field, reporting the first failure.
pub struct ValidationComposite {
    validations: Vec<Box<dyn FieldValidation>>,
}

impl ValidationComposite {
    /// Assemble a composite from the given rules.
    pub fn build(validations: Vec<Box<dyn FieldValidation>>) -> Self {
        Self { validations }
    }

    /// Validate one field of the input.
    pub fn validate(&self, field: &str, input: &FormInput) -> Option<String> {
        self.validations
            .iter()
            .filter(|validation| validation.field() == field)
            .find_map(|validation| validation.validate(input))
    }
}

/// Rules for the login form.
pub fn make_login_validation() -> ValidationComposite {
    ValidationComposite::build(vec![
        Box::new(RequiredFieldValidation::new("email")),
        Box::new(EmailValidation::new("email")),
        Box::new(RequiredFieldValidation::new("password")),
        Box::new(MinLengthValidation::new("password", 5)),
    ])
}

/// Rules for the signup form.
pub fn make_signup_validation() -> ValidationComposite {
    ValidationComposite::build(vec![
        Box::new(RequiredFieldValidation::new("name")),
        Box::new(RequiredFieldValidation::new("email")),
        Box::new(EmailValidation::new("email")),
        Box::new(RequiredFieldValidation::new("password")),
        Box::new(MinLengthValidation::new("password", 5)),
        Box::new(RequiredFieldValidation::new("password_confirmation")),
        Box::new(CompareFieldsValidation::new(
            "password_confirmation",
            "password",
        )),
    ])
}
