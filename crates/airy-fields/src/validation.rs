//! Validation contract for field values
//!
//! Fields never validate on their own. A form calls a [`Validator`] with the
//! current value and the field's default title and shows the returned message,
//! typically in place of the title while the value is invalid.
//!
//! Stock validators return the default title when the value is valid and an
//! error message otherwise.

use regex::Regex;

/// Outcome of validating a value
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationStatus {
    /// Text to show for the field
    pub message: String,
    pub is_valid: bool,
}

impl ValidationStatus {
    pub fn valid(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_valid: true,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_valid: false,
        }
    }
}

impl From<(String, bool)> for ValidationStatus {
    fn from((message, is_valid): (String, bool)) -> Self {
        Self { message, is_valid }
    }
}

impl From<ValidationStatus> for (String, bool) {
    fn from(status: ValidationStatus) -> Self {
        (status.message, status.is_valid)
    }
}

/// Validates the text of a field
///
/// Implemented for every `Fn(&str, &str) -> ValidationStatus`, so a closure
/// can be used wherever a validator is expected.
///
/// # Example
///
/// ```ignore
/// let not_admin = |text: &str, title: &str| {
///     if text.eq_ignore_ascii_case("admin") {
///         ValidationStatus::invalid("Name is taken")
///     } else {
///         ValidationStatus::valid(title)
///     }
/// };
/// let status = not_admin.validate(&name, "Username");
/// ```
pub trait Validator {
    /// Check `text`; `default_title` is the title the field shows normally
    fn validate(&self, text: &str, default_title: &str) -> ValidationStatus;
}

impl<F> Validator for F
where
    F: Fn(&str, &str) -> ValidationStatus,
{
    fn validate(&self, text: &str, default_title: &str) -> ValidationStatus {
        self(text, default_title)
    }
}

/// Rejects values that are empty or only whitespace
#[derive(Debug, Clone)]
pub struct Required {
    message: String,
}

impl Required {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for Required {
    fn default() -> Self {
        Self::new("Required")
    }
}

impl Validator for Required {
    fn validate(&self, text: &str, default_title: &str) -> ValidationStatus {
        if text.trim().is_empty() {
            ValidationStatus::invalid(&self.message)
        } else {
            ValidationStatus::valid(default_title)
        }
    }
}

/// Bounds the number of characters in a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRange {
    pub min: usize,
    /// No upper bound if None
    pub max: Option<usize>,
}

impl LengthRange {
    pub fn new(min: usize, max: Option<usize>) -> Self {
        Self { min, max }
    }

    pub fn at_least(min: usize) -> Self {
        Self::new(min, None)
    }
}

impl Validator for LengthRange {
    fn validate(&self, text: &str, default_title: &str) -> ValidationStatus {
        let len = text.chars().count();
        if len < self.min {
            return ValidationStatus::invalid(format!("At least {} characters", self.min));
        }
        match self.max {
            Some(max) if len > max => {
                ValidationStatus::invalid(format!("At most {} characters", max))
            }
            _ => ValidationStatus::valid(default_title),
        }
    }
}

/// Requires the whole value to match a regular expression
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    message: String,
}

impl Pattern {
    /// Compile `pattern`; it is anchored so that partial matches are rejected
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("^(?:{})$", pattern))?;
        Ok(Self {
            regex,
            message: message.into(),
        })
    }

    /// A loose `local@domain.tld` check
    pub fn email() -> Result<Self, regex::Error> {
        Self::new(r"[^@\s]+@[^@\s]+\.[^@\s]+", "Invalid email")
    }
}

impl Validator for Pattern {
    fn validate(&self, text: &str, default_title: &str) -> ValidationStatus {
        if self.regex.is_match(text) {
            ValidationStatus::valid(default_title)
        } else {
            ValidationStatus::invalid(&self.message)
        }
    }
}

/// Runs validators in order and reports the first failure
#[derive(Default)]
pub struct AllOf {
    validators: Vec<Box<dyn Validator>>,
}

impl AllOf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validator
    pub fn with(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl Validator for AllOf {
    fn validate(&self, text: &str, default_title: &str) -> ValidationStatus {
        for validator in &self.validators {
            let status = validator.validate(text, default_title);
            if !status.is_valid {
                return status;
            }
        }
        ValidationStatus::valid(default_title)
    }
}

impl std::fmt::Debug for AllOf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AllOf")
            .field("validators", &self.validators.len())
            .finish()
    }
}

/// Validate several fields at once
///
/// Each entry is `(validator, text, default_title)`. Returns one status per
/// entry, in order, and whether all of them passed.
pub fn validate_all(entries: &[(&dyn Validator, &str, &str)]) -> (Vec<ValidationStatus>, bool) {
    let statuses: Vec<_> = entries
        .iter()
        .map(|(validator, text, title)| validator.validate(text, title))
        .collect();
    let all_valid = statuses.iter().all(|status| status.is_valid);
    (statuses, all_valid)
}
