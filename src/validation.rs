//! Catalog validation.
//!
//! Checks structural integrity of a provider catalog before optimization.
//! Detects:
//! - Empty catalogs
//! - Duplicate provider names
//! - Reliability outside `[0, 1]`
//! - Non-positive or non-finite cost and latency

use std::collections::HashSet;

use crate::models::Catalog;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The catalog holds no providers.
    EmptyCatalog,
    /// Two providers share the same name.
    DuplicateName,
    /// A reliability value lies outside `[0, 1]`.
    ReliabilityOutOfRange,
    /// A cost or latency value is non-positive or non-finite.
    InvalidAttribute,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a provider catalog.
///
/// Checks:
/// 1. The catalog is non-empty
/// 2. Provider names are unique
/// 3. Every reliability lies in `[0, 1]`
/// 4. Every cost and base latency is finite and positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let mut errors = Vec::new();

    if catalog.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCatalog,
            "Catalog has no providers",
        ));
        return Err(errors);
    }

    let mut names = HashSet::new();
    for provider in catalog.iter() {
        if !names.insert(provider.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate provider name: {}", provider.name),
            ));
        }

        if !(0.0..=1.0).contains(&provider.reliability) {
            errors.push(ValidationError::new(
                ValidationErrorKind::ReliabilityOutOfRange,
                format!(
                    "Provider {} has reliability {} outside [0, 1]",
                    provider.name, provider.reliability
                ),
            ));
        }

        if !provider.cost.is_finite() || provider.cost <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidAttribute,
                format!("Provider {} has invalid cost {}", provider.name, provider.cost),
            ));
        }

        if !provider.base_latency.is_finite() || provider.base_latency <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidAttribute,
                format!(
                    "Provider {} has invalid base latency {}",
                    provider.name, provider.base_latency
                ),
            ));
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
