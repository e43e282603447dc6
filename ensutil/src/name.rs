//! ENS name validation.

use serde::Serialize;

use crate::normalize::normalize_name;

/// Ways an ENS name can fail validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    /// The input was empty.
    #[error("ENS name is required")]
    Required,
    /// The input has no dot-separated TLD (e.g. a bare "vitalik").
    #[error("ENS name must include a TLD (e.g. .eth)")]
    MissingTld,
    /// UTS-46 normalization rejected the input.
    #[error("Invalid ENS name \"{0}\". Name contains disallowed characters or fails normalization.")]
    Normalization(String),
}

/// Validate an ENS name and return its normalized form.
///
/// A valid name must be non-empty, contain at least one dot (a TLD), and pass
/// UTS-46 normalization. The TLD check runs before normalization so that a
/// bare single label reports the missing TLD rather than anything about its
/// characters.
pub fn check_name(name: &str) -> Result<String, NameError> {
    if name.is_empty() {
        return Err(NameError::Required);
    }
    if !name.contains('.') {
        return Err(NameError::MissingTld);
    }
    normalize_name(name).ok_or_else(|| NameError::Normalization(name.to_string()))
}

/// Outcome of [`validate_name`].
///
/// `valid` is true exactly when `normalized` is present and `error` is not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameValidation {
    /// Whether the name is a valid, normalizable ENS name.
    pub valid: bool,
    /// The UTS-46 normalized form of the name, when valid.
    pub normalized: Option<String>,
    /// Human-readable reason the name was rejected, when invalid.
    pub error: Option<String>,
}

/// Validate an ENS name, reporting every failure as a value.
///
/// This is the record-shaped form of [`check_name`]; it never panics and has
/// no error path of its own.
pub fn validate_name(name: &str) -> NameValidation {
    match check_name(name) {
        Ok(normalized) => NameValidation {
            valid: true,
            normalized: Some(normalized),
            error: None,
        },
        Err(err) => NameValidation {
            valid: false,
            normalized: None,
            error: Some(err.to_string()),
        },
    }
}
