// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use adsales::CoreError;
use adsales_domain::DomainError;

use crate::ad_import::AdImportError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The uploaded ad-details file could not be read.
    InvalidCsvFormat {
        /// Why the file was rejected.
        reason: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::InvalidCsvFormat { reason } => write!(f, "Invalid CSV format: {reason}"),
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::InvalidVolume(_) => ApiError::InvalidInput {
            field: String::from("volume"),
            message,
        },
        DomainError::DateParseError { .. } => ApiError::InvalidInput {
            field: String::from("date"),
            message,
        },
        DomainError::InvalidVolumeStatus(_) => ApiError::InvalidInput {
            field: String::from("status"),
            message,
        },
        DomainError::InvalidTimezone(_) => ApiError::InvalidInput {
            field: String::from("timezone"),
            message,
        },
        DomainError::InvalidCalendarConfig { field, .. } => ApiError::InvalidInput {
            field: field.to_string(),
            message,
        },
        DomainError::VolumeNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Volume"),
            message,
        },
        DomainError::OverrideNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Schedule override"),
            message,
        },
        DomainError::NoChange { .. } => ApiError::DomainRuleViolation {
            rule: String::from("edit_must_change_entry"),
            message,
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::Store(store_err) => ApiError::Internal {
            message: store_err.to_string(),
        },
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(err)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        translate_core_error(err)
    }
}

impl From<AdImportError> for ApiError {
    fn from(err: AdImportError) -> Self {
        match err {
            AdImportError::Csv(_) => Self::InvalidCsvFormat {
                reason: err.to_string(),
            },
            AdImportError::Io(_) | AdImportError::Utf8(_) => Self::Internal {
                message: err.to_string(),
            },
        }
    }
}
