//! Validation errors for schema values.

use thiserror::Error;

/// Errors raised while validating schema-level values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The version string does not match `MAJOR.MINOR.PATCH`.
    #[error(
        "Invalid version '{0}': expected MAJOR.MINOR.PATCH with non-negative integers of at most 9 digits and no leading zeroes"
    )]
    InvalidVersion(String),

    /// The patch suffix is not a run of 1-9 decimal digits.
    #[error("Invalid version suffix '{0}': expected at most 9 decimal digits")]
    InvalidSuffix(String),

    /// The root requirement is not one of the three accepted spellings.
    #[error("Invalid root requirement '{0}': must be one of: true, false, optional")]
    InvalidRootRequired(String),
}
