//! Root-privilege requirement of a package.

use crate::SchemaError;
use serde::{Serialize, Serializer};

/// Whether installing the package needs root.
///
/// The manifest stores this as a JSON boolean for the two definite cases and
/// the string `"optional"` for the third, so the enum carries a custom
/// `Serialize` impl instead of a derived representation.
///
/// # Example
///
/// ```
/// use ipkit_schema::RootRequired;
///
/// let flag: RootRequired = "Optional".parse().unwrap();
/// assert_eq!(flag, RootRequired::Optional);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RootRequired {
    /// Root is mandatory (`true`).
    Required,
    /// Root is never needed (`false`, default).
    #[default]
    NotRequired,
    /// The package works either way (`"optional"`).
    Optional,
}

impl std::str::FromStr for RootRequired {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "true" => Ok(Self::Required),
            "false" => Ok(Self::NotRequired),
            "optional" => Ok(Self::Optional),
            _ => Err(SchemaError::InvalidRootRequired(s.to_string())),
        }
    }
}

impl Serialize for RootRequired {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Required => serializer.serialize_bool(true),
            Self::NotRequired => serializer.serialize_bool(false),
            Self::Optional => serializer.serialize_str("optional"),
        }
    }
}
