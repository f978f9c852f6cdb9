//! Application version grammar.
//!
//! webOS descriptors carry a strict `MAJOR.MINOR.PATCH` version: three
//! non-negative integers, each at most 9 digits, with no leading zeroes
//! other than the literal `0`.
//!
//! Release pipelines may override the patch segment with a build number
//! (see [`PatchSuffix`]); [`VersionUpdate::compute`] combines the two without
//! touching the filesystem.

use crate::SchemaError;
use regex::Regex;
use std::sync::LazyLock;

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0|[1-9][0-9]{0,8})\.(0|[1-9][0-9]{0,8})\.(0|[1-9][0-9]{0,8})$")
        .expect("version pattern is a valid regex")
});

/// Longest accepted numeric segment or suffix, in digits.
pub const MAX_SEGMENT_DIGITS: usize = 9;

/// A validated three-segment application version.
///
/// Segments fit in `u32` because the grammar caps them at 9 digits, and the
/// grammar forbids leading zeroes, so [`Display`](std::fmt::Display)
/// reproduces the parsed text exactly.
///
/// # Example
///
/// ```
/// use ipkit_schema::AppVersion;
///
/// let v = AppVersion::parse("1.20.3").unwrap();
/// assert_eq!((v.major, v.minor, v.patch), (1, 20, 3));
/// assert_eq!(v.to_string(), "1.20.3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AppVersion {
    /// Major segment.
    pub major: u32,
    /// Minor segment.
    pub minor: u32,
    /// Patch segment.
    pub patch: u32,
}

impl AppVersion {
    /// Parse and validate a version string.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidVersion`] if `s` does not match the
    /// grammar exactly (no surrounding whitespace is tolerated).
    pub fn parse(s: &str) -> Result<Self, SchemaError> {
        let invalid = || SchemaError::InvalidVersion(s.to_string());
        let caps = VERSION_RE.captures(s).ok_or_else(invalid)?;
        let segment = |i: usize| caps[i].parse::<u32>().map_err(|_| invalid());

        Ok(Self {
            major: segment(1)?,
            minor: segment(2)?,
            patch: segment(3)?,
        })
    }

    /// Check a string against the grammar without keeping the result.
    pub fn is_valid(s: &str) -> bool {
        VERSION_RE.is_match(s)
    }

    /// Same major and minor, new patch.
    pub fn with_patch(self, patch: u32) -> Self {
        Self { patch, ..self }
    }
}

impl std::fmt::Display for AppVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// A numeric patch override, already normalized (`"007"` becomes `7`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchSuffix(u32);

impl PatchSuffix {
    /// Parse a raw suffix argument.
    ///
    /// Surrounding whitespace is ignored and an empty result means "no
    /// override", so `Ok(None)` is returned rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidSuffix`] if the trimmed value contains
    /// anything other than ASCII digits or is longer than 9 digits.
    pub fn parse(raw: &str) -> Result<Option<Self>, SchemaError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let invalid = || SchemaError::InvalidSuffix(trimmed.to_string());
        if trimmed.len() > MAX_SEGMENT_DIGITS || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        trimmed
            .parse::<u32>()
            .map(|n| Some(Self(n)))
            .map_err(|_| invalid())
    }

    /// The normalized numeric value.
    pub fn value(self) -> u32 {
        self.0
    }
}

/// Outcome of applying an optional suffix to a descriptor version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionUpdate {
    /// The version to report (and persist, if `persist` is set).
    pub version: AppVersion,
    /// Whether the descriptor must be rewritten with `version`.
    pub persist: bool,
}

impl VersionUpdate {
    /// Validate `current` and apply `suffix` to its patch segment.
    ///
    /// # Example
    ///
    /// ```
    /// use ipkit_schema::VersionUpdate;
    ///
    /// let update = VersionUpdate::compute("1.2.3", "007").unwrap();
    /// assert_eq!(update.version.to_string(), "1.2.7");
    /// assert!(update.persist);
    ///
    /// let untouched = VersionUpdate::compute("1.2.3", "  ").unwrap();
    /// assert_eq!(untouched.version.to_string(), "1.2.3");
    /// assert!(!untouched.persist);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidVersion`] if `current` is malformed and
    /// [`SchemaError::InvalidSuffix`] if `suffix` is malformed.
    pub fn compute(current: &str, suffix: &str) -> Result<Self, SchemaError> {
        let version = AppVersion::parse(current)?;

        Ok(match PatchSuffix::parse(suffix)? {
            Some(suffix) => Self {
                version: version.with_patch(suffix.value()),
                persist: true,
            },
            None => Self {
                version,
                persist: false,
            },
        })
    }
}
