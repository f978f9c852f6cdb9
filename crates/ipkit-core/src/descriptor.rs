//! Application and package descriptors.
//!
//! `appinfo.json` is kept as a raw JSON map so that a version rewrite
//! preserves every other key, and their order, byte-for-byte modulo
//! formatting. Typed access goes through [`AppInfo::identity`].

use crate::error::{ReleaseError, Result};
use crate::json;
use ipkit_schema::{AppVersion, REQUIRED_APPINFO_KEYS};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// An application descriptor loaded from disk.
#[derive(Debug, Clone)]
pub struct AppInfo {
    path: PathBuf,
    fields: Map<String, Value>,
}

/// The typed fields of an application descriptor.
///
/// `app_description` defaults to `None` when the key is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppIdentity {
    /// `id`
    pub id: String,
    /// `version`, not yet checked against the version grammar.
    pub version: String,
    /// `type`
    pub app_type: String,
    /// `title`
    pub title: String,
    /// `appDescription`
    pub app_description: Option<String>,
}

impl AppInfo {
    /// Load a descriptor.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is unreadable, not JSON, or not an object.
    pub fn load(path: &Path) -> Result<Self> {
        let fields = json::read_object(path)?;
        tracing::debug!(path = %path.display(), keys = fields.len(), "loaded appinfo");
        Ok(Self {
            path: path.to_path_buf(),
            fields,
        })
    }

    #[cfg(test)]
    fn from_fields(path: impl Into<PathBuf>, fields: Map<String, Value>) -> Self {
        Self {
            path: path.into(),
            fields,
        }
    }

    /// Fail with every absent key from `keys` listed in one error.
    ///
    /// # Errors
    ///
    /// Returns [`ReleaseError::MissingKeys`] when at least one key is absent.
    pub fn require_keys(&self, keys: &[&'static str]) -> Result<()> {
        let missing: Vec<&'static str> = keys
            .iter()
            .copied()
            .filter(|key| !self.fields.contains_key(*key))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ReleaseError::MissingKeys {
                path: self.path.clone(),
                keys: missing,
            })
        }
    }

    /// A string-valued key, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`ReleaseError::NotAString`] if the key holds another JSON type.
    pub fn optional_str(&self, key: &'static str) -> Result<Option<&str>> {
        match self.fields.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(_) => Err(ReleaseError::NotAString {
                path: self.path.clone(),
                key,
            }),
        }
    }

    /// A required string-valued key.
    ///
    /// # Errors
    ///
    /// Returns [`ReleaseError::MissingKeys`] or [`ReleaseError::NotAString`].
    pub fn str_field(&self, key: &'static str) -> Result<&str> {
        self.require_keys(&[key])?;
        self.optional_str(key)?.ok_or_else(|| ReleaseError::MissingKeys {
            path: self.path.clone(),
            keys: vec![key],
        })
    }

    /// The `id` key.
    ///
    /// # Errors
    ///
    /// See [`AppInfo::str_field`].
    pub fn id(&self) -> Result<&str> {
        self.str_field("id")
    }

    /// The raw `version` key.
    ///
    /// # Errors
    ///
    /// See [`AppInfo::str_field`].
    pub fn version(&self) -> Result<&str> {
        self.str_field("version")
    }

    /// Typed view of the keys a manifest needs.
    ///
    /// # Errors
    ///
    /// Returns [`ReleaseError::MissingKeys`] listing every absent key among
    /// `id`, `version`, `type` and `title`, or [`ReleaseError::NotAString`].
    pub fn identity(&self) -> Result<AppIdentity> {
        self.require_keys(&REQUIRED_APPINFO_KEYS)?;

        Ok(AppIdentity {
            id: self.str_field("id")?.to_string(),
            version: self.str_field("version")?.to_string(),
            app_type: self.str_field("type")?.to_string(),
            title: self.str_field("title")?.to_string(),
            app_description: self.optional_str("appDescription")?.map(str::to_string),
        })
    }

    /// Replace the `version` value in memory, keeping its key position.
    pub fn set_version(&mut self, version: AppVersion) {
        self.fields
            .insert("version".to_string(), Value::String(version.to_string()));
    }

    /// Persist the whole descriptor back to the file it was loaded from.
    ///
    /// # Errors
    ///
    /// Returns [`ReleaseError::Encode`] or [`ReleaseError::Write`].
    pub fn save(&self) -> Result<()> {
        json::write_pretty(&self.path, &self.fields, json::DESCRIPTOR_INDENT)?;
        tracing::info!(path = %self.path.display(), "rewrote appinfo");
        Ok(())
    }
}

/// The read-only package descriptor (`package.json`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageInfo {
    /// Raw description text; empty when the key is absent or `null`.
    pub description: String,
}

impl PackageInfo {
    /// Load a package descriptor, keeping only its description.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is unreadable, not JSON, or not an object.
    pub fn load(path: &Path) -> Result<Self> {
        let fields = json::read_object(path)?;
        Ok(Self::from_fields(&fields))
    }

    /// Absent and `null` descriptions both read as empty, so they render as
    /// `description=` and never as a placeholder like `None` or `null`.
    /// Other non-string values are rendered as compact JSON text (`true`,
    /// `3`, `["a"]`).
    fn from_fields(fields: &Map<String, Value>) -> Self {
        let description = match fields.get("description") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        };
        Self { description }
    }
}
