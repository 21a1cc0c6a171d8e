//! # Inspector Attribute Configuration
//!
//! Parses `attrs.toml` — the declarative config for how feature properties
//! surface in the inspector: which attribute names are hidden and which
//! text properties carry calendar dates.
//!
//! ## Table of Contents
//! 1. AttrsConfig — top-level config
//! 2. HiddenConfig — fields omitted from the inspector
//! 3. DatesConfig — text properties parsed as dates
//! 4. Lookups
//! 5. Parsing

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// 1. AttrsConfig — top-level config
// ============================================================================

/// Top-level inspector attribute configuration, parsed from `attrs.toml`.
/// Every section is defaulted, so an empty file is a valid config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttrsConfig {
    /// Fields omitted from the inspector
    #[serde(default)]
    pub hidden: HiddenConfig,
    /// Text properties parsed as calendar dates
    #[serde(default)]
    pub dates: DatesConfig,
}

// ============================================================================
// 2. HiddenConfig — fields omitted from the inspector
// ============================================================================

/// Which attribute names the inspector omits
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HiddenConfig {
    /// Case-insensitive exact name matches (e.g., "objectid", "shape_leng")
    #[serde(default)]
    pub names: Vec<String>,
    /// Hide every field whose name starts with this prefix (e.g., "_")
    #[serde(default)]
    pub prefix: Option<String>,
}

// ============================================================================
// 3. DatesConfig — text properties parsed as dates
// ============================================================================

/// Which text properties are parsed as dates, and with what format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatesConfig {
    /// Property names whose text values hold dates
    #[serde(default)]
    pub fields: Vec<String>,
    /// chrono format string used for parsing
    #[serde(default = "default_date_format")]
    pub format: String,
}

impl Default for DatesConfig {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            format: default_date_format(),
        }
    }
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

// ============================================================================
// 4. Lookups
// ============================================================================

impl AttrsConfig {
    /// Whether the inspector omits a field with this name
    pub fn is_hidden(&self, name: &str) -> bool {
        if self.hidden.names.iter().any(|n| n.eq_ignore_ascii_case(name)) {
            return true;
        }
        match &self.hidden.prefix {
            Some(prefix) => !prefix.is_empty() && name.starts_with(prefix.as_str()),
            None => false,
        }
    }

    /// Whether text values of this property are parsed as dates
    pub fn is_date_field(&self, name: &str) -> bool {
        self.dates.fields.iter().any(|n| n.eq_ignore_ascii_case(name))
    }

    // ========================================================================
    // 5. Parsing
    // ========================================================================

    /// Load an AttrsConfig from an `attrs.toml` file path
    pub fn load(path: &Path) -> Result<Self, AttrsConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AttrsConfigError::Io(path.to_path_buf(), e))?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| AttrsConfigError::Parse(path.to_path_buf(), e))?;
        tracing::info!("Loaded attrs config from {}", path.display());
        Ok(config)
    }

    /// Parse from TOML text; an empty document yields the defaults
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Errors from loading attrs.toml
#[derive(Debug, Error)]
pub enum AttrsConfigError {
    /// File I/O error
    #[error("Failed to read {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),
    /// TOML parse error
    #[error("Failed to parse {}: {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config = AttrsConfig::from_toml_str("").unwrap();
        assert!(config.hidden.names.is_empty());
        assert!(config.hidden.prefix.is_none());
        assert!(config.dates.fields.is_empty());
        assert_eq!(config.dates.format, "%Y-%m-%d");
    }

    #[test]
    fn test_hidden_names_match_case_insensitively() {
        let config = AttrsConfig::from_toml_str(
            r#"
            [hidden]
            names = ["OBJECTID", "shape_leng"]
            "#,
        )
        .unwrap();
        assert!(config.is_hidden("objectid"));
        assert!(config.is_hidden("Shape_Leng"));
        assert!(!config.is_hidden("area"));
    }

    #[test]
    fn test_hidden_prefix() {
        let config = AttrsConfig::from_toml_str(
            r#"
            [hidden]
            prefix = "_"
            "#,
        )
        .unwrap();
        assert!(config.is_hidden("_internal"));
        assert!(!config.is_hidden("area"));
    }

    #[test]
    fn test_date_field_lookup() {
        let config = AttrsConfig::from_toml_str(
            r#"
            [dates]
            fields = ["surveyed"]
            format = "%d/%m/%Y"
            "#,
        )
        .unwrap();
        assert!(config.is_date_field("Surveyed"));
        assert!(!config.is_date_field("area"));
        assert_eq!(config.dates.format, "%d/%m/%Y");
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("attrs.toml");
        std::fs::write(&path, "[hidden]\nnames = [\"objectid\"]\n").unwrap();

        let config = AttrsConfig::load(&path).unwrap();
        assert!(config.is_hidden("objectid"));
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            AttrsConfig::load(&missing),
            Err(AttrsConfigError::Io(_, _))
        ));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[hidden\nnames = 3").unwrap();
        assert!(matches!(
            AttrsConfig::load(&bad),
            Err(AttrsConfigError::Parse(_, _))
        ));
    }
}
