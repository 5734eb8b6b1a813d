//! Site configuration for the asset helpers.
//!
//! The helpers never look configuration up globally; callers load an
//! [`AssetConfig`] once and pass it where it is needed.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ErrorCode, HelperResult};

/// Site configuration.
///
/// ```json
/// {
///   "base_url": "http://www.example.org/project/",
///   "base_title": "Example",
///   "document_root": "/var/www",
///   "script_name": "/project/index.php",
///   "paths": { "css": "assets/css", "js": "assets/js" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Public base URL, with its trailing slash
    pub base_url: String,
    /// Site title used by [`AssetConfig::title`]
    pub base_title: String,
    /// Server document root
    pub document_root: String,
    /// Path of the front-controller script below the document root
    pub script_name: String,
    /// Named asset directories, relative to the site root
    pub paths: BTreeMap<String, String>,
}

impl AssetConfig {
    /// Load configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> HelperResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ErrorCode::E300_ConfigUnreadable(format!("{}: {}", path.display(), e))
        })?;
        let config = Self::from_json_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            paths = config.paths.len(),
            "loaded asset config"
        );
        Ok(config)
    }

    /// Parse configuration from JSON text.
    pub fn from_json_str(content: &str) -> HelperResult<Self> {
        serde_json::from_str(content).map_err(|e| ErrorCode::E301_ConfigInvalid(e.to_string()))
    }

    /// Look up a named path. Missing, empty and `"0"` entries count as unset.
    pub fn item(&self, name: &str) -> Option<&str> {
        self.paths
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty() && *v != "0")
    }

    /// The configured directory for `kind`, or `kind` itself when unset.
    pub fn resolve<'a>(&'a self, kind: &'a str) -> &'a str {
        self.item(kind).unwrap_or(kind)
    }
}
