//! Gallery configuration.
//!
//! The categories, extension allow-list and paths the generator works with
//! are compiled in as [`GalleryConfig::default`]. A TOML file passed with
//! `--config` can override any of them; there is no discovery, the file is
//! only read when named explicitly.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! root = "assets/gallery"          # Gallery root scanned for category folders
//! output = "gallery-config.json"   # Manifest written here
//! public_base = "/assets/gallery"  # Prefix of each image's public path
//! extensions = ["jpg", "jpeg", "png", "webp", "gif"]
//! timestamp = "created"            # "created" (falls back to mtime) or "modified"
//!
//! [[categories]]
//! id = "metalwork"
//! name = "Metalinės konstrukcijos"
//! description = "Metalinių konstrukcijų miltelinis dažymas"
//! folder = "metalines"
//! ```
//!
//! ## Partial Configuration
//!
//! Scalars override individually. Arrays (`extensions`, `categories`) replace
//! the stock value wholesale, so a file that sets `categories` must list all
//! of them in the order they should appear.
//!
//! Unknown keys are rejected to catch typos early.

use crate::types::Category;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Which file-system timestamp feeds [`crate::types::ImageEntry::added`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampSource {
    /// Birth time, falling back to modification time where the platform or
    /// file system does not report one.
    #[default]
    Created,
    /// Modification time.
    Modified,
}

/// Generator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Directory holding one subdirectory per category.
    pub root: PathBuf,
    /// Where the manifest is written.
    pub output: PathBuf,
    /// URL prefix for image paths in the manifest.
    pub public_base: String,
    /// Accepted file extensions, lower-case, without the leading dot.
    pub extensions: Vec<String>,
    pub timestamp: TimestampSource,
    /// Categories in display order.
    pub categories: Vec<Category>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("assets/gallery"),
            output: PathBuf::from("gallery-config.json"),
            public_base: "/assets/gallery".to_string(),
            extensions: ["jpg", "jpeg", "png", "webp", "gif"]
                .iter()
                .map(|e| e.to_string())
                .collect(),
            timestamp: TimestampSource::default(),
            categories: default_categories(),
        }
    }
}

fn category(id: &str, name: &str, description: &str, folder: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        folder: folder.to_string(),
    }
}

fn default_categories() -> Vec<Category> {
    vec![
        category(
            "metalwork",
            "Metalinės konstrukcijos",
            "Metalinių konstrukcijų miltelinis dažymas",
            "metalines",
        ),
        category(
            "furniture",
            "Baldai",
            "Baldų ir interjero detalių dažymas",
            "baldai",
        ),
        category(
            "automotive",
            "Automobilių dalys",
            "Automobilių ir motociklų detalių dažymas",
            "automobiliai",
        ),
        category(
            "industrial",
            "Pramoninė įranga",
            "Pramoninės įrangos ir mechanizmų dažymas",
            "pramone",
        ),
    ]
}

impl GalleryConfig {
    /// Whether `ext` (with or without a leading dot, any case) is accepted.
    pub fn accepts_extension(&self, ext: &str) -> bool {
        let ext = ext.trim_start_matches('.').to_ascii_lowercase();
        self.extensions.iter().any(|e| *e == ext)
    }

    /// Lower-case extensions and strip leading dots so `".JPG"` and `"jpg"`
    /// mean the same thing.
    pub fn normalize(&mut self) {
        for ext in &mut self.extensions {
            *ext = ext.trim_start_matches('.').to_ascii_lowercase();
        }
    }

    /// Validate the category table and extension list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.categories.is_empty() {
            return Err(ConfigError::Validation(
                "categories must not be empty".into(),
            ));
        }
        if self.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "extensions must not be empty".into(),
            ));
        }
        if self.extensions.iter().any(|e| e.is_empty()) {
            return Err(ConfigError::Validation(
                "extensions must not contain empty entries".into(),
            ));
        }

        let mut ids = HashSet::new();
        let mut folders = HashSet::new();
        for cat in &self.categories {
            if cat.id.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "category in folder '{}' has an empty id",
                    cat.folder
                )));
            }
            if !is_single_component(&cat.folder) {
                return Err(ConfigError::Validation(format!(
                    "category '{}' folder must be a single directory name, got '{}'",
                    cat.id, cat.folder
                )));
            }
            if !ids.insert(cat.id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate category id '{}'",
                    cat.id
                )));
            }
            if !folders.insert(cat.folder.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate category folder '{}'",
                    cat.folder
                )));
            }
        }
        Ok(())
    }
}

fn is_single_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// Base layer for merging a user file on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(GalleryConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay, arrays included, replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file as a raw TOML value.
///
/// Unlike directory lookups, a named file that does not exist is an error.
pub fn load_raw_config(path: &Path) -> Result<toml::Value, ConfigError> {
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(value)
}

/// Merge an optional overlay onto a base value, then deserialize, normalize
/// and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<GalleryConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let mut config: GalleryConfig = merged.try_into()?;
    config.normalize();
    config.validate()?;
    Ok(config)
}

/// Load the effective config.
///
/// `None` yields the compiled-in defaults. `Some(path)` merges that file over
/// them.
pub fn load_config(path: Option<&Path>) -> Result<GalleryConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = path.map(load_raw_config).transpose()?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock config file.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Gallery Generator Configuration
# ===============================
# All settings are optional. Values shown below are the defaults.
# Pass this file with --config; it is never picked up automatically.
# Unknown keys will cause an error.

# Directory holding one subdirectory per category.
root = "assets/gallery"

# Manifest output file. Overwritten on every run.
output = "gallery-config.json"

# Prefix of each image's public path: <public_base>/<folder>/<filename>
public_base = "/assets/gallery"

# Accepted file extensions (case-insensitive).
extensions = ["jpg", "jpeg", "png", "webp", "gif"]

# Timestamp used for "added" and newest-first ordering:
#   "created"  - file birth time, modification time where unavailable
#   "modified" - modification time
timestamp = "created"

# ---------------------------------------------------------------------------
# Categories, in display order. Setting this key replaces the whole list.
# Missing folders are created under root on the next run.
# ---------------------------------------------------------------------------
[[categories]]
id = "metalwork"
name = "Metalinės konstrukcijos"
description = "Metalinių konstrukcijų miltelinis dažymas"
folder = "metalines"

[[categories]]
id = "furniture"
name = "Baldai"
description = "Baldų ir interjero detalių dažymas"
folder = "baldai"

[[categories]]
id = "automotive"
name = "Automobilių dalys"
description = "Automobilių ir motociklų detalių dažymas"
folder = "automobiliai"

[[categories]]
id = "industrial"
name = "Pramoninė įranga"
description = "Pramoninės įrangos ir mechanizmų dažymas"
folder = "pramone"
"##
}
