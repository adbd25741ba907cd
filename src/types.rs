//! Types serialized into `gallery-config.json`.
//!
//! The website fetches this file directly, so field names here are the wire
//! format. Reading a manifest back must produce the same values that were
//! written; every type derives `PartialEq` so whole manifests can be compared.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A logical grouping of images backed by one folder under the gallery root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Category {
    /// Stable identifier referenced by [`ImageEntry::category`].
    pub id: String,
    /// Display name shown on the website.
    pub name: String,
    pub description: String,
    /// Folder name under the gallery root (a single path component).
    pub folder: String,
}

/// One image file discovered in a category folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub filename: String,
    /// Public URL path: `<public_base>/<folder>/<filename>`.
    pub path: String,
    /// Owning category id.
    pub category: String,
    pub category_name: String,
    /// Display title. Currently the category name.
    pub title: String,
    /// File size in bytes.
    pub size: u64,
    /// Best-effort creation time from file-system metadata.
    ///
    /// Birth time where the platform reports it, modification time otherwise
    /// (see [`crate::config::TimestampSource`]). Not a stable ordering key
    /// across file systems.
    pub added: DateTime<Local>,
}

/// Root document written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryManifest {
    pub generated_at: DateTime<Local>,
    /// Categories in declaration order.
    pub categories: Vec<Category>,
    /// Images grouped by category in declaration order, newest first within
    /// each category.
    pub images: Vec<ImageEntry>,
}
