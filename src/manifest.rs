//! Manifest assembly and persistence.
//!
//! Steps 2 and 3 of the pipeline. [`assemble`] is pure: it concatenates the
//! per-category scan results in declaration order and stamps the result.
//! [`write_manifest`] replaces whatever is at the output path with the
//! pretty-printed JSON document.
//!
//! The JSON is UTF-8 with two-space indentation. Non-ASCII text (category
//! names, file names) is written literally, not as `\u` escapes.

use crate::scan::CategoryScan;
use crate::types::GalleryManifest;
use chrono::{DateTime, Local};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Cannot serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Cannot write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Combine scan results into one manifest.
///
/// Categories and images keep the order of `scans`; nothing is filtered.
pub fn assemble(scans: &[CategoryScan], generated_at: DateTime<Local>) -> GalleryManifest {
    GalleryManifest {
        generated_at,
        categories: scans.iter().map(|s| s.category.clone()).collect(),
        images: scans.iter().flat_map(|s| s.images.iter().cloned()).collect(),
    }
}

/// Serialize `manifest` and overwrite `path` with it.
pub fn write_manifest(path: &Path, manifest: &GalleryManifest) -> Result<(), WriteError> {
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(path, json).map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        images = manifest.images.len(),
        "wrote manifest to {}",
        path.display()
    );
    Ok(())
}
