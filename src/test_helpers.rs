//! Shared test utilities for the gallery-gen test suite.
//!
//! Builds throwaway gallery trees in a temp directory and provides lookups
//! over scan results and manifests that panic with a useful message on miss.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let (tmp, config) = gallery_fixture();
//! add_image(&config, "metalines", "gate.jpg");
//!
//! let scans = scan(&config).unwrap();
//! assert_eq!(filenames(&find_scan(&scans, "metalwork").images), vec!["gate.jpg"]);
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

use crate::config::GalleryConfig;
use crate::scan::CategoryScan;
use crate::types::{GalleryManifest, ImageEntry};

// =========================================================================
// Fixture setup
// =========================================================================

/// Create `<tmp>/assets/gallery` and a default config pointing at it.
///
/// The output path is `<tmp>/gallery-config.json`. No category folders are
/// created; tests add the ones they need.
pub fn gallery_fixture() -> (TempDir, GalleryConfig) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("assets/gallery");
    fs::create_dir_all(&root).unwrap();
    let config = GalleryConfig {
        root,
        output: tmp.path().join("gallery-config.json"),
        ..Default::default()
    };
    (tmp, config)
}

/// Write a placeholder file into a category folder, creating the folder.
///
/// Scanning only reads metadata, so the content is never decoded.
pub fn add_image(config: &GalleryConfig, folder: &str, name: &str) -> PathBuf {
    let dir = config.root.join(folder);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, "fake image").unwrap();
    path
}

/// Like [`add_image`], then pin the modification time to `secs` after the
/// Unix epoch so ordering tests do not depend on wall-clock timing.
pub fn add_image_at(config: &GalleryConfig, folder: &str, name: &str, secs: u64) -> PathBuf {
    let path = add_image(config, folder, name);
    let file = fs::File::options().write(true).open(&path).unwrap();
    file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
        .unwrap();
    path
}

/// Drop all permissions on `dir`. Returns `false` if it can still be listed
/// (running as root), in which case the caller should skip its assertions.
#[cfg(unix)]
pub fn make_unreadable(dir: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(dir, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::read_dir(dir).is_ok() {
        make_readable(dir);
        return false;
    }
    true
}

/// Restore `dir` after [`make_unreadable`] so the temp dir can be removed.
#[cfg(unix)]
pub fn make_readable(dir: &Path) {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(dir, fs::Permissions::from_mode(0o755)).unwrap();
}

// =========================================================================
// Manifests
// =========================================================================

/// Parse a written manifest back. Panics on I/O or JSON errors.
pub fn read_manifest(path: &Path) -> GalleryManifest {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("invalid manifest {}: {e}", path.display()))
}

/// Copy of `manifest` with `generated_at` taken from `other`, for comparing
/// two runs on everything else.
pub fn with_generated_at_of(
    manifest: &GalleryManifest,
    other: &GalleryManifest,
) -> GalleryManifest {
    GalleryManifest {
        generated_at: other.generated_at,
        ..manifest.clone()
    }
}

/// Number of manifest images in category `id`.
pub fn image_count(manifest: &GalleryManifest, id: &str) -> usize {
    manifest.images.iter().filter(|i| i.category == id).count()
}

// =========================================================================
// Lookups: panic with a clear message on miss
// =========================================================================

/// Find a category scan by category id. Panics if not found.
pub fn find_scan<'a>(scans: &'a [CategoryScan], id: &str) -> &'a CategoryScan {
    scans
        .iter()
        .find(|s| s.category.id == id)
        .unwrap_or_else(|| {
            let ids: Vec<&str> = scans.iter().map(|s| s.category.id.as_str()).collect();
            panic!("category '{id}' not found. Available: {ids:?}")
        })
}

/// Find an image in a manifest by filename. Panics if not found.
pub fn find_entry<'a>(manifest: &'a GalleryManifest, filename: &str) -> &'a ImageEntry {
    manifest
        .images
        .iter()
        .find(|i| i.filename == filename)
        .unwrap_or_else(|| {
            let names = filenames(&manifest.images);
            panic!("image '{filename}' not found. Available: {names:?}")
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// Filenames in order.
pub fn filenames(images: &[ImageEntry]) -> Vec<&str> {
    images.iter().map(|i| i.filename.as_str()).collect()
}

/// Category ids of a manifest in order.
pub fn category_ids(manifest: &GalleryManifest) -> Vec<&str> {
    manifest.categories.iter().map(|c| c.id.as_str()).collect()
}
