//! Gallery directory scanning.
//!
//! Step 1 of the pipeline. Looks at one folder per configured category under
//! the gallery root and turns every image file found there into an
//! [`ImageEntry`].
//!
//! ## Directory Structure
//!
//! ```text
//! assets/gallery/                  # Gallery root (must exist)
//! ├── metalines/                   # One folder per category
//! │   ├── gate.jpg
//! │   ├── railing.webp
//! │   └── notes.txt                # Ignored: extension not allowed
//! ├── baldai/                      # Empty folder: zero images
//! └── automobiliai/                # Missing folders are created
//! ```
//!
//! Only immediate children are considered; nested directories are ignored.
//! File contents are never read.
//!
//! ## Ordering
//!
//! Each category's entries are ordered newest first by their `added`
//! timestamp. That timestamp comes from file-system metadata and is a
//! best-effort signal: birth time is not reported everywhere, and copying or
//! restoring files resets it. Entries are sorted by file name before the
//! (stable) timestamp sort, so equal timestamps come out in file-name order.
//!
//! ## Errors
//!
//! A missing gallery root is fatal ([`ScanError::MissingRoot`]), and so is a
//! category folder that cannot be created or listed ([`ScanError::Io`]).
//! Anything wrong with a single file (unknown extension, unreadable metadata)
//! skips that file.

use crate::config::{GalleryConfig, TimestampSource};
use crate::types::{Category, ImageEntry};
use chrono::{DateTime, Local};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Gallery root not found: {}", .0.display())]
    MissingRoot(PathBuf),
    #[error("Cannot read category folder {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Scan result for one category.
#[derive(Debug, Clone)]
pub struct CategoryScan {
    pub category: Category,
    /// Entries newest first.
    pub images: Vec<ImageEntry>,
    /// True when the category folder did not exist and was created by this scan.
    pub created_folder: bool,
}

/// Scan every configured category folder under `config.root`.
///
/// Results are in category declaration order. Missing category folders are
/// created; running twice against the same tree never fails because a folder
/// already exists.
pub fn scan(config: &GalleryConfig) -> Result<Vec<CategoryScan>, ScanError> {
    if !config.root.is_dir() {
        return Err(ScanError::MissingRoot(config.root.clone()));
    }

    config
        .categories
        .iter()
        .map(|category| scan_category(config, category))
        .collect()
}

fn scan_category(config: &GalleryConfig, category: &Category) -> Result<CategoryScan, ScanError> {
    let folder = config.root.join(&category.folder);
    let created_folder = ensure_folder(&folder)?;

    let mut images: Vec<ImageEntry> = collect_images(&folder, config)?
        .into_iter()
        .filter_map(|(path, meta)| build_entry(&path, &meta, category, config))
        .collect();
    sort_newest_first(&mut images);

    tracing::debug!(
        category = %category.id,
        images = images.len(),
        "scanned {}",
        folder.display()
    );

    Ok(CategoryScan {
        category: category.clone(),
        images,
        created_folder,
    })
}

/// Create `folder` if needed. Returns whether it had to be created.
fn ensure_folder(folder: &Path) -> Result<bool, ScanError> {
    if folder.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(folder).map_err(|source| ScanError::Io {
        path: folder.to_path_buf(),
        source,
    })?;
    tracing::info!("created missing category folder {}", folder.display());
    Ok(true)
}

/// Immediate child files of `folder` with an accepted extension, in file-name
/// order, paired with their metadata.
///
/// A folder that cannot be listed is an error: treating it as empty would
/// publish a manifest missing every image in it. Children whose metadata
/// cannot be read are skipped.
fn collect_images(
    folder: &Path,
    config: &GalleryConfig,
) -> Result<Vec<(PathBuf, fs::Metadata)>, ScanError> {
    let mut images = Vec::new();

    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let path = match entry {
            Ok(entry) => entry.into_path(),
            Err(err) if err.depth() == 0 => {
                return Err(ScanError::Io {
                    path: folder.to_path_buf(),
                    source: io::Error::from(err),
                });
            }
            Err(err) => {
                tracing::warn!("skipping unreadable entry in {}: {err}", folder.display());
                continue;
            }
        };

        if !is_image(&path, config) {
            tracing::debug!("skipping {}: extension not allowed", path.display());
            continue;
        }
        let meta = match fs::metadata(&path) {
            Ok(meta) => meta,
            Err(err) => {
                tracing::warn!("skipping {}: {err}", path.display());
                continue;
            }
        };
        if meta.is_dir() {
            tracing::debug!("skipping {}: directory", path.display());
            continue;
        }
        images.push((path, meta));
    }

    Ok(images)
}

fn is_image(path: &Path, config: &GalleryConfig) -> bool {
    path.extension()
        .map(|e| config.accepts_extension(&e.to_string_lossy()))
        .unwrap_or(false)
}

/// Build the manifest entry for one file, or `None` if it has no usable
/// timestamp.
fn build_entry(
    path: &Path,
    meta: &fs::Metadata,
    category: &Category,
    config: &GalleryConfig,
) -> Option<ImageEntry> {
    let added = match file_timestamp(meta, config.timestamp) {
        Ok(added) => added,
        Err(err) => {
            tracing::warn!("skipping {}: no usable timestamp: {err}", path.display());
            return None;
        }
    };
    let filename = path.file_name()?.to_string_lossy().into_owned();

    Some(ImageEntry {
        path: public_path(&config.public_base, &category.folder, &filename),
        filename,
        category: category.id.clone(),
        category_name: category.name.clone(),
        title: category.name.clone(),
        size: meta.len(),
        added,
    })
}

/// Timestamp used for `added`.
///
/// [`TimestampSource::Created`] falls back to the modification time when the
/// platform or file system does not record birth time.
pub fn file_timestamp(
    meta: &fs::Metadata,
    source: TimestampSource,
) -> io::Result<DateTime<Local>> {
    let time = match source {
        TimestampSource::Created => meta.created().or_else(|_| meta.modified())?,
        TimestampSource::Modified => meta.modified()?,
    };
    Ok(time.into())
}

/// `<base>/<folder>/<filename>` with exactly one slash at each join.
pub fn public_path(base: &str, folder: &str, filename: &str) -> String {
    format!("{}/{}/{}", base.trim_end_matches('/'), folder, filename)
}

/// Stable sort, newest `added` first.
pub fn sort_newest_first(images: &mut [ImageEntry]) {
    images.sort_by(|a, b| b.added.cmp(&a.added));
}
