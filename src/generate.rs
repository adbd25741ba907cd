//! The scan → assemble → write pipeline.
//!
//! [`generate`] is everything the binary does apart from printing. It returns
//! a [`GenerateReport`] describing what was found so presentation can live in
//! [`crate::output`].

use crate::config::GalleryConfig;
use crate::manifest::{self, WriteError};
use crate::scan::{self, CategoryScan, ScanError};
use chrono::{DateTime, Local};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Per-category line of a [`GenerateReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
    pub folder: String,
    pub image_count: usize,
    pub created_folder: bool,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub categories: Vec<CategorySummary>,
    pub total_images: usize,
    /// Manifest file that was written.
    pub output: PathBuf,
}

impl GenerateReport {
    fn from_scans(scans: &[CategoryScan], output: PathBuf) -> Self {
        let categories: Vec<CategorySummary> = scans
            .iter()
            .map(|s| CategorySummary {
                id: s.category.id.clone(),
                name: s.category.name.clone(),
                folder: s.category.folder.clone(),
                image_count: s.images.len(),
                created_folder: s.created_folder,
            })
            .collect();
        let total_images = categories.iter().map(|c| c.image_count).sum();
        Self {
            categories,
            total_images,
            output,
        }
    }
}

/// Scan the gallery, assemble the manifest stamped with `generated_at`, and
/// write it to `config.output`.
///
/// The output file is only touched after the scan succeeds.
pub fn generate(
    config: &GalleryConfig,
    generated_at: DateTime<Local>,
) -> Result<GenerateReport, GenerateError> {
    let scans = scan::scan(config)?;
    let manifest = manifest::assemble(&scans, generated_at);
    manifest::write_manifest(&config.output, &manifest)?;
    Ok(GenerateReport::from_scans(&scans, config.output.clone()))
}
