//! # Gallery Gen
//!
//! Builds the `gallery-config.json` manifest a static website uses to render
//! its photo gallery. The filesystem is the data source: each category has a
//! folder under the gallery root, and every image dropped into that folder
//! shows up in the manifest on the next run.
//!
//! # Architecture: Three-Step Pipeline
//!
//! ```text
//! 1. Scan      assets/gallery/  →  per-category image lists
//! 2. Assemble  categories + lists  →  GalleryManifest
//! 3. Write     GalleryManifest  →  gallery-config.json
//! ```
//!
//! Scanning and assembling never print; [`generate::generate`] returns a
//! structured report and the binary renders it with [`output`]. The manifest
//! is rebuilt from scratch on every run and replaces the previous file.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Compiled-in categories and paths, optional TOML override file |
//! | [`scan`] | Step 1: lists category folders, builds image entries newest first |
//! | [`manifest`] | Steps 2 and 3: assembles the manifest and writes the JSON |
//! | [`generate`] | Runs the pipeline and produces a [`generate::GenerateReport`] |
//! | [`types`] | The serialized manifest types |
//! | [`output`] | CLI output formatting for reports and failures |
//!
//! # Timestamps
//!
//! An image's `added` time comes from file-system metadata, birth time where
//! available. It drives the newest-first order but is only best effort:
//! copying a folder, restoring a backup or checking out a repository resets
//! it, and some file systems do not record it at all.

pub mod config;
pub mod generate;
pub mod manifest;
pub mod output;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
