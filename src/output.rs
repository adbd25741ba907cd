//! CLI output formatting.
//!
//! Output is information-first: each category leads with its positional
//! index and display name, and the folder it was read from follows as an
//! indented `Source:` line.
//!
//! # Output Format
//!
//! ```text
//! Categories
//! 001 Metalinės konstrukcijos (2 photos)
//!     Source: metalines/
//! 002 Baldai (0 photos)
//!     Source: baldai/ (created)
//!
//! Total: 2 photos
//! Wrote gallery-config.json
//! ```
//!
//! # Architecture
//!
//! Each `format_*` function returns `Vec<String>` and does no I/O; the
//! `print_*` wrappers write to stdout (failures to stderr).

use crate::config::GalleryConfig;
use crate::generate::GenerateReport;
use std::error::Error;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Positional index + name, with optional photo count.
///
/// ```text
/// 001 Baldai (5 photos)
/// 001 Baldai
/// ```
fn entity_header(index: usize, title: &str, count: Option<usize>) -> String {
    match count {
        Some(n) => format!("{} {} ({} photos)", format_index(index), title, n),
        None => format!("{} {}", format_index(index), title),
    }
}

/// Folder path with a trailing slash, as shown in `Source:` lines.
fn folder_display(folder: &str) -> String {
    format!("{}/", folder.trim_end_matches('/'))
}

// ============================================================================
// Run report
// ============================================================================

/// Format the outcome of a successful run.
pub fn format_report(report: &GenerateReport) -> Vec<String> {
    let mut lines = vec!["Categories".to_string()];

    for (i, cat) in report.categories.iter().enumerate() {
        lines.push(entity_header(i + 1, &cat.name, Some(cat.image_count)));
        let created = if cat.created_folder { " (created)" } else { "" };
        lines.push(format!("    Source: {}{}", folder_display(&cat.folder), created));
    }

    lines.push(String::new());
    lines.push(format!("Total: {} photos", report.total_images));
    lines.push(format!("Wrote {}", report.output.display()));
    lines
}

/// Print the run report to stdout.
pub fn print_report(report: &GenerateReport) {
    for line in format_report(report) {
        println!("{}", line);
    }
}

/// Instructions for adding photos, one line per category folder.
pub fn format_next_steps(config: &GalleryConfig) -> Vec<String> {
    let mut lines = vec![
        "Adding photos".to_string(),
        "    Copy images into their category folder:".to_string(),
    ];
    for cat in &config.categories {
        let folder = config.root.join(&cat.folder);
        lines.push(format!(
            "        {}  {}",
            folder_display(&folder.to_string_lossy()),
            cat.name
        ));
    }
    lines.push(format!(
        "    Then run gallery-gen again and publish {}",
        config.output.display()
    ));
    lines
}

/// Print the "adding photos" hints to stdout.
pub fn print_next_steps(config: &GalleryConfig) {
    for line in format_next_steps(config) {
        println!("{}", line);
    }
}

// ============================================================================
// Failure
// ============================================================================

/// Failure banner followed by the error's source chain, one cause per line.
pub fn format_failure(err: &dyn Error) -> Vec<String> {
    let mut lines = vec![format!("Error: {}", err)];
    let mut source = err.source();
    while let Some(cause) = source {
        lines.push(format!("    Caused by: {}", cause));
        source = cause.source();
    }
    lines
}

/// Print the failure banner to stderr.
pub fn print_failure(err: &dyn Error) {
    for line in format_failure(err) {
        eprintln!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
