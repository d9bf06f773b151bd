//! Batch processing of a document directory.
//!
//! Discovers rendering-layer dumps in an input directory, derives an
//! outline per document, and writes one artifact per non-absent result
//! using the source filename's stem. A failing document is logged and
//! skipped; the rest of the run continues.

use crate::config::OutlineConfig;
use crate::error::Result;
use crate::model::DocumentInput;
use crate::outline::build_outline;
use std::fs;
use std::path::{Path, PathBuf};

/// Counts for one batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Documents discovered and attempted
    pub processed: usize,

    /// Artifacts written
    pub written: usize,

    /// Documents that yielded no lines (no artifact, not an error)
    pub skipped: usize,

    /// Documents that failed to parse or process
    pub failed: usize,
}

/// Discover document dumps (`.json`, case-insensitive) in a directory,
/// non-recursively, sorted by file name for reproducible runs.
pub fn discover_documents(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut documents = Vec::new();

    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let is_document = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_document {
            documents.push(path);
        }
    }

    documents.sort();
    Ok(documents)
}

/// Process one document dump, writing the outline artifact next to the
/// source stem under `output_dir`.
///
/// Returns the written path, or `None` when the document yielded no lines
/// and therefore no artifact.
pub fn process_file(
    path: &Path,
    output_dir: &Path,
    config: &OutlineConfig,
) -> Result<Option<PathBuf>> {
    let data = fs::read_to_string(path)?;
    let doc: DocumentInput = serde_json::from_str(&data)?;

    let result = match build_outline(&doc, config)? {
        Some(result) => result,
        None => {
            log::info!("{}: no lines extracted, skipping output", path.display());
            return Ok(None);
        },
    };

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "document".to_string());
    let out_path = output_dir.join(format!("{}.json", stem));

    fs::write(&out_path, serde_json::to_string_pretty(&result)?)?;
    Ok(Some(out_path))
}

/// Run the batch driver over a directory.
///
/// Creates both directories if missing, processes every discovered
/// document in file-name order, and isolates failures at the document
/// boundary: a malformed dump is counted and logged, never fatal to the
/// run. Discovery problems (an unreadable input directory) are fatal.
pub fn run(input_dir: &Path, output_dir: &Path, config: &OutlineConfig) -> Result<BatchSummary> {
    fs::create_dir_all(input_dir)?;
    fs::create_dir_all(output_dir)?;

    let documents = discover_documents(input_dir)?;
    let mut summary = BatchSummary::default();

    if documents.is_empty() {
        log::warn!("no documents found in {}", input_dir.display());
        return Ok(summary);
    }

    for path in &documents {
        summary.processed += 1;
        log::info!("processing {}", path.display());

        match process_file(path, output_dir, config) {
            Ok(Some(out_path)) => {
                summary.written += 1;
                log::info!("wrote {}", out_path.display());
            },
            Ok(None) => summary.skipped += 1,
            Err(e) => {
                summary.failed += 1;
                log::warn!("{}: {}", path.display(), e);
            },
        }
    }

    Ok(summary)
}
