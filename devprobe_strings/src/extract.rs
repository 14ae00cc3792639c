use std::fmt::Write as _;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

use crate::scanner::{ExtractedString, StringScanner};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{0}")]
    Read(#[from] std::io::Error),
}

/// Strings found in one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Source name as given by the caller
    pub source: String,
    pub strings: Vec<ExtractedString>,
}

impl Extraction {
    #[must_use]
    pub fn header(&self) -> String {
        format!("--- Extracted Strings from {} ---", self.source)
    }

    /// Header line followed by one line per string, each newline terminated.
    ///
    /// With `with_offsets`, each string is preceded by its decimal byte
    /// offset right aligned to 8 columns.
    #[must_use]
    pub fn render(&self, with_offsets: bool) -> String {
        let mut out = self.header();
        out.push('\n');
        for s in &self.strings {
            if with_offsets {
                let _ = writeln!(out, "{:>8} {s}", s.offset);
            } else {
                let _ = writeln!(out, "{s}");
            }
        }
        out
    }
}

/// Read `path` fully and scan it.
///
/// The read completes before any scanning, so a failed read yields no
/// partial result.
pub async fn extract_file(path: &Path, min_len: usize) -> Result<Extraction, ExtractError> {
    let scanner = StringScanner::new(min_len);

    info!("Reading file: {}", path.display());
    let data = tokio::fs::read(path).await?;
    debug!("Read {} bytes, scanning with min_len={}", data.len(), scanner.min_len());

    let strings = scanner.scan(&data);
    info!("Found {} strings in {}", strings.len(), path.display());

    Ok(Extraction {
        source: path.display().to_string(),
        strings,
    })
}
