//! Single-key lookup over a flat `KEY=value` file.
//!
//! Only the first line starting with the requested prefix is consulted; no
//! quoting, interpolation or `export` handling is performed.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Find the value of the first line in `reader` that starts with `prefix`.
///
/// The value is everything after the first `=` on that line, trimmed. A match
/// whose trimmed value is empty counts as absent.
pub fn find_value<R: BufRead>(reader: R, prefix: &str) -> io::Result<Option<String>> {
    for line in reader.lines() {
        let line = line?;
        if !line.starts_with(prefix) {
            continue;
        }

        let value = line
            .split_once('=')
            .map_or("", |(_, rest)| rest)
            .trim()
            .to_string();

        return Ok(Some(value).filter(|v| !v.is_empty()));
    }

    Ok(None)
}

/// Open `path` and look up `prefix` in it.
pub fn lookup_file(path: &Path, prefix: &str) -> io::Result<Option<String>> {
    debug!("Reading credential from {}", path.display());
    let file = File::open(path)?;
    find_value(BufReader::new(file), prefix)
}

/// Render `secret` as its first 6 and last 4 characters joined by `...`.
#[must_use]
pub fn masked_preview(secret: &str) -> String {
    let head: String = secret.chars().take(6).collect();
    let count = secret.chars().count();
    let tail: String = secret.chars().skip(count.saturating_sub(4)).collect();
    format!("{head}...{tail}")
}
