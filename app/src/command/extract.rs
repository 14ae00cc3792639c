use devprobe_strings::{DEFAULT_MIN_LEN, extract_file};
use std::io::Write;
use std::path::PathBuf;
use tracing::warn;

pub const USAGE: &str = "Usage: extract_strings <filename>";

/// Input parameters for string extraction.
#[derive(Debug, Clone)]
pub struct ExtractInput {
    /// File to scan; `None` prints usage
    pub path: Option<PathBuf>,
    pub min_len: usize,
    /// Prefix each string with its byte offset
    pub offsets: bool,
}

impl Default for ExtractInput {
    fn default() -> Self {
        Self {
            path: None,
            min_len: DEFAULT_MIN_LEN,
            offsets: false,
        }
    }
}

/// Extract strings as described by `input` and write the report to `out`.
pub async fn extract_strings<W: Write>(input: &ExtractInput, out: &mut W) -> std::io::Result<()> {
    let Some(path) = input.path.as_deref() else {
        return writeln!(out, "{USAGE}");
    };

    match extract_file(path, input.min_len).await {
        Ok(extraction) => out.write_all(extraction.render(input.offsets).as_bytes()),
        Err(e) => {
            warn!("Extraction from {} failed: {e}", path.display());
            writeln!(out, "Error: {e}")
        }
    }
}

/// Strategy for scanning one file for printable strings.
#[derive(Debug, Clone, Copy)]
pub struct ExtractStrategy;

impl super::CommandStrategy for ExtractStrategy {
    type Input = ExtractInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let mut stdout = std::io::stdout();
        extract_strings(&input, &mut stdout).await?;
        stdout.flush()?;
        Ok(())
    }
}
