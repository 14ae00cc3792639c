#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]

use clap::Parser;
use devprobe::command::{CommandStrategy, ExtractInput, ExtractStrategy};
use devprobe_strings::DEFAULT_MIN_LEN;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "extract_strings", version)]
#[command(about = "Print runs of printable ASCII found in a binary file", long_about = None)]
struct Cli {
    /// File to scan
    filename: Option<PathBuf>,

    /// Minimum run length
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_MIN_LEN,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    min_len: usize,

    /// Prefix each string with its decimal byte offset
    #[arg(long)]
    offsets: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    devprobe::logging::init()?;

    let cli = Cli::parse();
    let input = ExtractInput {
        path: cli.filename,
        min_len: cli.min_len,
        offsets: cli.offsets,
    };

    ExtractStrategy.execute(input).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_len_zero_is_rejected() {
        assert!(Cli::try_parse_from(["extract_strings", "-n", "0", "f"]).is_err());
    }

    #[test]
    fn test_min_len_and_offsets_parse() {
        let cli = Cli::try_parse_from(["extract_strings", "-n", "2", "--offsets", "f"]).unwrap();
        assert_eq!(cli.min_len, 2);
        assert!(cli.offsets);
        assert_eq!(cli.filename, Some(PathBuf::from("f")));
    }

    #[test]
    fn test_defaults_without_filename() {
        let cli = Cli::try_parse_from(["extract_strings"]).unwrap();
        assert_eq!(cli.filename, None);
        assert_eq!(cli.min_len, DEFAULT_MIN_LEN);
        assert!(!cli.offsets);
    }

    #[test]
    fn test_large_min_len_is_accepted() {
        let cli = Cli::try_parse_from(["extract_strings", "--min-len", "1000000", "f"]).unwrap();
        assert_eq!(cli.min_len, 1_000_000);
    }
}
