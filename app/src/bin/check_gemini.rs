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
use devprobe::command::{CheckKeyInput, CheckKeyStrategy, CommandStrategy};
use devprobe_config::CheckerConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "check_gemini", version)]
#[command(about = "Check that the Gemini API key in a dotenv file works", long_about = None)]
struct Cli {
    /// Dotenv file holding the key
    #[arg(long, value_name = "PATH")]
    env_file: Option<PathBuf>,

    /// Name of the key line to read
    #[arg(long, value_name = "NAME")]
    key_name: Option<String>,

    /// API root the `/models` path is appended to
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,
}

impl Cli {
    fn into_config(self) -> CheckerConfig {
        let defaults = CheckerConfig::default();
        CheckerConfig {
            env_file: self.env_file.unwrap_or(defaults.env_file),
            key_name: self.key_name.unwrap_or(defaults.key_name),
            base_url: self.base_url.unwrap_or(defaults.base_url),
            timeout_secs: self.timeout.unwrap_or(defaults.timeout_secs),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    devprobe::logging::init()?;

    let cli = Cli::parse();
    let input = CheckKeyInput {
        config: cli.into_config(),
    };

    CheckKeyStrategy.execute(input).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_keeps_defaults() {
        let config = Cli::try_parse_from(["check_gemini"]).unwrap().into_config();
        assert_eq!(config, CheckerConfig::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = Cli::try_parse_from([
            "check_gemini",
            "--env-file",
            "config/dev.env",
            "--timeout",
            "5",
        ])
        .unwrap()
        .into_config();

        let defaults = CheckerConfig::default();
        assert_eq!(config.env_file, PathBuf::from("config/dev.env"));
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.key_name, defaults.key_name);
        assert_eq!(config.base_url, defaults.base_url);
    }

    #[test]
    fn test_key_name_and_base_url_flags() {
        let config = Cli::try_parse_from([
            "check_gemini",
            "--key-name",
            "GOOGLE_API_KEY",
            "--base-url",
            "http://localhost:8080/v1beta",
        ])
        .unwrap()
        .into_config();

        assert_eq!(config.key_name, "GOOGLE_API_KEY");
        assert_eq!(config.line_prefix(), "GOOGLE_API_KEY=");
        assert_eq!(config.base_url, "http://localhost:8080/v1beta");
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        assert!(Cli::try_parse_from(["check_gemini", "--timeout", "soon"]).is_err());
    }
}
