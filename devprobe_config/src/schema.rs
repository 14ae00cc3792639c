use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

// Import DEFAULT_BASE_URL from devprobe_providers to avoid duplication
use devprobe_providers::gemini::DEFAULT_BASE_URL;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    /// Dotenv-style file holding the credential
    #[serde(default = "CheckerConfig::default_env_file")]
    pub env_file: PathBuf,

    /// Line prefix (without `=`) identifying the credential
    #[serde(default = "CheckerConfig::default_key_name")]
    pub key_name: String,

    /// API root; `/models` is appended
    #[serde(default = "CheckerConfig::default_base_url")]
    pub base_url: String,

    /// Request timeout (seconds)
    #[serde(default = "CheckerConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl CheckerConfig {
    fn default_env_file() -> PathBuf {
        PathBuf::from(".env")
    }

    fn default_key_name() -> String {
        "GEMINI_API_KEY".to_string()
    }

    fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_string()
    }

    const fn default_timeout_secs() -> u64 {
        30
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The full line prefix, e.g. `GEMINI_API_KEY=`.
    #[must_use]
    pub fn line_prefix(&self) -> String {
        format!("{}=", self.key_name)
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            env_file: Self::default_env_file(),
            key_name: Self::default_key_name(),
            base_url: Self::default_base_url(),
            timeout_secs: Self::default_timeout_secs(),
        }
    }
}
