use devprobe_config::{CheckerConfig, lookup_file, masked_preview};
use devprobe_providers::{GeminiClient, ListModelsOutcome, ModelCatalog, ModelRecord};
use std::fmt;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// Input parameters for the key check.
#[derive(Debug, Clone, Default)]
pub struct CheckKeyInput {
    pub config: CheckerConfig,
}

/// Terminal state of a key check, rendered as the final report lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyCheckReport {
    /// The configuration file could not be read; no request was made
    ConfigUnreadable { file: PathBuf, error: String },
    /// No usable line for the key; no request was made
    KeyMissing { key_name: String, file: PathBuf },
    Authorized(Vec<ModelRecord>),
    Rejected { status: u16, body: String },
    /// Transport failure or undecodable listing
    CallFailed(String),
}

impl fmt::Display for KeyCheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigUnreadable { file, error } => {
                write!(f, "Error reading {}: {error}", file.display())
            }
            Self::KeyMissing { key_name, file } => {
                write!(f, "{key_name} not found in {}", file.display())
            }
            Self::Authorized(models) => {
                writeln!(f, "SUCCESS: Connected to Gemini API!")?;
                write!(f, "Found {} models.", models.len())?;
                for model in models {
                    write!(f, "\n - {}", model.name)?;
                }
                Ok(())
            }
            Self::Rejected { status, body } => {
                writeln!(f, "FAILED: API Call failed with status {status}")?;
                write!(f, "Response: {body}")
            }
            Self::CallFailed(error) => write!(f, "Error during API call: {error}"),
        }
    }
}

/// Read the credential named by `config`.
///
/// Returns the report to print instead when the file is unreadable or holds
/// no usable value.
pub fn load_credential(config: &CheckerConfig) -> Result<String, KeyCheckReport> {
    match lookup_file(&config.env_file, &config.line_prefix()) {
        Ok(Some(key)) => Ok(key),
        Ok(None) => Err(KeyCheckReport::KeyMissing {
            key_name: config.key_name.clone(),
            file: config.env_file.clone(),
        }),
        Err(e) => Err(KeyCheckReport::ConfigUnreadable {
            file: config.env_file.clone(),
            error: e.to_string(),
        }),
    }
}

/// Run the whole check against `catalog`, writing the report to `out`.
///
/// The masked preview is written before the request is sent.
pub async fn check_key<C, W>(config: &CheckerConfig, catalog: &C, out: &mut W) -> std::io::Result<()>
where
    C: ModelCatalog + ?Sized,
    W: Write,
{
    let key = match load_credential(config) {
        Ok(key) => key,
        Err(report) => {
            warn!("Skipping API call: {report}");
            return writeln!(out, "{report}");
        }
    };

    let preview = masked_preview(&key);
    info!("Loaded credential {preview}");
    writeln!(out, "Testing key: {preview}")?;
    out.flush()?;

    let report = match catalog.list_models(&key).await {
        Ok(ListModelsOutcome::Authorized(models)) => KeyCheckReport::Authorized(models),
        Ok(ListModelsOutcome::Rejected { status, body }) => {
            warn!("Model listing rejected with status {status}");
            KeyCheckReport::Rejected { status, body }
        }
        Err(e) => {
            warn!("Model listing failed: {e}");
            KeyCheckReport::CallFailed(e.to_string())
        }
    };

    writeln!(out, "{report}")
}

/// Strategy for checking a Gemini API key against the live endpoint.
#[derive(Debug, Clone, Copy)]
pub struct CheckKeyStrategy;

impl super::CommandStrategy for CheckKeyStrategy {
    type Input = CheckKeyInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = input.config;
        let client = GeminiClient::new(config.timeout())?.with_base_url(config.base_url.clone());

        let mut stdout = std::io::stdout();
        check_key(&config, &client, &mut stdout).await?;
        Ok(())
    }
}
