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
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod gemini;

pub use error::{GeminiError, Result};
pub use gemini::GeminiClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A model entry as returned by the listing endpoint.
///
/// Only `name` is required; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Body of a successful listing response. A missing `models` key means none.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelListing {
    #[serde(default)]
    pub models: Vec<ModelRecord>,
}

/// Result of a completed listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListModelsOutcome {
    /// HTTP 200 with a decoded listing
    Authorized(Vec<ModelRecord>),
    /// Any other status, with the body kept verbatim
    Rejected { status: u16, body: String },
}

/// Remote service able to list the models a credential can see.
#[async_trait]
pub trait ModelCatalog: Send + Sync {
    /// Issue one listing request authenticated with `api_key`.
    ///
    /// A non-200 status is reported as [`ListModelsOutcome::Rejected`], not as
    /// an error. Errors cover transport failures and undecodable 200 bodies.
    async fn list_models(&self, api_key: &str) -> Result<ListModelsOutcome>;
}
