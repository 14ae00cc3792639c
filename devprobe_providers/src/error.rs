use std::error::Error as _;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeminiError>;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),

    /// Rendered with its whole cause chain, e.g.
    /// `error sending request: client error (Connect): tcp connect error: ...`
    #[error("{}", cause_chain(.0))]
    Transport(reqwest::Error),

    #[error("invalid model listing: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GeminiError {
    /// Wrap a request failure, dropping the URL so the query-string key is
    /// never rendered.
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        Self::Transport(err.without_url())
    }
}

/// Join `err` and each of its sources with `": "`, skipping a source whose
/// text repeats the previous one.
fn cause_chain(err: &reqwest::Error) -> String {
    let mut rendered = err.to_string();
    let mut last = rendered.clone();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if text != last && !last.ends_with(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        last = text;
        source = cause.source();
    }
    rendered
}
