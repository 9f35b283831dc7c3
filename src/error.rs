use thiserror::Error;

/// Failures of a single page analysis
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Invalid URL provided")]
    InvalidUrl,

    #[error("Target site is blocking automated access (HTTP {status})")]
    BlockedByTarget { status: u16 },

    #[error("HTTP Error: {status} {status_text}")]
    HttpError { status: u16, status_text: String },

    #[error("Failed to fetch page: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl AnalysisError {
    /// Build the error for a non-success response status
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        match status.as_u16() {
            403 | 429 => AnalysisError::BlockedByTarget {
                status: status.as_u16(),
            },
            code => AnalysisError::HttpError {
                status: code,
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            },
        }
    }
}
