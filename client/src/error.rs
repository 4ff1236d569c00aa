use thiserror::Error;
use typedex_protocol::ParseError;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to parse response from {url}")]
    Parse {
        url: String,
        #[source]
        source: ParseError,
    },

    #[error("All {attempted} {resource} requests failed")]
    BatchFailed {
        resource: &'static str,
        attempted: usize,
        #[source]
        last_error: Box<FetchError>,
    },
}

impl FetchError {
    /// Transport errors, 5xx and 429 are worth another attempt
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Http(_) => true,
            FetchError::Status { status, .. } => *status >= 500 || *status == 429,
            FetchError::Parse { .. } | FetchError::BatchFailed { .. } => false,
        }
    }
}
