use thiserror::Error;

/// Failure talking to the REST backend
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {collection} failed: {source}")]
    Transport {
        collection: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{collection} responded with {status} {reason}")]
    Status {
        collection: &'static str,
        status: u16,
        reason: String,
    },
}

impl ApiError {
    /// HTTP status when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport { source, .. } => source.status().map(|s| s.as_u16()),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
