use thiserror::Error;

pub type SyncResult<T> = Result<T, SyncError>;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("{var} environment variable not set")]
    MissingCredentials { var: String },

    #[error("Design API rate limit reached (HTTP 429). Wait a minute and run again.")]
    RateLimited,

    #[error("Design API request failed: {0}")]
    Remote(#[from] reqwest::Error),

    #[error("Design API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Node {id} missing from API response")]
    NodeNotFound { id: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SyncError {
    pub fn missing_credentials(var: impl Into<String>) -> Self {
        Self::MissingCredentials { var: var.into() }
    }

    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    pub fn node_not_found(id: impl Into<String>) -> Self {
        Self::NodeNotFound { id: id.into() }
    }
}
