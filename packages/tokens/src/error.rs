use thiserror::Error;

pub type TokenResult<T> = Result<T, TokenError>;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token source not found: {path}")]
    SourceNotFound { path: String },

    #[error("Duplicate variable name: {name}")]
    DuplicateName { name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid token source: {0}")]
    Json(#[from] serde_json::Error),
}

impl TokenError {
    pub fn source_not_found(path: impl Into<String>) -> Self {
        Self::SourceNotFound { path: path.into() }
    }

    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }
}
