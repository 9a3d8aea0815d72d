use thiserror::Error;

/// Failures of remote work. Always reported as a status line, never fatal.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("authentication error: {0}")]
    Auth(String),

    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("too many redirects while resolving {0}")]
    TooManyRedirects(String),

    #[error("please enter a script")]
    EmptyScript,

    #[error("please enter both username and password")]
    MissingCredentials,
}

pub type Result<T> = std::result::Result<T, RemoteError>;
