use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("API error: status {status}")]
    Api {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("Resource not found: {path}")]
    NotFound {
        path: String,
        message: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Network,
    Api,
    NotFound,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation(_) => ErrorKind::Validation,
            AppError::Network(_) => ErrorKind::Network,
            AppError::Api { .. } => ErrorKind::Api,
            AppError::NotFound { .. } => ErrorKind::NotFound,
        }
    }

    /// Message suitable for showing to the user. The backend's own `error`
    /// body text wins over the caller's fallback; transport failures and
    /// bodyless responses fall back. The request path stays in the Display
    /// form for logs and never reaches the user.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Api { message: Some(msg), .. } => msg.clone(),
            AppError::Api { message: None, .. } => fallback.to_string(),
            AppError::Network(_) => fallback.to_string(),
            AppError::NotFound { message: Some(msg), .. } => msg.clone(),
            AppError::NotFound { message: None, .. } => fallback.to_string(),
        }
    }
}
