use thiserror::Error;

/// Body text returned to callers whenever the upstream fetch fails.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to retrieve space data";

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Upstream request failed: {message}")]
    UpstreamError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        ServiceError::UpstreamError {
            message: err.to_string(),
        }
    }
}

impl ServiceError {
    #[cfg(test)]
    pub fn is_upstream(&self) -> bool {
        matches!(self, ServiceError::UpstreamError { .. })
    }

    /// Short message for the terminal, without internal detail.
    pub fn user_friendly_message(&self) -> String {
        match self {
            ServiceError::UpstreamError { .. } => UPSTREAM_FAILURE_MESSAGE.to_string(),
            ServiceError::IoError(e) => format!("I/O problem: {}", e),
            ServiceError::ConfigError { message } => format!("Configuration problem: {}", message),
            ServiceError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            ServiceError::MissingConfigError { field } => {
                format!("Missing setting '{}'", field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
