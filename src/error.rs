use thiserror::Error;

/// Error types for the dashboard engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// Network or HTTP level failure, including transport timeouts
    #[error("Transport error: {0}")]
    Transport(String),

    /// A response arrived but lacks fields the dashboard consumes
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// The backend process endpoint answered with a non-success status
    #[error("Processing rejected: {0}")]
    ProcessingRejected(String),

    /// The chart backend failed to construct an instance
    #[error("Render error: {0}")]
    Render(String),
}

impl DashboardError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedPayload(message.into())
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(error: serde_json::Error) -> Self {
        DashboardError::MalformedPayload(error.to_string())
    }
}

/// Type alias for Result with DashboardError
pub type Result<T> = std::result::Result<T, DashboardError>;
