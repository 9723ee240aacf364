use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Validation,
    UnknownFilter,
}

/// Rejected job posting input. The message is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn missing_required_fields() -> Self {
        Self::new("Please fill in all required fields")
    }
}

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("unknown filter tag '{0}'")]
    UnknownFilterTag(String),
}

impl DashboardError {
    pub fn code(&self) -> ErrorCode {
        match self {
            DashboardError::Validation(_) => ErrorCode::Validation,
            DashboardError::UnknownFilterTag(_) => ErrorCode::UnknownFilter,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub code: ErrorCode,
    pub message: String,
}

impl From<&DashboardError> for ErrorPayload {
    fn from(value: &DashboardError) -> Self {
        Self {
            code: value.code(),
            message: value.to_string(),
        }
    }
}
