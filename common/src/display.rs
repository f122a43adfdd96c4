//! # Display State
//!
//! What the user sees after a lookup. Results and error are never visible at
//! the same time: each state carries exactly one of them, or neither.

use serde::Serialize;

use crate::error::LookupError;

/// Placeholder rendered for any field the API left blank.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleSummary {
    pub country: String,
    pub manufacturer: String,
    pub description: String,
    pub model_year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DisplayState {
    /// Nothing shown yet, or a lookup is in progress.
    #[default]
    Idle,
    Results(VehicleSummary),
    Error { message: String },
}

impl DisplayState {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub fn results_visible(&self) -> bool {
        matches!(self, Self::Results(_))
    }

    pub fn error_visible(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    pub fn summary(&self) -> Option<&VehicleSummary> {
        match self {
            Self::Results(summary) => Some(summary),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }
}

impl From<Result<VehicleSummary, LookupError>> for DisplayState {
    fn from(outcome: Result<VehicleSummary, LookupError>) -> Self {
        match outcome {
            Ok(summary) => Self::Results(summary),
            Err(err) => Self::error(err.to_string()),
        }
    }
}
