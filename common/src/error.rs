//! # Lookup Errors
//!
//! Every way a single lookup can fail. The `Display` output of each variant
//! is the exact message shown to the user.

use thiserror::Error;

/// Shown when the API reports success but carries no usable record.
pub const EMPTY_RESULTS_FALLBACK: &str = "VIN not found or invalid response structure from API.";

/// Stands in for a missing `ErrorText` on an API decode error.
pub const DECODE_ERROR_FALLBACK: &str = "Failed to decode VIN.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The normalized input is not 17 characters long. No request is made.
    #[error("Please enter a valid 17-character VIN.")]
    InvalidLength,

    /// Network failure, non-success HTTP status or an unreadable body.
    #[error("Failed to decode VIN. Network or server error: {reason}")]
    Transport { reason: String },

    /// The request succeeded but `Results` was missing or empty.
    #[error("{}", empty_results_message(.message))]
    EmptyResults { message: Option<String> },

    /// The first record carries a non-zero `ErrorCode`.
    #[error(
        "VIN Decode Error ({code}): {} Please check the VIN and try again.",
        .text.as_deref().unwrap_or(DECODE_ERROR_FALLBACK)
    )]
    ApiDecode { code: String, text: Option<String> },
}

impl LookupError {
    pub fn transport(reason: impl ToString) -> Self {
        Self::Transport {
            reason: reason.to_string(),
        }
    }

    pub fn http_status(status: u16) -> Self {
        Self::transport(format!("HTTP error! status: {status}"))
    }
}

fn empty_results_message(message: &Option<String>) -> &str {
    match message.as_deref() {
        Some(message) if !message.is_empty() => message,
        _ => EMPTY_RESULTS_FALLBACK,
    }
}
