//! Wire types for the roast endpoint plus the error taxonomy shown to the user.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::mode::RoastMode;

pub const VALIDATION_MESSAGE: &str = "Please tell us something about yourself first!";
pub const NO_ROAST_MESSAGE: &str = "No roast returned.";
pub const SERVER_FALLBACK_MESSAGE: &str = "Failed to generate roast";
pub const GENERIC_FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";

/// Body of `POST /api/roast`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RoastRequest {
    /// Already trimmed user text.
    pub input: String,
    pub mode: RoastMode,
}

impl RoastRequest {
    /// Builds a request from raw input, trimming it.
    /// Returns `None` when nothing is left after trimming.
    pub fn from_input(raw: &str, mode: RoastMode) -> Option<Self> {
        let input = raw.trim();
        if input.is_empty() {
            return None;
        }
        Some(Self {
            input: input.to_string(),
            mode,
        })
    }
}

/// Successful response body. `roast` may be missing.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RoastResponse {
    #[serde(default)]
    pub roast: Option<String>,
}

impl RoastResponse {
    /// The text to display, with the "nothing came back" fallback.
    pub fn into_display_text(self) -> String {
        match self.roast {
            Some(text) if !text.is_empty() => text,
            _ => NO_ROAST_MESSAGE.to_string(),
        }
    }
}

/// Error body sent alongside a non-2xx status.
#[derive(Deserialize, Debug, Default)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Errors that can occur while fetching a roast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoastError {
    /// Backend answered with a non-success status.
    Server {
        status: u16,
        message: Option<String>,
    },
    /// Request never got a response (connection refused, DNS, reset).
    Network(String),
    /// Response arrived but was not the JSON we expect.
    Parse(String),
}

impl RoastError {
    /// The single string the error panel shows for this error.
    pub fn user_message(&self) -> String {
        match self {
            RoastError::Server { message, .. } => match message {
                Some(msg) if !msg.is_empty() => msg.clone(),
                _ => SERVER_FALLBACK_MESSAGE.to_string(),
            },
            RoastError::Network(msg) | RoastError::Parse(msg) => {
                if msg.trim().is_empty() {
                    GENERIC_FALLBACK_MESSAGE.to_string()
                } else {
                    msg.clone()
                }
            }
        }
    }
}

impl fmt::Display for RoastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoastError::Server { status, message } => write!(
                f,
                "server error (HTTP {status}): {}",
                message.as_deref().unwrap_or("no message")
            ),
            RoastError::Network(msg) => write!(f, "network error: {msg}"),
            RoastError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for RoastError {}
