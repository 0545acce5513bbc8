//! JSON response envelope.
//!
//! Every command prints exactly one `{success, errors?, friends?, count?}`
//! envelope to stdout; optional fields are omitted when absent.

use serde::Serialize;

/// Response envelope rendered for every command.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    /// Whether the operation succeeded
    pub success: bool,

    /// Error message when the operation failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<String>,

    /// Friends list for query operations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friends: Option<Vec<String>>,

    /// Number of friends returned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl ApiResponse {
    /// A bare success envelope.
    pub fn ok() -> Self {
        Self {
            success: true,
            errors: None,
            friends: None,
            count: None,
        }
    }

    /// A success envelope carrying a friends list and its count.
    pub fn with_friends(friends: Vec<String>) -> Self {
        Self {
            success: true,
            errors: None,
            count: Some(friends.len()),
            friends: Some(friends),
        }
    }

    /// A failure envelope carrying the error message.
    pub fn error(err: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            errors: Some(err.to_string()),
            friends: None,
            count: None,
        }
    }
}
