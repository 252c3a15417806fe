//! Error response body shape.

use serde::{Deserialize, Serialize};

/// The `{"message": ...}` body returned on every JSON error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    // Common error constructors
    pub fn not_found() -> Self {
        Self::new("Not Found")
    }

    pub fn server_error() -> Self {
        Self::new("Server error")
    }
}
