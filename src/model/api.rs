use serde::{Deserialize, Serialize};

/// Error body returned by every failed API call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorDto {
    pub error: String,
}

/// Generic confirmation body for operations with nothing else to return.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageDto {
    pub message: String,
}
