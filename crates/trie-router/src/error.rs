//! Error types for route registration and route tables.
//!
//! Match outcomes (404/405) are not errors; see [`crate::Match`].

use thiserror::Error;

/// Router-specific errors.
#[derive(Debug, Error)]
pub enum RouterError {
    /// Two registrations named the parameter slot at the same position differently.
    #[error("parameter ':{requested}' in '{pattern}' conflicts with ':{existing}' at the same position")]
    ParamConflict {
        /// The pattern whose registration was refused.
        pattern: String,
        /// The name already recorded on the slot.
        existing: String,
        /// The name the refused pattern asked for.
        requested: String,
    },

    /// IO error while reading a route table.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Route table contents are not a valid table.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for router operations.
pub type Result<T> = std::result::Result<T, RouterError>;
