//! Error types for the helium-config library

use thiserror::Error;

/// Result type alias for helium-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the helium-config library
#[derive(Error, Debug)]
pub enum Error {
    // -------------------------------------------------------------------------
    // Schema Authoring Errors
    // -------------------------------------------------------------------------
    #[error("Configuration page has no fields")]
    EmptyPage,

    #[error("Duplicate message key '{0}' in configuration page")]
    DuplicateMessageKey(String),

    #[error("Invalid message key '{key}': {reason}")]
    InvalidMessageKey { key: String, reason: String },

    #[error("Toggle '{0}' has an empty label")]
    EmptyToggleLabel(String),

    #[error("Section at position {0} has no items")]
    EmptySection(usize),

    // -------------------------------------------------------------------------
    // Saved-Settings Resolution Errors
    // -------------------------------------------------------------------------
    #[error("Unknown message key: {0}")]
    UnknownMessageKey(String),

    #[error("Type mismatch for {key}: expected {expected}, got {actual}")]
    TypeMismatch {
        key: String,
        expected: String,
        actual: String,
    },

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Failed to serialize configuration page: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Check if this is a schema authoring defect (caught by validation)
    #[must_use]
    pub fn is_authoring(&self) -> bool {
        matches!(
            self,
            Error::EmptyPage
                | Error::DuplicateMessageKey(_)
                | Error::InvalidMessageKey { .. }
                | Error::EmptyToggleLabel(_)
                | Error::EmptySection(_)
        )
    }

    /// Check if this error came from resolving saved settings
    #[must_use]
    pub fn is_resolution(&self) -> bool {
        matches!(
            self,
            Error::UnknownMessageKey(_) | Error::TypeMismatch { .. }
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
