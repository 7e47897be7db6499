//! # NetVault Error Handling
//!
//! This crate provides a unified error type for the NetVault platform.
//! It uses `thiserror` for ergonomic error definitions and supports conversion
//! to `anyhow::Error` for application code.
//!
//! ## Features
//!
//! - **Comprehensive Error Variants**: Covers the error categories that occur
//!   across inventory, serialization, and backup workflows
//! - **Error Categorization**: Helper methods to classify errors (client errors,
//!   missing resources)
//! - **Type Safety**: Strong typing with thiserror-derived implementations
//! - **Context Chaining**: Works seamlessly with anyhow's context system
//!
//! ## Usage
//!
//! ```rust
//! use netvault_error::{NetvaultError, Result};
//!
//! fn operation() -> Result<String> {
//!     Err(NetvaultError::not_found("device", "core-router-01"))
//! }
//!
//! // Convert to anyhow for application code
//! use anyhow::Context;
//!
//! fn app_code() -> anyhow::Result<()> {
//!     let _value = operation().context("failed to look up device");
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the NetVault platform.
///
/// This enum covers all error categories that can occur across NetVault
/// components. It implements `std::error::Error` via thiserror and can be
/// converted to `anyhow::Error`.
#[derive(Error, Debug)]
pub enum NetvaultError {
    /// Configuration-related errors (invalid config, missing fields, etc.)
    #[error("configuration error: {0}")]
    Config(String),

    /// IO errors (file operations, missing files, write failures, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors (encoding failures, wrong shapes, etc.)
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Parse errors (malformed JSON/CSV documents)
    #[error("parse error: {0}")]
    Parse(String),

    /// Resource not found errors
    #[error("{resource_type} not found: {resource_id}")]
    NotFound {
        resource_type: String,
        resource_id: String,
    },

    /// Invalid input validation errors
    #[error("invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    /// Backup workflow errors
    #[error("backup error: {0}")]
    Backup(String),

    /// Internal errors (bugs, unexpected states, etc.)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Type alias for Results using NetvaultError
pub type Result<T> = std::result::Result<T, NetvaultError>;

// Conversion from serde_json::Error, split between document-level parse
// failures and value-level serialization failures.
impl From<serde_json::Error> for NetvaultError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_eof() {
            NetvaultError::Parse(err.to_string())
        } else {
            NetvaultError::Serialization(err.to_string())
        }
    }
}

// Optional feature: CSV errors
#[cfg(feature = "csv")]
impl From<csv::Error> for NetvaultError {
    fn from(err: csv::Error) -> Self {
        let msg = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => NetvaultError::Io(io_err),
            _ => NetvaultError::Parse(format!("CSV error: {msg}")),
        }
    }
}

impl NetvaultError {
    /// Determines if this error is a client error (4xx-equivalent).
    ///
    /// Client errors indicate that the request was invalid and should not
    /// be retried without modification.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            NetvaultError::Config(_)
                | NetvaultError::InvalidInput { .. }
                | NetvaultError::NotFound { .. }
                | NetvaultError::Parse(_)
                | NetvaultError::Serialization(_)
        )
    }

    /// Determines if this error is a missing-resource error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            NetvaultError::NotFound { .. } => true,
            NetvaultError::Io(err) => err.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }

    // ==========================================
    // Convenience constructors
    // ==========================================

    /// Creates a not found error
    #[must_use]
    pub fn not_found(resource_type: impl Into<String>, resource_id: impl Into<String>) -> Self {
        NetvaultError::NotFound {
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
        }
    }

    /// Creates an invalid input error
    #[must_use]
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        NetvaultError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a configuration error
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        NetvaultError::Config(msg.into())
    }

    /// Creates a serialization error
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        NetvaultError::Serialization(msg.into())
    }

    /// Creates a parse error
    #[must_use]
    pub fn parse(msg: impl Into<String>) -> Self {
        NetvaultError::Parse(msg.into())
    }

    /// Creates a backup error
    #[must_use]
    pub fn backup(msg: impl Into<String>) -> Self {
        NetvaultError::Backup(msg.into())
    }

    /// Creates an internal error
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        NetvaultError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_implements_std_error() {
        let err = NetvaultError::Internal("test".to_string());
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<NetvaultError>();
        assert_sync::<NetvaultError>();
    }

    #[test]
    fn test_result_alias() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }
        assert!(returns_result().is_ok());
    }

    #[test]
    fn test_client_errors() {
        assert!(NetvaultError::not_found("device", "sw-01").is_client_error());
        assert!(NetvaultError::invalid_input("hostname", "empty").is_client_error());
        assert!(!NetvaultError::Internal("bug".into()).is_client_error());
        assert!(!NetvaultError::backup("disk full").is_client_error());
    }

    #[test]
    fn test_not_found_detection() {
        assert!(NetvaultError::not_found("device", "sw-01").is_not_found());

        let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(NetvaultError::Io(missing).is_not_found());

        let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no");
        assert!(!NetvaultError::Io(denied).is_not_found());
    }

    #[test]
    fn test_json_error_classification() {
        let syntax = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(NetvaultError::from(syntax), NetvaultError::Parse(_)));

        let data = serde_json::from_str::<u32>("\"text\"").unwrap_err();
        assert!(matches!(
            NetvaultError::from(data),
            NetvaultError::Serialization(_)
        ));
    }
}
