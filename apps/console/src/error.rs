//! # Command Error Type
//!
//! Unified error type for console commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Bodega                                  │
//! │                                                                         │
//! │  Prompt                      Command Layer                              │
//! │  ──────                      ─────────────                              │
//! │                                                                         │
//! │  bodega> add Milk 0                                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Handler Function                                                │  │
//! │  │  Result<String, CommandError>                                    │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Validation? ── ValidationError::NotPositive ──────┐             │  │
//! │  │         │                                          │             │  │
//! │  │         ▼                                          ▼             │  │
//! │  │  Inventory rule? ── CatalogError ─────────── CommandError ─────► │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄──────────────────────────────────────────────────────────────────   │
//! │                                                                         │
//! │  error: price must be greater than zero                                 │
//! │  bodega>                                                                │
//! │                                                                         │
//! │  Handlers never print. The prompt loop is the only reporter.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Core error messages arrive prompt-ready, so conversion classifies them
//! under an [`ErrorCode`] and passes the text through unchanged.

use bodega_core::{CatalogError, ValidationError};

/// Error surfaced at the prompt when a command fails.
#[derive(Debug, Clone)]
pub struct CommandError {
    /// Stable failure class, for tests and callers that branch
    pub code: ErrorCode,

    /// What the user reads after `error:`
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The named product is not on the shelf
    NotFound,

    /// A field failed validation
    ValidationError,

    /// A whole-shelf rule refused the operation
    InventoryError,

    /// The command line itself was malformed
    UsageError,

    /// Unexpected internal failure
    Internal,
}

impl CommandError {
    /// Creates a new command error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CommandError {
            code,
            message: message.into(),
        }
    }

    /// Creates a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        CommandError::new(ErrorCode::UsageError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        CommandError::new(ErrorCode::Internal, message)
    }
}

/// Classifies catalog errors; the message text passes through as-is.
impl From<CatalogError> for CommandError {
    fn from(err: CatalogError) -> Self {
        let code = match &err {
            CatalogError::NoSuchProduct(_) => ErrorCode::NotFound,
            CatalogError::DuplicateProduct { .. } => ErrorCode::ValidationError,
            CatalogError::ShelfFull { .. } => ErrorCode::InventoryError,
            CatalogError::Validation(_) => ErrorCode::ValidationError,
        };
        CommandError::new(code, err.to_string())
    }
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::new(ErrorCode::ValidationError, err.to_string())
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for CommandError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_classification() {
        let err: CommandError = CatalogError::NoSuchProduct("Pan".to_string()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "no product named 'Pan'");

        let err: CommandError = CatalogError::DuplicateProduct {
            name: "Pan".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "'Pan' is already on the shelf");

        let err: CommandError = CatalogError::ShelfFull { max: 1000 }.into();
        assert_eq!(err.code, ErrorCode::InventoryError);
        assert_eq!(err.message, "the shelf holds at most 1000 products");
    }

    #[test]
    fn test_wrapped_validation_error_keeps_the_inner_message() {
        let inner = ValidationError::NotPositive {
            field: "price".to_string(),
        };
        let err: CommandError = CatalogError::from(inner).into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "price must be greater than zero");
    }

    #[test]
    fn test_validation_error_mapping() {
        let err: CommandError = ValidationError::NotPositive {
            field: "price".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "price must be greater than zero");
    }

    #[test]
    fn test_display_includes_code_and_message() {
        let err = CommandError::usage("usage: add <name> <price>");
        assert_eq!(err.to_string(), "[UsageError] usage: add <name> <price>");
    }
}
