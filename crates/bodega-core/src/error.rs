//! # Error Types
//!
//! Typed failures for the bodega domain.
//!
//! ## Where Errors Come From
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                add "Cafe Grano" 12.50                                   │
//! │                        │                                                │
//! │         ┌──────────────┼──────────────────┐                             │
//! │         ▼              ▼                  ▼                             │
//! │   parse_money     Product::new      Inventory::add                      │
//! │         │              │                  │                             │
//! │   Malformed       Empty / TooLong    DuplicateProduct                   │
//! │   (bad text)      NotPositive        ShelfFull                          │
//! │                   OutOfRange              │                             │
//! │         │              │                  │                             │
//! │         └───── ValidationError ────┐      │                             │
//! │                                    ▼      ▼                             │
//! │                                   CatalogError                          │
//! │                                        │                                │
//! │                            propagates out to the prompt                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Messages are lowercase fragments carrying the values they mention, so
//! the prompt can print them after an `error:` prefix without rewording.

use thiserror::Error;

/// Failures raised by shelf rules.
///
/// Functions below the prompt return these; nothing here prints.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Nothing on the shelf carries the requested name.
    /// Lookup is exact, so a spacing or casing difference lands here.
    #[error("no product named '{0}'")]
    NoSuchProduct(String),

    /// The shelf already has a product with this name.
    ///
    /// ```text
    /// add "Cafe Grano" 12.50      shelf: [Cafe Grano]
    /// add "Cafe Grano" 14.00  ──► DuplicateProduct, shelf unchanged
    /// ```
    #[error("'{name}' is already on the shelf")]
    DuplicateProduct { name: String },

    /// The shelf is at capacity.
    #[error("the shelf holds at most {max} products")]
    ShelfFull { max: usize },

    /// A field value broke a rule before any shelf rule ran.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Failures raised when a single field value breaks a stated rule.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Blank where a value was required.
    #[error("{field} must not be empty")]
    Empty { field: String },

    /// Longer than the field allows.
    #[error("{field} is longer than {max} characters")]
    TooLong { field: String, max: usize },

    /// Outside the permitted range.
    #[error("{field} must be between {min} and {max} cents")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Zero or negative where only positive values make sense.
    #[error("{field} must be greater than zero")]
    NotPositive { field: String },

    /// Text that does not parse as the field's type.
    #[error("invalid {field}: {reason}")]
    Malformed { field: String, reason: String },
}

/// Shorthand for results carrying a [`CatalogError`].
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_messages_carry_context() {
        let err = CatalogError::NoSuchProduct("Queso".to_string());
        assert_eq!(err.to_string(), "no product named 'Queso'");

        let err = CatalogError::DuplicateProduct {
            name: "Pan Dulce".to_string(),
        };
        assert_eq!(err.to_string(), "'Pan Dulce' is already on the shelf");

        let err = CatalogError::ShelfFull { max: 1000 };
        assert_eq!(err.to_string(), "the shelf holds at most 1000 products");
    }

    #[test]
    fn test_validation_messages_name_the_field() {
        let err = ValidationError::Empty {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name must not be empty");

        let err = ValidationError::NotPositive {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must be greater than zero");

        let err = ValidationError::Malformed {
            field: "shares".to_string(),
            reason: "must be a whole number".to_string(),
        };
        assert_eq!(err.to_string(), "invalid shares: must be a whole number");
    }

    #[test]
    fn test_wrapped_validation_is_transparent() {
        let inner = ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        };
        let wrapped: CatalogError = inner.into();

        assert!(matches!(wrapped, CatalogError::Validation(_)));
        assert_eq!(wrapped.to_string(), "name is longer than 200 characters");
    }
}
