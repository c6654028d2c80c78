//! # Domain Types
//!
//! The product record for Bodega.
//!
//! ## Construction Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Construction                                 │
//! │                                                                         │
//! │  Product::new(name, price)                                             │
//! │       │                                                                 │
//! │       ├── name empty/too long? ──► Err(ValidationError)                │
//! │       │                                                                 │
//! │       ├── price <= 0 or > ceiling? ──► Err(ValidationError)            │
//! │       │                                                                 │
//! │       └── OK ──► Product { name, price, added_at: now }                │
//! │                                                                         │
//! │  Fields are private. If a Product exists, its invariants hold.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_price, validate_product_name};

// =============================================================================
// Product
// =============================================================================

/// A single product on the shelf.
///
/// ## Design Notes
/// - Fields are private; `Product::new` is the only way to build one, so a
///   value in hand always passed validation
/// - `Deserialize` is not derived: data coming in from outside must go
///   through `new` like everything else
/// - `added_at` is captured when the product is shelved and never changes
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    /// Display name, unique within an inventory
    name: String,

    /// Shelf price (always positive, at most the price ceiling)
    price: Money,

    /// When the product was shelved
    added_at: DateTime<Utc>,
}

impl Product {
    /// Creates a new product, validating name and price.
    ///
    /// ## Rules
    /// - Name must be non-empty after trimming and at most 200 characters.
    ///   A valid name is stored exactly as given.
    /// - Price must be positive and no more than [`crate::MAX_PRICE_CENTS`].
    ///
    /// ## Example
    /// ```rust
    /// use bodega_core::money::Money;
    /// use bodega_core::types::Product;
    ///
    /// let product = Product::new("Cafe Grano", Money::from_cents(1250)).unwrap();
    /// assert_eq!(product.name(), "Cafe Grano");
    /// assert_eq!(product.price().cents(), 1250);
    ///
    /// assert!(Product::new("", Money::from_cents(1250)).is_err());
    /// assert!(Product::new("Cafe Grano", Money::zero()).is_err());
    /// ```
    pub fn new(name: impl Into<String>, price: Money) -> Result<Product, ValidationError> {
        let name = name.into();

        validate_product_name(&name)?;
        validate_price(price)?;

        Ok(Product {
            name,
            price,
            added_at: Utc::now(),
        })
    }

    /// The product's display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The shelf price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// When the product was shelved.
    #[inline]
    pub fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_PRICE_CENTS;

    #[test]
    fn test_valid_construction_preserves_values() {
        let product = Product::new("Cafe Grano 500g", Money::from_cents(1250)).unwrap();
        assert_eq!(product.name(), "Cafe Grano 500g");
        assert_eq!(product.price().cents(), 1250);
    }

    #[test]
    fn test_name_stored_exactly_as_given() {
        // Emptiness is judged on the trimmed form, but a valid name keeps
        // its surrounding whitespace untouched
        let product = Product::new("  Leche  ", Money::from_cents(200)).unwrap();
        assert_eq!(product.name(), "  Leche  ");
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = Product::new("", Money::from_cents(100)).unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));

        let err = Product::new("   ", Money::from_cents(100)).unwrap_err();
        assert!(matches!(err, ValidationError::Empty { .. }));
    }

    #[test]
    fn test_overlong_name_rejected() {
        let err = Product::new("A".repeat(201), Money::from_cents(100)).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { .. }));
    }

    #[test]
    fn test_non_positive_price_rejected() {
        let err = Product::new("Leche", Money::zero()).unwrap_err();
        assert!(matches!(err, ValidationError::NotPositive { .. }));

        let err = Product::new("Leche", Money::from_cents(-250)).unwrap_err();
        assert!(matches!(err, ValidationError::NotPositive { .. }));
    }

    #[test]
    fn test_price_ceiling() {
        assert!(Product::new("Caviar", Money::from_cents(MAX_PRICE_CENTS)).is_ok());

        let err = Product::new("Caviar", Money::from_cents(MAX_PRICE_CENTS + 1)).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
    }

    #[test]
    fn test_product_serializes_for_snapshots() {
        let product = Product::new("Cafe Grano", Money::from_cents(1250)).unwrap();
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["name"], "Cafe Grano");
        assert_eq!(json["price"], 1250);
        assert!(json["added_at"].is_string());
    }
}
