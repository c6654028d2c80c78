//! # Inventory
//!
//! The store shelf: an insertion-ordered list of products, unique by name.
//!
//! ## Inventory Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Inventory Operations                                 │
//! │                                                                         │
//! │  Console Command          Operation              Inventory Change       │
//! │  ───────────────          ─────────              ────────────────       │
//! │                                                                         │
//! │  add "Cafe" 12.50 ───────► add(product) ────────► products.push(..)    │
//! │                                                                         │
//! │  remove Cafe ────────────► remove("Cafe") ──────► products.remove(i)   │
//! │                                                                         │
//! │  find Cafe ──────────────► get("Cafe") ─────────► (read only)          │
//! │                                                                         │
//! │  list / total ───────────► products(), total_value() (read only)       │
//! │                                                                         │
//! │  NOTE: add() rejects duplicates and leaves the shelf untouched.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CatalogError, CatalogResult};
use crate::money::Money;
use crate::types::Product;
use crate::MAX_PRODUCTS;

/// The store inventory.
///
/// ## Invariants
/// - Product names are unique (exact string equality)
/// - Enumeration order is shelving (insertion) order
/// - Holds at most `MAX_PRODUCTS` products
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    /// Creates a new empty inventory.
    pub fn new() -> Self {
        Inventory {
            products: Vec::new(),
        }
    }

    /// Shelves a product.
    ///
    /// ## Behavior
    /// - A name already on the shelf is rejected with `DuplicateProduct`
    ///   and the inventory is left unchanged
    /// - Adding beyond `MAX_PRODUCTS` is rejected with `ShelfFull`
    ///
    /// ## Example
    /// ```rust
    /// use bodega_core::inventory::Inventory;
    /// use bodega_core::money::Money;
    /// use bodega_core::types::Product;
    ///
    /// let mut inventory = Inventory::new();
    /// inventory.add(Product::new("Leche", Money::from_cents(250)).unwrap()).unwrap();
    ///
    /// let duplicate = Product::new("Leche", Money::from_cents(300)).unwrap();
    /// assert!(inventory.add(duplicate).is_err());
    /// assert_eq!(inventory.len(), 1);
    /// ```
    pub fn add(&mut self, product: Product) -> CatalogResult<()> {
        if self.contains(product.name()) {
            return Err(CatalogError::DuplicateProduct {
                name: product.name().to_string(),
            });
        }

        if self.products.len() >= MAX_PRODUCTS {
            return Err(CatalogError::ShelfFull { max: MAX_PRODUCTS });
        }

        self.products.push(product);
        Ok(())
    }

    /// Looks up a product by exact name.
    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name() == name)
    }

    /// Checks whether a name is already shelved.
    pub fn contains(&self, name: &str) -> bool {
        self.products.iter().any(|p| p.name() == name)
    }

    /// Takes a product off the shelf and returns it.
    ///
    /// ## Behavior
    /// - Returns `NoSuchProduct` if no product carries the name
    pub fn remove(&mut self, name: &str) -> CatalogResult<Product> {
        match self.products.iter().position(|p| p.name() == name) {
            Some(index) => Ok(self.products.remove(index)),
            None => Err(CatalogError::NoSuchProduct(name.to_string())),
        }
    }

    /// Returns the number of products on the shelf.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the shelf is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products in shelving order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Total value of everything on the shelf.
    pub fn total_value(&self) -> Money {
        self.products.iter().map(|p| p.price()).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
