//! # bodega-core: Pure Domain Logic for Bodega
//!
//! This crate is the **heart** of Bodega. It contains all domain logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bodega Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console (apps/console)                       │   │
//! │  │    bodega> add "Cafe Grano" 12.50                               │   │
//! │  │    bodega> list · find · remove · total · split · export       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ parse + dispatch                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bodega-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ inventory │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │ Inventory │  │   rules   │  │   │
//! │  │   │           │  │MoneySplit │  │           │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CONSOLE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The Product record with validated construction
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`inventory`] - The store shelf (unique names, insertion order)
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation and money parsing
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Console, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use bodega_core::inventory::Inventory;
//! use bodega_core::money::Money;
//! use bodega_core::types::Product;
//!
//! let mut inventory = Inventory::new();
//!
//! // Construction validates; a Product in hand is always well-formed
//! let product = Product::new("Cafe Grano", Money::from_cents(1250))?;
//! inventory.add(product)?;
//!
//! assert_eq!(inventory.len(), 1);
//! assert_eq!(inventory.total_value().cents(), 1250);
//! # Ok::<(), bodega_core::error::CatalogError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod inventory;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bodega_core::Money` instead of
// `use bodega_core::money::Money`

pub use error::{CatalogError, CatalogResult, ValidationError};
pub use inventory::Inventory;
pub use money::{Money, MoneySplit};
pub use types::Product;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Highest price a single product may carry, in cents ($10,000.00).
///
/// ## Business Reason
/// A corner-store item priced above this is almost always a typo (12500
/// entered instead of 125.00). Rejecting it at construction keeps the
/// mistake off the shelf. Can be made configurable in future versions.
pub const MAX_PRICE_CENTS: i64 = 1_000_000;

/// Maximum number of products the inventory will hold.
///
/// ## Business Reason
/// Keeps lookups fast with a plain list and puts a bound on runaway
/// scripted input. Can be made configurable in future versions.
pub const MAX_PRODUCTS: usize = 1_000;
