//! # Catalog Commands
//!
//! Handlers for putting products on the shelf and looking at them.
//!
//! ## Add Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Add Product Flow                                     │
//! │                                                                         │
//! │  bodega> add "Cafe Grano" 12.50                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parse_money("price", "12.50")  ──► Money(1250)                         │
//! │       │                              │ bad text? ValidationError        │
//! │       ▼                                                                 │
//! │  Product::new(name, price)      ──► validated Product                   │
//! │       │                              │ empty name? zero price?          │
//! │       ▼                              │ ValidationError                  │
//! │  inventory.add(product)         ──► shelf grows by one                  │
//! │       │                              │ duplicate? full?                 │
//! │       ▼                              │ CatalogError                     │
//! │  "Added Cafe Grano at $12.50 (1 product on the shelf)"                  │
//! │                                                                         │
//! │  Every failure leaves the shelf exactly as it was.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use bodega_core::validation::parse_money;
use bodega_core::{CatalogError, Product};

use crate::commands::plural;
use crate::error::CommandError;
use crate::state::AppState;

/// Product DTO (Data Transfer Object) for JSON export.
///
/// ## Why DTO?
/// - Decouples the internal domain model from the export contract
/// - Pins the field set so adding a domain field never leaks by accident
/// - Handles serde rename to camelCase for downstream consumers
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub name: String,
    pub price_cents: i64,
    pub added_at: DateTime<Utc>,
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        ProductDto {
            name: p.name().to_string(),
            price_cents: p.price().cents(),
            added_at: p.added_at(),
        }
    }
}

/// Adds a product to the shelf.
///
/// ## Arguments
/// * `name` - Product name, already unquoted by the tokenizer
/// * `price_input` - Raw price text (e.g., "12.50")
///
/// ## Returns
/// A confirmation line, or the first error on the way in.
pub fn add(state: &mut AppState, name: String, price_input: &str) -> Result<String, CommandError> {
    debug!(name = %name, price = %price_input, "add command");

    let price = parse_money("price", price_input)?;
    let product = Product::new(name, price)?;

    // Capture before the move into the inventory.
    let name = product.name().to_string();
    state.inventory.add(product)?;

    Ok(format!(
        "Added {} at {} ({} on the shelf)",
        name,
        state.config.format_money(price),
        plural(state.inventory.len(), "product")
    ))
}

/// Lists every product in shelf order.
pub fn list(state: &AppState) -> String {
    debug!(count = state.inventory.len(), "list command");

    if state.inventory.is_empty() {
        return "The shelf is empty.".to_string();
    }

    let mut lines = Vec::with_capacity(state.inventory.len() + 1);
    lines.push(format!("{:<32} {:>12}  {}", "NAME", "PRICE", "ADDED"));
    for product in state.inventory.products() {
        lines.push(format!(
            "{:<32} {:>12}  {}",
            product.name(),
            state.config.format_money(product.price()),
            product.added_at().format("%Y-%m-%d %H:%M")
        ));
    }
    lines.join("\n")
}

/// Shows one product by exact name.
///
/// ## Returns
/// The product's details, or CommandError with NotFound.
pub fn find(state: &AppState, name: &str) -> Result<String, CommandError> {
    debug!(name = %name, "find command");

    let product = state
        .inventory
        .get(name)
        .ok_or_else(|| CatalogError::NoSuchProduct(name.to_string()))?;

    Ok(format!(
        "Name:  {}\nPrice: {}\nAdded: {}",
        product.name(),
        state.config.format_money(product.price()),
        product.added_at().format("%Y-%m-%d %H:%M:%S")
    ))
}

/// Takes a product off the shelf.
pub fn remove(state: &mut AppState, name: &str) -> Result<String, CommandError> {
    debug!(name = %name, "remove command");

    let product = state.inventory.remove(name)?;
    Ok(format!(
        "Removed {} ({} remaining)",
        product.name(),
        plural(state.inventory.len(), "product")
    ))
}

/// Prints the shelf as pretty JSON.
pub fn export(state: &AppState) -> Result<String, CommandError> {
    debug!(count = state.inventory.len(), "export command");

    let dtos: Vec<ProductDto> = state.inventory.products().iter().map(ProductDto::from).collect();
    serde_json::to_string_pretty(&dtos)
        .map_err(|e| CommandError::internal(format!("could not serialize inventory: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::error::ErrorCode;

    fn test_state() -> AppState {
        AppState::new(AppConfig::default())
    }

    #[test]
    fn test_add_confirms_with_formatted_price() {
        let mut state = test_state();
        let text = add(&mut state, "Cafe Grano".to_string(), "12.50").unwrap();
        assert_eq!(text, "Added Cafe Grano at $12.50 (1 product on the shelf)");
    }

    #[test]
    fn test_add_rejects_bad_price_text() {
        let mut state = test_state();
        let err = add(&mut state, "Milk".to_string(), "abc").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(state.inventory.is_empty());
    }

    #[test]
    fn test_add_rejects_duplicate_name() {
        let mut state = test_state();
        add(&mut state, "Milk".to_string(), "2.50").unwrap();
        let err = add(&mut state, "Milk".to_string(), "3.00").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "'Milk' is already on the shelf");
        assert_eq!(state.inventory.len(), 1);
    }

    #[test]
    fn test_list_empty_shelf() {
        let state = test_state();
        assert_eq!(list(&state), "The shelf is empty.");
    }

    #[test]
    fn test_list_shows_products_in_insertion_order() {
        let mut state = test_state();
        add(&mut state, "Pan".to_string(), "1.25").unwrap();
        add(&mut state, "Leche".to_string(), "2.50").unwrap();

        let text = list(&state);
        let pan_at = text.find("Pan").unwrap();
        let leche_at = text.find("Leche").unwrap();
        assert!(pan_at < leche_at);
        assert!(text.contains("$1.25"));
        assert!(text.contains("$2.50"));
    }

    #[test]
    fn test_find_unknown_product() {
        let state = test_state();
        let err = find(&state, "Ghost").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "no product named 'Ghost'");
    }

    #[test]
    fn test_remove_then_find_fails() {
        let mut state = test_state();
        add(&mut state, "Pan".to_string(), "1.25").unwrap();

        let text = remove(&mut state, "Pan").unwrap();
        assert_eq!(text, "Removed Pan (0 products remaining)");

        let err = find(&state, "Pan").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_export_uses_camel_case_fields() {
        let mut state = test_state();
        add(&mut state, "Pan".to_string(), "1.25").unwrap();

        let json = export(&state).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["name"], "Pan");
        assert_eq!(parsed[0]["priceCents"], 125);
        assert!(parsed[0]["addedAt"].is_string());
    }
}
