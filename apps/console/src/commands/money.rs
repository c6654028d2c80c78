//! # Money Commands
//!
//! Handlers for totals and even splits.
//!
//! ## Split Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Split Flow                                           │
//! │                                                                         │
//! │  bodega> split 10.00 3                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parse_money("amount", "10.00")  ──► Money(1000)                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  "3".parse::<i64>()              ──► 3                                  │
//! │       │                               │ not a number? ValidationError   │
//! │       ▼                                                                 │
//! │  amount.split_even(3)            ──► share $3.33, remainder $0.01       │
//! │       │                               │ zero shares? ValidationError    │
//! │       ▼                                                                 │
//! │  "$10.00 split 3 ways: $3.33 per share, $0.01 left over"                │
//! │                                                                         │
//! │  The remainder is always shown, never silently dropped.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use bodega_core::validation::parse_money;
use bodega_core::ValidationError;

use crate::commands::plural;
use crate::error::CommandError;
use crate::state::AppState;

/// Sums the value of everything on the shelf.
pub fn total(state: &AppState) -> String {
    debug!(count = state.inventory.len(), "total command");

    format!(
        "{} on the shelf, total value {}",
        plural(state.inventory.len(), "product"),
        state.config.format_money(state.inventory.total_value())
    )
}

/// Divides an amount evenly across a number of shares.
///
/// ## Arguments
/// * `amount_input` - Raw amount text (e.g., "10.00")
/// * `shares_input` - Raw share count text (e.g., "3")
///
/// ## Returns
/// The share and remainder, or a validation error for a bad amount,
/// a non-numeric share count, or a share count that isn't positive.
pub fn split(
    state: &AppState,
    amount_input: &str,
    shares_input: &str,
) -> Result<String, CommandError> {
    debug!(amount = %amount_input, shares = %shares_input, "split command");

    let amount = parse_money("amount", amount_input)?;
    let shares: i64 = shares_input.trim().parse().map_err(|_| {
        CommandError::from(ValidationError::Malformed {
            field: "shares".to_string(),
            reason: "must be a whole number".to_string(),
        })
    })?;

    let split = amount.split_even(shares)?;

    let mut text = format!(
        "{} split {} ways: {} per share",
        state.config.format_money(amount),
        shares,
        state.config.format_money(split.share)
    );
    if split.remainder.is_zero() {
        text.push_str(", nothing left over");
    } else {
        text.push_str(&format!(
            ", {} left over",
            state.config.format_money(split.remainder)
        ));
    }
    Ok(text)
}
