//! # Validation
//!
//! Field-level checks for everything a user can type at the prompt.
//!
//! ## Where Checks Live
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Console parser     arity and quoting only; no business rules           │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  THIS MODULE        one field at a time: names bounded, prices in       │
//! │        │            range, money text parsed without floats             │
//! │        ▼                                                                │
//! │  Inventory          whole-shelf rules: unique names, capacity           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every check returns `Result`, never a bool, so callers must route the
//! failure somewhere instead of shrugging it off.
//!
//! ## Usage
//! ```rust
//! use bodega_core::validation::{validate_product_name, parse_money};
//!
//! validate_product_name("Café de Olla").unwrap();
//!
//! let price = parse_money("price", "12.50").unwrap();
//! assert_eq!(price.cents(), 1250);
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_PRICE_CENTS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Names
// =============================================================================

/// Checks that a product name is usable as a shelf label.
///
/// Whitespace around the name is ignored; a name that is nothing but
/// whitespace counts as empty. Length is measured in characters, not
/// bytes, so accented names are not shortchanged by their encoding.
///
/// ```rust
/// use bodega_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Jarritos Mandarina").is_ok());
/// assert!(validate_product_name("").is_err());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Empty {
            field: "name".to_string(),
        });
    }

    if trimmed.chars().count() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

// =============================================================================
// Prices
// =============================================================================

/// Checks that a price can go on the shelf.
///
/// Zero and negative amounts are refused; nothing in the store is free.
/// The upper bound is [`MAX_PRICE_CENTS`], which exists so a mistyped
/// price like `125000` does not silently become a ten-thousand-dollar
/// jar of salsa.
///
/// ```rust
/// use bodega_core::money::Money;
/// use bodega_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(1250)).is_ok());
/// assert!(validate_price(Money::zero()).is_err());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::NotPositive {
            field: "price".to_string(),
        });
    }

    if price.cents() > MAX_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 1,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

// =============================================================================
// Money Parsing
// =============================================================================

/// Parses user-typed decimal text into [`Money`] with integer arithmetic.
///
/// Accepted forms: a whole amount (`"12"`), one or two fraction digits
/// (`"12.5"`, `"12.50"`), and an optional leading minus. Anything else
/// becomes a `Malformed` error carrying `field`, so the message names
/// the argument the user got wrong.
///
/// Range rules do NOT apply here; `validate_price` owns those. A parsed
/// zero or negative amount is well formed even though the shelf will
/// later refuse it.
///
/// ```rust
/// use bodega_core::validation::parse_money;
///
/// assert_eq!(parse_money("price", "12.50").unwrap().cents(), 1250);
/// assert_eq!(parse_money("price", "12.5").unwrap().cents(), 1250);
/// assert_eq!(parse_money("price", "12").unwrap().cents(), 1200);
/// assert_eq!(parse_money("amount", "-5.50").unwrap().cents(), -550);
///
/// assert!(parse_money("price", "12.345").is_err());
/// assert!(parse_money("price", "abc").is_err());
/// ```
pub fn parse_money(field: &str, input: &str) -> ValidationResult<Money> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Empty {
            field: field.to_string(),
        });
    }

    let (negative, unsigned) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let (major_text, minor_text) = match unsigned.split_once('.') {
        Some((major, minor)) => (major, Some(minor)),
        None => (unsigned, None),
    };

    if major_text.is_empty() || !major_text.chars().all(|c| c.is_ascii_digit()) {
        return Err(malformed_amount(field));
    }

    let minor_cents = match minor_text {
        None => 0,
        Some(minor) => {
            if minor.is_empty() || minor.len() > 2 || !minor.chars().all(|c| c.is_ascii_digit()) {
                return Err(malformed_amount(field));
            }
            let parsed: i64 = minor.parse().map_err(|_| malformed_amount(field))?;
            // A single fraction digit means tenths: "12.5" is $12.50
            if minor.len() == 1 {
                parsed * 10
            } else {
                parsed
            }
        }
    };

    // All characters are digits at this point, so a parse failure is overflow
    let major: i64 = major_text.parse().map_err(|_| amount_too_large(field))?;
    let cents = major
        .checked_mul(100)
        .and_then(|c| c.checked_add(minor_cents))
        .ok_or_else(|| amount_too_large(field))?;

    if negative {
        Ok(Money::from_cents(-cents))
    } else {
        Ok(Money::from_cents(cents))
    }
}

fn malformed_amount(field: &str) -> ValidationError {
    ValidationError::Malformed {
        field: field.to_string(),
        reason: "expected a decimal amount like 12 or 12.50".to_string(),
    }
}

fn amount_too_large(field: &str) -> ValidationError {
    ValidationError::Malformed {
        field: field.to_string(),
        reason: "amount is too large to count in cents".to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rules() {
        assert!(validate_product_name("Jarritos Mandarina").is_ok());
        assert!(validate_product_name("  Pan Dulce  ").is_ok());

        assert!(matches!(
            validate_product_name(""),
            Err(ValidationError::Empty { .. })
        ));
        assert!(matches!(
            validate_product_name("   "),
            Err(ValidationError::Empty { .. })
        ));
        assert!(matches!(
            validate_product_name(&"x".repeat(201)),
            Err(ValidationError::TooLong { max: 200, .. })
        ));
    }

    #[test]
    fn test_name_length_counts_characters_not_bytes() {
        // 200 accented characters is 400 bytes of UTF-8 but still a legal name
        let accented = "é".repeat(200);
        assert!(validate_product_name(&accented).is_ok());
        assert!(validate_product_name(&"é".repeat(201)).is_err());
    }

    #[test]
    fn test_price_rules() {
        assert!(validate_price(Money::from_cents(1)).is_ok());
        assert!(validate_price(Money::from_cents(1250)).is_ok());
        assert!(validate_price(Money::from_cents(MAX_PRICE_CENTS)).is_ok());

        assert!(matches!(
            validate_price(Money::zero()),
            Err(ValidationError::NotPositive { .. })
        ));
        assert!(matches!(
            validate_price(Money::from_cents(-100)),
            Err(ValidationError::NotPositive { .. })
        ));
        assert!(matches!(
            validate_price(Money::from_cents(MAX_PRICE_CENTS + 1)),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_parse_money_accepts_common_forms() {
        assert_eq!(parse_money("price", "12").unwrap().cents(), 1200);
        assert_eq!(parse_money("price", "12.5").unwrap().cents(), 1250);
        assert_eq!(parse_money("price", "12.50").unwrap().cents(), 1250);
        assert_eq!(parse_money("price", "0.99").unwrap().cents(), 99);
        assert_eq!(parse_money("price", "0").unwrap().cents(), 0);
        assert_eq!(parse_money("amount", "-5.50").unwrap().cents(), -550);
        assert_eq!(parse_money("price", " 3 ").unwrap().cents(), 300);
    }

    #[test]
    fn test_parse_money_rejects_malformed_input() {
        assert!(matches!(
            parse_money("price", ""),
            Err(ValidationError::Empty { .. })
        ));

        for bad in ["abc", "12.345", "12.", ".50", "12.5.0", "$5", "--3", "1e3", "1,50"] {
            assert!(
                matches!(
                    parse_money("price", bad),
                    Err(ValidationError::Malformed { .. })
                ),
                "expected Malformed for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_parse_money_error_names_the_field() {
        let err = parse_money("amount", "abc").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid amount: expected a decimal amount like 12 or 12.50"
        );
    }

    #[test]
    fn test_parse_money_rejects_overflow() {
        assert!(matches!(
            parse_money("price", "99999999999999999999"),
            Err(ValidationError::Malformed { .. })
        ));
    }
}
