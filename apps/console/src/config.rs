//! # Console Configuration
//!
//! Presentation settings for the prompt: the store's name and how money
//! is printed. Values come from `BODEGA_*` environment variables with
//! built-in fallbacks, are loaded once in `main`, and never change while
//! the session runs.

use bodega_core::Money;
use thiserror::Error;

/// Configuration load errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable held a value that does not parse.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Settings that shape what the user sees at the prompt.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Shown in the session greeting
    pub store_name: String,

    /// Printed in front of every amount
    pub currency_symbol: String,

    /// Digits after the decimal point: 0, 1, or 2
    pub currency_decimals: u8,
}

impl Default for AppConfig {
    /// A dollar-and-cents corner store.
    fn default() -> Self {
        AppConfig {
            store_name: "Bodega Corner Store".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
        }
    }
}

impl AppConfig {
    /// Loads settings, letting the environment override each default.
    ///
    /// ## Environment Variables
    /// - `BODEGA_STORE_NAME`
    /// - `BODEGA_CURRENCY_SYMBOL`
    /// - `BODEGA_CURRENCY_DECIMALS` (0, 1, or 2)
    ///
    /// A variable that is present but does not parse is an error rather
    /// than a silent fallback, so a typo surfaces at startup.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = AppConfig::default();

        if let Ok(store_name) = std::env::var("BODEGA_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(symbol) = std::env::var("BODEGA_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Ok(decimals_str) = std::env::var("BODEGA_CURRENCY_DECIMALS") {
            let decimals: u8 = decimals_str.parse().map_err(|_| ConfigError::InvalidValue {
                var: "BODEGA_CURRENCY_DECIMALS".to_string(),
                reason: "must be a whole number".to_string(),
            })?;
            if decimals > 2 {
                return Err(ConfigError::InvalidValue {
                    var: "BODEGA_CURRENCY_DECIMALS".to_string(),
                    reason: "must be 0, 1, or 2".to_string(),
                });
            }
            config.currency_decimals = decimals;
        }

        Ok(config)
    }

    /// Renders an amount with this store's symbol and decimal count,
    /// e.g. `$12.34` under the defaults or `Rs 1234` with zero decimals.
    ///
    /// `currency_decimals` says how many trailing digits of the cent
    /// count sit after the point; a zero-decimal currency prints the
    /// whole count as major units.
    pub fn format_money(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        let cents = amount.abs().cents();

        match self.currency_decimals {
            0 => format!("{}{}{}", sign, self.currency_symbol, cents),
            decimals => {
                let divisor = 10_i64.pow(u32::from(decimals));
                format!(
                    "{}{}{}.{:0width$}",
                    sign,
                    self.currency_symbol,
                    cents / divisor,
                    cents % divisor,
                    width = usize::from(decimals)
                )
            }
        }
    }
}
