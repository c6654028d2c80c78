//! # Application State
//!
//! State owned by the console session.
//!
//! ## Ownership Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      AppState                                │
//! │                                                             │
//! │   ┌──────────────┐      ┌──────────────────────────────┐   │
//! │   │  AppConfig   │      │  Inventory                   │   │
//! │   │  (read-only  │      │  (mutated by add / remove)   │   │
//! │   │  after boot) │      │                              │   │
//! │   └──────────────┘      └──────────────────────────────┘   │
//! │                                                             │
//! │   Exactly one task owns the state: the prompt loop.         │
//! │   Commands borrow it (&mut) for the duration of one         │
//! │   dispatch, so no locking is needed. If commands ever       │
//! │   run from multiple tasks, wrap this in Arc<Mutex<_>>.      │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use bodega_core::Inventory;

use crate::config::AppConfig;

/// All state for one console session.
#[derive(Debug)]
pub struct AppState {
    /// Resolved configuration (store name, currency formatting)
    pub config: AppConfig,

    /// The product shelf
    pub inventory: Inventory,
}

impl AppState {
    /// Creates session state with an empty inventory.
    pub fn new(config: AppConfig) -> Self {
        AppState {
            config,
            inventory: Inventory::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_empty() {
        let state = AppState::new(AppConfig::default());
        assert!(state.inventory.is_empty());
        assert_eq!(state.config.store_name, "Bodega Corner Store");
    }
}
