//! Store configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CartError, CartResult};
use crate::totals::FeeSchedule;

/// Capacity of the notification channel; slow receivers lag past this.
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// Tunables for a [`crate::store::CartStore`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    /// Processing fee charged for card payments
    pub fees: FeeSchedule,
    /// Buffered notifications per subscriber
    pub event_capacity: usize,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            fees: FeeSchedule::default(),
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl CartConfig {
    /// Load a JSON config file; missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> CartResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| CartError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: CartConfig = serde_json::from_str(r#"{"fees":{"percent":0.022,"fixed":0.49}}"#).unwrap();
        assert_eq!(config.fees.percent, 0.022);
        assert_eq!(config.event_capacity, DEFAULT_EVENT_CAPACITY);
    }

    #[test]
    fn test_load_from_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("cart.json");
        std::fs::write(&path, r#"{"event_capacity":8}"#).unwrap();
        let config = CartConfig::load(&path).unwrap();
        assert_eq!(config.event_capacity, 8);
        assert_eq!(config.fees, FeeSchedule::default());

        assert!(CartConfig::load(temp.path().join("missing.json")).is_err());
    }
}
