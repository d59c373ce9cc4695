//! Order limits.
//!
//! The quantity ceiling behind [`CanteenError::OrderedMax`] comes from
//! either the environment or a small TOML document:
//!
//! - `CANTEEN_MAX_QUANTITY` (default: "10")
//!
//! ```toml
//! max_quantity = 5
//! ```
//!
//! [`CanteenError::OrderedMax`]: crate::CanteenError::OrderedMax

use std::env;

use serde::Deserialize;
use thiserror::Error;

pub const MAX_QUANTITY_ENV: &str = "CANTEEN_MAX_QUANTITY";
pub const DEFAULT_MAX_QUANTITY: u32 = 10;

/// Errors loading [`OrderLimits`]. Not shown to customers.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("malformed limits file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Per-order-line quantity ceiling.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrderLimits {
    /// Largest quantity a single order line may ask for (inclusive).
    pub max_quantity: u32,
}

impl Default for OrderLimits {
    fn default() -> Self {
        OrderLimits {
            max_quantity: DEFAULT_MAX_QUANTITY,
        }
    }
}

impl OrderLimits {
    pub fn new(max_quantity: u32) -> Result<Self, ConfigError> {
        OrderLimits { max_quantity }.validated("max_quantity")
    }

    /// Read limits from environment variables, falling back to the
    /// defaults when a variable is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let max_quantity = match env::var(MAX_QUANTITY_ENV) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                key: MAX_QUANTITY_ENV,
                value: val.clone(),
            })?,
            Err(env::VarError::NotPresent) => DEFAULT_MAX_QUANTITY,
            Err(env::VarError::NotUnicode(raw)) => {
                return Err(ConfigError::InvalidValue {
                    key: MAX_QUANTITY_ENV,
                    value: raw.to_string_lossy().into_owned(),
                });
            }
        };

        OrderLimits { max_quantity }.validated(MAX_QUANTITY_ENV)
    }

    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let limits: OrderLimits = toml::from_str(src)?;
        limits.validated("max_quantity")
    }

    // A zero ceiling would reject every order.
    fn validated(self, key: &'static str) -> Result<Self, ConfigError> {
        if self.max_quantity == 0 {
            return Err(ConfigError::InvalidValue {
                key,
                value: self.max_quantity.to_string(),
            });
        }
        Ok(self)
    }
}
