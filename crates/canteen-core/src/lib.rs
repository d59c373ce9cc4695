//! canteen-core
//!
//! Failure signals for canteen ordering:
//! - error (item not available / ordered past maximum)
//! - order limits (the configured quantity ceiling)
//! - guard checks that raise the signals

pub mod error;
pub mod limits;
pub mod guard;

pub use error::{
    CanteenError,
    ErrorKind,
    Result,
    ITEM_NOT_AVAILABLE_MESSAGE,
    ORDERED_MAX_MESSAGE,
};

pub use limits::{ConfigError, OrderLimits};
pub use guard::{ensure_available, ensure_within_max};
