//! Customer-facing failure signals.
//!
//! There are exactly two: the requested item can't be served, or the
//! requested quantity is past the allowed maximum. Each carries the
//! message an outer layer shows to the customer, either the fixed
//! default or one supplied at the raise site.

use thiserror::Error;

/// Default message for [`CanteenError::ItemNotAvailable`].
pub const ITEM_NOT_AVAILABLE_MESSAGE: &str = "Dear Customer, The requested item is not available.";

/// Default message for [`CanteenError::OrderedMax`].
pub const ORDERED_MAX_MESSAGE: &str = "Dear Customers, You have ordered out of max";

/// Result alias used across the crate.
pub type Result<T, E = CanteenError> = std::result::Result<T, E>;

/// A canteen order failure. `Display` prints the carried message as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanteenError {
    /// The requested catalog item cannot be fulfilled.
    #[error("{0}")]
    ItemNotAvailable(String),

    /// The requested quantity exceeds the allowed maximum.
    #[error("{0}")]
    OrderedMax(String),
}

/// Payload-free tag for a [`CanteenError`], handy for branching.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`CanteenError::ItemNotAvailable`].
    ItemNotAvailable,
    /// See [`CanteenError::OrderedMax`].
    OrderedMax,
}

impl ErrorKind {
    /// The fixed customer text used when no message is supplied.
    pub fn default_message(self) -> &'static str {
        match self {
            ErrorKind::ItemNotAvailable => ITEM_NOT_AVAILABLE_MESSAGE,
            ErrorKind::OrderedMax => ORDERED_MAX_MESSAGE,
        }
    }

    /// Build a signal of this kind carrying the default message.
    pub fn signal(self) -> CanteenError {
        self.signal_with(self.default_message())
    }

    /// Build a signal of this kind carrying `message`.
    pub fn signal_with(self, message: impl Into<String>) -> CanteenError {
        match self {
            ErrorKind::ItemNotAvailable => CanteenError::ItemNotAvailable(message.into()),
            ErrorKind::OrderedMax => CanteenError::OrderedMax(message.into()),
        }
    }
}

impl CanteenError {
    /// Item unavailable, with the default message.
    pub fn item_not_available() -> Self {
        ErrorKind::ItemNotAvailable.signal()
    }

    /// Item unavailable, with a caller-supplied message.
    pub fn item_not_available_with(message: impl Into<String>) -> Self {
        ErrorKind::ItemNotAvailable.signal_with(message)
    }

    /// Quantity past the maximum, with the default message.
    pub fn ordered_max() -> Self {
        ErrorKind::OrderedMax.signal()
    }

    /// Quantity past the maximum, with a caller-supplied message.
    pub fn ordered_max_with(message: impl Into<String>) -> Self {
        ErrorKind::OrderedMax.signal_with(message)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CanteenError::ItemNotAvailable(_) => ErrorKind::ItemNotAvailable,
            CanteenError::OrderedMax(_) => ErrorKind::OrderedMax,
        }
    }

    /// The message to surface to the customer.
    pub fn message(&self) -> &str {
        match self {
            CanteenError::ItemNotAvailable(msg) | CanteenError::OrderedMax(msg) => msg,
        }
    }

    pub fn into_message(self) -> String {
        match self {
            CanteenError::ItemNotAvailable(msg) | CanteenError::OrderedMax(msg) => msg,
        }
    }
}
