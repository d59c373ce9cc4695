//! Checks that raise the canteen signals.

use tracing::{trace, warn};

use crate::error::{CanteenError, Result};
use crate::limits::OrderLimits;

/// Fail with [`CanteenError::ItemNotAvailable`] unless the item is in stock.
pub fn ensure_available(item: &str, in_stock: bool) -> Result<()> {
    if !in_stock {
        warn!(item, "requested item is not available");
        return Err(CanteenError::item_not_available());
    }

    trace!(item, "item available");
    Ok(())
}

/// Fail with [`CanteenError::OrderedMax`] when `quantity` is past the
/// ceiling. Ordering exactly `max_quantity` is allowed.
pub fn ensure_within_max(quantity: u32, limits: &OrderLimits) -> Result<()> {
    let max_quantity = limits.max_quantity;

    if quantity > max_quantity {
        warn!(quantity, max_quantity, "ordered past maximum");
        return Err(CanteenError::ordered_max());
    }

    trace!(quantity, max_quantity, "quantity within limit");
    Ok(())
}
