use courier_core::id::LocationId;
use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    /// Stable handle to an order in the dispatcher's store.
    ///
    /// Keys are never reindexed and never reused, so a queued reference
    /// cannot silently start pointing at a different order after a
    /// cancellation -- lookups on a cancelled handle just miss.
    pub struct OrderId;
}

/// A customer order held by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub customer_name: String,
    /// The customer's location, derived from their address letter.
    pub address: LocationId,
    /// The food description. The only detail that stays mutable after
    /// submission.
    pub item: String,
    /// Set once by a successful delivery pass; never reset.
    pub delivered: bool,
    /// Delivery passes that failed to find a route to `address`. Bounds
    /// re-enqueueing (see `Dispatcher::max_route_attempts`).
    pub route_attempts: u32,
}

impl Order {
    pub fn new(
        customer_name: impl Into<String>,
        address: LocationId,
        item: impl Into<String>,
    ) -> Order {
        Order {
            customer_name: customer_name.into(),
            address,
            item: item.into(),
            delivered: false,
            route_attempts: 0,
        }
    }

    /// The read-only projection handed to the view surface.
    pub fn ticket(&self) -> OrderTicket {
        OrderTicket {
            customer_name: self.customer_name.clone(),
            address: self.address,
            item: self.item.clone(),
            delivered: self.delivered,
        }
    }
}

/// Read-only view of an order, as returned by `Dispatcher::get`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTicket {
    pub customer_name: String,
    pub address: LocationId,
    pub item: String,
    pub delivered: bool,
}
