//! The delivery coordinator: order store, FIFO pending queue, and the
//! batch delivery pass.
//!
//! Orders enter the pending queue exactly once, at submission. A
//! `deliver_all` pass drains the whole queue in submission order against a
//! single route table (the shop cannot move mid-batch), reporting one
//! typed outcome per order. Per-order failures never abort the batch.

use crate::order::{Order, OrderId, OrderTicket};
use courier_core::graph::CityGraph;
use courier_core::id::LocationId;
use courier_core::routing::{Distance, RouteTable};
use serde::{Deserialize, Serialize};
use slotmap::SlotMap;
use std::collections::VecDeque;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors surfaced by per-order operations. All recoverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// The handle does not name a live order (never created, or cancelled).
    #[error("unknown order {0:?}")]
    UnknownOrder(OrderId),

    /// The order was already delivered; delivered orders are immutable.
    #[error("order {0:?} has already been delivered")]
    AlreadyDelivered(OrderId),
}

// ---------------------------------------------------------------------------
// Delivery reports
// ---------------------------------------------------------------------------

/// Per-order outcome of one `deliver_all` pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryReport {
    /// A route was found; the order is now marked delivered.
    Delivered {
        order: OrderId,
        /// Full shop-to-customer location sequence, both endpoints included.
        path: Vec<LocationId>,
        distance: Distance,
    },

    /// No route from the shop to the customer's address in the current
    /// topology. The order stays undelivered; `will_retry` says whether it
    /// was re-enqueued for a future pass.
    NoRoute {
        order: OrderId,
        address: LocationId,
        will_retry: bool,
    },

    /// The queue entry referenced an order no longer in the store.
    /// Cancellation compacts the queue, so this lane is defensive.
    Stale { order: OrderId },
}

impl DeliveryReport {
    /// The order this report is about.
    pub fn order(&self) -> OrderId {
        match *self {
            DeliveryReport::Delivered { order, .. }
            | DeliveryReport::NoRoute { order, .. }
            | DeliveryReport::Stale { order } => order,
        }
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Route attempts granted to an order before a failed pass stops
/// re-enqueueing it.
pub const DEFAULT_MAX_ROUTE_ATTEMPTS: u32 = 3;

/// The delivery coordinator. Owns the order store and the FIFO
/// pending-delivery queue; holds no graph of its own -- each delivery pass
/// borrows the session's current topology.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dispatcher {
    orders: SlotMap<OrderId, Order>,
    pending: VecDeque<OrderId>,
    max_route_attempts: u32,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// Create a dispatcher with the default route-attempt bound.
    pub fn new() -> Self {
        Self::with_max_route_attempts(DEFAULT_MAX_ROUTE_ATTEMPTS)
    }

    /// Create a dispatcher that gives up on an order after
    /// `max_route_attempts` failed passes. A bound of 0 behaves like 1:
    /// every order gets its first attempt.
    pub fn with_max_route_attempts(max_route_attempts: u32) -> Self {
        Self {
            orders: SlotMap::with_key(),
            pending: VecDeque::new(),
            max_route_attempts,
        }
    }

    /// Store a new order and enqueue it for delivery. Each order is
    /// enqueued exactly once, here.
    pub fn submit(
        &mut self,
        customer_name: impl Into<String>,
        address: LocationId,
        item: impl Into<String>,
    ) -> OrderId {
        let order_id = self.orders.insert(Order::new(customer_name, address, item));
        self.pending.push_back(order_id);
        order_id
    }

    /// Read-only view of an order.
    pub fn get(&self, order_id: OrderId) -> Result<OrderTicket, DispatchError> {
        self.orders
            .get(order_id)
            .map(Order::ticket)
            .ok_or(DispatchError::UnknownOrder(order_id))
    }

    /// Replace the order's food description. Queue position is unaffected.
    pub fn modify(
        &mut self,
        order_id: OrderId,
        new_item: impl Into<String>,
    ) -> Result<(), DispatchError> {
        let order = self
            .orders
            .get_mut(order_id)
            .ok_or(DispatchError::UnknownOrder(order_id))?;
        if order.delivered {
            return Err(DispatchError::AlreadyDelivered(order_id));
        }
        order.item = new_item.into();
        Ok(())
    }

    /// Remove an undelivered order and compact the pending queue. The
    /// relative order of the remaining queue entries is preserved, and no
    /// surviving handle changes meaning.
    pub fn cancel(&mut self, order_id: OrderId) -> Result<Order, DispatchError> {
        let order = self
            .orders
            .get(order_id)
            .ok_or(DispatchError::UnknownOrder(order_id))?;
        if order.delivered {
            return Err(DispatchError::AlreadyDelivered(order_id));
        }

        self.pending.retain(|&queued| queued != order_id);
        self.orders
            .remove(order_id)
            .ok_or(DispatchError::UnknownOrder(order_id))
    }

    /// Drain the pending queue in submission order and attempt every
    /// entry, reporting one outcome per attempted order.
    ///
    /// The route table is computed once per pass: `shop` and `graph` are
    /// fixed for the whole drain. Already-delivered entries are skipped
    /// silently. An order whose address is unreachable stays undelivered
    /// and is re-enqueued for a future pass until its attempt bound runs
    /// out; re-enqueued orders are never retried within the same pass.
    pub fn deliver_all(&mut self, graph: &CityGraph, shop: LocationId) -> Vec<DeliveryReport> {
        let batch: Vec<OrderId> = self.pending.drain(..).collect();
        if batch.is_empty() {
            return Vec::new();
        }

        let routes = RouteTable::compute(graph, shop);
        let mut reports = Vec::with_capacity(batch.len());

        for order_id in batch {
            let Some(order) = self.orders.get_mut(order_id) else {
                reports.push(DeliveryReport::Stale { order: order_id });
                continue;
            };
            if order.delivered {
                continue;
            }

            match routes.route_to(order.address) {
                Some(route) => {
                    order.delivered = true;
                    reports.push(DeliveryReport::Delivered {
                        order: order_id,
                        path: route.path,
                        distance: route.distance,
                    });
                }
                None => {
                    order.route_attempts += 1;
                    let will_retry = order.route_attempts < self.max_route_attempts;
                    if will_retry {
                        self.pending.push_back(order_id);
                    }
                    reports.push(DeliveryReport::NoRoute {
                        order: order_id,
                        address: order.address,
                        will_retry,
                    });
                }
            }
        }

        reports
    }

    /// Number of orders awaiting a delivery attempt.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Whether the pending queue is empty.
    pub fn is_pending_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of live orders in the store, delivered ones included.
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Snapshot of the pending queue, front first.
    pub fn pending_ids(&self) -> Vec<OrderId> {
        self.pending.iter().copied().collect()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
