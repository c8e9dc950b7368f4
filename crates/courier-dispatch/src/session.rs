//! The run session: sole owner of the city graph, the shop location, and
//! the dispatcher.
//!
//! Topology changes are wholesale: a new graph is built from the submitted
//! document and swapped in as the session's only referent, and the old
//! graph is dropped. Nothing ever mutates a live graph, so a delivery pass
//! always sees one consistent topology.

use crate::dispatch::{DeliveryReport, DispatchError, Dispatcher};
use crate::order::{OrderId, OrderTicket};
use courier_core::graph::CityGraph;
use courier_core::id::LocationId;
use courier_core::topology::{CityMapData, TopologyError};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors surfaced by the session to the order-entry collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The submitted city map was rejected before any graph was built.
    #[error(transparent)]
    Topology(#[from] TopologyError),

    /// The shop must be one of the configured locations.
    #[error("shop location {0} is outside the configured city")]
    ShopOutOfRange(LocationId),

    /// Customer addresses are single uppercase letters.
    #[error("customer address must be an uppercase letter, got {0:?}")]
    InvalidAddress(char),

    /// The address letter maps to a location the city does not have.
    #[error("address {0} is outside the configured city")]
    AddressOutOfRange(LocationId),

    /// A per-order operation failed.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// One delivery session: a configured city, a shop, and the order flow.
#[derive(Debug)]
pub struct Session {
    graph: CityGraph,
    /// Configured location count. Tracked separately from the graph, which
    /// only counts locations that carry edges.
    locations: usize,
    shop: LocationId,
    dispatcher: Dispatcher,
}

impl Session {
    /// Build a session from a city-map document and a shop location.
    pub fn new(map: &CityMapData, shop: LocationId) -> Result<Session, SessionError> {
        let graph = map.build()?;
        if !map.contains(shop) {
            return Err(SessionError::ShopOutOfRange(shop));
        }
        Ok(Session {
            graph,
            locations: map.locations,
            shop,
            dispatcher: Dispatcher::new(),
        })
    }

    /// Replace the session's topology wholesale. The new graph is built
    /// first; on any rejection the current topology stays live. Orders and
    /// the pending queue survive reconfiguration untouched.
    pub fn reconfigure(&mut self, map: &CityMapData, shop: LocationId) -> Result<(), SessionError> {
        let graph = map.build()?;
        if !map.contains(shop) {
            return Err(SessionError::ShopOutOfRange(shop));
        }
        self.graph = graph;
        self.locations = map.locations;
        self.shop = shop;
        Ok(())
    }

    /// Place an order addressed by letter (`'A'` is location 0). The
    /// address must name one of the configured locations.
    pub fn place_order(
        &mut self,
        customer_name: &str,
        address_letter: char,
        item: &str,
    ) -> Result<OrderId, SessionError> {
        let address = LocationId::from_letter(address_letter)
            .ok_or(SessionError::InvalidAddress(address_letter))?;
        if address.index() >= self.locations {
            return Err(SessionError::AddressOutOfRange(address));
        }
        Ok(self.dispatcher.submit(customer_name, address, item))
    }

    /// Run one delivery pass over everything currently pending.
    pub fn deliver_all(&mut self) -> Vec<DeliveryReport> {
        self.dispatcher.deliver_all(&self.graph, self.shop)
    }

    /// Read-only view of an order.
    pub fn order(&self, order_id: OrderId) -> Result<OrderTicket, SessionError> {
        Ok(self.dispatcher.get(order_id)?)
    }

    /// Replace an undelivered order's food description.
    pub fn modify_order(&mut self, order_id: OrderId, new_item: &str) -> Result<(), SessionError> {
        Ok(self.dispatcher.modify(order_id, new_item)?)
    }

    /// Cancel an undelivered order and drop it from the pending queue.
    pub fn cancel_order(&mut self, order_id: OrderId) -> Result<(), SessionError> {
        self.dispatcher.cancel(order_id)?;
        Ok(())
    }

    /// The session's current topology.
    pub fn graph(&self) -> &CityGraph {
        &self.graph
    }

    /// The shop's location.
    pub fn shop(&self) -> LocationId {
        self.shop
    }

    /// The delivery coordinator.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}

// ===========================================================================
// Tests
// ===========================================================================
