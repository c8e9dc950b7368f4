//! Courier Dispatch -- order intake and delivery coordination for a
//! single-shop city delivery service.
//!
//! The [`dispatch::Dispatcher`] owns the order store (a slotmap, so order
//! handles are stable and never reused) and the FIFO pending-delivery
//! queue. One [`Dispatcher::deliver_all`] call drains the queue in
//! submission order, computes the shop's route table once for the batch,
//! and reports a typed [`dispatch::DeliveryReport`] per order -- the batch
//! never aborts on a per-order failure.
//!
//! The [`session::Session`] is the surface an order-entry collaborator
//! (CLI, API layer) drives: letter-addressed order placement, topology
//! reconfiguration by wholesale graph swap, and delivery passes.
//!
//! [`Dispatcher::deliver_all`]: dispatch::Dispatcher::deliver_all

pub mod dispatch;
pub mod order;
pub mod session;

pub use dispatch::{DeliveryReport, DispatchError, Dispatcher};
pub use order::{Order, OrderId, OrderTicket};
pub use session::{Session, SessionError};
