//! Courier Core -- the routing engine for a single-shop city delivery service.
//!
//! This crate provides the weighted city graph, the label-correcting
//! shortest-path engine, and the topology configuration document that a
//! delivery session is built from.
//!
//! # Architecture
//!
//! A city is a set of dense, contiguous locations connected by undirected
//! weighted route segments. The order-entry collaborator submits one
//! [`topology::CityMapData`] adjacency matrix per session; the validated
//! document builds a [`graph::CityGraph`], which is swapped in wholesale
//! (the previous graph is dropped, never mutated in place).
//!
//! Routing is a queue-driven label-correcting relaxation
//! ([`routing::RouteTable::compute`]): locations are revisited every time
//! their best-known distance improves, so the algorithm tolerates parallel
//! edges and arbitrary insertion orders at the cost of redundant
//! re-relaxations. On city-scale graphs this is well inside interactive
//! bounds, and non-negative weights guarantee termination.
//!
//! # Key Types
//!
//! - [`id::LocationId`] -- Dense city-location index with address-letter
//!   conversions (`'A'` is location 0).
//! - [`graph::CityGraph`] -- Undirected weighted adjacency arena. Grows to
//!   fit whatever edges are added; parallel edges are all retained.
//! - [`routing::RouteTable`] -- Per-location minimal distance and
//!   predecessor from one source, with path reconstruction.
//! - [`topology::CityMapData`] -- Serde-deserializable adjacency-matrix
//!   document, validated before any graph is built.

pub mod graph;
pub mod id;
pub mod routing;
pub mod topology;
