//! The city-map document: a dense adjacency matrix submitted once per
//! session by the order-entry collaborator, validated before any graph is
//! built, then compiled into a fresh [`CityGraph`].

use crate::graph::{CityGraph, Weight};
use crate::id::LocationId;
use serde::Deserialize;

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that reject a city-map document. Raised before any graph exists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    /// Delivery needs at least one location besides the shop.
    #[error("a city needs at least 2 locations, got {found}")]
    TooFewLocations { found: usize },

    /// The matrix has the wrong number of rows.
    #[error("adjacency matrix must have {expected} rows, got {found}")]
    RowCount { expected: usize, found: usize },

    /// A row has the wrong number of entries.
    #[error("adjacency row {row} must have {expected} entries, got {found}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
}

// ===========================================================================
// CityMapData
// ===========================================================================

/// A city-map document: location count plus a `locations × locations`
/// matrix of segment weights, where `0` means "no direct route".
///
/// Symmetry is the collaborator's contract. Both `(i, j)` and `(j, i)`
/// cells are honored independently, so a symmetric matrix records each
/// undirected segment twice; the relaxation engine tolerates the resulting
/// parallel edges.
#[derive(Debug, Clone, Deserialize)]
pub struct CityMapData {
    /// Number of locations in the city, shop included.
    pub locations: usize,
    /// Dense weight matrix, one row per location.
    pub distances: Vec<Vec<Weight>>,
}

impl CityMapData {
    /// Check the document shape without building anything.
    pub fn validate(&self) -> Result<(), TopologyError> {
        if self.locations < 2 {
            return Err(TopologyError::TooFewLocations {
                found: self.locations,
            });
        }
        if self.distances.len() != self.locations {
            return Err(TopologyError::RowCount {
                expected: self.locations,
                found: self.distances.len(),
            });
        }
        for (row, entries) in self.distances.iter().enumerate() {
            if entries.len() != self.locations {
                return Err(TopologyError::RowLength {
                    row,
                    expected: self.locations,
                    found: entries.len(),
                });
            }
        }
        Ok(())
    }

    /// Validate, then compile the matrix into a fresh graph: one edge per
    /// cell with a positive weight, scanned in row-major order.
    pub fn build(&self) -> Result<CityGraph, TopologyError> {
        self.validate()?;

        let mut graph = CityGraph::new();
        for (i, row) in self.distances.iter().enumerate() {
            for (j, &weight) in row.iter().enumerate() {
                if weight > 0 {
                    graph.add_edge(LocationId(i as u32), LocationId(j as u32), weight);
                }
            }
        }
        Ok(graph)
    }

    /// Whether `loc` is one of the configured locations. The range check
    /// for shop and customer addresses belongs to the order-entry surface.
    pub fn contains(&self, loc: LocationId) -> bool {
        loc.index() < self.locations
    }
}

// ===========================================================================
// Tests
// ===========================================================================
