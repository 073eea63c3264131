//! Hexgrid is a spatial-coordinate and graph-algorithm library for hexagonal
//! grids, built on the cube coordinate system (three components that always
//! sum to zero). It provides the arithmetic, adjacency, distance,
//! pathfinding, visibility, and region-enumeration primitives that a
//! grid-based simulation or game layer needs to reason about positions on a
//! hex mesh.
//!
//! ```
//! use hexgrid::{Hex, HexSet};
//!
//! let start = Hex::ORIGIN;
//! let goal = Hex::new(3, -1, -2).unwrap();
//!
//! // With nothing in the way, the shortest path covers exactly
//! // `distance + 1` cells (endpoints included)
//! let blocked = HexSet::default();
//! let path = start.path_to(goal, &blocked).unwrap();
//! assert_eq!(path.len() as u32, start.distance_to(goal) + 1);
//! ```
//!
//! All algorithms are synchronous and operate on caller-owned, read-only
//! snapshots of blocked-cell data; each call allocates its own working sets,
//! so there is no shared mutable state between calls. See [Hex] for a
//! description of the coordinate system itself.

mod error;
mod hex;
mod path;
mod region;

pub use crate::{
    error::HexError,
    hex::{
        DiagonalDirection, FractionalHex, Hex, HexDirection, HexIndexSet,
        HexMap, HexSet,
    },
    region::{cell_count, polygon_outline},
};
