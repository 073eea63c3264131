//! This module holds the basic value types and data structures for the cube
//! coordinate system.
//!
//! ## The Cube Coordinate System
//!
//! We use the [cube coordinate system defined by Amit Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
//! Each cell coordinate has three components (`q`, `r`, and `s`), and **for
//! any valid cell, all three components are integers and `q + r + s = 0`.**
//! Even though hexagon cells are mapped out in two dimensions, using three
//! components makes the math around hexagonal grids much simpler: distance
//! is half the component-wise absolute sum, the six unit steps are themselves
//! valid coordinates, and 60° rotation is a signed permutation of the
//! components.
//!
//! Because the components always sum to zero, every coordinate type here
//! stores only `q` and `r` and derives `s` on demand. This shrinks the types
//! by a third and, more importantly, makes the zero-sum invariant impossible
//! to violate through arithmetic: adding, subtracting, negating, or scaling
//! the stored pair always lands back on the `q + r + s = 0` plane.
//!
//! Non-integer coordinates appear only transiently, while interpolating
//! between cells; see [FractionalHex]. They are always rounded back to a
//! cell before being used as an address.
//!
//! ## Orientation
//!
//! The direction tables are laid out for pointy-top hexes with `q` growing
//! to the east. The six edge-sharing steps are listed in table order
//! starting from east ([HexDirection]); the six vertex-sharing "diagonal"
//! steps sit at the midpoints between them ([DiagonalDirection]). Whether
//! the table reads as clockwise or counterclockwise depends on which way the
//! renderer's second axis points, so the docs in this crate only ever refer
//! to "table order".

mod data_structure;
mod unit;

pub use self::{data_structure::*, unit::*};
