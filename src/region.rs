//! Region enumeration over the hex grid: disks ([Hex::range]), rings
//! ([Hex::ring]), spirals ([Hex::spiral]), and polygon outlines
//! ([polygon_outline]).

use crate::hex::{Hex, HexDirection, HexIndexSet};
use std::cmp;
use strum::IntoEnumIterator;

/// The number of cells in a disk of the given radius.
pub fn cell_count(radius: u32) -> usize {
    // We'll always have 3r^2+3r+1 cells (a reduction of a geometric sum).
    // f(0) = 1, and we add 6r cells for every ring after that, so:
    // 1, (+6) 7, (+12) 19, (+18) 37, ...
    let r = radius as usize;
    3 * r * r + 3 * r + 1
}

impl Hex {
    /// All cells within `radius` steps of this one, this cell included.
    /// Yields exactly `3r² + 3r + 1` cells (see [cell_count]) with no
    /// duplicates, in row order. `range(0)` is just this cell.
    pub fn range(self, radius: u32) -> Vec<Hex> {
        let n = radius as i32;
        let mut cells = Vec::with_capacity(cell_count(radius));
        for dq in -n..=n {
            // Bound dr so that the derived ds offset also stays within the
            // radius
            for dr in cmp::max(-n, -dq - n)..=cmp::min(n, -dq + n) {
                cells.push(self + Hex::new_qr(dq, dr));
            }
        }
        cells
    }

    /// The cells at exactly `radius` steps from this one: `6 * radius` cells
    /// for radius ≥ 1, with no duplicates or gaps. The walk starts at the
    /// southwest corner of the ring (this cell translated by `SW * radius`)
    /// and takes `radius` steps per direction in table order, tracing the
    /// full boundary back around to the start.
    ///
    /// A zero-radius ring is this cell alone.
    pub fn ring(self, radius: u32) -> Vec<Hex> {
        if radius == 0 {
            return vec![self];
        }
        let mut cells = Vec::with_capacity(6 * radius as usize);
        let mut cursor = self + HexDirection::SW.to_vector() * radius as i32;
        for direction in HexDirection::iter() {
            for _ in 0..radius {
                cells.push(cursor);
                cursor = cursor.adjacent(direction);
            }
        }
        cells
    }

    /// This cell followed by the rings at radius 1, 2, ..., `radius`,
    /// concatenated. The same cell set as [Hex::range] (`3r² + 3r + 1`
    /// cells), but ordered ring by ring outward instead of row by row.
    pub fn spiral(self, radius: u32) -> Vec<Hex> {
        let mut cells = Vec::with_capacity(cell_count(radius));
        cells.push(self);
        for r in 1..=radius {
            cells.extend(self.ring(r));
        }
        cells
    }
}

/// Trace the outline of a closed polygon whose corners are hex cells: the
/// line between each pair of consecutive corners (wrapping last back to
/// first) is traced with [Hex::line_to] and the cells are collected into a
/// deduplicated set, in trace order.
///
/// Degenerate inputs are well-defined: no corners yields an empty set, and a
/// single corner yields just that cell.
pub fn polygon_outline(corners: &[Hex]) -> HexIndexSet {
    let mut outline = HexIndexSet::default();
    for (i, &corner) in corners.iter().enumerate() {
        let next = corners[(i + 1) % corners.len()];
        outline.extend(corner.line_to(next));
    }
    outline
}
