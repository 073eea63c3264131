//! Error types for hex grid operations.

use crate::hex::Hex;
use std::fmt;

/// Errors arising from coordinate construction or pathfinding. Everything
/// else in this crate is a total function over valid coordinates and never
/// fails.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HexError {
    /// A cube coordinate triple whose components do not sum to zero. Raised
    /// at construction time; an invalid triple is never silently corrected.
    InvalidCoordinate {
        /// The offending q component.
        q: i32,
        /// The offending r component.
        r: i32,
        /// The offending s component.
        s: i32,
    },
    /// No route exists between two cells. This is an expected, recoverable
    /// outcome of pathfinding, not a fault: the destination may be blocked,
    /// or fenced off entirely by blocked cells.
    PathNotFound {
        /// Where the search started.
        start: Hex,
        /// The unreachable destination.
        end: Hex,
    },
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate { q, r, s } => write!(
                f,
                "invalid cube coordinate ({q}, {r}, {s}); \
                 components must sum to zero",
            ),
            Self::PathNotFound { start, end } => {
                write!(f, "no path exists from {start} to {end}")
            }
        }
    }
}

impl std::error::Error for HexError {}
