use crate::hex::Hex;
use fnv::FnvBuildHasher;
use indexmap::IndexSet;
use std::collections::{HashMap, HashSet};

/// A set of hex cells. This is the shape of the blocked-cell collections
/// consumed by the pathfinding, reachability, and line-of-sight queries.
pub type HexSet = HashSet<Hex, FnvBuildHasher>;
/// A map of hex cells to some `T`
pub type HexMap<T> = HashMap<Hex, T, FnvBuildHasher>;
/// An ORDERED set of hex cells. This has some extra memory overhead over
/// [HexSet], so we only use it where the ordering actually matters
/// (discovery order in flood fills, trace order in polygon outlines).
pub type HexIndexSet = IndexSet<Hex, FnvBuildHasher>;
