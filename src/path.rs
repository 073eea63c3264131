//! Graph algorithms over the six-neighbor adjacency: shortest paths
//! ([Hex::path_to]), bounded reachability ([Hex::reachable]), and line of
//! sight ([Hex::line_of_sight]).
//!
//! All of these borrow a caller-supplied set of blocked (impassable) cells
//! for the duration of one call and only ever test it for membership. The
//! blocked set must not change while a call is in progress.

use crate::{
    error::HexError,
    hex::{Hex, HexIndexSet, HexSet},
};
use log::trace;
use std::mem;

/// One explored cell in the search arena. `parent` is an index back into
/// the arena, walked from the destination to the root to rebuild the path.
struct PathNode {
    cell: Hex,
    parent: Option<usize>,
}

/// Walk parent links from the given node back to the root, then reverse so
/// the path reads source-to-destination.
fn rebuild_path(nodes: &[PathNode], index: usize) -> Vec<Hex> {
    let mut path = Vec::new();
    let mut cursor = Some(index);
    while let Some(i) = cursor {
        path.push(nodes[i].cell);
        cursor = nodes[i].parent;
    }
    path.reverse();
    path
}

impl Hex {
    /// Find a shortest path from this cell to `destination`, treating every
    /// cell in `blocked` as impassable. On success the returned path runs
    /// from this cell to the destination inclusive; the path to itself is
    /// just `[self]`. This cell itself is never tested against the blocked
    /// set.
    ///
    /// Returns [HexError::PathNotFound] when the destination is itself
    /// blocked, or when the search frontier is exhausted without reaching
    /// it. Callers should treat that as an expected outcome, not a fault.
    /// The grid is unbounded, so termination on a missing path relies on
    /// the open region around the source being finite (i.e. fenced in by
    /// blocked cells); the blocked-destination case is detected up front
    /// and doesn't explore at all.
    ///
    /// This is a plain unweighted breadth-first search, expanded level by
    /// level so the first time the destination appears is guaranteed to be
    /// via a minimum-step route. Within a level, cells expand their
    /// neighbors in direction table order. O(V+E) over the explored region;
    /// there is no heuristic bounding exploration by distance to the goal.
    pub fn path_to(
        self,
        destination: Hex,
        blocked: &HexSet,
    ) -> Result<Vec<Hex>, HexError> {
        if self == destination {
            return Ok(vec![self]);
        }
        if blocked.contains(&destination) {
            return Err(HexError::PathNotFound {
                start: self,
                end: destination,
            });
        }

        // Arena of every explored cell, parent-linked for reconstruction
        let mut nodes = vec![PathNode {
            cell: self,
            parent: None,
        }];
        let mut visited = HexSet::default();
        visited.insert(self);

        // Two alternating frontiers instead of one flat queue, so each BFS
        // level is expanded completely before the next begins
        let mut frontier: Vec<usize> = vec![0];
        let mut next_frontier: Vec<usize> = Vec::new();

        while !frontier.is_empty() {
            for &index in &frontier {
                let cell = nodes[index].cell;
                for adjacent in cell.adjacents() {
                    if blocked.contains(&adjacent) || !visited.insert(adjacent)
                    {
                        continue;
                    }
                    nodes.push(PathNode {
                        cell: adjacent,
                        parent: Some(index),
                    });
                    if adjacent == destination {
                        let path = rebuild_path(&nodes, nodes.len() - 1);
                        trace!(
                            "found path from {self} to {destination} \
                             with {} cells ({} explored)",
                            path.len(),
                            nodes.len(),
                        );
                        return Ok(path);
                    }
                    next_frontier.push(nodes.len() - 1);
                }
            }
            frontier.clear();
            mem::swap(&mut frontier, &mut next_frontier);
        }

        trace!(
            "no path from {self} to {destination}; explored {} cells",
            nodes.len(),
        );
        Err(HexError::PathNotFound {
            start: self,
            end: destination,
        })
    }

    /// All cells reachable from this one in at most `steps` moves, this
    /// cell included, treating every cell in `blocked` as impassable. Each
    /// cell is recorded exactly once, at its minimum distance; the returned
    /// set preserves discovery order. A budget of zero yields just this
    /// cell.
    pub fn reachable(self, steps: u32, blocked: &HexSet) -> HexIndexSet {
        let mut visited = HexIndexSet::default();
        visited.insert(self);
        let mut frontier = vec![self];
        let mut next_frontier = Vec::new();

        for _ in 0..steps {
            for &cell in &frontier {
                for adjacent in cell.adjacents() {
                    if !blocked.contains(&adjacent) && visited.insert(adjacent)
                    {
                        next_frontier.push(adjacent);
                    }
                }
            }
            frontier.clear();
            mem::swap(&mut frontier, &mut next_frontier);
            if frontier.is_empty() {
                break;
            }
        }
        visited
    }

    /// Whether the straight line from this cell to `other` avoids every
    /// blocked cell, endpoints included. The traced cells are exactly those
    /// of [Hex::line_to], so visibility stays consistent with every other
    /// line-derived query.
    pub fn line_of_sight(self, other: Hex, blocked: &HexSet) -> bool {
        self.line_to(other).iter().all(|cell| !blocked.contains(cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_valid_path(path: &[Hex], start: Hex, end: Hex, blocked: &HexSet) {
        assert_eq!(*path.first().unwrap(), start);
        assert_eq!(*path.last().unwrap(), end);
        for pair in path.windows(2) {
            assert_eq!(pair[0].distance_to(pair[1]), 1);
        }
        for cell in &path[1..] {
            assert!(!blocked.contains(cell), "path crosses blocked {cell}");
        }
    }

    #[test]
    fn test_path_to_self() {
        let hex = Hex::new_qr(2, -2);
        // The source is never tested against the blocked set
        let blocked: HexSet = [hex].into_iter().collect();
        assert_eq!(hex.path_to(hex, &blocked), Ok(vec![hex]));
    }

    #[test]
    fn test_path_unobstructed() {
        let blocked = HexSet::default();
        let start = Hex::ORIGIN;
        let end = Hex::new_qr(3, -1);
        let path = start.path_to(end, &blocked).unwrap();
        // Without obstacles, the path covers distance+1 cells
        assert_eq!(path.len() as u32, start.distance_to(end) + 1);
        assert_valid_path(&path, start, end, &blocked);
    }

    #[test]
    fn test_path_example_scenario() {
        let blocked = HexSet::default();
        let start = Hex::ORIGIN;
        let end = Hex::new_qr(2, -1);
        let path = start.path_to(end, &blocked).unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], start);
        assert_eq!(start.distance_to(path[1]), 1);
        assert_eq!(path[1].distance_to(end), 1);
        assert_eq!(path[2], end);
    }

    #[test]
    fn test_path_blocked_destination() {
        let start = Hex::ORIGIN;
        let end = Hex::new_qr(2, 0);
        let blocked: HexSet = [end].into_iter().collect();
        assert_eq!(
            start.path_to(end, &blocked),
            Err(HexError::PathNotFound { start, end })
        );
    }

    #[test]
    fn test_path_walled_in_source() {
        let start = Hex::ORIGIN;
        let blocked: HexSet = start.adjacents().collect();
        // Anything beyond distance 1 is unreachable
        for end in [Hex::new_qr(2, -1), Hex::new_qr(0, 3), Hex::new_qr(-4, 0)]
        {
            assert_eq!(
                start.path_to(end, &blocked),
                Err(HexError::PathNotFound { start, end })
            );
        }
    }

    #[test]
    fn test_path_detours_around_wall() {
        let start = Hex::new_qr(-2, 0);
        let end = Hex::new_qr(2, 0);
        // A five-cell wall along q = 0, directly between start and end
        let blocked: HexSet =
            (-2..=2).map(|r| Hex::new_qr(0, r)).collect();
        let path = start.path_to(end, &blocked).unwrap();
        assert_valid_path(&path, start, end, &blocked);
        // The detour is strictly longer than the straight-line path
        assert!(path.len() as u32 > start.distance_to(end) + 1);
    }

    #[test]
    fn test_reachable_unobstructed() {
        let blocked = HexSet::default();
        let center = Hex::new_qr(1, -3);
        assert_eq!(
            center.reachable(2, &blocked).len(),
            crate::region::cell_count(2)
        );
        // Every cell in the disk is reachable without obstacles
        for cell in center.range(2) {
            assert!(center.reachable(2, &blocked).contains(&cell));
        }
    }

    #[test]
    fn test_reachable_zero_budget() {
        let blocked = HexSet::default();
        let center = Hex::ORIGIN;
        let reachable = center.reachable(0, &blocked);
        assert_eq!(reachable.len(), 1);
        assert!(reachable.contains(&center));
    }

    #[test]
    fn test_reachable_walled_in() {
        let center = Hex::ORIGIN;
        let blocked: HexSet = center.adjacents().collect();
        let reachable = center.reachable(5, &blocked);
        assert_eq!(reachable.len(), 1);
        assert!(reachable.contains(&center));
    }

    #[test]
    fn test_reachable_single_opening() {
        let center = Hex::ORIGIN;
        // Block five of the six neighbors, leaving only the east one open
        let open = center.adjacent(crate::hex::HexDirection::E);
        let blocked: HexSet =
            center.adjacents().filter(|cell| *cell != open).collect();
        let reachable = center.reachable(1, &blocked);
        assert_eq!(reachable.len(), 2);
        assert!(reachable.contains(&center));
        assert!(reachable.contains(&open));
    }

    #[test]
    fn test_line_of_sight_clear() {
        let blocked = HexSet::default();
        let a = Hex::ORIGIN;
        let b = Hex::new_qr(4, -2);
        assert!(a.line_of_sight(b, &blocked));
        assert!(b.line_of_sight(a, &blocked));
        assert!(a.line_of_sight(a, &blocked));
    }

    #[test]
    fn test_line_of_sight_blocked() {
        let a = Hex::ORIGIN;
        let b = Hex::new_qr(2, -1);
        // The traced line is a, one midpoint, b; blocking the midpoint cuts
        // visibility
        let midpoint = a.line_to(b)[1];
        let blocked: HexSet = [midpoint].into_iter().collect();
        assert!(!a.line_of_sight(b, &blocked));
        // Endpoints count too
        let blocked_end: HexSet = [b].into_iter().collect();
        assert!(!a.line_of_sight(b, &blocked_end));
        assert!(!b.line_of_sight(b, &blocked_end));
    }

    #[test]
    fn test_line_of_sight_matches_line_to() {
        let a = Hex::new_qr(-1, -1);
        let b = Hex::new_qr(3, -2);
        for cell in a.line_to(b) {
            let blocked: HexSet = [cell].into_iter().collect();
            assert!(!a.line_of_sight(b, &blocked), "blocking {cell}");
        }
        // Blocking a cell off the line changes nothing
        let off_line = Hex::new_qr(-5, 5);
        let blocked: HexSet = [off_line].into_iter().collect();
        assert!(a.line_of_sight(b, &blocked));
    }
}
