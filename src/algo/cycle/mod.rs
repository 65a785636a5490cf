pub mod exhaustive;
pub mod single_start;

use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use itertools::Itertools;

use crate::algo::selection::SelectionMap;
use crate::weight::Weight;
use crate::Vertex;

pub use exhaustive::Exhaustive;
pub use single_start::SingleStart;

/// Finds a cycle in the predecessor pointers of a selection map.
pub trait CycleDetector {
    fn find_cycle<W: Weight>(&self, selection: &SelectionMap<W>) -> Option<Cycle>;
}

/// Vertices in predecessor-chain order: the predecessor of each vertex is the next one, and the
/// predecessor of the last is the first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cycle {
    vertices: Vec<Vertex>,
    members: BTreeSet<Vertex>,
}

impl Cycle {
    /// Follow predecessors from `start` until a vertex repeats. `start` must lie on a cycle.
    fn trace<W: Weight>(selection: &SelectionMap<W>, start: Vertex) -> Self {
        let mut vertices = Vec::new();
        let mut members = BTreeSet::new();
        let mut v = start;
        while members.insert(v) {
            vertices.push(v);
            match selection.predecessor(v) {
                Some(p) => v = p,
                None => break,
            }
        }
        Self { vertices, members }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn contains(&self, v: Vertex) -> bool {
        self.members.contains(&v)
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.vertices.iter().join(" <- "))
    }
}

/// Depth-first walk along predecessor pointers, starting at the predecessor of `key`. The first
/// vertex seen twice is on a cycle, which is then traced out of the map. The walk ends at a
/// vertex the map does not cover.
fn walk<W: Weight>(selection: &SelectionMap<W>, key: Vertex) -> Option<Cycle> {
    let mut visited = vec![false; selection.len()];
    let mut stack: Vec<Vertex> = selection.predecessor(key).into_iter().collect();

    while let Some(v) = stack.pop() {
        match visited.get_mut(v) {
            Some(true) => return Some(Cycle::trace(selection, v)),
            Some(seen) => *seen = true,
            None => break,
        }
        if let Some(p) = selection.predecessor(v) {
            stack.push(p);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{walk, Cycle, CycleDetector, SingleStart};
    use crate::algo::selection::{Incoming, SelectionMap};
    use crate::error::Error;

    pub(super) fn parents(root: usize, parents: &[Option<usize>]) -> SelectionMap<i32> {
        SelectionMap::from_entries(
            root,
            parents
                .iter()
                .map(|p| p.map(|origin| Incoming { origin, weight: 1 }))
                .collect::<Vec<_>>(),
        )
        .unwrap()
    }

    #[test]
    fn walk_stops_at_root() {
        let s = parents(0, &[None, Some(0), Some(1), Some(2)]);
        assert_eq!(walk(&s, 3), None);
    }

    #[test]
    fn walk_stops_at_missing_predecessor() {
        let s = parents(0, &[None, None, Some(1)]);
        assert_eq!(walk(&s, 2), None);
        assert_eq!(walk(&s, 1), None);
    }

    #[test]
    fn predecessor_outside_the_map_is_rejected() {
        let entries = vec![None, Some(Incoming { origin: 5, weight: 1 })];
        assert_eq!(
            SelectionMap::from_entries(0, entries),
            Err(Error::VertexOutOfRange { vertex: 5, size: 2 })
        );
        assert_eq!(SingleStart.find_cycle(&parents(0, &[None, Some(0)])), None);
    }

    #[test]
    fn walk_traces_cycle_in_predecessor_order() {
        // 1 <- 3 <- 2 <- 1, entered from 4
        let s = parents(0, &[None, Some(3), Some(1), Some(2), Some(2)]);
        let cycle = walk(&s, 4).unwrap();
        assert_eq!(cycle.vertices(), &[2, 1, 3]);
        assert!(cycle.contains(3));
        assert!(!cycle.contains(4));
        assert_eq!(cycle.to_string(), "2 <- 1 <- 3");
    }

    #[test]
    fn self_loop_is_a_cycle_of_one() {
        let s = parents(0, &[None, Some(1)]);
        let cycle = walk(&s, 1).unwrap();
        assert_eq!(cycle.vertices(), &[1]);
    }

    #[test]
    fn trace_stops_at_repeated_vertex() {
        let s = parents(0, &[None, Some(2), Some(1)]);
        let cycle = Cycle::trace(&s, 1);
        assert_eq!(cycle.len(), 2);
        assert_eq!(cycle.vertices(), vec![1, 2].as_slice());
    }
}
