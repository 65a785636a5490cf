use crate::algo::cycle::{walk, Cycle, CycleDetector};
use crate::algo::selection::SelectionMap;
use crate::weight::Weight;

/// Walks from every key in ascending order and reports the first cycle found.
#[derive(Copy, Clone, Debug, Default)]
pub struct Exhaustive;

impl CycleDetector for Exhaustive {
    fn find_cycle<W: Weight>(&self, selection: &SelectionMap<W>) -> Option<Cycle> {
        selection.keys().find_map(|start| walk(selection, start))
    }
}
