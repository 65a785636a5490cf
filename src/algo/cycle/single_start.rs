use crate::algo::cycle::{walk, Cycle, CycleDetector};
use crate::algo::selection::SelectionMap;
use crate::weight::Weight;

/// Walks from the smallest key only.
///
/// A cycle whose vertices cannot be reached from that key's predecessor chain is not reported.
/// This only happens when the selection falls apart into several weakly connected pieces.
#[derive(Copy, Clone, Debug, Default)]
pub struct SingleStart;

impl CycleDetector for SingleStart {
    fn find_cycle<W: Weight>(&self, selection: &SelectionMap<W>) -> Option<Cycle> {
        let start = selection.keys().next()?;
        log::debug!("searching for a cycle from vertex {start}");
        walk(selection, start)
    }
}

#[cfg(test)]
mod tests {
    use super::SingleStart;
    use crate::algo::cycle::tests::parents;
    use crate::algo::cycle::CycleDetector;

    #[test]
    fn finds_cycle_reachable_from_first_key() {
        let s = parents(0, &[None, Some(2), Some(3), Some(1)]);
        let cycle = SingleStart.find_cycle(&s).unwrap();
        assert_eq!(cycle.vertices(), &[2, 3, 1]);
    }

    #[test]
    fn misses_cycle_off_the_first_chain() {
        // 1 hangs off the root, 2 and 3 point at each other
        let s = parents(0, &[None, Some(0), Some(3), Some(2)]);
        assert_eq!(SingleStart.find_cycle(&s), None);
    }

    #[test]
    fn root_is_skipped_as_start() {
        let s = parents(1, &[Some(2), None, Some(0)]);
        let cycle = SingleStart.find_cycle(&s).unwrap();
        assert_eq!(cycle.vertices(), &[2, 0]);
    }

    #[test]
    fn empty_selection_has_no_cycle() {
        let s = parents(0, &[]);
        assert_eq!(SingleStart.find_cycle(&s), None);
    }
}
