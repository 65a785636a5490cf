use alloc::vec;

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::NodeIndex;
use petgraph::visit::Dfs;
use petgraph::Direction;

use crate::algo::contraction::contract;
use crate::algo::cycle::CycleDetector;
use crate::algo::selection::SelectionMap;
use crate::algo::tree::reconstruct;
use crate::error::Error;
use crate::graph::Graph;
use crate::weight::Weight;
use crate::{Arborescence, Vertex};

#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultArborescence<D> {
    detector: D,
}

impl<D> DefaultArborescence<D> {
    pub fn new(detector: D) -> Self {
        Self { detector }
    }
}

impl<D: CycleDetector> Arborescence for DefaultArborescence<D> {
    type Detector = D;
    type Error = Error;

    fn execute<W: Weight>(&self, graph: &Graph<W>, root: Vertex) -> Graph<W> {
        let mut pruned = graph.clone();
        pruned.remove_incoming_edges(root);

        // weights for the selection come from the unpruned graph
        let reversed = graph.reverse();
        let mut selection = SelectionMap::select(&reversed, root);

        match self.detector.find_cycle(&selection) {
            None => log::debug!("selection is acyclic"),
            Some(cycle) => {
                log::debug!("found cycle {cycle}");
                match contract(&pruned, &mut selection, &cycle) {
                    Some(c) => {
                        log::debug!(
                            "replaced {} --> {} ({}) with {} --> {} ({}, adjusted {})",
                            c.removed.origin(),
                            c.removed.destination(),
                            c.removed.weight(),
                            c.added.origin(),
                            c.added.destination(),
                            c.added.weight(),
                            c.adjusted
                        );
                    }
                    None => log::warn!("no edge enters cycle {cycle}, leaving it in place"),
                }
            }
        }

        let tree = match reconstruct(&selection) {
            Ok(tree) => tree,
            Err(e) => {
                log::error!("cannot build the tree: {e}");
                return Graph::default();
            }
        };
        log::info!("----------------------------------");
        log::info!("      Vertices = {}", tree.size());
        log::info!("         Edges = {}", tree.edges().len());
        log::info!("  Total weight = {}", tree.total_weight());
        tree
    }

    fn check<W: Weight>(&self, tree: &Graph<W>, root: Vertex) -> Result<(), Self::Error> {
        let size = tree.size();
        if size == 0 {
            return Ok(());
        }
        if root >= size {
            return Err(Error::RootOutOfRange { root, size });
        }

        let g = tree.to_petgraph();
        for n in g.node_indices() {
            let v = g[n];
            match (v == root, g.neighbors_directed(n, Direction::Incoming).count()) {
                (true, 0) | (false, 1) => {}
                (true, _) => return Err(Error::RootHasParent(v)),
                (false, 0) => return Err(Error::Orphan(v)),
                (false, _) => return Err(Error::MultipleParents(v)),
            }
        }

        if is_cyclic_directed(&g) {
            return Err(Error::Cyclic);
        }

        let mut reached = vec![false; size];
        let mut dfs = Dfs::new(&g, NodeIndex::new(root));
        while let Some(n) = dfs.next(&g) {
            reached[g[n]] = true;
        }
        if let Some(v) = reached.iter().position(|r| !r) {
            return Err(Error::Unreachable(v));
        }

        log::debug!("arborescence rooted at {root} spans all {size} vertices");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::DefaultArborescence;
    use crate::algo::cycle::{Exhaustive, SingleStart};
    use crate::edge::Edge;
    use crate::error::Error;
    use crate::graph::Graph;
    use crate::Arborescence;

    fn graph(size: usize, edges: &[(usize, usize, i32)]) -> Graph<i32> {
        Graph::from_edges(size, edges.iter().map(|&(u, v, w)| Edge::new(u, v, w))).unwrap()
    }

    #[test]
    fn input_graph_is_not_modified() {
        let g = graph(3, &[(0, 1, 1), (1, 0, 1), (1, 2, 1)]);
        let before = g.clone();
        DefaultArborescence::new(SingleStart).execute(&g, 0);
        assert_eq!(g, before);
    }

    #[test]
    fn exhaustive_search_breaks_cycle_off_the_first_chain() {
        // 1 hangs off the root; 2 and 3 prefer each other
        let g = graph(
            4,
            &[(0, 1, 1), (0, 2, 10), (0, 3, 10), (2, 3, 1), (3, 2, 1)],
        );

        let single = DefaultArborescence::new(SingleStart);
        let tree = single.execute(&g, 0);
        assert_eq!(single.check(&tree, 0), Err(Error::Cyclic));

        let exhaustive = DefaultArborescence::new(Exhaustive);
        let tree = exhaustive.execute(&g, 0);
        assert_eq!(exhaustive.check(&tree, 0), Ok(()));
        assert_eq!(tree.total_weight(), 12);
    }

    #[test]
    fn check_reports_structural_problems() {
        let a = DefaultArborescence::new(SingleStart);
        assert_eq!(a.check(&graph(0, &[]), 0), Ok(()));
        assert_eq!(
            a.check(&graph(2, &[(0, 1, 1)]), 5),
            Err(Error::RootOutOfRange { root: 5, size: 2 })
        );
        assert_eq!(
            a.check(&graph(2, &[(1, 0, 1)]), 0),
            Err(Error::RootHasParent(0))
        );
        assert_eq!(
            a.check(&graph(3, &[(0, 1, 1)]), 0),
            Err(Error::Orphan(2))
        );
        assert_eq!(
            a.check(&graph(3, &[(0, 1, 1), (0, 2, 1), (1, 2, 1)]), 0),
            Err(Error::MultipleParents(2))
        );
        assert_eq!(
            a.check(&graph(3, &[(0, 1, 1), (0, 2, 1)]), 0),
            Ok(())
        );
    }
}
