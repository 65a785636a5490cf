use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::edge::Edge;
use crate::error::Error;
use crate::incidence::Incidence;
use crate::weight::Weight;
use crate::Vertex;

/// A directed, weighted graph over the vertices `0..size`.
///
/// The edge list keeps insertion order and is the source of truth for iteration. The incidence
/// matrix mirrors it for constant-time weight lookups; with parallel edges the cell holds the
/// weight of the edge inserted last.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph<W> {
    size: usize,
    edges: Vec<Edge<W>>,
    adjacency: Vec<Vec<Vertex>>,
    incidence: Incidence<W>,
}

impl<W: Weight> Graph<W> {
    /// Fails with [`Error::TooManyVertices`] when the `size × size` matrix does not fit.
    pub fn new(size: usize) -> Result<Self, Error> {
        let incidence = Incidence::new(size)?;
        Ok(Self {
            size,
            edges: Vec::new(),
            adjacency: vec![Vec::new(); size],
            incidence,
        })
    }

    pub fn from_edges<I>(size: usize, edges: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Edge<W>>,
    {
        edges.into_iter().try_fold(Self::new(size)?, |mut acc, e| {
            acc.add_edge(e)?;
            Ok(acc)
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    pub fn incidence(&self) -> &Incidence<W> {
        &self.incidence
    }

    pub fn weight(&self, origin: Vertex, destination: Vertex) -> Option<W> {
        self.incidence.get(origin, destination)
    }

    /// Vertices reachable from `v` over a single edge, in insertion order.
    pub fn adjacency(&self, v: Vertex) -> &[Vertex] {
        self.adjacency.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn add_edge(&mut self, edge: Edge<W>) -> Result<(), Error> {
        self.check_vertex(edge.origin())?;
        self.check_vertex(edge.destination())?;
        self.insert(edge);
        Ok(())
    }

    /// Record `destination → origin` in the adjacency lists only, as undirected loading does.
    /// Neither the edge list nor the incidence matrix is touched.
    pub fn link(&mut self, origin: Vertex, destination: Vertex) -> Result<(), Error> {
        self.check_vertex(origin)?;
        self.check_vertex(destination)?;
        self.adjacency[destination].push(origin);
        Ok(())
    }

    /// Mark every edge entering `v` as absent in the incidence matrix. Outgoing edges and the
    /// edge list are left as they are.
    pub fn remove_incoming_edges(&mut self, v: Vertex) {
        self.incidence.clear_column(v);
    }

    /// The incidence matrix transposed, so that row `v` lists the edges entering `v`.
    pub fn reverse(&self) -> Incidence<W> {
        self.incidence.transpose()
    }

    pub fn total_weight(&self) -> W {
        self.edges.iter().map(Edge::weight).sum()
    }

    /// Node `i` of the returned graph carries vertex `i`.
    pub fn to_petgraph(&self) -> DiGraph<Vertex, W> {
        let mut g = DiGraph::with_capacity(self.size, self.edges.len());
        let nodes: Vec<NodeIndex> = (0..self.size).map(|v| g.add_node(v)).collect();
        for e in &self.edges {
            g.add_edge(nodes[e.origin()], nodes[e.destination()], e.weight());
        }
        g
    }

    // callers must have validated both endpoints
    pub(crate) fn insert(&mut self, edge: Edge<W>) {
        self.incidence
            .set(edge.origin(), edge.destination(), edge.weight());
        self.adjacency[edge.origin()].push(edge.destination());
        self.edges.push(edge);
    }

    fn check_vertex(&self, vertex: Vertex) -> Result<(), Error> {
        if vertex < self.size {
            Ok(())
        } else {
            Err(Error::VertexOutOfRange {
                vertex,
                size: self.size,
            })
        }
    }
}

/// The graph without vertices.
impl<W> Default for Graph<W> {
    fn default() -> Self {
        Self {
            size: 0,
            edges: Vec::new(),
            adjacency: Vec::new(),
            incidence: Incidence::default(),
        }
    }
}

impl<W: Weight> fmt::Display for Graph<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for v in 0..self.size {
            write!(f, "{:>4}", v + 1)?;
        }
        writeln!(f)?;

        for u in 0..self.size {
            write!(f, "{:>2}:", u + 1)?;
            for v in 0..self.size {
                match self.incidence.get(u, v) {
                    Some(w) => write!(f, "{w:>4}")?,
                    None => write!(f, "{:>4}", ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    use petgraph::visit::EdgeRef;

    use super::Graph;
    use crate::edge::Edge;
    use crate::error::Error;

    fn sample() -> Graph<i32> {
        Graph::from_edges(
            3,
            vec![Edge::new(0, 1, 4), Edge::new(1, 2, -2), Edge::new(2, 1, 0)],
        )
        .unwrap()
    }

    #[test]
    fn edges_keep_insertion_order() {
        let g = sample();
        assert_eq!(
            g.edges(),
            &[Edge::new(0, 1, 4), Edge::new(1, 2, -2), Edge::new(2, 1, 0)]
        );
        assert_eq!(g.weight(1, 2), Some(-2));
        assert_eq!(g.weight(2, 0), None);
        assert_eq!(g.adjacency(0), &[1]);
        assert_eq!(g.total_weight(), 2);
    }

    #[test]
    fn out_of_range_edges_are_rejected() {
        let mut g = Graph::new(2).unwrap();
        assert_eq!(
            g.add_edge(Edge::new(0, 2, 1)),
            Err(Error::VertexOutOfRange { vertex: 2, size: 2 })
        );
        assert!(g.edges().is_empty());
    }

    #[test]
    fn oversized_graph_is_rejected() {
        assert_eq!(
            Graph::<i32>::new(usize::MAX),
            Err(Error::TooManyVertices(usize::MAX))
        );
        assert!(Graph::from_edges(usize::MAX, vec![Edge::new(0, 1, 1)]).is_err());
    }

    #[test]
    fn default_graph_has_no_vertices() {
        let g = Graph::<i32>::default();
        assert!(g.is_empty());
        assert_eq!(g, Graph::new(0).unwrap());
    }

    #[test]
    fn parallel_edges_keep_last_weight_in_matrix() {
        let g = Graph::from_edges(2, vec![Edge::new(0, 1, 3), Edge::new(0, 1, 9)]).unwrap();
        assert_eq!(g.edges().len(), 2);
        assert_eq!(g.weight(0, 1), Some(9));
    }

    #[test]
    fn removing_incoming_edges_only_touches_the_matrix() {
        let mut g = sample();
        g.remove_incoming_edges(1);
        assert_eq!(g.weight(0, 1), None);
        assert_eq!(g.weight(2, 1), None);
        assert_eq!(g.weight(1, 2), Some(-2));
        assert_eq!(g.edges().len(), 3);
    }

    #[test]
    fn reverse_lists_incoming_edges_per_row() {
        let r = sample().reverse();
        assert_eq!(r.row(1).collect::<Vec<_>>(), [(0, 4), (2, 0)]);
    }

    #[test]
    fn link_only_extends_adjacency() {
        let mut g = sample();
        g.link(0, 1).unwrap();
        assert_eq!(g.adjacency(1), &[2, 0]);
        assert_eq!(g.weight(1, 0), None);
        assert_eq!(g.edges().len(), 3);
    }

    #[test]
    fn petgraph_nodes_match_vertices() {
        let g = sample().to_petgraph();
        assert_eq!(g.node_count(), 3);
        let edges: Vec<_> = g
            .edge_references()
            .map(|e| (g[e.source()], g[e.target()], *e.weight()))
            .collect();
        assert_eq!(edges, [(0, 1, 4), (1, 2, -2), (2, 1, 0)]);
    }

    #[test]
    fn display_renders_one_based_matrix() {
        let g = Graph::from_edges(2, vec![Edge::new(0, 1, 5)]).unwrap();
        assert_eq!(g.to_string(), "      1   2\n 1:   .   5\n 2:   .   .\n");
    }
}
