use displaydoc::Display;

use crate::Vertex;

#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum Error {
    /// Vertex {vertex} is out of range for a graph with {size} vertices
    VertexOutOfRange { vertex: Vertex, size: usize },
    /// Vertex count {0} is too large for a dense graph
    TooManyVertices(usize),
    /// Invalid vertex index 0, vertices are numbered from 1
    ZeroVertexIndex,
    /// Root {root} is out of range for a tree with {size} vertices
    RootOutOfRange { root: Vertex, size: usize },
    /// Root {0} has an incoming edge
    RootHasParent(Vertex),
    /// Vertex {0} has no incoming edge
    Orphan(Vertex),
    /// Vertex {0} has more than one incoming edge
    MultipleParents(Vertex),
    /// Tree contains a cycle
    Cyclic,
    /// Vertex {0} is not reachable from the root
    Unreachable(Vertex),
}
