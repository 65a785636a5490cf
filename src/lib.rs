#![no_std]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

//! Minimum spanning arborescence of a directed, weighted graph (Chu-Liu/Edmonds).
//!
//! Every vertex but the root picks its cheapest incoming edge. If those picks close a cycle,
//! the cycle is broken once by swapping one of its edges for the edge entering it from outside
//! whose re-weighted cost is lowest:
//!
//! ```
//! use arborescence::{execute, Edge, Graph};
//!
//! let g = Graph::from_edges(
//!     4,
//!     [
//!         Edge::new(1, 2, 3),
//!         Edge::new(2, 3, 7),
//!         Edge::new(3, 1, 4),
//!         Edge::new(0, 1, 20),
//!         Edge::new(0, 2, 9),
//!         Edge::new(0, 3, 12),
//!     ],
//! )
//! .unwrap();
//!
//! let tree = execute(&g, 0);
//! assert_eq!(tree.total_weight(), 19);
//! assert_eq!(tree.weight(0, 3), Some(12));
//! ```
//!
//! Only one cycle is contracted per run, and the default [`SingleStart`] detector searches from
//! a single vertex. [`Arborescence::check`] tells whether a result is a proper arborescence.

extern crate alloc;

mod algo;
mod edge;
mod error;
mod graph;
mod impls;
mod incidence;
mod weight;

pub use crate::algo::contraction::{contract, Contraction};
pub use crate::algo::cycle::{Cycle, CycleDetector, Exhaustive, SingleStart};
pub use crate::algo::selection::{Incoming, SelectionMap};
pub use crate::algo::tree::reconstruct;
pub use crate::edge::{Edge, RawEdge};
pub use crate::error::Error;
pub use crate::graph::Graph;
pub use crate::impls::default::DefaultArborescence;
pub use crate::incidence::Incidence;
pub use crate::weight::Weight;

/// Zero-based vertex index.
pub type Vertex = usize;

/// A minimum spanning arborescence algorithm.
pub trait Arborescence {
    type Detector: CycleDetector;
    type Error;

    /// Compute the arborescence of `graph` rooted at `root`. `graph` itself is left untouched.
    fn execute<W: Weight>(&self, graph: &Graph<W>, root: Vertex) -> Graph<W>;

    /// Verify that `tree` is an arborescence rooted at `root` spanning all of its vertices.
    fn check<W: Weight>(&self, tree: &Graph<W>, root: Vertex) -> Result<(), Self::Error>;
}

/// Run [`DefaultArborescence`] with the [`SingleStart`] cycle detector.
pub fn execute<W: Weight>(graph: &Graph<W>, root: Vertex) -> Graph<W> {
    DefaultArborescence::new(SingleStart).execute(graph, root)
}
