use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::Vertex;

/// A directed, weighted edge between two zero-based vertices.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(
    try_from = "RawEdge<W>",
    into = "RawEdge<W>",
    bound(
        serialize = "W: Clone + Serialize",
        deserialize = "W: Deserialize<'de>"
    )
)]
pub struct Edge<W> {
    origin: Vertex,
    destination: Vertex,
    weight: W,
}

impl<W> Edge<W> {
    pub fn new(origin: Vertex, destination: Vertex, weight: W) -> Self {
        Self {
            origin,
            destination,
            weight,
        }
    }

    pub fn origin(&self) -> Vertex {
        self.origin
    }

    pub fn destination(&self) -> Vertex {
        self.destination
    }
}

impl<W: Copy> Edge<W> {
    pub fn weight(&self) -> W {
        self.weight
    }
}

/// An edge as it appears in a graph file, with one-based vertex numbers.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
pub struct RawEdge<W> {
    pub origin: usize,
    pub destination: usize,
    pub weight: W,
}

impl<W> TryFrom<RawEdge<W>> for Edge<W> {
    type Error = Error;

    fn try_from(e: RawEdge<W>) -> Result<Self, Self::Error> {
        match (e.origin.checked_sub(1), e.destination.checked_sub(1)) {
            (Some(origin), Some(destination)) => Ok(Self::new(origin, destination, e.weight)),
            _ => Err(Error::ZeroVertexIndex),
        }
    }
}

impl<W> From<Edge<W>> for RawEdge<W> {
    fn from(e: Edge<W>) -> Self {
        Self {
            origin: e.origin + 1,
            destination: e.destination + 1,
            weight: e.weight,
        }
    }
}
