use alloc::vec;
use alloc::vec::Vec;

use crate::error::Error;
use crate::incidence::Incidence;
use crate::weight::Weight;
use crate::Vertex;

/// The edge a vertex has chosen as its incoming edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Incoming<W> {
    pub origin: Vertex,
    pub weight: W,
}

/// For every non-root vertex, the incoming edge it currently uses, or `None` when it has no
/// incoming edge at all.
///
/// Stored as an array indexed by vertex. Each entry points at a predecessor, so the map is a
/// functional graph that may contain a cycle. The root is never a key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionMap<W> {
    root: Vertex,
    entries: Vec<Option<Incoming<W>>>,
}

impl<W: Weight> SelectionMap<W> {
    /// Pick the cheapest incoming edge of every vertex but `root` from the reversed incidence
    /// matrix. Origins are scanned in ascending order and a candidate replaces the current
    /// minimum when it is less than *or equal to* it, so ties go to the highest origin.
    pub fn select(reversed: &Incidence<W>, root: Vertex) -> Self {
        let mut entries = vec![None; reversed.size()];
        for (destination, entry) in entries.iter_mut().enumerate() {
            if destination == root {
                continue;
            }
            *entry = reversed
                .row(destination)
                .fold(None, |best: Option<Incoming<W>>, (origin, weight)| match best {
                    Some(b) if weight > b.weight => Some(b),
                    _ => Some(Incoming { origin, weight }),
                });

            match entry {
                Some(Incoming { origin, weight }) => {
                    log::trace!("{destination} <-- {origin} ({weight})")
                }
                None => log::trace!("{destination} has no incoming edge"),
            }
        }

        Self { root, entries }
    }

    /// Build a map from explicit entries, one per vertex. The entry at `root` is discarded.
    /// Every origin must be one of the vertices covered.
    pub fn from_entries(
        root: Vertex,
        mut entries: Vec<Option<Incoming<W>>>,
    ) -> Result<Self, Error> {
        let size = entries.len();
        if let Some(i) = entries.iter().flatten().find(|i| i.origin >= size) {
            return Err(Error::VertexOutOfRange {
                vertex: i.origin,
                size,
            });
        }
        if let Some(entry) = entries.get_mut(root) {
            *entry = None;
        }
        Ok(Self { root, entries })
    }

    pub fn root(&self) -> Vertex {
        self.root
    }

    /// Number of vertices covered, root included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every non-root vertex, in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = Vertex> + '_ {
        (0..self.entries.len()).filter(move |&v| v != self.root)
    }

    pub fn contains_key(&self, v: Vertex) -> bool {
        v != self.root && v < self.entries.len()
    }

    /// The chosen incoming edge of `v`; `None` for the root, unknown vertices and vertices
    /// without an incoming edge.
    pub fn get(&self, v: Vertex) -> Option<&Incoming<W>> {
        self.entries.get(v).and_then(Option::as_ref)
    }

    pub fn predecessor(&self, v: Vertex) -> Option<Vertex> {
        self.get(v).map(|i| i.origin)
    }

    /// `(vertex, chosen edge)` for every key, in ascending vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (Vertex, Option<&Incoming<W>>)> + '_ {
        self.keys().map(move |v| (v, self.get(v)))
    }

    /// Swap the entry of `v` for `incoming`, returning the entry it had before. Ignored for the
    /// root, for unknown vertices and for origins outside the map.
    pub fn replace(&mut self, v: Vertex, incoming: Incoming<W>) -> Option<Incoming<W>> {
        if !self.contains_key(v) || incoming.origin >= self.entries.len() {
            return None;
        }
        self.entries[v].replace(incoming)
    }
}
