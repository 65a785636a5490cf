use crate::algo::selection::SelectionMap;
use crate::edge::Edge;
use crate::error::Error;
use crate::graph::Graph;
use crate::weight::Weight;

/// Turn a selection into a graph holding one edge per chosen entry.
///
/// The graph is sized to one past the largest vertex referenced, as key or as origin. Vertices
/// without an entry stay isolated.
pub fn reconstruct<W: Weight>(selection: &SelectionMap<W>) -> Result<Graph<W>, Error> {
    let size = selection
        .iter()
        .flat_map(|(v, incoming)| [Some(v), incoming.map(|i| i.origin)])
        .flatten()
        .max()
        .map_or(0, |v| v + 1);

    let mut tree = Graph::new(size)?;
    for (destination, incoming) in selection.iter() {
        if let Some(i) = incoming {
            tree.insert(Edge::new(i.origin, destination, i.weight));
        }
    }
    Ok(tree)
}
