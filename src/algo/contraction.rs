use alloc::vec::Vec;

use itertools::{Either, Itertools};

use crate::algo::cycle::Cycle;
use crate::algo::selection::{Incoming, SelectionMap};
use crate::edge::Edge;
use crate::graph::Graph;
use crate::weight::Weight;

/// The outcome of breaking a cycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Contraction<W> {
    /// Cheapest edge with both ends on the cycle.
    pub min_internal: Edge<W>,
    /// The cycle edge that was dropped from the selection.
    pub removed: Edge<W>,
    /// The edge from outside the cycle that replaced it, with its original weight.
    pub added: Edge<W>,
    /// Weight `added` was compared with.
    pub adjusted: W,
}

/// Break `cycle` by swapping one of its edges for the best edge entering it from outside.
///
/// An edge `u → v` entering the cycle is scored as
/// `weight(u → v) - (weight(selected edge of v) - weight(cheapest cycle edge))`; the lowest
/// score wins, the first one in edge-list order on ties. An edge whose score does not fit in
/// `W` is skipped. Returns `None` and leaves the selection untouched when no edge is left.
pub fn contract<W: Weight>(
    graph: &Graph<W>,
    selection: &mut SelectionMap<W>,
    cycle: &Cycle,
) -> Option<Contraction<W>> {
    let (internal, external): (Vec<_>, Vec<_>) = graph
        .edges()
        .iter()
        .filter(|e| cycle.contains(e.destination()))
        .partition_map(|e| {
            if cycle.contains(e.origin()) {
                Either::Left(*e)
            } else {
                Either::Right(*e)
            }
        });

    let min_internal = *internal.iter().min_by_key(|e| e.weight())?;

    let (added, adjusted) = external
        .into_iter()
        .filter_map(|e| {
            let current = selection.get(e.destination())?;
            let adjusted = e
                .weight()
                .checked_sub(&current.weight)
                .and_then(|w| w.checked_add(&min_internal.weight()));
            if adjusted.is_none() {
                log::warn!(
                    "{} --> {}: adjusted weight overflows, skipping",
                    e.origin(),
                    e.destination()
                );
            }
            Some((e, adjusted?))
        })
        .inspect(|(e, adjusted)| {
            log::trace!(
                "{} --> {}: {} adjusted to {adjusted}",
                e.origin(),
                e.destination(),
                e.weight()
            )
        })
        .min_by_key(|(_, adjusted)| *adjusted)?;

    let destination = added.destination();
    let previous = selection.replace(
        destination,
        Incoming {
            origin: added.origin(),
            weight: added.weight(),
        },
    )?;

    Some(Contraction {
        min_internal,
        removed: Edge::new(previous.origin, destination, previous.weight),
        added,
        adjusted,
    })
}
