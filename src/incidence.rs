use alloc::vec;
use alloc::vec::Vec;

use crate::error::Error;
use crate::Vertex;

/// A dense `size × size` matrix where cell `(u, v)` holds the weight of the edge `u → v`, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Incidence<W> {
    size: usize,
    cells: Vec<Option<W>>,
}

impl<W> Default for Incidence<W> {
    fn default() -> Self {
        Self {
            size: 0,
            cells: Vec::new(),
        }
    }
}

impl<W: Copy> Incidence<W> {
    /// Fails with [`Error::TooManyVertices`] when `size × size` cells cannot be allocated.
    pub fn new(size: usize) -> Result<Self, Error> {
        let len = size
            .checked_mul(size)
            .ok_or(Error::TooManyVertices(size))?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| Error::TooManyVertices(size))?;
        cells.resize(len, None);
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, u: Vertex, v: Vertex) -> Option<W> {
        self.index(u, v).and_then(|i| self.cells[i])
    }

    pub(crate) fn set(&mut self, u: Vertex, v: Vertex, weight: W) {
        if let Some(i) = self.index(u, v) {
            self.cells[i] = Some(weight);
        }
    }

    /// Mark every cell of column `v` as absent, i.e. drop all edges entering `v`.
    pub(crate) fn clear_column(&mut self, v: Vertex) {
        if v >= self.size {
            return;
        }
        for u in 0..self.size {
            self.cells[u * self.size + v] = None;
        }
    }

    /// Present cells of row `u`, in ascending column order.
    pub fn row(&self, u: Vertex) -> impl Iterator<Item = (Vertex, W)> + '_ {
        let cells: &[Option<W>] = if u < self.size {
            &self.cells[u * self.size..(u + 1) * self.size]
        } else {
            &[]
        };
        cells
            .iter()
            .enumerate()
            .filter_map(|(v, w)| w.map(|w| (v, w)))
    }

    /// Returns the matrix `R` with `R[v][u] = self[u][v]`.
    pub fn transpose(&self) -> Self {
        let mut reversed = Self {
            size: self.size,
            cells: vec![None; self.cells.len()],
        };
        for u in 0..self.size {
            for (v, w) in self.row(u) {
                reversed.set(v, u, w);
            }
        }
        reversed
    }

    fn index(&self, u: Vertex, v: Vertex) -> Option<usize> {
        (u < self.size && v < self.size).then(|| u * self.size + v)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::Incidence;
    use crate::error::Error;

    #[test]
    fn transpose_swaps_origin_and_destination() {
        let mut m = Incidence::new(3).unwrap();
        m.set(0, 1, 7);
        m.set(2, 1, 0);
        let r = m.transpose();
        assert_eq!(r.get(1, 0), Some(7));
        assert_eq!(r.get(1, 2), Some(0));
        assert_eq!(r.get(0, 1), None);
        assert_eq!(r.row(1).collect::<Vec<_>>(), [(0, 7), (2, 0)]);
    }

    #[test]
    fn clearing_a_column_keeps_outgoing_edges() {
        let mut m = Incidence::new(2).unwrap();
        m.set(0, 1, 1);
        m.set(1, 0, 2);
        m.clear_column(1);
        assert_eq!(m.get(0, 1), None);
        assert_eq!(m.get(1, 0), Some(2));
    }

    #[test]
    fn oversized_matrix_is_rejected() {
        assert_eq!(
            Incidence::<i32>::new(usize::MAX),
            Err(Error::TooManyVertices(usize::MAX))
        );
    }

    #[test]
    fn out_of_range_lookups_are_absent() {
        let m = Incidence::<i32>::new(2).unwrap();
        assert_eq!(m.get(5, 0), None);
        assert_eq!(m.row(9).count(), 0);
    }
}
