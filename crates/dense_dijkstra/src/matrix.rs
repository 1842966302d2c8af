use std::fmt;

use crate::error::Error;
use crate::error::Result;

/// Glyph used when rendering a missing edge.
pub const NO_EDGE_GLYPH: &str = "∞";

/// Dense `V x V` table of edge weights, stored row-major.
///
/// `weight(i, j) == None` means there is no direct edge from `i` to `j`.
/// Nothing requires the matrix to be symmetric; undirected graphs are built
/// with [`AdjacencyMatrix::set_undirected_edge`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdjacencyMatrix {
    vertex_count: usize,
    cells: Vec<Option<u64>>,
}

impl AdjacencyMatrix {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            cells: vec![None; vertex_count * vertex_count],
        }
    }

    pub fn from_rows(rows: &[Vec<Option<u64>>]) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(Error::EmptyMatrix);
        }

        let mut cells = Vec::with_capacity(n * n);
        for (row, cols) in rows.iter().enumerate() {
            if cols.len() != n {
                return Err(Error::NotSquare {
                    row,
                    len: cols.len(),
                    expected: n,
                });
            }
            cells.extend_from_slice(cols);
        }

        Ok(Self {
            vertex_count: n,
            cells,
        })
    }

    pub fn from_edges(vertex_count: usize, edges: &[(u32, u32, u64)]) -> Self {
        let mut matrix = Self::new(vertex_count);
        for &(from, to, w) in edges {
            matrix.set_edge(from as usize, to as usize, w);
        }
        matrix
    }

    pub fn from_undirected_edges(vertex_count: usize, edges: &[(u32, u32, u64)]) -> Self {
        let mut matrix = Self::new(vertex_count);
        for &(a, b, w) in edges {
            matrix.set_undirected_edge(a as usize, b as usize, w);
        }
        matrix
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    #[inline]
    pub fn contains(&self, v: usize) -> bool {
        v < self.vertex_count
    }

    #[inline]
    pub fn weight(&self, from: usize, to: usize) -> Option<u64> {
        self.cells[self.index(from, to)]
    }

    #[inline]
    pub fn row(&self, v: usize) -> &[Option<u64>] {
        let start = v * self.vertex_count;
        &self.cells[start..start + self.vertex_count]
    }

    pub fn set_edge(&mut self, from: usize, to: usize, weight: u64) {
        let idx = self.index(from, to);
        self.cells[idx] = Some(weight);
    }

    pub fn try_set_edge(&mut self, from: usize, to: usize, weight: u64) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.set_edge(from, to, weight);
        Ok(())
    }

    pub fn set_undirected_edge(&mut self, a: usize, b: usize, weight: u64) {
        self.set_edge(a, b, weight);
        self.set_edge(b, a, weight);
    }

    pub fn remove_edge(&mut self, from: usize, to: usize) -> Option<u64> {
        let idx = self.index(from, to);
        self.cells[idx].take()
    }

    pub fn is_symmetric(&self) -> bool {
        let n = self.vertex_count;
        (0..n).all(|i| ((i + 1)..n).all(|j| self.weight(i, j) == self.weight(j, i)))
    }

    pub fn edges_vec(&self) -> Vec<(u32, u32, u64)> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for u in 0..self.vertex_count {
            for (v, cell) in self.row(u).iter().enumerate() {
                if let Some(w) = *cell {
                    edges.push((u as u32, v as u32, w));
                }
            }
        }
        edges
    }

    pub(crate) fn check_vertex(&self, vertex: usize) -> Result<()> {
        if self.contains(vertex) {
            Ok(())
        } else {
            Err(Error::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count,
            })
        }
    }

    #[inline]
    fn index(&self, from: usize, to: usize) -> usize {
        assert!(from < self.vertex_count, "from vertex out of range");
        assert!(to < self.vertex_count, "to vertex out of range");
        from * self.vertex_count + to
    }
}

// 1-based row and column headers; missing edges show as `∞`.
impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.vertex_count;
        let rule = "----".repeat(n);

        write!(f, "     ")?;
        for col in 0..n {
            write!(f, "{:>3} ", col + 1)?;
        }
        writeln!(f)?;
        writeln!(f, "    {rule}")?;

        for row in 0..n {
            write!(f, "{:>3} |", row + 1)?;
            for cell in self.row(row) {
                match cell {
                    Some(w) => write!(f, "{w:>3} ")?,
                    None => write!(f, "{NO_EDGE_GLYPH:>3} ")?,
                }
            }
            writeln!(f)?;
        }

        writeln!(f, "    {rule}")
    }
}

#[cfg(test)]
mod tests {
    use super::AdjacencyMatrix;
    use crate::error::Error;

    #[test]
    fn from_rows_rejects_ragged_input() {
        let rows = vec![vec![None, Some(1)], vec![Some(1)]];
        assert_eq!(
            AdjacencyMatrix::from_rows(&rows),
            Err(Error::NotSquare {
                row: 1,
                len: 1,
                expected: 2,
            })
        );
        assert_eq!(AdjacencyMatrix::from_rows(&[]), Err(Error::EmptyMatrix));
    }

    #[test]
    fn undirected_edges_are_symmetric() {
        let m = AdjacencyMatrix::from_undirected_edges(4, &[(0, 1, 3), (2, 3, 0)]);
        assert!(m.is_symmetric());
        assert_eq!(m.weight(1, 0), Some(3));
        assert_eq!(m.weight(3, 2), Some(0));
        assert_eq!(m.weight(0, 2), None);
        assert_eq!(m.edge_count(), 4);

        let d = AdjacencyMatrix::from_edges(2, &[(0, 1, 3)]);
        assert!(!d.is_symmetric());
        assert_eq!(d.edges_vec(), vec![(0, 1, 3)]);
    }

    #[test]
    fn try_set_edge_reports_bad_vertex() {
        let mut m = AdjacencyMatrix::new(3);
        assert_eq!(
            m.try_set_edge(0, 3, 1),
            Err(Error::VertexOutOfRange {
                vertex: 3,
                vertex_count: 3,
            })
        );
        assert!(m.try_set_edge(0, 2, 1).is_ok());
        assert_eq!(m.remove_edge(0, 2), Some(1));
        assert_eq!(m.weight(0, 2), None);
    }

    #[test]
    #[should_panic(expected = "to vertex out of range")]
    fn set_edge_panics_out_of_range() {
        AdjacencyMatrix::new(2).set_edge(0, 2, 1);
    }

    #[test]
    fn renders_table() {
        let m = AdjacencyMatrix::from_undirected_edges(2, &[(0, 1, 5)]);
        let expected = concat!(
            "       1   2 \n",
            "    --------\n",
            "  1 |  ∞   5 \n",
            "  2 |  5   ∞ \n",
            "    --------\n",
        );
        assert_eq!(m.to_string(), expected);
    }
}
