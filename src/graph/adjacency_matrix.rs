use custom_debug_derive::Debug;
use std::convert::TryFrom;

use super::{GraphError, VertexIndex};

#[allow(clippy::ptr_arg)]
fn rows_fmt(rows: &Vec<Vec<bool>>, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    writeln!(f, "[")?;
    for row in rows {
        for entry in row {
            write!(f, "{}", if *entry { '1' } else { '0' })?;
        }
        writeln!(f)?;
    }
    write!(f, "]")
}

/// Fixed size undirected graph stored as a dense 0/1 matrix.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct AdjacencyMatrix {
    size: usize,
    #[debug(with = "rows_fmt")]
    rows: Vec<Vec<bool>>,
}

impl AdjacencyMatrix {
    /// Builds the matrix from integer rows as they are read from input files.
    /// Every row must have as many entries as there are rows and every
    /// entry must be either 0 or 1.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self, GraphError> {
        let size = rows.len();
        let mut matrix = Vec::with_capacity(size);

        for (row_index, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(GraphError::NotSquare {
                    row: row_index,
                    expected: size,
                    found: row.len(),
                });
            }

            let row = row
                .into_iter()
                .enumerate()
                .map(|(column, value)| match value {
                    0 => Ok(false),
                    1 => Ok(true),
                    _ => Err(GraphError::NonBinaryEntry {
                        row: row_index,
                        column,
                        value,
                    }),
                })
                .collect::<Result<Vec<bool>, GraphError>>()?;
            matrix.push(row);
        }

        Ok(AdjacencyMatrix { size, rows: matrix })
    }

    /// Graph with `n` vertices and no edges.
    #[cfg(test)]
    pub fn new_empty(n: usize) -> Self {
        AdjacencyMatrix {
            size: n,
            rows: vec![vec![false; n]; n],
        }
    }

    /// Graph with `n` vertices where every pair of distinct vertices is adjacent.
    #[cfg(test)]
    pub fn new_complete(n: usize) -> Self {
        let mut graph = Self::new_empty(n);
        for start in 0..n {
            for end in (start + 1)..n {
                graph.add_edge(start, end);
            }
        }
        graph
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn number_edges(&self) -> usize {
        self.iterate_edges().count()
    }

    /// Sets both arcs of the edge. Panics on indices outside the graph.
    #[cfg(test)]
    pub fn add_edge(&mut self, start: VertexIndex, end: VertexIndex) {
        self.rows[start][end] = true;
        self.rows[end][start] = true;
    }

    /// Only sets the arc from `start` to `end`.
    #[cfg(test)]
    pub fn add_arc(&mut self, start: VertexIndex, end: VertexIndex) {
        self.rows[start][end] = true;
    }

    #[cfg(test)]
    pub fn remove_edge(&mut self, start: VertexIndex, end: VertexIndex) {
        self.rows[start][end] = false;
        self.rows[end][start] = false;
    }

    /// Callers guarantee both indices to be in bounds.
    #[inline]
    pub fn lookup_edge(&self, start: VertexIndex, end: VertexIndex) -> bool {
        self.rows[start][end]
    }

    /// Edges of the upper triangle, i.e. `start < end`.
    pub fn iterate_edges(&self) -> impl Iterator<Item = (VertexIndex, VertexIndex)> + '_ {
        self.rows.iter().enumerate().flat_map(|(start, row)| {
            row.iter()
                .enumerate()
                .skip(start + 1)
                .filter(|(_, adjacent)| **adjacent)
                .map(move |(end, _)| (start, end))
        })
    }

    pub fn check_vertex(&self, vertex: VertexIndex) -> Result<(), GraphError> {
        if vertex < self.size {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfBounds {
                vertex: i64::try_from(vertex).unwrap_or(i64::MAX),
                size: self.size,
            })
        }
    }

    /// Converts raw integers into vertices of this graph.
    pub fn to_vertices(&self, raw: &[i64]) -> Result<Vec<VertexIndex>, GraphError> {
        raw.iter()
            .map(|value| match VertexIndex::try_from(*value) {
                Ok(vertex) if vertex < self.size => Ok(vertex),
                _ => Err(GraphError::VertexOutOfBounds {
                    vertex: *value,
                    size: self.size,
                }),
            })
            .collect()
    }

    /// Reports the first pair (row-major) with differing arcs.
    pub fn check_symmetric(&self) -> Result<(), GraphError> {
        for start in 0..self.size {
            for end in (start + 1)..self.size {
                if self.rows[start][end] != self.rows[end][start] {
                    return Err(GraphError::Asymmetric(start, end));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_rows() {
        let rows = vec![vec![0, 1, 1], vec![1, 0, 0], vec![1, 0, 0]];
        let graph = AdjacencyMatrix::from_rows(rows).unwrap();

        let mut expected = AdjacencyMatrix::new_empty(3);
        expected.add_edge(0, 1);
        expected.add_edge(0, 2);

        assert_eq!(expected, graph);
        assert_eq!(3, graph.size());
        assert_eq!(2, graph.number_edges());
    }

    #[test]
    fn test_from_rows_not_square() {
        let too_short = vec![vec![0, 1], vec![1]];
        assert_eq!(
            Err(GraphError::NotSquare {
                row: 1,
                expected: 2,
                found: 1
            }),
            AdjacencyMatrix::from_rows(too_short)
        );

        let rectangular = vec![vec![0, 1, 0], vec![1, 0, 0]];
        assert_eq!(
            Err(GraphError::NotSquare {
                row: 0,
                expected: 2,
                found: 3
            }),
            AdjacencyMatrix::from_rows(rectangular)
        );
    }

    #[test]
    fn test_from_rows_non_binary() {
        let rows = vec![vec![0, 2], vec![1, 0]];
        assert_eq!(
            Err(GraphError::NonBinaryEntry {
                row: 0,
                column: 1,
                value: 2
            }),
            AdjacencyMatrix::from_rows(rows)
        );
    }

    #[test]
    fn test_iterate_edges() {
        let mut graph = AdjacencyMatrix::new_empty(5);
        graph.add_edge(3, 1);
        graph.add_edge(0, 4);
        graph.add_edge(2, 3);

        let edges = graph.iterate_edges().collect::<Vec<_>>();
        assert_eq!(vec![(0, 4), (1, 3), (2, 3)], edges);

        let complete = AdjacencyMatrix::new_complete(6);
        assert_eq!(15, complete.number_edges());
        assert!(!complete.lookup_edge(2, 2));
    }

    #[test]
    fn test_check_symmetric() {
        let mut graph = AdjacencyMatrix::new_complete(4);
        assert_eq!(Ok(()), graph.check_symmetric());

        graph.remove_edge(1, 2);
        graph.add_arc(2, 1);
        assert_eq!(Err(GraphError::Asymmetric(1, 2)), graph.check_symmetric());
    }

    #[test]
    fn test_to_vertices() {
        let graph = AdjacencyMatrix::new_empty(4);
        assert_eq!(Ok(vec![3, 0, 2]), graph.to_vertices(&[3, 0, 2]));
        assert_eq!(
            Err(GraphError::VertexOutOfBounds {
                vertex: -1,
                size: 4
            }),
            graph.to_vertices(&[1, -1])
        );
        assert_eq!(
            Err(GraphError::VertexOutOfBounds { vertex: 4, size: 4 }),
            graph.to_vertices(&[4])
        );
        assert!(graph.check_vertex(3).is_ok());
        assert!(graph.check_vertex(4).is_err());
    }
}
