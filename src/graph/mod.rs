//! Representation of graphs as dense
//! adjacency matrices together with the
//! checks needed before they are searched.
mod adjacency_matrix;
pub use adjacency_matrix::AdjacencyMatrix;

pub type VertexIndex = usize;

/// A strictly increasing list of vertices
/// that is checked for the clique property.
pub type Candidate = Vec<VertexIndex>;

#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum GraphError {
    #[error("Adjacency matrix is empty")]
    Empty,
    #[error("Adjacency matrix is not square: row {row} has {found} entries, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Adjacency matrix entry ({row}, {column}) is {value}, expected 0 or 1")]
    NonBinaryEntry { row: usize, column: usize, value: i64 },
    #[error("Adjacency matrix is not symmetric at ({0}, {1})")]
    Asymmetric(VertexIndex, VertexIndex),
    #[error("Vertex {vertex} is out of bounds for a graph with {size} vertices")]
    VertexOutOfBounds { vertex: i64, size: usize },
}
