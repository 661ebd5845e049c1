//! Exhaustive search for cliques of a fixed size.
//! Every combination of k vertices is generated
//! and checked pairwise against the adjacency matrix.
use itertools::Itertools;

use crate::{
    combinatoric::generate_combinations,
    graph::{AdjacencyMatrix, Candidate, GraphError, VertexIndex},
    Error,
};

mod parallel;
#[cfg(test)]
pub use parallel::enumerate_parallel;
pub use parallel::{enumerate_parallel_with, ParallelSettings, WorkerReport};

/// Checks whether all given vertices are pairwise adjacent.
/// Lists with less than two vertices are trivially cliques.
pub fn verify_clique(graph: &AdjacencyMatrix, vertices: &[VertexIndex]) -> Result<bool, GraphError> {
    for vertex in vertices {
        graph.check_vertex(*vertex)?;
    }

    Ok(is_clique_unchecked(graph, vertices))
}

/// Vertices must be in bounds.
#[inline]
fn is_clique_unchecked(graph: &AdjacencyMatrix, vertices: &[VertexIndex]) -> bool {
    vertices
        .iter()
        .tuple_combinations()
        .all(|(start, end)| graph.lookup_edge(*start, *end))
}

/// All cliques of size `k` in lexicographic order.
pub fn enumerate_serial(graph: &AdjacencyMatrix, k: usize) -> Result<Vec<Candidate>, Error> {
    let candidates = generate_combinations(k, graph.size())?;
    Ok(candidates
        .into_iter()
        .filter(|candidate| is_clique_unchecked(graph, candidate))
        .collect())
}
