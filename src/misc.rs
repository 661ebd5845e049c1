use std::{convert::TryFrom, time::Duration};

use crate::{debug::ValidationError, graph::VertexIndex};

#[cfg(not(tarpaulin_include))]
pub fn do_if_some<F, T>(optional: &mut Option<T>, f: F)
where
    F: FnOnce(&mut T),
{
    if let Some(val) = optional {
        f(val);
    }
}

/// What to do with the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Check a single list of vertices.
    Verify(Vec<VertexIndex>),
    /// Enumerate cliques of the given size on the main thread.
    Serial(usize),
    /// Enumerate cliques of the given size with a number of workers.
    Parallel { clique_size: usize, workers: usize },
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Verify(_) => "verify",
            Self::Serial(_) => "serial",
            Self::Parallel { .. } => "parallel",
        }
    }
}

#[derive(Debug, Default)]
pub struct Settings {
    /// Don't reject adjacency matrices that
    /// differ from their transposition.
    pub allow_asymmetric: bool,
    /// Give up waiting for parallel workers after this long.
    pub timeout: Option<Duration>,
}

pub fn clique_size(k: i64) -> Result<usize, ValidationError> {
    match usize::try_from(k) {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ValidationError::InvalidCliqueSize(k)),
    }
}

pub fn worker_count(p: i64) -> Result<usize, ValidationError> {
    match usize::try_from(p) {
        Ok(workers) if workers > 0 => Ok(workers),
        _ => Err(ValidationError::InvalidWorkerCount(p)),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_clique_size() {
        assert_eq!(Ok(3), clique_size(3));
        assert_eq!(Err(ValidationError::InvalidCliqueSize(0)), clique_size(0));
        assert_eq!(Err(ValidationError::InvalidCliqueSize(-4)), clique_size(-4));
    }

    #[test]
    fn test_worker_count() {
        assert_eq!(Ok(1), worker_count(1));
        assert_eq!(Err(ValidationError::InvalidWorkerCount(0)), worker_count(0));
        assert_eq!(
            Err(ValidationError::InvalidWorkerCount(-1)),
            worker_count(-1)
        );
    }
}
