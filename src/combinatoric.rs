//! Combinatorial helper functions that
//! build the candidate space of a clique search
//! and split it among workers.
use std::ops::Range;

use crate::{
    debug::ValidationError,
    graph::Candidate,
};

/// All strictly increasing sequences of length `k` over `0..n` in
/// lexicographic order. `k > n` simply yields no candidates.
pub fn generate_combinations(k: usize, n: usize) -> Result<Vec<Candidate>, ValidationError> {
    if k == 0 {
        return Err(ValidationError::InvalidCliqueSize(0));
    }
    if k > n {
        return Ok(Vec::new());
    }

    Ok(extend_combinations(k, n))
}

// Requires 1 <= k <= n, which carries over to (k-1, n-1).
fn extend_combinations(k: usize, n: usize) -> Vec<Candidate> {
    if k == 1 {
        return (0..n).map(|vertex| vec![vertex]).collect();
    }

    let prefixes = extend_combinations(k - 1, n - 1);
    let mut combinations = Vec::with_capacity(binomial(n, k).unwrap_or(0));
    for prefix in prefixes {
        let last = prefix[prefix.len() - 1];
        for vertex in (last + 1)..n {
            let mut combination = Vec::with_capacity(k);
            combination.extend_from_slice(&prefix);
            combination.push(vertex);
            combinations.push(combination);
        }
    }

    combinations
}

/// C(n, k) or `None` if it doesn't fit into a usize.
pub fn binomial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }

    let k = k.min(n - k);
    let mut result: usize = 1;
    for i in 0..k {
        // result * (n - i) is divisible by (i + 1) at every step.
        result = result.checked_mul(n - i)? / (i + 1);
    }
    Some(result)
}

/// Splits `0..total` into `workers` contiguous ranges where range `i`
/// is `total*i/workers .. total*(i+1)/workers`.
pub fn partition_ranges(total: usize, workers: usize) -> Result<Vec<Range<usize>>, ValidationError> {
    if workers == 0 {
        return Err(ValidationError::InvalidWorkerCount(0));
    }

    let bound = |i: usize| (total as u128 * i as u128 / workers as u128) as usize;
    Ok((0..workers).map(|i| bound(i)..bound(i + 1)).collect())
}
