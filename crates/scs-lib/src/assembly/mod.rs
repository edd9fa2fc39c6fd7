//! Superstring assemblers.
//!
//! All four strategies start from the same deduplicated read list and return
//! one string. [`Algorithm::Exact`] is the optimal-but-factorial oracle; the
//! three greedy variants repeatedly merge the pair with the largest overlap
//! and differ only in their overlap store.

mod exact;
mod greedy_dict;
mod greedy_heap;
mod greedy_matrix;
mod read_set;

pub use exact::exact;
pub use greedy_dict::greedy_dict;
pub use greedy_heap::greedy_heap;
pub use greedy_matrix::greedy_matrix;
pub use read_set::{dedup_reads, ReadSet};

use crate::cli::Workers;
use crate::error::{AssemblyError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Every ordering of the reads; guaranteed shortest, factorial time
    Exact,
    /// Greedy merging with overlaps kept in a hash map
    GreedyDict,
    /// Greedy merging with overlaps kept in a lazy-deletion max-heap
    GreedyHeap,
    /// Greedy merging with overlaps kept in a dense matrix
    GreedyMatrix,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Exact,
        Algorithm::GreedyDict,
        Algorithm::GreedyHeap,
        Algorithm::GreedyMatrix,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Exact => "exact",
            Algorithm::GreedyDict => "greedy-dict",
            Algorithm::GreedyHeap => "greedy-heap",
            Algorithm::GreedyMatrix => "greedy-matrix",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = AssemblyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "exact" | "scs" => Ok(Algorithm::Exact),
            "greedy-dict" | "dict" => Ok(Algorithm::GreedyDict),
            "greedy-heap" | "heap" => Ok(Algorithm::GreedyHeap),
            "greedy-matrix" | "matrix" => Ok(Algorithm::GreedyMatrix),
            other => Err(AssemblyError::AlgorithmNotFound(other.to_string())),
        }
    }
}

/// Assemble `reads` into one superstring with the chosen strategy.
///
/// `workers` only affects the initial overlap computation of the greedy
/// variants; the merge loops themselves are sequential.
pub fn assemble<S: AsRef<[u8]>>(reads: &[S], algorithm: Algorithm, workers: Workers) -> Result<Vec<u8>> {
    match algorithm {
        Algorithm::Exact => exact(reads),
        Algorithm::GreedyDict => greedy_dict(reads, workers),
        Algorithm::GreedyHeap => greedy_heap(reads, workers),
        Algorithm::GreedyMatrix => greedy_matrix(reads, workers),
    }
}
