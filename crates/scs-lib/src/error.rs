use thiserror::Error;

/// Failures reported by the assembly core.
///
/// None of these are transient: inputs are in memory and every algorithm is
/// deterministic, so retrying the same call fails the same way.
#[derive(Debug, Error)]
pub enum AssemblyError {
    /// Nothing left to assemble after duplicate reads were collapsed.
    #[error("no reads to assemble")]
    EmptyInput,

    /// The overlap heap ran out of live entries before the merge loop finished.
    #[error("overlap queue exhausted before assembly completed")]
    EmptyQueue,

    #[error(
        "unknown assembly algorithm {0:?} (expected one of: exact, greedy-dict, greedy-heap, greedy-matrix)"
    )]
    AlgorithmNotFound(String),

    #[error("invalid worker count {0}: use -1 for all cores or a positive number")]
    InvalidWorkers(i64),

    #[error("failed to build overlap worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, AssemblyError>;
