use crate::assembly::Algorithm;
use crate::error::{AssemblyError, Result};
use std::path::{Path, PathBuf};

/// Default minimum protein length kept by the downstream translation step.
pub const DEFAULT_MIN_PROTEIN_LEN: usize = 20;

#[derive(Clone, Debug)]
pub struct AssembleConfig {
    /// Input FASTA/FASTQ file (`-` for stdin)
    pub input: PathBuf,
    /// Output file for the assembled sequence (None = don't write)
    pub output: Option<PathBuf>,
    /// Assembly strategy
    pub algorithm: Algorithm,
    /// Workers for the initial pairwise overlap computation
    pub workers: Workers,
    /// Force FASTA (`Some(true)`) or FASTQ (`Some(false)`) parsing; None = detect
    pub fasta: Option<bool>,
    /// Minimum amino-acid length for candidate proteins
    pub min_protein_len: usize,
}

impl Default for AssembleConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: None,
            algorithm: Algorithm::GreedyHeap,
            workers: Workers::Sequential,
            fasta: None,
            min_protein_len: DEFAULT_MIN_PROTEIN_LEN,
        }
    }
}

/// How the initial pairwise overlap computation is split across threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Workers {
    /// Single thread, no pool
    #[default]
    Sequential,
    /// One partition per available core
    AllCores,
    /// Exactly this many partitions (always > 1)
    Fixed(usize),
}

impl Workers {
    /// Map the external worker count: 1 = sequential, -1 = all cores,
    /// n > 1 = n partitions. Anything else is rejected.
    pub fn from_count(count: i64) -> Result<Self> {
        match count {
            1 => Ok(Workers::Sequential),
            -1 => Ok(Workers::AllCores),
            n if n > 1 => Ok(Workers::Fixed(usize::try_from(n).unwrap_or(usize::MAX))),
            n => Err(AssemblyError::InvalidWorkers(n)),
        }
    }

    /// Number of partitions to split the pair space into.
    pub fn resolve(self) -> usize {
        match self {
            Workers::Sequential => 1,
            Workers::AllCores => num_cpus(),
            Workers::Fixed(n) => n,
        }
    }
}

pub fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(8)
}

/// Check if a path represents stdin/stdout (i.e. is "-")
pub fn is_stdio_path(path: &Path) -> bool {
    path.as_os_str() == "-"
}
