//! Shortest common superstring assembly of overlapping reads.
//!
//! The core lives in [`assembly`]: an exact solver over all read orderings
//! and three greedy variants that differ only in how they keep overlap
//! bookkeeping (hash map, lazy-deletion heap, dense matrix). Everything else
//! here is glue around it: reading fragments from FASTA/FASTQ, turning the
//! assembled DNA into candidate proteins, and the config used by the CLI.

pub mod assembly;
pub mod cli;
pub mod error;
pub mod heap;
pub mod io;
pub mod overlap;
pub mod overlap_matrix;
pub mod pipeline;
pub mod translation;

pub use assembly::{assemble, Algorithm};
pub use cli::Workers;
pub use error::{AssemblyError, Result};
pub use overlap::{overlap, OverlapEdge, ReadId};
