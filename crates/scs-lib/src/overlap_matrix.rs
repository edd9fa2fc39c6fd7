//! All-pairs overlap precomputation.
//!
//! Every ordered pair of distinct reads gets one edge. With more than one
//! worker the first index of the pair space is cut into contiguous ranges at
//! `floor(n * j / w)`; each range is handled by one rayon task that reads the
//! shared read slice and returns its own edge list. Partitions are
//! concatenated only after every task finished.

use crate::cli::{num_cpus, Workers};
use crate::error::Result;
use crate::overlap::{overlap, OverlapEdge};
use rayon::prelude::*;
use std::ops::Range;
use tracing::{debug, info};

/// Compute the overlap of every ordered pair of distinct reads. Read ids are
/// the slice indices.
///
/// The returned edge set is the same for every worker count; only the order
/// of the edges may differ.
pub fn pairwise_overlaps<S>(reads: &[S], workers: Workers) -> Result<Vec<OverlapEdge>>
where
    S: AsRef<[u8]> + Sync,
{
    let n = reads.len();
    // More partitions than sources only adds empty ranges.
    let partitions = workers.resolve().min(n);

    if partitions <= 1 || n < 2 {
        return Ok(overlaps_for_sources(reads, 0..n));
    }

    let ranges = partition_ranges(n, partitions);
    info!(
        "Computing {} pairwise overlaps across {} partitions",
        n * (n - 1),
        ranges.len()
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(partitions.min(num_cpus()))
        .build()?;

    let parts: Vec<Vec<OverlapEdge>> = pool.install(|| {
        ranges
            .into_par_iter()
            .map(|range| {
                debug!("overlap partition {:?}", range);
                overlaps_for_sources(reads, range)
            })
            .collect()
    });

    let mut edges = Vec::with_capacity(n * (n - 1));
    for part in parts {
        edges.extend(part);
    }
    Ok(edges)
}

/// Split `0..n` into `parts` contiguous ranges with boundaries at
/// `floor(n * j / parts)`. Ranges may be empty when `parts > n`.
pub fn partition_ranges(n: usize, parts: usize) -> Vec<Range<usize>> {
    let parts = parts.max(1);
    let bound = |j: usize| (n as u128 * j as u128 / parts as u128) as usize;
    (0..parts).map(|j| bound(j)..bound(j + 1)).collect()
}

/// Outgoing edges of every source id in `sources` to every other read.
fn overlaps_for_sources<S: AsRef<[u8]>>(reads: &[S], sources: Range<usize>) -> Vec<OverlapEdge> {
    let n = reads.len();
    let mut edges = Vec::with_capacity(sources.len() * n.saturating_sub(1));
    for i in sources {
        let a = reads[i].as_ref();
        for (j, b) in reads.iter().enumerate() {
            if i != j {
                edges.push(OverlapEdge::new(i, j, overlap(a, b.as_ref(), 1)));
            }
        }
    }
    edges
}
