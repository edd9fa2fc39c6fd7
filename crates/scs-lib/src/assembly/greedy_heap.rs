use super::read_set::{dedup_reads, ReadSet};
use crate::cli::Workers;
use crate::error::{AssemblyError, Result};
use crate::heap::LazyMaxHeap;
use crate::overlap::{overlap, OverlapEdge, ReadId};
use crate::overlap_matrix::pairwise_overlaps;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

/// Greedy assembly with live overlaps kept in a lazy-deletion max-heap.
///
/// Edges of retired reads are tombstoned, never searched for, so selecting
/// the next merge is amortized O(log n); the per-merge cost is dominated by
/// computing the merged read's overlaps against every remaining read.
pub fn greedy_heap<S: AsRef<[u8]>>(reads: &[S], workers: Workers) -> Result<Vec<u8>> {
    let reads = dedup_reads(reads)?;
    let n = reads.len();
    info!("Greedy assembly (heap): {} distinct reads, workers={:?}", n, workers);

    let edges = pairwise_overlaps(&reads, workers)?;
    // Every overlap ever computed, used as a lower bound for the merged read.
    let mut known: FxHashMap<(ReadId, ReadId), usize> =
        edges.iter().map(|e| (e.key(), e.overlap)).collect();
    let mut heap = LazyMaxHeap::from_edges(edges);
    let mut set = ReadSet::new(reads);

    for step in 0..n - 1 {
        let OverlapEdge { source: i, target: j, overlap: best } = heap.pop_max()?;
        let (merged_id, merged) = set.take_merge(i, j, best).ok_or(AssemblyError::EmptyQueue)?;
        debug!("merge {}: ({} -> {}, overlap {}) -> id {}", step + 1, i, j, best, merged_id);

        heap.delete(i, j).delete(j, i);
        for id in set.ids() {
            heap.delete(id, i).delete(i, id).delete(id, j).delete(j, id);
        }

        let mut fresh = Vec::with_capacity(2 * set.len());
        for (id, read) in set.iter() {
            let out_hint = known.get(&(j, id)).copied().unwrap_or(1);
            let in_hint = known.get(&(id, i)).copied().unwrap_or(1);
            fresh.push(OverlapEdge::new(merged_id, id, overlap(&merged, read, out_hint)));
            fresh.push(OverlapEdge::new(id, merged_id, overlap(read, &merged, in_hint)));
        }
        for edge in fresh {
            known.insert(edge.key(), edge.overlap);
            heap.push(edge);
        }
        set.insert_merged(merged_id, merged);
    }

    debug!("heap finished with {} stale slots", heap.len());
    set.into_single().ok_or(AssemblyError::EmptyQueue)
}
