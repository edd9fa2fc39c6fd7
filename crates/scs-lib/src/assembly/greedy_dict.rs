use super::read_set::{dedup_reads, ReadSet};
use crate::cli::Workers;
use crate::error::{AssemblyError, Result};
use crate::overlap::{overlap, ReadId};
use crate::overlap_matrix::pairwise_overlaps;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

/// Greedy assembly with every live overlap kept in a hash map.
///
/// Picking the maximum is a linear scan over all live edges, so the whole
/// run is O(n³) in the number of distinct reads. Among equal maxima the map's
/// iteration order decides.
pub fn greedy_dict<S: AsRef<[u8]>>(reads: &[S], workers: Workers) -> Result<Vec<u8>> {
    let reads = dedup_reads(reads)?;
    let n = reads.len();
    info!("Greedy assembly (dict): {} distinct reads", n);

    let mut overlaps: FxHashMap<(ReadId, ReadId), usize> = pairwise_overlaps(&reads, workers)?
        .into_iter()
        .map(|e| (e.key(), e.overlap))
        .collect();
    let mut set = ReadSet::new(reads);

    for step in 0..n - 1 {
        let ((i, j), best) = overlaps
            .iter()
            .max_by_key(|(_, &len)| len)
            .map(|(&key, &len)| (key, len))
            .ok_or(AssemblyError::EmptyQueue)?;

        let (merged_id, merged) = set.take_merge(i, j, best).ok_or(AssemblyError::EmptyQueue)?;
        debug!("merge {}: ({} -> {}, overlap {}) -> id {}", step + 1, i, j, best, merged_id);

        // Anything the merged read inherits from j's tail or i's head is a
        // lower bound for its own overlaps.
        let mut fresh = Vec::with_capacity(2 * set.len());
        for (id, read) in set.iter() {
            let out_hint = overlaps.get(&(j, id)).copied().unwrap_or(1);
            let in_hint = overlaps.get(&(id, i)).copied().unwrap_or(1);
            fresh.push(((merged_id, id), overlap(&merged, read, out_hint)));
            fresh.push(((id, merged_id), overlap(read, &merged, in_hint)));
        }

        overlaps.remove(&(i, j));
        overlaps.remove(&(j, i));
        for id in set.ids() {
            overlaps.remove(&(id, i));
            overlaps.remove(&(i, id));
            overlaps.remove(&(id, j));
            overlaps.remove(&(j, id));
        }
        overlaps.extend(fresh);
        set.insert_merged(merged_id, merged);
    }

    set.into_single().ok_or(AssemblyError::EmptyQueue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dict_merges_best_pair_first() {
        // ABCD->BCDA (3) is the unique maximum; the remaining join has no overlap.
        let result = greedy_dict(&["ABCD", "CDBC", "BCDA"], Workers::Sequential).unwrap();
        assert_eq!(result.len(), 9);
        let s = String::from_utf8(result).unwrap();
        assert!(s.contains("ABCDA"));
        assert!(s.contains("CDBC"));
    }

    #[test]
    fn test_dict_two_reads() {
        let result = greedy_dict(&["ACGTT", "GTTCA"], Workers::Sequential).unwrap();
        assert_eq!(result, b"ACGTTCA".to_vec());
    }
}
