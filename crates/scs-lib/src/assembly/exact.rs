use super::read_set::dedup_reads;
use crate::error::Result;
use crate::overlap::{merge_pair, overlap};
use tracing::{info, warn};

/// Above this many distinct reads the exact search is impractically slow.
const EXACT_WARN_READS: usize = 10;

/// Shortest common superstring by exhaustive search.
///
/// Every permutation of the distinct reads is joined left to right on the
/// maximal overlap of each adjacent pair; the shortest join wins, and among
/// equally short joins the first permutation in lexicographic index order.
/// Factorial in the number of distinct reads: use as a correctness oracle.
pub fn exact<S: AsRef<[u8]>>(reads: &[S]) -> Result<Vec<u8>> {
    let reads = dedup_reads(reads)?;
    let n = reads.len();
    if n > EXACT_WARN_READS {
        warn!("Exact assembly over {} distinct reads explores {}! orderings", n, n);
    }
    info!("Exact assembly: {} distinct reads", n);

    // Adjacent-pair overlaps only depend on the pair, not on the permutation.
    let overlaps: Vec<Vec<usize>> = reads
        .iter()
        .map(|a| reads.iter().map(|b| overlap(a, b, 1)).collect())
        .collect();
    let total_len: usize = reads.iter().map(Vec::len).sum();

    let mut perm: Vec<usize> = (0..n).collect();
    let mut best_perm = perm.clone();
    let mut best_len = usize::MAX;
    loop {
        let saved: usize = perm.windows(2).map(|w| overlaps[w[0]][w[1]]).sum();
        let len = total_len - saved;
        if len < best_len {
            best_len = len;
            best_perm.copy_from_slice(&perm);
        }
        if !next_permutation(&mut perm) {
            break;
        }
    }

    let mut superstring = reads[best_perm[0]].clone();
    for w in best_perm.windows(2) {
        superstring = merge_pair(&superstring, &reads[w[1]], overlaps[w[0]][w[1]]);
    }
    debug_assert_eq!(superstring.len(), best_len);
    Ok(superstring)
}

/// Rearrange `perm` into the next lexicographic permutation. Returns false
/// (leaving `perm` untouched) once the last permutation has been reached.
fn next_permutation(perm: &mut [usize]) -> bool {
    let n = perm.len();
    if n < 2 {
        return false;
    }
    let mut i = n - 1;
    while i > 0 && perm[i - 1] >= perm[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = n - 1;
    while perm[j] <= perm[i - 1] {
        j -= 1;
    }
    perm.swap(i - 1, j);
    perm[i..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssemblyError;

    #[test]
    fn test_next_permutation_order() {
        let mut perm = vec![0, 1, 2];
        let mut seen = vec![perm.clone()];
        while next_permutation(&mut perm) {
            seen.push(perm.clone());
        }
        assert_eq!(
            seen,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }

    #[test]
    fn test_exact_beats_greedy_example() {
        let result = exact(&["ABCD", "CDBC", "BCDA"]).unwrap();
        assert_eq!(result, b"ABCDBCDA".to_vec());
    }

    #[test]
    fn test_exact_ties_keep_first_permutation() {
        // No overlaps at all: every ordering has the same length, so the
        // identity ordering is kept.
        let result = exact(&["AA", "CC", "GG"]).unwrap();
        assert_eq!(result, b"AACCGG".to_vec());
    }

    #[test]
    fn test_exact_empty() {
        let reads: [&[u8]; 0] = [];
        assert!(matches!(exact(&reads), Err(AssemblyError::EmptyInput)));
    }
}
