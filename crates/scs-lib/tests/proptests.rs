use proptest::prelude::*;
use rustc_hash::FxHashSet;
use scs_lib::heap::LazyMaxHeap;
use scs_lib::overlap_matrix::pairwise_overlaps;
use scs_lib::{assemble, overlap, Algorithm, OverlapEdge, Workers};

fn read_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"ACGT".to_vec()), 1..8)
}

fn reads_strategy(max: usize) -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(read_strategy(), 1..max)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|w| w == needle)
}

proptest! {
    #[test]
    fn prop_output_length_bounds(reads in reads_strategy(7)) {
        let total: usize = reads.iter().map(Vec::len).sum();
        let longest = reads.iter().map(Vec::len).max().unwrap_or(0);
        for algorithm in Algorithm::ALL {
            let result = assemble(&reads, algorithm, Workers::Sequential).unwrap();
            prop_assert!(result.len() <= total, "{} too long", algorithm);
            prop_assert!(result.len() >= longest, "{} too short", algorithm);
            for read in &reads {
                prop_assert!(contains(&result, read), "{} lost a read", algorithm);
            }
        }
    }

    #[test]
    fn prop_exact_dominates_greedy(reads in reads_strategy(7)) {
        let exact = assemble(&reads, Algorithm::Exact, Workers::Sequential).unwrap();
        for algorithm in [Algorithm::GreedyDict, Algorithm::GreedyHeap, Algorithm::GreedyMatrix] {
            let greedy = assemble(&reads, algorithm, Workers::Sequential).unwrap();
            prop_assert!(exact.len() <= greedy.len(), "{} beat exact", algorithm);
        }
    }

    #[test]
    fn prop_worker_counts_give_same_edges(reads in reads_strategy(12)) {
        let sequential: FxHashSet<OverlapEdge> =
            pairwise_overlaps(&reads, Workers::Sequential).unwrap().into_iter().collect();
        for w in [2, 4] {
            let parallel = pairwise_overlaps(&reads, Workers::Fixed(w)).unwrap();
            prop_assert_eq!(parallel.len(), reads.len() * (reads.len() - 1));
            let parallel: FxHashSet<OverlapEdge> = parallel.into_iter().collect();
            prop_assert_eq!(&parallel, &sequential);
        }
    }

    #[test]
    fn prop_overlap_hint_is_transparent(a in read_strategy(), b in read_strategy()) {
        let full = overlap(&a, &b, 1);
        for hint in 0..=full {
            prop_assert_eq!(overlap(&a, &b, hint), full);
        }
        if full > 0 {
            prop_assert!(b.starts_with(&a[a.len() - full..]));
        }
    }

    #[test]
    fn prop_deleted_pairs_never_pop(
        edges in prop::collection::vec((0usize..6, 0usize..6, 0usize..10), 0..40),
        deleted in prop::collection::vec((0usize..6, 0usize..6), 0..10),
    ) {
        let mut heap = LazyMaxHeap::new();
        let (early, late) = deleted.split_at(deleted.len() / 2);
        for &(s, t) in early {
            heap.delete(s, t);
        }
        for &(s, t, o) in &edges {
            heap.push(OverlapEdge::new(s, t, o));
        }
        for &(s, t) in late {
            heap.delete(s, t).delete(s, t);
        }

        let mut last = usize::MAX;
        while let Ok(edge) = heap.pop_max() {
            prop_assert!(!deleted.contains(&(edge.source, edge.target)));
            prop_assert!(edge.overlap <= last);
            last = edge.overlap;
        }
    }
}
