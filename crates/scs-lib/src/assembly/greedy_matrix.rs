use super::read_set::dedup_reads;
use crate::cli::Workers;
use crate::error::{AssemblyError, Result};
use crate::overlap::{merge_pair, overlap, ReadId};
use crate::overlap_matrix::pairwise_overlaps;
use tracing::{debug, info};

/// Cell value for "no edge". Distinct from a real overlap of 0.
const MISSING: i64 = -1;

/// Dense n×n overlap matrix addressed by slot, row = source, column = target.
///
/// Slots are fixed for the whole run. A merge writes the merged read into the
/// source's slot and retires the target's slot, so no row or column ever
/// has to be shifted.
#[derive(Debug, Clone)]
struct SlotMatrix {
    size: usize,
    cells: Vec<i64>,
}

impl SlotMatrix {
    fn new(size: usize) -> Self {
        Self { size, cells: vec![MISSING; size * size] }
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> i64 {
        self.cells[row * self.size + col]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, value: i64) {
        self.cells[row * self.size + col] = value;
    }

    /// First cell holding the largest live value, in row-major order.
    fn argmax(&self) -> Option<(usize, usize, i64)> {
        let mut best: Option<(usize, i64)> = None;
        for (idx, &value) in self.cells.iter().enumerate() {
            if value == MISSING {
                continue;
            }
            if best.map_or(true, |(_, v)| value > v) {
                best = Some((idx, value));
            }
        }
        best.map(|(idx, value)| (idx / self.size, idx % self.size, value))
    }

    fn clear(&mut self, slot: usize) {
        for k in 0..self.size {
            self.set(slot, k, MISSING);
            self.set(k, slot, MISSING);
        }
    }
}

/// A read living in a matrix slot.
#[derive(Debug)]
struct Slot {
    id: ReadId,
    read: Vec<u8>,
}

/// Stored cell as a length; a missing cell reads as 0.
#[inline]
fn cell_len(value: i64) -> usize {
    usize::try_from(value).unwrap_or(0)
}

/// Greedy assembly with overlaps kept in a dense matrix.
///
/// Selection is a full argmax scan per merge (ties resolve to the first cell
/// in row-major slot order).
pub fn greedy_matrix<S: AsRef<[u8]>>(reads: &[S], workers: Workers) -> Result<Vec<u8>> {
    let reads = dedup_reads(reads)?;
    let n = reads.len();
    info!("Greedy assembly (matrix): {} distinct reads", n);

    let mut matrix = SlotMatrix::new(n);
    for edge in pairwise_overlaps(&reads, workers)? {
        matrix.set(edge.source, edge.target, edge.overlap as i64);
    }
    let mut slots: Vec<Option<Slot>> = reads
        .into_iter()
        .enumerate()
        .map(|(id, read)| Some(Slot { id, read }))
        .collect();
    let mut next_id = n;

    for step in 0..n - 1 {
        let (si, sj, best) = matrix.argmax().ok_or(AssemblyError::EmptyQueue)?;
        let source = slots[si].take().ok_or(AssemblyError::EmptyQueue)?;
        let target = slots[sj].take().ok_or(AssemblyError::EmptyQueue)?;
        let merged = merge_pair(&source.read, &target.read, cell_len(best));
        let merged_id = next_id;
        next_id += 1;
        debug!(
            "merge {}: ({} -> {}, overlap {}) -> id {} in slot {}",
            step + 1, source.id, target.id, best, merged_id, si
        );

        let mut fresh = Vec::with_capacity(slots.len());
        for (k, slot) in slots.iter().enumerate() {
            if let Some(slot) = slot {
                let out = overlap(&merged, &slot.read, cell_len(matrix.get(sj, k)));
                let inc = overlap(&slot.read, &merged, cell_len(matrix.get(k, si)));
                fresh.push((k, out as i64, inc as i64));
            }
        }

        matrix.clear(si);
        matrix.clear(sj);
        for (k, out, inc) in fresh {
            matrix.set(si, k, out);
            matrix.set(k, si, inc);
        }
        slots[si] = Some(Slot { id: merged_id, read: merged });
    }

    slots
        .into_iter()
        .flatten()
        .next()
        .map(|slot| slot.read)
        .ok_or(AssemblyError::EmptyQueue)
}
