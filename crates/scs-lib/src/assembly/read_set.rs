use crate::error::{AssemblyError, Result};
use crate::overlap::{merge_pair, ReadId};
use rustc_hash::{FxHashMap, FxHashSet};

/// Collapse exact duplicates, keeping the first occurrence of each read.
/// Fails with [`AssemblyError::EmptyInput`] when nothing is left.
pub fn dedup_reads<S: AsRef<[u8]>>(reads: &[S]) -> Result<Vec<Vec<u8>>> {
    let mut seen: FxHashSet<&[u8]> = FxHashSet::default();
    let distinct: Vec<Vec<u8>> = reads
        .iter()
        .map(AsRef::as_ref)
        .filter(|r| seen.insert(*r))
        .map(<[u8]>::to_vec)
        .collect();

    if distinct.is_empty() {
        return Err(AssemblyError::EmptyInput);
    }
    Ok(distinct)
}

/// Working set of reads keyed by id, shared by the id-keyed greedy variants.
///
/// Starts with ids `0..n` and loses one entry per merge: two reads go out,
/// the merged read comes back under a fresh id.
#[derive(Debug)]
pub struct ReadSet {
    reads: FxHashMap<ReadId, Vec<u8>>,
    next_id: ReadId,
}

impl ReadSet {
    pub fn new(reads: Vec<Vec<u8>>) -> Self {
        let next_id = reads.len();
        Self {
            reads: reads.into_iter().enumerate().collect(),
            next_id,
        }
    }

    pub fn len(&self) -> usize {
        self.reads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reads.is_empty()
    }

    pub fn get(&self, id: ReadId) -> Option<&[u8]> {
        self.reads.get(&id).map(Vec::as_slice)
    }

    pub fn ids(&self) -> impl Iterator<Item = ReadId> + '_ {
        self.reads.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ReadId, &[u8])> + '_ {
        self.reads.iter().map(|(&id, r)| (id, r.as_slice()))
    }

    /// Remove `source` and `target` and return the merged string together
    /// with the id it will be inserted under. The merged read is not in the
    /// set until [`ReadSet::insert_merged`] is called.
    pub fn take_merge(&mut self, source: ReadId, target: ReadId, overlap: usize) -> Option<(ReadId, Vec<u8>)> {
        let a = self.reads.remove(&source)?;
        let Some(b) = self.reads.remove(&target) else {
            self.reads.insert(source, a);
            return None;
        };
        let id = self.next_id;
        self.next_id += 1;
        Some((id, merge_pair(&a, &b, overlap)))
    }

    pub fn insert_merged(&mut self, id: ReadId, read: Vec<u8>) {
        debug_assert!(id < self.next_id);
        self.reads.insert(id, read);
    }

    /// The last remaining read.
    pub fn into_single(mut self) -> Option<Vec<u8>> {
        if self.reads.len() != 1 {
            return None;
        }
        self.reads.drain().next().map(|(_, r)| r)
    }
}
