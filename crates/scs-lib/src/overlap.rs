//! Suffix/prefix overlap between reads.
//!
//! Reads are byte strings (the alphabet is never validated). An overlap is
//! directional: `overlap(a, b)` looks at the end of `a` and the start of `b`,
//! which in general differs from `overlap(b, a)`.

/// Identifier of a read inside one assembly run. Ids are handed out from a
/// monotonically increasing counter and never reused.
pub type ReadId = usize;

/// Directed overlap between two distinct reads: the longest suffix of
/// `source` that is also a prefix of `target` has length `overlap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlapEdge {
    pub source: ReadId,
    pub target: ReadId,
    pub overlap: usize,
}

impl OverlapEdge {
    pub fn new(source: ReadId, target: ReadId, overlap: usize) -> Self {
        Self { source, target, overlap }
    }

    #[inline]
    pub fn key(&self) -> (ReadId, ReadId) {
        (self.source, self.target)
    }
}

/// Length of the longest suffix of `a` that is a prefix of `b`, considering
/// only overlaps of at least `min_length` bytes. Returns 0 when there is none.
///
/// Candidate offsets in `a` are scanned left to right for `b`'s first
/// `min_length` bytes, so the first offset whose tail is a prefix of `b` is
/// the longest overlap. When `b` is shorter than `min_length` the probe is all
/// of `b`, which can yield a (full-length) overlap below `min_length`.
///
/// A `min_length` of 0 behaves like 1: a zero-length overlap is already the
/// "none found" answer.
pub fn overlap(a: &[u8], b: &[u8], min_length: usize) -> usize {
    let min_length = min_length.max(1);
    let probe = &b[..min_length.min(b.len())];
    if probe.is_empty() {
        return 0;
    }

    let mut start = 0;
    while let Some(offset) = find(&a[start..], probe) {
        start += offset;
        let tail = &a[start..];
        if b.starts_with(tail) {
            return tail.len();
        }
        start += 1;
    }
    0
}

/// Concatenate `a` and `b` with the first `overlap` bytes of `b` dropped.
#[inline]
pub fn merge_pair(a: &[u8], b: &[u8], overlap: usize) -> Vec<u8> {
    let tail = &b[overlap.min(b.len())..];
    let mut merged = Vec::with_capacity(a.len() + tail.len());
    merged.extend_from_slice(a);
    merged.extend_from_slice(tail);
    merged
}

#[inline]
fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}
