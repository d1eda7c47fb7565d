use alloc::vec::Vec;

use crate::PositionEntry;

/// Sum of `heights[0..upto)`.
pub fn height_prefix_sum(heights: &[u32], upto: usize) -> u64 {
    heights[..upto.min(heights.len())]
        .iter()
        .map(|&h| h as u64)
        .sum()
}

/// Prefix-sum table of item offsets.
///
/// Rebuilt wholesale after every structural mutation; lookups are
/// logarithmic over the partition invariant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PositionIndex {
    entries: Vec<PositionEntry>,
}

impl PositionIndex {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn from_heights(heights: &[u32]) -> Self {
        let mut index = Self::new();
        index.rebuild(heights);
        index
    }

    /// Re-derives all entries from `heights` in O(n).
    pub fn rebuild(&mut self, heights: &[u32]) {
        self.entries.clear();
        self.entries.reserve_exact(heights.len());
        let mut start = 0u64;
        for &height in heights {
            let end = start.saturating_add(height as u64);
            self.entries.push(PositionEntry { start, end });
            start = end;
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[PositionEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<PositionEntry> {
        self.entries.get(index).copied()
    }

    /// `end` of the last entry, 0 when empty.
    pub fn total_height(&self) -> u64 {
        self.entries.last().map_or(0, |entry| entry.end)
    }

    /// The index whose `[start, end)` span contains `offset`.
    ///
    /// Offsets past the last entry clamp to the last index. `None` only when
    /// the index is empty.
    pub fn anchor_index(&self, offset: u64) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }
        let found = self.entries.partition_point(|entry| entry.end <= offset);
        Some(found.min(self.entries.len() - 1))
    }
}
