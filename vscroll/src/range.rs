use crate::position::PositionIndex;
use crate::IndexRange;

/// Number of items needed to fill `viewport_height`, starting at the first
/// of `heights`.
///
/// The item that crosses the viewport edge is counted, so the bottom of the
/// viewport is never under-filled. If the heights run out first, the count
/// is the remaining length.
pub fn count_visible(heights: &[u32], viewport_height: u32) -> usize {
    let mut cumulative = 0u64;
    let mut count = 0usize;
    for &height in heights {
        cumulative = cumulative.saturating_add(height as u64);
        count += 1;
        if cumulative >= viewport_height as u64 {
            break;
        }
    }
    count
}

/// Maps a scroll offset to the spare-padded render range.
///
/// Spare items on both sides absorb scroll jitter between re-renders
/// without blank flashes at the edges. Pure: identical inputs yield
/// identical output.
pub fn resolve_range(
    positions: &PositionIndex,
    heights: &[u32],
    offset: u64,
    viewport_height: u32,
    spare_item_count: usize,
) -> IndexRange {
    let Some(anchor) = positions.anchor_index(offset) else {
        return IndexRange::EMPTY;
    };
    let visible = count_visible(&heights[anchor..], viewport_height);

    IndexRange {
        start: anchor.saturating_sub(spare_item_count),
        end: anchor
            .saturating_add(visible)
            .saturating_add(spare_item_count)
            .min(heights.len()),
    }
}
