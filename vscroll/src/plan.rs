use alloc::vec::Vec;

use crate::item::Item;
use crate::position::height_prefix_sum;
use crate::{IndexRange, StackingMode};

/// One materialized row in a render plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlannedItem<'a, C> {
    pub index: usize,
    /// Running offset from the wrapper start; 0 for the first rendered item.
    /// Meaningful in [`StackingMode::Absolute`]; normal flow ignores it.
    pub top: u64,
    pub height: u32,
    pub content: &'a C,
}

/// A description of what to materialize for one frame.
///
/// The plan performs no host manipulation; the widget shell (or any other
/// adapter) turns it into real elements. The wrapper spacers keep the total
/// scrollable height accurate without materializing every item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderPlan<'a, C> {
    pub mode: StackingMode,
    pub range: IndexRange,
    pub items: Vec<PlannedItem<'a, C>>,
    /// Summed height of the skipped leading items.
    pub margin_top: u64,
    /// `total_height - margin_top`; the wrapper spans everything from the
    /// first rendered item to the end of the content.
    pub wrapper_height: u64,
    /// Height reserved below the rendered items inside the wrapper.
    pub bottom_spacer: u64,
}

/// Computes the materialized slice and placeholder sizing for `range`.
pub fn plan_render<'a, C>(
    items: &'a [Item<C>],
    heights: &[u32],
    range: IndexRange,
    mode: StackingMode,
) -> RenderPlan<'a, C> {
    debug_assert_eq!(items.len(), heights.len(), "item/height list divergence");

    let margin_top = height_prefix_sum(heights, range.start);
    let total = height_prefix_sum(heights, heights.len());
    let wrapper_height = total.saturating_sub(margin_top);

    let mut planned = Vec::with_capacity(range.len());
    let mut top = 0u64;
    for (index, item) in items
        .iter()
        .enumerate()
        .take(range.end)
        .skip(range.start)
    {
        planned.push(PlannedItem {
            index,
            top,
            height: item.height,
            content: &item.content,
        });
        top = top.saturating_add(item.height as u64);
    }

    RenderPlan {
        mode,
        range,
        items: planned,
        margin_top,
        wrapper_height,
        bottom_spacer: wrapper_height.saturating_sub(top),
    }
}
