use alloc::vec::Vec;

use crate::emitter::Emitter;
use crate::item::Item;
use crate::plan::{plan_render, RenderPlan};
use crate::position::PositionIndex;
use crate::range::resolve_range;
use crate::{
    BoundaryHit, Error, IndexRange, Options, Result, ScrollState, ScrollTick, SubscriptionId,
};

/// The windowing engine.
///
/// Owns the item list, the position index, and the scroll state machine.
/// It is host-agnostic: an adapter feeds it scroll notifications and turns
/// the returned [`RenderPlan`]s into real elements. All operations are
/// synchronous; a mutation is atomic from the caller's perspective because
/// the position index is rebuilt before the method returns.
#[derive(Clone, Debug)]
pub struct VirtualScroll<C> {
    options: Options,
    items: Vec<Item<C>>,
    heights: Vec<u32>,
    positions: PositionIndex,
    offset: u64,
    last_rendered_offset: u64,
    boundary_armed: bool,
    emitter: Emitter,
}

impl<C> VirtualScroll<C> {
    pub fn new(options: Options) -> Self {
        let offset = options.initial_offset;
        vdebug!(
            viewport = options.viewport_height,
            spare = options.spare_item_count,
            offset,
            "VirtualScroll::new"
        );
        Self {
            options,
            items: Vec::new(),
            heights: Vec::new(),
            positions: PositionIndex::new(),
            offset,
            last_rendered_offset: offset,
            boundary_armed: false,
            emitter: Emitter::new(),
        }
    }

    pub fn with_items<I, T>(options: Options, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Item<C>>,
    {
        let mut engine = Self::new(options);
        engine.append(items);
        engine
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn items(&self) -> &[Item<C>] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn heights(&self) -> &[u32] {
        &self.heights
    }

    pub fn positions(&self) -> &PositionIndex {
        &self.positions
    }

    pub fn total_height(&self) -> u64 {
        self.positions.total_height()
    }

    pub fn scroll_offset(&self) -> u64 {
        self.offset
    }

    /// Snapshot of the scroll state machine.
    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            offset: self.offset,
            last_rendered_offset: self.last_rendered_offset,
            boundary_armed: self.boundary_armed,
        }
    }

    /// Restores a previously captured snapshot.
    pub fn restore_scroll_state(&mut self, state: ScrollState) {
        self.offset = state.offset;
        self.last_rendered_offset = state.last_rendered_offset;
        self.boundary_armed = state.boundary_armed;
    }

    // Event subscriptions: explicit per-event lists, synchronous in-order
    // dispatch, removal by id.

    pub fn on_scroll(
        &mut self,
        callback: impl Fn(&ScrollTick) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.emitter.on_scroll(callback)
    }

    pub fn on_scroll_top(
        &mut self,
        callback: impl Fn(&BoundaryHit) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.emitter.on_scroll_top(callback)
    }

    pub fn on_scroll_bottom(
        &mut self,
        callback: impl Fn(&BoundaryHit) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.emitter.on_scroll_bottom(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.emitter.unsubscribe(id)
    }

    /// The spare-padded index range for an arbitrary offset.
    pub fn range_at(&self, offset: u64) -> IndexRange {
        resolve_range(
            &self.positions,
            &self.heights,
            offset,
            self.options.viewport_height,
            self.options.spare_item_count,
        )
    }

    /// Render plan at the current offset.
    pub fn plan(&self) -> RenderPlan<'_, C> {
        self.plan_at(self.offset)
    }

    pub fn plan_at(&self, offset: u64) -> RenderPlan<'_, C> {
        let range = self.range_at(offset);
        plan_render(&self.items, &self.heights, range, self.options.stacking)
    }

    /// Processes one scroll notification from the host.
    ///
    /// Emits the continuous `scroll` event (unless disabled), runs the
    /// boundary check with dwell suppression, then applies the hysteresis
    /// gate. Returns `true` when the caller should re-render (fetch a fresh
    /// plan via [`Self::plan`]); `false` when the drift since the last
    /// render is below the rerender threshold.
    pub fn handle_scroll(&mut self, offset: u64, scroll_extent: u64) -> bool {
        vtrace!(offset, scroll_extent, "handle_scroll");
        if self.options.emit_scroll_events {
            // Saturates rather than wraps for offsets beyond i64 range.
            let moved_delta = if self.offset >= offset {
                i64::try_from(self.offset - offset).unwrap_or(i64::MAX)
            } else {
                i64::try_from(offset - self.offset).map_or(i64::MIN, |d| -d)
            };
            self.emitter.emit_scroll(&ScrollTick {
                offset,
                scroll_extent,
                moved_delta,
            });
        }
        self.offset = offset;

        match self.options.boundary.candidate(offset, scroll_extent) {
            Some(boundary) => {
                if !self.boundary_armed {
                    self.boundary_armed = true;
                    vdebug!(?boundary, offset, "boundary event");
                    self.emitter.emit_boundary(
                        boundary,
                        &BoundaryHit {
                            offset,
                            scroll_extent,
                        },
                    );
                }
            }
            None => self.boundary_armed = false,
        }

        if self.last_rendered_offset.abs_diff(offset) < self.options.rerender_threshold() {
            return false;
        }
        self.last_rendered_offset = offset;
        true
    }

    /// Programmatic scroll.
    ///
    /// Records render state at `offset` immediately; the widget shell
    /// applies the host scroll assignment one tick later so freshly
    /// rendered content settles first.
    pub fn move_scroll(&mut self, offset: u64) {
        vtrace!(offset, "move_scroll");
        self.offset = offset;
        self.last_rendered_offset = offset;
    }

    /// Updates the viewport height. Zero is rejected.
    pub fn resize_height(&mut self, height: u32) -> Result<()> {
        if height == 0 {
            return Err(Error::InvalidArgument("viewport height must be positive"));
        }
        self.options.viewport_height = height;
        Ok(())
    }

    fn coerce<I, T>(&self, new_items: I) -> Vec<Item<C>>
    where
        I: IntoIterator<Item = T>,
        T: Into<Item<C>>,
    {
        new_items
            .into_iter()
            .map(|raw| {
                let mut item = raw.into();
                if item.height == 0 {
                    item.height = self.options.default_item_height;
                }
                item
            })
            .collect()
    }

    fn rebuild_positions(&mut self) {
        self.heights.clear();
        self.heights.extend(self.items.iter().map(|item| item.height));
        self.positions.rebuild(&self.heights);
    }

    /// Appends items at the end. Re-render at the current offset afterwards.
    pub fn append<I, T>(&mut self, new_items: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Item<C>>,
    {
        let mut coerced = self.coerce(new_items);
        vdebug!(added = coerced.len(), count = self.items.len(), "append");
        self.items.append(&mut coerced);
        self.rebuild_positions();
    }

    /// Prepends items and advances the scroll offset by their summed height,
    /// so the item that was visible stays visible (continuity guarantee).
    ///
    /// Returns the adjusted offset; the caller re-renders there and moves
    /// the host scroll position to it.
    pub fn prepend<I, T>(&mut self, new_items: I) -> u64
    where
        I: IntoIterator<Item = T>,
        T: Into<Item<C>>,
    {
        let coerced = self.coerce(new_items);
        let added_height: u64 = coerced.iter().map(|item| item.height as u64).sum();
        vdebug!(added = coerced.len(), added_height, "prepend");
        self.items.splice(0..0, coerced);
        self.rebuild_positions();

        self.offset = self.offset.saturating_add(added_height);
        self.last_rendered_offset = self.offset;
        self.offset
    }

    /// Inserts items at `index`, clamped to `[0, item_count - 1]`.
    /// No continuity adjustment; re-render at the current offset.
    pub fn insert<I, T>(&mut self, new_items: I, index: usize)
    where
        I: IntoIterator<Item = T>,
        T: Into<Item<C>>,
    {
        let coerced = self.coerce(new_items);
        let index = index.min(self.items.len().saturating_sub(1));
        vdebug!(added = coerced.len(), index, "insert");
        self.items.splice(index..index, coerced);
        self.rebuild_positions();
    }

    /// Removes and returns the item at `index`.
    pub fn remove_one(&mut self, index: usize) -> Result<Item<C>> {
        if index >= self.items.len() {
            return Err(Error::InvalidArgument("remove index out of range"));
        }
        let removed = self.items.remove(index);
        self.rebuild_positions();
        Ok(removed)
    }

    /// Removes every item whose index is in `indices`, preserving the
    /// relative order of survivors. Returns the removed items in their
    /// original order; out-of-range indices are ignored.
    pub fn remove_many(&mut self, indices: &[usize]) -> Vec<Item<C>> {
        if indices.is_empty() {
            return Vec::new();
        }
        let mut removed = Vec::new();
        let mut survivors = Vec::with_capacity(self.items.len());
        for (index, item) in self.items.drain(..).enumerate() {
            if indices.contains(&index) {
                removed.push(item);
            } else {
                survivors.push(item);
            }
        }
        self.items = survivors;
        self.rebuild_positions();
        vdebug!(removed = removed.len(), count = self.items.len(), "remove_many");
        removed
    }

    /// Empties the list and resets the scroll state machine.
    pub fn clear(&mut self) {
        vdebug!(count = self.items.len(), "clear");
        self.items.clear();
        self.heights.clear();
        self.positions.rebuild(&[]);
        self.offset = 0;
        self.last_rendered_offset = 0;
        self.boundary_armed = false;
    }
}
