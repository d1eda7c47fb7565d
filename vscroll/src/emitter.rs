use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{Boundary, BoundaryHit, ScrollTick};

/// A subscriber to the continuous `scroll` event.
pub type ScrollCallback = Arc<dyn Fn(&ScrollTick) + Send + Sync>;

/// A subscriber to a boundary (`scroll_top` / `scroll_bottom`) event.
pub type BoundaryCallback = Arc<dyn Fn(&BoundaryHit) + Send + Sync>;

/// Handle returned by the subscribe methods; pass it back to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Explicit per-event subscriber lists with synchronous, in-order dispatch.
///
/// Events never re-enter the engine: callbacks receive only the event
/// payload, so dispatch needs no re-entrancy guard.
#[derive(Clone, Default)]
pub struct Emitter {
    scroll: Vec<(SubscriptionId, ScrollCallback)>,
    scroll_top: Vec<(SubscriptionId, BoundaryCallback)>,
    scroll_bottom: Vec<(SubscriptionId, BoundaryCallback)>,
    next_id: u64,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub fn on_scroll(
        &mut self,
        callback: impl Fn(&ScrollTick) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = self.next_id();
        self.scroll.push((id, Arc::new(callback)));
        id
    }

    pub fn on_scroll_top(
        &mut self,
        callback: impl Fn(&BoundaryHit) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = self.next_id();
        self.scroll_top.push((id, Arc::new(callback)));
        id
    }

    pub fn on_scroll_bottom(
        &mut self,
        callback: impl Fn(&BoundaryHit) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = self.next_id();
        self.scroll_bottom.push((id, Arc::new(callback)));
        id
    }

    /// Removes the subscriber with `id`; returns whether one was found.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.scroll.len() + self.scroll_top.len() + self.scroll_bottom.len();
        self.scroll.retain(|(sub, _)| *sub != id);
        self.scroll_top.retain(|(sub, _)| *sub != id);
        self.scroll_bottom.retain(|(sub, _)| *sub != id);
        before != self.scroll.len() + self.scroll_top.len() + self.scroll_bottom.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.scroll.len() + self.scroll_top.len() + self.scroll_bottom.len()
    }

    pub(crate) fn emit_scroll(&self, tick: &ScrollTick) {
        for (_, callback) in &self.scroll {
            callback(tick);
        }
    }

    pub(crate) fn emit_boundary(&self, boundary: Boundary, hit: &BoundaryHit) {
        let subscribers = match boundary {
            Boundary::Top => &self.scroll_top,
            Boundary::Bottom => &self.scroll_bottom,
        };
        for (_, callback) in subscribers {
            callback(hit);
        }
    }
}

impl core::fmt::Debug for Emitter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Emitter")
            .field("scroll", &self.scroll.len())
            .field("scroll_top", &self.scroll_top.len())
            .field("scroll_bottom", &self.scroll_bottom.len())
            .finish_non_exhaustive()
    }
}
