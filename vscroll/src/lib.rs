//! A headless windowing engine for scrolling very large lists.
//!
//! For the host-adapter widget shell (container wiring, deferred scroll
//! assignment), see the `vscroll-widget` crate.
//!
//! Instead of materializing every row, the engine tracks item heights and
//! cumulative offsets, maps a scroll offset to the currently visible index
//! range (plus spare items on each side), and decides incrementally when a
//! re-render is actually needed. Boundary arrival (top/bottom) is reported
//! through one-shot events with dwell suppression.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - the scroll container and its viewport height
//! - scroll offset / extent notifications
//! - materialization of the returned render plans
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod emitter;
mod engine;
mod error;
mod item;
mod options;
mod plan;
mod position;
mod range;
mod state;
mod types;


pub use emitter::{BoundaryCallback, Emitter, ScrollCallback, SubscriptionId};
pub use engine::VirtualScroll;
pub use error::{Error, Result};
pub use item::Item;
pub use options::{
    Options, DEFAULT_BOUNDARY_THRESHOLD, DEFAULT_ITEM_HEIGHT, DEFAULT_SPARE_ITEM_COUNT,
    DEFAULT_VIEWPORT_HEIGHT,
};
pub use plan::{plan_render, PlannedItem, RenderPlan};
pub use position::{height_prefix_sum, PositionIndex};
pub use range::{count_visible, resolve_range};
pub use state::ScrollState;
pub use types::{
    Boundary, BoundaryHit, BoundaryMode, IndexRange, PositionEntry, ScrollMode, ScrollTick,
    StackingMode,
};
