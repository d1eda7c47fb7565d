use crate::{BoundaryMode, ScrollMode, StackingMode};

/// Height assigned to items that do not specify one.
pub const DEFAULT_ITEM_HEIGHT: u32 = 50;
/// Extra items rendered on each side of the visible range.
pub const DEFAULT_SPARE_ITEM_COUNT: usize = 5;
/// Pixel distance from either edge inside which boundary events fire.
pub const DEFAULT_BOUNDARY_THRESHOLD: u32 = 300;
/// Viewport height used when none is configured.
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 400;

/// Configuration for [`crate::VirtualScroll`].
///
/// Immutable after construction except through explicit operations
/// (`resize_height`). Zero values for the positive-number fields fall back
/// to the defaults, mirroring the legacy option coercion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Options {
    pub default_item_height: u32,
    pub spare_item_count: usize,
    pub viewport_height: u32,
    pub boundary: BoundaryMode,
    pub stacking: StackingMode,
    pub scroll_mode: ScrollMode,
    /// Whether the continuous `scroll` event is emitted on every
    /// notification. Boundary events are unaffected.
    pub emit_scroll_events: bool,
    pub initial_offset: u64,
}

impl Options {
    pub fn new() -> Self {
        Self {
            default_item_height: DEFAULT_ITEM_HEIGHT,
            spare_item_count: DEFAULT_SPARE_ITEM_COUNT,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            boundary: BoundaryMode::ThresholdZone(DEFAULT_BOUNDARY_THRESHOLD),
            stacking: StackingMode::Absolute,
            scroll_mode: ScrollMode::ElementLocal,
            emit_scroll_events: true,
            initial_offset: 0,
        }
    }

    pub fn with_default_item_height(mut self, height: u32) -> Self {
        self.default_item_height = if height == 0 {
            DEFAULT_ITEM_HEIGHT
        } else {
            height
        };
        self
    }

    pub fn with_spare_item_count(mut self, count: usize) -> Self {
        self.spare_item_count = count;
        self
    }

    pub fn with_viewport_height(mut self, height: u32) -> Self {
        self.viewport_height = if height == 0 {
            DEFAULT_VIEWPORT_HEIGHT
        } else {
            height
        };
        self
    }

    pub fn with_boundary(mut self, boundary: BoundaryMode) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn with_stacking(mut self, stacking: StackingMode) -> Self {
        self.stacking = stacking;
        self
    }

    pub fn with_scroll_mode(mut self, scroll_mode: ScrollMode) -> Self {
        self.scroll_mode = scroll_mode;
        self
    }

    pub fn with_emit_scroll_events(mut self, emit: bool) -> Self {
        self.emit_scroll_events = emit;
        self
    }

    pub fn with_initial_offset(mut self, offset: u64) -> Self {
        self.initial_offset = offset;
        self
    }

    /// Minimum offset drift since the last render before the visible window
    /// is recomputed: `spare_item_count / 2 * default_item_height`, computed
    /// without integer-division loss.
    pub fn rerender_threshold(&self) -> u64 {
        self.spare_item_count as u64 * self.default_item_height as u64 / 2
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}
