/// The vertical span one item occupies in the scrollable content.
///
/// Entries partition `[0, total_height)`: `start` of entry `i` equals `end`
/// of entry `i - 1` (0 for the first), with no gaps or overlaps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionEntry {
    pub start: u64,
    pub end: u64,
}

impl PositionEntry {
    pub fn height(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    pub fn contains(&self, offset: u64) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// A half-open `[start, end)` range over item indices.
///
/// Invariant: `0 <= start <= end <= item_count`. Ranges are recomputed,
/// never mutated in place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexRange {
    pub start: usize,
    pub end: usize, // exclusive
}

impl IndexRange {
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Which edge of the content a scroll position has reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Boundary {
    Top,
    Bottom,
}

/// How boundary arrival is detected.
///
/// The legacy widget generations disagree on this: the first compares the
/// offset against the exact edges, the final one against a pixel zone.
/// Both are kept as configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundaryMode {
    /// Fire only at `offset == 0` / `offset >= scroll_extent`.
    ExactEdge,
    /// Fire within the given pixel distance of either edge.
    ThresholdZone(u32),
}

impl BoundaryMode {
    /// Returns the boundary the offset currently qualifies for, if any.
    ///
    /// The bottom zone is checked first; with a degenerate extent the two
    /// zones overlap and bottom wins.
    pub fn candidate(&self, offset: u64, scroll_extent: u64) -> Option<Boundary> {
        match *self {
            Self::ExactEdge => {
                if offset >= scroll_extent {
                    Some(Boundary::Bottom)
                } else if offset == 0 {
                    Some(Boundary::Top)
                } else {
                    None
                }
            }
            Self::ThresholdZone(threshold) => {
                let threshold = threshold as u64;
                if offset >= scroll_extent.saturating_sub(threshold) {
                    Some(Boundary::Bottom)
                } else if offset <= threshold {
                    Some(Boundary::Top)
                } else {
                    None
                }
            }
        }
    }
}

/// Where scroll offsets and extents are read from.
///
/// Selected once at construction; the controller never re-probes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollMode {
    /// The scroll container itself.
    ElementLocal,
    /// The document/page scroll position.
    PageLevel,
}

/// How rendered items are laid out inside the wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StackingMode {
    /// Items stack by normal flow; the wrapper's `margin_top` carries the
    /// skipped leading height.
    Fixed,
    /// Items carry explicit `top` offsets relative to the wrapper.
    Absolute,
}

/// Payload of the continuous `scroll` event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollTick {
    pub offset: u64,
    pub scroll_extent: u64,
    /// `previous_offset - offset`; positive when scrolling toward the top.
    pub moved_delta: i64,
}

/// Payload of the `scroll_top` / `scroll_bottom` boundary events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundaryHit {
    pub offset: u64,
    pub scroll_extent: u64,
}
