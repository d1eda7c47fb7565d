/// A lightweight, serializable snapshot of the controller's scroll state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    /// The most recently observed scroll offset.
    pub offset: u64,
    /// The offset of the last re-render; drift from here is compared against
    /// the hysteresis threshold.
    pub last_rendered_offset: u64,
    /// Whether a boundary event has fired and the offset has not yet left
    /// the boundary zone.
    pub boundary_armed: bool,
}
