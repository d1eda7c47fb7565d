use vscroll::{RenderPlan, Result, ScrollMode};

use crate::ListenerToken;

/// What the widget shell needs from the surrounding UI layer.
///
/// Implementations wrap a real host (DOM, TUI buffer, test double). The
/// widget never touches host objects directly; it hands over render plans
/// and reads scroll geometry through this seam.
///
/// Offset/extent acquisition takes the [`ScrollMode`] chosen at
/// construction: `ElementLocal` reads the container's own scroll position,
/// `PageLevel` the document scroll position. `scroll_extent` is the
/// content height minus the viewport height (the largest reachable
/// offset).
pub trait Host<C> {
    type Handle;

    /// Creates the scroll container under `parent`.
    ///
    /// Fails with [`vscroll::Error::InvalidContainer`] when `parent` is
    /// missing or not an element.
    fn create_container(&mut self, parent: &Self::Handle, viewport_height: u32)
        -> Result<Self::Handle>;

    /// Replaces the container's content with the materialized plan.
    fn apply_plan(&mut self, container: &Self::Handle, plan: &RenderPlan<'_, C>);

    /// Empties the container.
    fn clear_container(&mut self, container: &Self::Handle);

    fn scroll_offset(&self, container: &Self::Handle, mode: ScrollMode) -> u64;

    fn scroll_extent(&self, container: &Self::Handle, mode: ScrollMode) -> u64;

    fn set_scroll_offset(&mut self, container: &Self::Handle, offset: u64);

    fn resize_container(&mut self, container: &Self::Handle, viewport_height: u32);

    /// Starts delivering scroll notifications for `token`; the host calls
    /// back into [`crate::ScrollView::notify_scroll`].
    fn bind_scroll_listener(&mut self, container: &Self::Handle, token: ListenerToken);

    fn unbind_scroll_listener(&mut self, container: &Self::Handle, token: ListenerToken);
}
