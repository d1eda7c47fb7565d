use alloc::vec;
use alloc::vec::Vec;
use core::mem;

use vscroll::{
    BoundaryHit, Error, Item, Options, Result, ScrollMode, ScrollTick, SubscriptionId,
    VirtualScroll,
};

use crate::host::Host;
use crate::registry::{ListenerRegistry, ListenerToken};

/// One-or-many removal target for [`ScrollView::remove`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemoveTarget {
    One(usize),
    Many(Vec<usize>),
}

impl From<usize> for RemoveTarget {
    fn from(index: usize) -> Self {
        Self::One(index)
    }
}

impl From<Vec<usize>> for RemoveTarget {
    fn from(indices: Vec<usize>) -> Self {
        Self::Many(indices)
    }
}

impl From<&[usize]> for RemoveTarget {
    fn from(indices: &[usize]) -> Self {
        Self::Many(indices.to_vec())
    }
}

/// The public widget: a [`VirtualScroll`] engine wired to a [`Host`].
///
/// The host drives it by calling [`Self::notify_scroll`] when its scroll
/// listener fires and [`Self::tick`] once per turn of its event loop to
/// flush deferred scroll assignments. Everything else is synchronous.
pub struct ScrollView<C, H: Host<C>> {
    engine: VirtualScroll<C>,
    host: H,
    container: H::Handle,
    listeners: ListenerRegistry,
    scroll_token: Option<ListenerToken>,
    // Acquisition strategy, bound once at mount.
    mode: ScrollMode,
    // Each entry captured the target offset of the call that scheduled it,
    // so rapid consecutive moves replay in order instead of racing.
    deferred: Vec<u64>,
    destroyed: bool,
}

impl<C, H: Host<C>> core::fmt::Debug for ScrollView<C, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollView")
            .field("item_count", &self.engine.item_count())
            .field("mode", &self.mode)
            .field("deferred", &self.deferred.len())
            .field("destroyed", &self.destroyed)
            .finish_non_exhaustive()
    }
}

impl<C, H: Host<C>> ScrollView<C, H> {
    /// Creates the container under `parent`, renders the initial window,
    /// and binds the scroll listener.
    ///
    /// The configured initial offset is applied on the next [`Self::tick`],
    /// after the freshly rendered content has settled.
    pub fn mount<I, T>(mut host: H, parent: &H::Handle, options: Options, items: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Item<C>>,
    {
        let container = host.create_container(parent, options.viewport_height)?;
        let mode = options.scroll_mode;
        let initial_offset = options.initial_offset;
        let engine = VirtualScroll::with_items(options, items);

        let mut listeners = ListenerRegistry::new();
        let token = listeners.bind();
        host.bind_scroll_listener(&container, token);

        let mut view = Self {
            engine,
            host,
            container,
            listeners,
            scroll_token: Some(token),
            mode,
            deferred: vec![initial_offset],
            destroyed: false,
        };
        view.render();
        Ok(view)
    }

    pub fn engine(&self) -> &VirtualScroll<C> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut VirtualScroll<C> {
        &mut self.engine
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn container(&self) -> &H::Handle {
        &self.container
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn items(&self) -> &[Item<C>] {
        self.engine.items()
    }

    pub fn item_count(&self) -> usize {
        self.engine.item_count()
    }

    /// Live scroll position read from the host through the bound strategy.
    pub fn scroll_position(&self) -> u64 {
        self.host.scroll_offset(&self.container, self.mode)
    }

    pub fn on_scroll(
        &mut self,
        callback: impl Fn(&ScrollTick) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.engine.on_scroll(callback)
    }

    pub fn on_scroll_top(
        &mut self,
        callback: impl Fn(&BoundaryHit) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.engine.on_scroll_top(callback)
    }

    pub fn on_scroll_bottom(
        &mut self,
        callback: impl Fn(&BoundaryHit) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.engine.on_scroll_bottom(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.engine.unsubscribe(id)
    }

    fn render(&mut self) {
        let plan = self.engine.plan();
        self.host.apply_plan(&self.container, &plan);
    }

    /// Entry point for the host's scroll listener.
    ///
    /// Reads the current offset and extent through the bound strategy,
    /// runs the controller state machine, and re-renders when the
    /// hysteresis gate passes.
    pub fn notify_scroll(&mut self) {
        if self.destroyed {
            return;
        }
        let offset = self.host.scroll_offset(&self.container, self.mode);
        let extent = self.host.scroll_extent(&self.container, self.mode);
        if self.engine.handle_scroll(offset, extent) {
            self.render();
        }
    }

    /// Flushes deferred scroll assignments, in scheduling order.
    pub fn tick(&mut self) {
        if self.destroyed {
            self.deferred.clear();
            return;
        }
        for offset in mem::take(&mut self.deferred) {
            self.host.set_scroll_offset(&self.container, offset);
        }
    }

    /// Renders at `offset` immediately, then schedules the host scroll
    /// assignment for the next tick.
    pub fn move_scroll(&mut self, offset: u64) {
        if self.destroyed {
            return;
        }
        self.engine.move_scroll(offset);
        self.render();
        self.deferred.push(offset);
    }

    pub fn append<I, T>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Item<C>>,
    {
        if self.destroyed {
            return;
        }
        self.engine.append(items);
        self.render();
    }

    /// Prepends items; the previously visible item stays visible. The
    /// adjusted scroll position is applied on the next tick.
    pub fn prepend<I, T>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Item<C>>,
    {
        if self.destroyed {
            return;
        }
        let adjusted = self.engine.prepend(items);
        self.render();
        self.deferred.push(adjusted);
    }

    pub fn insert<I, T>(&mut self, items: I, index: usize)
    where
        I: IntoIterator<Item = T>,
        T: Into<Item<C>>,
    {
        if self.destroyed {
            return;
        }
        self.engine.insert(items, index);
        self.render();
    }

    /// Removes one item or many; re-renders only when requested and when
    /// something was actually removed. Returns the removed items in their
    /// original order.
    pub fn remove(
        &mut self,
        target: impl Into<RemoveTarget>,
        should_rerender: bool,
    ) -> Result<Vec<Item<C>>> {
        if self.destroyed {
            return Err(Error::InvalidContainer);
        }
        let removed = match target.into() {
            RemoveTarget::One(index) => vec![self.engine.remove_one(index)?],
            RemoveTarget::Many(indices) => self.engine.remove_many(&indices),
        };
        if should_rerender && !removed.is_empty() {
            self.render();
        }
        Ok(removed)
    }

    /// Empties the list and the container.
    pub fn clear(&mut self) {
        if self.destroyed {
            return;
        }
        self.engine.clear();
        self.host.clear_container(&self.container);
    }

    /// Resizes the viewport and re-renders at the current offset.
    pub fn resize_height(&mut self, height: u32) -> Result<()> {
        if self.destroyed {
            return Err(Error::InvalidContainer);
        }
        self.engine.resize_height(height)?;
        self.host.resize_container(&self.container, height);
        self.render();
        self.deferred.push(self.engine.scroll_offset());
        Ok(())
    }

    /// Unbinds the scroll listener and empties the container. Idempotent.
    ///
    /// Afterwards the mutating methods are inert; the fallible ones
    /// (`remove`, `resize_height`) return [`Error::InvalidContainer`].
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        if let Some(token) = self.scroll_token.take() {
            self.host.unbind_scroll_listener(&self.container, token);
            self.listeners.unbind(token);
        }
        self.host.clear_container(&self.container);
        self.engine.clear();
        self.deferred.clear();
        self.destroyed = true;
    }
}
