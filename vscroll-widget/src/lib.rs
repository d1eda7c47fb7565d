//! Widget shell for the [`vscroll`] windowing engine.
//!
//! [`ScrollView`] owns a [`vscroll::VirtualScroll`] engine and a [`Host`],
//! the trait a UI backend implements to create the scroll container, apply
//! render plans, and report scroll geometry. The crate stays headless: a
//! backend forwards its scroll events to [`ScrollView::notify_scroll`] and
//! calls [`ScrollView::tick`] once per event-loop turn to flush deferred
//! scroll assignments.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod host;
mod registry;
mod widget;

#[cfg(test)]
mod tests;

pub use host::Host;
pub use registry::{ListenerRegistry, ListenerToken};
pub use widget::{RemoveTarget, ScrollView};

pub use vscroll::{Error, Result};
