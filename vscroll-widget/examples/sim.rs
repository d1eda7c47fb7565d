//! A console host: drives a [`ScrollView`] against a fake scrollable
//! element and prints every host-side effect.
//!
//! Run with `cargo run --example sim`.

use vscroll::{Item, Options, RenderPlan, Result, ScrollMode};
use vscroll_widget::{Host, ListenerToken, ScrollView};

/// Pretend scroll container: one element, geometry in plain fields.
#[derive(Debug, Default)]
struct ConsoleHost {
    offset: u64,
    extent: u64,
}

impl Host<String> for ConsoleHost {
    type Handle = &'static str;

    fn create_container(&mut self, parent: &&'static str, viewport_height: u32) -> Result<&'static str> {
        println!("create container under {parent} ({viewport_height}px tall)");
        Ok("list")
    }

    fn apply_plan(&mut self, container: &&'static str, plan: &RenderPlan<'_, String>) {
        println!(
            "{container}: render rows {}..{} (margin_top={} bottom_spacer={})",
            plan.range.start, plan.range.end, plan.margin_top, plan.bottom_spacer
        );
    }

    fn clear_container(&mut self, container: &&'static str) {
        println!("{container}: cleared");
    }

    fn scroll_offset(&self, _container: &&'static str, _mode: ScrollMode) -> u64 {
        self.offset
    }

    fn scroll_extent(&self, _container: &&'static str, _mode: ScrollMode) -> u64 {
        self.extent
    }

    fn set_scroll_offset(&mut self, container: &&'static str, offset: u64) {
        println!("{container}: scrollTop <- {offset}");
        self.offset = offset;
    }

    fn resize_container(&mut self, container: &&'static str, viewport_height: u32) {
        println!("{container}: resized to {viewport_height}px");
    }

    fn bind_scroll_listener(&mut self, container: &&'static str, token: ListenerToken) {
        println!("{container}: scroll listener bound ({token:?})");
    }

    fn unbind_scroll_listener(&mut self, container: &&'static str, token: ListenerToken) {
        println!("{container}: scroll listener unbound ({token:?})");
    }
}

fn main() -> Result<()> {
    let options = Options::new()
        .with_default_item_height(50)
        .with_spare_item_count(3)
        .with_viewport_height(400);

    let items = (0..500).map(|i| Item::auto(format!("row {i}")));
    let mut view = ScrollView::mount(ConsoleHost::default(), &"root", options, items)?;
    let extent = view.engine().total_height().saturating_sub(400);
    view.host_mut().extent = extent;
    view.tick();

    // The user wheels down; the listener fires for each notch.
    for offset in [120u64, 900, 2_400] {
        view.host_mut().offset = offset;
        view.notify_scroll();
    }

    view.prepend((0..5).map(|i| Item::auto(format!("older {i}"))));
    view.tick();

    view.remove(vec![0, 1], true)?;
    view.destroy();
    Ok(())
}
