use alloc::vec;
use alloc::vec::Vec;

use vscroll::{Error, IndexRange, Item, Options, RenderPlan, Result, ScrollMode};

use crate::host::Host;
use crate::registry::ListenerToken;
use crate::widget::{RemoveTarget, ScrollView};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PlanRecord {
    range: IndexRange,
    margin_top: u64,
    item_count: usize,
}

/// In-memory backend: records every host call and serves scroll geometry
/// from plain fields the tests poke directly.
#[derive(Debug, Default)]
struct MockHost {
    fail_create: bool,
    plans: Vec<PlanRecord>,
    cleared: usize,
    scroll_sets: Vec<u64>,
    element_offset: u64,
    element_extent: u64,
    page_offset: u64,
    page_extent: u64,
    bound: Vec<ListenerToken>,
    unbound: Vec<ListenerToken>,
    resized: Vec<u32>,
}

impl Host<&'static str> for MockHost {
    type Handle = u32;

    fn create_container(&mut self, parent: &u32, _viewport_height: u32) -> Result<u32> {
        if self.fail_create {
            return Err(Error::InvalidContainer);
        }
        Ok(parent + 1)
    }

    fn apply_plan(&mut self, _container: &u32, plan: &RenderPlan<'_, &'static str>) {
        self.plans.push(PlanRecord {
            range: plan.range,
            margin_top: plan.margin_top,
            item_count: plan.items.len(),
        });
    }

    fn clear_container(&mut self, _container: &u32) {
        self.cleared += 1;
    }

    fn scroll_offset(&self, _container: &u32, mode: ScrollMode) -> u64 {
        match mode {
            ScrollMode::ElementLocal => self.element_offset,
            ScrollMode::PageLevel => self.page_offset,
        }
    }

    fn scroll_extent(&self, _container: &u32, mode: ScrollMode) -> u64 {
        match mode {
            ScrollMode::ElementLocal => self.element_extent,
            ScrollMode::PageLevel => self.page_extent,
        }
    }

    fn set_scroll_offset(&mut self, _container: &u32, offset: u64) {
        self.element_offset = offset;
        self.scroll_sets.push(offset);
    }

    fn resize_container(&mut self, _container: &u32, viewport_height: u32) {
        self.resized.push(viewport_height);
    }

    fn bind_scroll_listener(&mut self, _container: &u32, token: ListenerToken) {
        self.bound.push(token);
    }

    fn unbind_scroll_listener(&mut self, _container: &u32, token: ListenerToken) {
        self.unbound.push(token);
    }
}

const LABELS: [&str; 7] = ["a", "b", "c", "d", "e", "f", "g"];

fn sample_items() -> Vec<Item<&'static str>> {
    LABELS.iter().map(|label| Item::new(*label, 100)).collect()
}

fn sample_options() -> Options {
    Options::new()
        .with_default_item_height(100)
        .with_spare_item_count(1)
        .with_viewport_height(300)
}

fn mounted() -> ScrollView<&'static str, MockHost> {
    let mut host = MockHost::default();
    host.element_extent = 400;
    ScrollView::mount(host, &0, sample_options(), sample_items()).unwrap()
}

#[test]
fn mount_rejects_missing_container() {
    let host = MockHost {
        fail_create: true,
        ..MockHost::default()
    };
    let result = ScrollView::mount(host, &0, sample_options(), sample_items());
    assert_eq!(result.err(), Some(Error::InvalidContainer));
}

#[test]
fn mount_renders_once_and_binds_listener() {
    let view = mounted();
    assert_eq!(view.host().plans.len(), 1);
    assert_eq!(view.host().bound.len(), 1);
    let first = view.host().plans[0];
    assert_eq!(first.range, IndexRange { start: 0, end: 4 });
    assert_eq!(first.margin_top, 0);
}

#[test]
fn initial_offset_applies_on_first_tick() {
    let mut host = MockHost::default();
    host.element_extent = 400;
    let options = sample_options().with_initial_offset(120);
    let mut view = ScrollView::mount(host, &0, options, sample_items()).unwrap();

    assert!(view.host().scroll_sets.is_empty());
    view.tick();
    assert_eq!(view.host().scroll_sets, vec![120]);
    view.tick();
    assert_eq!(view.host().scroll_sets, vec![120]);
}

#[test]
fn notify_scroll_rerenders_only_past_threshold() {
    let mut view = mounted();
    // spare 1 * default 100 / 2 = 50
    view.host_mut().element_offset = 30;
    view.notify_scroll();
    assert_eq!(view.host().plans.len(), 1);

    view.host_mut().element_offset = 130;
    view.notify_scroll();
    assert_eq!(view.host().plans.len(), 2);
    assert_eq!(view.host().plans[1].range, IndexRange { start: 0, end: 5 });
}

#[test]
fn move_scroll_renders_now_and_defers_assignment() {
    let mut view = mounted();
    view.tick();
    view.host_mut().scroll_sets.clear();

    view.move_scroll(200);
    view.move_scroll(350);
    assert_eq!(view.host().plans.len(), 3);
    assert!(view.host().scroll_sets.is_empty());

    view.tick();
    assert_eq!(view.host().scroll_sets, vec![200, 350]);
}

#[test]
fn prepend_defers_adjusted_offset() {
    let mut view = mounted();
    view.move_scroll(170);
    view.tick();
    view.host_mut().scroll_sets.clear();

    view.prepend(vec![Item::new("x", 60), Item::new("y", 40)]);
    assert_eq!(view.items()[0].content, "x");
    assert_eq!(view.item_count(), 9);

    view.tick();
    assert_eq!(view.host().scroll_sets, vec![270]);
}

#[test]
fn append_and_insert_rerender() {
    let mut view = mounted();
    view.append(vec![Item::new("h", 100)]);
    assert_eq!(view.item_count(), 8);
    view.insert(vec![Item::new("z", 100)], 99);
    assert_eq!(view.items()[7].content, "z");
    assert_eq!(view.host().plans.len(), 3);
}

#[test]
fn remove_dispatches_one_or_many() {
    let mut view = mounted();

    let removed = view.remove(1usize, true).unwrap();
    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0].content, "b");

    let removed = view.remove(vec![0, 2], true).unwrap();
    assert_eq!(removed[0].content, "a");
    assert_eq!(removed[1].content, "d");
    assert_eq!(view.item_count(), 4);

    assert_eq!(
        view.remove(99usize, true),
        Err(Error::InvalidArgument("remove index out of range"))
    );
}

#[test]
fn remove_skips_render_when_asked() {
    let mut view = mounted();
    let before = view.host().plans.len();
    let removed = view.remove(RemoveTarget::Many(vec![1, 3]), false).unwrap();
    assert_eq!(removed.len(), 2);
    assert_eq!(view.host().plans.len(), before);
}

#[test]
fn remove_many_without_matches_leaves_host_alone() {
    let mut view = mounted();
    let before = view.host().plans.len();
    let removed = view.remove(vec![50, 60], true).unwrap();
    assert!(removed.is_empty());
    assert_eq!(view.host().plans.len(), before);
}

#[test]
fn clear_empties_engine_and_container() {
    let mut view = mounted();
    view.clear();
    assert_eq!(view.item_count(), 0);
    assert_eq!(view.host().cleared, 1);
}

#[test]
fn resize_height_rerenders_and_restores_offset() {
    let mut view = mounted();
    view.move_scroll(170);
    view.tick();
    view.host_mut().scroll_sets.clear();

    view.resize_height(500).unwrap();
    assert_eq!(view.host().resized, vec![500]);
    assert_eq!(view.host().plans.last().unwrap().range.end, 7);

    view.tick();
    assert_eq!(view.host().scroll_sets, vec![170]);

    assert_eq!(
        view.resize_height(0),
        Err(Error::InvalidArgument("viewport height must be positive"))
    );
}

#[test]
fn page_mode_reads_page_geometry() {
    let mut host = MockHost::default();
    host.page_offset = 500;
    host.page_extent = 2000;
    host.element_offset = 5;
    let options = sample_options().with_scroll_mode(ScrollMode::PageLevel);
    let view = ScrollView::mount(host, &0, options, sample_items()).unwrap();
    assert_eq!(view.scroll_position(), 500);
}

#[test]
fn destroyed_view_rejects_mutations() {
    let mut view = mounted();
    view.destroy();
    let plans = view.host().plans.len();

    view.append(vec![Item::new("h", 100)]);
    view.prepend(vec![Item::new("z", 100)]);
    view.insert(vec![Item::new("m", 100)], 0);
    view.move_scroll(500);
    view.clear();
    assert_eq!(view.item_count(), 0);
    assert_eq!(view.host().plans.len(), plans);
    assert_eq!(view.host().cleared, 1);

    assert_eq!(view.remove(0usize, true), Err(Error::InvalidContainer));
    assert_eq!(view.resize_height(500), Err(Error::InvalidContainer));
    assert!(view.host().resized.is_empty());

    view.tick();
    assert!(view.host().scroll_sets.is_empty());
}

#[test]
fn destroy_unbinds_and_is_idempotent() {
    let mut view = mounted();
    let token = view.host().bound[0];
    view.destroy();

    assert!(view.is_destroyed());
    assert_eq!(view.host().unbound, vec![token]);
    assert_eq!(view.host().cleared, 1);
    assert_eq!(view.item_count(), 0);

    let plans = view.host().plans.len();
    view.notify_scroll();
    view.tick();
    view.destroy();
    assert_eq!(view.host().plans.len(), plans);
    assert!(view.host().scroll_sets.is_empty());
    assert_eq!(view.host().cleared, 1);
}
