//! Boundary and scroll events driven by a simulated scroll stream.
//!
//! Run with `cargo run --example boundary_events`.

use vscroll::{BoundaryMode, Item, Options, VirtualScroll};

fn main() {
    let options = Options::new()
        .with_default_item_height(50)
        .with_viewport_height(400)
        .with_boundary(BoundaryMode::ThresholdZone(300));

    let mut engine: VirtualScroll<String> =
        VirtualScroll::with_items(options, (0..200).map(|i| Item::auto(format!("row {i}"))));

    engine.on_scroll(|tick| {
        println!("scroll: offset={} moved_delta={}", tick.offset, tick.moved_delta);
    });
    engine.on_scroll_top(|hit| println!("  reached top zone at {}", hit.offset));
    engine.on_scroll_bottom(|hit| println!("  reached bottom zone at {}", hit.offset));

    let scroll_extent = engine.total_height().saturating_sub(400);

    // Drift to the bottom, dwell there, then jump back up. The bottom
    // event fires once per approach, not once per wheel notch.
    let stream = [2_000u64, 6_000, 9_400, 9_500, 9_600, 4_000, 9_450, 100];
    for offset in stream {
        let rerender = engine.handle_scroll(offset, scroll_extent);
        if rerender {
            let plan = engine.plan();
            println!("  window now {}..{}", plan.range.start, plan.range.end);
        }
    }
}
