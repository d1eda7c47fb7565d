//! Minimal tour: build an engine, scroll it, mutate the list.
//!
//! Run with `cargo run --example basic`.

use vscroll::{Item, Options, VirtualScroll};

fn main() {
    let options = Options::new()
        .with_default_item_height(50)
        .with_spare_item_count(2)
        .with_viewport_height(300);

    let items = (0..1_000).map(|i| {
        let height = 40 + (i % 5) as u32 * 20;
        Item::new(format!("row {i}"), height)
    });
    let mut engine: VirtualScroll<String> = VirtualScroll::with_items(options, items);

    println!(
        "{} items, total height {}",
        engine.item_count(),
        engine.total_height()
    );

    for offset in [0u64, 5_000, 40_000] {
        engine.move_scroll(offset);
        let plan = engine.plan();
        println!(
            "offset {offset}: rows {}..{} margin_top={} bottom_spacer={}",
            plan.range.start, plan.range.end, plan.margin_top, plan.bottom_spacer
        );
        for row in &plan.items {
            println!("  [{}] top={} h={} {}", row.index, row.top, row.height, row.content);
        }
    }

    // Prepending keeps whatever was on screen on screen.
    let before = engine.scroll_offset();
    let adjusted = engine.prepend((0..10).map(|i| Item::new(format!("older {i}"), 50)));
    println!("prepend moved offset {before} -> {adjusted}");

    let removed = engine.remove_many(&[0, 1, 2]);
    println!("removed {} rows, {} remain", removed.len(), engine.item_count());
}
