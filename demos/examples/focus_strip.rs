// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus strip basics.
//!
//! Scroll a strip of cards, print weights and centered-item changes, then
//! snap a fling to the nearest card.
//!
//! Run:
//! - `cargo run -p understory_demos --example focus_strip`

use kurbo::Rect;
use understory_focus_strip::FocusStrip;

fn main() {
    let cards = ["inbox", "drafts", "sent", "archive"];
    let mut strip = FocusStrip::default();
    strip.set_viewport_width(300.0);
    strip.set_items(cards.iter().enumerate().map(|(i, &name)| {
        let x = i as f64 * 300.0;
        (name, Rect::new(x, 0.0, x + 300.0, 500.0))
    }));
    if let Some(change) = strip.flush() {
        println!("initial: {:?}", change.current);
    }

    for offset in [60.0, 140.0, 160.0, 420.0, 610.0] {
        if let Some(change) = strip.update(offset) {
            println!("offset {offset}: {:?} -> {:?}", change.previous, change.current);
        }
        let weights: Vec<String> = strip
            .weights()
            .map(|(name, w)| format!("{name}={w:.2}"))
            .collect();
        println!("  {}", weights.join(" "));
    }

    // A fling that would stop at 700 settles on a card instead.
    let target = strip.target_offset(700.0, 1.5);
    strip.update(target);
    println!(
        "fling settles at {target}: {:?}, interactive = {}",
        strip.centered(),
        strip.centered().is_some_and(|id| strip.is_interactive(&id))
    );
}
