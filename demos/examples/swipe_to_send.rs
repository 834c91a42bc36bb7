// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe-to-send basics.
//!
//! Drive a `GestureSendController` with a scripted drag and print every
//! feedback event, then commit through an async `Committer`.
//!
//! Run:
//! - `cargo run -p understory_demos --example swipe_to_send`

use kurbo::{Point, Rect, Vec2};
use understory_send_gesture::{
    Committer, Draft, DropZone, GestureSendController, PriorityTier, SendFeedback,
};

struct Message {
    id: u64,
    text: &'static str,
}

impl Draft for Message {
    type Key = u64;

    fn is_sendable(&self) -> bool {
        !self.text.trim().is_empty()
    }

    fn key(&self) -> u64 {
        self.id
    }
}

/// Prints feedback as it happens.
struct Console;

impl SendFeedback for Console {
    fn gesture_began(&mut self, origin: Rect) {
        println!("  began at {origin:?}");
    }

    fn zone_entered(&mut self) {
        println!("  entered drop zone");
    }

    fn zone_exited(&mut self) {
        println!("  left drop zone");
    }

    fn tier_changed(&mut self, tier: PriorityTier) {
        println!("  tier -> {tier:?} (haptic {:?})", tier.haptic());
    }

    fn preview_repositioned(&mut self, offset: Vec2) {
        println!("  preview offset ({:.1}, {:.1})", offset.x, offset.y);
    }

    fn preview_returned(&mut self) {
        println!("  preview returned home");
    }

    fn gesture_resolved(&mut self, sent: bool) {
        println!("  resolved, sent = {sent}");
    }
}

/// Pretends to deliver messages.
struct Outbox;

impl Committer<u64> for Outbox {
    type Error = &'static str;

    async fn commit(&mut self, key: &u64, tier: PriorityTier) -> Result<(), Self::Error> {
        println!("  outbox: message {key} at {tier:?}");
        Ok(())
    }
}

fn main() {
    let compose = Rect::new(0.0, 600.0, 320.0, 640.0);
    let zone = DropZone::from_rect(Rect::new(0.0, 320.0, 320.0, 440.0));
    let mut send = GestureSendController::default();

    for (label, peak) in [("short flick", 0.2), ("half swipe", 0.5), ("full swipe", 0.9)] {
        println!("{label}:");
        let draft = Message { id: 7, text: "running late" };
        if let Err(err) = send.arm(&draft, compose) {
            println!("  not armed: {err}");
            continue;
        }

        // Start, rise to the peak in five steps, then let go.
        for step in 0..=5 {
            let drag = peak * f64::from(step) / 5.0;
            send.update(Point::new(160.0, 620.0 - drag * 300.0), &zone, &mut Console);
        }
        match pollster::block_on(send.release_and_commit(&mut Outbox, &mut Console)) {
            Ok(resolution) => println!("  -> {resolution:?}"),
            Err(err) => println!("  -> failed: {err}"),
        }
    }
}
