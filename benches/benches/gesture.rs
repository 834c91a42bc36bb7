// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_send_gesture::{Draft, DropZone, GestureSendController};

struct Text(&'static str);

impl Draft for Text {
    type Key = u32;

    fn is_sendable(&self) -> bool {
        !self.0.is_empty()
    }

    fn key(&self) -> u32 {
        1
    }
}

/// A drag that wanders up into the zone and back down, `steps` samples long.
fn path(steps: u32) -> Vec<Point> {
    (0..steps)
        .map(|i| {
            let t = f64::from(i) / f64::from(steps);
            let up = if t < 0.5 { t * 2.0 } else { (1.0 - t) * 2.0 };
            Point::new(160.0 + (t * 40.0).sin() * 30.0, 620.0 - up * 300.0)
        })
        .collect()
}

fn bench_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_send_gesture");
    let compose = Rect::new(0.0, 600.0, 320.0, 640.0);
    let zone = DropZone::from_rect(Rect::new(0.0, 320.0, 320.0, 440.0));
    let draft = Text("on my way");

    for &steps in &[64_u32, 1_024] {
        let points = path(steps);
        group.bench_function(format!("track_gesture(steps={steps})"), |b| {
            b.iter_batched(
                || {
                    let mut send = GestureSendController::default();
                    let _ = send.arm(&draft, compose);
                    send
                },
                |mut send| {
                    // `()` discards feedback; the bench measures the state machine.
                    for &p in &points {
                        send.update(p, &zone, &mut ());
                    }
                    black_box(send.release(&mut ()));
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_gesture);
criterion_main!(benches);
