// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use understory_focus_strip::FocusStrip;

fn build_strip(n: u32) -> FocusStrip<u32> {
    let mut strip = FocusStrip::default();
    strip.set_viewport_width(390.0);
    strip.set_items((0..n).map(|i| {
        let x = f64::from(i) * 390.0;
        (i, Rect::new(x, 0.0, x + 390.0, 600.0))
    }));
    strip.flush();
    strip
}

fn bench_focus_strip(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_focus_strip");

    for &n in &[16_u32, 256, 4_096] {
        let width = f64::from(n) * 390.0;
        group.bench_function(format!("scroll_flush(n={n},frames=120)"), |b| {
            b.iter_batched(
                || build_strip(n),
                |mut strip| {
                    let mut changes = 0_u32;
                    for frame in 0..120_u32 {
                        let offset = f64::from(frame) / 120.0 * width;
                        if strip.update(offset).is_some() {
                            changes += 1;
                        }
                    }
                    black_box(changes);
                },
                BatchSize::LargeInput,
            );
        });

        let strip = build_strip(n);
        group.bench_function(format!("target_offset(n={n})"), |b| {
            b.iter(|| black_box(strip.target_offset(black_box(width * 0.37), black_box(2.0))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_focus_strip);
criterion_main!(benches);
