// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use understory_calibration::CalibrationCurve;
use understory_send_gesture::PriorityClassifier;

/// Evenly spaced drags across and slightly beyond the normalized range.
fn sweep(samples: u32) -> Vec<f64> {
    (0..samples)
        .map(|i| f64::from(i) / f64::from(samples) * 1.2 - 0.1)
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_send_gesture");
    let drags = sweep(1_024);

    let classifier = PriorityClassifier::default();
    group.bench_function("classify_sweep(n=1024)", |b| {
        b.iter(|| {
            for &x in &drags {
                black_box(classifier.classify(black_box(x)));
            }
        });
    });

    for &keypoints in &[4_u32, 12, 64] {
        let curve = CalibrationCurve::new((0..keypoints).map(|i| {
            let x = f64::from(i) / f64::from(keypoints - 1);
            (x, x * x)
        }))
        .expect("generated keypoints are ordered");
        group.bench_function(format!("curve_eval_sweep(k={keypoints})"), |b| {
            b.iter(|| {
                for &x in &drags {
                    black_box(curve.eval(black_box(x)));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
