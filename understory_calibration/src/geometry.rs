// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Distance from `point` to the nearest edge of `rect`, or `0.0` if the point
/// lies inside or on the boundary.
///
/// `rect` is treated as if normalized, so inverted rectangles behave like
/// their positive-area counterparts.
#[must_use]
pub fn rect_distance(rect: Rect, point: Point) -> f64 {
    let rect = rect.abs();
    let nearest = Point::new(
        point.x.clamp(rect.x0, rect.x1),
        point.y.clamp(rect.y0, rect.y1),
    );
    point.distance(nearest)
}
