// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stateless strip math.
//!
//! Item frames are in content coordinates along the strip's X axis. A scroll
//! `offset` moves content left, so an item's midpoint in viewport coordinates
//! is `frame.center().x - offset`.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::FocusStripConfig;

/// Emphasis weight for an item `distance` away from the focal center.
///
/// Falls linearly from `1.0` at the center to `min_weight` at `max_distance`
/// and stays there beyond it. The result is exactly `1.0` when `distance` is
/// zero, which is what [`is_interactive_weight`] relies on.
#[must_use]
pub fn item_weight(distance: f64, max_distance: f64, min_weight: f64) -> f64 {
    let distance = distance.abs();
    let ratio = if max_distance > 0.0 {
        ((max_distance - distance) / max_distance).clamp(0.0, 1.0)
    } else if distance == 0.0 {
        1.0
    } else {
        0.0
    };
    1.0 - (1.0 - ratio) * (1.0 - min_weight)
}

/// Only the fully weighted (exactly centered) item accepts input.
#[must_use]
pub fn is_interactive_weight(weight: f64) -> bool {
    weight == 1.0
}

/// Signed distance of `frame`'s midpoint from the focal center at `offset`.
///
/// Evaluated as `(midpoint - viewport_center) - offset`, the same expression
/// [`snap_target`] uses to produce offsets, so a snapped offset yields
/// exactly `0.0` for its item.
#[must_use]
pub fn center_distance(frame: Rect, offset: f64, viewport_center: f64) -> f64 {
    (frame.center().x - viewport_center) - offset
}

/// Returns `true` if any part of `frame` is inside `0..viewport_width` at `offset`.
#[must_use]
pub fn is_visible(frame: Rect, offset: f64, viewport_width: f64) -> bool {
    let frame = frame.abs();
    frame.x1 - offset > 0.0 && frame.x0 - offset < viewport_width
}

/// Weight of every item at `offset`, in item order.
///
/// The falloff distance for an item is its own width plus the configured
/// spacing, i.e. one step to a neighbor of the same size.
#[must_use]
pub fn compute_weights<K: Copy>(
    offset: f64,
    items: &[(K, Rect)],
    viewport_center: f64,
    config: &FocusStripConfig,
) -> Vec<(K, f64)> {
    items
        .iter()
        .map(|&(id, frame)| {
            let distance = center_distance(frame, offset, viewport_center);
            let max_distance = frame.width().abs() + config.item_spacing;
            (id, item_weight(distance, max_distance, config.min_weight))
        })
        .collect()
}

/// Index of the visible item whose midpoint is nearest the viewport center.
///
/// Ties go to the lowest index. Returns `None` if nothing is visible.
#[must_use]
pub fn find_centered_index<K>(
    items: &[(K, Rect)],
    offset: f64,
    viewport_width: f64,
) -> Option<usize> {
    let center = viewport_width * 0.5;
    let mut best: Option<(usize, f64)> = None;
    for (index, (_, frame)) in items.iter().enumerate() {
        if !is_visible(*frame, offset, viewport_width) {
            continue;
        }
        let distance = center_distance(*frame, offset, center).abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}

/// Id of the visible item nearest the viewport center. See [`find_centered_index`].
#[must_use]
pub fn find_centered<K: Copy>(items: &[(K, Rect)], offset: f64, viewport_width: f64) -> Option<K> {
    find_centered_index(items, offset, viewport_width).map(|index| items[index].0)
}

/// Offset that exactly centers the item nearest `proposed + viewport_center`.
///
/// All items are candidates, visible or not. On an exact tie the item in the
/// direction of `velocity` wins (positive favors the later item); with zero
/// velocity the lower index wins. With no items `proposed` is returned.
#[must_use]
pub fn snap_target<K>(
    items: &[(K, Rect)],
    proposed: f64,
    velocity: f64,
    viewport_center: f64,
) -> f64 {
    let mut best: Option<(f64, f64)> = None;
    for (_, frame) in items {
        let target = frame.center().x - viewport_center;
        let distance = (target - proposed).abs();
        let better = match best {
            None => true,
            Some((_, best_distance)) => {
                distance < best_distance || (distance == best_distance && velocity > 0.0)
            }
        };
        if better {
            best = Some((target, distance));
        }
    }
    best.map_or(proposed, |(target, _)| target)
}
