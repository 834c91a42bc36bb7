// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drop-zone membership with edge-triggered transitions.
//!
//! ## Usage
//!
//! 1) Keep the previous `in_zone` flag alongside the gesture.
//! 2) On every move, call [`DropZoneDetector::update`] with the tracked point.
//! 3) Apply the returned [`ZoneUpdate::in_zone`] and fire side effects only for
//!    [`ZoneTransition::Entered`] / [`ZoneTransition::Exited`].
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_send_gesture::{DropZone, DropZoneDetector, ZoneTransition};
//!
//! let zone = DropZone::from_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
//! let detector = DropZoneDetector::default();
//!
//! let u = detector.update(Point::new(50.0, 60.0), &zone, false);
//! assert!(u.in_zone);
//! assert_eq!(u.transition, ZoneTransition::Entered);
//!
//! // Still inside: no new edge.
//! let u = detector.update(Point::new(52.0, 58.0), &zone, u.in_zone);
//! assert_eq!(u.transition, ZoneTransition::None);
//! ```

use kurbo::{Point, Rect};
use understory_calibration::distance;

/// Rectangle a dragged preview must be released inside to send.
///
/// Coordinates follow screen conventions: `top` is the smaller Y.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DropZone {
    rect: Rect,
}

impl DropZone {
    /// Creates a zone from a rectangle. Inverted rectangles are normalized.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        Self { rect: rect.abs() }
    }

    /// The zone rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Y of the upper edge.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.rect.y0
    }

    /// Y of the lower edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.rect.y1
    }

    /// Y of the center.
    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.rect.center().y
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Point {
        self.rect.center()
    }

    /// Height of the zone.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.rect.height()
    }
}

/// Direction of a zone membership change.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ZoneTransition {
    /// Membership is unchanged.
    #[default]
    None,
    /// The point moved into the zone.
    Entered,
    /// The point moved out of the zone.
    Exited,
}

/// Result of [`DropZoneDetector::update`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ZoneUpdate {
    /// Membership after this update.
    pub in_zone: bool,
    /// Edge crossed by this update, if any.
    pub transition: ZoneTransition,
}

/// Decides whether a tracked point is inside a [`DropZone`].
///
/// A point is inside when its distance to the zone's center is strictly less
/// than `zone.height() * radius_ratio`. The same threshold is used in both
/// directions; stability comes from reporting only edge crossings.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropZoneDetector {
    /// Fraction of the zone height used as the capture radius.
    pub radius_ratio: f64,
}

impl Default for DropZoneDetector {
    fn default() -> Self {
        Self { radius_ratio: 0.5 }
    }
}

impl DropZoneDetector {
    /// Returns `true` if `point` is within the capture radius of `zone`.
    #[must_use]
    pub fn contains(&self, point: Point, zone: &DropZone) -> bool {
        distance(point, zone.center()) < zone.height() * self.radius_ratio
    }

    /// Computes the new membership and the edge crossed since `was_in_zone`.
    #[must_use]
    pub fn update(&self, point: Point, zone: &DropZone, was_in_zone: bool) -> ZoneUpdate {
        let in_zone = self.contains(point, zone);
        let transition = match (was_in_zone, in_zone) {
            (false, true) => ZoneTransition::Entered,
            (true, false) => ZoneTransition::Exited,
            _ => ZoneTransition::None,
        };
        ZoneUpdate {
            in_zone,
            transition,
        }
    }
}
