// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_calibration --heading-base-level=0

//! Understory Calibration: keypoint curves and small geometry helpers.
//!
//! Gesture and scroll handlers receive continuous, jittery input and need to
//! turn it into values that settle on a few meaningful landmarks. This crate
//! provides the leaf pieces those handlers share:
//!
//! - [`CalibrationCurve`]: a validated, ordered table of [`Keypoint`]s
//!   evaluated by piecewise-linear interpolation with endpoint clamping.
//! - [`lerp`]: the interpolation itself, over a raw keypoint slice.
//! - [`distance`] and [`rect_distance`]: point/point and rect/point proximity.
//!
//! Curves are validated once at construction, so evaluation during a gesture
//! can never fail:
//!
//! ```rust
//! use understory_calibration::{CalibrationCurve, CurveError};
//!
//! let curve = CalibrationCurve::new([(0.0, 0.0), (1.0, 100.0)]).unwrap();
//! assert_eq!(curve.eval(0.5), 50.0);
//!
//! let err = CalibrationCurve::new([(1.0, 0.0), (0.0, 1.0)]).unwrap_err();
//! assert_eq!(err, CurveError::Unordered { index: 1 });
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: select Kurbo's float backend.
//! - `serde`: (de)serialize curves as keypoint lists. Deserialization runs the
//!   same validation as [`CalibrationCurve::new`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod curve;
mod geometry;

pub use curve::{CalibrationCurve, Keypoint, lerp};
pub use geometry::{distance, rect_distance};

/// Errors raised while building a [`CalibrationCurve`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CurveError {
    /// The table has no keypoints.
    #[error("calibration curve needs at least one keypoint")]
    Empty,
    /// A keypoint has a NaN or infinite coordinate.
    #[error("keypoint {index} is not finite")]
    NonFinite {
        /// Position of the offending keypoint.
        index: usize,
    },
    /// A keypoint's input is smaller than its predecessor's.
    #[error("keypoint {index} is out of order")]
    Unordered {
        /// Position of the first keypoint that breaks ordering.
        index: usize,
    },
}
