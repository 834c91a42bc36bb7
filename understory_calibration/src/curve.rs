// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Piecewise-linear calibration curves.
//!
//! A [`CalibrationCurve`] is an ordered table of [`Keypoint`]s. Evaluating the
//! curve linearly interpolates between the two keypoints that bracket the
//! input and clamps to the endpoint outputs outside the table's range.
//!
//! Curves with flat runs ("plateaus") separated by steep segments make a
//! continuous input stick to a handful of landmark outputs:
//!
//! ```
//! use understory_calibration::{CalibrationCurve, Keypoint};
//!
//! let curve = CalibrationCurve::new([
//!     Keypoint::new(0.0, 0.0),
//!     Keypoint::new(0.25, 0.0),
//!     Keypoint::new(0.75, 1.0),
//!     Keypoint::new(1.0, 1.0),
//! ])
//! .unwrap();
//!
//! assert_eq!(curve.eval(0.125), 0.0);
//! assert_eq!(curve.eval(0.5), 0.5);
//! assert_eq!(curve.eval(0.8), 1.0);
//! // Out-of-range inputs clamp to the endpoints.
//! assert_eq!(curve.eval(-3.0), 0.0);
//! assert_eq!(curve.eval(7.0), 1.0);
//! ```

use alloc::vec::Vec;
use core::ops::RangeInclusive;

use smallvec::SmallVec;

use crate::CurveError;

/// A single `(input, output)` pair of a [`CalibrationCurve`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Keypoint {
    /// Position along the input axis.
    pub input: f64,
    /// Value produced at `input`.
    pub output: f64,
}

impl Keypoint {
    /// Creates a keypoint.
    #[must_use]
    pub const fn new(input: f64, output: f64) -> Self {
        Self { input, output }
    }
}

impl From<(f64, f64)> for Keypoint {
    fn from((input, output): (f64, f64)) -> Self {
        Self { input, output }
    }
}

/// Inline capacity for keypoint storage. Typical tables have around a dozen entries.
const INLINE_KEYPOINTS: usize = 12;

/// An ordered keypoint table evaluated by piecewise-linear interpolation.
///
/// Construction validates the table: it must be non-empty, finite, and in
/// non-decreasing input order. Two consecutive keypoints may share an input,
/// which describes a step; at the step the later keypoint's output wins.
///
/// Evaluation never fails. Inputs below the first keypoint produce the first
/// output, inputs above the last keypoint produce the last output, and `NaN`
/// produces the first output.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Keypoint>", into = "Vec<Keypoint>")
)]
pub struct CalibrationCurve {
    points: SmallVec<[Keypoint; INLINE_KEYPOINTS]>,
}

impl CalibrationCurve {
    /// Builds a curve from keypoints, validating their order.
    pub fn new<I>(points: I) -> Result<Self, CurveError>
    where
        I: IntoIterator,
        I::Item: Into<Keypoint>,
    {
        let points: SmallVec<[Keypoint; INLINE_KEYPOINTS]> =
            points.into_iter().map(Into::into).collect();
        validate(&points)?;
        Ok(Self { points })
    }

    /// The identity curve over `[0, 1]`.
    #[must_use]
    pub fn identity() -> Self {
        let mut points = SmallVec::new();
        points.push(Keypoint::new(0.0, 0.0));
        points.push(Keypoint::new(1.0, 1.0));
        Self { points }
    }

    /// Returns the keypoints in input order.
    #[must_use]
    pub fn points(&self) -> &[Keypoint] {
        &self.points
    }

    /// Returns the number of keypoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: a validated curve has at least one keypoint.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the span of inputs covered by keypoints.
    #[must_use]
    pub fn input_range(&self) -> RangeInclusive<f64> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first.input..=last.input,
            _ => 0.0..=0.0,
        }
    }

    /// Evaluates the curve at `x`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        lerp(&self.points, x)
    }
}

impl TryFrom<Vec<Keypoint>> for CalibrationCurve {
    type Error = CurveError;

    fn try_from(points: Vec<Keypoint>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<CalibrationCurve> for Vec<Keypoint> {
    fn from(curve: CalibrationCurve) -> Self {
        curve.points.into_vec()
    }
}

fn validate(points: &[Keypoint]) -> Result<(), CurveError> {
    if points.is_empty() {
        return Err(CurveError::Empty);
    }
    for (index, p) in points.iter().enumerate() {
        if !p.input.is_finite() || !p.output.is_finite() {
            return Err(CurveError::NonFinite { index });
        }
    }
    for (index, pair) in points.windows(2).enumerate() {
        if pair[1].input < pair[0].input {
            return Err(CurveError::Unordered { index: index + 1 });
        }
    }
    Ok(())
}

fn is_ordered(points: &[Keypoint]) -> bool {
    points.windows(2).all(|w| w[0].input <= w[1].input)
}

/// Interpolates linearly across `points` at `x`.
///
/// `points` must be in non-decreasing input order. This is checked with a
/// debug assertion; in release builds an unordered table still yields a value
/// between the outputs of the two keypoints nearest the probe. An empty slice
/// yields `0.0`.
#[must_use]
pub fn lerp(points: &[Keypoint], x: f64) -> f64 {
    debug_assert!(
        is_ordered(points),
        "calibration keypoints must be in non-decreasing input order"
    );
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return 0.0;
    };
    if x.is_nan() || x <= first.input {
        return first.output;
    }
    if x >= last.input {
        return last.output;
    }

    // At least two keypoints remain here, and `first.input < x < last.input`.
    let upper = points
        .partition_point(|p| p.input <= x)
        .clamp(1, points.len() - 1);
    let a = points[upper - 1];
    let b = points[upper];
    let span = b.input - a.input;
    if span <= 0.0 {
        return b.output;
    }
    let t = ((x - a.input) / span).clamp(0.0, 1.0);
    a.output + (b.output - a.output) * t
}
