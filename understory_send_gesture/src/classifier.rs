// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag magnitude to [`PriorityTier`] classification.
//!
//! The normalized drag (`0.0` at rest, `1.0` at the full drag distance) first
//! passes through a *gravitation* curve: a [`CalibrationCurve`] with flat
//! plateaus joined by steep bands. Continuous pointer motion therefore lands
//! on a few stable positions, and those positions are bucketed into tiers by
//! [`TierBands`].
//!
//! ```
//! use understory_send_gesture::{PriorityClassifier, PriorityTier};
//!
//! let classifier = PriorityClassifier::default();
//! assert_eq!(classifier.classify(0.10), PriorityTier::Respectful);
//! assert_eq!(classifier.classify(0.60), PriorityTier::Conversational);
//! assert_eq!(classifier.classify(0.90), PriorityTier::TimeSensitive);
//! ```

use understory_calibration::{CalibrationCurve, Keypoint};

use crate::PriorityTier;

/// Default gravitation table: normalized drag to classification position.
///
/// Small drags track linearly, then the curve jumps onto a plateau at `0.56`,
/// a near-flat run from `0.77` to `0.78`, and finally saturates at `1.0`.
pub const GRAVITATION_KEYPOINTS: [Keypoint; 11] = [
    Keypoint::new(0.0, 0.0),
    Keypoint::new(0.11, 0.11),
    Keypoint::new(0.22, 0.22),
    Keypoint::new(0.34, 0.34),
    Keypoint::new(0.35, 0.56),
    Keypoint::new(0.37, 0.56),
    Keypoint::new(0.56, 0.56),
    Keypoint::new(0.58, 0.77),
    Keypoint::new(0.59, 0.77),
    Keypoint::new(0.77, 0.78),
    Keypoint::new(0.78, 1.0),
];

/// Builds the curve for [`GRAVITATION_KEYPOINTS`].
#[must_use]
pub fn default_gravitation() -> CalibrationCurve {
    CalibrationCurve::new(GRAVITATION_KEYPOINTS).expect("built-in gravitation table is ordered")
}

/// Lower bounds, in gravitated units, of the upper two tiers.
///
/// A gravitated position below `conversational` is
/// [`PriorityTier::Respectful`], below `time_sensitive` is
/// [`PriorityTier::Conversational`], and anything else is
/// [`PriorityTier::TimeSensitive`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierBands {
    /// First gravitated position classified as conversational.
    pub conversational: f64,
    /// First gravitated position classified as time-sensitive.
    ///
    /// The default sits at the top of the `0.77..0.78` run so that whole run
    /// belongs to the conversational tier.
    pub time_sensitive: f64,
}

impl Default for TierBands {
    fn default() -> Self {
        Self {
            conversational: 0.56,
            time_sensitive: 0.78,
        }
    }
}

impl TierBands {
    /// Buckets a gravitated position.
    #[must_use]
    pub fn tier_for(&self, gravitated: f64) -> PriorityTier {
        if gravitated >= self.time_sensitive {
            PriorityTier::TimeSensitive
        } else if gravitated >= self.conversational {
            PriorityTier::Conversational
        } else {
            PriorityTier::Respectful
        }
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.conversational.is_finite()
            && self.time_sensitive.is_finite()
            && self.conversational <= self.time_sensitive
    }
}

/// Maps a normalized drag to a [`PriorityTier`].
///
/// Classification is a pure function of its input: no counters and no
/// hysteresis. The plateaus of the gravitation curve are what keep the tier
/// from flickering while the finger trembles.
#[derive(Clone, Debug, PartialEq)]
pub struct PriorityClassifier {
    gravitation: CalibrationCurve,
    bands: TierBands,
}

impl Default for PriorityClassifier {
    fn default() -> Self {
        Self::new(default_gravitation(), TierBands::default())
    }
}

impl PriorityClassifier {
    /// Creates a classifier from a gravitation curve and tier bands.
    #[must_use]
    pub fn new(gravitation: CalibrationCurve, bands: TierBands) -> Self {
        Self { gravitation, bands }
    }

    /// Returns the gravitation curve.
    #[must_use]
    pub fn gravitation(&self) -> &CalibrationCurve {
        &self.gravitation
    }

    /// Returns the tier bands.
    #[must_use]
    pub fn bands(&self) -> TierBands {
        self.bands
    }

    /// Runs `normalized_drag` through the gravitation curve.
    #[must_use]
    pub fn gravitate(&self, normalized_drag: f64) -> f64 {
        self.gravitation.eval(normalized_drag)
    }

    /// Classifies `normalized_drag` (positive means further along the swipe).
    #[must_use]
    pub fn classify(&self, normalized_drag: f64) -> PriorityTier {
        self.bands.tier_for(self.gravitate(normalized_drag))
    }
}
