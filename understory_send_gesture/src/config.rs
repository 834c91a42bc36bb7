// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_calibration::{CalibrationCurve, CurveError, Keypoint};

use crate::classifier::{TierBands, default_gravitation};

/// Gravitated positions at which the preview settles on zone landmarks.
///
/// At `bottom` the preview's center sits on the zone's lower edge, at
/// `center` on its middle, at `top` on its upper edge. Must satisfy
/// `0 < bottom <= center <= top`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckpointInputs {
    /// Gravitated position mapped to the zone's bottom edge.
    pub bottom: f64,
    /// Gravitated position mapped to the zone's center.
    pub center: f64,
    /// Gravitated position mapped to the zone's top edge.
    pub top: f64,
}

impl Default for CheckpointInputs {
    fn default() -> Self {
        Self {
            bottom: 0.56,
            center: 0.77,
            top: 1.0,
        }
    }
}

impl CheckpointInputs {
    fn is_valid(&self) -> bool {
        [self.bottom, self.center, self.top]
            .iter()
            .all(|v| v.is_finite())
            && 0.0 < self.bottom
            && self.bottom <= self.center
            && self.center <= self.top
    }
}

/// Tuning for [`GestureSendController`](crate::GestureSendController).
///
/// The defaults reproduce the stock swipe-to-send feel. Every field is a
/// tunable; call [`GestureConfig::validate`] (or let
/// [`GestureSendController::new`](crate::GestureSendController::new) do it)
/// after editing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GestureConfig {
    /// Normalized drag to classification position.
    pub gravitation: CalibrationCurve,
    /// Gravitated thresholds for each tier.
    pub bands: TierBands,
    /// Upward travel, in view units, that counts as a full swipe (`1.0`).
    pub total_drag_distance: f64,
    /// Largest horizontal preview displacement in either direction.
    pub max_horizontal_offset: f64,
    /// Fraction of the zone height used as the capture radius.
    pub zone_radius_ratio: f64,
    /// Landmark positions for the preview's vertical offset.
    pub checkpoints: CheckpointInputs,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            gravitation: default_gravitation(),
            bands: TierBands::default(),
            total_drag_distance: 300.0,
            max_horizontal_offset: 20.0,
            zone_radius_ratio: 0.5,
            checkpoints: CheckpointInputs::default(),
        }
    }
}

impl GestureConfig {
    /// Replaces the gravitation table, validating it.
    pub fn with_gravitation<I>(mut self, points: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator,
        I::Item: Into<Keypoint>,
    {
        self.gravitation = CalibrationCurve::new(points)?;
        Ok(self)
    }

    /// Checks every field, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.total_drag_distance.is_finite() && self.total_drag_distance > 0.0) {
            return Err(ConfigError::DragDistance(self.total_drag_distance));
        }
        if !(self.max_horizontal_offset.is_finite() && self.max_horizontal_offset >= 0.0) {
            return Err(ConfigError::HorizontalLimit(self.max_horizontal_offset));
        }
        if !(self.zone_radius_ratio.is_finite() && self.zone_radius_ratio > 0.0) {
            return Err(ConfigError::ZoneRadius(self.zone_radius_ratio));
        }
        if !self.bands.is_valid() {
            return Err(ConfigError::Bands);
        }
        if !self.checkpoints.is_valid() {
            return Err(ConfigError::Checkpoints);
        }
        Ok(())
    }
}

/// Problems found by [`GestureConfig::validate`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The gravitation table is malformed.
    #[error("invalid gravitation curve")]
    Curve(#[from] CurveError),
    /// `total_drag_distance` is not a positive finite number.
    #[error("total drag distance must be positive, got {0}")]
    DragDistance(f64),
    /// `max_horizontal_offset` is negative or not finite.
    #[error("horizontal offset limit must be non-negative, got {0}")]
    HorizontalLimit(f64),
    /// `zone_radius_ratio` is not a positive finite number.
    #[error("zone radius ratio must be positive, got {0}")]
    ZoneRadius(f64),
    /// Tier thresholds are not finite or are inverted.
    #[error("tier bands must satisfy conversational <= time_sensitive")]
    Bands,
    /// Checkpoint inputs are not ordered.
    #[error("checkpoints must satisfy 0 < bottom <= center <= top")]
    Checkpoints,
}
