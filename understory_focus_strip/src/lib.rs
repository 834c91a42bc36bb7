// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_focus_strip --heading-base-level=0

//! Understory Focus Strip: a horizontally paged strip with one focal item.
//!
//! Items in the strip are emphasized by how close their midpoint is to the
//! viewport center. The nearest visible item is the *centered* item; only an
//! item that is exactly centered is interactive. Scrolls settle on offsets
//! that center exactly one item.
//!
//! - [`FocusStrip`] holds items, the offset, and cached weights, and reports
//!   a [`CenteredChange`] at most once per [`FocusStrip::flush`].
//! - [`weights`] has the same math as free functions for hosts that keep
//!   their own layout.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_focus_strip::FocusStrip;
//!
//! let mut strip = FocusStrip::default();
//! strip.set_viewport_width(120.0);
//! strip.set_items((0..4_u32).map(|i| {
//!     let x = f64::from(i) * 120.0;
//!     (i, Rect::new(x, 0.0, x + 120.0, 200.0))
//! }));
//! strip.flush();
//! assert_eq!(strip.centered(), Some(0));
//!
//! // A fling comes to rest partway through the third item; snap it.
//! let target = strip.target_offset(250.0, 1.0);
//! let change = strip.update(target).unwrap();
//! assert_eq!(change.current, Some(2));
//! assert!(strip.is_interactive(&2));
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: select Kurbo's float backend.
//! - `serde`: (de)serialize [`FocusStripConfig`].
//! - `tracing`: emit a `debug` event when the centered item changes.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod strip;
pub mod weights;

pub use strip::{CenteredChange, FocusStrip};

/// Tuning for a [`FocusStrip`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FocusStripConfig {
    /// Weight of items one full step or more from the center, in `0.0..=1.0`.
    pub min_weight: f64,
    /// Gap between neighboring items; widens the weight falloff.
    pub item_spacing: f64,
}

impl Default for FocusStripConfig {
    fn default() -> Self {
        Self {
            min_weight: 0.3,
            item_spacing: 0.0,
        }
    }
}

impl FocusStripConfig {
    /// Check that every field is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.min_weight) {
            return Err(ConfigError::MinWeight(self.min_weight));
        }
        if !self.item_spacing.is_finite() || self.item_spacing < 0.0 {
            return Err(ConfigError::Spacing(self.item_spacing));
        }
        Ok(())
    }
}

/// A [`FocusStripConfig`] field is out of range.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// `min_weight` is outside `0.0..=1.0`.
    #[error("minimum weight must be within 0..=1, got {0}")]
    MinWeight(f64),
    /// `item_spacing` is negative or not finite.
    #[error("item spacing must be finite and non-negative, got {0}")]
    Spacing(f64),
}
