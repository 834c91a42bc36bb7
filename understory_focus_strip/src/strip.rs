// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stateful focus strip: items, scroll offset, cached weights, and the
//! debounced centered-item change.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::Rect;

use crate::weights::{compute_weights, find_centered, is_interactive_weight, snap_target};
use crate::{ConfigError, FocusStripConfig};

/// The centered item changed between two flushes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CenteredChange<K> {
    /// Centered item before the flush.
    pub previous: Option<K>,
    /// Centered item after the flush.
    pub current: Option<K>,
}

/// A horizontal strip of items with one focal item at the viewport center.
///
/// Setters mark the strip dirty; [`FocusStrip::flush`] recomputes weights and
/// the centered item once, however many setters ran before it. Until the next
/// flush, [`FocusStrip::weight`] and [`FocusStrip::centered`] report the
/// previous layout.
///
/// Item ids should be unique. With duplicates, id lookups resolve to the
/// last item carrying that id.
#[derive(Clone, Debug)]
pub struct FocusStrip<K> {
    config: FocusStripConfig,
    items: Vec<(K, Rect)>,
    index: HashMap<K, usize>,
    weights: Vec<f64>,
    viewport_width: f64,
    offset: f64,
    centered: Option<K>,
    dirty: bool,
}

impl<K: Copy + Eq + Hash> Default for FocusStrip<K> {
    fn default() -> Self {
        Self::with_valid_config(FocusStripConfig::default())
    }
}

impl<K: Copy + Eq + Hash> FocusStrip<K> {
    /// Create an empty strip.
    pub fn new(config: FocusStripConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: FocusStripConfig) -> Self {
        Self {
            config,
            items: Vec::new(),
            index: HashMap::new(),
            weights: Vec::new(),
            viewport_width: 0.0,
            offset: 0.0,
            centered: None,
            dirty: false,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &FocusStripConfig {
        &self.config
    }

    /// Replace all items. Frames are in content coordinates.
    pub fn set_items<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = (K, Rect)>,
    {
        self.items.clear();
        self.items.extend(items);
        self.index.clear();
        self.index
            .extend(self.items.iter().enumerate().map(|(i, (id, _))| (*id, i)));
        self.dirty = true;
    }

    /// Items in strip order.
    pub fn items(&self) -> &[(K, Rect)] {
        &self.items
    }

    /// Set the viewport width. Negative or non-finite widths hide every item.
    pub fn set_viewport_width(&mut self, width: f64) {
        if width != self.viewport_width {
            self.viewport_width = width;
            self.dirty = true;
        }
    }

    /// Current viewport width.
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// The focal point in viewport coordinates.
    pub fn viewport_center(&self) -> f64 {
        self.viewport_width * 0.5
    }

    /// Set the scroll offset.
    pub fn set_offset(&mut self, offset: f64) {
        if offset != self.offset {
            self.offset = offset;
            self.dirty = true;
        }
    }

    /// Current scroll offset.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Whether a setter ran since the last flush.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Recompute weights and the centered item.
    ///
    /// Returns a change only if the centered item differs from the one after
    /// the previous flush.
    pub fn flush(&mut self) -> Option<CenteredChange<K>> {
        if !self.dirty {
            return None;
        }
        self.dirty = false;

        self.weights.clear();
        self.weights.extend(
            compute_weights(self.offset, &self.items, self.viewport_center(), &self.config)
                .into_iter()
                .map(|(_, weight)| weight),
        );

        let current = find_centered(&self.items, self.offset, self.viewport_width);
        if current == self.centered {
            return None;
        }
        let previous = core::mem::replace(&mut self.centered, current);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "focus_strip.centered_changed",
            offset = self.offset,
            previous_index = ?previous.and_then(|id| self.index.get(&id).copied()),
            current_index = ?current.and_then(|id| self.index.get(&id).copied())
        );
        Some(CenteredChange { previous, current })
    }

    /// Set the offset and flush in one step.
    pub fn update(&mut self, offset: f64) -> Option<CenteredChange<K>> {
        self.set_offset(offset);
        self.flush()
    }

    /// Emphasis weight of `id` as of the last flush.
    pub fn weight(&self, id: &K) -> Option<f64> {
        self.index
            .get(id)
            .and_then(|&index| self.weights.get(index).copied())
    }

    /// Whether `id` is exactly centered and so accepts input.
    pub fn is_interactive(&self, id: &K) -> bool {
        self.weight(id).is_some_and(is_interactive_weight)
    }

    /// Weights of all items as of the last flush, in strip order.
    pub fn weights(&self) -> impl Iterator<Item = (K, f64)> + '_ {
        self.items
            .iter()
            .zip(&self.weights)
            .map(|(&(id, _), &weight)| (id, weight))
    }

    /// Centered item as of the last flush.
    pub fn centered(&self) -> Option<K> {
        self.centered
    }

    /// Where a scroll that would come to rest at `proposed` should settle
    /// instead, so that one item ends up exactly centered.
    ///
    /// `velocity` breaks exact ties: positive favors the later item.
    pub fn target_offset(&self, proposed: f64, velocity: f64) -> f64 {
        snap_target(&self.items, proposed, velocity, self.viewport_center())
    }

    /// Offset that exactly centers `id`.
    pub fn scroll_offset_for(&self, id: &K) -> Option<f64> {
        let &index = self.index.get(id)?;
        let (_, frame) = self.items.get(index)?;
        Some(frame.center().x - self.viewport_center())
    }
}
