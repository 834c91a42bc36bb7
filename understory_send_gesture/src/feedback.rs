// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outbound notifications from the send gesture.
//!
//! The controller never talks to an animator or haptic engine directly.
//! Instead, every transition calls one method on a [`SendFeedback`] sink the
//! host passes in. All methods default to no-ops, so a host implements only
//! what it renders.
//!
//! `Vec<GestureEvent>` implements [`SendFeedback`] by recording each call, which
//! is convenient for tests and for hosts that prefer to drain events after
//! each input:
//!
//! ```
//! use understory_send_gesture::{GestureEvent, PriorityTier, SendFeedback};
//!
//! let mut log: Vec<GestureEvent> = Vec::new();
//! log.zone_entered();
//! log.tier_changed(PriorityTier::Conversational);
//! assert_eq!(
//!     log,
//!     vec![
//!         GestureEvent::ZoneEntered,
//!         GestureEvent::TierChanged(PriorityTier::Conversational),
//!     ]
//! );
//! ```

use alloc::vec::Vec;

use kurbo::{Rect, Vec2};

use crate::PriorityTier;

/// Receiver for gesture side effects.
///
/// Each method corresponds to exactly one state transition and is called at
/// most once per transition.
pub trait SendFeedback {
    /// A gesture started tracking. Hide the compose surface and show a
    /// floating preview at `origin`.
    fn gesture_began(&mut self, origin: Rect) {
        let _ = origin;
    }

    /// The tracked point crossed into the drop zone.
    fn zone_entered(&mut self) {}

    /// The tracked point crossed out of the drop zone.
    fn zone_exited(&mut self) {}

    /// The live tier changed. Play [`PriorityTier::haptic`] and recolor.
    fn tier_changed(&mut self, tier: PriorityTier) {
        let _ = tier;
    }

    /// Move the preview to `offset` from its origin.
    fn preview_repositioned(&mut self, offset: Vec2) {
        let _ = offset;
    }

    /// Animate the preview back to its origin; nothing will be sent.
    fn preview_returned(&mut self) {}

    /// The gesture finished. When `sent` is `false`, restore the compose
    /// surface to its pre-gesture state.
    fn gesture_resolved(&mut self, sent: bool) {
        let _ = sent;
    }
}

/// No-op sink.
impl SendFeedback for () {}

impl<F: SendFeedback + ?Sized> SendFeedback for &mut F {
    fn gesture_began(&mut self, origin: Rect) {
        (**self).gesture_began(origin);
    }

    fn zone_entered(&mut self) {
        (**self).zone_entered();
    }

    fn zone_exited(&mut self) {
        (**self).zone_exited();
    }

    fn tier_changed(&mut self, tier: PriorityTier) {
        (**self).tier_changed(tier);
    }

    fn preview_repositioned(&mut self, offset: Vec2) {
        (**self).preview_repositioned(offset);
    }

    fn preview_returned(&mut self) {
        (**self).preview_returned();
    }

    fn gesture_resolved(&mut self, sent: bool) {
        (**self).gesture_resolved(sent);
    }
}

/// A recorded [`SendFeedback`] call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GestureEvent {
    /// See [`SendFeedback::gesture_began`].
    Began {
        /// Frame the preview starts from.
        origin: Rect,
    },
    /// See [`SendFeedback::zone_entered`].
    ZoneEntered,
    /// See [`SendFeedback::zone_exited`].
    ZoneExited,
    /// See [`SendFeedback::tier_changed`].
    TierChanged(PriorityTier),
    /// See [`SendFeedback::preview_repositioned`].
    PreviewRepositioned(Vec2),
    /// See [`SendFeedback::preview_returned`].
    PreviewReturned,
    /// See [`SendFeedback::gesture_resolved`].
    Resolved {
        /// Whether the draft was committed.
        sent: bool,
    },
}

impl SendFeedback for Vec<GestureEvent> {
    fn gesture_began(&mut self, origin: Rect) {
        self.push(GestureEvent::Began { origin });
    }

    fn zone_entered(&mut self) {
        self.push(GestureEvent::ZoneEntered);
    }

    fn zone_exited(&mut self) {
        self.push(GestureEvent::ZoneExited);
    }

    fn tier_changed(&mut self, tier: PriorityTier) {
        self.push(GestureEvent::TierChanged(tier));
    }

    fn preview_repositioned(&mut self, offset: Vec2) {
        self.push(GestureEvent::PreviewRepositioned(offset));
    }

    fn preview_returned(&mut self) {
        self.push(GestureEvent::PreviewReturned);
    }

    fn gesture_resolved(&mut self, sent: bool) {
        self.push(GestureEvent::Resolved { sent });
    }
}
