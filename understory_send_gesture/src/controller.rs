// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The swipe-to-send state machine.
//!
//! ## Usage
//!
//! 1) When the pan gesture becomes possible, call [`GestureSendController::arm`]
//!    with the current draft and the compose surface's frame. Unsendable drafts
//!    are ignored.
//! 2) Feed every pointer position to [`GestureSendController::update`]. The
//!    first update starts tracking: the start point is captured and the drop
//!    zone is queried once from the [`DropZoneSource`].
//! 3) On pointer up call [`GestureSendController::release`]. If the preview
//!    was inside the zone you get a [`CommitRequest`]; perform the send and
//!    report the result with [`GestureSendController::complete_commit`].
//!    Hosts with an executor can use
//!    [`GestureSendController::release_and_commit`] instead.
//! 4) On system cancellation call [`GestureSendController::interrupt`]; when
//!    the surface goes away call [`GestureSendController::teardown`].
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_send_gesture::{
//!     Draft, DropZone, GestureEvent, GestureSendController, PriorityTier, Release,
//! };
//!
//! struct Text(&'static str);
//! impl Draft for Text {
//!     type Key = &'static str;
//!     fn is_sendable(&self) -> bool {
//!         !self.0.is_empty()
//!     }
//!     fn key(&self) -> Self::Key {
//!         self.0
//!     }
//! }
//!
//! let mut send = GestureSendController::default();
//! let mut events: Vec<GestureEvent> = Vec::new();
//!
//! // Compose bar centered at (100, 500); drop zone centered at (100, 260).
//! let compose = Rect::new(50.0, 480.0, 150.0, 520.0);
//! let zone = DropZone::from_rect(Rect::new(0.0, 200.0, 200.0, 320.0));
//!
//! send.arm(&Text("hi"), compose).unwrap();
//! send.update(Point::new(100.0, 500.0), &zone, &mut events);
//! send.update(Point::new(100.0, 260.0), &zone, &mut events);
//!
//! let Release::Commit(request) = send.release(&mut events) else {
//!     panic!("released inside the zone");
//! };
//! assert_eq!(request.key, "hi");
//! assert_eq!(request.tier, PriorityTier::TimeSensitive);
//!
//! assert_eq!(send.complete_commit::<()>(Ok(()), &mut events), Ok(PriorityTier::TimeSensitive));
//! assert_eq!(events.last(), Some(&GestureEvent::Resolved { sent: true }));
//! ```

use core::future::Future;

use kurbo::{Point, Rect, Vec2};
use understory_calibration::{Keypoint, lerp};

use crate::{
    ConfigError, DropZone, DropZoneDetector, GestureConfig, PriorityClassifier, PriorityTier,
    SendFeedback, ZoneTransition,
};

/// Something the user composed and may swipe away.
///
/// The controller only asks whether the draft can be sent and for a key that
/// identifies it; contents stay with the host.
pub trait Draft {
    /// Identity handed back in [`CommitRequest::key`].
    type Key;

    /// Whether a swipe should start at all.
    fn is_sendable(&self) -> bool;

    /// Identity of this draft.
    fn key(&self) -> Self::Key;
}

/// Provides the drop zone when tracking starts.
///
/// Queried exactly once per gesture; later layout changes do not affect a
/// gesture already in flight.
pub trait DropZoneSource {
    /// Current drop zone.
    fn drop_zone(&self) -> DropZone;
}

impl DropZoneSource for DropZone {
    fn drop_zone(&self) -> DropZone {
        *self
    }
}

impl<F: Fn() -> DropZone> DropZoneSource for F {
    fn drop_zone(&self) -> DropZone {
        self()
    }
}

/// Performs the actual send for [`GestureSendController::release_and_commit`].
pub trait Committer<K> {
    /// Failure reported by the transport, passed through unchanged.
    type Error;

    /// Sends the draft identified by `key` with the given tier.
    fn commit(&mut self, key: &K, tier: PriorityTier) -> impl Future<Output = Result<(), Self::Error>>;
}

/// Coarse state of a [`GestureSendController`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    /// No gesture.
    Idle,
    /// A sendable draft is ready; waiting for the first move.
    Armed,
    /// Following the pointer.
    Tracking,
    /// Released inside the zone; waiting for the commit result.
    Resolving,
}

/// Live state of a tracked gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureSession<K> {
    key: K,
    origin: Rect,
    start_point: Point,
    translation: Vec2,
    zone: DropZone,
    tier: PriorityTier,
    in_zone: bool,
    preview_offset: Vec2,
    checkpoints: [Keypoint; 4],
}

impl<K> GestureSession<K> {
    /// Key of the draft being swiped.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Frame of the compose surface when the gesture began.
    pub fn origin(&self) -> Rect {
        self.origin
    }

    /// Pointer position of the first update.
    pub fn start_point(&self) -> Point {
        self.start_point
    }

    /// Pointer travel since [`start_point`](Self::start_point).
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Drop zone captured when tracking started.
    pub fn zone(&self) -> DropZone {
        self.zone
    }

    /// Tier as of the last update. Always `Respectful` outside the zone.
    pub fn tier(&self) -> PriorityTier {
        self.tier
    }

    /// Whether the tracked point was inside the zone at the last update.
    pub fn in_zone(&self) -> bool {
        self.in_zone
    }

    /// Last offset reported through [`SendFeedback::preview_repositioned`].
    pub fn preview_offset(&self) -> Vec2 {
        self.preview_offset
    }

    /// Point tested against the drop zone: the preview's starting center
    /// moved by the raw pointer translation.
    pub fn tracked_point(&self) -> Point {
        self.origin.center() + self.translation
    }
}

/// What to do after [`GestureSendController::release`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommitRequest<K> {
    /// Key of the draft to send.
    pub key: K,
    /// Tier snapshotted at release.
    pub tier: PriorityTier,
}

/// Outcome of [`GestureSendController::release`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Release<K> {
    /// Released inside the zone. Send, then call
    /// [`GestureSendController::complete_commit`].
    Commit(CommitRequest<K>),
    /// Released outside the zone, or before the pointer moved.
    Cancelled,
    /// No gesture was active.
    Ignored,
}

/// Final result of [`GestureSendController::release_and_commit`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Committed with this tier.
    Sent(PriorityTier),
    /// Nothing was sent.
    Cancelled,
    /// No gesture was active.
    Ignored,
}

/// Why [`GestureSendController::arm`] did not start a gesture.
///
/// Neither case is a fault; hosts typically ignore the value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArmRejected {
    /// The draft reported it cannot be sent.
    #[error("draft is not sendable")]
    NotSendable,
    /// A gesture or a commit is already in progress.
    #[error("a send gesture is already in progress")]
    Busy,
}

/// Errors from resolving a release.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SendError<E> {
    /// The committer failed. The error is passed through unchanged.
    #[error("commit failed")]
    CommitFailed(E),
    /// A commit result arrived while no commit was pending.
    #[error("no commit is pending")]
    NoCommitPending,
}

#[derive(Clone, Debug)]
enum State<K> {
    Idle,
    Armed { key: K, origin: Rect },
    Tracking(GestureSession<K>),
    Resolving { tier: PriorityTier },
}

/// Drives one swipe-to-send gesture at a time.
///
/// See the [module documentation](self) for the call sequence.
#[derive(Clone, Debug)]
pub struct GestureSendController<K> {
    classifier: PriorityClassifier,
    detector: DropZoneDetector,
    config: GestureConfig,
    state: State<K>,
}

impl<K> Default for GestureSendController<K> {
    fn default() -> Self {
        Self::from_valid_config(GestureConfig::default())
    }
}

impl<K> GestureSendController<K> {
    /// Creates a controller after validating `config`.
    pub fn new(config: GestureConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: GestureConfig) -> Self {
        Self {
            classifier: PriorityClassifier::new(config.gravitation.clone(), config.bands),
            detector: DropZoneDetector {
                radius_ratio: config.zone_radius_ratio,
            },
            config,
            state: State::Idle,
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Classifier in use.
    pub fn classifier(&self) -> &PriorityClassifier {
        &self.classifier
    }

    /// Current phase.
    pub fn phase(&self) -> GesturePhase {
        match self.state {
            State::Idle => GesturePhase::Idle,
            State::Armed { .. } => GesturePhase::Armed,
            State::Tracking(_) => GesturePhase::Tracking,
            State::Resolving { .. } => GesturePhase::Resolving,
        }
    }

    /// Returns `true` while waiting on a commit result.
    pub fn is_busy(&self) -> bool {
        matches!(self.state, State::Resolving { .. })
    }

    /// The tracked session, if tracking.
    pub fn session(&self) -> Option<&GestureSession<K>> {
        match &self.state {
            State::Tracking(session) => Some(session),
            _ => None,
        }
    }

    /// Converts a pointer translation into drag progress (`1.0` is a full swipe up).
    pub fn normalized_drag(&self, translation: Vec2) -> f64 {
        -translation.y / self.config.total_drag_distance
    }

    /// Prepares a gesture for `draft`, whose compose surface occupies `origin`.
    pub fn arm<D>(&mut self, draft: &D, origin: Rect) -> Result<(), ArmRejected>
    where
        D: Draft<Key = K> + ?Sized,
    {
        if !matches!(self.state, State::Idle) {
            #[cfg(feature = "tracing")]
            tracing::debug!(message = "send_gesture.arm_rejected", phase = ?self.phase());
            return Err(ArmRejected::Busy);
        }
        if !draft.is_sendable() {
            #[cfg(feature = "tracing")]
            tracing::debug!(message = "send_gesture.not_sendable");
            return Err(ArmRejected::NotSendable);
        }
        self.state = State::Armed {
            key: draft.key(),
            origin,
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "send_gesture.armed");
        Ok(())
    }

    /// Feeds a pointer position. Returns `false` if no gesture consumed it.
    pub fn update<Z, F>(&mut self, pointer: Point, zones: &Z, feedback: &mut F) -> bool
    where
        Z: DropZoneSource + ?Sized,
        F: SendFeedback + ?Sized,
    {
        match core::mem::replace(&mut self.state, State::Idle) {
            State::Armed { key, origin } => {
                let zone = zones.drop_zone();
                let session = self.begin_session(key, origin, pointer, zone);
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    message = "send_gesture.tracking",
                    start_x = pointer.x,
                    start_y = pointer.y,
                    zone_top = zone.top(),
                    zone_bottom = zone.bottom()
                );
                feedback.gesture_began(origin);
                self.state = State::Tracking(session);
            }
            State::Tracking(session) => self.state = State::Tracking(session),
            other => {
                self.state = other;
                return false;
            }
        }

        let State::Tracking(session) = &mut self.state else {
            return false;
        };
        Self::track(
            &self.classifier,
            &self.detector,
            &self.config,
            session,
            pointer,
            feedback,
        );
        true
    }

    fn begin_session(&self, key: K, origin: Rect, pointer: Point, zone: DropZone) -> GestureSession<K> {
        let start_y = origin.center().y;
        let cp = self.config.checkpoints;
        GestureSession {
            key,
            origin,
            start_point: pointer,
            translation: Vec2::ZERO,
            zone,
            tier: PriorityTier::Respectful,
            in_zone: false,
            preview_offset: Vec2::ZERO,
            checkpoints: [
                Keypoint::new(0.0, 0.0),
                Keypoint::new(cp.bottom, zone.bottom() - start_y),
                Keypoint::new(cp.center, zone.center_y() - start_y),
                Keypoint::new(cp.top, zone.top() - start_y),
            ],
        }
    }

    fn track<F>(
        classifier: &PriorityClassifier,
        detector: &DropZoneDetector,
        config: &GestureConfig,
        session: &mut GestureSession<K>,
        pointer: Point,
        feedback: &mut F,
    ) where
        F: SendFeedback + ?Sized,
    {
        session.translation = pointer - session.start_point;
        let normalized = -session.translation.y / config.total_drag_distance;

        let zone = detector.update(session.tracked_point(), &session.zone, session.in_zone);
        let tier = if zone.in_zone {
            classifier.classify(normalized)
        } else {
            PriorityTier::Respectful
        };
        let tier_changed = tier != session.tier;
        session.in_zone = zone.in_zone;
        session.tier = tier;

        match zone.transition {
            ZoneTransition::Entered => {
                #[cfg(feature = "tracing")]
                tracing::debug!(message = "send_gesture.zone_entered");
                feedback.zone_entered();
            }
            ZoneTransition::Exited => {
                #[cfg(feature = "tracing")]
                tracing::debug!(message = "send_gesture.zone_exited");
                feedback.zone_exited();
            }
            ZoneTransition::None => {}
        }
        if tier_changed {
            #[cfg(feature = "tracing")]
            tracing::debug!(message = "send_gesture.tier_changed", tier = ?tier);
            feedback.tier_changed(tier);
        }

        let vertical = lerp(&session.checkpoints, classifier.gravitate(normalized));
        let limit = config.max_horizontal_offset;
        let horizontal = session.translation.x.clamp(-limit, limit);
        session.preview_offset = Vec2::new(horizontal, vertical);
        #[cfg(feature = "tracing")]
        tracing::trace!(
            message = "send_gesture.preview",
            x = session.preview_offset.x,
            y = session.preview_offset.y
        );
        feedback.preview_repositioned(session.preview_offset);
    }

    /// Ends the pointer interaction.
    ///
    /// Membership and tier are snapshotted from the last update; nothing after
    /// this call can change what gets committed.
    pub fn release<F>(&mut self, feedback: &mut F) -> Release<K>
    where
        F: SendFeedback + ?Sized,
    {
        match core::mem::replace(&mut self.state, State::Idle) {
            State::Tracking(session) => {
                let GestureSession {
                    key, tier, in_zone, ..
                } = session;
                #[cfg(feature = "tracing")]
                tracing::debug!(message = "send_gesture.released", in_zone, tier = ?tier);
                if in_zone {
                    self.state = State::Resolving { tier };
                    Release::Commit(CommitRequest { key, tier })
                } else {
                    feedback.preview_returned();
                    feedback.gesture_resolved(false);
                    Release::Cancelled
                }
            }
            State::Armed { .. } => Release::Cancelled,
            State::Idle => Release::Ignored,
            resolving @ State::Resolving { .. } => {
                self.state = resolving;
                Release::Ignored
            }
        }
    }

    /// Reports the result of the commit requested by [`release`](Self::release).
    ///
    /// Either way the controller returns to idle. On success the committed
    /// tier is returned; on failure the committer's error comes back inside
    /// [`SendError::CommitFailed`] and nothing is retried.
    pub fn complete_commit<E>(
        &mut self,
        result: Result<(), E>,
        feedback: &mut (impl SendFeedback + ?Sized),
    ) -> Result<PriorityTier, SendError<E>> {
        let State::Resolving { tier } = self.state else {
            return Err(SendError::NoCommitPending);
        };
        self.state = State::Idle;
        match result {
            Ok(()) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(message = "send_gesture.sent", tier = ?tier);
                feedback.gesture_resolved(true);
                Ok(tier)
            }
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(message = "send_gesture.commit_failed", tier = ?tier);
                feedback.gesture_resolved(false);
                Err(SendError::CommitFailed(err))
            }
        }
    }

    /// Releases and, if needed, awaits `committer` before resolving.
    ///
    /// The controller stays [`GesturePhase::Resolving`] for the duration of the
    /// await, so a concurrent [`arm`](Self::arm) would be rejected as busy.
    ///
    /// If the returned future is dropped before it completes, the controller
    /// is left in [`GesturePhase::Resolving`] and keeps rejecting new gestures
    /// as [`ArmRejected::Busy`]. Call [`teardown`](Self::teardown) after
    /// abandoning the future to return to idle.
    pub async fn release_and_commit<C, F>(
        &mut self,
        committer: &mut C,
        feedback: &mut F,
    ) -> Result<Resolution, SendError<C::Error>>
    where
        C: Committer<K> + ?Sized,
        F: SendFeedback + ?Sized,
    {
        match self.release(feedback) {
            Release::Commit(request) => {
                let result = committer.commit(&request.key, request.tier).await;
                self.complete_commit(result, feedback).map(Resolution::Sent)
            }
            Release::Cancelled => Ok(Resolution::Cancelled),
            Release::Ignored => Ok(Resolution::Ignored),
        }
    }

    /// Cancels an armed or tracked gesture because the system interrupted it.
    ///
    /// Behaves like a release outside the zone. A pending commit is left alone.
    /// Returns `true` if a gesture was cancelled.
    pub fn interrupt<F>(&mut self, feedback: &mut F) -> bool
    where
        F: SendFeedback + ?Sized,
    {
        match core::mem::replace(&mut self.state, State::Idle) {
            State::Armed { .. } => {
                #[cfg(feature = "tracing")]
                tracing::debug!(message = "send_gesture.interrupted", phase = "armed");
                true
            }
            State::Tracking(_) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(message = "send_gesture.interrupted", phase = "tracking");
                feedback.preview_returned();
                feedback.gesture_resolved(false);
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }

    /// Drops all gesture state because the owning surface is going away.
    ///
    /// An armed or tracked gesture is cancelled as by
    /// [`interrupt`](Self::interrupt). A pending commit is forgotten: a later
    /// [`complete_commit`](Self::complete_commit) reports
    /// [`SendError::NoCommitPending`].
    pub fn teardown<F>(&mut self, feedback: &mut F)
    where
        F: SendFeedback + ?Sized,
    {
        if !self.interrupt(feedback) {
            self.state = State::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;
    use crate::GestureEvent;

    struct Note {
        id: u32,
        sendable: bool,
    }

    impl Draft for Note {
        type Key = u32;

        fn is_sendable(&self) -> bool {
            self.sendable
        }

        fn key(&self) -> u32 {
            self.id
        }
    }

    const NOTE: Note = Note {
        id: 7,
        sendable: true,
    };

    // Compose surface centered at (100, 500). The zone's center is 240 above
    // it, i.e. a normalized drag of 0.8 with the default 300-unit swipe.
    fn origin() -> Rect {
        Rect::new(50.0, 480.0, 150.0, 520.0)
    }

    fn zone() -> DropZone {
        DropZone::from_rect(Rect::new(0.0, 200.0, 200.0, 320.0))
    }

    fn armed() -> GestureSendController<u32> {
        let mut c = GestureSendController::default();
        c.arm(&NOTE, origin()).unwrap();
        c
    }

    fn at_drag(normalized: f64) -> Point {
        Point::new(100.0, 500.0 - normalized * 300.0)
    }

    fn zone_edges(events: &[GestureEvent]) -> Vec<GestureEvent> {
        events
            .iter()
            .copied()
            .filter(|e| matches!(e, GestureEvent::ZoneEntered | GestureEvent::ZoneExited))
            .collect()
    }

    #[test]
    fn unsendable_draft_is_ignored() {
        let mut c = GestureSendController::<u32>::default();
        let draft = Note {
            id: 1,
            sendable: false,
        };
        assert_eq!(c.arm(&draft, origin()), Err(ArmRejected::NotSendable));
        assert_eq!(c.phase(), GesturePhase::Idle);

        let mut events = Vec::new();
        assert!(!c.update(at_drag(0.8), &zone(), &mut events));
        assert!(events.is_empty());
    }

    #[test]
    fn first_update_begins_tracking() {
        let mut c = armed();
        assert_eq!(c.phase(), GesturePhase::Armed);
        let mut events = Vec::new();
        assert!(c.update(at_drag(0.0), &zone(), &mut events));

        assert_eq!(c.phase(), GesturePhase::Tracking);
        assert_eq!(events[0], GestureEvent::Began { origin: origin() });
        assert_eq!(
            events[1],
            GestureEvent::PreviewRepositioned(Vec2::new(0.0, 0.0))
        );
        let s = c.session().unwrap();
        assert_eq!(s.start_point(), at_drag(0.0));
        assert_eq!(s.key(), &7);
        assert!(!s.in_zone());
    }

    #[test]
    fn tier_is_respectful_outside_the_zone() {
        let mut c = armed();
        let far_zone = DropZone::from_rect(Rect::new(1000.0, 0.0, 1100.0, 100.0));
        let mut events = Vec::new();
        c.update(at_drag(0.0), &far_zone, &mut events);
        c.update(at_drag(0.9), &far_zone, &mut events);
        assert_eq!(c.session().unwrap().tier(), PriorityTier::Respectful);
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, GestureEvent::TierChanged(_)))
        );
    }

    #[test]
    fn zone_edges_fire_once_per_crossing() {
        let mut c = armed();
        let mut events = Vec::new();
        c.update(at_drag(0.0), &zone(), &mut events);
        c.update(at_drag(0.8), &zone(), &mut events);
        for _ in 0..5 {
            c.update(at_drag(0.79), &zone(), &mut events);
        }
        c.update(at_drag(0.0), &zone(), &mut events);

        assert_eq!(
            zone_edges(&events),
            vec![GestureEvent::ZoneEntered, GestureEvent::ZoneExited]
        );
    }

    #[test]
    fn tier_change_fires_only_on_change() {
        let mut c = armed();
        let mut events = Vec::new();
        c.update(at_drag(0.0), &zone(), &mut events);
        c.update(at_drag(0.8), &zone(), &mut events);
        c.update(at_drag(0.85), &zone(), &mut events);
        c.update(at_drag(0.9), &zone(), &mut events);

        let tiers: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                GestureEvent::TierChanged(t) => Some(*t),
                _ => None,
            })
            .collect();
        assert_eq!(tiers, vec![PriorityTier::TimeSensitive]);
    }

    #[test]
    fn leaving_the_zone_drops_back_to_respectful() {
        let mut c = armed();
        let mut events = Vec::new();
        c.update(at_drag(0.0), &zone(), &mut events);
        c.update(at_drag(0.8), &zone(), &mut events);
        events.clear();
        c.update(at_drag(0.1), &zone(), &mut events);
        assert_eq!(events[0], GestureEvent::ZoneExited);
        assert_eq!(events[1], GestureEvent::TierChanged(PriorityTier::Respectful));
    }

    #[test]
    fn horizontal_offset_is_clamped() {
        let mut c = armed();
        let mut events = Vec::new();
        c.update(Point::new(100.0, 500.0), &zone(), &mut events);
        c.update(Point::new(180.0, 500.0), &zone(), &mut events);
        assert_eq!(c.session().unwrap().preview_offset().x, 20.0);
        c.update(Point::new(-50.0, 500.0), &zone(), &mut events);
        assert_eq!(c.session().unwrap().preview_offset().x, -20.0);
        c.update(Point::new(105.0, 500.0), &zone(), &mut events);
        assert_eq!(c.session().unwrap().preview_offset().x, 5.0);
    }

    #[test]
    fn preview_settles_on_zone_landmarks() {
        let mut c = armed();
        let mut events = Vec::new();
        c.update(at_drag(0.0), &zone(), &mut events);

        // Plateau at gravitated 0.56: preview center on the zone's bottom edge.
        c.update(at_drag(0.45), &zone(), &mut events);
        assert_eq!(c.session().unwrap().preview_offset().y, 320.0 - 500.0);

        // Saturated: preview center on the zone's top edge.
        c.update(at_drag(0.95), &zone(), &mut events);
        assert_eq!(c.session().unwrap().preview_offset().y, 200.0 - 500.0);
    }

    #[test]
    fn zone_is_queried_once_per_gesture() {
        use core::cell::Cell;

        let calls = Cell::new(0);
        let source = || {
            calls.set(calls.get() + 1);
            zone()
        };
        let mut c = armed();
        let mut events = Vec::new();
        for step in 0..10 {
            c.update(at_drag(f64::from(step) / 10.0), &source, &mut events);
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn release_outside_zone_cancels() {
        let mut c = armed();
        let mut events = Vec::new();
        c.update(at_drag(0.0), &zone(), &mut events);
        c.update(at_drag(0.2), &zone(), &mut events);
        events.clear();

        assert_eq!(c.release(&mut events), Release::Cancelled);
        assert_eq!(
            events,
            vec![
                GestureEvent::PreviewReturned,
                GestureEvent::Resolved { sent: false }
            ]
        );
        assert_eq!(c.phase(), GesturePhase::Idle);
    }

    #[test]
    fn release_without_movement_cancels_silently() {
        let mut c = armed();
        let mut events = Vec::new();
        assert_eq!(c.release(&mut events), Release::Cancelled);
        assert!(events.is_empty());
        assert_eq!(c.phase(), GesturePhase::Idle);
        assert_eq!(c.release(&mut events), Release::Ignored);
    }

    #[test]
    fn resolving_rejects_new_gestures() {
        let mut c = armed();
        let mut events = Vec::new();
        c.update(at_drag(0.0), &zone(), &mut events);
        c.update(at_drag(0.8), &zone(), &mut events);
        let Release::Commit(req) = c.release(&mut events) else {
            panic!("expected a commit request");
        };
        assert_eq!(req.key, 7);
        assert!(c.is_busy());
        assert_eq!(c.arm(&NOTE, origin()), Err(ArmRejected::Busy));
        assert!(!c.update(at_drag(0.5), &zone(), &mut events));
        assert_eq!(c.release(&mut events), Release::Ignored);
        assert!(!c.interrupt(&mut events));
    }

    #[test]
    fn failed_commit_restores_and_passes_error_through() {
        let mut c = armed();
        let mut events = Vec::new();
        c.update(at_drag(0.0), &zone(), &mut events);
        c.update(at_drag(0.8), &zone(), &mut events);
        let _ = c.release(&mut events);
        events.clear();

        let err = c.complete_commit(Err("offline"), &mut events);
        assert_eq!(err, Err(SendError::CommitFailed("offline")));
        assert_eq!(events, vec![GestureEvent::Resolved { sent: false }]);
        assert_eq!(c.phase(), GesturePhase::Idle);
        assert_eq!(c.arm(&NOTE, origin()), Ok(()));
    }

    #[test]
    fn complete_without_pending_commit_is_an_error() {
        let mut c = GestureSendController::<u32>::default();
        assert_eq!(
            c.complete_commit::<()>(Ok(()), &mut ()),
            Err(SendError::NoCommitPending)
        );
    }

    #[test]
    fn interrupt_cancels_tracking() {
        let mut c = armed();
        let mut events = Vec::new();
        c.update(at_drag(0.0), &zone(), &mut events);
        c.update(at_drag(0.8), &zone(), &mut events);
        events.clear();

        assert!(c.interrupt(&mut events));
        assert_eq!(
            events,
            vec![
                GestureEvent::PreviewReturned,
                GestureEvent::Resolved { sent: false }
            ]
        );
        assert_eq!(c.release(&mut events), Release::Ignored);
    }

    #[test]
    fn teardown_while_tracking_returns_preview_and_cancels() {
        let mut c = armed();
        let mut events = Vec::new();
        c.update(at_drag(0.0), &zone(), &mut events);
        c.update(at_drag(0.8), &zone(), &mut events);
        events.clear();

        c.teardown(&mut events);
        assert_eq!(
            events,
            vec![
                GestureEvent::PreviewReturned,
                GestureEvent::Resolved { sent: false }
            ]
        );
        assert_eq!(c.phase(), GesturePhase::Idle);
        assert!(c.session().is_none());
        assert_eq!(c.arm(&NOTE, origin()), Ok(()));
    }

    #[test]
    fn teardown_while_armed_is_silent() {
        let mut c = armed();
        let mut events = Vec::new();
        c.teardown(&mut events);
        assert!(events.is_empty());
        assert_eq!(c.phase(), GesturePhase::Idle);
        assert_eq!(c.arm(&NOTE, origin()), Ok(()));
    }

    #[test]
    fn teardown_forgets_pending_commit() {
        let mut c = armed();
        let mut events = Vec::new();
        c.update(at_drag(0.0), &zone(), &mut events);
        c.update(at_drag(0.8), &zone(), &mut events);
        let _ = c.release(&mut events);
        events.clear();

        c.teardown(&mut events);
        assert!(events.is_empty());
        assert_eq!(c.phase(), GesturePhase::Idle);
        assert_eq!(
            c.complete_commit::<()>(Ok(()), &mut events),
            Err(SendError::NoCommitPending)
        );
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GestureConfig {
            total_drag_distance: -5.0,
            ..GestureConfig::default()
        };
        assert!(matches!(
            GestureSendController::<u32>::new(config),
            Err(ConfigError::DragDistance(_))
        ));
    }
}
