// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_send_gesture --heading-base-level=0

//! Understory Send Gesture: swipe-to-send as a headless state machine.
//!
//! A user drags a message preview upward toward a drop zone. How far they drag
//! picks a priority tier; releasing inside the zone sends. This crate turns the
//! raw pointer stream into those discrete decisions, with the stability a
//! trembling finger needs:
//!
//! - [`PriorityClassifier`]: normalized drag to [`PriorityTier`] through a
//!   plateaued gravitation curve, so tiers snap instead of flicker.
//! - [`DropZoneDetector`]: zone membership reported as edges
//!   ([`ZoneTransition`]), so side effects fire once per crossing.
//! - [`GestureSendController`]: the `Idle → Armed → Tracking → Resolving`
//!   machine that combines both, positions the preview on zone landmarks, and
//!   hands a [`CommitRequest`] to the host on release.
//!
//! The crate does not render, animate, vibrate, or send anything. Side effects
//! are reported through a [`SendFeedback`] sink and the send itself is the
//! host's job (directly, or through a [`Committer`]).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_send_gesture::{
//!     Draft, DropZone, GestureEvent, GestureSendController, PriorityTier, Release,
//! };
//!
//! struct Message {
//!     id: u64,
//!     text: String,
//! }
//!
//! impl Draft for Message {
//!     type Key = u64;
//!     fn is_sendable(&self) -> bool {
//!         !self.text.trim().is_empty()
//!     }
//!     fn key(&self) -> u64 {
//!         self.id
//!     }
//! }
//!
//! let draft = Message { id: 1, text: "see you at 6".into() };
//! let compose = Rect::new(0.0, 600.0, 320.0, 640.0);
//! let zone = DropZone::from_rect(Rect::new(0.0, 410.0, 320.0, 530.0));
//!
//! let mut send = GestureSendController::default();
//! let mut events: Vec<GestureEvent> = Vec::new();
//!
//! send.arm(&draft, compose).unwrap();
//! send.update(Point::new(160.0, 620.0), &zone, &mut events);
//! // Drag up 0.5 of a full swipe: onto the conversational plateau, inside the zone.
//! send.update(Point::new(160.0, 470.0), &zone, &mut events);
//! assert!(events.contains(&GestureEvent::TierChanged(PriorityTier::Conversational)));
//!
//! match send.release(&mut events) {
//!     Release::Commit(request) => {
//!         // ... hand `request` to the network layer, then:
//!         send.complete_commit::<()>(Ok(()), &mut events).unwrap();
//!     }
//!     Release::Cancelled | Release::Ignored => unreachable!(),
//! }
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: select Kurbo's float backend.
//! - `serde`: (de)serialize [`GestureConfig`] and its parts.
//! - `tracing`: emit `debug` events at every transition and `trace` events
//!   for preview offsets.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod classifier;
mod config;
pub mod controller;
pub mod feedback;
mod tier;
pub mod zone;

pub use classifier::{PriorityClassifier, TierBands};
pub use config::{CheckpointInputs, ConfigError, GestureConfig};
pub use controller::{
    ArmRejected, CommitRequest, Committer, Draft, DropZoneSource, GesturePhase, GestureSendController,
    GestureSession, Release, Resolution, SendError,
};
pub use feedback::{GestureEvent, SendFeedback};
pub use tier::{HapticIntensity, PriorityTier};
pub use zone::{DropZone, DropZoneDetector, ZoneTransition, ZoneUpdate};
