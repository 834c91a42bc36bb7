// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `tracing` events emitted by `GestureSendController`.

#![cfg(feature = "tracing")]

use std::sync::{Arc, Mutex};

use kurbo::{Point, Rect};
use tracing::Subscriber;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use understory_send_gesture::{Draft, DropZone, GestureSendController, Release};

/// Collects the `message` field of every event.
struct MessageCapture {
    messages: Arc<Mutex<Vec<String>>>,
}

impl<S: Subscriber> Layer<S> for MessageCapture {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        struct Msg {
            message: Option<String>,
        }
        impl tracing::field::Visit for Msg {
            fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
                if field.name() == "message" {
                    self.message = Some(value.to_string());
                }
            }

            fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
                if field.name() == "message" {
                    self.message = Some(format!("{value:?}").trim_matches('"').to_string());
                }
            }
        }
        let mut msg = Msg { message: None };
        event.record(&mut msg);
        if let Some(message) = msg.message {
            self.messages.lock().expect("capture lock").push(message);
        }
    }
}

struct Note;

impl Draft for Note {
    type Key = u8;

    fn is_sendable(&self) -> bool {
        true
    }

    fn key(&self) -> u8 {
        1
    }
}

fn at_drag(normalized: f64) -> Point {
    Point::new(160.0, 620.0 - normalized * 300.0)
}

#[test]
fn gesture_transitions_are_traced() {
    let messages = Arc::new(Mutex::new(Vec::new()));
    let _guard = tracing_subscriber::registry()
        .with(MessageCapture {
            messages: Arc::clone(&messages),
        })
        .set_default();

    let compose = Rect::new(0.0, 600.0, 320.0, 640.0);
    let zone = DropZone::from_rect(Rect::new(0.0, 320.0, 320.0, 440.0));
    let mut send = GestureSendController::default();
    let mut events = Vec::new();

    send.arm(&Note, compose).unwrap();
    send.update(at_drag(0.0), &zone, &mut events);
    send.update(at_drag(0.8), &zone, &mut events);
    let Release::Commit(_) = send.release(&mut events) else {
        panic!("expected commit");
    };
    send.complete_commit::<()>(Ok(()), &mut events).unwrap();

    send.arm(&Note, compose).unwrap();
    send.update(at_drag(0.0), &zone, &mut events);
    assert!(send.interrupt(&mut events));

    let messages = messages.lock().expect("capture lock");
    for expected in [
        "send_gesture.armed",
        "send_gesture.tracking",
        "send_gesture.zone_entered",
        "send_gesture.tier_changed",
        "send_gesture.preview",
        "send_gesture.released",
        "send_gesture.sent",
        "send_gesture.interrupted",
    ] {
        assert!(
            messages.iter().any(|m| m == expected),
            "missing {expected} in {messages:?}"
        );
    }
}
