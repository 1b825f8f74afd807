// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording with JSON export.
//!
//! [`RecorderSink`] implements [`TraceSink`] and appends every event to a
//! buffer shared between clones, so one clone can be handed to an
//! [`Overlay`](scrim_core::overlay::Overlay) while another is kept for
//! inspection. [`RecorderSink::to_json`] exports the buffer as an array of
//! objects with an `"event"` discriminant.

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::{Value, json};

use scrim_core::trace::{
    BindingEvent, CloseEvent, ListenerEvent, OpenEvent, ResizeEvent, SurfaceMissingEvent, TraceSink,
};

use crate::pretty::{content_name, operation_name, outcome_name, reason_name};

/// One recorded lifecycle event.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    /// See [`TraceSink::on_open`].
    Open(OpenEvent),
    /// See [`TraceSink::on_close`].
    Close(CloseEvent),
    /// See [`TraceSink::on_listener`].
    Listener(ListenerEvent),
    /// See [`TraceSink::on_binding`].
    Binding(BindingEvent),
    /// See [`TraceSink::on_resize`].
    Resize(ResizeEvent),
    /// See [`TraceSink::on_surface_missing`].
    SurfaceMissing(SurfaceMissingEvent),
}

impl RecordedEvent {
    /// Converts the event to a JSON object.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Open(e) => json!({
                "event": "open",
                "content": content_name(e.content),
                "exclusive": e.exclusive,
                "correlated": e.correlated,
                "reopened": e.reopened
            }),
            Self::Close(e) => json!({
                "event": "close",
                "reason": reason_name(e.reason),
                "was_open": e.was_open,
                "hooks_run": e.hooks_run
            }),
            Self::Listener(e) => json!({
                "event": "listener",
                "listener": e.listener.event_type(),
                "attached": e.attached
            }),
            Self::Binding(e) => json!({
                "event": "binding",
                "binding": e.binding.0,
                "bound": e.bound
            }),
            Self::Resize(e) => json!({
                "event": "resize",
                "binding": e.binding.map(|b| b.0),
                "width": e.size.width,
                "height": e.size.height,
                "outcome": outcome_name(e.outcome)
            }),
            Self::SurfaceMissing(e) => json!({
                "event": "surface_missing",
                "during": operation_name(e.during)
            }),
        }
    }
}

/// A [`TraceSink`] that records events into a shared buffer.
#[derive(Clone, Debug, Default)]
pub struct RecorderSink {
    events: Rc<RefCell<Vec<RecordedEvent>>>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.borrow().clone()
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Discards all recorded events.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// Exports the recorded events as a JSON array.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let events = self.events.borrow();
        Value::Array(events.iter().map(RecordedEvent::to_json).collect())
    }

    fn push(&self, event: RecordedEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl TraceSink for RecorderSink {
    fn on_open(&mut self, e: &OpenEvent) {
        self.push(RecordedEvent::Open(*e));
    }

    fn on_close(&mut self, e: &CloseEvent) {
        self.push(RecordedEvent::Close(*e));
    }

    fn on_listener(&mut self, e: &ListenerEvent) {
        self.push(RecordedEvent::Listener(*e));
    }

    fn on_binding(&mut self, e: &BindingEvent) {
        self.push(RecordedEvent::Binding(*e));
    }

    fn on_resize(&mut self, e: &ResizeEvent) {
        self.push(RecordedEvent::Resize(*e));
    }

    fn on_surface_missing(&mut self, e: &SurfaceMissingEvent) {
        self.push(RecordedEvent::SurfaceMissing(*e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrim_core::Size;
    use scrim_core::host::{Listener, OverlayHost};
    use scrim_core::overlay::{CloseReason, Overlay};
    use scrim_core::sizing::{BindingId, ResizeOutcome};
    use scrim_core::trace::{ContentKind, Operation};

    /// Minimal host: a surface that can be toggled, with one sizer and one
    /// media element.
    #[derive(Debug, Default)]
    struct Host {
        gone: bool,
    }

    impl OverlayHost for Host {
        type Surface = ();
        type Node = ();
        type Sizer = ();
        type Media = ();

        fn surface(&self) -> Option<()> {
            (!self.gone).then_some(())
        }
        fn set_open_marker(&mut self, _: &(), _: bool) {}
        fn set_correlation_id(&mut self, _: &(), _: &str) {}
        fn correlation_id(&self, _: &()) -> Option<String> {
            None
        }
        fn append_content(&mut self, _: &(), _: ()) {}
        fn clear_content(&mut self, _: &()) {}
        fn attach_listener(&mut self, _: &(), _: Listener) {}
        fn detach_listener(&mut self, _: Listener) {}
        fn find_sizer(&self) -> Option<()> {
            Some(())
        }
        fn observe(&mut self, _: &()) {}
        fn disconnect(&mut self) {}
        fn find_media(&self) -> Option<()> {
            Some(())
        }
        fn constrain_media(&mut self, _: &(), _: Size) {}
    }

    #[test]
    fn records_full_lifecycle() {
        let recorder = RecorderSink::new();
        let mut overlay = Overlay::new(Host::default());
        overlay.set_trace_sink(Box::new(recorder.clone()));

        overlay.open((), Some("item".into()));
        overlay.handle_resize(Size::new(100.0, 50.0));
        overlay.handle_key("Escape");

        assert_eq!(
            recorder.events(),
            vec![
                RecordedEvent::Listener(ListenerEvent {
                    listener: Listener::Click,
                    attached: true,
                }),
                RecordedEvent::Listener(ListenerEvent {
                    listener: Listener::KeyDown,
                    attached: true,
                }),
                RecordedEvent::Binding(BindingEvent {
                    binding: BindingId(0),
                    bound: true,
                }),
                RecordedEvent::Open(OpenEvent {
                    content: ContentKind::Node,
                    exclusive: false,
                    correlated: true,
                    reopened: false,
                }),
                RecordedEvent::Resize(ResizeEvent {
                    binding: Some(BindingId(0)),
                    size: Size::new(100.0, 50.0),
                    outcome: ResizeOutcome::Applied,
                }),
                RecordedEvent::Listener(ListenerEvent {
                    listener: Listener::KeyDown,
                    attached: false,
                }),
                RecordedEvent::Listener(ListenerEvent {
                    listener: Listener::Click,
                    attached: false,
                }),
                RecordedEvent::Binding(BindingEvent {
                    binding: BindingId(0),
                    bound: false,
                }),
                RecordedEvent::Close(CloseEvent {
                    reason: CloseReason::Escape,
                    was_open: true,
                    hooks_run: 0,
                }),
            ]
        );
    }

    #[test]
    fn records_missing_surface() {
        let recorder = RecorderSink::new();
        let mut overlay = Overlay::new(Host { gone: true });
        overlay.set_trace_sink(Box::new(recorder.clone()));

        overlay.open((), None);
        assert_eq!(
            recorder.events(),
            vec![RecordedEvent::SurfaceMissing(SurfaceMissingEvent {
                during: Operation::Open,
            })]
        );
    }

    #[test]
    fn exports_json() {
        let mut recorder = RecorderSink::new();
        recorder.on_close(&CloseEvent {
            reason: CloseReason::OutsideClick,
            was_open: true,
            hooks_run: 2,
        });
        recorder.on_resize(&ResizeEvent {
            binding: None,
            size: Size::new(1.0, 2.0),
            outcome: ResizeOutcome::Unbound,
        });

        assert_eq!(
            recorder.to_json(),
            json!([
                {"event": "close", "reason": "outside-click", "was_open": true, "hooks_run": 2},
                {"event": "resize", "binding": null, "width": 1.0, "height": 2.0, "outcome": "unbound"}
            ])
        );
    }

    #[test]
    fn clones_share_the_buffer() {
        let recorder = RecorderSink::new();
        let mut handle = recorder.clone();
        handle.on_surface_missing(&SurfaceMissingEvent {
            during: Operation::Close,
        });
        assert_eq!(recorder.len(), 1);
        recorder.clear();
        assert!(handle.is_empty());
    }
}
