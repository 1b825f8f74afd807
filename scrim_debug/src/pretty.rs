// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use scrim_core::host::Listener;
use scrim_core::overlay::CloseReason;
use scrim_core::sizing::ResizeOutcome;
use scrim_core::trace::{
    BindingEvent, CloseEvent, ContentKind, ListenerEvent, OpenEvent, Operation, ResizeEvent,
    SurfaceMissingEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

pub(crate) fn content_name(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Node => "node",
        ContentKind::Rendered => "rendered",
    }
}

pub(crate) fn reason_name(reason: CloseReason) -> &'static str {
    match reason {
        CloseReason::Requested => "requested",
        CloseReason::Escape => "escape",
        CloseReason::OutsideClick => "outside-click",
        CloseReason::Replaced => "replaced",
        CloseReason::Dropped => "dropped",
    }
}

pub(crate) fn outcome_name(outcome: ResizeOutcome) -> &'static str {
    match outcome {
        ResizeOutcome::Applied => "applied",
        ResizeOutcome::NoMedia => "no-media",
        ResizeOutcome::Unbound => "unbound",
    }
}

pub(crate) fn operation_name(op: Operation) -> &'static str {
    match op {
        Operation::Open => "open",
        Operation::Close => "close",
    }
}

fn listener_name(listener: Listener) -> &'static str {
    listener.event_type()
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_open(&mut self, e: &OpenEvent) {
        let _ = writeln!(
            self.writer,
            "[open] content={} exclusive={} correlated={} reopened={}",
            content_name(e.content),
            e.exclusive,
            e.correlated,
            e.reopened,
        );
    }

    fn on_close(&mut self, e: &CloseEvent) {
        let _ = writeln!(
            self.writer,
            "[close] reason={} was_open={} hooks={}",
            reason_name(e.reason),
            e.was_open,
            e.hooks_run,
        );
    }

    fn on_listener(&mut self, e: &ListenerEvent) {
        let verb = if e.attached { "attach" } else { "detach" };
        let _ = writeln!(self.writer, "[listener] {verb} {}", listener_name(e.listener));
    }

    fn on_binding(&mut self, e: &BindingEvent) {
        let verb = if e.bound { "observe" } else { "disconnect" };
        let _ = writeln!(self.writer, "[binding] {verb} id={}", e.binding.0);
    }

    fn on_resize(&mut self, e: &ResizeEvent) {
        let binding = e
            .binding
            .map_or_else(|| "-".to_owned(), |b| b.0.to_string());
        let _ = writeln!(
            self.writer,
            "[resize] binding={binding} size={:.1}x{:.1} outcome={}",
            e.size.width,
            e.size.height,
            outcome_name(e.outcome),
        );
    }

    fn on_surface_missing(&mut self, e: &SurfaceMissingEvent) {
        let _ = writeln!(
            self.writer,
            "[surface] missing during={}",
            operation_name(e.during)
        );
    }
}
