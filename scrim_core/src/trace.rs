// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the overlay lifecycle.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! [`Overlay`](crate::overlay::Overlay) controller calls at each lifecycle
//! step. All method bodies default to no-ops, so implementing only the events
//! you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).

use kurbo::Size;

use crate::host::Listener;
use crate::overlay::CloseReason;
use crate::sizing::{BindingId, ResizeOutcome};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which controller operation observed a missing overlay surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// An open request.
    Open,
    /// A teardown (any close path).
    Close,
}

/// How the opened content reaches the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// A constructed node appended directly.
    Node,
    /// Content mounted by an external renderer.
    Rendered,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted after the overlay transitions to (or stays in) the open state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpenEvent {
    /// How the content was inserted.
    pub content: ContentKind,
    /// Whether the open began by tearing down prior state.
    pub exclusive: bool,
    /// Whether a correlation id was written onto the surface.
    pub correlated: bool,
    /// Whether the overlay was already open before this request.
    pub reopened: bool,
}

/// Emitted after a teardown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CloseEvent {
    /// What triggered the teardown.
    pub reason: CloseReason,
    /// Whether the overlay was open when the teardown started.
    pub was_open: bool,
    /// Number of on-close hooks that ran.
    pub hooks_run: usize,
}

/// Emitted when a listener is attached or detached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerEvent {
    /// Which listener.
    pub listener: Listener,
    /// `true` on attach, `false` on detach.
    pub attached: bool,
}

/// Emitted when a size-observer binding starts or ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BindingEvent {
    /// Which binding.
    pub binding: BindingId,
    /// `true` when observation started, `false` on disconnect.
    pub bound: bool,
}

/// Emitted for every size-change notification delivered to the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeEvent {
    /// The binding active at notification time, if any.
    pub binding: Option<BindingId>,
    /// Measured content box of the sizer.
    pub size: Size,
    /// What happened to the notification.
    pub outcome: ResizeOutcome,
}

/// Emitted when the overlay surface could not be resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceMissingEvent {
    /// The operation that tried to resolve the surface.
    pub during: Operation,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives overlay lifecycle events.
///
/// Every method has a default no-op body.
pub trait TraceSink {
    /// Called after an open request took effect.
    fn on_open(&mut self, e: &OpenEvent) {
        _ = e;
    }

    /// Called after a teardown.
    fn on_close(&mut self, e: &CloseEvent) {
        _ = e;
    }

    /// Called when a listener is attached or detached.
    fn on_listener(&mut self, e: &ListenerEvent) {
        _ = e;
    }

    /// Called when a size-observer binding starts or ends.
    fn on_binding(&mut self, e: &BindingEvent) {
        _ = e;
    }

    /// Called for each size-change notification.
    fn on_resize(&mut self, e: &ResizeEvent) {
        _ = e;
    }

    /// Called when the surface lookup came back empty.
    fn on_surface_missing(&mut self, e: &SurfaceMissingEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        Self::from_option(Some(sink))
    }

    /// Creates a tracer that dispatches to `sink` when present.
    #[inline]
    #[must_use]
    pub fn from_option(sink: Option<&'a mut dyn TraceSink>) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self::from_option(None)
    }

    /// Emits an [`OpenEvent`].
    #[inline]
    pub fn open(&mut self, e: &OpenEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_open(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`CloseEvent`].
    #[inline]
    pub fn close(&mut self, e: &CloseEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_close(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ListenerEvent`].
    #[inline]
    pub fn listener(&mut self, e: &ListenerEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_listener(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`BindingEvent`].
    #[inline]
    pub fn binding(&mut self, e: &BindingEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_binding(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ResizeEvent`].
    #[inline]
    pub fn resize(&mut self, e: &ResizeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_resize(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SurfaceMissingEvent`].
    #[inline]
    pub fn surface_missing(&mut self, e: &SurfaceMissingEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_surface_missing(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}
