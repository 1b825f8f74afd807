// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform-neutral controller for a single exclusive full-screen overlay.
//!
//! `scrim_core` owns the open/close lifecycle of one overlay surface (a
//! "modal" or lightbox) and every resource attached around it: the global
//! key listener, the surface click listener, and the size-observer binding
//! that keeps a displayed media element inside the overlay's content box. It
//! is `no_std` compatible (with `alloc`) and never touches a DOM directly;
//! platform crates implement [`OverlayHost`](host::OverlayHost) instead.
//!
//! # Architecture
//!
//! ```text
//!   caller ──► Overlay::open_with(OpenRequest) ──► OverlayHost
//!                  ▲            │                    (marker, listeners,
//!                  │            ▼                     content, observer)
//!   key / click / resize ──► Overlay::handle_* ──► teardown ──► on-close hooks
//! ```
//!
//! **[`overlay`]** — The [`Overlay`](overlay::Overlay) state machine. Every
//! close path (programmatic, Escape, outside click, replacement, drop) runs
//! through one teardown routine.
//!
//! **[`host`]** — The [`OverlayHost`](host::OverlayHost) trait that platform
//! backends implement, and the [`Listener`](host::Listener) kinds.
//!
//! **[`content`]** — Content providers: a directly inserted node or a
//! mount/unmount pair driven by an external renderer.
//!
//! **[`sizing`]** — The content size observer binding and the resize
//! notification path.
//!
//! **[`predicate`]** — Escape-key and click-outside predicates.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and lifecycle events,
//! with a zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod content;
pub mod host;
pub mod overlay;
pub mod predicate;
pub mod sizing;
pub mod trace;

#[cfg(test)]
mod test_host;

pub use kurbo::Size;
