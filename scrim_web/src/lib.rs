// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser DOM backend for scrim.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`WebOverlay`]: owns the JS closures for `keydown`, `click` and the
//!   `ResizeObserver`, and routes their events into the controller
//! - [`DomHost`]: the [`OverlayHost`] implementation over a [`Document`]
//! - [`DomConfig`]: selectors, class and attribute names
//! - [`ConsoleSink`]: a [`TraceSink`] writing to the browser console
//!
//! [`Document`]: web_sys::Document
//! [`TraceSink`]: scrim_core::trace::TraceSink

#![no_std]

extern crate alloc;

mod config;
mod console;
mod host;
mod overlay;

pub use config::DomConfig;
pub use console::ConsoleSink;
pub use host::{DomHost, DomTarget};
pub use overlay::WebOverlay;
pub use scrim_core::host::OverlayHost;
