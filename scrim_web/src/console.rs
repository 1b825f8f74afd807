// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console trace output.

use alloc::format;
use alloc::string::String;

use scrim_core::trace::{
    BindingEvent, CloseEvent, ListenerEvent, OpenEvent, ResizeEvent, SurfaceMissingEvent, TraceSink,
};
use wasm_bindgen::JsValue;

/// Writes one `console.debug` line per lifecycle event.
#[derive(Clone, Debug)]
pub struct ConsoleSink {
    prefix: String,
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new("[scrim]")
    }
}

impl ConsoleSink {
    /// Creates a sink that starts every line with `prefix`.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn emit(&self, line: &str) {
        web_sys::console::debug_1(&JsValue::from_str(&format!("{} {line}", self.prefix)));
    }
}

impl TraceSink for ConsoleSink {
    fn on_open(&mut self, e: &OpenEvent) {
        self.emit(&format!(
            "open content={:?} exclusive={} correlated={} reopened={}",
            e.content, e.exclusive, e.correlated, e.reopened
        ));
    }

    fn on_close(&mut self, e: &CloseEvent) {
        self.emit(&format!(
            "close reason={:?} was_open={} hooks={}",
            e.reason, e.was_open, e.hooks_run
        ));
    }

    fn on_listener(&mut self, e: &ListenerEvent) {
        let verb = if e.attached { "attach" } else { "detach" };
        self.emit(&format!("{verb} {}", e.listener.event_type()));
    }

    fn on_binding(&mut self, e: &BindingEvent) {
        let verb = if e.bound { "observe" } else { "disconnect" };
        self.emit(&format!("{verb} binding={}", e.binding.0));
    }

    fn on_resize(&mut self, e: &ResizeEvent) {
        self.emit(&format!(
            "resize {}x{} outcome={:?}",
            e.size.width, e.size.height, e.outcome
        ));
    }

    fn on_surface_missing(&mut self, e: &SurfaceMissingEvent) {
        self.emit(&format!("surface missing during={:?}", e.during));
    }
}
