// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording [`OverlayHost`] used by the unit tests.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::Size;

use crate::host::{Listener, OverlayHost};

/// One host call, in the order the controller made it.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Op {
    Marker(bool),
    Correlate(String),
    Append(&'static str),
    Clear,
    Attach(Listener),
    Detach(Listener),
    Observe,
    Disconnect,
}

/// Test double with a single in-memory surface.
#[derive(Debug)]
pub(crate) struct TestHost {
    pub(crate) surface: bool,
    pub(crate) open_marker: bool,
    pub(crate) correlation: Option<String>,
    pub(crate) children: Vec<&'static str>,
    pub(crate) listeners: Vec<Listener>,
    pub(crate) sizer: bool,
    pub(crate) observing: u32,
    pub(crate) disconnects: u32,
    pub(crate) media: Option<u32>,
    pub(crate) constrained: Vec<(u32, Size)>,
    pub(crate) log: Vec<Op>,
}

impl TestHost {
    pub(crate) fn new() -> Self {
        Self {
            surface: true,
            open_marker: false,
            correlation: None,
            children: Vec::new(),
            listeners: Vec::new(),
            sizer: false,
            observing: 0,
            disconnects: 0,
            media: None,
            constrained: Vec::new(),
            log: Vec::new(),
        }
    }

    pub(crate) fn without_surface() -> Self {
        Self {
            surface: false,
            ..Self::new()
        }
    }

    pub(crate) fn count(&self, listener: Listener) -> usize {
        self.listeners.iter().filter(|l| **l == listener).count()
    }
}

impl OverlayHost for TestHost {
    type Surface = ();
    type Node = &'static str;
    type Sizer = ();
    type Media = u32;

    fn surface(&self) -> Option<()> {
        self.surface.then_some(())
    }

    fn set_open_marker(&mut self, _surface: &(), open: bool) {
        self.open_marker = open;
        self.log.push(Op::Marker(open));
    }

    fn set_correlation_id(&mut self, _surface: &(), id: &str) {
        self.correlation = Some(id.to_string());
        self.log.push(Op::Correlate(id.to_string()));
    }

    fn correlation_id(&self, _surface: &()) -> Option<String> {
        self.correlation.clone()
    }

    fn append_content(&mut self, _surface: &(), node: &'static str) {
        self.children.push(node);
        self.log.push(Op::Append(node));
    }

    fn clear_content(&mut self, _surface: &()) {
        self.children.clear();
        self.log.push(Op::Clear);
    }

    fn attach_listener(&mut self, _surface: &(), listener: Listener) {
        self.listeners.push(listener);
        self.log.push(Op::Attach(listener));
    }

    fn detach_listener(&mut self, listener: Listener) {
        if let Some(pos) = self.listeners.iter().position(|l| *l == listener) {
            self.listeners.remove(pos);
        }
        self.log.push(Op::Detach(listener));
    }

    fn find_sizer(&self) -> Option<()> {
        self.sizer.then_some(())
    }

    fn observe(&mut self, _sizer: &()) {
        self.observing += 1;
        self.log.push(Op::Observe);
    }

    fn disconnect(&mut self) {
        self.observing = 0;
        self.disconnects += 1;
        self.log.push(Op::Disconnect);
    }

    fn find_media(&self) -> Option<u32> {
        self.media
    }

    fn constrain_media(&mut self, media: &u32, bounds: Size) {
        self.constrained.push((*media, bounds));
    }
}
