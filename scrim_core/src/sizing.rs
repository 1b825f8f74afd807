// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Content size observer.
//!
//! The overlay's content region contains a *content sizer*: a container whose
//! measured box bounds the displayed media element. Measuring the sizer
//! rather than the media element avoids a feedback loop where constraining
//! the element changes the very box being measured.
//!
//! [`SizeObserver`] tracks the single binding between the host's observer
//! and a sizer. Each notification re-resolves the media element through the
//! host instead of keeping a reference to it, so content replaced while the
//! binding is alive is picked up on the next notification.

use core::fmt;

use kurbo::Size;

use crate::host::OverlayHost;

/// Identifies one observer binding.
///
/// A new id is issued every time observation (re)starts, so bindings from
/// consecutive opens can be told apart.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BindingId(pub u32);

impl fmt::Debug for BindingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BindingId({})", self.0)
    }
}

/// What a size-change notification did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResizeOutcome {
    /// Bounds were applied to the current media element.
    Applied,
    /// No media element is mounted inside the sizer; nothing was changed.
    NoMedia,
    /// No binding is active; the notification is stale and was dropped.
    Unbound,
}

/// At most one active binding between the host observer and a sizer.
#[derive(Debug, Default)]
pub struct SizeObserver {
    active: Option<BindingId>,
    next: u32,
}

impl SizeObserver {
    /// Creates an observer with no binding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the active binding, if any.
    #[must_use]
    pub fn binding(&self) -> Option<BindingId> {
        self.active
    }

    /// Starts observing `sizer`, disconnecting any previous binding first.
    ///
    /// Returns the replaced binding (if any) and the new one.
    pub fn observe<H: OverlayHost>(
        &mut self,
        host: &mut H,
        sizer: &H::Sizer,
    ) -> (Option<BindingId>, BindingId) {
        let replaced = self.disconnect(host);
        host.observe(sizer);
        let id = BindingId(self.next);
        self.next = self.next.wrapping_add(1);
        self.active = Some(id);
        (replaced, id)
    }

    /// Stops observation. Returns the binding that ended, or `None` if
    /// nothing was being observed (in which case the host is not touched).
    pub fn disconnect<H: OverlayHost>(&mut self, host: &mut H) -> Option<BindingId> {
        let id = self.active.take()?;
        host.disconnect();
        Some(id)
    }

    /// Handles a size-change notification carrying the sizer's new content
    /// box.
    pub fn notify<H: OverlayHost>(&self, host: &mut H, size: Size) -> ResizeOutcome {
        if self.active.is_none() {
            return ResizeOutcome::Unbound;
        }
        let Some(media) = host.find_media() else {
            return ResizeOutcome::NoMedia;
        };
        host.constrain_media(&media, size);
        ResizeOutcome::Applied
    }
}
