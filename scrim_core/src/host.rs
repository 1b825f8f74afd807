// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contract for platform integrations.
//!
//! The [`Overlay`](crate::overlay::Overlay) controller decides *when* things
//! happen; a host decides *how*. Each host provides the following pieces:
//!
//! - **Surface lookup** — [`surface`](OverlayHost::surface) resolves the
//!   overlay root every time it is called. The controller never holds a
//!   surface across calls, so a surface that disappears between an open and
//!   a close simply turns the close into a partial no-op.
//!
//! - **Surface mutation** — the open marker, the correlation attribute, and
//!   the surface's children.
//!
//! - **Listeners** — one document-level key listener (capture phase) and one
//!   click listener on the surface. Hosts own the underlying callbacks; the
//!   controller only asks for registration and removal, and guarantees the
//!   two are paired.
//!
//! - **Size observation** — structural lookup of the content sizer and of
//!   the media element inside it, an observer that can watch one sizer, and
//!   a way to push maximum bounds onto the media element.
//!
//! # Crate boundaries
//!
//! `scrim_core` owns the state machine and this contract module. Backend
//! crates depend on `scrim_core` and provide platform glue (`scrim_web` for
//! the browser DOM). Application code depends on both.

use alloc::string::String;

use kurbo::Size;

/// The two listeners an open overlay installs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Listener {
    /// Document-level `keydown`, registered in the capture phase.
    KeyDown,
    /// `click` on the overlay surface.
    Click,
}

impl Listener {
    /// Both listeners, in the order an open installs them.
    pub const ALL: [Self; 2] = [Self::Click, Self::KeyDown];

    /// Returns the DOM event type name.
    #[must_use]
    pub const fn event_type(self) -> &'static str {
        match self {
            Self::KeyDown => "keydown",
            Self::Click => "click",
        }
    }
}

/// Applies overlay lifecycle effects to a platform-native tree.
///
/// DOM-based hosts and test doubles implement this trait. All methods are
/// infallible: a host that cannot perform an effect ignores it, matching the
/// controller's "absence is a no-op" model.
///
/// # Open/close pseudocode
///
/// ```rust,ignore
/// fn open(host, content) {
///     let surface = host.surface()?;           // missing → no-op
///     host.set_open_marker(&surface, true);
///     host.attach_listener(&surface, Listener::Click);
///     host.attach_listener(&surface, Listener::KeyDown);
///     host.append_content(&surface, content);
///     if let Some(sizer) = host.find_sizer() {
///         host.disconnect();
///         host.observe(&sizer);
///     }
/// }
///
/// fn close(host) {
///     host.detach_listener(Listener::KeyDown);
///     host.detach_listener(Listener::Click);
///     host.disconnect();
///     if let Some(surface) = host.surface() {
///         host.clear_content(&surface);
///         host.set_open_marker(&surface, false);
///     }
/// }
/// ```
pub trait OverlayHost {
    /// Handle to the overlay root.
    type Surface;
    /// Content that can be inserted directly as a child of the surface.
    type Node;
    /// Handle to the content-sizer region.
    type Sizer;
    /// Handle to the displayed media element.
    type Media;

    /// Resolves the overlay surface, or `None` if it is not present.
    fn surface(&self) -> Option<Self::Surface>;

    /// Adds (`true`) or removes (`false`) the open marker.
    fn set_open_marker(&mut self, surface: &Self::Surface, open: bool);

    /// Writes the correlation attribute.
    fn set_correlation_id(&mut self, surface: &Self::Surface, id: &str);

    /// Reads the correlation attribute.
    fn correlation_id(&self, surface: &Self::Surface) -> Option<String>;

    /// Appends `node` as the last child of the surface.
    fn append_content(&mut self, surface: &Self::Surface, node: Self::Node);

    /// Removes every child of the surface.
    fn clear_content(&mut self, surface: &Self::Surface);

    /// Registers `listener`. [`Listener::Click`] targets `surface`;
    /// [`Listener::KeyDown`] targets the document.
    fn attach_listener(&mut self, surface: &Self::Surface, listener: Listener);

    /// Removes a listener previously registered with
    /// [`attach_listener`](Self::attach_listener), from whatever target it
    /// was registered on.
    fn detach_listener(&mut self, listener: Listener);

    /// Looks up the currently mounted content sizer.
    fn find_sizer(&self) -> Option<Self::Sizer>;

    /// Starts watching `sizer`'s content box.
    fn observe(&mut self, sizer: &Self::Sizer);

    /// Stops all size observation.
    fn disconnect(&mut self);

    /// Looks up the media element inside the currently mounted sizer.
    fn find_media(&self) -> Option<Self::Media>;

    /// Applies `bounds` as maximum width/height on `media`.
    fn constrain_media(&mut self, media: &Self::Media, bounds: Size);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_types_match_dom_names() {
        assert_eq!(Listener::KeyDown.event_type(), "keydown");
        assert_eq!(Listener::Click.event_type(), "click");
    }

    #[test]
    fn click_installs_before_keydown() {
        assert_eq!(Listener::ALL, [Listener::Click, Listener::KeyDown]);
    }
}
