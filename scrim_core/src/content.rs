// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Content providers and open requests.
//!
//! An overlay can display two kinds of content:
//!
//! - [`OverlayContent::Node`] — a node the caller already built. The host
//!   appends it to the surface as-is.
//! - [`OverlayContent::Rendered`] — a [`Render`] implementation that mounts
//!   into the surface through some external rendering mechanism and knows
//!   how to unmount itself again.
//!
//! Both go through the same [`OpenRequest`], which also carries the optional
//! [`CorrelationId`] and any on-close hooks.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::host::OverlayHost;
use crate::overlay::CloseReason;

/// Mounts content into an overlay surface and tears it down again.
///
/// `unmount` is called exactly once per successful `mount`, from the
/// overlay's teardown path, while the surface still has its children.
pub trait Render<S> {
    /// Mounts the content into `surface`.
    fn mount(&mut self, surface: &S);

    /// Unmounts the content from `surface`.
    fn unmount(&mut self, surface: &S);
}

/// A [`Render`] built from a pair of closures.
pub struct RenderFn<M, U> {
    mount: M,
    unmount: U,
}

impl<M, U> RenderFn<M, U> {
    /// Creates a renderer from `mount` and `unmount` closures.
    pub fn new<S>(mount: M, unmount: U) -> Self
    where
        M: FnMut(&S),
        U: FnMut(&S),
    {
        Self { mount, unmount }
    }
}

impl<M, U> fmt::Debug for RenderFn<M, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderFn").finish_non_exhaustive()
    }
}

impl<S, M, U> Render<S> for RenderFn<M, U>
where
    M: FnMut(&S),
    U: FnMut(&S),
{
    fn mount(&mut self, surface: &S) {
        (self.mount)(surface);
    }

    fn unmount(&mut self, surface: &S) {
        (self.unmount)(surface);
    }
}

/// Content to display in the overlay.
pub enum OverlayContent<H: OverlayHost> {
    /// A constructed node, appended directly.
    Node(H::Node),
    /// Content mounted and unmounted by an external renderer.
    Rendered(Box<dyn Render<H::Surface>>),
}

impl<H: OverlayHost> OverlayContent<H> {
    /// Wraps a renderer.
    pub fn rendered(renderer: impl Render<H::Surface> + 'static) -> Self {
        Self::Rendered(Box::new(renderer))
    }
}

impl<H: OverlayHost> fmt::Debug for OverlayContent<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(_) => f.write_str("Node(..)"),
            Self::Rendered(_) => f.write_str("Rendered(..)"),
        }
    }
}

/// Opaque identifier telling external code which item the overlay shows.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CorrelationId(String);

impl CorrelationId {
    /// Creates a correlation id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CorrelationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CorrelationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Callback run once when the overlay it was registered with closes.
pub type CloseHook = Box<dyn FnOnce(CloseReason)>;

/// Everything needed to open the overlay.
///
/// Rendered content always opens exclusively. Node content opens
/// non-exclusively unless [`exclusive`](Self::exclusive) is called: the
/// existing children, listeners and hooks stay in place and the node is
/// appended after them.
pub struct OpenRequest<H: OverlayHost> {
    pub(crate) content: OverlayContent<H>,
    pub(crate) correlation_id: Option<CorrelationId>,
    pub(crate) exclusive: bool,
    pub(crate) on_close: Vec<CloseHook>,
}

impl<H: OverlayHost> OpenRequest<H> {
    /// Creates a request for `content`.
    #[must_use]
    pub fn new(content: OverlayContent<H>) -> Self {
        let exclusive = matches!(content, OverlayContent::Rendered(_));
        Self {
            content,
            correlation_id: None,
            exclusive,
            on_close: Vec::new(),
        }
    }

    /// Creates a request that appends `node` directly.
    #[must_use]
    pub fn node(node: H::Node) -> Self {
        Self::new(OverlayContent::Node(node))
    }

    /// Creates a request that mounts through `renderer`.
    #[must_use]
    pub fn rendered(renderer: impl Render<H::Surface> + 'static) -> Self {
        Self::new(OverlayContent::rendered(renderer))
    }

    /// Sets the correlation id written onto the surface.
    #[must_use]
    pub fn correlation_id(mut self, id: impl Into<CorrelationId>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Tears down any prior overlay state before opening.
    #[must_use]
    pub fn exclusive(mut self) -> Self {
        self.exclusive = true;
        self
    }

    /// Adds a hook that runs once when this overlay closes.
    #[must_use]
    pub fn on_close(mut self, hook: impl FnOnce(CloseReason) + 'static) -> Self {
        self.on_close.push(Box::new(hook));
        self
    }

    /// Returns whether this request tears down prior state first.
    #[must_use]
    pub fn is_exclusive(&self) -> bool {
        self.exclusive
    }
}

impl<H: OverlayHost> fmt::Debug for OpenRequest<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenRequest")
            .field("content", &self.content)
            .field("correlation_id", &self.correlation_id)
            .field("exclusive", &self.exclusive)
            .field("on_close_len", &self.on_close.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_host::TestHost;
    use alloc::rc::Rc;
    use core::cell::Cell;

    #[test]
    fn rendered_requests_are_exclusive() {
        let req = OpenRequest::<TestHost>::rendered(RenderFn::new(|_: &()| {}, |_: &()| {}));
        assert!(req.is_exclusive(), "rendered content always cleans first");
    }

    #[test]
    fn node_requests_are_not_exclusive_by_default() {
        let req = OpenRequest::<TestHost>::node("a");
        assert!(!req.is_exclusive(), "node content keeps prior state");
        assert!(req.exclusive().is_exclusive(), "opt-in exclusivity");
    }

    #[test]
    fn render_fn_forwards_calls() {
        let mounts = Rc::new(Cell::new(0_u32));
        let unmounts = Rc::new(Cell::new(0_u32));
        let (m, u) = (Rc::clone(&mounts), Rc::clone(&unmounts));
        let mut r = RenderFn::new(
            move |_: &()| m.set(m.get() + 1),
            move |_: &()| u.set(u.get() + 1),
        );
        r.mount(&());
        r.mount(&());
        r.unmount(&());
        assert_eq!(mounts.get(), 2, "mount forwarded twice");
        assert_eq!(unmounts.get(), 1, "unmount forwarded once");
    }

    #[test]
    fn correlation_id_round_trips_through_display() {
        let id = CorrelationId::from("tweet-42");
        assert_eq!(id.as_str(), "tweet-42");
        assert_eq!(alloc::format!("{id}"), "tweet-42");
    }
}
