// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The overlay controller.
//!
//! [`Overlay`] is a two-state machine, [`Closed`](OverlayState::Closed)
//! (initial) and [`Open`](OverlayState::Open). Every transition applies all
//! of its effects synchronously; there is no opening or closing state.
//!
//! | From   | Trigger                                   | To     |
//! |--------|-------------------------------------------|--------|
//! | Closed | [`open_with`](Overlay::open_with)          | Open   |
//! | Open   | [`open_with`](Overlay::open_with)          | Open   |
//! | Open   | [`close`](Overlay::close), Escape, outside click | Closed |
//! | Closed | [`close`](Overlay::close)                  | Closed |
//!
//! An open request whose surface cannot be resolved changes nothing. An
//! exclusive request tears everything down first, whatever the state.
//!
//! # Teardown
//!
//! Every close path funnels into one routine, which runs in this order:
//!
//! 1. detach the key listener, then the click listener
//! 2. disconnect the size observer binding
//! 3. unmount rendered content, empty the surface, remove the open marker
//!    (skipped if the surface is gone)
//! 4. run the on-close hooks registered since the last teardown
//!
//! A size notification arriving mid-teardown finds no binding and is
//! dropped.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Size;

use crate::content::{CloseHook, CorrelationId, OpenRequest, OverlayContent, Render};
use crate::host::{Listener, OverlayHost};
use crate::predicate::{ClickTarget, ProtectedRegions, click_closes, is_escape};
use crate::sizing::{BindingId, ResizeOutcome, SizeObserver};
use crate::trace::{
    BindingEvent, CloseEvent, ContentKind, ListenerEvent, OpenEvent, Operation, ResizeEvent,
    SurfaceMissingEvent, TraceSink, Tracer,
};

/// Lifecycle state of the overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OverlayState {
    /// Nothing is displayed and no listeners are attached.
    #[default]
    Closed,
    /// Content is displayed.
    Open,
}

/// Why the overlay was torn down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CloseReason {
    /// [`Overlay::close`] was called.
    Requested,
    /// The Escape key was pressed.
    Escape,
    /// A click landed outside every protected region.
    OutsideClick,
    /// An exclusive open cleared the previous overlay.
    Replaced,
    /// The controller was dropped while holding resources.
    Dropped,
}

#[derive(Clone, Copy, Debug, Default)]
struct Attached {
    key_down: bool,
    click: bool,
}

impl Attached {
    fn slot(&mut self, listener: Listener) -> &mut bool {
        match listener {
            Listener::KeyDown => &mut self.key_down,
            Listener::Click => &mut self.click,
        }
    }

    fn count(self) -> usize {
        usize::from(self.key_down) + usize::from(self.click)
    }
}

fn tracer(sink: &mut Option<Box<dyn TraceSink>>) -> Tracer<'_> {
    match sink {
        Some(s) => Tracer::new(&mut **s),
        None => Tracer::none(),
    }
}

/// Controller owning the overlay's open/close state and every resource
/// attached around it.
///
/// The controller holds listener registrations, the size-observer binding,
/// mounted content and on-close hooks as private fields. Acquiring happens
/// on open, releasing on teardown, and dropping a controller that still
/// holds anything tears it down with [`CloseReason::Dropped`].
pub struct Overlay<H: OverlayHost> {
    host: H,
    state: OverlayState,
    regions: ProtectedRegions,
    attached: Attached,
    sizing: SizeObserver,
    mounted: Option<Box<dyn Render<H::Surface>>>,
    correlation: Option<CorrelationId>,
    hooks: Vec<CloseHook>,
    sink: Option<Box<dyn TraceSink>>,
}

impl<H: OverlayHost> fmt::Debug for Overlay<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overlay")
            .field("state", &self.state)
            .field("regions", &self.regions)
            .field("attached", &self.attached)
            .field("sizing", &self.sizing)
            .field("mounted", &self.mounted.is_some())
            .field("correlation", &self.correlation)
            .field("hooks_len", &self.hooks.len())
            .finish_non_exhaustive()
    }
}

impl<H: OverlayHost> Overlay<H> {
    /// Creates a closed overlay driving `host`, with the default protected
    /// regions.
    #[must_use]
    pub fn new(host: H) -> Self {
        Self {
            host,
            state: OverlayState::Closed,
            regions: ProtectedRegions::default(),
            attached: Attached::default(),
            sizing: SizeObserver::new(),
            mounted: None,
            correlation: None,
            hooks: Vec::new(),
            sink: None,
        }
    }

    /// Replaces the protected regions used by the click predicate.
    #[must_use]
    pub fn with_regions(mut self, regions: ProtectedRegions) -> Self {
        self.regions = regions;
        self
    }

    /// Installs a sink for lifecycle events.
    ///
    /// Events only reach the sink when the `trace` feature is enabled.
    pub fn set_trace_sink(&mut self, sink: Box<dyn TraceSink>) {
        self.sink = Some(sink);
    }

    /// Removes and returns the installed trace sink.
    pub fn take_trace_sink(&mut self) -> Option<Box<dyn TraceSink>> {
        self.sink.take()
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the host mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Returns the protected regions.
    #[must_use]
    pub fn regions(&self) -> &ProtectedRegions {
        &self.regions
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> OverlayState {
        self.state
    }

    /// Returns `true` if the overlay is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == OverlayState::Open
    }

    /// Returns the correlation id of the displayed item while open.
    #[must_use]
    pub fn correlation_id(&self) -> Option<&CorrelationId> {
        self.correlation.as_ref().filter(|_| self.is_open())
    }

    /// Reads the correlation attribute from the surface, as external code
    /// sees it.
    ///
    /// The attribute is not cleared on close, so unlike
    /// [`correlation_id`](Self::correlation_id) this keeps reporting the last
    /// id written. Returns `None` if the surface is missing.
    #[must_use]
    pub fn surface_correlation_id(&self) -> Option<String> {
        let surface = self.host.surface()?;
        self.host.correlation_id(&surface)
    }

    /// Returns the number of listeners currently attached (0 to 2).
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.attached.count()
    }

    /// Returns the active size-observer binding, if any.
    #[must_use]
    pub fn binding(&self) -> Option<BindingId> {
        self.sizing.binding()
    }

    /// Opens the overlay with a directly inserted node.
    ///
    /// Prior content is not removed: the node is appended after whatever the
    /// surface already holds. Use [`open_with`](Self::open_with) with an
    /// [`exclusive`](OpenRequest::exclusive) request to clean first.
    pub fn open(&mut self, node: H::Node, correlation_id: Option<CorrelationId>) {
        let mut request = OpenRequest::node(node);
        request.correlation_id = correlation_id;
        self.open_with(request);
    }

    /// Tears down any prior overlay, then mounts `renderer` into the surface.
    pub fn open_exclusive(&mut self, renderer: impl Render<H::Surface> + 'static) {
        self.open_with(OpenRequest::rendered(renderer));
    }

    /// Opens the overlay as described by `request`.
    ///
    /// If the surface cannot be resolved this changes nothing (after the
    /// teardown, for exclusive requests) and the request's hooks are
    /// dropped without running.
    pub fn open_with(&mut self, request: OpenRequest<H>) {
        let OpenRequest {
            content,
            correlation_id,
            exclusive,
            on_close,
        } = request;

        if exclusive {
            self.teardown(CloseReason::Replaced);
        }

        let Some(surface) = self.host.surface() else {
            tracer(&mut self.sink).surface_missing(&SurfaceMissingEvent {
                during: Operation::Open,
            });
            return;
        };

        let reopened = self.is_open();
        self.host.set_open_marker(&surface, true);

        let correlation_id = correlation_id.filter(|id| !id.as_str().is_empty());
        let correlated = correlation_id.is_some();
        if let Some(id) = correlation_id {
            self.host.set_correlation_id(&surface, id.as_str());
            self.correlation = Some(id);
        }

        for listener in Listener::ALL {
            self.attach(&surface, listener);
        }

        let content = match content {
            OverlayContent::Node(node) => {
                self.host.append_content(&surface, node);
                ContentKind::Node
            }
            OverlayContent::Rendered(mut renderer) => {
                debug_assert!(self.mounted.is_none(), "rendered opens are exclusive");
                renderer.mount(&surface);
                self.mounted = Some(renderer);
                ContentKind::Rendered
            }
        };

        self.hooks.extend(on_close);
        self.state = OverlayState::Open;

        if let Some(sizer) = self.host.find_sizer() {
            let (replaced, binding) = self.sizing.observe(&mut self.host, &sizer);
            let mut t = tracer(&mut self.sink);
            if let Some(old) = replaced {
                t.binding(&BindingEvent {
                    binding: old,
                    bound: false,
                });
            }
            t.binding(&BindingEvent {
                binding,
                bound: true,
            });
        }

        tracer(&mut self.sink).open(&OpenEvent {
            content,
            exclusive,
            correlated,
            reopened,
        });
    }

    /// Closes the overlay. Idempotent.
    pub fn close(&mut self) {
        self.teardown(CloseReason::Requested);
    }

    /// Closes the overlay, reporting `reason` to the on-close hooks.
    pub fn close_with(&mut self, reason: CloseReason) {
        self.teardown(reason);
    }

    /// Handles a `keydown` with the given `key` value.
    ///
    /// Returns `true` if the key closed the overlay. Keys other than Escape
    /// are ignored.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.is_open() || !is_escape(key) {
            return false;
        }
        self.teardown(CloseReason::Escape);
        true
    }

    /// Handles a click on the surface whose event target is `target`.
    ///
    /// Returns `true` if the click closed the overlay.
    pub fn handle_click<T: ClickTarget + ?Sized>(&mut self, target: Option<&T>) -> bool {
        if !self.is_open() || !click_closes(target, &self.regions) {
            return false;
        }
        self.teardown(CloseReason::OutsideClick);
        true
    }

    /// Handles a size-change notification for the observed sizer.
    pub fn handle_resize(&mut self, size: Size) -> ResizeOutcome {
        let outcome = self.sizing.notify(&mut self.host, size);
        tracer(&mut self.sink).resize(&ResizeEvent {
            binding: self.sizing.binding(),
            size,
            outcome,
        });
        outcome
    }

    fn attach(&mut self, surface: &H::Surface, listener: Listener) {
        let slot = self.attached.slot(listener);
        if *slot {
            return;
        }
        *slot = true;
        self.host.attach_listener(surface, listener);
        tracer(&mut self.sink).listener(&ListenerEvent {
            listener,
            attached: true,
        });
    }

    fn detach(&mut self, listener: Listener) {
        let slot = self.attached.slot(listener);
        if !*slot {
            return;
        }
        *slot = false;
        self.host.detach_listener(listener);
        tracer(&mut self.sink).listener(&ListenerEvent {
            listener,
            attached: false,
        });
    }

    fn holds_resources(&self) -> bool {
        self.is_open()
            || self.attached.count() > 0
            || self.sizing.binding().is_some()
            || self.mounted.is_some()
            || !self.hooks.is_empty()
    }

    fn teardown(&mut self, reason: CloseReason) {
        let was_open = self.is_open();

        self.detach(Listener::KeyDown);
        self.detach(Listener::Click);

        if let Some(binding) = self.sizing.disconnect(&mut self.host) {
            tracer(&mut self.sink).binding(&BindingEvent {
                binding,
                bound: false,
            });
        }

        if let Some(surface) = self.host.surface() {
            if let Some(mut renderer) = self.mounted.take() {
                renderer.unmount(&surface);
            }
            self.host.clear_content(&surface);
            self.host.set_open_marker(&surface, false);
        } else {
            self.mounted = None;
            tracer(&mut self.sink).surface_missing(&SurfaceMissingEvent {
                during: Operation::Close,
            });
        }

        self.state = OverlayState::Closed;
        self.correlation = None;

        let hooks = core::mem::take(&mut self.hooks);
        let hooks_run = hooks.len();
        for hook in hooks {
            hook(reason);
        }

        tracer(&mut self.sink).close(&CloseEvent {
            reason,
            was_open,
            hooks_run,
        });
    }
}

impl<H: OverlayHost> Drop for Overlay<H> {
    fn drop(&mut self) {
        if self.holds_resources() {
            self.teardown(CloseReason::Dropped);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::RenderFn;
    use crate::test_host::{Op, TestHost};
    use alloc::rc::Rc;
    use alloc::string::ToString;
    use alloc::vec;
    use core::cell::{Cell, RefCell};

    struct Target(&'static str);

    impl ClickTarget for Target {
        fn is_element(&self) -> bool {
            true
        }

        fn closest_matches(&self, selector: &str) -> bool {
            self.0 == selector
        }
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce(CloseReason) + 'static) {
        let count = Rc::new(Cell::new(0_u32));
        let c = Rc::clone(&count);
        (count, move |_| c.set(c.get() + 1))
    }

    #[test]
    fn open_sets_marker_listeners_and_content() {
        let mut overlay = Overlay::new(TestHost::new());
        overlay.open("image", Some("item-1".into()));

        let host = overlay.host();
        assert!(overlay.is_open());
        assert!(host.open_marker);
        assert_eq!(host.children, ["image"]);
        assert_eq!(host.count(Listener::KeyDown), 1);
        assert_eq!(host.count(Listener::Click), 1);
        assert_eq!(host.correlation.as_deref(), Some("item-1"));
        assert_eq!(
            overlay.correlation_id().map(CorrelationId::as_str),
            Some("item-1")
        );
        assert_eq!(overlay.binding(), None, "no sizer, no binding");
    }

    #[test]
    fn close_is_idempotent() {
        let mut overlay = Overlay::new(TestHost::new());
        overlay.host_mut().sizer = true;
        overlay.open("image", None);

        overlay.close();
        let after_one = (
            overlay.state(),
            overlay.host().open_marker,
            overlay.host().children.clone(),
            overlay.host().listeners.clone(),
            overlay.host().observing,
        );
        overlay.close();
        let after_two = (
            overlay.state(),
            overlay.host().open_marker,
            overlay.host().children.clone(),
            overlay.host().listeners.clone(),
            overlay.host().observing,
        );

        assert_eq!(after_one, after_two);
        assert_eq!(after_two.0, OverlayState::Closed);
        assert!(!after_two.1);
        assert!(after_two.2.is_empty());
        assert!(after_two.3.is_empty());
        assert_eq!(after_two.4, 0);
        assert_eq!(
            overlay.host().disconnects,
            1,
            "second close has no binding to drop"
        );
    }

    #[test]
    fn close_runs_in_order() {
        let mut overlay = Overlay::new(TestHost::new());
        overlay.host_mut().sizer = true;
        overlay.open("image", None);
        overlay.host_mut().log.clear();

        overlay.close();
        assert_eq!(
            overlay.host().log,
            [
                Op::Detach(Listener::KeyDown),
                Op::Detach(Listener::Click),
                Op::Disconnect,
                Op::Clear,
                Op::Marker(false),
            ]
        );
    }

    #[test]
    fn exclusive_open_keeps_one_listener_pair() {
        let mut overlay = Overlay::new(TestHost::new());
        overlay.open_exclusive(RenderFn::new(|_: &()| {}, |_: &()| {}));
        overlay.open_exclusive(RenderFn::new(|_: &()| {}, |_: &()| {}));

        let host = overlay.host();
        assert_eq!(host.count(Listener::KeyDown), 1);
        assert_eq!(host.count(Listener::Click), 1);
        assert_eq!(overlay.listener_count(), 2);
    }

    #[test]
    fn exclusive_open_tears_down_previous_overlay() {
        let (count, hook) = counter();
        let mut overlay = Overlay::new(TestHost::new());
        overlay.open_with(OpenRequest::node("old").on_close(hook));

        let reason = Rc::new(Cell::new(None));
        let r = Rc::clone(&reason);
        overlay.open_with(
            OpenRequest::node("new")
                .exclusive()
                .on_close(move |why| r.set(Some(why))),
        );

        assert_eq!(overlay.host().children, ["new"], "stale content removed");
        assert_eq!(count.get(), 1, "previous hook ran on replacement");
        assert_eq!(reason.get(), None, "new hook waits for its own close");
        overlay.close();
        assert_eq!(reason.get(), Some(CloseReason::Requested));
    }

    #[test]
    fn plain_open_appends_without_cleaning() {
        let mut overlay = Overlay::new(TestHost::new());
        overlay.open("first", Some("a".into()));
        overlay.open("second", None);

        let host = overlay.host();
        assert_eq!(host.children, ["first", "second"]);
        assert_eq!(
            host.count(Listener::KeyDown),
            1,
            "no duplicate key listener"
        );
        assert_eq!(
            host.count(Listener::Click),
            1,
            "no duplicate click listener"
        );
        assert_eq!(
            overlay.correlation_id().map(CorrelationId::as_str),
            Some("a")
        );
    }

    #[test]
    fn missing_surface_is_a_noop() {
        let mut overlay = Overlay::new(TestHost::without_surface());
        overlay.open("image", Some("x".into()));
        overlay.open_exclusive(RenderFn::new(|_: &()| {}, |_: &()| {}));
        overlay.close();

        assert!(!overlay.is_open());
        assert!(
            overlay.host().log.is_empty(),
            "no mutation: {:?}",
            overlay.host().log
        );
    }

    #[test]
    fn escape_closes_and_runs_hook_once() {
        let (count, hook) = counter();
        let mut overlay = Overlay::new(TestHost::new());
        overlay.open_with(OpenRequest::node("image").on_close(hook));

        assert!(!overlay.handle_key("Enter"));
        assert!(!overlay.handle_key("a"));
        assert!(overlay.is_open());
        assert_eq!(count.get(), 0);

        assert!(overlay.handle_key("Escape"));
        assert!(!overlay.is_open());
        assert_eq!(count.get(), 1);

        assert!(!overlay.handle_key("Escape"), "closed overlay ignores keys");
        overlay.close();
        assert_eq!(count.get(), 1, "hook runs exactly once");
    }

    #[test]
    fn protected_click_keeps_overlay_open() {
        let mut overlay = Overlay::new(TestHost::new());
        overlay.open("image", None);

        assert!(!overlay.handle_click(Some(&Target(".mdl-btn-media"))));
        assert!(overlay.is_open());

        assert!(overlay.handle_click(Some(&Target(".backdrop"))));
        assert!(!overlay.is_open());
        assert!(
            overlay.host().listeners.is_empty(),
            "click listener removed too"
        );
    }

    #[test]
    fn click_with_custom_regions() {
        let mut overlay = Overlay::new(TestHost::new())
            .with_regions(ProtectedRegions::empty().with(".caption"));
        overlay.open("image", None);
        assert!(!overlay.handle_click(Some(&Target(".caption"))));
        assert!(overlay.handle_click(Some(&Target(".med-tweet"))));
    }

    #[test]
    fn reopen_rebinds_observer_to_current_media() {
        let mut overlay = Overlay::new(TestHost::new());
        overlay.host_mut().sizer = true;
        overlay.host_mut().media = Some(1);
        overlay.open("first", None);
        let first = overlay.binding();

        overlay.host_mut().media = Some(2);
        overlay.open_with(OpenRequest::node("second").exclusive());
        let second = overlay.binding();

        assert!(first.is_some() && second.is_some());
        assert_ne!(first, second);
        assert_eq!(overlay.host().observing, 1, "one live binding");

        assert_eq!(
            overlay.handle_resize(Size::new(800.0, 600.0)),
            ResizeOutcome::Applied
        );
        assert_eq!(overlay.host().constrained, [(2, Size::new(800.0, 600.0))]);
    }

    #[test]
    fn non_exclusive_reopen_still_has_one_binding() {
        let mut overlay = Overlay::new(TestHost::new());
        overlay.host_mut().sizer = true;
        overlay.open("first", None);
        overlay.open("second", None);
        assert_eq!(overlay.host().observing, 1);
        assert_eq!(
            overlay.host().disconnects,
            1,
            "previous binding disconnected"
        );
    }

    #[test]
    fn resize_after_close_is_dropped() {
        let mut overlay = Overlay::new(TestHost::new());
        overlay.host_mut().sizer = true;
        overlay.host_mut().media = Some(1);
        overlay.open("image", None);
        overlay.close();

        assert_eq!(
            overlay.handle_resize(Size::new(1.0, 1.0)),
            ResizeOutcome::Unbound
        );
        assert!(overlay.host().constrained.is_empty());
    }

    #[test]
    fn resize_without_media_is_skipped() {
        let mut overlay = Overlay::new(TestHost::new());
        overlay.host_mut().sizer = true;
        overlay.open("spinner", None);
        assert_eq!(
            overlay.handle_resize(Size::new(1.0, 1.0)),
            ResizeOutcome::NoMedia
        );
    }

    #[test]
    fn rendered_content_unmounts_once() {
        let events = Rc::new(RefCell::new(vec![]));
        let (m, u) = (Rc::clone(&events), Rc::clone(&events));
        let mut overlay = Overlay::new(TestHost::new());
        overlay.open_exclusive(RenderFn::new(
            move |_: &()| m.borrow_mut().push("mount"),
            move |_: &()| u.borrow_mut().push("unmount"),
        ));
        assert!(overlay.is_open());

        overlay.handle_key("Escape");
        overlay.close();
        assert_eq!(*events.borrow(), ["mount", "unmount"]);
    }

    #[test]
    fn exclusive_open_unmounts_previous_renderer() {
        let events = Rc::new(RefCell::new(vec![]));
        let mut overlay = Overlay::new(TestHost::new());
        for name in ["a", "b"] {
            let (m, u) = (Rc::clone(&events), Rc::clone(&events));
            overlay.open_exclusive(RenderFn::new(
                move |_: &()| m.borrow_mut().push(alloc::format!("mount {name}")),
                move |_: &()| u.borrow_mut().push(alloc::format!("unmount {name}")),
            ));
        }
        assert_eq!(*events.borrow(), ["mount a", "unmount a", "mount b"]);
    }

    #[test]
    fn surface_vanishing_before_close_drops_renderer_without_unmount() {
        let unmounts = Rc::new(Cell::new(0_u32));
        let u = Rc::clone(&unmounts);
        let mut overlay = Overlay::new(TestHost::new());
        overlay.open_exclusive(RenderFn::new(|_: &()| {}, move |_: &()| u.set(u.get() + 1)));

        overlay.host_mut().surface = false;
        overlay.close();
        assert_eq!(unmounts.get(), 0);
        assert!(!overlay.is_open());
        assert!(
            overlay.host().listeners.is_empty(),
            "listeners still released"
        );
    }

    #[test]
    fn correlation_hidden_after_close_and_empty_ids_ignored() {
        let mut overlay = Overlay::new(TestHost::new());
        overlay.open("image", Some("".into()));
        assert_eq!(overlay.correlation_id(), None);
        assert!(!overlay.host().log.contains(&Op::Correlate("".to_string())));

        overlay.open("image", Some("b".into()));
        overlay.close();
        assert_eq!(overlay.correlation_id(), None);
    }

    #[test]
    fn surface_attribute_outlives_close() {
        let mut overlay = Overlay::new(TestHost::new());
        assert_eq!(overlay.surface_correlation_id(), None);

        overlay.open("image", Some("tweet-42".into()));
        assert_eq!(
            overlay.surface_correlation_id().as_deref(),
            Some("tweet-42")
        );

        overlay.open("other", Some("".into()));
        assert_eq!(
            overlay.surface_correlation_id().as_deref(),
            Some("tweet-42"),
            "empty id leaves the attribute alone"
        );

        overlay.close();
        assert_eq!(overlay.correlation_id(), None);
        assert_eq!(
            overlay.surface_correlation_id().as_deref(),
            Some("tweet-42")
        );

        overlay.host_mut().surface = false;
        assert_eq!(overlay.surface_correlation_id(), None);
    }

    #[test]
    fn drop_releases_resources() {
        let reason = Rc::new(Cell::new(None));
        let r = Rc::clone(&reason);
        let mut overlay = Overlay::new(TestHost::new());
        overlay.open_with(OpenRequest::node("image").on_close(move |why| r.set(Some(why))));
        drop(overlay);
        assert_eq!(reason.get(), Some(CloseReason::Dropped));
    }

    #[test]
    fn missing_surface_drops_hooks_unrun() {
        let (count, hook) = counter();
        let mut overlay = Overlay::new(TestHost::without_surface());
        overlay.open_with(OpenRequest::node("image").on_close(hook));
        overlay.close();
        assert_eq!(count.get(), 0);
    }
}
