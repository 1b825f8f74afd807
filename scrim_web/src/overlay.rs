// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The browser-facing overlay handle.
//!
//! [`WebOverlay`] owns the controller behind an `Rc<RefCell<_>>` together
//! with the three JS closures that feed it events. The closures hold only a
//! `Weak` reference back, so dropping the handle frees everything.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::string::{String, ToString};
use core::cell::RefCell;

use js_sys::{Array, Function};
use kurbo::Size;
use scrim_core::content::{OpenRequest, Render};
use scrim_core::overlay::Overlay;
use scrim_core::trace::TraceSink;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, KeyboardEvent, MouseEvent, Node, ResizeObserver, ResizeObserverEntry,
};

use crate::config::DomConfig;
use crate::host::{DomHost, DomTarget, Handlers};

type Shared = Rc<RefCell<Overlay<DomHost>>>;
type KeyClosure = Closure<dyn FnMut(KeyboardEvent)>;
type ClickClosure = Closure<dyn FnMut(MouseEvent)>;
type ResizeClosure = Closure<dyn FnMut(Array)>;

/// A single exclusive full-screen overlay bound to a document.
///
/// Create with [`WebOverlay::new`], then call [`open`](Self::open),
/// [`open_exclusive`](Self::open_exclusive) or [`open_with`](Self::open_with).
/// Escape and clicks outside the protected regions close it, as does
/// [`close`](Self::close) or dropping the handle.
///
/// Calls made while the controller is busy (from inside an on-close hook or
/// a renderer's `mount`/`unmount`) are ignored.
pub struct WebOverlay {
    // Declared first so the controller tears down (and unregisters the
    // closures) before the closures themselves are freed.
    overlay: Shared,
    _key_down: KeyClosure,
    _click: ClickClosure,
    _resize: ResizeClosure,
}

impl WebOverlay {
    /// Creates a closed overlay operating on `document`.
    ///
    /// # Errors
    ///
    /// Returns the JS exception if the `ResizeObserver` cannot be created.
    pub fn new(document: Document, config: DomConfig) -> Result<Self, JsValue> {
        let host = DomHost::new(document, &config);
        let controller = Overlay::new(host).with_regions(config.regions);
        let overlay: Shared = Rc::new(RefCell::new(controller));

        let weak = Rc::downgrade(&overlay);
        let key_down = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            dispatch(&weak, |o| {
                o.handle_key(&event.key());
            });
        }) as Box<dyn FnMut(KeyboardEvent)>);

        let weak = Rc::downgrade(&overlay);
        let click = Closure::wrap(Box::new(move |event: MouseEvent| {
            let target = event.target().map(DomTarget::new);
            dispatch(&weak, |o| {
                o.handle_click(target.as_ref());
            });
        }) as Box<dyn FnMut(MouseEvent)>);

        let weak = Rc::downgrade(&overlay);
        let resize = Closure::wrap(Box::new(move |entries: Array| {
            let Some(size) = first_content_box(&entries) else {
                return;
            };
            dispatch(&weak, |o| {
                o.handle_resize(size);
            });
        }) as Box<dyn FnMut(Array)>);

        let observer = ResizeObserver::new(resize.as_ref().unchecked_ref())?;
        overlay.borrow_mut().host_mut().install(Handlers {
            key_down: key_down.as_ref().unchecked_ref::<Function>().clone(),
            click: click.as_ref().unchecked_ref::<Function>().clone(),
            observer,
        });

        Ok(Self {
            overlay,
            _key_down: key_down,
            _click: click,
            _resize: resize,
        })
    }

    /// Creates a closed overlay on the global window's document.
    ///
    /// # Errors
    ///
    /// Fails if there is no global window or document, or if the
    /// `ResizeObserver` cannot be created.
    pub fn from_window(config: DomConfig) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no global document"))?;
        Self::new(document, config)
    }

    /// Runs `f` against the controller, or returns `None` if it is busy.
    pub fn with<R>(&self, f: impl FnOnce(&mut Overlay<DomHost>) -> R) -> Option<R> {
        let mut overlay = self.overlay.try_borrow_mut().ok()?;
        Some(f(&mut overlay))
    }

    /// Appends `node` to the surface and opens the overlay, tagging it with
    /// `correlation_id` if given. Prior content is left in place.
    pub fn open(&self, node: impl Into<Node>, correlation_id: Option<&str>) {
        let node = node.into();
        self.with(|o| o.open(node, correlation_id.map(Into::into)));
    }

    /// Tears down any prior overlay, then mounts `renderer` into the surface.
    pub fn open_exclusive(&self, renderer: impl Render<Element> + 'static) {
        self.with(|o| o.open_exclusive(renderer));
    }

    /// Opens the overlay as described by `request`.
    pub fn open_with(&self, request: OpenRequest<DomHost>) {
        self.with(|o| o.open_with(request));
    }

    /// Closes the overlay. Idempotent.
    pub fn close(&self) {
        self.with(Overlay::close);
    }

    /// Returns `true` if the overlay is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.overlay.try_borrow().is_ok_and(|o| o.is_open())
    }

    /// Returns the correlation id of the displayed item while open.
    #[must_use]
    pub fn correlation_id(&self) -> Option<String> {
        let overlay = self.overlay.try_borrow().ok()?;
        overlay.correlation_id().map(ToString::to_string)
    }

    /// Reads the correlation attribute off the surface element. It stays
    /// set after close.
    #[must_use]
    pub fn surface_correlation_id(&self) -> Option<String> {
        self.overlay.try_borrow().ok()?.surface_correlation_id()
    }

    /// Installs a sink for lifecycle events (requires the `trace` feature
    /// to receive anything).
    pub fn set_trace_sink(&self, sink: impl TraceSink + 'static) {
        self.with(|o| o.set_trace_sink(Box::new(sink)));
    }
}

impl core::fmt::Debug for WebOverlay {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.overlay.try_borrow() {
            Ok(overlay) => f
                .debug_struct("WebOverlay")
                .field("overlay", &*overlay)
                .finish_non_exhaustive(),
            Err(_) => f
                .debug_struct("WebOverlay")
                .field("overlay", &"<busy>")
                .finish_non_exhaustive(),
        }
    }
}

/// Forwards an event to the controller if it is still alive and not busy.
fn dispatch(weak: &Weak<RefCell<Overlay<DomHost>>>, f: impl FnOnce(&mut Overlay<DomHost>)) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    let Ok(mut overlay) = shared.try_borrow_mut() else {
        return;
    };
    f(&mut overlay);
}

/// Reads the content box of the first entry of a `ResizeObserver` callback.
fn first_content_box(entries: &Array) -> Option<Size> {
    let entry = entries.get(0).dyn_into::<ResizeObserverEntry>().ok()?;
    let rect = entry.content_rect();
    Some(Size::new(rect.width(), rect.height()))
}
