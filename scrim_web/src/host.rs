// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM implementation of the overlay host contract.
//!
//! [`DomHost`] resolves the surface, the content sizer and the media element
//! by selector on every call; it keeps no element references except the
//! surface that received the click listener, which it needs for removal.
//! Protected regions are not part of the host: they live on the controller.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;

use js_sys::Function;
use kurbo::Size;
use scrim_core::host::{Listener, OverlayHost};
use scrim_core::predicate::ClickTarget;
use wasm_bindgen::JsCast as _;
use web_sys::{Document, Element, EventTarget, HtmlElement, Node, ResizeObserver};

use crate::config::DomConfig;

/// JS callbacks the host registers; owned by [`WebOverlay`](crate::WebOverlay).
pub(crate) struct Handlers {
    pub(crate) key_down: Function,
    pub(crate) click: Function,
    pub(crate) observer: ResizeObserver,
}

/// [`OverlayHost`] over a live [`Document`].
///
/// Until the owning [`WebOverlay`](crate::WebOverlay) installs its callbacks,
/// listener and observer calls are ignored.
pub struct DomHost {
    document: Document,
    surface_selector: Cow<'static, str>,
    open_class: Cow<'static, str>,
    correlation_attribute: Cow<'static, str>,
    sizer_selector: String,
    media_selector: String,
    handlers: Option<Handlers>,
    click_target: Option<Element>,
}

impl core::fmt::Debug for DomHost {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomHost")
            .field("surface_selector", &self.surface_selector)
            .field("open_class", &self.open_class)
            .field("correlation_attribute", &self.correlation_attribute)
            .field("sizer_selector", &self.sizer_selector)
            .field("handlers", &self.handlers.is_some())
            .field("click_attached", &self.click_target.is_some())
            .finish_non_exhaustive()
    }
}

impl DomHost {
    /// Takes the names from `config`; its regions are ignored here.
    pub(crate) fn new(document: Document, config: &DomConfig) -> Self {
        Self {
            document,
            surface_selector: config.surface_selector.clone(),
            open_class: config.open_class.clone(),
            correlation_attribute: config.correlation_attribute.clone(),
            sizer_selector: config.sizer_selector(),
            media_selector: config.media_selector(),
            handlers: None,
            click_target: None,
        }
    }

    pub(crate) fn install(&mut self, handlers: Handlers) {
        self.handlers = Some(handlers);
    }

    /// Returns the document this host operates on.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }
}

impl OverlayHost for DomHost {
    type Surface = Element;
    type Node = Node;
    type Sizer = Element;
    type Media = HtmlElement;

    fn surface(&self) -> Option<Element> {
        self.query(&self.surface_selector)
    }

    fn set_open_marker(&mut self, surface: &Element, open: bool) {
        let classes = surface.class_list();
        let _ = if open {
            classes.add_1(&self.open_class)
        } else {
            classes.remove_1(&self.open_class)
        };
    }

    fn set_correlation_id(&mut self, surface: &Element, id: &str) {
        let _ = surface.set_attribute(&self.correlation_attribute, id);
    }

    fn correlation_id(&self, surface: &Element) -> Option<String> {
        surface.get_attribute(&self.correlation_attribute)
    }

    fn append_content(&mut self, surface: &Element, node: Node) {
        let _ = surface.append_child(&node);
    }

    fn clear_content(&mut self, surface: &Element) {
        while let Some(child) = surface.first_child() {
            if surface.remove_child(&child).is_err() {
                break;
            }
        }
    }

    fn attach_listener(&mut self, surface: &Element, listener: Listener) {
        let Some(handlers) = &self.handlers else {
            return;
        };
        match listener {
            Listener::KeyDown => {
                // Capture phase, so the overlay sees Escape before page handlers.
                let _ = self.document.add_event_listener_with_callback_and_bool(
                    listener.event_type(),
                    &handlers.key_down,
                    true,
                );
            }
            Listener::Click => {
                let _ = surface.add_event_listener_with_callback(
                    listener.event_type(),
                    &handlers.click,
                );
                self.click_target = Some(surface.clone());
            }
        }
    }

    fn detach_listener(&mut self, listener: Listener) {
        let Some(handlers) = &self.handlers else {
            return;
        };
        match listener {
            Listener::KeyDown => {
                let _ = self.document.remove_event_listener_with_callback_and_bool(
                    listener.event_type(),
                    &handlers.key_down,
                    true,
                );
            }
            Listener::Click => {
                if let Some(target) = self.click_target.take() {
                    let _ = target.remove_event_listener_with_callback(
                        listener.event_type(),
                        &handlers.click,
                    );
                }
            }
        }
    }

    fn find_sizer(&self) -> Option<Element> {
        self.query(&self.sizer_selector)
    }

    fn observe(&mut self, sizer: &Element) {
        if let Some(handlers) = &self.handlers {
            handlers.observer.observe(sizer);
        }
    }

    fn disconnect(&mut self) {
        if let Some(handlers) = &self.handlers {
            handlers.observer.disconnect();
        }
    }

    fn find_media(&self) -> Option<HtmlElement> {
        self.query(&self.media_selector)?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    fn constrain_media(&mut self, media: &HtmlElement, bounds: Size) {
        let style = media.style();
        let _ = style.set_property("max-width", &px(bounds.width));
        let _ = style.set_property("max-height", &px(bounds.height));
    }
}

/// Formats a CSS pixel length.
fn px(value: f64) -> String {
    format!("{value}px")
}

/// A click event target, as seen by the click-outside predicate.
#[derive(Clone, Debug)]
pub struct DomTarget(EventTarget);

impl DomTarget {
    /// Wraps an event target.
    #[must_use]
    pub fn new(target: EventTarget) -> Self {
        Self(target)
    }

    fn element(&self) -> Option<&Element> {
        self.0.dyn_ref::<Element>()
    }
}

impl ClickTarget for DomTarget {
    fn is_element(&self) -> bool {
        self.element().is_some()
    }

    fn closest_matches(&self, selector: &str) -> bool {
        self.element()
            .and_then(|el| el.closest(selector).ok().flatten())
            .is_some()
    }
}
