// Copyright 2026 the Scrim Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thumbnail gallery driving a scrim overlay.
//!
//! Clicking a thumbnail appends a full-size image inside a content sizer and
//! tags the overlay with the photo's id. The "About" button opens a card
//! through a mount/unmount renderer instead. Escape or a click on the
//! backdrop closes either; clicks on the caption bar do not.
//!
//! Build with: `wasm-pack build --target web demos/web_lightbox`
//! Then serve `demos/web_lightbox/` and open `index.html`.

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::boxed::Box;
use alloc::format;
use alloc::rc::Rc;

use scrim_core::content::{OpenRequest, RenderFn};
use scrim_core::predicate::ProtectedRegions;
use scrim_web::{ConsoleSink, DomConfig, WebOverlay};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlImageElement};

const PHOTOS: [(&str, &str); 4] = [
    ("harbor", "https://picsum.photos/id/1011/1600/1000"),
    ("forest", "https://picsum.photos/id/1018/1600/1000"),
    ("desert", "https://picsum.photos/id/1002/1600/1000"),
    ("alpine", "https://picsum.photos/id/1036/1600/1000"),
];

const SURFACE_ID: &str = "lightbox-root";

const SURFACE_CSS: &str = concat!(
    "position: fixed; inset: 0; display: none; align-items: center; ",
    "justify-content: center; background: rgba(8,12,20,0.86);",
);
const THUMB_CSS: &str =
    "width: 160px; height: 100px; object-fit: cover; cursor: zoom-in; border-radius: 6px;";
const FRAME_CSS: &str = "margin: 0; display: flex; flex-direction: column; align-items: center;";
const SIZER_CSS: &str =
    "width: 90vw; height: 80vh; display: flex; align-items: center; justify-content: center;";
const CAPTION_CSS: &str = "color: #eee; padding: 8px 16px; font: 14px sans-serif;";
const CARD_CSS: &str =
    "background: #fff; padding: 24px; border-radius: 8px; font: 16px sans-serif;";

/// Entry point for the lightbox demo.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let surface = element(&document, "div")?;
    surface.set_id(SURFACE_ID);
    style(&surface, SURFACE_CSS)?;
    let rule = element(&document, "style")?;
    let open_rule = format!("#{SURFACE_ID}.open {{ display: flex !important; }}");
    rule.set_text_content(Some(&open_rule));
    body.append_child(&rule)?;
    body.append_child(&surface)?;

    let config = DomConfig::default()
        .with_surface_selector(format!("#{SURFACE_ID}"))
        .with_regions(ProtectedRegions::empty().with(".caption"));
    let overlay = Rc::new(WebOverlay::new(document.clone(), config)?);
    overlay.set_trace_sink(ConsoleSink::default());

    let gallery = element(&document, "div")?;
    style(&gallery, "display: flex; gap: 12px; padding: 24px;")?;
    for (id, url) in PHOTOS {
        let thumb: HtmlImageElement = document.create_element("img")?.unchecked_into();
        thumb.set_src(url);
        thumb.set_alt(id);
        style(&thumb, THUMB_CSS)?;

        let overlay = Rc::clone(&overlay);
        let doc = document.clone();
        on_click(&thumb, move || {
            if let Ok(content) = photo_view(&doc, id, url) {
                overlay.open(content, Some(id));
            }
        })?;
        gallery.append_child(&thumb)?;
    }

    let about = element(&document, "button")?;
    about.set_text_content(Some("About"));
    let about_overlay = Rc::clone(&overlay);
    on_click(&about, move || {
        about_overlay.open_with(
            OpenRequest::rendered(RenderFn::new(
                |surface: &Element| {
                    if let Some(doc) = surface.owner_document()
                        && let Ok(card) = about_card(&doc)
                    {
                        let _ = surface.append_child(&card);
                    }
                },
                |surface: &Element| surface.set_inner_html(""),
            ))
            .correlation_id("about"),
        );
    })?;

    body.append_child(&gallery)?;
    body.append_child(&about)?;

    // The overlay lives for the rest of the page.
    core::mem::forget(overlay);

    Ok(())
}

/// Builds the full-size view: an image inside the content sizer plus a
/// caption bar that does not dismiss the overlay.
fn photo_view(document: &Document, id: &str, url: &str) -> Result<Element, JsValue> {
    let frame = element(document, "figure")?;
    style(&frame, FRAME_CSS)?;

    let sizer = element(document, "div")?;
    sizer.set_attribute("data-scrim-modal-content-sizer", "")?;
    style(&sizer, SIZER_CSS)?;

    let img: HtmlImageElement = document.create_element("img")?.unchecked_into();
    img.set_src(url);
    img.set_alt(id);
    sizer.append_child(&img)?;

    let caption = element(document, "figcaption")?;
    caption.set_class_name("caption");
    caption.set_text_content(Some(id));
    style(&caption, CAPTION_CSS)?;

    frame.append_child(&sizer)?;
    frame.append_child(&caption)?;
    Ok(frame)
}

fn about_card(document: &Document) -> Result<Element, JsValue> {
    let card = element(document, "div")?;
    card.set_class_name("caption");
    card.set_text_content(Some("Press Escape or click the backdrop to close."));
    style(&card, CARD_CSS)?;
    Ok(card)
}

fn on_click(target: &Element, mut f: impl FnMut() + 'static) -> Result<(), JsValue> {
    let cb = Closure::wrap(Box::new(move |_event: Event| f()) as Box<dyn FnMut(_)>);
    target.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

fn element(document: &Document, tag: &str) -> Result<Element, JsValue> {
    document.create_element(tag)
}

fn style(el: &Element, css: &str) -> Result<(), JsValue> {
    el.set_attribute("style", css)
}
