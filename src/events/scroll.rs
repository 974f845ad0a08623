use crate::constants::{header_scrolled, HEADER_SCROLLED_CLASS, HEADER_SELECTOR};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn sync_header_shadow(window: &web::Window, header: &web::Element) {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    _ = header
        .class_list()
        .toggle_with_force(HEADER_SCROLLED_CLASS, header_scrolled(scroll_y));
}

/// Toggle the header drop shadow with the scroll position. Pages without a
/// `.header` are left alone.
pub fn wire_header_shadow(window: &web::Window, document: &web::Document) {
    let Ok(Some(header)) = document.query_selector(HEADER_SELECTOR) else {
        return;
    };
    sync_header_shadow(window, &header);

    let window_cb = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        sync_header_shadow(&window_cb, &header);
    }) as Box<dyn FnMut()>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}
