use crate::constants::{REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_SHOWN_CLASS, REVEAL_THRESHOLD};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn show(el: &web::Element) {
    _ = el.class_list().add_1(REVEAL_SHOWN_CLASS);
}

fn has_intersection_observer(window: &web::Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Reveal `.reveal` elements the first time they scroll into view.
/// Without `IntersectionObserver` every element is shown immediately.
pub fn wire_scroll_reveal(window: &web::Window, document: &web::Document) {
    let targets = dom::query_all(document, REVEAL_SELECTOR);
    if targets.is_empty() {
        return;
    }
    if !has_intersection_observer(window) {
        targets.iter().for_each(show);
        return;
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    show(&target);
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);
    match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            for el in &targets {
                observer.observe(el);
            }
            callback.forget();
        }
        Err(e) => {
            log::warn!("[reveal] IntersectionObserver unavailable: {:?}", e);
            targets.iter().for_each(show);
        }
    }
}
