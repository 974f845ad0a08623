use crate::constants::REDUCED_MOTION_QUERY;
use crate::core::{Bounds, Host};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
}

/// `innerWidth` x `innerHeight`, or `None` if the window cannot report them.
pub fn viewport_bounds(window: &web::Window) -> Option<Bounds> {
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    if !(w.is_finite() && h.is_finite()) {
        return None;
    }
    Some(Bounds::new(w.max(0.0) as u32, h.max(0.0) as u32))
}

/// Unsupported media queries read as "no preference".
pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

#[inline]
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

/// The browser window as seen by the star field.
#[derive(Clone)]
pub struct WindowHost {
    window: web::Window,
}

impl WindowHost {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl Host for WindowHost {
    fn viewport(&self) -> Option<Bounds> {
        viewport_bounds(&self.window)
    }

    fn prefers_reduced_motion(&self) -> bool {
        prefers_reduced_motion(&self.window)
    }
}
