#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
pub mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod reveal;
mod starfield;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hexra-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window: web::Window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Independent behaviors; none of them touch the star-field canvas except the first.
    starfield::mount(&window, &document);
    events::wire_header_shadow(&window, &document);
    reveal::wire_scroll_reveal(&window, &document);

    Ok(())
}
