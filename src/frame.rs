use crate::core::FrameScheduler;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Requests `requestAnimationFrame` callbacks for the loop's tick closure.
#[derive(Clone, Default)]
pub struct RafScheduler {
    tick: TickSlot,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) {
        let Some(window) = web::window() else {
            return;
        };
        let tick = self.tick.borrow();
        let Some(cb) = tick.as_ref() else {
            return;
        };
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => self.pending.set(Some(id)),
            Err(e) => log::warn!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }
}

/// Owns the per-frame callback. Dropping it cancels any pending frame and
/// releases the callback, which ends the loop.
pub struct AnimationLoop {
    scheduler: RafScheduler,
}

impl AnimationLoop {
    /// Install `step`, called with the frame timestamp (ms). Nothing runs
    /// until someone calls `request_frame` on [`AnimationLoop::scheduler`].
    pub fn new(mut step: impl FnMut(f64, &mut RafScheduler) + 'static) -> Self {
        let scheduler = RafScheduler::default();
        let mut tick_scheduler = scheduler.clone();
        *scheduler.tick.borrow_mut() = Some(Closure::wrap(Box::new(move |time_ms: f64| {
            tick_scheduler.pending.set(None);
            step(time_ms, &mut tick_scheduler);
        }) as Box<dyn FnMut(f64)>));
        Self { scheduler }
    }

    pub fn scheduler(&self) -> RafScheduler {
        self.scheduler.clone()
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let Some(id) = self.scheduler.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // Breaks the closure <-> scheduler Rc cycle
        self.scheduler.tick.borrow_mut().take();
    }
}
