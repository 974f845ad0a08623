use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TimerSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

#[derive(Clone)]
struct TimerState {
    window: web::Window,
    handle: Rc<Cell<Option<i32>>>,
    callback: TimerSlot,
}

impl TimerState {
    fn arm(&self, delay_ms: f64) {
        let callback = self.callback.borrow();
        let Some(cb) = callback.as_ref() else {
            return;
        };
        let timeout = delay_ms.max(0.0).ceil() as i32;
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), timeout)
        {
            Ok(id) => self.handle.set(Some(id)),
            Err(e) => log::warn!("[resize] setTimeout failed: {:?}", e),
        }
    }

    fn cancel(&self) {
        if let Some(id) = self.handle.take() {
            self.window.clear_timeout_with_handle(id);
        }
    }
}

/// One-shot `setTimeout` that is cancelled and re-armed on every reschedule.
///
/// When `on_elapsed` returns a delay the timer arms itself again for it.
pub struct DebounceTimer {
    state: TimerState,
}

impl DebounceTimer {
    pub fn new(window: web::Window, mut on_elapsed: impl FnMut() -> Option<f64> + 'static) -> Self {
        let state = TimerState {
            window,
            handle: Rc::new(Cell::new(None)),
            callback: Rc::new(RefCell::new(None)),
        };
        let rearm = state.clone();
        *state.callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            rearm.handle.set(None);
            if let Some(delay_ms) = on_elapsed() {
                rearm.arm(delay_ms);
            }
        }) as Box<dyn FnMut()>));
        Self { state }
    }

    pub fn reschedule(&self, delay_ms: f64) {
        self.state.cancel();
        self.state.arm(delay_ms);
    }
}

impl Drop for DebounceTimer {
    fn drop(&mut self) {
        self.state.cancel();
        // Breaks the closure <-> state Rc cycle
        self.state.callback.borrow_mut().take();
    }
}

/// Window `resize` listener feeding a [`DebounceTimer`]. Removed on drop.
pub struct ResizeListener {
    window: web::Window,
    listener: Closure<dyn FnMut()>,
    _timer: Rc<DebounceTimer>,
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        _ = self
            .window
            .remove_event_listener_with_callback("resize", self.listener.as_ref().unchecked_ref());
    }
}

/// `on_resize` runs for every event and returns the quiet period to wait
/// (`None` to ignore the event); `on_quiet` runs once the burst has settled
/// and may ask for a further wait.
pub fn wire_resize(
    window: &web::Window,
    mut on_resize: impl FnMut() -> Option<f64> + 'static,
    on_quiet: impl FnMut() -> Option<f64> + 'static,
) -> ResizeListener {
    let timer = Rc::new(DebounceTimer::new(window.clone(), on_quiet));
    let timer_listener = timer.clone();
    let listener = Closure::wrap(Box::new(move || {
        if let Some(delay_ms) = on_resize() {
            timer_listener.reschedule(delay_ms);
        }
    }) as Box<dyn FnMut()>);
    if let Err(e) =
        window.add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
    {
        log::warn!("[resize] addEventListener failed: {:?}", e);
    }
    ResizeListener {
        window: window.clone(),
        listener,
        _timer: timer,
    }
}
