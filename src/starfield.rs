use crate::canvas::CanvasSurface;
use crate::constants::{STARS_CANVAS_ID, STAR_COUNT_ATTR, STAR_PRESET_ATTR};
use crate::core::{Starfield, StarfieldConfig};
use crate::dom::{self, WindowHost};
use crate::events::{self, ResizeListener};
use crate::frame::AnimationLoop;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub type PageStarfield = Starfield<CanvasSurface, StdRng>;

/// Everything that keeps the star field alive for the lifetime of the page.
struct StarfieldPage {
    _resize: ResizeListener,
    _frames: AnimationLoop,
}

thread_local! {
    static PAGE: RefCell<Option<StarfieldPage>> = const { RefCell::new(None) };
}

fn read_config(canvas: &web::HtmlCanvasElement) -> StarfieldConfig {
    let preset = canvas.get_attribute(STAR_PRESET_ATTR);
    let count = canvas.get_attribute(STAR_COUNT_ATTR);
    let (config, errors) = StarfieldConfig::from_attributes(preset.as_deref(), count.as_deref());
    for e in &errors {
        log::warn!("[starfield] {}; keeping the default for it", e);
    }
    config
}

/// Start the star-field background on `#stars-canvas`.
///
/// Returns whether a star field is running afterwards. Pages without the
/// canvas (or a 2-D context) get nothing; a second call is a no-op.
pub fn mount(window: &web::Window, document: &web::Document) -> bool {
    if PAGE.with(|p| p.borrow().is_some()) {
        log::debug!("[starfield] already mounted");
        return true;
    }
    let Some(canvas) = dom::canvas_by_id(document, STARS_CANVAS_ID) else {
        log::debug!("[starfield] no #{} on this page", STARS_CANVAS_ID);
        return false;
    };
    let config = read_config(&canvas);
    let surface = CanvasSurface::new(canvas);
    let host = WindowHost::new(window.clone());

    let starfield: Rc<RefCell<PageStarfield>> =
        Rc::new(RefCell::new(Starfield::new(config, StdRng::from_entropy())));

    let starfield_frame = starfield.clone();
    let frames = AnimationLoop::new(move |time_ms, scheduler| {
        starfield_frame.borrow_mut().render_frame(time_ms, scheduler);
    });
    let mut scheduler = frames.scheduler();
    if !starfield
        .borrow_mut()
        .initialize(surface, &host, &mut scheduler)
    {
        return false;
    }

    let starfield_resize = starfield.clone();
    let starfield_quiet = starfield;
    let mut quiet_scheduler = frames.scheduler();
    let resize = events::wire_resize(
        window,
        move || starfield_resize.borrow_mut().resize_event(instant::now()),
        move || {
            starfield_quiet
                .borrow_mut()
                .resize_elapsed(instant::now(), &host, &mut quiet_scheduler)
                .retry_after()
        },
    );

    PAGE.with(|p| {
        *p.borrow_mut() = Some(StarfieldPage {
            _resize: resize,
            _frames: frames,
        })
    });
    true
}
