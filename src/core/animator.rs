use crate::core::config::StarfieldConfig;
use crate::core::debounce::{DebouncePoll, Debouncer};
use crate::core::particle::{generate_particles, Bounds, Particle, Rgba};
use crate::core::twinkle::frame_opacity;
use glam::Vec2;
use rand::Rng;

/// 2-D drawing target the star field paints into.
pub trait Surface {
    fn resize(&mut self, bounds: Bounds);
    fn clear(&mut self);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
}

/// What the star field reads from its environment.
pub trait Host {
    /// `None` when the host cannot report viewport dimensions.
    fn viewport(&self) -> Option<Bounds>;
    fn prefers_reduced_motion(&self) -> bool;
}

/// Display-refresh callback queue.
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

/// What a call to [`Starfield::resize_elapsed`] did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ResizeOutcome {
    /// No resize was pending, or the field is idle, or the viewport vanished.
    Skipped,
    Regenerated,
    /// The quiet period is not over by the field's clock; call again after this many ms.
    RetryAfter(f64),
}

impl ResizeOutcome {
    pub fn retry_after(self) -> Option<f64> {
        match self {
            ResizeOutcome::RetryAfter(ms) => Some(ms),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimatorState {
    Idle,
    Running { reduced_motion: bool },
}

pub struct Starfield<S, R> {
    config: StarfieldConfig,
    rng: R,
    state: AnimatorState,
    surface: Option<S>,
    bounds: Bounds,
    particles: Vec<Particle>,
    resize: Debouncer,
    generations: u64,
    frames_rendered: u64,
}

impl<S: Surface, R: Rng> Starfield<S, R> {
    pub fn new(config: StarfieldConfig, rng: R) -> Self {
        let resize = Debouncer::new(config.resize_debounce_ms);
        Self {
            config,
            rng,
            state: AnimatorState::Idle,
            surface: None,
            bounds: Bounds::default(),
            particles: Vec::new(),
            resize,
            generations: 0,
            frames_rendered: 0,
        }
    }

    pub fn state(&self) -> AnimatorState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, AnimatorState::Running { .. })
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// How many particle sets have been generated, the initial one included.
    pub fn generations(&self) -> u64 {
        self.generations
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Start the star field on `surface`.
    ///
    /// Without a surface or viewport support this does nothing and the field
    /// stays idle. Calling it again once running is a no-op. Returns whether
    /// this call started the field.
    pub fn initialize(
        &mut self,
        surface: Option<S>,
        host: &impl Host,
        scheduler: &mut impl FrameScheduler,
    ) -> bool {
        if self.is_running() {
            log::debug!("[starfield] already running; initialize ignored");
            return false;
        }
        let Some(surface) = surface else {
            log::debug!("[starfield] no drawing surface; staying idle");
            return false;
        };
        let Some(bounds) = host.viewport() else {
            log::debug!("[starfield] viewport size unavailable; staying idle");
            return false;
        };
        let reduced_motion = host.prefers_reduced_motion();
        self.surface = Some(surface);
        self.state = AnimatorState::Running { reduced_motion };
        self.regenerate(bounds);
        log::info!(
            "[starfield] running: stars={} size={}x{} reduced_motion={}",
            self.particles.len(),
            bounds.width,
            bounds.height,
            reduced_motion
        );
        if reduced_motion {
            self.render_frame(0.0, scheduler);
        } else {
            scheduler.request_frame();
        }
        true
    }

    /// Draw one frame at animation time `time_ms`, then ask for the next one
    /// unless reduced motion is active.
    pub fn render_frame(&mut self, time_ms: f64, scheduler: &mut impl FrameScheduler) {
        let AnimatorState::Running { reduced_motion } = self.state else {
            return;
        };
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        surface.clear();
        for p in &self.particles {
            let opacity = frame_opacity(p, time_ms, &self.config.twinkle);
            if let Some(glow) = &self.config.glow {
                if p.radius > glow.min_radius {
                    surface.fill_circle(
                        p.position,
                        p.radius * glow.radius_scale,
                        p.color.with_alpha(opacity * glow.alpha_scale),
                    );
                }
            }
            surface.fill_circle(p.position, p.radius, p.color.with_alpha(opacity));
        }
        self.frames_rendered += 1;
        if !reduced_motion {
            scheduler.request_frame();
        }
    }

    /// Note a viewport resize at `now_ms`. Returns the delay after which the
    /// host should call [`Starfield::resize_elapsed`]; `None` while idle.
    pub fn resize_event(&mut self, now_ms: f64) -> Option<f64> {
        if !self.is_running() {
            return None;
        }
        Some(self.resize.trigger(now_ms))
    }

    /// Regenerate for the new viewport once the resize burst has gone quiet.
    ///
    /// A host timer can expire before `now_ms` reaches the deadline (coarse
    /// clocks); the pending resize is then kept and `RetryAfter` says when to
    /// call again.
    pub fn resize_elapsed(
        &mut self,
        now_ms: f64,
        host: &impl Host,
        scheduler: &mut impl FrameScheduler,
    ) -> ResizeOutcome {
        let AnimatorState::Running { reduced_motion } = self.state else {
            return ResizeOutcome::Skipped;
        };
        match self.resize.poll(now_ms) {
            DebouncePoll::Due => {}
            DebouncePoll::Idle => return ResizeOutcome::Skipped,
            DebouncePoll::Wait(ms) => return ResizeOutcome::RetryAfter(ms),
        }
        let Some(bounds) = host.viewport() else {
            log::warn!("[starfield] viewport size unavailable after resize");
            return ResizeOutcome::Skipped;
        };
        self.regenerate(bounds);
        log::debug!(
            "[starfield] regenerated {} stars for {}x{}",
            self.particles.len(),
            bounds.width,
            bounds.height
        );
        // The loop is not running under reduced motion, so repaint once here.
        if reduced_motion {
            self.render_frame(0.0, scheduler);
        }
        ResizeOutcome::Regenerated
    }

    fn regenerate(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(bounds);
        }
        self.particles = generate_particles(self.config.count, bounds, &self.config, &mut self.rng);
        self.generations += 1;
    }
}
