//! Frame-driven lifecycle shared by every effect.
//!
//! A [`Runner`] owns one effect and the platform frame primitive behind a
//! [`FrameScheduler`]. It keeps at most one frame request outstanding and
//! only re-arms while it is attached and visible, so cancelling an effect is
//! a phase change plus cancelling that single handle.

/// Step used for the first frame after attach or resume.
pub const NOMINAL_STEP: f64 = 1.0 / 60.0;
/// Shortest step a frame may advance by; only guards zero or backwards timestamps.
pub const MIN_STEP: f64 = 1.0 / 1000.0;
/// Longest step a frame may advance by; a stalled tab does not teleport entities.
pub const MAX_STEP: f64 = 1.0 / 15.0;

/// Drawable bounds of a surface in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// `None` when either side is zero, negative or not finite.
    pub fn from_css(width: f64, height: f64) -> Option<Size> {
        if !width.is_finite() || !height.is_finite() {
            return None;
        }
        let (w, h) = (width.round(), height.round());
        if w < 1.0 || h < 1.0 {
            return None;
        }
        Some(Size {
            width: w as u32,
            height: h as u32,
        })
    }

    pub fn aspect(self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Timing handed to [`Effect::frame`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTick {
    /// Frames delivered since attach, starting at 0.
    pub frame: u64,
    /// Seconds since the first frame; drives uniform-based effects.
    pub elapsed: f64,
    /// Seconds since the previous frame, clamped to `MIN_STEP..=MAX_STEP`.
    pub delta: f64,
}

impl FrameTick {
    /// `delta` expressed in 60 Hz frames.
    pub fn steps(&self) -> f32 {
        (self.delta / NOMINAL_STEP) as f32
    }
}

/// Turns platform timestamps (milliseconds) into [`FrameTick`]s.
#[derive(Debug, Default, Clone)]
pub struct FrameClock {
    start_ms: Option<f64>,
    last_ms: Option<f64>,
    frame: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, now_ms: f64) -> FrameTick {
        let start = *self.start_ms.get_or_insert(now_ms);
        let delta = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0).clamp(MIN_STEP, MAX_STEP),
            None => NOMINAL_STEP,
        };
        self.last_ms = Some(now_ms);
        let tick = FrameTick {
            frame: self.frame,
            elapsed: ((now_ms - start) / 1000.0).max(0.0),
            delta,
        };
        self.frame += 1;
        tick
    }

    /// Forget the previous timestamp so the pause is not replayed as one step.
    pub fn resume(&mut self) {
        self.last_ms = None;
    }
}

/// The platform's "call me on the next refresh" primitive.
pub trait FrameScheduler {
    type Handle: Copy;

    /// Request one callback. `None` if the platform refused.
    fn request(&mut self) -> Option<Self::Handle>;

    fn cancel(&mut self, handle: Self::Handle);
}

/// A procedural visual bound to one drawing surface.
pub trait Effect {
    /// New drawable bounds. Never called with a zero dimension.
    fn resize(&mut self, size: Size);

    /// Advance entity state by `tick` and draw.
    fn frame(&mut self, tick: &FrameTick);

    /// Free GPU/CPU resources. Called once, on detach.
    fn release(&mut self) {}
}

impl<E: Effect + ?Sized> Effect for Box<E> {
    fn resize(&mut self, size: Size) {
        (**self).resize(size)
    }

    fn frame(&mut self, tick: &FrameTick) {
        (**self).frame(tick)
    }

    fn release(&mut self) {
        (**self).release()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Detached,
}

/// Drives one [`Effect`] through attach, frames, resize, visibility and detach.
pub struct Runner<E: Effect, S: FrameScheduler> {
    effect: E,
    scheduler: S,
    phase: Phase,
    visible: bool,
    pending: Option<S::Handle>,
    clock: FrameClock,
    size: Option<Size>,
}

impl<E: Effect, S: FrameScheduler> Runner<E, S> {
    pub fn new(effect: E, scheduler: S) -> Self {
        Self {
            effect,
            scheduler,
            phase: Phase::Idle,
            visible: true,
            pending: None,
            clock: FrameClock::new(),
            size: None,
        }
    }

    pub fn attach(&mut self) {
        if self.phase != Phase::Idle {
            return;
        }
        self.phase = Phase::Running;
        self.schedule();
    }

    /// Frame callback. `now_ms` is the platform timestamp.
    pub fn frame(&mut self, now_ms: f64) {
        self.pending = None;
        if !self.is_active() {
            return;
        }
        let tick = self.clock.tick(now_ms);
        self.effect.frame(&tick);
        self.schedule();
    }

    /// Apply new container bounds. Returns false when they were ignored.
    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        if self.phase == Phase::Detached {
            return false;
        }
        let Some(size) = Size::from_css(width, height) else {
            log::trace!("ignoring degenerate resize {}x{}", width, height);
            return false;
        };
        self.size = Some(size);
        self.effect.resize(size);
        true
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        if !visible {
            self.cancel_pending();
        } else if self.phase == Phase::Running {
            self.clock.resume();
            self.schedule();
        }
    }

    pub fn detach(&mut self) {
        if self.phase == Phase::Detached {
            return;
        }
        self.cancel_pending();
        self.phase = Phase::Detached;
        self.effect.release();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn size(&self) -> Option<Size> {
        self.size
    }

    pub fn effect(&self) -> &E {
        &self.effect
    }

    pub fn effect_mut(&mut self) -> &mut E {
        &mut self.effect
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn is_active(&self) -> bool {
        self.phase == Phase::Running && self.visible
    }

    fn schedule(&mut self) {
        if self.pending.is_some() || !self.is_active() {
            return;
        }
        self.pending = self.scheduler.request();
        if self.pending.is_none() {
            log::warn!("frame request refused; effect stalls until next visibility change");
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }
}

impl<E: Effect, S: FrameScheduler> Drop for Runner<E, S> {
    fn drop(&mut self) {
        self.detach();
    }
}
