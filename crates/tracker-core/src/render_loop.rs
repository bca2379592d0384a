//! Cancellable frame loop on top of a host frame scheduler.
//!
//! The host invokes [`RenderLoop::tick`] from its frame callback. A tick
//! that returns `true` means "render now"; the next frame has already been
//! requested by then. After [`RenderLoop::stop`] returns, no tick reports a
//! frame, including one already queued by the host.

/// Host animation-frame scheduling (requestAnimationFrame and friends).
pub trait FrameScheduler {
    type Handle: Copy;

    /// Request one callback. `None` if the host cannot schedule frames.
    fn request_frame(&mut self) -> Option<Self::Handle>;
    fn cancel_frame(&mut self, handle: Self::Handle);
}

pub struct RenderLoop<S: FrameScheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
    running: bool,
    frames: u64,
}

impl<S: FrameScheduler> RenderLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
            running: false,
            frames: 0,
        }
    }

    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.schedule_next("first");
    }

    /// Called from the host frame callback. When the host refuses the next
    /// request the current frame still renders and the loop stops.
    pub fn tick(&mut self) -> bool {
        self.pending = None;
        if !self.running {
            return false;
        }
        self.schedule_next("next");
        self.frames += 1;
        true
    }

    fn schedule_next(&mut self, which: &str) {
        self.pending = self.scheduler.request_frame();
        if self.pending.is_none() {
            log::warn!("[render] host refused the {} frame request; loop stopped", which);
            self.running = false;
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}
