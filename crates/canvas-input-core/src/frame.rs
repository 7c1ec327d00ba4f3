//! The per-input render task: draws every frame until cancelled.

use crate::render::{render_frame, RenderStyle, Surface};
use crate::state::EditorState;

/// Host primitive for "run me again before the next frame".
pub trait FrameScheduler {
    fn request_frame(&self);

    /// Called once when the loop stops.
    fn stop(&self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Drawn,
    /// No surface was available; the next frame is still scheduled.
    Skipped,
    Cancelled,
}

/// A cancellable, self-rescheduling render task.
///
/// Started when an input mounts; stopped by [`RenderLoop::cancel`] or by
/// dropping it, after which ticks do nothing and no frame is requested.
pub struct RenderLoop<S: FrameScheduler> {
    scheduler: S,
    active: bool,
    frames: u64,
}

impl<S: FrameScheduler> RenderLoop<S> {
    pub fn start(scheduler: S) -> Self {
        scheduler.request_frame();
        Self {
            scheduler,
            active: true,
            frames: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Frames actually drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn tick(
        &mut self,
        state: &mut EditorState,
        style: &RenderStyle,
        surface: Option<&mut dyn Surface>,
        now: f64,
    ) -> FrameOutcome {
        if !self.active {
            return FrameOutcome::Cancelled;
        }
        let outcome = match surface {
            Some(surface) => {
                render_frame(state, style, surface, now);
                self.frames += 1;
                FrameOutcome::Drawn
            }
            None => {
                tracing::trace!("No drawing surface, skipping frame");
                FrameOutcome::Skipped
            }
        };
        self.scheduler.request_frame();
        outcome
    }

    pub fn cancel(&mut self) {
        if self.active {
            tracing::debug!("Render loop stopped after {} frames", self.frames);
            self.scheduler.stop();
        }
        self.active = false;
    }
}

impl<S: FrameScheduler> Drop for RenderLoop<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}
