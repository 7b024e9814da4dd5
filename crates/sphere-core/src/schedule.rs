//! Frame scheduling seam between the simulation and the host's display loop.

use std::cell::Cell;
use std::rc::Rc;

/// Cancellation token returned by [`FrameScheduler::schedule`]. Clones share
/// the same flag.
#[derive(Clone, Debug, Default)]
pub struct FrameHandle {
    cancelled: Rc<Cell<bool>>,
}

impl FrameHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Invokes a callback once per display refresh until its handle is cancelled.
pub trait FrameScheduler {
    fn schedule(&mut self, frame: Box<dyn FnMut()>) -> FrameHandle;
}

/// Scheduler driven by explicit [`ManualScheduler::tick`] calls.
#[derive(Default)]
pub struct ManualScheduler {
    frames: Vec<(FrameHandle, Box<dyn FnMut()>)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every live callback once, dropping cancelled ones. Returns how many
    /// ran.
    pub fn tick(&mut self) -> usize {
        self.frames.retain(|(handle, _)| !handle.is_cancelled());
        let mut ran = 0;
        for (handle, frame) in &mut self.frames {
            if handle.is_cancelled() {
                continue;
            }
            frame();
            ran += 1;
        }
        ran
    }

    pub fn pending(&self) -> usize {
        self.frames
            .iter()
            .filter(|(handle, _)| !handle.is_cancelled())
            .count()
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule(&mut self, frame: Box<dyn FnMut()>) -> FrameHandle {
        let handle = FrameHandle::default();
        self.frames.push((handle.clone(), frame));
        handle
    }
}
