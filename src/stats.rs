use instant::Instant;

/// Counts frames and reports an average rate once per interval.
pub struct FrameStats {
    window_start: Instant,
    frames: u32,
    interval_sec: f32,
}

impl FrameStats {
    pub fn new(now: Instant, interval_sec: f32) -> Self {
        Self {
            window_start: now,
            frames: 0,
            interval_sec,
        }
    }

    /// Record one frame; returns frames per second when an interval closes.
    pub fn record(&mut self, now: Instant) -> Option<f32> {
        self.frames += 1;
        let elapsed = now.duration_since(self.window_start).as_secs_f32();
        if elapsed < self.interval_sec {
            return None;
        }
        let fps = self.frames as f32 / elapsed;
        self.window_start = now;
        self.frames = 0;
        Some(fps)
    }
}
