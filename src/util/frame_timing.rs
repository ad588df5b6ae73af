use web_time::{Duration, Instant};

/// Smoothed FPS measurement with a periodic report window.
pub struct FrameTiming {
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    /// Frames since the last report
    frames_since_report: u32,
    /// Timestamp of the last report
    last_report: Instant,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTiming {
    /// Start timing from now.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_frame: now,
            smoothed_fps: 60.0,
            // 5% new value, 95% old value
            smoothing: 0.05,
            frames_since_report: 0,
            last_report: now,
        }
    }

    /// Call after rendering to update timing.
    pub fn end_frame(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.frames_since_report += 1;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Returns `(fps, frames)` once per `interval`, then starts a new window.
    pub fn take_report(&mut self, interval: Duration) -> Option<(f32, u32)> {
        if self.last_report.elapsed() < interval {
            return None;
        }
        let frames = self.frames_since_report;
        self.frames_since_report = 0;
        self.last_report = Instant::now();
        Some((self.smoothed_fps, frames))
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
