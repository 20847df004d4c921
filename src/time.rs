//! Frame timing and the diagnostic frame-rate readout.

use std::time::{Duration, Instant};

/// Per-frame timer with a periodically refreshed FPS figure.
///
/// Call [`FrameTimer::tick`] once per frame. The FPS value is averaged over
/// a fixed window rather than recomputed every frame, so the readout is
/// stable enough to display.
#[derive(Debug)]
pub struct FrameTimer {
    start: Instant,
    last_frame: Instant,
    delta_secs: f32,
    frame_count: u64,
    fps: f32,
    fps_frame_count: u64,
    fps_update_time: Instant,
    fps_update_interval: Duration,
}

impl FrameTimer {
    /// Create a timer starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            delta_secs: 0.0,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_millis(500),
        }
    }

    /// Record a frame. Returns the delta time in seconds.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        self.delta_secs = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frame_count += 1;

        let window = now.duration_since(self.fps_update_time);
        if window >= self.fps_update_interval {
            let frames = self.frame_count - self.fps_frame_count;
            self.fps = frames as f32 / window.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
        }

        self.delta_secs
    }

    /// Seconds since the previous frame.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Seconds since the timer was created.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Frames recorded since the timer was created.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Frames per second, refreshed every half second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn starts_at_frame_zero() {
        let timer = FrameTimer::new();
        assert_eq!(timer.frame(), 0);
        assert_eq!(timer.fps(), 0.0);
    }

    #[test]
    fn tick_advances_frame_and_delta() {
        let mut timer = FrameTimer::new();
        thread::sleep(Duration::from_millis(5));
        let delta = timer.tick();
        assert!(delta > 0.0);
        assert_eq!(timer.frame(), 1);
        assert!(timer.elapsed() >= delta);
    }

    #[test]
    fn fps_updates_after_the_window() {
        let mut timer = FrameTimer::new();
        timer.fps_update_interval = Duration::from_millis(10);
        for _ in 0..5 {
            thread::sleep(Duration::from_millis(4));
            timer.tick();
        }
        assert!(timer.fps() > 0.0);
    }
}
