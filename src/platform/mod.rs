//! Platform abstraction layer
//!
//! Frame pacing for the native host: sleep out the rest of each frame
//! interval and track the measured frame rate.

use std::time::{Duration, Instant};

/// Frames averaged for the measured FPS
const FPS_WINDOW: usize = 60;

/// Fixed frame-rate clock
#[derive(Debug)]
pub struct FrameClock {
    /// Target interval, `None` when unpaced
    interval: Option<Duration>,
    last_tick: Instant,
    // FPS tracking
    frame_times: [Duration; FPS_WINDOW],
    frame_index: usize,
    frames: u64,
}

impl FrameClock {
    /// Clock targeting `fps` frames per second, unpaced when `fps` is 0
    pub fn new(fps: u32) -> Self {
        Self {
            interval: (fps > 0).then(|| Duration::from_secs(1) / fps),
            last_tick: Instant::now(),
            frame_times: [Duration::ZERO; FPS_WINDOW],
            frame_index: 0,
            frames: 0,
        }
    }

    /// End the current frame, sleeping until its interval has passed
    ///
    /// Returns the full frame time including the sleep.
    pub fn tick(&mut self) -> Duration {
        if let Some(interval) = self.interval {
            let busy = self.last_tick.elapsed();
            if busy < interval {
                std::thread::sleep(interval - busy);
            }
        }

        let now = Instant::now();
        let frame_time = now - self.last_tick;
        self.last_tick = now;

        self.frame_times[self.frame_index] = frame_time;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;
        self.frames += 1;

        frame_time
    }

    /// Average frame rate over the last frames
    pub fn fps(&self) -> f64 {
        let count = (self.frames as usize).min(FPS_WINDOW);
        let total: Duration = self.frame_times[..count].iter().sum();
        if count == 0 || total.is_zero() {
            return 0.0;
        }
        count as f64 / total.as_secs_f64()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
