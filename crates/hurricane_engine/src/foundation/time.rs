//! Time management utilities
//!
//! [`Timer`] is the monotonic tick source the game loop samples once per
//! iteration. [`FpsCounter`] keeps a rolling average of recent frame times and
//! optionally caps the frame rate by sleeping off the remainder of a frame.

use std::time::{Duration, Instant};

/// Number of frame-time samples averaged by default
pub const DEFAULT_FPS_SAMPLES: usize = 100;

/// High-precision monotonic timer reporting milliseconds since `start`
#[derive(Debug, Clone)]
pub struct Timer {
    origin: Instant,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer, started immediately
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Restart the timer from zero
    pub fn start(&mut self) {
        self.origin = Instant::now();
    }

    /// Milliseconds elapsed since the timer was started
    pub fn ticks_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Smoothed frames-per-second counter with an optional frame-rate cap
///
/// Frame times are stored in a ring of `samples` entries. The reported rate is
/// `1000 / average`, where the average covers `min(frames_recorded, samples)`
/// entries. When the average is not positive the target rate is reported.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    target_fps: f32,
    frame_times: Vec<f32>,
    frames_recorded: usize,
    timer: Timer,
    frame_start: f64,
    prev_ticks: Option<f64>,
    frame_time_ms: f32,
    fps: f32,
}

impl FpsCounter {
    /// Create a counter averaging over [`DEFAULT_FPS_SAMPLES`] frames
    ///
    /// A `target_fps` of zero disables the frame-rate cap.
    pub fn init(target_fps: f32) -> Self {
        Self::new(target_fps, DEFAULT_FPS_SAMPLES)
    }

    /// Create a counter with a custom sample window
    pub fn new(target_fps: f32, samples: usize) -> Self {
        Self {
            target_fps: target_fps.max(0.0),
            frame_times: vec![0.0; samples.max(1)],
            frames_recorded: 0,
            timer: Timer::new(),
            frame_start: 0.0,
            prev_ticks: None,
            frame_time_ms: 0.0,
            fps: 0.0,
        }
    }

    /// Mark the start of a frame's work
    pub fn begin_frame(&mut self) {
        self.frame_start = self.timer.ticks_ms();
    }

    /// Finish the frame: sleep off the remaining budget if capped, then record
    /// the full frame time and return the smoothed rate
    pub fn end(&mut self) -> f32 {
        if self.target_fps > 0.0 {
            let budget_ms = 1000.0 / f64::from(self.target_fps);
            let work_ms = self.timer.ticks_ms() - self.frame_start;
            if budget_ms > work_ms {
                std::thread::sleep(Duration::from_secs_f64((budget_ms - work_ms) / 1000.0));
            }
        }

        let now = self.timer.ticks_ms();
        let since = self.prev_ticks.unwrap_or(self.frame_start);
        self.prev_ticks = Some(now);

        #[allow(clippy::cast_possible_truncation)]
        let sample = (now - since) as f32;
        self.record_sample(sample)
    }

    /// Record one frame time in milliseconds and return the smoothed rate
    pub fn record_sample(&mut self, frame_time_ms: f32) -> f32 {
        let window = self.frame_times.len();
        self.frame_times[self.frames_recorded % window] = frame_time_ms;
        self.frames_recorded += 1;
        self.frame_time_ms = frame_time_ms;

        let count = self.frames_recorded.min(window);
        let total: f32 = self.frame_times[..count].iter().sum();
        #[allow(clippy::cast_precision_loss)]
        let average = total / count as f32;

        self.fps = if average > 0.0 {
            1000.0 / average
        } else {
            self.target_fps
        };
        self.fps
    }

    /// Latest smoothed frames-per-second value
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Duration of the most recently recorded frame in milliseconds
    pub fn frame_time_ms(&self) -> f32 {
        self.frame_time_ms
    }

    /// Target rate; zero means uncapped
    pub fn target_fps(&self) -> f32 {
        self.target_fps
    }

    /// Number of frames recorded so far
    pub fn frames_recorded(&self) -> usize {
        self.frames_recorded
    }
}
