//! Fixed-timestep physics driver.
//!
//! Wall-clock frame time is fed into an accumulator and drained in whole
//! physics steps, so the simulation advances at a constant rate regardless of
//! how often [`GameLoop::tick`] is called. Long stalls are clamped to
//! `max_frame_time` rather than replayed in full.

use std::time::Instant;

use cinder_config::SimulationConfig;
use tracing::warn;

/// Accumulator-based fixed-rate loop.
pub struct GameLoop {
    fixed_dt: f64,
    max_frame_time: f64,
    previous_time: Instant,
    accumulator: f64,
    total_sim_time: f64,
    update_count: u64,
}

impl GameLoop {
    /// Creates a loop stepping every `fixed_dt` seconds, starting now.
    pub fn new(fixed_dt: f64, max_frame_time: f64) -> Self {
        Self {
            fixed_dt,
            max_frame_time,
            previous_time: Instant::now(),
            accumulator: 0.0,
            total_sim_time: 0.0,
            update_count: 0,
        }
    }

    /// Measures the time since the previous call and runs the steps it owes.
    ///
    /// `update_fn(dt)` is called zero or more times. Returns the number of
    /// steps run.
    pub fn tick(&mut self, update_fn: impl FnMut(f64)) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.previous_time).as_secs_f64();
        self.previous_time = now;
        self.advance(frame_time, update_fn)
    }

    /// Like [`tick`](Self::tick) with an explicit frame time.
    pub fn advance(&mut self, frame_time: f64, mut update_fn: impl FnMut(f64)) -> u32 {
        let mut frame_time = frame_time.max(0.0);
        if frame_time > self.max_frame_time {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                self.max_frame_time * 1000.0
            );
            frame_time = self.max_frame_time;
        }

        self.accumulator += frame_time;

        let mut steps = 0;
        while self.accumulator >= self.fixed_dt {
            update_fn(self.fixed_dt);
            self.total_sim_time += self.fixed_dt;
            self.accumulator -= self.fixed_dt;
            self.update_count += 1;
            steps += 1;
        }
        steps
    }

    /// Fixed step length in seconds.
    pub fn fixed_dt(&self) -> f64 {
        self.fixed_dt
    }

    /// Total number of steps run.
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Simulated seconds so far.
    pub fn total_sim_time(&self) -> f64 {
        self.total_sim_time
    }
}

impl From<&SimulationConfig> for GameLoop {
    fn from(config: &SimulationConfig) -> Self {
        Self::new(config.fixed_dt(), config.max_frame_time_s)
    }
}
