//! Simulated clock and timers
//!
//! Wall-clock time never reaches the simulation directly. Callers feed
//! elapsed milliseconds in; the frame clock turns them into whole frames and
//! the timers fire on simulated time, so tests can drive everything exactly.

use serde::{Deserialize, Serialize};

use crate::consts::{FRAME_MS, MAX_ELAPSED_MS, MAX_SUBSTEPS};

/// Fixed-step frame scheduler with an accumulator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameClock {
    accumulator: f32,
    running: bool,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            accumulator: 0.0,
            running: true,
        }
    }
}

impl FrameClock {
    /// Add elapsed time and return how many frames are due
    ///
    /// Large gaps are clamped, and at most `MAX_SUBSTEPS` frames run per
    /// call. A cancelled clock yields nothing.
    pub fn advance(&mut self, elapsed_ms: f32) -> u32 {
        if !self.running {
            return 0;
        }
        self.accumulator += elapsed_ms.clamp(0.0, MAX_ELAPSED_MS);

        let mut frames = 0;
        while self.accumulator >= FRAME_MS && frames < MAX_SUBSTEPS {
            self.accumulator -= FRAME_MS;
            frames += 1;
        }
        frames
    }

    pub fn cancel(&mut self) {
        self.running = false;
        self.accumulator = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// Repeating timer with a fixed period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interval {
    period_ms: f32,
    elapsed_ms: f32,
    running: bool,
}

impl Interval {
    pub fn new(period_ms: f32) -> Self {
        Self {
            period_ms,
            elapsed_ms: 0.0,
            running: true,
        }
    }

    /// Advance by `dt_ms` and return how many periods completed
    pub fn advance(&mut self, dt_ms: f32) -> u32 {
        if !self.running || self.period_ms <= 0.0 {
            return 0;
        }
        self.elapsed_ms += dt_ms;
        let mut fires = 0;
        while self.elapsed_ms >= self.period_ms {
            self.elapsed_ms -= self.period_ms;
            fires += 1;
        }
        fires
    }

    pub fn cancel(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// One-shot timer that can be re-armed with a new delay each time it fires
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timeout {
    remaining_ms: Option<f32>,
}

impl Timeout {
    pub fn armed(delay_ms: f32) -> Self {
        Self {
            remaining_ms: Some(delay_ms),
        }
    }

    /// Schedule (or reschedule) the timer `delay_ms` from now
    pub fn arm(&mut self, delay_ms: f32) {
        self.remaining_ms = Some(delay_ms);
    }

    pub fn cancel(&mut self) {
        self.remaining_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.remaining_ms.is_some()
    }

    /// Time left before the timer fires, if armed
    pub fn remaining_ms(&self) -> Option<f32> {
        self.remaining_ms
    }

    /// Advance by `dt_ms`; returns true and disarms when the delay runs out
    pub fn advance(&mut self, dt_ms: f32) -> bool {
        match self.remaining_ms.as_mut() {
            Some(remaining) => {
                *remaining -= dt_ms;
                if *remaining <= 0.0 {
                    self.remaining_ms = None;
                    true
                } else {
                    false
                }
            }
            None => false,
        }
    }
}
