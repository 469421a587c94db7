//! Game loop orchestration
//!
//! A session owns the game state and the three schedules that drive it: the
//! frame clock, the difficulty/theme ticker and the self-rescheduling
//! asteroid spawner. All of them run on simulated time.

use rand::RngCore;

use crate::consts::FRAME_MS;
use crate::input::InputState;
use crate::schedule::{FrameClock, Interval, Timeout};
use crate::sim::{GameState, TickInput, Viewport, ramp_difficulty, spawn_asteroid, tick};
use crate::tuning::Tuning;

/// One run of the game plus its timers
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    tuning: Tuning,
    clock: FrameClock,
    difficulty: Interval,
    spawner: Timeout,
}

impl Session {
    pub fn new(seed: u64, viewport: Viewport, tuning: Tuning) -> Self {
        log::info!("New run with seed {seed}");
        Self {
            state: GameState::new(seed, viewport, &tuning),
            clock: FrameClock::default(),
            difficulty: Interval::new(tuning.difficulty_period_ms),
            spawner: Timeout::armed(tuning.spawn_interval_ms),
            tuning,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Whether frames are still being scheduled
    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    /// The play area changed size; takes effect on the next frame
    pub fn resize(&mut self, viewport: Viewport) {
        self.state.viewport = viewport;
    }

    /// Feed elapsed wall time; runs every frame that became due
    ///
    /// Returns the number of frames simulated. After game over no frames run;
    /// a restart press starts a new run instead.
    pub fn advance(&mut self, elapsed_ms: f32, input: &mut InputState) -> u32 {
        if self.state.is_over() {
            if input.sample().restart {
                self.restart();
            }
            return 0;
        }

        let due = self.clock.advance(elapsed_ms);
        let mut ran = 0;
        for _ in 0..due {
            let frame_input = input.sample();
            self.step(&frame_input);
            ran += 1;
            if self.state.is_over() {
                break;
            }
        }
        ran
    }

    /// Run exactly one frame: timers first, then the simulation tick
    pub fn step(&mut self, input: &TickInput) {
        if self.state.is_over() {
            return;
        }

        for _ in 0..self.difficulty.advance(FRAME_MS) {
            ramp_difficulty(&mut self.state, &self.tuning);
        }

        if self.spawner.advance(FRAME_MS) {
            spawn_asteroid(&mut self.state, &self.tuning);
            self.spawner.arm(self.state.spawn_interval_ms);
        }

        tick(&mut self.state, input, &self.tuning);

        if self.state.is_over() {
            self.halt();
        }
    }

    /// Begin a new run, seeded from the current one
    pub fn restart(&mut self) {
        let seed = self.state.rng.next_u64();
        log::info!("Restarting after score {}", self.state.score.value);
        *self = Self::new(seed, self.state.viewport, self.tuning.clone());
    }

    fn halt(&mut self) {
        self.clock.cancel();
        self.spawner.cancel();
        self.difficulty.cancel();
        log::debug!("Timers cancelled at frame {}", self.state.frame);
    }
}
