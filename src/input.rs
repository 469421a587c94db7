//! Keyboard latch
//!
//! Key events arrive between frames. Held keys are tracked as booleans.
//! Fire presses are counted and restart is latched until the next frame
//! samples them.

use crate::sim::TickInput;

/// Logical game keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    TurnLeft,
    TurnRight,
    Thrust,
    Fire,
    Restart,
}

impl Key {
    /// Map a DOM-style key code (`KeyW`, `Space`, ...) to a game key
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "KeyA" => Some(Key::TurnLeft),
            "KeyD" => Some(Key::TurnRight),
            "KeyW" => Some(Key::Thrust),
            "Space" => Some(Key::Fire),
            "Enter" => Some(Key::Restart),
            _ => None,
        }
    }
}

/// Current key state between frames
#[derive(Debug, Clone, Default)]
pub struct InputState {
    turn_left: bool,
    turn_right: bool,
    thrust: bool,
    /// Fire presses not yet sampled
    fire: u32,
    restart: bool,
}

impl InputState {
    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::TurnLeft => self.turn_left = true,
            Key::TurnRight => self.turn_right = true,
            Key::Thrust => self.thrust = true,
            Key::Fire => self.fire = self.fire.saturating_add(1),
            Key::Restart => self.restart = true,
        }
    }

    /// Releasing an edge key does not cancel a press not yet sampled
    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::TurnLeft => self.turn_left = false,
            Key::TurnRight => self.turn_right = false,
            Key::Thrust => self.thrust = false,
            Key::Fire | Key::Restart => {}
        }
    }

    /// Peek at the pending restart edge without consuming it
    pub fn restart_pending(&self) -> bool {
        self.restart
    }

    /// Snapshot for one frame; clears one-shot inputs
    pub fn sample(&mut self) -> TickInput {
        let input = TickInput {
            turn_left: self.turn_left,
            turn_right: self.turn_right,
            thrust: self.thrust,
            fire: self.fire,
            restart: self.restart,
        };
        self.fire = 0;
        self.restart = false;
        input
    }
}
