//! Auto-drop timer state
//!
//! The session owns exactly one [`DropTimer`] and arms or disarms it on every
//! lifecycle transition. Hosts read it after each call to schedule their own
//! clock: `generation` changes on every arm/disarm, so a deadline computed
//! for an older generation is stale and must be dropped.

use std::time::Duration;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct DropTimer {
    armed: bool,
    interval_ms: u32,
    generation: u64,
}

impl DropTimer {
    /// Arm (or re-arm) with a new interval
    pub fn arm(&mut self, interval_ms: u32) {
        self.armed = true;
        self.interval_ms = interval_ms;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Stop the timer; a disarmed timer stays disarmed
    pub fn disarm(&mut self) {
        if self.armed {
            self.armed = false;
            self.generation = self.generation.wrapping_add(1);
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms as u64)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
