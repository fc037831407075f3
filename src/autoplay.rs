//! Naive autoplayer used by the headless runner.

use blockfall::core::SimpleRng;
use blockfall::types::Command;

/// Picks commands at random, biased toward dropping.
#[derive(Debug, Clone)]
pub struct Autoplayer {
    rng: SimpleRng,
}

impl Autoplayer {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed ^ 0x9e37_79b9),
        }
    }

    pub fn next_command(&mut self) -> Command {
        match self.rng.next_range(8) {
            0 | 1 => Command::MoveLeft,
            2 | 3 => Command::MoveRight,
            4 => Command::Rotate,
            5 => Command::HardDrop,
            _ => Command::MoveDown,
        }
    }
}
