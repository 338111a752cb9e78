//! Random source backed by the thread-local RNG

use rand::Rng;

use crate::application::ports::outbound::RandomPort;

/// System random - uses real randomness.
#[derive(Debug, Clone, Copy)]
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn gen_range(&self, min: i32, max: i32) -> i32 {
        rand::thread_rng().gen_range(min..=max)
    }
}
