//! Randomness sources for the mock pipeline and category detection.

use std::sync::Mutex;

use ars_core::ports::RandomPort;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Thread-local RNG; what the app uses at runtime.
#[derive(Debug, Default)]
pub struct ThreadRandom;

impl RandomPort for ThreadRandom {
    fn index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::rng().random_range(0..len)
    }

    fn percent(&self) -> u32 {
        rand::rng().random_range(0..100)
    }
}

/// Reproducible RNG for scripted runs and distribution tests.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, draw: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        draw(&mut rng)
    }
}

impl RandomPort for SeededRandom {
    fn index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.with_rng(|rng| rng.random_range(0..len))
    }

    fn percent(&self) -> u32 {
        self.with_rng(|rng| rng.random_range(0..100))
    }
}
