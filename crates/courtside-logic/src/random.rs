//! Injected randomness.
//!
//! Every stochastic engine draws through [`RandomSource`] instead of reaching
//! for a thread-local generator, so a fixed seed (or a scripted sequence in
//! tests) reproduces a run exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform draws in `[0.0, 1.0)`.
pub trait RandomSource {
    fn next(&mut self) -> f64;
}

/// Uniform draw in `[lo, hi)`.
pub fn uniform(rng: &mut impl RandomSource, lo: f64, hi: f64) -> f64 {
    lo + (hi - lo) * rng.next()
}

/// Uniform integer draw in `[lo, hi]` (inclusive).
pub fn uniform_int(rng: &mut impl RandomSource, lo: i64, hi: i64) -> i64 {
    if hi <= lo {
        return lo;
    }
    let span = (hi - lo + 1) as f64;
    let offset = (rng.next() * span).floor() as i64;
    lo + offset.min(hi - lo)
}

/// Bernoulli trial with probability `p`.
pub fn chance(rng: &mut impl RandomSource, p: f64) -> bool {
    rng.next() < p
}

/// Pick one element of a non-empty slice. Returns `None` for an empty slice.
pub fn pick<'a, T>(rng: &mut impl RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let idx = uniform_int(rng, 0, items.len() as i64 - 1) as usize;
    items.get(idx)
}

/// `StdRng`-backed source. The default for real seasons.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Always returns the same draw. `ConstantRandom(0.5)` makes every
/// symmetric variance term collapse to zero.
#[derive(Debug, Clone, Copy)]
pub struct ConstantRandom(pub f64);

impl RandomSource for ConstantRandom {
    fn next(&mut self) -> f64 {
        self.0
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    draws: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws, cursor: 0 }
    }
}

impl RandomSource for ScriptedRandom {
    fn next(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let value = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        value
    }
}
