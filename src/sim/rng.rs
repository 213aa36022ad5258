//! Pluggable random source for obstacle generation
//!
//! The simulation only ever asks for uniform integers in a half-open range,
//! so tests can script the exact sequence a spawn consumes.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform integers for spawning
pub trait SpawnRng {
    /// Uniform integer in `[lo, hi)`. Returns `lo` when the range is empty.
    fn range(&mut self, lo: u32, hi: u32) -> u32;
}

impl SpawnRng for Pcg32 {
    fn range(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        self.random_range(lo..hi)
    }
}

/// Seeded generator used by the game driver
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays a fixed list of raw values
///
/// Each value is reduced into the requested range, so a script can be written
/// as offsets (`0` = `lo`). Once exhausted it keeps returning `lo`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    values: VecDeque<u32>,
}

impl ScriptedRng {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Values not consumed yet
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl SpawnRng for ScriptedRng {
    fn range(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        match self.values.pop_front() {
            Some(v) => lo + v % (hi - lo),
            None => lo,
        }
    }
}
