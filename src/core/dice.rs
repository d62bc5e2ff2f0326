//! Injectable random source for combat and mission rolls.
//!
//! Every `rand::Rng` is a `Dice`, so gameplay passes `&mut rand::thread_rng()`
//! and tests pass a seeded `ChaCha8Rng` or a [`ScriptedDice`].

use rand::Rng;
use std::collections::VecDeque;

pub trait Dice {
    /// Uniform draw in `[low, high]`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// True with the given probability (0.0..=1.0).
    fn chance(&mut self, probability: f64) -> bool;

    /// Index in `0..len`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: Rng> Dice for R {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.gen_range(low..=high)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.gen::<f64>() < probability
    }

    fn pick(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Replays fixed sequences of rolls.
///
/// `uniform` returns the next queued value clamped into the requested range,
/// `chance` the next queued outcome, `pick` the next queued index (wrapped
/// into range). When a queue runs dry it falls back to the range midpoint,
/// `false` and `0` respectively.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    uniforms: VecDeque<f64>,
    chances: VecDeque<bool>,
    picks: VecDeque<usize>,
}

impl ScriptedDice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_uniforms(mut self, values: &[f64]) -> Self {
        self.uniforms.extend(values.iter().copied());
        self
    }

    pub fn with_chances(mut self, outcomes: &[bool]) -> Self {
        self.chances.extend(outcomes.iter().copied());
        self
    }

    pub fn with_picks(mut self, indices: &[usize]) -> Self {
        self.picks.extend(indices.iter().copied());
        self
    }

    pub fn push_uniform(&mut self, value: f64) {
        self.uniforms.push_back(value);
    }

    pub fn push_chance(&mut self, outcome: bool) {
        self.chances.push_back(outcome);
    }

    /// True once every queued roll has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.uniforms.is_empty() && self.chances.is_empty() && self.picks.is_empty()
    }
}

impl Dice for ScriptedDice {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        match self.uniforms.pop_front() {
            Some(value) => value.clamp(low, high),
            None => (low + high) / 2.0,
        }
    }

    fn chance(&mut self, _probability: f64) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.picks.pop_front().map_or(0, |i| i % len.max(1))
    }
}

/// Draws an index from `weights` proportionally. Zero weights are never drawn.
/// Returns `None` when every weight is zero.
pub fn weighted_pick(dice: &mut impl Dice, weights: &[u32]) -> Option<usize> {
    let total: u32 = weights.iter().sum();
    if total == 0 {
        return None;
    }

    let mut roll = dice.pick(total as usize) as u32;
    for (index, &weight) in weights.iter().enumerate() {
        if roll < weight {
            return Some(index);
        }
        roll -= weight;
    }
    None
}
