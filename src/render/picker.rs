//! Variant selection for glyph references.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks which variant set a glyph is drawn from.
pub trait VariantPicker {
    /// Pick an integer uniformly in `1..=count`. Callers guarantee `count >= 1`.
    fn pick(&mut self, count: usize) -> usize;
}

/// Uniform random picker over a standard RNG
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    /// Seeded from the operating system; output differs between runs.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Same seed, same input, same page.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            None => Self::from_entropy(),
            Some(seed) => Self::seeded(seed),
        }
    }
}

impl VariantPicker for RandomPicker {
    fn pick(&mut self, count: usize) -> usize {
        self.rng.gen_range(1..=count)
    }
}

/// Replays a fixed cycle of values, clamped into range
#[derive(Debug, Clone)]
pub struct SequencePicker {
    values: Vec<usize>,
    cursor: usize,
}

impl SequencePicker {
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl VariantPicker for SequencePicker {
    fn pick(&mut self, count: usize) -> usize {
        if self.values.is_empty() {
            return 1;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(1, count.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_picks_stay_in_range() {
        let mut picker = RandomPicker::from_entropy();
        for _ in 0..1000 {
            let variant = picker.pick(4);
            assert!((1..=4).contains(&variant), "variant {} out of range", variant);
        }
    }

    #[test]
    fn test_single_variant_always_one() {
        let mut picker = RandomPicker::seeded(42);
        assert!((0..50).all(|_| picker.pick(1) == 1));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RandomPicker::seeded(7);
        let mut b = RandomPicker::new(Some(7));
        let first: Vec<usize> = (0..32).map(|_| a.pick(10)).collect();
        let second: Vec<usize> = (0..32).map(|_| b.pick(10)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_covers_all_variants() {
        let mut picker = RandomPicker::seeded(3);
        let mut seen = [false; 3];
        for _ in 0..300 {
            seen[picker.pick(3) - 1] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_sequence_cycles_and_clamps() {
        let mut picker = SequencePicker::new(vec![2, 9, 0]);
        assert_eq!(picker.pick(3), 2);
        assert_eq!(picker.pick(3), 3);
        assert_eq!(picker.pick(3), 1);
        assert_eq!(picker.pick(3), 2);
    }

    #[test]
    fn test_empty_sequence_picks_first_variant() {
        let mut picker = SequencePicker::new(Vec::new());
        assert_eq!(picker.pick(5), 1);
    }
}
