//! Random source for ball velocity draws
//!
//! The simulation only ever needs uniform samples in `[0, 1)`. Production
//! matches use a seeded PCG stream; tests can replay a fixed sequence.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

pub trait RandomSource {
    /// Uniform sample in `[0, 1)`
    fn next_unit(&mut self) -> f32;
}

impl RandomSource for Pcg32 {
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Seeded PCG stream for reproducible matches
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays a fixed cycle of samples
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceSource {
    values: Vec<f32>,
    cursor: usize,
}

impl SequenceSource {
    /// Values outside `[0, 1)` are clamped into range; an empty cycle yields 0
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        let values = values
            .into()
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f32::EPSILON))
            .collect();
        Self { values, cursor: 0 }
    }
}

impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pcg_samples_in_unit_range() {
        let mut rng = seeded(7);
        for _ in 0..1000 {
            let v = rng.next_unit();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_sequence_cycles() {
        let mut seq = SequenceSource::new([0.1f32, 0.9]);
        assert_eq!(seq.next_unit(), 0.1);
        assert_eq!(seq.next_unit(), 0.9);
        assert_eq!(seq.next_unit(), 0.1);
    }

    #[test]
    fn test_sequence_clamps_and_handles_empty() {
        let mut seq = SequenceSource::new([2.0f32]);
        assert!(seq.next_unit() < 1.0);
        let mut empty = SequenceSource::new(Vec::<f32>::new());
        assert_eq!(empty.next_unit(), 0.0);
    }
}
