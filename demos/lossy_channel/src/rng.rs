//! Deterministic jitter source
//!
//! xorshift64, so the same seed replays the same delays and drops on every
//! platform.

/// Seeded generator for channel jitter and loss
#[derive(Debug, Clone)]
pub struct JitterRng {
    state: u64,
}

impl JitterRng {
    pub fn new(seed: u64) -> Self {
        // xorshift requires a non-zero state
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform in [min, max)
    pub fn range_f64(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// True with the given probability
    pub fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = JitterRng::new(7);
        let mut b = JitterRng::new(7);
        for _ in 0..100 {
            assert_eq!(a.next_f64(), b.next_f64());
        }
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = JitterRng::new(0);
        assert_ne!(rng.next_u64(), 0);
    }

    #[test]
    fn test_range_bounds() {
        let mut rng = JitterRng::new(42);
        for _ in 0..1000 {
            let v = rng.range_f64(0.02, 0.08);
            assert!((0.02..0.08).contains(&v));
        }
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = JitterRng::new(3);
        for _ in 0..100 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
        }
    }
}
