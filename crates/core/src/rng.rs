//! RNG module - uniform random shape selection
//!
//! A small LCG keeps the core free of I/O and makes games reproducible from a
//! seed. Every spawn picks a kind uniformly; there is no bag.

use crate::types::ShapeKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Nearby seeds must not start nearby states.
        let state = scramble(seed);
        Self {
            state: if state == 0 { 1 } else { state },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Random value in [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Scale instead of `%`: the low LCG bits have short periods.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Pick one element uniformly
    ///
    /// # Panics
    ///
    /// If `items` is empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.next_range(items.len() as u32) as usize]
    }

    pub fn shape_kind(&mut self) -> ShapeKind {
        *self.pick(&ShapeKind::ALL)
    }

    /// Current state (for reproducing a game)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// splitmix32-style finalizer
fn scramble(seed: u32) -> u32 {
    let mut x = seed.wrapping_add(0x9e37_79b9);
    x = (x ^ (x >> 16)).wrapping_mul(0x85eb_ca6b);
    x = (x ^ (x >> 13)).wrapping_mul(0xc2b2_ae35);
    x ^ (x >> 16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_every_kind_shows_up() {
        let mut rng = SimpleRng::new(2024);
        let mut seen = [false; 7];
        for _ in 0..500 {
            let kind = rng.shape_kind();
            let i = ShapeKind::ALL.iter().position(|&k| k == kind).unwrap();
            seen[i] = true;
        }
        assert!(seen.iter().all(|&s| s), "missing kinds: {:?}", seen);
    }

    #[test]
    fn test_consecutive_seeds_open_with_every_kind() {
        let mut counts = [0usize; 7];
        for seed in 1..=1000 {
            let kind = SimpleRng::new(seed).shape_kind();
            let i = ShapeKind::ALL.iter().position(|&k| k == kind).unwrap();
            counts[i] += 1;
        }
        // About 143 each when uniform.
        assert!(counts.iter().all(|&n| n >= 70), "first kinds: {:?}", counts);
    }

    #[test]
    fn test_nearby_seeds_diverge() {
        assert_ne!(SimpleRng::new(1).state(), SimpleRng::new(2).state());
        assert_ne!(SimpleRng::new(1).next_u32() >> 28, SimpleRng::new(2).next_u32() >> 28);
    }
}
