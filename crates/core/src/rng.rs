//! RNG module - seeded random numbers for spawn rolls and lane picks
//!
//! A small LCG keeps runs reproducible from a single `u32` seed, which the
//! tests and the `--seed` flag rely on.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 8) % max.max(1)
    }

    /// Roll a percentage: true with probability `chance`/100.
    pub fn roll_percent(&mut self, chance: u32) -> bool {
        self.next_range(100) < chance
    }

    /// Seed for an independent generator.
    ///
    /// The raw output is scrambled (murmur3 finalizer): seeding a child with it
    /// directly would make the child replay this stream one step ahead.
    pub fn next_seed(&mut self) -> u32 {
        let mut h = self.next_u32();
        h ^= h >> 16;
        h = h.wrapping_mul(0x85eb_ca6b);
        h ^= h >> 13;
        h = h.wrapping_mul(0xc2b2_ae35);
        h ^= h >> 16;
        h
    }

    /// Current state, usable as the seed of an identical generator.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
