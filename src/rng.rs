//! Deterministic pseudo-randomness for scene generation.
//!
//! A 32-bit linear congruential generator is plenty for decorative layout
//! work and keeps generation reproducible under a fixed seed.

/// Small linear congruential generator.
#[derive(Debug, Clone, Copy)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    fn step(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform draw in [0, 1).
    pub fn next_f32(&mut self) -> f32 {
        // Top 24 bits give an exactly representable value below 1.0
        (self.step() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform draw in [min, max).
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// Uniform index in [0, len).
    pub fn index(&mut self, len: usize) -> usize {
        (self.next_f32() * len as f32) as usize % len.max(1)
    }
}
