use nanorand::{Rng, WyRand};

pub struct Random {
    generator: WyRand,
}

impl Random {
    pub fn new() -> Self {
        Self {
            generator: WyRand::new(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            generator: WyRand::new_seed(seed),
        }
    }

    pub fn generate(&mut self) -> f32 {
        self.generator.generate()
    }

    /// Uniform value in `[-range, range]`.
    pub fn spread(&mut self, range: f32) -> f32 {
        range * (2.0 * self.generate() - 1.0)
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}
