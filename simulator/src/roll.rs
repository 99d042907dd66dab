use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of the uniform `[0, 1)` draws used to spread damage in game mode.
pub trait DamageRoll {
    fn roll(&mut self) -> f64;
}

impl DamageRoll for StdRng {
    fn roll(&mut self) -> f64 {
        self.random::<f64>()
    }
}

impl<R: DamageRoll + ?Sized> DamageRoll for &mut R {
    fn roll(&mut self) -> f64 {
        (**self).roll()
    }
}

/// Always rolls the same value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedRoll(pub f64);

impl DamageRoll for FixedRoll {
    fn roll(&mut self) -> f64 {
        self.0
    }
}

pub fn create_rng() -> StdRng {
    StdRng::from_rng(&mut rand::rng())
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
