//! Random generation of [`U256`] values.

use rand_core::RngCore;

use crate::{Limb, U256};

impl U256 {
    /// Generate a uniformly random value over the full 256-bit range.
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut limbs = [Limb::ZERO; Self::LIMBS];

        for limb in &mut limbs {
            *limb = Limb(rng.next_u64());
        }

        Self::new(limbs)
    }
}
