//! [`U256`] bitwise OR operations.

use core::ops::{BitOr, BitOrAssign};

use crate::{Limb, U256};

impl U256 {
    /// Computes the limb-wise OR of `self` and `rhs`.
    pub const fn bitor(&self, rhs: &Self) -> Self {
        let mut limbs = [Limb::ZERO; Self::LIMBS];
        let mut i = 0;

        while i < Self::LIMBS {
            limbs[i] = Limb(self.limbs[i].0 | rhs.limbs[i].0);
            i += 1;
        }

        Self { limbs }
    }
}

impl BitOr for U256 {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        U256::bitor(&self, &rhs)
    }
}

impl BitOr<&U256> for U256 {
    type Output = Self;

    fn bitor(self, rhs: &Self) -> Self {
        U256::bitor(&self, rhs)
    }
}

impl BitOrAssign for U256 {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = U256::bitor(self, &rhs);
    }
}

impl BitOrAssign<&U256> for U256 {
    fn bitor_assign(&mut self, rhs: &Self) {
        *self = U256::bitor(self, rhs);
    }
}
