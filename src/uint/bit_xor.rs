//! [`U256`] bitwise XOR operations.

use core::ops::{BitXor, BitXorAssign};

use crate::{Limb, U256};

impl U256 {
    /// Computes the limb-wise XOR of `self` and `rhs`.
    pub const fn bitxor(&self, rhs: &Self) -> Self {
        let mut limbs = [Limb::ZERO; Self::LIMBS];
        let mut i = 0;

        while i < Self::LIMBS {
            limbs[i] = Limb(self.limbs[i].0 ^ rhs.limbs[i].0);
            i += 1;
        }

        Self { limbs }
    }
}

impl BitXor for U256 {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        U256::bitxor(&self, &rhs)
    }
}

impl BitXor<&U256> for U256 {
    type Output = Self;

    fn bitxor(self, rhs: &Self) -> Self {
        U256::bitxor(&self, rhs)
    }
}

impl BitXorAssign for U256 {
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = U256::bitxor(self, &rhs);
    }
}

impl BitXorAssign<&U256> for U256 {
    fn bitxor_assign(&mut self, rhs: &Self) {
        *self = U256::bitxor(self, rhs);
    }
}
