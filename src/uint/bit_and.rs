//! [`U256`] bitwise AND operations.

use core::ops::{BitAnd, BitAndAssign};

use crate::{Limb, U256};

impl U256 {
    /// Computes the limb-wise AND of `self` and `rhs`.
    pub const fn bitand(&self, rhs: &Self) -> Self {
        let mut limbs = [Limb::ZERO; Self::LIMBS];
        let mut i = 0;

        while i < Self::LIMBS {
            limbs[i] = Limb(self.limbs[i].0 & rhs.limbs[i].0);
            i += 1;
        }

        Self { limbs }
    }

    /// Computes `self & !rhs`, clearing in `self` every bit set in `rhs`.
    pub const fn and_not(&self, rhs: &Self) -> Self {
        let mut limbs = [Limb::ZERO; Self::LIMBS];
        let mut i = 0;

        while i < Self::LIMBS {
            limbs[i] = Limb(self.limbs[i].0 & !rhs.limbs[i].0);
            i += 1;
        }

        Self { limbs }
    }
}

impl BitAnd for U256 {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        U256::bitand(&self, &rhs)
    }
}

impl BitAnd<&U256> for U256 {
    type Output = Self;

    fn bitand(self, rhs: &Self) -> Self {
        U256::bitand(&self, rhs)
    }
}

impl BitAndAssign for U256 {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = U256::bitand(self, &rhs);
    }
}

impl BitAndAssign<&U256> for U256 {
    fn bitand_assign(&mut self, rhs: &Self) {
        *self = U256::bitand(self, rhs);
    }
}
