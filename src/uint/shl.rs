//! [`U256`] bitwise left shift operations.

use core::ops::{Shl, ShlAssign};

use crate::{Limb, U256};

impl U256 {
    /// Computes `self << shift`, yielding zero once `shift >= 256`.
    ///
    /// Bits crossing limb boundaries are carried into the adjacent limb.
    pub const fn shl(&self, shift: u32) -> Self {
        if shift >= Self::BITS {
            return Self::ZERO;
        }

        let limb_shift = (shift / Limb::BITS) as usize;
        let bit_shift = shift % Limb::BITS;
        let mut limbs = [Limb::ZERO; Self::LIMBS];
        let mut i = Self::LIMBS;

        while i > limb_shift {
            i -= 1;
            let src = i - limb_shift;
            let mut word = self.limbs[src].0 << bit_shift;
            if bit_shift > 0 && src > 0 {
                word |= self.limbs[src - 1].0 >> (Limb::BITS - bit_shift);
            }
            limbs[i] = Limb(word);
        }

        Self { limbs }
    }
}

impl Shl<u32> for U256 {
    type Output = Self;

    fn shl(self, shift: u32) -> Self {
        U256::shl(&self, shift)
    }
}

impl Shl<u32> for &U256 {
    type Output = U256;

    fn shl(self, shift: u32) -> U256 {
        U256::shl(self, shift)
    }
}

impl ShlAssign<u32> for U256 {
    fn shl_assign(&mut self, shift: u32) {
        *self = U256::shl(self, shift);
    }
}
