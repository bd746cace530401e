//! [`U256`] multiplication operations.
//!
//! Schoolbook multiplication: limb-pair cross products are accumulated
//! through a double-width accumulator, O(limbs²).

use core::ops::{Mul, MulAssign};

use crate::{Error, Limb, Operand, U256};

impl U256 {
    /// Compute the full 512-bit product as `(lo, hi)`.
    pub const fn widening_mul(&self, rhs: &Self) -> (Self, Self) {
        let mut lo = [Limb::ZERO; Self::LIMBS];
        let mut hi = [Limb::ZERO; Self::LIMBS];
        let mut i = 0;

        while i < Self::LIMBS {
            let xi = self.limbs[i];
            let mut carry = Limb::ZERO;
            let mut j = 0;

            while j < Self::LIMBS {
                let k = i + j;

                if k >= Self::LIMBS {
                    let (w, c) = xi.carrying_mul_add(rhs.limbs[j], hi[k - Self::LIMBS], carry);
                    hi[k - Self::LIMBS] = w;
                    carry = c;
                } else {
                    let (w, c) = xi.carrying_mul_add(rhs.limbs[j], lo[k], carry);
                    lo[k] = w;
                    carry = c;
                }

                j += 1;
            }

            hi[i] = carry;
            i += 1;
        }

        (Self { limbs: lo }, Self { limbs: hi })
    }

    /// Perform wrapping multiplication, truncating the product to 256 bits.
    pub const fn wrapping_mul(&self, rhs: &Self) -> Self {
        let mut limbs = [Limb::ZERO; Self::LIMBS];
        let mut i = 0;

        while i < Self::LIMBS {
            let xi = self.limbs[i];
            let mut carry = Limb::ZERO;
            let mut j = 0;

            while i + j < Self::LIMBS {
                let k = i + j;
                let (w, c) = xi.carrying_mul_add(rhs.limbs[j], limbs[k], carry);
                limbs[k] = w;
                carry = c;
                j += 1;
            }

            i += 1;
        }

        Self { limbs }
    }

    /// Perform overflow-checked multiplication.
    ///
    /// The high half of the full product must be zero, which is equivalent
    /// to requiring `result / self == rhs` for nonzero `self`; a violation
    /// fails with [`Error::Overflow`]. Accepts a value or a bounded scalar
    /// as the right-hand operand.
    pub fn checked_mul<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Self, Error> {
        let rhs = rhs.into().resolve()?;
        let (lo, hi) = self.widening_mul(&rhs);

        if hi.is_zero() {
            Ok(lo)
        } else {
            Err(Error::Overflow)
        }
    }
}

impl Mul for U256 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.wrapping_mul(&rhs)
    }
}

impl Mul<&U256> for U256 {
    type Output = Self;

    fn mul(self, rhs: &Self) -> Self {
        self.wrapping_mul(rhs)
    }
}

impl MulAssign for U256 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.wrapping_mul(&rhs);
    }
}

impl MulAssign<&U256> for U256 {
    fn mul_assign(&mut self, rhs: &Self) {
        *self = self.wrapping_mul(rhs);
    }
}

impl num_traits::WrappingMul for U256 {
    fn wrapping_mul(&self, rhs: &Self) -> Self {
        self.wrapping_mul(rhs)
    }
}

impl num_traits::CheckedMul for U256 {
    fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        U256::checked_mul(self, rhs).ok()
    }
}
