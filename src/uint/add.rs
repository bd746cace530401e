//! [`U256`] addition operations.

use core::ops::{Add, AddAssign};

use crate::{Error, Limb, Operand, U256};

impl U256 {
    /// Computes `self + rhs + carry`, returning the result along with the
    /// new carry.
    #[inline(always)]
    pub const fn carrying_add(&self, rhs: &Self, mut carry: Limb) -> (Self, Limb) {
        let mut limbs = [Limb::ZERO; Self::LIMBS];
        let mut i = 0;

        while i < Self::LIMBS {
            let (w, c) = self.limbs[i].carrying_add(rhs.limbs[i], carry);
            limbs[i] = w;
            carry = c;
            i += 1;
        }

        (Self { limbs }, carry)
    }

    /// Perform wrapping addition, discarding the carry out of the top limb.
    pub const fn wrapping_add(&self, rhs: &Self) -> Self {
        self.carrying_add(rhs, Limb::ZERO).0
    }

    /// Perform overflow-checked addition.
    ///
    /// The sum is verified to be carry-free, i.e. `result >= self`; a
    /// violation fails with [`Error::Overflow`]. Accepts a value or a
    /// bounded scalar as the right-hand operand.
    pub fn checked_add<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Self, Error> {
        let rhs = rhs.into().resolve()?;
        let (result, carry) = self.carrying_add(&rhs, Limb::ZERO);

        if carry == Limb::ZERO {
            Ok(result)
        } else {
            Err(Error::Overflow)
        }
    }
}

impl Add for U256 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(&rhs)
    }
}

impl Add<&U256> for U256 {
    type Output = Self;

    fn add(self, rhs: &Self) -> Self {
        self.wrapping_add(rhs)
    }
}

impl AddAssign for U256 {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.wrapping_add(&rhs);
    }
}

impl AddAssign<&U256> for U256 {
    fn add_assign(&mut self, rhs: &Self) {
        *self = self.wrapping_add(rhs);
    }
}

impl num_traits::WrappingAdd for U256 {
    fn wrapping_add(&self, rhs: &Self) -> Self {
        self.wrapping_add(rhs)
    }
}

impl num_traits::CheckedAdd for U256 {
    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        U256::checked_add(self, rhs).ok()
    }
}
