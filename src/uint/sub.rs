//! [`U256`] subtraction operations.

use core::ops::{Sub, SubAssign};

use crate::{Error, Limb, Operand, U256};

impl U256 {
    /// Computes `self - (rhs + borrow)`, returning the result along with the
    /// new borrow.
    ///
    /// The returned borrow is [`Limb::MAX`] when a borrow out of the top
    /// limb occurred and [`Limb::ZERO`] otherwise.
    #[inline(always)]
    pub const fn borrowing_sub(&self, rhs: &Self, mut borrow: Limb) -> (Self, Limb) {
        let mut limbs = [Limb::ZERO; Self::LIMBS];
        let mut i = 0;

        while i < Self::LIMBS {
            let (w, b) = self.limbs[i].borrowing_sub(rhs.limbs[i], borrow);
            limbs[i] = w;
            borrow = b;
            i += 1;
        }

        (Self { limbs }, borrow)
    }

    /// Perform wrapping subtraction, discarding the borrow out of the top
    /// limb.
    pub const fn wrapping_sub(&self, rhs: &Self) -> Self {
        self.borrowing_sub(rhs, Limb::ZERO).0
    }

    /// Perform overflow-checked subtraction.
    ///
    /// Requires `self >= rhs`; a violation fails with [`Error::Overflow`].
    /// Accepts a value or a bounded scalar as the right-hand operand.
    pub fn checked_sub<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Self, Error> {
        let rhs = rhs.into().resolve()?;
        let (result, borrow) = self.borrowing_sub(&rhs, Limb::ZERO);

        if borrow == Limb::ZERO {
            Ok(result)
        } else {
            Err(Error::Overflow)
        }
    }
}

impl Sub for U256 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(&rhs)
    }
}

impl Sub<&U256> for U256 {
    type Output = Self;

    fn sub(self, rhs: &Self) -> Self {
        self.wrapping_sub(rhs)
    }
}

impl SubAssign for U256 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.wrapping_sub(&rhs);
    }
}

impl SubAssign<&U256> for U256 {
    fn sub_assign(&mut self, rhs: &Self) {
        *self = self.wrapping_sub(rhs);
    }
}

impl num_traits::WrappingSub for U256 {
    fn wrapping_sub(&self, rhs: &Self) -> Self {
        self.wrapping_sub(rhs)
    }
}

impl num_traits::CheckedSub for U256 {
    fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        U256::checked_sub(self, rhs).ok()
    }
}
