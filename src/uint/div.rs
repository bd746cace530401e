//! [`U256`] division operations.

use core::ops::{Div, DivAssign, Rem, RemAssign};

use crate::{Error, Limb, Operand, U256};

impl U256 {
    /// Binary long division. The divisor must be nonzero.
    ///
    /// Walks the dividend from its most significant set bit down, shifting
    /// each bit into the remainder and subtracting the divisor whenever the
    /// remainder reaches it. Operand buffers are never written to.
    pub(super) fn div_rem_inner(&self, rhs: &Self) -> (Self, Self) {
        debug_assert!(!rhs.is_zero());

        match Ord::cmp(self, rhs) {
            core::cmp::Ordering::Less => return (Self::ZERO, *self),
            core::cmp::Ordering::Equal => return (Self::ONE, Self::ZERO),
            core::cmp::Ordering::Greater => {}
        }

        let mut quotient = Self::ZERO;
        let mut remainder = Self::ZERO;
        let mut bit = self.bits();

        while bit > 0 {
            bit -= 1;
            remainder = remainder.shl(1);
            if self.test_bit(bit) {
                remainder.limbs[0] = Limb(remainder.limbs[0].0 | 1);
            }
            if remainder >= *rhs {
                remainder = remainder.wrapping_sub(rhs);
                quotient = quotient.set_bit(bit);
            }
        }

        (quotient, remainder)
    }

    /// Computes `self / rhs`, returning the quotient and the remainder,
    /// both full width.
    ///
    /// Fails with [`Error::DivideByZero`] when `rhs` is zero. When
    /// `self < rhs` the quotient is zero and the remainder is `self`; when
    /// `self == rhs` the quotient is one and the remainder is zero. Accepts
    /// a value or a bounded scalar as the divisor.
    pub fn div_rem<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<(Self, Self), Error> {
        let rhs = rhs.into().resolve()?;

        if rhs.is_zero() {
            return Err(Error::DivideByZero);
        }

        Ok(self.div_rem_inner(&rhs))
    }

    /// Computes the quotient of `self / rhs`.
    ///
    /// Fails with [`Error::DivideByZero`] when `rhs` is zero.
    pub fn checked_div<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Self, Error> {
        self.div_rem(rhs).map(|(quotient, _)| quotient)
    }

    /// Computes the remainder of `self / rhs`.
    ///
    /// Fails with [`Error::DivideByZero`] when `rhs` is zero.
    pub fn checked_rem<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Self, Error> {
        self.div_rem(rhs).map(|(_, remainder)| remainder)
    }
}

impl Div for U256 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self.checked_div(&rhs).expect("attempted to divide by zero")
    }
}

impl Div<&U256> for U256 {
    type Output = Self;

    fn div(self, rhs: &Self) -> Self {
        self.checked_div(rhs).expect("attempted to divide by zero")
    }
}

impl DivAssign for U256 {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl DivAssign<&U256> for U256 {
    fn div_assign(&mut self, rhs: &Self) {
        *self = *self / rhs;
    }
}

impl Rem for U256 {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self {
        self.checked_rem(&rhs).expect("attempted to divide by zero")
    }
}

impl Rem<&U256> for U256 {
    type Output = Self;

    fn rem(self, rhs: &Self) -> Self {
        self.checked_rem(rhs).expect("attempted to divide by zero")
    }
}

impl RemAssign for U256 {
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

impl RemAssign<&U256> for U256 {
    fn rem_assign(&mut self, rhs: &Self) {
        *self = *self % rhs;
    }
}

impl num_traits::CheckedDiv for U256 {
    fn checked_div(&self, rhs: &Self) -> Option<Self> {
        U256::checked_div(self, rhs).ok()
    }
}

impl num_traits::CheckedRem for U256 {
    fn checked_rem(&self, rhs: &Self) -> Option<Self> {
        U256::checked_rem(self, rhs).ok()
    }
}
