//! [`U256`] greatest common divisor.

use crate::{Error, Operand, U256};

impl U256 {
    /// Computes the greatest common divisor of `self` and `rhs` with the
    /// Euclidean algorithm, iterating over working copies until a remainder
    /// reaches zero.
    ///
    /// Fails with [`Error::DivideByZero`] if either operand is zero. Accepts
    /// a value or a bounded scalar as the right-hand operand.
    pub fn gcd<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Self, Error> {
        let rhs = rhs.into().resolve()?;

        if self.is_zero() || rhs.is_zero() {
            return Err(Error::DivideByZero);
        }

        let mut num = rhs;
        let mut denom = self.div_rem_inner(&rhs).1;

        while !denom.is_zero() {
            let t = num.div_rem_inner(&denom).1;
            num = denom;
            denom = t;
        }

        Ok(num)
    }
}
