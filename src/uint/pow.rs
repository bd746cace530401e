//! [`U256`] exponentiation.

use crate::{Error, U256};

impl U256 {
    /// Raises `self` to `exponent` with wraparound semantics.
    ///
    /// # Cost model
    /// This performs `exponent - 1` sequential wrapping multiplications,
    /// linear in the exponent, not exponentiation-by-squaring. Intended for
    /// small exponents.
    ///
    /// # `pow(0)`
    /// A zero exponent is evaluated as `self / self`: `Ok(ONE)` for nonzero
    /// `self`, but [`Error::DivideByZero`] for `U256::ZERO` rather than the
    /// usual `0^0 == 1` convention.
    pub fn pow(&self, exponent: u32) -> Result<Self, Error> {
        if exponent == 0 {
            return self.checked_div(self);
        }

        let mut result = *self;
        let mut remaining = exponent;

        while remaining > 1 {
            result = result.wrapping_mul(self);
            remaining -= 1;
        }

        Ok(result)
    }
}
