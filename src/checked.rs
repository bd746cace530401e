//! Checked arithmetic.

use core::ops::{Add, Div, Mul, Rem, Sub};

use crate::{Error, U256};

/// Provides intentionally-checked arithmetic on [`U256`].
///
/// Wraps a `Result` so a chain of safe operations reads as ordinary
/// arithmetic and yields a single value to inspect at the end: the first
/// failure ([`Error::Overflow`], [`Error::DivideByZero`]) short-circuits
/// through the rest of the chain.
///
/// ```
/// use uint256::{Checked, U256};
///
/// let total = (Checked::new(U256::from_u64(100)) + Checked::new(U256::from_u64(23)))
///     * Checked::new(U256::from_u64(3));
/// assert_eq!(total.into_result()?, U256::from_u64(369));
/// # Ok::<(), uint256::Error>(())
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Checked(pub Result<U256, Error>);

impl Checked {
    /// Create a new checked arithmetic wrapper for the given value.
    pub const fn new(value: U256) -> Self {
        Self(Ok(value))
    }

    /// Unwrap the inner `Result`.
    pub fn into_result(self) -> Result<U256, Error> {
        self.0
    }
}

impl Add for Checked {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.and_then(|lhs| rhs.0.and_then(|rhs| lhs.checked_add(&rhs))))
    }
}

impl Add<&Checked> for Checked {
    type Output = Self;

    fn add(self, rhs: &Self) -> Self {
        self + *rhs
    }
}

impl Sub for Checked {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.and_then(|lhs| rhs.0.and_then(|rhs| lhs.checked_sub(&rhs))))
    }
}

impl Sub<&Checked> for Checked {
    type Output = Self;

    fn sub(self, rhs: &Self) -> Self {
        self - *rhs
    }
}

impl Mul for Checked {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0.and_then(|lhs| rhs.0.and_then(|rhs| lhs.checked_mul(&rhs))))
    }
}

impl Mul<&Checked> for Checked {
    type Output = Self;

    fn mul(self, rhs: &Self) -> Self {
        self * *rhs
    }
}

impl Div for Checked {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self(self.0.and_then(|lhs| rhs.0.and_then(|rhs| lhs.checked_div(&rhs))))
    }
}

impl Div<&Checked> for Checked {
    type Output = Self;

    fn div(self, rhs: &Self) -> Self {
        self / *rhs
    }
}

impl Rem for Checked {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self {
        Self(self.0.and_then(|lhs| rhs.0.and_then(|rhs| lhs.checked_rem(&rhs))))
    }
}

impl Rem<&Checked> for Checked {
    type Output = Self;

    fn rem(self, rhs: &Self) -> Self {
        self % *rhs
    }
}

impl Default for Checked {
    fn default() -> Self {
        Self::new(U256::ZERO)
    }
}

impl From<U256> for Checked {
    fn from(value: U256) -> Self {
        Self::new(value)
    }
}

impl From<Checked> for Result<U256, Error> {
    fn from(checked: Checked) -> Self {
        checked.0
    }
}
