//! Scalar-or-value right-hand operands.

use crate::{Error, U256};

/// Largest native scalar accepted at the operand boundary: `2^53 - 1`.
///
/// This is the upper end of the contiguous integer range that a
/// double-precision float represents exactly, preserved here as the validity
/// bound for native scalars crossing into full-width arithmetic.
pub const MAX_SAFE_SCALAR: u64 = (1 << 53) - 1;

/// A right-hand operand: either a borrowed full-width value or a native
/// scalar.
///
/// Fallible [`U256`] operations accept `impl Into<Operand<'_>>`, so both
/// values and scalars can be passed directly:
///
/// ```
/// use uint256::U256;
///
/// let a = U256::from_u64(100);
/// assert_eq!(a.checked_add(&U256::from_u64(1))?, U256::from_u64(101));
/// assert_eq!(a.checked_add(1u64)?, U256::from_u64(101));
/// # Ok::<(), uint256::Error>(())
/// ```
///
/// Scalars are validated against [`MAX_SAFE_SCALAR`] when the operand is
/// resolved; out-of-range scalars fail with [`Error::NotANumber`].
#[derive(Clone, Copy, Debug)]
pub enum Operand<'a> {
    /// A borrowed full-width value.
    Value(&'a U256),

    /// A native scalar, validated on resolution.
    Scalar(u64),
}

impl Operand<'_> {
    /// Resolve the operand to a full-width value, validating scalars.
    pub fn resolve(self) -> Result<U256, Error> {
        match self {
            Operand::Value(value) => Ok(*value),
            Operand::Scalar(scalar) => U256::from_scalar(scalar),
        }
    }
}

impl<'a> From<&'a U256> for Operand<'a> {
    fn from(value: &'a U256) -> Self {
        Operand::Value(value)
    }
}

impl From<u64> for Operand<'_> {
    fn from(scalar: u64) -> Self {
        Operand::Scalar(scalar)
    }
}

impl From<u32> for Operand<'_> {
    fn from(scalar: u32) -> Self {
        Operand::Scalar(scalar.into())
    }
}
