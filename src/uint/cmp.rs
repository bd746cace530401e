//! [`U256`] comparison operations.
//!
//! The assertion surface is the std comparison operators (`==`, `!=`, `<`,
//! `<=`, `>`, `>=`), available against both [`U256`] values and native `u64`
//! scalars, plus [`compare`][U256::compare] as the normalizing entry point
//! for validated scalar-or-value operands.

use core::cmp::Ordering;

use subtle::ConstantTimeEq;

use crate::{Error, Operand, U256};

impl U256 {
    /// Unsigned lexicographic comparison from the most significant limb
    /// down.
    const fn cmp_limbs(lhs: &Self, rhs: &Self) -> Ordering {
        let mut i = Self::LIMBS;

        while i > 0 {
            i -= 1;
            if lhs.limbs[i].0 < rhs.limbs[i].0 {
                return Ordering::Less;
            }
            if lhs.limbs[i].0 > rhs.limbs[i].0 {
                return Ordering::Greater;
            }
        }

        Ordering::Equal
    }

    /// Compare against a value or a bounded scalar, normalizing the operand
    /// before comparing.
    ///
    /// Fails with [`Error::NotANumber`] when a scalar operand is out of
    /// range.
    pub fn compare<'a>(&self, rhs: impl Into<Operand<'a>>) -> Result<Ordering, Error> {
        Ok(Self::cmp_limbs(self, &rhs.into().resolve()?))
    }
}

impl Eq for U256 {}

impl PartialEq for U256 {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> Ordering {
        Self::cmp_limbs(self, other)
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<u64> for U256 {
    fn eq(&self, other: &u64) -> bool {
        *self == Self::from_u64(*other)
    }
}

impl PartialEq<U256> for u64 {
    fn eq(&self, other: &U256) -> bool {
        U256::from_u64(*self) == *other
    }
}

impl PartialOrd<u64> for U256 {
    fn partial_cmp(&self, other: &u64) -> Option<Ordering> {
        Some(U256::cmp_limbs(self, &U256::from_u64(*other)))
    }
}

impl PartialOrd<U256> for u64 {
    fn partial_cmp(&self, other: &U256) -> Option<Ordering> {
        Some(U256::cmp_limbs(&U256::from_u64(*self), other))
    }
}

#[cfg(test)]
mod tests {
    use core::cmp::Ordering;

    use crate::{Error, MAX_SAFE_SCALAR, U256};

    #[test]
    fn cmp_orders_by_high_limbs() {
        let small = U256::from_u64(u64::MAX);
        let large = U256::ONE << 64;

        assert!(small < large);
        assert!(large > small);
        assert_eq!(small.cmp(&small), Ordering::Equal);
    }

    #[test]
    fn cmp_full_ordering() {
        let a = U256::ZERO;
        let b = U256::ONE;
        let c = U256::MAX;

        assert!(a < b && b < c && a < c);
        assert!(c > b && b > a && c > a);
        assert!(a <= a && b >= b);
        assert!(a != b && b != c);
    }

    #[test]
    fn min_max() {
        let a = U256::from_u64(4);
        let b = U256::from_u64(6);

        assert_eq!(a.min(b), a);
        assert_eq!(a.max(b), b);
    }

    #[test]
    fn scalar_comparisons() {
        let a = U256::from_u64(100);

        assert_eq!(a, 100u64);
        assert_ne!(a, 99u64);
        assert!(a > 99u64);
        assert!(a < 101u64);
        assert!(99u64 < a);
        assert!(101u64 > a);
        assert!(U256::MAX > u64::MAX);
    }

    #[test]
    fn compare_validates_scalars() {
        let a = U256::from_u64(7);

        assert_eq!(a.compare(7u64), Ok(Ordering::Equal));
        assert_eq!(a.compare(8u64), Ok(Ordering::Less));
        assert_eq!(a.compare(&U256::ZERO), Ok(Ordering::Greater));
        assert_eq!(a.compare(MAX_SAFE_SCALAR + 1), Err(Error::NotANumber));
    }
}
