//! `From`-like conversions for [`U256`].

use crate::{Error, Limb, MAX_SAFE_SCALAR, U256, Word};

impl U256 {
    /// Create a [`U256`] from a `u8` (const-friendly).
    #[inline]
    #[must_use]
    pub const fn from_u8(n: u8) -> Self {
        let mut limbs = [Limb::ZERO; Self::LIMBS];
        limbs[0].0 = n as Word;
        Self { limbs }
    }

    /// Create a [`U256`] from a `u16` (const-friendly).
    #[inline]
    #[must_use]
    pub const fn from_u16(n: u16) -> Self {
        let mut limbs = [Limb::ZERO; Self::LIMBS];
        limbs[0].0 = n as Word;
        Self { limbs }
    }

    /// Create a [`U256`] from a `u32` (const-friendly).
    #[inline]
    #[must_use]
    pub const fn from_u32(n: u32) -> Self {
        let mut limbs = [Limb::ZERO; Self::LIMBS];
        limbs[0].0 = n as Word;
        Self { limbs }
    }

    /// Create a [`U256`] from a `u64` (const-friendly).
    #[inline]
    #[must_use]
    pub const fn from_u64(n: u64) -> Self {
        let mut limbs = [Limb::ZERO; Self::LIMBS];
        limbs[0].0 = n;
        Self { limbs }
    }

    /// Create a [`U256`] from a `u128` (const-friendly).
    #[inline]
    #[must_use]
    pub const fn from_u128(n: u128) -> Self {
        let mut limbs = [Limb::ZERO; Self::LIMBS];
        limbs[0].0 = n as Word;
        limbs[1].0 = (n >> Limb::BITS) as Word;
        Self { limbs }
    }

    /// Create a [`U256`] from a bounded native scalar.
    ///
    /// Fails with [`Error::NotANumber`] when `n` exceeds
    /// [`MAX_SAFE_SCALAR`].
    pub const fn from_scalar(n: u64) -> Result<Self, Error> {
        if n > MAX_SAFE_SCALAR {
            return Err(Error::NotANumber);
        }

        Ok(Self::from_u64(n))
    }

    /// Convert to a bounded native scalar.
    ///
    /// Returns `Some` only when `self` is within [`MAX_SAFE_SCALAR`].
    pub const fn to_scalar(&self) -> Option<u64> {
        let mut i = 1;

        while i < Self::LIMBS {
            if self.limbs[i].0 != 0 {
                return None;
            }
            i += 1;
        }

        if self.limbs[0].0 > MAX_SAFE_SCALAR {
            return None;
        }

        Some(self.limbs[0].0)
    }
}

impl From<u8> for U256 {
    #[inline]
    fn from(n: u8) -> Self {
        Self::from_u8(n)
    }
}

impl From<u16> for U256 {
    #[inline]
    fn from(n: u16) -> Self {
        Self::from_u16(n)
    }
}

impl From<u32> for U256 {
    #[inline]
    fn from(n: u32) -> Self {
        Self::from_u32(n)
    }
}

impl From<u64> for U256 {
    #[inline]
    fn from(n: u64) -> Self {
        Self::from_u64(n)
    }
}

impl From<u128> for U256 {
    #[inline]
    fn from(n: u128) -> Self {
        Self::from_u128(n)
    }
}
