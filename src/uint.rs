//! 256-bit unsigned integer.

mod add;
mod bit_and;
mod bit_not;
mod bit_or;
mod bit_xor;
mod bits;
mod cmp;
mod div;
mod encoding;
mod from;
mod gcd;
mod mul;
mod pow;
mod radix;
mod shl;
mod shr;
mod sub;

#[cfg(feature = "rand")]
mod rand;

use core::fmt;

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::Limb;

/// Fixed-width 256-bit unsigned integer.
///
/// Backed by four 64-bit limbs, least significant first; the buffer is never
/// resized and every arithmetic result is implicitly reduced modulo 2^256.
///
/// # Pure and in-place forms
/// Each operation exists as a pure form returning a new value (the inherent
/// methods and the binary operators) and an in-place form overwriting the
/// receiver (the `*Assign` operators). The overflow-checked forms are the
/// `checked_*` methods and the [`Checked`][crate::Checked] wrapper; they
/// fail with [`Error::Overflow`][crate::Error::Overflow] instead of
/// wrapping, and a failed operation never mutates anything.
///
/// # Encoding support
/// Values convert to and from raw fixed-width bytes
/// ([`to_be_bytes`][Self::to_be_bytes], [`from_be_bytes`][Self::from_be_bytes]
/// and the little-endian counterparts) and to and from digit strings in any
/// radix from 2 to 36 ([`from_str_radix`][Self::from_str_radix],
/// [`to_string_radix`][Self::to_string_radix]). `Display` formats radix 10.
// Our PartialEq impl only differs from the default one by being constant-time, so this is safe
#[allow(clippy::derived_hash_with_manual_eq)]
#[derive(Copy, Clone, Hash)]
pub struct U256 {
    /// Inner limb array. Stored from least significant to most significant.
    limbs: [Limb; 4],
}

impl U256 {
    /// The value `0`.
    pub const ZERO: Self = Self::from_u64(0);

    /// The value `1`.
    pub const ONE: Self = Self::from_u64(1);

    /// Maximum value this type can express: `2^256 - 1`.
    pub const MAX: Self = Self {
        limbs: [Limb::MAX; Self::LIMBS],
    };

    /// Total size of the represented integer in bits.
    pub const BITS: u32 = 256;

    /// Total size of the represented integer in bytes.
    pub const BYTES: usize = 32;

    /// Number of limbs in the backing buffer.
    pub const LIMBS: usize = 4;

    /// Const-friendly constructor from limbs, least significant first.
    pub const fn new(limbs: [Limb; Self::LIMBS]) -> Self {
        Self { limbs }
    }

    /// Create a [`U256`] from an array of words, least significant first.
    pub const fn from_words(words: [crate::Word; Self::LIMBS]) -> Self {
        let mut limbs = [Limb::ZERO; Self::LIMBS];
        let mut i = 0;

        while i < Self::LIMBS {
            limbs[i] = Limb(words[i]);
            i += 1;
        }

        Self { limbs }
    }

    /// Create an array of words, least significant first, from a [`U256`].
    pub const fn to_words(self) -> [crate::Word; Self::LIMBS] {
        let mut words = [0; Self::LIMBS];
        let mut i = 0;

        while i < Self::LIMBS {
            words[i] = self.limbs[i].0;
            i += 1;
        }

        words
    }

    /// Borrow the limbs of this [`U256`].
    pub const fn as_limbs(&self) -> &[Limb; Self::LIMBS] {
        &self.limbs
    }

    /// Borrow the limbs of this [`U256`] mutably.
    pub fn as_limbs_mut(&mut self) -> &mut [Limb; Self::LIMBS] {
        &mut self.limbs
    }

    /// Convert this [`U256`] into its inner limbs.
    pub const fn to_limbs(self) -> [Limb; Self::LIMBS] {
        self.limbs
    }

    /// Whether `self` is zero.
    pub const fn is_zero(&self) -> bool {
        let mut i = 0;

        while i < Self::LIMBS {
            if self.limbs[i].0 != 0 {
                return false;
            }
            i += 1;
        }

        true
    }
}

impl AsRef<[Limb]> for U256 {
    fn as_ref(&self) -> &[Limb] {
        self.as_limbs()
    }
}

impl AsMut<[Limb]> for U256 {
    fn as_mut(&mut self) -> &mut [Limb] {
        self.as_limbs_mut()
    }
}

impl ConditionallySelectable for U256 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut limbs = [Limb::ZERO; Self::LIMBS];

        for i in 0..Self::LIMBS {
            limbs[i] = Limb::conditional_select(&a.limbs[i], &b.limbs[i], choice);
        }

        Self { limbs }
    }
}

impl ConstantTimeEq for U256 {
    fn ct_eq(&self, other: &Self) -> Choice {
        let mut acc = 0;

        for i in 0..Self::LIMBS {
            acc |= self.limbs[i].0 ^ other.limbs[i].0;
        }

        // acc == 0 if and only if self == other
        acc.ct_eq(&0)
    }
}

impl Default for U256 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl num_traits::Zero for U256 {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        U256::is_zero(self)
    }
}

impl num_traits::One for U256 {
    fn one() -> Self {
        Self::ONE
    }
}

impl num_traits::Bounded for U256 {
    fn min_value() -> Self {
        Self::ZERO
    }

    fn max_value() -> Self {
        Self::MAX
    }
}

impl fmt::Debug for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U256(0x{self:X})")
    }
}

impl fmt::LowerHex for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for limb in self.limbs.iter().rev() {
            fmt::LowerHex::fmt(limb, f)?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for limb in self.limbs.iter().rev() {
            fmt::UpperHex::fmt(limb, f)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for U256 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct StrVisitor;

        impl serde::de::Visitor<'_> for StrVisitor {
            type Value = U256;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a digit string")
            }

            fn visit_str<E>(self, v: &str) -> Result<U256, E>
            where
                E: serde::de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(StrVisitor)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for U256 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for U256 {}

#[cfg(test)]
mod tests {
    use subtle::ConditionallySelectable;

    use super::U256;

    #[cfg(feature = "alloc")]
    #[test]
    fn debug() {
        use alloc::format;

        let n = U256::from_u128(0xAAAAAAAABBBBBBBBCCCCCCCCDDDDDDDD);

        assert_eq!(
            format!("{n:?}"),
            "U256(0x00000000000000000000000000000000AAAAAAAABBBBBBBBCCCCCCCCDDDDDDDD)"
        );
    }

    #[test]
    fn is_zero() {
        assert!(U256::ZERO.is_zero());
        assert!(!U256::ONE.is_zero());
        assert!(!U256::MAX.is_zero());
    }

    #[test]
    fn conditional_select() {
        let a = U256::from_u64(17);
        let b = U256::MAX;

        assert_eq!(U256::conditional_select(&a, &b, 0.into()), a);
        assert_eq!(U256::conditional_select(&a, &b, 1.into()), b);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let n = U256::from_u128(123456789012345678901234567890);

        let encoded = serde_json::to_string(&n).unwrap();
        assert_eq!(encoded, "\"123456789012345678901234567890\"");

        let decoded: U256 = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, n);
    }
}
