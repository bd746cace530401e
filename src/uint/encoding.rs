//! Byte-level encoding and decoding for [`U256`].
//!
//! Big-endian is the documented wire order, consistent with the digit-string
//! formats; little-endian counterparts are provided for callers that store
//! limbs natively. Both expose exactly [`U256::BYTES`] bytes, fixed length.

use crate::{Limb, U256};

impl U256 {
    /// Create a [`U256`] from big-endian bytes.
    pub const fn from_be_bytes(bytes: [u8; Self::BYTES]) -> Self {
        let mut limbs = [Limb::ZERO; Self::LIMBS];
        let mut buf = [0u8; Limb::BYTES];
        let mut i = 0;

        while i < Self::LIMBS {
            let mut j = 0;
            while j < Limb::BYTES {
                buf[j] = bytes[i * Limb::BYTES + j];
                j += 1;
            }
            limbs[Self::LIMBS - i - 1] = Limb(u64::from_be_bytes(buf));
            i += 1;
        }

        Self::new(limbs)
    }

    /// Create a [`U256`] from little-endian bytes.
    pub const fn from_le_bytes(bytes: [u8; Self::BYTES]) -> Self {
        let mut limbs = [Limb::ZERO; Self::LIMBS];
        let mut buf = [0u8; Limb::BYTES];
        let mut i = 0;

        while i < Self::LIMBS {
            let mut j = 0;
            while j < Limb::BYTES {
                buf[j] = bytes[i * Limb::BYTES + j];
                j += 1;
            }
            limbs[i] = Limb(u64::from_le_bytes(buf));
            i += 1;
        }

        Self::new(limbs)
    }

    /// Serialize as big-endian bytes.
    ///
    /// The returned array is a copy; mutating it cannot affect `self`.
    pub const fn to_be_bytes(&self) -> [u8; Self::BYTES] {
        let mut out = [0u8; Self::BYTES];
        let mut i = 0;

        while i < Self::LIMBS {
            let word = self.limbs[Self::LIMBS - i - 1].0.to_be_bytes();
            let mut j = 0;
            while j < Limb::BYTES {
                out[i * Limb::BYTES + j] = word[j];
                j += 1;
            }
            i += 1;
        }

        out
    }

    /// Serialize as little-endian bytes.
    ///
    /// The returned array is a copy; mutating it cannot affect `self`.
    pub const fn to_le_bytes(&self) -> [u8; Self::BYTES] {
        let mut out = [0u8; Self::BYTES];
        let mut i = 0;

        while i < Self::LIMBS {
            let word = self.limbs[i].0.to_le_bytes();
            let mut j = 0;
            while j < Limb::BYTES {
                out[i * Limb::BYTES + j] = word[j];
                j += 1;
            }
            i += 1;
        }

        out
    }
}
