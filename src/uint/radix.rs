//! Digit-string conversion for [`U256`] across radix 2–36.
//!
//! Parsing folds digits in with wrapping multiply-and-add, so numerals wider
//! than 256 bits keep their lowest 256 bits. Formatting extracts digits with
//! repeated division by the radix, with two fast paths: radix 16 formats
//! straight from the big-endian bytes, and values within
//! [`MAX_SAFE_SCALAR`][crate::MAX_SAFE_SCALAR] use native `u64` arithmetic.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "alloc")]
use alloc::string::String;

use crate::{Error, U256};

/// Smallest supported radix.
pub(super) const RADIX_MIN: u32 = 2;

/// Largest supported radix.
pub(super) const RADIX_MAX: u32 = 36;

/// Digit alphabet; input is case-insensitive, output is lowercase.
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Worst-case digit count: radix 2 over 256 bits.
const ENCODED_MAX: usize = 256;

impl U256 {
    /// Parse a digit string in the given radix.
    ///
    /// A `0x`/`0X` prefix always selects hexadecimal, overriding `radix`;
    /// a radix outside 2–36 silently falls back to 10. An empty numeral or
    /// a digit outside the radix fails with [`Error::NotANumber`]. Numerals
    /// wider than 256 bits wrap.
    pub fn from_str_radix(src: &str, radix: u32) -> Result<Self, Error> {
        let bytes = src.as_bytes();

        let (digits, radix) = match bytes {
            [b'0', b'x' | b'X', rest @ ..] => (rest, 16),
            _ if radix == 16 => (bytes, 16),
            _ if (RADIX_MIN..=RADIX_MAX).contains(&radix) => (bytes, radix),
            _ => (bytes, 10),
        };

        if digits.is_empty() {
            return Err(Error::NotANumber);
        }

        if radix == 16 {
            return Self::from_hex_digits(digits);
        }

        let step = Self::from_u64(radix.into());
        let mut value = Self::ZERO;

        for &byte in digits {
            let digit = decode_digit(byte, radix)?;
            value = value
                .wrapping_mul(&step)
                .wrapping_add(&Self::from_u64(digit.into()));
        }

        Ok(value)
    }

    /// Hexadecimal fast path: four-bit shifts instead of full divisions.
    fn from_hex_digits(digits: &[u8]) -> Result<Self, Error> {
        let mut value = Self::ZERO;

        for &byte in digits {
            let nibble = decode_digit(byte, 16)?;
            value = value.shl(4).bitor(&Self::from_u64(nibble.into()));
        }

        Ok(value)
    }

    /// Format as a digit string in the given radix.
    ///
    /// Radix 16 formats directly from the big-endian bytes; a radix outside
    /// 2–36 silently falls back to 10. The output is lowercase with no
    /// leading zeros (`"0"` for zero).
    #[cfg(feature = "alloc")]
    pub fn to_string_radix(&self, radix: u32) -> String {
        if radix == 16 {
            return self.to_hex_str();
        }

        let radix = if (RADIX_MIN..=RADIX_MAX).contains(&radix) {
            radix
        } else {
            10
        };

        let mut buf = [0u8; ENCODED_MAX];
        String::from(encode_radix_into(self, radix, &mut buf))
    }

    /// Byte-to-hex fast formatter.
    #[cfg(feature = "alloc")]
    fn to_hex_str(&self) -> String {
        let mut out = String::with_capacity(2 * Self::BYTES);

        for byte in self.to_be_bytes() {
            out.push(ALPHABET[(byte >> 4) as usize] as char);
            out.push(ALPHABET[(byte & 0x0F) as usize] as char);
        }

        match out.find(|c| c != '0') {
            Some(start) => out.split_off(start),
            None => String::from("0"),
        }
    }
}

/// Decode one ASCII digit, rejecting anything at or above `radix`.
fn decode_digit(byte: u8, radix: u32) -> Result<u32, Error> {
    let digit = match byte {
        b @ b'0'..=b'9' => b - b'0',
        b @ b'a'..=b'z' => b - b'a' + 10,
        b @ b'A'..=b'Z' => b - b'A' + 10,
        _ => return Err(Error::NotANumber),
    };

    if (digit as u32) < radix {
        Ok(digit.into())
    } else {
        Err(Error::NotANumber)
    }
}

/// Write `value` in `radix` into the tail of `buf`, returning the digits as
/// a string slice. Digits are extracted least significant first and
/// prepended while the quotient is nonzero.
fn encode_radix_into<'a>(value: &U256, radix: u32, buf: &'a mut [u8; ENCODED_MAX]) -> &'a str {
    debug_assert!((RADIX_MIN..=RADIX_MAX).contains(&radix));

    let mut pos = buf.len();

    if let Some(mut scalar) = value.to_scalar() {
        // native fast path
        loop {
            pos -= 1;
            buf[pos] = ALPHABET[(scalar % u64::from(radix)) as usize];
            scalar /= u64::from(radix);
            if scalar == 0 {
                break;
            }
        }
    } else {
        let step = U256::from_u64(radix.into());
        let mut quotient = *value;

        while !quotient.is_zero() {
            let (q, r) = quotient.div_rem_inner(&step);
            pos -= 1;
            buf[pos] = ALPHABET[r.as_limbs()[0].0 as usize];
            quotient = q;
        }
    }

    core::str::from_utf8(&buf[pos..]).expect("digits are ascii")
}

impl fmt::Display for U256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; ENCODED_MAX];
        f.pad(encode_radix_into(self, 10, &mut buf))
    }
}

impl FromStr for U256 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Self::from_str_radix(s, 10)
    }
}
