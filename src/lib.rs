//! Fixed-width 256-bit unsigned integer arithmetic.
//!
//! # About
//! This library provides [`U256`], an unsigned integer covering exactly 256
//! bits, stored as a constant number of 64-bit limbs rather than a native
//! machine word. It is intended for contexts that need wraparound integer
//! semantics wider than native register width, such as token or ledger
//! arithmetic.
//!
//! Every arithmetic result is implicitly reduced modulo 2^256. The
//! overflow-checked forms (`checked_add`, `checked_sub`, `checked_mul`, and
//! the [`Checked`] operator wrapper) verify their algebraic invariants and
//! fail with [`Error::Overflow`] instead of wrapping.
//!
//! # Goals
//! - No heap allocations in arithmetic; `no_std`-friendly. String formatting
//!   is behind the `alloc` feature (on by default).
//! - `const fn` kernels for the carry-propagating limb arithmetic, usable in
//!   constant expressions.
//! - Explicit failure taxonomy ([`Error`]) instead of panics: parsing,
//!   division, and checked arithmetic report errors at the call site.
//!
//! ```
//! use uint256::U256;
//!
//! let a = U256::from_u64(6);
//! let b = U256::from_u64(4);
//!
//! assert_eq!(a.wrapping_add(&b), U256::from_u64(10));
//! assert_eq!(b.gcd(&a)?, U256::from_u64(2));
//! assert_eq!(U256::MAX.wrapping_add(&U256::ONE), U256::ZERO);
//! # Ok::<(), uint256::Error>(())
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod checked;
mod error;
mod limb;
mod operand;
mod primitives;
mod uint;

pub use crate::{
    checked::Checked,
    error::Error,
    limb::{Limb, Word},
    operand::{MAX_SAFE_SCALAR, Operand},
    uint::U256,
};
pub use subtle;
