//! Limb multiplication.

use crate::{Limb, primitives::carrying_mul_add};

impl Limb {
    /// Computes `(self * rhs) + addend + carry`, returning the result along
    /// with the new carry. The full double-width product is split across the
    /// two returned limbs.
    #[inline(always)]
    #[must_use]
    pub const fn carrying_mul_add(self, rhs: Limb, addend: Limb, carry: Limb) -> (Limb, Limb) {
        let (res, carry) = carrying_mul_add(self.0, rhs.0, addend.0, carry.0);
        (Limb(res), Limb(carry))
    }
}
