//! Equivalence tests between `uint256::U256` and `num_bigint::BigUint`.

use num_bigint::BigUint;
use num_integer::Integer as _;
use num_traits::One;
use proptest::prelude::*;
use uint256::{Error, U256};

fn to_biguint(uint: &U256) -> BigUint {
    BigUint::from_bytes_le(&uint.to_le_bytes())
}

fn to_uint(big_uint: BigUint) -> U256 {
    let mut bytes = [0u8; U256::BYTES];
    let encoded = big_uint.to_bytes_le();
    let len = encoded.len().min(U256::BYTES);
    bytes[..len].copy_from_slice(&encoded[..len]);

    U256::from_le_bytes(bytes)
}

/// `hi * 2^128 + lo`
fn pair(lo: u64, hi: u64) -> U256 {
    (U256::from_u64(hi) << 128) | U256::from_u64(lo)
}

prop_compose! {
    fn uint()(bytes in any::<[u8; 32]>()) -> U256 {
        U256::from_le_bytes(bytes)
    }
}

proptest! {
    #[test]
    fn roundtrip(a in uint()) {
        prop_assert_eq!(a, to_uint(to_biguint(&a)));
    }

    #[test]
    fn bits(a in uint()) {
        prop_assert_eq!(to_biguint(&a).bits() as u32, a.bits());
    }

    #[test]
    fn bit_count(a in uint()) {
        prop_assert_eq!(to_biguint(&a).count_ones() as u32, a.bit_count());
    }

    #[test]
    fn wrapping_add(a in uint(), b in uint()) {
        let expected = to_uint(to_biguint(&a) + to_biguint(&b));
        prop_assert_eq!(expected, a.wrapping_add(&b));
    }

    #[test]
    fn add_commutes(a in uint(), b in uint()) {
        prop_assert_eq!(a.wrapping_add(&b), b.wrapping_add(&a));
    }

    #[test]
    fn wrapping_sub(a in uint(), b in uint()) {
        let expected = to_uint((BigUint::one() << 256u32) + to_biguint(&a) - to_biguint(&b));
        prop_assert_eq!(expected, a.wrapping_sub(&b));
    }

    #[test]
    fn add_sub_inverse(a in uint(), b in uint()) {
        prop_assert_eq!(a.wrapping_add(&b).wrapping_sub(&b), a);
    }

    #[test]
    fn wrapping_mul(a in uint(), b in uint()) {
        let expected = to_uint(to_biguint(&a) * to_biguint(&b));
        prop_assert_eq!(expected, a.wrapping_mul(&b));
    }

    #[test]
    fn mul_commutes(a in uint(), b in uint()) {
        prop_assert_eq!(a.wrapping_mul(&b), b.wrapping_mul(&a));
    }

    #[test]
    fn widening_mul_recomposes(a in uint(), b in uint()) {
        let (lo, hi) = a.widening_mul(&b);
        let expected = to_biguint(&a) * to_biguint(&b);
        let recomposed = (to_biguint(&hi) << 256u32) + to_biguint(&lo);
        prop_assert_eq!(expected, recomposed);
    }

    #[test]
    fn checked_add_detects_overflow(a in uint(), b in uint()) {
        let wide = to_biguint(&a) + to_biguint(&b);

        match a.checked_add(&b) {
            Ok(sum) => {
                prop_assert_eq!(to_biguint(&sum), wide);
            }
            Err(err) => {
                prop_assert_eq!(err, Error::Overflow);
                prop_assert!(wide.bits() > 256);
            }
        }
    }

    #[test]
    fn checked_sub_requires_ordered_operands(a in uint(), b in uint()) {
        match a.checked_sub(&b) {
            Ok(diff) => {
                prop_assert!(a >= b);
                prop_assert_eq!(to_biguint(&diff), to_biguint(&a) - to_biguint(&b));
            }
            Err(err) => {
                prop_assert_eq!(err, Error::Overflow);
                prop_assert!(a < b);
            }
        }
    }

    #[test]
    fn checked_mul_detects_overflow(a in uint(), b in uint()) {
        let wide = to_biguint(&a) * to_biguint(&b);

        match a.checked_mul(&b) {
            Ok(product) => {
                prop_assert_eq!(to_biguint(&product), wide);
            }
            Err(err) => {
                prop_assert_eq!(err, Error::Overflow);
                prop_assert!(wide.bits() > 256);
            }
        }
    }

    #[test]
    fn division_law(a in uint(), b in uint()) {
        prop_assume!(!b.is_zero());

        let (q, r) = a.div_rem(&b).unwrap();

        prop_assert!(r < b);
        prop_assert_eq!(b.wrapping_mul(&q).wrapping_add(&r), a);

        let (expected_q, expected_r) = to_biguint(&a).div_rem(&to_biguint(&b));
        prop_assert_eq!(to_biguint(&q), expected_q);
        prop_assert_eq!(to_biguint(&r), expected_r);
    }

    #[test]
    fn shl(a in uint(), shift in 0u32..512) {
        let expected = to_uint(to_biguint(&a) << shift);
        prop_assert_eq!(expected, a << shift);
    }

    #[test]
    fn shr(a in uint(), shift in 0u32..512) {
        let expected = to_uint(to_biguint(&a) >> shift);
        prop_assert_eq!(expected, a >> shift);
    }

    #[test]
    fn shift_mul_equivalence(a in uint(), shift in 0u32..53) {
        let factor = U256::from_scalar(1u64 << shift).unwrap();
        prop_assert_eq!(a << shift, a.wrapping_mul(&factor));
    }

    #[test]
    fn bitwise_ops(a in uint(), b in uint()) {
        let (a_bi, b_bi) = (to_biguint(&a), to_biguint(&b));

        prop_assert_eq!(to_uint(&a_bi & &b_bi), a & b);
        prop_assert_eq!(to_uint(&a_bi | &b_bi), a | b);
        prop_assert_eq!(to_uint(&a_bi ^ &b_bi), a ^ b);
        prop_assert_eq!(a.and_not(&b), a & !b);

        prop_assert_eq!(a & b, b & a);
        prop_assert_eq!(a | b, b | a);
        prop_assert_eq!(a ^ b, b ^ a);
    }

    #[test]
    fn ones_complement_identity(a in uint()) {
        prop_assert_eq!(a.wrapping_add(&a.not()), U256::MAX);
        prop_assert_eq!(a.wrapping_add(&a.negate()), U256::MAX);
    }

    #[test]
    fn cmp_matches_reference(a in uint(), b in uint()) {
        prop_assert_eq!(to_biguint(&a).cmp(&to_biguint(&b)), a.cmp(&b));
    }

    #[test]
    fn gcd_divides_both(a in uint(), b in uint()) {
        prop_assume!(!a.is_zero() && !b.is_zero());

        let g = a.gcd(&b).unwrap();

        prop_assert_eq!(a.checked_rem(&g).unwrap(), U256::ZERO);
        prop_assert_eq!(b.checked_rem(&g).unwrap(), U256::ZERO);
        prop_assert_eq!(to_biguint(&g), to_biguint(&a).gcd(&to_biguint(&b)));
    }

    #[test]
    fn radix_round_trip(a in uint(), radix in 2u32..=36) {
        let encoded = a.to_string_radix(radix);
        prop_assert_eq!(U256::from_str_radix(&encoded, radix), Ok(a));
    }

    #[test]
    fn radix_encoding_is_canonical(a in uint(), radix in 2u32..=36) {
        let encoded = a.to_string_radix(radix);

        prop_assert_eq!(encoded.to_lowercase(), encoded.clone());
        if encoded != "0" {
            prop_assert!(!encoded.starts_with('0'));
        }
        prop_assert_eq!(encoded, to_biguint(&a).to_str_radix(radix));
    }

    #[test]
    fn byte_round_trip(a in uint()) {
        prop_assert_eq!(U256::from_be_bytes(a.to_be_bytes()), a);
        prop_assert_eq!(U256::from_le_bytes(a.to_le_bytes()), a);
    }

    #[test]
    fn bit_ops_laws(a in uint(), index in 0u32..256) {
        prop_assert!(a.set_bit(index).test_bit(index));
        prop_assert!(!a.clear_bit(index).test_bit(index));
        prop_assert_eq!(a.flip_bit(index).flip_bit(index), a);
    }
}

#[test]
fn divide_by_zero_everywhere() {
    let a = U256::from_u64(7);

    assert_eq!(a.div_rem(&U256::ZERO), Err(Error::DivideByZero));
    assert_eq!(a.checked_div(&U256::ZERO), Err(Error::DivideByZero));
    assert_eq!(a.checked_rem(&U256::ZERO), Err(Error::DivideByZero));
    assert_eq!(a.gcd(&U256::ZERO), Err(Error::DivideByZero));
}

#[test]
fn wraparound_at_the_top() {
    assert_eq!(U256::MAX.wrapping_add(&U256::ONE), U256::ZERO);
}

#[test]
fn scenario_not_zero_is_all_ones() {
    let n = U256::ZERO.not();

    assert_eq!(n.bit_count(), 256);
    assert_eq!(n.to_string_radix(16), "f".repeat(64));
}

#[test]
fn scenario_max_safe_integer_displays_natively() {
    let n = U256::from_scalar(9007199254740991).unwrap();
    assert_eq!(n.to_string(), "9007199254740991");
}

#[test]
fn scenario_pair_addition() {
    assert_eq!(pair(1, 0) + pair(0, 1), pair(1, 1));
}

#[test]
fn scenario_gcd() {
    assert_eq!(U256::from_u64(4).gcd(&U256::from_u64(6)), Ok(U256::from_u64(2)));
}

#[test]
fn scenario_pow() {
    assert_eq!(U256::from_u64(10).pow(3), Ok(U256::from_u64(1000)));
}

#[test]
fn scenario_binary_parse_bit_count() {
    let n = U256::from_str_radix("1011010", 2).unwrap();
    assert_eq!(n.bit_count(), 4);
}
