//! Modular arithmetic over the secp256k1 group order `n`.
//!
//! The `secp256k1` crate's [`secp256k1::Scalar`] is an opaque tweak carrier with no arithmetic
//! of its own, so the scheme-level algebra (§4) — the `s = k - h*a mod n` signing equation, the
//! nonce-reuse recovery division, MuSig's coefficient and summation steps — is built here on
//! [`num_bigint::BigUint`], the same way `basis_core` in this codebase's lineage implements its
//! own secp256k1-based scalar arithmetic.

use num_bigint::BigUint;

use crate::constants::CURVE_ORDER_BE;

/// The order `n` of the secp256k1 generator subgroup.
pub(crate) fn curve_order() -> BigUint {
    BigUint::from_bytes_be(&CURVE_ORDER_BE)
}

/// Interprets a 32-byte big-endian buffer as an unsigned integer.
pub(crate) fn to_biguint(bytes: &[u8; 32]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Encodes a value as a 32-byte big-endian buffer, left-padded with zeros.
///
/// Panics if `value` does not fit in 32 bytes; every caller first reduces modulo `n`, which
/// fits comfortably.
pub(crate) fn to_bytes(value: &BigUint) -> [u8; 32] {
    let be = value.to_bytes_be();
    assert!(be.len() <= 32, "scalar does not fit in 32 bytes");
    let mut out = [0u8; 32];
    let start = 32 - be.len();
    out[start..].copy_from_slice(&be);
    out
}

/// Reduces `value` modulo `n`.
pub(crate) fn reduce_mod_n(value: &BigUint) -> BigUint {
    value % curve_order()
}

/// `(a + b) mod n`.
pub(crate) fn add_mod_n(a: &BigUint, b: &BigUint) -> BigUint {
    (a + b) % curve_order()
}

/// `(a - b) mod n`, correct even when `a < b`.
pub(crate) fn sub_mod_n(a: &BigUint, b: &BigUint) -> BigUint {
    let n = curve_order();
    let a = a % &n;
    let b = b % &n;
    (&a + &n - &b) % &n
}

/// `(a * b) mod n`.
pub(crate) fn mul_mod_n(a: &BigUint, b: &BigUint) -> BigUint {
    (a * b) % curve_order()
}

/// The modular inverse of `a` modulo `n`, or `None` if `a ≡ 0 (mod n)`.
///
/// `n` is prime, so the inverse is computed via Fermat's little theorem:
/// `a^-1 = a^(n-2) mod n`.
pub(crate) fn inv_mod_n(a: &BigUint) -> Option<BigUint> {
    let n = curve_order();
    let a = a % &n;
    if a == BigUint::from(0u32) {
        return None;
    }
    let exponent = &n - BigUint::from(2u32);
    Some(a.modpow(&exponent, &n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_round_trips() {
        let a = BigUint::from(123456789u64);
        let inv = inv_mod_n(&a).expect("nonzero has an inverse");
        assert_eq!(mul_mod_n(&a, &inv), BigUint::from(1u32));
    }

    #[test]
    fn zero_has_no_inverse() {
        assert!(inv_mod_n(&BigUint::from(0u32)).is_none());
    }

    #[test]
    fn sub_mod_n_wraps_around() {
        let n = curve_order();
        let result = sub_mod_n(&BigUint::from(1u32), &BigUint::from(2u32));
        assert_eq!(result, &n - BigUint::from(1u32));
    }

    #[test]
    fn bytes_round_trip() {
        let value = BigUint::from(0xdead_beefu64);
        let bytes = to_bytes(&value);
        assert_eq!(to_biguint(&bytes), value);
    }
}
