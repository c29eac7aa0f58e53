//! Nonce commitment derivation with Y-parity normalization (§4.1).
//!
//! Grounded on `original_source/src/signature.c`'s `gen_r`: compute `R = k*G`, and if `R.y` is
//! odd, negate `k` and recompute so the emitted commitment always has an even-Y representative.
//! Verification only ever compares the X-coordinate, so fixing the parity here removes the sign
//! ambiguity without needing a parity bit in the signature.

use num_bigint::BigUint;
use secp256k1::{PublicKey, Secp256k1, SecretKey};

use crate::errors::SchnorrError;
use crate::scalar;

/// Computes `R = k*G` and returns `(r, k')`, where `r` is `R.x` as a 32-byte big-endian buffer
/// and `k'` is `k`, negated modulo `n` if that was necessary to make `R.y` even.
///
/// Every caller must use the returned `k'` — not the original `k` — in any subsequent
/// `s = k - h*a` computation, since `k'` is the scalar that actually produces `R` (§9).
pub(crate) fn derive_r_from_k(k: &BigUint) -> Result<([u8; 32], BigUint), SchnorrError> {
    let k = scalar::reduce_mod_n(k);
    if k == BigUint::from(0u32) {
        return Err(SchnorrError::ArithmeticFailure);
    }

    let secp = Secp256k1::new();
    let sk = SecretKey::from_slice(&scalar::to_bytes(&k))?;
    let point = PublicKey::from_secret_key(&secp, &sk);
    let serialized = point.serialize();

    if serialized[0] == 0x02 {
        let mut r = [0u8; 32];
        r.copy_from_slice(&serialized[1..]);
        return Ok((r, k));
    }

    // R.y was odd: negate k and recompute. Negation leaves the X-coordinate of the resulting
    // point unchanged in general secp256k1 terms, but R is a *different* point here (k and
    // n - k generate different points unless k is self-inverse), so we must recompute R, not
    // just flip a parity bit.
    let negated_k = &scalar::curve_order() - &k;
    let negated_sk = SecretKey::from_slice(&scalar::to_bytes(&negated_k))?;
    let negated_point = PublicKey::from_secret_key(&secp, &negated_sk);
    let negated_serialized = negated_point.serialize();
    debug_assert_eq!(negated_serialized[0], 0x02, "negating k must flip R's Y-parity");

    let mut r = [0u8; 32];
    r.copy_from_slice(&negated_serialized[1..]);
    Ok((r, negated_k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_even_y_commitment() {
        let k = BigUint::from(42u32);
        let (_, k_prime) = derive_r_from_k(&k).expect("derivation succeeds");

        let secp = Secp256k1::new();
        let sk = SecretKey::from_slice(&scalar::to_bytes(&k_prime)).unwrap();
        let point = PublicKey::from_secret_key(&secp, &sk);
        assert_eq!(point.serialize()[0], 0x02);
    }

    #[test]
    fn rejects_zero_nonce() {
        let err = derive_r_from_k(&BigUint::from(0u32)).unwrap_err();
        assert_eq!(err, SchnorrError::ArithmeticFailure);
    }

    #[test]
    fn rejects_nonce_congruent_to_zero_mod_n() {
        let err = derive_r_from_k(&scalar::curve_order()).unwrap_err();
        assert_eq!(err, SchnorrError::ArithmeticFailure);
    }
}
