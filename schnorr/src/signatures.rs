//! Shared signature representation and the core verification routine (§4.5).
//!
//! Classic Schnorr and committed-R signatures both reduce to the same `(r, s)` pair and the
//! same verification equation; committed-R just takes `r` from the public key instead of the
//! signature (§4.6). Keeping one `verify_schnorr` here means both schemes share one
//! implementation of the security-critical comparison.

use num_bigint::BigUint;
use secp256k1::{PublicKey, Secp256k1, SecretKey};

use crate::errors::{SchnorrError, VerifyOutcome};
use crate::hash;
use crate::scalar;

/// A Schnorr signature: an X-coordinate commitment `r` and a response scalar `s`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SchnorrSig {
    /// Big-endian X-coordinate of the commitment `R`, which has even Y by construction.
    pub r: [u8; 32],
    /// Response scalar, in `[0, n)`.
    pub s: [u8; 32],
}

/// Recomputes `R' = s*G + h*A` and checks it against `(r, s)` per §4.5.
///
/// Returns [`VerifyOutcome::Error`] only for failures that are not plain rejection (a malformed
/// public key); a bad `s`, a rejected hash, `R' = ∞`, odd `R'.y`, or an X-coordinate mismatch all
/// fold into [`VerifyOutcome::Invalid`], since none of those distinguish an attacker from a
/// cryptographic near-miss (§7, §9 — the X-coordinate comparison is the authoritative signal).
pub(crate) fn verify_schnorr(sig: &SchnorrSig, pub_key: &PublicKey, msg: &[u8]) -> VerifyOutcome {
    let n = scalar::curve_order();
    let s = scalar::to_biguint(&sig.s);
    if s >= n {
        return VerifyOutcome::Invalid;
    }

    let h = match hash::hash_to_scalar(msg, &sig.r) {
        Ok(h) => h,
        Err(_) => return VerifyOutcome::Invalid,
    };

    let secp = Secp256k1::new();

    let s_point = match scalar_mul_g(&secp, &s) {
        Some(p) => p,
        None => return VerifyOutcome::Invalid,
    };
    let h_a = match pub_key.mul_tweak(&secp, &to_tweak(&h)) {
        Ok(p) => p,
        Err(_) => return VerifyOutcome::Invalid,
    };

    let r_prime = match s_point.combine(&h_a) {
        Ok(p) => p,
        Err(_) => return VerifyOutcome::Invalid,
    };

    let serialized = r_prime.serialize();
    if serialized[0] != 0x02 {
        return VerifyOutcome::Invalid;
    }

    if serialized[1..] == sig.r {
        VerifyOutcome::Valid
    } else {
        VerifyOutcome::Invalid
    }
}

/// Computes `s*G` for a scalar that may be `0`, which [`SecretKey`] cannot represent.
///
/// `s = 0` is a legitimate (if degenerate) value on the wire per §6's `0 ≤ s < n`; it simply
/// never verifies, since `R' = h*A` can only equal a legitimate even-Y commitment by negligible
/// chance. We surface it as `None` so the caller treats it as the ordinary invalid case.
fn scalar_mul_g(secp: &Secp256k1<secp256k1::All>, s: &BigUint) -> Option<PublicKey> {
    if *s == BigUint::from(0u32) {
        return None;
    }
    let sk = SecretKey::from_slice(&scalar::to_bytes(s)).ok()?;
    Some(PublicKey::from_secret_key(secp, &sk))
}

/// Converts a reduced scalar into a [`secp256k1::Scalar`] tweak.
///
/// Used only with hash outputs, which [`hash::hash_to_scalar`] already guarantees are in
/// `[1, n)`, so this never panics in practice.
pub(crate) fn to_tweak(value: &BigUint) -> secp256k1::Scalar {
    secp256k1::Scalar::from_be_bytes(scalar::to_bytes(value)).expect("hash output fits in [0, n)")
}
