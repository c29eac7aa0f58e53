//! Hash-to-scalar challenge derivation (§4.2).
//!
//! Grounded on `original_source/src/signature.c`'s `gen_h`: `H(msg, r) = SHA256(r || SHA256(msg))`,
//! reduced to an integer and rejected if it is `0` or `>= n`. This is a bespoke construction,
//! not BIP-340's tagged hash; it must be reproduced bit-exact rather than "improved".

use num_bigint::BigUint;
use sha2::{Digest, Sha256};

use crate::errors::SchnorrError;
use crate::scalar;

/// `H(msg, r) -> scalar in [1, n)`.
///
/// Returns [`SchnorrError::DegenerateHash`] if the derived integer is `0` or `>= n`; this branch
/// is cryptographically negligible to hit but must exist (§4.2).
pub(crate) fn hash_to_scalar(msg: &[u8], r: &[u8; 32]) -> Result<BigUint, SchnorrError> {
    let msg_hash = Sha256::digest(msg);

    let mut payload = [0u8; 64];
    payload[..32].copy_from_slice(r);
    payload[32..].copy_from_slice(&msg_hash);

    let h_bytes = Sha256::digest(payload);
    let h = BigUint::from_bytes_be(&h_bytes);

    if h == BigUint::from(0u32) || h >= scalar::curve_order() {
        return Err(SchnorrError::DegenerateHash);
    }

    Ok(h)
}
