//! Classic Schnorr key generation, signing, and verification (§4.3–§4.5).

use num_bigint::BigUint;
use rand::rngs::OsRng;
use rand::RngCore;
use secp256k1::{PublicKey, Secp256k1, SecretKey};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::{SchnorrError, VerifyOutcome};
use crate::hash;
use crate::nonce;
use crate::scalar;
use crate::signatures::{verify_schnorr, SchnorrSig};

/// A secret Schnorr signing key: a uniformly random scalar `a` in `[1, n-1]` (§3).
///
/// Holds the scalar as raw bytes rather than a [`BigUint`], since `BigUint` does not implement
/// [`Zeroize`]; the scalar is reconstituted into a `BigUint` only within the scope of a
/// signing call.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SigningKey {
    a: [u8; 32],
}

/// The public counterpart of a [`SigningKey`]: `A = a*G`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VerifyingKey {
    point: PublicKey,
}

impl core::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SigningKey").field("a", &"REDACTED").finish()
    }
}

impl SigningKey {
    /// Samples a uniformly random signing key in `[1, n-1]` (§4.3).
    ///
    /// # Returns
    ///
    /// * `Ok(SigningKey)` on success.
    /// * `Err(SchnorrError)` only if the system RNG itself fails; an out-of-range sample is
    ///   silently retried rather than surfaced as an error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schnorr::SigningKey;
    ///
    /// let signing_key = SigningKey::random().expect("rng failure");
    /// let verifying_key = signing_key.verifying_key().expect("point derivation failed");
    /// ```
    pub fn random() -> Result<Self, SchnorrError> {
        let n = scalar::curve_order();
        let mut rng = OsRng;
        loop {
            let mut bytes = [0u8; 32];
            rng.fill_bytes(&mut bytes);
            let candidate = scalar::to_biguint(&bytes);
            if candidate != BigUint::from(0u32) && candidate < n {
                tracing::debug!("generated a new schnorr signing key");
                return Ok(Self { a: bytes });
            }
        }
    }

    /// Builds a signing key from an already-known scalar, e.g. one produced by
    /// [`crate::committed_r::recover`].
    ///
    /// Rejects `a == 0` or `a >= n` with [`SchnorrError::ArithmeticFailure`] rather than
    /// trusting the caller, since unlike [`SigningKey::random`] this constructor takes
    /// caller-supplied data that may be out of range.
    ///
    /// # Arguments
    ///
    /// * `a` - the signing scalar, already reduced or known to lie in `[1, n-1]`.
    ///
    /// # Returns
    ///
    /// * `Ok(SigningKey)` if `a` is in range.
    /// * `Err(SchnorrError::ArithmeticFailure)` if `a == 0` or `a >= n`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use num_bigint::BigUint;
    /// use schnorr::SigningKey;
    ///
    /// let signing_key = SigningKey::from_scalar(BigUint::from(42u32)).expect("in-range scalar");
    /// assert!(signing_key.verifying_key().is_ok());
    /// ```
    pub fn from_scalar(a: BigUint) -> Result<Self, SchnorrError> {
        let n = scalar::curve_order();
        if a == BigUint::from(0u32) || a >= n {
            return Err(SchnorrError::ArithmeticFailure);
        }
        Ok(Self { a: scalar::to_bytes(&a) })
    }

    /// Derives the public verifying key `A = a*G`.
    ///
    /// # Returns
    ///
    /// * `Ok(VerifyingKey)` on success.
    /// * `Err(SchnorrError)` if the stored scalar cannot be loaded as a secp256k1 secret key;
    ///   unreachable for a key produced by [`SigningKey::random`] or [`SigningKey::from_scalar`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use schnorr::SigningKey;
    ///
    /// let signing_key = SigningKey::random().expect("rng failure");
    /// let verifying_key = signing_key.verifying_key().expect("point derivation failed");
    /// ```
    pub fn verifying_key(&self) -> Result<VerifyingKey, SchnorrError> {
        let secp = Secp256k1::new();
        let sk = SecretKey::from_slice(&self.a)?;
        Ok(VerifyingKey {
            point: PublicKey::from_secret_key(&secp, &sk),
        })
    }

    /// Signs `msg`, sampling a fresh nonce per §4.4.
    ///
    /// The raw nonce bytes are held in a [`zeroize::Zeroizing`] buffer so the sampled candidate
    /// is scrubbed on every exit path, including the rejection loop.
    ///
    /// # Arguments
    ///
    /// * `msg` - the message to sign, hashed internally; no pre-hashing by the caller.
    ///
    /// # Returns
    ///
    /// * `Ok(SchnorrSig)` on success.
    /// * `Err(SchnorrError)` if nonce derivation or the challenge hash degenerates; negligible
    ///   probability for a uniformly sampled nonce.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schnorr::SigningKey;
    ///
    /// let signing_key = SigningKey::random().expect("rng failure");
    /// let signature = signing_key.sign(b"hello").expect("signing failed");
    /// ```
    pub fn sign(&self, msg: &[u8]) -> Result<SchnorrSig, SchnorrError> {
        let n = scalar::curve_order();
        let mut rng = OsRng;

        let mut k_bytes = zeroize::Zeroizing::new([0u8; 32]);
        let k = loop {
            rng.fill_bytes(&mut *k_bytes);
            let candidate = scalar::to_biguint(&k_bytes);
            if candidate != BigUint::from(0u32) && candidate < n {
                break candidate;
            }
        };

        let (r, k_prime) = nonce::derive_r_from_k(&k)?;

        let h = hash::hash_to_scalar(msg, &r)?;
        let a = scalar::to_biguint(&self.a);
        let s = scalar::sub_mod_n(&k_prime, &scalar::mul_mod_n(&h, &a));

        Ok(SchnorrSig {
            r,
            s: scalar::to_bytes(&s),
        })
    }
}

impl VerifyingKey {
    /// Verifies `sig` over `msg` per §4.5, returning a tri-valued outcome (§7, §9).
    ///
    /// # Arguments
    ///
    /// * `sig` - the signature to check.
    /// * `msg` - the message the signature is claimed to cover.
    ///
    /// # Returns
    ///
    /// A [`VerifyOutcome`]: `Valid`, `Invalid`, or `Error` if verification could not be
    /// completed at all (e.g. a malformed `s`). `Invalid` and `Error` are deliberately distinct
    /// so callers can't mistake a malformed signature for a forged one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schnorr::SigningKey;
    ///
    /// let signing_key = SigningKey::random().expect("rng failure");
    /// let verifying_key = signing_key.verifying_key().expect("point derivation failed");
    /// let signature = signing_key.sign(b"hello").expect("signing failed");
    /// assert!(verifying_key.verify(&signature, b"hello").is_valid());
    /// ```
    pub fn verify(&self, sig: &SchnorrSig, msg: &[u8]) -> VerifyOutcome {
        let outcome = verify_schnorr(sig, &self.point, msg);
        match outcome {
            VerifyOutcome::Valid => tracing::debug!("schnorr signature verified"),
            VerifyOutcome::Invalid => tracing::debug!("schnorr signature rejected as invalid"),
            VerifyOutcome::Error(ref e) => tracing::warn!("schnorr verification error: {e}"),
        }
        outcome
    }

    pub(crate) fn point(&self) -> &PublicKey {
        &self.point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_signature_verifies() {
        let key = SigningKey::random().unwrap();
        let pub_key = key.verifying_key().unwrap();
        let sig = key.sign(b"hello").unwrap();
        assert_eq!(pub_key.verify(&sig, b"hello"), VerifyOutcome::Valid);
    }

    #[test]
    fn signature_does_not_bind_to_different_message() {
        let key = SigningKey::random().unwrap();
        let pub_key = key.verifying_key().unwrap();
        let sig = key.sign(b"hello").unwrap();
        assert_eq!(pub_key.verify(&sig, b"hellO"), VerifyOutcome::Invalid);
    }

    #[test]
    fn signature_does_not_verify_under_a_different_key() {
        let key1 = SigningKey::random().unwrap();
        let key2 = SigningKey::random().unwrap();
        let sig = key1.sign(b"hello").unwrap();
        let pub2 = key2.verifying_key().unwrap();
        assert_eq!(pub2.verify(&sig, b"hello"), VerifyOutcome::Invalid);
    }

    #[test]
    fn s_equal_to_curve_order_is_invalid_not_error() {
        let key = SigningKey::random().unwrap();
        let pub_key = key.verifying_key().unwrap();
        let mut sig = key.sign(b"hello").unwrap();
        sig.s = scalar::to_bytes(&scalar::curve_order());
        assert_eq!(pub_key.verify(&sig, b"hello"), VerifyOutcome::Invalid);
    }

    #[test]
    fn tampering_with_r_invalidates_the_signature() {
        let key = SigningKey::random().unwrap();
        let pub_key = key.verifying_key().unwrap();
        let mut sig = key.sign(b"hello").unwrap();
        sig.r[0] ^= 0x01;
        assert_eq!(pub_key.verify(&sig, b"hello"), VerifyOutcome::Invalid);
    }

    #[test]
    fn from_scalar_rejects_zero() {
        let err = SigningKey::from_scalar(BigUint::from(0u32)).unwrap_err();
        assert_eq!(err, SchnorrError::ArithmeticFailure);
    }

    #[test]
    fn from_scalar_rejects_values_at_or_above_curve_order() {
        let err = SigningKey::from_scalar(scalar::curve_order()).unwrap_err();
        assert_eq!(err, SchnorrError::ArithmeticFailure);

        let err = SigningKey::from_scalar(BigUint::from(2u32).pow(300)).unwrap_err();
        assert_eq!(err, SchnorrError::ArithmeticFailure);
    }

    #[test]
    fn from_scalar_accepts_in_range_values() {
        let key = SigningKey::from_scalar(BigUint::from(42u32)).unwrap();
        assert!(key.verifying_key().is_ok());
    }
}
