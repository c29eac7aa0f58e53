//! Pre-committed-R Schnorr signatures and nonce-reuse key recovery (§4.6).
//!
//! Grounded on `original_source/src/signature.c`'s `committed_r_sign`, `committed_r_verify`
//! (which just calls into the same verification as classic Schnorr), and
//! `committed_r_recover`.

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

/// A committed-R private key: a signing scalar `a` and a fixed nonce `k`, sampled once at key
/// generation and reused for every signature under this key (§3).
///
/// Reusing `k` across two signatures on distinct messages leaks `a` (see [`recover`]); this is
/// the scheme's documented trade-off, not a bug.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct CommittedRPrivKey {
    a: [u8; 32],
    k: [u8; 32],
    #[zeroize(skip)]
    pub_key: CommittedRPubKey,
}

/// The public half of a [`CommittedRPrivKey`]: the verifying point `A` and the commitment `r`
/// (the X-coordinate of `R = k*G`, with even Y).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CommittedRPubKey {
    point: PublicKey,
    r: [u8; 32],
}

/// A committed-R signature: only `s`, since `r` is published with the public key (§3).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CommittedRSig {
    pub s: [u8; 32],
}

impl core::fmt::Debug for CommittedRPrivKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CommittedRPrivKey")
            .field("a", &"REDACTED")
            .field("k", &"REDACTED")
            .field("pub_key", &self.pub_key)
            .finish()
    }
}

impl CommittedRPrivKey {
    /// Samples `a` and `k` uniformly in `[1, n-1]`, normalizes `k` for even-Y `R` (§4.1), and
    /// stores the resulting commitment alongside `A` (§4.6 key generation).
    ///
    /// # Returns
    ///
    /// * `Ok(CommittedRPrivKey)` on success.
    /// * `Err(SchnorrError)` only if the system RNG itself fails or point derivation errors.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schnorr::CommittedRPrivKey;
    ///
    /// let signing_key = CommittedRPrivKey::random().expect("rng failure");
    /// let signature = signing_key.sign(b"hello").expect("signing failed");
    /// assert!(signing_key.pub_key().verify(&signature, b"hello").is_valid());
    /// ```
    pub fn random() -> Result<Self, SchnorrError> {
        let a = sample_nonzero_scalar()?;
        let k = sample_nonzero_scalar()?;

        let secp = Secp256k1::new();
        let sk = SecretKey::from_slice(&scalar::to_bytes(&a))?;
        let point = PublicKey::from_secret_key(&secp, &sk);

        let (r, k_prime) = nonce::derive_r_from_k(&k)?;

        tracing::debug!("generated a new committed-R signing key");
        Ok(Self {
            a: scalar::to_bytes(&a),
            k: scalar::to_bytes(&k_prime),
            pub_key: CommittedRPubKey { point, r },
        })
    }

    /// Returns the public key published alongside this private key.
    pub fn pub_key(&self) -> &CommittedRPubKey {
        &self.pub_key
    }

    pub(crate) fn a(&self) -> BigUint {
        scalar::to_biguint(&self.a)
    }

    pub(crate) fn k(&self) -> BigUint {
        scalar::to_biguint(&self.k)
    }

    pub(crate) fn r(&self) -> [u8; 32] {
        self.pub_key.r
    }

    /// Signs `msg` under the key's fixed commitment (§4.6 sign): `s = k - h*a mod n`.
    ///
    /// Calling this twice on two distinct messages under the same key is exactly the nonce
    /// reuse that [`recover`] exploits; see that function's docs.
    ///
    /// # Arguments
    ///
    /// * `msg` - the message to sign, hashed internally against the key's published `r`.
    ///
    /// # Returns
    ///
    /// * `Ok(CommittedRSig)` on success.
    /// * `Err(SchnorrError)` if the challenge hash degenerates; negligible probability.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schnorr::CommittedRPrivKey;
    ///
    /// let signing_key = CommittedRPrivKey::random().expect("rng failure");
    /// let signature = signing_key.sign(b"hello").expect("signing failed");
    /// ```
    pub fn sign(&self, msg: &[u8]) -> Result<CommittedRSig, SchnorrError> {
        let h = hash::hash_to_scalar(msg, &self.pub_key.r)?;
        let a = scalar::to_biguint(&self.a);
        let k = scalar::to_biguint(&self.k);
        let s = scalar::sub_mod_n(&k, &scalar::mul_mod_n(&h, &a));
        Ok(CommittedRSig {
            s: scalar::to_bytes(&s),
        })
    }
}

impl CommittedRPubKey {
    /// Verifies `sig` over `msg`, reusing the classic Schnorr verification equation against the
    /// key's published `r` (§4.6 verify).
    ///
    /// # Arguments
    ///
    /// * `sig` - the signature to check.
    /// * `msg` - the message the signature is claimed to cover.
    ///
    /// # Returns
    ///
    /// A [`VerifyOutcome`]: `Valid`, `Invalid`, or `Error` if verification could not be
    /// completed at all.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schnorr::CommittedRPrivKey;
    ///
    /// let signing_key = CommittedRPrivKey::random().expect("rng failure");
    /// let signature = signing_key.sign(b"hello").expect("signing failed");
    /// assert!(signing_key.pub_key().verify(&signature, b"hello").is_valid());
    /// ```
    pub fn verify(&self, sig: &CommittedRSig, msg: &[u8]) -> VerifyOutcome {
        let full_sig = SchnorrSig {
            r: self.r,
            s: sig.s,
        };
        let outcome = verify_schnorr(&full_sig, &self.point, msg);
        match outcome {
            VerifyOutcome::Valid => tracing::debug!("committed-R signature verified"),
            VerifyOutcome::Invalid => tracing::debug!("committed-R signature rejected as invalid"),
            VerifyOutcome::Error(ref e) => tracing::warn!("committed-R verification error: {e}"),
        }
        outcome
    }

    pub(crate) fn point(&self) -> &PublicKey {
        &self.point
    }

    pub(crate) fn r(&self) -> [u8; 32] {
        self.r
    }
}

/// Recovers `(a, k)` from two committed-R signatures on distinct messages under the same key
/// (§4.6 Recover).
///
/// `k` is returned as the post-normalization value bound into `s1`/`s2` (the same value emitted
/// by [`CommittedRPrivKey::random`] after §4.1's negation, per §8 property 6), not any
/// pre-normalization scalar the caller might have sampled.
///
/// # Arguments
///
/// * `sig1`, `msg1` - the first signature and the message it covers.
/// * `sig2`, `msg2` - the second signature and the message it covers; must differ from `msg1`.
/// * `pub_key` - the public key both signatures were produced under.
///
/// # Returns
///
/// * `Ok((a, k))` - the recovered signing scalar and the bound nonce.
/// * `Err(SchnorrError::RecoveryInfeasible)` - if the two messages hash to the same challenge,
///   or the inverse step is undefined.
/// * `Err(SchnorrError::ArithmeticFailure)` - if the recovered scalar doesn't reproduce
///   `pub_key`'s point or commitment, meaning the two signatures weren't actually a nonce-reuse
///   pair under this key.
///
/// # Example
///
/// ```rust
/// use schnorr::{recover, CommittedRPrivKey, SigningKey};
///
/// let signing_key = CommittedRPrivKey::random().expect("rng failure");
/// let sig1 = signing_key.sign(b"hello").expect("sign 1");
/// let sig2 = signing_key.sign(b"goodbye").expect("sign 2");
///
/// let (a, _k) = recover(&sig1, b"hello", &sig2, b"goodbye", signing_key.pub_key())
///     .expect("recovery");
/// let recovered = SigningKey::from_scalar(a).expect("in-range scalar");
/// let recovered_vk = recovered.verifying_key().expect("point derivation failed");
/// let forged = recovered.sign(b"new message").expect("sign with recovered key");
/// assert!(recovered_vk.verify(&forged, b"new message").is_valid());
/// ```
pub fn recover(
    sig1: &CommittedRSig,
    msg1: &[u8],
    sig2: &CommittedRSig,
    msg2: &[u8],
    pub_key: &CommittedRPubKey,
) -> Result<(BigUint, BigUint), SchnorrError> {
    let h1 = hash::hash_to_scalar(msg1, &pub_key.r)?;
    let h2 = hash::hash_to_scalar(msg2, &pub_key.r)?;

    if h1 == h2 {
        return Err(SchnorrError::RecoveryInfeasible);
    }

    let s1 = scalar::to_biguint(&sig1.s);
    let s2 = scalar::to_biguint(&sig2.s);

    // a = (s2 - s1) * (h1 - h2)^-1 mod n
    let h_diff = scalar::sub_mod_n(&h1, &h2);
    let h_diff_inv = scalar::inv_mod_n(&h_diff).ok_or(SchnorrError::RecoveryInfeasible)?;
    let s_diff = scalar::sub_mod_n(&s2, &s1);
    let a = scalar::mul_mod_n(&s_diff, &h_diff_inv);

    // k = s2 + h2*a mod n
    let k = scalar::add_mod_n(&s2, &scalar::mul_mod_n(&h2, &a));

    let secp = Secp256k1::new();
    let sk = SecretKey::from_slice(&scalar::to_bytes(&a))?;
    let recovered_point = PublicKey::from_secret_key(&secp, &sk);
    if recovered_point != pub_key.point {
        return Err(SchnorrError::ArithmeticFailure);
    }

    let (recovered_r, _) = nonce::derive_r_from_k(&k)?;
    if recovered_r != pub_key.r {
        return Err(SchnorrError::ArithmeticFailure);
    }

    tracing::warn!("recovered a private key from a reused committed-R commitment");
    Ok((a, k))
}

fn sample_nonzero_scalar() -> Result<BigUint, SchnorrError> {
    let n = scalar::curve_order();
    let mut rng = OsRng;
    loop {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        let candidate = scalar::to_biguint(&bytes);
        if candidate != BigUint::from(0u32) && candidate < n {
            return Ok(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::SigningKey;

    #[test]
    fn round_trip_signature_verifies() {
        let key = CommittedRPrivKey::random().unwrap();
        let sig = key.sign(b"hello").unwrap();
        assert_eq!(key.pub_key().verify(&sig, b"hello"), VerifyOutcome::Valid);
    }

    #[test]
    fn reusing_the_commitment_across_two_messages_leaks_the_key() {
        let key = CommittedRPrivKey::random().unwrap();
        let sig1 = key.sign(b"hello").unwrap();
        let sig2 = key.sign(b"hellO").unwrap();

        let (recovered_a, recovered_k) =
            recover(&sig1, b"hello", &sig2, b"hellO", key.pub_key()).unwrap();

        assert_eq!(recovered_a, key.a());
        assert_eq!(recovered_k, key.k());

        let recovered_signing_key = SigningKey::from_scalar(recovered_a).unwrap();
        let sig = recovered_signing_key.sign(b"random").unwrap();
        let recovered_pub = recovered_signing_key.verifying_key().unwrap();
        assert_eq!(recovered_pub.point(), key.pub_key().point());
        assert_eq!(recovered_pub.verify(&sig, b"random"), VerifyOutcome::Valid);
    }

    #[test]
    fn recovery_with_equal_hashes_is_infeasible() {
        let key = CommittedRPrivKey::random().unwrap();
        let sig = key.sign(b"hello").unwrap();
        let err = recover(&sig, b"hello", &sig, b"hello", key.pub_key()).unwrap_err();
        assert_eq!(err, SchnorrError::RecoveryInfeasible);
    }
}
