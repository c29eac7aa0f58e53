//! Two-party (generalizable to L ≥ 2) MuSig key aggregation (§4.7).
//!
//! No original-source file survives for this scheme (the C project's multisig companion was
//! not retained), so the module is built directly from the algebraic contract, structured like
//! [`crate::keys`]'s split between a private-key-shaped signing step and a public aggregate.
//!
//! **Parity-flip convention.** §4.7 leaves open how to fix up an odd-Y combined commitment
//! `R* = Σ R_i`. Negating the aggregate `s*` alone does not work: the verification equation
//! `s*G + h*A* = R*` has an `h*A*` term that does not flip sign along with `s*`. Instead, since
//! point negation flips Y-parity without changing the X-coordinate, and the parity of a sum is
//! not a function of the parities of its summands, every signer independently negates its own
//! nonce `k_i` (and therefore its partial `s_i`) whenever the natural sum has odd Y. The flip
//! decision depends only on the public, ordered list of commitments, so every signer and the
//! verifier compute it identically without coordinating.

use num_bigint::BigUint;
use secp256k1::{PublicKey, Secp256k1};
use sha2::{Digest, Sha256};

use crate::committed_r::{CommittedRPrivKey, CommittedRPubKey};
use crate::errors::{SchnorrError, VerifyOutcome};
use crate::hash;
use crate::scalar;
use crate::signatures::{to_tweak, verify_schnorr, SchnorrSig};

/// The combined public key and commitment derived from an ordered list of signers (§4.7
/// "Combined key").
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombinedPubKey {
    point: PublicKey,
    r: [u8; 32],
    /// `true` if every signer must negate its private nonce to match this combined `r`.
    flip: bool,
}

impl CombinedPubKey {
    /// Returns the combined public key point `A*`.
    pub fn point(&self) -> &PublicKey {
        &self.point
    }

    /// Returns the combined commitment `r* = R*.x`.
    pub fn r(&self) -> [u8; 32] {
        self.r
    }

    /// Verifies an aggregated signature against this combined key, reusing §4.5 unmodified.
    ///
    /// # Arguments
    ///
    /// * `sig` - the aggregated signature returned by [`aggregate`].
    /// * `msg` - the message every partial signer signed.
    ///
    /// # Returns
    ///
    /// A [`VerifyOutcome`]: `Valid`, `Invalid`, or `Error` if verification could not be
    /// completed at all.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schnorr::{aggregate, partial_sign, CommittedRPrivKey};
    ///
    /// let key1 = CommittedRPrivKey::random().expect("rng failure");
    /// let key2 = CommittedRPrivKey::random().expect("rng failure");
    /// let pub_keys = vec![*key1.pub_key(), *key2.pub_key()];
    ///
    /// let (partial1, combined) = partial_sign(&key1, 0, &pub_keys, b"hello").expect("partial 1");
    /// let (partial2, _) = partial_sign(&key2, 1, &pub_keys, b"hello").expect("partial 2");
    /// let sig = aggregate(&[partial1, partial2], &combined);
    ///
    /// assert!(combined.verify(&sig, b"hello").is_valid());
    /// ```
    pub fn verify(&self, sig: &SchnorrSig, msg: &[u8]) -> VerifyOutcome {
        let outcome = verify_schnorr(sig, &self.point, msg);
        match outcome {
            VerifyOutcome::Valid => tracing::debug!("musig aggregate signature verified"),
            VerifyOutcome::Invalid => tracing::debug!("musig aggregate signature rejected as invalid"),
            VerifyOutcome::Error(ref e) => tracing::warn!("musig verification error: {e}"),
        }
        outcome
    }
}

/// A partial signature produced by one signer against a fixed, ordered pubkey list.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PartialSig {
    s: [u8; 32],
}

/// Derives the combined public key and commitment for an ordered list of signers (§4.7).
///
/// The list order must be identical across every signer and the verifier: both `L` and each
/// `a_i` depend on it (§4.7 state machine note).
///
/// # Arguments
///
/// * `pub_keys` - the ordered list of committed-R public keys to aggregate; the same order
///   must be used by every call to [`partial_sign`] for this signing session.
///
/// # Returns
///
/// * `Ok(CombinedPubKey)` on success.
/// * `Err(SchnorrError)` if `pub_keys` is empty or a point combination fails.
///
/// # Example
///
/// ```rust
/// use schnorr::{combine_pub_keys, CommittedRPrivKey};
///
/// let key1 = CommittedRPrivKey::random().expect("rng failure");
/// let key2 = CommittedRPrivKey::random().expect("rng failure");
/// let combined = combine_pub_keys(&[*key1.pub_key(), *key2.pub_key()]).expect("combine");
/// let _ = combined.point();
/// ```
pub fn combine_pub_keys(pub_keys: &[CommittedRPubKey]) -> Result<CombinedPubKey, SchnorrError> {
    let l = hash_pub_key_list(pub_keys);

    let secp = Secp256k1::new();
    let mut combined_point: Option<PublicKey> = None;
    let mut combined_r_point: Option<PublicKey> = None;

    for pub_key in pub_keys {
        let a_i = agg_coefficient(&l, pub_key)?;
        let weighted = pub_key.point().mul_tweak(&secp, &to_tweak(&a_i))?;
        combined_point = Some(match combined_point {
            Some(acc) => acc.combine(&weighted)?,
            None => weighted,
        });

        let r_point = point_from_r(pub_key.r())?;
        combined_r_point = Some(match combined_r_point {
            Some(acc) => acc.combine(&r_point)?,
            None => r_point,
        });
    }

    let combined_point = combined_point.ok_or(SchnorrError::ArithmeticFailure)?;
    let combined_r_point = combined_r_point.ok_or(SchnorrError::ArithmeticFailure)?;
    let serialized_r = combined_r_point.serialize();

    let flip = serialized_r[0] != 0x02;
    let r = if flip {
        let negated = negate_point(&combined_r_point)?;
        let mut r = [0u8; 32];
        r.copy_from_slice(&negated.serialize()[1..]);
        r
    } else {
        let mut r = [0u8; 32];
        r.copy_from_slice(&serialized_r[1..]);
        r
    };

    Ok(CombinedPubKey {
        point: combined_point,
        r,
        flip,
    })
}

/// Produces this signer's partial signature against the full ordered pubkey list (§4.7 "Partial
/// sign").
///
/// `own_key` must be one of the keys whose public half appears in `pub_keys`, at the position
/// matching `own_index`.
///
/// # Arguments
///
/// * `own_key` - this signer's private key.
/// * `own_index` - this signer's position in `pub_keys`.
/// * `pub_keys` - the full ordered list of participants' public keys.
/// * `msg` - the message being jointly signed.
///
/// # Returns
///
/// * `Ok((PartialSig, CombinedPubKey))` - this signer's partial signature, and the combined
///   key every participant computes identically from `pub_keys`.
/// * `Err(SchnorrError)` if key combination or the challenge hash fails.
///
/// # Example
///
/// ```rust
/// use schnorr::{partial_sign, CommittedRPrivKey};
///
/// let key1 = CommittedRPrivKey::random().expect("rng failure");
/// let key2 = CommittedRPrivKey::random().expect("rng failure");
/// let pub_keys = vec![*key1.pub_key(), *key2.pub_key()];
///
/// let (partial1, combined) = partial_sign(&key1, 0, &pub_keys, b"hello").expect("partial sign");
/// let _ = (partial1, combined);
/// ```
pub fn partial_sign(
    own_key: &CommittedRPrivKey,
    own_index: usize,
    pub_keys: &[CommittedRPubKey],
    msg: &[u8],
) -> Result<(PartialSig, CombinedPubKey), SchnorrError> {
    let combined = combine_pub_keys(pub_keys)?;
    let l = hash_pub_key_list(pub_keys);
    let a_i = agg_coefficient(&l, &pub_keys[own_index])?;

    let h = hash::hash_to_scalar(msg, &combined.r)?;

    let k_i = if combined.flip {
        scalar::sub_mod_n(&scalar::curve_order(), &own_key.k())
    } else {
        own_key.k()
    };

    // s_i = k_i - h * a_i * x_i mod n
    let coefficient = scalar::mul_mod_n(&h, &scalar::mul_mod_n(&a_i, &own_key.a()));
    let s_i = scalar::sub_mod_n(&k_i, &coefficient);

    Ok((
        PartialSig {
            s: scalar::to_bytes(&s_i),
        },
        combined,
    ))
}

/// Sums partial signatures into a single aggregate (§4.7 "Aggregate").
///
/// # Arguments
///
/// * `partials` - every signer's partial signature, from [`partial_sign`].
/// * `combined` - the combined key returned alongside any of those partial signatures.
///
/// # Returns
///
/// The aggregated [`SchnorrSig`], verifiable with [`CombinedPubKey::verify`].
///
/// # Example
///
/// ```rust
/// use schnorr::{aggregate, partial_sign, CommittedRPrivKey};
///
/// let key1 = CommittedRPrivKey::random().expect("rng failure");
/// let key2 = CommittedRPrivKey::random().expect("rng failure");
/// let pub_keys = vec![*key1.pub_key(), *key2.pub_key()];
///
/// let (partial1, combined) = partial_sign(&key1, 0, &pub_keys, b"hello").expect("partial 1");
/// let (partial2, _) = partial_sign(&key2, 1, &pub_keys, b"hello").expect("partial 2");
/// let sig = aggregate(&[partial1, partial2], &combined);
/// assert!(combined.verify(&sig, b"hello").is_valid());
/// ```
pub fn aggregate(partials: &[PartialSig], combined: &CombinedPubKey) -> SchnorrSig {
    let mut s = BigUint::from(0u32);
    for partial in partials {
        s = scalar::add_mod_n(&s, &scalar::to_biguint(&partial.s));
    }
    SchnorrSig {
        r: combined.r,
        s: scalar::to_bytes(&s),
    }
}

/// `L = SHA256(A_1 || A_2 || ... || A_L)` over each signer's compressed encoding (§4.7).
fn hash_pub_key_list(pub_keys: &[CommittedRPubKey]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for pub_key in pub_keys {
        hasher.update(pub_key.point().serialize());
    }
    hasher.finalize().into()
}

/// `a_i = H_agg(L, A_i)`, a scalar in `[1, n)` derived by hashing `L` with the signer's
/// compressed point encoding (§4.7, §9's canonical-encoding note).
fn agg_coefficient(l: &[u8; 32], pub_key: &CommittedRPubKey) -> Result<BigUint, SchnorrError> {
    let mut payload = Vec::with_capacity(32 + 33);
    payload.extend_from_slice(l);
    payload.extend_from_slice(&pub_key.point().serialize());
    let digest: [u8; 32] = Sha256::digest(&payload).into();

    let h = scalar::to_biguint(&digest);
    let n = scalar::curve_order();
    if h == BigUint::from(0u32) || h >= n {
        return Err(SchnorrError::DegenerateHash);
    }
    Ok(h)
}

fn point_from_r(r: [u8; 32]) -> Result<PublicKey, SchnorrError> {
    let mut compressed = [0u8; 33];
    compressed[0] = 0x02;
    compressed[1..].copy_from_slice(&r);
    Ok(PublicKey::from_slice(&compressed)?)
}

fn negate_point(point: &PublicKey) -> Result<PublicKey, SchnorrError> {
    let mut serialized = point.serialize();
    serialized[0] = if serialized[0] == 0x02 { 0x03 } else { 0x02 };
    Ok(PublicKey::from_slice(&serialized)?)
}
