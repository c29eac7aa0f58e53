//! # Schnorr Signature Scheme
//!
//! A Schnorr signature library over secp256k1, covering three related constructions:
//!
//! - **Classic Schnorr** ([`keys`]) — a fresh nonce per signature.
//! - **Committed-R** ([`committed_r`]) — the nonce is fixed at key generation and published with
//!   the public key; reusing it across two signatures leaks the private key, which
//!   [`committed_r::recover`] demonstrates.
//! - **MuSig aggregation** ([`musig`]) — two or more committed-R keys combine into a single
//!   public key and produce one Schnorr signature that verifies against it.
//!
//! ## Quick start
//!
//! ```rust
//! use schnorr::SigningKey;
//!
//! let signing_key = SigningKey::random().expect("rng failure");
//! let verifying_key = signing_key.verifying_key().expect("point derivation failed");
//!
//! let signature = signing_key.sign(b"hello").expect("signing failed");
//! assert!(verifying_key.verify(&signature, b"hello").is_valid());
//! ```
//!
//! ## Classic Schnorr
//!
//! [`SigningKey::random`] samples `a` uniformly from `[1, n-1]`. [`SigningKey::sign`] samples a
//! fresh nonce `k` per call, derives `R = k*G`, negates `k` if `R`'s Y-coordinate is odd so the
//! published commitment always carries even Y (§4.1), computes the challenge
//! `h = H(msg, R.x)` (a bespoke two-round SHA-256, not BIP-340's tagged hash), and returns
//! `(r, s) = (R.x, k - h*a mod n)`. [`VerifyingKey::verify`] recomputes `R' = s*G + h*A` and
//! accepts only if `R'.x == r` and `R'` has even Y.
//!
//! ## Committed-R
//!
//! [`CommittedRPrivKey::random`] additionally fixes `k` at key-generation time instead of
//! per signature, and publishes the resulting `r` alongside the public key. Every signature
//! under the key reuses the same commitment, which is the point: signing two distinct messages
//! with the same `k` is algebraically equivalent to solving a two-equation, two-unknown linear
//! system in `(a, k)`, so [`recover`] extracts both from `(s1, h1)` and `(s2, h2)` as
//! `a = (s2 - s1) / (h1 - h2)` and `k = s2 + h2*a`, all mod `n`. This module exists to make that
//! trade-off concrete, not to recommend the scheme for routine use — see the security
//! considerations below.
//!
//! ## MuSig aggregation
//!
//! [`combine_pub_keys`] takes an ordered list of committed-R public keys and derives a single
//! aggregate key `A* = Σ a_i*A_i`, where each `a_i = H(L, A_i)` binds the coefficient to the
//! full list `L` (preventing a rogue-key attack where one participant picks their key after
//! seeing the others'). Each signer calls [`partial_sign`] to produce `s_i` against the
//! combined commitment `R* = Σ R_i`, and any party sums the partials with [`aggregate`] into a
//! signature that verifies against `A*` with the same equation as classic Schnorr. Because a
//! sum of even-Y points can itself have odd Y, and point negation cannot be pushed through the
//! `h*A*` term of the verification equation after the fact, every signer instead negates its
//! own nonce (and partial signature) up front whenever the combined `R*` requires it — see
//! [`musig`]'s module docs for why negating `s*` alone after the fact doesn't work.
//!
//! ## Error handling
//!
//! Signing and key generation return `Result<T, SchnorrError>`, via [`thiserror`](https://docs.rs/thiserror)-derived
//! variants covering a bad RNG draw, a malformed scalar, a degenerate challenge hash, and
//! infeasible recovery. Verification instead returns a tri-valued [`VerifyOutcome`]
//! (`Valid` / `Invalid` / `Error`), keeping "cryptographically invalid" distinct from "malformed
//! input" so callers never mistake one for the other — a forged signature and a truncated
//! buffer should not look alike to calling code that's deciding whether to log an intrusion
//! attempt or a parsing bug.
//!
//! ## Logging
//!
//! Key generation and every verification outcome emit `tracing` events (`debug!` for routine
//! outcomes, `warn!` for a successful nonce-reuse recovery or a verification `Error`). No secret
//! scalar is ever logged. Callers wire in a subscriber (`tracing-subscriber` or similar) the
//! same way they would for any other `tracing`-instrumented crate.
//!
//! ## Performance
//!
//! This crate ships a Criterion benchmark suite (`benches/signatures.rs`) covering sign,
//! verify, recovery, and the MuSig partial-sign/aggregate/verify path. Run `cargo bench` to get
//! numbers for your own hardware rather than relying on a table here — secp256k1 scalar
//! multiplication cost varies enough across the `secp256k1` crate's backends (and between
//! debug/release builds) that a single hardcoded figure would mislead more than it would help.
//!
//! ## Security considerations
//!
//! - Committed-R trades forward security for a fixed `r`: treat nonce reuse detection
//!   ([`recover`]) as a deterrent and a forensic tool, not a feature to build workflows around.
//!   If your application doesn't need a stable published commitment, prefer classic Schnorr.
//! - MuSig as implemented here is a two-round-free (each signer only needs the others' public
//!   keys, not an interactive nonce exchange) simplification suitable for a small, fixed,
//!   known-in-advance signer set. It does not implement the full MuSig2 nonce-exchange protocol
//!   and should not be assumed secure against an adaptive adversary who can choose signer sets
//!   on the fly without the rogue-key defense `combine_pub_keys`'s `L` hash provides.
//! - Secret scalars are held as raw bytes behind [`zeroize::Zeroizing`]/[`zeroize::ZeroizeOnDrop`]
//!   wrappers and scrubbed on drop; the transient [`num_bigint::BigUint`] values used for
//!   modular arithmetic during a single sign/recover call are not zeroized, since `BigUint` has
//!   no `Zeroize` impl.
//!
//! ## What this library does not do
//!
//! No signature serialization format, no BIP-340 tagged hashing, no batch verification,
//! no deterministic nonces, and no MuSig coordination transport — callers are assumed to
//! already hold each other's public keys before calling into [`musig`].

mod committed_r;
mod constants;
mod errors;
mod hash;
mod keys;
mod musig;
mod nonce;
mod scalar;
mod signatures;

#[cfg(test)]
mod tests;

pub use committed_r::{recover, CommittedRPrivKey, CommittedRPubKey, CommittedRSig};
pub use constants::{PK_SIZE, SIG_SIZE, SK_SIZE};
pub use errors::{SchnorrError, VerifyOutcome};
pub use keys::{SigningKey, VerifyingKey};
pub use musig::{aggregate, combine_pub_keys, partial_sign, CombinedPubKey, PartialSig};
pub use signatures::SchnorrSig;
