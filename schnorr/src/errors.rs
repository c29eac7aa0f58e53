//! Error types for the Schnorr signature scheme.

use thiserror::Error;

/// Errors that can occur during key generation, signing, and recovery operations.
///
/// Verification does not use this type directly for its public result (see [`VerifyOutcome`]);
/// a failed hash derivation during verification is folded into `VerifyOutcome::Invalid` rather
/// than propagated as a `SchnorrError`, since it cannot be distinguished from an attacker
/// submitting a bogus `r`.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SchnorrError {
    /// A required buffer could not be obtained.
    #[error("allocation failure")]
    AllocationFailure,

    /// The underlying secp256k1 library refused an operation (e.g. a point was not on the
    /// curve, a scalar was out of range, or a point sum collapsed to infinity).
    #[error("curve arithmetic failure")]
    ArithmeticFailure,

    /// The hash-to-scalar function produced `0` or a value `>= n`. Cryptographically
    /// negligible in practice, but callers must handle the branch.
    #[error("degenerate hash-to-scalar output")]
    DegenerateHash,

    /// Signature verification failed: `s` out of range, `R` at infinity, `R.y` odd, or an
    /// X-coordinate mismatch.
    #[error("invalid signature")]
    InvalidSignature,

    /// Two committed-R signatures were presented with an identical challenge hash
    /// (`H(msg1, r) == H(msg2, r)`); there is no information to extract.
    #[error("recovery is infeasible: both signatures share the same challenge hash")]
    RecoveryInfeasible,
}

impl From<secp256k1::Error> for SchnorrError {
    fn from(_: secp256k1::Error) -> Self {
        SchnorrError::ArithmeticFailure
    }
}

/// The tri-valued outcome of signature verification (§9): `valid`, `invalid`, or `error` are
/// kept distinct so callers never mistake a malformed input for a rejected-but-well-formed
/// signature.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The signature verified successfully.
    Valid,
    /// The signature is well-formed but does not verify.
    Invalid,
    /// The inputs were malformed in a way that prevented verification from running at all.
    Error(SchnorrError),
}

impl VerifyOutcome {
    /// Returns `true` only for [`VerifyOutcome::Valid`].
    pub fn is_valid(&self) -> bool {
        matches!(self, VerifyOutcome::Valid)
    }
}
