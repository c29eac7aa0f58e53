//! Constants used in the Schnorr signature scheme implementation.

/// Size of a serialized private scalar (signing key, committed-R scalars) in bytes.
pub const SK_SIZE: usize = 32;

/// Size of a serialized public key in bytes (secp256k1 compressed point encoding).
pub const PK_SIZE: usize = 33;

/// Size of a serialized classic or committed-R Schnorr signature in bytes: `r` (32) + `s` (32).
///
/// A committed-R signature on the wire is only the 32-byte `s` component, since `r` is taken
/// from the public key (§4.6); `SIG_SIZE` describes the reconstructed `(r, s)` pair used
/// internally for verification.
pub const SIG_SIZE: usize = 64;

/// Order `n` of the secp256k1 generator subgroup, big-endian.
pub(crate) const CURVE_ORDER_BE: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFE, 0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36,
    0x41, 0x41,
];
