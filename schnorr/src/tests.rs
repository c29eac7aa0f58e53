//! End-to-end scenarios (§8) exercising the public API as a caller would.

use super::*;

#[test]
fn s1_schnorr_round_trip_and_message_binding() {
    let key = SigningKey::random().expect("keygen");
    let pub_key = key.verifying_key().expect("derive pubkey");

    let sig = key.sign(b"hello").expect("sign");
    assert!(pub_key.verify(&sig, b"hello").is_valid());
    assert!(!pub_key.verify(&sig, b"hellO").is_valid());
}

#[test]
fn s2_committed_r_round_trip() {
    let key = CommittedRPrivKey::random().expect("keygen");
    let sig = key.sign(b"hello").expect("sign");
    assert!(key.pub_key().verify(&sig, b"hello").is_valid());
}

#[test]
fn s3_nonce_reuse_recovery_yields_a_usable_signing_key() {
    let key = CommittedRPrivKey::random().expect("keygen");

    let sig1 = key.sign(b"hello").expect("sign 1");
    let sig2 = key.sign(b"hellO").expect("sign 2");

    let (recovered_a, _recovered_k) =
        recover(&sig1, b"hello", &sig2, b"hellO", key.pub_key()).expect("recovery");

    let recovered_key = SigningKey::from_scalar(recovered_a).expect("rebuild signing key");
    let recovered_pub = recovered_key.verifying_key().expect("derive pubkey");

    let sig = recovered_key.sign(b"random").expect("sign with recovered key");
    assert!(recovered_pub.verify(&sig, b"random").is_valid());
}

#[test]
fn s4_musig_two_party_aggregate_verifies() {
    let key1 = CommittedRPrivKey::random().expect("keygen 1");
    let key2 = CommittedRPrivKey::random().expect("keygen 2");
    let pub_keys = vec![*key1.pub_key(), *key2.pub_key()];

    let (partial1, combined1) =
        partial_sign(&key1, 0, &pub_keys, b"hello").expect("partial sign 1");
    let (partial2, combined2) =
        partial_sign(&key2, 1, &pub_keys, b"hello").expect("partial sign 2");
    assert_eq!(combined1, combined2);

    let sig = aggregate(&[partial1, partial2], &combined1);
    assert!(combined1.verify(&sig, b"hello").is_valid());
}

#[test]
fn s5_s_equal_to_curve_order_is_invalid() {
    let key = SigningKey::random().expect("keygen");
    let pub_key = key.verifying_key().expect("derive pubkey");
    let mut sig = key.sign(b"hello").expect("sign");

    // n itself is out of range for s (valid range is [0, n)); this must reject cleanly as
    // "invalid", not surface as an error.
    sig.s = crate::scalar::to_bytes(&crate::scalar::curve_order());
    assert!(!pub_key.verify(&sig, b"hello").is_valid());
}

#[test]
fn s6_tampering_with_r_is_invalid() {
    let key = SigningKey::random().expect("keygen");
    let pub_key = key.verifying_key().expect("derive pubkey");
    let mut sig = key.sign(b"hello").expect("sign");
    sig.r[0] ^= 0xff;
    assert!(!pub_key.verify(&sig, b"hello").is_valid());
}

#[test]
fn musig_partial_signatures_do_not_mix_across_pubkey_orderings() {
    let key1 = CommittedRPrivKey::random().expect("keygen 1");
    let key2 = CommittedRPrivKey::random().expect("keygen 2");

    let ordered = vec![*key1.pub_key(), *key2.pub_key()];
    let reordered = vec![*key2.pub_key(), *key1.pub_key()];

    let combined_ordered = combine_pub_keys(&ordered).expect("combine ordered");
    let combined_reordered = combine_pub_keys(&reordered).expect("combine reordered");

    assert_ne!(combined_ordered, combined_reordered);
}

#[test]
fn key_binding_rejects_a_signature_under_an_unrelated_key() {
    let key1 = SigningKey::random().expect("keygen 1");
    let key2 = SigningKey::random().expect("keygen 2");
    let pub2 = key2.verifying_key().expect("derive pubkey 2");

    let sig = key1.sign(b"hello").expect("sign");
    assert!(!pub2.verify(&sig, b"hello").is_valid());
}
