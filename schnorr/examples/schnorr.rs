use schnorr::{combine_pub_keys, partial_sign, recover, CommittedRPrivKey, SigningKey};

fn main() {
    // Classic Schnorr.
    let sk = SigningKey::random().expect("keygen");
    let vk = sk.verifying_key().expect("derive pubkey");

    let msg = b"hello schnorr";
    let sig = sk.sign(msg).expect("sign");
    let outcome = vk.verify(&sig, msg);
    assert!(outcome.is_valid());
    println!("classic schnorr: {outcome:?}");

    // Committed-R, plus the nonce-reuse recovery it enables if the commitment is reused.
    let committed = CommittedRPrivKey::random().expect("keygen");
    let sig1 = committed.sign(b"hello").expect("sign 1");
    let sig2 = committed.sign(b"hellO").expect("sign 2");
    let (recovered_a, _recovered_k) =
        recover(&sig1, b"hello", &sig2, b"hellO", committed.pub_key()).expect("recover");
    let recovered_key = SigningKey::from_scalar(recovered_a).expect("rebuild signing key");
    println!(
        "recovered a private key after commitment reuse: {:?}",
        recovered_key
    );

    // MuSig: two committed-R keys aggregate into one signature.
    let signer1 = CommittedRPrivKey::random().expect("keygen 1");
    let signer2 = CommittedRPrivKey::random().expect("keygen 2");
    let pub_keys = vec![*signer1.pub_key(), *signer2.pub_key()];

    let (partial1, combined) = partial_sign(&signer1, 0, &pub_keys, b"shared message")
        .expect("partial sign 1");
    let (partial2, _) = partial_sign(&signer2, 1, &pub_keys, b"shared message")
        .expect("partial sign 2");

    let aggregate_sig = schnorr::aggregate(&[partial1, partial2], &combined);
    let musig_outcome = combined.verify(&aggregate_sig, b"shared message");
    assert!(musig_outcome.is_valid());
    println!("musig aggregate: {musig_outcome:?}");

    let rederived = combine_pub_keys(&pub_keys).expect("recompute combined key");
    assert_eq!(rederived, combined);
}
