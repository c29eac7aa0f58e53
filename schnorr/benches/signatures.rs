use criterion::{black_box, criterion_group, criterion_main, Criterion};
use schnorr::{aggregate, partial_sign, recover, CommittedRPrivKey, SigningKey};

fn bench_schnorr_sign(c: &mut Criterion) {
    let sk = SigningKey::random().expect("keygen");
    let msg = b"benchmark message";

    c.bench_function("schnorr_sign", |bencher| {
        bencher.iter(|| {
            let sig = sk.sign(black_box(msg)).expect("sign");
            black_box(sig);
        })
    });
}

fn bench_schnorr_verify(c: &mut Criterion) {
    let sk = SigningKey::random().expect("keygen");
    let vk = sk.verifying_key().expect("derive pubkey");
    let msg = b"benchmark message";
    let sig = sk.sign(msg).expect("sign");

    c.bench_function("schnorr_verify", |bencher| {
        bencher.iter(|| {
            let outcome = vk.verify(black_box(&sig), black_box(msg));
            black_box(outcome);
        })
    });
}

fn bench_committed_r_sign_verify(c: &mut Criterion) {
    let key = CommittedRPrivKey::random().expect("keygen");
    let msg = b"benchmark message";

    c.bench_function("committed_r_sign", |bencher| {
        bencher.iter(|| {
            let sig = key.sign(black_box(msg)).expect("sign");
            black_box(sig);
        })
    });

    let sig = key.sign(msg).expect("sign");
    c.bench_function("committed_r_verify", |bencher| {
        bencher.iter(|| {
            let outcome = key.pub_key().verify(black_box(&sig), black_box(msg));
            black_box(outcome);
        })
    });
}

fn bench_committed_r_recover(c: &mut Criterion) {
    let key = CommittedRPrivKey::random().expect("keygen");
    let sig1 = key.sign(b"hello").expect("sign 1");
    let sig2 = key.sign(b"hellO").expect("sign 2");

    c.bench_function("committed_r_recover", |bencher| {
        bencher.iter(|| {
            let recovered = recover(
                black_box(&sig1),
                b"hello",
                black_box(&sig2),
                b"hellO",
                key.pub_key(),
            )
            .expect("recover");
            black_box(recovered);
        })
    });
}

fn bench_musig(c: &mut Criterion) {
    let key1 = CommittedRPrivKey::random().expect("keygen 1");
    let key2 = CommittedRPrivKey::random().expect("keygen 2");
    let pub_keys = vec![*key1.pub_key(), *key2.pub_key()];
    let msg = b"benchmark message";

    c.bench_function("musig_partial_sign", |bencher| {
        bencher.iter(|| {
            let partial = partial_sign(&key1, 0, black_box(&pub_keys), black_box(msg))
                .expect("partial sign");
            black_box(partial);
        })
    });

    let (partial1, combined) = partial_sign(&key1, 0, &pub_keys, msg).expect("partial sign 1");
    let (partial2, _) = partial_sign(&key2, 1, &pub_keys, msg).expect("partial sign 2");

    c.bench_function("musig_aggregate", |bencher| {
        bencher.iter(|| {
            let sig = aggregate(black_box(&[partial1, partial2]), black_box(&combined));
            black_box(sig);
        })
    });

    let sig = aggregate(&[partial1, partial2], &combined);
    c.bench_function("musig_verify", |bencher| {
        bencher.iter(|| {
            let outcome = combined.verify(black_box(&sig), black_box(msg));
            black_box(outcome);
        })
    });
}

criterion_group!(
    benches,
    bench_schnorr_sign,
    bench_schnorr_verify,
    bench_committed_r_sign_verify,
    bench_committed_r_recover,
    bench_musig
);
criterion_main!(benches);
