#![feature(test)]

extern crate test;

use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
use rsa_keygen::{pow_mod, BigUint, KeyGenerator, KeyMaterial, PrivateKeyParts, PublicKeyParts};
use test::Bencher;

fn get_key() -> KeyMaterial {
    let mut rng = ChaCha8Rng::from_seed([7; 32]);
    KeyMaterial::new(&mut rng, 256).unwrap()
}

#[bench]
fn bench_rsa_128_gen_key(b: &mut Bencher) {
    let mut rng = ChaCha8Rng::from_seed([42; 32]);

    b.iter(|| {
        let key = KeyMaterial::new(&mut rng, 128).unwrap();
        test::black_box(key);
    });
}

#[bench]
fn bench_rsa_512_gen_key(b: &mut Bencher) {
    let mut rng = ChaCha8Rng::from_seed([42; 32]);

    b.iter(|| {
        let key = KeyMaterial::new(&mut rng, 512).unwrap();
        test::black_box(key);
    });
}

#[bench]
fn bench_rsa_512_gen_key_single_validation(b: &mut Bencher) {
    let mut rng = ChaCha8Rng::from_seed([42; 32]);
    let generator = KeyGenerator::new().validation_rounds(1);

    b.iter(|| {
        let key = generator.generate(&mut rng, 512).unwrap();
        test::black_box(key);
    });
}

#[bench]
fn bench_pow_mod_private_exponent(b: &mut Bencher) {
    let key = get_key();
    let m = BigUint::from_bytes_be(b"hello RSA!");

    b.iter(|| {
        let res = key.decrypt(&m).unwrap();
        test::black_box(res);
    });
}

#[bench]
fn bench_modpow_private_exponent(b: &mut Bencher) {
    let key = get_key();
    let m = BigUint::from_bytes_be(b"hello RSA!");

    b.iter(|| {
        let res = m.modpow(key.d(), key.n());
        test::black_box(res);
    });
}

#[bench]
fn bench_pow_mod_public_exponent(b: &mut Bencher) {
    let key = get_key();
    let m = BigUint::from_bytes_be(b"hello RSA!");

    b.iter(|| {
        let res = pow_mod(&m, key.e(), key.n()).unwrap();
        test::black_box(res);
    });
}
