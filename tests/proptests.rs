//! Property-based tests.

use proptest::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use rsa_keygen::{pow_mod, BigUint, KeyGenerator, KeyMaterial, PrivateKeyParts, PublicKeyParts};

prop_compose! {
    // WARNING: do *NOT* copy and paste this code. It's insecure and optimized for test speed.
    fn key_material()(seed in any::<[u8; 32]>()) -> KeyMaterial {
        let mut rng = ChaCha8Rng::from_seed(seed);
        KeyGenerator::new().validation_rounds(1).generate(&mut rng, 64).unwrap()
    }
}

fn biguint() -> impl Strategy<Value = BigUint> {
    any::<Vec<u8>>().prop_map(|bytes| BigUint::from_bytes_be(&bytes))
}

proptest! {
    #[test]
    fn pow_mod_agrees_with_modpow(
        base in biguint(),
        exp in biguint(),
        modulus in biguint(),
    ) {
        prop_assume!(exp >= BigUint::from(1u32));
        prop_assume!(modulus > BigUint::from(1u32));

        prop_assert_eq!(pow_mod(&base, &exp, &modulus).unwrap(), base.modpow(&exp, &modulus));
    }

    #[test]
    fn pow_mod_exponent_one(base in biguint(), modulus in biguint()) {
        prop_assume!(modulus > BigUint::from(1u32));

        let one = BigUint::from(1u32);
        prop_assert_eq!(pow_mod(&base, &one, &modulus).unwrap(), &base % &modulus);
    }

    #[test]
    fn encrypt_decrypt_roundtrip(key in key_material(), m in biguint()) {
        let m = m % key.n();
        let c = pow_mod(&m, key.e(), key.n()).unwrap();
        prop_assert_eq!(pow_mod(&c, key.d(), key.n()).unwrap(), m);
    }

    #[test]
    fn decrypt_encrypt_roundtrip(key in key_material(), m in biguint()) {
        let m = m % key.n();
        let s = pow_mod(&m, key.d(), key.n()).unwrap();
        prop_assert_eq!(pow_mod(&s, key.e(), key.n()).unwrap(), m);
    }
}
