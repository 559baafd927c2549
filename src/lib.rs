#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Key generation
//!
//! A key is built from two distinct probable primes `p` and `q` of the
//! requested bit length:
//!
//! 1. `n = p·q` and `φ(n) = (p−1)(q−1)`;
//! 2. `e` is the first of `65537, 257, 17, 3` coprime to `φ(n)`;
//! 3. `d` is the inverse of `e` modulo `φ(n)`, found with the extended
//!    Euclidean algorithm;
//! 4. a few random values are encrypted and decrypted to check the pair.
//!
//! If step 2 or step 4 fails, the pair of primes is discarded and the whole
//! pipeline starts over.
//!
//! # Usage
//!
//! ```
//! use rsa_keygen::{BigUint, KeyMaterial, PublicKey};
//!
//! let mut rng = rand::thread_rng(); // rand@0.8
//!
//! let key = KeyMaterial::new(&mut rng, 128).expect("failed to generate a key");
//! let public_key = PublicKey::from(&key);
//!
//! // Encrypt
//! let m = BigUint::from_bytes_be(b"hello RSA!");
//! let c = public_key.encrypt(&m).expect("failed to encrypt");
//! assert_ne!(m, c);
//!
//! // Decrypt
//! let dm = key.decrypt(&c).expect("failed to decrypt");
//! assert_eq!(dm.to_bytes_be(), b"hello RSA!");
//! ```
//!
//! ## Tuning the generator
//!
//! ```
//! use rsa_keygen::KeyGenerator;
//!
//! let mut rng = rand::thread_rng();
//!
//! let generator = KeyGenerator::new()
//!     .max_attempts(Some(10))
//!     .validation_rounds(5);
//! let (key, report) = generator
//!     .generate_with_report(&mut rng, 256)
//!     .expect("failed to generate a key");
//! assert!(report.attempts <= 10);
//! # let _ = key;
//! ```
//!
//! ## Modular exponentiation
//!
//! ```
//! use rsa_keygen::{pow_mod, BigUint};
//!
//! let r = pow_mod(&BigUint::from(4u32), &BigUint::from(13u32), &BigUint::from(497u32)).unwrap();
//! assert_eq!(r, BigUint::from(445u32));
//! ```

#[cfg(feature = "std")]
extern crate std;

pub use num_bigint::BigUint;
pub use rand_core;

mod algorithms;
pub mod errors;
pub mod hazmat;
pub mod traits;

mod key;
mod math;
mod prime_rand;

pub use crate::{
    errors::{Error, Result},
    key::{
        max_plaintext_bits, max_plaintext_len, min_ciphertext_bits, min_ciphertext_len,
        GenerationReport, KeyGenerator, KeyMaterial, PublicKey, DEFAULT_MAX_ATTEMPTS,
        DEFAULT_MAX_PRIME_ATTEMPTS, DEFAULT_VALIDATION_ROUNDS,
    },
    math::pow_mod,
    traits::{PrivateKeyParts, PublicKeyParts},
};

/// Generates a textbook RSA key pair from two primes of `bit_length` bits each,
/// with the default [`KeyGenerator`] limits.
pub fn generate_keys<R: rand_core::CryptoRngCore + ?Sized>(
    rng: &mut R,
    bit_length: usize,
) -> Result<KeyMaterial> {
    KeyMaterial::new(rng, bit_length)
}
