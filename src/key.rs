use core::fmt;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand_core::CryptoRngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::algorithms::generate::{
    check_prime_bit_length, generate_key_components, KeyComponents,
};
use crate::algorithms::rsa::{rsa_decrypt, rsa_encrypt};
use crate::errors::{Error, Result};
use crate::traits::{PrivateKeyParts, PublicKeyParts};

/// Default cap on whole-pipeline restarts in [`KeyGenerator`].
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Default number of round-trip samples used to validate a key pair.
pub const DEFAULT_VALIDATION_ROUNDS: usize = 3;

/// Default cap on redraws when looking for a second, distinct prime.
pub const DEFAULT_MAX_PRIME_ATTEMPTS: usize = 1000;

/// Largest plaintext, in bits, that fits below a modulus of `modulus_bits` bits.
pub const fn max_plaintext_bits(modulus_bits: usize) -> usize {
    modulus_bits.saturating_sub(1)
}

/// Smallest container, in bits, that holds any ciphertext for a modulus of
/// `modulus_bits` bits.
pub const fn min_ciphertext_bits(modulus_bits: usize) -> usize {
    modulus_bits + 1
}

/// Largest whole number of plaintext bytes that always stays below the
/// modulus.
pub const fn max_plaintext_len(modulus_bits: usize) -> usize {
    max_plaintext_bits(modulus_bits) / 8
}

/// Number of bytes a caller should reserve per ciphertext block.
pub const fn min_ciphertext_len(modulus_bits: usize) -> usize {
    modulus_bits / 8 + 1
}

/// Represents the public part of an RSA key.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct PublicKey {
    /// Modulus
    n: BigUint,
    /// Public exponent
    e: BigUint,
}

/// A generated RSA key: modulus, public exponent and private exponent.
///
/// Immutable once built. The private exponent is zeroized on drop.
#[derive(Clone)]
pub struct KeyMaterial {
    /// Modulus
    n: BigUint,
    /// Public exponent
    e: BigUint,
    /// Private exponent
    d: BigUint,
}

impl Eq for KeyMaterial {}
impl PartialEq for KeyMaterial {
    #[inline]
    fn eq(&self, other: &KeyMaterial) -> bool {
        self.n == other.n && self.e == other.e && self.d == other.d
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("n", &self.n)
            .field("e", &self.e)
            .finish_non_exhaustive()
    }
}

impl Zeroize for KeyMaterial {
    fn zeroize(&mut self) {
        self.d.zeroize();
    }
}

impl Drop for KeyMaterial {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for KeyMaterial {}

impl From<KeyMaterial> for PublicKey {
    fn from(key: KeyMaterial) -> Self {
        PublicKey::from(&key)
    }
}

impl From<&KeyMaterial> for PublicKey {
    fn from(key: &KeyMaterial) -> Self {
        PublicKey {
            n: key.n.clone(),
            e: key.e.clone(),
        }
    }
}

impl PublicKeyParts for PublicKey {
    fn n(&self) -> &BigUint {
        &self.n
    }

    fn e(&self) -> &BigUint {
        &self.e
    }
}

impl PublicKeyParts for KeyMaterial {
    fn n(&self) -> &BigUint {
        &self.n
    }

    fn e(&self) -> &BigUint {
        &self.e
    }
}

impl PrivateKeyParts for KeyMaterial {
    fn d(&self) -> &BigUint {
        &self.d
    }
}

impl PublicKey {
    /// Create a new public key from its components.
    pub fn new(n: BigUint, e: BigUint) -> Result<Self> {
        check_public_components(&n, &e)?;
        Ok(PublicKey { n, e })
    }

    /// Encrypt `m` without padding. `m` must be smaller than the modulus.
    pub fn encrypt(&self, m: &BigUint) -> Result<BigUint> {
        rsa_encrypt(self, m)
    }
}

impl KeyMaterial {
    /// Generate a new key pair whose primes are each `bit_length` bits long,
    /// using [`KeyGenerator::default`].
    ///
    /// The modulus ends up with `2 * bit_length` bits.
    pub fn new<R: CryptoRngCore + ?Sized>(rng: &mut R, bit_length: usize) -> Result<KeyMaterial> {
        KeyGenerator::default().generate(rng, bit_length)
    }

    /// Constructs a key from its raw parts.
    ///
    /// Only sanity checks are made; the factors of `n` are not known here, so
    /// `e·d ≡ 1 (mod φ(n))` cannot be verified.
    pub fn from_components(n: BigUint, e: BigUint, d: BigUint) -> Result<KeyMaterial> {
        check_public_components(&n, &e)?;
        if d.is_zero() || d >= n {
            return Err(Error::InvalidExponent);
        }

        Ok(KeyMaterial { n, e, d })
    }

    /// Get the public key from the key material.
    pub fn to_public_key(&self) -> PublicKey {
        PublicKey::from(self)
    }

    /// Encrypt `m` without padding. `m` must be smaller than the modulus.
    pub fn encrypt(&self, m: &BigUint) -> Result<BigUint> {
        rsa_encrypt(self, m)
    }

    /// Decrypt `c` without padding. `c` must be smaller than the modulus.
    pub fn decrypt(&self, c: &BigUint) -> Result<BigUint> {
        rsa_decrypt(self, c)
    }

    /// Bit length of the modulus.
    pub fn modulus_bits(&self) -> usize {
        self.n.bits()
    }

    /// See [`max_plaintext_bits`].
    pub fn max_plaintext_bits(&self) -> usize {
        max_plaintext_bits(self.modulus_bits())
    }

    /// See [`min_ciphertext_bits`].
    pub fn min_ciphertext_bits(&self) -> usize {
        min_ciphertext_bits(self.modulus_bits())
    }

    /// See [`max_plaintext_len`].
    pub fn max_plaintext_len(&self) -> usize {
        max_plaintext_len(self.modulus_bits())
    }

    /// See [`min_ciphertext_len`].
    pub fn min_ciphertext_len(&self) -> usize {
        min_ciphertext_len(self.modulus_bits())
    }
}

fn check_public_components(n: &BigUint, e: &BigUint) -> Result<()> {
    if n <= &BigUint::one() {
        return Err(Error::InvalidArgument);
    }
    // e may exceed n for toy moduli, where 65537 is still the first candidate
    if e.is_zero() {
        return Err(Error::InvalidExponent);
    }
    Ok(())
}

/// Counters describing how a key came to be.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Whole-pipeline attempts, including the successful one.
    pub attempts: usize,
    /// Attempts discarded because no candidate exponent fit the totient.
    pub exponent_restarts: usize,
    /// Attempts discarded because the round-trip self-test failed.
    pub validation_restarts: usize,
}

/// Configurable key pair generator.
///
/// Each call to [`KeyGenerator::generate`] runs to completion on the calling
/// thread and keeps every intermediate value local, so a single generator
/// may be shared freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyGenerator {
    max_attempts: Option<usize>,
    validation_rounds: usize,
    max_prime_attempts: usize,
}

impl Default for KeyGenerator {
    fn default() -> Self {
        KeyGenerator {
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
            validation_rounds: DEFAULT_VALIDATION_ROUNDS,
            max_prime_attempts: DEFAULT_MAX_PRIME_ATTEMPTS,
        }
    }
}

impl KeyGenerator {
    /// Generator with the default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of whole-pipeline attempts. `None` retries forever.
    pub fn max_attempts(mut self, max_attempts: Option<usize>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Number of random round trips a key pair must survive. At least one is
    /// always performed.
    pub fn validation_rounds(mut self, rounds: usize) -> Self {
        self.validation_rounds = rounds.max(1);
        self
    }

    /// Caps the redraws spent looking for a second prime distinct from the
    /// first.
    pub fn max_prime_attempts(mut self, max_prime_attempts: usize) -> Self {
        self.max_prime_attempts = max_prime_attempts;
        self
    }

    /// Generates a key pair from two primes of `bit_length` bits each.
    pub fn generate<R: CryptoRngCore + ?Sized>(
        &self,
        rng: &mut R,
        bit_length: usize,
    ) -> Result<KeyMaterial> {
        self.generate_with_report(rng, bit_length).map(|(key, _)| key)
    }

    /// Like [`KeyGenerator::generate`], also returning how many attempts it
    /// took.
    ///
    /// Exponent-selection and validation failures restart the whole pipeline
    /// from fresh primes; every other error is returned immediately.
    pub fn generate_with_report<R: CryptoRngCore + ?Sized>(
        &self,
        rng: &mut R,
        bit_length: usize,
    ) -> Result<(KeyMaterial, GenerationReport)> {
        check_prime_bit_length(bit_length)?;

        self.run_attempts(|| {
            generate_key_components(
                &mut *rng,
                bit_length,
                self.validation_rounds,
                self.max_prime_attempts,
            )
        })
    }

    /// Calls `attempt` until it yields components, a non-recoverable error,
    /// or the attempt cap is hit. Every call starts from scratch.
    pub(crate) fn run_attempts<F>(
        &self,
        mut attempt: F,
    ) -> Result<(KeyMaterial, GenerationReport)>
    where
        F: FnMut() -> Result<KeyComponents>,
    {
        let mut report = GenerationReport::default();

        loop {
            if let Some(max_attempts) = self.max_attempts {
                if report.attempts >= max_attempts {
                    return Err(Error::AttemptsExceeded {
                        attempts: report.attempts,
                    });
                }
            }
            report.attempts += 1;

            match attempt() {
                Ok(mut components) => {
                    let key = KeyMaterial {
                        n: core::mem::take(&mut components.n),
                        e: core::mem::take(&mut components.e),
                        d: core::mem::take(&mut components.d),
                    };
                    return Ok((key, report));
                }
                Err(Error::ExponentSelection) => report.exponent_restarts += 1,
                Err(Error::Validation) => report.validation_restarts += 1,
                Err(err) => return Err(err),
            }
        }
    }
}
