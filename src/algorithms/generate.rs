//! Generate the components of a textbook RSA key pair

use num_bigint::{BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand_core::CryptoRngCore;
use zeroize::{Zeroize, Zeroizing};

use crate::{
    errors::{Error, Result},
    math::{mod_inverse, pow_mod},
    prime_rand::{generate_distinct_prime, generate_prime},
};

/// Public exponents tried in this order; the first one coprime to the
/// totient wins. Earlier entries have fewer set bits.
pub const CANDIDATE_EXPONENTS: [u32; 4] = [65537, 257, 17, 3];

pub(crate) struct KeyComponents {
    pub n: BigUint,
    pub e: BigUint,
    pub d: BigUint,
    pub primes: [BigUint; 2],
}

impl KeyComponents {
    /// Derives `n`, `e` and `d` from two distinct primes.
    ///
    /// On failure the primes are dropped, and zeroized, along with `self`.
    pub fn from_primes(p: BigUint, q: BigUint) -> Result<KeyComponents> {
        let mut components = KeyComponents {
            n: &p * &q,
            e: BigUint::zero(),
            d: BigUint::zero(),
            primes: [p, q],
        };

        let [p, q] = &components.primes;
        let mut totient = (p - BigUint::one()) * (q - BigUint::one());

        let exponents =
            select_exponent(&totient).and_then(|e| mod_inverse(&totient, &e).map(|d| (e, d)));
        totient.zeroize();
        let (e, d) = exponents?;

        components.e = e;
        components.d = d;
        Ok(components)
    }
}

impl Zeroize for KeyComponents {
    fn zeroize(&mut self) {
        self.d.zeroize();
        self.primes[0].zeroize();
        self.primes[1].zeroize();
    }
}

impl Drop for KeyComponents {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// Returns the first of [`CANDIDATE_EXPONENTS`] that does not divide
/// `totient`.
///
/// Fails with [`Error::ExponentSelection`] when all of them do; the primes
/// behind `totient` must then be thrown away.
pub fn select_exponent(totient: &BigUint) -> Result<BigUint> {
    CANDIDATE_EXPONENTS
        .iter()
        .map(|&c| BigUint::from(c))
        .find(|e| !(totient % e).is_zero())
        .ok_or(Error::ExponentSelection)
}

/// Checks that `d` undoes `e` modulo `n` on `rounds` random samples of
/// `sample_bits` bits.
///
/// `sample_bits` must be smaller than the bit length of `n`, so that every
/// sample is a valid plaintext.
pub fn validate_key_pair<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    e: &BigUint,
    d: &BigUint,
    n: &BigUint,
    sample_bits: usize,
    rounds: usize,
) -> Result<()> {
    if sample_bits >= n.bits() {
        return Err(Error::MessageTooLong);
    }

    for _ in 0..rounds.max(1) {
        let mut m = rng.gen_biguint(sample_bits);
        let c = pow_mod(&m, e, n)?;
        let mut recovered = pow_mod(&c, d, n)?;

        let ok = recovered == m;
        m.zeroize();
        recovered.zeroize();
        if !ok {
            return Err(Error::Validation);
        }
    }

    Ok(())
}

/// Rejects prime lengths that are unlikely to yield two distinct primes with
/// the top two bits set in reasonable time.
///
/// The threshold is an estimate from the prime counting function; a few
/// lengths it rejects do admit a key.
pub(crate) fn check_prime_bit_length(bit_length: usize) -> Result<()> {
    if bit_length == 0 {
        return Err(Error::InvalidBitLength);
    }

    if bit_length < 64 {
        let prime_limit = (1u64 << bit_length as u64) as f64;

        // pi approximates the number of primes less than prime_limit

        // Calculate `log(prime_limit)` as `log(x) = log2(x) / log2(e) = log2(x) * log(2)`.
        let mut pi = prime_limit / (bit_length as f64 * core::f64::consts::LN_2 - 1.);

        // Generated primes start with 0b11, so we can only use a quarter of them.
        pi /= 4f64;
        // Use a factor of two to ensure that key generation terminates in a
        // reasonable amount of time.
        pi /= 2f64;

        if pi < 2f64 {
            return Err(Error::TooFewPrimes);
        }
    }

    Ok(())
}

/// Runs the pipeline once: two primes, modulus and totient, exponent,
/// private exponent, self-test.
///
/// [`Error::ExponentSelection`] and [`Error::Validation`] condemn this
/// `(p, q)` pair only; the caller restarts from fresh primes.
pub(crate) fn generate_key_components<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    bit_length: usize,
    validation_rounds: usize,
    max_prime_attempts: usize,
) -> Result<KeyComponents> {
    let mut p = Zeroizing::new(generate_prime(rng, bit_length)?);
    let q = generate_distinct_prime(rng, bit_length, &p, max_prime_attempts)?;

    let components = KeyComponents::from_primes(core::mem::take(&mut *p), q)?;

    validate_key_pair(
        rng,
        &components.e,
        &components.d,
        &components.n,
        components.n.bits() - 1,
        validation_rounds,
    )?;

    Ok(components)
}
