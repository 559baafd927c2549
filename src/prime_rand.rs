//! Generation of random primes.

use num_bigint::{BigUint, RandPrime};
use rand_core::CryptoRngCore;

use crate::errors::{Error, Result};

/// Generates a random probable prime of exactly `bit_length` bits.
///
/// The top two bits of the candidate are always set, so the product of two
/// such primes never comes out one bit short.
///
/// *Warning*: the primes are only as unpredictable as `rng`.
pub fn generate_prime<R: CryptoRngCore + ?Sized>(rng: &mut R, bit_length: usize) -> Result<BigUint> {
    if bit_length < 2 {
        return Err(Error::InvalidBitLength);
    }

    Ok(rng.gen_prime(bit_length))
}

/// Generates a random probable prime of `bit_length` bits that differs from
/// `other`.
///
/// Redraws at most `max_attempts` times before giving up with
/// [`Error::Provisioning`].
pub fn generate_distinct_prime<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    bit_length: usize,
    other: &BigUint,
    max_attempts: usize,
) -> Result<BigUint> {
    for _ in 0..max_attempts {
        let prime = generate_prime(rng, bit_length)?;
        if &prime != other {
            return Ok(prime);
        }
    }

    Err(Error::Provisioning)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::prime::probably_prime;
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

    #[test]
    fn test_prime_small() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        for n in 2..10 {
            let p = generate_prime(&mut rng, n).unwrap();

            assert_eq!(p.bits(), n);
            assert!(probably_prime(&p, 32));
        }
    }

    #[test]
    fn test_prime_too_short() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        assert_eq!(generate_prime(&mut rng, 0), Err(Error::InvalidBitLength));
        assert_eq!(generate_prime(&mut rng, 1), Err(Error::InvalidBitLength));
    }

    #[test]
    fn test_gen_prime_1024() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let p = generate_prime(&mut rng, 1024).unwrap();
        assert_eq!(p.bits(), 1024);
    }

    #[test]
    fn test_distinct_prime() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        for _ in 0..20 {
            let p = generate_prime(&mut rng, 8).unwrap();
            let q = generate_distinct_prime(&mut rng, 8, &p, 1000).unwrap();
            assert_ne!(p, q);
            assert_eq!(q.bits(), 8);
        }
    }

    #[test]
    fn test_distinct_prime_exhausted() {
        // 3 is the only 2-bit prime with both top bits set.
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let p = generate_prime(&mut rng, 2).unwrap();
        assert_eq!(p, BigUint::from(3u32));
        assert_eq!(
            generate_distinct_prime(&mut rng, 2, &p, 16),
            Err(Error::Provisioning)
        );
    }
}
