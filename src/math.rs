//! Number theory used by key generation.
#![allow(clippy::many_single_char_names)]

use num_bigint::Sign::Plus;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::errors::{Error, Result};

/// Runs the extended Euclidean algorithm on `a` and `b`.
///
/// Returns `(g, x, y)` with `g = gcd(a, b)` and `a·x + b·y = g`. All
/// intermediate state lives in this call's locals.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_x, mut x) = (BigInt::one(), BigInt::zero());
    let (mut old_y, mut y) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let (quotient, remainder) = old_r.div_rem(&r);
        old_r = core::mem::replace(&mut r, remainder);

        let next_x = &old_x - &quotient * &x;
        old_x = core::mem::replace(&mut x, next_x);

        let next_y = &old_y - &quotient * &y;
        old_y = core::mem::replace(&mut y, next_y);
    }

    (old_r, old_x, old_y)
}

/// Computes the private exponent `d` with `exponent·d ≡ 1 (mod totient)`.
///
/// The Bézout coefficient of `exponent` may come out negative; it is
/// brought into `[0, totient)` by adding `totient` until it is not.
///
/// Returns [`Error::InvalidExponent`] if `exponent` and `totient` are not
/// coprime.
pub fn mod_inverse(totient: &BigUint, exponent: &BigUint) -> Result<BigUint> {
    if totient.is_zero() || exponent.is_zero() {
        return Err(Error::InvalidExponent);
    }

    let phi = BigInt::from_biguint(Plus, totient.clone());
    let e = BigInt::from_biguint(Plus, exponent.clone());

    let (gcd, _, mut y) = extended_gcd(&phi, &e);
    if !gcd.is_one() {
        return Err(Error::InvalidExponent);
    }

    while y.is_negative() {
        y += &phi;
    }

    y.to_biguint().ok_or(Error::Internal)
}

/// Computes `base^exponent mod modulus` by square-and-multiply.
///
/// The exponent is consumed from its lowest bit upwards; every product is
/// reduced by `modulus` before the next step, so no operand grows past
/// `modulus²`.
///
/// Returns [`Error::InvalidArgument`] if `exponent < 1` or `modulus <= 1`.
pub fn pow_mod(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    if exponent.is_zero() || modulus <= &BigUint::one() {
        return Err(Error::InvalidArgument);
    }

    let mut base = base % modulus;
    let mut exponent = exponent.clone();
    let mut acc = BigUint::one();

    while !exponent.is_one() {
        if exponent.is_odd() {
            acc = (&acc * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exponent = exponent >> 1;
    }

    Ok((acc * base) % modulus)
}
