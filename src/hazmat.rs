//! ⚠️ Low-level "hazmat" RSA functions.
//!
//! # ☢️️ WARNING: HAZARDOUS API ☢️
//!
//! This module holds functions that apply RSA's core encryption and decryption
//! primitives to raw integers without any padding. Textbook RSA is malleable
//! and deterministic, so these are only suitable for studying the key algebra
//! or for building well-reviewed higher-level constructions.

pub use crate::algorithms::generate::{select_exponent, validate_key_pair, CANDIDATE_EXPONENTS};
pub use crate::algorithms::rsa::{rsa_decrypt, rsa_encrypt};
pub use crate::math::{extended_gcd, mod_inverse, pow_mod};
pub use crate::prime_rand::{generate_distinct_prime, generate_prime};
