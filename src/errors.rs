//! Error types.

/// Alias for [`core::result::Result`] with the `rsa_keygen` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// None of the candidate public exponents is coprime to the totient.
    ExponentSelection,

    /// Round-trip self-test of a freshly generated key pair failed.
    Validation,

    /// Key generation gave up after the configured number of attempts.
    AttemptsExceeded {
        /// Number of whole-pipeline attempts that were made.
        attempts: usize,
    },

    /// Requested prime bit length is zero.
    InvalidBitLength,

    /// Too few primes of the requested length to build a key in reasonable
    /// time.
    ///
    /// This is a heuristic threshold based on the prime counting function,
    /// not a proof that no key exists: 5-bit primes 29 and 31 still form a
    /// valid pair, but such lengths are rejected.
    TooFewPrimes,

    /// No distinct prime was found within the configured number of draws.
    Provisioning,

    /// Exponent less than one or modulus not greater than one.
    InvalidArgument,

    /// Exponent has no inverse modulo the totient.
    InvalidExponent,

    /// Message is not smaller than the modulus.
    MessageTooLong,

    /// Ciphertext is not smaller than the modulus.
    Decryption,

    /// Internal error.
    Internal,
}

impl Error {
    /// Whether this error only condemns the current `(p, q)` pair, so that
    /// generation should restart from fresh primes.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::ExponentSelection | Error::Validation)
    }
}

impl core::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::ExponentSelection => {
                write!(f, "no candidate public exponent is coprime to the totient")
            }
            Error::Validation => write!(f, "key pair failed round-trip validation"),
            Error::AttemptsExceeded { attempts } => {
                write!(f, "key generation failed after {} attempts", attempts)
            }
            Error::InvalidBitLength => write!(f, "prime bit length must be positive"),
            Error::TooFewPrimes => {
                write!(f, "too few primes of given length to generate an RSA key")
            }
            Error::Provisioning => write!(f, "failed to provision a distinct prime"),
            Error::InvalidArgument => {
                write!(f, "exponent must be >= 1 and modulus must be > 1")
            }
            Error::InvalidExponent => write!(f, "invalid exponent"),
            Error::MessageTooLong => write!(f, "message too long"),
            Error::Decryption => write!(f, "decryption error"),
            Error::Internal => write!(f, "internal error"),
        }
    }
}
