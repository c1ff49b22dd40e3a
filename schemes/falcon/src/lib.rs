//! # pqsigs-falcon
//!
//! A Rust implementation of Falcon, the lattice-based hash-and-sign
//! signature scheme over NTRU lattices selected by NIST for
//! standardization (FN-DSA).
//!
//! ## Overview
//!
//! - Key generation samples short polynomials (f, g), computes the public
//!   key `h = g/f mod q` and completes the basis with F, G such that
//!   `f*G - g*F = q` ([`keygen`]).
//! - Signing hashes `nonce || message` to a point, samples a short lattice
//!   vector close to it with fast Fourier sampling, and transmits the half
//!   s2 of that vector in compressed form ([`sign`]).
//! - Verification recomputes the other half s1 from the public key and
//!   checks the norm bound ([`verify`]).
//!
//! All floating-point work goes through [`fpr::Fpr`], an integer-only
//! emulation of IEEE-754 binary64, so signatures are bit-reproducible on
//! every platform.
//!
//! ## Parameter Sets
//!
//! - [`params::FALCON_512`]: NIST Level 1 (~128-bit security)
//! - [`params::FALCON_1024`]: NIST Level 5 (~256-bit security)
//!
//! Reduced degrees (`Params::new(logn)` for logn in 1..=8) are supported
//! for testing; they offer no security.
//!
//! ## Example
//!
//! ```
//! use pqsigs_falcon::{generate_keypair, sign, verify, Params};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let params = Params::new(6).unwrap();
//! let (pk, sk) = generate_keypair(&mut rng, &params).unwrap();
//! let sig = sign(b"hello", &sk, &mut rng).unwrap();
//! assert!(verify(b"hello", &sig, &pk));
//! ```
//!
//! ## Security Warning
//!
//! This implementation:
//! - Uses constant-time code for key material in the samplers and field
//!   arithmetic, but hashing to a point is variable-time (over public data)
//! - Has NOT been audited by security professionals
//! - Should NOT be used in production systems

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod error;
pub mod fft;
pub mod fft_tree;
pub(crate) mod field;
pub mod fpr;
pub(crate) mod fpr_tables;
pub mod gaussian;
pub mod hash;
pub mod keygen;
pub(crate) mod modp;
pub(crate) mod ntru;
pub mod packing;
pub mod params;
pub mod poly;
pub(crate) mod primes;
pub mod prng;
pub mod sampler;
pub mod shake;
pub mod sign;
pub mod verify;
pub(crate) mod zint;

pub use error::{FalconError, Result, VerificationFailure};
pub use fft_tree::ExpandedSecretKey;
pub use keygen::{generate_keypair, keygen, keygen_with_seed, KeyPair, PublicKey, SecretKey};
pub use params::{Params, FALCON_1024, FALCON_512};
pub use sign::{sign, sign_dyn, sign_with_expanded, Signature};
pub use verify::{verify, verify_with_public};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_available() {
        assert_eq!(FALCON_512.n, 512);
        assert_eq!(FALCON_1024.n, 1024);
    }
}
