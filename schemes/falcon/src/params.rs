//! Parameter sets for Falcon.
//!
//! This module defines the Falcon parameter sets:
//! - FALCON-512: NIST Level 1 (~128-bit security)
//! - FALCON-1024: NIST Level 5 (~256-bit security)
//! - reduced degrees 2..256 built with [`Params::new`], for tests only
//!
//! All sets use the modulus q = 12289 and the ring Z[X]/(X^n + 1).
//! Every bound is read from a fixed table indexed by logn; nothing is
//! derived at runtime.

use crate::error::{FalconError, Result};

/// The Falcon modulus q = 12289.
///
/// This is an NTT-friendly prime: q = 12*1024 + 1 = 3*2^12 + 1.
/// The 2n-th roots of unity exist in Z_q for n up to 1024.
pub const Q: u32 = 12289;

/// Log2 of the modulus rounded up (bits per coefficient in `modq` encoding).
pub const Q_BITS: usize = 14;

/// Smallest supported logn.
pub const MIN_LOGN: u32 = 1;

/// Largest supported logn.
pub const MAX_LOGN: u32 = 10;

/// Nonce size in bytes for signing.
pub const NONCE_SIZE: usize = 40;

/// Length of the seeds drawn from the caller's RNG for key generation
/// and for initialising the signing PRNG.
pub const SEED_SIZE: usize = 48;

/// Public key header: `0x00 + logn`.
pub const PK_HEADER: u8 = 0x00;

/// Secret key header: `0x50 + logn`.
pub const SK_HEADER: u8 = 0x50;

/// Signature header: `0x30 + logn`.
pub const SIG_HEADER: u8 = 0x30;

/// Header of the compressed signature body: `0x20 + logn`.
pub const SIG_BODY_HEADER: u8 = 0x20;

/// Bit width of each coefficient of f and g in the secret key, by logn.
pub const MAX_FG_BITS: [u8; 11] = [0, 8, 8, 8, 8, 8, 7, 7, 6, 6, 5];

/// Bit width of each coefficient of F and G in the secret key, by logn.
pub const MAX_BIG_FG_BITS: [u8; 11] = [0, 8, 8, 8, 8, 8, 8, 8, 8, 8, 8];

/// Bit width bound of signature coefficients, by logn.
pub const MAX_SIG_BITS: [u8; 11] = [0, 10, 11, 11, 12, 12, 12, 12, 12, 12, 12];

/// Squared L2-norm acceptance bound on (s1, s2), by logn.
pub const L2_BOUND: [u32; 11] = [
    0, 101_498, 208_714, 428_865, 892_039, 1_852_696, 3_842_630, 7_959_734, 16_468_416,
    34_034_726, 70_265_242,
];

/// Parameters for the Falcon signature scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Params {
    /// Polynomial degree n = 2^logn.
    pub n: usize,

    /// Log2 of n.
    pub log_n: u32,

    /// Squared L2-norm bound on (s1, s2).
    pub sig_bound_sq: u32,

    /// Public key size in bytes.
    pub pk_bytes: usize,

    /// Secret key size in bytes.
    pub sk_bytes: usize,

    /// Maximum size of an encoded signature in bytes: two header bytes,
    /// the nonce, and at most `ceil((11n + (101 >> (10 - logn)))/8)`
    /// bytes of compressed s2.
    pub sig_bytes_max: usize,

    /// NIST security level (1 or 5; 0 for the reduced test sets).
    pub security_level: u8,
}

impl Params {
    /// Builds the parameter set for the given logn (1..=10).
    pub const fn new(log_n: u32) -> Result<Self> {
        if log_n < MIN_LOGN || log_n > MAX_LOGN {
            return Err(FalconError::InvalidParams {
                reason: "logn must be in 1..=10",
            });
        }
        Ok(Self::build(log_n))
    }

    const fn build(log_n: u32) -> Self {
        let n = 1usize << log_n;
        let fg = MAX_FG_BITS[log_n as usize] as usize;
        let big_fg = MAX_BIG_FG_BITS[log_n as usize] as usize;
        Params {
            n,
            log_n,
            sig_bound_sq: L2_BOUND[log_n as usize],
            pk_bytes: 1 + ((Q_BITS * n + 7) >> 3),
            sk_bytes: 1 + 2 * ((fg * n + 7) >> 3) + ((big_fg * n + 7) >> 3),
            sig_bytes_max: (((11 << log_n) + (101 >> (10 - log_n)) + 7) >> 3) + 2 + NONCE_SIZE,
            security_level: match log_n {
                9 => 1,
                10 => 5,
                _ => 0,
            },
        }
    }

    /// Returns the polynomial degree n.
    #[inline]
    pub const fn n(&self) -> usize {
        self.n
    }

    /// Bits per coefficient of f and g in the encoded secret key.
    #[inline]
    pub const fn fg_bits(&self) -> u32 {
        MAX_FG_BITS[self.log_n as usize] as u32
    }

    /// Bits per coefficient of F and G in the encoded secret key.
    #[inline]
    pub const fn big_fg_bits(&self) -> u32 {
        MAX_BIG_FG_BITS[self.log_n as usize] as u32
    }

    /// Looks up the parameter set matching a header byte's low nibble.
    pub fn from_header(header: u8, base: u8) -> Result<Self> {
        if header & 0xF0 != base {
            return Err(FalconError::DecodingError {
                context: "header tag",
            });
        }
        Params::new((header & 0x0F) as u32).map_err(|_| FalconError::DecodingError {
            context: "header degree",
        })
    }
}

/// FALCON-512 parameters (NIST Level 1, ~128-bit security).
///
/// - Polynomial degree: n = 512
/// - Public key: 897 bytes
/// - Secret key: 1281 bytes
/// - Signature: ~666 bytes (variable, max 753)
pub const FALCON_512: Params = Params::build(9);

/// FALCON-1024 parameters (NIST Level 5, ~256-bit security).
///
/// - Polynomial degree: n = 1024
/// - Public key: 1793 bytes
/// - Secret key: 2305 bytes
/// - Signature: ~1280 bytes (variable, max 1463)
pub const FALCON_1024: Params = Params::build(10);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_falcon_512_params() {
        assert_eq!(FALCON_512.n, 512);
        assert_eq!(FALCON_512.log_n, 9);
        assert_eq!(FALCON_512.pk_bytes, 897);
        assert_eq!(FALCON_512.sk_bytes, 1281);
        assert_eq!(FALCON_512.sig_bytes_max, 753);
        assert_eq!(FALCON_512.sig_bound_sq, 34_034_726);
        assert_eq!(FALCON_512.security_level, 1);
    }

    #[test]
    fn test_falcon_1024_params() {
        assert_eq!(FALCON_1024.n, 1024);
        assert_eq!(FALCON_1024.log_n, 10);
        assert_eq!(FALCON_1024.pk_bytes, 1793);
        assert_eq!(FALCON_1024.sk_bytes, 2305);
        assert_eq!(FALCON_1024.sig_bytes_max, 1463);
        assert_eq!(FALCON_1024.security_level, 5);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Params::new(0).is_err());
        assert!(Params::new(11).is_err());
        for logn in 1..=10 {
            let p = Params::new(logn).unwrap();
            assert_eq!(p.n, 1 << logn);
            assert_eq!(p.log_n, logn);
        }
        assert_eq!(Params::new(9).unwrap(), FALCON_512);
    }

    #[test]
    fn test_modulus() {
        // q = 12289 = 3 * 2^12 + 1
        assert_eq!(Q, 3 * 4096 + 1);
        let q = Q as u64;
        for i in 2..111u64 {
            assert_ne!(q % i, 0, "q should be prime");
        }
    }

    #[test]
    fn test_from_header() {
        assert_eq!(Params::from_header(0x59, SK_HEADER).unwrap(), FALCON_512);
        assert_eq!(Params::from_header(0x0A, PK_HEADER).unwrap(), FALCON_1024);
        assert!(Params::from_header(0x39, SK_HEADER).is_err());
        assert!(Params::from_header(0x50, SK_HEADER).is_err());
        assert!(Params::from_header(0x0B, PK_HEADER).is_err());
    }

    #[test]
    fn test_sig_bits_cover_compressed_range() {
        // Compressed coefficients are bounded by 2047, i.e. 12 signed bits.
        for logn in 1..=10 {
            assert!(MAX_SIG_BITS[logn] <= 12);
            assert!(MAX_SIG_BITS[logn] >= MAX_SIG_BITS[logn - 1]);
        }
        assert_eq!(MAX_SIG_BITS[9], 12);
    }
}
