//! Hashing messages to points of Z_q[X]/(X^n + 1).

use rand::{CryptoRng, RngCore};

use crate::error::{FalconError, Result};
use crate::params::{NONCE_SIZE, Q};
use crate::shake::{Shake256, ShakeReader};

/// Largest multiple of q below 2^16.
const HASH_LIMIT: u32 = 5 * Q;

/// Reads `2^logn` coefficients in [0, q-1] from a finalized SHAKE256
/// stream.
///
/// Output bytes are taken in pairs as big-endian 16-bit words; words of
/// 61445 or more are discarded and the rest are reduced modulo q.
///
/// The number of discarded words depends on the hashed data, so the
/// running time leaks it. This is harmless when the input is public
/// (nonce and message), which is the only way it is used here.
pub fn hash_to_point_vartime(reader: &mut ShakeReader, logn: u32) -> Vec<u16> {
    let n = 1usize << logn;
    let mut x = Vec::with_capacity(n);
    let mut buf = [0u8; 2];
    while x.len() < n {
        reader.squeeze(&mut buf);
        let w = u16::from_be_bytes(buf) as u32;
        if w < HASH_LIMIT {
            x.push((w % Q) as u16);
        }
    }
    x
}

/// Hashes `nonce || message` to a point.
pub fn hash_message(nonce: &[u8], message: &[u8], logn: u32) -> Vec<u16> {
    let mut reader = Shake256::digest_xof(&[nonce, message]);
    hash_to_point_vartime(&mut reader, logn)
}

/// Draws a fresh nonce from `rng`.
pub fn generate_nonce<R: RngCore + CryptoRng>(rng: &mut R) -> Result<[u8; NONCE_SIZE]> {
    let mut nonce = [0u8; NONCE_SIZE];
    rng.try_fill_bytes(&mut nonce)
        .map_err(|_| FalconError::InvalidInput {
            field: "rng",
            reason: "entropy source failed",
        })?;
    Ok(nonce)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use sha3::digest::{ExtendableOutput, Update, XofReader};

    /// Same construction on top of the `sha3` crate.
    fn hash_with_sha3(nonce: &[u8], message: &[u8], n: usize) -> Vec<u16> {
        let mut h = sha3::Shake256::default();
        h.update(nonce);
        h.update(message);
        let mut reader = h.finalize_xof();
        let mut out = Vec::new();
        let mut buf = [0u8; 2];
        while out.len() < n {
            reader.read(&mut buf);
            let w = u16::from_be_bytes(buf) as u32;
            if w < 61445 {
                out.push((w % 12289) as u16);
            }
        }
        out
    }

    #[test]
    fn test_hash_matches_sha3() {
        let nonce = [0x5Au8; NONCE_SIZE];
        for (logn, msg) in [(9u32, &b"data1"[..]), (10, b""), (3, b"Hello, Falcon!")] {
            let got = hash_message(&nonce, msg, logn);
            assert_eq!(got, hash_with_sha3(&nonce, msg, 1 << logn), "logn {}", logn);
        }
    }

    #[test]
    fn test_hash_deterministic_and_in_range() {
        let nonce = [42u8; NONCE_SIZE];
        let c1 = hash_message(&nonce, b"test", 9);
        let c2 = hash_message(&nonce, b"test", 9);
        let c3 = hash_message(&nonce, b"tesu", 9);
        assert_eq!(c1.len(), 512);
        assert_eq!(c1, c2);
        assert_ne!(c1, c3);
        assert!(c1.iter().all(|&v| (v as u32) < Q));
    }

    #[test]
    fn test_hash_nonce_and_message_are_concatenated() {
        // SHAKE256(a || b) only sees the concatenation.
        let a = hash_message(b"abc", b"def", 6);
        let b = hash_message(b"ab", b"cdef", 6);
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_nonce() {
        let mut rng = StdRng::seed_from_u64(42);
        let nonce1 = generate_nonce(&mut rng).unwrap();
        let nonce2 = generate_nonce(&mut rng).unwrap();
        assert_ne!(nonce1, nonce2);
    }
}
