//! ChaCha20-based PRNG for the signing sampler.
//!
//! The generator runs eight ChaCha20 instances per refill (counters
//! `cc .. cc+7`) and interleaves their outputs four bytes at a time, so
//! that a 512-byte buffer holds word `v` of instance `u` at offset
//! `4*u + 32*v`. The Gaussian sampler consumes exact byte offsets of this
//! buffer, so the layout is part of the output definition.

use zeroize::Zeroize;

use crate::shake::ShakeReader;

/// Size of the output buffer produced by one refill.
pub const PRNG_BUF_LEN: usize = 512;

// "expand 32-byte k"
const CW: [u32; 4] = [0x61707865, 0x3320646e, 0x79622d32, 0x6b206574];

/// A source of random bytes for the Gaussian sampler.
pub trait RandomSource {
    /// Returns the next 8 bytes as a little-endian `u64`.
    fn next_u64(&mut self) -> u64;

    /// Returns the next byte.
    fn next_u8(&mut self) -> u8;
}

#[inline(always)]
fn qround(s: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    s[a] = s[a].wrapping_add(s[b]);
    s[d] = (s[d] ^ s[a]).rotate_left(16);
    s[c] = s[c].wrapping_add(s[d]);
    s[b] = (s[b] ^ s[c]).rotate_left(12);
    s[a] = s[a].wrapping_add(s[b]);
    s[d] = (s[d] ^ s[a]).rotate_left(8);
    s[c] = s[c].wrapping_add(s[d]);
    s[b] = (s[b] ^ s[c]).rotate_left(7);
}

/// The ChaCha20 block function: 20 rounds plus the feed-forward addition.
pub(crate) fn chacha20_block(input: &[u32; 16]) -> [u32; 16] {
    let mut s = *input;
    for _ in 0..10 {
        qround(&mut s, 0, 4, 8, 12);
        qround(&mut s, 1, 5, 9, 13);
        qround(&mut s, 2, 6, 10, 14);
        qround(&mut s, 3, 7, 11, 15);
        qround(&mut s, 0, 5, 10, 15);
        qround(&mut s, 1, 6, 11, 12);
        qround(&mut s, 2, 7, 8, 13);
        qround(&mut s, 3, 4, 9, 14);
    }
    for (w, i) in s.iter_mut().zip(input.iter()) {
        *w = w.wrapping_add(*i);
    }
    s
}

/// Deterministic ChaCha20 generator seeded from SHAKE256.
#[derive(Clone)]
pub struct Prng {
    buf: [u8; PRNG_BUF_LEN],
    ptr: usize,
    /// Key (8 words) and IV (4 words).
    key: [u32; 12],
    counter: u64,
}

impl Prng {
    /// Seeds the generator with 56 bytes extracted from a SHAKE256 stream:
    /// 12 little-endian words of key and IV followed by a 64-bit counter.
    pub fn from_shake(src: &mut ShakeReader) -> Self {
        let mut tmp = [0u8; 56];
        src.squeeze(&mut tmp);
        let mut key = [0u32; 12];
        for (i, k) in key.iter_mut().enumerate() {
            *k = u32::from_le_bytes([tmp[4 * i], tmp[4 * i + 1], tmp[4 * i + 2], tmp[4 * i + 3]]);
        }
        let mut ctr = [0u8; 8];
        ctr.copy_from_slice(&tmp[48..56]);
        tmp.zeroize();
        let mut p = Prng {
            buf: [0u8; PRNG_BUF_LEN],
            ptr: 0,
            key,
            counter: u64::from_le_bytes(ctr),
        };
        p.refill();
        p
    }

    /// Regenerates the 512-byte output buffer and resets the read pointer.
    pub fn refill(&mut self) {
        let mut cc = self.counter;
        for u in 0..8 {
            let mut state = [0u32; 16];
            state[..4].copy_from_slice(&CW);
            state[4..].copy_from_slice(&self.key);
            state[14] ^= cc as u32;
            state[15] ^= (cc >> 32) as u32;
            let out = chacha20_block(&state);
            cc = cc.wrapping_add(1);

            for (v, w) in out.iter().enumerate() {
                let off = (u << 2) + (v << 5);
                self.buf[off..off + 4].copy_from_slice(&w.to_le_bytes());
            }
        }
        self.counter = cc;
        self.ptr = 0;
    }

    /// Copies `out.len()` bytes out of the stream.
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        for o in out.iter_mut() {
            *o = self.next_u8();
        }
    }
}

impl RandomSource for Prng {
    fn next_u64(&mut self) -> u64 {
        // Fewer than 9 bytes left: drop them and refill, so that the
        // buffer is never left empty.
        let mut u = self.ptr;
        if u >= PRNG_BUF_LEN - 9 {
            self.refill();
            u = 0;
        }
        self.ptr = u + 8;
        let mut w = [0u8; 8];
        w.copy_from_slice(&self.buf[u..u + 8]);
        u64::from_le_bytes(w)
    }

    fn next_u8(&mut self) -> u8 {
        let v = self.buf[self.ptr];
        self.ptr += 1;
        if self.ptr == PRNG_BUF_LEN {
            self.refill();
        }
        v
    }
}

impl Drop for Prng {
    fn drop(&mut self) {
        self.buf.zeroize();
        self.key.zeroize();
        self.counter.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shake::Shake256;

    fn words_le(bytes: &[u8]) -> Vec<u32> {
        bytes
            .chunks(4)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect()
    }

    #[test]
    fn test_block_rfc8439() {
        // RFC 8439 section 2.4.2: key 00..1f, counter 1, nonce 00:00:00:00:00:00:00:4a:00:00:00:00.
        let key = hex::decode("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f")
            .unwrap();
        let nonce = hex::decode("000000000000004a00000000").unwrap();
        let plaintext = b"Ladies and Gentlemen of the class of '99: If I could offer you o";
        let ciphertext = hex::decode(
            "6e2e359a2568f98041ba0728dd0d6981e97e7aec1d4360c20a27afccfd9fae0b\
             f91b65c5524733ab8f593dabcd62b3571639d624e65152ab8f530c359f0861d8",
        )
        .unwrap();

        let mut state = [0u32; 16];
        state[..4].copy_from_slice(&CW);
        state[4..12].copy_from_slice(&words_le(&key));
        state[12] = 1;
        state[13..].copy_from_slice(&words_le(&nonce));

        let out = chacha20_block(&state);
        let keystream: Vec<u8> = out.iter().flat_map(|w| w.to_le_bytes()).collect();
        let expected: Vec<u8> = plaintext
            .iter()
            .zip(ciphertext.iter())
            .map(|(p, c)| p ^ c)
            .collect();
        assert_eq!(keystream, expected);
    }

    #[test]
    fn test_refill_interleaving() {
        let mut src = Shake256::digest_xof(&[&b"interleave"[..]]);
        let prng = Prng::from_shake(&mut src);

        // Rebuild instance 3 by hand and compare with its scattered words.
        let mut src = Shake256::digest_xof(&[&b"interleave"[..]]);
        let mut tmp = [0u8; 56];
        src.squeeze(&mut tmp);
        let key = words_le(&tmp[..48]);
        let cc = u64::from_le_bytes(tmp[48..56].try_into().unwrap()).wrapping_add(3);
        let mut state = [0u32; 16];
        state[..4].copy_from_slice(&CW);
        state[4..].copy_from_slice(&key);
        state[14] ^= cc as u32;
        state[15] ^= (cc >> 32) as u32;
        let out = chacha20_block(&state);
        for (v, w) in out.iter().enumerate() {
            let off = (3 << 2) + (v << 5);
            assert_eq!(&prng.buf[off..off + 4], &w.to_le_bytes());
        }
        assert_eq!(prng.counter, cc.wrapping_add(5));
    }

    #[test]
    fn test_get_u64_refills_near_end() {
        let mut src = Shake256::digest_xof(&[&b"refill"[..]]);
        let mut prng = Prng::from_shake(&mut src);
        let first_buf = prng.buf;

        // 62 reads of 8 bytes stay within the first buffer (ptr reaches 496).
        for i in 0..62 {
            let v = prng.next_u64();
            let mut b = [0u8; 8];
            b.copy_from_slice(&first_buf[i * 8..i * 8 + 8]);
            assert_eq!(v, u64::from_le_bytes(b));
        }
        assert_eq!(prng.ptr, 496);

        // 496 < 503: one more read from the same buffer.
        prng.next_u64();
        assert_eq!(prng.ptr, 504);

        // 504 >= 503: the remaining 8 bytes are dropped.
        let v = prng.next_u64();
        assert_ne!(prng.buf, first_buf);
        let mut b = [0u8; 8];
        b.copy_from_slice(&prng.buf[..8]);
        assert_eq!(v, u64::from_le_bytes(b));
    }

    #[test]
    fn test_get_u8_refills_at_end() {
        let mut src = Shake256::digest_xof(&[&b"bytes"[..]]);
        let mut prng = Prng::from_shake(&mut src);
        let first_buf = prng.buf;
        for i in 0..PRNG_BUF_LEN {
            assert_eq!(prng.next_u8(), first_buf[i]);
        }
        assert_eq!(prng.ptr, 0);
        assert_ne!(prng.buf, first_buf);
    }
}
