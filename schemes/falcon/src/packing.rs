//! Byte encodings for Falcon keys and signatures.
//!
//! Three bit-packing formats are used:
//! - `modq`: 14 bits per coefficient, for the public polynomial h;
//! - `trim`: two's complement on a fixed number of bits, for f, g and F;
//! - `comp`: a sign bit, the low 7 bits of the magnitude, then the high
//!   bits in unary, for the signature polynomial s2.
//!
//! All bit streams are big-endian. Decoders reject non-canonical input
//! (out-of-range values, forbidden patterns, non-zero padding bits), so
//! each key or signature has exactly one valid encoding.

use crate::error::{FalconError, Result};
use crate::keygen::{PublicKey, SecretKey};
use crate::params::{Params, NONCE_SIZE, PK_HEADER, Q, SIG_BODY_HEADER, SIG_HEADER, SK_HEADER};
use crate::sign::Signature;

// ============================================================================
// modq
// ============================================================================

/// Encodes values in [0, q-1] on 14 bits each.
///
/// Returns `None` if a value is out of range.
pub fn modq_encode(x: &[u16], logn: u32) -> Option<Vec<u8>> {
    let n = 1usize << logn;
    if x.len() != n || x.iter().any(|&v| v as u32 >= Q) {
        return None;
    }
    let mut out = Vec::with_capacity((n * 14 + 7) >> 3);
    let mut acc = 0u32;
    let mut acc_len = 0;
    for &v in x {
        acc = (acc << 14) | v as u32;
        acc_len += 14;
        while acc_len >= 8 {
            acc_len -= 8;
            out.push((acc >> acc_len) as u8);
        }
    }
    if acc_len > 0 {
        out.push((acc << (8 - acc_len)) as u8);
    }
    Some(out)
}

/// Decodes `2^logn` values of 14 bits each.
///
/// Returns the values and the number of bytes read.
pub fn modq_decode(buf: &[u8], logn: u32) -> Option<(Vec<u16>, usize)> {
    let n = 1usize << logn;
    let in_len = (n * 14 + 7) >> 3;
    if buf.len() < in_len {
        return None;
    }
    let mut x = Vec::with_capacity(n);
    let mut acc = 0u32;
    let mut acc_len = 0;
    for &b in &buf[..in_len] {
        acc = (acc << 8) | b as u32;
        acc_len += 8;
        if acc_len >= 14 {
            acc_len -= 14;
            let w = (acc >> acc_len) & 0x3FFF;
            if w >= Q {
                return None;
            }
            x.push(w as u16);
        }
    }
    if acc & ((1u32 << acc_len) - 1) != 0 {
        return None;
    }
    Some((x, in_len))
}

// ============================================================================
// trim
// ============================================================================

fn trim_encode(x: impl ExactSizeIterator<Item = i32>, bits: u32) -> Option<Vec<u8>> {
    let n = x.len();
    let maxv = (1i32 << (bits - 1)) - 1;
    let mask = (1u32 << bits) - 1;
    let mut out = Vec::with_capacity((n * bits as usize + 7) >> 3);
    let mut acc = 0u32;
    let mut acc_len = 0;
    for v in x {
        if v < -maxv || v > maxv {
            return None;
        }
        acc = (acc << bits) | (v as u32 & mask);
        acc_len += bits;
        while acc_len >= 8 {
            acc_len -= 8;
            out.push((acc >> acc_len) as u8);
        }
    }
    if acc_len > 0 {
        out.push((acc << (8 - acc_len)) as u8);
    }
    Some(out)
}

fn trim_decode(buf: &[u8], n: usize, bits: u32) -> Option<(Vec<i32>, usize)> {
    let in_len = (n * bits as usize + 7) >> 3;
    if buf.len() < in_len {
        return None;
    }
    let mask1 = (1u32 << bits) - 1;
    let mask2 = 1u32 << (bits - 1);
    let mut x = Vec::with_capacity(n);
    let mut acc = 0u32;
    let mut acc_len = 0;
    for &b in &buf[..in_len] {
        acc = (acc << 8) | b as u32;
        acc_len += 8;
        while acc_len >= bits && x.len() < n {
            acc_len -= bits;
            let w = (acc >> acc_len) & mask1;
            // -2^(bits-1) is forbidden.
            if w == mask2 {
                return None;
            }
            let shift = 32 - bits;
            x.push(((w << shift) as i32) >> shift);
        }
    }
    if acc & ((1u32 << acc_len) - 1) != 0 {
        return None;
    }
    Some((x, in_len))
}

/// Encodes small signed values on `bits` bits each, two's complement.
///
/// Values must lie in `-(2^(bits-1) - 1)..=2^(bits-1) - 1`.
pub fn trim_i8_encode(x: &[i8], logn: u32, bits: u32) -> Option<Vec<u8>> {
    if x.len() != 1 << logn || !(2..=8).contains(&bits) {
        return None;
    }
    trim_encode(x.iter().map(|&v| v as i32), bits)
}

/// Decodes `2^logn` signed values of `bits` bits each.
pub fn trim_i8_decode(buf: &[u8], logn: u32, bits: u32) -> Option<(Vec<i8>, usize)> {
    if !(2..=8).contains(&bits) {
        return None;
    }
    let (x, len) = trim_decode(buf, 1 << logn, bits)?;
    Some((x.into_iter().map(|v| v as i8).collect(), len))
}

/// Same as [`trim_i8_encode`] for 16-bit values, `bits` up to 16.
pub fn trim_i16_encode(x: &[i16], logn: u32, bits: u32) -> Option<Vec<u8>> {
    if x.len() != 1 << logn || !(2..=16).contains(&bits) {
        return None;
    }
    trim_encode(x.iter().map(|&v| v as i32), bits)
}

/// Same as [`trim_i8_decode`] for 16-bit values, `bits` up to 16.
pub fn trim_i16_decode(buf: &[u8], logn: u32, bits: u32) -> Option<(Vec<i16>, usize)> {
    if !(2..=16).contains(&bits) {
        return None;
    }
    let (x, len) = trim_decode(buf, 1 << logn, bits)?;
    Some((x.into_iter().map(|v| v as i16).collect(), len))
}

// ============================================================================
// comp
// ============================================================================

/// Compresses a polynomial with coefficients in [-2047, 2047].
///
/// Each value takes one sign bit, the 7 low bits of its absolute value,
/// and then `|v| >> 7` zeros followed by a one. The last byte is padded
/// with zeros.
pub fn comp_encode(x: &[i16], logn: u32) -> Option<Vec<u8>> {
    let n = 1usize << logn;
    if x.len() != n || x.iter().any(|&v| !(-2047..=2047).contains(&v)) {
        return None;
    }
    let mut out = Vec::with_capacity(n + (n >> 2));
    let mut acc = 0u32;
    let mut acc_len = 0u32;
    for &v in x {
        acc <<= 1;
        if v < 0 {
            acc |= 1;
        }
        let mut w = v.unsigned_abs() as u32;

        acc = (acc << 7) | (w & 127);
        w >>= 7;
        acc_len += 8;

        // w <= 15 here, so at most 31 bits are pending.
        acc = (acc << (w + 1)) | 1;
        acc_len += w + 1;

        while acc_len >= 8 {
            acc_len -= 8;
            out.push((acc >> acc_len) as u8);
        }
    }
    if acc_len > 0 {
        out.push((acc << (8 - acc_len)) as u8);
    }
    Some(out)
}

/// Decompresses `2^logn` values produced by [`comp_encode`].
///
/// Returns the values and the number of bytes read. Fails on truncated
/// input, magnitudes above 2047, "minus zero" and non-zero padding bits.
pub fn comp_decode(buf: &[u8], logn: u32) -> Option<(Vec<i16>, usize)> {
    let n = 1usize << logn;
    let mut x = Vec::with_capacity(n);
    let mut bytes = buf.iter();
    let mut acc = 0u32;
    let mut acc_len = 0u32;
    let mut v = 0usize;
    for _ in 0..n {
        acc = (acc << 8) | *bytes.next()? as u32;
        v += 1;
        let b = acc >> acc_len;
        let s = b & 128;
        let mut m = b & 127;

        loop {
            if acc_len == 0 {
                acc = (acc << 8) | *bytes.next()? as u32;
                v += 1;
                acc_len = 8;
            }
            acc_len -= 1;
            if (acc >> acc_len) & 1 != 0 {
                break;
            }
            m += 128;
            if m > 2047 {
                return None;
            }
        }

        if s != 0 && m == 0 {
            return None;
        }
        x.push(if s != 0 { -(m as i16) } else { m as i16 });
    }
    if acc & ((1u32 << acc_len) - 1) != 0 {
        return None;
    }
    Some((x, v))
}

// ============================================================================
// Public key
// ============================================================================

/// Encodes a public key: `0x00 + logn`, then h in `modq` format.
pub fn encode_public_key(pk: &PublicKey) -> Result<Vec<u8>> {
    let logn = pk.params.log_n;
    let body = modq_encode(&pk.h, logn).ok_or(FalconError::InvalidKey {
        reason: "public polynomial out of range",
    })?;
    let mut bytes = Vec::with_capacity(pk.params.pk_bytes);
    bytes.push(PK_HEADER + logn as u8);
    bytes.extend_from_slice(&body);
    if bytes.len() != pk.params.pk_bytes {
        return Err(FalconError::Internal {
            context: "public key length",
        });
    }
    Ok(bytes)
}

/// Decodes a public key. The degree is taken from the header byte.
pub fn decode_public_key(bytes: &[u8]) -> Result<PublicKey> {
    let (&header, body) = bytes.split_first().ok_or(FalconError::DecodingError {
        context: "empty public key",
    })?;
    let params = Params::from_header(header, PK_HEADER)?;
    if bytes.len() != params.pk_bytes {
        return Err(FalconError::DecodingError {
            context: "public key length",
        });
    }
    let (h, _) = modq_decode(body, params.log_n).ok_or(FalconError::DecodingError {
        context: "public key coefficients",
    })?;
    Ok(PublicKey { h, params })
}

// ============================================================================
// Secret key
// ============================================================================

/// Encodes a secret key: `0x50 + logn`, then f, g and F in `trim` format.
///
/// G is not encoded.
pub fn encode_secret_key(sk: &SecretKey) -> Result<Vec<u8>> {
    let params = &sk.params;
    let logn = params.log_n;
    let out_of_range = FalconError::InvalidKey {
        reason: "secret polynomial out of range",
    };
    let mut bytes = Vec::with_capacity(params.sk_bytes);
    bytes.push(SK_HEADER + logn as u8);
    for (poly, bits) in [
        (&sk.f, params.fg_bits()),
        (&sk.g, params.fg_bits()),
        (&sk.big_f, params.big_fg_bits()),
    ] {
        let enc = trim_i8_encode(poly, logn, bits).ok_or(out_of_range.clone())?;
        bytes.extend_from_slice(&enc);
    }
    if bytes.len() != params.sk_bytes {
        return Err(FalconError::Internal {
            context: "secret key length",
        });
    }
    Ok(bytes)
}

/// Decodes a secret key and recomputes G.
pub fn decode_secret_key(bytes: &[u8]) -> Result<SecretKey> {
    let (&header, body) = bytes.split_first().ok_or(FalconError::DecodingError {
        context: "empty secret key",
    })?;
    let params = Params::from_header(header, SK_HEADER)?;
    if bytes.len() != params.sk_bytes {
        return Err(FalconError::DecodingError {
            context: "secret key length",
        });
    }
    let logn = params.log_n;
    let bad = |context| FalconError::DecodingError { context };

    let (f, off) = trim_i8_decode(body, logn, params.fg_bits()).ok_or(bad("secret key f"))?;
    let body = &body[off..];
    let (g, off) = trim_i8_decode(body, logn, params.fg_bits()).ok_or(bad("secret key g"))?;
    let body = &body[off..];
    let (big_f, off) =
        trim_i8_decode(body, logn, params.big_fg_bits()).ok_or(bad("secret key F"))?;
    if off != body.len() {
        return Err(bad("secret key trailing bytes"));
    }
    SecretKey::from_fgf(f, g, big_f, params)
}

// ============================================================================
// Signature
// ============================================================================

/// Encodes a signature:
/// `0x30 + logn || nonce || 0x20 + logn || comp(s2)`.
///
/// Returns `None` if s2 cannot be compressed or the result would exceed
/// [`Params::sig_bytes_max`]; the signer treats both as a rejected
/// candidate.
pub fn encode_signature(sig: &Signature) -> Option<Vec<u8>> {
    let params = &sig.params;
    let logn = params.log_n;
    let body = comp_encode(&sig.s2, logn)?;
    let len = 2 + NONCE_SIZE + body.len();
    if len > params.sig_bytes_max {
        return None;
    }
    let mut bytes = Vec::with_capacity(len);
    bytes.push(SIG_HEADER + logn as u8);
    bytes.extend_from_slice(&sig.nonce);
    bytes.push(SIG_BODY_HEADER + logn as u8);
    bytes.extend_from_slice(&body);
    Some(bytes)
}

/// Decodes a signature. The compressed body must fill the rest of the
/// input exactly.
pub fn decode_signature(bytes: &[u8]) -> Result<Signature> {
    let bad = |context| FalconError::DecodingError { context };
    if bytes.len() < 2 + NONCE_SIZE {
        return Err(bad("signature too short"));
    }
    let params = Params::from_header(bytes[0], SIG_HEADER)?;
    if bytes.len() > params.sig_bytes_max {
        return Err(bad("signature too long"));
    }
    if bytes[1 + NONCE_SIZE] != SIG_BODY_HEADER + params.log_n as u8 {
        return Err(bad("signature body header"));
    }
    let mut nonce = [0u8; NONCE_SIZE];
    nonce.copy_from_slice(&bytes[1..1 + NONCE_SIZE]);

    let body = &bytes[2 + NONCE_SIZE..];
    let (s2, used) = comp_decode(body, params.log_n).ok_or(bad("signature body"))?;
    if used != body.len() {
        return Err(bad("signature trailing bytes"));
    }
    Ok(Signature { nonce, s2, params })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keygen::keygen_with_seed;
    use crate::params::FALCON_512;
    use proptest::prelude::*;

    #[test]
    fn test_modq_known_bytes() {
        // 12288 = 0b11_0000_0000_0000, 1 = 0b00_0000_0000_0001
        let enc = modq_encode(&[12288, 1], 1).unwrap();
        assert_eq!(enc, vec![0xC0, 0x00, 0x00, 0x10]);
        assert_eq!(modq_decode(&enc, 1), Some((vec![12288, 1], 4)));
    }

    #[test]
    fn test_modq_rejects() {
        assert!(modq_encode(&[12289, 0], 1).is_none());
        // 0x3001 = 12289 in the first slot
        assert!(modq_decode(&[0xC0, 0x04, 0x00, 0x00], 1).is_none());
        // non-zero padding
        assert!(modq_decode(&[0x00, 0x00, 0x00, 0x01], 1).is_none());
        assert!(modq_decode(&[0x00, 0x00, 0x00], 1).is_none());
    }

    #[test]
    fn test_trim_forbidden_values() {
        assert!(trim_i8_encode(&[-128, 0], 1, 8).is_none());
        assert!(trim_i8_encode(&[32, 0], 1, 6).is_none());
        assert!(trim_i8_encode(&[31, -31], 1, 6).is_some());
        // 0x80 = -128 on 8 bits
        assert!(trim_i8_decode(&[0x80, 0x00], 1, 8).is_none());
        assert_eq!(trim_i8_decode(&[0x81, 0x7F], 1, 8), Some((vec![-127, 127], 2)));
        // 5 bits * 2 = 10 bits, the last 6 must be zero
        assert!(trim_i8_decode(&[0x00, 0x01], 1, 5).is_none());
        assert!(trim_i16_decode(&[0x80, 0x00, 0x00], 1, 12).is_none());
    }

    #[test]
    fn test_comp_known_bytes() {
        // 1:   0 0000001 1
        // -1:  1 0000001 1
        // 130: 0 0000010 01
        // 0:   0 0000000 1
        let enc = comp_encode(&[1, -1, 130, 0], 2).unwrap();
        assert_eq!(enc, vec![0x01, 0xC0, 0xC0, 0x90, 0x08]);
        assert_eq!(comp_decode(&enc, 2), Some((vec![1, -1, 130, 0], 5)));
    }

    #[test]
    fn test_comp_rejects() {
        assert!(comp_encode(&[2048, 0], 1).is_none());
        assert!(comp_encode(&[-2048, 0], 1).is_none());
        assert!(comp_encode(&[2047, -2047], 1).is_some());

        // "-0": sign bit set, zero magnitude
        assert!(comp_decode(&[0x80, 0x80], 1).is_none());
        // sixteen zeros after the low bits: magnitude 2048
        assert!(comp_decode(&[0x00, 0x00, 0x00, 0x80, 0x00], 1).is_none());
        // truncated
        assert!(comp_decode(&[0x01], 1).is_none());
        // 0 then 0, then a stray padding bit
        assert!(comp_decode(&[0x00, 0x80, 0x60], 1).is_none());
        assert_eq!(comp_decode(&[0x00, 0x80, 0x40], 1), Some((vec![0, 0], 3)));
    }

    #[test]
    fn test_comp_reports_consumed_length() {
        let enc = comp_encode(&[5, -7, 300, 0], 2).unwrap();
        let mut padded = enc.clone();
        padded.extend_from_slice(&[0xAA, 0xBB]);
        let (x, used) = comp_decode(&padded, 2).unwrap();
        assert_eq!(x, vec![5, -7, 300, 0]);
        assert_eq!(used, enc.len());
    }

    #[test]
    fn test_public_key_roundtrip() {
        let kp = keygen_with_seed(b"packing pk", &Params::new(6).unwrap()).unwrap();
        let bytes = encode_public_key(&kp.pk).unwrap();
        assert_eq!(bytes[0], 0x06);
        assert_eq!(decode_public_key(&bytes).unwrap(), kp.pk);

        assert!(decode_public_key(&bytes[..bytes.len() - 1]).is_err());
        let mut bad = bytes.clone();
        bad[0] = 0x16;
        assert!(decode_public_key(&bad).is_err());
        assert!(decode_public_key(&[]).is_err());
    }

    #[test]
    fn test_secret_key_roundtrip() {
        let kp = keygen_with_seed(b"packing sk", &FALCON_512).unwrap();
        let bytes = encode_secret_key(&kp.sk).unwrap();
        assert_eq!(bytes.len(), 1281);
        assert_eq!(bytes[0], 0x59);
        let sk = decode_secret_key(&bytes).unwrap();
        assert_eq!(sk.f, kp.sk.f);
        assert_eq!(sk.g, kp.sk.g);
        assert_eq!(sk.big_f, kp.sk.big_f);
        assert_eq!(sk.big_g, kp.sk.big_g);

        let mut bad = bytes.clone();
        bad[0] = 0x09;
        assert!(decode_secret_key(&bad).is_err());
        assert!(decode_secret_key(&bytes[..1280]).is_err());
    }

    #[test]
    fn test_signature_format() {
        let params = Params::new(3).unwrap();
        let sig = Signature {
            nonce: [0x42; NONCE_SIZE],
            s2: vec![1, -1, 130, 0, 0, 0, 0, 0],
            params,
        };
        let bytes = encode_signature(&sig).unwrap();
        assert_eq!(bytes[0], 0x33);
        assert_eq!(&bytes[1..41], &[0x42; 40]);
        assert_eq!(bytes[41], 0x23);
        assert_eq!(decode_signature(&bytes).unwrap(), sig);

        let mut extra = bytes.clone();
        extra.push(0);
        assert!(decode_signature(&extra).is_err());
        let mut bad = bytes.clone();
        bad[41] = 0x24;
        assert!(decode_signature(&bad).is_err());
        assert!(decode_signature(&bytes[..41]).is_err());
    }

    #[test]
    fn test_signature_length_cap() {
        // 2047 takes 24 bits; two of them overflow the 3-byte body of logn 1.
        let sig = Signature {
            nonce: [0; NONCE_SIZE],
            s2: vec![2047, 2047],
            params: Params::new(1).unwrap(),
        };
        assert!(encode_signature(&sig).is_none());
    }

    proptest! {
        #[test]
        fn prop_modq_roundtrip(x in prop::collection::vec(0u16..12289, 64)) {
            let enc = modq_encode(&x, 6).unwrap();
            prop_assert_eq!(enc.len(), 112);
            prop_assert_eq!(modq_decode(&enc, 6), Some((x, 112)));
        }

        #[test]
        fn prop_trim_i8_roundtrip(bits in 2u32..=8, seed in prop::collection::vec(any::<i8>(), 32)) {
            let maxv = (1i32 << (bits - 1)) - 1;
            let x: Vec<i8> = seed.iter().map(|&v| ((v as i32) % (maxv + 1)) as i8).collect();
            let enc = trim_i8_encode(&x, 5, bits).unwrap();
            prop_assert_eq!(trim_i8_decode(&enc, 5, bits), Some((x, enc.len())));
        }

        #[test]
        fn prop_trim_i16_roundtrip(x in prop::collection::vec(-2047i16..=2047, 16)) {
            let enc = trim_i16_encode(&x, 4, 12).unwrap();
            prop_assert_eq!(trim_i16_decode(&enc, 4, 12), Some((x, 24)));
        }

        #[test]
        fn prop_comp_roundtrip(x in prop::collection::vec(-2047i16..=2047, 32)) {
            let enc = comp_encode(&x, 5).unwrap();
            prop_assert_eq!(comp_decode(&enc, 5), Some((x, enc.len())));
        }

        #[test]
        fn prop_comp_decode_never_panics(buf in prop::collection::vec(any::<u8>(), 0..80)) {
            if let Some((x, used)) = comp_decode(&buf, 5) {
                prop_assert!(used <= buf.len());
                prop_assert!(x.iter().all(|&v| (-2047..=2047).contains(&v)));
                prop_assert_eq!(comp_encode(&x, 5).unwrap(), buf[..used].to_vec());
            }
        }
    }
}
