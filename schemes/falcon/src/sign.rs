//! Signature generation.
//!
//! The secret basis is `B = [[g, -f], [G, -F]]` with `det(B) = q`. For a
//! hashed point `c`, the target `(c, 0) * B^-1 = (-c*F/q, c*f/q)` is
//! sampled into a nearby integer vector `z` with ffSampling, and
//!
//! ```text
//! (s1, s2) = (c, 0) - z * B
//! ```
//!
//! is short and satisfies `s1 + s2*h = c mod q`. Only s2 is transmitted.
//!
//! Two signing paths produce the same signatures for the same randomness:
//! [`sign_with_expanded`] reuses a precomputed [`ExpandedSecretKey`], and
//! [`sign_dyn`] rebuilds the LDL tree on the fly, which costs more time
//! but needs no expanded key.
//!
//! ## Timing
//!
//! The retry loop and the integer sampler's rejection loop run a random
//! number of times. Hashing the message to a point is also variable-time,
//! but only over public data.

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::{FalconError, Result};
use crate::fft::{fft, ifft, poly_add, poly_mul_fft, poly_mulconst};
use crate::fft_tree::{basis_fft, gram_fft, ExpandedSecretKey};
use crate::fpr::Fpr;
use crate::gaussian::SamplerZ;
use crate::hash::{generate_nonce, hash_message};
use crate::keygen::SecretKey;
use crate::packing;
use crate::params::{Params, NONCE_SIZE, SEED_SIZE};
use crate::poly::is_short_half;
use crate::prng::Prng;
use crate::sampler::{ff_sampling_fft, ff_sampling_fft_dyntree};
use crate::shake::Shake256;

/// A Falcon signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    /// The nonce hashed together with the message.
    pub nonce: [u8; NONCE_SIZE],
    /// The signature polynomial s2.
    pub s2: Vec<i16>,
    /// The parameter set.
    pub params: Params,
}

impl Signature {
    /// Encodes the signature:
    /// `0x30 + logn || nonce || 0x20 + logn || comp(s2)`.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        packing::encode_signature(self).ok_or(FalconError::InvalidInput {
            field: "signature",
            reason: "s2 cannot be compressed within the size limit",
        })
    }

    /// Decodes a signature; the degree is taken from the header byte.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        packing::decode_signature(bytes)
    }

    /// Returns the squared norm of s2.
    pub fn norm_sq(&self) -> u64 {
        self.s2.iter().map(|&x| (x as i64 * x as i64) as u64).sum()
    }
}

/// Converts a hashed point to FFT form and computes the target
/// `(t0, t1) = (hm*b11/q, -hm*b01/q)`.
fn target_fft(hm: &[u16], b01: &[Fpr], b11: &[Fpr], logn: u32) -> (Vec<Fpr>, Vec<Fpr>) {
    let mut t0: Vec<Fpr> = hm.iter().map(|&x| Fpr::of(x as i64)).collect();
    fft(&mut t0, logn);
    let mut t1 = t0.clone();
    poly_mul_fft(&mut t1, b01, logn);
    poly_mulconst(&mut t1, -Fpr::INVERSE_OF_Q, logn);
    poly_mul_fft(&mut t0, b11, logn);
    poly_mulconst(&mut t0, Fpr::INVERSE_OF_Q, logn);
    (t0, t1)
}

/// Computes `(s1, s2) = (hm, 0) - (z0, z1) * B` and returns s2 if the pair
/// is short enough. `z0` and `z1` are clobbered.
fn finish_signature(
    hm: &[u16],
    z0: &mut [Fpr],
    z1: &mut [Fpr],
    basis: [&[Fpr]; 4],
    logn: u32,
) -> Option<Vec<i16>> {
    let [b00, b01, b10, b11] = basis;

    let mut v0 = z0.to_vec();
    poly_mul_fft(&mut v0, b00, logn);
    let mut tmp = z1.to_vec();
    poly_mul_fft(&mut tmp, b10, logn);
    poly_add(&mut v0, &tmp, logn);

    poly_mul_fft(z0, b01, logn);
    poly_mul_fft(z1, b11, logn);
    poly_add(z0, z1, logn);
    let v1 = z0;

    ifft(&mut v0, logn);
    ifft(v1, logn);

    // ||s1||^2, saturated on overflow.
    let mut sqn = 0u32;
    let mut ng = 0u32;
    for (&c, &v) in hm.iter().zip(v0.iter()) {
        let z = (c as i32).wrapping_sub(v.rint() as i32);
        sqn = sqn.wrapping_add(z.wrapping_mul(z) as u32);
        ng |= sqn;
    }
    sqn |= (ng >> 31).wrapping_neg();

    let s2: Vec<i16> = v1.iter().map(|v| v.rint().wrapping_neg() as i16).collect();

    v0.zeroize();
    tmp.zeroize();
    is_short_half(sqn, &s2, logn).then_some(s2)
}

/// One signing attempt with the precomputed tree. Returns `None` if the
/// sampled vector is too long.
fn do_sign_tree(
    samp: &mut SamplerZ<Prng>,
    esk: &ExpandedSecretKey,
    hm: &[u16],
) -> Option<Vec<i16>> {
    let logn = esk.params().log_n;
    let (mut t0, mut t1) = target_fft(hm, &esk.b01, &esk.b11, logn);
    let (mut z0, mut z1) = ff_sampling_fft(samp, esk.tree(), &t0, &t1, logn);
    t0.zeroize();
    t1.zeroize();

    let basis = [&esk.b00[..], &esk.b01[..], &esk.b10[..], &esk.b11[..]];
    let s2 = finish_signature(hm, &mut z0, &mut z1, basis, logn);
    z0.zeroize();
    z1.zeroize();
    s2
}

/// One signing attempt that builds the LDL tree on the fly.
fn do_sign_dyn(samp: &mut SamplerZ<Prng>, sk: &SecretKey, hm: &[u16]) -> Option<Vec<i16>> {
    let logn = sk.params.log_n;
    let mut basis = basis_fft(&sk.f, &sk.g, &sk.big_f, &sk.big_g, logn);
    let (mut g00, mut g01, mut g11) = gram_fft(&basis, logn);
    let (mut t0, mut t1) = target_fft(hm, &basis[1], &basis[3], logn);

    ff_sampling_fft_dyntree(samp, &mut t0, &mut t1, &mut g00, &mut g01, &mut g11, logn);
    g00.zeroize();
    g01.zeroize();
    g11.zeroize();

    let refs = [&basis[0][..], &basis[1][..], &basis[2][..], &basis[3][..]];
    let s2 = finish_signature(hm, &mut t0, &mut t1, refs, logn);
    t0.zeroize();
    t1.zeroize();
    for b in basis.iter_mut() {
        b.zeroize();
    }
    s2
}

/// Runs signing attempts until one yields an encodable short vector.
///
/// Every attempt seeds a fresh ChaCha20 generator from the same SHAKE256
/// stream, keyed with `seed`.
fn sign_loop<F>(
    params: Params,
    nonce: [u8; NONCE_SIZE],
    message: &[u8],
    seed: &[u8],
    mut attempt: F,
) -> Signature
where
    F: FnMut(&mut SamplerZ<Prng>, &[u16]) -> Option<Vec<i16>>,
{
    let logn = params.log_n;
    let hm = hash_message(&nonce, message, logn);
    let mut src = Shake256::digest_xof(&[seed]);
    loop {
        let mut samp = SamplerZ::new(Prng::from_shake(&mut src), logn);
        if let Some(s2) = attempt(&mut samp, &hm) {
            let sig = Signature { nonce, s2, params };
            if packing::encode_signature(&sig).is_some() {
                return sig;
            }
        }
    }
}

/// Draws the nonce and the sampler seed from `rng`.
fn draw_randomness<R: RngCore + CryptoRng>(
    rng: &mut R,
) -> Result<([u8; NONCE_SIZE], [u8; SEED_SIZE])> {
    let nonce = generate_nonce(rng)?;
    let mut seed = [0u8; SEED_SIZE];
    rng.try_fill_bytes(&mut seed)
        .map_err(|_| FalconError::InvalidInput {
            field: "rng",
            reason: "entropy source failed",
        })?;
    Ok((nonce, seed))
}

/// Signs `message` with an expanded secret key.
pub fn sign_with_expanded<R: RngCore + CryptoRng>(
    esk: &ExpandedSecretKey,
    message: &[u8],
    rng: &mut R,
) -> Result<Signature> {
    let (nonce, mut seed) = draw_randomness(rng)?;
    let sig = sign_loop(*esk.params(), nonce, message, &seed, |samp, hm| {
        do_sign_tree(samp, esk, hm)
    });
    seed.zeroize();
    Ok(sig)
}

/// Signs `message`, computing the LDL tree on the fly.
pub fn sign_dyn<R: RngCore + CryptoRng>(
    sk: &SecretKey,
    message: &[u8],
    rng: &mut R,
) -> Result<Signature> {
    let (nonce, mut seed) = draw_randomness(rng)?;
    let sig = sign_loop(sk.params, nonce, message, &seed, |samp, hm| {
        do_sign_dyn(samp, sk, hm)
    });
    seed.zeroize();
    Ok(sig)
}

/// Signs `message` with an encoded secret key and returns the encoded
/// signature.
pub fn sign<R: RngCore + CryptoRng>(message: &[u8], sk: &[u8], rng: &mut R) -> Result<Vec<u8>> {
    let sk = SecretKey::from_bytes(sk)?;
    let sig = sign_dyn(&sk, message, rng)?;
    packing::encode_signature(&sig).ok_or(FalconError::Internal {
        context: "accepted signature does not encode",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keygen::keygen_with_seed;
    use crate::params::FALCON_512;
    use crate::poly::{recover_s1, to_ntt_monty};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Recomputes s1 from the public key and checks the norm bound.
    fn check(sig: &Signature, h: &[u16], message: &[u8]) -> (Vec<i16>, bool) {
        let logn = sig.params.log_n;
        let mut h = h.to_vec();
        to_ntt_monty(&mut h, logn);
        let c0 = hash_message(&sig.nonce, message, logn);
        let s1 = recover_s1(&c0, &sig.s2, &h, logn);
        let ok = crate::poly::is_short(&s1, &sig.s2, logn);
        (s1, ok)
    }

    #[test]
    fn test_sign_small_degrees() {
        for logn in 1..=8u32 {
            let params = Params::new(logn).unwrap();
            let kp = keygen_with_seed(&[logn as u8; 32], &params).unwrap();
            let esk = kp.sk.expand();
            let mut rng = StdRng::seed_from_u64(logn as u64);
            let sig = sign_with_expanded(&esk, b"small", &mut rng).unwrap();
            assert_eq!(sig.s2.len(), params.n);
            let (_, ok) = check(&sig, &kp.pk.h, b"small");
            assert!(ok, "logn {}", logn);
        }
    }

    #[test]
    fn test_sign_falcon_512() {
        let kp = keygen_with_seed(b"sign 512", &FALCON_512).unwrap();
        let esk = kp.sk.expand();
        let mut rng = StdRng::seed_from_u64(42);
        let sig = sign_with_expanded(&esk, b"Hello, Falcon!", &mut rng).unwrap();

        let (s1, ok) = check(&sig, &kp.pk.h, b"Hello, Falcon!");
        assert!(ok);
        let total = sig.norm_sq() + s1.iter().map(|&x| (x as i64 * x as i64) as u64).sum::<u64>();
        assert!(total <= FALCON_512.sig_bound_sq as u64);

        let bytes = sig.to_bytes().unwrap();
        assert!(bytes.len() <= FALCON_512.sig_bytes_max);
        println!("signature: {} bytes, |s2|^2 = {}", bytes.len(), sig.norm_sq());
    }

    #[test]
    fn test_sign_dyn_matches_expanded() {
        let params = Params::new(6).unwrap();
        let kp = keygen_with_seed(b"dyn vs tree", &params).unwrap();
        let esk = kp.sk.expand();
        for seed in 0..4u64 {
            let a = sign_with_expanded(&esk, b"msg", &mut StdRng::seed_from_u64(seed)).unwrap();
            let b = sign_dyn(&kp.sk, b"msg", &mut StdRng::seed_from_u64(seed)).unwrap();
            assert_eq!(a, b, "seed {}", seed);
        }
    }

    #[test]
    fn test_sign_randomized() {
        let params = Params::new(5).unwrap();
        let kp = keygen_with_seed(b"randomized", &params).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let a = sign_dyn(&kp.sk, b"msg", &mut rng).unwrap();
        let b = sign_dyn(&kp.sk, b"msg", &mut rng).unwrap();
        assert_ne!(a.nonce, b.nonce);
        assert!(check(&a, &kp.pk.h, b"msg").1);
        assert!(check(&b, &kp.pk.h, b"msg").1);
    }

    #[test]
    fn test_sign_from_encoded_key() {
        let params = Params::new(7).unwrap();
        let kp = keygen_with_seed(b"encoded", &params).unwrap();
        let sk_bytes = kp.sk.to_bytes().unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let bytes = sign(b"encoded message", &sk_bytes, &mut rng).unwrap();
        assert_eq!(bytes[0], 0x37);
        let sig = Signature::from_bytes(&bytes).unwrap();
        assert!(check(&sig, &kp.pk.h, b"encoded message").1);

        assert!(sign(b"m", &sk_bytes[1..], &mut rng).is_err());
    }

    #[test]
    fn test_signature_norm() {
        let sig = Signature {
            nonce: [0; NONCE_SIZE],
            s2: vec![1, -2, 3, 4],
            params: Params::new(2).unwrap(),
        };
        assert_eq!(sig.norm_sq(), 30);
    }
}
