//! Key generation for Falcon.
//!
//! f and g are sampled coefficient by coefficient from a discrete Gaussian
//! driven by SHAKE256, filtered against the norm bounds, and completed
//! into a full NTRU basis (f, g, F, G) by [`crate::ntru::solve_ntru`].

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::{FalconError, Result};
use crate::fft::{fft, ifft, poly_adj_fft, poly_invnorm2_fft, poly_mul_autoadj_fft, poly_mulconst};
use crate::fft_tree::ExpandedSecretKey;
use crate::fpr::Fpr;
use crate::ntru::solve_ntru;
use crate::packing;
use crate::params::{Params, SEED_SIZE};
use crate::poly::{compute_public, complete_private};
use crate::shake::{Shake256, ShakeReader};

/// A Falcon public key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    /// The public polynomial h = g/f mod q, coefficients in [0, q-1].
    pub h: Vec<u16>,
    /// The parameter set.
    pub params: Params,
}

impl PublicKey {
    /// Returns the size of the encoded public key in bytes.
    pub fn encoded_size(&self) -> usize {
        self.params.pk_bytes
    }

    /// Encodes the public key: header byte, then h on 14 bits per
    /// coefficient.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        packing::encode_public_key(self)
    }

    /// Decodes a public key, rejecting bad headers, lengths and
    /// out-of-range coefficients.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        packing::decode_public_key(bytes)
    }
}

/// A Falcon secret key: the NTRU basis (f, g, F, G).
///
/// # Security
///
/// This struct implements `Drop` to zeroize the basis when dropped.
#[derive(Clone)]
pub struct SecretKey {
    /// The polynomial f.
    pub f: Vec<i8>,
    /// The polynomial g.
    pub g: Vec<i8>,
    /// The polynomial F, with f*G - g*F = q.
    pub big_f: Vec<i8>,
    /// The polynomial G. Not encoded; recomputed when decoding.
    pub big_g: Vec<i8>,
    /// The parameter set.
    pub params: Params,
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.f.zeroize();
        self.g.zeroize();
        self.big_f.zeroize();
        self.big_g.zeroize();
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretKey")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl SecretKey {
    /// Returns the size of the encoded secret key in bytes.
    pub fn encoded_size(&self) -> usize {
        self.params.sk_bytes
    }

    /// Encodes the secret key: header byte, then f, g and F with the
    /// per-degree bit widths.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        packing::encode_secret_key(self)
    }

    /// Decodes a secret key and recomputes G from (f, g, F).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        packing::decode_secret_key(bytes)
    }

    /// Rebuilds a secret key from (f, g, F), recomputing G.
    pub fn from_fgf(f: Vec<i8>, g: Vec<i8>, big_f: Vec<i8>, params: Params) -> Result<Self> {
        let n = params.n;
        if f.len() != n || g.len() != n || big_f.len() != n {
            return Err(FalconError::InvalidKey {
                reason: "polynomial length does not match degree",
            });
        }
        let big_g = complete_private(&f, &g, &big_f, params.log_n).ok_or(
            FalconError::InvalidKey {
                reason: "cannot recompute G",
            },
        )?;
        Ok(SecretKey {
            f,
            g,
            big_f,
            big_g,
            params,
        })
    }

    /// Computes the matching public key h = g/f mod q.
    pub fn public_key(&self) -> Result<PublicKey> {
        let h = compute_public(&self.f, &self.g, self.params.log_n).ok_or(
            FalconError::InvalidKey {
                reason: "f is not invertible modulo q",
            },
        )?;
        Ok(PublicKey {
            h,
            params: self.params,
        })
    }

    /// Precomputes the FFT basis and LDL tree used for signing.
    pub fn expand(&self) -> ExpandedSecretKey {
        ExpandedSecretKey::new(self)
    }
}

/// A Falcon key pair.
#[derive(Clone, Debug)]
pub struct KeyPair {
    /// The public key.
    pub pk: PublicKey,
    /// The secret key.
    pub sk: SecretKey,
}

// ============================================================================
// Gaussian sampling of f and g
// ============================================================================

/// Discrete Gaussian with sigma = 1.17*sqrt(q/2048), as a reversed CDF on
/// 63 bits. Entry 0 is P(x = 0); entry k > 0 is P(x >= k+1 | x > 0).
const GAUSS_1024_12289: [u64; 27] = [
    1283868770400643928,
    6416574995475331444,
    4078260278032692663,
    2353523259288686585,
    1227179971273316331,
    575931623374121527,
    242543240509105209,
    91437049221049666,
    30799446349977173,
    9255276791179340,
    2478152334826140,
    590642893610164,
    125206034929641,
    23590435911403,
    3948334035941,
    586753615614,
    77391054539,
    9056793210,
    940121950,
    86539696,
    7062824,
    510971,
    32764,
    1862,
    94,
    4,
    0,
];

/// Samples one coefficient with sigma = 1.17*sqrt(q/(2n)).
///
/// The table is for n = 1024; smaller degrees add up 1024/n samples. The
/// whole table is scanned for each sample.
pub(crate) fn mkgauss(rng: &mut ShakeReader, logn: u32) -> i32 {
    let g = 1u32 << (10 - logn);
    let mut val = 0i32;
    for _ in 0..g {
        // The first word decides zero/nonzero and the sign; the second
        // gives the magnitude.
        let mut r = rng.next_u64();
        let neg = (r >> 63) as u32;
        r &= !(1u64 << 63);
        let mut f = (r.wrapping_sub(GAUSS_1024_12289[0]) >> 63) as u32;

        let mut v = 0u32;
        r = rng.next_u64() & !(1u64 << 63);
        for (k, &e) in GAUSS_1024_12289.iter().enumerate().skip(1) {
            let t = ((r.wrapping_sub(e) >> 63) as u32) ^ 1;
            v |= (k as u32) & (t & (f ^ 1)).wrapping_neg();
            f |= t;
        }

        v = (v ^ neg.wrapping_neg()).wrapping_add(neg);
        val = val.wrapping_add(v as i32);
    }
    val
}

/// Fills `f` with Gaussian coefficients in [-127, 127] whose sum is odd,
/// so that the resultant of f with X^n+1 is odd.
pub(crate) fn poly_small_mkgauss(rng: &mut ShakeReader, f: &mut [i8], logn: u32) {
    let n = 1usize << logn;
    let mut mod2 = 0u32;
    for u in 0..n {
        loop {
            let s = mkgauss(rng, logn);
            if !(-127..=127).contains(&s) {
                continue;
            }
            if u == n - 1 {
                if mod2 ^ (s as u32 & 1) == 0 {
                    continue;
                }
            } else {
                mod2 ^= s as u32 & 1;
            }
            f[u] = s as i8;
            break;
        }
    }
}

/// Squared norm of a small polynomial, saturated to `u32::MAX` on overflow.
fn poly_small_sqnorm(f: &[i8]) -> u32 {
    let mut s = 0u32;
    let mut ng = 0u32;
    for &x in f {
        let z = x as i32;
        s = s.wrapping_add((z * z) as u32);
        ng |= s;
    }
    s | (ng >> 31).wrapping_neg()
}

/// Checks the squared norm of the orthogonalized vector
/// `(q*adj(f)/(f*adj(f)+g*adj(g)), q*adj(g)/(f*adj(f)+g*adj(g)))` against
/// 1.17^2*q.
fn gram_schmidt_norm_ok(f: &[i8], g: &[i8], logn: u32) -> bool {
    let n = 1usize << logn;
    let mut rt1: Vec<Fpr> = f.iter().map(|&x| Fpr::of(x as i64)).collect();
    let mut rt2: Vec<Fpr> = g.iter().map(|&x| Fpr::of(x as i64)).collect();
    let mut rt3 = vec![Fpr::ZERO; n >> 1];

    fft(&mut rt1, logn);
    fft(&mut rt2, logn);
    poly_invnorm2_fft(&mut rt3, &rt1, &rt2, logn);
    poly_adj_fft(&mut rt1, logn);
    poly_adj_fft(&mut rt2, logn);
    poly_mulconst(&mut rt1, Fpr::Q, logn);
    poly_mulconst(&mut rt2, Fpr::Q, logn);
    poly_mul_autoadj_fft(&mut rt1, &rt3, logn);
    poly_mul_autoadj_fft(&mut rt2, &rt3, logn);
    ifft(&mut rt1, logn);
    ifft(&mut rt2, logn);

    let mut bnorm = Fpr::ZERO;
    for (&a, &b) in rt1.iter().zip(rt2.iter()) {
        bnorm = bnorm + a.sqr() + b.sqr();
    }
    bnorm.lt(Fpr::BNORM_MAX)
}

/// Key generation loop over a SHAKE256 stream.
pub(crate) fn keygen_from_shake(rng: &mut ShakeReader, params: &Params) -> KeyPair {
    let logn = params.log_n;
    let n = params.n;
    let mut f = vec![0i8; n];
    let mut g = vec![0i8; n];

    loop {
        poly_small_mkgauss(rng, &mut f, logn);
        poly_small_mkgauss(rng, &mut g, logn);

        // Keep f and g encodable with the per-degree bit width.
        let lim = 1i32 << (params.fg_bits() - 1);
        if f.iter().chain(g.iter()).any(|&x| x as i32 >= lim || x as i32 <= -lim) {
            continue;
        }

        // ||(g, -f)||^2 must be below 1.17^2*q = 16822.4121.
        let normf = poly_small_sqnorm(&f);
        let normg = poly_small_sqnorm(&g);
        let norm = normf.wrapping_add(normg) | ((normf | normg) >> 31).wrapping_neg();
        if norm >= 16823 {
            continue;
        }

        if !gram_schmidt_norm_ok(&f, &g, logn) {
            continue;
        }

        let Some(h) = compute_public(&f, &g, logn) else {
            continue;
        };

        let lim = (1i32 << (params.big_fg_bits() - 1)) - 1;
        let Some((big_f, big_g)) = solve_ntru(&f, &g, logn, lim) else {
            continue;
        };

        return KeyPair {
            pk: PublicKey { h, params: *params },
            sk: SecretKey {
                f,
                g,
                big_f,
                big_g,
                params: *params,
            },
        };
    }
}

/// Generates a Falcon key pair.
///
/// A 48-byte seed is drawn from `rng` and expanded with SHAKE256; the same
/// seed always yields the same key pair (see [`keygen_with_seed`]).
pub fn keygen<R: RngCore + CryptoRng>(rng: &mut R, params: &Params) -> Result<KeyPair> {
    let mut seed = [0u8; SEED_SIZE];
    rng.try_fill_bytes(&mut seed)
        .map_err(|_| FalconError::InvalidInput {
            field: "rng",
            reason: "entropy source failed",
        })?;
    let kp = keygen_with_seed(&seed, params);
    seed.zeroize();
    kp
}

/// Generates a Falcon key pair deterministically from a seed.
pub fn keygen_with_seed(seed: &[u8], params: &Params) -> Result<KeyPair> {
    if seed.is_empty() {
        return Err(FalconError::InvalidInput {
            field: "seed",
            reason: "empty",
        });
    }
    let mut rng = Shake256::digest_xof(&[seed]);
    Ok(keygen_from_shake(&mut rng, params))
}

/// Generates a key pair and returns the encoded `(public_key, secret_key)`.
pub fn generate_keypair<R: RngCore + CryptoRng>(
    rng: &mut R,
    params: &Params,
) -> Result<(Vec<u8>, Vec<u8>)> {
    let kp = keygen(rng, params)?;
    Ok((kp.pk.to_bytes()?, kp.sk.to_bytes()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{FALCON_512, Q};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn negacyclic_mul(a: &[i8], b: &[i8]) -> Vec<i64> {
        let n = a.len();
        let mut c = vec![0i64; n];
        for i in 0..n {
            for j in 0..n {
                let t = a[i] as i64 * b[j] as i64;
                if i + j < n {
                    c[i + j] += t;
                } else {
                    c[i + j - n] -= t;
                }
            }
        }
        c
    }

    fn assert_ntru_equation(sk: &SecretKey) {
        let fg = negacyclic_mul(&sk.f, &sk.big_g);
        let gf = negacyclic_mul(&sk.g, &sk.big_f);
        for i in 0..sk.params.n {
            let want = if i == 0 { Q as i64 } else { 0 };
            assert_eq!(fg[i] - gf[i], want, "coefficient {}", i);
        }
    }

    #[test]
    fn test_mkgauss_statistics() {
        let mut rng = Shake256::digest_xof(&[b"mkgauss"]);
        let count = 20_000;
        let samples: Vec<i32> = (0..count).map(|_| mkgauss(&mut rng, 10)).collect();

        let mean = samples.iter().map(|&x| x as f64).sum::<f64>() / count as f64;
        let var = samples.iter().map(|&x| (x as f64 - mean).powi(2)).sum::<f64>() / count as f64;

        // sigma = 1.17*sqrt(12289/2048) = 2.866
        assert!(mean.abs() < 0.1, "mean {}", mean);
        assert!((var.sqrt() - 2.866).abs() < 0.1, "sigma {}", var.sqrt());
        assert!(samples.iter().all(|&x| x.abs() <= 26));
    }

    #[test]
    fn test_mkgauss_sums_for_lower_degrees() {
        let mut rng = Shake256::digest_xof(&[b"mkgauss-512"]);
        let count = 10_000;
        let var = (0..count)
            .map(|_| (mkgauss(&mut rng, 9) as f64).powi(2))
            .sum::<f64>()
            / count as f64;
        // Two samples per coefficient: sigma * sqrt(2) = 4.053
        assert!((var.sqrt() - 4.053).abs() < 0.15, "sigma {}", var.sqrt());
    }

    #[test]
    fn test_poly_small_mkgauss_has_odd_sum() {
        let mut rng = Shake256::digest_xof(&[b"parity"]);
        for logn in 1..=10 {
            let n = 1usize << logn;
            let mut f = vec![0i8; n];
            poly_small_mkgauss(&mut rng, &mut f, logn);
            let sum: i64 = f.iter().map(|&x| x as i64).sum();
            assert_eq!(sum.rem_euclid(2), 1, "logn {}", logn);
            assert!(f.iter().all(|&x| x != i8::MIN));
        }
    }

    #[test]
    fn test_sqnorm_saturates() {
        assert_eq!(poly_small_sqnorm(&[3, -4]), 25);
        assert_eq!(poly_small_sqnorm(&[]), 0);
        let big = vec![-128i8; 1 << 17];
        assert_eq!(poly_small_sqnorm(&big), u32::MAX);
    }

    #[test]
    fn test_keygen_small_degrees() {
        for logn in [2u32, 4, 6, 8] {
            let params = Params::new(logn).unwrap();
            let kp = keygen_with_seed(&[logn as u8; 48], &params).unwrap();
            assert_eq!(kp.sk.f.len(), params.n);
            assert_ntru_equation(&kp.sk);
            assert_eq!(kp.sk.public_key().unwrap(), kp.pk);
        }
    }

    #[test]
    fn test_keygen_falcon_512() {
        let mut rng = StdRng::seed_from_u64(42);
        let kp = keygen(&mut rng, &FALCON_512).unwrap();
        assert_ntru_equation(&kp.sk);
        let lim = 1i8 << (FALCON_512.fg_bits() - 1);
        assert!(kp.sk.f.iter().all(|&x| x > -lim && x < lim));
        assert!(kp.pk.h.iter().all(|&x| (x as u32) < Q));
    }

    #[test]
    fn test_keygen_is_deterministic() {
        let params = Params::new(5).unwrap();
        let a = keygen_with_seed(b"same seed", &params).unwrap();
        let b = keygen_with_seed(b"same seed", &params).unwrap();
        let c = keygen_with_seed(b"other seed", &params).unwrap();
        assert_eq!(a.sk.f, b.sk.f);
        assert_eq!(a.sk.big_f, b.sk.big_f);
        assert_eq!(a.pk, b.pk);
        assert_ne!(a.pk, c.pk);
    }

    #[test]
    fn test_keygen_rejects_empty_seed() {
        assert!(keygen_with_seed(&[], &FALCON_512).is_err());
    }

    #[test]
    fn test_from_fgf_recomputes_g() {
        let params = Params::new(6).unwrap();
        let kp = keygen_with_seed(b"fgf", &params).unwrap();
        let sk = SecretKey::from_fgf(
            kp.sk.f.clone(),
            kp.sk.g.clone(),
            kp.sk.big_f.clone(),
            params,
        )
        .unwrap();
        assert_eq!(sk.big_g, kp.sk.big_g);
        assert!(SecretKey::from_fgf(vec![0; 3], vec![0; 64], vec![0; 64], params).is_err());
    }

    #[test]
    fn test_generate_keypair_sizes() {
        let mut rng = StdRng::seed_from_u64(7);
        let params = Params::new(8).unwrap();
        let (pk, sk) = generate_keypair(&mut rng, &params).unwrap();
        assert_eq!(pk.len(), params.pk_bytes);
        assert_eq!(sk.len(), params.sk_bytes);
    }
}
