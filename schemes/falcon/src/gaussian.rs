//! Discrete Gaussian sampling for the signing path.
//!
//! [`SamplerZ`] draws integers from a discrete Gaussian of arbitrary center
//! `mu` and standard deviation `sigma` (given as `1/sigma`), with
//! `sigma_min <= sigma <= 1.8205`. It samples from a fixed half-Gaussian of
//! deviation `SIGMA0 = 1.8205` ([`gaussian0`]), makes it bimodal with a
//! random bit, and accepts with the exact ratio of densities through
//! [`ber_exp`]. The acceptance test is scaled by `sigma_min/sigma` so
//! that the rejection rate does not depend on the target deviation.

use crate::fpr::{Fpr, SIGMA_MIN};
use crate::prng::RandomSource;

/// Reversed CDF of the half-Gaussian with sigma = 1.8205, on 72 bits
/// (three 24-bit limbs per entry, most significant first).
const DIST: [u32; 54] = [
    10745844, 3068844, 3741698,
    5559083, 1580863, 8248194,
    2260429, 13669192, 2736639,
    708981, 4421575, 10046180,
    169348, 7122675, 4136815,
    30538, 13063405, 7650655,
    4132, 14505003, 7826148,
    417, 16768101, 11363290,
    31, 8444042, 8086568,
    1, 12844466, 265321,
    0, 1232676, 13644283,
    0, 38047, 9111839,
    0, 870, 6138264,
    0, 14, 12545723,
    0, 0, 3104126,
    0, 0, 28824,
    0, 0, 198,
    0, 0, 1,
];

/// Samples a non-negative integer from the half-Gaussian of deviation
/// 1.8205.
///
/// A 72-bit random value is compared against every table entry, so the
/// running time does not depend on the result.
pub fn gaussian0<R: RandomSource + ?Sized>(rng: &mut R) -> i32 {
    let lo = rng.next_u64();
    let hi = rng.next_u8() as u32;
    let v0 = (lo as u32) & 0xFF_FFFF;
    let v1 = ((lo >> 24) as u32) & 0xFF_FFFF;
    let v2 = ((lo >> 48) as u32) | (hi << 16);

    let mut z = 0i32;
    for w in DIST.chunks_exact(3) {
        let cc = v0.wrapping_sub(w[2]) >> 31;
        let cc = v1.wrapping_sub(w[1]).wrapping_sub(cc) >> 31;
        let cc = v2.wrapping_sub(w[0]).wrapping_sub(cc) >> 31;
        z += cc as i32;
    }
    z
}

/// Returns `true` with probability `ccs * exp(-x)`, for `x >= 0`.
pub fn ber_exp<R: RandomSource + ?Sized>(rng: &mut R, x: Fpr, ccs: Fpr) -> bool {
    // x = s*ln(2) + r with 0 <= r < ln(2).
    let s = (x * Fpr::INV_LOG2).trunc() as i32;
    let r = x - Fpr::of(s as i64) * Fpr::LOG2;

    // s >= 64 makes the probability below 2^-64; saturate at 63.
    let mut sw = s as u32;
    sw ^= (sw ^ 63) & (63u32.wrapping_sub(sw) >> 31).wrapping_neg();

    // exp(-x) = 2^-s * exp(-r), scaled to 2^64. The -1 keeps r = 0 in
    // range.
    let z = (Fpr::expm_p63(r, ccs) << 1).wrapping_sub(1) >> sw;

    // Compare lazily with random bytes, most significant first; the sign
    // of the first non-zero difference is the result.
    let mut i = 64;
    let mut w;
    loop {
        i -= 8;
        w = (rng.next_u8() as u32).wrapping_sub(((z >> i) as u32) & 0xFF);
        if w != 0 || i == 0 {
            break;
        }
    }
    (w >> 31) != 0
}

/// Discrete Gaussian sampler over the integers.
pub struct SamplerZ<R: RandomSource> {
    rng: R,
    sigma_min: Fpr,
}

impl<R: RandomSource> SamplerZ<R> {
    /// Creates a sampler for degree `2^logn`, with the matching `sigma_min`.
    pub fn new(rng: R, logn: u32) -> Self {
        Self::with_sigma_min(rng, SIGMA_MIN[logn as usize])
    }

    /// Creates a sampler with an explicit `sigma_min`.
    pub fn with_sigma_min(rng: R, sigma_min: Fpr) -> Self {
        SamplerZ { rng, sigma_min }
    }

    /// Returns the underlying random source.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Samples an integer with center `mu` and deviation `1/isigma`.
    pub fn sample(&mut self, mu: Fpr, isigma: Fpr) -> i32 {
        // mu = s + r with s an integer and 0 <= r < 1.
        let s = mu.floor() as i32;
        let r = mu - Fpr::of(s as i64);

        // 1/(2*sigma^2)
        let dss = isigma.sqr().half();
        let ccs = isigma * self.sigma_min;

        loop {
            // b = 1 gives z >= 1 sampled around 1, b = 0 gives z <= 0
            // sampled around 0.
            let z0 = gaussian0(&mut self.rng);
            let b = (self.rng.next_u8() & 1) as i32;
            let z = b + ((b << 1) - 1) * z0;

            // Keep z with probability exp(-x), where
            // x = (z - r)^2/(2*sigma^2) - (z - b)^2/(2*sigma0^2).
            let mut x = (Fpr::of(z as i64) - r).sqr() * dss;
            x = x - Fpr::of((z0 * z0) as i64) * Fpr::INV_2SQRSIGMA0;
            if ber_exp(&mut self.rng, x, ccs) {
                return s + z;
            }
        }
    }
}
