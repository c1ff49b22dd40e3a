//! Complex FFT over the emulated floating-point type.
//!
//! A real polynomial of degree n = 2^logn in Z[X]/(X^n + 1) is represented
//! in FFT form by its values at the n/2 roots `zeta^(2j+1)` of `X^n + 1`
//! lying in the upper half-plane; the other half are their conjugates.
//! The array layout is fixed: real parts occupy `f[0..n/2]` and imaginary
//! parts `f[n/2..n]`, so complex value `u` is `(f[u], f[u + n/2])`.
//!
//! All arithmetic goes through [`Fpr`], which makes every result
//! bit-reproducible. This matters for signing, where the output of the
//! sampler depends on exact float values.

use crate::fpr::{Fpr, P2_TAB};
use crate::fpr_tables::GM_TAB;

// ============================================================================
// Complex helpers
// ============================================================================

#[inline(always)]
pub(crate) fn cadd(a_re: Fpr, a_im: Fpr, b_re: Fpr, b_im: Fpr) -> (Fpr, Fpr) {
    (a_re + b_re, a_im + b_im)
}

#[inline(always)]
pub(crate) fn csub(a_re: Fpr, a_im: Fpr, b_re: Fpr, b_im: Fpr) -> (Fpr, Fpr) {
    (a_re - b_re, a_im - b_im)
}

#[inline(always)]
pub(crate) fn cmul(a_re: Fpr, a_im: Fpr, b_re: Fpr, b_im: Fpr) -> (Fpr, Fpr) {
    (a_re * b_re - a_im * b_im, a_re * b_im + a_im * b_re)
}

/// Complex division, computed as `a * conj(b) / |b|^2`.
#[inline(always)]
fn cdiv(a_re: Fpr, a_im: Fpr, b_re: Fpr, b_im: Fpr) -> (Fpr, Fpr) {
    let m = (b_re.sqr() + b_im.sqr()).inv();
    let b_re = b_re * m;
    let b_im = b_im.neg() * m;
    (a_re * b_re - a_im * b_im, a_re * b_im + a_im * b_re)
}

// ============================================================================
// FFT Operations
// ============================================================================

/// Computes the FFT of `f` in place (`f` holds n = 2^logn coefficients).
///
/// The loop starts at the second level: the first split of the
/// negacyclic transform is implicit in the real/imaginary layout.
pub fn fft(f: &mut [Fpr], logn: u32) {
    let n = 1usize << logn;
    let hn = n >> 1;
    let mut t = hn;
    let mut m = 2;
    for _ in 1..logn {
        let ht = t >> 1;
        let hm = m >> 1;
        let mut j1 = 0;
        for i1 in 0..hm {
            let s_re = GM_TAB[(m + i1) << 1];
            let s_im = GM_TAB[((m + i1) << 1) + 1];
            for j in j1..j1 + ht {
                let (x_re, x_im) = (f[j], f[j + hn]);
                let (y_re, y_im) = cmul(f[j + ht], f[j + ht + hn], s_re, s_im);
                (f[j], f[j + hn]) = cadd(x_re, x_im, y_re, y_im);
                (f[j + ht], f[j + ht + hn]) = csub(x_re, x_im, y_re, y_im);
            }
            j1 += t;
        }
        t = ht;
        m <<= 1;
    }
}

/// Computes the inverse FFT of `f` in place, including the 1/n scaling.
pub fn ifft(f: &mut [Fpr], logn: u32) {
    let n = 1usize << logn;
    let hn = n >> 1;
    let mut t = 1;
    let mut m = n;
    for _ in (2..=logn).rev() {
        let hm = m >> 1;
        let dt = t << 1;
        let mut i1 = 0;
        let mut j1 = 0;
        while j1 < hn {
            let s_re = GM_TAB[(hm + i1) << 1];
            let s_im = GM_TAB[((hm + i1) << 1) + 1].neg();
            for j in j1..j1 + t {
                let (x_re, x_im) = (f[j], f[j + hn]);
                let (y_re, y_im) = (f[j + t], f[j + t + hn]);
                (f[j], f[j + hn]) = cadd(x_re, x_im, y_re, y_im);
                let (d_re, d_im) = csub(x_re, x_im, y_re, y_im);
                (f[j + t], f[j + t + hn]) = cmul(d_re, d_im, s_re, s_im);
            }
            i1 += 1;
            j1 += dt;
        }
        t = dt;
        m = hm;
    }

    // The last level is folded into the scaling by 2/n.
    if logn > 0 {
        let ni = P2_TAB[logn as usize];
        for x in f[..n].iter_mut() {
            *x = *x * ni;
        }
    }
}

// ============================================================================
// Coefficient-wise operations
// ============================================================================

/// `a <- a + b` (normal or FFT representation).
pub fn poly_add(a: &mut [Fpr], b: &[Fpr], logn: u32) {
    let n = 1usize << logn;
    for (x, &y) in a[..n].iter_mut().zip(&b[..n]) {
        *x = *x + y;
    }
}

/// `a <- a - b` (normal or FFT representation).
pub fn poly_sub(a: &mut [Fpr], b: &[Fpr], logn: u32) {
    let n = 1usize << logn;
    for (x, &y) in a[..n].iter_mut().zip(&b[..n]) {
        *x = *x - y;
    }
}

/// `a <- -a` (normal or FFT representation).
pub fn poly_neg(a: &mut [Fpr], logn: u32) {
    let n = 1usize << logn;
    for x in a[..n].iter_mut() {
        *x = x.neg();
    }
}

/// `a <- a * x` for a real constant `x`.
pub fn poly_mulconst(a: &mut [Fpr], x: Fpr, logn: u32) {
    let n = 1usize << logn;
    for v in a[..n].iter_mut() {
        *v = *v * x;
    }
}

/// Hermitian adjoint in FFT form: conjugates every value.
pub fn poly_adj_fft(a: &mut [Fpr], logn: u32) {
    let n = 1usize << logn;
    for x in a[n >> 1..n].iter_mut() {
        *x = x.neg();
    }
}

/// `a <- a * b` in FFT form.
pub fn poly_mul_fft(a: &mut [Fpr], b: &[Fpr], logn: u32) {
    let hn = 1usize << (logn - 1);
    for u in 0..hn {
        (a[u], a[u + hn]) = cmul(a[u], a[u + hn], b[u], b[u + hn]);
    }
}

/// `a <- a * adj(b)` in FFT form.
pub fn poly_muladj_fft(a: &mut [Fpr], b: &[Fpr], logn: u32) {
    let hn = 1usize << (logn - 1);
    for u in 0..hn {
        (a[u], a[u + hn]) = cmul(a[u], a[u + hn], b[u], b[u + hn].neg());
    }
}

/// `a <- a * adj(a)` in FFT form; the result is real.
pub fn poly_mulselfadj_fft(a: &mut [Fpr], logn: u32) {
    let hn = 1usize << (logn - 1);
    for u in 0..hn {
        a[u] = a[u].sqr() + a[u + hn].sqr();
        a[u + hn] = Fpr::ZERO;
    }
}

/// `a <- a / b` in FFT form.
pub fn poly_div_fft(a: &mut [Fpr], b: &[Fpr], logn: u32) {
    let hn = 1usize << (logn - 1);
    for u in 0..hn {
        (a[u], a[u + hn]) = cdiv(a[u], a[u + hn], b[u], b[u + hn]);
    }
}

/// `d <- 1 / (a*adj(a) + b*adj(b))` in FFT form. Only the real half of
/// `d` (n/2 values) is written.
pub fn poly_invnorm2_fft(d: &mut [Fpr], a: &[Fpr], b: &[Fpr], logn: u32) {
    let hn = 1usize << (logn - 1);
    for u in 0..hn {
        let na = a[u].sqr() + a[u + hn].sqr();
        let nb = b[u].sqr() + b[u + hn].sqr();
        d[u] = (na + nb).inv();
    }
}

/// `d <- F*adj(f) + G*adj(g)` in FFT form.
pub fn poly_add_muladj_fft(
    d: &mut [Fpr],
    big_f: &[Fpr],
    big_g: &[Fpr],
    f: &[Fpr],
    g: &[Fpr],
    logn: u32,
) {
    let hn = 1usize << (logn - 1);
    for u in 0..hn {
        let (a_re, a_im) = cmul(big_f[u], big_f[u + hn], f[u], f[u + hn].neg());
        let (b_re, b_im) = cmul(big_g[u], big_g[u + hn], g[u], g[u + hn].neg());
        d[u] = a_re + b_re;
        d[u + hn] = a_im + b_im;
    }
}

/// `a <- a * b` in FFT form, where `b` is auto-adjoint (only its first
/// n/2 values, all real, are read).
pub fn poly_mul_autoadj_fft(a: &mut [Fpr], b: &[Fpr], logn: u32) {
    let hn = 1usize << (logn - 1);
    for u in 0..hn {
        a[u] = a[u] * b[u];
        a[u + hn] = a[u + hn] * b[u];
    }
}

/// `a <- a / b` in FFT form, where `b` is auto-adjoint.
pub fn poly_div_autoadj_fft(a: &mut [Fpr], b: &[Fpr], logn: u32) {
    let hn = 1usize << (logn - 1);
    for u in 0..hn {
        let ib = b[u].inv();
        a[u] = a[u] * ib;
        a[u + hn] = a[u + hn] * ib;
    }
}

// ============================================================================
// LDL decomposition
// ============================================================================

/// LDL decomposition of the auto-adjoint 2x2 matrix `[[g00, g01], [adj(g01), g11]]`
/// in FFT form.
///
/// On output `g00` is unchanged (it is D00), `g01` holds L10 and `g11`
/// holds D11.
pub fn poly_ldl_fft(g00: &[Fpr], g01: &mut [Fpr], g11: &mut [Fpr], logn: u32) {
    let hn = 1usize << (logn - 1);
    for u in 0..hn {
        let (g01_re, g01_im) = (g01[u], g01[u + hn]);
        let (mu_re, mu_im) = cdiv(g01_re, g01_im, g00[u], g00[u + hn]);
        let (p_re, p_im) = cmul(mu_re, mu_im, g01_re, g01_im.neg());
        (g11[u], g11[u + hn]) = csub(g11[u], g11[u + hn], p_re, p_im);
        g01[u] = mu_re;
        g01[u + hn] = mu_im.neg();
    }
}

/// Same as [`poly_ldl_fft`] but leaves the input matrix untouched and
/// writes D11 and L10 to separate outputs.
pub fn poly_ldlmv_fft(
    d11: &mut [Fpr],
    l10: &mut [Fpr],
    g00: &[Fpr],
    g01: &[Fpr],
    g11: &[Fpr],
    logn: u32,
) {
    let hn = 1usize << (logn - 1);
    for u in 0..hn {
        let (g01_re, g01_im) = (g01[u], g01[u + hn]);
        let (mu_re, mu_im) = cdiv(g01_re, g01_im, g00[u], g00[u + hn]);
        let (p_re, p_im) = cmul(mu_re, mu_im, g01_re, g01_im.neg());
        (d11[u], d11[u + hn]) = csub(g11[u], g11[u + hn], p_re, p_im);
        l10[u] = mu_re;
        l10[u + hn] = mu_im.neg();
    }
}

// ============================================================================
// Split/Merge Operations
// ============================================================================

/// Splits `f` (FFT form, degree n) into `f0`, `f1` (FFT form, degree n/2)
/// such that `f(x) = f0(x^2) + x*f1(x^2)`.
pub fn poly_split_fft(f0: &mut [Fpr], f1: &mut [Fpr], f: &[Fpr], logn: u32) {
    let n = 1usize << logn;
    let hn = n >> 1;
    let qn = hn >> 1;

    // For logn = 1 the loop is empty: the single value is already real+imag.
    f0[0] = f[0];
    f1[0] = f[hn];

    for u in 0..qn {
        let (a_re, a_im) = (f[u << 1], f[(u << 1) + hn]);
        let (b_re, b_im) = (f[(u << 1) + 1], f[(u << 1) + 1 + hn]);

        let (t_re, t_im) = cadd(a_re, a_im, b_re, b_im);
        f0[u] = t_re.half();
        f0[u + qn] = t_im.half();

        let (t_re, t_im) = csub(a_re, a_im, b_re, b_im);
        let (t_re, t_im) = cmul(
            t_re,
            t_im,
            GM_TAB[(u + hn) << 1],
            GM_TAB[((u + hn) << 1) + 1].neg(),
        );
        f1[u] = t_re.half();
        f1[u + qn] = t_im.half();
    }
}

/// Inverse of [`poly_split_fft`].
pub fn poly_merge_fft(f: &mut [Fpr], f0: &[Fpr], f1: &[Fpr], logn: u32) {
    let n = 1usize << logn;
    let hn = n >> 1;
    let qn = hn >> 1;

    f[0] = f0[0];
    f[hn] = f1[0];

    for u in 0..qn {
        let (a_re, a_im) = (f0[u], f0[u + qn]);
        let (b_re, b_im) = cmul(
            f1[u],
            f1[u + qn],
            GM_TAB[(u + hn) << 1],
            GM_TAB[((u + hn) << 1) + 1],
        );
        (f[u << 1], f[(u << 1) + hn]) = cadd(a_re, a_im, b_re, b_im);
        (f[(u << 1) + 1], f[(u << 1) + 1 + hn]) = csub(a_re, a_im, b_re, b_im);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn to_fpr(v: &[i64]) -> Vec<Fpr> {
        v.iter().map(|&x| Fpr::of(x)).collect()
    }

    fn random_poly(rng: &mut StdRng, n: usize, bound: i64) -> Vec<i64> {
        (0..n).map(|_| rng.gen_range(-bound..=bound)).collect()
    }

    /// Schoolbook multiplication in Z[X]/(X^n + 1).
    fn negacyclic_mul(a: &[i64], b: &[i64]) -> Vec<i64> {
        let n = a.len();
        let mut c = vec![0i64; n];
        for i in 0..n {
            for j in 0..n {
                let k = i + j;
                if k < n {
                    c[k] += a[i] * b[j];
                } else {
                    c[k - n] -= a[i] * b[j];
                }
            }
        }
        c
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_fft_ifft_roundtrip(seed in any::<u64>(), logn in 1u32..=10) {
            let mut rng = StdRng::seed_from_u64(seed);
            let a = random_poly(&mut rng, 1 << logn, 2000);
            let mut f = to_fpr(&a);
            fft(&mut f, logn);
            ifft(&mut f, logn);
            let back: Vec<i64> = f.iter().map(|x| x.rint()).collect();
            prop_assert_eq!(back, a);
        }
    }

    #[test]
    fn test_fft_mul_matches_schoolbook() {
        let mut rng = StdRng::seed_from_u64(7);
        for logn in 1..=9 {
            let n = 1 << logn;
            let a = random_poly(&mut rng, n, 100);
            let b = random_poly(&mut rng, n, 100);
            let mut fa = to_fpr(&a);
            let mut fb = to_fpr(&b);
            fft(&mut fa, logn);
            fft(&mut fb, logn);
            poly_mul_fft(&mut fa, &fb, logn);
            ifft(&mut fa, logn);
            let c: Vec<i64> = fa.iter().map(|x| x.rint()).collect();
            assert_eq!(c, negacyclic_mul(&a, &b), "logn = {}", logn);
        }
    }

    #[test]
    fn test_fft_of_constant_is_flat() {
        let logn = 4;
        let mut f = vec![Fpr::ZERO; 16];
        f[0] = Fpr::of(3);
        fft(&mut f, logn);
        for u in 0..8 {
            assert_eq!(f[u], Fpr::of(3));
            assert_eq!(f[u + 8].to_f64(), 0.0);
        }
    }

    #[test]
    fn test_adjoint_reverses_coefficients() {
        // adj(a)(x) = a0 - a_{n-1} x - ... - a_1 x^{n-1}
        let logn = 5;
        let n = 1 << logn;
        let mut rng = StdRng::seed_from_u64(3);
        let a = random_poly(&mut rng, n, 50);
        let mut f = to_fpr(&a);
        fft(&mut f, logn);
        poly_adj_fft(&mut f, logn);
        ifft(&mut f, logn);
        assert_eq!(f[0].rint(), a[0]);
        for i in 1..n {
            assert_eq!(f[i].rint(), -a[n - i]);
        }
    }

    #[test]
    fn test_split_merge_roundtrip() {
        let mut rng = StdRng::seed_from_u64(11);
        for logn in 1..=10 {
            let n = 1 << logn;
            let hn = n >> 1;
            let a = random_poly(&mut rng, n, 1000);
            let mut f = to_fpr(&a);
            fft(&mut f, logn);

            let mut f0 = vec![Fpr::ZERO; hn];
            let mut f1 = vec![Fpr::ZERO; hn];
            poly_split_fft(&mut f0, &mut f1, &f, logn);

            // The halves are the even and odd coefficients.
            if logn > 1 {
                let mut e0 = f0.clone();
                let mut e1 = f1.clone();
                ifft(&mut e0, logn - 1);
                ifft(&mut e1, logn - 1);
                for i in 0..hn {
                    assert_eq!(e0[i].rint(), a[2 * i]);
                    assert_eq!(e1[i].rint(), a[2 * i + 1]);
                }
            }

            let mut g = vec![Fpr::ZERO; n];
            poly_merge_fft(&mut g, &f0, &f1, logn);
            ifft(&mut g, logn);
            for i in 0..n {
                assert_eq!(g[i].rint(), a[i], "logn = {}", logn);
            }
        }
    }

    #[test]
    fn test_div_undoes_mul() {
        let logn = 6;
        let n = 1 << logn;
        let mut rng = StdRng::seed_from_u64(5);
        let a = random_poly(&mut rng, n, 500);
        let b = random_poly(&mut rng, n, 500);
        let mut fa = to_fpr(&a);
        let mut fb = to_fpr(&b);
        fft(&mut fa, logn);
        fft(&mut fb, logn);
        poly_mul_fft(&mut fa, &fb, logn);
        poly_div_fft(&mut fa, &fb, logn);
        ifft(&mut fa, logn);
        for i in 0..n {
            assert_eq!(fa[i].rint(), a[i]);
        }
    }

    #[test]
    fn test_ldl_reconstructs_gram_matrix() {
        // G = [[g00, g01], [adj(g01), g11]] = L * D * adj(L)
        let logn = 5;
        let n = 1 << logn;
        let hn = n >> 1;
        let mut rng = StdRng::seed_from_u64(9);
        let f = to_fpr(&random_poly(&mut rng, n, 10));
        let g = to_fpr(&random_poly(&mut rng, n, 10));
        let (mut ff, mut gg) = (f.clone(), g.clone());
        fft(&mut ff, logn);
        fft(&mut gg, logn);

        let mut g00 = ff.clone();
        poly_mulselfadj_fft(&mut g00, logn);
        let mut t = gg.clone();
        poly_mulselfadj_fft(&mut t, logn);
        poly_add(&mut g00, &t, logn);
        g00.iter_mut().for_each(|x| *x = *x + Fpr::of(1000));
        for x in g00[hn..].iter_mut() {
            *x = Fpr::ZERO;
        }
        let mut g01 = ff.clone();
        poly_muladj_fft(&mut g01, &gg, logn);
        let mut g11 = g00.clone();

        let mut d11 = vec![Fpr::ZERO; n];
        let mut l10 = vec![Fpr::ZERO; n];
        poly_ldlmv_fft(&mut d11, &mut l10, &g00, &g01, &g11, logn);

        let g01_orig = g01.clone();
        poly_ldl_fft(&g00, &mut g01, &mut g11, logn);
        assert_eq!(g01, l10);
        assert_eq!(g11, d11);

        // g01 = g00 * adj(l10)
        let mut r = g00.clone();
        poly_muladj_fft(&mut r, &l10, logn);
        for u in 0..n {
            assert!((r[u].to_f64() - g01_orig[u].to_f64()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_invnorm2() {
        let logn = 4;
        let n = 1 << logn;
        let mut rng = StdRng::seed_from_u64(1);
        let a = to_fpr(&random_poly(&mut rng, n, 20));
        let b = to_fpr(&random_poly(&mut rng, n, 20));
        let (mut fa, mut fb) = (a.clone(), b.clone());
        fft(&mut fa, logn);
        fft(&mut fb, logn);
        let mut d = vec![Fpr::ZERO; n];
        poly_invnorm2_fft(&mut d, &fa, &fb, logn);
        for u in 0..n / 2 {
            let na = fa[u].to_f64().powi(2) + fa[u + n / 2].to_f64().powi(2);
            let nb = fb[u].to_f64().powi(2) + fb[u + n / 2].to_f64().powi(2);
            assert!((d[u].to_f64() * (na + nb) - 1.0).abs() < 1e-12);
        }
    }
}
