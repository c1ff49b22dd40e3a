//! Fast Fourier sampling.
//!
//! Given a target `(t0, t1)` in FFT form, ffSampling returns integer
//! polynomials `(z0, z1)` (also in FFT form) such that `(t - z) * B` is
//! short, where B is the secret basis. It recurses on the split halves of
//! the target, sampling z1 first, then correcting the target of z0 with
//! the L10 factor of the current tree node.
//!
//! Two variants exist:
//! - [`ff_sampling_fft`] walks a precomputed, normalized ffLDL tree
//!   (see [`crate::fft_tree::ExpandedSecretKey`]); its last two levels are
//!   unrolled.
//! - [`ff_sampling_fft_dyntree`] decomposes the Gram matrix on the fly,
//!   trading speed for memory.

use zeroize::Zeroize;

use crate::fft::{
    cmul, poly_add, poly_ldl_fft, poly_merge_fft, poly_mul_fft, poly_split_fft, poly_sub,
};
use crate::fft_tree::ffldl_treesize;
use crate::fpr::{Fpr, INV_SIGMA};
use crate::gaussian::SamplerZ;
use crate::prng::RandomSource;

#[inline(always)]
fn sample_fpr<R: RandomSource>(samp: &mut SamplerZ<R>, mu: Fpr, isigma: Fpr) -> Fpr {
    Fpr::of(samp.sample(mu, isigma) as i64)
}

/// Splits a degree-4 FFT vector into `(f0_re, f0_im, f1_re, f1_im)`.
#[inline(always)]
fn split_deg4(t: &[Fpr]) -> (Fpr, Fpr, Fpr, Fpr) {
    let (a_re, a_im) = (t[0], t[2]);
    let (b_re, b_im) = (t[1], t[3]);

    let w0 = (a_re + b_re).half();
    let w1 = (a_im + b_im).half();
    let c_re = a_re - b_re;
    let c_im = a_im - b_im;
    let w2 = (c_re + c_im) * Fpr::INVSQRT8;
    let w3 = (c_im - c_re) * Fpr::INVSQRT8;
    (w0, w1, w2, w3)
}

/// Merges two degree-2 FFT values into a degree-4 FFT vector.
#[inline(always)]
fn merge_deg4(z: &mut [Fpr], a_re: Fpr, a_im: Fpr, b_re: Fpr, b_im: Fpr) {
    let c_re = (b_re - b_im) * Fpr::INVSQRT2;
    let c_im = (b_re + b_im) * Fpr::INVSQRT2;
    z[0] = a_re + c_re;
    z[2] = a_im + c_im;
    z[1] = a_re - c_re;
    z[3] = a_im - c_im;
}

/// Degree-2 sampling against a 4-value tree `[l10_re, l10_im, leaf0,
/// leaf1]`. Targets and results are single complex values.
#[inline(always)]
fn sample_deg2<R: RandomSource>(
    samp: &mut SamplerZ<R>,
    tree: &[Fpr],
    t0: (Fpr, Fpr),
    t1: (Fpr, Fpr),
) -> ((Fpr, Fpr), (Fpr, Fpr)) {
    let (x0, x1) = t1;
    let sigma = tree[3];
    let y0 = sample_fpr(samp, x0, sigma);
    let y1 = sample_fpr(samp, x1, sigma);

    let (c_re, c_im) = cmul(x0 - y0, x1 - y1, tree[0], tree[1]);
    let x0 = c_re + t0.0;
    let x1 = c_im + t0.1;
    let sigma = tree[2];
    let z0 = (sample_fpr(samp, x0, sigma), sample_fpr(samp, x1, sigma));
    (z0, (y0, y1))
}

/// Tree-based sampling. `tmp` must hold at least `2^(logn+1)` values.
#[allow(clippy::too_many_arguments)]
fn ff_sampling_rec<R: RandomSource>(
    samp: &mut SamplerZ<R>,
    z0: &mut [Fpr],
    z1: &mut [Fpr],
    tree: &[Fpr],
    t0: &[Fpr],
    t1: &[Fpr],
    logn: u32,
    tmp: &mut [Fpr],
) {
    if logn == 1 {
        let ((a0, a1), (b0, b1)) = sample_deg2(samp, tree, (t0[0], t0[1]), (t1[0], t1[1]));
        z0[0] = a0;
        z0[1] = a1;
        z1[0] = b0;
        z1[1] = b1;
        return;
    }

    if logn == 2 {
        let tree0 = &tree[4..8];
        let tree1 = &tree[8..12];

        // Right subtree on the split of t1, merged back into z1.
        let (w0, w1, w2, w3) = split_deg4(t1);
        let ((a_re, a_im), (b_re, b_im)) = sample_deg2(samp, tree1, (w0, w1), (w2, w3));
        merge_deg4(z1, a_re, a_im, b_re, b_im);

        // tb0 = t0 + (t1 - z1) * L10
        let w0 = t1[0] - z1[0];
        let w1 = t1[1] - z1[1];
        let w2 = t1[2] - z1[2];
        let w3 = t1[3] - z1[3];
        let (w0, w2) = cmul(w0, w2, tree[0], tree[2]);
        let (w1, w3) = cmul(w1, w3, tree[1], tree[3]);
        let tb0 = [w0 + t0[0], w1 + t0[1], w2 + t0[2], w3 + t0[3]];

        // Left subtree on the split of tb0.
        let (w0, w1, w2, w3) = split_deg4(&tb0);
        let ((a_re, a_im), (b_re, b_im)) = sample_deg2(samp, tree0, (w0, w1), (w2, w3));
        merge_deg4(z0, a_re, a_im, b_re, b_im);
        return;
    }

    let n = 1usize << logn;
    let hn = n >> 1;
    let ts = ffldl_treesize(logn - 1);
    let tree0 = &tree[n..n + ts];
    let tree1 = &tree[n + ts..];

    // z1 serves as scratch for the split of t1; the recursion writes into
    // tmp, which is merged back into z1.
    {
        let (lo, hi) = z1.split_at_mut(hn);
        poly_split_fft(lo, hi, t1, logn);
    }
    let (out, rest) = tmp.split_at_mut(n);
    {
        let (o0, o1) = out.split_at_mut(hn);
        let (s0, s1) = z1.split_at(hn);
        ff_sampling_rec(samp, o0, o1, tree1, s0, s1, logn - 1, rest);
    }
    poly_merge_fft(z1, &out[..hn], &out[hn..], logn);

    // tb0 = t0 + (t1 - z1) * L10
    out.copy_from_slice(&t1[..n]);
    poly_sub(out, z1, logn);
    poly_mul_fft(out, &tree[..n], logn);
    poly_add(out, t0, logn);

    {
        let (lo, hi) = z0.split_at_mut(hn);
        poly_split_fft(lo, hi, out, logn);
    }
    {
        let (o0, o1) = out.split_at_mut(hn);
        let (s0, s1) = z0.split_at(hn);
        ff_sampling_rec(samp, o0, o1, tree0, s0, s1, logn - 1, rest);
    }
    poly_merge_fft(z0, &out[..hn], &out[hn..], logn);
}

/// Samples `(z0, z1)` close to the target `(t0, t1)` using a normalized
/// ffLDL tree. Requires `logn >= 1`.
pub fn ff_sampling_fft<R: RandomSource>(
    samp: &mut SamplerZ<R>,
    tree: &[Fpr],
    t0: &[Fpr],
    t1: &[Fpr],
    logn: u32,
) -> (Vec<Fpr>, Vec<Fpr>) {
    let n = 1usize << logn;
    let mut z0 = vec![Fpr::ZERO; n];
    let mut z1 = vec![Fpr::ZERO; n];
    let mut tmp = vec![Fpr::ZERO; n << 1];
    ff_sampling_rec(samp, &mut z0, &mut z1, tree, t0, t1, logn, &mut tmp);
    tmp.zeroize();
    (z0, z1)
}

/// Dynamic-tree sampling step. `tmp` must hold at least `2^(logn+2)`
/// values.
#[allow(clippy::too_many_arguments)]
fn dyntree_rec<R: RandomSource>(
    samp: &mut SamplerZ<R>,
    t0: &mut [Fpr],
    t1: &mut [Fpr],
    g00: &mut [Fpr],
    g01: &mut [Fpr],
    g11: &mut [Fpr],
    orig_logn: u32,
    logn: u32,
    tmp: &mut [Fpr],
) {
    if logn == 0 {
        // The leaf is g00 itself, normalized on the spot.
        let leaf = g00[0].sqrt() * INV_SIGMA[orig_logn as usize];
        t0[0] = sample_fpr(samp, t0[0], leaf);
        t1[0] = sample_fpr(samp, t1[0], leaf);
        return;
    }

    let n = 1usize << logn;
    let hn = n >> 1;

    // In place: g00 = D00, g01 = L10, g11 = D11.
    poly_ldl_fft(g00, g01, g11, logn);

    // Split D00 and D11 in place, keep L10 in tmp. The half-size Gram
    // matrices become (g00, g00+hn, g01) and (g11, g11+hn, g01+hn).
    let (l10, rest) = tmp.split_at_mut(n);
    {
        let (lo, hi) = l10.split_at_mut(hn);
        poly_split_fft(lo, hi, g00, logn);
    }
    g00[..n].copy_from_slice(l10);
    {
        let (lo, hi) = l10.split_at_mut(hn);
        poly_split_fft(lo, hi, g11, logn);
    }
    g11[..n].copy_from_slice(l10);
    l10.copy_from_slice(&g01[..n]);
    g01[..hn].copy_from_slice(&g00[..hn]);
    g01[hn..n].copy_from_slice(&g11[..hn]);

    // Right half: split t1, recurse, merge the result after z1.
    let (z1, rest) = rest.split_at_mut(n);
    {
        let (lo, hi) = z1.split_at_mut(hn);
        poly_split_fft(lo, hi, t1, logn);
    }
    {
        let (za, zb) = z1.split_at_mut(hn);
        let (ga, gb) = g11.split_at_mut(hn);
        dyntree_rec(samp, za, zb, ga, gb, &mut g01[hn..n], orig_logn, logn - 1, rest);
    }
    let merged = &mut rest[..n];
    poly_merge_fft(merged, &z1[..hn], &z1[hn..], logn);

    // tb0 = t0 + (t1 - z1) * L10, and z1 replaces t1.
    z1.copy_from_slice(&t1[..n]);
    poly_sub(z1, merged, logn);
    t1[..n].copy_from_slice(merged);
    poly_mul_fft(l10, z1, logn);
    poly_add(t0, l10, logn);

    // Left half, with the L10 slot reused for the split of tb0.
    let (z0, rest) = tmp.split_at_mut(n);
    {
        let (lo, hi) = z0.split_at_mut(hn);
        poly_split_fft(lo, hi, t0, logn);
    }
    {
        let (za, zb) = z0.split_at_mut(hn);
        let (ga, gb) = g00.split_at_mut(hn);
        dyntree_rec(samp, za, zb, ga, gb, &mut g01[..hn], orig_logn, logn - 1, rest);
    }
    poly_merge_fft(t0, &z0[..hn], &z0[hn..], logn);
}

/// Samples integer vectors close to the target `(t0, t1)` directly from
/// the Gram matrix `[[g00, g01], [adj(g01), g11]]` (FFT form).
///
/// The result is written over `(t0, t1)`; the Gram matrix is clobbered.
pub fn ff_sampling_fft_dyntree<R: RandomSource>(
    samp: &mut SamplerZ<R>,
    t0: &mut [Fpr],
    t1: &mut [Fpr],
    g00: &mut [Fpr],
    g01: &mut [Fpr],
    g11: &mut [Fpr],
    logn: u32,
) {
    let mut tmp = vec![Fpr::ZERO; 4usize << logn];
    dyntree_rec(samp, t0, t1, g00, g01, g11, logn, logn, &mut tmp);
    tmp.zeroize();
}
