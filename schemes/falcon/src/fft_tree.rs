//! ffLDL tree and expanded secret key.
//!
//! Fast Fourier sampling walks a binary tree built from the LDL*
//! decomposition of the Gram matrix of the secret basis
//! `B = [[g, -f], [G, -F]]`. A node of degree `2^logn` stores the L10
//! polynomial (FFT form, `2^logn` values) followed by its two subtrees of
//! degree `2^(logn-1)`; a leaf is a single value. The whole tree holds
//! `(logn + 1) * 2^logn` values (see [`ffldl_treesize`]).
//!
//! Leaves are stored already normalized: the leaf for a Gram-Schmidt
//! squared norm `d` holds `sqrt(d) / sigma`, which is the `1/sigma'` the
//! integer sampler expects.

use zeroize::Zeroize;

use crate::fft::{
    fft, poly_add, poly_ldlmv_fft, poly_muladj_fft, poly_mulselfadj_fft, poly_neg,
    poly_split_fft,
};
use crate::fpr::{Fpr, INV_SIGMA};
use crate::keygen::SecretKey;
use crate::params::Params;

/// Number of values in the ffLDL tree for polynomials of degree `2^logn`.
///
/// Satisfies `s(0) = 1` and `s(logn) = 2^logn + 2*s(logn-1)`.
pub const fn ffldl_treesize(logn: u32) -> usize {
    ((logn as usize) + 1) << logn
}

/// Converts small integer coefficients to [`Fpr`] values.
pub fn smallints_to_fpr(t: &[i8], logn: u32) -> Vec<Fpr> {
    t[..1usize << logn].iter().map(|&x| Fpr::of(x as i64)).collect()
}

/// Builds the basis `[[g, -f], [G, -F]]` in FFT form, returned in the
/// order `[b00, b01, b10, b11]`.
pub(crate) fn basis_fft(f: &[i8], g: &[i8], big_f: &[i8], big_g: &[i8], logn: u32) -> [Vec<Fpr>; 4] {
    let mut b00 = smallints_to_fpr(g, logn);
    let mut b01 = smallints_to_fpr(f, logn);
    let mut b10 = smallints_to_fpr(big_g, logn);
    let mut b11 = smallints_to_fpr(big_f, logn);
    fft(&mut b00, logn);
    fft(&mut b01, logn);
    fft(&mut b10, logn);
    fft(&mut b11, logn);
    poly_neg(&mut b01, logn);
    poly_neg(&mut b11, logn);
    [b00, b01, b10, b11]
}

/// Computes the upper triangle `(g00, g01, g11)` of the Gram matrix
/// `B * adj(B)`:
///
/// ```text
/// g00 = b00*adj(b00) + b01*adj(b01)
/// g01 = b00*adj(b10) + b01*adj(b11)
/// g11 = b10*adj(b10) + b11*adj(b11)
/// ```
pub(crate) fn gram_fft(basis: &[Vec<Fpr>; 4], logn: u32) -> (Vec<Fpr>, Vec<Fpr>, Vec<Fpr>) {
    let [b00, b01, b10, b11] = basis;

    let mut g00 = b00.clone();
    poly_mulselfadj_fft(&mut g00, logn);
    let mut t = b01.clone();
    poly_mulselfadj_fft(&mut t, logn);
    poly_add(&mut g00, &t, logn);

    let mut g01 = b00.clone();
    poly_muladj_fft(&mut g01, b10, logn);
    let mut t = b01.clone();
    poly_muladj_fft(&mut t, b11, logn);
    poly_add(&mut g01, &t, logn);

    let mut g11 = b10.clone();
    poly_mulselfadj_fft(&mut g11, logn);
    let mut t = b11.clone();
    poly_mulselfadj_fft(&mut t, logn);
    poly_add(&mut g11, &t, logn);

    t.zeroize();
    (g00, g01, g11)
}

/// Recursive step for a quasi-cyclic, auto-adjoint matrix
/// `[[g0, g1], [adj(g1), g0]]`. `g0`, `g1` and `tmp` are clobbered; `tmp`
/// must hold at least `2^logn` values.
fn ffldl_fft_inner(tree: &mut [Fpr], g0: &mut [Fpr], g1: &mut [Fpr], logn: u32, tmp: &mut [Fpr]) {
    let n = 1usize << logn;
    if n == 1 {
        tree[0] = g0[0];
        return;
    }
    let hn = n >> 1;

    // d00 = g0 stays in place, d11 goes to tmp, L10 to the tree.
    poly_ldlmv_fft(&mut tmp[..n], &mut tree[..n], g0, g1, g0, logn);

    // d00 splits into g1, d11 into g0.
    {
        let (lo, hi) = g1.split_at_mut(hn);
        poly_split_fft(lo, hi, g0, logn);
    }
    {
        let (lo, hi) = g0.split_at_mut(hn);
        poly_split_fft(lo, hi, &tmp[..n], logn);
    }

    let (left, right) = tree[n..].split_at_mut(ffldl_treesize(logn - 1));
    {
        let (lo, hi) = g1.split_at_mut(hn);
        ffldl_fft_inner(left, lo, hi, logn - 1, tmp);
    }
    let (lo, hi) = g0.split_at_mut(hn);
    ffldl_fft_inner(right, lo, hi, logn - 1, tmp);
}

/// Computes the ffLDL tree of the auto-adjoint matrix
/// `[[g00, g01], [adj(g01), g11]]` (FFT form). The inputs are left
/// unchanged; `tree` must hold [`ffldl_treesize`]`(logn)` values.
pub fn ffldl_fft(tree: &mut [Fpr], g00: &[Fpr], g01: &[Fpr], g11: &[Fpr], logn: u32) {
    let n = 1usize << logn;
    if n == 1 {
        tree[0] = g00[0];
        return;
    }
    let hn = n >> 1;

    let mut d11 = vec![Fpr::ZERO; n];
    poly_ldlmv_fft(&mut d11, &mut tree[..n], g00, g01, g11, logn);

    let mut s0 = vec![Fpr::ZERO; n];
    let mut s1 = vec![Fpr::ZERO; n];
    {
        let (lo, hi) = s0.split_at_mut(hn);
        poly_split_fft(lo, hi, g00, logn);
    }
    {
        let (lo, hi) = s1.split_at_mut(hn);
        poly_split_fft(lo, hi, &d11, logn);
    }

    let mut tmp = vec![Fpr::ZERO; n];
    let (left, right) = tree[n..].split_at_mut(ffldl_treesize(logn - 1));
    {
        let (lo, hi) = s0.split_at_mut(hn);
        ffldl_fft_inner(left, lo, hi, logn - 1, &mut tmp);
    }
    {
        let (lo, hi) = s1.split_at_mut(hn);
        ffldl_fft_inner(right, lo, hi, logn - 1, &mut tmp);
    }

    d11.zeroize();
    s0.zeroize();
    s1.zeroize();
    tmp.zeroize();
}

/// Replaces every leaf `x` of the tree with `sqrt(x) / sigma`, where
/// `sigma` is the signing deviation for degree `2^orig_logn`.
pub fn ffldl_binary_normalize(tree: &mut [Fpr], orig_logn: u32, logn: u32) {
    let n = 1usize << logn;
    if n == 1 {
        tree[0] = tree[0].sqrt() * INV_SIGMA[orig_logn as usize];
    } else {
        let (left, right) = tree[n..].split_at_mut(ffldl_treesize(logn - 1));
        ffldl_binary_normalize(left, orig_logn, logn - 1);
        ffldl_binary_normalize(right, orig_logn, logn - 1);
    }
}

/// A secret key expanded for repeated signing: the basis B in FFT form
/// and the normalized ffLDL tree of its Gram matrix.
///
/// # Security
///
/// Zeroized on drop.
#[derive(Clone)]
pub struct ExpandedSecretKey {
    pub(crate) b00: Vec<Fpr>,
    pub(crate) b01: Vec<Fpr>,
    pub(crate) b10: Vec<Fpr>,
    pub(crate) b11: Vec<Fpr>,
    pub(crate) tree: Vec<Fpr>,
    params: Params,
}

impl ExpandedSecretKey {
    /// Expands a secret key.
    pub fn new(sk: &SecretKey) -> Self {
        let logn = sk.params.log_n;
        let basis = basis_fft(&sk.f, &sk.g, &sk.big_f, &sk.big_g, logn);
        let (mut g00, mut g01, mut g11) = gram_fft(&basis, logn);

        let mut tree = vec![Fpr::ZERO; ffldl_treesize(logn)];
        ffldl_fft(&mut tree, &g00, &g01, &g11, logn);
        ffldl_binary_normalize(&mut tree, logn, logn);

        g00.zeroize();
        g01.zeroize();
        g11.zeroize();

        let [b00, b01, b10, b11] = basis;
        ExpandedSecretKey {
            b00,
            b01,
            b10,
            b11,
            tree,
            params: sk.params,
        }
    }

    /// Returns the parameter set.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Returns the normalized ffLDL tree.
    pub fn tree(&self) -> &[Fpr] {
        &self.tree
    }
}

impl Drop for ExpandedSecretKey {
    fn drop(&mut self) {
        self.b00.zeroize();
        self.b01.zeroize();
        self.b10.zeroize();
        self.b11.zeroize();
        self.tree.zeroize();
    }
}

impl std::fmt::Debug for ExpandedSecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpandedSecretKey")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fpr::SIGMA_MIN;
    use crate::keygen::keygen_with_seed;
    use crate::params::Q;

    fn collect_leaves(tree: &[Fpr], logn: u32, out: &mut Vec<f64>) {
        let n = 1usize << logn;
        if n == 1 {
            out.push(tree[0].to_f64());
            return;
        }
        collect_leaves(&tree[n..], logn - 1, out);
        collect_leaves(&tree[n + ffldl_treesize(logn - 1)..], logn - 1, out);
    }

    #[test]
    fn test_treesize() {
        assert_eq!(ffldl_treesize(0), 1);
        assert_eq!(ffldl_treesize(1), 4);
        assert_eq!(ffldl_treesize(2), 12);
        assert_eq!(ffldl_treesize(9), 5120);
        for logn in 1..=10 {
            assert_eq!(
                ffldl_treesize(logn),
                (1usize << logn) + 2 * ffldl_treesize(logn - 1)
            );
        }
    }

    #[test]
    fn test_smallints_to_fpr() {
        let v = smallints_to_fpr(&[3, -7, 0, 127], 2);
        let got: Vec<f64> = v.iter().map(|x| x.to_f64()).collect();
        assert_eq!(got, vec![3.0, -7.0, 0.0, 127.0]);
    }

    #[test]
    fn test_diagonal_gram_matrix() {
        // g00 = 4, g01 = 0, g11 = 9 (constant polynomials): no coupling,
        // every leaf of the left half is 4 and of the right half is 9.
        let logn = 3;
        let n = 1usize << logn;
        let mut g00 = vec![Fpr::ZERO; n];
        let g01 = vec![Fpr::ZERO; n];
        let mut g11 = vec![Fpr::ZERO; n];
        g00[0] = Fpr::of(4);
        g11[0] = Fpr::of(9);
        fft(&mut g00, logn);
        fft(&mut g11, logn);

        let mut tree = vec![Fpr::ZERO; ffldl_treesize(logn)];
        ffldl_fft(&mut tree, &g00, &g01, &g11, logn);
        let mut leaves = Vec::new();
        collect_leaves(&tree, logn, &mut leaves);
        assert_eq!(leaves.len(), n);
        for (i, &x) in leaves.iter().enumerate() {
            let want = if i < n / 2 { 4.0 } else { 9.0 };
            assert!((x - want).abs() < 1e-9, "leaf {} = {}", i, x);
        }
        assert!(tree[..n].iter().all(|x| x.to_f64().abs() < 1e-9));
    }

    #[test]
    fn test_leaves_multiply_to_determinant() {
        // The Gram-Schmidt norms of B multiply to det(B) = q^n, and each
        // leaf stands for two of them: sum(ln(leaf)) = (n/2)*ln(q) +
        // n*ln(1/sigma) after normalization.
        for logn in [2u32, 4, 6] {
            let params = Params::new(logn).unwrap();
            let kp = keygen_with_seed(b"ffldl determinant", &params).unwrap();
            let esk = kp.sk.expand();
            let n = 1usize << logn;
            let mut leaves = Vec::new();
            collect_leaves(esk.tree(), logn, &mut leaves);
            assert_eq!(leaves.len(), n);

            let got: f64 = leaves.iter().map(|x| x.ln()).sum();
            let want = (n as f64 / 2.0) * (Q as f64).ln()
                + n as f64 * INV_SIGMA[logn as usize].to_f64().ln();
            assert!((got - want).abs() < 1e-6 * want.abs().max(1.0), "logn {}: {} vs {}", logn, got, want);
        }
    }

    #[test]
    fn test_leaves_within_sampler_range() {
        let kp = keygen_with_seed(b"ffldl range", &crate::params::FALCON_512).unwrap();
        let esk = ExpandedSecretKey::new(&kp.sk);
        let mut leaves = Vec::new();
        collect_leaves(esk.tree(), 9, &mut leaves);
        let sigma_min = SIGMA_MIN[9].to_f64();
        for &isigma in &leaves {
            assert!(isigma * sigma_min <= 1.0 + 1e-9, "sigma' below sigma_min");
            assert!(1.0 / isigma <= 1.8205, "sigma' above sigma0");
        }
    }
}
