//! Polynomial arithmetic over Z_q for Falcon.
//!
//! This module provides the NTT-based operations in the ring
//! Z_q[X]/(X^n + 1), q = 12289, used outside of the floating-point
//! signing core:
//! - public key computation `h = g/f mod q`,
//! - recovery of G from (f, g, F) when decoding a secret key,
//! - the verification equation and the signature norm check.
//!
//! Coefficient vectors are `u16` in [0, q-1]. After [`mq_ntt`] a vector
//! holds the evaluations of the polynomial in bit-reversed order, so
//! products become coefficient-wise.

use crate::field::{
    mq_add, mq_centered, mq_conv_small, mq_div_12289, mq_montymul, mq_rshift1, mq_sub, GMB, IGMB,
    R, R2,
};
use crate::params::{L2_BOUND, Q};

// ============================================================================
// NTT
// ============================================================================

/// Forward NTT in place.
pub fn mq_ntt(a: &mut [u16], logn: u32) {
    let n = 1usize << logn;
    let mut t = n;
    let mut m = 1;
    while m < n {
        let ht = t >> 1;
        let mut j1 = 0;
        for i in 0..m {
            let s = GMB[m + i] as u32;
            for j in j1..j1 + ht {
                let u = a[j] as u32;
                let v = mq_montymul(a[j + ht] as u32, s);
                a[j] = mq_add(u, v) as u16;
                a[j + ht] = mq_sub(u, v) as u16;
            }
            j1 += t;
        }
        t = ht;
        m <<= 1;
    }
}

/// Inverse NTT in place, including the division by n.
pub fn mq_intt(a: &mut [u16], logn: u32) {
    let n = 1usize << logn;
    let mut t = 1;
    let mut m = n;
    while m > 1 {
        let hm = m >> 1;
        let dt = t << 1;
        let mut j1 = 0;
        for i in 0..hm {
            let s = IGMB[hm + i] as u32;
            for j in j1..j1 + t {
                let u = a[j] as u32;
                let v = a[j + t] as u32;
                a[j] = mq_add(u, v) as u16;
                a[j + t] = mq_montymul(mq_sub(u, v), s) as u16;
            }
            j1 += dt;
        }
        t = dt;
        m = hm;
    }

    // 1/n in Montgomery representation; the montymul below removes R.
    let mut ni = R;
    let mut m = n;
    while m > 1 {
        ni = mq_rshift1(ni);
        m >>= 1;
    }
    for x in a[..n].iter_mut() {
        *x = mq_montymul(*x as u32, ni) as u16;
    }
}

/// Converts every coefficient to Montgomery representation.
pub fn mq_poly_tomonty(f: &mut [u16], logn: u32) {
    let n = 1usize << logn;
    for x in f[..n].iter_mut() {
        *x = mq_montymul(*x as u32, R2) as u16;
    }
}

/// `f <- f*g/R` coefficient-wise (NTT representation).
///
/// When `g` is in Montgomery representation this is a plain product.
pub fn mq_poly_montymul_ntt(f: &mut [u16], g: &[u16], logn: u32) {
    let n = 1usize << logn;
    for (x, &y) in f[..n].iter_mut().zip(&g[..n]) {
        *x = mq_montymul(*x as u32, y as u32) as u16;
    }
}

/// `f <- f - g`.
pub fn mq_poly_sub(f: &mut [u16], g: &[u16], logn: u32) {
    let n = 1usize << logn;
    for (x, &y) in f[..n].iter_mut().zip(&g[..n]) {
        *x = mq_sub(*x as u32, y as u32) as u16;
    }
}

/// Converts a public key to NTT + Montgomery representation, the form
/// expected by [`verify_raw`].
pub fn to_ntt_monty(h: &mut [u16], logn: u32) {
    mq_ntt(h, logn);
    mq_poly_tomonty(h, logn);
}

// ============================================================================
// Key operations
// ============================================================================

/// Computes the public key `h = g/f mod q`.
///
/// Returns `None` if `f` is not invertible modulo q.
pub fn compute_public(f: &[i8], g: &[i8], logn: u32) -> Option<Vec<u16>> {
    let n = 1usize << logn;
    let mut tt: Vec<u16> = f[..n].iter().map(|&x| mq_conv_small(x as i32) as u16).collect();
    let mut h: Vec<u16> = g[..n].iter().map(|&x| mq_conv_small(x as i32) as u16).collect();
    mq_ntt(&mut h, logn);
    mq_ntt(&mut tt, logn);
    for (hu, &tu) in h.iter_mut().zip(&tt) {
        if tu == 0 {
            return None;
        }
        *hu = mq_div_12289(*hu as u32, tu as u32) as u16;
    }
    mq_intt(&mut h, logn);
    Some(h)
}

/// Recomputes G from (f, g, F) using `f*G - g*F = q`, i.e. `G = g*F/f mod q`.
///
/// Returns `None` if `f` is not invertible modulo q or a coefficient of G
/// falls outside [-127, 127].
pub fn complete_private(f: &[i8], g: &[i8], big_f: &[i8], logn: u32) -> Option<Vec<i8>> {
    let n = 1usize << logn;
    let mut t1: Vec<u16> = g[..n].iter().map(|&x| mq_conv_small(x as i32) as u16).collect();
    let mut t2: Vec<u16> = big_f[..n]
        .iter()
        .map(|&x| mq_conv_small(x as i32) as u16)
        .collect();
    mq_ntt(&mut t1, logn);
    mq_ntt(&mut t2, logn);
    mq_poly_tomonty(&mut t1, logn);
    mq_poly_montymul_ntt(&mut t1, &t2, logn);

    for (t, &x) in t2.iter_mut().zip(&f[..n]) {
        *t = mq_conv_small(x as i32) as u16;
    }
    mq_ntt(&mut t2, logn);
    for (x, &y) in t1.iter_mut().zip(&t2) {
        if y == 0 {
            return None;
        }
        *x = mq_div_12289(*x as u32, y as u32) as u16;
    }
    mq_intt(&mut t1, logn);

    let mut big_g = Vec::with_capacity(n);
    for &w in &t1 {
        let w = w as u32;
        let w = w.wrapping_sub(Q & !((w.wrapping_sub(Q >> 1) >> 31).wrapping_neg()));
        let gi = w as i32;
        if !(-127..=127).contains(&gi) {
            return None;
        }
        big_g.push(gi as i8);
    }
    Some(big_g)
}

// ============================================================================
// Verification core
// ============================================================================

/// Computes `s1 = c0 - s2*h mod q`, centered in [-(q-1)/2, (q-1)/2].
///
/// `h` must be in NTT + Montgomery representation (see [`to_ntt_monty`]).
pub fn recover_s1(c0: &[u16], s2: &[i16], h: &[u16], logn: u32) -> Vec<i16> {
    let n = 1usize << logn;
    let mut tt: Vec<u16> = s2[..n]
        .iter()
        .map(|&x| mq_conv_small(x as i32) as u16)
        .collect();

    // tt = s2*h - c0 = -s1
    mq_ntt(&mut tt, logn);
    mq_poly_montymul_ntt(&mut tt, h, logn);
    mq_intt(&mut tt, logn);
    mq_poly_sub(&mut tt, c0, logn);

    tt.iter().map(|&w| -mq_centered(w as u32) as i16).collect()
}

/// Checks that `(c0 - s2*h, s2)` is short enough.
///
/// `h` must be in NTT + Montgomery representation.
pub fn verify_raw(c0: &[u16], s2: &[i16], h: &[u16], logn: u32) -> bool {
    let s1 = recover_s1(c0, s2, h, logn);
    is_short(&s1, s2, logn)
}

/// Returns true if `||s1||^2 + ||s2||^2` is within the acceptance bound.
///
/// The running sum saturates: any overflow past 2^31 makes the check fail.
pub fn is_short(s1: &[i16], s2: &[i16], logn: u32) -> bool {
    let n = 1usize << logn;
    let mut s = 0u32;
    let mut ng = 0u32;
    for u in 0..n {
        let z = s1[u] as i32;
        s = s.wrapping_add((z * z) as u32);
        ng |= s;
        let z = s2[u] as i32;
        s = s.wrapping_add((z * z) as u32);
        ng |= s;
    }
    s |= (ng >> 31).wrapping_neg();
    s <= L2_BOUND[logn as usize]
}

/// Same as [`is_short`], but with `||s1||^2` already accumulated in `sqn`.
///
/// A `sqn` with its top bit set counts as an overflow.
pub fn is_short_half(sqn: u32, s2: &[i16], logn: u32) -> bool {
    let n = 1usize << logn;
    let mut sqn = sqn;
    let mut ng = (sqn >> 31).wrapping_neg();
    for &z in &s2[..n] {
        let z = z as i32;
        sqn = sqn.wrapping_add((z * z) as u32);
        ng |= sqn;
    }
    sqn |= (ng >> 31).wrapping_neg();
    sqn <= L2_BOUND[logn as usize]
}
