//! Arithmetic modulo 31-bit primes, used by the NTRU solver.
//!
//! Values are `u32` in `[0, p-1]`. Montgomery multiplication uses
//! R = 2^31, so `montymul(a, b) = a*b/2^31 mod p`. NTT tables hold powers
//! of a primitive 2n-th root of unity in Montgomery form, in bit-reversed
//! order, exactly as the `q = 12289` tables in [`crate::field`].

use crate::field::rev10;

/// Returns `-1/p mod 2^31`.
pub fn ninv31(p: u32) -> u32 {
    let mut y = 2u32.wrapping_sub(p);
    for _ in 0..4 {
        y = y.wrapping_mul(2u32.wrapping_sub(p.wrapping_mul(y)));
    }
    0x7FFF_FFFF & y.wrapping_neg()
}

/// A 31-bit prime modulus with its Montgomery constants.
#[derive(Clone, Copy, Debug)]
pub struct Modp {
    pub p: u32,
    pub p0i: u32,
    /// 2^62 mod p, i.e. R^2 in Montgomery terms.
    pub r2: u32,
}

impl Modp {
    pub fn new(p: u32) -> Self {
        let p0i = ninv31(p);
        let mut m = Modp { p, p0i, r2: 0 };
        m.r2 = m.compute_r2();
        m
    }

    /// 2^31 mod p (the Montgomery representation of 1).
    #[inline]
    pub fn r(&self) -> u32 {
        (1u32 << 31) - self.p
    }

    /// Converts a signed integer in `(-p, p)` to its residue.
    #[inline]
    pub fn set(&self, x: i32) -> u32 {
        let w = x as u32;
        w.wrapping_add(self.p & (w >> 31).wrapping_neg())
    }

    /// Maps a residue to its centered representative in `(-p/2, p/2]`.
    #[inline]
    pub fn norm(&self, x: u32) -> i32 {
        let p = self.p;
        let m = (x.wrapping_sub((p + 1) >> 1) >> 31).wrapping_sub(1);
        x.wrapping_sub(p & m) as i32
    }

    #[inline]
    pub fn add(&self, a: u32, b: u32) -> u32 {
        let d = a.wrapping_add(b).wrapping_sub(self.p);
        d.wrapping_add(self.p & (d >> 31).wrapping_neg())
    }

    #[inline]
    pub fn sub(&self, a: u32, b: u32) -> u32 {
        let d = a.wrapping_sub(b);
        d.wrapping_add(self.p & (d >> 31).wrapping_neg())
    }

    /// Montgomery multiplication: `a*b/2^31 mod p`.
    #[inline]
    pub fn montymul(&self, a: u32, b: u32) -> u32 {
        let p = self.p;
        let z = a as u64 * b as u64;
        let w = (z.wrapping_mul(self.p0i as u64) & 0x7FFF_FFFF) * p as u64;
        let d = (((z + w) >> 31) as u32).wrapping_sub(p);
        d.wrapping_add(p & (d >> 31).wrapping_neg())
    }

    fn compute_r2(&self) -> u32 {
        let p = self.p;
        // z = 2 in Montgomery form; five squarings give 2^32 in Montgomery
        // form, i.e. 2^63 mod p. Halving yields 2^62.
        let mut z = self.r();
        z = self.add(z, z);
        for _ in 0..5 {
            z = self.montymul(z, z);
        }
        (z + (p & (z & 1).wrapping_neg())) >> 1
    }

    /// Returns `2^(31*x) mod p`, the weight of the bit just above the top
    /// limb of an `x`-word integer. `x` must be at least 1.
    pub fn rx(&self, x: u32) -> u32 {
        let x = x - 1;
        let mut r = self.r2;
        let mut z = self.r();
        let mut i = 0;
        while i < 32 && (1u32 << i) <= x {
            if x & (1u32 << i) != 0 {
                z = self.montymul(z, r);
            }
            r = self.montymul(r, r);
            i += 1;
        }
        z
    }

    /// Returns `a/b mod p`, or 0 when `b` is 0.
    pub fn div(&self, a: u32, b: u32) -> u32 {
        let e = self.p - 2;
        let mut z = self.r();
        for i in (0..=30).rev() {
            z = self.montymul(z, z);
            let z2 = self.montymul(z, b);
            z ^= (z ^ z2) & ((e >> i) & 1).wrapping_neg();
        }
        z = self.montymul(z, 1);
        self.montymul(a, z)
    }

    /// Fills `gm` and `igm` with the NTT and inverse NTT twiddle factors for
    /// degree `2^logn`. `g` is a primitive 2048-th root of unity mod p.
    pub fn mkgm2(&self, gm: &mut [u32], igm: &mut [u32], logn: u32, g: u32) {
        let n = 1usize << logn;
        let mut g = self.montymul(g, self.r2);
        for _ in logn..10 {
            g = self.montymul(g, g);
        }
        let ig = self.div(self.r2, g);
        let k = 10 - logn;
        let mut x1 = self.r();
        let mut x2 = x1;
        for u in 0..n {
            let v = rev10(u << k);
            gm[v] = x1;
            igm[v] = x2;
            x1 = self.montymul(x1, g);
            x2 = self.montymul(x2, ig);
        }
    }

    /// Forward NTT over the elements `a[0], a[stride], a[2*stride], ...`.
    pub fn ntt2_ext(&self, a: &mut [u32], stride: usize, gm: &[u32], logn: u32) {
        if logn == 0 {
            return;
        }
        let n = 1usize << logn;
        let mut t = n;
        let mut m = 1;
        while m < n {
            let ht = t >> 1;
            let mut v1 = 0;
            for u in 0..m {
                let s = gm[m + u];
                let mut r1 = v1 * stride;
                let mut r2 = r1 + ht * stride;
                for _ in 0..ht {
                    let x = a[r1];
                    let y = self.montymul(a[r2], s);
                    a[r1] = self.add(x, y);
                    a[r2] = self.sub(x, y);
                    r1 += stride;
                    r2 += stride;
                }
                v1 += t;
            }
            t = ht;
            m <<= 1;
        }
    }

    /// Inverse NTT over strided elements, including the division by n.
    pub fn intt2_ext(&self, a: &mut [u32], stride: usize, igm: &[u32], logn: u32) {
        if logn == 0 {
            return;
        }
        let n = 1usize << logn;
        let mut t = 1;
        let mut m = n;
        while m > 1 {
            let hm = m >> 1;
            let dt = t << 1;
            let mut v1 = 0;
            for u in 0..hm {
                let s = igm[hm + u];
                let mut r1 = v1 * stride;
                let mut r2 = r1 + t * stride;
                for _ in 0..t {
                    let x = a[r1];
                    let y = a[r2];
                    a[r1] = self.add(x, y);
                    a[r2] = self.montymul(self.sub(x, y), s);
                    r1 += stride;
                    r2 += stride;
                }
                v1 += dt;
            }
            t = dt;
            m = hm;
        }

        // 2^(31-logn) / R = 1/n.
        let ni = 1u32 << (31 - logn);
        for k in 0..n {
            a[k * stride] = self.montymul(a[k * stride], ni);
        }
    }

    #[inline]
    pub fn ntt2(&self, a: &mut [u32], gm: &[u32], logn: u32) {
        self.ntt2_ext(a, 1, gm, logn);
    }

    #[inline]
    pub fn intt2(&self, a: &mut [u32], igm: &[u32], logn: u32) {
        self.intt2_ext(a, 1, igm, logn);
    }

    /// Given `f` in NTT form for degree `2^logn`, replaces its first half
    /// with `N(f)` (the field norm) in NTT form for degree `2^(logn-1)`.
    pub fn poly_rec_res(&self, f: &mut [u32], logn: u32) {
        let hn = 1usize << (logn - 1);
        for u in 0..hn {
            let w0 = f[2 * u];
            let w1 = f[2 * u + 1];
            f[u] = self.montymul(self.montymul(w0, w1), self.r2);
        }
    }
}
