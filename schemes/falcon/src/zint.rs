//! Big integers in base 2^31, for the NTRU solver.
//!
//! A "zint" is a little-endian slice of `u32` words, each holding 31 bits
//! (the top bit of every word is zero). Signed values use two's complement
//! over the full `31*len` bits, so the sign is bit 30 of the top word.
//!
//! Values are also kept in RNS form: word `u` of an integer then holds the
//! residue modulo `PRIMES[u].p`. [`rebuild_crt`] converts from RNS to the
//! plain representation in place.
//!
//! All routines are constant-time with respect to the integer values;
//! only lengths and scaling amounts may leak.

use crate::modp::{ninv31, Modp};
use crate::primes::PRIMES;

/// Subtracts `b` from `a` if `ctl` is 1; `ctl` must be 0 or 1. Returns
/// the final borrow. Both slices have the same length.
pub fn sub(a: &mut [u32], b: &[u32], ctl: u32) -> u32 {
    let mut cc = 0u32;
    let m = ctl.wrapping_neg();
    for (aw, &bw) in a.iter_mut().zip(b.iter()) {
        let w = aw.wrapping_sub(bw).wrapping_sub(cc);
        cc = w >> 31;
        *aw ^= ((w & 0x7FFF_FFFF) ^ *aw) & m;
    }
    cc
}

/// Multiplies `m` by a small integer `x`, returning the carry word.
pub fn mul_small(m: &mut [u32], x: u32) -> u32 {
    let mut cc = 0u32;
    for w in m.iter_mut() {
        let z = *w as u64 * x as u64 + cc as u64;
        *w = (z as u32) & 0x7FFF_FFFF;
        cc = (z >> 31) as u32;
    }
    cc
}

/// Reduces an unsigned big integer modulo a small prime.
pub fn mod_small_uint(d: &[u32], mp: &Modp) -> u32 {
    let p = mp.p;
    let mut x = 0u32;
    for &dw in d.iter().rev() {
        x = mp.montymul(x, mp.r2);
        let mut w = dw.wrapping_sub(p);
        w = w.wrapping_add(p & (w >> 31).wrapping_neg());
        x = mp.add(x, w);
    }
    x
}

/// Reduces a signed big integer modulo a small prime. `rx` must be
/// `2^(31*d.len()) mod p` (see [`Modp::rx`]).
pub fn mod_small_signed(d: &[u32], mp: &Modp, rx: u32) -> u32 {
    let Some(&top) = d.last() else {
        return 0;
    };
    let z = mod_small_uint(d, mp);
    mp.sub(z, rx & (top >> 30).wrapping_neg())
}

/// `x <- x + s*y`. `x` has one more word than `y`; the final carry lands
/// in that top word.
pub fn add_mul_small(x: &mut [u32], y: &[u32], s: u32) {
    let len = y.len();
    let mut cc = 0u32;
    for (xw, &yw) in x[..len].iter_mut().zip(y.iter()) {
        let z = yw as u64 * s as u64 + *xw as u64 + cc as u64;
        *xw = (z as u32) & 0x7FFF_FFFF;
        cc = (z >> 31) as u32;
    }
    x[len] = cc;
}

/// Normalizes `x` modulo `p` into `(-p/2, p/2]`, assuming `x` is in
/// `[0, p)`. `p` is odd, so `x` is subtracted when `x > (p-1)/2`.
pub fn norm_zero(x: &mut [u32], p: &[u32]) {
    // Compare x with (p-1)/2, from the top word down.
    let mut r = 0u32;
    let mut bb = 0u32;
    for u in (0..x.len()).rev() {
        let wx = x[u];
        let wp = (p[u] >> 1) | (bb << 30);
        bb = p[u] & 1;

        // cc = -1, 0 or 1 for wp < wx, wp == wx, wp > wx.
        let mut cc = wp.wrapping_sub(wx);
        cc = (cc.wrapping_neg() >> 31) | (cc >> 31).wrapping_neg();

        // Keep the first non-zero comparison result.
        r |= cc & (r & 1).wrapping_sub(1);
    }

    // r is -1 (top bit set) iff x > (p-1)/2.
    sub(x, p, r >> 31);
}

/// Rebuilds integers from their RNS representation.
///
/// `xx` holds `num` integers of `xlen` words each, spaced `xstride` words
/// apart; word `u` of each is its residue modulo `PRIMES[u].p`. On output
/// each integer is in plain form, in `[0, P)` where `P` is the product of
/// the primes, or in `(-P/2, P/2)` when `normalize_signed` is set.
pub fn rebuild_crt(
    xx: &mut [u32],
    xlen: usize,
    xstride: usize,
    num: usize,
    normalize_signed: bool,
) {
    // Running product of the primes used so far.
    let mut tmp = vec![0u32; xlen];
    tmp[0] = PRIMES[0].p;
    for u in 1..xlen {
        let sp = PRIMES[u];
        let mp = Modp::new(sp.p);
        for v in 0..num {
            let x = &mut xx[v * xstride..v * xstride + u + 1];
            let xp = x[u];
            let xq = mod_small_uint(&x[..u], &mp);
            let xr = mp.montymul(sp.s, mp.sub(xp, xq));
            add_mul_small(x, &tmp[..u], xr);
        }
        tmp[u] = mul_small(&mut tmp[..u], sp.p);
    }

    if normalize_signed {
        for v in 0..num {
            norm_zero(&mut xx[v * xstride..v * xstride + xlen], &tmp);
        }
    }
}

/// Negates `a` if `ctl` is 1; `ctl` must be 0 or 1.
pub fn negate(a: &mut [u32], ctl: u32) {
    // Complement and add 1, or do nothing.
    let mut cc = ctl;
    let m = ctl.wrapping_neg() >> 1;
    for w in a.iter_mut() {
        let aw = (*w ^ m).wrapping_add(cc);
        *w = aw & 0x7FFF_FFFF;
        cc = aw >> 31;
    }
}

/// Replaces `a` with `(a*xa + b*xb) / 2^31` and `b` with
/// `(a*ya + b*yb) / 2^31`. The low 31 bits of each sum are assumed to be
/// zero. Results that come out negative are negated; bit 0 of the return
/// value is set if `a` was negated, bit 1 if `b` was.
pub fn co_reduce(a: &mut [u32], b: &mut [u32], xa: i64, xb: i64, ya: i64, yb: i64) -> u32 {
    let len = a.len();
    let mut cca = 0i64;
    let mut ccb = 0i64;
    for u in 0..len {
        let wa = a[u] as i64;
        let wb = b[u] as i64;
        let za = wa
            .wrapping_mul(xa)
            .wrapping_add(wb.wrapping_mul(xb))
            .wrapping_add(cca);
        let zb = wa
            .wrapping_mul(ya)
            .wrapping_add(wb.wrapping_mul(yb))
            .wrapping_add(ccb);
        if u > 0 {
            a[u - 1] = (za as u32) & 0x7FFF_FFFF;
            b[u - 1] = (zb as u32) & 0x7FFF_FFFF;
        }
        cca = za >> 31;
        ccb = zb >> 31;
    }
    a[len - 1] = cca as u32;
    b[len - 1] = ccb as u32;

    let nega = ((cca as u64) >> 63) as u32;
    let negb = ((ccb as u64) >> 63) as u32;
    negate(a, nega);
    negate(b, negb);
    nega | (negb << 1)
}

/// Finishes a modular reduction. On input `a` is in `[-m, m)` if `neg` is
/// 1, in `[0, 2m)` if `neg` is 0; on output it is in `[0, m)`.
pub fn finish_mod(a: &mut [u32], m: &[u32], neg: u32) {
    // cc = 1 iff a < m.
    let mut cc = 0u32;
    for (&aw, &mw) in a.iter().zip(m.iter()) {
        cc = aw.wrapping_sub(mw).wrapping_sub(cc) >> 31;
    }

    // Negative: add m. Non-negative and not below m: subtract m.
    let xm = neg.wrapping_neg() >> 1;
    let ym = (neg | (1 - cc)).wrapping_neg();
    cc = neg;
    for (aw, &mw) in a.iter_mut().zip(m.iter()) {
        let mw = (mw ^ xm) & ym;
        let w = aw.wrapping_sub(mw).wrapping_sub(cc);
        *aw = w & 0x7FFF_FFFF;
        cc = w >> 31;
    }
}

/// Replaces `a` with `(a*xa + b*xb) / 2^31 mod m` and `b` with
/// `(a*ya + b*yb) / 2^31 mod m`. `m` is odd and `m0i = -1/m[0] mod 2^31`.
/// `a` and `b` must be in `[0, m)` and stay there.
#[allow(clippy::too_many_arguments)]
pub fn co_reduce_mod(
    a: &mut [u32],
    b: &mut [u32],
    m: &[u32],
    m0i: u32,
    xa: i64,
    xb: i64,
    ya: i64,
    yb: i64,
) {
    let len = a.len();
    let mut cca = 0i64;
    let mut ccb = 0i64;

    // Multiples of m to add so that the low 31 bits become zero.
    let fa = (a[0]
        .wrapping_mul(xa as u32)
        .wrapping_add(b[0].wrapping_mul(xb as u32)))
    .wrapping_mul(m0i)
        & 0x7FFF_FFFF;
    let fb = (a[0]
        .wrapping_mul(ya as u32)
        .wrapping_add(b[0].wrapping_mul(yb as u32)))
    .wrapping_mul(m0i)
        & 0x7FFF_FFFF;

    for u in 0..len {
        let wa = a[u] as i64;
        let wb = b[u] as i64;
        let wm = m[u] as i64;
        let za = wa
            .wrapping_mul(xa)
            .wrapping_add(wb.wrapping_mul(xb))
            .wrapping_add(wm.wrapping_mul(fa as i64))
            .wrapping_add(cca);
        let zb = wa
            .wrapping_mul(ya)
            .wrapping_add(wb.wrapping_mul(yb))
            .wrapping_add(wm.wrapping_mul(fb as i64))
            .wrapping_add(ccb);
        if u > 0 {
            a[u - 1] = (za as u32) & 0x7FFF_FFFF;
            b[u - 1] = (zb as u32) & 0x7FFF_FFFF;
        }
        cca = za >> 31;
        ccb = zb >> 31;
    }
    a[len - 1] = cca as u32;
    b[len - 1] = ccb as u32;

    // Intermediate values are in (-m, 2m); bring them back to [0, m).
    finish_mod(a, m, ((cca as u64) >> 63) as u32);
    finish_mod(b, m, ((ccb as u64) >> 63) as u32);
}

/// Binary extended GCD.
///
/// Given odd `x` and `y` (same length), computes `u` and `v` such that
/// `x*u - y*v = 1`, with `0 <= u <= y` and `0 <= v <= x`. Returns `false`
/// when `gcd(x, y) != 1` or either input is even; `u` and `v` are then
/// unspecified. Inputs must be below `2^(31*len - 1)`.
pub fn bezout(u: &mut [u32], v: &mut [u32], x: &[u32], y: &[u32]) -> bool {
    let len = x.len();
    if len == 0 {
        return false;
    }

    // Invariants:
    //   a = x*u0 - y*v0
    //   b = x*u1 - y*v1
    //   0 <= a, b, u0, u1 < y and 0 <= v0, v1 < x
    // starting from a = x, b = y, u0 = 1, v0 = 0, u1 = y, v1 = x - 1.
    // Each outer iteration shrinks a and b by 31 bits, using their low and
    // top words to compute the update factors.
    let (u0, v0) = (u, v);
    let mut u1 = y.to_vec();
    let mut v1 = x.to_vec();
    let mut a = x.to_vec();
    let mut b = y.to_vec();
    let x0i = ninv31(x[0]);
    let y0i = ninv31(y[0]);

    u0.fill(0);
    u0[0] = 1;
    v0.fill(0);
    v1[0] = v1[0].wrapping_sub(1);

    let mut num = 62 * len as u32 + 30;
    while num >= 30 {
        // Extract the top 62 bits of a and b (as two 31-bit words each),
        // aligned on the larger of the two.
        let mut c0 = u32::MAX;
        let mut c1 = u32::MAX;
        let mut a0 = 0u32;
        let mut a1 = 0u32;
        let mut b0 = 0u32;
        let mut b1 = 0u32;
        for j in (0..len).rev() {
            let aw = a[j];
            let bw = b[j];
            a0 ^= (a0 ^ aw) & c0;
            a1 ^= (a1 ^ aw) & c1;
            b0 ^= (b0 ^ bw) & c0;
            b1 ^= (b1 ^ bw) & c1;
            c1 = c0;
            c0 &= (((aw | bw).wrapping_add(0x7FFF_FFFF)) >> 31).wrapping_sub(1);
        }

        // If a and b both fit in one word, a0/b0 hold that word and a1/b1
        // are still zero; shift into place.
        a1 |= a0 & c1;
        a0 &= !c1;
        b1 |= b0 & c1;
        b0 &= !c1;
        let mut a_hi = ((a0 as u64) << 31) + a1 as u64;
        let mut b_hi = ((b0 as u64) << 31) + b1 as u64;
        let mut a_lo = a[0];
        let mut b_lo = b[0];

        // 31 steps on the approximations; the update factors satisfy
        // a*pa + b*pb = 2^31 * a' and a*qa + b*qb = 2^31 * b'.
        let mut pa = 1i64;
        let mut pb = 0i64;
        let mut qa = 0i64;
        let mut qb = 1i64;
        for i in 0..31 {
            // rt = 1 iff a_hi < b_hi.
            let rz = b_hi.wrapping_sub(a_hi);
            let rt = ((rz ^ ((a_hi ^ b_hi) & (a_hi ^ rz))) >> 63) as u32;

            // Both odd: subtract the smaller from the larger.
            // a even: halve a. Otherwise b is even: halve b.
            let oa = (a_lo >> i) & 1;
            let ob = (b_lo >> i) & 1;
            let c_ab = oa & ob & rt;
            let c_ba = oa & ob & !rt;
            let c_a = c_ab | (oa ^ 1);

            a_lo = a_lo.wrapping_sub(b_lo & c_ab.wrapping_neg());
            a_hi = a_hi.wrapping_sub(b_hi & (c_ab as u64).wrapping_neg());
            pa = pa.wrapping_sub(qa & -(c_ab as i64));
            pb = pb.wrapping_sub(qb & -(c_ab as i64));
            b_lo = b_lo.wrapping_sub(a_lo & c_ba.wrapping_neg());
            b_hi = b_hi.wrapping_sub(a_hi & (c_ba as u64).wrapping_neg());
            qa = qa.wrapping_sub(pa & -(c_ba as i64));
            qb = qb.wrapping_sub(pb & -(c_ba as i64));

            a_lo = a_lo.wrapping_add(a_lo & c_a.wrapping_sub(1));
            pa = pa.wrapping_add(pa & (c_a as i64 - 1));
            pb = pb.wrapping_add(pb & (c_a as i64 - 1));
            a_hi ^= (a_hi ^ (a_hi >> 1)) & (c_a as u64).wrapping_neg();
            b_lo = b_lo.wrapping_add(b_lo & c_a.wrapping_neg());
            qa = qa.wrapping_add(qa & -(c_a as i64));
            qb = qb.wrapping_add(qb & -(c_a as i64));
            b_hi ^= (b_hi ^ (b_hi >> 1)) & (c_a as u64).wrapping_sub(1);
        }

        // Apply the factors to the full values; fix signs if needed.
        let r = co_reduce(&mut a, &mut b, pa, pb, qa, qb);
        pa = pa.wrapping_sub(pa.wrapping_add(pa) & -((r & 1) as i64));
        pb = pb.wrapping_sub(pb.wrapping_add(pb) & -((r & 1) as i64));
        qa = qa.wrapping_sub(qa.wrapping_add(qa) & -((r >> 1) as i64));
        qb = qb.wrapping_sub(qb.wrapping_add(qb) & -((r >> 1) as i64));
        co_reduce_mod(u0, &mut u1, y, y0i, pa, pb, qa, qb);
        co_reduce_mod(v0, &mut v1, x, x0i, pa, pb, qa, qb);

        num -= 30;
    }

    // a now holds the GCD; success iff it is 1 and both inputs were odd.
    let mut rc = a[0] ^ 1;
    for &w in &a[1..] {
        rc |= w;
    }
    ((1 - ((rc | rc.wrapping_neg()) >> 31)) & x[0] & y[0]) != 0
}

/// `x <- x + k*y*2^(31*sch + scl)`, truncated to the length of `x`. `y` is
/// signed and sign-extended as needed; `scl` is in `[0, 30]`.
pub fn add_scaled_mul_small(x: &mut [u32], y: &[u32], k: i32, sch: usize, scl: u32) {
    let Some(&ytop) = y.last() else {
        return;
    };
    let ylen = y.len();
    let ysign = (ytop >> 30).wrapping_neg() >> 1;
    let mut tw = 0u32;
    let mut cc = 0i32;
    for u in sch..x.len() {
        let v = u - sch;
        let wy = if v < ylen { y[v] } else { ysign };
        let wys = ((wy << scl) & 0x7FFF_FFFF) | tw;
        tw = wy >> (31 - scl);

        // Fits on 63 bits: |wys*k| < 2^62 and the other terms are small.
        let z = (wys as i64)
            .wrapping_mul(k as i64)
            .wrapping_add(x[u] as i64)
            .wrapping_add(cc as i64) as u64;
        x[u] = (z as u32) & 0x7FFF_FFFF;
        cc = (z >> 31) as u32 as i32;
    }
}

/// `x <- x - y*2^(31*sch + scl)`, truncated to the length of `x`. `y` is
/// signed and sign-extended as needed; `scl` is in `[0, 30]`.
pub fn sub_scaled(x: &mut [u32], y: &[u32], sch: usize, scl: u32) {
    let Some(&ytop) = y.last() else {
        return;
    };
    let ylen = y.len();
    let ysign = (ytop >> 30).wrapping_neg() >> 1;
    let mut tw = 0u32;
    let mut cc = 0u32;
    for u in sch..x.len() {
        let v = u - sch;
        let wy = if v < ylen { y[v] } else { ysign };
        let wys = ((wy << scl) & 0x7FFF_FFFF) | tw;
        tw = wy >> (31 - scl);
        let w = x[u].wrapping_sub(wys).wrapping_sub(cc);
        x[u] = w & 0x7FFF_FFFF;
        cc = w >> 31;
    }
}

/// Converts a one-word signed big integer to a plain `i32`.
#[inline]
pub fn one_to_plain(w: u32) -> i32 {
    (w | ((w & 0x4000_0000) << 1)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::{BigInt, BigUint, RandBigInt, Sign};
    use num_traits::{One, Signed, ToPrimitive, Zero};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn modulus(len: usize) -> BigInt {
        BigInt::one() << (31 * len)
    }

    /// Two's complement encoding of `v` over `len` words.
    fn to_words(v: &BigInt, len: usize) -> Vec<u32> {
        let m = modulus(len);
        let w = ((v % &m) + &m) % &m;
        let mut w = w.to_biguint().unwrap();
        let base = BigUint::from(1u64 << 31);
        (0..len)
            .map(|_| {
                let limb = (&w % &base).to_u32().unwrap();
                w >>= 31;
                limb
            })
            .collect()
    }

    fn from_words_unsigned(x: &[u32]) -> BigInt {
        let mut v = BigInt::zero();
        for &w in x.iter().rev() {
            v = (v << 31) + BigInt::from(w);
        }
        v
    }

    fn from_words_signed(x: &[u32]) -> BigInt {
        let v = from_words_unsigned(x);
        match x.last() {
            Some(&top) if top & 0x4000_0000 != 0 => v - modulus(x.len()),
            _ => v,
        }
    }

    fn random_signed(rng: &mut StdRng, bits: u64) -> BigInt {
        let mag = rng.gen_biguint(bits);
        let sign = if rng.gen_biguint(1).is_zero() { Sign::Plus } else { Sign::Minus };
        BigInt::from_biguint(sign, mag)
    }

    #[test]
    fn test_mod_small() {
        let mut rng = StdRng::seed_from_u64(1);
        for len in 1..8 {
            for _ in 0..20 {
                let v = random_signed(&mut rng, 31 * len as u64 - 2);
                let words = to_words(&v, len);
                for sp in PRIMES.iter().take(3) {
                    let mp = Modp::new(sp.p);
                    let p = BigInt::from(sp.p);
                    let want = (((&v % &p) + &p) % &p).to_u32().unwrap();
                    let rx = mp.rx(len as u32);
                    assert_eq!(mod_small_signed(&words, &mp, rx), want);
                    if !v.is_negative() {
                        assert_eq!(mod_small_uint(&words, &mp), want);
                    }
                }
            }
        }
        assert_eq!(mod_small_signed(&[], &Modp::new(PRIMES[0].p), 0), 0);
    }

    #[test]
    fn test_rebuild_crt_signed() {
        let mut rng = StdRng::seed_from_u64(2);
        let xlen = 6;
        let stride = 7;
        let num = 5;
        let values: Vec<BigInt> = (0..num)
            .map(|_| random_signed(&mut rng, 31 * xlen as u64 - 3))
            .collect();

        let mut xx = vec![0u32; num * stride];
        for (i, v) in values.iter().enumerate() {
            for u in 0..xlen {
                let p = BigInt::from(PRIMES[u].p);
                xx[i * stride + u] = (((v % &p) + &p) % &p).to_u32().unwrap();
            }
            xx[i * stride + xlen] = 0xDEAD;
        }
        rebuild_crt(&mut xx, xlen, stride, num, true);
        for (i, v) in values.iter().enumerate() {
            let got = from_words_signed(&xx[i * stride..i * stride + xlen]);
            assert_eq!(&got, v, "value {}", i);
            assert_eq!(xx[i * stride + xlen], 0xDEAD);
        }
    }

    #[test]
    fn test_rebuild_crt_unsigned() {
        let mut rng = StdRng::seed_from_u64(3);
        let xlen = 4;
        let v = BigInt::from(rng.gen_biguint(31 * 4 - 2));
        let mut xx: Vec<u32> = (0..xlen)
            .map(|u| {
                let p = BigInt::from(PRIMES[u].p);
                (&v % &p).to_u32().unwrap()
            })
            .collect();
        rebuild_crt(&mut xx, xlen, xlen, 1, false);
        assert_eq!(from_words_unsigned(&xx), v);
    }

    #[test]
    fn test_negate_and_one_to_plain() {
        let v = BigInt::from(123456789i64) << 40;
        let mut w = to_words(&v, 3);
        negate(&mut w, 1);
        assert_eq!(from_words_signed(&w), -&v);
        negate(&mut w, 0);
        assert_eq!(from_words_signed(&w), -v);

        assert_eq!(one_to_plain(to_words(&BigInt::from(-5), 1)[0]), -5);
        assert_eq!(one_to_plain(to_words(&BigInt::from(1 << 29), 1)[0]), 1 << 29);
        assert_eq!(one_to_plain((-7i32) as u32), -7);
    }

    #[test]
    fn test_scaled_ops() {
        let mut rng = StdRng::seed_from_u64(4);
        for &(xlen, ylen, sch, scl) in &[(6usize, 3usize, 1usize, 5u32), (5, 5, 0, 0), (8, 2, 3, 30)] {
            let x = random_signed(&mut rng, 31 * xlen as u64 - 2);
            let y = random_signed(&mut rng, 31 * ylen as u64 - 2);
            let k: i32 = -987_654_321;
            let m = modulus(xlen);
            let shift = 31 * sch + scl as usize;

            let mut xw = to_words(&x, xlen);
            add_scaled_mul_small(&mut xw, &to_words(&y, ylen), k, sch, scl);
            let want = &x + BigInt::from(k) * &y * (BigInt::one() << shift);
            assert_eq!(from_words_unsigned(&xw), ((want % &m) + &m) % &m);

            let mut xw = to_words(&x, xlen);
            sub_scaled(&mut xw, &to_words(&y, ylen), sch, scl);
            let want = &x - &y * (BigInt::one() << shift);
            assert_eq!(from_words_unsigned(&xw), ((want % &m) + &m) % &m);
        }
    }

    fn check_bezout(x: &BigInt, y: &BigInt, len: usize) -> Option<(BigInt, BigInt)> {
        let xw = to_words(x, len);
        let yw = to_words(y, len);
        let mut u = vec![0u32; len];
        let mut v = vec![0u32; len];
        if bezout(&mut u, &mut v, &xw, &yw) {
            Some((from_words_unsigned(&u), from_words_unsigned(&v)))
        } else {
            None
        }
    }

    #[test]
    fn test_bezout_small() {
        let (u, v) = check_bezout(&BigInt::from(3), &BigInt::from(5), 1).unwrap();
        assert_eq!(BigInt::from(3) * &u - BigInt::from(5) * &v, BigInt::one());
        assert!(u <= BigInt::from(5) && v <= BigInt::from(3));

        // Common factor.
        assert!(check_bezout(&BigInt::from(21), &BigInt::from(35), 1).is_none());
        // Even input.
        assert!(check_bezout(&BigInt::from(4), &BigInt::from(7), 1).is_none());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_bezout_identity(seed in any::<u64>(), len in 1usize..10) {
            let mut rng = StdRng::seed_from_u64(seed);
            let bits = 31 * len as u64 - 1;
            let x = BigInt::from(rng.gen_biguint(bits)) | BigInt::one();
            let y = BigInt::from(rng.gen_biguint(bits)) | BigInt::one();
            let g = gcd(&x, &y);
            match check_bezout(&x, &y, len) {
                Some((u, v)) => {
                    prop_assert!(g.is_one());
                    prop_assert_eq!(&x * &u - &y * &v, BigInt::one());
                    prop_assert!(u <= y);
                    prop_assert!(v <= x);
                }
                None => prop_assert!(!g.is_one()),
            }
        }
    }

    fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
        let mut a = a.clone();
        let mut b = b.clone();
        while !b.is_zero() {
            let t = &a % &b;
            a = b;
            b = t;
        }
        a
    }
}
