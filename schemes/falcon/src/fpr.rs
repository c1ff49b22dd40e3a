//! Emulated binary64 floating-point arithmetic.
//!
//! [`Fpr`] holds the bit pattern of an IEEE-754 `binary64` value, and every
//! operation is computed with integer instructions only. Results are
//! bit-identical to correctly rounded hardware arithmetic
//! (round-to-nearest, ties to even) for the values Falcon manipulates, on
//! every platform, independently of FPU modes, x87 extended precision or
//! fused multiply-add contraction.
//!
//! Supported domain:
//! - zero and normal values; results below the normal range flush to zero,
//! - no infinities or NaNs (callers never divide by zero or overflow),
//! - `rint`, `floor` and `trunc` expect |x| < 2^63.
//!
//! Two reference quirks are kept: `floor(-0.0)` is `-1`, and the sign of
//! zero follows the operand order rules of `add`.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// An emulated `binary64` value.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Fpr(pub(crate) u64);

impl std::fmt::Debug for Fpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Fpr({:e})", self.to_f64())
    }
}

// Fpr(0) is +0.0.
impl zeroize::DefaultIsZeroes for Fpr {}

const M52: u64 = (1u64 << 52) - 1;
const M63: u64 = (1u64 << 63) - 1;

// Coefficients of the exp(-x) polynomial (FACCT), scaled by 2^63.
const EXPM_COEFFS: [u64; 13] = [
    0x00000004741183A3,
    0x00000036548CFC06,
    0x0000024FDCBF140A,
    0x0000171D939DE045,
    0x0000D00CF58F6F84,
    0x000680681CF796E3,
    0x002D82D8305B0FEA,
    0x011111110E066FD0,
    0x0555555555070F00,
    0x155555555581FF00,
    0x400000000002B400,
    0x7FFFFFFFFFFF4800,
    0x8000000000000000,
];

/// Assembles sign `s`, exponent `e` and mantissa `m` into a value equal to
/// `(-1)^s * m * 2^e`, rounding to nearest-even.
///
/// `m` must be zero or lie in `2^54..2^55`, its lowest bit acting as a
/// sticky bit. Exponents below the normal range yield zero (with sign).
#[inline(always)]
fn make(s: u32, e: i32, m: u64) -> Fpr {
    let mut e = e + 1076;
    let t = (e as u32) >> 31;
    let m = m & (t as u64).wrapping_sub(1);
    let t = (m >> 54) as u32;
    e &= -(t as i32);

    // The top bit of m bumps the exponent by one, which is exactly the
    // implicit leading one; a carry from rounding spills the same way.
    let x = (((s as u64) << 63) | (m >> 2)).wrapping_add(((e as u32) as u64) << 52);
    let f = (m as u32) & 7;
    Fpr(x.wrapping_add(((0xC8u32 >> f) & 1) as u64))
}

/// Left-shifts `m` until its top bit is set, adjusting `e` to keep `m * 2^e`.
#[inline(always)]
fn norm64(m: u64, e: i32) -> (u64, i32) {
    let k = m.leading_zeros().min(63);
    (m << k, e - k as i32)
}

impl Fpr {
    /// +0.0
    pub const ZERO: Fpr = Fpr(0);
    /// -0.0
    pub const NEG_ZERO: Fpr = Fpr(0x8000000000000000);
    /// 1.0
    pub const ONE: Fpr = Fpr(0x3FF0000000000000);
    /// 2.0
    pub const TWO: Fpr = Fpr(0x4000000000000000);
    /// 0.5
    pub const ONEHALF: Fpr = Fpr(0x3FE0000000000000);
    /// q = 12289
    pub const Q: Fpr = Fpr(0x40C8008000000000);
    /// 1/q
    pub const INVERSE_OF_Q: Fpr = Fpr(0x3F1554E39097A782);
    /// 1/(2*sigma0^2) with sigma0 = 1.8205
    pub const INV_2SQRSIGMA0: Fpr = Fpr(0x3FC34F8BC183BBC2);
    /// 1/ln(2)
    pub const INV_LOG2: Fpr = Fpr(0x3FF71547652B82FE);
    /// ln(2)
    pub const LOG2: Fpr = Fpr(0x3FE62E42FEFA39EF);
    /// Squared Gram-Schmidt bound 1.17^2 * q = 16822.4121
    pub const BNORM_MAX: Fpr = Fpr(0x40D06D9A5FD8ADAC);
    /// 2^31
    pub const PTWO31: Fpr = Fpr(0x41E0000000000000);
    /// 2^31 - 1
    pub const PTWO31M1: Fpr = Fpr(0x41DFFFFFFFC00000);
    /// -(2^31 - 1)
    pub const MTWO31M1: Fpr = Fpr(0xC1DFFFFFFFC00000);
    /// 2^63 - 1 (rounds to 2^63)
    pub const PTWO63M1: Fpr = Fpr(0x43E0000000000000);
    /// -(2^63 - 1) (rounds to -2^63)
    pub const MTWO63M1: Fpr = Fpr(0xC3E0000000000000);
    /// 2^63
    pub const PTWO63: Fpr = Fpr(0x43E0000000000000);
    /// 1/sqrt(2)
    pub const INVSQRT2: Fpr = Fpr(0x3FE6A09E667F3BCD);
    /// 1/sqrt(8)
    pub const INVSQRT8: Fpr = Fpr(0x3FD6A09E667F3BCD);

    /// Wraps a raw `binary64` bit pattern.
    #[inline]
    pub const fn from_bits(bits: u64) -> Fpr {
        Fpr(bits)
    }

    /// Returns the raw `binary64` bit pattern.
    #[inline]
    pub const fn to_bits(self) -> u64 {
        self.0
    }

    /// Reinterprets the bits as a native `f64` (diagnostics and tests).
    #[inline]
    pub fn to_f64(self) -> f64 {
        f64::from_bits(self.0)
    }

    /// Converts a signed integer (exact up to 2^53, rounded beyond).
    #[inline]
    pub fn of(i: i64) -> Fpr {
        Fpr::scaled(i, 0)
    }

    /// Returns `i * 2^sc`, correctly rounded.
    pub fn scaled(i: i64, sc: i32) -> Fpr {
        let s = ((i as u64) >> 63) as u32;
        let (mut m, e) = norm64(i.unsigned_abs(), 9 + sc);
        m |= (((m as u32) & 0x1FF) + 0x1FF) as u64;
        m >>= 9;

        // i = 0 must give exponent 0 as well.
        let t = (((i | i.wrapping_neg()) as u64) >> 63) as u32;
        m &= (t as u64).wrapping_neg();
        make(s, e & -(t as i32), m)
    }

    /// Returns `self + y`.
    pub fn add(self, y: Fpr) -> Fpr {
        let (mut x, mut y) = (self.0, y.0);

        // Swap so that |x| >= |y|. When |x| = |y| with opposite signs the
        // positive operand goes first, so that x - x gives +0.
        let za = (x & M63).wrapping_sub(y & M63);
        let cs = ((za >> 63) as u32)
            | (1u32.wrapping_sub((za.wrapping_neg() >> 63) as u32) & ((x >> 63) as u32));
        let m = (x ^ y) & (cs as u64).wrapping_neg();
        x ^= m;
        y ^= m;

        // Mantissas scaled to 2^55..2^56 (zero stays zero), unbiased exponents.
        let mut ex = (x >> 52) as i32;
        let sx = ex >> 11;
        ex &= 0x7FF;
        let m = (((ex + 0x7FF) >> 11) as u64) << 52;
        let mut xu = ((x & M52) | m) << 3;
        ex -= 1078;
        let mut ey = (y >> 52) as i32;
        let sy = ey >> 11;
        ey &= 0x7FF;
        let m = (((ey + 0x7FF) >> 11) as u64) << 52;
        let mut yu = ((y & M52) | m) << 3;
        ey -= 1078;

        // Align y on x; beyond 59 bits y only contributes to stickiness,
        // and is dropped altogether.
        let mut cc = ex - ey;
        yu &= ((((cc - 60) as u32) >> 31) as u64).wrapping_neg();
        cc &= 63;
        let m = (1u64 << cc) - 1;
        yu |= (yu & m) + m;
        yu >>= cc;

        // Add or subtract depending on the signs.
        xu = xu.wrapping_add(yu.wrapping_sub((yu << 1) & ((sx ^ sy) as u64).wrapping_neg()));

        let (mut xu, mut ex) = norm64(xu, ex);
        xu |= (((xu as u32) & 0x1FF) + 0x1FF) as u64;
        xu >>= 9;
        ex += 9;
        make(sx as u32, ex, xu)
    }

    /// Returns `self - y`.
    #[inline]
    pub fn sub(self, y: Fpr) -> Fpr {
        self.add(y.neg())
    }

    /// Returns `-self`.
    #[inline]
    pub fn neg(self) -> Fpr {
        Fpr(self.0 ^ (1u64 << 63))
    }

    /// Returns `self / 2`.
    #[inline]
    pub fn half(self) -> Fpr {
        let x = self.0.wrapping_sub(1u64 << 52);
        let t = ((((x >> 52) as u32) & 0x7FF) + 1) >> 11;
        Fpr(x & (t as u64).wrapping_sub(1))
    }

    /// Returns `self * 2`.
    #[inline]
    pub fn double(self) -> Fpr {
        let x = self.0;
        Fpr(x.wrapping_add(((((((x >> 52) as u32) & 0x7FF) + 0x7FF) >> 11) as u64) << 52))
    }

    /// Returns `self * y`.
    pub fn mul(self, y: Fpr) -> Fpr {
        let (x, y) = (self.0, y.0);
        let xu = (x & M52) | (1u64 << 52);
        let yu = (y & M52) | (1u64 << 52);

        // 106-bit product, kept as its top 56 bits plus a sticky bit.
        let p = (xu as u128) * (yu as u128);
        let mut zu = (p >> 50) as u64;
        let lo = (p as u64) & ((1u64 << 50) - 1);
        zu |= (lo + ((1u64 << 50) - 1)) >> 50;

        // Bring zu into 2^54..2^55.
        let zv = (zu >> 1) | (zu & 1);
        let w = zu >> 55;
        zu ^= (zu ^ zv) & w.wrapping_neg();

        let ex = ((x >> 52) & 0x7FF) as i32;
        let ey = ((y >> 52) & 0x7FF) as i32;
        let e = ex + ey - 2100 + w as i32;
        let s = ((x ^ y) >> 63) as u32;

        // Either operand zero: force a zero mantissa.
        let d = ((ex + 0x7FF) & (ey + 0x7FF)) >> 11;
        zu &= (d as u64).wrapping_neg();
        make(s, e, zu)
    }

    /// Returns `self * self`.
    #[inline]
    pub fn sqr(self) -> Fpr {
        self.mul(self)
    }

    /// Returns `1 / self`.
    #[inline]
    pub fn inv(self) -> Fpr {
        Fpr::ONE.div(self)
    }

    /// Returns `self / y`; `y` must not be zero.
    pub fn div(self, y: Fpr) -> Fpr {
        let (x, y) = (self.0, y.0);
        let mut xu = (x & M52) | (1u64 << 52);
        let yu = (y & M52) | (1u64 << 52);

        // Restoring division, 55 quotient bits.
        let mut q = 0u64;
        for _ in 0..55 {
            let b = (xu.wrapping_sub(yu) >> 63).wrapping_sub(1);
            xu -= b & yu;
            q |= b & 1;
            xu <<= 1;
            q <<= 1;
        }

        // The extra low bit is sticky: set iff the remainder is non-zero.
        q |= (xu | xu.wrapping_neg()) >> 63;

        let q2 = (q >> 1) | (q & 1);
        let w = q >> 55;
        q ^= (q ^ q2) & w.wrapping_neg();

        let ex = ((x >> 52) & 0x7FF) as i32;
        let ey = ((y >> 52) & 0x7FF) as i32;
        let mut e = ex - ey - 55 + w as i32;
        let mut s = ((x ^ y) >> 63) as u32;

        // x = 0 gives +0.
        let d = (ex + 0x7FF) >> 11;
        s &= d as u32;
        e &= -d;
        q &= (d as u64).wrapping_neg();
        make(s, e, q)
    }

    /// Returns the square root of `self`; `self` must be non-negative.
    pub fn sqrt(self) -> Fpr {
        let x = self.0;
        let mut xu = (x & M52) | (1u64 << 52);
        let ex = ((x >> 52) & 0x7FF) as i32;
        let mut e = ex - 1023;

        // Odd exponent: double the mantissa so that e becomes even.
        xu += xu & ((e & 1) as u64).wrapping_neg();
        e >>= 1;
        xu <<= 1;

        // Bit-by-bit square root on a fixed-point value in 1..4.
        let mut q = 0u64;
        let mut s = 0u64;
        let mut r = 1u64 << 53;
        for _ in 0..54 {
            let t = s + r;
            let b = (xu.wrapping_sub(t) >> 63).wrapping_sub(1);
            s += (r << 1) & b;
            xu -= t & b;
            q += r & b;
            xu <<= 1;
            r >>= 1;
        }

        q <<= 1;
        q |= (xu | xu.wrapping_neg()) >> 63;
        e -= 54;

        q &= (((ex + 0x7FF) >> 11) as u64).wrapping_neg();
        make(0, e, q)
    }

    /// Returns `self < y`.
    ///
    /// `-0.0 < +0.0` is reported as true.
    #[inline]
    pub fn lt(self, y: Fpr) -> bool {
        let sx = self.0 as i64;
        let mut sy = y.0 as i64;
        sy &= !((sx ^ sy) >> 63);

        let cc0 = (sx.wrapping_sub(sy) >> 63) & 1;
        let cc1 = (sy.wrapping_sub(sx) >> 63) & 1;
        (cc0 ^ ((cc0 ^ cc1) & ((self.0 & y.0) >> 63) as i64)) != 0
    }

    /// Rounds to the nearest integer, ties to even.
    pub fn rint(self) -> i64 {
        let x = self.0;
        let mut m = ((x << 10) | (1u64 << 62)) & M63;
        let mut e = 1085 - (((x >> 52) as i32) & 0x7FF);

        // Shifts of 64 bits or more give zero (this covers x = 0).
        m &= ((((e - 64) as u32) >> 31) as u64).wrapping_neg();
        e &= 63;

        // Dropped bits plus the lowest kept bit, squeezed into three bits
        // (lowest bit sticky), select the rounding increment.
        let d = m << (63 - e);
        let dd = (d as u32) | (((d >> 32) as u32) & 0x1FFF_FFFF);
        let f = ((d >> 61) as u32) | ((dd | dd.wrapping_neg()) >> 31);
        m = (m >> e) + ((0xC8u32 >> f) & 1) as u64;

        let s = (x >> 63) as i64;
        ((m as i64) ^ s.wrapping_neg()).wrapping_add(s)
    }

    /// Rounds toward minus infinity. `floor(-0.0)` is `-1`.
    pub fn floor(self) -> i64 {
        let x = self.0;
        let e = ((x >> 52) as i32) & 0x7FF;
        let t = (x >> 63) as i64;
        let mut xi = (((x << 10) | (1u64 << 62)) & M63) as i64;
        xi = (xi ^ t.wrapping_neg()).wrapping_add(t);
        let cc = 1085 - e;

        xi >>= cc & 63;

        // A true shift count of 64 or more leaves only the sign: 0 or -1.
        xi ^= (xi ^ t.wrapping_neg()) & ((((63 - cc) as u32) >> 31) as i64).wrapping_neg();
        xi
    }

    /// Rounds toward zero.
    pub fn trunc(self) -> i64 {
        let x = self.0;
        let e = ((x >> 52) as i32) & 0x7FF;
        let mut xu = ((x << 10) | (1u64 << 62)) & M63;
        let cc = 1085 - e;
        xu >>= cc & 63;
        xu &= ((((cc - 64) as u32) >> 31) as u64).wrapping_neg();

        let t = x >> 63;
        xu = (xu ^ t.wrapping_neg()).wrapping_add(t);
        xu as i64
    }

    /// Returns `2^63 * ccs * exp(-x)` rounded down, for `0 <= x < ln(2)` and
    /// `0 <= ccs < 1`.
    ///
    /// The polynomial is evaluated in 64-bit fixed point, so the result is
    /// independent of any floating-point rounding beyond `x * 2^63`.
    pub fn expm_p63(x: Fpr, ccs: Fpr) -> u64 {
        let mut y = EXPM_COEFFS[0];
        let z = (x.mul(Fpr::PTWO63).trunc() as u64) << 1;
        for &c in &EXPM_COEFFS[1..] {
            let zy = (((z as u128) * (y as u128)) >> 64) as u64;
            y = c.wrapping_sub(zy);
        }

        let z = (ccs.mul(Fpr::PTWO63).trunc() as u64) << 1;
        (((z as u128) * (y as u128)) >> 64) as u64
    }
}

impl Add for Fpr {
    type Output = Fpr;

    #[inline(always)]
    fn add(self, other: Fpr) -> Fpr {
        Fpr::add(self, other)
    }
}

impl AddAssign for Fpr {
    #[inline(always)]
    fn add_assign(&mut self, other: Fpr) {
        *self = Fpr::add(*self, other);
    }
}

impl Sub for Fpr {
    type Output = Fpr;

    #[inline(always)]
    fn sub(self, other: Fpr) -> Fpr {
        Fpr::sub(self, other)
    }
}

impl SubAssign for Fpr {
    #[inline(always)]
    fn sub_assign(&mut self, other: Fpr) {
        *self = Fpr::sub(*self, other);
    }
}

impl Mul for Fpr {
    type Output = Fpr;

    #[inline(always)]
    fn mul(self, other: Fpr) -> Fpr {
        Fpr::mul(self, other)
    }
}

impl MulAssign for Fpr {
    #[inline(always)]
    fn mul_assign(&mut self, other: Fpr) {
        *self = Fpr::mul(*self, other);
    }
}

impl Div for Fpr {
    type Output = Fpr;

    #[inline(always)]
    fn div(self, other: Fpr) -> Fpr {
        Fpr::div(self, other)
    }
}

impl Neg for Fpr {
    type Output = Fpr;

    #[inline(always)]
    fn neg(self) -> Fpr {
        Fpr::neg(self)
    }
}

// ============================================================================
// Per-degree constants
// ============================================================================

/// `1/sigma` for the signing distribution, by logn.
pub const INV_SIGMA: [Fpr; 11] = [
    Fpr(0), // unused
    Fpr(0x3F7C48EB7E24169A), // 0.006905479329
    Fpr(0x3F7BE50A548CAED9), // 0.006810226776
    Fpr(0x3F7B852EE09E762C), // 0.006718810191
    Fpr(0x3F7AFC5ED3CADA36), // 0.006588335437
    Fpr(0x3F7A7B3B0976B3ED), // 0.006465178120
    Fpr(0x3F7A011282CA9C98), // 0.006348678882
    Fpr(0x3F798D49CE5F2736), // 0.006238258652
    Fpr(0x3F791F57C56ED9EE), // 0.006133406502
    Fpr(0x3F78B6C2DE64C7CA), // 0.006033669668
    Fpr(0x3F78531EF6311AE3), // 0.005938645309
];

/// Smallest admissible standard deviation at the leaves of the LDL tree, by logn.
pub const SIGMA_MIN: [Fpr; 11] = [
    Fpr(0), // unused
    Fpr(0x3FF1DD380644568B), // 1.116508507232
    Fpr(0x3FF21D2EDCAD8626), // 1.132124769232
    Fpr(0x3FF25C46E1AA7C7A), // 1.147528535373
    Fpr(0x3FF2B95C574AFB25), // 1.170254078853
    Fpr(0x3FF314ABC7FE22B6), // 1.192546635839
    Fpr(0x3FF36E4E3475D7C3), // 1.214430050776
    Fpr(0x3FF3C65A66A1C224), // 1.235926056771
    Fpr(0x3FF41CE5358CB3A0), // 1.257054528406
    Fpr(0x3FF47201BF1F7A75), // 1.277833696912
    Fpr(0x3FF4C5C19990C764), // 1.298280334344
];

/// `2^(1 - logn)`: the inverse FFT scaling factor, by logn.
pub const P2_TAB: [Fpr; 11] = [
    Fpr(0x4000000000000000),
    Fpr(0x3FF0000000000000),
    Fpr(0x3FE0000000000000),
    Fpr(0x3FD0000000000000),
    Fpr(0x3FC0000000000000),
    Fpr(0x3FB0000000000000),
    Fpr(0x3FA0000000000000),
    Fpr(0x3F90000000000000),
    Fpr(0x3F80000000000000),
    Fpr(0x3F70000000000000),
    Fpr(0x3F60000000000000),
];

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn f(x: f64) -> Fpr {
        Fpr(x.to_bits())
    }

    fn same(a: Fpr, b: f64) -> bool {
        a.0 == b.to_bits() || (b == 0.0 && a.to_f64() == 0.0)
    }

    /// Values in the ranges Falcon actually uses, normal or zero.
    fn operand() -> impl Strategy<Value = f64> {
        prop_oneof![
            -1.0e6f64..1.0e6f64,
            -3.0f64..3.0f64,
            (-100_000i64..100_000i64).prop_map(|i| i as f64),
            (0.5f64..1.0f64, -60i32..60i32, any::<bool>()).prop_map(|(m, e, s)| {
                let v = m * 2f64.powi(e);
                if s { -v } else { v }
            }),
        ]
    }

    proptest! {
        #[test]
        fn prop_add_sub_mul_match_native(a in operand(), b in operand()) {
            prop_assert!(same(f(a) + f(b), a + b));
            prop_assert!(same(f(a) - f(b), a - b));
            prop_assert!(same(f(a) * f(b), a * b));
        }

        #[test]
        fn prop_div_sqrt_match_native(a in operand(), b in operand()) {
            prop_assume!(b != 0.0);
            prop_assert!(same(f(a) / f(b), a / b));
            prop_assert!(same(f(a.abs()).sqrt(), a.abs().sqrt()));
        }

        #[test]
        fn prop_rounding_matches_native(a in operand()) {
            let x = f(a);
            prop_assert_eq!(x.trunc(), a.trunc() as i64);
            // Ties to even, which f64::round does not do.
            let r = a.round();
            let even = if (a - a.trunc()).abs() == 0.5 { 2.0 * (a / 2.0).round() } else { r };
            prop_assert_eq!(x.rint(), even as i64);
            if a != 0.0 {
                prop_assert_eq!(x.floor(), a.floor() as i64);
            }
        }

        #[test]
        fn prop_scaled_matches_native(i in any::<i64>(), sc in -80i32..10i32) {
            prop_assert!(same(Fpr::scaled(i, sc), (i as f64) * 2f64.powi(sc)));
        }

        #[test]
        fn prop_lt_matches_native(a in operand(), b in operand()) {
            prop_assert_eq!(f(a).lt(f(b)), a < b);
        }
    }

    #[test]
    fn test_signed_zeros() {
        assert_eq!(Fpr::ZERO + Fpr::NEG_ZERO, Fpr::ZERO);
        assert_eq!(Fpr::NEG_ZERO + Fpr::NEG_ZERO, Fpr::NEG_ZERO);
        assert_eq!(Fpr::ONE - Fpr::ONE, Fpr::ZERO);
        assert_eq!(f(-1.0) + Fpr::ONE, Fpr::ZERO);
        assert_eq!(Fpr::ZERO * f(5.0), Fpr::ZERO);
        assert_eq!(Fpr::ZERO / f(3.0), Fpr::ZERO);
        assert_eq!(Fpr::ZERO.sqrt(), Fpr::ZERO);
        assert_eq!(Fpr::of(0), Fpr::ZERO);
    }

    #[test]
    fn test_rounding_edge_cases() {
        assert_eq!(f(2.5).rint(), 2);
        assert_eq!(f(-2.5).rint(), -2);
        assert_eq!(f(3.5).rint(), 4);
        assert_eq!(f(0.49999999999999994).rint(), 0);
        assert_eq!(Fpr::ZERO.floor(), 0);
        assert_eq!(Fpr::NEG_ZERO.floor(), -1);
        assert_eq!(f(-0.25).floor(), -1);
        assert_eq!(f(-0.25).trunc(), 0);
        assert_eq!(f(1e-300).floor(), 0);
    }

    #[test]
    fn test_half_and_double() {
        assert_eq!(f(3.0).half(), f(1.5));
        assert_eq!(f(-3.0).double(), f(-6.0));
        assert_eq!(Fpr::ZERO.half(), Fpr::ZERO);
        assert_eq!(Fpr::ZERO.double(), Fpr::ZERO);
    }

    #[test]
    fn test_constants() {
        assert_eq!(Fpr::Q, Fpr::of(12289));
        assert_eq!(Fpr::INVERSE_OF_Q, Fpr::ONE / Fpr::Q);
        assert_eq!(Fpr::PTWO31, Fpr::scaled(1, 31));
        assert_eq!(Fpr::PTWO31M1, Fpr::of((1 << 31) - 1));
        assert_eq!(Fpr::MTWO31M1, -Fpr::PTWO31M1);
        assert_eq!(Fpr::PTWO63, Fpr::scaled(1, 63));
        assert_eq!(Fpr::INVSQRT8, Fpr::INVSQRT2.half());
        assert_eq!(Fpr::INVSQRT2.to_f64(), std::f64::consts::FRAC_1_SQRT_2);
        for logn in 0..=10 {
            assert_eq!(P2_TAB[logn], Fpr::scaled(1, 1 - logn as i32));
        }
        // 1/sigma for Falcon-512 and Falcon-1024.
        assert!((INV_SIGMA[9].to_f64() - 1.0 / 165.736_617_183).abs() < 1e-12);
        assert!((INV_SIGMA[10].to_f64() - 1.0 / 168.388_571_447).abs() < 1e-12);
        assert_eq!(SIGMA_MIN[9].to_f64(), 1.2778336969128337);
    }

    #[test]
    fn test_expm_p63_accuracy() {
        for i in 0..200 {
            let x = 0.693 * (i as f64) / 200.0;
            let ccs = 0.5 + (i as f64) / 400.0;
            let got = Fpr::expm_p63(f(x), f(ccs)) as f64 / 9_223_372_036_854_775_808.0;
            let want = ccs * (-x).exp();
            assert!((got - want).abs() < 1e-14, "x = {}, ccs = {}", x, ccs);
        }
    }
}
