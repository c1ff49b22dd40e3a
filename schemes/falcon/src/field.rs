//! Field arithmetic in Z_q where q = 12289.
//!
//! Values are plain `u32` in [0, q-1]. Multiplication uses Montgomery
//! reduction with R = 2^16: `montymul(x, y) = x*y/R mod q`. A value `x`
//! is in Montgomery representation when it is stored as `x*R mod q`.
//!
//! Every operation here is branchless: conditional corrections use
//! masks derived from the sign bit.

use crate::params::Q;

/// -1/q mod 2^16.
pub const Q0I: u32 = 12287;

/// 2^16 mod q (the Montgomery representation of 1).
pub const R: u32 = 4091;

/// 2^32 mod q.
pub const R2: u32 = 10952;

/// Primitive 2048-th root of unity modulo q.
const G: u32 = 7;

/// Inverse of [`G`] modulo q.
const G_INV: u32 = 8778;

/// Modular addition.
#[inline]
pub fn mq_add(x: u32, y: u32) -> u32 {
    // d is negative (top bit set) iff x + y < q.
    let d = x.wrapping_add(y).wrapping_sub(Q);
    d.wrapping_add(Q & (d >> 31).wrapping_neg())
}

/// Modular subtraction.
#[inline]
pub fn mq_sub(x: u32, y: u32) -> u32 {
    let d = x.wrapping_sub(y);
    d.wrapping_add(Q & (d >> 31).wrapping_neg())
}

/// Division by 2 modulo q.
#[inline]
pub fn mq_rshift1(x: u32) -> u32 {
    (x + (Q & (x & 1).wrapping_neg())) >> 1
}

/// Montgomery multiplication: returns `x*y/R mod q`.
#[inline]
pub fn mq_montymul(x: u32, y: u32) -> u32 {
    let z = x * y;
    let w = ((z.wrapping_mul(Q0I)) & 0xFFFF) * Q;

    // z + w < 2^31 and is a multiple of 2^16; the quotient is in [0, 2q-1].
    let z = ((z + w) >> 16).wrapping_sub(Q);
    z.wrapping_add(Q & (z >> 31).wrapping_neg())
}

/// Montgomery squaring.
#[inline]
pub fn mq_montysqr(x: u32) -> u32 {
    mq_montymul(x, x)
}

/// Returns `x/y mod q` for `x` and `y` in normal representation.
///
/// The inverse is `y^(q-2)`, computed by square-and-multiply over the
/// public exponent, so timing does not depend on `y`. A zero `y` gives 0.
pub fn mq_div_12289(x: u32, y: u32) -> u32 {
    // y in Montgomery representation.
    let y0 = mq_montymul(y, R2);
    let mut acc = R;
    let e = Q - 2;
    let mut i = 32 - e.leading_zeros();
    while i > 0 {
        i -= 1;
        acc = mq_montysqr(acc);
        if (e >> i) & 1 != 0 {
            acc = mq_montymul(acc, y0);
        }
    }

    // acc = y^(q-2) * R; one more multiplication removes R.
    mq_montymul(acc, x)
}

/// Maps a small signed integer into [0, q-1].
#[inline]
pub fn mq_conv_small(x: i32) -> u32 {
    let y = x as u32;
    y.wrapping_add(Q & (y >> 31).wrapping_neg())
}

/// Maps a value in [0, q-1] to its centered representative in
/// [-(q-1)/2, (q-1)/2].
#[inline]
pub fn mq_centered(x: u32) -> i32 {
    let w = x as i32;
    w - (Q & ((Q >> 1).wrapping_sub(x) >> 31).wrapping_neg()) as i32
}

// ============================================================================
// NTT tables
// ============================================================================

/// Reverses the low 10 bits of `x`.
pub(crate) const fn rev10(x: usize) -> usize {
    ((x as u32).reverse_bits() >> 22) as usize
}

/// `table[x] = R * r^rev10(x) mod q`.
const fn build_ntt_table(root: u32) -> [u16; 1024] {
    let mut pow = [0u32; 1024];
    let mut acc = 1u32;
    let mut i = 0;
    while i < 1024 {
        pow[i] = acc;
        acc = acc * root % Q;
        i += 1;
    }

    let mut table = [0u16; 1024];
    let mut x = 0;
    while x < 1024 {
        table[x] = (R * pow[rev10(x)] % Q) as u16;
        x += 1;
    }
    table
}

/// Twiddle factors for the forward NTT, in Montgomery representation
/// and bit-reversed order.
pub static GMB: [u16; 1024] = build_ntt_table(G);

/// Twiddle factors for the inverse NTT.
pub static IGMB: [u16; 1024] = build_ntt_table(G_INV);

#[cfg(test)]
mod tests {
    use super::*;

    fn pow_mod(mut b: u64, mut e: u64) -> u64 {
        let q = Q as u64;
        let mut r = 1u64;
        b %= q;
        while e > 0 {
            if e & 1 == 1 {
                r = r * b % q;
            }
            b = b * b % q;
            e >>= 1;
        }
        r
    }

    #[test]
    fn test_constants() {
        assert_eq!(R as u64, (1u64 << 16) % Q as u64);
        assert_eq!(R2 as u64, (1u64 << 32) % Q as u64);
        assert_eq!(Q.wrapping_mul(Q0I) & 0xFFFF, 0xFFFF);
        assert_eq!(G * G_INV % Q, 1);
        // 7 has order exactly 2048.
        assert_eq!(pow_mod(G as u64, 1024), Q as u64 - 1);
        assert_eq!(pow_mod(G as u64, 2048), 1);
    }

    #[test]
    fn test_ct_field_ops_exhaustive() {
        for a in (0..Q).step_by(7) {
            for b in (0..Q).step_by(13) {
                assert_eq!(mq_add(a, b), (a + b) % Q, "add({},{})", a, b);
                assert_eq!(mq_sub(a, b), (a + Q - b) % Q, "sub({},{})", a, b);
            }
            assert_eq!(mq_add(mq_rshift1(a), mq_rshift1(a)), a);
        }
    }

    #[test]
    fn test_ct_montymul() {
        // R^-1 mod q
        let r_inv = pow_mod(R as u64, Q as u64 - 2);
        for a in (0..Q).step_by(17) {
            for b in (0..Q).step_by(19) {
                let want = (a as u64 * b as u64 % Q as u64) * r_inv % Q as u64;
                assert_eq!(mq_montymul(a, b) as u64, want, "montymul({},{})", a, b);
            }
        }
        assert!(mq_montymul(Q - 1, Q - 1) < Q);
    }

    #[test]
    fn test_div() {
        for y in [1u32, 2, 7, 123, 1000, 12288] {
            for x in [0u32, 1, 5, 9999] {
                let z = mq_div_12289(x, y);
                assert_eq!((z as u64 * y as u64) % Q as u64, x as u64, "{}/{}", x, y);
            }
        }
        assert_eq!(mq_div_12289(5, 0), 0);
    }

    #[test]
    fn test_conv_and_centered() {
        assert_eq!(mq_conv_small(-1), Q - 1);
        assert_eq!(mq_conv_small(127), 127);
        assert_eq!(mq_conv_small(-127), Q - 127);
        assert_eq!(mq_centered(0), 0);
        assert_eq!(mq_centered(Q - 1), -1);
        assert_eq!(mq_centered(Q / 2), (Q / 2) as i32);
        assert_eq!(mq_centered(Q / 2 + 1), -((Q / 2) as i32));
    }

    #[test]
    fn test_ntt_tables() {
        assert_eq!(GMB[0], R as u16);
        assert_eq!(IGMB[0], R as u16);
        // rev10(1) = 512
        let w = pow_mod(G as u64, 512);
        assert_eq!(GMB[1] as u64, R as u64 * w % Q as u64);
        for x in 0..1024 {
            let prod = mq_montymul(GMB[x] as u32, IGMB[x] as u32);
            assert_eq!(prod, R, "index {}", x);
        }
    }
}
