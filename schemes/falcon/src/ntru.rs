//! NTRU equation solver.
//!
//! Given short polynomials f and g modulo X^n+1, finds F and G such that
//! `f*G - g*F = q`. The solver works recursively on field norms: at depth
//! `d` the polynomials have degree `n/2^d`, and at the deepest level they
//! are plain integers (the resultants of f and g with X^n+1), solved with
//! a binary extended GCD. Each shallower level lifts the solution with
//! `F = F'(X^2) * adj(g)`, `G = G'(X^2) * adj(f)`, and then applies Babai
//! reduction against (f, g) to keep the coefficients small.
//!
//! Big values are handled in RNS form over the 31-bit primes of
//! [`crate::primes`], converted with the CRT when plain integers are
//! needed; the reduction coefficients are computed in floating point.

use zeroize::Zeroize;

use crate::fft::{
    fft, ifft, poly_add, poly_add_muladj_fft, poly_adj_fft, poly_div_autoadj_fft,
    poly_invnorm2_fft, poly_mul_autoadj_fft, poly_mul_fft, poly_sub,
};
use crate::fpr::Fpr;
use crate::modp::Modp;
use crate::params::Q;
use crate::primes::PRIMES;
use crate::zint;

// ============================================================================
// Size tables
// ============================================================================

/// Words per coefficient for f and g (and the reduced F and G) at each
/// depth.
const MAX_BL_SMALL: [usize; 11] = [1, 1, 2, 2, 4, 7, 14, 27, 53, 106, 209];

/// Words per coefficient for the unreduced F and G at each depth.
const MAX_BL_LARGE: [usize; 10] = [2, 2, 5, 7, 12, 21, 40, 78, 157, 308];

/// Average bit length of the coefficients of (f, g) at each depth, as
/// measured over many samples.
const BITLENGTH_AVG: [i32; 11] = [4, 11, 24, 50, 102, 202, 401, 794, 1577, 3138, 6308];

/// Standard deviation of the same.
const BITLENGTH_STD: [i32; 11] = [0, 1, 1, 1, 1, 2, 4, 5, 8, 13, 25];

/// Up to this depth, Babai reduction multiplies with the NTT; deeper
/// levels use the quadratic schoolbook product.
const DEPTH_INT_FG: usize = 4;

// ============================================================================
// Polynomial helpers
// ============================================================================

/// Converts big-integer coefficients to floating point. Each coefficient
/// uses `flen` words starting at `f[u*fstride]`; `flen` may be smaller than
/// the full length, in which case the low words are ignored and the result
/// is scaled down.
fn poly_big_to_fp(d: &mut [Fpr], f: &[u32], flen: usize, fstride: usize, logn: u32) {
    let n = 1usize << logn;
    if flen == 0 {
        d[..n].fill(Fpr::ZERO);
        return;
    }
    for (u, du) in d[..n].iter_mut().enumerate() {
        let fw = &f[u * fstride..u * fstride + flen];

        // Negative values are negated on the fly, word by word.
        let neg = (fw[flen - 1] >> 30).wrapping_neg();
        let xm = neg >> 1;
        let mut cc = neg & 1;
        let mut x = Fpr::ZERO;
        let mut fsc = Fpr::ONE;
        for &w in fw {
            let mut w = (w ^ xm).wrapping_add(cc);
            cc = w >> 31;
            w &= 0x7FFF_FFFF;
            w = w.wrapping_sub((w << 1) & neg);
            x = x + Fpr::of(w as i32 as i64) * fsc;
            fsc = fsc * Fpr::PTWO31;
        }
        *du = x;
    }
}

/// Converts one-word coefficients to small integers, failing if any is
/// outside `[-lim, lim]`.
fn poly_big_to_small(s: &[u32], lim: i32, logn: u32) -> Option<Vec<i8>> {
    let n = 1usize << logn;
    s[..n]
        .iter()
        .map(|&w| {
            let z = zint::one_to_plain(w);
            if z < -lim || z > lim {
                None
            } else {
                Some(z as i8)
            }
        })
        .collect()
}

/// `F <- F - (k*f) * 2^(31*sch + scl)` with schoolbook multiplication.
#[allow(clippy::too_many_arguments)]
fn poly_sub_scaled(
    big_f: &mut [u32],
    big_flen: usize,
    big_fstride: usize,
    f: &[u32],
    flen: usize,
    fstride: usize,
    k: &[i32],
    sch: usize,
    scl: u32,
    logn: u32,
) {
    let n = 1usize << logn;
    for u in 0..n {
        // Coefficients wrapping past X^n come back negated.
        let mut kf = k[u].wrapping_neg();
        let mut x = u * big_fstride;
        let mut y = 0;
        for v in 0..n {
            zint::add_scaled_mul_small(
                &mut big_f[x..x + big_flen],
                &f[y..y + flen],
                kf,
                sch,
                scl,
            );
            if u + v == n - 1 {
                x = 0;
                kf = kf.wrapping_neg();
            } else {
                x += big_fstride;
            }
            y += fstride;
        }
    }
}

/// Same as [`poly_sub_scaled`], computing `k*f` exactly in RNS with the
/// NTT and one more word than `f`.
#[allow(clippy::too_many_arguments)]
fn poly_sub_scaled_ntt(
    big_f: &mut [u32],
    big_flen: usize,
    big_fstride: usize,
    f: &[u32],
    flen: usize,
    fstride: usize,
    k: &[i32],
    sch: usize,
    scl: u32,
    logn: u32,
) {
    let n = 1usize << logn;
    let tlen = flen + 1;
    let mut gm = vec![0u32; n];
    let mut igm = vec![0u32; n];
    let mut fk = vec![0u32; n * tlen];
    let mut t1 = vec![0u32; n];

    for u in 0..tlen {
        let sp = PRIMES[u];
        let mp = Modp::new(sp.p);
        let rx = mp.rx(flen as u32);
        mp.mkgm2(&mut gm, &mut igm, logn, sp.g);

        for (t, &kv) in t1.iter_mut().zip(k.iter()) {
            *t = mp.set(kv);
        }
        mp.ntt2(&mut t1, &gm, logn);

        for v in 0..n {
            fk[v * tlen + u] = zint::mod_small_signed(&f[v * fstride..v * fstride + flen], &mp, rx);
        }
        mp.ntt2_ext(&mut fk[u..], tlen, &gm, logn);
        for v in 0..n {
            let x = v * tlen + u;
            fk[x] = mp.montymul(mp.montymul(t1[v], fk[x]), mp.r2);
        }
        mp.intt2_ext(&mut fk[u..], tlen, &igm, logn);
    }

    zint::rebuild_crt(&mut fk, tlen, tlen, n, true);
    for u in 0..n {
        zint::sub_scaled(
            &mut big_f[u * big_fstride..u * big_fstride + big_flen],
            &fk[u * tlen..(u + 1) * tlen],
            sch,
            scl,
        );
    }
}

/// Reduces `hn` signed big integers of `dlen` words modulo the first `llen`
/// primes, writing word `u` of output coefficient `v` at `v*llen + u`.
fn reduce_to_rns(dst: &mut [u32], src: &[u32], dlen: usize, llen: usize, hn: usize) {
    for u in 0..llen {
        let mp = Modp::new(PRIMES[u].p);
        let rx = mp.rx(dlen as u32);
        for v in 0..hn {
            dst[v * llen + u] = zint::mod_small_signed(&src[v * dlen..(v + 1) * dlen], &mp, rx);
        }
    }
}

/// Lifts F' and G' (degree n/2, NTT form in `fp`, `gp`) to F and G at
/// degree n, given f and g in NTT form in `fx`, `gx`. Word `u` of each
/// output coefficient is written with stride `llen`.
#[allow(clippy::too_many_arguments)]
fn lift_fg_ntt(
    big_ft: &mut [u32],
    big_gt: &mut [u32],
    u: usize,
    llen: usize,
    fx: &[u32],
    gx: &[u32],
    fp: &[u32],
    gp: &[u32],
    mp: &Modp,
) {
    // The roots w and -w are adjacent in the NTT order, and
    // f(-w) = adj(f)(w). Thus G(w) = f(-w) * G'(w^2), and the same for F.
    for v in 0..fp.len() {
        let ft_a = fx[2 * v];
        let ft_b = fx[2 * v + 1];
        let gt_a = gx[2 * v];
        let gt_b = gx[2 * v + 1];
        let m_fp = mp.montymul(fp[v], mp.r2);
        let m_gp = mp.montymul(gp[v], mp.r2);
        let x = 2 * v * llen + u;
        big_ft[x] = mp.montymul(gt_b, m_fp);
        big_ft[x + llen] = mp.montymul(gt_a, m_fp);
        big_gt[x] = mp.montymul(ft_b, m_gp);
        big_gt[x + llen] = mp.montymul(ft_a, m_gp);
    }
}

// ============================================================================
// f and g at depth
// ============================================================================

/// One step of field norm computation: given f and g at degree `2^logn`
/// (RNS with `MAX_BL_SMALL[depth]` words, NTT form if `in_ntt`), returns
/// N(f) and N(g) at degree `2^(logn-1)` with `MAX_BL_SMALL[depth+1]` words,
/// in NTT form if `out_ntt`.
fn make_fg_step(
    mut fs: Vec<u32>,
    mut gs: Vec<u32>,
    logn: u32,
    depth: usize,
    in_ntt: bool,
    out_ntt: bool,
) -> (Vec<u32>, Vec<u32>) {
    let n = 1usize << logn;
    let hn = n >> 1;
    let slen = MAX_BL_SMALL[depth];
    let tlen = MAX_BL_SMALL[depth + 1];

    let mut fd = vec![0u32; hn * tlen];
    let mut gd = vec![0u32; hn * tlen];
    let mut gm = vec![0u32; n];
    let mut igm = vec![0u32; n];
    let mut t1 = vec![0u32; n];

    // The first slen primes: the residues are already known.
    for u in 0..slen {
        let sp = PRIMES[u];
        let mp = Modp::new(sp.p);
        mp.mkgm2(&mut gm, &mut igm, logn, sp.g);

        for (src, dst) in [(&mut fs, &mut fd), (&mut gs, &mut gd)] {
            for v in 0..n {
                t1[v] = src[v * slen + u];
            }
            if !in_ntt {
                mp.ntt2(&mut t1, &gm, logn);
            }
            for v in 0..hn {
                dst[v * tlen + u] = mp.montymul(mp.montymul(t1[2 * v], t1[2 * v + 1]), mp.r2);
            }
            if in_ntt {
                mp.intt2_ext(&mut src[u..], slen, &igm, logn);
            }
        }

        if !out_ntt {
            mp.intt2_ext(&mut fd[u..], tlen, &igm, logn - 1);
            mp.intt2_ext(&mut gd[u..], tlen, &igm, logn - 1);
        }
    }

    // fs and gs are now plain RNS values; rebuild them to reduce modulo
    // the remaining primes.
    zint::rebuild_crt(&mut fs, slen, slen, n, true);
    zint::rebuild_crt(&mut gs, slen, slen, n, true);

    for u in slen..tlen {
        let sp = PRIMES[u];
        let mp = Modp::new(sp.p);
        let rx = mp.rx(slen as u32);
        mp.mkgm2(&mut gm, &mut igm, logn, sp.g);

        for (src, dst) in [(&fs, &mut fd), (&gs, &mut gd)] {
            for v in 0..n {
                t1[v] = zint::mod_small_signed(&src[v * slen..(v + 1) * slen], &mp, rx);
            }
            mp.ntt2(&mut t1, &gm, logn);
            for v in 0..hn {
                dst[v * tlen + u] = mp.montymul(mp.montymul(t1[2 * v], t1[2 * v + 1]), mp.r2);
            }
        }

        if !out_ntt {
            mp.intt2_ext(&mut fd[u..], tlen, &igm, logn - 1);
            mp.intt2_ext(&mut gd[u..], tlen, &igm, logn - 1);
        }
    }

    fs.zeroize();
    gs.zeroize();
    (fd, gd)
}

/// Computes f and g at the given depth, in RNS form with
/// `MAX_BL_SMALL[depth]` words per coefficient.
fn make_fg(f: &[i8], g: &[i8], logn: u32, depth: usize, out_ntt: bool) -> (Vec<u32>, Vec<u32>) {
    let sp = PRIMES[0];
    let mp = Modp::new(sp.p);
    let mut ft: Vec<u32> = f.iter().map(|&x| mp.set(x as i32)).collect();
    let mut gt: Vec<u32> = g.iter().map(|&x| mp.set(x as i32)).collect();

    if depth == 0 && out_ntt {
        let n = 1usize << logn;
        let mut gm = vec![0u32; n];
        let mut igm = vec![0u32; n];
        mp.mkgm2(&mut gm, &mut igm, logn, sp.g);
        mp.ntt2(&mut ft, &gm, logn);
        mp.ntt2(&mut gt, &gm, logn);
        return (ft, gt);
    }

    for d in 0..depth {
        (ft, gt) = make_fg_step(ft, gt, logn - d as u32, d, d != 0, d + 1 < depth || out_ntt);
    }
    (ft, gt)
}

// ============================================================================
// Solver levels
// ============================================================================

/// Deepest level: f and g are the resultants, solved with the extended GCD.
/// Returns F and G with `MAX_BL_SMALL[logn_top]` words each.
fn solve_deepest(logn_top: u32, f: &[i8], g: &[i8]) -> Option<(Vec<u32>, Vec<u32>)> {
    let len = MAX_BL_SMALL[logn_top as usize];
    let (mut fp, mut gp) = make_fg(f, g, logn_top, logn_top as usize, false);

    // Resultants are non-negative.
    zint::rebuild_crt(&mut fp, len, len, 1, false);
    zint::rebuild_crt(&mut gp, len, len, 1, false);

    let mut big_f = vec![0u32; len];
    let mut big_g = vec![0u32; len];
    if !zint::bezout(&mut big_g, &mut big_f, &fp, &gp) {
        return None;
    }

    // A non-zero carry means the product overflows the allotted size.
    if zint::mul_small(&mut big_f, Q) != 0 || zint::mul_small(&mut big_g, Q) != 0 {
        return None;
    }
    Some((big_f, big_g))
}

/// Intermediate level: lifts the solution from depth `depth+1` (in `fd`,
/// `gd`, with `MAX_BL_SMALL[depth+1]` words) and reduces it. The output has
/// `MAX_BL_SMALL[depth]` words per coefficient.
fn solve_intermediate(
    logn_top: u32,
    f: &[i8],
    g: &[i8],
    depth: usize,
    fd: &[u32],
    gd: &[u32],
) -> Option<(Vec<u32>, Vec<u32>)> {
    let logn = logn_top - depth as u32;
    let n = 1usize << logn;
    let hn = n >> 1;

    // slen: size of f, g and of the reduced F, G.
    // dlen: size of F, G from the deeper level.
    // llen: size of the unreduced F, G.
    let slen = MAX_BL_SMALL[depth];
    let dlen = MAX_BL_SMALL[depth + 1];
    let llen = MAX_BL_LARGE[depth];

    let (mut ft, mut gt) = make_fg(f, g, logn_top, depth, true);

    let mut big_ft = vec![0u32; n * llen];
    let mut big_gt = vec![0u32; n * llen];
    reduce_to_rns(&mut big_ft, fd, dlen, llen, hn);
    reduce_to_rns(&mut big_gt, gd, dlen, llen, hn);

    let mut gm = vec![0u32; n];
    let mut igm = vec![0u32; n];
    let mut fx = vec![0u32; n];
    let mut gx = vec![0u32; n];
    let mut fp = vec![0u32; hn];
    let mut gp = vec![0u32; hn];

    for u in 0..llen {
        let sp = PRIMES[u];
        let mp = Modp::new(sp.p);

        // The first slen words of f and g are in NTT form; once they have
        // all been read, rebuild the plain values.
        if u == slen {
            zint::rebuild_crt(&mut ft, slen, slen, n, true);
            zint::rebuild_crt(&mut gt, slen, slen, n, true);
        }

        mp.mkgm2(&mut gm, &mut igm, logn, sp.g);

        if u < slen {
            for v in 0..n {
                fx[v] = ft[v * slen + u];
                gx[v] = gt[v * slen + u];
            }
            mp.intt2_ext(&mut ft[u..], slen, &igm, logn);
            mp.intt2_ext(&mut gt[u..], slen, &igm, logn);
        } else {
            let rx = mp.rx(slen as u32);
            for v in 0..n {
                fx[v] = zint::mod_small_signed(&ft[v * slen..(v + 1) * slen], &mp, rx);
                gx[v] = zint::mod_small_signed(&gt[v * slen..(v + 1) * slen], &mp, rx);
            }
            mp.ntt2(&mut fx, &gm, logn);
            mp.ntt2(&mut gx, &gm, logn);
        }

        for v in 0..hn {
            fp[v] = big_ft[v * llen + u];
            gp[v] = big_gt[v * llen + u];
        }
        mp.ntt2(&mut fp, &gm, logn - 1);
        mp.ntt2(&mut gp, &gm, logn - 1);

        lift_fg_ntt(&mut big_ft, &mut big_gt, u, llen, &fx, &gx, &fp, &gp, &mp);
        mp.intt2_ext(&mut big_ft[u..], llen, &igm, logn);
        mp.intt2_ext(&mut big_gt[u..], llen, &igm, logn);
    }

    zint::rebuild_crt(&mut big_ft, llen, llen, n, true);
    zint::rebuild_crt(&mut big_gt, llen, llen, n, true);

    // Babai reduction. (f, g) are converted to floating point from their
    // top 10 words at most, and 1/(f*adj(f) + g*adj(g)) is computed once.
    // Each iteration then computes k = (F*adj(f) + G*adj(g)) / (f*adj(f) +
    // g*adj(g)) from the top words of (F, G), scaled so that it fits on 31
    // bits, and subtracts k*(f, g). The size of (F, G) is never measured;
    // each iteration is assumed to shave at least 25 bits.
    let mut rt1 = vec![Fpr::ZERO; n];
    let mut rt2 = vec![Fpr::ZERO; n];
    let mut rt3 = vec![Fpr::ZERO; n];
    let mut rt4 = vec![Fpr::ZERO; n];
    let mut rt5 = vec![Fpr::ZERO; hn];
    let mut k = vec![0i32; n];

    let rlen = slen.min(10);
    poly_big_to_fp(&mut rt3, &ft[slen - rlen..], rlen, slen, logn);
    poly_big_to_fp(&mut rt4, &gt[slen - rlen..], rlen, slen, logn);
    let scale_fg = 31 * (slen - rlen) as i32;

    // Bounds on the bit length of (f, g): mean plus or minus six standard
    // deviations.
    let minbl_fg = BITLENGTH_AVG[depth] - 6 * BITLENGTH_STD[depth];
    let maxbl_fg = BITLENGTH_AVG[depth] + 6 * BITLENGTH_STD[depth];

    fft(&mut rt3, logn);
    fft(&mut rt4, logn);
    poly_invnorm2_fft(&mut rt5, &rt3, &rt4, logn);
    poly_adj_fft(&mut rt3, logn);
    poly_adj_fft(&mut rt4, logn);

    let mut fg_len = llen;
    let mut maxbl_big_fg = 31 * llen as i32;
    let mut scale_k = maxbl_big_fg - minbl_fg;

    loop {
        let rlen = fg_len.min(10);
        let scale_big_fg = 31 * (fg_len - rlen) as i32;
        poly_big_to_fp(&mut rt1, &big_ft[fg_len - rlen..], rlen, llen, logn);
        poly_big_to_fp(&mut rt2, &big_gt[fg_len - rlen..], rlen, llen, logn);

        fft(&mut rt1, logn);
        fft(&mut rt2, logn);
        poly_mul_fft(&mut rt1, &rt3, logn);
        poly_mul_fft(&mut rt2, &rt4, logn);
        poly_add(&mut rt2, &rt1, logn);
        poly_mul_autoadj_fft(&mut rt2, &rt5, logn);
        ifft(&mut rt2, logn);

        // rt2 is scaled by 2^(scale_big_fg - scale_fg); rescale it to
        // 2^scale_k. dc is public, so a variable-time power is fine.
        let mut dc = scale_k - scale_big_fg + scale_fg;
        let mut pt = if dc < 0 {
            dc = -dc;
            Fpr::TWO
        } else {
            Fpr::ONEHALF
        };
        let mut pdc = Fpr::ONE;
        while dc != 0 {
            if dc & 1 != 0 {
                pdc = pdc * pt;
            }
            dc >>= 1;
            pt = pt.sqr();
        }

        for (ku, &r) in k.iter_mut().zip(rt2.iter()) {
            let xv = r * pdc;

            // Out of range means the reduction went wrong; (f, g) is
            // discarded, so leaking this is harmless.
            if !Fpr::MTWO31M1.lt(xv) || !xv.lt(Fpr::PTWO31M1) {
                return None;
            }
            *ku = xv.rint() as i32;
        }

        let sch = (scale_k / 31) as usize;
        let scl = (scale_k % 31) as u32;
        if depth <= DEPTH_INT_FG {
            poly_sub_scaled_ntt(&mut big_ft, fg_len, llen, &ft, slen, slen, &k, sch, scl, logn);
            poly_sub_scaled_ntt(&mut big_gt, fg_len, llen, &gt, slen, slen, &k, sch, scl, logn);
        } else {
            poly_sub_scaled(&mut big_ft, fg_len, llen, &ft, slen, slen, &k, sch, scl, logn);
            poly_sub_scaled(&mut big_gt, fg_len, llen, &gt, slen, slen, &k, sch, scl, logn);
        }

        // New bound on the size of (F, G), assuming (f, g) at its maximum.
        let new_maxbl_big_fg = scale_k + maxbl_fg + 10;
        if new_maxbl_big_fg < maxbl_big_fg {
            maxbl_big_fg = new_maxbl_big_fg;
            if fg_len as i32 * 31 >= maxbl_big_fg + 31 {
                fg_len -= 1;
            }
        }

        if scale_k <= 0 {
            break;
        }
        scale_k = (scale_k - 25).max(0);
    }

    // If the length went below slen, sign-extend back to slen words.
    if fg_len < slen {
        for u in 0..n {
            for big in [&mut big_ft, &mut big_gt] {
                let base = u * llen;
                let sw = (big[base + fg_len - 1] >> 30).wrapping_neg() >> 1;
                big[base + fg_len..base + slen].fill(sw);
            }
        }
    }

    let mut big_f = Vec::with_capacity(n * slen);
    let mut big_g = Vec::with_capacity(n * slen);
    for u in 0..n {
        big_f.extend_from_slice(&big_ft[u * llen..u * llen + slen]);
        big_g.extend_from_slice(&big_gt[u * llen..u * llen + slen]);
    }

    big_ft.zeroize();
    big_gt.zeroize();
    ft.zeroize();
    gt.zeroize();
    Some((big_f, big_g))
}

/// Depth 1 in the binary case. The unreduced F and G fit in 53 bits after
/// CRT, so a single floating-point Babai pass suffices. Returns F and G
/// with one word (a plain `i32`) per coefficient.
fn solve_binary_depth1(
    logn_top: u32,
    f: &[i8],
    g: &[i8],
    fd: &[u32],
    gd: &[u32],
) -> Option<(Vec<u32>, Vec<u32>)> {
    let depth = 1;
    let n_top = 1usize << logn_top;
    let logn = logn_top - 1;
    let n = 1usize << logn;
    let hn = n >> 1;

    let slen = MAX_BL_SMALL[depth];
    let dlen = MAX_BL_SMALL[depth + 1];
    let llen = MAX_BL_LARGE[depth];

    let mut big_ft = vec![0u32; n * llen];
    let mut big_gt = vec![0u32; n * llen];
    reduce_to_rns(&mut big_ft, fd, dlen, llen, hn);
    reduce_to_rns(&mut big_gt, gd, dlen, llen, hn);

    let mut ft = vec![0u32; n * slen];
    let mut gt = vec![0u32; n * slen];

    // The tables are built for the top degree; their first entries are the
    // tables for any lower degree.
    let mut gm = vec![0u32; n_top];
    let mut igm = vec![0u32; n_top];
    let mut fx = vec![0u32; n_top];
    let mut gx = vec![0u32; n_top];
    let mut fp = vec![0u32; hn];
    let mut gp = vec![0u32; hn];

    for u in 0..llen {
        let sp = PRIMES[u];
        let mp = Modp::new(sp.p);
        mp.mkgm2(&mut gm, &mut igm, logn_top, sp.g);

        // f and g at this depth, recomputed from the full-degree source.
        for v in 0..n_top {
            fx[v] = mp.set(f[v] as i32);
            gx[v] = mp.set(g[v] as i32);
        }
        mp.ntt2(&mut fx, &gm, logn_top);
        mp.ntt2(&mut gx, &gm, logn_top);
        for e in (logn + 1..=logn_top).rev() {
            mp.poly_rec_res(&mut fx, e);
            mp.poly_rec_res(&mut gx, e);
        }

        for v in 0..hn {
            fp[v] = big_ft[v * llen + u];
            gp[v] = big_gt[v * llen + u];
        }
        mp.ntt2(&mut fp, &gm, logn - 1);
        mp.ntt2(&mut gp, &gm, logn - 1);

        lift_fg_ntt(&mut big_ft, &mut big_gt, u, llen, &fx, &gx, &fp, &gp, &mp);
        mp.intt2_ext(&mut big_ft[u..], llen, &igm, logn);
        mp.intt2_ext(&mut big_gt[u..], llen, &igm, logn);

        if u < slen {
            mp.intt2(&mut fx[..n], &igm, logn);
            mp.intt2(&mut gx[..n], &igm, logn);
            for v in 0..n {
                ft[v * slen + u] = fx[v];
                gt[v * slen + u] = gx[v];
            }
        }
    }

    zint::rebuild_crt(&mut big_ft, llen, llen, n, true);
    zint::rebuild_crt(&mut big_gt, llen, llen, n, true);
    zint::rebuild_crt(&mut ft, slen, slen, n, true);
    zint::rebuild_crt(&mut gt, slen, slen, n, true);

    let mut rt1 = vec![Fpr::ZERO; n];
    let mut rt2 = vec![Fpr::ZERO; n];
    let mut rt3 = vec![Fpr::ZERO; n];
    let mut rt4 = vec![Fpr::ZERO; n];
    poly_big_to_fp(&mut rt1, &big_ft, llen, llen, logn);
    poly_big_to_fp(&mut rt2, &big_gt, llen, llen, logn);
    poly_big_to_fp(&mut rt3, &ft, slen, slen, logn);
    poly_big_to_fp(&mut rt4, &gt, slen, slen, logn);
    big_ft.zeroize();
    big_gt.zeroize();
    ft.zeroize();
    gt.zeroize();

    fft(&mut rt1, logn);
    fft(&mut rt2, logn);
    fft(&mut rt3, logn);
    fft(&mut rt4, logn);

    // k = round((F*adj(f) + G*adj(g)) / (f*adj(f) + g*adj(g)))
    let mut rt5 = vec![Fpr::ZERO; n];
    let mut rt6 = vec![Fpr::ZERO; hn];
    poly_add_muladj_fft(&mut rt5, &rt1, &rt2, &rt3, &rt4, logn);
    poly_invnorm2_fft(&mut rt6, &rt3, &rt4, logn);
    poly_mul_autoadj_fft(&mut rt5, &rt6, logn);
    ifft(&mut rt5, logn);
    for z in rt5.iter_mut() {
        if !z.lt(Fpr::PTWO63M1) || !Fpr::MTWO63M1.lt(*z) {
            return None;
        }
        *z = Fpr::of(z.rint());
    }
    fft(&mut rt5, logn);

    poly_mul_fft(&mut rt3, &rt5, logn);
    poly_mul_fft(&mut rt4, &rt5, logn);
    poly_sub(&mut rt1, &rt3, logn);
    poly_sub(&mut rt2, &rt4, logn);
    ifft(&mut rt1, logn);
    ifft(&mut rt2, logn);

    let big_f = rt1.iter().map(|x| x.rint() as u32).collect();
    let big_g = rt2.iter().map(|x| x.rint() as u32).collect();
    Some((big_f, big_g))
}

/// Top level in the binary case. Everything fits modulo the first prime,
/// so the lift and the Babai reduction both run in the NTT over that prime
/// (with one floating-point division for k).
fn solve_binary_depth0(
    logn: u32,
    f: &[i8],
    g: &[i8],
    fd: &[u32],
    gd: &[u32],
) -> (Vec<u32>, Vec<u32>) {
    let n = 1usize << logn;
    let hn = n >> 1;
    let sp = PRIMES[0];
    let mp = Modp::new(sp.p);

    let mut gm = vec![0u32; n];
    let mut igm = vec![0u32; n];
    mp.mkgm2(&mut gm, &mut igm, logn, sp.g);

    let to_ntt = |src: &[i8]| {
        let mut t: Vec<u32> = src.iter().map(|&x| mp.set(x as i32)).collect();
        mp.ntt2(&mut t, &gm, logn);
        t
    };
    let to_ntt_adj = |src: &[i8]| {
        let mut t = vec![0u32; n];
        t[0] = mp.set(src[0] as i32);
        for u in 1..n {
            t[n - u] = mp.set(-(src[u] as i32));
        }
        mp.ntt2(&mut t, &gm, logn);
        t
    };

    let mut fp: Vec<u32> = fd[..hn].iter().map(|&w| mp.set(zint::one_to_plain(w))).collect();
    let mut gp: Vec<u32> = gd[..hn].iter().map(|&w| mp.set(zint::one_to_plain(w))).collect();
    mp.ntt2(&mut fp, &gm, logn - 1);
    mp.ntt2(&mut gp, &gm, logn - 1);

    // Unreduced F and G, in NTT form.
    let f_ntt = to_ntt(f);
    let g_ntt = to_ntt(g);
    let mut big_f = vec![0u32; n];
    let mut big_g = vec![0u32; n];
    lift_fg_ntt(&mut big_f, &mut big_g, 0, 1, &f_ntt, &g_ntt, &fp, &gp, &mp);

    // F*adj(f) + G*adj(g) and f*adj(f) + g*adj(g), modulo p.
    let mut num = vec![0u32; n];
    let mut den = vec![0u32; n];
    let fa = to_ntt_adj(f);
    for u in 0..n {
        let w = mp.montymul(fa[u], mp.r2);
        num[u] = mp.montymul(w, big_f[u]);
        den[u] = mp.montymul(w, f_ntt[u]);
    }
    let ga = to_ntt_adj(g);
    for u in 0..n {
        let w = mp.montymul(ga[u], mp.r2);
        num[u] = mp.add(num[u], mp.montymul(w, big_g[u]));
        den[u] = mp.add(den[u], mp.montymul(w, g_ntt[u]));
    }
    mp.intt2(&mut num, &igm, logn);
    mp.intt2(&mut den, &igm, logn);

    // The quotient is not integral: divide in FFT form and round. The
    // denominator is auto-adjoint, so only the real halves are kept.
    let mut rt3: Vec<Fpr> = den.iter().map(|&x| Fpr::of(mp.norm(x) as i64)).collect();
    fft(&mut rt3, logn);
    let rt2 = rt3[..hn].to_vec();
    let mut rt3: Vec<Fpr> = num.iter().map(|&x| Fpr::of(mp.norm(x) as i64)).collect();
    fft(&mut rt3, logn);
    poly_div_autoadj_fft(&mut rt3, &rt2, logn);
    ifft(&mut rt3, logn);

    let mut k: Vec<u32> = rt3.iter().map(|x| mp.set(x.rint() as i32)).collect();
    mp.ntt2(&mut k, &gm, logn);

    for u in 0..n {
        let kw = mp.montymul(k[u], mp.r2);
        big_f[u] = mp.sub(big_f[u], mp.montymul(kw, f_ntt[u]));
        big_g[u] = mp.sub(big_g[u], mp.montymul(kw, g_ntt[u]));
    }
    mp.intt2(&mut big_f, &igm, logn);
    mp.intt2(&mut big_g, &igm, logn);
    for x in big_f.iter_mut().chain(big_g.iter_mut()) {
        *x = mp.norm(*x) as u32;
    }

    num.zeroize();
    den.zeroize();
    k.zeroize();
    (big_f, big_g)
}

// ============================================================================
// Entry point
// ============================================================================

/// Solves the NTRU equation `f*G - g*F = q` for the given f and g.
///
/// Returns `None` when there is no solution (typically because the
/// resultants of f and g are not coprime), when an intermediate value goes
/// out of range, or when a coefficient of F or G exceeds `lim` in absolute
/// value. The returned pair is checked against the equation modulo a
/// 31-bit prime.
pub fn solve_ntru(f: &[i8], g: &[i8], logn: u32, lim: i32) -> Option<(Vec<i8>, Vec<i8>)> {
    let n = 1usize << logn;
    let (mut big_f, mut big_g) = solve_deepest(logn, f, g)?;

    // For logn <= 2 the coefficients are too large for the specialized top
    // levels.
    if logn <= 2 {
        for depth in (0..logn as usize).rev() {
            (big_f, big_g) = solve_intermediate(logn, f, g, depth, &big_f, &big_g)?;
        }
    } else {
        for depth in (2..logn as usize).rev() {
            (big_f, big_g) = solve_intermediate(logn, f, g, depth, &big_f, &big_g)?;
        }
        (big_f, big_g) = solve_binary_depth1(logn, f, g, &big_f, &big_g)?;
        (big_f, big_g) = solve_binary_depth0(logn, f, g, &big_f, &big_g);
    }

    let small_f = poly_big_to_small(&big_f, lim, logn);
    let small_g = poly_big_to_small(&big_g, lim, logn);
    big_f.zeroize();
    big_g.zeroize();
    let (small_f, small_g) = (small_f?, small_g?);

    // All values are short, so checking modulo one prime is exact enough.
    let sp = PRIMES[0];
    let mp = Modp::new(sp.p);
    let mut gm = vec![0u32; n];
    let mut igm = vec![0u32; n];
    mp.mkgm2(&mut gm, &mut igm, logn, sp.g);
    let to_ntt = |src: &[i8]| {
        let mut t: Vec<u32> = src.iter().map(|&x| mp.set(x as i32)).collect();
        mp.ntt2(&mut t, &gm, logn);
        t
    };
    let ft = to_ntt(f);
    let gt = to_ntt(g);
    let big_ft = to_ntt(&small_f);
    let big_gt = to_ntt(&small_g);

    // Plain products come out divided by R.
    let r = mp.montymul(Q, 1);
    for u in 0..n {
        let z = mp.sub(mp.montymul(ft[u], big_gt[u]), mp.montymul(gt[u], big_ft[u]));
        if z != r {
            return None;
        }
    }
    Some((small_f, small_g))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keygen::poly_small_mkgauss;
    use crate::shake::Shake256;
    use num_bigint::BigInt;
    use num_traits::{One, Zero};

    /// Exact product in Z[X]/(X^n+1).
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

    fn words_to_bigint(x: &[u32]) -> BigInt {
        let mut v = BigInt::zero();
        for &w in x.iter().rev() {
            v = (v << 31) + BigInt::from(w);
        }
        if x.last().map_or(false, |&t| t & 0x4000_0000 != 0) {
            v -= BigInt::one() << (31 * x.len());
        }
        v
    }

    fn sample_fg(seed: &[u8], logn: u32) -> (Vec<i8>, Vec<i8>) {
        let mut rng = Shake256::digest_xof(&[seed]);
        let n = 1usize << logn;
        let mut f = vec![0i8; n];
        let mut g = vec![0i8; n];
        poly_small_mkgauss(&mut rng, &mut f, logn);
        poly_small_mkgauss(&mut rng, &mut g, logn);
        (f, g)
    }

    #[test]
    fn test_make_fg_one_step_is_field_norm() {
        let logn = 4;
        let (f, g) = sample_fg(b"make_fg", logn);
        let (fd, gd) = make_fg(&f, &g, logn, 1, false);
        let hn = 8;
        assert_eq!(fd.len(), hn * MAX_BL_SMALL[1]);

        // N(f)(y) = f0(y)^2 - y*f1(y)^2 with f = f0(x^2) + x*f1(x^2).
        for (src, out) in [(&f, &fd), (&g, &gd)] {
            let f0: Vec<i8> = (0..hn).map(|i| src[2 * i]).collect();
            let f1: Vec<i8> = (0..hn).map(|i| src[2 * i + 1]).collect();
            let e2 = negacyclic_mul(&f0, &f0);
            let o2 = negacyclic_mul(&f1, &f1);
            for i in 0..hn {
                let xo = if i == 0 { -o2[hn - 1] } else { o2[i - 1] };
                let want = e2[i] - xo;
                let got = Modp::new(PRIMES[0].p).norm(out[i]) as i64;
                assert_eq!(got, want, "coefficient {}", i);
            }
        }
    }

    #[test]
    fn test_deepest_solves_resultant_equation() {
        for attempt in 0..20u8 {
            let logn = 5;
            let (f, g) = sample_fg(&[b'd', attempt], logn);
            let len = MAX_BL_SMALL[logn as usize];
            let (mut rf, mut rg) = make_fg(&f, &g, logn, logn as usize, false);
            zint::rebuild_crt(&mut rf, len, len, 1, false);
            zint::rebuild_crt(&mut rg, len, len, 1, false);
            if let Some((big_f, big_g)) = solve_deepest(logn, &f, &g) {
                let lhs = words_to_bigint(&rf) * words_to_bigint(&big_g)
                    - words_to_bigint(&rg) * words_to_bigint(&big_f);
                assert_eq!(lhs, BigInt::from(Q));
                return;
            }
        }
        panic!("no coprime resultants in 20 attempts");
    }

    fn check_solve(logn: u32, tag: u8) {
        let n = 1usize << logn;
        for attempt in 0..40u8 {
            let (f, g) = sample_fg(&[b's', tag, attempt], logn);
            if let Some((big_f, big_g)) = solve_ntru(&f, &g, logn, 127) {
                assert_eq!(big_f.len(), n);
                let fg = negacyclic_mul(&f, &big_g);
                let gf = negacyclic_mul(&g, &big_f);
                for i in 0..n {
                    let want = if i == 0 { Q as i64 } else { 0 };
                    assert_eq!(fg[i] - gf[i], want, "logn {} coefficient {}", logn, i);
                }
                return;
            }
        }
        panic!("solve_ntru never succeeded for logn = {}", logn);
    }

    #[test]
    fn test_solve_ntru_small_degrees() {
        // logn <= 2 uses the generic levels all the way up.
        for logn in 2..=6 {
            check_solve(logn, logn as u8);
        }
    }

    #[test]
    fn test_solve_ntru_falcon_512() {
        check_solve(9, 9);
    }

    #[test]
    fn test_solve_rejects_even_resultant() {
        // All-even f has an even resultant; the GCD step must fail.
        let logn = 4;
        let (_, g) = sample_fg(b"even", logn);
        let f = vec![2i8; 16];
        assert!(solve_ntru(&f, &g, logn, 127).is_none());
    }

    #[test]
    fn test_poly_big_to_fp_scaled_window() {
        // Two coefficients of 3 words: 5 + 2^62 and -(2^31).
        let words = [5u32, 0, 1, 0, 0x7FFF_FFFF, 0x7FFF_FFFF];
        let mut d = [Fpr::ZERO; 2];
        poly_big_to_fp(&mut d, &words, 3, 3, 1);
        assert_eq!(d[0].to_f64(), 5.0 + 2f64.powi(62));
        assert_eq!(d[1].to_f64(), -(2f64.powi(31)));

        // Top word only, scaled down by 2^62.
        poly_big_to_fp(&mut d, &words[2..], 1, 3, 1);
        assert_eq!(d[0].to_f64(), 1.0);
        assert_eq!(d[1].to_f64(), -1.0);
    }
}
