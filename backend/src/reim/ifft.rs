/// In-place inverse transform over split re/im halves of length `m`.
///
/// Decimation in time with conjugate twiddles: input in the bit-reversed
/// order produced by [`crate::reim::fft_ref`], output in natural order.
/// Unnormalized: `ifft_ref(fft_ref(x)) = m * x`.
pub fn ifft_ref(m: usize, omg: &[f64], re: &mut [f64], im: &mut [f64]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(re.len(), m);
        assert_eq!(im.len(), m);
        assert_eq!(omg.len(), 2 * (m - 1));
    }

    let mut pos: usize = 0;
    let mut len: usize = 2;
    while len <= m {
        let h: usize = len >> 1;
        for off in (0..m).step_by(len) {
            let (re_lo, re_hi) = re[off..off + len].split_at_mut(h);
            let (im_lo, im_hi) = im[off..off + len].split_at_mut(h);
            for j in 0..h {
                cplx_twiddle_dit(
                    &mut re_lo[j],
                    &mut im_lo[j],
                    &mut re_hi[j],
                    &mut im_hi[j],
                    omg[pos + 2 * j],
                    omg[pos + 2 * j + 1],
                );
            }
        }
        pos += 2 * h;
        len <<= 1;
    }
}

/// DIT butterfly: `t = b * omg`, `a' = a + t`, `b' = a - t`.
#[inline(always)]
fn cplx_twiddle_dit(ra: &mut f64, ia: &mut f64, rb: &mut f64, ib: &mut f64, omg_re: f64, omg_im: f64) {
    let tr: f64 = *rb * omg_re - *ib * omg_im;
    let ti: f64 = *rb * omg_im + *ib * omg_re;
    *rb = *ra - tr;
    *ib = *ia - ti;
    *ra += tr;
    *ia += ti;
}
