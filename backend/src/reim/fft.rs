/// In-place forward transform over split re/im halves of length `m`.
///
/// Decimation in frequency: input in natural order, output in bit-reversed
/// order. `omg` is the table built by [`crate::reim::FftTable`].
pub fn fft_ref(m: usize, omg: &[f64], re: &mut [f64], im: &mut [f64]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(re.len(), m);
        assert_eq!(im.len(), m);
        assert_eq!(omg.len(), 2 * (m - 1));
    }

    let mut pos: usize = 0;
    let mut len: usize = m;
    while len >= 2 {
        let h: usize = len >> 1;
        for off in (0..m).step_by(len) {
            let (re_lo, re_hi) = re[off..off + len].split_at_mut(h);
            let (im_lo, im_hi) = im[off..off + len].split_at_mut(h);
            for j in 0..h {
                cplx_twiddle_dif(
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
        len = h;
    }
}

/// DIF butterfly: `a' = a + b`, `b' = (a - b) * omg`.
#[inline(always)]
fn cplx_twiddle_dif(ra: &mut f64, ia: &mut f64, rb: &mut f64, ib: &mut f64, omg_re: f64, omg_im: f64) {
    let sr: f64 = *ra + *rb;
    let si: f64 = *ia + *ib;
    let dr: f64 = *ra - *rb;
    let di: f64 = *ia - *ib;
    *ra = sr;
    *ia = si;
    *rb = dr * omg_re - di * omg_im;
    *ib = dr * omg_im + di * omg_re;
}
