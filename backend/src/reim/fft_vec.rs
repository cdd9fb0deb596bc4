use itertools::izip;

/// Pointwise complex product of two interleaved frequency buffers:
/// `res[k] = a[k] * b[k]`.
pub fn fftvec_mul(res: &mut [f64], a: &[f64], b: &[f64]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(a.len(), res.len());
        assert_eq!(b.len(), res.len());
        assert!(res.len().is_multiple_of(2));
    }

    for (r, a, b) in izip!(res.chunks_exact_mut(2), a.chunks_exact(2), b.chunks_exact(2)) {
        let (ar, ai) = (a[0], a[1]);
        let (br, bi) = (b[0], b[1]);
        r[0] = ar * br - ai * bi;
        r[1] = ar * bi + ai * br;
    }
}

/// Pointwise complex multiply-accumulate of two interleaved frequency
/// buffers: `res[k] += a[k] * b[k]`.
pub fn fftvec_addmul(res: &mut [f64], a: &[f64], b: &[f64]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(a.len(), res.len());
        assert_eq!(b.len(), res.len());
        assert!(res.len().is_multiple_of(2));
    }

    for (r, a, b) in izip!(res.chunks_exact_mut(2), a.chunks_exact(2), b.chunks_exact(2)) {
        let (ar, ai) = (a[0], a[1]);
        let (br, bi) = (b[0], b[1]);
        r[0] += ar * br - ai * bi;
        r[1] += ar * bi + ai * br;
    }
}
