use std::f64::consts::PI;

use crate::alloc_aligned;

/// Forward twiddle table: one `(cos, sin)` pair per butterfly angle, laid
/// out stage by stage from length `m` down to length 2, matching the
/// traversal order of [`crate::reim::fft_ref`]. `2(m - 1)` doubles total.
pub struct FftTable {
    m: usize,
    omg: Vec<f64>,
}

impl FftTable {
    pub fn new(m: usize) -> Self {
        assert!(
            m.is_power_of_two() && m >= 2,
            "m must be a power of two >= 2 but is {m}"
        );
        let mut omg: Vec<f64> = alloc_aligned::<f64>(2 * (m - 1));
        let mut pos: usize = 0;
        let mut len: usize = m;
        while len >= 2 {
            let h: usize = len >> 1;
            for j in 0..h {
                let angle: f64 = -2.0 * PI * (j as f64) / (len as f64);
                omg[pos] = angle.cos();
                omg[pos + 1] = angle.sin();
                pos += 2;
            }
            len = h;
        }
        omg.truncate(2 * (m - 1));
        Self { m, omg }
    }

    pub fn m(&self) -> usize {
        self.m
    }

    pub fn omg(&self) -> &[f64] {
        &self.omg
    }
}
