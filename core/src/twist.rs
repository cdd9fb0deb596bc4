use std::f64::consts::PI;

use torusfft_backend::alloc_aligned;

/// The `N/2` unit complex exponentials `e^(i pi k / N)` that turn a
/// negacyclic convolution of length `N` into a cyclic problem of length
/// `N/2`. Interleaved `(re, im)` pairs, immutable after construction;
/// `at(0) == (1, 0)`.
pub struct TwistTable {
    n: usize,
    w: Vec<f64>,
}

impl TwistTable {
    /// Builds the table for ring dimension `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is not a power of two >= 4.
    pub fn new(n: usize) -> Self {
        assert!(
            n.is_power_of_two() && n >= 4,
            "ring dimension must be a power of two >= 4 but is {n}"
        );
        let m: usize = n >> 1;
        let mut w: Vec<f64> = alloc_aligned::<f64>(2 * m);
        for k in 0..m {
            let angle: f64 = (k as f64) * PI / (n as f64);
            w[2 * k] = angle.cos();
            w[2 * k + 1] = angle.sin();
        }
        Self { n, w }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of twist factors (`n / 2`).
    pub fn m(&self) -> usize {
        self.n >> 1
    }

    /// Twist factor `k` as `(re, im)`.
    #[inline(always)]
    pub fn at(&self, k: usize) -> (f64, f64) {
        (self.w[2 * k], self.w[2 * k + 1])
    }
}
