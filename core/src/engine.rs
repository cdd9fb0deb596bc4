use itertools::izip;
use torusfft_backend::{ComplexKernel, DEFAULTALIGN, ScratchOwned};

use crate::{
    convert::{f64_to_torus32, f64_to_torus64, f64_to_torus64_round, torus32_to_f64, torus64_to_f64},
    twist::TwistTable,
};

/// Negacyclic transform engine for one ring dimension `n`.
///
/// Owns one [`TwistTable`], one kernel instance and one scratch arena,
/// all sized once at construction and reused for every call. An engine is
/// thread-confined: it must never be invoked concurrently, which the
/// [`crate::EngineCache`] guarantees by handing out one engine per thread.
///
/// Forward transforms fill a caller-provided buffer of `n` doubles with an
/// opaque frequency-domain representation (unnormalized; the `2/n`
/// normalization is folded into the inverse path). Frequency buffers are
/// only meaningful as operands of
/// [`torusfft_backend::fftvec_mul`] / [`torusfft_backend::fftvec_addmul`]
/// and of the inverse transforms.
pub struct TorusFftEngine<K: ComplexKernel> {
    n: usize,
    m: usize,
    /// `2/n`, the inverse-path normalization combined with the untwist.
    normalization: f64,
    twist: TwistTable,
    kernel: K,
    scratch: ScratchOwned,
}

impl<K: ComplexKernel> TorusFftEngine<K> {
    /// Builds an engine for ring dimension `n`.
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
        let kernel: K = K::new(m);
        // Kernel requirement plus one working row for the inverse path.
        let tmp_bytes: usize = kernel.fft_tmp_bytes()
            + (n * size_of::<f64>()).next_multiple_of(DEFAULTALIGN)
            + DEFAULTALIGN;
        Self {
            n,
            m,
            normalization: 2.0 / (n as f64),
            twist: TwistTable::new(n),
            kernel,
            scratch: ScratchOwned::alloc(tmp_bytes),
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// Transform half-length (`n / 2`).
    pub fn m(&self) -> usize {
        self.m
    }

    /// Forward transform of `n` 32-bit torus coefficients.
    ///
    /// Packs `(a[k], a[n/2 + k])` into a complex sample, rotates it by
    /// twist factor `k` and runs the kernel forward transform in place
    /// over `res`. Exact: every reinterpreted `i32` widens losslessly.
    pub fn forward_torus32(&mut self, res: &mut [f64], a: &[u32]) {
        assert_eq!(a.len(), self.n, "input must hold {} coefficients but holds {}", self.n, a.len());
        assert_eq!(res.len(), self.n, "output must hold {} doubles but holds {}", self.n, res.len());

        let (lo, hi) = a.split_at(self.m);
        for (k, (x, y)) in izip!(lo, hi).enumerate() {
            let (w_re, w_im) = self.twist.at(k);
            let c_re: f64 = torus32_to_f64(*x);
            let c_im: f64 = torus32_to_f64(*y);
            res[2 * k] = c_re * w_re - c_im * w_im;
            res[2 * k + 1] = c_re * w_im + c_im * w_re;
        }
        self.kernel.fft(res, self.scratch.borrow());
    }

    /// Forward transform of `n` 64-bit torus coefficients.
    ///
    /// Same path as [`Self::forward_torus32`] with a 64-bit
    /// reinterpretation; widening is lossy beyond `2^53`.
    pub fn forward_torus64(&mut self, res: &mut [f64], a: &[u64]) {
        assert_eq!(a.len(), self.n, "input must hold {} coefficients but holds {}", self.n, a.len());
        assert_eq!(res.len(), self.n, "output must hold {} doubles but holds {}", self.n, res.len());

        let (lo, hi) = a.split_at(self.m);
        for (k, (x, y)) in izip!(lo, hi).enumerate() {
            let (w_re, w_im) = self.twist.at(k);
            let c_re: f64 = torus64_to_f64(*x);
            let c_im: f64 = torus64_to_f64(*y);
            res[2 * k] = c_re * w_re - c_im * w_im;
            res[2 * k + 1] = c_re * w_im + c_im * w_re;
        }
        self.kernel.fft(res, self.scratch.borrow());
    }

    /// Inverse transform to 32-bit torus coefficients, exact wraparound
    /// semantics.
    pub fn inverse_torus32(&mut self, res: &mut [u32], f: &[f64]) {
        assert_eq!(f.len(), self.n, "input must hold {} doubles but holds {}", self.n, f.len());
        assert_eq!(res.len(), self.n, "output must hold {} coefficients but holds {}", self.n, res.len());

        let scratch = self.scratch.borrow();
        let (buf, rem) = scratch.take_slice::<f64>(self.n);
        buf.copy_from_slice(f);
        self.kernel.ifft(buf, rem);

        let twist: &TwistTable = &self.twist;
        let normalization: f64 = self.normalization;
        let (lo, hi) = res.split_at_mut(self.m);
        for (k, (x, y)) in izip!(lo, hi).enumerate() {
            let (d_re, d_im) = untwist(twist, normalization, buf, k);
            *x = f64_to_torus32(d_re);
            *y = f64_to_torus32(d_im);
        }
    }

    /// Inverse transform to 32-bit torus coefficients, rescaled by
    /// `delta / 4` to extract a decomposition digit at a coarser modulus.
    pub fn inverse_torus32_rescale(&mut self, res: &mut [u32], f: &[f64], delta: f64) {
        assert_eq!(f.len(), self.n, "input must hold {} doubles but holds {}", self.n, f.len());
        assert_eq!(res.len(), self.n, "output must hold {} coefficients but holds {}", self.n, res.len());

        let scratch = self.scratch.borrow();
        let (buf, rem) = scratch.take_slice::<f64>(self.n);
        buf.copy_from_slice(f);
        self.kernel.ifft(buf, rem);

        let twist: &TwistTable = &self.twist;
        let normalization: f64 = self.normalization;
        let rescale: f64 = delta / 4.0;
        let (lo, hi) = res.split_at_mut(self.m);
        for (k, (x, y)) in izip!(lo, hi).enumerate() {
            let (d_re, d_im) = untwist(twist, normalization, buf, k);
            *x = f64_to_torus32(d_re / rescale);
            *y = f64_to_torus32(d_im / rescale);
        }
    }

    /// Inverse transform to 64-bit torus coefficients through the
    /// bit-exact conversion of [`crate::convert::f64_to_torus64`].
    pub fn inverse_torus64(&mut self, res: &mut [u64], f: &[f64]) {
        assert_eq!(f.len(), self.n, "input must hold {} doubles but holds {}", self.n, f.len());
        assert_eq!(res.len(), self.n, "output must hold {} coefficients but holds {}", self.n, res.len());

        let scratch = self.scratch.borrow();
        let (buf, rem) = scratch.take_slice::<f64>(self.n);
        buf.copy_from_slice(f);
        self.kernel.ifft(buf, rem);

        let twist: &TwistTable = &self.twist;
        let normalization: f64 = self.normalization;
        let (lo, hi) = res.split_at_mut(self.m);
        for (k, (x, y)) in izip!(lo, hi).enumerate() {
            let (d_re, d_im) = untwist(twist, normalization, buf, k);
            *x = f64_to_torus64(d_re);
            *y = f64_to_torus64(d_im);
        }
    }

    /// Inverse transform to 64-bit torus coefficients, rescaled by
    /// `delta / 4` with round-to-nearest; exactness is not required once a
    /// coarser digit is being extracted.
    pub fn inverse_torus64_rescale(&mut self, res: &mut [u64], f: &[f64], delta: f64) {
        assert_eq!(f.len(), self.n, "input must hold {} doubles but holds {}", self.n, f.len());
        assert_eq!(res.len(), self.n, "output must hold {} coefficients but holds {}", self.n, res.len());

        let scratch = self.scratch.borrow();
        let (buf, rem) = scratch.take_slice::<f64>(self.n);
        buf.copy_from_slice(f);
        self.kernel.ifft(buf, rem);

        let twist: &TwistTable = &self.twist;
        let normalization: f64 = self.normalization;
        let rescale: f64 = delta / 4.0;
        let (lo, hi) = res.split_at_mut(self.m);
        for (k, (x, y)) in izip!(lo, hi).enumerate() {
            let (d_re, d_im) = untwist(twist, normalization, buf, k);
            *x = f64_to_torus64_round(d_re / rescale);
            *y = f64_to_torus64_round(d_im / rescale);
        }
    }
}

/// Inverse twist of frequency sample `k`: multiply by the conjugate twist
/// factor and fold in the kernel normalization.
#[inline(always)]
fn untwist(twist: &TwistTable, normalization: f64, buf: &[f64], k: usize) -> (f64, f64) {
    let (w_re, w_im) = twist.at(k);
    let b_re: f64 = buf[2 * k];
    let b_im: f64 = buf[2 * k + 1];
    (
        (b_re * w_re + b_im * w_im) * normalization,
        (b_im * w_re - b_re * w_im) * normalization,
    )
}
