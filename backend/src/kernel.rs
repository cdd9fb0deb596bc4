use crate::Scratch;

/// Call contract for the external complex-transform capability.
///
/// A kernel performs an unnormalized complex FFT of fixed length `m` in
/// place over an interleaved buffer of `2m` doubles, where the complex
/// sample `k` occupies positions `2k` (real) and `2k + 1` (imaginary).
/// The composition `ifft(fft(x))` yields `m * x`; the normalization is the
/// caller's responsibility. The internal ordering of the frequency domain
/// is unspecified: frequency buffers are only meaningful for pointwise
/// multiplication with each other and for [`ComplexKernel::ifft`].
///
/// Kernels are immutable after construction and never allocate per call;
/// whatever working memory they need is carved from the caller-supplied
/// scratch, whose minimum size they declare through
/// [`ComplexKernel::fft_tmp_bytes`].
pub trait ComplexKernel: Sized {
    /// Builds a kernel for transforms of length `m`.
    ///
    /// # Panics
    ///
    /// Panics if `m` is not a power of two greater than one.
    fn new(m: usize) -> Self;

    /// Transform length (number of complex samples).
    fn m(&self) -> usize;

    /// Minimum scratch bytes required by [`ComplexKernel::fft`] and
    /// [`ComplexKernel::ifft`]. Queried once at engine construction.
    fn fft_tmp_bytes(&self) -> usize;

    /// In-place unnormalized forward transform of `data` (`2m` doubles,
    /// interleaved).
    fn fft(&self, data: &mut [f64], scratch: &mut Scratch);

    /// In-place unnormalized inverse transform of `data` (`2m` doubles,
    /// interleaved).
    fn ifft(&self, data: &mut [f64], scratch: &mut Scratch);
}
