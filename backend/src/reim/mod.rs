//! Reference complex FFT over split re/im halves, plus the interleaved
//! [`ReimFft`] kernel built on top of it.
//!
//! The forward transform is decimation-in-frequency (natural order in,
//! bit-reversed order out); the inverse is decimation-in-time with
//! conjugate twiddles (bit-reversed in, natural out). No reordering pass
//! is ever needed: the frequency domain is opaque to callers.

mod fft;
mod fft_vec;
mod ifft;
mod kernel;
mod table_fft;
mod table_ifft;

pub use fft::*;
pub use fft_vec::*;
pub use ifft::*;
pub use kernel::*;
pub use table_fft::*;
pub use table_ifft::*;

#[cfg(test)]
mod tests;
