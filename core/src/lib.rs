//! Negacyclic Fourier transform over the discretized torus.
//!
//! Polynomials live in `T[X]/(X^N + 1)` with coefficients on the torus:
//! fractions stored as `u32` or `u64` numerators over `2^32` / `2^64`,
//! wrapping by design. [`TorusFftEngine`] packs the `N` torus coefficients
//! of a polynomial into `N/2` complex samples pre-rotated by the
//! [`TwistTable`] roots of `-1`, hands them to a half-length complex FFT
//! kernel, and converts back on the inverse path, so that pointwise
//! products in the frequency domain realize negacyclic convolution.
//!
//! Engines are thread-confined; [`EngineCache`] hands out one engine per
//! (thread, ring dimension) without locking.

mod cache;
pub mod convert;
mod engine;
mod params;
mod twist;

pub use cache::*;
pub use engine::*;
pub use params::*;
pub use twist::*;
