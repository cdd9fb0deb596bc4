//! Complex-transform layer for the negacyclic torus FFT.
//!
//! This crate provides the pieces below the torus engine:
//!
//! - [`ComplexKernel`]: the narrow call contract for an unnormalized,
//!   in-place, fixed-length complex FFT consuming caller-supplied scratch.
//! - [`ReimFft`]: a pure-Rust reference kernel (twiddle tables built once,
//!   radix-2 butterflies over split re/im halves).
//! - [`Scratch`] / [`ScratchOwned`]: an aligned byte arena sized once and
//!   reused for every call, with arena-style typed carving.
//! - [`Source`]: a seeded PRNG for reproducible test data.
//!
//! All memory handed to the kernels is aligned to [`DEFAULTALIGN`] bytes.

mod kernel;
pub mod reim;
mod scratch;
mod source;

pub use kernel::*;
pub use reim::{FftTable, IfftTable, ReimFft, fftvec_addmul, fftvec_mul};
pub use scratch::*;
pub use source::*;

/// Alignment, in bytes, of every allocation handed to the kernels.
pub const DEFAULTALIGN: usize = 64;

fn alloc_aligned_u8(size: usize, align: usize) -> Vec<u8> {
    assert!(
        align.is_power_of_two(),
        "alignment must be a power of two but is {align}"
    );
    assert_eq!(size % align, 0, "size={size} must be a multiple of align={align}");
    unsafe {
        let layout: std::alloc::Layout =
            std::alloc::Layout::from_size_align(size, align).expect("invalid layout");
        let ptr: *mut u8 = std::alloc::alloc_zeroed(layout);
        if ptr.is_null() {
            std::alloc::handle_alloc_error(layout);
        }
        Vec::from_raw_parts(ptr, size, size)
    }
}

/// Allocates a zero-initialized `Vec<T>` aligned to [`DEFAULTALIGN`] bytes.
///
/// The allocation is padded so that the total byte size is a multiple of
/// [`DEFAULTALIGN`]. This is the allocation entry point for every table and
/// scratch buffer in the workspace.
///
/// # Panics
///
/// Panics if `T` is zero-sized.
pub fn alloc_aligned<T>(size: usize) -> Vec<T> {
    assert!(size_of::<T>() > 0, "alloc_aligned: zero-sized types are not supported");
    let bytes: usize = (size * size_of::<T>()).next_multiple_of(DEFAULTALIGN);
    let mut vec_u8: Vec<u8> = alloc_aligned_u8(bytes, DEFAULTALIGN);
    let ptr: *mut T = vec_u8.as_mut_ptr() as *mut T;
    let len: usize = vec_u8.len() / size_of::<T>();
    let cap: usize = vec_u8.capacity() / size_of::<T>();
    std::mem::forget(vec_u8);
    unsafe { Vec::from_raw_parts(ptr, len, cap) }
}
