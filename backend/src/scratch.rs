use crate::{DEFAULTALIGN, alloc_aligned};

/// Owned scratch arena, sized once at construction and reused for every
/// transform call. Contents are undefined between calls.
pub struct ScratchOwned {
    data: Vec<u8>,
}

/// Borrowed view over scratch bytes from which aligned typed slices are
/// carved off the front.
pub struct Scratch {
    data: [u8],
}

impl ScratchOwned {
    /// Allocates `size` aligned bytes of scratch.
    pub fn alloc(size: usize) -> Self {
        Self {
            data: alloc_aligned(size),
        }
    }

    pub fn borrow(&mut self) -> &mut Scratch {
        Scratch::from_bytes(&mut self.data)
    }
}

impl Scratch {
    /// Wraps mutable borrowed bytes into a [`Scratch`].
    pub fn from_bytes(data: &mut [u8]) -> &mut Scratch {
        unsafe { &mut *(data as *mut [u8] as *mut Scratch) }
    }

    /// Returns how many aligned bytes are left to take.
    pub fn available(&self) -> usize {
        let ptr: *const u8 = self.data.as_ptr();
        let aligned_offset: usize = ptr.align_offset(DEFAULTALIGN);
        self.data.len().saturating_sub(aligned_offset)
    }

    /// Takes an aligned `&mut [T]` of `len` elements from the front and
    /// returns it together with the remaining scratch.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `len * size_of::<T>()` aligned bytes are left.
    pub fn take_slice<T>(&mut self, len: usize) -> (&mut [T], &mut Scratch) {
        let (take_slice, rem_slice) = take_slice_aligned(&mut self.data, len * size_of::<T>());
        unsafe {
            (
                &mut *(std::ptr::slice_from_raw_parts_mut(take_slice.as_mut_ptr() as *mut T, len)),
                Scratch::from_bytes(rem_slice),
            )
        }
    }
}

fn take_slice_aligned(data: &mut [u8], take_len: usize) -> (&mut [u8], &mut [u8]) {
    let ptr: *mut u8 = data.as_mut_ptr();
    let self_len: usize = data.len();

    let aligned_offset: usize = ptr.align_offset(DEFAULTALIGN);
    let aligned_len: usize = self_len.saturating_sub(aligned_offset);

    if let Some(rem_len) = aligned_len.checked_sub(take_len) {
        unsafe {
            let take_ptr: *mut u8 = ptr.add(aligned_offset);
            let take_slice: &mut [u8] = &mut *std::ptr::slice_from_raw_parts_mut(take_ptr, take_len);
            let rem_slice: &mut [u8] =
                &mut *std::ptr::slice_from_raw_parts_mut(take_ptr.add(take_len), rem_len);
            (take_slice, rem_slice)
        }
    } else {
        panic!("attempted to take {take_len} bytes from scratch with {aligned_len} aligned bytes left")
    }
}
