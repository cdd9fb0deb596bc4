use crate::{
    ComplexKernel, DEFAULTALIGN, Scratch,
    reim::{FftTable, IfftTable, fft_ref, ifft_ref},
};

/// Reference [`ComplexKernel`]: twiddle tables built once at construction,
/// radix-2 butterflies over split re/im halves.
///
/// The interleaved call-contract buffer is de-interleaved into the caller's
/// scratch (real half first, imaginary half second), transformed there, and
/// re-interleaved, so the scratch requirement is one split copy of the
/// buffer: `2m` doubles rounded up to the alignment quantum.
pub struct ReimFft {
    m: usize,
    table_fft: FftTable,
    table_ifft: IfftTable,
}

impl ComplexKernel for ReimFft {
    fn new(m: usize) -> Self {
        assert!(
            m.is_power_of_two() && m >= 2,
            "m must be a power of two >= 2 but is {m}"
        );
        Self {
            m,
            table_fft: FftTable::new(m),
            table_ifft: IfftTable::new(m),
        }
    }

    fn m(&self) -> usize {
        self.m
    }

    fn fft_tmp_bytes(&self) -> usize {
        (2 * self.m * size_of::<f64>()).next_multiple_of(DEFAULTALIGN)
    }

    fn fft(&self, data: &mut [f64], scratch: &mut Scratch) {
        let m: usize = self.m;
        assert_eq!(data.len(), 2 * m, "data must hold {} doubles but holds {}", 2 * m, data.len());
        let (buf, _) = scratch.take_slice::<f64>(2 * m);
        let (re, im) = buf.split_at_mut(m);
        deinterleave(data, re, im);
        fft_ref(m, self.table_fft.omg(), re, im);
        interleave(re, im, data);
    }

    fn ifft(&self, data: &mut [f64], scratch: &mut Scratch) {
        let m: usize = self.m;
        assert_eq!(data.len(), 2 * m, "data must hold {} doubles but holds {}", 2 * m, data.len());
        let (buf, _) = scratch.take_slice::<f64>(2 * m);
        let (re, im) = buf.split_at_mut(m);
        deinterleave(data, re, im);
        ifft_ref(m, self.table_ifft.omg(), re, im);
        interleave(re, im, data);
    }
}

#[inline(always)]
fn deinterleave(data: &[f64], re: &mut [f64], im: &mut [f64]) {
    for k in 0..re.len() {
        re[k] = data[2 * k];
        im[k] = data[2 * k + 1];
    }
}

#[inline(always)]
fn interleave(re: &[f64], im: &[f64], data: &mut [f64]) {
    for k in 0..re.len() {
        data[2 * k] = re[k];
        data[2 * k + 1] = im[k];
    }
}
