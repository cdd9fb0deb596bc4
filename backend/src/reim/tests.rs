use rand_core::RngCore;

use crate::{
    ComplexKernel, ReimFft, ScratchOwned, Source,
    reim::{FftTable, IfftTable, fft_ref, fftvec_addmul, fftvec_mul, ifft_ref},
};

fn bit_rev(j: usize, log_m: usize) -> usize {
    j.reverse_bits() >> (usize::BITS as usize - log_m)
}

/// O(m^2) reference: X_j = sum_k x_k e^{-2pi i jk / m}.
fn dft_naive(re: &[f64], im: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let m: usize = re.len();
    let mut out_re: Vec<f64> = vec![0.0; m];
    let mut out_im: Vec<f64> = vec![0.0; m];
    for j in 0..m {
        let mut acc_re: f64 = 0.0;
        let mut acc_im: f64 = 0.0;
        for k in 0..m {
            let angle: f64 = -2.0 * std::f64::consts::PI * ((j * k % m) as f64) / (m as f64);
            let (c, s) = (angle.cos(), angle.sin());
            acc_re += re[k] * c - im[k] * s;
            acc_im += re[k] * s + im[k] * c;
        }
        out_re[j] = acc_re;
        out_im[j] = acc_im;
    }
    (out_re, out_im)
}

#[test]
fn fft_ref_matches_naive_dft() {
    let m: usize = 16;
    let log_m: usize = 4;
    let mut source: Source = Source::new([0u8; 32]);

    let mut re: Vec<f64> = (0..m).map(|_| source.next_f64(-1.0, 1.0)).collect();
    let mut im: Vec<f64> = (0..m).map(|_| source.next_f64(-1.0, 1.0)).collect();
    let (want_re, want_im) = dft_naive(&re, &im);

    let table: FftTable = FftTable::new(m);
    fft_ref(m, table.omg(), &mut re, &mut im);

    for j in 0..m {
        let r: usize = bit_rev(j, log_m);
        assert!(
            (re[r] - want_re[j]).abs() < 1e-9,
            "re[{j}]: have {} want {}",
            re[r],
            want_re[j]
        );
        assert!(
            (im[r] - want_im[j]).abs() < 1e-9,
            "im[{j}]: have {} want {}",
            im[r],
            want_im[j]
        );
    }
}

#[test]
fn ifft_ref_inverts_fft_ref_up_to_m() {
    let m: usize = 512;
    let mut source: Source = Source::new([1u8; 32]);

    let want: Vec<f64> = (0..2 * m).map(|_| source.next_f64(-1.0, 1.0)).collect();
    let (mut re, mut im) = {
        let (a, b) = want.split_at(m);
        (a.to_vec(), b.to_vec())
    };

    let table_fft: FftTable = FftTable::new(m);
    let table_ifft: IfftTable = IfftTable::new(m);
    fft_ref(m, table_fft.omg(), &mut re, &mut im);
    ifft_ref(m, table_ifft.omg(), &mut re, &mut im);

    let scale: f64 = 1.0 / (m as f64);
    for k in 0..m {
        assert!((re[k] * scale - want[k]).abs() < 1e-10);
        assert!((im[k] * scale - want[m + k]).abs() < 1e-10);
    }
}

#[test]
fn kernel_round_trip_interleaved() {
    let m: usize = 256;
    let kernel: ReimFft = ReimFft::new(m);
    let mut scratch: ScratchOwned = ScratchOwned::alloc(kernel.fft_tmp_bytes());
    let mut source: Source = Source::new([2u8; 32]);

    let want: Vec<f64> = (0..2 * m).map(|_| source.next_f64(-1.0, 1.0)).collect();
    let mut data: Vec<f64> = want.clone();

    kernel.fft(&mut data, scratch.borrow());
    kernel.ifft(&mut data, scratch.borrow());

    let scale: f64 = 1.0 / (m as f64);
    for k in 0..2 * m {
        assert!((data[k] * scale - want[k]).abs() < 1e-10);
    }
}

#[test]
fn fft_tables_start_at_unity() {
    let table: FftTable = FftTable::new(8);
    assert_eq!(table.omg()[0], 1.0);
    assert_eq!(table.omg()[1], 0.0);
    assert_eq!(table.omg().len(), 2 * 7);
    let table: IfftTable = IfftTable::new(8);
    assert_eq!(table.omg()[0], 1.0);
    assert_eq!(table.omg()[1], 0.0);
}

#[test]
#[should_panic(expected = "power of two")]
fn fft_table_rejects_non_power_of_two() {
    let _ = FftTable::new(12);
}

#[test]
fn fftvec_mul_and_addmul() {
    // (1 + 2i)(3 + 4i) = -5 + 10i, (0.5 - i)(-2 + i) = 0 + 2.5i
    let a: Vec<f64> = vec![1.0, 2.0, 0.5, -1.0];
    let b: Vec<f64> = vec![3.0, 4.0, -2.0, 1.0];
    let mut res: Vec<f64> = vec![0.0; 4];

    fftvec_mul(&mut res, &a, &b);
    assert_eq!(res, vec![-5.0, 10.0, 0.0, 2.5]);

    fftvec_addmul(&mut res, &a, &b);
    assert_eq!(res, vec![-10.0, 20.0, 0.0, 5.0]);
}

#[test]
fn kernel_forward_is_a_dft() {
    // The kernel must be a true (reordered) DFT so that pointwise products
    // in the frequency domain correspond to convolutions.
    let m: usize = 16;
    let mut source: Source = Source::new([3u8; 32]);
    let kernel: ReimFft = ReimFft::new(m);
    let mut scratch: ScratchOwned = ScratchOwned::alloc(kernel.fft_tmp_bytes());

    let mut data: Vec<f64> = vec![0.0; 2 * m];
    let mut re: Vec<f64> = vec![0.0; m];
    let mut im: Vec<f64> = vec![0.0; m];
    for k in 0..m {
        re[k] = (source.next_u32() % 17) as f64 - 8.0;
        im[k] = (source.next_u32() % 17) as f64 - 8.0;
        data[2 * k] = re[k];
        data[2 * k + 1] = im[k];
    }

    kernel.fft(&mut data, scratch.borrow());
    let (want_re, want_im) = dft_naive(&re, &im);

    // Every naive coefficient must appear exactly once in the kernel output.
    for j in 0..m {
        let hits: usize = (0..m)
            .filter(|&r| {
                (data[2 * r] - want_re[j]).abs() < 1e-8 && (data[2 * r + 1] - want_im[j]).abs() < 1e-8
            })
            .count();
        assert!(hits >= 1, "naive coefficient {j} missing from kernel output");
    }
}
