//! Conversion laws between torus values and doubles.
//!
//! A torus value is an unsigned numerator over `2^32` or `2^64`; the
//! transform works on its two's-complement reinterpretation, so the
//! conversions here move between signed integers embedded in doubles and
//! wrapped unsigned words. Wraparound is never an error.

/// Low 52 bits of an IEEE-754 double: the stored mantissa.
const F64_MANTISSA_MASK: u64 = 0x000F_FFFF_FFFF_FFFF;
/// Implicit leading mantissa bit of a normal double.
const F64_IMPLICIT_BIT: u64 = 0x0010_0000_0000_0000;
/// Biased-exponent mask (11 bits).
const F64_EXPONENT_MASK: u64 = 0x7FF;
/// Biased exponent at which the 53-bit mantissa sits exactly at bit 0:
/// 1023 (bias) + 52 (mantissa width).
const F64_EXPONENT_INT: i32 = 1075;

/// Reinterprets a 32-bit torus value as a signed integer and widens it.
/// Exact: every `i32` is representable in a double.
#[inline(always)]
pub fn torus32_to_f64(x: u32) -> f64 {
    (x as i32) as f64
}

/// Reinterprets a 64-bit torus value as a signed integer and widens it.
/// Lossy for magnitudes beyond `2^53`; the error is bounded by the double
/// mantissa width and accepted by the surrounding scheme's noise budget.
#[inline(always)]
pub fn torus64_to_f64(x: u64) -> f64 {
    (x as i64) as f64
}

/// Converts a transform candidate back to a 32-bit torus value: round to
/// nearest, then keep the low 32 bits of the signed result. The wrap
/// realizes reduction modulo `2^32`. Candidates are assumed to have
/// magnitude below `2^63`.
#[inline(always)]
pub fn f64_to_torus32(x: f64) -> u32 {
    (x.round() as i64) as u32
}

/// Converts a transform candidate back to a 64-bit torus value by direct
/// decomposition of the IEEE-754 bit pattern, avoiding a library rounding
/// call: mantissa with the implicit bit restored, shifted by the unbiased
/// exponent, negated on the sign bit. Truncates toward zero.
///
/// Equals `(x as i64) as u64` for every `|x| < 2^63`. Outside that window
/// the result follows the wraparound semantics of the torus instead of
/// saturating: left shifts keep the low 64 bits (reduction modulo `2^64`),
/// magnitudes of `2^64` and beyond collapse to 0, and zero, denormals,
/// infinities and NaN all map to 0.
#[inline(always)]
pub fn f64_to_torus64(x: f64) -> u64 {
    let bits: u64 = x.to_bits();
    let expo: i32 = ((bits >> 52) & F64_EXPONENT_MASK) as i32;
    if expo == 0 {
        // Zero or denormal: magnitude below 2^-1022.
        return 0;
    }
    let val: u64 = (bits & F64_MANTISSA_MASK) | F64_IMPLICIT_BIT;
    let shift: i32 = expo - F64_EXPONENT_INT;
    let magnitude: u64 = if shift >= 64 {
        0
    } else if shift >= 0 {
        val << shift
    } else if shift > -53 {
        val >> -shift
    } else {
        0
    };
    if bits >> 63 != 0 {
        magnitude.wrapping_neg()
    } else {
        magnitude
    }
}

/// Round-to-nearest conversion to a 64-bit torus value, used when a
/// coarser decomposition digit is being extracted and bit-exactness is not
/// required. Negative candidates wrap through the signed cast.
#[inline(always)]
pub fn f64_to_torus64_round(x: f64) -> u64 {
    (x.round() as i64) as u64
}

#[cfg(test)]
mod tests {
    use rand_distr::{Distribution, Normal};
    use torusfft_backend::Source;

    use super::*;

    #[test]
    fn torus_widening_reinterprets_as_signed() {
        assert_eq!(torus32_to_f64(0), 0.0);
        assert_eq!(torus32_to_f64(1), 1.0);
        assert_eq!(torus32_to_f64(u32::MAX), -1.0);
        assert_eq!(torus32_to_f64(1 << 31), -(2f64.powi(31)));
        assert_eq!(torus64_to_f64(u64::MAX), -1.0);
        assert_eq!(torus64_to_f64(1 << 63), -(2f64.powi(63)));
    }

    #[test]
    fn bit_exact_matches_truncating_cast_in_window() {
        let cases: [f64; 14] = [
            0.25,
            -0.25,
            1.0,
            -1.0,
            1.5,
            -1.5,
            2f64.powi(52) - 0.5,
            -(2f64.powi(52) - 0.5),
            2f64.powi(52),
            2f64.powi(53) + 2.0,
            2f64.powi(62),
            -(2f64.powi(62)),
            4.6e18,
            -4.6e18,
        ];
        for x in cases {
            assert_eq!(f64_to_torus64(x), (x as i64) as u64, "x = {x}");
        }
    }

    #[test]
    fn bit_exact_matches_truncating_cast_randomized() {
        let mut source: Source = Source::new([4u8; 32]);
        for k in 0..62 {
            for _ in 0..64 {
                let x: f64 = source.next_f64(-1.0, 1.0) * 2f64.powi(k);
                assert_eq!(f64_to_torus64(x), (x as i64) as u64, "x = {x}");
            }
        }
        // Exponent-scattered magnitudes around the window edges.
        let normal: Normal<f64> = Normal::new(0.0, 2f64.powi(50)).unwrap();
        for _ in 0..1024 {
            let x: f64 = normal.sample(&mut source);
            assert_eq!(f64_to_torus64(x), (x as i64) as u64, "x = {x}");
        }
    }

    #[test]
    fn bit_exact_degenerate_inputs_collapse_to_zero() {
        assert_eq!(f64_to_torus64(0.0), 0);
        assert_eq!(f64_to_torus64(-0.0), 0);
        assert_eq!(f64_to_torus64(0.999), 0);
        assert_eq!(f64_to_torus64(-0.999), 0);
        assert_eq!(f64_to_torus64(1e-300), 0);
        assert_eq!(f64_to_torus64(5e-324), 0);
        assert_eq!(f64_to_torus64(f64::MIN_POSITIVE), 0);
        assert_eq!(f64_to_torus64(f64::INFINITY), 0);
        assert_eq!(f64_to_torus64(f64::NEG_INFINITY), 0);
        assert_eq!(f64_to_torus64(f64::NAN), 0);
    }

    #[test]
    fn bit_exact_wraps_beyond_the_signed_window() {
        // 1e19 lies in (2^63, 2^64): representable as u64, wraps as i64.
        assert_eq!(f64_to_torus64(1e19), 1e19 as u64);
        assert_eq!(f64_to_torus64(-1e19), (1e19 as u64).wrapping_neg());
        // 2^64 and above are congruent to zero.
        assert_eq!(f64_to_torus64(2f64.powi(64)), 0);
        assert_eq!(f64_to_torus64(2f64.powi(80)), 0);
    }

    #[test]
    fn torus32_conversion_rounds_and_wraps() {
        assert_eq!(f64_to_torus32(0.4), 0);
        assert_eq!(f64_to_torus32(0.6), 1);
        assert_eq!(f64_to_torus32(-0.6), u32::MAX);
        assert_eq!(f64_to_torus32(-(2f64.powi(31)) - 7.0), (1u32 << 31).wrapping_sub(7));
        assert_eq!(f64_to_torus32(2f64.powi(32) + 3.0), 3);
    }
}
