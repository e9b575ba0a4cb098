//! Half-precision float compression for 2-byte bus fields.
//!
//! Some sensor values (bus voltage, measured current) are carried as IEEE
//! 754 binary16 instead of quantized integers: two bytes buy roughly three
//! significant decimal digits over a much wider dynamic range than a fixed
//! mapping interval. Compression is lossy per standard half-precision
//! rounding; values beyond ±65504 saturate to infinity.
//!
//! The codec itself does not call this crate; callers compress first and
//! pack the resulting `u16` through the field codec.

/// Bit pattern of positive infinity in binary16.
const F16_INFINITY: u16 = 0x7C00;

/// Compress an `f32` to its nearest binary16 bit pattern.
///
/// Rounds to nearest, ties to even; NaN payloads keep their top mantissa
/// bits, values too small for a subnormal flush to signed zero, and values
/// too large saturate to infinity.
pub fn compress(value: f32) -> u16 {
    let bits = value.to_bits();
    let sign = ((bits >> 16) & 0x8000) as u16;
    let exp = ((bits >> 23) & 0xFF) as i32;
    let mant = bits & 0x007F_FFFF;

    if exp == 0xFF {
        // Infinity or NaN; keep a non-zero mantissa for NaN.
        if mant != 0 {
            return sign | F16_INFINITY | 0x0200 | (mant >> 13) as u16;
        }
        return sign | F16_INFINITY;
    }

    // Rebias 127 -> 15.
    let exp = exp - 112;

    if exp >= 0x1F {
        return sign | F16_INFINITY;
    }

    if exp <= 0 {
        // Result is subnormal (or underflows entirely).
        if exp < -10 {
            return sign;
        }
        let mant = mant | 0x0080_0000;
        let shift = (14 - exp) as u32;
        let truncated = (mant >> shift) as u16;
        let guard = (mant >> (shift - 1)) & 1;
        let sticky = mant & ((1 << (shift - 1)) - 1);
        // Nearest-even: an exact tie rounds toward the even neighbor.
        let round = (guard == 1 && (sticky != 0 || (truncated & 1) == 1)) as u16;
        return sign | (truncated + round);
    }

    let half = sign | ((exp as u16) << 10) | (mant >> 13) as u16;
    // Nearest-even; a mantissa carry correctly bumps the exponent, and
    // 0x7BFF + 1 saturates to infinity.
    let guard = (mant >> 12) & 1;
    let sticky = mant & 0x0FFF;
    let round = (guard == 1 && (sticky != 0 || (half & 1) == 1)) as u16;
    half + round
}

/// Expand a binary16 bit pattern back to `f32`. Exact for every input.
pub fn decompress(half: u16) -> f32 {
    let sign = u32::from(half & 0x8000) << 16;
    let exp = (half >> 10) & 0x1F;
    let mant = u32::from(half & 0x03FF);

    let bits = if exp == 0 {
        if mant == 0 {
            sign
        } else {
            // Normalize the subnormal: shift until the hidden bit appears.
            let mut exp = 113u32;
            let mut mant = mant;
            while mant & 0x0400 == 0 {
                mant <<= 1;
                exp -= 1;
            }
            sign | (exp << 23) | ((mant & 0x03FF) << 13)
        }
    } else if exp == 0x1F {
        sign | 0x7F80_0000 | (mant << 13)
    } else {
        sign | ((u32::from(exp) + 112) << 23) | (mant << 13)
    };

    f32::from_bits(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_representable_values_roundtrip() {
        for value in [0.0, 1.0, -1.0, 0.5, 2.5, -2.5, 1024.0, 65504.0, -65504.0] {
            assert_eq!(decompress(compress(value)), value, "{value}");
        }
    }

    #[test]
    fn test_signed_zero() {
        assert_eq!(compress(0.0), 0x0000);
        assert_eq!(compress(-0.0), 0x8000);
        assert!(decompress(0x8000).is_sign_negative());
    }

    #[test]
    fn test_compression_error_stays_within_half_precision() {
        // 11 significand bits: relative error bounded by 2^-11.
        for value in [0.1f32, 3.14159, 12.34, -271.5, 6000.0] {
            let recovered = decompress(compress(value));
            let rel = ((recovered - value) / value).abs();
            assert!(rel <= 1.0 / 2048.0, "{value} recovered as {recovered}");
        }
    }

    #[test]
    fn test_ties_round_to_even() {
        // 1 + 2^-11 sits exactly between 0x3C00 and 0x3C01: down to even.
        assert_eq!(compress(f32::from_bits(0x3F80_1000)), 0x3C00);
        // 1 + 3*2^-11 sits between 0x3C01 and 0x3C02: up to even.
        assert_eq!(compress(f32::from_bits(0x3F80_3000)), 0x3C02);
        // One f32 ulp above a tie is no longer a tie.
        assert_eq!(compress(f32::from_bits(0x3F80_1001)), 0x3C01);

        // Subnormal tie: 2^-25 is halfway between zero and the smallest
        // subnormal, and zero is the even neighbor.
        assert_eq!(compress(2.0f32.powi(-25)), 0x0000);
    }

    #[test]
    fn test_saturation_and_specials() {
        assert_eq!(compress(1.0e6), F16_INFINITY);
        assert_eq!(compress(-1.0e6), 0x8000 | F16_INFINITY);
        assert_eq!(compress(f32::INFINITY), F16_INFINITY);
        assert!(decompress(compress(f32::NAN)).is_nan());
        assert_eq!(decompress(F16_INFINITY), f32::INFINITY);
    }

    #[test]
    fn test_subnormal_roundtrip() {
        // Smallest half subnormal: 2^-24.
        let tiny = decompress(0x0001);
        assert_eq!(tiny, 2.0f32.powi(-24));
        assert_eq!(compress(tiny), 0x0001);

        // Too small for even a subnormal flushes to zero.
        assert_eq!(compress(1.0e-9), 0x0000);
    }

    #[test]
    fn test_every_finite_pattern_survives_decompress_compress() {
        for pattern in 0..=u16::MAX {
            let exp = (pattern >> 10) & 0x1F;
            if exp == 0x1F {
                continue; // infinities and NaNs compared above
            }
            assert_eq!(compress(decompress(pattern)), pattern, "{pattern:#06x}");
        }
    }
}
