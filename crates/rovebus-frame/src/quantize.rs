//! Linear quantization between real-valued intervals and fixed-width
//! integer codomains.
//!
//! Both call families are lossy by design: the precision loss of a mapped
//! field equals `(max − min) / 2^bits`. Widening the interval or narrowing
//! the field trades precision away; callers that need an exact integer use
//! the plain field codec instead.
//!
//! The two families deliberately use different codomains and are not
//! unified:
//!
//! - **Bit-range fields** map onto `[0, 2^length − 1]`, the full field.
//! - **Legacy cursor fields** map onto `[1, 2^(8·length) − 1]`, reserving 0
//!   as the "not valid" sentinel of the legacy byte codec.

use crate::constants::MAPPING_INTERVAL_START;
use crate::diag::Diagnostics;
use crate::error::FrameError;
use crate::field::FieldSpec;
use crate::FrameCodec;

/// Affine rescale of `value` from `[from_min, from_max]` onto
/// `[to_min, to_max]`.
fn map_interval(value: f64, from_min: f64, from_max: f64, to_min: f64, to_max: f64) -> f64 {
    (value - from_min) * (to_max - to_min) / (from_max - from_min) + to_min
}

/// Largest value representable in `length` bits, as a float.
fn codomain_top(length: u32) -> f64 {
    if length >= 64 {
        u64::MAX as f64
    } else {
        ((1u64 << length) - 1) as f64
    }
}

impl<D: Diagnostics> FrameCodec<D> {
    /// Quantize `value` from `[min, max]` onto the bit range `field` and
    /// store it.
    ///
    /// Fails with a domain error when `value` lies outside `[min, max]`,
    /// and with a bounds error when the field does not fit the mirror.
    pub fn encode_mapped(
        &mut self,
        value: f64,
        min: f64,
        max: f64,
        field: FieldSpec,
    ) -> Result<(), FrameError> {
        if value < min || value > max {
            return Err(FrameError::out_of_interval(value, min, max));
        }

        let (start, length) = field.bit_range();
        let mapped = map_interval(value, min, max, 0.0, codomain_top(length)) as u64;
        self.encode_bits(mapped, FieldSpec::bits(start, length))
    }

    /// Read the bit range `field` and map it back onto `[min, max]`.
    ///
    /// Forwards the field codec's failures, including the all-zero
    /// ambiguity: a stored quantized `min` reads back as an empty field.
    pub fn decode_mapped(&self, min: f64, max: f64, field: FieldSpec) -> Result<f64, FrameError> {
        let (start, length) = field.bit_range();
        let raw = self.decode_bits(FieldSpec::bits(start, length))?.require()?;
        Ok(map_interval(raw as f64, 0.0, codomain_top(length), min, max))
    }

    /// Quantize `value` from `[min, max]` onto `length` bytes at the write
    /// cursor.
    ///
    /// Legacy codomain: `[1, 2^(8·length) − 1]`, keeping 0 free as the
    /// "not valid" sentinel.
    pub fn encode_mapped_bytes(
        &mut self,
        length: usize,
        value: f64,
        min: f64,
        max: f64,
    ) -> Result<(), FrameError> {
        if value < min || value > max {
            return Err(FrameError::out_of_interval(value, min, max));
        }

        let top = codomain_top(8 * length as u32);
        let mapped = map_interval(value, min, max, MAPPING_INTERVAL_START as f64, top) as u64;
        self.encode_bytes(length, mapped)
    }

    /// Read `length` bytes at the read cursor and map them back onto
    /// `[min, max]`.
    ///
    /// A stored sentinel (0) fails as an empty field; the read cursor has
    /// advanced past it regardless.
    pub fn decode_mapped_bytes(
        &mut self,
        length: usize,
        min: f64,
        max: f64,
    ) -> Result<f64, FrameError> {
        let raw = self.decode_bytes(length)?.require()?;
        let top = codomain_top(8 * length as u32);
        Ok(map_interval(
            raw as f64,
            MAPPING_INTERVAL_START as f64,
            top,
            min,
            max,
        ))
    }
}

/// Worst-case quantization error of a `length`-bit mapped field over
/// `[min, max]`: one codomain step, `(max − min) / (2^length − 1)`
/// (≈ `(max − min) / 2^length`). Inherent to the design, not removable.
pub fn quantization_step(min: f64, max: f64, length: u32) -> f64 {
    (max - min) / codomain_top(length)
}
