//! The frame encode/decode engine.
//!
//! [`FrameCodec`] owns one frame's worth of state: the identifier, the
//! 64-bit mirror (the canonical payload representation), the two legacy
//! cursor positions, and an injected diagnostics sink. The byte view is
//! derived from the mirror on demand, so the bit-range accessors and the
//! legacy sequential byte codec always see the same data.
//!
//! Two write disciplines coexist:
//!
//! - **Bit-range writes** ([`encode_bits`](FrameCodec::encode_bits)) merge
//!   with bitwise OR and never clear the destination first. Callers rely on
//!   zero-initialized frames; writing a range that already holds set bits
//!   corrupts it silently, so the codec warns through the diagnostics sink
//!   and proceeds.
//! - **Cursor byte writes** ([`encode_bytes`](FrameCodec::encode_bytes))
//!   replace the addressed bytes wholesale.

use crate::constants::{FRAME_DATA_LEN, MAX_DATA_INDEX};
use crate::diag::{Diagnostics, NullDiagnostics};
use crate::error::FrameError;
use crate::field::{FieldSpec, FieldValue};
use crate::frame::{pack_payload, unpack_payload, Frame};
use crate::policy::{apply_error_policy, error_field, MessageKind};

/// Mask covering `length` bits starting at `start`.
///
/// Callers guarantee `start + length <= 64` and `length >= 1`.
fn field_mask(start: u32, length: u32) -> u64 {
    if length == 64 {
        u64::MAX
    } else {
        ((1u64 << length) - 1) << start
    }
}

/// Encoder/decoder for one 8-byte bus frame.
///
/// A codec is owned by exactly one call context; there is no internal
/// locking. Construction either starts from a clean zeroed frame
/// ([`new`](FrameCodec::new)) or wraps a received one
/// ([`from_frame`](FrameCodec::from_frame)).
#[derive(Debug, Clone)]
pub struct FrameCodec<D: Diagnostics = NullDiagnostics> {
    id: u32,
    extended: bool,
    /// Canonical payload representation; see the crate docs for the
    /// byte-order rule.
    bits: u64,
    /// Next byte index for the sequential write cursor.
    write_index: usize,
    /// Next byte index for the sequential read cursor.
    read_index: usize,
    diag: D,
}

impl FrameCodec<NullDiagnostics> {
    /// Create a codec over a clean zeroed frame for `id`.
    ///
    /// The reserved error slot starts at the no-error sentinel.
    pub fn new(id: u32) -> Self {
        Self::with_diagnostics(id, NullDiagnostics)
    }

    /// Wrap a received frame for decoding.
    pub fn from_frame(frame: Frame) -> Self {
        Self::from_frame_with_diagnostics(frame, NullDiagnostics)
    }
}

impl<D: Diagnostics> FrameCodec<D> {
    /// Create a codec over a clean zeroed frame, reporting hazards to `diag`.
    pub fn with_diagnostics(id: u32, diag: D) -> Self {
        FrameCodec {
            id,
            extended: false,
            bits: 0,
            write_index: 0,
            read_index: 0,
            diag,
        }
    }

    /// Wrap a received frame, reporting hazards to `diag`.
    ///
    /// An all-zero payload folds to a zero mirror, which is also what a
    /// failed fold would produce; since a zero payload is legitimate this is
    /// only worth a warning, a known false negative.
    pub fn from_frame_with_diagnostics(frame: Frame, diag: D) -> Self {
        let bits = pack_payload(&frame.data);
        if bits == 0 {
            diag.warn("frame payload bits are all unset; zero data or a wrong operation upstream");
        }
        FrameCodec {
            id: frame.id,
            extended: frame.extended,
            bits,
            write_index: 0,
            read_index: 0,
            diag,
        }
    }

    /// The frame's 32-bit message identifier.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// The canonical 64-bit mirror.
    pub fn mirror(&self) -> u64 {
        self.bits
    }

    /// The payload bytes, derived from the mirror.
    pub fn payload(&self) -> [u8; FRAME_DATA_LEN] {
        unpack_payload(self.bits)
    }

    /// The frame as it goes to the transport layer.
    pub fn frame(&self) -> Frame {
        Frame {
            id: self.id,
            extended: self.extended,
            data: self.payload(),
        }
    }

    // ========================================================================
    // Bit-Range Field Codec
    // ========================================================================

    /// Merge `value` into the bit range described by `field`.
    ///
    /// The write is overlay-only: `value << start` is ORed into the mirror
    /// without clearing the destination first. A destination that already
    /// holds set bits, or a value wider than the field, is reported through
    /// the diagnostics sink and the write proceeds anyway.
    ///
    /// Fails without mutating anything when the normalized range does not
    /// fit in the 64-bit mirror.
    pub fn encode_bits(&mut self, value: u64, field: FieldSpec) -> Result<(), FrameError> {
        let (start, length) = field.bit_range();
        if length == 0 || start + length > 64 {
            self.diag
                .error("encode_bits: bit range exceeds the 64-bit mirror");
            return Err(FrameError::out_of_bounds(start, length));
        }

        if length < 64 && (value >> length) != 0 {
            self.diag
                .warn("encode_bits: value is wider than the field and will spill");
        }
        if self.bits & field_mask(start, length) != 0 {
            self.diag
                .warn("encode_bits: overwriting set bits in the container");
        }

        self.bits |= value << start;
        Ok(())
    }

    /// Merge a signed value's two's-complement bit pattern into a field.
    ///
    /// The codec is defined over logically unsigned values; this exists for
    /// call sites that still hold signed sensor readings. The bit pattern is
    /// encoded as-is and a diagnostic is emitted, nothing else changes.
    pub fn encode_bits_signed(&mut self, value: i64, field: FieldSpec) -> Result<(), FrameError> {
        self.diag
            .warn("encode_bits_signed: encoding a signed value's bit pattern, can lead to wrong data");
        self.encode_bits(value as u64, field)
    }

    /// Extract the bit range described by `field`.
    ///
    /// Fails when the normalized range does not fit in the 64-bit mirror.
    /// An extracted value of zero comes back as [`FieldValue::Empty`]; it
    /// cannot be told apart from a field that was never written.
    pub fn decode_bits(&self, field: FieldSpec) -> Result<FieldValue, FrameError> {
        let (start, length) = field.bit_range();
        if length == 0 || start + length > 64 {
            self.diag
                .error("decode_bits: bit range exceeds the 64-bit mirror");
            return Err(FrameError::out_of_bounds(start, length));
        }

        let raw = (self.bits & field_mask(start, length)) >> start;
        Ok(FieldValue::from_raw(raw))
    }

    // ========================================================================
    // Legacy Sequential Byte Codec
    // ========================================================================

    /// Write `length` little-endian bytes of `value` at the write cursor and
    /// advance it.
    ///
    /// The cursor is bounded to the usable data bytes (indices 0..=6; the
    /// last byte is the reserved error slot). A write that would run past
    /// the bound is rejected with no side effects. Unlike
    /// [`encode_bits`](Self::encode_bits), addressed bytes are replaced, not
    /// merged.
    pub fn encode_bytes(&mut self, length: usize, value: u64) -> Result<(), FrameError> {
        // Subtraction form: the cursor never exceeds the bound, and the
        // addition would wrap for lengths near usize::MAX.
        if length > MAX_DATA_INDEX + 1 - self.write_index {
            return Err(FrameError::CursorOverflow {
                cursor: self.write_index,
                requested: length,
                max: MAX_DATA_INDEX,
            });
        }

        for i in 0..length {
            let shift = 8 * (7 - (self.write_index + i)) as u32;
            self.bits &= !(0xFFu64 << shift);
            self.bits |= ((value >> (8 * i)) & 0xFF) << shift;
        }
        self.write_index += length;
        Ok(())
    }

    /// Read `length` little-endian bytes at the read cursor and advance it.
    ///
    /// A read past the usable data bytes is rejected with no side effects.
    /// The cursor advances even when the decoded value is zero; zero is the
    /// legacy "not valid" sentinel and comes back as [`FieldValue::Empty`].
    pub fn decode_bytes(&mut self, length: usize) -> Result<FieldValue, FrameError> {
        if length > MAX_DATA_INDEX + 1 - self.read_index {
            return Err(FrameError::CursorOverflow {
                cursor: self.read_index,
                requested: length,
                max: MAX_DATA_INDEX,
            });
        }

        let mut value = 0u64;
        for i in 0..length {
            let shift = 8 * (7 - (self.read_index + i)) as u32;
            value |= ((self.bits >> shift) & 0xFF) << (8 * i);
        }
        self.read_index += length;
        Ok(FieldValue::from_raw(value))
    }

    /// Byte index the sequential write cursor sits at.
    pub fn write_cursor(&self) -> usize {
        self.write_index
    }

    /// Byte index the sequential read cursor sits at.
    pub fn read_cursor(&self) -> usize {
        self.read_index
    }

    // ========================================================================
    // Error Subfield
    // ========================================================================

    /// Read the stored error code from the subfield `kind` selects.
    ///
    /// The no-error sentinel (0) and a never-written subfield read the same.
    pub fn error_code(&self, kind: MessageKind) -> u8 {
        let field = error_field(kind);
        let raw = (self.bits & field_mask(field.start_bit, field.width)) >> field.start_bit;
        raw as u8
    }

    /// Record an error code in the subfield `kind` selects.
    ///
    /// The stored outcome follows the kind's policy table: set-once kinds
    /// keep an existing non-sentinel code, always-overwrite kinds replace
    /// it, and codes wider than the subfield are clamped to its all-ones
    /// value. Returns whether the stored code was written.
    pub fn set_error(&mut self, kind: MessageKind, code: u8) -> bool {
        let field = error_field(kind);
        if code > field.max_code() {
            self.diag
                .error("set_error: requested code does not fit the subfield, clamping");
        }

        let current = self.error_code(kind);
        let (stored, changed) = apply_error_policy(&field, code, current);
        if changed {
            // The resolver replaces the subfield; overlay-only merging would
            // corrupt an always-overwrite update.
            let mask = field_mask(field.start_bit, field.width);
            self.bits = (self.bits & !mask) | (u64::from(stored) << field.start_bit);
        }
        changed
    }
}
