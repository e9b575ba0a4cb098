//! Field descriptors and decode outcomes.

use crate::error::FrameError;

/// Granularity of a field descriptor's `start` and `length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// `start` and `length` count bits in the mirror.
    Bits,
    /// `start` and `length` count bytes of the mirror; normalized to bits
    /// (×8) before use. Mirror byte `b` is payload byte `7 − b`, so
    /// byte-unit start 0 addresses the reserved last payload byte. This is
    /// the opposite direction from the sequential cursor codec, which
    /// counts payload bytes.
    Bytes,
}

/// A bit range within the frame mirror.
///
/// Field layouts on the bus are published as `(start, length, unit)`
/// triples; both granularities appear in the wild, so the descriptor keeps
/// the published unit and normalizes to bits at access time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// First bit (or byte) of the field.
    pub start: u32,
    /// Width of the field in bits (or bytes).
    pub length: u32,
    /// Granularity of `start` and `length`.
    pub unit: Unit,
}

impl FieldSpec {
    /// Create a descriptor addressed in bits.
    pub const fn bits(start: u32, length: u32) -> Self {
        FieldSpec {
            start,
            length,
            unit: Unit::Bits,
        }
    }

    /// Create a descriptor addressed in mirror bytes.
    pub const fn bytes(start: u32, length: u32) -> Self {
        FieldSpec {
            start,
            length,
            unit: Unit::Bytes,
        }
    }

    /// Normalize `(start, length)` to bits.
    pub const fn bit_range(&self) -> (u32, u32) {
        match self.unit {
            Unit::Bits => (self.start, self.length),
            Unit::Bytes => (self.start * 8, self.length * 8),
        }
    }
}

/// Outcome of decoding a bit range.
///
/// An extracted field whose bits are all clear cannot be told apart from a
/// field that was never written; both come back as [`FieldValue::Empty`].
/// Callers that know zero is a legal value for their field use
/// [`value_or_zero`](FieldValue::value_or_zero); callers that treat zero as
/// the "not set" sentinel use [`require`](FieldValue::require).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue {
    /// Every bit in the range was clear: unset, or a legitimate zero.
    Empty,
    /// At least one bit was set; the extracted value is non-zero.
    Value(u64),
}

impl FieldValue {
    /// Wrap an extracted value, mapping 0 to [`FieldValue::Empty`].
    pub fn from_raw(raw: u64) -> Self {
        if raw == 0 {
            FieldValue::Empty
        } else {
            FieldValue::Value(raw)
        }
    }

    /// True if every bit in the range was clear.
    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Empty)
    }

    /// The extracted value, treating an empty field as zero.
    pub fn value_or_zero(self) -> u64 {
        match self {
            FieldValue::Empty => 0,
            FieldValue::Value(v) => v,
        }
    }

    /// The extracted value, treating an empty field as a failure.
    pub fn require(self) -> Result<u64, FrameError> {
        match self {
            FieldValue::Empty => Err(FrameError::EmptyField),
            FieldValue::Value(v) => Ok(v),
        }
    }
}
