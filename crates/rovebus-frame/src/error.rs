//! Error types for rovebus-frame.

use thiserror::Error;

/// Errors that can occur during frame codec operations.
///
/// None of these abort anything; every fallible operation surfaces its
/// outcome to the immediate caller and nothing is retried internally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrameError {
    /// A requested bit range does not fit inside the 64-bit mirror.
    #[error("bit range [{start}, {start}+{length}) exceeds the 64-bit mirror")]
    OutOfBounds {
        /// First bit of the requested range.
        start: u32,
        /// Width of the requested range in bits.
        length: u32,
    },

    /// A quantizer input fell outside its declared interval.
    #[error("value {value} outside mapping interval [{min}, {max}]")]
    OutOfInterval {
        /// The rejected input.
        value: f64,
        /// Lower interval bound.
        min: f64,
        /// Upper interval bound.
        max: f64,
    },

    /// The sequential byte cursor would run past the usable data bytes.
    #[error("cursor at byte {cursor} cannot take {requested} more bytes (usable bytes 0..={max})")]
    CursorOverflow {
        /// Cursor position before the rejected operation.
        cursor: usize,
        /// Number of bytes requested.
        requested: usize,
        /// Last usable byte index.
        max: usize,
    },

    /// A decoded field had every bit clear.
    ///
    /// This is indistinguishable from a legitimately zero field; see
    /// [`FieldValue`](crate::FieldValue) for the three-state decode outcome
    /// that lets callers choose how to treat it.
    #[error("decoded field bits are all clear (unset, or a legitimate zero)")]
    EmptyField,
}

impl FrameError {
    /// Create a bounds error for a bit range.
    pub fn out_of_bounds(start: u32, length: u32) -> Self {
        FrameError::OutOfBounds { start, length }
    }

    /// Create a domain error for a quantizer input.
    pub fn out_of_interval(value: f64, min: f64, max: f64) -> Self {
        FrameError::OutOfInterval { value, min, max }
    }
}
