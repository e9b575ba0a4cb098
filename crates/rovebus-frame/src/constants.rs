//! Shared codec constants.
//!
//! These values define the fixed frame geometry, the reserved error-code
//! slot, and the bit layout of the current-sensor header. They must match
//! the firmware on the other end of the bus.

// ============================================================================
// Frame Geometry
// ============================================================================

/// Payload length of every frame on this bus.
pub const FRAME_DATA_LEN: usize = 8;

/// Last byte index usable by the sequential cursor codec.
///
/// Byte 7 is reserved as the default error-code slot, leaving 7 usable
/// data bytes (indices 0..=6).
pub const MAX_DATA_INDEX: usize = 6;

/// Byte index of the default error-code slot.
pub const ERROR_CODE_INDEX: usize = 7;

/// Byte index of the marine-sensor error-code slot: the first payload byte
/// (mirror bits 56-63), distinct from the default reserved slot.
pub const MARINE_ERROR_INDEX: usize = 0;

// ============================================================================
// Sentinels
// ============================================================================

/// Error-code value meaning "no error recorded".
pub const NO_ERRORS: u8 = 0;

/// Decoded value treated as "not valid" by the legacy byte codec.
pub const DATA_NOT_VALID: u64 = 0;

/// Lower bound of the legacy byte-codec mapping codomain; 0 is reserved
/// for [`DATA_NOT_VALID`].
pub const MAPPING_INTERVAL_START: u64 = 1;

// ============================================================================
// Current-Sensor Header Layout (bit offsets in the mirror)
// ============================================================================

// Mirror bits 56-63 of a current-sensor frame (the first payload byte)
// hold, from most to least significant:
// sensor id (3 bits) | rolling number (2 bits) | error code (3 bits).

/// Start bit of the 3-bit sensor-id field.
pub const CURRENT_SENSOR_ID_START: u32 = 7 * 8 + 5;
/// Width of the sensor-id field.
pub const CURRENT_SENSOR_ID_BITS: u32 = 3;

/// Start bit of the 2-bit rolling-number field.
pub const CURRENT_SENSOR_ROLLING_START: u32 = 7 * 8 + 3;
/// Width of the rolling-number field.
pub const CURRENT_SENSOR_ROLLING_BITS: u32 = 2;

/// Start bit of the 3-bit error field.
pub const CURRENT_SENSOR_ERROR_START: u32 = 7 * 8;
/// Width of the current-sensor error field.
pub const CURRENT_SENSOR_ERROR_BITS: u32 = 3;

/// Fixed code stored when a requested current-sensor error does not fit in
/// 3 bits, so a fault stays visible even when its exact cause cannot be
/// encoded.
pub const CURRENT_SENSOR_ERROR_CLAMP: u8 = 7;

// ============================================================================
// Error Codes (carried in the error subfield)
// ============================================================================

/// The sequential cursor ran past the usable data bytes.
pub const ERROR_INDEX_OUT_OF_INTERVAL: u8 = 1;
/// A quantizer input fell outside its declared interval.
pub const ERROR_DATA_OUT_OF_INTERVAL: u8 = 2;
/// A bit-range write landed outside the 64-bit mirror.
pub const ERROR_ENCODING_OUT_OF_BOUND: u8 = 3;
/// A bit-range write overlapped bits that were already set.
pub const ERROR_OVERWRITING: u8 = 4;
