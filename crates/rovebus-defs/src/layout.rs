//! Per-message field layouts.
//!
//! Every node on the bus packs the same quantity into the same bits; these
//! tables are the single place where that agreement is written down. Fields
//! that carry a linearly quantized real value also publish their mapping
//! interval.
//!
//! Byte-unit field specs count *mirror* bytes: start 0 is the last payload
//! byte, start 7 is the first. A layout never overlaps its own kind's error
//! subfield; the marine slot sits at mirror byte 7 and the default reserved
//! slot at mirror byte 0.

use rovebus_frame::FieldSpec;

/// A field carrying a linearly quantized real value.
#[derive(Debug, Clone, Copy)]
pub struct MappedField {
    /// Where the quantized value lives.
    pub field: FieldSpec,
    /// Lower bound of the real-valued interval.
    pub min: f64,
    /// Upper bound of the real-valued interval.
    pub max: f64,
}

// ============================================================================
// Marine Sensor Data
// ============================================================================

// Mirror order: pH, conductivity, temperature, with the marine error
// subfield in the top mirror byte (the first payload byte).

/// Water pH, quantized into one byte.
pub const SENSOR_PH: MappedField = MappedField {
    field: FieldSpec::bytes(0, 1),
    min: 0.0,
    max: 14.0,
};

/// Water conductivity in uS/cm, quantized into four bytes.
pub const SENSOR_CONDUCTIVITY: MappedField = MappedField {
    field: FieldSpec::bytes(1, 4),
    min: 0.0,
    max: 200_000.0,
};

/// Water temperature in degrees C, quantized into two bytes.
pub const SENSOR_TEMPERATURE: MappedField = MappedField {
    field: FieldSpec::bytes(5, 2),
    min: -5.0,
    max: 40.0,
};

// ============================================================================
// Marine Sensor Request
// ============================================================================

// Request fields carry no published offsets; both sides run the sequential
// byte cursor over them in this order.

/// Cursor width of the continuous-readings flag.
pub const REQUEST_CONTINUOUS_READINGS_LEN: usize = 1;
/// Cursor width of the interval between continuous readings, in seconds.
pub const REQUEST_READING_TIME_LEN: usize = 4;

// ============================================================================
// Actuator Unit Control / Feedback
// ============================================================================

/// Rudder angle in degrees; effective range 60 degrees.
pub const RUDDER_ANGLE: MappedField = MappedField {
    field: FieldSpec::bytes(0, 2),
    min: -30.0,
    max: 30.0,
};

/// Wingsail angle in degrees.
pub const WINGSAIL_ANGLE: MappedField = MappedField {
    field: FieldSpec::bytes(2, 1),
    min: -13.0,
    max: 13.0,
};

/// Windvane self-steering course in degrees.
pub const WINDVANE_SELFSTEERING_ANGLE: MappedField = MappedField {
    field: FieldSpec::bytes(3, 2),
    min: 0.0,
    max: 360.0,
};

/// Windvane actuator position, raw.
pub const WINDVANE_ACTUATOR_POSITION: FieldSpec = FieldSpec::bytes(5, 1);

/// Self-steering enabled flag.
pub const WINDVANE_SELFSTEERING_ON: FieldSpec = FieldSpec::bytes(2, 1);

// ============================================================================
// Radio Controller Status
// ============================================================================

/// Radio controller active flag.
pub const RADIOCONTROLLER_ON: FieldSpec = FieldSpec::bytes(1, 1);

// ============================================================================
// Current Sensor Data
// ============================================================================

// The sensor id, rolling number, and error code share mirror bits 56-63;
// that bit layout is published by rovebus-frame's constants.

/// Bus voltage, two bytes at the low end of the mirror. Stored as a
/// compressed half-precision float (`rovebus-float16`), not a quantized
/// integer.
pub const CURRENT_SENSOR_VOLTAGE: FieldSpec = FieldSpec::bytes(0, 2);

/// Measured current, two bytes, compressed half-precision float.
pub const CURRENT_SENSOR_CURRENT: FieldSpec = FieldSpec::bytes(2, 2);
