//! Message-kind-dependent error-subfield policy.
//!
//! Where a frame stores its diagnostic code, how wide that code is, and
//! whether a later write may replace an earlier one all depend on the kind
//! of message the frame carries. The mapping lives in a small policy table
//! so new kinds extend the table instead of touching codec internals, and
//! the write decision is a pure function of
//! `(policy, requested code, current stored code)`.

use crate::constants::{
    CURRENT_SENSOR_ERROR_BITS, CURRENT_SENSOR_ERROR_START, MARINE_ERROR_INDEX, NO_ERRORS,
};

/// Classification of a frame's identifier, selecting its error-subfield
/// policy.
///
/// The identifier-to-kind mapping itself lives in the registry
/// (`rovebus-defs`); the codec only dispatches on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// Any message without a dedicated layout: full last byte, set-once.
    Default,
    /// Current-sensor messages: 3-bit code at mirror bits 56–58, sharing
    /// the first payload byte with the sensor-id and rolling-number header
    /// fields.
    CurrentSensor,
    /// Marine-sensor messages: full first payload byte (mirror bits 56–63).
    MarineSensor,
}

/// Whether a later error write may replace an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Keep the first non-sentinel code; later writes are no-ops.
    SetOnce,
    /// Every write replaces the stored code.
    AlwaysOverwrite,
}

/// Location, width, and overwrite policy of one kind's error subfield.
#[derive(Debug, Clone, Copy)]
pub struct ErrorField {
    /// First mirror bit of the subfield.
    pub start_bit: u32,
    /// Width of the subfield in bits.
    pub width: u32,
    /// Overwrite policy applied by [`apply_error_policy`].
    pub policy: OverwritePolicy,
}

impl ErrorField {
    /// Largest code representable in this subfield.
    ///
    /// Requested codes above this are clamped to it, so a fault is always
    /// visible even when its exact cause cannot be encoded.
    pub fn max_code(&self) -> u8 {
        if self.width >= 8 {
            u8::MAX
        } else {
            ((1u16 << self.width) - 1) as u8
        }
    }
}

/// The policy table: one row per message kind.
const POLICY_TABLE: &[(MessageKind, ErrorField)] = &[
    (
        MessageKind::Default,
        ErrorField {
            // Reserved last byte: payload index 7 is mirror bits 0..8.
            start_bit: 0,
            width: 8,
            policy: OverwritePolicy::SetOnce,
        },
    ),
    (
        MessageKind::CurrentSensor,
        ErrorField {
            start_bit: CURRENT_SENSOR_ERROR_START,
            width: CURRENT_SENSOR_ERROR_BITS,
            policy: OverwritePolicy::AlwaysOverwrite,
        },
    ),
    (
        MessageKind::MarineSensor,
        ErrorField {
            start_bit: 8 * (7 - MARINE_ERROR_INDEX as u32),
            width: 8,
            policy: OverwritePolicy::AlwaysOverwrite,
        },
    ),
];

/// Look up the error-subfield layout for a message kind.
pub fn error_field(kind: MessageKind) -> ErrorField {
    // The table covers every kind; fall back to the Default row rather
    // than panic if it ever does not.
    POLICY_TABLE
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, field)| *field)
        .unwrap_or(POLICY_TABLE[0].1)
}

/// Decide the new stored code for an error write.
///
/// Pure transition function of `(field, requested, current)`; the second
/// element of the result says whether the caller must write the subfield.
/// Requested codes wider than the subfield are clamped to
/// [`ErrorField::max_code`].
pub fn apply_error_policy(field: &ErrorField, requested: u8, current: u8) -> (u8, bool) {
    let code = requested.min(field.max_code());
    match field.policy {
        OverwritePolicy::SetOnce => {
            if current != NO_ERRORS {
                (current, false)
            } else {
                (code, true)
            }
        }
        OverwritePolicy::AlwaysOverwrite => (code, true),
    }
}
