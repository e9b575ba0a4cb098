//! Message identifiers and the identifier-to-kind registry.

use rovebus_frame::MessageKind;

// ============================================================================
// Message Identifiers
// ============================================================================

/// Actuator-unit control (rudder and wingsail commands).
pub const MSG_ID_AU_CONTROL: u32 = 700;
/// Actuator-unit feedback (measured rudder/wingsail positions).
pub const MSG_ID_AU_FEEDBACK: u32 = 701;
/// Radio-controller status.
pub const MSG_ID_RC_STATUS: u32 = 702;
/// Windvane self-steering command and state.
pub const MSG_ID_WINDVANE_CONTROL: u32 = 703;
/// Current-sensor readings (voltage, current, unit id, rolling number).
pub const MSG_ID_CURRENT_SENSOR_DATA: u32 = 705;
/// Request for a current-sensor reading.
pub const MSG_ID_CURRENT_SENSOR_REQUEST: u32 = 706;
/// Marine-sensor readings (pH, conductivity, temperature).
pub const MSG_ID_MARINE_SENSOR_DATA: u32 = 710;
/// Request for marine-sensor readings (one-shot or continuous).
pub const MSG_ID_MARINE_SENSOR_REQUEST: u32 = 711;

// ============================================================================
// Registry
// ============================================================================

/// Classify an identifier into the kind that selects its error-subfield
/// policy.
///
/// Identifiers without a dedicated layout fall back to
/// [`MessageKind::Default`].
pub fn message_kind_of(id: u32) -> MessageKind {
    match id {
        MSG_ID_CURRENT_SENSOR_DATA | MSG_ID_CURRENT_SENSOR_REQUEST => MessageKind::CurrentSensor,
        MSG_ID_MARINE_SENSOR_DATA | MSG_ID_MARINE_SENSOR_REQUEST => MessageKind::MarineSensor,
        _ => MessageKind::Default,
    }
}
