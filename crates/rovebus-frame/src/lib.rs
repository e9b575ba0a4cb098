//! Bit-level codec for fixed 8-byte vehicle-bus frames.
//!
//! This crate packs and unpacks typed sensor/actuator values into specific
//! bit ranges of an 8-byte bus frame shared between a low-power
//! microcontroller and a host-class controller. It provides:
//!
//! - [`Frame`]: the raw wire unit (32-bit identifier, extended flag, 8 bytes).
//! - [`FrameCodec`]: the encode/decode engine over a 64-bit *mirror* view of
//!   the payload, with a generic bit-range field accessor and a legacy
//!   sequential byte cursor.
//! - A linear quantizer mapping real-valued intervals onto fixed-width
//!   integer codomains (lossy by design).
//! - A message-kind-dependent error-subfield policy that overlays diagnostic
//!   codes onto the same frame.
//!
//! # Mirror byte order
//!
//! The 64-bit mirror views the payload with byte 7 in the least significant
//! position:
//!
//! | Payload byte | Mirror bits |
//! |--------------|-------------|
//! | `data[7]`    | 0–7         |
//! | `data[6]`    | 8–15        |
//! | ...          | ...         |
//! | `data[0]`    | 56–63       |
//!
//! Every bit-range field offset used on the bus assumes this order; it must
//! match across all interoperating implementations.
//!
//! # Example
//!
//! ```rust
//! use rovebus_frame::{FrameCodec, MessageKind};
//!
//! let mut codec = FrameCodec::new(0x2C1);
//! codec.generate_current_sensor_header(5, 2).unwrap();
//! codec.set_error(MessageKind::CurrentSensor, 9);
//! assert_eq!(codec.error_code(MessageKind::CurrentSensor), 7);
//!
//! let frame = codec.frame();
//! assert_eq!(frame.data.len(), 8);
//! ```

mod codec;
mod constants;
mod diag;
mod error;
mod field;
mod frame;
mod header;
mod policy;
mod quantize;

pub use codec::*;
pub use constants::*;
pub use diag::*;
pub use error::*;
pub use field::*;
pub use frame::*;
pub use policy::*;
pub use quantize::*;
