//! The raw frame unit and the payload/mirror conversion.
//!
//! A [`Frame`] is what crosses the transport boundary: a 32-bit identifier,
//! an extended-format flag, and exactly 8 payload bytes. It has no behavior
//! of its own; all encoding happens in [`FrameCodec`](crate::FrameCodec),
//! which works on the 64-bit mirror and derives the byte view on demand.
//!
//! The mirror byte order is fixed and load-bearing: `data[7]` occupies
//! mirror bits 0–7 (least significant) up to `data[0]` in bits 56–63. Every
//! published field offset assumes it.

use crate::constants::FRAME_DATA_LEN;

/// A fixed 8-byte bus frame plus its out-of-band identity.
///
/// The identifier and extended-format flag are carried by the transport
/// layer, not inside the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// 32-bit message identifier.
    pub id: u32,
    /// Extended-format flag (29-bit identifier space on the wire).
    pub extended: bool,
    /// The 8 payload bytes.
    pub data: [u8; FRAME_DATA_LEN],
}

impl Frame {
    /// Create a zeroed frame for the given identifier.
    pub fn new(id: u32) -> Self {
        Frame {
            id,
            extended: false,
            data: [0; FRAME_DATA_LEN],
        }
    }
}

/// Fold the 8 payload bytes into the 64-bit mirror.
///
/// Byte `i` lands in mirror bits `[8·(7−i), 8·(7−i)+8)`.
pub fn pack_payload(data: &[u8; FRAME_DATA_LEN]) -> u64 {
    let mut bits = 0u64;
    for (i, &byte) in data.iter().enumerate() {
        bits |= u64::from(byte) << (8 * (7 - i));
    }
    bits
}

/// Expand the 64-bit mirror back into the 8 payload bytes, one byte-wide
/// extraction per payload index.
pub fn unpack_payload(bits: u64) -> [u8; FRAME_DATA_LEN] {
    let mut data = [0u8; FRAME_DATA_LEN];
    for (i, byte) in data.iter_mut().enumerate() {
        *byte = ((bits >> (8 * (7 - i))) & 0xFF) as u8;
    }
    data
}
