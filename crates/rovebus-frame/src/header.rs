//! Header generation for current-sensor frames.
//!
//! The first payload byte of a current-sensor frame (mirror bits 56–63) is
//! shared three ways:
//!
//! ```text
//! bits 61-63    bits 59-60       bits 56-58
//! sensor id   rolling number    error code
//! ```
//!
//! The generator packs the first two; the error subfield belongs to the
//! error-policy resolver and is left untouched.

use crate::constants::{
    CURRENT_SENSOR_ID_BITS, CURRENT_SENSOR_ID_START, CURRENT_SENSOR_ROLLING_BITS,
    CURRENT_SENSOR_ROLLING_START,
};
use crate::diag::Diagnostics;
use crate::error::FrameError;
use crate::field::FieldSpec;
use crate::FrameCodec;

impl<D: Diagnostics> FrameCodec<D> {
    /// Pack the current-sensor header: sensor id (3 bits) and rolling
    /// number (2 bits).
    ///
    /// Succeeds only if both sub-encodes succeed. Does not initialize the
    /// error subfield; callers record errors through
    /// [`set_error`](Self::set_error).
    pub fn generate_current_sensor_header(
        &mut self,
        sensor_id: u8,
        rolling_number: u8,
    ) -> Result<(), FrameError> {
        self.encode_bits(
            u64::from(sensor_id),
            FieldSpec::bits(CURRENT_SENSOR_ID_START, CURRENT_SENSOR_ID_BITS),
        )?;
        self.encode_bits(
            u64::from(rolling_number),
            FieldSpec::bits(CURRENT_SENSOR_ROLLING_START, CURRENT_SENSOR_ROLLING_BITS),
        )?;
        Ok(())
    }
}
