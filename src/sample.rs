//! Float to 16-bit PCM conversion.

use crate::constants::{CLAMP_MAX, CLAMP_MIN};

/// Convert a decoder float sample to 16-bit PCM.
///
/// Values outside `[-32767.0, 32767.0]` saturate to the nearest bound; values
/// inside are truncated toward zero. NaN converts to 0.
#[inline]
pub fn clamp_sample(value: f32) -> i16 {
    let clamped = if value > CLAMP_MAX {
        CLAMP_MAX
    } else if value < CLAMP_MIN {
        CLAMP_MIN
    } else {
        value
    };
    // Truncate to i32 first, then keep the low 16 bits.
    clamped as i32 as i16
}
