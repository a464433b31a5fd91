//! Buffer sizing and sample-range constants.

// ── Sizing ───────────────────────────────────────────────────────────

/// Samples produced per channel by one MPEG audio frame (layer II/III).
pub const SAMPLES_PER_FRAME: usize = 1152;

/// Bytes per 16-bit PCM sample.
pub const BYTES_PER_SAMPLE: usize = 2;

/// Default capacity of a mono output buffer in bytes: one frame of samples.
pub const OBUFFERSIZE: usize = SAMPLES_PER_FRAME * BYTES_PER_SAMPLE;

/// Maximum channel count of any buffer layout in the family.
pub const MAXCHANNELS: usize = 2;

/// Number of subband samples consumed by one `append_samples` call.
pub const SAMPLES_PER_APPEND: usize = 32;

/// Bytes written by one `append_samples` call.
pub const BYTES_PER_APPEND: usize = SAMPLES_PER_APPEND * BYTES_PER_SAMPLE;

// ── Sample range ─────────────────────────────────────────────────────

/// Upper clamp bound for float samples.
pub const CLAMP_MAX: f32 = 32_767.0;

/// Lower clamp bound for float samples. Symmetric with `CLAMP_MAX`, not -32768.
pub const CLAMP_MIN: f32 = -32_767.0;

/// Sample frequency reported by buffers that don't know their output rate.
pub const UNSPECIFIED_FREQUENCY: i32 = -1;
