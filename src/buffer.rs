//! Output buffer abstraction shared by every channel layout.
//!
//! A decoder fills a buffer one decode unit at a time, finalizes it with
//! [`OutputBuffer::write_buffer`], and a sink drains the finalized bytes with
//! [`OutputBuffer::read`] until it returns 0. [`OutputBuffer::clear_buffer`]
//! then rewinds the buffer for the next unit.

use crate::constants::UNSPECIFIED_FREQUENCY;
use crate::error::BufferError;
use crate::mono::MonoBuffer;

/// Which half of the fill/drain cycle a buffer is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BufferState {
    /// Accepting samples; not readable.
    #[default]
    Filling,
    /// Read window open; appends are rejected until cleared.
    Finalized,
}

/// Capabilities of a decoder output buffer.
pub trait OutputBuffer: Send {
    /// Append one 16-bit PCM sample to `channel`.
    fn append(&mut self, channel: usize, sample: i16) -> Result<(), BufferError>;

    /// Append 32 float subband samples to `channel`, clamping each to 16 bits.
    ///
    /// Only the first 32 values are consumed; fewer is an error.
    fn append_samples(&mut self, channel: usize, samples: &[f32]) -> Result<(), BufferError>;

    /// Copy up to `count` finalized bytes into `dest[offset..]`.
    ///
    /// Returns the number of bytes copied, always a whole number of sample
    /// frames. Returns 0 once the window is drained.
    fn read(&mut self, dest: &mut [u8], offset: usize, count: usize) -> Result<usize, BufferError>;

    /// Finalize the current decode unit and open its read window.
    fn write_buffer(&mut self) -> Result<(), BufferError>;

    /// Discard everything written so far and start a new decode unit.
    fn clear_buffer(&mut self);

    /// Release any resources held by the buffer.
    fn close(&mut self) -> Result<(), BufferError> {
        Ok(())
    }

    /// Ask the buffer to stop emitting output.
    fn set_stop_flag(&mut self) {}

    /// Number of interleaved output channels.
    fn channel_count(&self) -> usize;

    /// Nominal output rate in Hz, or -1 when unknown.
    fn sample_frequency(&self) -> i32 {
        UNSPECIFIED_FREQUENCY
    }

    /// Bytes written in the current decode unit.
    fn buffer_length(&self) -> usize;
}

/// Create an output buffer for the given channel layout.
///
/// Only mono output is available; other counts fail with
/// [`BufferError::UnsupportedChannelCount`].
pub fn output_buffer(channels: usize) -> Result<Box<dyn OutputBuffer>, BufferError> {
    match channels {
        1 => Ok(Box::new(MonoBuffer::new())),
        n => Err(BufferError::UnsupportedChannelCount(n)),
    }
}
