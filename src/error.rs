use std::io;

use thiserror::Error;

/// Errors that can occur while filling or draining an output buffer.
#[derive(Debug, Error)]
pub enum BufferError {
    /// Fewer float samples were supplied than one append consumes.
    #[error("expected at least {required} samples, got {actual}")]
    TooFewSamples { required: usize, actual: usize },
    /// `offset + count` does not fit in the destination slice.
    #[error("offset {offset} + count {count} exceeds destination length {len}")]
    DestinationTooSmall {
        offset: usize,
        count: usize,
        len: usize,
    },
    /// A write would run past the end of the backing store.
    #[error(
        "buffer capacity exceeded: {requested} bytes requested, {available} of {capacity} free"
    )]
    CapacityExceeded {
        capacity: usize,
        available: usize,
        requested: usize,
    },
    /// Requested capacity is zero or not a whole number of samples.
    #[error("invalid buffer capacity: {0} bytes")]
    InvalidCapacity(usize),
    /// Samples were appended after the buffer was finalized.
    #[error("buffer is finalized; clear it before appending")]
    Finalized,
    /// A read was attempted before the buffer was finalized.
    #[error("buffer is still filling; call write_buffer before reading")]
    NotFinalized,
    /// No buffer layout exists for this channel count.
    #[error("unsupported channel count: {0}")]
    UnsupportedChannelCount(usize),
    /// A wrapped I/O error from a sink.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
