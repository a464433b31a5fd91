//! Single-channel 16-bit output buffer.
//!
//! Samples are stored as little-endian i16 in a fixed byte array. The buffer
//! alternates between filling (decoder appends) and finalized (sink reads).

use std::io::{self, ErrorKind, Write};

use byteorder::{ByteOrder, LittleEndian};
use tracing::{debug, trace};

use crate::buffer::{BufferState, OutputBuffer};
use crate::constants::{BYTES_PER_APPEND, BYTES_PER_SAMPLE, OBUFFERSIZE, SAMPLES_PER_APPEND};
use crate::error::BufferError;
use crate::sample::clamp_sample;

/// Fixed-capacity mono PCM buffer.
#[derive(Debug)]
pub struct MonoBuffer {
    storage: Box<[u8]>,
    /// Next free byte in `storage`.
    position: usize,
    /// Start of the unread part of the read window.
    read_offset: usize,
    /// End of the read window, fixed at finalize time.
    read_end: usize,
    state: BufferState,
}

impl MonoBuffer {
    /// Create a buffer holding one MPEG frame of mono samples.
    pub fn new() -> Self {
        Self::allocate(OBUFFERSIZE)
    }

    /// Create a buffer with a custom fixed capacity in bytes.
    ///
    /// The capacity must be non-zero and a whole number of samples.
    pub fn with_capacity(capacity: usize) -> Result<Self, BufferError> {
        if capacity == 0 || capacity % BYTES_PER_SAMPLE != 0 {
            return Err(BufferError::InvalidCapacity(capacity));
        }
        Ok(Self::allocate(capacity))
    }

    fn allocate(capacity: usize) -> Self {
        MonoBuffer {
            storage: vec![0u8; capacity].into_boxed_slice(),
            position: 0,
            read_offset: 0,
            read_end: 0,
            state: BufferState::Filling,
        }
    }

    /// Total capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    pub fn state(&self) -> BufferState {
        self.state
    }

    /// Bytes left in the read window; 0 while filling.
    pub fn bytes_left(&self) -> usize {
        match self.state {
            BufferState::Filling => 0,
            BufferState::Finalized => self.read_end - self.read_offset,
        }
    }

    /// Drain the rest of the read window into `sink`.
    ///
    /// Returns the number of bytes written. Bytes the sink accepted before an
    /// error are consumed, so a retry resumes where the sink stopped.
    pub fn write_to<W: Write>(&mut self, sink: &mut W) -> Result<usize, BufferError> {
        if self.state != BufferState::Finalized {
            debug!("rejected drain of unfinalized mono buffer");
            return Err(BufferError::NotFinalized);
        }
        let mut written = 0;
        while self.read_offset < self.read_end {
            match sink.write(&self.storage[self.read_offset..self.read_end]) {
                Ok(0) => {
                    let err = io::Error::new(ErrorKind::WriteZero, "sink accepted no bytes");
                    return Err(err.into());
                }
                Ok(n) => {
                    self.read_offset += n;
                    written += n;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(written)
    }

    /// Reject writes while finalized or when `bytes` won't fit.
    fn ensure_writable(&self, bytes: usize) -> Result<(), BufferError> {
        if self.state == BufferState::Finalized {
            debug!("rejected append to finalized mono buffer");
            return Err(BufferError::Finalized);
        }
        let available = self.storage.len() - self.position;
        if bytes > available {
            debug!("mono buffer full: {} bytes requested, {} free", bytes, available);
            return Err(BufferError::CapacityExceeded {
                capacity: self.storage.len(),
                available,
                requested: bytes,
            });
        }
        Ok(())
    }

    #[inline]
    fn put(&mut self, sample: i16) {
        let end = self.position + BYTES_PER_SAMPLE;
        LittleEndian::write_i16(&mut self.storage[self.position..end], sample);
        self.position = end;
    }
}

impl Default for MonoBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputBuffer for MonoBuffer {
    /// `channel` is ignored; there is only one.
    fn append(&mut self, _channel: usize, sample: i16) -> Result<(), BufferError> {
        self.ensure_writable(BYTES_PER_SAMPLE)?;
        self.put(sample);
        Ok(())
    }

    fn append_samples(&mut self, _channel: usize, samples: &[f32]) -> Result<(), BufferError> {
        if samples.len() < SAMPLES_PER_APPEND {
            debug!("rejected append of {} samples, need {}", samples.len(), SAMPLES_PER_APPEND);
            return Err(BufferError::TooFewSamples {
                required: SAMPLES_PER_APPEND,
                actual: samples.len(),
            });
        }
        self.ensure_writable(BYTES_PER_APPEND)?;

        for &fs in &samples[..SAMPLES_PER_APPEND] {
            self.put(clamp_sample(fs));
        }
        Ok(())
    }

    fn read(&mut self, dest: &mut [u8], offset: usize, count: usize) -> Result<usize, BufferError> {
        let fits = offset
            .checked_add(count)
            .is_some_and(|end| end <= dest.len());
        if !fits {
            debug!("rejected read: offset {} + count {} exceeds {}", offset, count, dest.len());
            return Err(BufferError::DestinationTooSmall {
                offset,
                count,
                len: dest.len(),
            });
        }
        if self.state != BufferState::Finalized {
            debug!("rejected read of unfinalized mono buffer");
            return Err(BufferError::NotFinalized);
        }

        let remaining = self.read_end - self.read_offset;
        let copy_size = if count > remaining {
            remaining
        } else {
            // Whole sample frames only
            count - count % BYTES_PER_SAMPLE
        };

        dest[offset..offset + copy_size]
            .copy_from_slice(&self.storage[self.read_offset..self.read_offset + copy_size]);
        self.read_offset += copy_size;
        Ok(copy_size)
    }

    fn write_buffer(&mut self) -> Result<(), BufferError> {
        self.read_offset = 0;
        self.read_end = self.position;
        self.state = BufferState::Finalized;
        trace!("mono buffer finalized: {} bytes readable", self.read_end);
        Ok(())
    }

    fn clear_buffer(&mut self) {
        trace!("mono buffer cleared ({} bytes discarded)", self.position);
        self.position = 0;
        self.state = BufferState::Filling;
    }

    fn channel_count(&self) -> usize {
        1
    }

    fn buffer_length(&self) -> usize {
        self.position
    }
}
