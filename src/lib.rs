//! Fixed-capacity 16-bit PCM output buffer for MPEG audio decoders.
//!
//! A decoder appends samples for one decode unit (one frame), finalizes the
//! buffer, and a sink drains the little-endian PCM bytes in whole-sample
//! chunks. The buffer is then cleared and reused; it never grows.
//!
//! # Example
//!
//! ```
//! use pcm_obuffer::{MonoBuffer, OutputBuffer};
//!
//! let mut buffer = MonoBuffer::new();
//! buffer.append_samples(0, &[0.5; 32]).unwrap();
//! buffer.write_buffer().unwrap();
//!
//! let mut out = [0u8; 16];
//! let mut total = 0;
//! loop {
//!     let len = out.len();
//!     let n = buffer.read(&mut out, 0, len).unwrap();
//!     if n == 0 {
//!         break;
//!     }
//!     total += n;
//! }
//! assert_eq!(total, 64);
//! buffer.clear_buffer();
//! ```

mod buffer;
pub mod constants;
pub mod error;
mod mono;
mod sample;

pub use buffer::{BufferState, OutputBuffer, output_buffer};
pub use constants::OBUFFERSIZE;
pub use error::BufferError;
pub use mono::MonoBuffer;
pub use sample::clamp_sample;
