//! Start trimming
//!
//! Drops leading frames from a container and produces a new, independent
//! file buffer. Everything up to and including the `data` chunk header is
//! copied verbatim; the RIFF size and `data` size fields are then patched so
//! the result stays self-consistent. Bytes after the payload (trailing
//! chunks) are carried over unchanged.

use log::debug;

use crate::error::{Result, WaveError};
use crate::wave::container::WaveContainer;
use crate::wave::layout::{self, CHUNK_HEADER_LEN, CHUNK_SIZE_FIELD, RIFF_HEADER_LEN, RIFF_SIZE_OFFSET};

impl WaveContainer {
    /// Remove every frame before `start_sample` and return the new file.
    ///
    /// `start_sample == 0` returns an exact copy. `start_sample ==
    /// sample_count()` is allowed and leaves an empty `data` chunk.
    ///
    /// # Errors
    /// * `Range` - If `start_sample` exceeds `sample_count()`
    /// * `Bounds` - If the buffer ends before the requested cut position
    /// * `Format` - If the result would not fit a 32-bit RIFF size
    pub fn trim_start(&self, start_sample: usize) -> Result<Vec<u8>> {
        let available = self.sample_count();
        if start_sample > available {
            return Err(WaveError::Range {
                requested: start_sample,
                available,
            });
        }

        if start_sample == 0 {
            return Ok(self.bytes.clone());
        }

        let payload_start = self.data_offset + CHUNK_HEADER_LEN;
        // Absolute position of the first kept payload byte
        let skip = payload_start + self.bytes_per_frame() * start_sample;
        if skip > self.bytes.len() {
            return Err(WaveError::Bounds {
                offset: payload_start,
                len: skip - payload_start,
                buffer_len: self.bytes.len(),
            });
        }

        let mut trimmed = Vec::with_capacity(payload_start + self.bytes.len() - skip);
        trimmed.extend_from_slice(&self.bytes[..payload_start]);
        trimmed.extend_from_slice(&self.bytes[skip..]);

        let riff_size = u32::try_from(trimmed.len() - RIFF_HEADER_LEN)
            .map_err(|_| WaveError::format("trimmed file exceeds the 4 GiB RIFF limit"))?;
        layout::write_u32_le(&mut trimmed, RIFF_SIZE_OFFSET, riff_size)?;

        // skip - payload_start <= data_length because start_sample <= sample_count
        let cut = (skip - payload_start) as u32;
        let data_length = self.data_length() - cut;
        layout::write_u32_le(&mut trimmed, self.data_offset + CHUNK_SIZE_FIELD, data_length)?;

        debug!(
            "Trimmed {} frames ({} bytes): {} -> {} bytes, data length {}",
            start_sample,
            cut,
            self.bytes.len(),
            trimmed.len(),
            data_length
        );

        Ok(trimmed)
    }
}

// ============================================================================
// Tests
// ============================================================================
