//! The WAVE container
//!
//! A [`WaveContainer`] owns the complete file contents and the offsets of the
//! `fmt `, `data` and (optional) `smpl` chunks resolved when it was built.
//! Every property is read from the buffer on demand, so nothing cached can
//! drift from the bytes.

use log::debug;
use serde::Serialize;

use crate::error::{Result, WaveError};
use crate::wave::layout::{
    self, ASSUMED_BYTES_PER_SAMPLE, CANONICAL_BYTE_RATE_OFFSET, CHUNK_HEADER_LEN,
    CHUNK_SIZE_FIELD, FMT_BITS_PER_SAMPLE, FMT_CHANNELS, FMT_FIELDS_END, FMT_FORMAT_TAG,
    FMT_SAMPLE_RATE, PCM_FORMAT_TAG, RIFF_SIZE_OFFSET, SMPL_FIRST_LOOP_START, SMPL_LOOP_COUNT,
};
use crate::wave::scan::{self, ScanConfig};

const UNSUPPORTED: &str = "not a supported PCM WAVE file";

/// An in-memory RIFF/WAVE file with resolved chunk offsets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveContainer {
    pub(crate) bytes: Vec<u8>,
    fmt_offset: usize,
    pub(crate) data_offset: usize,
    smpl_offset: Option<usize>,
}

/// Snapshot of every derived property of a container
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaveInfo {
    pub byte_length: usize,
    pub data_format: u16,
    pub channel_count: u16,
    pub sample_rate: u32,
    pub bit_depth: u16,
    pub data_length: u32,
    pub sample_count: usize,
    pub loop_count: u32,
    pub loop_start: u32,
    pub wave_length_secs: f64,
}

impl WaveContainer {
    /// Build a container with the default scan windows.
    ///
    /// # Errors
    /// * `Format` - If the RIFF/WAVE signature is wrong or `fmt `/`data` is missing
    /// * `Bounds` - If the `fmt ` fields or the `data` header are truncated
    pub fn new(bytes: Vec<u8>) -> Result<Self> {
        Self::with_config(bytes, &ScanConfig::default())
    }

    /// Build a container with explicit scan windows.
    pub fn with_config(bytes: Vec<u8>, config: &ScanConfig) -> Result<Self> {
        if !layout::has_wave_signature(&bytes) {
            return Err(WaveError::format(UNSUPPORTED));
        }

        let fmt_offset = scan::find_fmt(&bytes, config)
            .ok_or_else(|| WaveError::format(format!("{}: no 'fmt ' chunk", UNSUPPORTED)))?;
        layout::slice_at(&bytes, fmt_offset, FMT_FIELDS_END)?;

        let data_offset = scan::find_data(&bytes)
            .ok_or_else(|| WaveError::format(format!("{}: no 'data' chunk", UNSUPPORTED)))?;
        layout::slice_at(&bytes, data_offset, CHUNK_HEADER_LEN)?;

        let smpl_offset = scan::find_smpl(&bytes, config);

        debug!(
            "WAVE container: {} bytes, fmt @{}, data @{}, smpl @{:?}",
            bytes.len(),
            fmt_offset,
            data_offset,
            smpl_offset
        );

        Ok(WaveContainer {
            bytes,
            fmt_offset,
            data_offset,
            smpl_offset,
        })
    }

    // ========================================================================
    // Raw access
    // ========================================================================

    /// The complete file contents
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn fmt_offset(&self) -> usize {
        self.fmt_offset
    }

    pub fn data_offset(&self) -> usize {
        self.data_offset
    }

    pub fn smpl_offset(&self) -> Option<usize> {
        self.smpl_offset
    }

    pub fn has_loop(&self) -> bool {
        self.smpl_offset.is_some()
    }

    /// Close the container, handing back its buffer.
    pub fn into_inner(self) -> Vec<u8> {
        self.bytes
    }

    // ========================================================================
    // `fmt ` properties
    // ========================================================================

    // Reads stay inside the range checked in `with_config`.
    fn fmt_u16(&self, field: usize) -> u16 {
        let at = self.fmt_offset + field;
        u16::from_le_bytes([self.bytes[at], self.bytes[at + 1]])
    }

    fn fmt_u32(&self, field: usize) -> u32 {
        let at = self.fmt_offset + field;
        u32::from_le_bytes([
            self.bytes[at],
            self.bytes[at + 1],
            self.bytes[at + 2],
            self.bytes[at + 3],
        ])
    }

    /// Format tag; 1 is integer PCM
    pub fn data_format(&self) -> u16 {
        self.fmt_u16(FMT_FORMAT_TAG)
    }

    pub fn is_pcm(&self) -> bool {
        self.data_format() == PCM_FORMAT_TAG
    }

    pub fn channel_count(&self) -> u16 {
        self.fmt_u16(FMT_CHANNELS)
    }

    pub fn sample_rate(&self) -> u32 {
        self.fmt_u32(FMT_SAMPLE_RATE)
    }

    /// Bits per sample as declared. Frame math does not use it.
    pub fn bit_depth(&self) -> u16 {
        self.fmt_u16(FMT_BITS_PER_SAMPLE)
    }

    // ========================================================================
    // `data` properties
    // ========================================================================

    /// Declared payload length of the `data` chunk
    pub fn data_length(&self) -> u32 {
        let at = self.data_offset + CHUNK_SIZE_FIELD;
        u32::from_le_bytes([
            self.bytes[at],
            self.bytes[at + 1],
            self.bytes[at + 2],
            self.bytes[at + 3],
        ])
    }

    /// Bytes per frame, assuming 16-bit samples whatever `bit_depth` says.
    ///
    /// Wrong for 8, 24 and 32-bit PCM; kept so trimmed files match those
    /// produced by earlier releases.
    pub fn bytes_per_frame(&self) -> usize {
        self.channel_count() as usize * ASSUMED_BYTES_PER_SAMPLE
    }

    /// Number of frames in the payload (0 if the channel count is 0)
    pub fn sample_count(&self) -> usize {
        match self.bytes_per_frame() {
            0 => 0,
            frame => self.data_length() as usize / frame,
        }
    }

    /// The PCM payload: `data_length` bytes after the `data` header.
    ///
    /// # Errors
    /// * `Bounds` - If the declared length runs past the end of the buffer
    pub fn frames(&self) -> Result<&[u8]> {
        layout::slice_at(
            &self.bytes,
            self.data_offset + CHUNK_HEADER_LEN,
            self.data_length() as usize,
        )
    }

    // ========================================================================
    // `smpl` properties
    // ========================================================================

    fn smpl_u32(&self, field: usize) -> Result<u32> {
        match self.smpl_offset {
            Some(offset) => layout::read_u32_le(&self.bytes, offset + field),
            None => Ok(0),
        }
    }

    /// Number of sample loops; 0 without a `smpl` chunk
    pub fn loop_count(&self) -> Result<u32> {
        self.smpl_u32(SMPL_LOOP_COUNT)
    }

    /// Start frame of the first loop; 0 without a `smpl` chunk
    pub fn loop_start(&self) -> Result<u32> {
        self.smpl_u32(SMPL_FIRST_LOOP_START)
    }

    // ========================================================================
    // Length
    // ========================================================================

    /// Duration in seconds: RIFF size field over the byte rate.
    ///
    /// Reads absolute offsets 4 and 28, i.e. assumes `fmt ` at its canonical
    /// position even when it was resolved elsewhere. The quotient is not
    /// truncated to whole seconds; callers comparing against integer
    /// division must floor it themselves.
    ///
    /// # Errors
    /// * `Bounds` - If the buffer is shorter than 32 bytes
    /// * `Format` - If the byte rate is zero
    pub fn wave_length(&self) -> Result<f64> {
        let riff_size = layout::read_u32_le(&self.bytes, RIFF_SIZE_OFFSET)? as i32;
        let byte_rate = layout::read_u32_le(&self.bytes, CANONICAL_BYTE_RATE_OFFSET)? as i32;

        if byte_rate == 0 {
            return Err(WaveError::format("byte rate at offset 28 is zero"));
        }

        Ok((riff_size as f64 / byte_rate as f64).abs())
    }

    /// Collect every derived property.
    pub fn info(&self) -> Result<WaveInfo> {
        Ok(WaveInfo {
            byte_length: self.len(),
            data_format: self.data_format(),
            channel_count: self.channel_count(),
            sample_rate: self.sample_rate(),
            bit_depth: self.bit_depth(),
            data_length: self.data_length(),
            sample_count: self.sample_count(),
            loop_count: self.loop_count()?,
            loop_start: self.loop_start()?,
            wave_length_secs: self.wave_length()?,
        })
    }
}

impl TryFrom<Vec<u8>> for WaveContainer {
    type Error = WaveError;

    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        WaveContainer::new(bytes)
    }
}

impl AsRef<[u8]> for WaveContainer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

// ============================================================================
// Tests
// ============================================================================
