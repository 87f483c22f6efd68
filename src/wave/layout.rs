//! RIFF/WAVE byte layout
//!
//! Chunk tags, fixed field offsets and the little-endian readers used by the
//! container. Field offsets are relative to the first byte of the chunk tag,
//! so they include the 8-byte `<tag><size>` header.

use crate::error::{Result, WaveError};

// ============================================================================
// Container signature
// ============================================================================

pub const RIFF_TAG: &[u8; 4] = b"RIFF";
pub const WAVE_TAG: &[u8; 4] = b"WAVE";

/// Absolute offset of the `WAVE` form type
pub const WAVE_TAG_OFFSET: usize = 8;

/// Absolute offset of the RIFF size field (total length minus 8)
pub const RIFF_SIZE_OFFSET: usize = 4;

/// Bytes preceding the RIFF size value in its own count
pub const RIFF_HEADER_LEN: usize = 8;

pub const FMT_TAG: &[u8; 4] = b"fmt ";
pub const DATA_TAG: &[u8; 4] = b"data";
pub const SMPL_TAG: &[u8; 4] = b"smpl";

/// Length of a chunk header (`<tag><size>`)
pub const CHUNK_HEADER_LEN: usize = 8;

/// Offset of the size field within any chunk
pub const CHUNK_SIZE_FIELD: usize = 4;

// ============================================================================
// Canonical positions (44-byte header, 16-byte PCM fmt chunk)
// ============================================================================

/// `fmt ` sits straight after the 12-byte RIFF/WAVE header
pub const CANONICAL_FMT_OFFSET: usize = 12;

/// Shortcut position tried before scanning for `data`. A 16-byte PCM `fmt `
/// chunk puts `data` at 36; 40 matches a 20-byte extended `fmt ` chunk.
pub const CANONICAL_DATA_OFFSET: usize = 40;

/// Absolute offset of the byte-rate field of a canonically placed `fmt `
pub const CANONICAL_BYTE_RATE_OFFSET: usize = 28;

// ============================================================================
// `fmt ` chunk fields (WAVEFORMAT / PCMWAVEFORMAT)
// ============================================================================

/// wFormatTag: 1 = integer PCM
pub const FMT_FORMAT_TAG: usize = 8;

/// nChannels
pub const FMT_CHANNELS: usize = 10;

/// nSamplesPerSec
pub const FMT_SAMPLE_RATE: usize = 12;

/// wBitsPerSample
pub const FMT_BITS_PER_SAMPLE: usize = 22;

/// End of the PCM `fmt ` fields read by the container
pub const FMT_FIELDS_END: usize = FMT_BITS_PER_SAMPLE + 2;

pub const PCM_FORMAT_TAG: u16 = 1;

// ============================================================================
// `smpl` chunk fields
// ============================================================================

/// cSampleLoops
pub const SMPL_LOOP_COUNT: usize = 36;

/// dwStart of the first sample-loop record
pub const SMPL_FIRST_LOOP_START: usize = 52;

/// Frame math assumes 16-bit samples regardless of wBitsPerSample.
pub const ASSUMED_BYTES_PER_SAMPLE: usize = 2;

// ============================================================================
// Readers
// ============================================================================

/// Confirm `RIFF` at 0 and `WAVE` at 8.
pub fn has_wave_signature(bytes: &[u8]) -> bool {
    bytes.get(0..4) == Some(&RIFF_TAG[..])
        && bytes.get(WAVE_TAG_OFFSET..WAVE_TAG_OFFSET + 4) == Some(&WAVE_TAG[..])
}

/// Borrow `len` bytes at `offset`, or fail with a bounds error.
pub fn slice_at(bytes: &[u8], offset: usize, len: usize) -> Result<&[u8]> {
    offset
        .checked_add(len)
        .and_then(|end| bytes.get(offset..end))
        .ok_or(WaveError::Bounds {
            offset,
            len,
            buffer_len: bytes.len(),
        })
}

pub fn read_u16_le(bytes: &[u8], offset: usize) -> Result<u16> {
    let raw = slice_at(bytes, offset, 2)?;
    Ok(u16::from_le_bytes([raw[0], raw[1]]))
}

pub fn read_u32_le(bytes: &[u8], offset: usize) -> Result<u32> {
    let raw = slice_at(bytes, offset, 4)?;
    Ok(u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
}

pub fn write_u32_le(bytes: &mut [u8], offset: usize, value: u32) -> Result<()> {
    let buffer_len = bytes.len();
    let field = offset
        .checked_add(4)
        .and_then(|end| bytes.get_mut(offset..end))
        .ok_or(WaveError::Bounds {
            offset,
            len: 4,
            buffer_len,
        })?;
    field.copy_from_slice(&value.to_le_bytes());
    Ok(())
}
