//! Fixture builders for unit tests

/// Build a canonical 44-byte-header WAVE file with `frames` frames of
/// 16-bit payload. `bits` only goes into the header.
///
/// Sample values stay below 0x40 so no payload byte run can spell a tag.
pub fn canonical_wave(channels: u16, sample_rate: u32, bits: u16, frames: usize) -> Vec<u8> {
    let block_align = channels * (bits / 8);
    let payload: Vec<u8> = (0..frames * channels as usize)
        .flat_map(|i| (((i % 60) + 1) as i16).to_le_bytes())
        .collect();

    let mut bytes = Vec::with_capacity(44 + payload.len());
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + payload.len() as u32).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&channels.to_le_bytes());
    bytes.extend_from_slice(&sample_rate.to_le_bytes());
    bytes.extend_from_slice(&(sample_rate * block_align as u32).to_le_bytes());
    bytes.extend_from_slice(&block_align.to_le_bytes());
    bytes.extend_from_slice(&bits.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    bytes.extend_from_slice(&payload);
    bytes
}

/// A `smpl` chunk with a single loop record when `loop_count > 0`.
pub fn smpl_chunk(loop_count: u32, loop_start: u32) -> Vec<u8> {
    let records = loop_count.min(1);
    let mut chunk = Vec::new();
    chunk.extend_from_slice(b"smpl");
    chunk.extend_from_slice(&(36 + 24 * records).to_le_bytes());
    // manufacturer, product, sample period, unity note, pitch fraction,
    // SMPTE format, SMPTE offset
    for field in [0u32, 0, 22675, 60, 0, 0, 0] {
        chunk.extend_from_slice(&field.to_le_bytes());
    }
    chunk.extend_from_slice(&loop_count.to_le_bytes());
    chunk.extend_from_slice(&0u32.to_le_bytes());
    if records > 0 {
        // cue id, type, start, end, fraction, play count
        for field in [0u32, 0, loop_start, loop_start + 1, 0, 0] {
            chunk.extend_from_slice(&field.to_le_bytes());
        }
    }
    chunk
}
