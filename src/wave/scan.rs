//! Chunk offset resolution
//!
//! Encoders put `fmt ` and `data` near the front of the file and `smpl` near
//! the back, so each tag gets a fast path for its usual position and a
//! bounded scan before falling back to the whole buffer. Every resolver
//! returns the offset of the first byte of the tag, not of its payload.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::wave::layout::{
    CANONICAL_DATA_OFFSET, CANONICAL_FMT_OFFSET, DATA_TAG, FMT_TAG, SMPL_TAG,
};

/// Default forward scan bound for `fmt `
pub const DEFAULT_FMT_WINDOW: usize = 5000;

/// Default backward scan window for `smpl`
pub const DEFAULT_SMPL_WINDOW: usize = 5000;

/// Scan window configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Only offsets below this are searched for `fmt `
    pub fmt_window: usize,
    /// Bytes at the end of the buffer searched backward for `smpl`
    pub smpl_window: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            fmt_window: DEFAULT_FMT_WINDOW,
            smpl_window: DEFAULT_SMPL_WINDOW,
        }
    }
}

impl ScanConfig {
    /// Parse a configuration from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[inline]
fn tag_at(bytes: &[u8], offset: usize, tag: &[u8; 4]) -> bool {
    bytes.get(offset..offset + 4) == Some(&tag[..])
}

/// Last offset at which a 4-byte tag still fits, if any.
#[inline]
fn last_tag_offset(bytes: &[u8]) -> Option<usize> {
    bytes.len().checked_sub(4)
}

/// First forward match in `[0, limit)`, never past the last fitting offset.
fn scan_forward(bytes: &[u8], tag: &[u8; 4], limit: usize) -> Option<usize> {
    let last = last_tag_offset(bytes)?;
    (0..=last)
        .take_while(|&offset| offset < limit)
        .find(|&offset| tag_at(bytes, offset, tag))
}

/// Locate `fmt `: offset 12, else the first match in
/// `[0, min(len - 4, fmt_window))`.
pub fn find_fmt(bytes: &[u8], config: &ScanConfig) -> Option<usize> {
    if tag_at(bytes, CANONICAL_FMT_OFFSET, FMT_TAG) {
        return Some(CANONICAL_FMT_OFFSET);
    }

    let limit = config.fmt_window.min(last_tag_offset(bytes)?);
    let found = scan_forward(bytes, FMT_TAG, limit);
    if let Some(offset) = found {
        debug!("'fmt ' chunk found by scan at offset {}", offset);
    }
    found
}

/// Locate `data`: offset 40, else the first match anywhere in the buffer.
pub fn find_data(bytes: &[u8]) -> Option<usize> {
    if tag_at(bytes, CANONICAL_DATA_OFFSET, DATA_TAG) {
        return Some(CANONICAL_DATA_OFFSET);
    }

    let found = scan_forward(bytes, DATA_TAG, usize::MAX);
    if let Some(offset) = found {
        debug!("'data' chunk found by scan at offset {}", offset);
    }
    found
}

/// Locate `smpl`: the match closest to the end inside the backward window,
/// else the first match from the start of the buffer.
///
/// The two passes matter when sample data happens to contain the bytes
/// `smpl`: a real chunk near the end wins over a spurious earlier hit.
pub fn find_smpl(bytes: &[u8], config: &ScanConfig) -> Option<usize> {
    let last = last_tag_offset(bytes)?;
    let floor = bytes.len().saturating_sub(config.smpl_window);

    if let Some(offset) = (floor..=last)
        .rev()
        .find(|&offset| tag_at(bytes, offset, SMPL_TAG))
    {
        return Some(offset);
    }

    let found = scan_forward(bytes, SMPL_TAG, usize::MAX);
    match found {
        Some(offset) => debug!("'smpl' chunk found outside tail window at offset {}", offset),
        None => debug!("no 'smpl' chunk present"),
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn padded(len: usize, placements: &[(usize, &[u8; 4])]) -> Vec<u8> {
        let mut bytes = vec![0u8; len];
        for (offset, tag) in placements {
            bytes[*offset..*offset + 4].copy_from_slice(&tag[..]);
        }
        bytes
    }

    #[test]
    fn test_fmt_canonical_offset() {
        let bytes = padded(64, &[(12, FMT_TAG)]);
        assert_eq!(find_fmt(&bytes, &ScanConfig::default()), Some(12));
    }

    #[test]
    fn test_fmt_canonical_wins_over_earlier_match() {
        let bytes = padded(64, &[(2, FMT_TAG), (12, FMT_TAG)]);
        assert_eq!(find_fmt(&bytes, &ScanConfig::default()), Some(12));
    }

    #[test]
    fn test_fmt_scan_finds_first_match() {
        let bytes = padded(128, &[(36, FMT_TAG), (80, FMT_TAG)]);
        assert_eq!(find_fmt(&bytes, &ScanConfig::default()), Some(36));
    }

    #[test]
    fn test_fmt_scan_is_bounded_by_window() {
        let bytes = padded(6000, &[(5200, FMT_TAG)]);
        assert_eq!(find_fmt(&bytes, &ScanConfig::default()), None);

        let wide = ScanConfig {
            fmt_window: 6000,
            ..ScanConfig::default()
        };
        assert_eq!(find_fmt(&bytes, &wide), Some(5200));
    }

    #[test]
    fn test_fmt_scan_excludes_last_tag_offset() {
        let bytes = padded(40, &[(36, FMT_TAG)]);
        assert_eq!(find_fmt(&bytes, &ScanConfig::default()), None);

        let bytes = padded(41, &[(36, FMT_TAG)]);
        assert_eq!(find_fmt(&bytes, &ScanConfig::default()), Some(36));
    }

    #[test]
    fn test_data_canonical_and_full_scan() {
        let bytes = padded(64, &[(40, DATA_TAG)]);
        assert_eq!(find_data(&bytes), Some(40));

        // Offset 40 is checked before any earlier match
        let bytes = padded(64, &[(20, DATA_TAG), (40, DATA_TAG)]);
        assert_eq!(find_data(&bytes), Some(40));

        let bytes = padded(20_000, &[(15_000, DATA_TAG)]);
        assert_eq!(find_data(&bytes), Some(15_000));
    }

    #[test]
    fn test_missing_tags() {
        let bytes = vec![0u8; 100];
        assert_eq!(find_fmt(&bytes, &ScanConfig::default()), None);
        assert_eq!(find_data(&bytes), None);
        assert_eq!(find_smpl(&bytes, &ScanConfig::default()), None);
    }

    #[test]
    fn test_tiny_buffers_never_panic() {
        for len in 0..4 {
            let bytes = vec![0u8; len];
            assert_eq!(find_fmt(&bytes, &ScanConfig::default()), None);
            assert_eq!(find_data(&bytes), None);
            assert_eq!(find_smpl(&bytes, &ScanConfig::default()), None);
        }
    }

    #[test]
    fn test_smpl_prefers_match_closest_to_end() {
        let bytes = padded(1000, &[(100, SMPL_TAG), (500, SMPL_TAG), (900, SMPL_TAG)]);
        assert_eq!(find_smpl(&bytes, &ScanConfig::default()), Some(900));
    }

    #[test]
    fn test_smpl_falls_back_to_forward_scan() {
        let bytes = padded(12_000, &[(1_000, SMPL_TAG), (2_000, SMPL_TAG)]);
        assert_eq!(find_smpl(&bytes, &ScanConfig::default()), Some(1_000));
    }

    #[test]
    fn test_smpl_window_edge_is_inclusive() {
        // Window floor is len - 5000 = 1000
        let bytes = padded(6_000, &[(200, SMPL_TAG), (1_000, SMPL_TAG)]);
        assert_eq!(find_smpl(&bytes, &ScanConfig::default()), Some(1_000));
    }

    #[test]
    fn test_config_from_json() {
        let config = ScanConfig::from_json(r#"{"fmt_window": 64}"#).unwrap();
        assert_eq!(config.fmt_window, 64);
        assert_eq!(config.smpl_window, DEFAULT_SMPL_WINDOW);

        assert!(ScanConfig::from_json("not json").is_err());
    }
}
