//! WAVE Container Module
//!
//! Parsing and editing of in-memory RIFF/WAVE files:
//! - Byte layout constants and little-endian field access
//! - Chunk offset resolution for `fmt `, `data` and `smpl`
//! - Derived audio properties and payload extraction
//! - Start-trim rewriting with consistent chunk sizes

pub mod container;
pub mod io;
pub mod layout;
pub mod scan;
pub mod trim;

#[cfg(test)]
pub(crate) mod test_support;

pub use container::{WaveContainer, WaveInfo};
pub use scan::ScanConfig;
