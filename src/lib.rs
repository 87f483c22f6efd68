//! wavtrim - RIFF/WAVE container inspection and trimming
//!
//! wavtrim works on complete in-memory WAVE files. It provides:
//! 1. Chunk resolution - locating the `fmt `, `data` and `smpl` chunks
//! 2. Derived properties - format tag, channels, sample rate, bit depth, loops
//! 3. Start trimming - a new buffer with leading frames removed and sizes patched
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use wavtrim::WaveContainer;
//!
//! let wave = WaveContainer::open(Path::new("loop.wav"))?;
//! println!("{} Hz, {} frames", wave.sample_rate(), wave.sample_count());
//! let trimmed: Vec<u8> = wave.trim_start(wave.sample_count() / 2)?;
//! # Ok::<(), wavtrim::WaveError>(())
//! ```

pub mod cli;
pub mod error;
pub mod wave;

pub use error::{Result, WaveError};
pub use wave::{ScanConfig, WaveContainer, WaveInfo};
