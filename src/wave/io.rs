//! File loading for WAVE containers
//!
//! The container always works on a fully materialized buffer; this is only
//! the convenience that reads one from disk. Nothing here writes files.

use std::path::Path;

use log::debug;

use crate::error::{Result, WaveError};
use crate::wave::container::WaveContainer;
use crate::wave::scan::ScanConfig;

impl WaveContainer {
    /// Read a whole file and build a container from it.
    ///
    /// # Errors
    /// * `FileNotFound` - If the path does not exist
    /// * `Io` - If the file cannot be read
    /// * any construction error from [`WaveContainer::with_config`]
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with_config(path, &ScanConfig::default())
    }

    pub fn open_with_config(path: &Path, config: &ScanConfig) -> Result<Self> {
        if !path.exists() {
            return Err(WaveError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let bytes = std::fs::read(path)?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());

        Self::with_config(bytes, config)
    }
}
