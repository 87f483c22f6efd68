//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::io::Write;
use std::path::Path;

use log::info;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::wave::{ScanConfig, WaveContainer, WaveInfo};

/// `info` output: the derived properties plus a payload digest.
#[derive(Debug, Serialize)]
pub struct InfoReport {
    #[serde(flatten)]
    pub info: WaveInfo,
    pub payload_sha256: String,
}

/// Load scan windows from a JSON file, or use the defaults.
pub fn load_config(path: Option<&Path>) -> Result<ScanConfig> {
    match path {
        Some(path) => {
            info!("Loading scan config: {}", path.display());
            ScanConfig::from_json(&std::fs::read_to_string(path)?)
        }
        None => Ok(ScanConfig::default()),
    }
}

/// SHA-256 of the PCM payload, hex encoded.
pub fn payload_digest(wave: &WaveContainer) -> Result<String> {
    let digest = Sha256::digest(wave.frames()?);
    Ok(digest.iter().map(|b| format!("{:02x}", b)).collect())
}

/// Gather the `info` report for a container.
pub fn report(wave: &WaveContainer) -> Result<InfoReport> {
    Ok(InfoReport {
        info: wave.info()?,
        payload_sha256: payload_digest(wave)?,
    })
}

/// Print the properties of a WAVE file.
pub fn info(path: &Path, json: bool, config: &ScanConfig) -> Result<()> {
    info!("Inspecting: {}", path.display());

    let wave = WaveContainer::open_with_config(path, config)?;
    let report = report(&wave)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let info = &report.info;
    println!("File:          {}", path.display());
    println!("Size:          {} bytes", info.byte_length);
    println!(
        "Format:        {}{}",
        info.data_format,
        if wave.is_pcm() { " (PCM)" } else { "" }
    );
    println!("Channels:      {}", info.channel_count);
    println!("Sample rate:   {} Hz", info.sample_rate);
    println!("Bit depth:     {}", info.bit_depth);
    println!("Data length:   {} bytes", info.data_length);
    println!("Samples:       {}", info.sample_count);
    println!("Length:        {:.3}s", info.wave_length_secs);
    if wave.has_loop() {
        println!("Loops:         {} (first starts at {})", info.loop_count, info.loop_start);
    } else {
        println!("Loops:         none");
    }
    println!("Payload SHA-256: {}", report.payload_sha256);

    Ok(())
}

/// Trim leading frames and stream the new file to stdout.
pub fn trim(path: &Path, start: usize, config: &ScanConfig) -> Result<()> {
    info!("Trimming {} frames from: {}", start, path.display());

    let wave = WaveContainer::open_with_config(path, config)?;
    let trimmed = wave.trim_start(start)?;

    info!(
        "Data length {} -> {} bytes",
        wave.data_length(),
        wave.data_length() as usize - wave.bytes_per_frame() * start
    );

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&trimmed)?;
    stdout.flush()?;

    Ok(())
}
