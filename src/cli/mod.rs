//! CLI Module
//!
//! Command-line interface for inspecting and trimming WAVE files.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// wavtrim - inspect and start-trim RIFF/WAVE files
#[derive(Parser, Debug)]
#[command(name = "wavtrim")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON file with chunk scan windows
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print format, length and loop properties
    #[command(name = "info")]
    Info {
        /// Path to the WAVE file
        path: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Drop leading frames and write the new file to stdout
    #[command(name = "trim")]
    Trim {
        /// Path to the WAVE file
        path: PathBuf,

        /// First frame to keep
        #[arg(short, long)]
        start: usize,
    },
}
