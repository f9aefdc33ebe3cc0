//! Command-line argument definitions for the umlstub CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the input diagram, the output root,
//! configuration file selection, and logging.

use clap::Parser;

/// Command-line arguments for the umlstub generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input UMLet diagram
    #[arg(help = "Path to the input .uxf file")]
    pub input: String,

    /// Root directory of the generated package tree
    /// (defaults to a fresh timestamped directory under the system temp dir)
    #[arg(short, long)]
    pub outdir: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Write log output to this file instead of stderr
    #[arg(long)]
    pub logfile: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
