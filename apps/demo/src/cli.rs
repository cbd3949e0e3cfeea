//! # Command-line arguments

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use strum_macros::Display;

/// Builds one member of a sample variant set and prints it.
#[derive(Debug, Parser)]
#[command(name = "vfab")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Build a variant selected at runtime and print it")]
pub struct Cli {
    /// Variant set to build from
    #[arg(long, value_enum, default_value_t = SetName::Pairs)]
    pub set: SetName,

    /// Position of the variant; read from standard input when omitted
    #[arg(long, allow_negative_numbers = true)]
    pub selector: Option<i64>,

    /// First constructor argument (pair sets only)
    #[arg(long, allow_negative_numbers = true)]
    pub v1: Option<i32>,

    /// Second constructor argument (pair sets only)
    #[arg(long, allow_negative_numbers = true)]
    pub v2: Option<i32>,

    /// Configuration file; `vfab.toml` in the working directory is used if present
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override, e.g. `debug`
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display)]
#[strum(serialize_all = "snake_case")]
pub enum SetName {
    Pairs,
    Presets,
    Checked,
}
