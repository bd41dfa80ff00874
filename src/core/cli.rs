//! Command line interface.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Export and download the monthly history reports of a year.
    Export(ExportArgs),
    /// Print the realtime dashboard metrics as JSON.
    Realtime,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Year of the reports.
    #[arg(long)]
    pub year: i32,
    /// First month to export.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub from_month: u32,
    /// Last month to export.
    #[arg(long, default_value_t = 12, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub to_month: u32,
    /// Folder the reports are written to. Overrides `DOWNLOAD_FOLDER`.
    #[arg(long)]
    pub folder: Option<PathBuf>,
}
