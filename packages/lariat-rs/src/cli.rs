//! Command line arguments backing the `lariat` binary.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
  name = "lariat",
  about = "A CLI tool for replaying lasso text selections over OCR region snapshots",
  version
)]
pub struct Args {
  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Print version information
  Version,
  /// Select the regions enclosed by a stored path
  Select {
    /// JSON snapshot of OCR text regions
    #[arg(long, short = 'r')]
    regions_file: PathBuf,

    /// JSON file holding the drawn path points
    #[arg(long, short = 'p')]
    path_file: PathBuf,

    /// Print the joined text of the selected regions instead of their indices
    #[arg(long)]
    text: bool,
  },
  /// Replay a recorded pointer-event trace through the gesture tracker
  Replay {
    /// JSON snapshot of OCR text regions
    #[arg(long, short = 'r')]
    regions_file: PathBuf,

    /// JSON file holding the pointer-event log
    #[arg(long, short = 't')]
    trace_file: PathBuf,
  },
}
