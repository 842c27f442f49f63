use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct CliOptions {
    /// Path to the resource file to scan
    #[arg(short = 'i', long = "input_file", alias = "input-file")]
    pub input_file: PathBuf,

    /// Output directory for extracted chunks (default ./WAVs)
    #[arg(short = 'o', long = "output_dir", aliases = ["output-dir", "od"])]
    pub output_dir: Option<PathBuf>,

    /// Output filename prefix (default: input basename plus "_")
    #[arg(long)]
    pub prefix: Option<String>,

    /// Output filename extension (default ".wav")
    #[arg(long)]
    pub extension: Option<String>,

    /// Log candidates without writing any output files
    #[arg(long)]
    pub skip_write: bool,

    /// Suppress per-candidate progress lines
    #[arg(long)]
    pub quiet: bool,
}

pub fn parse() -> CliOptions {
    CliOptions::parse()
}
