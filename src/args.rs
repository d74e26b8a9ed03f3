use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "urltally",
    about = "Scan a log file for URLs and report the most frequent domains and paths",
    version,
    long_about = None
)]
pub struct Args {
    /// Input file to scan
    pub input: PathBuf,

    /// Output file for the report
    pub output: PathBuf,

    /// Number of top domains and paths to report
    #[arg(short = 'n', long = "top", default_value_t = 1)]
    pub top: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
