use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the peptide export CSV (will over-write the config file)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Path to the protein description CSV (will over-write the config file)
    #[arg(short, long)]
    pub proteins: Option<PathBuf>,

    /// Path to the output CSV (will over-write the config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Minimum RT spread, in minutes, for a candidate peptide
    #[arg(long)]
    pub rt_tolerance: Option<f64>,

    /// Minimum fractional 1/k0 variation for a candidate peptide
    #[arg(long)]
    pub mobility_tolerance: Option<f64>,

    /// Keep only rows with RT at or above this value before detection
    #[arg(long)]
    pub rt_min: Option<f64>,

    /// Keep only rows with RT strictly below this value before detection
    #[arg(long)]
    pub rt_max: Option<f64>,
}
