mod cli;
mod config;
mod errors;

use clap::Parser;
use isoseek::serde::peaks_io::{
    load_peptide_records,
    read_protein_descriptions,
    write_annotated_csv,
    write_candidates_csv,
};
use isoseek::{
    annotate_descriptions,
    find_candidates,
    slice_rt_range,
};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::{
    Config,
    RtWindow,
};

fn main() -> std::result::Result<(), errors::CliError> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        ) // This uses RUST_LOG environment variable
        .init();

    // Parse command line arguments
    let args = Cli::parse();

    // Load and parse configuration
    let mut config = match args.config {
        Some(ref path) => {
            let conf = match std::fs::File::open(path) {
                Ok(x) => x,
                Err(e) => {
                    return Err(errors::CliError::Io {
                        source: e.to_string(),
                        path: Some(path.to_string_lossy().to_string()),
                    });
                }
            };
            let config: Result<Config, _> = serde_json::from_reader(conf);
            match config {
                Ok(x) => x,
                Err(e) => {
                    return Err(errors::CliError::ParseError { msg: e.to_string() });
                }
            }
        }
        None => Config::default(),
    };

    // Override config with command line arguments if provided
    if let Some(input) = args.input {
        config.input = Some(input);
    }
    if let Some(proteins) = args.proteins {
        config.proteins = Some(proteins);
    }
    if let Some(output) = args.output {
        config.output = Some(output);
    }
    if let Some(rt_tolerance) = args.rt_tolerance {
        config.tolerance.rt_diff = rt_tolerance;
    }
    if let Some(mobility_tolerance) = args.mobility_tolerance {
        config.tolerance.mobility_frac = mobility_tolerance;
    }
    if args.rt_min.is_some() || args.rt_max.is_some() {
        let defaults = config.rt_window.unwrap_or_default();
        config.rt_window = Some(RtWindow {
            min: args.rt_min.unwrap_or(defaults.min),
            max: args.rt_max.unwrap_or(defaults.max),
        });
    }

    let input = match config.input {
        Some(ref x) => x.clone(),
        None => {
            return Err(errors::CliError::Config {
                source: "No input provided, please provide one in either the config file or with the --input flag".to_string(),
            });
        }
    };
    info!("Parsed configuration: {:#?}", config);

    // A file that fails to load degrades to an empty table; the run then
    // reports zero candidates instead of crashing.
    let mut records = load_peptide_records(&input);
    info!("Loaded {} peptide records from {:?}", records.len(), input);

    if let Some(window) = config.rt_window {
        records = slice_rt_range(&records, window.min, window.max);
        info!(
            "{} records remain in the RT window [{}, {})",
            records.len(),
            window.min,
            window.max
        );
    }

    let candidates = find_candidates(&records, &config.tolerance);
    info!("Found {} isomer candidate peptides", candidates.len());

    match (&config.proteins, &config.output) {
        (Some(proteins_path), Some(output)) => {
            let proteins = read_protein_descriptions(proteins_path)?;
            let annotated = annotate_descriptions(&candidates, &proteins);
            write_annotated_csv(&annotated, output)?;
        }
        (None, Some(output)) => {
            write_candidates_csv(&candidates, output)?;
        }
        (proteins, None) => {
            // No output file requested; print a summary to stdout.
            if let Some(proteins_path) = proteins {
                let proteins = read_protein_descriptions(proteins_path)?;
                for candidate in annotate_descriptions(&candidates, &proteins) {
                    println!(
                        "{}\tz={}\tmax_RT_diff={:.3}\tfrac_variation={:.4}\t{}",
                        candidate.peptide,
                        candidate.z,
                        candidate.max_rt_diff,
                        candidate.frac_variation,
                        candidate.description.as_deref().unwrap_or("-"),
                    );
                }
            } else {
                for candidate in &candidates {
                    println!(
                        "{}\tz={}\tmax_RT_diff={:.3}\tfrac_variation={:.4}",
                        candidate.peptide,
                        candidate.z,
                        candidate.max_rt_diff,
                        candidate.frac_variation,
                    );
                }
            }
        }
    }

    Ok(())
}
