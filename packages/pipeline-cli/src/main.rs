//! Command-line front end for the listing pipeline.
//!
//! The `normalize` command takes raw extractions that were captured
//! elsewhere (a JSON file of field maps, one per listing) and runs the
//! deterministic half of the pipeline: normalization, diagram
//! derivation, reconciliation, and CSV output. The `reconcile` command
//! re-classifies existing output tables against a fresh master index.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pipeline", about = "Truck-listing normalization pipeline", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Normalize captured extractions and write the output tables
    Normalize {
        /// JSON file: an array of {"source_url", "fields"} objects
        #[arg(long)]
        input: PathBuf,

        /// Master price snapshot CSV from the previous run
        #[arg(long)]
        master: Option<PathBuf>,

        /// Directory for vehicle_info.csv and diagram_data.csv
        #[arg(long, default_value = "myresults")]
        out_dir: PathBuf,
    },

    /// Re-classify existing output tables against a master snapshot
    Reconcile {
        /// vehicle_info.csv from a previous run
        #[arg(long)]
        vehicles: PathBuf,

        /// diagram_data.csv from the same run
        #[arg(long)]
        diagrams: PathBuf,

        /// Master price snapshot CSV
        #[arg(long)]
        master: PathBuf,

        /// Directory for the re-stamped tables
        #[arg(long, default_value = "myresults")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Normalize {
            input,
            master,
            out_dir,
        } => commands::run_normalize(&input, master.as_deref(), &out_dir),
        Command::Reconcile {
            vehicles,
            diagrams,
            master,
            out_dir,
        } => commands::run_reconcile(&vehicles, &diagrams, &master, &out_dir),
    }
}
