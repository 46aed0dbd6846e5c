//! Parses the OMIM `genemap2.txt` file and saves all records as JSON
//!
//! The file can be downloaded from <https://omim.org/downloads>
//! (registration required).
//!
//! `genemap2 --input-file genemap2.txt --output-path out/`
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use genemap2::paths::{check_input_file, check_output_dir};
use genemap2::{Dispatcher, Genemap2, Genemap2Result, JsonSink, RecordSink};

#[derive(Debug, Parser)]
#[command(
    version,
    about = "Parse the genemap2.txt file that can be downloaded from https://omim.org/downloads"
)]
struct Args {
    /// Path to the genemap2.txt file
    #[arg(short, long)]
    input_file: PathBuf,

    /// Folder to write the parsed data (output.json) to
    #[arg(short, long, default_value = ".")]
    output_path: PathBuf,

    /// Number of worker threads (default: one per CPU)
    #[arg(short, long, default_value_t = 0)]
    threads: usize,
}

fn run(args: &Args) -> Genemap2Result<()> {
    check_input_file(&args.input_file)?;
    check_output_dir(&args.output_path)?;

    let dispatcher = Dispatcher::new().threads(args.threads);
    let genemap = Genemap2::from_file_with(&args.input_file, dispatcher)?;
    info!(
        "Parsed {} genes from {}",
        genemap.len(),
        args.input_file.display()
    );

    let mut sink = JsonSink::new(&args.output_path);
    sink.write(genemap.records())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
