//! Command-line entry point.
//!
//! Reads a sequence file written by sd, folds it into the persisted
//! formation graph, writes the diagram artifacts, and re-renders the
//! graph image.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use sd_graph::{parse, render, snapshot};

/// Build a graph of square dance formations and calls from sd sequence
/// files.
///
/// The output directory is created if it does not yet exist. If it
/// contains a graph snapshot, the snapshot is loaded first, so repeated
/// runs accumulate into one graph.
#[derive(Parser)]
#[command(name = "sd-graph", version, about)]
struct Cli {
    /// Directory in which all output files are created.
    #[arg(long = "output-directory", short = 'o', default_value = ".")]
    output_directory: PathBuf,

    /// The input file as written by sd.
    sequence_file: PathBuf,
}

fn main() -> ExitCode {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("sd-graph: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> sd_graph::Result<()> {
    fs::create_dir_all(&cli.output_directory)?;
    let snapshot_path = cli.output_directory.join(snapshot::SNAPSHOT_FILE);

    let mut graph = snapshot::load(&snapshot_path)?;
    let session = parse::parse_file(&mut graph, &cli.sequence_file)?;
    for (index, entry) in session.iter().enumerate() {
        println!("{index:3}:  {entry}");
    }

    render::write_artifacts(&graph, &cli.output_directory)?;
    render::layout::render_graph(&cli.output_directory)?;

    // Persist only after rendering succeeded, so a failed run leaves the
    // previous snapshot untouched.
    snapshot::save(&snapshot_path, &graph)
}
