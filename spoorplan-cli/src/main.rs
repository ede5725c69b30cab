//! Console front-end for the route planner.
//!
//! Loads the fixed Dutch station table and a connection list, then answers
//! a routing session read from standard input: a disruption count, that
//! many station pairs to disable, and query pairs until `!`.

mod session;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use spoorplan_core::prelude::*;

use session::{OutputFormat, TokenReader};

#[derive(Parser)]
#[command(name = "spoorplan", version, about = "Shortest travel-time routes over a fixed rail network")]
struct Args {
    /// Connection list: whitespace-separated `from to minutes` triples,
    /// terminated by a `-1` sentinel
    network: PathBuf,

    /// Search algorithm used for the queries
    #[arg(long, value_enum, default_value_t = AlgorithmArg::AStar)]
    algorithm: AlgorithmArg,

    /// Output format for the query results
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Copy, Clone, ValueEnum)]
enum AlgorithmArg {
    Dijkstra,
    AStar,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Dijkstra => Algorithm::Dijkstra,
            AlgorithmArg::AStar => Algorithm::AStar,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), session::SessionError> {
    let stations = netherlands();
    let network = load_network(&args.network, &stations)?;
    let planner = RoutePlanner::new(stations, network)?;

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    session::run(
        planner,
        args.algorithm.into(),
        args.format,
        TokenReader::new(stdin),
        &mut stdout,
    )
}
