#[macro_use] extern crate log;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use simplelog::*;

use percolation::{PercolationExperiment, Summary};

////////////////////////////////////////////////////////////////////////////////

#[derive(Parser, Debug)]
#[command(author, version, about = "Percolation on an N-by-N grid", long_about = None)]
struct Args {
	#[command(subcommand)]
	cmd: Command,

	#[arg(short, long, action = clap::ArgAction::Count, global = true, help = "Raise stderr log level (repeatable)")]
	verbose: u8,

	#[arg(long, global = true, help = "Also write a debug log to this file")]
	log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
	/// Open the sites listed in FILE and report whether the grid percolates
	Grid {
		file: PathBuf,
		#[arg(long)]
		json: bool,
	},
	/// Estimate the percolation threshold with T random trials on N-by-N grids
	Stats {
		n: usize,
		t: usize,
		#[arg(long, help = "Seed for reproducible runs")]
		seed: Option<u64>,
		#[arg(long)]
		json: bool,
	},
}

fn init_logging(verbose: u8, log_file: Option<&PathBuf>) -> Result<()> {
	let level = match verbose {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		2 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	};
	let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
	loggers.push(TermLogger::new(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto));
	if let Some(path) = log_file {
		let file = File::create(path)
			.with_context(|| format!("failed to create log file {}", path.display()))?;
		loggers.push(WriteLogger::new(LevelFilter::Debug, Config::default(), file));
	}
	CombinedLogger::init(loggers).context("failed to install logger")?;
	Ok(())
}

fn run_grid(file: PathBuf, as_json: bool) -> Result<()> {
	let input = File::open(&file)
		.with_context(|| format!("failed to open {}", file.display()))?;
	let script = percolation::read_script(BufReader::new(input))
		.with_context(|| format!("failed to read {}", file.display()))?;
	let mut grid = script.replay()?;
	let percolates = grid.percolates();

	if as_json {
		println!("{}", json!({
			"size": grid.size(),
			"open_sites": grid.open_sites(),
			"percolates": percolates,
		}));
	} else if percolates {
		println!("Yes");
	} else {
		println!("No");
	}
	Ok(())
}

fn run_stats(n: usize, t: usize, seed: Option<u64>, as_json: bool) -> Result<()> {
	let start = Instant::now();
	let experiment = match seed {
		Some(seed) => PercolationExperiment::with_seed(n, t, seed)?,
		None => PercolationExperiment::new(n, t, &mut rand::thread_rng())?,
	};
	info!("elapsed: {:.3} s", start.elapsed().as_secs_f64());

	let Summary { size, trials, mean, stddev, confidence_low, confidence_high } = experiment.summary();
	if as_json {
		println!("{}", json!({
			"n": size,
			"trials": trials,
			"mean": mean,
			"stddev": stddev,
			"confidence_low": confidence_low,
			"confidence_high": confidence_high,
		}));
	} else {
		println!("mean                    = {}", mean);
		println!("stddev                  = {}", stddev);
		println!("95% confidence interval = [{}, {}]", confidence_low, confidence_high);
	}
	Ok(())
}

fn main() -> Result<()> {
	let args = Args::parse();
	init_logging(args.verbose, args.log_file.as_ref())?;

	match args.cmd {
		Command::Grid { file, json } => run_grid(file, json),
		Command::Stats { n, t, seed, json } => run_stats(n, t, seed, json),
	}
}
