#![warn(clippy::pedantic)]

mod config;
mod render;

use std::{fs, path::PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use config::Config;
use cube_sim::{CubeModel, PuzzleType, Scrambler};
use env_logger::TimestampPrecision;
use itertools::Itertools;
use log::{LevelFilter, debug, info};
use render::render_net;
use solve_stats::{SessionSummary, Solve, Stat};

/// Scrambles, cube nets and solve statistics for speedcubing
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The configuration file to use, in TOML format.
    #[arg(long, short = 'c', value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Draw stickers as letters instead of terminal colors
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a move sequence to a solved cube and draw it.
    Show {
        /// The puzzle to simulate, e.g. 4x4x4.
        #[arg(short, long)]
        puzzle: Option<PuzzleType>,
        /// Also draw the hidden middle layer of even puzzles.
        #[arg(long)]
        raw: bool,
        /// The moves to apply, e.g. "R U R' U'".
        moves: Vec<String>,
    },
    /// Generate random-move scrambles.
    Scramble {
        /// The puzzle to scramble, e.g. 4x4x4.
        #[arg(short, long)]
        puzzle: Option<PuzzleType>,
        /// How many scrambles to generate.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        /// Seed for reproducible scrambles.
        #[arg(long)]
        seed: Option<u64>,
        /// Number of moves per scramble.
        #[arg(long)]
        length: Option<usize>,
        /// Draw the scrambled cube under each scramble.
        #[arg(long)]
        show: bool,
    },
    /// Summarize a session of solve times.
    Stats {
        /// Read times from a file, one per line.
        #[arg(long)]
        file: Option<PathBuf>,
        /// Times such as 12.34, 1:02.50, 12.34+ or DNF.
        times: Vec<String>,
    },
    /// List the supported puzzles.
    Puzzles,
}

fn main() -> color_eyre::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = Config::load(cli.config.as_deref())?;
    let colored = config.color && !cli.no_color;
    debug!(target: "cli", "Loaded configuration: {config:?}");

    match cli.command {
        Commands::Show { puzzle, raw, moves } => {
            let puzzle = puzzle.unwrap_or(config.default_puzzle);
            let model = CubeModel::new(&moves.join(" "), puzzle);
            println!("{}", render_net(&model, colored, raw));
        }
        Commands::Scramble {
            puzzle,
            count,
            seed,
            length,
            show,
        } => {
            let puzzle = puzzle.unwrap_or(config.default_puzzle);
            let mut scrambler = match seed {
                Some(seed) => Scrambler::with_seed(puzzle, seed),
                None => Scrambler::new(puzzle),
            };
            if let Some(length) = length.or(config.scramble_length) {
                scrambler = scrambler.with_length(length);
            }
            info!(
                target: "cli",
                "Generating {count} scrambles: puzzle={puzzle} length={}",
                scrambler.length()
            );

            for i in 1..=count {
                let scramble = scrambler.next_scramble();
                if count > 1 {
                    println!("{i}. {scramble}");
                } else {
                    println!("{scramble}");
                }
                if show {
                    let model = CubeModel::new(&scramble, puzzle);
                    println!("{}\n", render_net(&model, colored, false));
                }
            }
        }
        Commands::Stats { file, times } => {
            let mut lines = times;
            if let Some(file) = file {
                let text = fs::read_to_string(&file)
                    .wrap_err_with(|| format!("Failed to read times from {}", file.display()))?;
                lines.extend(text.lines().map(str::to_owned));
            }
            let solves = lines
                .iter()
                .map(|line| line.trim())
                .filter(|line| !line.is_empty())
                .map(str::parse::<Solve>)
                .collect::<Result<Vec<_>, _>>()?;

            let summary = SessionSummary::new(&solves, &config.averages)?;
            print_summary(&summary);
        }
        Commands::Puzzles => {
            for puzzle in PuzzleType::ALL {
                println!("{puzzle}");
            }
        }
    }

    Ok(())
}

fn print_summary(summary: &SessionSummary) {
    let show = |stat: Option<Stat>| stat.map_or_else(|| "-".to_owned(), |s| s.to_string());

    println!("solves: {} ({} DNF)", summary.count, summary.dnf_count);
    println!("best:   {}", show(summary.best_single));
    println!("worst:  {}", show(summary.worst_single));
    println!("mean:   {}", show(summary.mean.map(Stat::Time)));
    for window in &summary.windows {
        let label = format!("ao{}:", window.size);
        println!(
            "{label:<8}{} (best {})",
            show(window.current),
            show(window.best)
        );
    }
    debug!(
        target: "cli",
        "Window sizes: {}",
        summary.windows.iter().map(|w| w.size).join(", ")
    );
}
