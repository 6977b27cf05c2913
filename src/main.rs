//! Wordle Assist - CLI
//!
//! Suggests guesses for a five-letter word puzzle, narrows the candidates from
//! the feedback and can play itself for evaluation.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::io;
use std::path::{Path, PathBuf};
use wordle_assist::{
    commands::{SimulationConfig, run_auto, run_play, run_simulation, solve_word},
    corpus::{Corpus, load_corpus},
    output::{print_simulation_stats, print_solve_result},
    solver::{TierThresholds, TieredScorer},
};

#[derive(Parser)]
#[command(
    name = "wordle_assist",
    about = "Wordle assistant driven by letter constraints and a tiered frequency heuristic",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: newline-delimited five-letter words
    #[arg(
        short = 'w',
        long,
        global = true,
        default_value = "words/all_valid_words.txt"
    )]
    words: PathBuf,

    #[command(flatten)]
    tiers: TierArgs,
}

/// Tier boundaries of the scorer
#[derive(Args)]
struct TierArgs {
    /// Below this many candidates, probe for untested letters
    #[arg(long, global = true, default_value_t = 100)]
    probe_below: usize,

    /// Below this many candidates (and few known letters), score untested letters over the corpus
    #[arg(long, global = true, default_value_t = 1000)]
    partial_below: usize,

    /// Known-letter count that ends partial scoring
    #[arg(long, global = true, default_value_t = 4)]
    known_limit: usize,
}

impl TierArgs {
    const fn scorer(&self) -> TieredScorer {
        TieredScorer::new(TierThresholds::new(
            self.probe_below,
            self.partial_below,
            self.known_limit,
        ))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assistant (default)
    Play,

    /// Line protocol for automation drivers (`WORD:`, `UPDATED:`, `SOLVED:`, `FAILED:`, `ERROR:`)
    Auto,

    /// Solve a specific secret word
    Solve {
        /// The secret word to solve
        word: String,

        /// Show candidate counts and the tactic used per turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Let the solver play against random secrets
    Simulate {
        /// Number of games
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for reproducible secret draws
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn load(path: &Path) -> Result<Corpus> {
    load_corpus(path)
        .with_context(|| format!("cannot start without a word list ({})", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let corpus = load(&cli.words)?;
    let scorer = cli.tiers.scorer();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let stdin = io::stdin();
            run_play(&corpus, scorer, &mut stdin.lock(), &mut io::stdout())
        }
        Commands::Auto => {
            eprintln!("Loaded {} words", corpus.len());
            run_auto(&corpus, scorer, io::stdin().lock(), &mut io::stdout())?;
            Ok(())
        }
        Commands::Solve { word, verbose } => {
            let result = solve_word(&corpus, &word, scorer)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Simulate { count, seed } => {
            println!(
                "🎯 Simulating {} games over {} words...",
                count.to_string().bright_cyan(),
                corpus.len()
            );
            let mut config = SimulationConfig::new(count);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            let (stats, _) = run_simulation(&corpus, config, scorer)?;
            print_simulation_stats(&stats);
            Ok(())
        }
    }
}
