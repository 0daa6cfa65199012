//! Wordle Assist - CLI
//!
//! Suggests guesses from what is known, auto-plays targets, benchmarks the
//! guess policy over the answer corpus, or runs a TUI assistant.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use wordle_assist::{
    commands::{BenchmarkConfig, HintConfig, run_benchmark, run_hint, select_targets, solve_words},
    output::{print_benchmark_result, print_hint, print_solution},
    solver::{CandidateStore, SolveError, Solver},
    wordlists::{DEFAULT_ANSWERS_PATH, DEFAULT_GUESSES_PATH, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_assist",
    about = "Wordle assistant: letter-constraint pruning and letter-frequency guess ranking",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer corpus: words that can be the target
    #[arg(long, global = true, default_value = DEFAULT_ANSWERS_PATH)]
    good: PathBuf,

    /// Guess corpus: words that may be played
    #[arg(long, global = true, default_value = DEFAULT_GUESSES_PATH)]
    valid: PathBuf,

    /// Only suggest guesses consistent with everything known
    #[arg(long, global = true)]
    hard: bool,

    /// More logging (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest the next guess (default)
    Hint {
        /// Known letters by slot, '.' for unknown (e.g. "CRA.E")
        pattern: Option<String>,

        /// Letters known to be in the answer (e.g. "CRAE")
        present: Option<String>,

        /// Words guessed so far
        #[arg(value_name = "GUESS")]
        history: Vec<String>,

        /// Number of guesses to show; candidates are listed when this few remain
        #[arg(short = 'n', long = "guesses", default_value = "1")]
        show: usize,
    },

    /// Auto-play target words with simulated feedback
    Auto {
        /// Target words
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Solve every answer and report guess statistics
    Benchmark {
        /// Only solve this many answers
        #[arg(short, long)]
        limit: Option<usize>,

        /// Pick answers in random order
        #[arg(short, long)]
        shuffle: bool,
    },

    /// Interactive TUI assistant
    Play {
        /// Number of suggestions to show
        #[arg(short = 'n', long = "show", default_value = "5")]
        show: usize,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_corpus(path: &Path, what: &str) -> Result<CandidateStore> {
    load_from_file(path).with_context(|| format!("failed to load {what} from {}", path.display()))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(SolveError::ExhaustedCandidates) = err.downcast_ref::<SolveError>() {
                println!("No valid guesses!");
            } else {
                eprintln!("Error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let answers = load_corpus(&cli.good, "answer corpus")?;
    let guesses = load_corpus(&cli.valid, "guess corpus")?;
    let solver = Solver::new(&answers, &guesses).with_hard_mode(cli.hard);

    let command = cli.command.unwrap_or(Commands::Hint {
        pattern: None,
        present: None,
        history: Vec::new(),
        show: 1,
    });

    match command {
        Commands::Hint {
            pattern,
            present,
            history,
            show,
        } => run_hint_command(
            &solver,
            pattern.as_deref(),
            present.as_deref(),
            &history,
            show,
        ),
        Commands::Auto { words } => run_auto_command(&solver, &words, cli.verbose > 0),
        Commands::Benchmark { limit, shuffle } => {
            run_benchmark_command(&solver, &answers, limit, shuffle)
        }
        Commands::Play { show } => run_play_command(solver, show),
    }
}

fn run_hint_command(
    solver: &Solver<'_>,
    pattern: Option<&str>,
    present: Option<&str>,
    history: &[String],
    show: usize,
) -> Result<()> {
    let config =
        HintConfig::parse(pattern, present, history, show).context("invalid hint arguments")?;
    let result = run_hint(solver, &config)?;
    print_hint(&result);
    Ok(())
}

fn run_auto_command(solver: &Solver<'_>, words: &[String], verbose: bool) -> Result<()> {
    solve_words(solver, words, |solution| print_solution(solution, verbose))
}

fn run_benchmark_command(
    solver: &Solver<'_>,
    answers: &CandidateStore,
    limit: Option<usize>,
    shuffle: bool,
) -> Result<()> {
    let config = BenchmarkConfig {
        limit,
        shuffle,
        progress: true,
    };
    let targets = select_targets(answers.words(), &config);

    println!("Running benchmark on {} words...", targets.len());
    let result = run_benchmark(solver, &targets, &config)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_play_command(solver: Solver<'_>, show: usize) -> Result<()> {
    use wordle_assist::interactive::{App, run_tui};

    let app = App::new(solver, show);
    run_tui(app)
}
