//! Wordle Overlap Guesser - CLI
//!
//! Watches the guesser find secret words, one round at a time, in a plain
//! terminal loop or a TUI.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use wordle_overlap::{
    commands::{SolveConfig, rank_words, run_benchmark, run_simple, sample_targets, solve_word},
    core::Word,
    output::{print_benchmark_result, print_rank_result, print_solve_result},
    solver::{CandidateSet, DEFAULT_OPENER},
    wordlists::{
        DICTIONARY,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_overlap",
    about = "Autonomous Wordle guesser using a letter-overlap heuristic",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// First guess of every round
    #[arg(short, long, global = true, default_value = DEFAULT_OPENER)]
    opener: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play rounds in the terminal, entering a secret word for each (default)
    Simple {
        /// Number of rounds to play
        #[arg(short, long, default_value = "3")]
        rounds: usize,
    },

    /// Interactive TUI: step through each guess
    Play,

    /// Find a specific secret word
    Solve {
        /// The secret word
        word: String,

        /// Show candidate counts before and after each guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how the full dictionary ranks by overlap score
    Rank {
        /// Number of top words to show
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,

        /// Also report the rank of this word
        word: Option<String>,
    },

    /// Find many secret words and report guess statistics
    Benchmark {
        /// Number of random dictionary words to test (default: all)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for picking the sample
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Load the dictionary selected by the -w flag
fn load_candidates(wordlist: &str) -> Result<(CandidateSet, String)> {
    match wordlist {
        "embedded" => Ok((
            CandidateSet::new(words_from_slice(DICTIONARY)),
            "embedded dictionary".to_string(),
        )),
        path => {
            let words = load_from_file(path)?;
            Ok((CandidateSet::new(words), path.to_string()))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut candidates, source) = load_candidates(&cli.wordlist)?;
    let opener = Word::new(&cli.opener).context("invalid opener")?;

    let command = cli.command.unwrap_or(Commands::Simple { rounds: 3 });

    match command {
        Commands::Simple { rounds } => {
            println!("Using {source} with {} words.", candidates.len());
            let stdin = std::io::stdin();
            run_simple(&mut candidates, &opener, rounds, &mut stdin.lock())
        }
        Commands::Play => run_play_command(candidates, opener),
        Commands::Solve { word, verbose } => {
            let config = SolveConfig::new(word, opener);
            let result = solve_word(&config, &mut candidates)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Rank { top, word } => run_rank_command(&mut candidates, top, word.as_deref()),
        Commands::Benchmark { count, seed } => {
            let targets = sample_targets(&candidates, count, seed);
            println!(
                "Running benchmark on {} words with opener {}...",
                targets.len(),
                opener.text().to_uppercase()
            );
            let result = run_benchmark(&candidates, &targets, &opener, true);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_rank_command(candidates: &mut CandidateSet, top: usize, word: Option<&str>) -> Result<()> {
    let focus = word
        .map(Word::new)
        .transpose()
        .context("invalid word to rank")?;

    let result = rank_words(candidates, top, focus.as_ref());
    print_rank_result(&result);

    if let (Some(word), None) = (&focus, &result.focus) {
        bail!("'{word}' is not in the dictionary");
    }
    Ok(())
}

fn run_play_command(candidates: CandidateSet, opener: Word) -> Result<()> {
    use wordle_overlap::interactive::{App, run_tui};

    let app = App::new(candidates, opener);
    run_tui(app)
}
