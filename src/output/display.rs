//! Display functions for rounds and command results

use super::formatters::{colored_guess, create_progress_bar, spaced};
use crate::commands::{BenchmarkResult, RankResult, SolveResult};
use crate::core::Word;
use crate::solver::{GuessStep, SolveError};
use colored::Colorize;

/// Print the secret word the way every guess below it is laid out
pub fn print_round_header(target: &Word) {
    println!("Trying to find secret word: ");
    println!("       {}", spaced(target.text()).bright_yellow().bold());
    println!();
}

/// Print one guess: numbered, spaced letters, `*` under misplaced letters
pub fn print_step(step: &GuessStep) {
    println!("{:5}. {}", step.number, spaced(&step.display()));
    println!("       {}", spaced(&step.feedback.symbols()));
}

pub fn print_exhausted(err: &SolveError) {
    println!("{}", format!("❌ {err}").red().bold());
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}  ({} words in dictionary)",
        result.target.text().to_uppercase().bright_yellow().bold(),
        result.dictionary_size
    );
    println!("{}", "─".repeat(60).cyan());

    for step in &result.steps {
        println!(
            "\n{:5}. {}  {}",
            step.number,
            colored_guess(&step.feedback),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "       Candidates: {} → {}",
                step.viable_before, step.viable_after
            );
        }
    }

    println!();
    println!(
        "{}",
        format!("✅ Got it in {} guesses!", result.guess_count())
            .green()
            .bold()
    );
}

/// Print the best-ranked words of a dictionary
pub fn print_rank_result(result: &RankResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} words ",
        "OVERLAP RANKING:".bright_cyan().bold(),
        result.total_candidates
    );
    println!("{}", "═".repeat(60).cyan());

    let max_score = result.top.first().map_or(0, |e| e.score);
    for entry in &result.top {
        println!(
            "  {:>4}. {}  [{}] {}",
            entry.rank,
            entry.word.to_uppercase().bright_yellow(),
            create_progress_bar(f64::from(entry.score), f64::from(max_score), 30).green(),
            entry.score
        );
    }

    if let Some(focus) = &result.focus {
        println!(
            "\n🎯 {} ranks {} of {} with score {}",
            focus.word.to_uppercase().bright_yellow().bold(),
            focus.rank,
            result.total_candidates,
            focus.score
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.solved > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (&guesses, &count) in &result.distribution {
            let pct = count as f64 / result.solved as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guesses:2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.hardest.is_empty() {
        println!("\n😰 {}", "Hardest words:".yellow().bold());
        for (word, guesses) in result.hardest.iter().take(5) {
            println!("   {} ({guesses} guesses)", word.to_uppercase().yellow());
        }
    }

    if !result.failures.is_empty() {
        println!("\n❌ {}", "Not found:".red().bold());
        for word in &result.failures {
            println!("   {}", word.to_uppercase().red());
        }
    }
}
