//! Display functions for command results

use super::formatters::{create_progress_bar, format_average, render_guess};
use crate::commands::{SimulationStats, SolveResult};
use crate::core::Word;
use crate::solver::{MAX_ATTEMPTS, SessionState};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let tiles = Word::new(step.word.as_str()).map_or_else(
            |_| step.word.to_uppercase(),
            |word| render_guess(&word, &step.feedback),
        );
        println!("\nTurn {}: {} {}", i + 1, tiles, step.feedback.to_emoji());

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            let tactic = step.tier.map_or("last candidate", |tier| tier.label());
            println!("  Tactic:     {tactic}");
        }
    }

    println!();
    match result.outcome {
        SessionState::Solved => println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        ),
        SessionState::NoSolution => println!(
            "{}",
            "❌ No candidates remain; the word list may be inconsistent"
                .red()
                .bold()
        ),
        _ => println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        ),
    }
}

/// Print batch simulation statistics
pub fn print_simulation_stats(stats: &SimulationStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", stats.played);
    println!(
        "   Solved:           {} {}",
        stats.solved,
        stats
            .win_rate()
            .map_or_else(String::new, |rate| format!("({rate:.1}%)"))
            .green()
    );
    if stats.exhausted > 0 {
        println!(
            "   Out of attempts:  {}",
            stats.exhausted.to_string().yellow()
        );
    }
    if stats.no_solution > 0 {
        println!(
            "   No solution:      {}",
            stats.no_solution.to_string().red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format_average(stats.average_attempts())
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());

    if stats.solved == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = stats.distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.distribution.iter().enumerate().take(MAX_ATTEMPTS) {
        let pct = count as f64 / stats.solved as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {}: {} {count:4} ({pct:5.1}%)", i + 1, bar.green());
    }
}
