//! Jeu du pendu - CLI
//!
//! French hangman for the terminal, with a full-screen TUI mode and a plain
//! console mode.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use pendu::{
    commands::run_simple,
    interactive::{App, run_tui},
    output::{formatters, messages},
};
use rand::{SeedableRng, rngs::StdRng};

#[derive(Parser)]
#[command(
    name = "pendu",
    about = "Jeu du pendu - guess the hidden French word before the figure hangs",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed the word draw for a reproducible game
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain console mode (sequential prompts, no TUI)
    Simple,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(rng),
        Commands::Simple => run_simple_command(rng),
    }
}

fn run_play_command(rng: StdRng) -> Result<()> {
    let app = App::new(rng);
    let final_score = run_tui(app)?;

    // The goodbye lands on the normal screen, after the TUI is torn down
    println!("\n{}", messages::GOODBYE.bold());
    println!("{}\n", formatters::final_score_line(final_score).cyan());
    Ok(())
}

fn run_simple_command(mut rng: StdRng) -> Result<()> {
    run_simple(&mut rng).map_err(|e| anyhow::anyhow!(e))
}
