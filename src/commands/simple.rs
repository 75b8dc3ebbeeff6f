//! Console mode
//!
//! Line-oriented rendition of the game: the same sequential dialog flow as
//! the TUI, one prompt at a time, with the original pacing pauses between
//! feedback and the next render.

use crate::figure::sketch;
use crate::game::{Difficulty, GuessError, GuessOutcome, Round, RoundStatus, Session};
use crate::output::{formatters, messages};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Run the console mode: notice, then rounds until the player declines replay
///
/// # Errors
///
/// Returns an error if reading user input from stdin fails.
pub fn run_simple<R: Rng>(rng: &mut R) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                         Jeu du pendu                         ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    acknowledge_notice()?;

    println!("\n{}\n", messages::BEGIN.bold());
    pause(Duration::from_secs(1));

    let mut session = Session::new();

    loop {
        let difficulty = select_difficulty()?;
        let secret = difficulty.draw_word(rng);
        let mut round = Round::new(difficulty, secret);

        play_round(&mut round, &mut session)?;

        if !wants_replay()? {
            println!("\n{}", messages::GOODBYE.bold());
            println!("{}\n", formatters::final_score_line(session.score()).cyan());
            return Ok(());
        }
    }
}

/// Show the notice and wait for `oui`/`non`, re-prompting on anything else
///
/// `non` gets the extended notice (with the scoring rules) and the original's
/// ten extra seconds of reading time.
fn acknowledge_notice() -> Result<(), String> {
    println!("{}\n", messages::NOTICE);

    loop {
        match get_user_input(messages::PROMPT_NOTICE)?.as_str() {
            "oui" => return Ok(()),
            "non" => {
                println!("\n{}\n", messages::NOTICE_EXTENDED);
                println!("{}", messages::EXTRA_TIME.yellow());
                pause(Duration::from_secs(10));
                return Ok(());
            }
            _ => println!("{}", messages::REPLY_OUI_NON.red()),
        }
    }
}

/// Difficulty menu: read `f`/`m`/`d`, re-prompt on anything else
fn select_difficulty() -> Result<Difficulty, String> {
    println!("\n{}", messages::DIFFICULTY_MENU_HEADER);
    for tier in Difficulty::ALL {
        println!("  - Saisir \"{}\" pour {}", tier.token(), tier.label());
    }

    loop {
        let token = get_user_input(messages::PROMPT_DIFFICULTY)?;
        match Difficulty::from_token(&token) {
            Some(tier) => return Ok(tier),
            None => println!("{}", messages::REPLY_F_M_D.red()),
        }
    }
}

/// One round: render, check win/loss, prompt, repeat
fn play_round(round: &mut Round, session: &mut Session) -> Result<(), String> {
    loop {
        println!("\n────────────────────────────────────────────────────────────");
        for line in sketch(round.errors()) {
            println!("  {line}");
        }
        println!();
        println!("  {}", round.masked().bold());
        println!();
        println!("{}", formatters::errors_remaining_line(round.errors_remaining()));
        println!("{}", formatters::score_line(session.score()));
        println!("{}", formatters::used_letters_line(round.guessed()));

        match round.status() {
            RoundStatus::Won => {
                let total = session.award(round.difficulty());
                println!("\n{}", formatters::win_banner(round.attempts()).green().bold());
                println!("{}\n", formatters::score_line(total).green());
                return Ok(());
            }
            RoundStatus::Lost => {
                println!("\n{}\n", formatters::loss_banner(round.secret()).red().bold());
                return Ok(());
            }
            RoundStatus::Playing => {}
        }

        prompt_guess(round)?;
    }
}

/// Prompt for one letter until the round accepts it
///
/// Each rejection class gets its own message and its own follow-up prompt
/// wording; rejected input costs nothing.
fn prompt_guess(round: &mut Round) -> Result<(), String> {
    let mut prompt = messages::PROMPT_LETTER;

    loop {
        let input = get_user_input(prompt)?;

        match round.propose_input(&input) {
            Ok(GuessOutcome::Hit) => {
                println!("{}", messages::FEEDBACK_HIT.green());
                pause(Duration::from_millis(500));
                return Ok(());
            }
            Ok(GuessOutcome::Miss) => {
                println!("{}", messages::FEEDBACK_MISS.yellow());
                pause(Duration::from_millis(500));
                return Ok(());
            }
            Err(error) => {
                println!("{}", formatters::rejection_message(&error).red());
                prompt = match error {
                    GuessError::NotOneLetter(0) => messages::PROMPT_LETTER,
                    GuessError::NotOneLetter(_) => messages::PROMPT_LETTER_SINGLE,
                    GuessError::AlreadyGuessed(_) => messages::PROMPT_LETTER_NEW,
                    GuessError::Disallowed(_) => messages::PROMPT_LETTER,
                };
            }
        }
    }
}

/// Replay prompt: `oui`/`non`, re-prompting on anything else
fn wants_replay() -> Result<bool, String> {
    loop {
        match get_user_input(messages::PROMPT_REPLAY)?.as_str() {
            "oui" => return Ok(true),
            "non" => return Ok(false),
            _ => println!("{}", messages::REPLY_OUI_NON.red()),
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt} : ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

/// Fixed wall-clock pause, purely for pacing between messages
fn pause(duration: Duration) {
    thread::sleep(duration);
}
