//! TUI application state and logic

use crate::game::{Difficulty, GuessOutcome, Round, RoundStatus, Session};
use crate::output::{formatters, messages};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Which prompt the input bar currently feeds
///
/// This is the round-loop state machine: notice acknowledgment, difficulty
/// selection, the guess loop, and the replay prompt after a won or lost
/// round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Notice,
    Difficulty,
    Guess,
    Replay,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App {
    pub session: Session,
    pub round: Option<Round>,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    /// The player answered "non": show the extended notice
    pub extended_notice: bool,
    pub should_quit: bool,
    rng: StdRng,
}

impl App {
    #[must_use]
    pub fn new(rng: StdRng) -> Self {
        let mut app = Self {
            session: Session::new(),
            round: None,
            input_mode: InputMode::Notice,
            input_buffer: String::new(),
            messages: Vec::new(),
            extended_notice: false,
            should_quit: false,
            rng,
        };
        app.add_message(messages::PROMPT_NOTICE, MessageStyle::Info);
        app
    }

    /// Submit the input buffer against the current mode
    ///
    /// Every validation failure posts an error message and leaves the mode
    /// unchanged; that is the re-prompt.
    pub fn submit(&mut self) {
        let input = self.input_buffer.trim().to_string();
        self.input_buffer.clear();

        match self.input_mode {
            InputMode::Notice => self.submit_notice(&input),
            InputMode::Difficulty => self.submit_difficulty(&input),
            InputMode::Guess => self.submit_guess(&input),
            InputMode::Replay => self.submit_replay(&input),
        }
    }

    /// Apply one key press
    ///
    /// Ctrl-C and Esc quit anywhere; `q` quits too, except during letter
    /// entry where it has to stay guessable. Everything else feeds the input
    /// buffer, submitted on Enter.
    pub fn on_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('q') if self.input_mode != InputMode::Guess => {
                self.should_quit = true;
            }
            KeyCode::Char(c) => self.input_buffer.push(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn submit_notice(&mut self, input: &str) {
        match input {
            "oui" => self.start_difficulty_selection(),
            "non" => {
                self.extended_notice = true;
                self.add_message(messages::EXTRA_TIME, MessageStyle::Info);
                self.add_message("Appuyez sur Entrée pour continuer.", MessageStyle::Info);
            }
            "" if self.extended_notice => self.start_difficulty_selection(),
            _ => self.add_message(messages::REPLY_OUI_NON, MessageStyle::Error),
        }
    }

    fn start_difficulty_selection(&mut self) {
        self.input_mode = InputMode::Difficulty;
        self.add_message(messages::BEGIN, MessageStyle::Success);
        self.add_message(messages::PROMPT_DIFFICULTY, MessageStyle::Info);
    }

    fn submit_difficulty(&mut self, input: &str) {
        if let Some(tier) = Difficulty::from_token(input) {
            let secret = tier.draw_word(&mut self.rng);
            self.round = Some(Round::new(tier, secret));
            self.input_mode = InputMode::Guess;
            self.add_message(
                &format!("Niveau {} : un mot a été tiré au sort.", tier.label()),
                MessageStyle::Info,
            );
        } else {
            self.add_message(messages::REPLY_F_M_D, MessageStyle::Error);
        }
    }

    fn submit_guess(&mut self, input: &str) {
        let Some(round) = self.round.as_mut() else {
            return;
        };

        match round.propose_input(input) {
            Ok(GuessOutcome::Hit) => self.add_message(messages::FEEDBACK_HIT, MessageStyle::Success),
            Ok(GuessOutcome::Miss) => self.add_message(messages::FEEDBACK_MISS, MessageStyle::Error),
            Err(error) => {
                let text = formatters::rejection_message(&error);
                self.add_message(text, MessageStyle::Error);
                return;
            }
        }

        self.check_round_end();
    }

    /// Won or lost? If so, post the banner and move to the replay prompt
    fn check_round_end(&mut self) {
        let Some(round) = self.round.as_ref() else {
            return;
        };

        match round.status() {
            RoundStatus::Playing => {}
            RoundStatus::Won => {
                let attempts = round.attempts();
                let difficulty = round.difficulty();
                let total = self.session.award(difficulty);
                self.add_message(&formatters::win_banner(attempts), MessageStyle::Success);
                self.add_message(&formatters::score_line(total), MessageStyle::Success);
                self.add_message(messages::PROMPT_REPLAY, MessageStyle::Info);
                self.input_mode = InputMode::Replay;
            }
            RoundStatus::Lost => {
                let revealed = round.secret().reveal_all();
                self.add_message("Vous avez commis 7 erreurs ! Perdu !", MessageStyle::Error);
                self.add_message(
                    &format!("Le mot à deviner était : {revealed}"),
                    MessageStyle::Error,
                );
                self.add_message(messages::PROMPT_REPLAY, MessageStyle::Info);
                self.input_mode = InputMode::Replay;
            }
        }
    }

    fn submit_replay(&mut self, input: &str) {
        match input {
            "oui" => {
                self.round = None;
                self.input_mode = InputMode::Difficulty;
                self.add_message(messages::PROMPT_DIFFICULTY, MessageStyle::Info);
            }
            "non" => self.should_quit = true,
            _ => self.add_message(messages::REPLY_OUI_NON, MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only the most recent messages
        if self.messages.len() > 6 {
            self.messages.remove(0);
        }
    }

    /// Cumulative score, for the goodbye line after the terminal is restored
    #[must_use]
    pub const fn final_score(&self) -> u32 {
        self.session.score()
    }
}

/// Run the TUI application; returns the final session score
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<u32> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<u32> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.on_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.final_score())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn app() -> App {
        App::new(StdRng::seed_from_u64(1))
    }

    fn submit(app: &mut App, input: &str) {
        app.input_buffer = input.to_string();
        app.submit();
    }

    #[test]
    fn starts_at_the_notice() {
        let app = app();
        assert_eq!(app.input_mode, InputMode::Notice);
        assert!(app.round.is_none());
    }

    #[test]
    fn notice_oui_moves_to_difficulty() {
        let mut app = app();
        submit(&mut app, "oui");
        assert_eq!(app.input_mode, InputMode::Difficulty);
    }

    #[test]
    fn notice_non_shows_extended_then_enter_continues() {
        let mut app = app();
        submit(&mut app, "non");
        assert_eq!(app.input_mode, InputMode::Notice);
        assert!(app.extended_notice);
        submit(&mut app, "");
        assert_eq!(app.input_mode, InputMode::Difficulty);
    }

    #[test]
    fn notice_rejects_other_tokens() {
        let mut app = app();
        submit(&mut app, "peut-etre");
        assert_eq!(app.input_mode, InputMode::Notice);
        assert!(matches!(
            app.messages.last().unwrap().style,
            MessageStyle::Error
        ));
    }

    #[test]
    fn difficulty_rejects_then_accepts() {
        // spec scenario: "x" rejected with re-prompt, then "f" accepted
        let mut app = app();
        submit(&mut app, "oui");

        submit(&mut app, "x");
        assert_eq!(app.input_mode, InputMode::Difficulty);
        assert!(app.round.is_none());

        submit(&mut app, "f");
        assert_eq!(app.input_mode, InputMode::Guess);
        let round = app.round.as_ref().unwrap();
        assert_eq!(round.difficulty(), Difficulty::Easy);
        assert!(
            crate::wordlists::EASY.contains(&round.secret().text()),
            "word must come from the easy list"
        );
    }

    #[test]
    fn guess_rejections_keep_the_mode() {
        let mut app = app();
        submit(&mut app, "oui");
        submit(&mut app, "f");

        submit(&mut app, "ab");
        assert_eq!(app.input_mode, InputMode::Guess);
        submit(&mut app, "3");
        assert_eq!(app.input_mode, InputMode::Guess);
        assert_eq!(app.round.as_ref().unwrap().attempts(), 0);
    }

    #[test]
    fn losing_a_round_moves_to_replay_without_scoring() {
        let mut app = app();
        submit(&mut app, "oui");
        submit(&mut app, "f");

        // Force a known word so the misses below are really misses
        let secret = crate::core::SecretWord::new("japon").unwrap();
        app.round = Some(Round::new(Difficulty::Easy, secret));

        for letter in ["b", "c", "d", "e", "f", "g", "h"] {
            submit(&mut app, letter);
        }

        assert_eq!(app.input_mode, InputMode::Replay);
        assert_eq!(app.session.score(), 0);
        assert!(app.messages.iter().any(|m| m.text.contains("JAPON")));
    }

    #[test]
    fn winning_a_round_awards_tier_points() {
        let mut app = app();
        submit(&mut app, "oui");
        submit(&mut app, "f");

        let secret = crate::core::SecretWord::new("paris").unwrap();
        app.round = Some(Round::new(Difficulty::Easy, secret));

        for letter in ["a", "r", "i"] {
            submit(&mut app, letter);
        }

        assert_eq!(app.input_mode, InputMode::Replay);
        assert_eq!(app.session.score(), 1);
    }

    #[test]
    fn replay_oui_restarts_at_difficulty_with_fresh_round() {
        let mut app = app();
        submit(&mut app, "oui");
        submit(&mut app, "f");
        let secret = crate::core::SecretWord::new("paris").unwrap();
        app.round = Some(Round::new(Difficulty::Easy, secret));
        for letter in ["a", "r", "i"] {
            submit(&mut app, letter);
        }

        submit(&mut app, "oui");
        assert_eq!(app.input_mode, InputMode::Difficulty);
        assert!(app.round.is_none());
        // Score persists across rounds
        assert_eq!(app.session.score(), 1);
    }

    #[test]
    fn replay_non_quits_with_final_score() {
        let mut app = app();
        submit(&mut app, "oui");
        submit(&mut app, "f");
        let secret = crate::core::SecretWord::new("paris").unwrap();
        app.round = Some(Round::new(Difficulty::Easy, secret));
        for letter in ["a", "r", "i"] {
            submit(&mut app, letter);
        }

        submit(&mut app, "non");
        assert!(app.should_quit);
        assert_eq!(app.final_score(), 1);
    }

    #[test]
    fn replay_rejects_other_tokens() {
        let mut app = app();
        submit(&mut app, "oui");
        submit(&mut app, "f");
        let secret = crate::core::SecretWord::new("paris").unwrap();
        app.round = Some(Round::new(Difficulty::Easy, secret));
        for letter in ["a", "r", "i"] {
            submit(&mut app, letter);
        }

        submit(&mut app, "jamais");
        assert_eq!(app.input_mode, InputMode::Replay);
        assert!(!app.should_quit);
    }

    #[test]
    fn q_quits_outside_letter_entry() {
        for tokens in [&[][..], &["oui"][..]] {
            let mut app = app();
            for token in tokens {
                submit(&mut app, token);
            }
            app.on_key(KeyCode::Char('q'), KeyModifiers::NONE);
            assert!(app.should_quit);
        }
    }

    #[test]
    fn q_stays_guessable_during_letter_entry() {
        let mut app = app();
        submit(&mut app, "oui");
        submit(&mut app, "f");

        app.on_key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(!app.should_quit);
        assert_eq!(app.input_buffer, "q");
    }

    #[test]
    fn esc_quits_during_letter_entry() {
        let mut app = app();
        submit(&mut app, "oui");
        submit(&mut app, "f");
        app.on_key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits_anywhere() {
        let mut app = app();
        app.on_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn keys_feed_the_buffer_and_enter_submits() {
        let mut app = app();
        for c in ['o', 'u', 'x'] {
            app.on_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
        app.on_key(KeyCode::Backspace, KeyModifiers::NONE);
        app.on_key(KeyCode::Char('i'), KeyModifiers::NONE);
        assert_eq!(app.input_buffer, "oui");

        app.on_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.input_mode, InputMode::Difficulty);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn menu_tokens_are_exact_and_case_sensitive() {
        // spec lists the exact recognized tokens; "OUI" and "F" re-prompt
        let mut app = app();
        submit(&mut app, "OUI");
        assert_eq!(app.input_mode, InputMode::Notice);
        submit(&mut app, "oui");
        assert_eq!(app.input_mode, InputMode::Difficulty);

        submit(&mut app, "F");
        assert_eq!(app.input_mode, InputMode::Difficulty);
        assert!(app.round.is_none());
        submit(&mut app, "f");
        assert_eq!(app.input_mode, InputMode::Guess);
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = app();
        for _ in 0..20 {
            app.add_message("message", MessageStyle::Info);
        }
        assert!(app.messages.len() <= 6);
    }
}
