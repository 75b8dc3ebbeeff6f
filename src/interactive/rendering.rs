//! TUI rendering with ratatui
//!
//! Fixed screen regions: header, gallows figure, word blanks and HUD,
//! message log, input bar.

use super::app::{App, InputMode, MessageStyle};
use crate::figure::sketch;
use crate::game::RoundStatus;
use crate::output::{formatters, messages};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(12),    // Main content
            Constraint::Length(3),  // Input bar
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    if app.input_mode == InputMode::Notice {
        render_notice(f, app, chunks[1]);
    } else {
        render_game(f, app, chunks[1]);
    }

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(messages::TITLE.to_uppercase())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_notice(f: &mut Frame, app: &App, area: Rect) {
    let text = if app.extended_notice {
        messages::NOTICE_EXTENDED
    } else {
        messages::NOTICE
    };

    let notice = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Notice ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(notice, area);
}

fn render_game(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Gallows figure
            Constraint::Percentage(65), // Word, HUD, messages
        ])
        .split(area);

    render_figure(f, app, chunks[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Word blanks
            Constraint::Length(5), // HUD
            Constraint::Min(4),    // Messages
        ])
        .split(chunks[1]);

    render_word(f, app, right[0]);
    render_hud(f, app, right[1]);
    render_messages(f, app, right[2]);
}

/// Round-end signal color: red on a loss, green on a win
fn end_color(app: &App) -> Option<Color> {
    let round = app.round.as_ref()?;
    match round.status() {
        RoundStatus::Won => Some(Color::Green),
        RoundStatus::Lost => Some(Color::Red),
        RoundStatus::Playing => None,
    }
}

fn render_figure(f: &mut Frame, app: &App, area: Rect) {
    let errors = app.round.as_ref().map_or(0, crate::game::Round::errors);
    let lines: Vec<Line> = sketch(errors).into_iter().map(Line::from).collect();

    let color = end_color(app).unwrap_or(Color::White);
    let figure = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .title(" Potence ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(color)),
        );
    f.render_widget(figure, area);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let (text, color) = match app.round.as_ref() {
        Some(round) if round.status() == RoundStatus::Lost => {
            // Reveal the word on a loss
            (
                round
                    .secret()
                    .reveal_all()
                    .chars()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(" "),
                Color::Red,
            )
        }
        Some(round) => (round.masked(), Color::Yellow),
        None => (String::new(), Color::DarkGray),
    };

    let word = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Mot à deviner ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(word, area);
}

fn render_hud(f: &mut Frame, app: &App, area: Rect) {
    let content = match app.round.as_ref() {
        Some(round) => vec![
            Line::from(formatters::errors_remaining_line(round.errors_remaining())),
            Line::from(formatters::score_line(app.session.score())),
            Line::from(formatters::used_letters_line(round.guessed())),
        ],
        None => {
            let mut lines = vec![Line::from(messages::DIFFICULTY_MENU_HEADER)];
            for tier in crate::game::Difficulty::ALL {
                lines.push(Line::from(format!(
                    "  - Saisir \"{}\" pour {}",
                    tier.token(),
                    tier.label()
                )));
            }
            lines
        }
    };

    let hud = Paragraph::new(content).block(
        Block::default()
            .title(" Partie ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(hud, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Notice => (" Avez-vous lu la notice (oui / non) ? ", Color::Cyan),
        InputMode::Difficulty => (" Niveau : \"f\", \"m\" ou \"d\" ", Color::Yellow),
        InputMode::Guess => (" Saisir lettre ", Color::Yellow),
        InputMode::Replay => (" Voulez-vous rejouer (oui / non) ? ", Color::Cyan),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::Notice => "Notice",
        InputMode::Difficulty => "Choix du niveau",
        InputMode::Guess => "Partie en cours",
        InputMode::Replay => "Fin de manche",
    };
    let mode = Paragraph::new(format!("Mode : {mode_text}")).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let score = Paragraph::new(formatters::score_line(app.session.score()))
        .alignment(Alignment::Center);
    f.render_widget(score, chunks[1]);

    let help_text = if app.input_mode == InputMode::Guess {
        "Entrée : valider | Échap : quitter"
    } else {
        "Entrée : valider | q / Échap : quitter"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
