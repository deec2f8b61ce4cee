//! TUI rendering with ratatui

use super::app::App;
use crate::core::{Clue, CluedLetter};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use std::time::Instant;

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    if app.about {
        render_about(f, app, f.area());
        return;
    }
    if !app.started {
        render_start_screen(f, f.area());
        return;
    }

    let grid_height = app.session.config().max_guesses as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Header
            Constraint::Length(4),           // Score and clock
            Constraint::Length(grid_height), // Guess grid
            Constraint::Length(1),           // Hint line
            Constraint::Length(5),           // On-screen keyboard
            Constraint::Length(2),           // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_score(f, app, chunks[1]);
    render_grid(f, app, chunks[2]);
    render_hint(f, app, chunks[3]);
    render_keyboard(f, app, chunks[4]);
    render_status(f, app, chunks[5]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("SEVEN WORDLES")
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

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let elapsed = session.elapsed_seconds(Instant::now());

    let content = vec![
        Line::from(format!(
            "{}/{} wordles",
            session.rounds_won(),
            session.config().total_rounds
        )),
        Line::from(Span::styled(
            format!("{elapsed:.2}"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "+{:.0}s per wrong guess",
                session.config().penalty_per_guess.as_secs_f64()
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn cell_span(clued: &CluedLetter) -> Span<'static> {
    let text = format!(" {} ", clued.letter.to_ascii_uppercase());
    let style = match clued.clue {
        Some(Clue::Correct) => Style::default().fg(Color::Black).bg(Color::Green),
        Some(Clue::Elsewhere) => Style::default().fg(Color::Black).bg(Color::Yellow),
        Some(Clue::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    };
    Span::styled(text, style)
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let round = session.round();
    let word_length = session.config().word_length;
    let locked = round.rows();
    let pending = round.pending_row();

    let mut lines = Vec::with_capacity(session.config().max_guesses);
    for i in 0..session.config().max_guesses {
        let mut spans = Vec::with_capacity(word_length * 2);
        let row: &[CluedLetter] = if i < locked.len() {
            &locked[i]
        } else if i == locked.len() {
            &pending
        } else {
            &[]
        };

        for j in 0..word_length {
            if let Some(clued) = row.get(j) {
                spans.push(cell_span(clued));
            } else {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
            }
            if j + 1 < word_length {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_hint(f: &mut Frame, app: &App, area: Rect) {
    let hint = Paragraph::new(app.session.hint().to_string())
        .style(Style::default().fg(Color::Magenta))
        .alignment(Alignment::Center);
    f.render_widget(hint, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let info = app.session.keyboard();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|letter| {
                    let style = match info.get(&letter) {
                        Some(Clue::Correct) => Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                        Some(Clue::Elsewhere) => Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                        Some(Clue::Absent) => Style::default().fg(Color::DarkGray),
                        None => Style::default().fg(Color::White),
                    };
                    Span::styled(format!("{} ", letter.to_ascii_uppercase()), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        "Enter submit · Backspace delete · Tab about · Ctrl+G give up · Esc quit",
        Style::default().fg(Color::DarkGray),
    ))];

    if let Some(seed) = app.session.seed() {
        lines.push(Line::from(Span::styled(
            format!("seed {seed}"),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let status = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(status, area);
}

fn render_start_screen(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .split(area);

    render_header(f, chunks[0]);

    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to Start!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Guess seven target words as fast as you can."),
        Line::from("Every wrong guess adds 3 seconds to your time."),
    ])
    .alignment(Alignment::Center);
    f.render_widget(body, chunks[1]);

    let help = Paragraph::new(Span::styled(
        "Tab about · Esc quit",
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    f.render_widget(help, chunks[2]);
}

fn render_about(f: &mut Frame, app: &App, area: Rect) {
    let max_guesses = app.session.config().max_guesses;

    let text = vec![
        Line::from(Span::styled(
            "About",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(
            "seven wordles is a remake of the word game Wordle, testing how \
             quickly you can guess seven different words. There is a 3 second \
             penalty for each wrong guess.",
        ),
        Line::from(""),
        Line::from(format!(
            "You get {max_guesses} tries to guess a target word. After each \
             guess, you get Mastermind-style feedback:"
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" W ", Style::default().fg(Color::White).bg(Color::DarkGray)),
            Span::raw(" "),
            Span::styled(" O ", Style::default().fg(Color::White).bg(Color::DarkGray)),
            Span::raw(" "),
            Span::styled(" R ", Style::default().fg(Color::Black).bg(Color::Green)),
            Span::raw(" "),
            Span::styled(" D ", Style::default().fg(Color::Black).bg(Color::Yellow)),
        ]),
        Line::from(""),
        Line::from("W and O aren't in the target word at all."),
        Line::from("R is correct! The third letter is R."),
        Line::from("D occurs elsewhere in the target word."),
        Line::from(""),
        Line::from(Span::styled(
            "Tab or Esc to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let about = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" seven wordles ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(about, area);
}
