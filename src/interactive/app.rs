//! TUI application state and event loop

use crate::game::{InputGate, Key, KeyOutcome, Session};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long to wait for a key before redrawing; every wakeup refreshes the
/// displayed clock, so this is the timer tick
const TICK: Duration = Duration::from_millis(50);

/// Application state
pub struct App {
    pub session: Session,
    pub started: bool,
    pub about: bool,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            session,
            started: false,
            about: false,
            should_quit: false,
        }
    }

    fn gate(&self) -> InputGate {
        InputGate {
            started: self.started,
            overlay: self.about,
        }
    }

    fn on_key(&mut self, code: KeyCode, modifiers: KeyModifiers, now: Instant) {
        // Host-level keys first: quitting, the about overlay, giving up
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                if self.about {
                    self.about = false;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            KeyCode::Tab => {
                self.about = !self.about;
                return;
            }
            KeyCode::Char('g') if modifiers.contains(KeyModifiers::CONTROL) => {
                if self.started && !self.about {
                    self.session.give_up();
                }
                return;
            }
            _ => {}
        }

        let key = match code {
            KeyCode::Char(c)
                if c.is_ascii_alphabetic() && !modifiers.contains(KeyModifiers::CONTROL) =>
            {
                Key::Letter(c)
            }
            KeyCode::Backspace => Key::Delete,
            KeyCode::Enter => Key::Submit,
            _ => return,
        };

        if self.session.handle_key(key, now, self.gate()) == KeyOutcome::StartRequested {
            self.started = true;
            self.session.start(now);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app; the terminal (and with it the tick loop) is restored on every
    // exit path, error included
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Tick: wake up to refresh the clock even with no input. Only the
        // displayed time changes on a tick; guess state moves on keys alone.
        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                app.on_key(key.code, key.modifiers, Instant::now());
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
