//! TUI application state and logic

use crate::game::{GameSession, RootWordSource, Submission};
use crate::output::{Alert, rejection_alert};
use crate::rules::DictionaryOracle;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::warn;

/// Application state
pub struct App<S, D> {
    pub session: GameSession<S, D>,
    pub input_buffer: String,
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: RootWordSource, D: DictionaryOracle> App<S, D> {
    /// Wrap a started session
    #[must_use]
    pub fn new(session: GameSession<S, D>) -> Self {
        let minimum = session.config().minimum_word_length;
        Self {
            session,
            input_buffer: String::new(),
            alert: None,
            messages: vec![Message {
                text: format!("Make words of {minimum}+ letters from the root word!"),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    /// Submit the input buffer
    ///
    /// The buffer is cleared after an accepted word and kept after a rejection so the
    /// player can fix it.
    pub fn submit_input(&mut self) {
        let input = self.input_buffer.clone();
        match self.session.submit(&input) {
            Ok(Submission::Ignored) => {}
            Ok(Submission::Accepted { word, points }) => {
                self.alert = None;
                self.input_buffer.clear();
                self.add_message(&format!("{word} +{points}"), MessageStyle::Success);
            }
            Ok(Submission::Rejected(reason)) => {
                let root = self.session.root_word().unwrap_or_default();
                let alert =
                    rejection_alert(reason, root, self.session.config().minimum_word_length);
                self.add_message(&alert.title, MessageStyle::Error);
                self.alert = Some(alert);
            }
            Err(err) => {
                warn!(%err, "submit failed");
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Draw a new root word and start over
    pub fn restart(&mut self) {
        match self.session.restart() {
            Ok(()) => {
                self.alert = None;
                self.input_buffer.clear();
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(err) => {
                warn!(%err, "restart failed");
                self.add_message(&format!("Could not restart: {err}"), MessageStyle::Error);
            }
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.restart();
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c) if c.is_alphabetic() => {
                // any key press dismisses the alert, like tapping OK
                self.alert = None;
                self.input_buffer.extend(c.to_uppercase());
            }
            KeyCode::Backspace => {
                self.alert = None;
                self.input_buffer.pop();
            }
            KeyCode::Enter => {
                self.submit_input();
            }
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: RootWordSource, D: DictionaryOracle>(app: App<S, D>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
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

fn run_app<B, S, D>(terminal: &mut Terminal<B>, mut app: App<S, D>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: RootWordSource,
    D: DictionaryOracle,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
