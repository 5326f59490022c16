//! TUI application state and logic

use crate::core::{Session, Word};
use crate::dictionary::Dictionary;
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

/// Longest input the buffer accepts; no root word comes close
const MAX_INPUT_LEN: usize = 24;

/// Application state
pub struct App<'a, D: Dictionary> {
    pub session: Session<D>,
    pub start_words: &'a [Word],
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub words_found: usize,
    pub best_score: u32,
}

impl<'a, D: Dictionary> App<'a, D> {
    #[must_use]
    pub fn new(start_words: &'a [Word], dictionary: D) -> Self {
        let mut rng = rand::rng();
        let session = Session::start(start_words, dictionary, &mut rng);

        Self {
            session,
            start_words,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Spell words from the scrambled letters.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Enter submits, Ctrl-N starts a new round, Esc quits.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics {
                rounds_played: 1,
                ..Statistics::default()
            },
            should_quit: false,
        }
    }

    /// Submit the current input buffer to the session
    pub fn submit_input(&mut self) {
        let input = self.input_buffer.clone();
        self.input_buffer.clear();

        if input.trim().is_empty() {
            return;
        }

        match self.session.submit(&input) {
            Ok(acceptance) => {
                self.stats.words_found += 1;
                self.stats.best_score = self.stats.best_score.max(self.session.round().score());

                if acceptance.key_word {
                    self.add_message(
                        &format!(
                            "🎉 CONGRATULATION! You found the key word {} (+{})",
                            acceptance.word.to_uppercase(),
                            acceptance.points
                        ),
                        MessageStyle::Success,
                    );
                } else {
                    self.add_message(
                        &format!(
                            "✓ {} (+{} points)",
                            acceptance.word.to_uppercase(),
                            acceptance.points
                        ),
                        MessageStyle::Success,
                    );
                }
            }
            Err(rejection) => {
                self.add_message(
                    &format!("{}: {}", rejection.title(), rejection.message()),
                    MessageStyle::Error,
                );
            }
        }
    }

    pub fn new_round(&mut self) {
        let mut rng = rand::rng();
        self.session.new_round(self.start_words, &mut rng);
        self.stats.rounds_played += 1;
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message("New round started! Fresh letters, score reset.", MessageStyle::Info);
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
pub fn run_tui<D: Dictionary>(app: App<D>) -> Result<()> {
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

fn run_app<B: ratatui::backend::Backend, D: Dictionary>(
    terminal: &mut Terminal<B>,
    mut app: App<D>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.new_round();
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Char(c) => {
                    // Letters only; every valid submission is alphabetic
                    if app.input_buffer.len() < MAX_INPUT_LEN && c.is_alphabetic() {
                        app.input_buffer.push(c.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter => {
                    app.submit_input();
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordSetDictionary;

    fn app(words: &[Word]) -> App<'_, WordSetDictionary> {
        let dictionary = WordSetDictionary::from_words(["silk", "worm", "silkworm"]);
        App::new(words, dictionary)
    }

    #[test]
    fn submit_input_accepts_and_counts() {
        let words = vec![Word::new("silkworm").unwrap()];
        let mut app = app(&words);

        app.input_buffer = "silk".to_string();
        app.submit_input();

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.stats.words_found, 1);
        assert_eq!(app.session.round().score(), 400);
        assert_eq!(app.stats.best_score, 400);
    }

    #[test]
    fn submit_input_rejection_adds_error_message() {
        let words = vec![Word::new("silkworm").unwrap()];
        let mut app = app(&words);

        app.input_buffer = "xyz".to_string();
        app.submit_input();

        assert_eq!(app.stats.words_found, 0);
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn submit_input_ignores_blank() {
        let words = vec![Word::new("silkworm").unwrap()];
        let mut app = app(&words);

        app.input_buffer = "   ".to_string();
        let before = app.messages.len();
        app.submit_input();

        assert_eq!(app.messages.len(), before);
    }

    #[test]
    fn new_round_resets_score_keeps_stats() {
        let words = vec![Word::new("silkworm").unwrap()];
        let mut app = app(&words);

        app.input_buffer = "silk".to_string();
        app.submit_input();
        app.new_round();

        assert_eq!(app.session.round().score(), 0);
        assert_eq!(app.stats.rounds_played, 2);
        assert_eq!(app.stats.best_score, 400);
    }

    #[test]
    fn message_log_is_bounded() {
        let words = vec![Word::new("silkworm").unwrap()];
        let mut app = app(&words);

        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }

        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages.last().unwrap().text, "message 9");
    }
}
