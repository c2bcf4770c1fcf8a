//! TUI application state and logic

use crate::commands::pick_target;
use crate::core::Word;
use crate::solver::{CandidateSet, GuessStep, Round, SolveError};
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

/// Application state
///
/// Exactly one of `idle` and `round` holds the candidate set: the round owns
/// it while it runs and hands it back, reset, when a new target is entered.
pub struct App {
    idle: Option<CandidateSet>,
    round: Option<Round>,
    pub opener: Word,
    pub dictionary_size: usize,
    pub history: Vec<GuessStep>,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing a secret word (or `r`)
    Target,
    /// Round running; each key press makes one guess
    Stepping,
    /// Round over, found or exhausted
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds: usize,
    pub found: usize,
    pub exhausted: usize,
    pub total_guesses: usize,
}

impl Statistics {
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.found == 0 {
            0.0
        } else {
            self.total_guesses as f64 / self.found as f64
        }
    }
}

impl App {
    #[must_use]
    pub fn new(candidates: CandidateSet, opener: Word) -> Self {
        let dictionary_size = candidates.len();

        Self {
            idle: Some(candidates),
            round: None,
            opener,
            dictionary_size,
            history: Vec::new(),
            input_mode: InputMode::Target,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Type a secret word, or just Enter / 'r' for a random one.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Candidate set of the running round, or the idle one between rounds
    #[must_use]
    pub fn candidates(&self) -> Option<&CandidateSet> {
        self.round.as_ref().map(Round::candidates).or(self.idle.as_ref())
    }

    #[must_use]
    pub fn target(&self) -> Option<&Word> {
        self.round.as_ref().map(Round::target)
    }

    #[must_use]
    pub fn viable_count(&self) -> usize {
        self.candidates().map_or(0, CandidateSet::viable_count)
    }

    /// Top viable candidates of the running round with their latest scores
    #[must_use]
    pub fn ranking(&self, limit: usize) -> Vec<(String, u32)> {
        let Some(candidates) = self.round.as_ref().map(Round::candidates) else {
            return Vec::new();
        };
        candidates
            .ranked()
            .into_iter()
            .take(limit)
            .filter_map(|index| candidates.get(index))
            .map(|c| (c.word().text().to_string(), c.score()))
            .collect()
    }

    fn take_candidates(&mut self) -> CandidateSet {
        match self.round.take() {
            Some(round) => round.into_candidates(),
            None => self.idle.take().unwrap_or_default(),
        }
    }

    /// Start a round from the text in the input buffer
    pub fn submit_target(&mut self) {
        let candidates = self.take_candidates();
        let picked = pick_target(&self.input_buffer, &candidates, &mut rand::rng());
        self.input_buffer.clear();

        match picked {
            Ok(target) => {
                self.add_message(
                    &format!("Trying to find {}", target.text().to_uppercase()),
                    MessageStyle::Info,
                );
                self.history.clear();
                self.round = Some(Round::new(candidates, target, self.opener.clone()));
                self.input_mode = InputMode::Stepping;
            }
            Err(err) => {
                self.idle = Some(candidates);
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Make one guess in the running round
    pub fn step(&mut self) {
        let Some(round) = self.round.as_mut() else {
            return;
        };

        match round.step() {
            Ok(Some(step)) => {
                let solved = step.is_solved();
                let number = step.number;
                self.history.push(step);
                if solved {
                    self.finish_round(Ok(number));
                }
            }
            Ok(None) => self.input_mode = InputMode::Finished,
            Err(err) => self.finish_round(Err(err)),
        }
    }

    /// Step until the round ends
    pub fn run_to_end(&mut self) {
        while self.input_mode == InputMode::Stepping {
            self.step();
        }
    }

    fn finish_round(&mut self, outcome: Result<usize, SolveError>) {
        self.stats.rounds += 1;
        self.input_mode = InputMode::Finished;

        match outcome {
            Ok(guesses) => {
                self.stats.found += 1;
                self.stats.total_guesses += guesses;
                self.add_message(
                    &format!("🎉 Got it in {guesses} guesses! Press 'n' for a new word."),
                    MessageStyle::Success,
                );
            }
            Err(err) => {
                self.stats.exhausted += 1;
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Go back to entering a target
    pub fn new_round(&mut self) {
        let candidates = self.take_candidates();
        self.idle = Some(candidates);
        self.history.clear();
        self.input_buffer.clear();
        self.input_mode = InputMode::Target;
        self.add_message("New round: enter a secret word.", MessageStyle::Info);
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

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Target => match code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Enter => self.submit_target(),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Char(c) if c.is_ascii_alphabetic() && self.input_buffer.len() < 5 => {
                    self.input_buffer.push(c.to_ascii_lowercase());
                }
                _ => {}
            },
            InputMode::Stepping => match code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(' ') | KeyCode::Enter => self.step(),
                KeyCode::Char('a') => self.run_to_end(),
                KeyCode::Char('n') => self.new_round(),
                _ => {}
            },
            InputMode::Finished => match code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_round(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
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

    fn app() -> App {
        let set: CandidateSet = ["amaze", "dread", "dream", "bread"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        App::new(set, Word::new("amaze").unwrap())
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    #[test]
    fn stepping_through_a_round() {
        let mut app = app();
        type_text(&mut app, "dream");
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.input_mode, InputMode::Stepping);
        assert_eq!(app.target().unwrap().text(), "dream");

        app.handle_key(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(app.history.len(), 1);
        assert_eq!(app.viable_count(), 1);

        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.input_mode, InputMode::Finished);
        assert_eq!(app.stats.found, 1);
        assert!((app.stats.average_guesses() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn new_round_restores_candidates() {
        let mut app = app();
        type_text(&mut app, "bread");
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(app.input_mode, InputMode::Finished);

        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        assert_eq!(app.input_mode, InputMode::Target);
        assert_eq!(app.viable_count(), 4);
        assert!(app.history.is_empty());
    }

    #[test]
    fn invalid_target_keeps_waiting() {
        let mut app = app();
        type_text(&mut app, "abc");
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.input_mode, InputMode::Target);
        assert_eq!(app.viable_count(), 4);
        assert!(matches!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn exhausted_round_is_counted() {
        let mut app = app();
        type_text(&mut app, "qqqqq");
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        app.run_to_end();
        assert_eq!(app.input_mode, InputMode::Finished);
        assert_eq!(app.stats.exhausted, 1);
    }

    #[test]
    fn empty_input_picks_random_target() {
        let mut app = app();
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.input_mode, InputMode::Stepping);
        app.run_to_end();
        assert_eq!(app.stats.found, 1);
    }

    #[test]
    fn ranking_after_scoring() {
        let mut app = app();
        type_text(&mut app, "bread");
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        app.step();
        // the opener is never scored
        assert!(app.ranking(3).iter().all(|(_, score)| *score == 0));

        app.step();
        assert_eq!(app.history[1].guess.text(), "dread");
        assert_eq!(app.ranking(3), [("bread".to_string(), 37)]);
        assert_eq!(app.input_mode, InputMode::Stepping);
    }
}
