//! TUI application state and logic

use crate::core::{Board, Feedback, Marks, WORD_LEN, Word};
use crate::solver::{CandidateStore, Knowledge, SolveError, Solver, Suggestion};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Candidate counts at or below this are listed by name
pub const LISTED_CANDIDATES: usize = 12;

const MAX_MESSAGES: usize = 5;

/// A played guess and the tiles the game showed for it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    pub guess: Word,
    pub marks: Marks,
    /// Answer candidates left after this row
    pub remaining: usize,
}

/// State snapshot for undo functionality
#[derive(Debug, Clone)]
struct Snapshot {
    knowledge: Knowledge,
    rows: Vec<Row>,
}

/// Application state
pub struct App<'a> {
    pub solver: Solver<'a>,
    pub knowledge: Knowledge,
    pub rows: Vec<Row>,
    pub board: Board,
    /// Answer candidates consistent with the board
    pub remaining: CandidateStore,
    /// `None` when nothing fits the board
    pub suggestion: Option<Suggestion>,
    /// Guess waiting for its marks
    pub pending: Option<Word>,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    top_k: usize,
    undo_stack: Vec<Snapshot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing the word that was played
    Guess,
    /// Typing the tiles shown for the pending guess
    Marks,
    Solved,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_won: usize,
    pub total_guesses: usize,
    pub guess_distribution: [usize; 7],
}

impl<'a> App<'a> {
    /// Start a game and compute the first suggestion
    #[must_use]
    pub fn new(solver: Solver<'a>, top_k: usize) -> Self {
        let mut app = Self {
            solver,
            knowledge: Knowledge::new(),
            rows: Vec::new(),
            board: Board::empty(),
            remaining: CandidateStore::default(),
            suggestion: None,
            pending: None,
            input_mode: InputMode::Guess,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            top_k: top_k.max(1),
            undo_stack: Vec::new(),
        };
        app.add_message(
            "Type the word you played, or press Enter to play the suggestion.",
            MessageStyle::Info,
        );
        app.refresh();
        app
    }

    /// Rebuild the board, candidates and suggestion from what is known
    pub fn refresh(&mut self) {
        self.board = self.knowledge.board();

        match self.solver.suggest(&self.board, self.top_k) {
            Ok(suggestion) => {
                self.remaining = suggestion.remaining().clone();
                self.suggestion = Some(suggestion);
            }
            Err(err) => {
                self.suggestion = None;
                self.remaining = match err {
                    SolveError::ExhaustedCandidates => CandidateStore::default(),
                    _ => self.solver.candidates(&self.board),
                };
                let text = match err {
                    SolveError::ExhaustedCandidates => {
                        "No valid guesses! Check the tiles, Ctrl-U to undo.".to_string()
                    }
                    other => other.to_string(),
                };
                self.add_message(&text, MessageStyle::Error);
            }
        }
    }

    /// Fraction of the answer corpus ruled out so far
    #[must_use]
    pub fn pruned_fraction(&self) -> f64 {
        let total = self.solver.answers().size();
        if total == 0 {
            return 0.0;
        }
        1.0 - self.remaining.size() as f64 / total as f64
    }

    /// Accept the typed word, or the suggestion when nothing was typed
    pub fn submit_guess(&mut self) {
        let text = self.input_buffer.trim().to_string();

        let guess = if text.is_empty() {
            match &self.suggestion {
                Some(suggestion) => suggestion.best().word,
                None => {
                    self.add_message("No suggestion to play.", MessageStyle::Error);
                    return;
                }
            }
        } else {
            match Word::new(&text) {
                Ok(word) => word,
                Err(err) => {
                    self.add_message(&format!("Invalid word: {err}"), MessageStyle::Error);
                    return;
                }
            }
        };

        if !self.solver.guesses().contains(&guess) {
            self.add_message(
                &format!("{guess} is not in the guess list."),
                MessageStyle::Info,
            );
        }

        self.pending = Some(guess);
        self.input_buffer.clear();
        self.input_mode = InputMode::Marks;
        self.add_message(
            &format!("Enter tiles for {guess} (G=green Y=yellow -=gray)"),
            MessageStyle::Info,
        );
    }

    /// Fold the typed tiles for the pending guess into what is known
    pub fn submit_marks(&mut self) {
        let Some(guess) = self.pending else {
            self.input_mode = InputMode::Guess;
            return;
        };

        let marks = match Marks::parse(&self.input_buffer) {
            Ok(marks) => marks,
            Err(err) => {
                self.add_message(&format!("Invalid tiles: {err}"), MessageStyle::Error);
                return;
            }
        };

        self.undo_stack.push(Snapshot {
            knowledge: self.knowledge.clone(),
            rows: self.rows.clone(),
        });

        self.knowledge
            .record(guess, &Feedback::from_marks(&guess, &marks));
        self.pending = None;
        self.input_buffer.clear();

        if marks.is_solved() {
            self.board = self.knowledge.board();
            self.remaining = CandidateStore::from_words([guess.text()]);
            self.suggestion = None;
            self.rows.push(Row {
                guess,
                marks,
                remaining: 1,
            });
            self.record_win();
            return;
        }

        self.refresh();
        self.rows.push(Row {
            guess,
            marks,
            remaining: self.remaining.size(),
        });
        self.input_mode = InputMode::Guess;
        if self.suggestion.is_some() {
            self.add_message(
                &format!("{} candidates remaining", self.remaining.size()),
                MessageStyle::Info,
            );
        }
    }

    fn record_win(&mut self) {
        let turns = self.rows.len();
        self.stats.games_won += 1;
        self.stats.total_guesses += turns;
        self.stats.guess_distribution[turns.min(6)] += 1;
        self.input_mode = InputMode::Solved;
        self.add_message(
            &format!("Solved in {turns}! Ctrl-N for a new game."),
            MessageStyle::Success,
        );
    }

    /// Leave tile entry and retype the guess
    pub fn cancel_marks(&mut self) {
        self.pending = None;
        self.input_buffer.clear();
        self.input_mode = InputMode::Guess;
    }

    pub fn new_game(&mut self) {
        self.knowledge = Knowledge::new();
        self.rows.clear();
        self.undo_stack.clear();
        self.pending = None;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guess;
        self.add_message("New game started!", MessageStyle::Info);
        self.refresh();
    }

    pub fn undo_last(&mut self) {
        if self.input_mode == InputMode::Marks {
            self.cancel_marks();
            self.add_message("Undone!", MessageStyle::Info);
            return;
        }

        let Some(snapshot) = self.undo_stack.pop() else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
            return;
        };

        if self.input_mode == InputMode::Solved {
            self.stats.games_won = self.stats.games_won.saturating_sub(1);
            self.stats.total_guesses = self.stats.total_guesses.saturating_sub(self.rows.len());
            let slot = &mut self.stats.guess_distribution[self.rows.len().min(6)];
            *slot = slot.saturating_sub(1);
        }

        self.knowledge = snapshot.knowledge;
        self.rows = snapshot.rows;
        self.input_mode = InputMode::Guess;
        self.add_message("Undone!", MessageStyle::Info);
        self.refresh();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Char('u') if ctrl => self.undo_last(),
            _ if self.input_mode == InputMode::Solved => {}
            KeyCode::Tab if self.input_mode == InputMode::Marks => self.cancel_marks(),
            KeyCode::Char(c) => {
                if self.input_buffer.chars().count() < 2 * WORD_LEN {
                    self.input_buffer.push(c);
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => match self.input_mode {
                InputMode::Guess => self.submit_guess(),
                InputMode::Marks => self.submit_marks(),
                InputMode::Solved => {}
            },
            _ => {}
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
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
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
            app.handle_key(key);
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

    fn corpus() -> CandidateStore {
        CandidateStore::from_words([
            "crane", "crate", "grate", "irate", "slate", "plate", "craze", "blitz",
        ])
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
        app.handle_key(KeyEvent::from(KeyCode::Enter));
    }

    #[test]
    fn starts_with_a_suggestion() {
        let words = corpus();
        let app = App::new(Solver::new(&words, &words), 3);

        assert_eq!(app.remaining.size(), 8);
        assert_eq!(app.suggestion.as_ref().unwrap().picks().len(), 3);
        assert_eq!(app.pruned_fraction(), 0.0);
    }

    #[test]
    fn enter_on_empty_input_plays_suggestion() {
        let words = corpus();
        let mut app = App::new(Solver::new(&words, &words), 3);
        let best = app.suggestion.as_ref().unwrap().best().word;

        type_text(&mut app, "");
        assert_eq!(app.pending, Some(best));
        assert_eq!(app.input_mode, InputMode::Marks);
    }

    #[test]
    fn marks_prune_candidates() {
        let words = corpus();
        let mut app = App::new(Solver::new(&words, &words), 3);

        type_text(&mut app, "crane");
        type_text(&mut app, "GGG-G");

        assert_eq!(app.input_mode, InputMode::Guess);
        let left: Vec<&str> = app.remaining.words().iter().map(Word::text).collect();
        assert_eq!(left, ["CRATE", "CRAZE"]);
        assert_eq!(app.rows.len(), 1);
        assert_eq!(app.rows[0].remaining, 2);
        assert!(app.pruned_fraction() > 0.7);
    }

    #[test]
    fn invalid_marks_keep_waiting() {
        let words = corpus();
        let mut app = App::new(Solver::new(&words, &words), 3);

        type_text(&mut app, "crane");
        type_text(&mut app, "GGX");

        assert_eq!(app.input_mode, InputMode::Marks);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
        assert!(app.rows.is_empty());
    }

    #[test]
    fn solved_then_new_game() {
        let words = corpus();
        let mut app = App::new(Solver::new(&words, &words), 3);

        type_text(&mut app, "slate");
        type_text(&mut app, "GGGGG");
        assert_eq!(app.input_mode, InputMode::Solved);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);

        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));
        assert_eq!(app.input_mode, InputMode::Guess);
        assert!(app.rows.is_empty());
        assert_eq!(app.remaining.size(), 8);
    }

    #[test]
    fn exhausted_board_is_not_fatal_and_can_be_undone() {
        let words = corpus();
        let mut app = App::new(Solver::new(&words, &words), 3);

        // Nothing in the corpus has Z at slot 0
        type_text(&mut app, "zzzzz");
        type_text(&mut app, "G----");
        assert!(app.suggestion.is_none());
        assert!(app.remaining.is_empty());
        assert!(!app.should_quit);

        app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert!(app.suggestion.is_some());
        assert_eq!(app.remaining.size(), 8);
        assert!(app.rows.is_empty());
    }

    #[test]
    fn remaining_matches_the_suggestion() {
        let words = corpus();
        let mut app = App::new(Solver::new(&words, &words), 3);

        type_text(&mut app, "slate");
        type_text(&mut app, "--GGG");

        let suggestion = app.suggestion.as_ref().unwrap();
        assert_eq!(app.remaining.words(), suggestion.remaining().words());
        let left: Vec<&str> = app.remaining.words().iter().map(Word::text).collect();
        assert_eq!(left, ["CRATE", "GRATE", "IRATE"]);
    }

    #[test]
    fn empty_guess_pool_still_shows_candidates() {
        let answers = corpus();
        let guesses = CandidateStore::default();
        let app = App::new(Solver::new(&answers, &guesses), 3);

        assert!(app.suggestion.is_none());
        assert_eq!(app.remaining.size(), 8);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn escape_quits() {
        let words = corpus();
        let mut app = App::new(Solver::new(&words, &words), 3);

        app.handle_key(KeyEvent::from(KeyCode::Esc));
        assert!(app.should_quit);
    }
}
