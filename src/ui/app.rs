//! Main TUI application state and logic

use crate::interpreter::engine::{Calculator, Outcome};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;

/// Lines moved by one PageUp/PageDown
const PAGE_SCROLL: usize = 5;

/// Which scrollable pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Transcript,
    Variables,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Transcript => FocusedPane::Variables,
            FocusedPane::Variables => FocusedPane::Transcript,
        }
    }
}

/// The main application state
pub struct App {
    /// The calculator session
    pub calculator: Calculator,

    /// Text being edited and the cursor position in chars
    pub input: String,
    pub cursor: usize,

    /// Previously submitted lines, oldest first
    pub history: Vec<String>,
    /// Position while recalling history (None = editing a fresh line)
    pub history_index: Option<usize>,
    /// Line being edited before history recall started
    pub draft: String,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub transcript_scroll: usize,
    pub variables_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
    pub status_is_error: bool,

    /// Message from `/exit`, printed after the terminal is restored
    pub exit_message: Option<String>,
}

impl App {
    pub fn new(calculator: Calculator) -> Self {
        App {
            calculator,
            input: String::new(),
            cursor: 0,
            history: Vec::new(),
            history_index: None,
            draft: String::new(),
            focused_pane: FocusedPane::Transcript,
            transcript_scroll: 0,
            variables_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
            exit_message: None,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, then the input line, then the status bar
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(main_chunks[0]);

        super::panes::render_transcript_pane(
            frame,
            columns[0],
            self.calculator.transcript(),
            self.focused_pane == FocusedPane::Transcript,
            &mut self.transcript_scroll,
        );

        super::panes::render_variables_pane(
            frame,
            columns[1],
            self.calculator.variables(),
            self.focused_pane == FocusedPane::Variables,
            &mut self.variables_scroll,
        );

        super::panes::render_input_pane(frame, main_chunks[1], &self.input, self.cursor);

        super::panes::render_status_bar(
            frame,
            main_chunks[2],
            &self.status_message,
            self.status_is_error,
            self.calculator.transcript().len(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('c') | KeyCode::Char('d') = key.code {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Char(c) => {
                let at = self.byte_offset(self.cursor);
                self.input.insert(at, c);
                self.cursor += 1;
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_offset(self.cursor);
                    self.input.remove(at);
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.input.chars().count() {
                    let at = self.byte_offset(self.cursor);
                    self.input.remove(at);
                }
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.input.chars().count());
            }
            KeyCode::Home => {
                self.cursor = 0;
            }
            KeyCode::End => {
                self.cursor = self.input.chars().count();
            }
            KeyCode::Up => self.recall_previous(),
            KeyCode::Down => self.recall_next(),
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::PageUp => match self.focused_pane {
                FocusedPane::Transcript => {
                    self.transcript_scroll = self.transcript_scroll.saturating_sub(PAGE_SCROLL);
                }
                FocusedPane::Variables => {
                    self.variables_scroll = self.variables_scroll.saturating_sub(PAGE_SCROLL);
                }
            },
            KeyCode::PageDown => match self.focused_pane {
                FocusedPane::Transcript => {
                    self.transcript_scroll = self.transcript_scroll.saturating_add(PAGE_SCROLL);
                }
                FocusedPane::Variables => {
                    self.variables_scroll = self.variables_scroll.saturating_add(PAGE_SCROLL);
                }
            },
            _ => {}
        }
    }

    /// Process the current input line through the calculator
    fn submit(&mut self) {
        let line = std::mem::take(&mut self.input);
        self.cursor = 0;
        self.history_index = None;
        self.draft.clear();

        if line.trim().is_empty() {
            return;
        }
        if self.history.last() != Some(&line) {
            // Recall history shares the transcript bound
            if self.history.len() == self.calculator.transcript().limit() {
                self.history.remove(0);
            }
            self.history.push(line.clone());
        }

        let outcome = self.calculator.process(&line);
        self.status_is_error = matches!(outcome, Outcome::Error(_));
        self.status_message = match &outcome {
            Outcome::Silent => "Assigned".to_string(),
            other => other.reply().unwrap_or_default(),
        };

        if let Outcome::Exit(message) = outcome {
            self.exit_message = Some(message);
            self.should_quit = true;
        }

        // Auto-scroll transcript to bottom
        self.transcript_scroll = usize::MAX;
    }

    fn recall_previous(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let index = match self.history_index {
            None => {
                self.draft = self.input.clone();
                self.history.len() - 1
            }
            Some(index) => index.saturating_sub(1),
        };
        self.history_index = Some(index);
        self.set_input(self.history[index].clone());
    }

    fn recall_next(&mut self) {
        let Some(index) = self.history_index else {
            return;
        };
        if index + 1 < self.history.len() {
            self.history_index = Some(index + 1);
            self.set_input(self.history[index + 1].clone());
        } else {
            self.history_index = None;
            let draft = std::mem::take(&mut self.draft);
            self.set_input(draft);
        }
    }

    fn set_input(&mut self, text: String) {
        self.cursor = text.chars().count();
        self.input = text;
    }

    /// Byte offset of the char at `index` (or the end of the input)
    fn byte_offset(&self, index: usize) -> usize {
        self.input
            .char_indices()
            .nth(index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.input.len())
    }
}
