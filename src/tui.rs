//! TUI (Terminal User Interface) module for Fourdle
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! The UI follows these state transitions:
//! - `EnteringGuess` → (guess scored) → `EnteringGuess`
//! - `EnteringGuess` → (game decided) → `GameOver` → new game → `EnteringGuess`

use crate::game_state::{GameError, GuessOutcome, PlayerInterface, UserAction};
use crate::hint::HintMark;
use crate::{STARTING_GUESSES, WORD_LENGTH, debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ROW_SPACING: u16 = 2;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Clone, Copy, PartialEq, Debug)]
enum LetterState {
    Empty,
    Entered,
    Exact,    // Green
    Present,  // Yellow
    Absent,   // Gray
}

impl LetterState {
    fn colors(self) -> (Color, Color) {
        match self {
            Self::Empty | Self::Entered => (Color::DarkGray, Color::White),
            Self::Exact => (Color::Green, Color::Black),
            Self::Present => (Color::Yellow, Color::Black),
            Self::Absent => (Color::Gray, Color::White),
        }
    }

    fn from_mark(mark: HintMark) -> Self {
        match mark {
            HintMark::Exact => Self::Exact,
            HintMark::Present => Self::Present,
            HintMark::Absent => Self::Absent,
        }
    }
}

#[derive(Debug)]
struct GuessRow {
    letters: [char; WORD_LENGTH],
    states: [LetterState; WORD_LENGTH],
}

impl GuessRow {
    fn new() -> Self {
        Self {
            letters: [' '; WORD_LENGTH],
            states: [LetterState::Empty; WORD_LENGTH],
        }
    }

    /// Row for a guess the engine has already scored.
    fn scored(guess: &str, hint: &str) -> Self {
        let mut row = Self::new();
        for (i, ch) in guess.chars().enumerate().take(WORD_LENGTH) {
            row.letters[i] = ch.to_ascii_uppercase();
            row.states[i] = LetterState::Entered;
        }
        for (i, mark) in hint
            .chars()
            .filter_map(HintMark::from_char)
            .enumerate()
            .take(WORD_LENGTH)
        {
            row.states[i] = LetterState::from_mark(mark);
        }
        row
    }
}

#[derive(Debug)]
enum TuiState {
    EnteringGuess,
    /// Game has ended either way - closing message stored in interface.message
    GameOver,
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    guesses: &'a [GuessRow],
    current_input: &'a str,
    state: &'a TuiState,
    guesses_remaining: u8,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and game state display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    guesses: Vec<GuessRow>,
    current_input: String,
    state: TuiState,
    guesses_remaining: u8,
    message: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        info_log!("Raw mode enabled");
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        info_log!("Terminal setup complete: alternate screen, cursor hidden");
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal backend created");

        Ok(Self {
            terminal,
            guesses: Vec::new(),
            current_input: String::new(),
            state: TuiState::EnteringGuess,
            guesses_remaining: STARTING_GUESSES,
            message: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    /// Draw the current UI state to the terminal.
    ///
    /// Returns an error if rendering fails.
    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            guesses: &self.guesses,
            current_input: &self.current_input,
            state: &self.state,
            guesses_remaining: self.guesses_remaining,
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    /// Log and handle draw errors appropriately
    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    /// Render the complete UI layout using the provided context.
    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Title
                Constraint::Length(14), // Game board
                Constraint::Min(8),     // Info panel (takes remaining space)
                Constraint::Length(3),  // Status line
                Constraint::Length(3),  // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_board(f, chunks[1], ctx.guesses, ctx.current_input, ctx.state);
        Self::render_info(
            f,
            chunks[2],
            ctx.guesses_remaining,
            ctx.message,
            ctx.error_message,
        );
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("FOURDLE")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(
        f: &mut Frame,
        area: Rect,
        guesses: &[GuessRow],
        current_input: &str,
        state: &TuiState,
    ) {
        let block = Block::default()
            .title("Guesses")
            .borders(Borders::ALL)
            .style(Style::default());

        let inner = block.inner(area);
        f.render_widget(block, area);

        // Calculate how many rows can fit in the available space
        let available_rows = (inner.height / ROW_SPACING) as usize;

        // Determine if we need to show current input
        let showing_current_input = matches!(state, TuiState::EnteringGuess)
            && guesses.len() < STARTING_GUESSES as usize;
        let rows_needed = if showing_current_input {
            guesses.len() + 1
        } else {
            guesses.len()
        };

        // Calculate which guesses to show (prioritize most recent)
        let skip_count = rows_needed.saturating_sub(available_rows);

        // Render visible guesses (skip oldest ones if needed)
        for (display_index, guess) in guesses.iter().skip(skip_count).enumerate() {
            Self::render_guess_row(f, guess, display_index, inner);
        }

        // Render current input if entering a guess
        if showing_current_input {
            let display_row = if rows_needed > available_rows {
                available_rows - 1
            } else {
                guesses.len() - skip_count
            };
            Self::render_current_input(f, display_row, inner, current_input);
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_guess_row(f: &mut Frame, guess: &GuessRow, row_index: usize, area: Rect) {
        let y = area.y + (row_index as u16 * ROW_SPACING);
        if y >= area.y + area.height {
            return;
        }

        let mut spans = vec![Span::raw("  ")];
        for i in 0..WORD_LENGTH {
            let (bg_color, fg_color) = guess.states[i].colors();
            let letter = guess.letters[i];

            spans.push(Span::styled(
                format!(" {letter} "),
                Style::default().fg(fg_color).bg(bg_color),
            ));
            spans.push(Span::raw(" "));
        }

        Self::render_line(f, area, y, spans);
    }

    fn render_line(f: &mut Frame, area: Rect, y: u16, spans: Vec<Span>) {
        let line = Line::from(spans);
        let paragraph = Paragraph::new(line);
        f.render_widget(
            paragraph,
            Rect {
                x: area.x,
                y,
                width: area.width,
                height: 1,
            },
        );
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_current_input(f: &mut Frame, row_index: usize, area: Rect, current_input: &str) {
        let y = area.y + (row_index as u16 * ROW_SPACING);
        if y >= area.y + area.height {
            return;
        }

        let mut spans = vec![Span::raw("  ")];
        for i in 0..WORD_LENGTH {
            let letter = current_input
                .chars()
                .nth(i)
                .map_or(' ', |c| c.to_ascii_uppercase());
            spans.push(Span::styled(
                format!(" {letter} "),
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ));
            spans.push(Span::raw(" "));
        }

        Self::render_line(f, area, y, spans);
    }

    fn render_info(
        f: &mut Frame,
        area: Rect,
        guesses_remaining: u8,
        message: &str,
        error_message: &str,
    ) {
        let mut lines = Vec::new();

        lines.push(Line::from(format!(
            "Guesses remaining: {guesses_remaining}"
        )));
        lines.push(Line::from(""));

        // Color legend
        lines.push(Line::from(vec![Span::styled("Hint colors:", INFO_STYLE)]));
        lines.push(Line::from(vec![
            Span::styled(" A ", Style::new().fg(Color::Black).bg(Color::Green)),
            Span::raw(" right letter, right spot"),
        ]));
        lines.push(Line::from(vec![
            Span::styled(" A ", Style::new().fg(Color::Black).bg(Color::Yellow)),
            Span::raw(" right letter, wrong spot"),
        ]));
        lines.push(Line::from(vec![
            Span::styled(" A ", Style::new().fg(Color::White).bg(Color::Gray)),
            Span::raw(" letter not in the word"),
        ]));
        lines.push(Line::from(""));

        // Messages
        if !message.is_empty() {
            lines.push(Line::from(vec![Span::styled(message, MESSAGE_STYLE)]));
        }

        // Error messages
        if !error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(error_message, ERROR_STYLE)]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: &TuiState) {
        let text = match state {
            TuiState::EnteringGuess => "Type your 4-letter guess | ENTER: Submit | ESC: Quit",
            TuiState::GameOver => "N: New Game | ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        // Poll with a timeout to check if events are available
        let poll_result = event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))?;

        if !poll_result {
            // No event available, return None to continue the loop
            return Ok(None);
        }

        let event = event::read()?;
        debug_log!("handle_input() - Event received: {:?}", event);

        // Filter out non-key events (mouse, focus, etc.)
        match event {
            Event::Mouse(_) => {
                debug_log!("handle_input() - Ignoring mouse event");
                Ok(None)
            }
            Event::FocusGained | Event::FocusLost => {
                debug_log!("handle_input() - Ignoring focus event");
                Ok(None)
            }
            Event::Paste(_) => {
                debug_log!("handle_input() - Ignoring paste event");
                Ok(None)
            }
            Event::Resize(_, _) => {
                debug_log!("handle_input() - Ignoring resize event");
                Ok(None)
            }
            Event::Key(key) => {
                // Only process Press events, ignore Release and Repeat to avoid double input
                if key.kind != event::KeyEventKind::Press {
                    debug_log!(
                        "handle_input() - Ignoring non-Press key event: {:?}",
                        key.kind
                    );
                    return Ok(None);
                }

                // Filter out invalid characters that come from terminal focus events (alt-tab)
                // These show up as replacement characters (�), control characters, or other garbage
                if let KeyCode::Char(c) = key.code {
                    if c == '\u{FFFD}'
                        || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD
                            && c != '\t'
                            && c != '\n'
                            && c != '\r'
                    {
                        debug_log!(
                            "handle_input() - Ignoring invalid character from escape sequence: {:?}",
                            c
                        );
                        return Ok(None);
                    }
                }

                debug_log!(
                    "handle_input() - Key event received: code={:?}, modifiers={:?}",
                    key.code,
                    key.modifiers
                );
                match &self.state {
                    TuiState::EnteringGuess => {
                        debug_log!("handle_input() - Processing in EnteringGuess state");
                        Ok(self.handle_guess_input(key))
                    }
                    TuiState::GameOver => {
                        debug_log!("handle_input() - Processing in GameOver state");
                        Ok(Self::handle_game_over_input(key))
                    }
                }
            }
        }
    }

    fn handle_guess_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();
        debug_log!(
            "handle_guess_input() - Processing key: {:?}, current_input: '{}'",
            key.code,
            self.current_input
        );

        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() && self.current_input.len() < WORD_LENGTH => {
                // Ignore characters with Alt or Control modifiers (Shift is ok for uppercase)
                let has_alt = key.modifiers.contains(event::KeyModifiers::ALT);
                let has_ctrl = key.modifiers.contains(event::KeyModifiers::CONTROL);
                if has_alt || has_ctrl {
                    debug_log!(
                        "handle_guess_input() - Ignoring character with modifier: {:?}",
                        key.modifiers
                    );
                } else {
                    self.current_input.push(c.to_ascii_lowercase());
                    info_log!(
                        "handle_guess_input() - Added '{}' to input, now: '{}'",
                        c.to_ascii_lowercase(),
                        self.current_input
                    );
                }
            }
            KeyCode::Backspace if !self.current_input.is_empty() => {
                self.current_input.pop();
                info_log!(
                    "handle_guess_input() - Removed character, now: '{}'",
                    self.current_input
                );
            }
            KeyCode::Enter if self.current_input.len() == WORD_LENGTH => {
                let guess = self.current_input.clone();
                self.current_input.clear();
                info_log!(
                    "handle_guess_input() - Enter pressed with valid guess: '{}', returning Guess action",
                    guess
                );
                return Some(UserAction::Guess(guess));
            }
            KeyCode::Enter => {
                self.error_message = "Guess must be exactly 4 letters!".to_string();
                info_log!(
                    "handle_guess_input() - Enter pressed but input length is {}, showing error",
                    self.current_input.len()
                );
            }
            KeyCode::Esc => {
                info_log!("handle_guess_input() - ESC pressed, returning Exit");
                return Some(UserAction::Exit);
            }
            KeyCode::Char(c) if !c.is_ascii_alphabetic() => {
                // Explicitly reject non-alphabetic characters
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
                debug_log!(
                    "handle_guess_input() - Rejecting non-alphabetic character: '{}'",
                    c
                );
            }
            _ => {
                debug_log!("handle_guess_input() - Ignoring key: {:?}", key.code);
            }
        }
        None
    }

    fn handle_game_over_input(key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char('n' | 'N') => Some(UserAction::NewGame),
            KeyCode::Esc => Some(UserAction::Exit),
            _ => None,
        }
    }
}

impl PlayerInterface for TuiInterface {
    fn show_game_start(&mut self, message: &str, guesses_remaining: u8) {
        info_log!("show_game_start() - '{}'", message);
        self.guesses.clear();
        self.current_input.clear();
        self.state = TuiState::EnteringGuess;
        self.guesses_remaining = guesses_remaining;
        self.message = message.to_string();
        self.error_message.clear();
        self.status = "Enter your first 4-letter guess".to_string();
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        info_log!("read_action() - Starting input loop");
        loop {
            // Draw the current state
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            // Handle input - this will block until an event is available
            match self.handle_input() {
                Ok(Some(action)) => {
                    info_log!("read_action() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {
                    // No action yet, continue the loop (character was added or ignored)
                }
                Err(_e) => {
                    info_log!("read_action() - Error handling input, returning Exit");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn show_outcome(&mut self, guess: &str, outcome: &GuessOutcome) {
        info_log!(
            "show_outcome() - Guess '{}' scored '{}'",
            guess,
            outcome.hint()
        );
        self.guesses.push(GuessRow::scored(guess, outcome.hint()));
        self.guesses_remaining = self.guesses_remaining.saturating_sub(1);
        self.error_message.clear();

        match outcome {
            GuessOutcome::Won { message, .. } => {
                self.state = TuiState::GameOver;
                self.message = format!("✓ {message}");
                self.status = "Game Over - You won!".to_string();
            }
            GuessOutcome::Lost { message, .. } => {
                self.state = TuiState::GameOver;
                self.message.clone_from(message);
                self.status = "Game Over - Out of guesses".to_string();
            }
            GuessOutcome::Continue { message, .. } => {
                self.message.clone_from(message);
                self.status = "Enter your next guess".to_string();
            }
        }
        self.draw_or_log();
    }

    fn show_error(&mut self, error: &GameError) {
        debug_log!("show_error() - {}", error);
        self.error_message = error.to_string();
        self.draw_or_log();
    }

    fn show_exit(&mut self) {
        self.message = "Exiting...".to_string();
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scored_row_maps_hint_to_letter_states() {
        let row = GuessRow::scored("oslo", "-001");
        assert_eq!(row.letters, ['O', 'S', 'L', 'O']);
        assert_eq!(
            row.states,
            [
                LetterState::Absent,
                LetterState::Present,
                LetterState::Present,
                LetterState::Exact,
            ]
        );
    }

    #[test]
    fn test_scored_row_uppercases_letters_for_display() {
        let row = GuessRow::scored("cast", "1111");
        assert_eq!(row.letters, ['C', 'A', 'S', 'T']);
        assert!(row.states.iter().all(|s| *s == LetterState::Exact));
    }
}
