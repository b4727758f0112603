//! TUI rendering with ratatui
//!
//! Board, keyboard and message panels for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{AlphabetKnowledge, LetterResult, NUMBER_OF_GUESSES, WORD_LENGTH};
use crate::game::GameStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board and keyboard
            Constraint::Percentage(45), // Messages
        ])
        .split(chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NUMBER_OF_GUESSES as u16 * 2 + 2), // Board
            Constraint::Min(5),                                    // Keyboard
        ])
        .split(main_chunks[0]);

    render_board(f, app, left[0]);
    render_keyboard(f, app.session.knowledge(), left[1]);
    render_messages(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE")
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

/// Background colour for a classified letter
const fn result_color(result: LetterResult) -> Color {
    match result {
        LetterResult::ExactMatch => Color::Green,
        LetterResult::PresentWrongPosition => Color::Yellow,
        LetterResult::Absent => Color::DarkGray,
    }
}

fn tile(letter: char, background: Color) -> Span<'static> {
    Span::styled(
        format!(" {} ", letter.to_ascii_uppercase()),
        Style::default()
            .fg(Color::Black)
            .bg(background)
            .add_modifier(Modifier::BOLD),
    )
}

/// One row per allowed guess: played rows coloured, the active row shows
/// the input buffer, later rows are blank
fn board_lines(app: &App) -> Vec<Line<'static>> {
    let state = app.session.state();
    let active_row = (!state.is_terminal()).then(|| state.attempts().len());
    let mut lines = Vec::with_capacity(NUMBER_OF_GUESSES * 2);

    for (row, slot) in state.slots().enumerate() {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
        for col in 0..WORD_LENGTH {
            let cell = match slot {
                Some(attempt) => tile(
                    char::from(attempt.guess().letter_at(col)),
                    result_color(attempt.feedback().result_at(col)),
                ),
                None if Some(row) == active_row => {
                    let typed = app.input_buffer.chars().nth(col).unwrap_or(' ');
                    tile(typed, Color::White)
                }
                None => tile(' ', Color::Gray),
            };
            spans.push(cell);
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = Paragraph::new(board_lines(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn keyboard_lines(knowledge: &AlphabetKnowledge) -> Vec<Line<'static>> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|letter| {
                    let background = knowledge.get(letter).map_or(Color::Gray, result_color);
                    [tile(letter, background), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_keyboard(f: &mut Frame, knowledge: &AlphabetKnowledge, area: Rect) {
    let keyboard = Paragraph::new(keyboard_lines(knowledge))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Keyboard ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
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

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => {
            let title = match app.session.status() {
                GameStatus::Won => " 🎉 CONGRATULATIONS! 🎉 | 'n' new game, 'q' quit ",
                _ => " GAME OVER | 'n' new game, 'q' quit ",
            };
            (title, app.session.answer().to_uppercase(), Color::Green)
        }
        InputMode::Guessing => (
            " Enter Guess (5 letters) | Enter to submit, Esc to quit ",
            app.input_buffer.clone(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
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
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let state = app.session.state();
    let turn_text = format!(
        "Guess: {}/{NUMBER_OF_GUESSES}",
        state.attempts().len().min(NUMBER_OF_GUESSES)
    );
    f.render_widget(Paragraph::new(turn_text).alignment(Alignment::Center), chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.games_played,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let streak_text = format!(
        "Streak: {} (best {})",
        app.stats.current_streak, app.stats.max_streak
    );
    f.render_widget(
        Paragraph::new(streak_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help_text = if state.is_terminal() {
        "q: Quit | n: New Game"
    } else {
        "Esc: Quit | Enter: Submit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
