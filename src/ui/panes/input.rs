//! Input line rendering

use super::pane_block;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the input line and place the terminal cursor at `cursor`
/// (a char index into `input`).
pub fn render_input_pane(frame: &mut Frame, area: Rect, input: &str, cursor: usize) {
    let block = pane_block(" Input ", false);
    let prompt = "> ";

    // Scroll the text horizontally so the cursor stays visible
    let available = (area.width.saturating_sub(2) as usize)
        .saturating_sub(prompt.len() + 1)
        .max(1);
    let skip = cursor.saturating_sub(available);
    let text: String = input.chars().skip(skip).collect();

    let line = Line::from(vec![
        Span::styled(prompt, Style::default().fg(DEFAULT_THEME.primary)),
        Span::styled(text, Style::default().fg(DEFAULT_THEME.fg)),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);

    let cursor_x = area.x + 1 + (prompt.len() + cursor - skip) as u16;
    frame.set_cursor_position(Position::new(cursor_x, area.y + 1));
}
