//! Transcript pane rendering

use super::pane_block;
use crate::transcript::{EntryKind, Transcript};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

fn line_style(kind: Option<EntryKind>) -> Style {
    match kind {
        None => Style::default().fg(DEFAULT_THEME.comment),
        Some(EntryKind::Value) => Style::default()
            .fg(DEFAULT_THEME.number)
            .add_modifier(Modifier::BOLD),
        Some(EntryKind::Error) => Style::default().fg(DEFAULT_THEME.error),
        Some(EntryKind::Message) | Some(EntryKind::Silent) => {
            Style::default().fg(DEFAULT_THEME.fg)
        }
    }
}

/// Render the transcript pane.
///
/// `scroll_offset` counts lines from the top; `usize::MAX` pins the view to
/// the newest line.
pub fn render_transcript_pane(
    frame: &mut Frame,
    area: Rect,
    transcript: &Transcript,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Transcript ", is_focused);
    let lines = transcript.lines();

    if lines.is_empty() {
        let paragraph = Paragraph::new("(type an expression, /help for help)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let total_items = lines.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(text, kind)| ListItem::new(text).style(line_style(kind)))
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
