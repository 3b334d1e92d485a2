//! Variables pane: every binding in the session, sorted by name

use super::pane_block;
use crate::interpreter::variables::VariableTable;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

/// Render the variables pane
pub fn render_variables_pane(
    frame: &mut Frame,
    area: Rect,
    variables: &VariableTable,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = format!(" Variables ({}) ", variables.len());
    let block = pane_block(&title, is_focused);

    if variables.is_empty() {
        let paragraph = Paragraph::new("(none)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let entries = variables.sorted();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    *scroll_offset = (*scroll_offset).min(entries.len().saturating_sub(visible_height));

    let items: Vec<ListItem> = entries
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(name, value)| {
            ListItem::new(Line::from(vec![
                Span::styled(name.to_string(), Style::default().fg(DEFAULT_THEME.identifier)),
                Span::styled(" = ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(value.to_string(), Style::default().fg(DEFAULT_THEME.number)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
