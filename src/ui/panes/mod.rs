//! TUI pane rendering modules
//!
//! - [`transcript`]: Processed input lines and their replies
//! - [`variables`]: The session's variable table
//! - [`input`]: The editable input line
//! - [`status`]: Status bar with keybindings and the last reply
//!
//! Each module exports one stateless `render_*` function; scroll offsets live
//! in [`App`](crate::ui::App) and are clamped during rendering.

pub mod input;
pub mod status;
pub mod transcript;
pub mod variables;

pub use input::render_input_pane;
pub use status::render_status_bar;
pub use transcript::render_transcript_pane;
pub use variables::render_variables_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block with the focus-dependent border style shared by all panes
fn pane_block(title: &str, is_focused: bool) -> Block<'static> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(border_style)
}
