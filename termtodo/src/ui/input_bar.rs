//! Add/edit input bar rendering.
//!
//! One input box serves both forms: the add form while idle, the edit
//! form while an edit session is active (the session's previous text is
//! shown in the title).

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use termtodo_store::Persistence;

use super::theme;
use crate::app::{App, EditSession, PanelFocus};

/// Render the add or edit input box.
pub fn render<P: Persistence>(frame: &mut Frame, area: Rect, app: &App<P>) {
    let editing = matches!(app.edit, EditSession::Editing { .. });
    let is_focused = editing || app.focus == PanelFocus::Input;

    // Build the input text with cursor
    let mut display_text = app.input.clone();
    if is_focused {
        if app.cursor_position >= display_text.len() {
            display_text.push('█');
        } else {
            display_text.insert(app.cursor_position, '█');
        }
    }

    let input_line = if display_text.is_empty() && !is_focused {
        Line::from(Span::styled("Type a task...", theme::dimmed()))
    } else {
        Line::from(Span::styled(display_text, theme::normal()))
    };

    let title = match &app.edit {
        EditSession::Editing { previous_text, .. } => {
            format!("Edit: {previous_text} (Enter: save, Esc: cancel)")
        }
        EditSession::Idle => "Add Task".to_string(),
    };

    let block = Block::default()
        .title(Span::styled(title, theme::panel_title(theme::INPUT_TITLE)))
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    let paragraph = Paragraph::new(input_line).block(block);

    frame.render_widget(paragraph, area);
}
