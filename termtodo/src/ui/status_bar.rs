//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};
use termtodo_store::Persistence;

use super::theme;
use crate::app::{App, EditSession, PanelFocus};

/// Render the status bar at the bottom of the screen.
pub fn render<P: Persistence>(frame: &mut Frame, area: Rect, app: &App<P>) {
    let help_text = if matches!(app.edit, EditSession::Editing { .. }) {
        "Enter: save | Esc: cancel"
    } else {
        match app.focus {
            PanelFocus::Input => "Enter: add | Tab: switch panel | Esc: quit | ←→: move cursor",
            PanelFocus::Tasks => {
                "↑↓/jk: navigate | Space: toggle done | e: edit | d: delete | f: filter | Esc: quit"
            }
            PanelFocus::Search => "type to search | Ctrl+U: clear | Tab: switch panel | Esc: quit",
        }
    };

    let (done, total) = app.task_counts();

    let status_line = Line::from(vec![
        Span::styled("TermTodo v0.1.0", theme::bold()),
        Span::raw(" | "),
        Span::styled("●", theme::normal().fg(theme::DONE)),
        Span::raw(format!(" {done}/{total} done")),
        Span::raw(" | "),
        Span::styled(help_text, theme::dimmed()),
    ]);

    let paragraph = Paragraph::new(status_line).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}
