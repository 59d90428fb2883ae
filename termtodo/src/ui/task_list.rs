//! Task list rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use termtodo_store::Persistence;

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the visible task rows with checkbox and done styling.
pub fn render<P: Persistence>(frame: &mut Frame, area: Rect, app: &App<P>) {
    let is_focused = app.focus == PanelFocus::Tasks;

    let items: Vec<ListItem> = app
        .visible_tasks()
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let checkbox = if task.done { "[✓]" } else { "[ ]" };
            let text_style = if task.done {
                theme::done()
            } else {
                theme::normal()
            };

            let line = Line::from(vec![
                Span::styled(checkbox, theme::normal().fg(theme::DONE)),
                Span::raw(" "),
                Span::styled(task.text.clone(), text_style),
            ]);

            let row_style = if idx == app.selected && is_focused {
                theme::selected()
            } else {
                theme::normal()
            };

            ListItem::new(line).style(row_style)
        })
        .collect();

    let block = Block::default()
        .title(Span::styled("Tasks", theme::panel_title(theme::TASKS_TITLE)))
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    let list = List::new(items).block(block);

    frame.render_widget(list, area);
}
