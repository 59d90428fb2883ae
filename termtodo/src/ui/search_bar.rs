//! Search input and filter selector rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use termtodo_store::Persistence;

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the search bar and the filter selector side by side.
pub fn render<P: Persistence>(frame: &mut Frame, area: Rect, app: &App<P>) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(22)])
        .split(area);

    render_search(frame, chunks[0], app);
    render_filter(frame, chunks[1], app);
}

/// Render the search input box.
fn render_search<P: Persistence>(frame: &mut Frame, area: Rect, app: &App<P>) {
    let is_focused = app.focus == PanelFocus::Search;

    let mut display_text = app.search_query.clone();
    if is_focused {
        display_text.push('█');
    }

    let line = if display_text.is_empty() {
        Line::from(Span::styled("Search...", theme::dimmed()))
    } else {
        Line::from(Span::styled(display_text, theme::normal()))
    };

    let block = Block::default()
        .title(Span::styled(
            "Search (Ctrl+U clears)",
            theme::panel_title(theme::SEARCH_TITLE),
        ))
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render the current filter mode.
fn render_filter<P: Persistence>(frame: &mut Frame, area: Rect, app: &App<P>) {
    let line = Line::from(vec![
        Span::styled(app.filter.label(), theme::bold()),
        Span::styled(" (f cycles)", theme::dimmed()),
    ]);

    let block = Block::default()
        .title(Span::styled(
            "Filter",
            theme::panel_title(theme::SEARCH_TITLE),
        ))
        .borders(Borders::ALL)
        .border_style(theme::normal());

    frame.render_widget(Paragraph::new(line).block(block), area);
}
