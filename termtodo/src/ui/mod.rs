//! Terminal UI rendering.

pub mod input_bar;
pub mod search_bar;
pub mod status_bar;
pub mod task_list;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};
use termtodo_store::Persistence;

use crate::app::App;

/// Main draw function for the entire UI.
pub fn draw<P: Persistence>(frame: &mut Frame, app: &App<P>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // add/edit input
            Constraint::Length(3), // search + filter
            Constraint::Min(3),    // task list
            Constraint::Length(1), // status bar
        ])
        .split(frame.area());

    input_bar::render(frame, chunks[0], app);
    search_bar::render(frame, chunks[1], app);
    task_list::render(frame, chunks[2], app);
    status_bar::render(frame, chunks[3], app);
}
