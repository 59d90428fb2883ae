//! Rendering tests over ratatui's `TestBackend`.
//!
//! These verify the rendering contract: each record shows as one row
//! with a checkbox affordance and its text, and the chrome (input bar,
//! filter selector, status counts) reflects the app state.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use ratatui::{Terminal, backend::TestBackend};
use termtodo::app::{App, FilterMode, PanelFocus};
use termtodo::ui;
use termtodo_store::{MemoryStore, TaskStore};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

fn make_app(texts: &[&str]) -> App<MemoryStore> {
    let mut store = TaskStore::load(MemoryStore::new());
    for text in texts {
        store.add(text);
    }
    App::new(store)
}

/// Draws one frame and flattens the buffer to a string.
fn render_to_text(app: &App<MemoryStore>) -> String {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::draw(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer.cell((x, y)).unwrap().symbol());
        }
        out.push('\n');
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn renders_task_rows_with_checkboxes() {
    let app = make_app(&["Buy milk", "Walk dog"]);
    let screen = render_to_text(&app);

    assert!(screen.contains("[ ] Buy milk"));
    assert!(screen.contains("[ ] Walk dog"));
}

#[test]
fn done_task_renders_checked() {
    let mut app = make_app(&["Buy milk"]);
    app.store.set_done("Buy milk", true);
    let screen = render_to_text(&app);

    assert!(screen.contains("[✓] Buy milk"));
}

#[test]
fn hidden_rows_are_not_rendered() {
    let mut app = make_app(&["alpha", "beta"]);
    app.search_query = "alpha".to_string();
    let screen = render_to_text(&app);

    assert!(screen.contains("alpha"));
    assert!(!screen.contains("beta"));
}

#[test]
fn filter_selector_shows_current_mode() {
    let mut app = make_app(&[]);
    app.filter = FilterMode::Done;
    let screen = render_to_text(&app);

    assert!(screen.contains("Filter"));
    assert!(screen.contains("done"));
}

#[test]
fn status_bar_shows_done_counts() {
    let mut app = make_app(&["a", "b", "c"]);
    app.store.set_done("b", true);
    let screen = render_to_text(&app);

    assert!(screen.contains("1/3 done"));
}

#[test]
fn input_bar_shows_typed_text() {
    let mut app = make_app(&[]);
    app.input = "half-typed".to_string();
    app.cursor_position = app.input.len();
    let screen = render_to_text(&app);

    assert!(screen.contains("Add Task"));
    assert!(screen.contains("half-typed"));
}

#[test]
fn edit_session_retitles_input_bar_with_previous_text() {
    let mut app = make_app(&["old name"]);
    app.focus = PanelFocus::Tasks;
    app.handle_key_event(crossterm::event::KeyEvent::new(
        crossterm::event::KeyCode::Char('e'),
        crossterm::event::KeyModifiers::NONE,
    ));
    let screen = render_to_text(&app);

    assert!(screen.contains("Edit: old name"));
}

#[test]
fn empty_list_still_renders_chrome() {
    let app = make_app(&[]);
    let screen = render_to_text(&app);

    assert!(screen.contains("Tasks"));
    assert!(screen.contains("Search"));
    assert!(screen.contains("0/0 done"));
}
