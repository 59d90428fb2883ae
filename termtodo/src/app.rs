//! Application state and event handling.
//!
//! `App` is the view controller: it translates key gestures into task
//! store operations, owns the single-slot edit session, and holds the
//! view-only search and filter state. Visibility is recomputed every
//! frame as the intersection of the filter and search predicates.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use termtodo_store::{Persistence, TaskId, TaskRecord, TaskStore};

/// Which control surface is currently focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// Add input box is focused (default).
    Input,
    /// Task list is focused.
    Tasks,
    /// Search bar is focused.
    Search,
}

/// Non-persistent filter over rendered rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Every row passes.
    #[default]
    All,
    /// Only done rows pass.
    Done,
    /// Only not-done rows pass.
    Todo,
}

impl FilterMode {
    /// Parses a mode name.
    ///
    /// Unrecognized names yield `None` so callers can leave the current
    /// mode unchanged.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "all" => Some(Self::All),
            "done" => Some(Self::Done),
            "todo" => Some(Self::Todo),
            _ => None,
        }
    }

    /// The next mode in the cycle All -> Done -> Todo -> All.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Done,
            Self::Done => Self::Todo,
            Self::Todo => Self::All,
        }
    }

    /// Display label for the filter selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Done => "done",
            Self::Todo => "todo",
        }
    }

    /// Whether a record passes this filter.
    #[must_use]
    pub const fn matches(self, record: &TaskRecord) -> bool {
        match self {
            Self::All => true,
            Self::Done => record.done,
            Self::Todo => !record.done,
        }
    }
}

/// Single-slot edit session owned by the view controller.
///
/// At most one task is being renamed at a time; the session captures the
/// task's id and its text at entry, and is cleared on commit or cancel.
/// Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditSession {
    /// No edit in progress; the add form is active.
    Idle,
    /// One task is being renamed.
    Editing {
        /// Id of the task being renamed.
        id: TaskId,
        /// The task's text when the session began.
        previous_text: String,
    },
}

/// Main application state.
pub struct App<P: Persistence> {
    /// Canonical task collection with write-through persistence.
    pub store: TaskStore<P>,
    /// Which control surface receives non-global keys.
    pub focus: PanelFocus,
    /// Edit-session state machine.
    pub edit: EditSession,
    /// Current add/edit input text.
    pub input: String,
    /// Cursor position in the input (byte index, on a char boundary).
    pub cursor_position: usize,
    /// Current search query (view-only, never persisted).
    pub search_query: String,
    /// Current filter mode (view-only, never persisted).
    pub filter: FilterMode,
    /// Selected index into the visible rows.
    pub selected: usize,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl<P: Persistence> App<P> {
    /// Creates an application over a hydrated store.
    #[must_use]
    pub fn new(store: TaskStore<P>) -> Self {
        Self {
            store,
            focus: PanelFocus::Input,
            edit: EditSession::Idle,
            input: String::new(),
            cursor_position: 0,
            search_query: String::new(),
            filter: FilterMode::All,
            selected: 0,
            should_quit: false,
        }
    }

    /// Sets the initial filter mode.
    #[must_use]
    pub fn with_filter(mut self, filter: FilterMode) -> Self {
        self.filter = filter;
        self
    }

    /// Whether a record is currently visible: the intersection of the
    /// filter predicate and the search predicate, so applying one pass
    /// never discards the other's effect.
    #[must_use]
    pub fn is_visible(&self, record: &TaskRecord) -> bool {
        self.filter.matches(record) && self.matches_search(record)
    }

    /// The rows currently visible, in collection order.
    #[must_use]
    pub fn visible_tasks(&self) -> Vec<&TaskRecord> {
        self.store
            .tasks()
            .iter()
            .filter(|t| self.is_visible(t))
            .collect()
    }

    /// Done and total counts over the full collection.
    #[must_use]
    pub fn task_counts(&self) -> (usize, usize) {
        let total = self.store.tasks().len();
        let done = self.store.tasks().iter().filter(|t| t.done).count();
        (done, total)
    }

    fn matches_search(&self, record: &TaskRecord) -> bool {
        if self.search_query.is_empty() {
            return true;
        }
        record
            .text
            .to_lowercase()
            .contains(&self.search_query.to_lowercase())
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // An active edit session captures every key until it commits or
        // cancels; focus cycling and quit-on-Esc are suspended.
        if matches!(self.edit, EditSession::Editing { .. }) {
            self.handle_edit_key(key);
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.cycle_focus();
                return;
            }
            _ => {}
        }

        match self.focus {
            PanelFocus::Input => self.handle_input_key(key),
            PanelFocus::Tasks => self.handle_tasks_key(key),
            PanelFocus::Search => self.handle_search_key(key),
        }
    }

    /// Handle key event when the add input is focused.
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_add(),
            KeyCode::Char(c) => self.enter_char(c),
            KeyCode::Backspace => self.delete_char(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.cursor_position = self.input.len(),
            _ => {}
        }
    }

    /// Handle key event when the task list is focused.
    fn handle_tasks_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.prev_row(),
            KeyCode::Down | KeyCode::Char('j') => self.next_row(),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected_done(),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
            KeyCode::Char('e') => self.begin_edit(),
            KeyCode::Char('f') => self.cycle_filter(),
            _ => {}
        }
    }

    /// Handle key event when the search bar is focused.
    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.erase_search();
            }
            KeyCode::Char(c) => {
                self.search_query.push(c);
                self.clamp_selection();
            }
            KeyCode::Backspace => {
                self.search_query.pop();
                self.clamp_selection();
            }
            KeyCode::Enter => self.focus = PanelFocus::Tasks,
            _ => {}
        }
    }

    /// Handle key event while an edit session is active.
    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.commit_edit(),
            KeyCode::Esc => self.cancel_edit(),
            KeyCode::Char(c) => self.enter_char(c),
            KeyCode::Backspace => self.delete_char(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.cursor_position = self.input.len(),
            _ => {}
        }
    }

    /// Cycle focus: Input -> Tasks -> Search -> Input.
    const fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Input => PanelFocus::Tasks,
            PanelFocus::Tasks => PanelFocus::Search,
            PanelFocus::Search => PanelFocus::Input,
        };
    }

    /// Submit the current input as a new task.
    fn submit_add(&mut self) {
        if self.input.is_empty() {
            return;
        }
        if self.store.add(&self.input).is_some() {
            self.input.clear();
            self.cursor_position = 0;
            self.clamp_selection();
        }
    }

    /// Toggle the done flag of the selected visible row.
    fn toggle_selected_done(&mut self) {
        if let Some(id) = self.selected_id() {
            let done = self.store.get(&id).is_some_and(|t| t.done);
            self.store.set_done_by_id(&id, !done);
            // The row may have left the visible set under Done/Todo.
            self.clamp_selection();
        }
    }

    /// Delete the selected visible row.
    fn delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.remove_by_id(&id);
            self.clamp_selection();
        }
    }

    /// Enter an edit session for the selected visible row, pre-filling
    /// the input with its current text.
    fn begin_edit(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let Some(record) = self.store.get(&id) else {
            return;
        };
        let previous_text = record.text.clone();
        self.input.clone_from(&previous_text);
        self.cursor_position = self.input.len();
        self.edit = EditSession::Editing { id, previous_text };
    }

    /// Commit the edit: rename when the new text is non-empty, then
    /// return to idle either way.
    fn commit_edit(&mut self) {
        if let EditSession::Editing { id, .. } = self.edit.clone()
            && !self.input.is_empty()
        {
            self.store.rename_by_id(&id, &self.input);
        }
        self.exit_edit();
    }

    /// Cancel the edit, discarding the input.
    fn cancel_edit(&mut self) {
        self.exit_edit();
    }

    fn exit_edit(&mut self) {
        self.edit = EditSession::Idle;
        self.input.clear();
        self.cursor_position = 0;
        self.clamp_selection();
    }

    /// Clear the search field and re-run the visibility pass with the
    /// empty query.
    pub fn erase_search(&mut self) {
        self.search_query.clear();
        self.clamp_selection();
    }

    /// Advance the filter selector to the next mode.
    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
        self.clamp_selection();
    }

    /// Id of the currently selected visible row.
    fn selected_id(&self) -> Option<TaskId> {
        self.visible_tasks().get(self.selected).map(|t| t.id.clone())
    }

    fn clamp_selection(&mut self) {
        let visible = self.visible_tasks().len();
        self.selected = self.selected.min(visible.saturating_sub(1));
    }

    /// Select the previous visible row.
    fn prev_row(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Select the next visible row.
    fn next_row(&mut self) {
        if self.selected < self.visible_tasks().len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// Insert a character at the cursor position.
    fn enter_char(&mut self, c: char) {
        self.input.insert(self.cursor_position, c);
        self.cursor_position += c.len_utf8();
    }

    /// Delete the character before the cursor.
    fn delete_char(&mut self) {
        if let Some(prev) = self.prev_char_boundary() {
            self.input.remove(prev);
            self.cursor_position = prev;
        }
    }

    /// Move cursor left one character.
    fn move_cursor_left(&mut self) {
        if let Some(prev) = self.prev_char_boundary() {
            self.cursor_position = prev;
        }
    }

    /// Move cursor right one character.
    fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.len() {
            let next = self.input[self.cursor_position..]
                .chars()
                .next()
                .map_or(0, char::len_utf8);
            self.cursor_position += next;
        }
    }

    fn prev_char_boundary(&self) -> Option<usize> {
        self.input[..self.cursor_position]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }
}
