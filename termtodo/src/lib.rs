//! `TermTodo` — terminal-native task list library.

pub mod app;
pub mod config;
pub mod ui;
