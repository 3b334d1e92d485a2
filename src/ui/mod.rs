//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! - **[`app`]** — application state, keyboard event loop, line editing and history recall
//! - **[`panes`]** — stateless render functions for the transcript, variables,
//!   input line and status bar
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point is [`App`]: construct it with a [`Calculator`] and call
//! [`App::run`] to start the event loop.
//!
//! [`Calculator`]: crate::interpreter::engine::Calculator
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
