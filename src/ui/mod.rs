//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI plays both external roles around the engine:
//!
//! - **[`app`]** — the driver: keyboard event loop, manual stepping, timed autoplay
//! - **[`panes`]** — the presenter: stateless render functions for the array,
//!   heap tree, narrative and status bar
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`SiftEngine`] and
//! call [`App::run`] to start the event loop.
//!
//! [`SiftEngine`]: crate::sift::engine::SiftEngine
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
