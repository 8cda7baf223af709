//! Coach - a terminal popover for local model workflows
//!
//! Coach shows the active local model with a menu to switch or add models,
//! a button to reset the model's context, and a short list of keyboard
//! shortcuts that can be starred or deleted with command chords.

pub mod app;
pub mod config;
pub mod models;
pub mod paths;
pub mod session;
pub mod shortcut;
pub mod tui;

pub use app::{App, Mode};
pub use config::Config;
pub use models::ModelCatalog;
pub use session::{LoggingSession, ModelSession};
pub use shortcut::{ShortcutEntry, ShortcutId, ShortcutList};
