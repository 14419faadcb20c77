/*
[INPUT]:  Public API exports for task-app crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod cli;
pub mod config;
pub mod logging;
pub mod runtime;
pub mod session;
pub mod state;
pub mod sync;
pub mod theme;
pub mod tui;

// Re-export main types for convenience
pub use config::AppConfig;
pub use runtime::{App, Dispatcher};
pub use session::SessionManager;
pub use state::{AppState, Completion, Effect, Screen};
pub use sync::{TaskList, TaskListSynchronizer};
