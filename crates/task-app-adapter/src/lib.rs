/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public task API adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod session;
pub mod types;

// Re-export commonly used types from http
pub use http::{ClientConfig, Result, TaskApi, TaskAppClient, TaskAppError};

// Re-export session persistence
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionStore};

// Re-export all types
pub use types::*;
