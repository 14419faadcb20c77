/*
[INPUT]:  Successful logins and explicit logouts
[OUTPUT]: Persisted session marker and its store implementations
[POS]:    Session layer - logged-in marker persistence
[UPDATE]: When the marker format or storage location changes
*/

pub mod store;

pub use store::{FileSessionStore, MemorySessionStore, SessionStore};

use serde::{Deserialize, Serialize};

/// The logged-in identity. Persisted as `{"email": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
}

impl Session {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}
