/*
[INPUT]:  Session marker and storage directory
[OUTPUT]: Marker written, read back, or removed
[POS]:    Session layer - persistent storage for the logged-in marker
[UPDATE]: When marker file naming or write strategy changes
*/

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tracing::debug;

use crate::http::{Result, TaskAppError};
use crate::session::Session;

const SESSION_FILE_NAME: &str = "session.json";

/// Storage for the single session marker
pub trait SessionStore: Send + Sync {
    /// Persist the marker, replacing any previous one
    fn save(&self, session: &Session) -> Result<()>;

    /// Read the marker back, `None` when absent
    fn load(&self) -> Result<Option<Session>>;

    /// Remove the marker; removing an absent marker succeeds
    fn clear(&self) -> Result<()>;
}

/// Marker stored as a JSON file inside a directory
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the marker file
    pub fn path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE_NAME)
    }
}

impl SessionStore for FileSessionStore {
    fn save(&self, session: &Session) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let path = self.path();
        let content = serde_json::to_string(session)?;

        // Write to temp file then rename
        let temp_path = path.with_extension("tmp");
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;

            options.mode(0o600);
        }
        let mut file = options.open(&temp_path)?;
        #[cfg(unix)]
        {
            // mode() only applies on creation; a leftover temp file keeps its bits
            use std::os::unix::fs::PermissionsExt;

            file.set_permissions(fs::Permissions::from_mode(0o600))?;
        }
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
        drop(file);

        fs::rename(&temp_path, &path)?;
        debug!(path = %path.display(), "session marker written");
        Ok(())
    }

    fn load(&self) -> Result<Option<Session>> {
        let content = match fs::read_to_string(self.path()) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(self.path()) {
            Ok(()) => {
                debug!(path = %self.path().display(), "session marker removed");
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory store for tests and headless use
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<Session>>,
    fail: bool,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails
    pub fn failing() -> Self {
        Self {
            session: Mutex::new(None),
            fail: true,
        }
    }

    /// A store that already holds a marker
    pub fn with_session(session: Session) -> Self {
        Self {
            session: Mutex::new(Some(session)),
            fail: false,
        }
    }

    /// Current marker, without going through the trait
    pub fn current(&self) -> Option<Session> {
        self.session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn check(&self) -> Result<()> {
        if self.fail {
            return Err(TaskAppError::Storage(io::Error::other(
                "session store unavailable",
            )));
        }
        Ok(())
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, session: &Session) -> Result<()> {
        self.check()?;
        *self.session.lock().unwrap_or_else(PoisonError::into_inner) = Some(session.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<Session>> {
        self.check()?;
        Ok(self.current())
    }

    fn clear(&self) -> Result<()> {
        self.check()?;
        *self.session.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}
