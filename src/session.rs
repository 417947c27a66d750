// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persistent session storage.
//!
//! Handles:
//! - Loading and saving the signed-in session (token pair + profile)
//! - Wholesale clearing on sign-out or failed refresh
//! - An in-memory backend for tests and embedding

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::{AppError, Result};
use crate::models::{Session, User};

/// Where the session lives: a JSON file, or process memory.
#[derive(Debug, Clone)]
enum Backend {
    File(PathBuf),
    Memory(Arc<Mutex<Option<Session>>>),
}

/// Stores the current session as one unit.
///
/// The file backend keeps a single JSON document with the access token,
/// refresh token and profile. Saves replace the whole document and clears
/// remove it, so readers never observe a half-updated session. Clones share
/// the same backend.
#[derive(Debug, Clone)]
pub struct SessionStore {
    backend: Backend,
}

impl SessionStore {
    /// Store backed by a JSON file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            backend: Backend::File(path.into()),
        }
    }

    /// Store backed by process memory. Nothing touches the filesystem.
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(Arc::new(Mutex::new(None))),
        }
    }

    /// Load the current session, if one is stored.
    ///
    /// A session file that fails to parse is treated as absent and removed,
    /// so a truncated write cannot wedge the client.
    pub fn load(&self) -> Result<Option<Session>> {
        match &self.backend {
            Backend::Memory(slot) => Ok(lock(slot).clone()),
            Backend::File(path) => {
                let raw = match fs::read_to_string(path) {
                    Ok(raw) => raw,
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
                    Err(e) => {
                        return Err(AppError::Storage(format!(
                            "cannot read session file {}: {}",
                            path.display(),
                            e
                        )))
                    }
                };
                match serde_json::from_str(&raw) {
                    Ok(session) => Ok(Some(session)),
                    Err(e) => {
                        tracing::warn!(
                            path = %path.display(),
                            error = %e,
                            "Session file is corrupt, discarding it"
                        );
                        self.clear()?;
                        Ok(None)
                    }
                }
            }
        }
    }

    /// Replace the stored session.
    pub fn save(&self, session: &Session) -> Result<()> {
        match &self.backend {
            Backend::Memory(slot) => {
                *lock(slot) = Some(session.clone());
                Ok(())
            }
            Backend::File(path) => {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent).map_err(|e| {
                        AppError::Storage(format!(
                            "cannot create session directory {}: {}",
                            parent.display(),
                            e
                        ))
                    })?;
                }
                let json = serde_json::to_vec_pretty(session)
                    .map_err(|e| AppError::Storage(format!("cannot encode session: {}", e)))?;

                // Write to a sibling temp file and rename over the target so
                // a crash mid-write leaves the previous session intact.
                let tmp = path.with_extension("tmp");
                write_private(&tmp, &json).map_err(|e| {
                    AppError::Storage(format!(
                        "cannot write session file {}: {}",
                        tmp.display(),
                        e
                    ))
                })?;
                fs::rename(&tmp, path).map_err(|e| {
                    AppError::Storage(format!(
                        "cannot replace session file {}: {}",
                        path.display(),
                        e
                    ))
                })
            }
        }
    }

    /// Remove the stored session. A no-op when none is stored.
    pub fn clear(&self) -> Result<()> {
        match &self.backend {
            Backend::Memory(slot) => {
                *lock(slot) = None;
                Ok(())
            }
            Backend::File(path) => match fs::remove_file(path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(AppError::Storage(format!(
                    "cannot remove session file {}: {}",
                    path.display(),
                    e
                ))),
            },
        }
    }

    /// Access token of the stored session, if any.
    pub fn access_token(&self) -> Result<Option<String>> {
        Ok(self.load()?.map(|s| s.access_token))
    }

    /// Refresh token of the stored session, if any.
    pub fn refresh_token(&self) -> Result<Option<String>> {
        Ok(self.load()?.map(|s| s.refresh_token))
    }

    /// Profile of the signed-in account, if any.
    pub fn user(&self) -> Result<Option<User>> {
        Ok(self.load()?.map(|s| s.user))
    }
}

fn lock(slot: &Mutex<Option<Session>>) -> std::sync::MutexGuard<'_, Option<Session>> {
    // A poisoned lock still holds a valid Option.
    slot.lock().unwrap_or_else(|e| e.into_inner())
}

/// Write `bytes` to `path` readable only by the owning user.
#[cfg(unix)]
fn write_private(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(bytes)?;
    file.flush()
}

#[cfg(not(unix))]
fn write_private(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    fs::write(path, bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> Session {
        Session {
            access_token: "access-1".to_string(),
            refresh_token: "refresh-1".to_string(),
            user: User {
                id: 7,
                email: "owner@example.com".to_string(),
                phone: Some("+70000000000".to_string()),
                phone_verified: Some(true),
            },
        }
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));

        assert!(store.load().unwrap().is_none());

        store.save(&sample_session()).unwrap();
        let loaded = store.load().unwrap().expect("session should be stored");
        assert_eq!(loaded.access_token, "access-1");
        assert_eq!(loaded.refresh_token, "refresh-1");
        assert_eq!(loaded.user.email, "owner@example.com");
    }

    #[test]
    fn test_clear_removes_everything() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = SessionStore::new(&path);

        store.save(&sample_session()).unwrap();
        assert!(path.exists());

        store.clear().unwrap();
        assert!(!path.exists());
        assert!(store.access_token().unwrap().is_none());
        assert!(store.refresh_token().unwrap().is_none());

        // Clearing twice must not error.
        store.clear().unwrap();
    }

    #[test]
    fn test_corrupt_file_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();

        let store = SessionStore::new(&path);
        assert!(store.load().unwrap().is_none());
        assert!(!path.exists(), "corrupt file should be removed");
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/app/session.json");
        let store = SessionStore::new(&path);

        store.save(&sample_session()).unwrap();
        assert!(path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = SessionStore::new(&path);

        store.save(&sample_session()).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_clones_share_state() {
        let store = SessionStore::in_memory();
        let clone = store.clone();

        store.save(&sample_session()).unwrap();
        assert_eq!(
            clone.access_token().unwrap().as_deref(),
            Some("access-1")
        );

        clone.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
