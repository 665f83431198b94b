//! Durable JSON file store
//!
//! Persists the whole profile collection as one JSON array: load once at
//! open, flush on every upsert/remove. Writes go to a sibling temp file
//! followed by a rename, so a concurrent reader never observes a
//! half-written collection. The in-memory collection is committed only
//! after a successful flush, so a failed write never leaves the cache
//! ahead of (or behind) the file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::record::UserProfile;
use super::store::{ProfileStore, StoreError, StoreResult};

/// Profile store backed by a single JSON file
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    profiles: Mutex<Vec<UserProfile>>,
}

impl JsonFileStore {
    /// Open the store, loading the collection if the file exists
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        let profiles = if path.exists() {
            let raw = std::fs::read_to_string(&path).map_err(|source| StoreError::Read {
                path: path.display().to_string(),
                source,
            })?;
            serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
                path: path.display().to_string(),
                source,
            })?
        } else {
            Vec::new()
        };

        info!(path = %path.display(), count = profiles.len(), "profile store opened");
        Ok(Self {
            path,
            profiles: Mutex::new(profiles),
        })
    }

    /// Write the full collection atomically (temp file + rename)
    fn flush(&self, profiles: &[UserProfile]) -> StoreResult<()> {
        let display = self.path.display().to_string();

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                    path: display.clone(),
                    source,
                })?;
            }
        }

        let json = serde_json::to_string_pretty(profiles).map_err(|source| StoreError::Malformed {
            path: display.clone(),
            source,
        })?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(|source| StoreError::Write {
            path: display.clone(),
            source,
        })?;
        std::fs::rename(&tmp, &self.path).map_err(|source| StoreError::Write { path: display, source })?;

        debug!(path = %self.path.display(), count = profiles.len(), "profile store flushed");
        Ok(())
    }
}

#[async_trait]
impl ProfileStore for JsonFileStore {
    async fn get(&self, workspace_id: &str) -> StoreResult<Option<UserProfile>> {
        let profiles = self.profiles.lock().await;
        Ok(profiles.iter().find(|p| p.workspace_id == workspace_id).cloned())
    }

    async fn upsert(&self, mut profile: UserProfile) -> StoreResult<()> {
        profile.touch();
        let mut profiles = self.profiles.lock().await;

        let mut updated = profiles.clone();
        match updated.iter_mut().find(|p| p.workspace_id == profile.workspace_id) {
            Some(existing) => *existing = profile,
            None => updated.push(profile),
        }

        self.flush(&updated)?;
        *profiles = updated;
        Ok(())
    }

    async fn remove(&self, workspace_id: &str) -> StoreResult<()> {
        let mut profiles = self.profiles.lock().await;

        let updated: Vec<UserProfile> = profiles
            .iter()
            .filter(|p| p.workspace_id != workspace_id)
            .cloned()
            .collect();
        if updated.len() == profiles.len() {
            // nothing removed, nothing to flush
            return Ok(());
        }

        self.flush(&updated)?;
        *profiles = updated;
        Ok(())
    }

    async fn list_all(&self) -> StoreResult<Vec<UserProfile>> {
        Ok(self.profiles.lock().await.clone())
    }
}
