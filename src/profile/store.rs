//! Profile store trait and in-memory implementation
//!
//! The core depends only on this interface; production uses the JSON file
//! store, tests and the workflow fakes use the in-memory store.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;

use super::record::UserProfile;

/// Errors from profile store operations
///
/// Absence of a record is not an error; it is `Ok(None)` from `get`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read profile store {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write profile store {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed profile store {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Durable keeper of at most one profile per workspace id
///
/// Operations are asynchronous but strictly sequential from the caller's
/// perspective; each call is transactional at the granularity of one
/// workspace record (last write wins).
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch the profile for a workspace, if one exists
    async fn get(&self, workspace_id: &str) -> StoreResult<Option<UserProfile>>;

    /// Insert or replace the profile sharing `workspace_id`;
    /// refreshes `last_updated`
    async fn upsert(&self, profile: UserProfile) -> StoreResult<()>;

    /// Delete the profile if present; absent ids are a no-op
    async fn remove(&self, workspace_id: &str) -> StoreResult<()>;

    /// All stored profiles (used by the reset/manage workflow)
    async fn list_all(&self) -> StoreResult<Vec<UserProfile>>;
}

/// Volatile store for tests and dry runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    profiles: Mutex<Vec<UserProfile>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn get(&self, workspace_id: &str) -> StoreResult<Option<UserProfile>> {
        let profiles = self.profiles.lock().await;
        Ok(profiles.iter().find(|p| p.workspace_id == workspace_id).cloned())
    }

    async fn upsert(&self, mut profile: UserProfile) -> StoreResult<()> {
        profile.touch();
        let mut profiles = self.profiles.lock().await;
        match profiles.iter_mut().find(|p| p.workspace_id == profile.workspace_id) {
            Some(existing) => *existing = profile,
            None => profiles.push(profile),
        }
        Ok(())
    }

    async fn remove(&self, workspace_id: &str) -> StoreResult<()> {
        let mut profiles = self.profiles.lock().await;
        profiles.retain(|p| p.workspace_id != workspace_id);
        Ok(())
    }

    async fn list_all(&self) -> StoreResult<Vec<UserProfile>> {
        Ok(self.profiles.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[tokio::test]
    async fn test_get_absent_returns_none() {
        let store = MemoryStore::new();
        assert!(store.get("never-seen").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_upsert_then_get_round_trips() {
        let store = MemoryStore::new();
        let profile = UserProfile::new("w1", values(&[("NAME", "Ada")])).with_template("python-developer");
        store.upsert(profile.clone()).await.unwrap();

        let fetched = store.get("w1").await.unwrap().unwrap();
        assert_eq!(fetched.workspace_id, profile.workspace_id);
        assert_eq!(fetched.template_id, profile.template_id);
        assert_eq!(fetched.placeholder_values, profile.placeholder_values);
    }

    #[tokio::test]
    async fn test_upsert_replaces_last_write_wins() {
        let store = MemoryStore::new();
        store.upsert(UserProfile::new("w1", values(&[("NAME", "Ada")]))).await.unwrap();
        let first = store.get("w1").await.unwrap().unwrap();

        store
            .upsert(UserProfile::new("w1", values(&[("NAME", "Grace")])))
            .await
            .unwrap();

        let profiles = store.list_all().await.unwrap();
        assert_eq!(profiles.len(), 1, "upsert must replace, not append");
        assert_eq!(profiles[0].placeholder_values.get("NAME").map(String::as_str), Some("Grace"));
        assert!(profiles[0].last_updated >= first.last_updated);
    }

    #[tokio::test]
    async fn test_remove_absent_is_noop() {
        let store = MemoryStore::new();
        store.remove("never-seen").await.unwrap();
        assert!(store.get("never-seen").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_remove_then_get_absent() {
        let store = MemoryStore::new();
        store.upsert(UserProfile::new("w1", HashMap::new())).await.unwrap();
        store.remove("w1").await.unwrap();
        assert!(store.get("w1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_profiles_are_independent_per_workspace() {
        let store = MemoryStore::new();
        store.upsert(UserProfile::new("w1", HashMap::new())).await.unwrap();
        store.upsert(UserProfile::new("w2", HashMap::new())).await.unwrap();
        store.remove("w1").await.unwrap();
        assert!(store.get("w1").await.unwrap().is_none());
        assert!(store.get("w2").await.unwrap().is_some());
    }
}
