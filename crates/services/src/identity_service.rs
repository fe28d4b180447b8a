use std::sync::{Arc, Mutex, PoisonError};

use journey_core::model::DisplayName;
use storage::repository::{KeyValueRepository, StorageKey};
use tracing::warn;

/// Loads and stores the learner's display name.
///
/// If the backing store fails, the service keeps the name in memory for the
/// rest of the session instead of surfacing an error.
pub struct IdentityService {
    repo: Arc<dyn KeyValueRepository>,
    fallback: Mutex<Option<DisplayName>>,
}

impl IdentityService {
    #[must_use]
    pub fn new(repo: Arc<dyn KeyValueRepository>) -> Self {
        Self {
            repo,
            fallback: Mutex::new(None),
        }
    }

    /// Stored name, or an empty name when nothing is stored.
    pub async fn load(&self) -> DisplayName {
        if let Some(name) = self.fallback_name() {
            return name;
        }
        match self.repo.get(StorageKey::Name).await {
            Ok(stored) => DisplayName::new(stored.unwrap_or_default()),
            Err(err) => {
                warn!(error = %err, "failed to load display name");
                DisplayName::default()
            }
        }
    }

    /// Trim and persist a name; returns what was stored.
    pub async fn save(&self, raw: &str) -> DisplayName {
        let name = DisplayName::new(raw);
        if self.fallback_name().is_none() {
            match self.repo.set(StorageKey::Name, name.as_str()).await {
                Ok(()) => return name,
                Err(err) => {
                    warn!(error = %err, "failed to persist display name; keeping it in memory");
                }
            }
        }
        *self.fallback.lock().unwrap_or_else(PoisonError::into_inner) = Some(name.clone());
        name
    }

    fn fallback_name(&self) -> Option<DisplayName> {
        self.fallback
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
