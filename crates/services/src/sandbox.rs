//! Sandbox runtime: one persisted document buffer rendered into a preview.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use journey_core::sandbox::DEFAULT_TEMPLATE;
use storage::repository::{KeyValueRepository, StorageError, StorageKey};
use tokio::sync::Mutex as CycleLock;
use tracing::{info, warn};

/// Somewhere a complete document can be shown.
///
/// Every call replaces the previous document wholesale; implementations must
/// not diff or patch.
pub trait RenderTarget: Send + Sync {
    fn replace_document(&self, content: &str);
}

/// The latest document handed to a [`DocumentSlot`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreviewDocument {
    pub content: String,
    /// Bumped on every replacement, including identical content.
    pub revision: u64,
}

/// Render target that keeps the last document for a host frame to display.
#[derive(Debug, Default)]
pub struct DocumentSlot {
    current: Mutex<PreviewDocument>,
}

impl DocumentSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn snapshot(&self) -> PreviewDocument {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl RenderTarget for DocumentSlot {
    fn replace_document(&self, content: &str) {
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        current.content = content.to_owned();
        current.revision += 1;
    }
}

/// Holds the sandbox buffer, writes it through to storage and re-renders.
///
/// Once a write fails the runtime stops touching storage and serves the
/// in-memory buffer for the rest of the session.
///
/// Cycles are serialized on an async lock, so concurrent callers finish one
/// at a time in the order they queued.
pub struct SandboxRuntime {
    repo: Arc<dyn KeyValueRepository>,
    target: Arc<dyn RenderTarget>,
    buffer: Mutex<String>,
    degraded: AtomicBool,
    cycle: CycleLock<()>,
}

impl SandboxRuntime {
    #[must_use]
    pub fn new(repo: Arc<dyn KeyValueRepository>, target: Arc<dyn RenderTarget>) -> Self {
        Self {
            repo,
            target,
            buffer: Mutex::new(DEFAULT_TEMPLATE.to_string()),
            degraded: AtomicBool::new(false),
            cycle: CycleLock::new(()),
        }
    }

    /// Persisted document, or the built-in template when nothing is stored.
    ///
    /// Never writes to storage.
    pub async fn load_buffer(&self) -> String {
        let _cycle = self.cycle.lock().await;
        self.load_locked().await
    }

    /// Replace the buffer and persist it immediately.
    pub async fn set_buffer(&self, content: &str) {
        let _cycle = self.cycle.lock().await;
        self.persist_locked(content).await;
    }

    /// Show `content` as a whole new document. No validation is performed.
    pub fn render(&self, content: &str) {
        self.target.replace_document(content);
    }

    /// One edit cycle: persist, then re-render.
    pub async fn edit(&self, content: &str) {
        let _cycle = self.cycle.lock().await;
        self.persist_locked(content).await;
        self.render(content);
    }

    /// Restore the built-in template, persist it and re-render.
    pub async fn reset(&self) {
        info!("sandbox reset to default template");
        self.edit(DEFAULT_TEMPLATE).await;
    }

    /// Startup path: load whatever is stored and render it.
    pub async fn hydrate(&self) -> String {
        let _cycle = self.cycle.lock().await;
        let content = self.load_locked().await;
        self.render(&content);
        content
    }

    /// Current in-memory buffer.
    #[must_use]
    pub fn buffer(&self) -> String {
        self.buffer_guard().clone()
    }

    /// True once storage has failed and the runtime is memory-only.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.degraded.load(Ordering::Acquire)
    }

    async fn load_locked(&self) -> String {
        if self.is_degraded() {
            return self.buffer_guard().clone();
        }
        match self.repo.get(StorageKey::Code).await {
            Ok(stored) => {
                let content = stored.unwrap_or_else(|| DEFAULT_TEMPLATE.to_string());
                *self.buffer_guard() = content.clone();
                content
            }
            Err(err) => {
                self.degrade(&err);
                self.buffer_guard().clone()
            }
        }
    }

    async fn persist_locked(&self, content: &str) {
        *self.buffer_guard() = content.to_owned();
        if self.is_degraded() {
            return;
        }
        if let Err(err) = self.repo.set(StorageKey::Code, content).await {
            self.degrade(&err);
        }
    }

    fn degrade(&self, err: &StorageError) {
        if !self.degraded.swap(true, Ordering::AcqRel) {
            warn!(error = %err, "sandbox storage unavailable; continuing in memory");
        }
    }

    fn buffer_guard(&self) -> MutexGuard<'_, String> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_bumps_revision_on_identical_content() {
        let slot = DocumentSlot::new();
        slot.replace_document("<p>x</p>");
        slot.replace_document("<p>x</p>");
        let doc = slot.snapshot();
        assert_eq!(doc.content, "<p>x</p>");
        assert_eq!(doc.revision, 2);
    }

    #[test]
    fn slot_starts_empty() {
        assert_eq!(DocumentSlot::new().snapshot(), PreviewDocument::default());
    }
}
