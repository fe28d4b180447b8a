use std::sync::Arc;

use storage::repository::Storage;
use tracing::info;

use crate::catalog::LessonCatalog;
use crate::error::AppServicesError;
use crate::identity_service::IdentityService;
use crate::progress_service::ProgressService;
use crate::sandbox::{DocumentSlot, RenderTarget, SandboxRuntime};

/// Session context: every service the onboarding flow needs, built once at
/// startup and shared with the UI.
#[derive(Clone)]
pub struct AppServices {
    progress: Arc<ProgressService>,
    identity: Arc<IdentityService>,
    sandbox: Arc<SandboxRuntime>,
    preview: Arc<DocumentSlot>,
}

impl AppServices {
    /// Assemble services on top of an existing storage backend.
    #[must_use]
    pub fn new(storage: &Storage, catalog: LessonCatalog) -> Self {
        let preview = Arc::new(DocumentSlot::new());
        let target: Arc<dyn RenderTarget> = preview.clone();
        let progress = Arc::new(ProgressService::new(catalog));
        let identity = Arc::new(IdentityService::new(Arc::clone(&storage.values)));
        let sandbox = Arc::new(SandboxRuntime::new(Arc::clone(&storage.values), target));

        info!(
            lessons = progress.lessons().len(),
            aggregate = progress.aggregate(),
            "services assembled"
        );

        Self {
            progress,
            identity,
            sandbox,
            preview,
        }
    }

    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        catalog: LessonCatalog,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::new(&storage, catalog))
    }

    /// Build services backed by process memory only.
    #[must_use]
    pub fn in_memory(catalog: LessonCatalog) -> Self {
        Self::new(&Storage::in_memory(), catalog)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn identity(&self) -> Arc<IdentityService> {
        Arc::clone(&self.identity)
    }

    #[must_use]
    pub fn sandbox(&self) -> Arc<SandboxRuntime> {
        Arc::clone(&self.sandbox)
    }

    /// The render target the sandbox writes into.
    #[must_use]
    pub fn preview(&self) -> Arc<DocumentSlot> {
        Arc::clone(&self.preview)
    }
}
