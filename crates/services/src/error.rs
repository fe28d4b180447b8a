//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use journey_core::model::{LessonError, LessonId};
use storage::sqlite::SqliteInitError;

/// Errors emitted while loading a lesson catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("failed to read lesson catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid lesson catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Lesson(#[from] LessonError),
    #[error("duplicate lesson id: {0}")]
    DuplicateId(LessonId),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
