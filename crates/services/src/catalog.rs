use std::collections::HashSet;
use std::path::Path;

use journey_core::model::{Lesson, LessonDraft};

use crate::error::CatalogError;

const DEFAULT_CATALOG_JSON: &str = include_str!("../assets/lessons.json");

/// Ordered, validated lesson list. Declaration order is timeline order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LessonCatalog {
    lessons: Vec<Lesson>,
}

impl LessonCatalog {
    /// Validate drafts in order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Lesson` for an invalid draft and
    /// `CatalogError::DuplicateId` when two lessons share an id.
    pub fn from_drafts(drafts: Vec<LessonDraft>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(drafts.len());
        let mut lessons = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let lesson = draft.validate()?;
            if !seen.insert(lesson.id().clone()) {
                return Err(CatalogError::DuplicateId(lesson.id().clone()));
            }
            lessons.push(lesson);
        }
        Ok(Self { lessons })
    }

    /// Parse a JSON array of lesson records.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Json` for malformed JSON, plus the validation
    /// errors of [`LessonCatalog::from_drafts`].
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let drafts: Vec<LessonDraft> = serde_json::from_str(raw)?;
        Self::from_drafts(drafts)
    }

    /// Read and parse a catalog file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, plus the errors
    /// of [`LessonCatalog::from_json`].
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// The catalog bundled with the app.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` only if the bundled file is malformed.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(DEFAULT_CATALOG_JSON)
    }

    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    #[must_use]
    pub fn into_lessons(self) -> Vec<Lesson> {
        self.lessons
    }
}
