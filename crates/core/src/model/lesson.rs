use serde::Deserialize;
use thiserror::Error;

use crate::model::ids::{LessonId, ParseIdError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error("invalid lesson id: {0}")]
    InvalidId(#[from] ParseIdError),
}

//
// ─── STATUS ────────────────────────────────────────────────────────────────────
//

/// Author-declared override for a lesson's derived state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LessonStatus {
    Locked,
    Done,
}

impl LessonStatus {
    /// Parse a declared status. Unknown values are treated as "no override".
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "locked" => Some(Self::Locked),
            "done" => Some(Self::Done),
            _ => None,
        }
    }
}

//
// ─── RAW RECORD ────────────────────────────────────────────────────────────────
//

/// Progress as written by content authors: a JSON number or a free-text value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawProgress {
    Number(f64),
    Text(String),
}

impl RawProgress {
    /// Resolve to an integer percentage; anything non-numeric is 0.
    #[must_use]
    pub fn resolve(&self) -> i32 {
        match self {
            Self::Number(value) => round_progress(*value),
            Self::Text(text) => parse_progress(text),
        }
    }
}

/// Declarative lesson metadata before validation.
///
/// Mirrors what a content author writes in the lesson catalog; every field
/// except `id` is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LessonDraft {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub topics: String,
    #[serde(default)]
    pub progress: Option<RawProgress>,
    #[serde(default)]
    pub status: Option<String>,
}

impl LessonDraft {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Validate and normalize the draft into a lesson.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::InvalidId` if the id is empty after trimming.
    pub fn validate(self) -> Result<Lesson, LessonError> {
        let id = LessonId::new(self.id)?;
        Ok(Lesson {
            id,
            title: normalize_optional(self.title),
            summary: normalize_optional(self.summary),
            level: normalize_optional(self.level),
            topics: parse_topics(&self.topics),
            progress: self.progress.as_ref().map_or(0, RawProgress::resolve),
            explicit_status: self.status.as_deref().and_then(LessonStatus::parse),
        })
    }
}

//
// ─── LESSON ────────────────────────────────────────────────────────────────────
//

/// A lesson on the timeline. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    id: LessonId,
    title: Option<String>,
    summary: Option<String>,
    level: Option<String>,
    topics: Vec<String>,
    progress: i32,
    explicit_status: Option<LessonStatus>,
}

impl Lesson {
    #[must_use]
    pub fn new(id: LessonId, progress: i32) -> Self {
        Self {
            id,
            title: None,
            summary: None,
            level: None,
            topics: Vec::new(),
            progress,
            explicit_status: None,
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: LessonStatus) -> Self {
        self.explicit_status = Some(status);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = normalize_optional(Some(title.into()));
        self
    }

    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = normalize_optional(Some(summary.into()));
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = normalize_optional(Some(level.into()));
        self
    }

    #[must_use]
    pub fn with_topics(mut self, raw: &str) -> Self {
        self.topics = parse_topics(raw);
        self
    }

    #[must_use]
    pub fn id(&self) -> &LessonId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    #[must_use]
    pub fn level(&self) -> Option<&str> {
        self.level.as_deref()
    }

    #[must_use]
    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    /// Raw declared progress; may lie outside 0..=100.
    #[must_use]
    pub fn progress(&self) -> i32 {
        self.progress
    }

    #[must_use]
    pub fn explicit_status(&self) -> Option<LessonStatus> {
        self.explicit_status
    }
}

//
// ─── PARSING ───────────────────────────────────────────────────────────────────
//

/// Parse a textual progress value. Empty or non-numeric text yields 0.
#[must_use]
pub fn parse_progress(raw: &str) -> i32 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }
    trimmed.parse::<f64>().map_or(0, round_progress)
}

/// Split a pipe-delimited topics string, dropping blank entries.
#[must_use]
pub fn parse_topics(raw: &str) -> Vec<String> {
    raw.split('|')
        .map(str::trim)
        .filter(|topic| !topic.is_empty())
        .map(str::to_owned)
        .collect()
}

#[allow(clippy::cast_possible_truncation)]
fn round_progress(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    // `as` saturates at the i32 bounds.
    value.round() as i32
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
