use std::sync::{Mutex, MutexGuard, PoisonError};

use journey_core::model::{Lesson, LessonId};
use journey_core::{
    DetailView, LessonState, ProgressSnapshot, Selection, SelectionState, open_detail,
};
use tracing::debug;

use crate::catalog::LessonCatalog;

/// Timeline state and the single active-lesson selection.
///
/// The lesson list is fixed for the life of the service, so derived state is
/// computed once at construction.
pub struct ProgressService {
    lessons: Vec<Lesson>,
    snapshot: ProgressSnapshot,
    selection: Mutex<SelectionState>,
}

impl ProgressService {
    #[must_use]
    pub fn new(catalog: LessonCatalog) -> Self {
        let lessons = catalog.into_lessons();
        let snapshot = ProgressSnapshot::from_lessons(&lessons);
        let selection = Mutex::new(SelectionState::from_states(snapshot.states()));
        Self {
            lessons,
            snapshot,
            selection,
        }
    }

    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    #[must_use]
    pub fn states(&self) -> &[LessonState] {
        self.snapshot.states()
    }

    /// Average completion across the timeline.
    #[must_use]
    pub fn aggregate(&self) -> u8 {
        self.snapshot.aggregate()
    }

    #[must_use]
    pub fn lesson(&self, id: &LessonId) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| lesson.id() == id)
    }

    #[must_use]
    pub fn state(&self, id: &LessonId) -> Option<&LessonState> {
        self.snapshot.state(id)
    }

    #[must_use]
    pub fn active(&self) -> Option<LessonId> {
        self.selection_guard().active().cloned()
    }

    /// Make `id` the active lesson. Locked lessons are refused.
    pub fn select_lesson(&self, id: &LessonId) -> Selection<'_> {
        let outcome = self.selection_guard().select(self.snapshot.states(), id);
        match outcome {
            Selection::Refused => debug!(lesson = %id, "selection refused: lesson is locked"),
            Selection::NotFound => debug!(lesson = %id, "selection ignored: unknown lesson"),
            Selection::Selected(_) => {}
        }
        outcome
    }

    /// Select a lesson and build its detail payload.
    ///
    /// Returns `None` when the lesson is unknown or locked.
    #[must_use]
    pub fn open_lesson(&self, id: &LessonId, topic: Option<&str>) -> Option<DetailView> {
        match self.select_lesson(id) {
            Selection::Selected(_) => self.lesson(id).map(|lesson| open_detail(lesson, topic)),
            Selection::Refused | Selection::NotFound => None,
        }
    }

    fn selection_guard(&self) -> MutexGuard<'_, SelectionState> {
        self.selection.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
