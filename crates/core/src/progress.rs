//! Derived lesson state: clamped progress, completion and the unlock chain.

use crate::model::{Lesson, LessonId, LessonStatus};

/// Runtime view of a single lesson, recomputed from the lesson list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonState {
    id: LessonId,
    clamped_progress: u8,
    is_done: bool,
    is_locked: bool,
}

impl LessonState {
    #[must_use]
    pub fn id(&self) -> &LessonId {
        &self.id
    }

    /// Declared progress clamped to `0..=100`.
    #[must_use]
    pub fn clamped_progress(&self) -> u8 {
        self.clamped_progress
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.is_done
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.is_locked
    }
}

/// Clamp a declared progress value to `0..=100`.
#[must_use]
pub fn clamp_progress(raw: i32) -> u8 {
    u8::try_from(raw.clamp(0, 100)).unwrap_or(0)
}

/// Derive runtime state for lessons in declaration order.
///
/// A lesson is done at 100% or with an explicit `done` status. It is locked
/// when any earlier lesson is not done, or when it declares `locked`; the
/// first lesson is never blocked by a predecessor. A done lesson is never
/// reported as locked.
#[must_use]
pub fn compute_runtime_state(lessons: &[Lesson]) -> Vec<LessonState> {
    let mut chain_open = true;

    lessons
        .iter()
        .map(|lesson| {
            let clamped_progress = clamp_progress(lesson.progress());
            let status = lesson.explicit_status();
            let is_done = clamped_progress >= 100 || status == Some(LessonStatus::Done);
            let blocked = !chain_open || status == Some(LessonStatus::Locked);

            chain_open = chain_open && is_done;

            LessonState {
                id: lesson.id().clone(),
                clamped_progress,
                is_done,
                is_locked: !is_done && blocked,
            }
        })
        .collect()
}

/// Mean of clamped progress, rounded half-up. Zero for an empty timeline.
#[must_use]
pub fn aggregate(states: &[LessonState]) -> u8 {
    if states.is_empty() {
        return 0;
    }
    let total: u64 = states
        .iter()
        .map(|state| u64::from(state.clamped_progress))
        .sum();
    let count = states.len() as u64;
    let rounded = (total * 2 + count) / (count * 2);
    u8::try_from(rounded).unwrap_or(100)
}

/// Lesson states plus their aggregate, computed together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgressSnapshot {
    states: Vec<LessonState>,
    aggregate: u8,
}

impl ProgressSnapshot {
    #[must_use]
    pub fn from_lessons(lessons: &[Lesson]) -> Self {
        let states = compute_runtime_state(lessons);
        let aggregate = aggregate(&states);
        Self { states, aggregate }
    }

    #[must_use]
    pub fn states(&self) -> &[LessonState] {
        &self.states
    }

    #[must_use]
    pub fn aggregate(&self) -> u8 {
        self.aggregate
    }

    #[must_use]
    pub fn state(&self, id: &LessonId) -> Option<&LessonState> {
        self.states.iter().find(|state| state.id() == id)
    }
}
