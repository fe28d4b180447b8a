use crate::model::LessonId;
use crate::progress::LessonState;

/// Outcome of a selection attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Selection<'a> {
    Selected(&'a LessonState),
    /// The lesson exists but is locked; selection is left untouched.
    Refused,
    NotFound,
}

/// Which lesson is active in the detail panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    active: Option<LessonId>,
}

impl SelectionState {
    /// Starts on the first lesson of the timeline, if any.
    #[must_use]
    pub fn from_states(states: &[LessonState]) -> Self {
        Self {
            active: states.first().map(|state| state.id().clone()),
        }
    }

    #[must_use]
    pub fn active(&self) -> Option<&LessonId> {
        self.active.as_ref()
    }

    /// Make `id` the active lesson unless it is missing or locked.
    pub fn select<'a>(&mut self, states: &'a [LessonState], id: &LessonId) -> Selection<'a> {
        let Some(state) = states.iter().find(|state| state.id() == id) else {
            return Selection::NotFound;
        };
        if state.is_locked() {
            return Selection::Refused;
        }
        self.active = Some(state.id().clone());
        Selection::Selected(state)
    }
}
