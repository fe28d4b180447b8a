mod identity;
mod ids;
mod lesson;

pub use identity::{DisplayName, NAME_PLACEHOLDER};
pub use ids::{LessonId, ParseIdError};
pub use lesson::{
    Lesson, LessonDraft, LessonError, LessonStatus, RawProgress, parse_progress, parse_topics,
};
