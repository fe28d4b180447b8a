use journey_core::detail::NO_TOPICS_PLACEHOLDER;
use journey_core::{DetailTopics, DetailView};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonDetailVm {
    pub title: String,
    pub summary: String,
    pub level: String,
    pub topics: Vec<String>,
    /// Set when there is nothing to list.
    pub topics_placeholder: Option<&'static str>,
}

#[must_use]
pub fn map_lesson_detail(detail: DetailView) -> LessonDetailVm {
    let (topics, topics_placeholder) = match detail.topics {
        DetailTopics::List(topics) => (topics, None),
        DetailTopics::Empty => (Vec::new(), Some(NO_TOPICS_PLACEHOLDER)),
    };
    LessonDetailVm {
        title: detail.title,
        summary: detail.summary,
        level: detail.level,
        topics,
        topics_placeholder,
    }
}
