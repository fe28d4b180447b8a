//! Display payload for the lesson detail panel.

use crate::model::Lesson;

pub const DEFAULT_TITLE: &str = "Lesson";
pub const DEFAULT_SUMMARY: &str = "Lesson details";
pub const DEFAULT_LEVEL: &str = "Level";
/// Shown instead of an empty topic list.
pub const NO_TOPICS_PLACEHOLDER: &str = "No topics yet";

/// Topic list for the detail panel; `Empty` must render the placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailTopics {
    Empty,
    List(Vec<String>),
}

impl DetailTopics {
    fn from_topics(topics: &[String]) -> Self {
        if topics.is_empty() {
            Self::Empty
        } else {
            Self::List(topics.to_vec())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub summary: String,
    pub level: String,
    pub topics: DetailTopics,
}

/// Build the detail payload for a lesson, optionally focused on one topic.
#[must_use]
pub fn open_detail(lesson: &Lesson, topic: Option<&str>) -> DetailView {
    let base = lesson.title().unwrap_or(DEFAULT_TITLE);
    let title = match topic.map(str::trim).filter(|topic| !topic.is_empty()) {
        Some(topic) => format!("{base} · {topic}"),
        None => base.to_string(),
    };

    DetailView {
        title,
        summary: lesson.summary().unwrap_or(DEFAULT_SUMMARY).to_string(),
        level: lesson.level().unwrap_or(DEFAULT_LEVEL).to_string(),
        topics: DetailTopics::from_topics(lesson.topics()),
    }
}
