use journey_core::LessonState;
use journey_core::detail::DEFAULT_TITLE;
use journey_core::model::Lesson;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimelineItemVm {
    pub id: String,
    pub title: String,
    pub level: String,
    pub topics: Vec<String>,
    pub progress: u8,
    pub bar_width: String,
    pub bar_empty: bool,
    pub is_done: bool,
    pub is_locked: bool,
}

impl TimelineItemVm {
    #[must_use]
    pub fn item_class(&self) -> String {
        let mut class = String::from("timeline-item");
        if self.is_done {
            class.push_str(" is-done");
        }
        if self.is_locked {
            class.push_str(" is-locked");
        }
        class
    }

    #[must_use]
    pub fn bar_class(&self) -> &'static str {
        if self.bar_empty {
            "progress-bar is-empty"
        } else {
            "progress-bar"
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressChipVm {
    pub text: String,
    pub is_empty: bool,
}

impl ProgressChipVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.is_empty {
            "progress-chip is-empty"
        } else {
            "progress-chip"
        }
    }
}

/// Pair each lesson with its derived state, in timeline order.
#[must_use]
pub fn map_timeline(lessons: &[Lesson], states: &[LessonState]) -> Vec<TimelineItemVm> {
    lessons
        .iter()
        .zip(states)
        .map(|(lesson, state)| {
            let progress = state.clamped_progress();
            TimelineItemVm {
                id: lesson.id().to_string(),
                title: lesson.title().unwrap_or(DEFAULT_TITLE).to_string(),
                level: lesson.level().unwrap_or_default().to_string(),
                topics: lesson.topics().to_vec(),
                progress,
                bar_width: format!("{progress}%"),
                bar_empty: progress == 0,
                is_done: state.is_done(),
                is_locked: state.is_locked(),
            }
        })
        .collect()
}

#[must_use]
pub fn progress_chip(aggregate: u8) -> ProgressChipVm {
    if aggregate == 0 {
        ProgressChipVm {
            text: "No progress yet".to_string(),
            is_empty: true,
        }
    } else {
        ProgressChipVm {
            text: format!("{aggregate}%"),
            is_empty: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use journey_core::compute_runtime_state;
    use journey_core::model::LessonId;

    #[test]
    fn maps_bars_and_classes() {
        let lessons = vec![
            Lesson::new(LessonId::new("a").unwrap(), 100).with_title("Intro"),
            Lesson::new(LessonId::new("b").unwrap(), 0),
        ];
        let states = compute_runtime_state(&lessons);
        let items = map_timeline(&lessons, &states);

        assert_eq!(items[0].bar_width, "100%");
        assert_eq!(items[0].item_class(), "timeline-item is-done");
        assert_eq!(items[0].bar_class(), "progress-bar");
        assert_eq!(items[1].title, DEFAULT_TITLE);
        assert_eq!(items[1].bar_width, "0%");
        assert_eq!(items[1].bar_class(), "progress-bar is-empty");
        assert_eq!(items[1].item_class(), "timeline-item");
    }

    #[test]
    fn chip_shows_empty_state_at_zero() {
        let chip = progress_chip(0);
        assert_eq!(chip.text, "No progress yet");
        assert_eq!(chip.class(), "progress-chip is-empty");

        let chip = progress_chip(47);
        assert_eq!(chip.text, "47%");
        assert_eq!(chip.class(), "progress-chip");
    }
}
