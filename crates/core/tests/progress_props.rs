use journey_core::model::{Lesson, LessonId, LessonStatus};
use journey_core::{ProgressSnapshot, aggregate, compute_runtime_state};
use proptest::prelude::*;

fn status_strategy() -> impl Strategy<Value = Option<LessonStatus>> {
    prop_oneof![
        4 => Just(None),
        1 => Just(Some(LessonStatus::Locked)),
        1 => Just(Some(LessonStatus::Done)),
    ]
}

fn lessons_strategy() -> impl Strategy<Value = Vec<Lesson>> {
    prop::collection::vec((-50i32..160, status_strategy()), 0..12).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(index, (progress, status))| {
                let lesson = Lesson::new(LessonId::new(format!("l{index}")).unwrap(), progress);
                match status {
                    Some(status) => lesson.with_status(status),
                    None => lesson,
                }
            })
            .collect()
    })
}

#[test]
fn test_scenario_from_onboarding_timeline() {
    let lessons = vec![
        Lesson::new(LessonId::new("a").unwrap(), 100),
        Lesson::new(LessonId::new("b").unwrap(), 40),
        Lesson::new(LessonId::new("c").unwrap(), 0),
    ];
    let snapshot = ProgressSnapshot::from_lessons(&lessons);
    let flags: Vec<(bool, bool)> = snapshot
        .states()
        .iter()
        .map(|state| (state.is_done(), state.is_locked()))
        .collect();
    assert_eq!(flags, vec![(true, false), (false, false), (false, true)]);
    assert_eq!(snapshot.aggregate(), 47);
}

proptest! {
    #[test]
    fn prop_aggregate_is_rounded_mean_of_clamped(lessons in lessons_strategy()) {
        let states = compute_runtime_state(&lessons);
        let expected = if lessons.is_empty() {
            0
        } else {
            let total: f64 = lessons
                .iter()
                .map(|lesson| f64::from(lesson.progress().clamp(0, 100)))
                .sum();
            #[allow(clippy::cast_precision_loss)]
            let mean = total / lessons.len() as f64;
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let rounded = (mean + 0.5).floor() as u8;
            rounded
        };
        prop_assert_eq!(aggregate(&states), expected);
    }

    #[test]
    fn prop_clamped_progress_matches_bounds(lessons in lessons_strategy()) {
        let states = compute_runtime_state(&lessons);
        for (lesson, state) in lessons.iter().zip(&states) {
            let raw = lesson.progress();
            let clamped = i32::from(state.clamped_progress());
            if (0..=100).contains(&raw) {
                prop_assert_eq!(clamped, raw);
            } else if raw < 0 {
                prop_assert_eq!(clamped, 0);
            } else {
                prop_assert_eq!(clamped, 100);
            }
        }
    }

    #[test]
    fn prop_unfinished_lesson_locks_everything_after(lessons in lessons_strategy()) {
        let states = compute_runtime_state(&lessons);
        for (i, blocker) in states.iter().enumerate() {
            if blocker.is_done() {
                continue;
            }
            for later in &states[i + 1..] {
                prop_assert!(later.is_locked() || later.is_done());
            }
        }
    }

    #[test]
    fn prop_runtime_state_is_deterministic(lessons in lessons_strategy()) {
        prop_assert_eq!(compute_runtime_state(&lessons), compute_runtime_state(&lessons));
    }
}
