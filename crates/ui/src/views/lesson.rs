use dioxus::prelude::*;
use dioxus_router::Link;
use journey_core::ViewName;
use journey_core::model::LessonId;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::map_lesson_detail;

#[component]
pub fn LessonView(id: String, topic: String) -> Element {
    let ctx = use_context::<AppContext>();
    let progress = ctx.progress();
    let topic = Some(topic.as_str()).filter(|topic| !topic.trim().is_empty());
    let detail = LessonId::new(id)
        .ok()
        .and_then(|id| progress.open_lesson(&id, topic))
        .map(map_lesson_detail);

    rsx! {
        section { id: ViewName::Lesson.as_str(), class: "view view-active",
            match detail {
                Some(detail) => rsx! {
                    h2 { id: "lesson-heading", "{detail.title}" }
                    span { id: "lesson-level", class: "level", "{detail.level}" }
                    p { id: "lesson-summary", "{detail.summary}" }
                    if let Some(placeholder) = detail.topics_placeholder {
                        p { id: "lesson-topics", class: "empty", "{placeholder}" }
                    } else {
                        ul { id: "lesson-topics",
                            for topic in detail.topics {
                                li { "{topic}" }
                            }
                        }
                    }
                },
                None => rsx! {
                    h2 { "Lesson not available" }
                    p { "Finish the earlier lessons to unlock this one." }
                },
            }
            Link { class: "back-link", to: Route::Map {}, "Back to the journey" }
        }
    }
}
