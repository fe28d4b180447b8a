use dioxus::prelude::*;
use dioxus_router::use_navigator;
use journey_core::ViewName;
use tracing::debug;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{TimelineItemVm, map_timeline, progress_chip};

#[component]
pub fn MapView() -> Element {
    let ctx = use_context::<AppContext>();
    let progress = ctx.progress();
    let items = map_timeline(progress.lessons(), progress.states());
    let chip = progress_chip(progress.aggregate());

    rsx! {
        section { id: ViewName::Map.as_str(), class: "view view-active",
            div { class: "map-header",
                h2 { "Your journey" }
                span { class: chip.class(), "{chip.text}" }
            }
            if items.is_empty() {
                p { class: "empty", "No lessons yet." }
            } else {
                ol { class: "timeline",
                    for item in items {
                        TimelineItem { key: "{item.id}", item }
                    }
                }
            }
        }
    }
}

#[component]
fn TimelineItem(item: TimelineItemVm) -> Element {
    let navigator = use_navigator();
    let locked = item.is_locked;
    let lesson_id = item.id.clone();

    rsx! {
        li { class: item.item_class(), "data-lesson-id": "{item.id}",
            div { class: "timeline-head",
                h3 { "{item.title}" }
                if !item.level.is_empty() {
                    span { class: "level", "{item.level}" }
                }
            }
            div { class: item.bar_class(),
                span {
                    style: "width: {item.bar_width}",
                    "role": "progressbar",
                    "aria-valuenow": "{item.progress}",
                    "aria-valuemin": "0",
                    "aria-valuemax": "100",
                }
            }
            div { class: "timeline-actions",
                button {
                    class: "lesson-btn",
                    disabled: locked,
                    onclick: move |_| {
                        if locked {
                            debug!(lesson = %lesson_id, "lesson click ignored: locked");
                            return;
                        }
                        navigator.push(Route::Lesson {
                            id: lesson_id.clone(),
                            topic: String::new(),
                        });
                    },
                    if locked { "Locked" } else { "Open lesson" }
                }
                for (index, topic) in item.topics.clone().into_iter().enumerate() {
                    TopicButton {
                        key: "{index}-{topic}",
                        lesson_id: item.id.clone(),
                        topic,
                        locked,
                    }
                }
            }
        }
    }
}

#[component]
fn TopicButton(lesson_id: String, topic: String, locked: bool) -> Element {
    let navigator = use_navigator();
    let label = topic.clone();

    rsx! {
        button {
            class: "topic-btn",
            "data-topic": "{label}",
            disabled: locked,
            onclick: move |_| {
                if locked {
                    return;
                }
                navigator.push(Route::Lesson {
                    id: lesson_id.clone(),
                    topic: topic.clone(),
                });
            },
            "{label}"
        }
    }
}
