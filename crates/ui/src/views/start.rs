use dioxus::prelude::*;
use dioxus_router::use_navigator;
use journey_core::ViewName;

use crate::context::use_user_name;
use crate::routes::Route;

#[component]
pub fn StartView() -> Element {
    let navigator = use_navigator();
    let user_name = use_user_name();

    rsx! {
        section { id: ViewName::Start.as_str(), class: "view view-active",
            h2 {
                "Hi "
                span { "data-username-display": "true", "{user_name.read().display_text()}" }
                "!"
            }
            p { "Your coding journey starts with a few short lessons. Each one unlocks the next." }
            button {
                id: "start-btn",
                class: "primary",
                onclick: move |_| {
                    navigator.push(Route::Map {});
                },
                "Start the journey"
            }
        }
    }
}
