use dioxus::prelude::*;
use dioxus_router::use_navigator;
use journey_core::ViewName;
use journey_core::model::NAME_PLACEHOLDER;

use crate::context::{AppContext, use_user_name};
use crate::routes::Route;

#[component]
pub fn NameView() -> Element {
    let ctx = use_context::<AppContext>();
    let identity = ctx.identity();
    let navigator = use_navigator();
    let mut user_name = use_user_name();
    let mut draft = use_signal(|| user_name.read().as_str().to_string());

    let skip_gate = use_hook(|| ctx.take_skip_name_gate());
    use_effect(move || {
        if skip_gate {
            navigator.replace(Route::Start {});
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let identity = identity.clone();
        let raw = draft();
        spawn(async move {
            let saved = identity.save(&raw).await;
            draft.set(saved.as_str().to_string());
            user_name.set(saved);
            navigator.push(Route::Start {});
        });
    };

    rsx! {
        section { id: ViewName::Name.as_str(), class: "view view-active",
            h2 { "Welcome! What should we call you?" }
            form { id: "name-form", onsubmit: on_submit,
                label { r#for: "username", "Your name" }
                input {
                    id: "username",
                    r#type: "text",
                    autocomplete: "off",
                    placeholder: NAME_PLACEHOLDER,
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                }
                button { r#type: "submit", class: "primary", "Continue" }
            }
        }
    }
}
