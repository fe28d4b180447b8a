use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::{AppContext, use_provide_sandbox_channel, use_provide_user_name};
use crate::views::{LessonView, MapView, NameView, SandboxView, StartView};
use crate::vm::progress_chip;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", NameView)] Name {},
        #[route("/start", StartView)] Start {},
        #[route("/map", MapView)] Map {},
        #[route("/lesson/:id?:topic", LessonView)] Lesson { id: String, topic: String },
        #[route("/sandbox", SandboxView)] Sandbox {},
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let name = use_provide_user_name(&ctx);
    use_provide_sandbox_channel(&ctx);
    let chip = progress_chip(ctx.progress().aggregate());

    rsx! {
        div { class: "app",
            header { class: "topbar",
                h1 { "Code Journey" }
                span {
                    class: "user",
                    "data-username-display": "true",
                    "{name.read().display_text()}"
                }
                span { id: "overall-progress", class: chip.class(), "{chip.text}" }
            }
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            ul {
                li {
                    Link {
                        class: "nav-btn",
                        active_class: "is-active",
                        to: Route::Start {},
                        "Start"
                    }
                }
                li {
                    Link {
                        class: "nav-btn",
                        active_class: "is-active",
                        to: Route::Map {},
                        "Journey"
                    }
                }
                li {
                    Link {
                        class: "nav-btn",
                        active_class: "is-active",
                        to: Route::Sandbox {},
                        "Sandbox"
                    }
                }
                li {
                    Link {
                        class: "nav-btn",
                        active_class: "is-active",
                        to: Route::Name {},
                        "Change name"
                    }
                }
            }
        }
    }
}
