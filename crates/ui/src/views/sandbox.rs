use dioxus::prelude::*;
use journey_core::ViewName;
use journey_core::sandbox::DEFAULT_TEMPLATE;

use crate::context::{AppContext, SandboxCommand, use_sandbox_channel};
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[component]
pub fn SandboxView() -> Element {
    let ctx = use_context::<AppContext>();
    let sandbox = ctx.sandbox();
    let preview = ctx.preview();
    let channel = use_sandbox_channel();
    let mut code = use_signal(String::new);
    let mut rendered = channel.rendered;

    let resource = use_resource(move || {
        let sandbox = sandbox.clone();
        let preview = preview.clone();
        async move {
            let content = sandbox.hydrate().await;
            code.set(content.clone());
            rendered.set(preview.snapshot());
            Ok::<_, ViewError>(content)
        }
    });
    let state = view_state_from_resource(&resource);

    // Edits go through one queue so they persist and render in keystroke order.
    let edits = channel.clone();
    let on_input = move |evt: FormEvent| {
        let value = evt.value();
        code.set(value.clone());
        edits.send(SandboxCommand::Edit(value));
    };

    let resets = channel.clone();
    let on_reset = move |_: MouseEvent| {
        code.set(DEFAULT_TEMPLATE.to_string());
        resets.send(SandboxCommand::Reset);
    };

    let doc = rendered();

    rsx! {
        section { id: ViewName::Sandbox.as_str(), class: "view view-active",
            div { class: "sandbox-header",
                h2 { "Sandbox" }
                button { id: "reset-code-btn", onclick: on_reset, "Reset" }
            }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
                ViewState::Ready(_) => rsx! {
                    div { class: "sandbox",
                        textarea {
                            id: "code-input",
                            spellcheck: "false",
                            value: "{code}",
                            oninput: on_input,
                        }
                        iframe {
                            id: "preview-frame",
                            title: "Preview",
                            "data-revision": "{doc.revision}",
                            "srcdoc": "{doc.content}",
                        }
                    }
                },
            }
        }
    }
}
