use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use journey_core::model::DisplayName;
use services::{
    AppServices, DocumentSlot, IdentityService, LessonCatalog, ProgressService, SandboxRuntime,
};

use crate::context::{
    SandboxCommand, UiApp, build_app_context, use_provide_sandbox_channel, use_provide_user_name,
};
use crate::views::{LessonView, MapView, NameView, SandboxView, StartView};

struct TestApp {
    services: AppServices,
    name: DisplayName,
}

impl UiApp for TestApp {
    fn initial_name(&self) -> DisplayName {
        self.name.clone()
    }

    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }

    fn identity(&self) -> Arc<IdentityService> {
        self.services.identity()
    }

    fn sandbox(&self) -> Arc<SandboxRuntime> {
        self.services.sandbox()
    }

    fn preview(&self) -> Arc<DocumentSlot> {
        self.services.preview()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Name,
    Start,
    Map,
    Lesson { id: String, topic: String },
    Sandbox,
}

impl ViewKind {
    pub fn lesson(id: &str, topic: &str) -> Self {
        Self::Lesson {
            id: id.to_string(),
            topic: topic.to_string(),
        }
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    sandbox_commands: Vec<SandboxCommand>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    use_provide_user_name(&ctx);
    let channel = use_provide_sandbox_channel(&ctx);
    use_hook(|| {
        for command in props.sandbox_commands.clone() {
            channel.send(command);
        }
    });
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Name => rsx! { NameView {} },
        ViewKind::Start => rsx! { StartView {} },
        ViewKind::Map => rsx! { MapView {} },
        ViewKind::Lesson { id, topic } => rsx! { LessonView { id, topic } },
        ViewKind::Sandbox => rsx! { SandboxView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: AppServices,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn setup_view_harness(view: ViewKind, name: &str) -> ViewHarness {
    let catalog = LessonCatalog::bundled().expect("bundled catalog");
    setup_view_harness_with_catalog(view, name, catalog).await
}

pub async fn setup_view_harness_with_catalog(
    view: ViewKind,
    name: &str,
    catalog: LessonCatalog,
) -> ViewHarness {
    setup_view_harness_with_commands(view, name, catalog, Vec::new()).await
}

/// Like [`setup_view_harness_with_catalog`], queueing sandbox commands on the
/// first render.
pub async fn setup_view_harness_with_commands(
    view: ViewKind,
    name: &str,
    catalog: LessonCatalog,
    sandbox_commands: Vec<SandboxCommand>,
) -> ViewHarness {
    let services = AppServices::in_memory(catalog);
    let name = if name.is_empty() {
        services.identity().load().await
    } else {
        services.identity().save(name).await
    };

    let app = Arc::new(TestApp {
        services: services.clone(),
        name,
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            sandbox_commands,
        },
    );

    ViewHarness { dom, services }
}
