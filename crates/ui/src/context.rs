use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use dioxus::prelude::*;
use futures::StreamExt;
use futures::channel::mpsc::UnboundedReceiver;
use journey_core::model::DisplayName;
use journey_core::{ViewName, initial_view};
use services::{DocumentSlot, IdentityService, PreviewDocument, ProgressService, SandboxRuntime};

pub trait UiApp: Send + Sync {
    /// Name loaded from storage before the window opens.
    fn initial_name(&self) -> DisplayName;

    fn progress(&self) -> Arc<ProgressService>;
    fn identity(&self) -> Arc<IdentityService>;
    fn sandbox(&self) -> Arc<SandboxRuntime>;
    fn preview(&self) -> Arc<DocumentSlot>;
}

#[derive(Clone)]
pub struct AppContext {
    initial_name: DisplayName,
    skip_name_gate_once: Arc<AtomicBool>,

    progress: Arc<ProgressService>,
    identity: Arc<IdentityService>,
    sandbox: Arc<SandboxRuntime>,
    preview: Arc<DocumentSlot>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let initial_name = app.initial_name();
        let skip_name_gate = initial_view(&initial_name) == ViewName::Start;

        Self {
            initial_name,
            skip_name_gate_once: Arc::new(AtomicBool::new(skip_name_gate)),
            progress: app.progress(),
            identity: app.identity(),
            sandbox: app.sandbox(),
            preview: app.preview(),
        }
    }

    #[must_use]
    pub fn initial_name(&self) -> DisplayName {
        self.initial_name.clone()
    }

    /// True exactly once, on launch, when a name is already stored.
    #[must_use]
    pub fn take_skip_name_gate(&self) -> bool {
        self.skip_name_gate_once.swap(false, Ordering::AcqRel)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn identity(&self) -> Arc<IdentityService> {
        Arc::clone(&self.identity)
    }

    #[must_use]
    pub fn sandbox(&self) -> Arc<SandboxRuntime> {
        Arc::clone(&self.sandbox)
    }

    #[must_use]
    pub fn preview(&self) -> Arc<DocumentSlot> {
        Arc::clone(&self.preview)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Share the learner's name with every view that displays it.
pub fn use_provide_user_name(ctx: &AppContext) -> Signal<DisplayName> {
    let initial = ctx.initial_name();
    use_context_provider(move || Signal::new(initial))
}

#[must_use]
pub fn use_user_name() -> Signal<DisplayName> {
    use_context::<Signal<DisplayName>>()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SandboxCommand {
    Edit(String),
    Reset,
}

/// Queue for sandbox edits plus the document it last rendered.
#[derive(Clone)]
pub struct SandboxChannel {
    pub commands: Coroutine<SandboxCommand>,
    pub rendered: Signal<PreviewDocument>,
}

impl SandboxChannel {
    pub fn send(&self, command: SandboxCommand) {
        self.commands.send(command);
    }
}

/// Start the single consumer that applies sandbox commands in arrival order.
pub fn use_provide_sandbox_channel(ctx: &AppContext) -> SandboxChannel {
    let sandbox = ctx.sandbox();
    let preview = ctx.preview();
    let initial = preview.snapshot();
    let mut rendered = use_signal(move || initial);

    let commands = use_coroutine(move |mut rx: UnboundedReceiver<SandboxCommand>| {
        let sandbox = sandbox.clone();
        let preview = preview.clone();
        async move {
            while let Some(command) = rx.next().await {
                match command {
                    SandboxCommand::Edit(content) => sandbox.edit(&content).await,
                    SandboxCommand::Reset => sandbox.reset().await,
                }
                rendered.set(preview.snapshot());
            }
        }
    });

    use_context_provider(|| SandboxChannel { commands, rendered })
}

#[must_use]
pub fn use_sandbox_channel() -> SandboxChannel {
    use_context::<SandboxChannel>()
}
