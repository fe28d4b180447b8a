use journey_core::detail::NO_TOPICS_PLACEHOLDER;
use journey_core::model::NAME_PLACEHOLDER;
use journey_core::sandbox::DEFAULT_TEMPLATE;
use services::LessonCatalog;

use super::test_harness::{
    ViewKind, setup_view_harness, setup_view_harness_with_catalog,
    setup_view_harness_with_commands,
};
use crate::context::SandboxCommand;

#[tokio::test(flavor = "current_thread")]
async fn name_view_smoke_renders_gate() {
    let mut harness = setup_view_harness(ViewKind::Name, "").await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("view-name"), "missing view id in {html}");
    assert!(html.contains("name-form"), "missing form in {html}");
    assert!(html.contains(NAME_PLACEHOLDER), "missing placeholder in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn start_view_smoke_shows_stored_name() {
    let mut harness = setup_view_harness(ViewKind::Start, "  Ada ").await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Ada"), "missing name in {html}");
    assert!(html.contains("start-btn"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn start_view_smoke_falls_back_to_placeholder() {
    let mut harness = setup_view_harness(ViewKind::Start, "").await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains(NAME_PLACEHOLDER), "missing placeholder in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn map_view_smoke_renders_timeline_states() {
    let mut harness = setup_view_harness(ViewKind::Map, "Ada").await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Styling with CSS"), "missing lesson in {html}");
    assert!(html.contains("timeline-item is-done"), "missing done item in {html}");
    assert!(html.contains("timeline-item is-locked"), "missing locked item in {html}");
    assert!(html.contains("28%"), "missing aggregate in {html}");
    assert!(html.contains("width: 40%"), "missing bar width in {html}");
    assert!(html.contains("progress-bar is-empty"), "missing empty bar in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn map_view_smoke_shows_empty_progress_chip() {
    let catalog = LessonCatalog::from_json(r#"[{"id":"a","progress":0},{"id":"b"}]"#)
        .expect("catalog");
    let mut harness = setup_view_harness_with_catalog(ViewKind::Map, "Ada", catalog).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("No progress yet"), "missing empty chip in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn map_view_smoke_renders_repeated_topics() {
    let catalog = LessonCatalog::from_json(
        r#"[{"id":"a","title":"Intro","progress":20,"topics":"vars|vars"}]"#,
    )
    .expect("catalog");
    let mut harness = setup_view_harness_with_catalog(ViewKind::Map, "Ada", catalog).await;
    harness.rebuild();
    let html = harness.render();
    assert_eq!(
        html.matches(r#"data-topic="vars""#).count(),
        2,
        "expected both topic buttons in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_renders_topic_detail() {
    let mut harness =
        setup_view_harness(ViewKind::lesson("css-styling", "colors"), "Ada").await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Styling with CSS · colors"), "missing heading in {html}");
    assert!(html.contains("box model"), "missing topic in {html}");
    assert_eq!(
        harness
            .services
            .progress()
            .active()
            .map(|id| id.to_string())
            .as_deref(),
        Some("css-styling")
    );
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_refuses_locked_lesson() {
    let mut harness = setup_view_harness(ViewKind::lesson("js-first-steps", ""), "Ada").await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Lesson not available"), "missing refusal in {html}");
    assert_eq!(
        harness
            .services
            .progress()
            .active()
            .map(|id| id.to_string())
            .as_deref(),
        Some("html-basics")
    );
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_shows_topic_placeholder() {
    let catalog = LessonCatalog::from_json(r#"[{"id":"a","title":"Intro","progress":100}]"#)
        .expect("catalog");
    let mut harness =
        setup_view_harness_with_catalog(ViewKind::lesson("a", ""), "Ada", catalog).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Intro"), "missing heading in {html}");
    assert!(html.contains(NO_TOPICS_PLACEHOLDER), "missing placeholder in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn sandbox_view_smoke_hydrates_preview() {
    let mut harness = setup_view_harness(ViewKind::Sandbox, "Ada").await;
    harness.services.sandbox().set_buffer("<p>saved</p>").await;

    harness.rebuild();
    for _ in 0..3 {
        harness.drive_async().await;
    }
    let html = harness.render();

    assert!(html.contains("reset-code-btn"), "missing reset in {html}");
    assert!(html.contains("preview-frame"), "missing preview in {html}");
    let doc = harness.services.preview().snapshot();
    assert_eq!(doc.content, "<p>saved</p>");
    assert_eq!(doc.revision, 1);
}

#[tokio::test(flavor = "current_thread")]
async fn sandbox_view_smoke_applies_edits_then_reset_in_order() {
    let commands = vec![
        SandboxCommand::Edit("<p>a</p>".to_string()),
        SandboxCommand::Edit("<p>ab</p>".to_string()),
        SandboxCommand::Reset,
    ];
    let catalog = LessonCatalog::bundled().expect("bundled catalog");
    let mut harness =
        setup_view_harness_with_commands(ViewKind::Sandbox, "Ada", catalog, commands).await;
    harness.services.sandbox().set_buffer("<p>saved</p>").await;

    harness.rebuild();
    for _ in 0..5 {
        harness.drive_async().await;
    }
    let html = harness.render();

    assert!(html.contains("code-input"), "missing editor in {html}");
    let sandbox = harness.services.sandbox();
    assert_eq!(sandbox.buffer(), DEFAULT_TEMPLATE);
    assert_eq!(sandbox.load_buffer().await, DEFAULT_TEMPLATE);
    assert_eq!(harness.services.preview().snapshot().content, DEFAULT_TEMPLATE);
}
