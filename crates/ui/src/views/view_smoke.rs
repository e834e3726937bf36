use coursehub_core::model::AccessToken;
use gateway::GatewayError;

use super::test_harness::{ViewKind, demo_backend, setup_view_harness, sign_in_demo};

#[tokio::test(flavor = "current_thread")]
async fn courses_view_smoke_lists_catalogue() {
    let mut harness = setup_view_harness(ViewKind::Courses, demo_backend());
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Rust Basics"), "missing course in {html}");
    assert!(html.contains("Async Rust"), "missing course in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn courses_view_smoke_renders_error_state() {
    let backend = demo_backend();
    backend
        .fail_on("list_courses", GatewayError::Transport("offline".into()))
        .expect("inject failure");
    let mut harness = setup_view_harness(ViewKind::Courses, backend);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_detail_smoke_orders_lessons_and_shows_progress() {
    let backend = demo_backend();
    sign_in_demo(&backend).await;
    let mut harness = setup_view_harness(ViewKind::CourseDetail("rust-basics"), backend);
    harness.settle().await;
    let html = harness.render();
    let first = html.find("1. Ownership").expect("first lesson");
    let second = html.find("2. Borrowing").expect("second lesson");
    assert!(first < second, "lessons out of order in {html}");
    assert!(html.contains("0% complete"), "missing progress in {html}");
    assert!(html.contains("0 of 3 lessons"), "missing lesson count in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_detail_smoke_hides_progress_when_signed_out() {
    let mut harness = setup_view_harness(ViewKind::CourseDetail("rust-basics"), demo_backend());
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Ownership"), "missing lesson in {html}");
    assert!(!html.contains("% complete"), "unexpected progress in {html}");
    assert_eq!(harness.backend.calls("get_progress"), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn course_detail_smoke_renders_not_found() {
    let mut harness = setup_view_harness(ViewKind::CourseDetail("missing"), demo_backend());
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Course not found"), "missing not-found in {html}");
    assert!(!html.contains("Retry"), "not-found should not offer retry: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_renders_content_and_quiz() {
    let backend = demo_backend();
    sign_in_demo(&backend).await;
    let mut harness = setup_view_harness(ViewKind::Lesson("rust-basics", "ownership"), backend);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Every value has exactly one owner."), "missing content in {html}");
    assert!(html.contains("Ownership check"), "missing quiz title in {html}");
    assert!(
        html.contains("How many owners can a value have at once?"),
        "missing question in {html}"
    );
    assert!(html.contains("2 unanswered"), "missing hint in {html}");
    assert_eq!(harness.backend.calls("set_lesson_progress"), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_renders_not_found() {
    let mut harness = setup_view_harness(ViewKind::Lesson("rust-basics", "nope"), demo_backend());
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Lesson not found"), "missing not-found in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn login_view_smoke_renders_form() {
    let mut harness = setup_view_harness(ViewKind::Login, demo_backend());
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Email"), "missing email field in {html}");
    assert!(html.contains("Password"), "missing password field in {html}");
    assert!(html.contains("Need an account? Register"), "missing switch in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_greets_signed_in_user() {
    let backend = demo_backend();
    sign_in_demo(&backend).await;
    let mut harness = setup_view_harness(ViewKind::Dashboard, backend);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Welcome back, demo!"), "missing greeting in {html}");
    assert!(html.contains("Your Courses"), "missing heading in {html}");
    assert!(html.contains("Rust Basics"), "missing course in {html}");
    assert!(html.contains("Continue Learning"), "missing link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_drops_refused_token() {
    let backend = demo_backend();
    backend
        .session()
        .sign_in(AccessToken::new("expired").expect("token"))
        .expect("sign in");
    let mut harness = setup_view_harness(ViewKind::Dashboard, backend);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Please log in to continue."), "missing prompt in {html}");
    assert!(!harness.backend.session().is_authenticated());
    assert_eq!(harness.backend.calls("list_courses"), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_signed_out_skips_profile_call() {
    let mut harness = setup_view_harness(ViewKind::Dashboard, demo_backend());
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Please log in to continue."), "missing prompt in {html}");
    assert_eq!(harness.backend.calls("current_user"), 0);
}
