use coursehub_core::model::{CourseId, LessonId};
use coursehub_core::quiz::{QuizAction, QuizPhase};
use gateway::{AuthSession, Gateway, InMemoryGateway};
use services::{AppServices, demo};

fn seeded() -> (InMemoryGateway, AppServices) {
    let backend = InMemoryGateway::new(AuthSession::anonymous());
    demo::seed(&backend).expect("seed demo data");
    let services =
        AppServices::from_gateway(&Gateway::in_memory(backend.clone()), backend.session().clone());
    (backend, services)
}

#[tokio::test]
async fn signed_in_learner_completes_a_lesson_and_quiz() {
    let (backend, services) = seeded();
    services
        .auth_service()
        .login(demo::DEMO_EMAIL, demo::DEMO_PASSWORD)
        .await
        .expect("login");

    let course_id = CourseId::new("rust-basics");
    let lesson_id = LessonId::new("ownership");

    let before = services
        .course_service()
        .overview(&course_id)
        .await
        .expect("overview");
    assert_eq!(before.lessons.len(), 3);
    assert_eq!(before.progress_percent(), Some(0));

    let visit = services
        .lesson_service()
        .open_lesson(&course_id, &lesson_id)
        .await
        .expect("open lesson");
    assert!(visit.completed);
    assert_eq!(visit.quiz.phase(), QuizPhase::InProgress);

    let answered = visit
        .quiz
        .apply(QuizAction::Select { question: 0, option: 1 })
        .and_then(|s| s.apply(QuizAction::Select { question: 1, option: 1 }))
        .expect("select answers");
    assert!(answered.can_submit());

    let submitted = services
        .quiz_service()
        .submit(&course_id, &lesson_id, &answered)
        .await
        .expect("submit");
    let result = submitted.result().expect("graded");
    assert_eq!(result.flags(), [true, false]);
    assert_eq!(result.score().rounded_percent(), 50);

    let attempts = backend.attempts().expect("attempts");
    assert_eq!(attempts.len(), 1);
    assert_eq!(attempts[0].answers, vec![1, 1]);

    let after = services
        .course_service()
        .overview(&course_id)
        .await
        .expect("overview");
    assert!(after.is_lesson_complete(&lesson_id));
    assert_eq!(after.progress_percent(), Some(33));
}

#[tokio::test]
async fn anonymous_learner_reads_without_progress_calls() {
    let (backend, services) = seeded();
    let course_id = CourseId::new("rust-basics");

    let courses = services.course_service().list_courses().await.expect("courses");
    assert_eq!(courses.len(), 2);

    let overview = services
        .course_service()
        .overview(&course_id)
        .await
        .expect("overview");
    assert_eq!(overview.progress, None);

    let visit = services
        .lesson_service()
        .open_lesson(&course_id, &LessonId::new("borrowing"))
        .await
        .expect("open lesson");
    assert!(!visit.completed);

    assert_eq!(backend.calls("get_progress"), 0);
    assert_eq!(backend.calls("set_lesson_progress"), 0);
}

#[tokio::test]
async fn logout_stops_progress_tracking() {
    let (backend, services) = seeded();
    let auth = services.auth_service();
    auth.login(demo::DEMO_EMAIL, demo::DEMO_PASSWORD)
        .await
        .expect("login");
    auth.logout().expect("logout");

    let progress = services
        .progress()
        .fetch_progress(&CourseId::new("rust-basics"))
        .await;
    assert_eq!(progress, None);
    assert_eq!(backend.calls("get_progress"), 0);
}

#[tokio::test]
async fn demo_services_start_signed_in() {
    let services = AppServices::demo().await.expect("demo services");
    assert!(services.session().is_authenticated());
    let ticket = services.visits().begin("/");
    assert!(ticket.is_current());
}
