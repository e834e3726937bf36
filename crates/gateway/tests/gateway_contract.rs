use std::time::Duration;

use coursehub_core::model::{
    Course, CourseId, Lesson, LessonContent, LessonId, Quiz, QuizId, QuizQuestion, UserId,
};
use gateway::{
    AuthSession, CourseGateway, Gateway, GatewayConfig, GatewayError, HttpGateway,
    InMemoryGateway, NewAccount,
};

fn seeded_backend() -> InMemoryGateway {
    let backend = InMemoryGateway::new(AuthSession::anonymous());
    backend
        .insert_course(Course::new(
            CourseId::new("rust"),
            "Rust basics",
            "Ownership, borrowing and lifetimes",
            UserId::new("instructor"),
        ))
        .expect("seed course");
    for (id, order) in [("intro", 1), ("borrowing", 2), ("lifetimes", 3)] {
        backend
            .insert_lesson(Lesson::new(
                LessonId::new(id),
                CourseId::new("rust"),
                id,
                LessonContent::parse("Read this.\n\nThen that."),
                order,
            ))
            .expect("seed lesson");
    }
    let questions = vec![
        QuizQuestion::new("Owner count?", vec!["one".into(), "two".into()], 0).unwrap(),
        QuizQuestion::new("Moves copy?", vec!["yes".into(), "no".into()], 1).unwrap(),
    ];
    backend
        .insert_quiz(Quiz::new(
            QuizId::new("q-intro"),
            LessonId::new("intro"),
            "Warm-up",
            questions,
        ))
        .expect("seed quiz");
    backend
}

async fn sign_up_and_in(gateway: &Gateway, session: &AuthSession) {
    gateway
        .auth
        .register(&NewAccount {
            username: "ada".into(),
            email: "ada@example.com".into(),
            password: "secret".into(),
        })
        .await
        .expect("register");
    let token = gateway
        .auth
        .login("ada@example.com", "secret")
        .await
        .expect("login");
    session.sign_in(token).expect("store token");
}

#[tokio::test]
async fn course_and_lesson_lookups() {
    let gateway = Gateway::in_memory(seeded_backend());

    let courses = gateway.courses.list_courses().await.expect("courses");
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].title(), "Rust basics");

    let err = gateway
        .courses
        .get_course(&CourseId::new("missing"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let lessons = gateway
        .lessons
        .list_lessons_by_course(&CourseId::new("rust"))
        .await
        .expect("lessons");
    assert_eq!(lessons.len(), 3);

    let quizzes = gateway
        .quizzes
        .get_quizzes_for_lesson(&CourseId::new("rust"), &LessonId::new("intro"))
        .await
        .expect("quizzes");
    assert_eq!(quizzes.len(), 1);
    assert_eq!(quizzes[0].question_count(), 2);

    let none = gateway
        .quizzes
        .get_quizzes_for_lesson(&CourseId::new("rust"), &LessonId::new("borrowing"))
        .await
        .expect("no quizzes");
    assert!(none.is_empty());
}

#[tokio::test]
async fn progress_requires_a_signed_in_user() {
    let backend = seeded_backend();
    let session = backend.session().clone();
    let gateway = Gateway::in_memory(backend);

    let err = gateway
        .progress
        .get_progress(&CourseId::new("rust"))
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::Unauthorized));

    sign_up_and_in(&gateway, &session).await;

    let progress = gateway
        .progress
        .set_lesson_progress(&CourseId::new("rust"), &LessonId::new("intro"), true)
        .await
        .expect("mark complete");
    assert_eq!(progress.completed_count(), 1);
    assert_eq!(progress.display_percent(), 33);

    // Marking again is idempotent.
    let again = gateway
        .progress
        .set_lesson_progress(&CourseId::new("rust"), &LessonId::new("intro"), true)
        .await
        .expect("mark complete twice");
    assert_eq!(again, progress);

    let fetched = gateway
        .progress
        .get_progress(&CourseId::new("rust"))
        .await
        .expect("progress");
    assert!(fetched.is_lesson_complete(&LessonId::new("intro")));
    assert!(!fetched.is_lesson_complete(&LessonId::new("borrowing")));
}

#[tokio::test]
async fn attempts_are_scored_and_recorded() {
    let backend = seeded_backend();
    let session = backend.session().clone();
    let gateway = Gateway::in_memory(backend.clone());
    sign_up_and_in(&gateway, &session).await;

    let receipt = gateway
        .quizzes
        .submit_attempt(
            &CourseId::new("rust"),
            &LessonId::new("intro"),
            &QuizId::new("q-intro"),
            &[0, 0],
        )
        .await
        .expect("attempt");
    assert_eq!(receipt.score, Some(50.0));
    assert!(receipt.id.is_some());

    let attempts = backend.attempts().expect("attempts");
    assert_eq!(attempts.len(), 1);
    assert_eq!(attempts[0].answers, vec![0, 0]);

    let err = gateway
        .quizzes
        .submit_attempt(
            &CourseId::new("rust"),
            &LessonId::new("intro"),
            &QuizId::new("q-intro"),
            &[0],
        )
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::Rejected { status: 422, .. }));
}

#[tokio::test]
async fn registration_rejects_duplicates_and_bad_logins() {
    let backend = seeded_backend();
    let session = backend.session().clone();
    let gateway = Gateway::in_memory(backend);
    sign_up_and_in(&gateway, &session).await;

    let me = gateway.auth.current_user().await.expect("me");
    assert_eq!(me.username, "ada");

    let err = gateway
        .auth
        .register(&NewAccount {
            username: "other".into(),
            email: "ada@example.com".into(),
            password: "x".into(),
        })
        .await
        .unwrap_err();
    match err {
        GatewayError::Rejected { detail, .. } => assert_eq!(detail, "Email already registered"),
        other => panic!("unexpected {other:?}"),
    }

    let err = gateway
        .auth
        .login("ada@example.com", "wrong")
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::Unauthorized));
}

#[tokio::test]
async fn http_gateway_reports_unreachable_server_as_transport() {
    let config = GatewayConfig::new("http://127.0.0.1:9")
        .expect("config")
        .with_timeout(Duration::from_secs(2));
    let gateway = HttpGateway::new(&config, AuthSession::anonymous()).expect("client");
    let err = gateway.list_courses().await.unwrap_err();
    assert!(matches!(err, GatewayError::Transport(_)), "{err:?}");
}

#[tokio::test]
async fn http_gateway_skips_progress_without_token() {
    let config = GatewayConfig::new("http://127.0.0.1:9").expect("config");
    let gateway = Gateway::http(&config, AuthSession::anonymous()).expect("client");
    let err = gateway
        .progress
        .get_progress(&CourseId::new("rust"))
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::Unauthorized));
}
