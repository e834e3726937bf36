//! Sample catalogue for running the client without a server.

use coursehub_core::model::{
    Course, CourseId, Lesson, LessonContent, LessonId, Quiz, QuizId, QuizQuestion, User, UserId,
};
use gateway::InMemoryGateway;

use crate::error::AppServicesError;

pub const DEMO_EMAIL: &str = "demo@coursehub.local";
pub const DEMO_PASSWORD: &str = "demo";

fn question(
    text: &str,
    options: &[&str],
    correct: usize,
) -> Result<QuizQuestion, coursehub_core::Error> {
    let options = options.iter().map(|o| (*o).to_owned()).collect();
    Ok(QuizQuestion::new(text, options, correct)?)
}

fn lesson(course: &str, id: &str, title: &str, order: i32, body: &str) -> Lesson {
    Lesson::new(
        LessonId::new(id),
        CourseId::new(course),
        title,
        LessonContent::parse(body),
        order,
    )
}

/// Fill `backend` with two courses and a demo account.
///
/// # Errors
///
/// Returns `AppServicesError` if any seed record is invalid.
pub fn seed(backend: &InMemoryGateway) -> Result<(), AppServicesError> {
    let instructor = UserId::new("instructor-1");
    backend.insert_account(
        User {
            id: UserId::new("demo-user"),
            username: "demo".into(),
            email: DEMO_EMAIL.into(),
        },
        DEMO_PASSWORD,
    )?;

    backend.insert_course(Course::new(
        CourseId::new("rust-basics"),
        "Rust Basics",
        "Ownership, borrowing and the type system from first principles.",
        instructor.clone(),
    ))?;
    backend.insert_lesson(lesson(
        "rust-basics",
        "ownership",
        "Ownership",
        1,
        "Every value has exactly one owner.\nWhen the owner goes out of scope, the value is dropped.\n\n\
         Assigning a heap value to another variable moves it.",
    ))?;
    backend.insert_lesson(lesson(
        "rust-basics",
        "borrowing",
        "Borrowing",
        2,
        "References let you use a value without taking ownership.\n\n\
         You may have many shared references or one mutable reference, never both.",
    ))?;
    backend.insert_lesson(lesson(
        "rust-basics",
        "lifetimes",
        "Lifetimes",
        3,
        "Lifetimes name how long a reference is valid.\n\nMost are inferred.",
    ))?;
    backend.insert_quiz(Quiz::new(
        QuizId::new("ownership-check"),
        LessonId::new("ownership"),
        "Ownership check",
        vec![
            question(
                "How many owners can a value have at once?",
                &["None", "Exactly one", "Any number"],
                1,
            )?,
            question(
                "What happens when the owner goes out of scope?",
                &["The value is dropped", "Nothing", "The value is copied"],
                0,
            )?,
        ],
    ))?;
    backend.insert_quiz(Quiz::new(
        QuizId::new("borrowing-check"),
        LessonId::new("borrowing"),
        "Borrowing check",
        vec![question(
            "Which combination is allowed at the same time?",
            &[
                "Two mutable references",
                "One mutable and one shared reference",
                "Many shared references",
            ],
            2,
        )?],
    ))?;

    backend.insert_course(Course::new(
        CourseId::new("async-rust"),
        "Async Rust",
        "Futures, executors and structured concurrency.",
        instructor,
    ))?;
    backend.insert_lesson(lesson(
        "async-rust",
        "futures",
        "Futures",
        1,
        "A future is a value that completes later.\n\nNothing happens until it is polled.",
    ))?;
    backend.insert_quiz(Quiz::new(
        QuizId::new("futures-check"),
        LessonId::new("futures"),
        "Futures check",
        vec![question(
            "When does an async fn body start running?",
            &["When called", "When first polled"],
            1,
        )?],
    ))?;
    Ok(())
}
