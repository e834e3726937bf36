//! JSON payloads exchanged with the course API and their mapping to domain types.
//!
//! Every response is decoded into an explicit schema first and then validated
//! into a domain value. Anything that fails either step becomes
//! `GatewayError::MalformedResponse` instead of leaking into scoring code.

use std::collections::BTreeMap;

use coursehub_core::model::{
    AccessToken, Course, CourseId, Lesson, LessonContent, LessonId, Progress, Quiz,
    QuizId, QuizQuestion, User, UserId,
};
use serde::{Deserialize, Serialize};

use crate::api::{AttemptReceipt, GatewayError, NewAccount};

//
// ─── RESPONSES ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub(crate) struct CourseWire {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub instructor_id: UserId,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LessonWire {
    pub id: LessonId,
    pub course_id: CourseId,
    pub title: String,
    pub content: String,
    pub order: i32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuizQuestionWire {
    pub question: String,
    pub options: Vec<String>,
    pub correct_option_index: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuizWire {
    pub id: QuizId,
    pub lesson_id: LessonId,
    pub title: String,
    pub questions: Vec<QuizQuestionWire>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProgressWire {
    #[serde(default)]
    pub lessons_completed: BTreeMap<LessonId, bool>,
    pub overall_progress: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenWire {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserWire {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AttemptWire {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
}

/// FastAPI-style error body: `{"detail": "..."}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorWire {
    pub detail: serde_json::Value,
}

//
// ─── REQUESTS ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
pub(crate) struct AttemptRequest<'a> {
    pub answers: &'a [i64],
}

#[derive(Debug, Serialize)]
pub(crate) struct ProgressUpdateRequest<'a> {
    pub lesson_id: &'a LessonId,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a NewAccount> for RegisterRequest<'a> {
    fn from(account: &'a NewAccount) -> Self {
        Self {
            username: &account.username,
            email: &account.email,
            password: &account.password,
        }
    }
}

//
// ─── MAPPING ───────────────────────────────────────────────────────────────────
//

fn ensure_id(endpoint: &str, field: &str, blank: bool) -> Result<(), GatewayError> {
    if blank {
        return Err(GatewayError::malformed(endpoint, format!("{field} is empty")));
    }
    Ok(())
}

pub(crate) fn map_course(endpoint: &str, wire: CourseWire) -> Result<Course, GatewayError> {
    ensure_id(endpoint, "course id", wire.id.is_blank())?;
    Ok(Course::new(
        wire.id,
        wire.title,
        wire.description,
        wire.instructor_id,
    ))
}

pub(crate) fn map_lesson(endpoint: &str, wire: LessonWire) -> Result<Lesson, GatewayError> {
    ensure_id(endpoint, "lesson id", wire.id.is_blank())?;
    Ok(Lesson::new(
        wire.id,
        wire.course_id,
        wire.title,
        LessonContent::parse(wire.content),
        wire.order,
    ))
}

pub(crate) fn map_quiz(endpoint: &str, wire: QuizWire) -> Result<Quiz, GatewayError> {
    ensure_id(endpoint, "quiz id", wire.id.is_blank())?;
    let questions = wire
        .questions
        .into_iter()
        .enumerate()
        .map(|(position, question)| {
            let correct = usize::try_from(question.correct_option_index).map_err(|_| {
                GatewayError::malformed(
                    endpoint,
                    format!(
                        "question {position}: negative correct_option_index {}",
                        question.correct_option_index
                    ),
                )
            })?;
            QuizQuestion::new(question.question, question.options, correct).map_err(|e| {
                GatewayError::malformed(endpoint, format!("question {position}: {e}"))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Quiz::new(wire.id, wire.lesson_id, wire.title, questions))
}

pub(crate) fn map_progress(endpoint: &str, wire: ProgressWire) -> Result<Progress, GatewayError> {
    if !wire.overall_progress.is_finite() {
        return Err(GatewayError::malformed(endpoint, "overall_progress is not finite"));
    }
    Ok(Progress::new(wire.lessons_completed, wire.overall_progress))
}

pub(crate) fn map_token(endpoint: &str, wire: TokenWire) -> Result<AccessToken, GatewayError> {
    match wire.token_type.as_deref() {
        Some(kind) if !kind.eq_ignore_ascii_case("bearer") => {
            return Err(GatewayError::malformed(
                endpoint,
                format!("unsupported token type {kind:?}"),
            ));
        }
        _ => {}
    }
    AccessToken::new(wire.access_token)
        .ok_or_else(|| GatewayError::malformed(endpoint, "access_token is empty"))
}

pub(crate) fn map_user(endpoint: &str, wire: UserWire) -> Result<User, GatewayError> {
    ensure_id(endpoint, "user id", wire.id.is_blank())?;
    Ok(User {
        id: wire.id,
        username: wire.username,
        email: wire.email,
    })
}

pub(crate) fn map_attempt(wire: AttemptWire) -> AttemptReceipt {
    AttemptReceipt {
        id: wire.id,
        score: wire.score,
    }
}

/// Best-effort human text from an error body.
pub(crate) fn error_detail(body: &str) -> String {
    match serde_json::from_str::<ErrorWire>(body) {
        Ok(ErrorWire {
            detail: serde_json::Value::String(text),
        }) => text,
        Ok(ErrorWire { detail }) => detail.to_string(),
        Err(_) => body.trim().to_owned(),
    }
}

/// Decode a JSON body, tagging failures with the endpoint.
pub(crate) fn decode<T: for<'de> Deserialize<'de>>(
    endpoint: &str,
    body: &str,
) -> Result<T, GatewayError> {
    serde_json::from_str(body).map_err(|e| GatewayError::malformed(endpoint, e))
}
