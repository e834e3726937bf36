use std::sync::Arc;

use async_trait::async_trait;
use coursehub_core::model::{
    AccessToken, Course, CourseId, Lesson, LessonId, Progress, Quiz, QuizId, User,
};
use thiserror::Error;

/// Errors surfaced by gateway adapters.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum GatewayError {
    #[error("not found")]
    NotFound,

    #[error("not authorized")]
    Unauthorized,

    #[error("request rejected ({status}): {detail}")]
    Rejected { status: u16, detail: String },

    #[error("request failed with status {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed response from {endpoint}: {reason}")]
    MalformedResponse { endpoint: String, reason: String },

    #[error("session error: {0}")]
    Session(String),
}

impl GatewayError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    pub(crate) fn malformed(endpoint: impl Into<String>, reason: impl ToString) -> Self {
        Self::MalformedResponse {
            endpoint: endpoint.into(),
            reason: reason.to_string(),
        }
    }
}

/// Server acknowledgement of a recorded quiz attempt.
///
/// Fields are optional because the attempt endpoint's body is not part of the
/// stable contract; the client never relies on them for grading.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttemptReceipt {
    pub id: Option<String>,
    pub score: Option<f64>,
}

/// Sign-up form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[async_trait]
pub trait CourseGateway: Send + Sync {
    /// List every published course.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError` on transport or decoding failures.
    async fn list_courses(&self) -> Result<Vec<Course>, GatewayError>;

    /// Fetch a course by ID.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::NotFound` if missing, or other gateway errors.
    async fn get_course(&self, id: &CourseId) -> Result<Course, GatewayError>;
}

#[async_trait]
pub trait LessonGateway: Send + Sync {
    /// # Errors
    ///
    /// Returns `GatewayError::NotFound` if the course is missing, or other gateway errors.
    async fn list_lessons_by_course(&self, course_id: &CourseId)
    -> Result<Vec<Lesson>, GatewayError>;

    /// # Errors
    ///
    /// Returns `GatewayError::NotFound` if the course or lesson is missing, or
    /// if the lesson belongs to a different course.
    async fn get_lesson(
        &self,
        course_id: &CourseId,
        lesson_id: &LessonId,
    ) -> Result<Lesson, GatewayError>;
}

#[async_trait]
pub trait QuizGateway: Send + Sync {
    /// # Errors
    ///
    /// Returns `GatewayError::NotFound` if the course or lesson is missing, or other gateway errors.
    async fn get_quizzes_for_lesson(
        &self,
        course_id: &CourseId,
        lesson_id: &LessonId,
    ) -> Result<Vec<Quiz>, GatewayError>;

    /// Record an attempt. `answers` uses `-1` for unanswered questions.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Unauthorized` without a signed-in user, or other gateway errors.
    async fn submit_attempt(
        &self,
        course_id: &CourseId,
        lesson_id: &LessonId,
        quiz_id: &QuizId,
        answers: &[i64],
    ) -> Result<AttemptReceipt, GatewayError>;
}

#[async_trait]
pub trait ProgressGateway: Send + Sync {
    /// # Errors
    ///
    /// Returns `GatewayError::Unauthorized` without a signed-in user,
    /// `GatewayError::NotFound` if no record exists, or other gateway errors.
    async fn get_progress(&self, course_id: &CourseId) -> Result<Progress, GatewayError>;

    /// # Errors
    ///
    /// Returns `GatewayError::Unauthorized` without a signed-in user, or other gateway errors.
    async fn set_lesson_progress(
        &self,
        course_id: &CourseId,
        lesson_id: &LessonId,
        completed: bool,
    ) -> Result<Progress, GatewayError>;
}

#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchange credentials for a bearer token. Does not store it.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Unauthorized` for bad credentials, or other gateway errors.
    async fn login(&self, email: &str, password: &str) -> Result<AccessToken, GatewayError>;

    /// # Errors
    ///
    /// Returns `GatewayError::Rejected` if the email or username is taken.
    async fn register(&self, account: &NewAccount) -> Result<User, GatewayError>;

    /// # Errors
    ///
    /// Returns `GatewayError::Unauthorized` without a valid token.
    async fn current_user(&self) -> Result<User, GatewayError>;
}

/// Aggregates the resource gateways behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Gateway {
    pub courses: Arc<dyn CourseGateway>,
    pub lessons: Arc<dyn LessonGateway>,
    pub quizzes: Arc<dyn QuizGateway>,
    pub progress: Arc<dyn ProgressGateway>,
    pub auth: Arc<dyn AuthGateway>,
}

impl Gateway {
    /// Wire every resource to one implementation.
    #[must_use]
    pub fn from_backend<B>(backend: B) -> Self
    where
        B: CourseGateway
            + LessonGateway
            + QuizGateway
            + ProgressGateway
            + AuthGateway
            + Clone
            + 'static,
    {
        Self {
            courses: Arc::new(backend.clone()),
            lessons: Arc::new(backend.clone()),
            quizzes: Arc::new(backend.clone()),
            progress: Arc::new(backend.clone()),
            auth: Arc::new(backend),
        }
    }
}
