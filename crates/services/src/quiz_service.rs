use std::sync::Arc;

use coursehub_core::model::{CourseId, LessonId};
use coursehub_core::quiz::{QuizAction, QuizState};
use gateway::{AuthSession, QuizGateway};

use crate::error::QuizFlowError;

/// Grades quiz attempts locally and reports them to the server.
#[derive(Clone)]
pub struct QuizService {
    quizzes: Arc<dyn QuizGateway>,
    session: AuthSession,
}

impl QuizService {
    #[must_use]
    pub fn new(quizzes: Arc<dyn QuizGateway>, session: AuthSession) -> Self {
        Self { quizzes, session }
    }

    /// Submit the attempt held by `state`.
    ///
    /// The returned `Submitted` state is authoritative. Recording the attempt
    /// on the server only happens when signed in, and a failure there is logged.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::Session` if the reducer rejects the submit
    /// (not started, incomplete, or already submitted).
    pub async fn submit(
        &self,
        course_id: &CourseId,
        lesson_id: &LessonId,
        state: &QuizState,
    ) -> Result<QuizState, QuizFlowError> {
        let submitted = state.apply(QuizAction::Submit)?;
        let (Some(quiz), Some(answers), Some(result)) =
            (submitted.quiz(), submitted.answers(), submitted.result())
        else {
            return Ok(submitted);
        };
        tracing::info!(
            quiz_id = %quiz.id(),
            score = %result.score(),
            "quiz graded"
        );

        if !self.session.is_authenticated() {
            return Ok(submitted);
        }
        match self
            .quizzes
            .submit_attempt(course_id, lesson_id, quiz.id(), &answers.to_wire())
            .await
        {
            Ok(receipt) => {
                tracing::debug!(quiz_id = %quiz.id(), attempt = ?receipt.id, "attempt recorded");
            }
            Err(err) => {
                tracing::warn!(quiz_id = %quiz.id(), error = %err, "attempt not recorded");
            }
        }
        Ok(submitted)
    }
}
