use async_trait::async_trait;
use coursehub_core::model::{CourseId, LessonId, Quiz, QuizId};

use super::HttpGateway;
use super::wire::{AttemptRequest, AttemptWire, QuizWire, map_attempt, map_quiz};
use crate::api::{AttemptReceipt, GatewayError, QuizGateway};

#[async_trait]
impl QuizGateway for HttpGateway {
    async fn get_quizzes_for_lesson(
        &self,
        course_id: &CourseId,
        lesson_id: &LessonId,
    ) -> Result<Vec<Quiz>, GatewayError> {
        let wires: Vec<QuizWire> = self
            .get_json(&[
                "courses",
                course_id.as_str(),
                "lessons",
                lesson_id.as_str(),
                "quizzes",
            ])
            .await?;
        wires
            .into_iter()
            .map(|wire| map_quiz("GET /courses/{cid}/lessons/{lid}/quizzes", wire))
            .collect()
    }

    async fn submit_attempt(
        &self,
        course_id: &CourseId,
        lesson_id: &LessonId,
        quiz_id: &QuizId,
        answers: &[i64],
    ) -> Result<AttemptReceipt, GatewayError> {
        self.require_auth()?;
        let wire: AttemptWire = self
            .post_json(
                &[
                    "courses",
                    course_id.as_str(),
                    "lessons",
                    lesson_id.as_str(),
                    "quizzes",
                    quiz_id.as_str(),
                    "attempts",
                ],
                &AttemptRequest { answers },
            )
            .await?;
        Ok(map_attempt(wire))
    }
}
