use async_trait::async_trait;
use coursehub_core::model::{CourseId, Lesson, LessonId};

use super::HttpGateway;
use super::wire::{LessonWire, map_lesson};
use crate::api::{GatewayError, LessonGateway};

#[async_trait]
impl LessonGateway for HttpGateway {
    async fn list_lessons_by_course(
        &self,
        course_id: &CourseId,
    ) -> Result<Vec<Lesson>, GatewayError> {
        let wires: Vec<LessonWire> = self
            .get_json(&["courses", course_id.as_str(), "lessons"])
            .await?;
        wires
            .into_iter()
            .map(|wire| map_lesson("GET /courses/{id}/lessons", wire))
            .collect()
    }

    async fn get_lesson(
        &self,
        course_id: &CourseId,
        lesson_id: &LessonId,
    ) -> Result<Lesson, GatewayError> {
        let wire: LessonWire = self
            .get_json(&["courses", course_id.as_str(), "lessons", lesson_id.as_str()])
            .await?;
        let lesson = map_lesson("GET /courses/{cid}/lessons/{lid}", wire)?;
        // Reject a record that belongs to another course.
        lesson
            .ensure_course(course_id)
            .map_err(|e| GatewayError::malformed("GET /courses/{cid}/lessons/{lid}", e))?;
        Ok(lesson)
    }
}
