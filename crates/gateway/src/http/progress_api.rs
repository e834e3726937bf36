use async_trait::async_trait;
use coursehub_core::model::{CourseId, LessonId, Progress};

use super::HttpGateway;
use super::wire::{ProgressUpdateRequest, ProgressWire, map_progress};
use crate::api::{GatewayError, ProgressGateway};

#[async_trait]
impl ProgressGateway for HttpGateway {
    async fn get_progress(&self, course_id: &CourseId) -> Result<Progress, GatewayError> {
        self.require_auth()?;
        let wire: ProgressWire = self
            .get_json(&["courses", course_id.as_str(), "progress"])
            .await?;
        map_progress("GET /courses/{id}/progress", wire)
    }

    async fn set_lesson_progress(
        &self,
        course_id: &CourseId,
        lesson_id: &LessonId,
        completed: bool,
    ) -> Result<Progress, GatewayError> {
        self.require_auth()?;
        let wire: ProgressWire = self
            .post_json(
                &["courses", course_id.as_str(), "progress"],
                &ProgressUpdateRequest {
                    lesson_id,
                    completed,
                },
            )
            .await?;
        map_progress("POST /courses/{id}/progress", wire)
    }
}
