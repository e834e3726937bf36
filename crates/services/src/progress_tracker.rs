use std::sync::Arc;

use coursehub_core::model::{CourseId, LessonId, Progress};
use gateway::{AuthSession, ProgressGateway};

use crate::error::ProgressError;

/// Reads and writes per-course completion records for the signed-in user.
///
/// Every call is skipped while the session is anonymous.
#[derive(Clone)]
pub struct ProgressTracker {
    progress: Arc<dyn ProgressGateway>,
    session: AuthSession,
}

impl ProgressTracker {
    #[must_use]
    pub fn new(progress: Arc<dyn ProgressGateway>, session: AuthSession) -> Self {
        Self { progress, session }
    }

    /// Progress for display. Failures are logged and read as "no progress".
    pub async fn fetch_progress(&self, course_id: &CourseId) -> Option<Progress> {
        match self.try_fetch_progress(course_id).await {
            Ok(progress) => progress,
            Err(err) => {
                tracing::warn!(course_id = %course_id, error = %err, "progress unavailable");
                None
            }
        }
    }

    /// Like [`fetch_progress`](Self::fetch_progress) but surfaces gateway errors.
    ///
    /// Returns `Ok(None)` without calling the gateway when signed out.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Gateway` if the progress endpoint fails.
    pub async fn try_fetch_progress(
        &self,
        course_id: &CourseId,
    ) -> Result<Option<Progress>, ProgressError> {
        if !self.session.is_authenticated() {
            tracing::debug!(course_id = %course_id, "signed out; progress not requested");
            return Ok(None);
        }
        let progress = self.progress.get_progress(course_id).await?;
        Ok(Some(progress))
    }

    /// Record a lesson as completed. Repeating the call is harmless.
    ///
    /// Returns `Ok(None)` without calling the gateway when signed out.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Gateway` if the update is refused or fails.
    pub async fn mark_lesson_complete(
        &self,
        course_id: &CourseId,
        lesson_id: &LessonId,
    ) -> Result<Option<Progress>, ProgressError> {
        if !self.session.is_authenticated() {
            return Ok(None);
        }
        let progress = self
            .progress
            .set_lesson_progress(course_id, lesson_id, true)
            .await?;
        tracing::info!(
            course_id = %course_id,
            lesson_id = %lesson_id,
            overall = progress.overall_percent(),
            "lesson marked complete"
        );
        Ok(Some(progress))
    }

    /// False for missing progress or an unset lesson. Never fails.
    #[must_use]
    pub fn is_lesson_complete(progress: Option<&Progress>, lesson_id: &LessonId) -> bool {
        coursehub_core::model::is_lesson_complete(progress, lesson_id)
    }
}
