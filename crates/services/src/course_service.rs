use std::sync::Arc;

use coursehub_core::model::{Course, CourseId, Lesson, LessonId, Progress, sort_lessons};
use gateway::{CourseGateway, LessonGateway};

use crate::error::CourseServiceError;
use crate::progress_tracker::ProgressTracker;

/// Everything the course page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseOverview {
    pub course: Course,
    /// Reading sequence: `order` ascending, ties by id.
    pub lessons: Vec<Lesson>,
    pub progress: Option<Progress>,
}

impl CourseOverview {
    #[must_use]
    pub fn is_lesson_complete(&self, lesson_id: &LessonId) -> bool {
        ProgressTracker::is_lesson_complete(self.progress.as_ref(), lesson_id)
    }

    /// Server-provided percentage rounded for display, if progress is known.
    #[must_use]
    pub fn progress_percent(&self) -> Option<u8> {
        self.progress.as_ref().map(Progress::display_percent)
    }
}

/// Course listing and the course page.
#[derive(Clone)]
pub struct CourseService {
    courses: Arc<dyn CourseGateway>,
    lessons: Arc<dyn LessonGateway>,
    progress: ProgressTracker,
}

impl CourseService {
    #[must_use]
    pub fn new(
        courses: Arc<dyn CourseGateway>,
        lessons: Arc<dyn LessonGateway>,
        progress: ProgressTracker,
    ) -> Self {
        Self {
            courses,
            lessons,
            progress,
        }
    }

    /// # Errors
    ///
    /// Returns `CourseServiceError::Gateway` if the listing cannot be fetched.
    pub async fn list_courses(&self) -> Result<Vec<Course>, CourseServiceError> {
        let courses = self.courses.list_courses().await?;
        tracing::debug!(count = courses.len(), "courses loaded");
        Ok(courses)
    }

    /// Course, its ordered lessons, and the user's progress.
    ///
    /// Progress is best effort and never fails the overview.
    ///
    /// # Errors
    ///
    /// Returns `CourseServiceError::Gateway` if the course or its lessons
    /// cannot be fetched.
    pub async fn overview(&self, course_id: &CourseId) -> Result<CourseOverview, CourseServiceError> {
        let course = self.courses.get_course(course_id).await?;
        let mut lessons = self.lessons.list_lessons_by_course(course_id).await?;
        lessons.retain(|lesson| match lesson.ensure_course(course_id) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "dropping lesson filed under another course");
                false
            }
        });
        sort_lessons(&mut lessons);
        let progress = self.progress.fetch_progress(course_id).await;

        Ok(CourseOverview {
            course,
            lessons,
            progress,
        })
    }
}
