use std::sync::Arc;

use coursehub_core::model::{CourseId, Lesson, LessonId, Progress};
use coursehub_core::quiz::QuizState;
use gateway::{LessonGateway, QuizGateway};

use crate::error::LessonServiceError;
use crate::progress_tracker::ProgressTracker;

/// Result of opening a lesson page.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonVisit {
    pub lesson: Lesson,
    /// `InProgress` with a fresh answer set, or `Unstarted` when the lesson
    /// has no presentable quiz.
    pub quiz: QuizState,
    /// True once the server has acknowledged the visit.
    pub completed: bool,
    pub progress: Option<Progress>,
}

impl LessonVisit {
    #[must_use]
    pub fn has_quiz(&self) -> bool {
        self.quiz.quiz().is_some()
    }
}

/// Opens lessons: content, first quiz, and the completion mark.
#[derive(Clone)]
pub struct LessonService {
    lessons: Arc<dyn LessonGateway>,
    quizzes: Arc<dyn QuizGateway>,
    progress: ProgressTracker,
}

impl LessonService {
    #[must_use]
    pub fn new(
        lessons: Arc<dyn LessonGateway>,
        quizzes: Arc<dyn QuizGateway>,
        progress: ProgressTracker,
    ) -> Self {
        Self {
            lessons,
            quizzes,
            progress,
        }
    }

    /// Load a lesson with its first presentable quiz and record the visit.
    ///
    /// Recording the visit is non-critical; failures are logged and leave
    /// `completed` false.
    ///
    /// # Errors
    ///
    /// Returns `LessonServiceError::Gateway` if the lesson or its quizzes cannot
    /// be fetched, and `LessonServiceError::Lesson` if the lesson is filed under
    /// another course.
    pub async fn open_lesson(
        &self,
        course_id: &CourseId,
        lesson_id: &LessonId,
    ) -> Result<LessonVisit, LessonServiceError> {
        let lesson = self.lessons.get_lesson(course_id, lesson_id).await?;
        lesson.ensure_course(course_id)?;

        let quizzes = self
            .quizzes
            .get_quizzes_for_lesson(course_id, lesson_id)
            .await?;
        let mut quiz = QuizState::Unstarted;
        for candidate in quizzes {
            if candidate.is_presentable() {
                quiz = QuizState::start(Arc::new(candidate))?;
                break;
            }
            tracing::warn!(
                quiz_id = %candidate.id(),
                lesson_id = %lesson_id,
                "skipping quiz without questions"
            );
        }

        let (completed, progress) = match self
            .progress
            .mark_lesson_complete(course_id, lesson_id)
            .await
        {
            Ok(Some(progress)) => (true, Some(progress)),
            Ok(None) => (false, None),
            Err(err) => {
                tracing::warn!(lesson_id = %lesson_id, error = %err, "could not mark lesson complete");
                (false, None)
            }
        };

        Ok(LessonVisit {
            lesson,
            quiz,
            completed,
            progress,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use coursehub_core::model::{
        AccessToken, Course, LessonContent, Quiz, QuizId, QuizQuestion, User, UserId,
    };
    use coursehub_core::quiz::QuizPhase;
    use gateway::{AuthGateway, AuthSession, GatewayError, InMemoryGateway};

    fn backend() -> InMemoryGateway {
        let backend = InMemoryGateway::new(AuthSession::anonymous());
        backend
            .insert_course(Course::new(CourseId::new("c1"), "Rust", "", UserId::new("i")))
            .unwrap();
        backend
            .insert_lesson(Lesson::new(
                LessonId::new("l1"),
                CourseId::new("c1"),
                "Intro",
                LessonContent::parse("Hello"),
                1,
            ))
            .unwrap();
        backend
            .insert_quiz(Quiz::new(QuizId::new("empty"), LessonId::new("l1"), "Empty", vec![]))
            .unwrap();
        backend
            .insert_quiz(Quiz::new(
                QuizId::new("real"),
                LessonId::new("l1"),
                "Real",
                vec![QuizQuestion::new("?", vec!["a".into(), "b".into()], 1).unwrap()],
            ))
            .unwrap();
        backend
    }

    fn service(backend: &InMemoryGateway) -> LessonService {
        LessonService::new(
            Arc::new(backend.clone()),
            Arc::new(backend.clone()),
            ProgressTracker::new(Arc::new(backend.clone()), backend.session().clone()),
        )
    }

    async fn sign_in(backend: &InMemoryGateway) {
        backend
            .insert_account(
                User {
                    id: UserId::new("u1"),
                    username: "ada".into(),
                    email: "ada@example.com".into(),
                },
                "pw",
            )
            .unwrap();
        let token: AccessToken = backend.login("ada@example.com", "pw").await.unwrap();
        backend.session().sign_in(token).unwrap();
    }

    #[tokio::test]
    async fn skips_empty_quiz_and_loads_next() {
        let backend = backend();
        let visit = service(&backend)
            .open_lesson(&CourseId::new("c1"), &LessonId::new("l1"))
            .await
            .unwrap();
        assert_eq!(visit.quiz.phase(), QuizPhase::InProgress);
        assert_eq!(visit.quiz.quiz().unwrap().id(), &QuizId::new("real"));
        assert!(!visit.completed);
        assert_eq!(backend.calls("set_lesson_progress"), 0);
    }

    #[tokio::test]
    async fn signed_in_visit_marks_completion() {
        let backend = backend();
        sign_in(&backend).await;
        let visit = service(&backend)
            .open_lesson(&CourseId::new("c1"), &LessonId::new("l1"))
            .await
            .unwrap();
        assert!(visit.completed);
        assert_eq!(visit.progress.unwrap().display_percent(), 100);
    }

    #[tokio::test]
    async fn completion_failure_does_not_block_the_lesson() {
        let backend = backend();
        sign_in(&backend).await;
        backend
            .fail_on("set_lesson_progress", GatewayError::Transport("offline".into()))
            .unwrap();
        let visit = service(&backend)
            .open_lesson(&CourseId::new("c1"), &LessonId::new("l1"))
            .await
            .unwrap();
        assert!(!visit.completed);
        assert!(visit.has_quiz());
    }

    #[tokio::test]
    async fn quiz_failure_is_critical() {
        let backend = backend();
        backend
            .fail_on("get_quizzes_for_lesson", GatewayError::Status(500))
            .unwrap();
        let err = service(&backend)
            .open_lesson(&CourseId::new("c1"), &LessonId::new("l1"))
            .await
            .unwrap_err();
        assert!(matches!(err, LessonServiceError::Gateway(GatewayError::Status(500))));
    }

    #[tokio::test]
    async fn unknown_lesson_is_not_found() {
        let backend = backend();
        let err = service(&backend)
            .open_lesson(&CourseId::new("c1"), &LessonId::new("zz"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
