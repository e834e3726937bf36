use std::sync::Arc;

use services::{AuthService, CourseService, LessonService, QuizService, VisitTracker};

/// What the views need from the composition root.
pub trait UiApp: Send + Sync {
    fn course_service(&self) -> Arc<CourseService>;
    fn lesson_service(&self) -> Arc<LessonService>;
    fn quiz_service(&self) -> Arc<QuizService>;
    fn auth_service(&self) -> Arc<AuthService>;
    fn visits(&self) -> VisitTracker;
}

#[derive(Clone)]
pub struct AppContext {
    course_service: Arc<CourseService>,
    lesson_service: Arc<LessonService>,
    quiz_service: Arc<QuizService>,
    auth_service: Arc<AuthService>,
    visits: VisitTracker,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            course_service: app.course_service(),
            lesson_service: app.lesson_service(),
            quiz_service: app.quiz_service(),
            auth_service: app.auth_service(),
            visits: app.visits(),
        }
    }

    #[must_use]
    pub fn course_service(&self) -> Arc<CourseService> {
        Arc::clone(&self.course_service)
    }

    #[must_use]
    pub fn lesson_service(&self) -> Arc<LessonService> {
        Arc::clone(&self.lesson_service)
    }

    #[must_use]
    pub fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }

    #[must_use]
    pub fn auth_service(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth_service)
    }

    #[must_use]
    pub fn visits(&self) -> VisitTracker {
        self.visits.clone()
    }
}

/// Whether the top bar should offer "Log out". Provided as a `Signal` by the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignedIn(pub bool);

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
