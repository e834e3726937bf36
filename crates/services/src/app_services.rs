use std::sync::Arc;

use coursehub_core::model::AccessToken;
use gateway::{AuthSession, Gateway, GatewayConfig, InMemoryGateway};

use crate::auth_service::AuthService;
use crate::course_service::CourseService;
use crate::demo;
use crate::error::AppServicesError;
use crate::lesson_service::LessonService;
use crate::progress_tracker::ProgressTracker;
use crate::quiz_service::QuizService;
use crate::visit::VisitTracker;

/// Assembles app-facing services around one gateway and auth session.
#[derive(Clone)]
pub struct AppServices {
    session: AuthSession,
    visits: VisitTracker,
    progress: Arc<ProgressTracker>,
    course_service: Arc<CourseService>,
    lesson_service: Arc<LessonService>,
    quiz_service: Arc<QuizService>,
    auth_service: Arc<AuthService>,
}

impl AppServices {
    #[must_use]
    pub fn from_gateway(gateway: &Gateway, session: AuthSession) -> Self {
        let progress = ProgressTracker::new(Arc::clone(&gateway.progress), session.clone());
        let course_service = Arc::new(CourseService::new(
            Arc::clone(&gateway.courses),
            Arc::clone(&gateway.lessons),
            progress.clone(),
        ));
        let lesson_service = Arc::new(LessonService::new(
            Arc::clone(&gateway.lessons),
            Arc::clone(&gateway.quizzes),
            progress.clone(),
        ));
        let quiz_service = Arc::new(QuizService::new(
            Arc::clone(&gateway.quizzes),
            session.clone(),
        ));
        let auth_service = Arc::new(AuthService::new(Arc::clone(&gateway.auth), session.clone()));

        Self {
            session,
            visits: VisitTracker::new(),
            progress: Arc::new(progress),
            course_service,
            lesson_service,
            quiz_service,
            auth_service,
        }
    }

    /// Build services backed by the REST API.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Gateway` if the HTTP client cannot be built.
    pub fn http(
        config: &GatewayConfig,
        token: Option<AccessToken>,
    ) -> Result<Self, AppServicesError> {
        let session = token.map_or_else(AuthSession::anonymous, AuthSession::with_token);
        let gateway = Gateway::http(config, session.clone())?;
        tracing::info!(
            api = %config.base_url,
            authenticated = session.is_authenticated(),
            "using REST backend"
        );
        Ok(Self::from_gateway(&gateway, session))
    }

    /// Build services over a seeded in-memory backend, signed in as the demo user.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if seeding or the demo sign-in fails.
    pub async fn demo() -> Result<Self, AppServicesError> {
        let backend = InMemoryGateway::new(AuthSession::anonymous());
        demo::seed(&backend)?;
        let session = backend.session().clone();
        let services = Self::from_gateway(&Gateway::in_memory(backend), session);
        services
            .auth_service
            .login(demo::DEMO_EMAIL, demo::DEMO_PASSWORD)
            .await?;
        tracing::info!("using seeded demo backend");
        Ok(services)
    }

    #[must_use]
    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    #[must_use]
    pub fn visits(&self) -> VisitTracker {
        self.visits.clone()
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressTracker> {
        Arc::clone(&self.progress)
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
}
