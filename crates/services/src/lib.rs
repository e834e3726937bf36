#![forbid(unsafe_code)]

pub mod app_services;
pub mod auth_service;
pub mod course_service;
pub mod demo;
pub mod error;
pub mod lesson_service;
pub mod progress_tracker;
pub mod quiz_service;
pub mod visit;

pub use app_services::AppServices;
pub use auth_service::AuthService;
pub use course_service::{CourseOverview, CourseService};
pub use error::{
    AppServicesError, AuthError, CourseServiceError, LessonServiceError, ProgressError,
    QuizFlowError,
};
pub use lesson_service::{LessonService, LessonVisit};
pub use progress_tracker::ProgressTracker;
pub use quiz_service::QuizService;
pub use visit::{VisitTicket, VisitTracker};
