//! Shared error types for the services crate.

use thiserror::Error;

use coursehub_core::model::LessonError;
use coursehub_core::quiz::QuizSessionError;
use gateway::{ConfigError, GatewayError, SeedError};

/// Errors emitted by `ProgressTracker`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Errors emitted by `CourseService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CourseServiceError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl CourseServiceError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Gateway(GatewayError::NotFound))
    }
}

/// Errors emitted by `LessonService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LessonServiceError {
    #[error(transparent)]
    Lesson(#[from] LessonError),
    #[error(transparent)]
    QuizSession(#[from] QuizSessionError),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl LessonServiceError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Gateway(GatewayError::NotFound))
    }
}

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizFlowError {
    #[error(transparent)]
    Session(#[from] QuizSessionError),
}

/// Errors emitted by `AuthService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("incorrect email or password")]
    InvalidCredentials,
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error(transparent)]
    Seed(#[from] SeedError),
    #[error(transparent)]
    Core(#[from] coursehub_core::Error),
    #[error(transparent)]
    Auth(#[from] AuthError),
}
