use dioxus::prelude::*;
use gateway::GatewayError;
use services::{AuthError, CourseServiceError, LessonServiceError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    NotFound,
    Unauthorized,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::NotFound => "We couldn't find that page.",
            Self::Unauthorized => "Please log in to continue.",
            Self::Unknown => "Something went wrong. Please try again later.",
        }
    }

    #[must_use]
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::Unknown)
    }

    fn from_gateway(err: &GatewayError) -> Self {
        match err {
            GatewayError::NotFound => Self::NotFound,
            GatewayError::Unauthorized => Self::Unauthorized,
            _ => Self::Unknown,
        }
    }
}

impl From<&CourseServiceError> for ViewError {
    fn from(err: &CourseServiceError) -> Self {
        tracing::warn!(error = %err, "course page failed");
        match err {
            CourseServiceError::Gateway(inner) => Self::from_gateway(inner),
            _ => Self::Unknown,
        }
    }
}

impl From<&LessonServiceError> for ViewError {
    fn from(err: &LessonServiceError) -> Self {
        tracing::warn!(error = %err, "lesson page failed");
        match err {
            LessonServiceError::Gateway(inner) => Self::from_gateway(inner),
            LessonServiceError::Lesson(_) => Self::NotFound,
            _ => Self::Unknown,
        }
    }
}

impl From<&AuthError> for ViewError {
    fn from(err: &AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => Self::Unauthorized,
            AuthError::Gateway(inner) => Self::from_gateway(inner),
            _ => Self::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
