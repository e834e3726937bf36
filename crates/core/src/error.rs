use thiserror::Error;

use crate::model::{LessonError, QuizError};
use crate::quiz::QuizSessionError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Lesson(#[from] LessonError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    QuizSession(#[from] QuizSessionError),
}
