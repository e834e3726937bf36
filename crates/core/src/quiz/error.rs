use std::fmt;

use thiserror::Error;

/// Which index of a selection was out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    Question,
    Option,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKind::Question => f.write_str("question"),
            IndexKind::Option => f.write_str("option"),
        }
    }
}

/// Misuse of a quiz attempt.
///
/// Normal interaction never produces these: the view only offers valid
/// choices and keeps submit disabled until every question is answered.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizSessionError {
    #[error("quiz has no questions")]
    InvalidQuiz,

    #[error("{kind} index {index} is out of range (0..{len})")]
    IndexOutOfRange {
        kind: IndexKind,
        index: usize,
        len: usize,
    },

    #[error("attempt is incomplete: {unanswered} question(s) unanswered")]
    IncompleteAttempt { unanswered: usize },

    #[error("attempt was already submitted")]
    AlreadySubmitted,

    #[error("no quiz has been loaded")]
    NotStarted,
}
