use thiserror::Error;

use crate::model::ids::{LessonId, QuizId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("question has no options")]
    NoOptions,

    #[error("correct option {index} is out of range for {len} options")]
    CorrectOptionOutOfRange { index: usize, len: usize },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A multiple-choice question with its answer key.
///
/// Options are addressed by position only. Two options may carry the same text
/// and are still distinct choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    text: String,
    options: Vec<String>,
    correct_option: usize,
}

impl QuizQuestion {
    /// # Errors
    ///
    /// Returns `QuizError::NoOptions` for an empty option list and
    /// `QuizError::CorrectOptionOutOfRange` if the key does not index an option.
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        correct_option: usize,
    ) -> Result<Self, QuizError> {
        if options.is_empty() {
            return Err(QuizError::NoOptions);
        }
        if correct_option >= options.len() {
            return Err(QuizError::CorrectOptionOutOfRange {
                index: correct_option,
                len: options.len(),
            });
        }
        Ok(Self {
            text: text.into(),
            options,
            correct_option,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn correct_option(&self) -> usize {
        self.correct_option
    }

    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_option
    }
}

//
// ─── QUIZ ──────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    id: QuizId,
    lesson_id: LessonId,
    title: String,
    questions: Vec<QuizQuestion>,
}

impl Quiz {
    #[must_use]
    pub fn new(
        id: QuizId,
        lesson_id: LessonId,
        title: impl Into<String>,
        questions: Vec<QuizQuestion>,
    ) -> Self {
        Self {
            id,
            lesson_id,
            title: title.into(),
            questions,
        }
    }

    #[must_use]
    pub fn id(&self) -> &QuizId {
        &self.id
    }

    #[must_use]
    pub fn lesson_id(&self) -> &LessonId {
        &self.lesson_id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&QuizQuestion> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// A quiz can only be shown to a learner if it has at least one question.
    #[must_use]
    pub fn is_presentable(&self) -> bool {
        !self.questions.is_empty()
    }
}
