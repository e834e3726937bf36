use std::sync::Arc;

use crate::model::Quiz;

use super::answers::AnswerSet;
use super::error::{IndexKind, QuizSessionError};
use super::score::QuizResult;

//
// ─── OPERATIONS ────────────────────────────────────────────────────────────────
//

/// Starts an attempt: one unanswered slot per question.
///
/// # Errors
///
/// Returns `QuizSessionError::InvalidQuiz` if the quiz has no questions.
pub fn load_quiz(quiz: &Quiz) -> Result<AnswerSet, QuizSessionError> {
    if !quiz.is_presentable() {
        return Err(QuizSessionError::InvalidQuiz);
    }
    Ok(AnswerSet::unanswered(quiz.question_count()))
}

/// Returns a copy of `answers` with `question` set to `option`.
///
/// # Errors
///
/// Returns `QuizSessionError::IndexOutOfRange` if either index does not address
/// a question of `quiz` or an option of that question.
pub fn select_answer(
    quiz: &Quiz,
    answers: &AnswerSet,
    question: usize,
    option: usize,
) -> Result<AnswerSet, QuizSessionError> {
    let len = answers.len().min(quiz.question_count());
    let Some(q) = quiz.question(question).filter(|_| question < len) else {
        return Err(QuizSessionError::IndexOutOfRange {
            kind: IndexKind::Question,
            index: question,
            len,
        });
    };
    if option >= q.option_count() {
        return Err(QuizSessionError::IndexOutOfRange {
            kind: IndexKind::Option,
            index: option,
            len: q.option_count(),
        });
    }
    Ok(answers.with_selection(question, option))
}

#[must_use]
pub fn can_submit(answers: &AnswerSet) -> bool {
    answers.is_complete()
}

/// Grades a complete attempt against the answer key.
///
/// Correctness is by option index; option text is never compared.
///
/// # Errors
///
/// Returns `QuizSessionError::IncompleteAttempt` if any question is unanswered,
/// and `QuizSessionError::InvalidQuiz` if the answer set was not built for this quiz.
pub fn submit(quiz: &Quiz, answers: &AnswerSet) -> Result<QuizResult, QuizSessionError> {
    if answers.len() != quiz.question_count() || !quiz.is_presentable() {
        return Err(QuizSessionError::InvalidQuiz);
    }
    if !can_submit(answers) {
        return Err(QuizSessionError::IncompleteAttempt {
            unanswered: answers.unanswered_count(),
        });
    }

    let flags = quiz
        .questions()
        .iter()
        .zip(answers.slots())
        .map(|(question, slot)| slot.is_some_and(|option| question.is_correct(option)))
        .collect();
    Ok(QuizResult::from_flags(flags))
}

//
// ─── STATE MACHINE ─────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Unstarted,
    InProgress,
    Submitted,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuizAction {
    /// Begin a fresh attempt. Allowed from any phase.
    Load(Arc<Quiz>),
    Select { question: usize, option: usize },
    Submit,
}

/// Immutable snapshot of one quiz attempt.
///
/// Transitions go through [`QuizState::apply`]; a rejected action leaves the
/// current state untouched because the caller still owns it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QuizState {
    #[default]
    Unstarted,
    InProgress {
        quiz: Arc<Quiz>,
        answers: AnswerSet,
    },
    Submitted {
        quiz: Arc<Quiz>,
        answers: AnswerSet,
        result: QuizResult,
    },
}

impl QuizState {
    /// Shorthand for `QuizState::Unstarted.apply(QuizAction::Load(quiz))`.
    ///
    /// # Errors
    ///
    /// Returns `QuizSessionError::InvalidQuiz` if the quiz has no questions.
    pub fn start(quiz: Arc<Quiz>) -> Result<Self, QuizSessionError> {
        Self::Unstarted.apply(QuizAction::Load(quiz))
    }

    /// Pure transition function.
    ///
    /// # Errors
    ///
    /// Returns `NotStarted` for selections or submits before a load,
    /// `AlreadySubmitted` for anything but a load after submission, and the
    /// errors of [`load_quiz`], [`select_answer`] and [`submit`] otherwise.
    pub fn apply(&self, action: QuizAction) -> Result<Self, QuizSessionError> {
        match (self, action) {
            (_, QuizAction::Load(quiz)) => {
                let answers = load_quiz(&quiz)?;
                Ok(Self::InProgress { quiz, answers })
            }
            (Self::Unstarted, _) => Err(QuizSessionError::NotStarted),
            (Self::Submitted { .. }, _) => Err(QuizSessionError::AlreadySubmitted),
            (Self::InProgress { quiz, answers }, QuizAction::Select { question, option }) => {
                let answers = select_answer(quiz, answers, question, option)?;
                Ok(Self::InProgress {
                    quiz: Arc::clone(quiz),
                    answers,
                })
            }
            (Self::InProgress { quiz, answers }, QuizAction::Submit) => {
                let result = submit(quiz, answers)?;
                Ok(Self::Submitted {
                    quiz: Arc::clone(quiz),
                    answers: answers.clone(),
                    result,
                })
            }
        }
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        match self {
            Self::Unstarted => QuizPhase::Unstarted,
            Self::InProgress { .. } => QuizPhase::InProgress,
            Self::Submitted { .. } => QuizPhase::Submitted,
        }
    }

    #[must_use]
    pub fn quiz(&self) -> Option<&Quiz> {
        match self {
            Self::Unstarted => None,
            Self::InProgress { quiz, .. } | Self::Submitted { quiz, .. } => Some(quiz),
        }
    }

    #[must_use]
    pub fn answers(&self) -> Option<&AnswerSet> {
        match self {
            Self::Unstarted => None,
            Self::InProgress { answers, .. } | Self::Submitted { answers, .. } => Some(answers),
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<&QuizResult> {
        match self {
            Self::Submitted { result, .. } => Some(result),
            _ => None,
        }
    }

    /// True only while in progress with every question answered.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        match self {
            Self::InProgress { answers, .. } => can_submit(answers),
            _ => false,
        }
    }
}
