//! In-lesson quiz attempt: answer collection, scoring, and the attempt state machine.

mod answers;
mod error;
mod score;
mod session;

pub use answers::{AnswerSet, UNANSWERED};
pub use error::{IndexKind, QuizSessionError};
pub use score::{QuizResult, Score};
pub use session::{
    QuizAction, QuizPhase, QuizState, can_submit, load_quiz, select_answer, submit,
};
