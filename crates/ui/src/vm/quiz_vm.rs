use std::sync::Arc;

use coursehub_core::model::Quiz;
use coursehub_core::quiz::{QuizAction, QuizPhase, QuizSessionError, QuizState};

/// User intents dispatched by the quiz panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select { question: usize, option: usize },
    Submit,
    /// Start a fresh attempt of the same quiz.
    Retry,
}

/// How an option is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Neutral,
    Selected,
    /// The answer key, after submission.
    Correct,
    /// The user's choice when it was wrong, after submission.
    WrongChoice,
}

impl OptionMark {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Neutral => "quiz-option",
            Self::Selected => "quiz-option quiz-option--selected",
            Self::Correct => "quiz-option quiz-option--correct",
            Self::WrongChoice => "quiz-option quiz-option--wrong",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub label: String,
    pub mark: OptionMark,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub index: usize,
    pub text: String,
    pub options: Vec<OptionVm>,
    /// Per-question verdict once submitted.
    pub correct: Option<bool>,
}

/// What the panel should do after an intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizStep {
    /// State changed locally; re-render.
    Updated,
    /// Nothing to do: the intent was ignored.
    Ignored,
    /// Caller must run the submit flow with the current state.
    SubmitRequested,
}

/// Quiz panel state: the reducer state plus the in-flight submit flag.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizVm {
    state: QuizState,
    submitting: bool,
}

impl QuizVm {
    #[must_use]
    pub fn new(state: QuizState) -> Self {
        Self {
            state,
            submitting: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> &QuizState {
        &self.state
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.state.quiz().map(Quiz::title)
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.state.phase() == QuizPhase::Submitted
    }

    /// Submit button enablement.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.submitting && self.state.can_submit()
    }

    #[must_use]
    pub fn score_label(&self) -> Option<String> {
        let score = self.state.result()?.score();
        Some(format!(
            "Score: {score} ({} of {} correct)",
            score.correct(),
            score.total()
        ))
    }

    /// Remaining unanswered count while in progress.
    #[must_use]
    pub fn unanswered(&self) -> usize {
        match self.state.phase() {
            QuizPhase::InProgress => self
                .state
                .answers()
                .map_or(0, coursehub_core::quiz::AnswerSet::unanswered_count),
            _ => 0,
        }
    }

    /// Status line next to the Submit button.
    #[must_use]
    pub fn action_hint(&self) -> Option<String> {
        if self.submitting {
            return Some("Submitting...".to_owned());
        }
        match self.unanswered() {
            0 => None,
            n => Some(format!("{n} unanswered")),
        }
    }

    /// Apply an intent. Selections are ignored while a submit is in flight.
    ///
    /// # Errors
    ///
    /// Returns the reducer error for invalid selections or a retry with no quiz.
    pub fn dispatch(&mut self, intent: QuizIntent) -> Result<QuizStep, QuizSessionError> {
        if self.submitting {
            return Ok(QuizStep::Ignored);
        }
        match intent {
            QuizIntent::Select { question, option } => {
                self.state = self.state.apply(QuizAction::Select { question, option })?;
                Ok(QuizStep::Updated)
            }
            QuizIntent::Submit => {
                if !self.state.can_submit() {
                    return Ok(QuizStep::Ignored);
                }
                self.submitting = true;
                Ok(QuizStep::SubmitRequested)
            }
            QuizIntent::Retry => {
                let quiz = match &self.state {
                    QuizState::InProgress { quiz, .. } | QuizState::Submitted { quiz, .. } => {
                        Arc::clone(quiz)
                    }
                    QuizState::Unstarted => return Err(QuizSessionError::NotStarted),
                };
                self.state = self.state.apply(QuizAction::Load(quiz))?;
                Ok(QuizStep::Updated)
            }
        }
    }

    /// Finish an in-flight submit with the graded state, or release the lock on failure.
    pub fn finish_submit(&mut self, graded: Option<QuizState>) {
        if let Some(state) = graded {
            self.state = state;
        }
        self.submitting = false;
    }

    #[must_use]
    pub fn questions(&self) -> Vec<QuestionVm> {
        let Some(quiz) = self.state.quiz() else {
            return Vec::new();
        };
        let answers = self.state.answers();
        let result = self.state.result();

        quiz.questions()
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let selected = answers.and_then(|a| a.selection(index));
                let options = question
                    .options()
                    .iter()
                    .enumerate()
                    .map(|(option, label)| OptionVm {
                        index: option,
                        label: label.clone(),
                        mark: option_mark(
                            result.is_some(),
                            selected == Some(option),
                            question.is_correct(option),
                        ),
                    })
                    .collect();
                QuestionVm {
                    index,
                    text: question.text().to_owned(),
                    options,
                    correct: result.map(|r| r.is_correct(index)),
                }
            })
            .collect()
    }
}

fn option_mark(submitted: bool, selected: bool, is_key: bool) -> OptionMark {
    match (submitted, selected, is_key) {
        (false, true, _) => OptionMark::Selected,
        (false, false, _) => OptionMark::Neutral,
        (true, _, true) => OptionMark::Correct,
        (true, true, false) => OptionMark::WrongChoice,
        (true, false, false) => OptionMark::Neutral,
    }
}
