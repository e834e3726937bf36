use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use coursehub_core::model::{
    AccessToken, Course, CourseId, Lesson, LessonError, LessonId, Progress, Quiz, QuizId, User,
    UserId, ensure_unique_order,
};

use crate::api::{
    AttemptReceipt, AuthGateway, CourseGateway, Gateway, GatewayError, LessonGateway, NewAccount,
    ProgressGateway, QuizGateway,
};
use crate::session::AuthSession;

/// An attempt recorded through `QuizGateway::submit_attempt`.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedAttempt {
    pub user_id: UserId,
    pub quiz_id: QuizId,
    pub answers: Vec<i64>,
    pub score: f64,
}

#[derive(Debug, Clone)]
struct Account {
    user: User,
    password: String,
}

#[derive(Default)]
struct State {
    courses: BTreeMap<CourseId, Course>,
    lessons: BTreeMap<CourseId, Vec<Lesson>>,
    quizzes: BTreeMap<LessonId, Vec<Quiz>>,
    accounts: BTreeMap<String, Account>,
    tokens: HashMap<String, UserId>,
    progress: HashMap<(UserId, CourseId), BTreeMap<LessonId, bool>>,
    attempts: Vec<RecordedAttempt>,
    calls: HashMap<&'static str, usize>,
    failures: HashMap<&'static str, GatewayError>,
    next_id: u64,
}

impl State {
    fn issue_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }

    fn lesson(&self, course_id: &CourseId, lesson_id: &LessonId) -> Result<&Lesson, GatewayError> {
        if !self.courses.contains_key(course_id) {
            return Err(GatewayError::NotFound);
        }
        self.lessons
            .get(course_id)
            .and_then(|lessons| lessons.iter().find(|l| l.id() == lesson_id))
            .ok_or(GatewayError::NotFound)
    }

    fn progress_for(&self, user_id: &UserId, course_id: &CourseId) -> Progress {
        let Some(completed) = self.progress.get(&(user_id.clone(), course_id.clone())) else {
            return Progress::empty();
        };
        let total = self.lessons.get(course_id).map_or(0, Vec::len);
        let done = completed.values().filter(|done| **done).count();
        #[allow(clippy::cast_precision_loss)]
        let overall = if total == 0 {
            0.0
        } else {
            done as f64 / total as f64 * 100.0
        };
        Progress::new(completed.clone(), overall)
    }
}

/// Gateway backed by process memory, used by tests and the demo binary.
///
/// Mirrors the REST API's observable behavior: lessons are scoped to their
/// course, progress and attempts require a signed-in user, and overall progress
/// is `completed / lessons * 100`. Clones share state.
#[derive(Clone, Default)]
pub struct InMemoryGateway {
    state: Arc<Mutex<State>>,
    session: AuthSession,
}

impl InMemoryGateway {
    #[must_use]
    pub fn new(session: AuthSession) -> Self {
        Self {
            state: Arc::default(),
            session,
        }
    }

    #[must_use]
    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, GatewayError> {
        self.state
            .lock()
            .map_err(|e| GatewayError::Transport(e.to_string()))
    }

    /// Counts the call and returns the injected failure for `operation`, if any.
    fn enter(&self, operation: &'static str) -> Result<MutexGuard<'_, State>, GatewayError> {
        let mut state = self.lock()?;
        *state.calls.entry(operation).or_default() += 1;
        if let Some(err) = state.failures.get(operation) {
            return Err(err.clone());
        }
        Ok(state)
    }

    fn current_user_id(&self, state: &State) -> Result<UserId, GatewayError> {
        let token = self.session.token()?.ok_or(GatewayError::Unauthorized)?;
        state
            .tokens
            .get(token.secret())
            .cloned()
            .ok_or(GatewayError::Unauthorized)
    }

    /// # Errors
    ///
    /// Returns `GatewayError::Transport` if the state lock is poisoned.
    pub fn insert_course(&self, course: Course) -> Result<(), GatewayError> {
        let mut state = self.lock()?;
        state.lessons.entry(course.id().clone()).or_default();
        state.courses.insert(course.id().clone(), course);
        Ok(())
    }

    /// Adds a lesson to its course, keeping `order` unique within the course.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::DuplicateOrder` if the course already has a lesson
    /// at that position.
    pub fn insert_lesson(&self, lesson: Lesson) -> Result<(), SeedError> {
        let mut state = self.lock()?;
        let lessons = state.lessons.entry(lesson.course_id().clone()).or_default();
        lessons.retain(|existing| existing.id() != lesson.id());
        ensure_unique_order(lessons.iter().chain(std::iter::once(&lesson)))?;
        lessons.push(lesson);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `GatewayError::Transport` if the state lock is poisoned.
    pub fn insert_quiz(&self, quiz: Quiz) -> Result<(), GatewayError> {
        let mut state = self.lock()?;
        let quizzes = state.quizzes.entry(quiz.lesson_id().clone()).or_default();
        quizzes.retain(|existing| existing.id() != quiz.id());
        quizzes.push(quiz);
        Ok(())
    }

    /// Registers an account directly, bypassing uniqueness checks.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Transport` if the state lock is poisoned.
    pub fn insert_account(&self, user: User, password: &str) -> Result<(), GatewayError> {
        let mut state = self.lock()?;
        state.accounts.insert(
            user.email.clone(),
            Account {
                user,
                password: password.to_owned(),
            },
        );
        Ok(())
    }

    /// Make every later call to `operation` fail with `error`.
    ///
    /// `operation` is the trait method name, e.g. `"get_progress"`.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Transport` if the state lock is poisoned.
    pub fn fail_on(&self, operation: &'static str, error: GatewayError) -> Result<(), GatewayError> {
        self.lock()?.failures.insert(operation, error);
        Ok(())
    }

    /// Number of times `operation` was invoked, including failed calls.
    #[must_use]
    pub fn calls(&self, operation: &str) -> usize {
        self.lock()
            .map(|state| state.calls.get(operation).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    /// # Errors
    ///
    /// Returns `GatewayError::Transport` if the state lock is poisoned.
    pub fn attempts(&self) -> Result<Vec<RecordedAttempt>, GatewayError> {
        Ok(self.lock()?.attempts.clone())
    }
}

/// Errors from seeding the in-memory backend.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error(transparent)]
    Lesson(#[from] LessonError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

#[async_trait]
impl CourseGateway for InMemoryGateway {
    async fn list_courses(&self) -> Result<Vec<Course>, GatewayError> {
        let state = self.enter("list_courses")?;
        Ok(state.courses.values().cloned().collect())
    }

    async fn get_course(&self, id: &CourseId) -> Result<Course, GatewayError> {
        let state = self.enter("get_course")?;
        state.courses.get(id).cloned().ok_or(GatewayError::NotFound)
    }
}

#[async_trait]
impl LessonGateway for InMemoryGateway {
    async fn list_lessons_by_course(
        &self,
        course_id: &CourseId,
    ) -> Result<Vec<Lesson>, GatewayError> {
        let state = self.enter("list_lessons_by_course")?;
        if !state.courses.contains_key(course_id) {
            return Err(GatewayError::NotFound);
        }
        Ok(state.lessons.get(course_id).cloned().unwrap_or_default())
    }

    async fn get_lesson(
        &self,
        course_id: &CourseId,
        lesson_id: &LessonId,
    ) -> Result<Lesson, GatewayError> {
        let state = self.enter("get_lesson")?;
        state.lesson(course_id, lesson_id).cloned()
    }
}

#[async_trait]
impl QuizGateway for InMemoryGateway {
    async fn get_quizzes_for_lesson(
        &self,
        course_id: &CourseId,
        lesson_id: &LessonId,
    ) -> Result<Vec<Quiz>, GatewayError> {
        let state = self.enter("get_quizzes_for_lesson")?;
        state.lesson(course_id, lesson_id)?;
        Ok(state.quizzes.get(lesson_id).cloned().unwrap_or_default())
    }

    async fn submit_attempt(
        &self,
        course_id: &CourseId,
        lesson_id: &LessonId,
        quiz_id: &QuizId,
        answers: &[i64],
    ) -> Result<AttemptReceipt, GatewayError> {
        let mut state = self.enter("submit_attempt")?;
        let user_id = self.current_user_id(&state)?;
        state.lesson(course_id, lesson_id)?;
        let quiz = state
            .quizzes
            .get(lesson_id)
            .and_then(|quizzes| quizzes.iter().find(|q| q.id() == quiz_id))
            .ok_or(GatewayError::NotFound)?;
        if answers.len() != quiz.question_count() {
            return Err(GatewayError::Rejected {
                status: 422,
                detail: format!(
                    "expected {} answers, got {}",
                    quiz.question_count(),
                    answers.len()
                ),
            });
        }
        let correct = quiz
            .questions()
            .iter()
            .zip(answers)
            .filter(|(question, answer)| {
                usize::try_from(**answer).is_ok_and(|index| question.is_correct(index))
            })
            .count();
        #[allow(clippy::cast_precision_loss)]
        let score = correct as f64 / quiz.question_count().max(1) as f64 * 100.0;

        let id = state.issue_id("attempt");
        state.attempts.push(RecordedAttempt {
            user_id,
            quiz_id: quiz_id.clone(),
            answers: answers.to_vec(),
            score,
        });
        Ok(AttemptReceipt {
            id: Some(id),
            score: Some(score),
        })
    }
}

#[async_trait]
impl ProgressGateway for InMemoryGateway {
    async fn get_progress(&self, course_id: &CourseId) -> Result<Progress, GatewayError> {
        let state = self.enter("get_progress")?;
        let user_id = self.current_user_id(&state)?;
        if !state.courses.contains_key(course_id) {
            return Err(GatewayError::NotFound);
        }
        Ok(state.progress_for(&user_id, course_id))
    }

    async fn set_lesson_progress(
        &self,
        course_id: &CourseId,
        lesson_id: &LessonId,
        completed: bool,
    ) -> Result<Progress, GatewayError> {
        let mut state = self.enter("set_lesson_progress")?;
        let user_id = self.current_user_id(&state)?;
        state.lesson(course_id, lesson_id)?;
        state
            .progress
            .entry((user_id.clone(), course_id.clone()))
            .or_default()
            .insert(lesson_id.clone(), completed);
        Ok(state.progress_for(&user_id, course_id))
    }
}

#[async_trait]
impl AuthGateway for InMemoryGateway {
    async fn login(&self, email: &str, password: &str) -> Result<AccessToken, GatewayError> {
        let mut state = self.enter("login")?;
        let user_id = match state.accounts.get(email) {
            Some(account) if account.password == password => account.user.id.clone(),
            _ => return Err(GatewayError::Unauthorized),
        };
        let secret = state.issue_id("token");
        state.tokens.insert(secret.clone(), user_id);
        AccessToken::new(secret).ok_or(GatewayError::Unauthorized)
    }

    async fn register(&self, account: &NewAccount) -> Result<User, GatewayError> {
        let mut state = self.enter("register")?;
        if state.accounts.contains_key(&account.email) {
            return Err(GatewayError::Rejected {
                status: 400,
                detail: "Email already registered".into(),
            });
        }
        if state
            .accounts
            .values()
            .any(|existing| existing.user.username == account.username)
        {
            return Err(GatewayError::Rejected {
                status: 400,
                detail: "Username already taken".into(),
            });
        }
        let user = User {
            id: UserId::new(state.issue_id("user")),
            username: account.username.clone(),
            email: account.email.clone(),
        };
        state.accounts.insert(
            account.email.clone(),
            Account {
                user: user.clone(),
                password: account.password.clone(),
            },
        );
        Ok(user)
    }

    async fn current_user(&self) -> Result<User, GatewayError> {
        let state = self.enter("current_user")?;
        let user_id = self.current_user_id(&state)?;
        state
            .accounts
            .values()
            .find(|account| account.user.id == user_id)
            .map(|account| account.user.clone())
            .ok_or(GatewayError::Unauthorized)
    }
}

impl Gateway {
    /// Build a `Gateway` over a shared in-memory backend.
    #[must_use]
    pub fn in_memory(backend: InMemoryGateway) -> Self {
        Self::from_backend(backend)
    }
}
