use thiserror::Error;

use crate::model::ids::{CourseId, LessonId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error("lesson order {order} is already used in course {course_id}")]
    DuplicateOrder { course_id: CourseId, order: i32 },

    #[error("lesson {lesson_id} belongs to course {actual}, not {expected}")]
    CourseMismatch {
        lesson_id: LessonId,
        expected: CourseId,
        actual: CourseId,
    },
}

//
// ─── CONTENT ───────────────────────────────────────────────────────────────────
//

/// Lesson body as plain structured text.
///
/// A blank line separates paragraphs; a single newline is a line break inside
/// a paragraph. Markup is never interpreted here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LessonContent {
    raw: String,
    paragraphs: Vec<Paragraph>,
}

/// One paragraph of lesson text, split into display lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    lines: Vec<String>,
}

impl Paragraph {
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl LessonContent {
    #[must_use]
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = raw.replace("\r\n", "\n");

        let mut paragraphs = Vec::new();
        let mut current: Vec<String> = Vec::new();
        for line in normalized.split('\n') {
            if line.trim().is_empty() {
                if !current.is_empty() {
                    paragraphs.push(Paragraph {
                        lines: std::mem::take(&mut current),
                    });
                }
                continue;
            }
            current.push(line.trim_end().to_owned());
        }
        if !current.is_empty() {
            paragraphs.push(Paragraph { lines: current });
        }

        Self { raw, paragraphs }
    }

    /// The text exactly as received from the server.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}

//
// ─── LESSON ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    id: LessonId,
    course_id: CourseId,
    title: String,
    content: LessonContent,
    order: i32,
}

impl Lesson {
    #[must_use]
    pub fn new(
        id: LessonId,
        course_id: CourseId,
        title: impl Into<String>,
        content: LessonContent,
        order: i32,
    ) -> Self {
        Self {
            id,
            course_id,
            title: title.into(),
            content,
            order,
        }
    }

    #[must_use]
    pub fn id(&self) -> &LessonId {
        &self.id
    }

    #[must_use]
    pub fn course_id(&self) -> &CourseId {
        &self.course_id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> &LessonContent {
        &self.content
    }

    #[must_use]
    pub fn order(&self) -> i32 {
        self.order
    }

    /// Checks that the lesson is filed under the expected course.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::CourseMismatch` when the course references differ.
    pub fn ensure_course(&self, expected: &CourseId) -> Result<(), LessonError> {
        if &self.course_id == expected {
            return Ok(());
        }
        Err(LessonError::CourseMismatch {
            lesson_id: self.id.clone(),
            expected: expected.clone(),
            actual: self.course_id.clone(),
        })
    }
}

/// Sorts lessons into reading sequence.
///
/// Ties on `order` fall back to the id so the sequence is stable across fetches.
pub fn sort_lessons(lessons: &mut [Lesson]) {
    lessons.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.id.cmp(&b.id)));
}

/// Checks that no two lessons of a course share an `order` value.
///
/// # Errors
///
/// Returns `LessonError::DuplicateOrder` for the first repeated value found.
pub fn ensure_unique_order<'a>(
    lessons: impl IntoIterator<Item = &'a Lesson>,
) -> Result<(), LessonError> {
    let mut seen = std::collections::HashSet::new();
    for lesson in lessons {
        if !seen.insert((lesson.course_id.clone(), lesson.order)) {
            return Err(LessonError::DuplicateOrder {
                course_id: lesson.course_id.clone(),
                order: lesson.order,
            });
        }
    }
    Ok(())
}
