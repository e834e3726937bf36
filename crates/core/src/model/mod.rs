mod course;
mod ids;
mod lesson;
mod progress;
mod quiz;
mod user;

pub use ids::{CourseId, LessonId, QuizId, UserId};

pub use course::Course;
pub use lesson::{
    Lesson, LessonContent, LessonError, Paragraph, ensure_unique_order, sort_lessons,
};
pub use progress::{Progress, is_lesson_complete};
pub use quiz::{Quiz, QuizError, QuizQuestion};
pub use user::{AccessToken, User};
