use coursehub_core::model::LessonContent;
use services::LessonVisit;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonVm {
    pub title: String,
    /// Paragraphs of display lines.
    pub paragraphs: Vec<Vec<String>>,
    pub completed: bool,
}

#[must_use]
pub fn map_lesson(visit: &LessonVisit) -> LessonVm {
    LessonVm {
        title: visit.lesson.title().to_owned(),
        paragraphs: map_paragraphs(visit.lesson.content()),
        completed: visit.completed,
    }
}

fn map_paragraphs(content: &LessonContent) -> Vec<Vec<String>> {
    content
        .paragraphs()
        .iter()
        .map(|paragraph| paragraph.lines().to_vec())
        .collect()
}
