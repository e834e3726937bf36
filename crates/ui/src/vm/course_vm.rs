use coursehub_core::model::{Course, CourseId, LessonId};
use services::CourseOverview;

/// One entry of the course catalogue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseCardVm {
    pub id: CourseId,
    pub title: String,
    pub description: String,
}

#[must_use]
pub fn map_course_cards(courses: &[Course]) -> Vec<CourseCardVm> {
    courses
        .iter()
        .map(|course| CourseCardVm {
            id: course.id().clone(),
            title: course.title().to_owned(),
            description: course.description().to_owned(),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonRowVm {
    pub id: LessonId,
    pub position: usize,
    pub title: String,
    pub completed: bool,
}

/// Progress bar state. Width is clamped to 0..=100.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressBarVm {
    pub width_percent: u8,
    pub label: String,
    /// "N of M lessons", counted over the rows shown.
    pub lessons_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseDetailVm {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub lessons: Vec<LessonRowVm>,
    /// `None` when signed out or progress could not be loaded.
    pub progress: Option<ProgressBarVm>,
}

#[must_use]
pub fn map_course_detail(overview: &CourseOverview) -> CourseDetailVm {
    let lessons = overview
        .lessons
        .iter()
        .enumerate()
        .map(|(index, lesson)| LessonRowVm {
            id: lesson.id().clone(),
            position: index + 1,
            title: lesson.title().to_owned(),
            completed: overview.is_lesson_complete(lesson.id()),
        })
        .collect::<Vec<_>>();

    let done = lessons.iter().filter(|row| row.completed).count();
    let progress = overview.progress.as_ref().map(|progress| {
        let percent = progress.display_percent();
        ProgressBarVm {
            width_percent: percent,
            label: format!("{percent}% complete"),
            lessons_label: format!("{done} of {} lessons", lessons.len()),
        }
    });

    CourseDetailVm {
        id: overview.course.id().clone(),
        title: overview.course.title().to_owned(),
        description: overview.course.description().to_owned(),
        lessons,
        progress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::BTreeMap;

    use coursehub_core::model::{Lesson, LessonContent, Progress, UserId};

    fn overview(progress: Option<Progress>) -> CourseOverview {
        let course = Course::new(CourseId::new("c1"), "Rust", "Systems", UserId::new("i"));
        let lessons = ["intro", "borrow"]
            .iter()
            .enumerate()
            .map(|(i, id)| {
                Lesson::new(
                    LessonId::new(*id),
                    CourseId::new("c1"),
                    id.to_uppercase(),
                    LessonContent::parse(""),
                    i32::try_from(i).unwrap(),
                )
            })
            .collect();
        CourseOverview {
            course,
            lessons,
            progress,
        }
    }

    #[test]
    fn rows_follow_overview_order_with_checkmarks() {
        let mut done = BTreeMap::new();
        done.insert(LessonId::new("borrow"), true);
        let vm = map_course_detail(&overview(Some(Progress::new(done, 50.0))));
        assert_eq!(vm.lessons[0].title, "INTRO");
        assert_eq!(vm.lessons[0].position, 1);
        assert!(!vm.lessons[0].completed);
        assert!(vm.lessons[1].completed);
        let bar = vm.progress.unwrap();
        assert_eq!(bar.width_percent, 50);
        assert_eq!(bar.label, "50% complete");
        assert_eq!(bar.lessons_label, "1 of 2 lessons");
    }

    #[test]
    fn out_of_range_percentage_is_clamped_for_the_bar() {
        let vm = map_course_detail(&overview(Some(Progress::new(BTreeMap::new(), 140.0))));
        assert_eq!(vm.progress.unwrap().width_percent, 100);
    }

    #[test]
    fn missing_progress_hides_the_bar() {
        let vm = map_course_detail(&overview(None));
        assert!(vm.progress.is_none());
        assert!(vm.lessons.iter().all(|row| !row.completed));
    }
}
