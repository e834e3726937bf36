mod course_vm;
mod dashboard_vm;
mod lesson_vm;
mod quiz_vm;

pub use course_vm::{
    CourseCardVm, CourseDetailVm, LessonRowVm, ProgressBarVm, map_course_cards, map_course_detail,
};
pub use dashboard_vm::{DashboardVm, map_dashboard};
pub use lesson_vm::{LessonVm, map_lesson};
pub use quiz_vm::{OptionMark, OptionVm, QuestionVm, QuizIntent, QuizStep, QuizVm};
