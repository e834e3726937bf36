mod course_detail;
mod courses;
mod dashboard;
mod lesson;
mod login;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use course_detail::CourseDetailView;
pub use courses::CoursesView;
pub use dashboard::DashboardView;
pub use lesson::LessonView;
pub use login::LoginView;
pub use state::{ViewError, ViewState, view_state_from_resource};
