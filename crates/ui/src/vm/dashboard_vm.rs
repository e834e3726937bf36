use coursehub_core::model::{Course, User};

use crate::vm::{CourseCardVm, map_course_cards};

/// Signed-in landing page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardVm {
    pub greeting: String,
    pub courses: Vec<CourseCardVm>,
}

#[must_use]
pub fn map_dashboard(user: &User, courses: &[Course]) -> DashboardVm {
    DashboardVm {
        greeting: format!("Welcome back, {}!", user.username),
        courses: map_course_cards(courses),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use coursehub_core::model::{CourseId, UserId};

    #[test]
    fn greets_by_username_and_keeps_catalogue_order() {
        let user = User {
            id: UserId::new("u1"),
            username: "ada".into(),
            email: "ada@example.com".into(),
        };
        let courses = vec![
            Course::new(CourseId::new("b"), "Beta", "", UserId::new("i")),
            Course::new(CourseId::new("a"), "Alpha", "", UserId::new("i")),
        ];
        let vm = map_dashboard(&user, &courses);
        assert_eq!(vm.greeting, "Welcome back, ada!");
        let titles: Vec<_> = vm.courses.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["Beta", "Alpha"]);
    }
}
