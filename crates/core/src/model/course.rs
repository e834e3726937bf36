use crate::model::ids::{CourseId, UserId};

/// A course as published by an instructor.
///
/// The id is fixed at construction; there is no setter for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: CourseId,
    title: String,
    description: String,
    instructor_id: UserId,
}

impl Course {
    #[must_use]
    pub fn new(
        id: CourseId,
        title: impl Into<String>,
        description: impl Into<String>,
        instructor_id: UserId,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            instructor_id,
        }
    }

    #[must_use]
    pub fn id(&self) -> &CourseId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn instructor_id(&self) -> &UserId {
        &self.instructor_id
    }
}
