use dioxus::prelude::*;
use dioxus_router::Link;

use coursehub_core::model::CourseId;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{CourseDetailVm, ProgressBarVm, map_course_detail};

#[component]
pub fn CourseDetailView(course_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let courses = ctx.course_service();

    let resource = use_resource(use_reactive!(|course_id| {
        let courses = courses.clone();
        async move {
            let overview = courses
                .overview(&CourseId::new(course_id))
                .await
                .map_err(|err| ViewError::from(&err))?;
            Ok::<_, ViewError>(map_course_detail(&overview))
        }
    }));

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(detail) => rsx! {
                    CourseDetailBody { detail }
                },
                ViewState::Error(ViewError::NotFound) => rsx! {
                    h2 { "Course not found" }
                    Link { to: Route::Courses {}, "Back to courses" }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    if err.is_retryable() {
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| {
                                let mut resource = resource;
                                resource.restart();
                            },
                            "Retry"
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn CourseDetailBody(detail: CourseDetailVm) -> Element {
    let course_id = detail.id.to_string();
    rsx! {
        header { class: "view-header",
            h2 { class: "view-title", "{detail.title}" }
            p { class: "view-subtitle", "{detail.description}" }
        }
        if let Some(bar) = detail.progress.clone() {
            ProgressBar { bar }
        }
        div { class: "view-divider" }
        if detail.lessons.is_empty() {
            p { "This course has no lessons yet." }
        } else {
            ol { class: "lesson-list",
                for row in detail.lessons {
                    li {
                        key: "{row.id}",
                        class: if row.completed { "lesson-row lesson-row--done" } else { "lesson-row" },
                        Link {
                            to: Route::Lesson {
                                course_id: course_id.clone(),
                                lesson_id: row.id.to_string(),
                            },
                            "{row.position}. {row.title}"
                        }
                        if row.completed {
                            span { class: "lesson-check", aria_label: "completed", "✓" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ProgressBar(bar: ProgressBarVm) -> Element {
    rsx! {
        div { class: "progress",
            div { class: "progress-track",
                div {
                    class: "progress-fill",
                    style: "width: {bar.width_percent}%",
                }
            }
            span { class: "progress-label", "{bar.label}" }
            span { class: "progress-count", "{bar.lessons_label}" }
        }
    }
}
