use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{CourseCardVm, map_course_cards};

#[component]
pub fn CoursesView() -> Element {
    let ctx = use_context::<AppContext>();
    let courses = ctx.course_service();

    let resource = use_resource(move || {
        let courses = courses.clone();
        async move {
            let list = courses
                .list_courses()
                .await
                .map_err(|err| ViewError::from(&err))?;
            Ok::<_, ViewError>(map_course_cards(&list))
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page",
            header { class: "view-header",
                h2 { class: "view-title", "Courses" }
            }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(cards) => rsx! {
                    if cards.is_empty() {
                        p { "No courses published yet." }
                    } else {
                        ul { class: "course-grid",
                            for card in cards {
                                CourseCard { key: "{card.id}", card }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
            }
        }
    }
}

#[component]
fn CourseCard(card: CourseCardVm) -> Element {
    rsx! {
        li { class: "course-card",
            Link { to: Route::CourseDetail { course_id: card.id.to_string() },
                h3 { "{card.title}" }
            }
            p { class: "course-description", "{card.description}" }
        }
    }
}
