use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::{AppContext, SignedIn};
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{CourseCardVm, DashboardVm, map_dashboard};

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = ctx.auth_service();
    let courses = ctx.course_service();
    let signed_in = try_use_context::<Signal<SignedIn>>();

    let resource = use_resource(move || {
        let auth = auth.clone();
        let courses = courses.clone();
        async move {
            let Some(user) = auth
                .current_user()
                .await
                .map_err(|err| ViewError::from(&err))?
            else {
                if let Some(mut flag) = signed_in {
                    flag.set(SignedIn(false));
                }
                return Ok(None);
            };
            let list = courses
                .list_courses()
                .await
                .map_err(|err| ViewError::from(&err))?;
            Ok::<_, ViewError>(Some(map_dashboard(&user, &list)))
        }
    });

    let state = view_state_from_resource(resource);
    let sign_in_prompt = ViewError::Unauthorized.message();

    rsx! {
        div { class: "page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading your courses..." }
                },
                ViewState::Ready(Some(dashboard)) => rsx! {
                    DashboardBody { dashboard }
                },
                ViewState::Ready(None) => rsx! {
                    h2 { class: "view-title", "Dashboard" }
                    p { "{sign_in_prompt}" }
                    Link { to: Route::Login {}, "Log in" }
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
fn DashboardBody(dashboard: DashboardVm) -> Element {
    rsx! {
        header { class: "view-header",
            h2 { class: "view-title", "Dashboard" }
            p { class: "view-subtitle", "{dashboard.greeting}" }
        }
        div { class: "view-divider" }
        h3 { "Your Courses" }
        if dashboard.courses.is_empty() {
            p { "You haven't enrolled in any courses yet." }
            Link { class: "btn btn-primary", to: Route::Courses {}, "Browse Courses" }
        } else {
            ul { class: "course-grid",
                for card in dashboard.courses {
                    DashboardCard { key: "{card.id}", card }
                }
            }
        }
    }
}

#[component]
fn DashboardCard(card: CourseCardVm) -> Element {
    rsx! {
        li { class: "course-card",
            h3 { "{card.title}" }
            p { class: "course-description", "{card.description}" }
            Link {
                class: "btn btn-primary",
                to: Route::CourseDetail { course_id: card.id.to_string() },
                "Continue Learning"
            }
        }
    }
}
