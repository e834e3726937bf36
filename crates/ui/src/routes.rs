use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator};

use crate::context::{AppContext, SignedIn};
use crate::views::{CourseDetailView, CoursesView, DashboardView, LessonView, LoginView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", CoursesView)] Courses {},
        #[route("/courses/:course_id", CourseDetailView)] CourseDetail { course_id: String },
        #[route("/courses/:course_id/lessons/:lesson_id", LessonView)]
        Lesson { course_id: String, lesson_id: String },
        #[route("/dashboard", DashboardView)] Dashboard {},
        #[route("/login", LoginView)] Login {},
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let auth = ctx.auth_service();
    let mut signed_in = use_signal(|| SignedIn(auth.is_authenticated()));
    use_context_provider(|| signed_in);

    // A token handed in at startup may already be expired.
    use_future(move || {
        let auth = auth.clone();
        async move {
            if !auth.is_authenticated() {
                return;
            }
            match auth.current_user().await {
                Ok(Some(_)) => {}
                Ok(None) => signed_in.set(SignedIn(false)),
                Err(err) => tracing::warn!(error = %err, "could not confirm session"),
            }
        }
    });

    rsx! {
        div { class: "app",
            TopBar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn TopBar() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let auth = ctx.auth_service();
    let mut signed_in = use_context::<Signal<SignedIn>>();
    let SignedIn(is_signed_in) = signed_in();

    rsx! {
        nav { class: "topbar",
            h1 { "CourseHub" }
            ul {
                li { Link { to: Route::Courses {}, "Courses" } }
                if is_signed_in {
                    li { Link { to: Route::Dashboard {}, "Dashboard" } }
                    li {
                        button {
                            class: "btn btn-link",
                            r#type: "button",
                            onclick: move |_| {
                                if let Err(err) = auth.logout() {
                                    tracing::warn!(error = %err, "logout failed");
                                }
                                signed_in.set(SignedIn(false));
                                navigator.push(Route::Courses {});
                            },
                            "Log out"
                        }
                    }
                } else {
                    li { Link { to: Route::Login {}, "Log in" } }
                }
            }
        }
    }
}
