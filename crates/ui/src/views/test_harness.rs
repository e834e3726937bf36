use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use gateway::{AuthSession, Gateway, InMemoryGateway};
use services::{
    AppServices, AuthService, CourseService, LessonService, QuizService, VisitTracker, demo,
};

use crate::context::{UiApp, build_app_context};
use crate::views::{CourseDetailView, CoursesView, DashboardView, LessonView, LoginView};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn course_service(&self) -> Arc<CourseService> {
        self.services.course_service()
    }

    fn lesson_service(&self) -> Arc<LessonService> {
        self.services.lesson_service()
    }

    fn quiz_service(&self) -> Arc<QuizService> {
        self.services.quiz_service()
    }

    fn auth_service(&self) -> Arc<AuthService> {
        self.services.auth_service()
    }

    fn visits(&self) -> VisitTracker {
        self.services.visits()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Courses,
    CourseDetail(&'static str),
    Lesson(&'static str, &'static str),
    Dashboard,
    Login,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Courses => rsx! { CoursesView {} },
        ViewKind::CourseDetail(course_id) => rsx! {
            CourseDetailView { course_id: course_id.to_owned() }
        },
        ViewKind::Lesson(course_id, lesson_id) => rsx! {
            LessonView { course_id: course_id.to_owned(), lesson_id: lesson_id.to_owned() }
        },
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::Login => rsx! { LoginView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub backend: InMemoryGateway,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Build, then let pending resources resolve.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Seeded demo backend, signed out.
pub fn demo_backend() -> InMemoryGateway {
    let backend = InMemoryGateway::new(AuthSession::anonymous());
    demo::seed(&backend).expect("seed demo data");
    backend
}

pub async fn sign_in_demo(backend: &InMemoryGateway) {
    let services = AppServices::from_gateway(
        &Gateway::in_memory(backend.clone()),
        backend.session().clone(),
    );
    services
        .auth_service()
        .login(demo::DEMO_EMAIL, demo::DEMO_PASSWORD)
        .await
        .expect("demo login");
}

pub fn setup_view_harness(view: ViewKind, backend: InMemoryGateway) -> ViewHarness {
    let services = AppServices::from_gateway(
        &Gateway::in_memory(backend.clone()),
        backend.session().clone(),
    );
    let app = Arc::new(TestApp { services });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom, backend }
}
