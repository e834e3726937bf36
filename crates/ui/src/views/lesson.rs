use dioxus::prelude::*;
use dioxus_router::Link;

use coursehub_core::model::{CourseId, LessonId};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{LessonVm, OptionVm, QuestionVm, QuizIntent, QuizStep, QuizVm, map_lesson};

#[component]
pub fn LessonView(course_id: String, lesson_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let lessons = ctx.lesson_service();
    let visits = ctx.visits();
    let quiz = use_signal(|| None::<QuizVm>);
    let quiz_error = use_signal(|| None::<String>);

    let resource = use_resource(use_reactive!(|course_id, lesson_id| {
        let lessons = lessons.clone();
        let ticket = visits.begin(format!("/courses/{course_id}/lessons/{lesson_id}"));
        let mut quiz = quiz;
        let mut quiz_error = quiz_error;
        async move {
            let visit = lessons
                .open_lesson(&CourseId::new(course_id), &LessonId::new(lesson_id))
                .await
                .map_err(|err| ViewError::from(&err))?;
            if ticket.is_current() {
                quiz.set(visit.has_quiz().then(|| QuizVm::new(visit.quiz.clone())));
                quiz_error.set(None);
            } else {
                tracing::debug!(visit = ticket.key(), "discarding superseded lesson load");
            }
            Ok::<_, ViewError>(map_lesson(&visit))
        }
    }));

    let state = view_state_from_resource(resource);
    let back = Route::CourseDetail {
        course_id: course_id.clone(),
    };

    rsx! {
        div { class: "page lesson-page",
            Link { class: "back-link", to: back, "← Back to course" }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(lesson) => rsx! {
                    LessonBody { lesson }
                    QuizPanel {
                        course_id: course_id.clone(),
                        lesson_id: lesson_id.clone(),
                        quiz,
                        quiz_error,
                    }
                },
                ViewState::Error(ViewError::NotFound) => rsx! {
                    h2 { "Lesson not found" }
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
fn LessonBody(lesson: LessonVm) -> Element {
    rsx! {
        header { class: "view-header",
            h2 { class: "view-title", "{lesson.title}" }
            if lesson.completed {
                span { class: "lesson-badge", "Completed" }
            }
        }
        article { class: "lesson-content",
            for paragraph in lesson.paragraphs {
                p {
                    for (i, line) in paragraph.into_iter().enumerate() {
                        if i > 0 {
                            br {}
                        }
                        "{line}"
                    }
                }
            }
        }
    }
}

#[component]
fn QuizPanel(
    course_id: String,
    lesson_id: String,
    quiz: Signal<Option<QuizVm>>,
    quiz_error: Signal<Option<String>>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_service = ctx.quiz_service();
    let mut quiz = quiz;
    let mut quiz_error = quiz_error;

    let dispatch = use_callback(move |intent: QuizIntent| {
        let outcome = {
            let mut guard = quiz.write();
            let Some(vm) = guard.as_mut() else {
                return;
            };
            vm.dispatch(intent).map(|step| (step, vm.state().clone()))
        };
        match outcome {
            Ok((QuizStep::SubmitRequested, state)) => {
                let quiz_service = quiz_service.clone();
                let course_id = CourseId::new(course_id.clone());
                let lesson_id = LessonId::new(lesson_id.clone());
                let mut quiz = quiz;
                let mut quiz_error = quiz_error;
                spawn(async move {
                    let graded = match quiz_service.submit(&course_id, &lesson_id, &state).await {
                        Ok(graded) => {
                            quiz_error.set(None);
                            Some(graded)
                        }
                        Err(err) => {
                            quiz_error.set(Some(err.to_string()));
                            None
                        }
                    };
                    if let Some(vm) = quiz.write().as_mut() {
                        vm.finish_submit(graded);
                    }
                });
            }
            Ok(_) => quiz_error.set(None),
            Err(err) => quiz_error.set(Some(err.to_string())),
        }
    });

    let Some(vm) = quiz() else {
        return rsx! {
            p { class: "quiz-empty", "No quiz for this lesson." }
        };
    };
    let title = vm.title().unwrap_or("Quiz").to_owned();
    let locked = vm.is_submitted() || vm.is_submitting();
    let can_submit = vm.can_submit();
    let submitted = vm.is_submitted();
    let hint = vm.action_hint();
    let score = vm.score_label();

    rsx! {
        section { class: "quiz",
            h3 { "{title}" }
            for question in vm.questions() {
                QuestionCard { key: "{question.index}", question, locked, dispatch }
            }
            if let Some(message) = quiz_error() {
                p { class: "quiz-error", "{message}" }
            }
            if let Some(score) = score {
                p { class: "quiz-score", "{score}" }
            }
            div { class: "quiz-actions",
                if submitted {
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| dispatch.call(QuizIntent::Retry),
                        "Try again"
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: !can_submit,
                        onclick: move |_| dispatch.call(QuizIntent::Submit),
                        "Submit"
                    }
                    if let Some(hint) = hint {
                        span { class: "quiz-hint", "{hint}" }
                    }
                }
            }
        }
    }
}

#[component]
fn QuestionCard(question: QuestionVm, locked: bool, dispatch: Callback<QuizIntent>) -> Element {
    let number = question.index + 1;
    let verdict = question.correct.map(|ok| if ok { "Correct" } else { "Incorrect" });
    rsx! {
        fieldset { class: "quiz-question",
            legend { "{number}. {question.text}" }
            for option in question.options {
                OptionButton {
                    key: "{option.index}",
                    question: question.index,
                    option,
                    locked,
                    dispatch,
                }
            }
            if let Some(verdict) = verdict {
                p { class: "quiz-verdict", "{verdict}" }
            }
        }
    }
}

#[component]
fn OptionButton(
    question: usize,
    option: OptionVm,
    locked: bool,
    dispatch: Callback<QuizIntent>,
) -> Element {
    let index = option.index;
    rsx! {
        button {
            class: option.mark.class(),
            r#type: "button",
            disabled: locked,
            onclick: move |_| dispatch.call(QuizIntent::Select { question, option: index }),
            "{option.label}"
        }
    }
}
