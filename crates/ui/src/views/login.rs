use dioxus::prelude::*;
use dioxus_router::use_navigator;

use gateway::NewAccount;
use services::AuthError;

use crate::context::{AppContext, SignedIn};
use crate::routes::Route;
use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Login,
    Register,
}

fn auth_message(err: &AuthError) -> String {
    match err {
        AuthError::Gateway(_) => ViewError::from(err).message().to_owned(),
        other => other.to_string(),
    }
}

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let auth = ctx.auth_service();
    let signed_in = try_use_context::<Signal<SignedIn>>();

    let mut mode = use_signal(|| Mode::Login);
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut message = use_signal(|| None::<String>);

    let on_submit = move |_: MouseEvent| {
        if busy() {
            return;
        }
        let auth = auth.clone();
        let current_mode = mode();
        busy.set(true);
        spawn(async move {
            let mut busy = busy;
            let mut message = message;
            let mut mode = mode;
            let email_value = email();
            let password_value = password();
            match current_mode {
                Mode::Login => match auth.login(&email_value, &password_value).await {
                    Ok(_) => {
                        message.set(None);
                        if let Some(mut flag) = signed_in {
                            flag.set(SignedIn(true));
                        }
                        navigator.push(Route::Dashboard {});
                    }
                    Err(err) => message.set(Some(auth_message(&err))),
                },
                Mode::Register => {
                    let account = NewAccount {
                        username: username(),
                        email: email_value,
                        password: password_value,
                    };
                    match auth.register(&account).await {
                        Ok(_) => {
                            mode.set(Mode::Login);
                            message.set(Some("Account created. Log in to continue.".into()));
                        }
                        Err(err) => message.set(Some(auth_message(&err))),
                    }
                }
            }
            busy.set(false);
        });
    };

    let (title, action, switch_label, other) = match mode() {
        Mode::Login => ("Log in", "Log in", "Need an account? Register", Mode::Register),
        Mode::Register => ("Register", "Create account", "Have an account? Log in", Mode::Login),
    };

    rsx! {
        div { class: "page auth-page",
            h2 { class: "view-title", "{title}" }
            div { class: "auth-form",
                if mode() == Mode::Register {
                    label { "Username"
                        input {
                            r#type: "text",
                            value: "{username}",
                            oninput: move |evt| username.set(evt.value()),
                        }
                    }
                }
                label { "Email"
                    input {
                        r#type: "email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                label { "Password"
                    input {
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                if let Some(text) = message() {
                    p { class: "auth-message", "{text}" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: busy(),
                    onclick: on_submit,
                    "{action}"
                }
                button {
                    class: "btn btn-link",
                    r#type: "button",
                    onclick: move |_| {
                        mode.set(other);
                        message.set(None);
                    },
                    "{switch_label}"
                }
            }
        }
    }
}
