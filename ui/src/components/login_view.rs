use dioxus::prelude::*;

use super::app::Route;
use super::auth::use_auth_session;
use super::notifications::{use_notifier, NoticeRequest};
use super::order_api;

/// Credential form for the login route. Token issuance is the backend's
/// job; this view only stores the returned token through the shared
/// session signal, which updates every mounted reader.
#[component]
pub fn LoginView() -> Element {
    let mut auth = use_auth_session();
    let notifier = use_notifier();
    let nav = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let can_submit = use_memo(move || {
        !username.read().trim().is_empty()
            && !password.read().is_empty()
            && !*submitting.read()
    });

    if auth.read().is_logged_in() {
        return rsx! {
            div { class: "login-view",
                p { "You are already signed in." }
                button {
                    onclick: move |_| {
                        nav.replace(Route::Schedule {});
                    },
                    "Back to Booking"
                }
            }
        };
    }

    let submit = move |_| {
        let user = username.read().trim().to_string();
        let pass = password.read().clone();
        if user.is_empty() || pass.is_empty() {
            return;
        }
        submitting.set(true);
        spawn(async move {
            match order_api::wasm::log_in(&user, &pass).await {
                Ok(token) => {
                    auth.write().log_in(token);
                    tracing::info!("Signed in as {user}");
                    notifier.send(NoticeRequest::Success {
                        title: "Signed In".to_string(),
                        lines: vec![format!("Welcome back, {user}")],
                    });
                    nav.replace(Route::Schedule {});
                }
                Err(message) => {
                    notifier.send(NoticeRequest::Error { body: message });
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "login-view",
            h2 { "Login" }
            p { "Sign in to book an inspection." }

            div { class: "form-group",
                label { "Username" }
                input {
                    r#type: "text",
                    placeholder: "Your username",
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }
            }

            div { class: "form-group",
                label { "Password" }
                input {
                    r#type: "password",
                    placeholder: "Your password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
            }

            button {
                class: "btn-login",
                disabled: !can_submit(),
                onclick: submit,
                if *submitting.read() {
                    "Signing in..."
                } else {
                    "Sign In"
                }
            }
        }
    }
}
