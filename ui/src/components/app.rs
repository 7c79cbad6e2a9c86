use dioxus::prelude::*;

use super::auth::{use_auth_session, AuthSession};
use super::login_view::LoginView;
use super::notifications::{use_notice_coroutine, Notice, NotificationTray};
use super::schedule_page::SchedulePage;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Schedule {},
    #[route("/login")]
    Login {},
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(AuthSession::restore()));
    use_context_provider(|| Signal::new(Vec::<Notice>::new()));
    use_notice_coroutine();

    rsx! { Router::<Route> {} }
}

#[component]
fn AppLayout() -> Element {
    let mut auth = use_auth_session();
    let nav = use_navigator();

    let logged_in = auth.read().is_logged_in();

    rsx! {
        div { class: "drivecheck-app",
            header { class: "app-header",
                div { class: "header-top",
                    h1 { "DRIVECHECK" }
                    div { class: "session-info",
                        if logged_in {
                            span { class: "session-badge", "Signed in" }
                            button {
                                class: "btn-logout",
                                onclick: move |_| {
                                    auth.write().log_out();
                                    tracing::info!("Signed out");
                                },
                                "Sign Out"
                            }
                        } else {
                            button {
                                class: "btn-login-link",
                                onclick: move |_| {
                                    nav.push(Route::Login {});
                                },
                                "Login"
                            }
                        }
                    }
                }
                p { "Pre-Purchase Vehicle Inspections" }
            }
            NotificationTray {}
            main {
                Outlet::<Route> {}
            }
        }
    }
}

/// Route component: renders the scheduling page.
#[component]
fn Schedule() -> Element {
    rsx! { SchedulePage {} }
}

/// Route component: renders the login view.
#[component]
fn Login() -> Element {
    rsx! { LoginView {} }
}
