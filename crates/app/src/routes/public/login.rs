use dioxus::prelude::*;
use shared_types::{AppError, Role};
use shared_ui::{Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Input};
use std::collections::HashMap;

use crate::auth::{sign_in, use_auth};

#[component]
pub fn CustomerLogin() -> Element {
    rsx! {
        LoginForm {
            surface: Role::Customer,
            title: "Sign in",
            description: "Access your bookings and results.",
        }
    }
}

#[component]
pub fn AdminLogin() -> Element {
    rsx! {
        LoginForm {
            surface: Role::HcsAdmin,
            title: "Centre admin sign in",
            description: "Manage your healthcare centre.",
        }
    }
}

#[component]
pub fn SuperadminLogin() -> Element {
    rsx! {
        LoginForm {
            surface: Role::Superadmin,
            title: "Operator sign in",
            description: "Platform administration.",
        }
    }
}

/// Email / password form for one login surface.
///
/// The server refuses accounts whose role does not match `surface`.
#[component]
fn LoginForm(surface: Role, title: String, description: String) -> Element {
    let auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    // Already signed in on this surface: go straight to the dashboard
    let current_role = auth.role();
    use_effect(use_reactive((&current_role,), move |(role,)| {
        if role == Some(surface) {
            navigator().replace(surface.dashboard_path().to_string());
        }
    }));

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        match server::api::login(email(), password(), surface).await {
            Ok(user) => {
                let target = user.role.dashboard_path().to_string();
                sign_in(auth, user);
                navigator().replace(target);
            }
            Err(e) => {
                let err = AppError::recover(&e);
                tracing::error!(error = %err, surface = %surface, "Login failed");
                if err.field_errors.is_empty() {
                    error_msg.set(Some(err.user_message()));
                } else {
                    field_errors.set(err.field_errors);
                }
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "{title}" }
                    CardDescription { "{description}" }
                }
                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", role: "alert", "{err}" }
                    }
                    form { class: "auth-form", onsubmit: handle_login,
                        Input {
                            label: "Email",
                            input_type: "email",
                            placeholder: "you@example.com",
                            value: email(),
                            error: field_errors.read().get("email").cloned(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            value: password(),
                            error: field_errors.read().get("password").cloned(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Button {
                            button_type: "submit",
                            busy: loading(),
                            class: "auth-submit",
                            "Sign in"
                        }
                    }
                }
            }
        }
    }
}
