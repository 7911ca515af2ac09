//! Admin login page

use dioxus::prelude::*;

use crate::auth::{admin_login, server_error_message, use_admin_auth};
use crate::routes::Route;

/// Admin login page. `next` carries the path the admin originally requested
/// before the guard redirected here.
#[component]
pub fn AdminLogin(next: String) -> Element {
    let auth = use_admin_auth();
    let navigator = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    // Redirect if already authenticated
    if auth.is_authenticated() {
        let target = next.parse::<Route>().unwrap_or(Route::AdminDashboard {});
        navigator.replace(target);
        return rsx! {};
    }

    let next_after_login = next.clone();
    let handle_submit = move |_| {
        let user = username().trim().to_string();
        let pass = password();
        if user.is_empty() || pass.is_empty() {
            error.set(Some("Please enter your username and password".to_string()));
            return;
        }

        let next = next_after_login.clone();
        spawn(async move {
            is_pending.set(true);
            error.set(None);

            match admin_login(user, pass).await {
                Ok(_) => {
                    auth.refresh().await;
                    let target = next.parse::<Route>().unwrap_or(Route::AdminDashboard {});
                    navigator.push(target);
                }
                Err(err) => error.set(Some(server_error_message(&err))),
            }

            is_pending.set(false);
        });
    };

    rsx! {
        div {
            class: "min-h-screen bg-gray-100 flex items-center justify-center px-4",

            div {
                class: "bg-white rounded-lg shadow-md p-8 max-w-md w-full",

                div {
                    class: "mb-6 text-center",
                    h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Admin Login" }
                    p { class: "text-gray-600 text-sm", "Sign in to access the admin dashboard" }
                }

                if let Some(err) = error() {
                    div {
                        class: "mb-4 p-3 bg-red-50 border border-red-200 text-red-800 rounded text-sm",
                        "{err}"
                    }
                }

                form {
                    onsubmit: handle_submit,
                    div {
                        class: "mb-4",
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Username"
                        }
                        input {
                            r#type: "text",
                            value: "{username}",
                            oninput: move |e| {
                                username.set(e.value());
                                error.set(None);
                            },
                            placeholder: "Enter admin username",
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-emerald-500",
                            disabled: is_pending()
                        }
                    }
                    div {
                        class: "mb-6",
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Password"
                        }
                        input {
                            r#type: "password",
                            value: "{password}",
                            oninput: move |e| {
                                password.set(e.value());
                                error.set(None);
                            },
                            placeholder: "Enter admin password",
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-emerald-500",
                            disabled: is_pending()
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "w-full bg-gray-800 text-white py-2 px-4 rounded-md hover:bg-gray-900 focus:outline-none focus:ring-2 focus:ring-emerald-500 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: is_pending(),
                        if is_pending() { "Signing In..." } else { "Sign In" }
                    }
                }

                div {
                    class: "mt-4 text-center",
                    Link {
                        to: Route::Home {},
                        class: "text-sm text-gray-500 hover:text-gray-700",
                        "Back to Home"
                    }
                }
            }
        }
    }
}
