//! User login page: mobile-number entry, then OTP/TOTP code entry.
//!
//! The transitions live in [`crate::auth::flow::LoginFlow`]; this component
//! wires them to the server functions, the resend-cooldown ticker, and the
//! post-login navigation.

use dioxus::prelude::*;

use crate::auth::flow::{EnrollMode, LoginFlow, LoginStep};
use crate::auth::{request_otp, server_error_message, use_user_auth, verify_otp};
use crate::routes::Route;
use crate::timers::sleep_one_second;

#[component]
pub fn UserLogin(next: String) -> Element {
    let auth = use_user_auth();
    let navigator = use_navigator();

    let mut flow = use_signal(LoginFlow::new);
    let mut ticker = use_signal(|| None::<Task>);
    let mut show_qr = use_signal(|| false);

    // Redirect if already authenticated
    if auth.is_authenticated() {
        let target = next.parse::<Route>().unwrap_or(Route::UserDashboard {});
        navigator.replace(target);
        return rsx! {};
    }

    // One ticker at a time; the task is scoped to this component, so leaving
    // the page stops the countdown with it.
    let mut start_cooldown = move || {
        if let Some(task) = ticker.write().take() {
            task.cancel();
        }
        let task = spawn(async move {
            loop {
                sleep_one_second().await;
                if flow.write().tick() == 0 {
                    break;
                }
            }
        });
        ticker.set(Some(task));
    };

    let handle_phone_submit = move |_| {
        if flow.read().mobile().trim().is_empty() {
            flow.write().fail("Please enter your mobile number");
            return;
        }
        if !flow.write().begin_request() {
            return;
        }

        let mobile = flow.read().normalized_mobile();
        spawn(async move {
            match request_otp(mobile).await {
                Ok(challenge) => {
                    if flow.write().apply_challenge(&challenge) {
                        if flow.read().is_enrollment() {
                            show_qr.set(true);
                        }
                        start_cooldown();
                    }
                }
                Err(err) => flow.write().fail(server_error_message(&err)),
            }
        });
    };

    let next_after_verify = next.clone();
    let handle_code_submit = move |_| {
        if !flow.write().begin_verify() {
            return;
        }

        let mobile = flow.read().normalized_mobile();
        let code = flow.read().code().to_string();
        let next = next_after_verify.clone();
        spawn(async move {
            match verify_otp(mobile, code).await {
                Ok(_) => {
                    auth.refresh().await;
                    let target = next.parse::<Route>().unwrap_or(Route::UserDashboard {});
                    navigator.push(target);
                }
                Err(err) => flow.write().fail(server_error_message(&err)),
            }
        });
    };

    let handle_resend = move |_| {
        if !flow.write().begin_resend() {
            return;
        }

        let mobile = flow.read().normalized_mobile();
        spawn(async move {
            match request_otp(mobile).await {
                Ok(challenge) => {
                    if flow.write().apply_challenge(&challenge) {
                        if flow.read().is_enrollment() {
                            show_qr.set(true);
                        }
                        start_cooldown();
                    }
                }
                Err(err) => flow.write().fail(server_error_message(&err)),
            }
        });
    };

    let handle_reset = move |_| {
        if let Some(task) = ticker.write().take() {
            task.cancel();
        }
        flow.write().reset();
        show_qr.set(false);
    };

    // Snapshot the flow for rendering.
    let current = flow.read().clone();
    let mobile_value = current.mobile().to_string();
    let code_value = current.code().to_string();
    let cooldown = current.cooldown();
    let pending = current.is_pending();
    let error = current.error().map(str::to_string);
    let step = current.step();
    let enrollment = current.is_enrollment();
    let can_submit_mobile = current.can_submit_mobile();
    let can_submit_code = current.can_submit_code();
    let (qr_base64, secret) = match current.mode() {
        EnrollMode::FirstTime { qr_base64, secret } => (qr_base64.clone(), secret.clone()),
        EnrollMode::Returning => (None, None),
    };
    let subtitle = match step {
        LoginStep::PhoneEntry => "Enter your mobile number to sign in",
        LoginStep::CodeEntry => "Enter the 6-digit code from your authenticator app",
    };

    rsx! {
        div {
            class: "min-h-screen bg-gray-100 flex items-center justify-center px-4",

            div {
                class: "bg-white rounded-lg shadow-md p-8 max-w-md w-full",

                div {
                    class: "mb-6 text-center",
                    h1 { class: "text-2xl font-bold text-gray-900 mb-2", "User Login" }
                    p { class: "text-gray-600 text-sm", "{subtitle}" }
                }

                if let Some(err) = error {
                    div {
                        class: "mb-4 p-3 bg-red-50 border border-red-200 text-red-800 rounded text-sm",
                        "{err}"
                    }
                }

                match step {
                    LoginStep::PhoneEntry => rsx! {
                        form {
                            onsubmit: handle_phone_submit,
                            div {
                                class: "mb-4",
                                label {
                                    class: "block text-sm font-medium text-gray-700 mb-2",
                                    "Mobile Number"
                                }
                                input {
                                    r#type: "tel",
                                    value: "{mobile_value}",
                                    oninput: move |e| flow.write().set_mobile(&e.value()),
                                    placeholder: "Enter your mobile number",
                                    class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-emerald-500",
                                    disabled: pending
                                }
                                p {
                                    class: "mt-1 text-xs text-gray-500",
                                    "Enter your mobile number with country code (e.g. +1234567890)"
                                }
                            }
                            button {
                                r#type: "submit",
                                class: "w-full bg-emerald-600 text-white py-2 px-4 rounded-md hover:bg-emerald-700 focus:outline-none focus:ring-2 focus:ring-emerald-500 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed",
                                disabled: !can_submit_mobile,
                                if pending { "Requesting code..." } else { "Continue" }
                            }
                        }
                    },
                    LoginStep::CodeEntry => rsx! {
                        if show_qr() && enrollment {
                            div {
                                class: "mb-6 p-4 bg-emerald-50 border border-emerald-200 rounded text-center",
                                p {
                                    class: "text-sm text-gray-700 mb-3",
                                    "Scan this QR code with your authenticator app (like Google Authenticator or Authy):"
                                }
                                if let Some(qr) = qr_base64 {
                                    img {
                                        src: "{qr}",
                                        alt: "TOTP QR Code",
                                        class: "mx-auto mb-3 max-w-[200px]"
                                    }
                                }
                                if let Some(secret) = secret {
                                    p {
                                        class: "text-xs text-gray-500 mb-3",
                                        "Or manually enter this secret key: "
                                        code { class: "font-mono", "{secret}" }
                                    }
                                }
                                button {
                                    r#type: "button",
                                    class: "text-sm text-emerald-700 hover:text-emerald-800 font-medium",
                                    onclick: move |_| show_qr.set(false),
                                    "I've scanned the code"
                                }
                            }
                        }

                        form {
                            onsubmit: handle_code_submit,
                            div {
                                class: "mb-4",
                                label {
                                    class: "block text-sm font-medium text-gray-700 mb-2",
                                    "OTP Code"
                                }
                                input {
                                    r#type: "text",
                                    value: "{code_value}",
                                    oninput: move |e| flow.write().set_code(&e.value()),
                                    placeholder: "Enter 6-digit OTP",
                                    maxlength: "6",
                                    class: "w-full px-3 py-2 border border-gray-300 rounded-md text-center text-xl tracking-[0.5em] focus:outline-none focus:ring-2 focus:ring-emerald-500",
                                    disabled: pending
                                }
                            }
                            button {
                                r#type: "submit",
                                class: "w-full bg-emerald-600 text-white py-2 px-4 rounded-md hover:bg-emerald-700 focus:outline-none focus:ring-2 focus:ring-emerald-500 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed",
                                disabled: !can_submit_code,
                                if pending { "Verifying..." } else { "Verify & Login" }
                            }
                            div {
                                class: "mt-3 text-center",
                                button {
                                    r#type: "button",
                                    class: "text-sm text-emerald-700 hover:text-emerald-800 disabled:text-gray-400 disabled:cursor-not-allowed",
                                    onclick: handle_resend,
                                    disabled: cooldown > 0 || pending,
                                    if cooldown > 0 {
                                        "Resend in {cooldown}s"
                                    } else if enrollment {
                                        "Regenerate QR Code"
                                    } else {
                                        "Resend OTP"
                                    }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "mt-4 text-center",
                    match step {
                        LoginStep::PhoneEntry => rsx! {
                            Link {
                                to: Route::Home {},
                                class: "text-sm text-gray-500 hover:text-gray-700",
                                "Back to Home"
                            }
                        },
                        LoginStep::CodeEntry => rsx! {
                            button {
                                r#type: "button",
                                class: "text-sm text-gray-500 hover:text-gray-700",
                                onclick: handle_reset,
                                "Change Number"
                            }
                        }
                    }
                }
            }
        }
    }
}
