//! Admin user management: list, OTP-gated creation, verification, deletion.

use dioxus::prelude::*;
use portal_client::PortalUser;

use crate::auth::flow::{normalize_mobile, RESEND_COOLDOWN_SECS};
use crate::auth::server_error_message;
use crate::format::{format_date, format_mobile_display};
use crate::timers::sleep_one_second;

/// Admin users list page
#[component]
pub fn AdminUsers() -> Element {
    let mut users = use_server_future(fetch_users)?;

    // Add-user form. Creation is OTP-gated: an OTP goes to the new number
    // first, and the code comes back with the create request.
    let mut add_mobile = use_signal(String::new);
    let mut add_code = use_signal(String::new);
    let mut otp_sent = use_signal(|| false);
    let mut cooldown = use_signal(|| 0u32);
    let mut ticker = use_signal(|| None::<Task>);
    let mut pending = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    // Per-row verification for users who never completed their own login.
    let mut verifying = use_signal(|| None::<i64>);
    let mut verify_code = use_signal(String::new);
    let mut row_error = use_signal(|| None::<String>);

    let mut start_cooldown = move || {
        if let Some(task) = ticker.write().take() {
            task.cancel();
        }
        cooldown.set(RESEND_COOLDOWN_SECS);
        let task = spawn(async move {
            loop {
                sleep_one_second().await;
                let remaining = cooldown().saturating_sub(1);
                cooldown.set(remaining);
                if remaining == 0 {
                    break;
                }
            }
        });
        ticker.set(Some(task));
    };

    let handle_send_otp = move |_| {
        let mobile = normalize_mobile(&add_mobile());
        if mobile.is_empty() {
            error.set(Some("Please enter a mobile number".to_string()));
            return;
        }
        if pending() || cooldown() > 0 {
            return;
        }
        pending.set(true);
        error.set(None);
        spawn(async move {
            match send_user_otp(mobile).await {
                Ok(()) => {
                    otp_sent.set(true);
                    start_cooldown();
                }
                Err(err) => error.set(Some(server_error_message(&err))),
            }
            pending.set(false);
        });
    };

    let handle_create = move |_| {
        let mobile = normalize_mobile(&add_mobile());
        let code = add_code();
        if code.len() != 6 {
            error.set(Some("Please enter the 6-digit code".to_string()));
            return;
        }
        if pending() {
            return;
        }
        pending.set(true);
        error.set(None);
        spawn(async move {
            match create_user_with_otp(mobile, code).await {
                Ok(()) => {
                    add_mobile.set(String::new());
                    add_code.set(String::new());
                    otp_sent.set(false);
                    if let Some(task) = ticker.write().take() {
                        task.cancel();
                    }
                    cooldown.set(0);
                    users.restart();
                }
                Err(err) => error.set(Some(server_error_message(&err))),
            }
            pending.set(false);
        });
    };

    let handle_start_verify = move |(id, mobile): (i64, String)| {
        row_error.set(None);
        verify_code.set(String::new());
        spawn(async move {
            match send_user_otp(mobile).await {
                Ok(()) => verifying.set(Some(id)),
                Err(err) => row_error.set(Some(server_error_message(&err))),
            }
        });
    };

    let handle_confirm_verify = move |id: i64| {
        let code = verify_code();
        if code.len() != 6 {
            row_error.set(Some("Please enter the 6-digit code".to_string()));
            return;
        }
        spawn(async move {
            match verify_user(id, code).await {
                Ok(()) => {
                    verifying.set(None);
                    row_error.set(None);
                    users.restart();
                }
                Err(err) => row_error.set(Some(server_error_message(&err))),
            }
        });
    };

    let handle_delete = move |id: i64| {
        spawn(async move {
            match remove_user(id).await {
                Ok(()) => users.restart(),
                Err(err) => row_error.set(Some(server_error_message(&err))),
            }
        });
    };

    let cooldown_now = cooldown();
    let otp_sent_now = otp_sent();

    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Users" }

            // Add user
            div {
                class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6 mb-8",
                h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Add User" }

                if let Some(message) = error() {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-3 rounded-lg mb-4 text-sm",
                        "{message}"
                    }
                }

                div {
                    class: "flex flex-wrap items-end gap-3",
                    div {
                        label { class: "block text-sm text-gray-600 mb-1", "Mobile number" }
                        input {
                            r#type: "tel",
                            class: "border border-gray-300 rounded-lg px-3 py-2 w-56",
                            placeholder: "(555) 123-4567",
                            value: "{add_mobile}",
                            disabled: otp_sent_now,
                            oninput: move |evt| add_mobile.set(evt.value()),
                        }
                    }
                    if otp_sent_now {
                        div {
                            label { class: "block text-sm text-gray-600 mb-1", "OTP code" }
                            input {
                                r#type: "text",
                                inputmode: "numeric",
                                class: "border border-gray-300 rounded-lg px-3 py-2 w-32",
                                placeholder: "123456",
                                value: "{add_code}",
                                oninput: move |evt| {
                                    let digits: String =
                                        evt.value().chars().filter(|c| c.is_ascii_digit()).take(6).collect();
                                    add_code.set(digits);
                                },
                            }
                        }
                        button {
                            class: "px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 disabled:opacity-50",
                            disabled: pending(),
                            onclick: handle_create,
                            "Add User"
                        }
                        if cooldown_now > 0 {
                            button {
                                class: "px-4 py-2 bg-gray-100 text-gray-400 rounded-lg",
                                disabled: true,
                                "Resend in {cooldown_now}s"
                            }
                        } else {
                            button {
                                class: "px-4 py-2 bg-gray-100 text-gray-700 rounded-lg hover:bg-gray-200",
                                disabled: pending(),
                                onclick: handle_send_otp,
                                "Resend OTP"
                            }
                        }
                    } else {
                        button {
                            class: "px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 disabled:opacity-50",
                            disabled: pending(),
                            onclick: handle_send_otp,
                            "Send OTP"
                        }
                    }
                }
            }

            if let Some(message) = row_error() {
                div {
                    class: "bg-red-50 border border-red-200 text-red-700 p-3 rounded-lg mb-4 text-sm",
                    "{message}"
                }
            }

            match users.value().as_ref().as_deref() {
                Some(Ok(list)) if !list.is_empty() => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 overflow-x-auto",
                        table {
                            class: "min-w-full divide-y divide-gray-200",
                            thead {
                                tr {
                                    class: "text-left text-xs font-medium text-gray-500 uppercase",
                                    th { class: "px-4 py-3", "Mobile" }
                                    th { class: "px-4 py-3", "Status" }
                                    th { class: "px-4 py-3", "Created" }
                                    th { class: "px-4 py-3", "Last Login" }
                                    th { class: "px-4 py-3", "Actions" }
                                }
                            }
                            tbody {
                                class: "divide-y divide-gray-200",
                                for user in list.iter() {
                                    UserRow {
                                        user: user.clone(),
                                        verifying: verifying() == Some(user.id),
                                        verify_code,
                                        on_start_verify: handle_start_verify,
                                        on_confirm_verify: handle_confirm_verify,
                                        on_delete: handle_delete,
                                    }
                                }
                            }
                        }
                    }
                },
                Some(Ok(_)) => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-12 text-center",
                        p { class: "text-gray-500", "No users yet." }
                    }
                },
                Some(Err(e)) => rsx! {
                    div {
                        class: "bg-red-50 border border-red-200 text-red-700 p-4 rounded-lg",
                        "Error loading users: {e}"
                    }
                },
                None => rsx! {
                    div { class: "text-center py-12", "Loading..." }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct UserRowProps {
    user: PortalUser,
    verifying: bool,
    verify_code: Signal<String>,
    on_start_verify: EventHandler<(i64, String)>,
    on_confirm_verify: EventHandler<i64>,
    on_delete: EventHandler<i64>,
}

#[component]
fn UserRow(props: UserRowProps) -> Element {
    let user = &props.user;
    let mut verify_code = props.verify_code;

    let status_class = if user.is_verified {
        "bg-green-100 text-green-700"
    } else {
        "bg-yellow-100 text-yellow-700"
    };
    let status_label = user.verification_status.label();

    rsx! {
        tr {
            class: "hover:bg-gray-50 text-sm",
            td {
                class: "px-4 py-3 font-medium text-gray-900",
                {format_mobile_display(&user.mobile_number)}
            }
            td {
                class: "px-4 py-3",
                span {
                    class: "px-2 py-1 rounded text-xs font-medium {status_class}",
                    "{status_label}"
                }
            }
            td { class: "px-4 py-3 text-gray-500", {format_date(user.created_at)} }
            td { class: "px-4 py-3 text-gray-500", {format_date(user.last_login)} }
            td {
                class: "px-4 py-3",
                div {
                    class: "flex items-center gap-2",
                    if props.verifying {
                        input {
                            r#type: "text",
                            inputmode: "numeric",
                            class: "border border-gray-300 rounded px-2 py-1 w-24 text-sm",
                            placeholder: "123456",
                            value: "{verify_code}",
                            oninput: move |evt| {
                                let digits: String =
                                    evt.value().chars().filter(|c| c.is_ascii_digit()).take(6).collect();
                                verify_code.set(digits);
                            },
                        }
                        button {
                            class: "px-3 py-1.5 bg-green-100 text-green-700 text-sm rounded hover:bg-green-200",
                            onclick: {
                                let id = user.id;
                                move |_| props.on_confirm_verify.call(id)
                            },
                            "Confirm"
                        }
                    } else if !user.is_verified {
                        button {
                            class: "px-3 py-1.5 bg-blue-100 text-blue-700 text-sm rounded hover:bg-blue-200",
                            onclick: {
                                let id = user.id;
                                let mobile = user.mobile_number.clone();
                                move |_| props.on_start_verify.call((id, mobile.clone()))
                            },
                            "Verify"
                        }
                    }
                    button {
                        class: "px-3 py-1.5 bg-red-100 text-red-700 text-sm rounded hover:bg-red-200",
                        onclick: {
                            let id = user.id;
                            move |_| props.on_delete.call(id)
                        },
                        "Delete"
                    }
                }
            }
        }
    }
}

#[server]
async fn fetch_users() -> Result<Vec<PortalUser>, ServerFnError> {
    let token = crate::auth::require_admin_token().await?;
    crate::auth::portal()
        .list_users(&token)
        .await
        .map_err(crate::auth::user_facing)
}

#[server]
async fn send_user_otp(mobile: String) -> Result<(), ServerFnError> {
    let token = crate::auth::require_admin_token().await?;
    crate::auth::portal()
        .admin_send_otp(&token, &mobile)
        .await
        .map_err(crate::auth::user_facing)
}

#[server]
async fn create_user_with_otp(mobile: String, otp_code: String) -> Result<(), ServerFnError> {
    let token = crate::auth::require_admin_token().await?;
    crate::auth::portal()
        .create_user(&token, &mobile, &otp_code)
        .await
        .map_err(crate::auth::user_facing)
}

#[server]
async fn verify_user(id: i64, otp_code: String) -> Result<(), ServerFnError> {
    let token = crate::auth::require_admin_token().await?;
    crate::auth::portal()
        .verify_user_with_otp(&token, id, &otp_code)
        .await
        .map_err(crate::auth::user_facing)
}

#[server]
async fn remove_user(id: i64) -> Result<(), ServerFnError> {
    let token = crate::auth::require_admin_token().await?;
    crate::auth::portal()
        .delete_user(&token, id)
        .await
        .map_err(crate::auth::user_facing)
}
