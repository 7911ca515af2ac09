//! User layout wrapper with auth protection

use dioxus::prelude::*;

use super::guard::{evaluate, GuardDecision};
use super::LoadingSpinner;
use crate::auth::use_user_auth;
use crate::routes::Route;

/// User layout component that gates the document pages behind a verified
/// session. Pages render their own headers; this layout only guards.
#[component]
pub fn UserLayout() -> Element {
    let auth = use_user_auth();
    let requested = use_route::<Route>();

    let decision = evaluate(*auth.loading.read(), auth.is_authenticated());
    match decision {
        GuardDecision::Loading => rsx! {
            div {
                class: "min-h-screen flex items-center justify-center bg-gray-100",
                LoadingSpinner {}
            }
        },
        GuardDecision::RedirectToLogin => {
            navigator().replace(Route::UserLogin {
                next: requested.to_string(),
            });
            rsx! {}
        }
        GuardDecision::Allow => rsx! {
            div {
                class: "min-h-screen bg-gray-100",
                Outlet::<Route> {}
            }
        },
    }
}
