//! Admin layout wrapper with auth protection

use dioxus::prelude::*;

use super::guard::{evaluate, GuardDecision};
use super::{AdminNav, LoadingSpinner};
use crate::auth::use_admin_auth;
use crate::routes::Route;

/// Admin layout component that provides navigation and auth protection
#[component]
pub fn AdminLayout() -> Element {
    let auth = use_admin_auth();
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
            // Carry the requested path so login can send the admin back.
            navigator().replace(Route::AdminLogin {
                next: requested.to_string(),
            });
            rsx! {}
        }
        GuardDecision::Allow => rsx! {
            div {
                class: "min-h-screen bg-gray-100",

                AdminNav {}

                main {
                    class: "p-6",
                    Outlet::<Route> {}
                }
            }
        },
    }
}
