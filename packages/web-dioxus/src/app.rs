//! Root application component

use dioxus::prelude::*;

use crate::auth::{AdminAuthProvider, UserAuthProvider};
use crate::routes::Route;

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/tailwind.css") }

        // The admin and user auth contexts are independent: both wrap the
        // router so the two session kinds can coexist in one browser context.
        AdminAuthProvider {
            UserAuthProvider {
                Router::<Route> {}
            }
        }
    }
}
