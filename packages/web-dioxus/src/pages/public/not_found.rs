//! 404 page

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "min-h-screen bg-gray-100 flex items-center justify-center px-4",
            div {
                class: "text-center",
                h1 { class: "text-6xl font-bold text-gray-300 mb-4", "404" }
                p { class: "text-gray-600 mb-2", "Page not found" }
                p { class: "text-gray-400 text-sm mb-6", "/{path}" }
                Link {
                    to: Route::Home {},
                    class: "text-emerald-600 hover:text-emerald-700",
                    "Back to Home"
                }
            }
        }
    }
}
