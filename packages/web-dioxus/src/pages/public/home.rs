//! Home page component

use dioxus::prelude::*;

use crate::routes::Route;

/// Landing page with the two login entry points.
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gray-100 flex items-center justify-center px-4",

            div {
                class: "max-w-3xl w-full",

                div {
                    class: "text-center mb-10",
                    h1 { class: "text-4xl font-bold text-gray-900 mb-3", "DocVault" }
                    p {
                        class: "text-gray-600",
                        "Secure document sharing, gated behind one-time-password authentication."
                    }
                }

                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-6",

                    div {
                        class: "bg-white rounded-lg shadow-md p-8 text-center",
                        h2 { class: "text-xl font-semibold text-gray-900 mb-2", "User Access" }
                        p {
                            class: "text-gray-600 text-sm mb-6",
                            "Sign in with your mobile number and authenticator code to browse shared documents."
                        }
                        Link {
                            to: Route::UserLogin { next: String::new() },
                            class: "inline-block bg-emerald-600 text-white py-2 px-6 rounded-md hover:bg-emerald-700",
                            "User Login"
                        }
                    }

                    div {
                        class: "bg-white rounded-lg shadow-md p-8 text-center",
                        h2 { class: "text-xl font-semibold text-gray-900 mb-2", "Admin Access" }
                        p {
                            class: "text-gray-600 text-sm mb-6",
                            "Manage users and document links from the admin dashboard."
                        }
                        Link {
                            to: Route::AdminLogin { next: String::new() },
                            class: "inline-block bg-gray-800 text-white py-2 px-6 rounded-md hover:bg-gray-900",
                            "Admin Login"
                        }
                    }
                }
            }
        }
    }
}
