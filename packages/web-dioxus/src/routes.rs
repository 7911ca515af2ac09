//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::{AdminLayout, UserLayout};
use crate::pages::admin::{AdminDashboard, AdminDocuments, AdminLogin, AdminUsers};
use crate::pages::public::{Home, NotFound};
use crate::pages::user::{UserDashboard, UserDocumentView, UserLogin};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    // Public routes
    #[route("/")]
    Home {},

    // Login entry points; `next` carries the originally requested path so the
    // guards can send the visitor back after authentication.
    #[route("/admin/login?:next")]
    AdminLogin { next: String },

    #[route("/user/login?:next")]
    UserLogin { next: String },

    // Admin routes
    #[nest("/admin")]
        #[layout(AdminLayout)]
            #[route("/dashboard")]
            AdminDashboard {},

            #[route("/users")]
            AdminUsers {},

            #[route("/documents")]
            AdminDocuments {},
        #[end_layout]
    #[end_nest]

    // User routes
    #[nest("/user")]
        #[layout(UserLayout)]
            #[route("/dashboard")]
            UserDashboard {},

            #[route("/documents/:id")]
            UserDocumentView { id: i64 },
        #[end_layout]
    #[end_nest]

    // 404 catch-all
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
