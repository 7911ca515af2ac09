//! DocVault - Dioxus Fullstack Web Application
//!
//! Web front end for the OTP/TOTP-gated document-sharing portal. Admins
//! manage users and document links; end users authenticate with their mobile
//! number plus a 6-digit code before browsing documents.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```
//!
//! The backend base URL is selected with the `PORTAL_API_URL` environment
//! variable (defaults to `http://localhost:8080`).

#![allow(non_snake_case)]

mod app;
mod auth;
mod components;
mod format;
mod pages;
mod routes;
mod timers;

use dioxus::prelude::*;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Launch the Dioxus app
    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
