//! Authentication: session contexts, server functions, and the login flow
//! state machine.

mod context;
pub mod flow;
mod server_fns;

pub use context::*;
pub use server_fns::*;

use dioxus::prelude::ServerFnError;

/// Message for the error banner: the server-provided string when the failure
/// came from the backend, a generic fallback for transport-level failures.
pub fn server_error_message(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(msg) => msg.clone(),
        _ => "Something went wrong. Please try again.".to_string(),
    }
}
