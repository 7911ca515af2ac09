//! Reusable UI components

mod admin_layout;
mod admin_nav;
pub mod guard;
mod loading;
mod user_layout;

pub use admin_layout::*;
pub use admin_nav::*;
pub use loading::*;
pub use user_layout::*;
