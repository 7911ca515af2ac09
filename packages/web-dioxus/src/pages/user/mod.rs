//! User pages

mod dashboard;
mod document;
mod login;

pub use dashboard::*;
pub use document::*;
pub use login::*;
