//! Admin pages

mod dashboard;
mod documents;
mod login;
mod users;

pub use dashboard::*;
pub use documents::*;
pub use login::*;
pub use users::*;
