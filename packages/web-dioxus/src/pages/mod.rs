//! Application pages

pub mod admin;
pub mod public;
pub mod user;
