//! Reusable rendering helpers shared by screens and the app shell.

pub mod chips;
pub mod detail;
pub mod overlay;
