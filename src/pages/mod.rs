//! Page components for the Ihsan Charity desktop app.

mod cart;
mod donate;
mod projects;

pub use cart::Cart;
pub use donate::Donate;
pub use projects::Projects;
