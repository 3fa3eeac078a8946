//! Theme for the Ihsan Charity desktop app.

mod styles;

pub use styles::GLOBAL_STYLES;
