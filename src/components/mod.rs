//! UI Components for the Ihsan Charity desktop app.

mod amount_picker;
mod cart_line;
mod nav_header;
mod toast_stack;

pub use amount_picker::AmountPicker;
pub use cart_line::CartLine;
pub use nav_header::{NavHeader, NavLocation, Shell};
pub use toast_stack::ToastStack;
