//! View rendering.
//!
//! Each function takes `&AppState` and returns an `Element`; `App::view()`
//! stacks them into the window.

mod dashboard;
mod form;
mod header;
mod preview;

pub use dashboard::view_dashboard;
pub use form::view_form;
pub use header::view_header;
pub use preview::with_preview;
