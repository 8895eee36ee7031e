//! Reusable UI components.

pub mod modal;
pub mod search_box;
pub mod stat_card;
pub mod status_badge;
pub mod toast;

pub use modal::{alert_modal, modal};
pub use search_box::search_box;
pub use stat_card::stat_card;
pub use status_badge::status_badge;
pub use toast::{ToastMessage, ToastState, ToastType, view_toast};
