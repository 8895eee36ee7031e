//! Application state.

mod app_state;
mod settings;

pub use app_state::{AlertState, AppState};
pub use settings::{DisplaySettings, Settings};
