//! Message handlers.
//!
//! Each handler implements [`MessageHandler`] for one message type and turns
//! it into workspace commands. `App::update()` dispatches to them:
//!
//! ```ignore
//! match message {
//!     Message::Dashboard(msg) => DashboardHandler.handle(&mut self.state, msg),
//!     Message::Form(msg) => FormHandler.handle(&mut self.state, msg),
//!     // ...
//! }
//! ```

mod dashboard;
mod form;
mod preview;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use dashboard::DashboardHandler;
pub use form::FormHandler;
pub use preview::PreviewHandler;

/// Trait for handling messages in the Iced architecture.
///
/// * `M` - The message type this handler processes
pub trait MessageHandler<M> {
    /// Handle a message, mutating state and returning a follow-up task
    /// (`Task::none()` when there is nothing left to do).
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
