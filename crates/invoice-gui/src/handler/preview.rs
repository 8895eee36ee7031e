//! Preview overlay message handler.

use iced::Task;
use invoice_workspace::Command;

use crate::handler::MessageHandler;
use crate::message::{Message, PreviewMessage};
use crate::state::AppState;

pub struct PreviewHandler;

impl MessageHandler<PreviewMessage> for PreviewHandler {
    fn handle(&self, state: &mut AppState, msg: PreviewMessage) -> Task<Message> {
        match msg {
            PreviewMessage::Download => match state.workspace.preview_id() {
                Some(id) => state.run(Command::RequestDocument(id)),
                None => tracing::debug!("Download requested with no preview open"),
            },
            PreviewMessage::Close => state.run(Command::ClosePreview),
        }
        Task::none()
    }
}
