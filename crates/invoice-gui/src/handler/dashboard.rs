//! Dashboard view message handler.

use iced::Task;
use invoice_workspace::Command;

use crate::handler::MessageHandler;
use crate::message::{DashboardMessage, Message};
use crate::state::AppState;

/// Handler for search and invoice row actions.
pub struct DashboardHandler;

impl MessageHandler<DashboardMessage> for DashboardHandler {
    fn handle(&self, state: &mut AppState, msg: DashboardMessage) -> Task<Message> {
        let command = match msg {
            DashboardMessage::SearchChanged(term) => Command::SetSearch(term),
            DashboardMessage::SearchCleared => Command::SetSearch(String::new()),
            DashboardMessage::Preview(id) => Command::OpenPreview(id),
            DashboardMessage::Edit(id) => Command::EditInvoice(id),
            DashboardMessage::Download(id) => Command::RequestDocument(id),
            DashboardMessage::Delete(id) => Command::DeleteInvoice(id),
        };
        state.run(command);
        Task::none()
    }
}
