//! Create/edit form message handler.

use iced::Task;
use invoice_workspace::Command;

use crate::handler::MessageHandler;
use crate::message::{FormMessage, Message};
use crate::state::AppState;

/// Handler for draft edits, submit and cancel.
pub struct FormHandler;

impl MessageHandler<FormMessage> for FormHandler {
    fn handle(&self, state: &mut AppState, msg: FormMessage) -> Task<Message> {
        let command = match msg {
            FormMessage::FieldChanged(field, value) => Command::SetField(field, value),
            FormMessage::StatusSelected(status) => Command::SetStatus(status),
            FormMessage::AddItem => Command::AddItem,
            FormMessage::RemoveItem(index) => Command::RemoveItem(index),
            FormMessage::ItemChanged {
                index,
                field,
                value,
            } => Command::UpdateItem {
                index,
                field,
                value,
            },
            FormMessage::Submit => Command::SubmitForm,
            FormMessage::Cancel => Command::CancelForm,
        };
        state.run(command);
        Task::none()
    }
}
