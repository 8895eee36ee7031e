//! Create/edit form messages.

use invoice_model::InvoiceStatus;
use invoice_workspace::{DraftField, ItemField};

#[derive(Debug, Clone)]
pub enum FormMessage {
    FieldChanged(DraftField, String),
    StatusSelected(InvoiceStatus),
    AddItem,
    RemoveItem(usize),
    ItemChanged {
        index: usize,
        field: ItemField,
        value: String,
    },
    Submit,
    Cancel,
}
