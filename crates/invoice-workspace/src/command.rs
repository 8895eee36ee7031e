//! User interactions the workspace understands.

use invoice_model::{InvoiceId, InvoiceStatus};

use crate::draft::{DraftField, ItemField};

/// A single interaction, applied by [`Workspace::dispatch`](crate::Workspace::dispatch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Navigation
    /// Switch to the dashboard. The draft is left as is.
    ShowDashboard,
    /// Open the form with a fresh draft.
    NewInvoice,
    /// Open the form populated from an existing invoice.
    EditInvoice(InvoiceId),
    /// Discard the draft and return to the dashboard.
    CancelForm,

    // Form
    SetField(DraftField, String),
    SetStatus(InvoiceStatus),
    AddItem,
    RemoveItem(usize),
    UpdateItem {
        index: usize,
        field: ItemField,
        value: String,
    },
    /// Validate the draft and commit it to the list.
    SubmitForm,

    // List
    DeleteInvoice(InvoiceId),
    SetSearch(String),

    // Preview
    OpenPreview(InvoiceId),
    ClosePreview,
    RequestDocument(InvoiceId),
}

impl Command {
    /// Commands that only touch the draft.
    pub fn is_draft_edit(&self) -> bool {
        matches!(
            self,
            Self::SetField(..)
                | Self::SetStatus(_)
                | Self::AddItem
                | Self::RemoveItem(_)
                | Self::UpdateItem { .. }
        )
    }
}
