//! State changes reported by the workspace.

use invoice_model::InvoiceId;

use crate::draft::ItemField;
use crate::view::View;

/// Something that changed as the result of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceEvent {
    ViewChanged(View),
    DraftReset,
    DraftChanged,
    /// A numeric item field was stored but is not a number. Shown inline by
    /// the form, so it carries no notice.
    ItemFlagged { index: usize, field: ItemField },
    InvoiceCreated(InvoiceId),
    InvoiceUpdated(InvoiceId),
    InvoiceDeleted(InvoiceId),
    SearchChanged,
    PreviewOpened(InvoiceId),
    PreviewClosed,
    /// The renderer produced a document.
    DocumentReady { id: InvoiceId, file_name: String },
    /// No renderer is available for documents.
    DocumentUnavailable(InvoiceId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
}

/// Message meant for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

impl WorkspaceEvent {
    /// User-facing notice for this event, if it warrants one.
    pub fn notice(&self) -> Option<Notice> {
        let notice = match self {
            Self::InvoiceCreated(id) => {
                Notice::new(NoticeLevel::Success, format!("Invoice #{id} created"))
            }
            Self::InvoiceUpdated(id) => {
                Notice::new(NoticeLevel::Success, format!("Invoice #{id} updated"))
            }
            Self::InvoiceDeleted(id) => {
                Notice::new(NoticeLevel::Info, format!("Invoice #{id} deleted"))
            }
            Self::DocumentReady { file_name, .. } => {
                Notice::new(NoticeLevel::Success, format!("Saved {file_name}"))
            }
            Self::DocumentUnavailable(id) => Notice::new(
                NoticeLevel::Info,
                format!("PDF download for Invoice #{id} would be generated here."),
            ),
            _ => return None,
        };
        Some(notice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_user_facing_events_carry_notices() {
        assert!(WorkspaceEvent::DraftChanged.notice().is_none());
        assert!(WorkspaceEvent::PreviewClosed.notice().is_none());

        let notice = WorkspaceEvent::InvoiceCreated(InvoiceId::new(3))
            .notice()
            .unwrap();
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(notice.message, "Invoice #003 created");
    }
}
