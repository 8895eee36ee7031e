//! Which panel the workspace is showing.

use invoice_model::InvoiceId;

/// Primary view. The preview overlay is tracked separately.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum View {
    #[default]
    Dashboard,
    Create(FormMode),
}

/// Whether the form creates a new invoice or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    New,
    Editing(InvoiceId),
}

impl View {
    pub fn is_dashboard(&self) -> bool {
        matches!(self, Self::Dashboard)
    }

    pub fn is_form(&self) -> bool {
        matches!(self, Self::Create(_))
    }

    /// Invoice being edited, if any.
    pub fn editing(&self) -> Option<InvoiceId> {
        match self {
            Self::Create(FormMode::Editing(id)) => Some(*id),
            _ => None,
        }
    }
}

impl FormMode {
    /// Heading shown above the form.
    pub fn title(&self) -> &'static str {
        match self {
            Self::New => "Create New Invoice",
            Self::Editing(_) => "Edit Invoice",
        }
    }

    /// Label of the submit button.
    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::New => "Create Invoice",
            Self::Editing(_) => "Update Invoice",
        }
    }
}
