//! Error types for the invoice workspace.

use std::fmt;

use invoice_model::InvoiceId;
use thiserror::Error;

use crate::draft::{DraftField, ItemField};
use crate::render::RenderError;

/// Reasons a draft cannot be committed.
///
/// Both variants are blocking: the submit is aborted and neither the invoice
/// list nor the view changes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DraftError {
    /// One or more required header fields are blank.
    #[error("Please fill in all required fields (missing: {})", join_fields(.fields))]
    MissingRequiredFields { fields: Vec<DraftField> },

    /// A date field is filled in but is not an ISO calendar date.
    #[error("{field} must be a date like 2025-10-31, got '{value}'")]
    InvalidDate { field: DraftField, value: String },

    /// One or more line items are incomplete or out of range.
    #[error("Please fill in all item details correctly ({})", join_issues(.issues))]
    InvalidLineItems { issues: Vec<ItemIssue> },

    /// Each line fits but their sum does not.
    #[error("The invoice total is too large")]
    TotalOutOfRange,
}

/// A single problem with one line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemIssue {
    /// 1-based row number as shown in the form.
    pub row: usize,
    pub problem: ItemProblem,
}

/// What is wrong with a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemProblem {
    EmptyDescription,
    NonPositiveQuantity,
    NegativeRate,
    /// Field text could not be read as a number.
    NotANumber(ItemField),
    /// `quantity * rate` is too large to represent.
    AmountOutOfRange,
}

impl fmt::Display for ItemIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = self.row;
        match self.problem {
            ItemProblem::EmptyDescription => write!(f, "item {row}: description is required"),
            ItemProblem::NonPositiveQuantity => {
                write!(f, "item {row}: quantity must be greater than zero")
            }
            ItemProblem::NegativeRate => write!(f, "item {row}: rate cannot be negative"),
            ItemProblem::NotANumber(field) => write!(f, "item {row}: {field} is not a number"),
            ItemProblem::AmountOutOfRange => write!(f, "item {row}: amount is too large"),
        }
    }
}

fn join_fields(fields: &[DraftField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_issues(issues: &[ItemIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors returned by [`Workspace::dispatch`](crate::Workspace::dispatch).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkspaceError {
    /// The command referenced an invoice that is not in the list.
    #[error("Invoice #{0} not found")]
    UnknownInvoice(InvoiceId),

    /// Submit was requested while no form is open.
    #[error("No invoice form is open")]
    FormClosed,

    /// Every invoice number has been used.
    #[error("No invoice numbers left to assign")]
    IdsExhausted,

    /// The draft failed validation.
    #[error(transparent)]
    Draft(#[from] DraftError),

    /// The document renderer failed.
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl WorkspaceError {
    /// Validation failures are shown as a blocking alert; everything else is
    /// a transient notice.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Draft(_))
    }
}
