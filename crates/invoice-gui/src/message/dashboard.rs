//! Dashboard view messages.

use invoice_model::InvoiceId;

#[derive(Debug, Clone)]
pub enum DashboardMessage {
    SearchChanged(String),
    SearchCleared,
    /// Eye icon in the invoice row
    Preview(InvoiceId),
    Edit(InvoiceId),
    Download(InvoiceId),
    Delete(InvoiceId),
}
