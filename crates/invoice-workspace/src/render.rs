//! Document rendering seam.
//!
//! The workspace hands a resolved invoice and its total to a
//! [`DocumentRenderer`]. The shipped [`PdfStub`] produces nothing and reports
//! [`RenderError::Unavailable`], which the workspace surfaces as an
//! informational notice.

use invoice_model::{Decimal, Invoice, InvoiceId};
use thiserror::Error;

/// Everything a renderer needs for one invoice.
#[derive(Debug, Clone, Copy)]
pub struct RenderRequest<'a> {
    pub invoice: &'a Invoice,
    pub total: Decimal,
}

impl<'a> RenderRequest<'a> {
    pub fn new(invoice: &'a Invoice) -> Self {
        Self {
            invoice,
            total: invoice.total(),
        }
    }

    pub fn id(&self) -> InvoiceId {
        self.invoice.id
    }
}

/// Output of a successful render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// Suggested file name, e.g. `invoice-001.pdf`.
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    /// No renderer is available in this build.
    #[error("PDF download for Invoice #{id} would be generated here.")]
    Unavailable { id: InvoiceId },

    #[error("Could not render Invoice #{id}: {reason}")]
    Failed { id: InvoiceId, reason: String },
}

impl RenderError {
    pub fn id(&self) -> InvoiceId {
        match self {
            Self::Unavailable { id } | Self::Failed { id, .. } => *id,
        }
    }

    /// `Unavailable` is expected and informational, not a failure.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

/// Turns an invoice into a downloadable document.
pub trait DocumentRenderer {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn render(&self, request: &RenderRequest<'_>) -> Result<RenderedDocument, RenderError>;
}

/// Placeholder PDF renderer.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfStub;

impl DocumentRenderer for PdfStub {
    fn name(&self) -> &'static str {
        "pdf-stub"
    }

    fn render(&self, request: &RenderRequest<'_>) -> Result<RenderedDocument, RenderError> {
        Err(RenderError::Unavailable { id: request.id() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_reports_unavailable_with_id() {
        let invoice = invoice_model::sample_invoices().remove(1);
        let request = RenderRequest::new(&invoice);
        assert_eq!(request.total, Decimal::from(1500));

        let err = PdfStub.render(&request).unwrap_err();
        assert!(err.is_unavailable());
        assert_eq!(
            err.to_string(),
            "PDF download for Invoice #002 would be generated here."
        );
    }
}
