//! Resolved content of the invoice preview overlay.

use std::fmt;

use chrono::NaiveDate;
use invoice_model::{Decimal, Invoice, InvoiceId, InvoiceStatus, format_money};

use crate::draft::DATE_FORMAT;

/// One line of the preview item table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRow {
    pub description: String,
    pub quantity: Decimal,
    pub rate: Decimal,
    pub amount: Decimal,
}

/// Everything the preview shows for one invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoicePreview {
    pub id: InvoiceId,
    pub status: InvoiceStatus,
    pub client_name: String,
    pub client_email: String,
    pub client_address: Option<String>,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    pub rows: Vec<PreviewRow>,
    pub total: Decimal,
    pub notes: Option<String>,
    currency: String,
}

impl InvoicePreview {
    pub fn build(invoice: &Invoice) -> Self {
        let rows = invoice
            .items
            .iter()
            .map(|item| PreviewRow {
                description: item.description.clone(),
                quantity: item.quantity,
                rate: item.rate,
                amount: item.amount(),
            })
            .collect();
        let address = invoice.client_address.trim();
        Self {
            id: invoice.id,
            status: invoice.status,
            client_name: invoice.client_name.clone(),
            client_email: invoice.client_email.clone(),
            client_address: (!address.is_empty()).then(|| address.to_string()),
            date: invoice.date,
            due_date: invoice.due_date,
            rows,
            total: invoice.total(),
            notes: invoice
                .notes
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string),
            currency: "$".to_string(),
        }
    }

    /// Use a different currency symbol for amounts.
    pub fn with_currency(mut self, symbol: impl Into<String>) -> Self {
        self.currency = symbol.into();
        self
    }

    pub fn title(&self) -> String {
        format!("INVOICE #{}", self.id)
    }

    pub fn money(&self, value: Decimal) -> String {
        format_money(&self.currency, value)
    }

    pub fn date_text(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    pub fn due_date_text(&self) -> String {
        self.due_date.format(DATE_FORMAT).to_string()
    }
}

/// Plain-text rendering, no trailing newline.
impl fmt::Display for InvoicePreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title())?;
        writeln!(f, "Status: {}", self.status)?;
        writeln!(f, "Date: {}", self.date_text())?;
        writeln!(f, "Due Date: {}", self.due_date_text())?;
        writeln!(f, "Bill To: {}", self.client_name)?;
        writeln!(f, "  {}", self.client_email)?;
        if let Some(address) = &self.client_address {
            writeln!(f, "  {address}")?;
        }
        writeln!(f, "Items:")?;
        for row in &self.rows {
            writeln!(
                f,
                "  {}: {} x {} = {}",
                row.description,
                row.quantity.normalize(),
                self.money(row.rate),
                self.money(row.amount)
            )?;
        }
        write!(f, "Total: {}", self.money(self.total))?;
        if let Some(notes) = &self.notes {
            write!(f, "\nNotes: {notes}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_address_and_notes_are_hidden() {
        let mut invoice = invoice_model::sample_invoices().remove(1);
        invoice.client_address = "  ".to_string();
        invoice.notes = Some(String::new());

        let preview = InvoicePreview::build(&invoice);
        assert_eq!(preview.client_address, None);
        assert_eq!(preview.notes, None);
        assert_eq!(preview.title(), "INVOICE #002");
        assert_eq!(preview.total, Decimal::from(1500));
    }

    #[test]
    fn currency_symbol_is_configurable() {
        let invoice = invoice_model::sample_invoices().remove(1);
        let preview = InvoicePreview::build(&invoice).with_currency("€");
        assert!(preview.to_string().ends_with("Total: €1,500.00"));
    }
}
