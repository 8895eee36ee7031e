//! Totals and dashboard statistics.
//!
//! Everything here is pure and recomputed on every render; nothing is cached.
//! Sums saturate at the `Decimal` range instead of panicking. The `checked_`
//! variants report overflow instead.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::invoice::{Invoice, InvoiceStatus, LineItem};

/// `quantity * rate` for one line.
pub fn line_total(item: &LineItem) -> Decimal {
    item.amount()
}

/// Sum of line totals. Independent of item order while in range.
pub fn invoice_total(invoice: &Invoice) -> Decimal {
    invoice
        .items
        .iter()
        .map(line_total)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Exact sum of line totals, `None` if any product or the sum overflows.
pub fn checked_invoice_total(invoice: &Invoice) -> Option<Decimal> {
    invoice
        .items
        .iter()
        .try_fold(Decimal::ZERO, |sum, item| sum.checked_add(item.checked_amount()?))
}

/// Aggregate figures shown on the dashboard.
///
/// `pending` and `revenue` only look at invoices whose status is exactly
/// pending / paid. Overdue invoices count toward `total` and `overdue` but
/// never toward `pending` or `revenue`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceStats {
    pub total: usize,
    pub paid: usize,
    pub pending: usize,
    pub overdue: usize,
    /// Sum of totals over paid invoices.
    pub revenue: Decimal,
}

impl InvoiceStats {
    pub fn from_invoices(invoices: &[Invoice]) -> Self {
        invoices.iter().fold(
            Self {
                total: invoices.len(),
                ..Self::default()
            },
            |mut acc, invoice| {
                match invoice.status {
                    InvoiceStatus::Paid => {
                        acc.paid += 1;
                        acc.revenue = acc.revenue.saturating_add(invoice_total(invoice));
                    }
                    InvoiceStatus::Pending => acc.pending += 1,
                    InvoiceStatus::Overdue => acc.overdue += 1,
                }
                acc
            },
        )
    }
}

/// Dashboard statistics for a list of invoices.
pub fn stats(invoices: &[Invoice]) -> InvoiceStats {
    InvoiceStats::from_invoices(invoices)
}
