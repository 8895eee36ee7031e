//! Invoice record types.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

// =============================================================================
// INVOICE ID
// =============================================================================

/// Sequential invoice identifier.
///
/// Displayed zero-padded to three digits (`001`, `042`); larger numbers keep
/// all their digits (`1000`). Serialized in its display form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InvoiceId(u32);

impl InvoiceId {
    /// Width the identifier is zero-padded to.
    pub const WIDTH: usize = 3;

    /// Create an identifier from its sequence number.
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    /// Sequence number behind this identifier.
    pub const fn number(self) -> u32 {
        self.0
    }

    /// Identifier following this one, `None` past `u32::MAX`.
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(number) => Some(Self(number)),
            None => None,
        }
    }
}

impl fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.0, width = Self::WIDTH)
    }
}

impl FromStr for InvoiceId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ModelError::InvalidId(s.to_string()));
        }
        match trimmed.parse::<u32>() {
            Ok(number) if number > 0 => Ok(Self(number)),
            _ => Err(ModelError::InvalidId(s.to_string())),
        }
    }
}

impl TryFrom<String> for InvoiceId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<InvoiceId> for String {
    fn from(id: InvoiceId) -> Self {
        id.to_string()
    }
}

// =============================================================================
// STATUS
// =============================================================================

/// Payment status of an invoice.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Issued, awaiting payment.
    #[default]
    Pending,
    /// Payment received.
    Paid,
    /// Past due without payment.
    Overdue,
}

impl InvoiceStatus {
    /// All statuses in picker order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Paid, Self::Overdue];

    /// Lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
        }
    }

    /// Human-readable label for pickers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Paid => "Paid",
            Self::Overdue => "Overdue",
        }
    }

    /// Uppercase badge text shown in the invoice list.
    pub fn badge(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Paid => "PAID",
            Self::Overdue => "OVERDUE",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InvoiceStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "overdue" => Ok(Self::Overdue),
            _ => Err(ModelError::UnknownStatus(s.to_string())),
        }
    }
}

// =============================================================================
// LINE ITEM
// =============================================================================

/// One billable unit within an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    pub quantity: Decimal,
    /// Unit rate in the invoice currency.
    pub rate: Decimal,
}

impl LineItem {
    pub fn new(description: impl Into<String>, quantity: Decimal, rate: Decimal) -> Self {
        Self {
            description: description.into(),
            quantity,
            rate,
        }
    }

    /// `quantity * rate`. Derived, never stored.
    ///
    /// Saturates at `Decimal::MAX` / `Decimal::MIN` when the product is out
    /// of range; use [`LineItem::checked_amount`] to detect that.
    pub fn amount(&self) -> Decimal {
        self.quantity.saturating_mul(self.rate)
    }

    /// `quantity * rate`, or `None` if it does not fit in a `Decimal`.
    pub fn checked_amount(&self) -> Option<Decimal> {
        self.quantity.checked_mul(self.rate)
    }
}

// =============================================================================
// INVOICE
// =============================================================================

/// A billable record for one client.
///
/// Invoices committed to the workspace always carry at least one line item;
/// the draft validator is the only producer of new invoices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub client_name: String,
    pub client_email: String,
    #[serde(default)]
    pub client_address: String,
    /// Issue date.
    pub date: NaiveDate,
    /// Payment due date. Not required to follow `date`.
    pub due_date: NaiveDate,
    #[serde(default)]
    pub status: InvoiceStatus,
    pub items: Vec<LineItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Invoice {
    /// Sum of all line amounts, saturating on overflow.
    pub fn total(&self) -> Decimal {
        crate::totals::invoice_total(self)
    }

    /// Exact sum of all line amounts, `None` on overflow.
    pub fn checked_total(&self) -> Option<Decimal> {
        crate::totals::checked_invoice_total(self)
    }

    /// True if `status` matches.
    pub fn is(&self, status: InvoiceStatus) -> bool {
        self.status == status
    }
}
