//! The invoice draft edited by the create/edit form.
//!
//! The draft keeps the raw text of every field. Numeric item fields are parsed
//! the moment they are edited: a value that does not parse keeps its text,
//! counts as zero in live totals, and is flagged so the form can mark it. The
//! draft only turns into an [`Invoice`] through [`Draft::validate`].

use std::fmt;

use chrono::NaiveDate;
use invoice_model::{Invoice, InvoiceId, InvoiceStatus, LineItem};
use rust_decimal::Decimal;

use crate::error::{DraftError, ItemIssue, ItemProblem};

/// ISO calendar date format used by the date fields.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// FIELD IDENTIFIERS
// =============================================================================

/// Header (non-item) text fields of the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    ClientName,
    ClientEmail,
    ClientAddress,
    Date,
    DueDate,
    Notes,
}

impl DraftField {
    /// Fields that must be non-blank at submit time, in check order.
    pub const REQUIRED: [Self; 4] = [Self::ClientName, Self::ClientEmail, Self::Date, Self::DueDate];

    pub fn label(&self) -> &'static str {
        match self {
            Self::ClientName => "client name",
            Self::ClientEmail => "client email",
            Self::ClientAddress => "client address",
            Self::Date => "invoice date",
            Self::DueDate => "due date",
            Self::Notes => "notes",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Editable columns of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemField {
    Description,
    Quantity,
    Rate,
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Description => "description",
            Self::Quantity => "quantity",
            Self::Rate => "rate",
        })
    }
}

// =============================================================================
// NUMERIC INPUT
// =============================================================================

/// Text typed into a numeric field plus its parsed value.
///
/// Blank text reads as zero. Text that is not a decimal number has no value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericInput {
    raw: String,
    value: Option<Decimal>,
}

impl NumericInput {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let trimmed = raw.trim();
        let value = if trimmed.is_empty() {
            Some(Decimal::ZERO)
        } else {
            trimmed.parse::<Decimal>().ok()
        };
        Self { raw, value }
    }

    pub fn from_value(value: Decimal) -> Self {
        Self {
            raw: value.normalize().to_string(),
            value: Some(value),
        }
    }

    /// Text exactly as typed.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Parsed value, `None` when the text is not a number.
    pub fn value(&self) -> Option<Decimal> {
        self.value
    }

    pub fn is_valid(&self) -> bool {
        self.value.is_some()
    }

    /// Value used for live totals.
    pub fn value_or_zero(&self) -> Decimal {
        self.value.unwrap_or(Decimal::ZERO)
    }
}

// =============================================================================
// LINE ITEM DRAFT
// =============================================================================

/// A line item as it is being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItemDraft {
    pub description: String,
    pub quantity: NumericInput,
    pub rate: NumericInput,
}

impl Default for LineItemDraft {
    /// `{description: "", quantity: 1, rate: 0}`
    fn default() -> Self {
        Self {
            description: String::new(),
            quantity: NumericInput::from_value(Decimal::ONE),
            rate: NumericInput::from_value(Decimal::ZERO),
        }
    }
}

impl LineItemDraft {
    pub fn from_item(item: &LineItem) -> Self {
        Self {
            description: item.description.clone(),
            quantity: NumericInput::from_value(item.quantity),
            rate: NumericInput::from_value(item.rate),
        }
    }

    /// Live amount, treating unparsable fields as zero. Saturates when
    /// `quantity * rate` is out of the `Decimal` range.
    pub fn amount(&self) -> Decimal {
        self.quantity
            .value_or_zero()
            .saturating_mul(self.rate.value_or_zero())
    }

    /// Exact amount, `None` on overflow.
    pub fn checked_amount(&self) -> Option<Decimal> {
        self.quantity
            .value_or_zero()
            .checked_mul(self.rate.value_or_zero())
    }

    /// False when `quantity * rate` does not fit in a `Decimal`.
    pub fn amount_in_range(&self) -> bool {
        self.checked_amount().is_some()
    }

    fn problems(&self) -> Vec<ItemProblem> {
        let mut problems = Vec::new();
        if self.description.trim().is_empty() {
            problems.push(ItemProblem::EmptyDescription);
        }
        match self.quantity.value() {
            None => problems.push(ItemProblem::NotANumber(ItemField::Quantity)),
            Some(q) if q <= Decimal::ZERO => problems.push(ItemProblem::NonPositiveQuantity),
            Some(_) => {}
        }
        match self.rate.value() {
            None => problems.push(ItemProblem::NotANumber(ItemField::Rate)),
            Some(r) if r < Decimal::ZERO => problems.push(ItemProblem::NegativeRate),
            Some(_) => {}
        }
        if !self.amount_in_range() {
            problems.push(ItemProblem::AmountOutOfRange);
        }
        problems
    }
}

/// Result of editing one line item field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEdit {
    /// The value was stored and is well-formed.
    Applied,
    /// The text was stored but is not a number, or makes the line amount
    /// overflow.
    Flagged,
    /// No item at that index; nothing changed.
    OutOfRange,
}

// =============================================================================
// DRAFT
// =============================================================================

/// Invoice-shaped value edited by the form, distinct from any list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub client_name: String,
    pub client_email: String,
    pub client_address: String,
    pub date: String,
    pub due_date: String,
    pub status: InvoiceStatus,
    items: Vec<LineItemDraft>,
    pub notes: String,
}

impl Draft {
    /// Empty form: issue date `today`, no due date, one blank item, pending.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            client_name: String::new(),
            client_email: String::new(),
            client_address: String::new(),
            date: today.format(DATE_FORMAT).to_string(),
            due_date: String::new(),
            status: InvoiceStatus::Pending,
            items: vec![LineItemDraft::default()],
            notes: String::new(),
        }
    }

    /// Populate the form from an existing invoice for editing.
    pub fn from_invoice(invoice: &Invoice) -> Self {
        let mut items: Vec<LineItemDraft> =
            invoice.items.iter().map(LineItemDraft::from_item).collect();
        if items.is_empty() {
            items.push(LineItemDraft::default());
        }
        Self {
            client_name: invoice.client_name.clone(),
            client_email: invoice.client_email.clone(),
            client_address: invoice.client_address.clone(),
            date: invoice.date.format(DATE_FORMAT).to_string(),
            due_date: invoice.due_date.format(DATE_FORMAT).to_string(),
            status: invoice.status,
            items,
            notes: invoice.notes.clone().unwrap_or_default(),
        }
    }

    /// Restore the empty form.
    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }

    pub fn items(&self) -> &[LineItemDraft] {
        &self.items
    }

    /// Whether a remove action is available (more than one item).
    pub fn can_remove_items(&self) -> bool {
        self.items.len() > 1
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::ClientName => &self.client_name,
            DraftField::ClientEmail => &self.client_email,
            DraftField::ClientAddress => &self.client_address,
            DraftField::Date => &self.date,
            DraftField::DueDate => &self.due_date,
            DraftField::Notes => &self.notes,
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::ClientName => self.client_name = value,
            DraftField::ClientEmail => self.client_email = value,
            DraftField::ClientAddress => self.client_address = value,
            DraftField::Date => self.date = value,
            DraftField::DueDate => self.due_date = value,
            DraftField::Notes => self.notes = value,
        }
    }

    pub fn set_status(&mut self, status: InvoiceStatus) {
        self.status = status;
    }

    /// Append a blank line item.
    pub fn add_item(&mut self) {
        self.items.push(LineItemDraft::default());
    }

    /// Remove the item at `index`.
    ///
    /// Returns `false` without changing anything when the index is out of
    /// range or only one item is left.
    pub fn remove_item(&mut self, index: usize) -> bool {
        if !self.can_remove_items() || index >= self.items.len() {
            return false;
        }
        self.items.remove(index);
        true
    }

    /// Set one field of the item at `index`.
    pub fn update_item(&mut self, index: usize, field: ItemField, value: impl Into<String>) -> ItemEdit {
        let Some(item) = self.items.get_mut(index) else {
            return ItemEdit::OutOfRange;
        };
        let value = value.into();
        let input = match field {
            ItemField::Description => {
                item.description = value;
                return ItemEdit::Applied;
            }
            ItemField::Quantity => &mut item.quantity,
            ItemField::Rate => &mut item.rate,
        };
        *input = NumericInput::parse(value);
        let parsed = input.is_valid();
        if parsed && item.amount_in_range() {
            ItemEdit::Applied
        } else {
            ItemEdit::Flagged
        }
    }

    /// Live total of the form, saturating on overflow.
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .map(LineItemDraft::amount)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Exact total, `None` if a line amount or the sum overflows.
    pub fn checked_total(&self) -> Option<Decimal> {
        self.items
            .iter()
            .try_fold(Decimal::ZERO, |sum, item| sum.checked_add(item.checked_amount()?))
    }

    /// Check the draft in submit order: required header fields first, then
    /// line items.
    pub fn validate(&self) -> Result<ValidDraft, DraftError> {
        let missing: Vec<DraftField> = DraftField::REQUIRED
            .into_iter()
            .filter(|field| self.field(*field).trim().is_empty())
            .collect();
        if !missing.is_empty() {
            return Err(DraftError::MissingRequiredFields { fields: missing });
        }

        let date = parse_date(DraftField::Date, &self.date)?;
        let due_date = parse_date(DraftField::DueDate, &self.due_date)?;

        let issues: Vec<ItemIssue> = self
            .items
            .iter()
            .enumerate()
            .flat_map(|(index, item)| {
                item.problems()
                    .into_iter()
                    .map(move |problem| ItemIssue { row: index + 1, problem })
            })
            .collect();
        if !issues.is_empty() {
            return Err(DraftError::InvalidLineItems { issues });
        }
        if self.checked_total().is_none() {
            return Err(DraftError::TotalOutOfRange);
        }

        let items = self
            .items
            .iter()
            .map(|item| {
                LineItem::new(
                    item.description.clone(),
                    item.quantity.value_or_zero(),
                    item.rate.value_or_zero(),
                )
            })
            .collect();

        let notes = self.notes.trim();
        Ok(ValidDraft {
            client_name: self.client_name.clone(),
            client_email: self.client_email.clone(),
            client_address: self.client_address.clone(),
            date,
            due_date,
            status: self.status,
            items,
            notes: (!notes.is_empty()).then(|| self.notes.clone()),
        })
    }
}

fn parse_date(field: DraftField, value: &str) -> Result<NaiveDate, DraftError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| DraftError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// A draft that passed validation, ready to become an invoice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    client_name: String,
    client_email: String,
    client_address: String,
    date: NaiveDate,
    due_date: NaiveDate,
    status: InvoiceStatus,
    items: Vec<LineItem>,
    notes: Option<String>,
}

impl ValidDraft {
    pub fn into_invoice(self, id: InvoiceId) -> Invoice {
        Invoice {
            id,
            client_name: self.client_name,
            client_email: self.client_email,
            client_address: self.client_address,
            date: self.date,
            due_date: self.due_date,
            status: self.status,
            items: self.items,
            notes: self.notes,
        }
    }
}
