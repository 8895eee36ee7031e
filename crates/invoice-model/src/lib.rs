//! Invoice data model for Invoice Hub.
//!
//! This crate provides the record types the rest of the workspace operates on
//! and the pure computation layer derived from them:
//!
//! - [`invoice`]: `Invoice`, `LineItem`, `InvoiceId`, `InvoiceStatus`
//! - [`totals`]: line/invoice totals and dashboard statistics
//! - [`format`]: amount formatting shared by every view
//! - [`sample`]: the sample invoices a fresh session starts with
//!
//! # Example
//!
//! ```
//! use invoice_model::{invoice_total, sample_invoices, stats};
//! use rust_decimal::Decimal;
//!
//! let invoices = sample_invoices();
//! assert_eq!(invoice_total(&invoices[0]), Decimal::from(8000));
//!
//! let stats = stats(&invoices);
//! assert_eq!(stats.total, 2);
//! assert_eq!(stats.revenue, Decimal::from(8000));
//! ```

pub mod error;
pub mod format;
pub mod invoice;
pub mod sample;
pub mod totals;

pub use error::ModelError;
pub use format::{format_amount, format_money};
pub use invoice::{Invoice, InvoiceId, InvoiceStatus, LineItem};
pub use sample::sample_invoices;
pub use totals::{InvoiceStats, checked_invoice_total, invoice_total, line_total, stats};

// Re-exported so downstream crates agree on the amount and date types.
pub use chrono::NaiveDate;
pub use rust_decimal::Decimal;
