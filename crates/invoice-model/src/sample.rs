//! Sample invoices a fresh session is seeded with.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::invoice::{Invoice, InvoiceId, InvoiceStatus, LineItem};

/// The two demo invoices shown on first launch.
pub fn sample_invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            id: InvoiceId::new(1),
            client_name: "Tech Solutions Inc.".to_string(),
            client_email: "contact@techsolutions.com".to_string(),
            client_address: String::new(),
            date: ymd(2025, 10, 1),
            due_date: ymd(2025, 10, 31),
            status: InvoiceStatus::Paid,
            items: vec![
                LineItem::new("Web Development", Decimal::ONE, Decimal::from(5000)),
                LineItem::new("UI/UX Design", Decimal::ONE, Decimal::from(3000)),
            ],
            notes: None,
        },
        Invoice {
            id: InvoiceId::new(2),
            client_name: "Creative Studio".to_string(),
            client_email: "hello@creativestudio.com".to_string(),
            client_address: String::new(),
            date: ymd(2025, 10, 5),
            due_date: ymd(2025, 11, 5),
            status: InvoiceStatus::Pending,
            items: vec![LineItem::new(
                "Logo Design",
                Decimal::ONE,
                Decimal::from(1500),
            )],
            notes: None,
        },
    ]
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    // Literal calendar dates above are always valid.
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
