//! Tests for invoice-model types and totals.

use invoice_model::{
    Decimal, Invoice, InvoiceId, InvoiceStatus, LineItem, NaiveDate, checked_invoice_total,
    invoice_total, sample_invoices, stats,
};
use proptest::prelude::*;

fn invoice_with(status: InvoiceStatus, items: Vec<LineItem>) -> Invoice {
    Invoice {
        id: InvoiceId::new(1),
        client_name: "Client".to_string(),
        client_email: "client@example.com".to_string(),
        client_address: String::new(),
        date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        due_date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
        status,
        items,
        notes: None,
    }
}

#[test]
fn two_line_invoice_totals_eight_thousand() {
    let invoice = invoice_with(
        InvoiceStatus::Paid,
        vec![
            LineItem::new("Web Development", Decimal::ONE, Decimal::from(5000)),
            LineItem::new("UI/UX Design", Decimal::ONE, Decimal::from(3000)),
        ],
    );
    assert_eq!(invoice_total(&invoice), Decimal::from(8000));
    assert_eq!(invoice.total(), Decimal::from(8000));
}

#[test]
fn stats_over_paid_and_pending() {
    let paid = invoice_with(
        InvoiceStatus::Paid,
        vec![LineItem::new("Build", Decimal::ONE, Decimal::from(8000))],
    );
    let pending = invoice_with(
        InvoiceStatus::Pending,
        vec![LineItem::new("Logo", Decimal::ONE, Decimal::from(1500))],
    );

    let stats = stats(&[paid, pending]);
    assert_eq!(stats.total, 2);
    assert_eq!(stats.paid, 1);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.overdue, 0);
    assert_eq!(stats.revenue, Decimal::from(8000));
}

#[test]
fn overdue_invoices_are_not_pending_or_revenue() {
    let overdue = invoice_with(
        InvoiceStatus::Overdue,
        vec![LineItem::new("Audit", Decimal::from(2), Decimal::from(700))],
    );

    let stats = stats(&[overdue]);
    assert_eq!(stats.total, 1);
    assert_eq!(stats.pending, 0);
    assert_eq!(stats.revenue, Decimal::ZERO);
}

#[test]
fn sample_invoices_match_first_launch_data() {
    let invoices = sample_invoices();
    let ids: Vec<String> = invoices.iter().map(|i| i.id.to_string()).collect();
    assert_eq!(ids, vec!["001", "002"]);
    assert_eq!(invoices[1].total(), Decimal::from(1500));
    assert!(invoices[0].is(InvoiceStatus::Paid));
}

#[test]
fn invoice_serializes_with_string_id_and_lowercase_status() {
    let invoice = sample_invoices().remove(1);
    let json = serde_json::to_value(&invoice).expect("serialize invoice");

    assert_eq!(json["id"], "002");
    assert_eq!(json["status"], "pending");
    assert_eq!(json["date"], "2025-10-05");
    assert!(json.get("notes").is_none());

    let round: Invoice = serde_json::from_value(json).expect("deserialize invoice");
    assert_eq!(round, invoice);
}

#[test]
fn invoice_rejects_malformed_id() {
    let mut json = serde_json::to_value(sample_invoices().remove(0)).unwrap();
    json["id"] = serde_json::Value::from("A-1");
    assert!(serde_json::from_value::<Invoice>(json).is_err());
}

fn arb_item() -> impl Strategy<Value = LineItem> {
    (1i64..500, 0i64..1_000_000).prop_map(|(quantity, cents)| {
        LineItem::new("item", Decimal::from(quantity), Decimal::new(cents, 2))
    })
}

#[test]
fn largest_quantity_times_two_saturates() {
    let quantity: Decimal = "79228162514264337593543950335".parse().unwrap();
    let invoice = invoice_with(
        InvoiceStatus::Paid,
        vec![LineItem::new("Bulk", quantity, Decimal::from(2))],
    );

    assert_eq!(invoice.total(), Decimal::MAX);
    assert_eq!(invoice.checked_total(), None);
    assert_eq!(stats(&[invoice]).revenue, Decimal::MAX);
}

/// Any representable decimal, weighted toward the range limits.
fn arb_wide_decimal() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        Just(Decimal::MAX),
        Just(Decimal::MIN),
        Just(Decimal::ZERO),
        (any::<u32>(), any::<u32>(), any::<u32>(), any::<bool>(), 0u32..=28)
            .prop_map(|(lo, mid, hi, negative, scale)| Decimal::from_parts(
                lo, mid, hi, negative, scale
            )),
    ]
}

fn arb_wide_item() -> impl Strategy<Value = LineItem> {
    (arb_wide_decimal(), arb_wide_decimal())
        .prop_map(|(quantity, rate)| LineItem::new("item", quantity, rate))
}

proptest! {
    #[test]
    fn totals_never_panic_at_the_limits(
        items in prop::collection::vec(arb_wide_item(), 1..8),
        paid in any::<bool>(),
    ) {
        let status = if paid { InvoiceStatus::Paid } else { InvoiceStatus::Pending };
        let invoice = invoice_with(status, items);

        let total = invoice_total(&invoice);
        if let Some(exact) = checked_invoice_total(&invoice) {
            prop_assert_eq!(exact, total);
        }

        let stats = stats(&[invoice.clone(), invoice]);
        prop_assert_eq!(stats.total, 2);
        if !paid {
            prop_assert_eq!(stats.revenue, Decimal::ZERO);
        }
    }

    #[test]
    fn total_is_independent_of_item_order(
        items in prop::collection::vec(arb_item(), 1..12),
        rotation in 0usize..12,
    ) {
        let forward = invoice_with(InvoiceStatus::Pending, items.clone());

        let mut reordered = items.clone();
        reordered.reverse();
        let len = reordered.len();
        reordered.rotate_left(rotation % len);
        let shuffled = invoice_with(InvoiceStatus::Pending, reordered);

        prop_assert_eq!(invoice_total(&forward), invoice_total(&shuffled));
    }

    #[test]
    fn total_equals_sum_of_line_amounts(items in prop::collection::vec(arb_item(), 1..12)) {
        let expected: Decimal = items.iter().map(|i| i.quantity * i.rate).sum();
        let invoice = invoice_with(InvoiceStatus::Paid, items);
        prop_assert_eq!(invoice_total(&invoice), expected);
    }
}
