//! End-to-end tests for the workspace reducer.

use invoice_model::{Decimal, Invoice, InvoiceId, InvoiceStatus, NaiveDate};
use invoice_workspace::{
    Command, DocumentRenderer, DraftError, DraftField, FormMode, IdPolicy, InvoicePreview,
    ItemField, ItemIssue, ItemProblem, RenderError, RenderRequest, RenderedDocument, View,
    Workspace, WorkspaceConfig, WorkspaceError, WorkspaceEvent, search,
};
use proptest::prelude::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 18).unwrap()
}

fn workspace() -> Workspace {
    Workspace::default().with_clock(today)
}

fn run(ws: &mut Workspace, commands: impl IntoIterator<Item = Command>) {
    for command in commands {
        ws.dispatch(command).expect("command should succeed");
    }
}

fn fill_valid_draft(ws: &mut Workspace, client: &str) {
    run(
        ws,
        [
            Command::SetField(DraftField::ClientName, client.to_string()),
            Command::SetField(DraftField::ClientEmail, "billing@example.com".to_string()),
            Command::SetField(DraftField::DueDate, "2025-11-18".to_string()),
            Command::UpdateItem {
                index: 0,
                field: ItemField::Description,
                value: "Consulting".to_string(),
            },
            Command::UpdateItem {
                index: 0,
                field: ItemField::Rate,
                value: "450".to_string(),
            },
        ],
    );
}

fn ids(ws: &Workspace) -> Vec<String> {
    ws.invoices().iter().map(|i| i.id.to_string()).collect()
}

#[test]
fn new_invoice_gets_003_after_two_samples() {
    let mut ws = workspace();
    run(&mut ws, [Command::NewInvoice]);
    fill_valid_draft(&mut ws, "Acme");

    let events = ws.dispatch(Command::SubmitForm).unwrap();
    assert_eq!(events[0], WorkspaceEvent::InvoiceCreated(InvoiceId::new(3)));
    assert_eq!(ids(&ws), vec!["001", "002", "003"]);
    assert_eq!(ws.view(), View::Dashboard);
    assert_eq!(ws.invoices()[2].date, today());
    assert_eq!(ws.invoices()[2].total(), Decimal::from(450));
    // Draft is reset after a successful submit.
    assert!(ws.draft().client_name.is_empty());
}

#[test]
fn missing_email_leaves_list_and_view_unchanged() {
    let mut ws = workspace();
    run(&mut ws, [Command::NewInvoice]);
    fill_valid_draft(&mut ws, "Acme");
    run(
        &mut ws,
        [Command::SetField(DraftField::ClientEmail, String::new())],
    );
    let before = ws.invoices().to_vec();

    let err = ws.dispatch(Command::SubmitForm).unwrap_err();
    assert!(err.is_validation());
    assert_eq!(
        err,
        WorkspaceError::Draft(DraftError::MissingRequiredFields {
            fields: vec![DraftField::ClientEmail],
        })
    );
    assert_eq!(ws.invoices(), before.as_slice());
    assert_eq!(ws.view(), View::Create(FormMode::New));
    assert_eq!(ws.draft().client_name, "Acme");
}

#[test]
fn editing_preserves_id_position_and_length() {
    let mut ws = workspace();
    run(
        &mut ws,
        [
            Command::EditInvoice(InvoiceId::new(1)),
            Command::SetField(DraftField::ClientName, "Tech Solutions GmbH".to_string()),
            Command::SetStatus(InvoiceStatus::Overdue),
        ],
    );
    assert_eq!(ws.view(), View::Create(FormMode::Editing(InvoiceId::new(1))));

    let events = ws.dispatch(Command::SubmitForm).unwrap();
    assert_eq!(events[0], WorkspaceEvent::InvoiceUpdated(InvoiceId::new(1)));
    assert_eq!(ids(&ws), vec!["001", "002"]);
    let edited = &ws.invoices()[0];
    assert_eq!(edited.client_name, "Tech Solutions GmbH");
    assert_eq!(edited.status, InvoiceStatus::Overdue);
    assert_eq!(edited.total(), Decimal::from(8000));
}

#[test]
fn remove_item_never_empties_the_draft() {
    let mut ws = workspace();
    run(&mut ws, [Command::NewInvoice, Command::AddItem, Command::AddItem]);
    for _ in 0..5 {
        ws.dispatch(Command::RemoveItem(0)).unwrap();
    }
    assert_eq!(ws.draft().items().len(), 1);
}

#[test]
fn search_for_tech_matches_client_name_only() {
    let mut ws = workspace();
    run(&mut ws, [Command::SetSearch("tech".to_string())]);
    let found: Vec<&str> = ws
        .filtered()
        .iter()
        .map(|i| i.client_name.as_str())
        .collect();
    assert_eq!(found, vec!["Tech Solutions Inc."]);
}

#[test]
fn delete_does_not_renumber() {
    let mut ws = workspace();
    run(&mut ws, [Command::DeleteInvoice(InvoiceId::new(1))]);
    assert_eq!(ids(&ws), vec!["002"]);
}

#[test]
fn monotonic_policy_never_reissues_deleted_ids() {
    let mut ws = workspace();
    run(
        &mut ws,
        [Command::DeleteInvoice(InvoiceId::new(1)), Command::NewInvoice],
    );
    fill_valid_draft(&mut ws, "Acme");
    run(&mut ws, [Command::SubmitForm]);
    assert_eq!(ids(&ws), vec!["002", "003"]);
}

#[test]
fn list_length_policy_skips_taken_ids() {
    let mut ws = Workspace::new(&WorkspaceConfig::default().with_id_policy(IdPolicy::ListLength))
        .with_clock(today);
    run(
        &mut ws,
        [Command::DeleteInvoice(InvoiceId::new(1)), Command::NewInvoice],
    );
    fill_valid_draft(&mut ws, "Acme");
    run(&mut ws, [Command::SubmitForm]);
    assert_eq!(ids(&ws), vec!["002", "003"]);
}

#[test]
fn unparsable_quantity_is_flagged_then_rejected() {
    let mut ws = workspace();
    run(&mut ws, [Command::NewInvoice]);
    fill_valid_draft(&mut ws, "Acme");

    let events = ws
        .dispatch(Command::UpdateItem {
            index: 0,
            field: ItemField::Quantity,
            value: "1,5".to_string(),
        })
        .unwrap();
    assert!(events.contains(&WorkspaceEvent::ItemFlagged {
        index: 0,
        field: ItemField::Quantity,
    }));
    assert_eq!(ws.draft_total(), Decimal::ZERO);

    let err = ws.dispatch(Command::SubmitForm).unwrap_err();
    assert!(matches!(
        err,
        WorkspaceError::Draft(DraftError::InvalidLineItems { .. })
    ));
    assert_eq!(ws.invoices().len(), 2);
}

#[test]
fn stats_follow_the_list() {
    let mut ws = workspace();
    let stats = ws.stats();
    assert_eq!((stats.total, stats.paid, stats.pending), (2, 1, 1));
    assert_eq!(stats.revenue, Decimal::from(8000));

    run(
        &mut ws,
        [
            Command::EditInvoice(InvoiceId::new(2)),
            Command::SetStatus(InvoiceStatus::Paid),
            Command::SubmitForm,
        ],
    );
    let stats = ws.stats();
    assert_eq!((stats.paid, stats.pending), (2, 0));
    assert_eq!(stats.revenue, Decimal::from(9500));
}

#[test]
fn pdf_stub_produces_informational_event() {
    let mut ws = workspace();
    let events = ws.dispatch(Command::RequestDocument(InvoiceId::new(1))).unwrap();
    assert_eq!(events, vec![WorkspaceEvent::DocumentUnavailable(InvoiceId::new(1))]);

    let notice = events[0].notice().unwrap();
    assert_eq!(
        notice.message,
        "PDF download for Invoice #001 would be generated here."
    );
}

#[derive(Debug)]
struct FakeRenderer {
    fail: bool,
}

impl DocumentRenderer for FakeRenderer {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn render(&self, request: &RenderRequest<'_>) -> Result<RenderedDocument, RenderError> {
        if self.fail {
            return Err(RenderError::Failed {
                id: request.id(),
                reason: "disk full".to_string(),
            });
        }
        Ok(RenderedDocument {
            file_name: format!("invoice-{}.pdf", request.id()),
            bytes: request.total.to_string().into_bytes(),
        })
    }
}

#[test]
fn renderer_receives_invoice_and_total() {
    let mut ws = workspace().with_renderer(FakeRenderer { fail: false });
    let events = ws.dispatch(Command::RequestDocument(InvoiceId::new(2))).unwrap();
    assert_eq!(
        events,
        vec![WorkspaceEvent::DocumentReady {
            id: InvoiceId::new(2),
            file_name: "invoice-002.pdf".to_string(),
        }]
    );

    let mut failing = workspace().with_renderer(FakeRenderer { fail: true });
    let err = failing
        .dispatch(Command::RequestDocument(InvoiceId::new(2)))
        .unwrap_err();
    assert!(matches!(err, WorkspaceError::Render(RenderError::Failed { .. })));
    assert!(!err.is_validation());
}

#[test]
fn preview_overlay_opens_and_closes() {
    let mut ws = workspace();
    run(&mut ws, [Command::NewInvoice, Command::OpenPreview(InvoiceId::new(1))]);
    // The overlay is independent of the primary view.
    assert_eq!(ws.view(), View::Create(FormMode::New));
    assert_eq!(ws.preview().map(|p| p.id), Some(InvoiceId::new(1)));

    run(&mut ws, [Command::ClosePreview]);
    assert!(ws.preview().is_none());
}

#[test]
fn preview_renders_as_plain_text() {
    let invoice = invoice_model::sample_invoices().remove(0);
    insta::assert_snapshot!(InvoicePreview::build(&invoice).to_string(), @r"
    INVOICE #001
    Status: Paid
    Date: 2025-10-01
    Due Date: 2025-10-31
    Bill To: Tech Solutions Inc.
      contact@techsolutions.com
    Items:
      Web Development: 1 x $5,000.00 = $5,000.00
      UI/UX Design: 1 x $3,000.00 = $3,000.00
    Total: $8,000.00
    ");
}

#[test]
fn preview_includes_address_and_notes_when_present() {
    let mut invoice = invoice_model::sample_invoices().remove(1);
    invoice.client_address = "12 Canal St, Amsterdam".to_string();
    invoice.notes = Some("Net 30".to_string());
    invoice.items[0].quantity = Decimal::new(25, 1);

    insta::assert_snapshot!(InvoicePreview::build(&invoice).to_string(), @r"
    INVOICE #002
    Status: Pending
    Date: 2025-10-05
    Due Date: 2025-11-05
    Bill To: Creative Studio
      hello@creativestudio.com
      12 Canal St, Amsterdam
    Items:
      Logo Design: 2.5 x $1,500.00 = $3,750.00
    Total: $3,750.00
    Notes: Net 30
    ");
}

#[test]
fn overflowing_line_is_flagged_and_never_committed() {
    let mut ws = workspace();
    run(&mut ws, [Command::NewInvoice]);
    fill_valid_draft(&mut ws, "Acme");

    let set = |field, value: &str| Command::UpdateItem {
        index: 0,
        field,
        value: value.to_string(),
    };
    ws.dispatch(set(ItemField::Quantity, "79228162514264337593543950335"))
        .unwrap();
    let events = ws.dispatch(set(ItemField::Rate, "2")).unwrap();
    assert!(events.contains(&WorkspaceEvent::ItemFlagged {
        index: 0,
        field: ItemField::Rate,
    }));
    assert_eq!(ws.draft_total(), Decimal::MAX);

    let err = ws.dispatch(Command::SubmitForm).unwrap_err();
    assert_eq!(
        err,
        WorkspaceError::Draft(DraftError::InvalidLineItems {
            issues: vec![ItemIssue {
                row: 1,
                problem: ItemProblem::AmountOutOfRange,
            }],
        })
    );
    assert!(err.is_validation());
    assert_eq!(ids(&ws), vec!["001", "002"]);
    assert_eq!(ws.stats().revenue, Decimal::from(8000));
}

fn arb_invoices() -> impl Strategy<Value = Vec<Invoice>> {
    let names = prop::sample::select(vec![
        "Tech Solutions Inc.",
        "Creative Studio",
        "Northwind Traders",
        "TECHNICA",
        "Blue Harbor",
    ]);
    prop::collection::vec(names, 0..20).prop_map(|names| {
        let template = invoice_model::sample_invoices().remove(1);
        names
            .into_iter()
            .enumerate()
            .map(|(index, name)| Invoice {
                id: InvoiceId::new(u32::try_from(index).unwrap() + 1),
                client_name: name.to_string(),
                ..template.clone()
            })
            .collect()
    })
}

/// Numeric field text, including values at and beyond the `Decimal` limits.
fn arb_numeric_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("79228162514264337593543950335".to_string()),
        Just("-79228162514264337593543950335".to_string()),
        Just("0.0000000000000000000000000001".to_string()),
        Just("792281625142643375935439503350".to_string()),
        any::<i64>().prop_map(|n| n.to_string()),
        (any::<u64>(), 0u32..=28).prop_map(|(n, scale)| Decimal::new(
            i64::try_from(n >> 1).unwrap(),
            scale
        )
        .to_string()),
    ]
}

proptest! {
    #[test]
    fn extreme_item_values_never_panic_or_commit_overflow(
        rows in prop::collection::vec((arb_numeric_text(), arb_numeric_text()), 1..5),
    ) {
        let mut ws = workspace();
        run(&mut ws, [Command::NewInvoice]);
        fill_valid_draft(&mut ws, "Acme");
        for (index, (quantity, rate)) in rows.into_iter().enumerate() {
            if index > 0 {
                run(&mut ws, [Command::AddItem]);
            }
            for (field, value) in [
                (ItemField::Description, "Line".to_string()),
                (ItemField::Quantity, quantity),
                (ItemField::Rate, rate),
            ] {
                ws.dispatch(Command::UpdateItem { index, field, value }).unwrap();
            }
        }

        let _ = ws.draft_total();
        match ws.dispatch(Command::SubmitForm) {
            Ok(_) => {
                let created = ws.invoices().last().unwrap();
                prop_assert!(created.checked_total().is_some());
            }
            Err(err) => {
                prop_assert!(err.is_validation());
                prop_assert_eq!(ws.invoices().len(), 2);
            }
        }
        let _ = ws.stats();
    }

    #[test]
    fn search_preserves_list_order(invoices in arb_invoices(), term in "(tech|studio|0|1|)") {
        let found = search(&term, &invoices);
        let positions: Vec<usize> = found
            .iter()
            .map(|hit| invoices.iter().position(|i| i.id == hit.id).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        if term.is_empty() {
            prop_assert_eq!(found.len(), invoices.len());
        }
    }
}
