//! Dashboard view: statistics, search and the invoice table.

use iced::widget::{Space, button, column, container, row, rule, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;
use invoice_model::{Invoice, format_money};

use crate::component::{search_box, stat_card, status_badge};
use crate::message::{DashboardMessage, Message};
use crate::state::AppState;
use crate::theme::{
    InvoiceColors, SPACING_LG, SPACING_MD, SPACING_SM, button_ghost, button_ghost_danger, card,
    table_header,
};

/// Relative widths of the table columns, in display order.
const COLUMNS: [(&str, u16); 7] = [
    ("Invoice #", 2),
    ("Client", 4),
    ("Date", 2),
    ("Due Date", 2),
    ("Amount", 2),
    ("Status", 2),
    ("Actions", 3),
];

pub fn view_dashboard(state: &AppState) -> Element<'_, Message> {
    column![view_stats(state), view_invoice_list(state)]
        .spacing(SPACING_LG)
        .into()
}

// =============================================================================
// STATISTICS
// =============================================================================

fn view_stats(state: &AppState) -> Element<'_, Message> {
    let stats = state.workspace.stats();

    row![
        stat_card(
            "Total Invoices",
            stats.total.to_string(),
            lucide::file_text(),
            |theme: &Theme| theme.extended_palette().primary.base.color,
        ),
        stat_card(
            "Paid",
            stats.paid.to_string(),
            lucide::circle_check(),
            |theme: &Theme| theme.extended_palette().success.base.color,
        ),
        stat_card(
            "Pending",
            stats.pending.to_string(),
            lucide::timer(),
            |theme: &Theme| theme.extended_palette().warning.base.color,
        ),
        stat_card(
            "Revenue",
            format_money(state.currency(), stats.revenue),
            lucide::calculator(),
            |theme: &Theme| theme.extended_palette().primary.strong.color,
        ),
    ]
    .spacing(SPACING_MD)
    .into()
}

// =============================================================================
// INVOICE LIST
// =============================================================================

fn view_invoice_list(state: &AppState) -> Element<'_, Message> {
    let search = search_box(
        state.workspace.search_term(),
        "Search by client name or invoice number...",
        |term| Message::Dashboard(DashboardMessage::SearchChanged(term)),
        Message::Dashboard(DashboardMessage::SearchCleared),
    );

    let overdue = state.workspace.stats().overdue;
    let mut title_row = row![text("Invoices").size(18)].align_y(Alignment::Center);
    if overdue > 0 {
        title_row = title_row.push(Space::new().width(SPACING_SM)).push(
            text(format!("{overdue} overdue"))
                .size(12)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().danger.base.color),
                }),
        );
    }

    let invoices = state.workspace.filtered();
    let body: Element<'_, Message> = if invoices.is_empty() {
        container(text("No invoices found").size(14).style(|theme: &Theme| text::Style {
            color: Some(theme.invoice().text_muted),
        }))
        .padding(SPACING_LG)
        .center_x(Length::Fill)
        .into()
    } else {
        invoices
            .into_iter()
            .fold(column![], |list, invoice| {
                list.push(view_invoice_row(state, invoice))
                    .push(rule::horizontal(1))
            })
            .into()
    };

    container(
        column![
            title_row,
            search,
            column![view_table_header(), body],
        ]
        .spacing(SPACING_MD),
    )
    .padding(SPACING_LG)
    .width(Length::Fill)
    .style(card)
    .into()
}

fn view_table_header<'a>() -> Element<'a, Message> {
    let cells = COLUMNS.iter().fold(row![], |r, (label, portion)| {
        r.push(
            text(*label)
                .size(12)
                .width(Length::FillPortion(*portion)),
        )
    });
    container(cells.spacing(SPACING_SM))
        .padding([10.0, 12.0])
        .width(Length::Fill)
        .style(table_header)
        .into()
}

fn view_invoice_row<'a>(state: &'a AppState, invoice: &'a Invoice) -> Element<'a, Message> {
    let id = invoice.id;
    let cell = |content: Element<'a, Message>, index: usize| -> Element<'a, Message> {
        container(content)
            .width(Length::FillPortion(COLUMNS[index].1))
            .into()
    };

    let client = column![
        text(&invoice.client_name).size(14),
        text(&invoice.client_email)
            .size(12)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.invoice().text_muted),
            }),
    ]
    .spacing(2);

    let action = |icon: iced::widget::Text<'a>, msg: DashboardMessage| {
        button(icon.size(16))
            .on_press(Message::Dashboard(msg))
            .padding(6)
            .style(button_ghost)
    };

    let actions = row![
        action(lucide::eye(), DashboardMessage::Preview(id)),
        action(lucide::pencil(), DashboardMessage::Edit(id)),
        action(lucide::download(), DashboardMessage::Download(id)),
        action(lucide::trash_two(), DashboardMessage::Delete(id)).style(button_ghost_danger),
    ]
    .spacing(2);

    let cells = row![
        cell(text(format!("#{id}")).size(14).into(), 0),
        cell(client.into(), 1),
        cell(text(invoice.date.to_string()).size(13).into(), 2),
        cell(text(invoice.due_date.to_string()).size(13).into(), 3),
        cell(
            text(format_money(state.currency(), invoice.total()))
                .size(14)
                .into(),
            4,
        ),
        cell(status_badge(invoice.status), 5),
        cell(actions.into(), 6),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    container(cells).padding([10.0, 12.0]).width(Length::Fill).into()
}
