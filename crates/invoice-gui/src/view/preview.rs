//! Invoice preview overlay.

use iced::widget::{button, column, container, row, rule, space, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;
use invoice_workspace::InvoicePreview;

use crate::component::{modal, status_badge};
use crate::message::{Message, PreviewMessage};
use crate::state::AppState;
use crate::theme::{
    InvoiceColors, MODAL_WIDTH_LG, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, button_primary,
    button_secondary, table_header,
};

/// Wrap `base` in the preview modal when an invoice is being previewed.
pub fn with_preview<'a>(state: &'a AppState, base: Element<'a, Message>) -> Element<'a, Message> {
    let Some(preview) = state.workspace.preview() else {
        return base;
    };
    let preview = preview.with_currency(state.currency());
    let title = preview.title();

    let download_btn: Element<'a, Message> = button(
        row![lucide::download().size(16), text("Download PDF").size(14)]
            .spacing(6)
            .align_y(Alignment::Center),
    )
    .on_press(Message::Preview(PreviewMessage::Download))
    .padding([10.0, 20.0])
    .style(button_primary)
    .into();

    let close_btn: Element<'a, Message> = button(text("Close").size(14))
        .on_press(Message::Preview(PreviewMessage::Close))
        .padding([10.0, 20.0])
        .style(button_secondary)
        .into();

    modal(
        base,
        title,
        view_sheet(&preview),
        Message::Preview(PreviewMessage::Close),
        vec![close_btn, download_btn],
        MODAL_WIDTH_LG,
    )
}

fn muted<'a>(content: String) -> iced::widget::Text<'a> {
    text(content).size(13).style(|theme: &Theme| text::Style {
        color: Some(theme.invoice().text_muted),
    })
}

fn view_sheet<'a>(preview: &InvoicePreview) -> Element<'a, Message> {
    let dates = column![
        row![muted("Date:".to_string()), text(preview.date_text()).size(13)].spacing(SPACING_XS),
        row![
            muted("Due Date:".to_string()),
            text(preview.due_date_text()).size(13)
        ]
        .spacing(SPACING_XS),
    ]
    .spacing(SPACING_XS);

    let top = row![
        column![text(preview.title()).size(26), status_badge(preview.status)].spacing(SPACING_SM),
        space::horizontal(),
        dates,
    ]
    .align_y(Alignment::Start);

    let mut bill_to = column![
        muted("BILL TO".to_string()),
        text(preview.client_name.clone()).size(16),
        muted(preview.client_email.clone()),
    ]
    .spacing(2);
    if let Some(address) = &preview.client_address {
        bill_to = bill_to.push(muted(address.clone()));
    }

    let header = container(
        row![
            text("Description").width(Length::FillPortion(5)),
            text("Qty").width(Length::FillPortion(1)),
            text("Rate").width(Length::FillPortion(2)),
            text("Amount").width(Length::FillPortion(2)),
        ]
        .spacing(SPACING_SM),
    )
    .padding([8.0, 10.0])
    .style(table_header);

    let rows = preview.rows.iter().fold(column![], |list, line| {
        list.push(
            container(
                row![
                    text(line.description.clone()).width(Length::FillPortion(5)),
                    text(line.quantity.normalize().to_string()).width(Length::FillPortion(1)),
                    text(preview.money(line.rate)).width(Length::FillPortion(2)),
                    text(preview.money(line.amount)).width(Length::FillPortion(2)),
                ]
                .spacing(SPACING_SM),
            )
            .padding([8.0, 10.0]),
        )
    });

    let total = row![
        space::horizontal(),
        text("Total:").size(18),
        text(preview.money(preview.total)).size(22),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    let mut sheet = column![
        top,
        rule::horizontal(1),
        bill_to,
        column![header, rows],
        total
    ]
    .spacing(SPACING_MD);

    if let Some(notes) = &preview.notes {
        sheet = sheet.push(
            column![muted("Notes".to_string()), text(notes.clone()).size(13)].spacing(SPACING_XS),
        );
    }

    container(sheet).padding([0.0, SPACING_LG]).into()
}
