//! Create/edit invoice form.

use iced::widget::{Space, button, column, container, pick_list, row, space, text, text_input};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;
use invoice_model::{InvoiceStatus, format_money};
use invoice_workspace::{DraftField, FormMode, ItemField, LineItemDraft, NumericInput};

use crate::message::{FormMessage, Message};
use crate::state::AppState;
use crate::theme::{
    InvoiceColors, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, button_ghost_danger,
    button_primary, button_secondary, card, table_header, text_input_default, text_input_flagged,
};

pub fn view_form(state: &AppState, mode: FormMode) -> Element<'_, Message> {
    let draft = state.workspace.draft();

    let client_row = row![
        text_field(state, "Client Name", DraftField::ClientName, "Acme Corporation", true),
        text_field(state, "Client Email", DraftField::ClientEmail, "billing@acme.com", true),
    ]
    .spacing(SPACING_MD);

    let status_picker = column![
        field_label("Status", false),
        pick_list(InvoiceStatus::ALL.to_vec(), Some(draft.status), |status| {
            Message::Form(FormMessage::StatusSelected(status))
        })
        .width(Length::Fill)
        .padding(10),
    ]
    .spacing(SPACING_XS)
    .width(Length::Fill);

    let date_row = row![
        text_field(state, "Invoice Date", DraftField::Date, "YYYY-MM-DD", true),
        text_field(state, "Due Date", DraftField::DueDate, "YYYY-MM-DD", true),
        status_picker,
    ]
    .spacing(SPACING_MD);

    let notes = text_field(
        state,
        "Notes",
        DraftField::Notes,
        "Payment terms, thank-you note...",
        false,
    );

    let submit_btn = button(
        row![
            lucide::save().size(16),
            text(mode.submit_label()).size(14)
        ]
        .spacing(6)
        .align_y(Alignment::Center),
    )
    .on_press(Message::Form(FormMessage::Submit))
    .padding([10.0, 20.0])
    .style(button_primary);

    let cancel_btn = button(text("Cancel").size(14))
        .on_press(Message::Form(FormMessage::Cancel))
        .padding([10.0, 20.0])
        .style(button_secondary);

    let content = column![
        text(mode.title()).size(24),
        client_row,
        text_field(
            state,
            "Client Address",
            DraftField::ClientAddress,
            "Street, City, Country",
            false,
        ),
        date_row,
        view_items(state),
        notes,
        row![space::horizontal(), cancel_btn, submit_btn].spacing(SPACING_SM),
    ]
    .spacing(SPACING_LG);

    container(content)
        .padding(SPACING_LG)
        .width(Length::Fill)
        .style(card)
        .into()
}

// =============================================================================
// HEADER FIELDS
// =============================================================================

fn field_label<'a>(label: &'a str, required: bool) -> Element<'a, Message> {
    let mut r = row![text(label).size(13).style(|theme: &Theme| text::Style {
        color: Some(theme.invoice().text_secondary),
    })];
    if required {
        r = r.push(text(" *").size(13).style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().danger.base.color),
        }));
    }
    r.into()
}

fn text_field<'a>(
    state: &'a AppState,
    label: &'a str,
    field: DraftField,
    placeholder: &'a str,
    required: bool,
) -> Element<'a, Message> {
    column![
        field_label(label, required),
        text_input(placeholder, state.workspace.draft().field(field))
            .on_input(move |value| Message::Form(FormMessage::FieldChanged(field, value)))
            .padding(10)
            .style(text_input_default),
    ]
    .spacing(SPACING_XS)
    .width(Length::Fill)
    .into()
}

// =============================================================================
// LINE ITEMS
// =============================================================================

const ITEM_PORTIONS: [u16; 4] = [6, 2, 3, 3];

fn view_items(state: &AppState) -> Element<'_, Message> {
    let draft = state.workspace.draft();
    let can_remove = draft.can_remove_items();

    let add_btn = button(
        row![lucide::plus().size(14), text("Add Item").size(13)]
            .spacing(4)
            .align_y(Alignment::Center),
    )
    .on_press(Message::Form(FormMessage::AddItem))
    .padding([6.0, 12.0])
    .style(button_secondary);

    let header = container(
        row![
            text("Description").width(Length::FillPortion(ITEM_PORTIONS[0])),
            text("Quantity").width(Length::FillPortion(ITEM_PORTIONS[1])),
            text("Rate").width(Length::FillPortion(ITEM_PORTIONS[2])),
            text("Amount").width(Length::FillPortion(ITEM_PORTIONS[3])),
            Space::new().width(Length::Fixed(36.0)),
        ]
        .spacing(SPACING_SM),
    )
    .padding([8.0, 10.0])
    .style(table_header);

    let rows = draft
        .items()
        .iter()
        .enumerate()
        .fold(column![].spacing(SPACING_SM), |list, (index, item)| {
            list.push(view_item_row(state, index, item, can_remove))
        });

    let total = container(
        row![
            space::horizontal(),
            text("Total:").size(16),
            text(format_money(state.currency(), state.workspace.draft_total())).size(20),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
    )
    .padding([SPACING_SM, 10.0])
    .style(table_header);

    column![
        row![text("Line Items").size(18), space::horizontal(), add_btn]
            .align_y(Alignment::Center),
        header,
        rows,
        total,
    ]
    .spacing(SPACING_SM)
    .into()
}

fn view_item_row<'a>(
    state: &'a AppState,
    index: usize,
    item: &'a LineItemDraft,
    can_remove: bool,
) -> Element<'a, Message> {
    let on_change = move |field: ItemField| {
        move |value: String| {
            Message::Form(FormMessage::ItemChanged {
                index,
                field,
                value,
            })
        }
    };

    let description = text_input("Service or product", &item.description)
        .on_input(on_change(ItemField::Description))
        .padding(8)
        .style(text_input_default)
        .width(Length::FillPortion(ITEM_PORTIONS[0]));

    let in_range = item.amount_in_range();
    let numeric = |input: &'a NumericInput, field: ItemField, portion: u16| {
        text_input("0", input.raw())
            .on_input(on_change(field))
            .padding(8)
            .width(Length::FillPortion(portion))
            .style(if input.is_valid() && in_range {
                text_input_default
            } else {
                text_input_flagged
            })
    };

    let amount = text(format_money(state.currency(), item.amount()))
        .size(14)
        .width(Length::FillPortion(ITEM_PORTIONS[3]));

    // The remove action is only offered while more than one item exists.
    let remove: Element<'a, Message> = if can_remove {
        button(lucide::trash_two().size(16))
            .on_press(Message::Form(FormMessage::RemoveItem(index)))
            .padding(8)
            .style(button_ghost_danger)
            .into()
    } else {
        Space::new().width(Length::Fixed(36.0)).into()
    };

    row![
        description,
        numeric(&item.quantity, ItemField::Quantity, ITEM_PORTIONS[1]),
        numeric(&item.rate, ItemField::Rate, ITEM_PORTIONS[2]),
        amount,
        remove,
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center)
    .into()
}
