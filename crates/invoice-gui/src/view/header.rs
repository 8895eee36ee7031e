//! Application header: brand, theme picker and navigation.

use iced::widget::{button, column, container, pick_list, row, space, text};
use iced::{Alignment, Border, Element, Length, Theme};
use iced_fonts::lucide;
use invoice_workspace::{FormMode, View};

use crate::message::Message;
use crate::state::AppState;
use crate::theme::{InvoiceColors, SPACING_MD, SPACING_SM, SPACING_XL, ThemeMode, button_nav};

pub fn view_header(state: &AppState) -> Element<'_, Message> {
    let view = state.workspace.view();

    let logo = container(lucide::file_text().size(22).style(|theme: &Theme| text::Style {
        color: Some(theme.invoice().text_on_accent),
    }))
    .padding(SPACING_SM)
    .style(|theme: &Theme| container::Style {
        background: Some(theme.extended_palette().primary.base.color.into()),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    let brand = row![
        logo,
        column![
            text("InvoiceHub").size(22),
            text("Professional Invoice Management")
                .size(12)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.invoice().text_muted),
                }),
        ]
        .spacing(2),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    let theme_picker = pick_list(
        ThemeMode::ALL.to_vec(),
        Some(state.settings.display.theme_mode),
        Message::ThemeModeSelected,
    )
    .text_size(13)
    .padding([6.0, 10.0]);

    let dashboard_btn = button(
        row![lucide::list().size(16), text("Dashboard").size(14)]
            .spacing(6)
            .align_y(Alignment::Center),
    )
    .on_press(Message::ShowDashboard)
    .padding([8.0, 14.0])
    .style(button_nav(view.is_dashboard()));

    let new_btn = button(
        row![lucide::plus().size(16), text("New Invoice").size(14)]
            .spacing(6)
            .align_y(Alignment::Center),
    )
    .on_press(Message::NewInvoice)
    .padding([8.0, 14.0])
    .style(button_nav(view == View::Create(FormMode::New)));

    container(
        row![
            brand,
            space::horizontal(),
            theme_picker,
            dashboard_btn,
            new_btn
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
    )
    .padding([SPACING_MD, SPACING_XL])
    .width(Length::Fill)
    .style(|theme: &Theme| {
        let colors = theme.invoice();
        container::Style {
            background: Some(colors.background_elevated.into()),
            border: Border {
                width: 1.0,
                color: colors.border_subtle,
                ..Default::default()
            },
            shadow: iced::Shadow {
                color: colors.shadow,
                offset: iced::Vector::new(0.0, 1.0),
                blur_radius: 3.0,
            },
            ..Default::default()
        }
    })
    .into()
}
