//! Dashboard statistic card.

use iced::widget::{column, container, row, space, text};
use iced::{Alignment, Element, Length, Theme};

use crate::theme::{InvoiceColors, SPACING_LG, SPACING_XS, card};

/// Card with a label, a large value and an icon on the right.
///
/// `accent` picks the icon color from the palette.
pub fn stat_card<'a, M: 'a>(
    label: &'a str,
    value: String,
    icon: iced::widget::Text<'a>,
    accent: fn(&Theme) -> iced::Color,
) -> Element<'a, M> {
    let text_block = column![
        text(label).size(13).style(|theme: &Theme| text::Style {
            color: Some(theme.invoice().text_muted),
        }),
        text(value).size(28),
    ]
    .spacing(SPACING_XS);

    let icon = icon.size(32).style(move |theme: &Theme| text::Style {
        color: Some(accent(theme)),
    });

    container(
        row![text_block, space::horizontal(), icon].align_y(Alignment::Center),
    )
    .padding(SPACING_LG)
    .width(Length::Fill)
    .style(card)
    .into()
}
