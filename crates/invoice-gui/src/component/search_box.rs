//! Search box component.
//!
//! A text input with search icon and clear button.

use iced::widget::{button, container, row, text_input};
use iced::{Alignment, Border, Element, Length, Padding, Theme};
use iced_fonts::lucide;

use crate::theme::{BORDER_RADIUS_SM, InvoiceColors, SPACING_XS, button_ghost, text_input_default};

/// Creates a search input with clear button.
///
/// The clear button only appears while there is text.
///
/// # Arguments
///
/// * `value` - Current search text
/// * `placeholder` - Placeholder text
/// * `on_change` - Message factory for text changes
/// * `on_clear` - Message to send when clear button is clicked
pub fn search_box<'a, M: Clone + 'a>(
    value: &str,
    placeholder: &str,
    on_change: impl Fn(String) -> M + 'a,
    on_clear: M,
) -> Element<'a, M> {
    let search_icon =
        container(lucide::search().size(16)).style(|theme: &Theme| container::Style {
            text_color: Some(theme.invoice().text_muted),
            ..Default::default()
        });

    let input = text_input(placeholder, value)
        .on_input(on_change)
        .padding(Padding::new(10.0).left(4.0))
        .width(Length::Fill)
        .style(text_input_default);

    let mut content = row![
        container(search_icon)
            .width(Length::Fixed(32.0))
            .center_x(Length::Fixed(32.0)),
        input,
    ]
    .align_y(Alignment::Center);

    if !value.is_empty() {
        content = content.push(
            button(lucide::x().size(16))
                .on_press(on_clear)
                .padding([4.0, 8.0])
                .style(button_ghost),
        );
    }

    container(content.spacing(SPACING_XS))
        .width(Length::Fill)
        .style(|theme: &Theme| {
            let colors = theme.invoice();
            container::Style {
                background: Some(colors.background_elevated.into()),
                border: Border {
                    color: colors.border_default,
                    width: 1.0,
                    radius: BORDER_RADIUS_SM.into(),
                },
                ..Default::default()
            }
        })
        .into()
}
