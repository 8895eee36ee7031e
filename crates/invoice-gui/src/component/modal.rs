//! Modal dialog overlay component.
//!
//! Provides modal dialogs with backdrop, title, content, and action buttons.

use iced::widget::{button, center, column, container, opaque, row, space, stack, text};
use iced::{Border, Element, Length, Shadow, Theme, Vector};
use iced_fonts::lucide;

use crate::theme::{
    BORDER_RADIUS_LG, InvoiceColors, MODAL_WIDTH_SM, SPACING_LG, SPACING_MD, SPACING_SM,
    button_ghost, button_primary,
};

// =============================================================================
// MODAL DIALOG
// =============================================================================

/// Creates a modal dialog overlay.
///
/// The dialog is centered over `base` with a semi-transparent backdrop.
/// Clicking the backdrop does not close it; use the close button.
///
/// # Arguments
///
/// * `base` - The background content (entire app view)
/// * `title` - Modal title text
/// * `content` - Modal body content
/// * `on_close` - Message sent by the close button
/// * `actions` - Footer buttons, right-aligned
/// * `width` - Dialog width in pixels
pub fn modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: impl Into<String>,
    content: Element<'a, M>,
    on_close: M,
    actions: Vec<Element<'a, M>>,
    width: f32,
) -> Element<'a, M> {
    let backdrop = container(column![])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.invoice().backdrop.into()),
            ..Default::default()
        });

    let header = row![
        text(title.into())
            .size(18)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.base.text),
            }),
        space::horizontal(),
        button(
            container(lucide::x().size(20)).style(|theme: &Theme| container::Style {
                text_color: Some(theme.invoice().text_muted),
                ..Default::default()
            })
        )
        .on_press(on_close)
        .padding([4.0, 8.0])
        .style(button_ghost),
    ]
    .align_y(iced::Alignment::Center);

    let action_row = actions
        .into_iter()
        .fold(row![space::horizontal()].spacing(SPACING_SM), |r, action| {
            r.push(action)
        });

    let dialog = container(
        column![
            header,
            container(content).padding([SPACING_MD, 0.0]),
            action_row,
        ]
        .spacing(SPACING_MD),
    )
    .width(Length::Fixed(width))
    .padding(SPACING_LG)
    .style(|theme: &Theme| {
        let colors = theme.invoice();
        container::Style {
            background: Some(colors.background_elevated.into()),
            border: Border {
                radius: BORDER_RADIUS_LG.into(),
                width: 1.0,
                color: colors.border_default,
            },
            shadow: Shadow {
                color: colors.shadow_strong,
                offset: Vector::new(0.0, 4.0),
                blur_radius: 24.0,
            },
            ..Default::default()
        }
    });

    // Stack layers: base -> backdrop -> dialog
    stack![base, opaque(backdrop), center(dialog)].into()
}

/// Creates an alert modal with a single OK button.
///
/// `detail` is shown in muted text under the message when present.
pub fn alert_modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: &'a str,
    message: &'a str,
    detail: Option<&'a str>,
    on_close: M,
) -> Element<'a, M> {
    let mut body = column![text(message).size(14)].spacing(SPACING_SM);
    if let Some(detail) = detail {
        body = body.push(text(detail).size(12).style(|theme: &Theme| text::Style {
            color: Some(theme.invoice().text_muted),
        }));
    }

    let ok_btn: Element<'a, M> = button(text("OK"))
        .on_press(on_close.clone())
        .padding([10.0, 20.0])
        .style(button_primary)
        .into();

    modal(base, title, body.into(), on_close, vec![ok_btn], MODAL_WIDTH_SM)
}
