//! Toast notification component.
//!
//! Shows a temporary notification that auto-dismisses after a timeout (see
//! `App::subscription`).

use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Border, Element, Length, Shadow, Theme, Vector};
use iced_fonts::lucide;

use crate::message::Message;
use crate::theme::{BORDER_RADIUS_MD, InvoiceColors, SPACING_MD, SPACING_SM, SPACING_XS, button_ghost};

/// Toast notification state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastState {
    pub message: String,
    pub toast_type: ToastType,
}

/// Type of toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Success,
    Info,
    Error,
}

/// Toast message for handling toast events.
#[derive(Debug, Clone)]
pub enum ToastMessage {
    Dismiss,
}

impl ToastState {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            toast_type: ToastType::Success,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            toast_type: ToastType::Info,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            toast_type: ToastType::Error,
        }
    }
}

/// Renders a toast notification.
pub fn view_toast(state: &ToastState) -> Element<'_, Message> {
    let toast_type = state.toast_type;
    let icon = match toast_type {
        ToastType::Success => lucide::circle_check(),
        ToastType::Info => lucide::info(),
        ToastType::Error => lucide::circle_x(),
    }
    .size(18)
    .style(move |theme: &Theme| {
        let palette = theme.extended_palette();
        text::Style {
            color: Some(match toast_type {
                ToastType::Success => palette.success.base.color,
                ToastType::Info => palette.primary.base.color,
                ToastType::Error => palette.danger.base.color,
            }),
        }
    });

    let message_text = text(&state.message)
        .size(14)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.invoice().text_secondary),
        });

    let dismiss_btn = button(lucide::x().size(14))
        .on_press(Message::Toast(ToastMessage::Dismiss))
        .padding(SPACING_XS)
        .style(button_ghost);

    let content = row![
        icon,
        Space::new().width(SPACING_SM),
        message_text,
        Space::new().width(SPACING_SM),
        dismiss_btn,
    ]
    .align_y(Alignment::Center)
    .spacing(SPACING_XS);

    container(content)
        .padding([SPACING_SM, SPACING_MD])
        .width(Length::Shrink)
        .style(|theme: &Theme| {
            let colors = theme.invoice();
            container::Style {
                background: Some(colors.background_elevated.into()),
                border: Border {
                    color: colors.border_default,
                    width: 1.0,
                    radius: BORDER_RADIUS_MD.into(),
                },
                shadow: Shadow {
                    color: colors.shadow_strong,
                    offset: Vector::new(0.0, 2.0),
                    blur_radius: 8.0,
                },
                ..Default::default()
            }
        })
        .into()
}
