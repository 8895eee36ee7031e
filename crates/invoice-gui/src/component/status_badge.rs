//! Invoice status badge.

use iced::widget::{container, text};
use iced::{Border, Element, Theme};
use invoice_model::InvoiceStatus;

use crate::theme::{BORDER_RADIUS_FULL, InvoiceColors};

/// Pill showing the uppercase status (`PAID`, `PENDING`, `OVERDUE`).
pub fn status_badge<'a, M: 'a>(status: InvoiceStatus) -> Element<'a, M> {
    container(
        text(status.badge())
            .size(11)
            .style(move |theme: &Theme| text::Style {
                color: Some(theme.status(status).text),
            }),
    )
    .padding([4.0, 10.0])
    .style(move |theme: &Theme| container::Style {
        background: Some(theme.status(status).background.into()),
        border: Border {
            radius: BORDER_RADIUS_FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}
