//! Theme creation and widget style functions.
//!
//! Style functions receive `&Theme` and read colors from it, so they follow
//! the light/dark mode automatically:
//!
//! ```rust,ignore
//! button(text("Save")).style(button_primary)
//! ```

use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use super::colors::InvoiceColors;
use super::palette::{ThemeMode, invoice_palette};
use super::spacing::{BORDER_RADIUS_MD, BORDER_RADIUS_SM, BORDER_WIDTH_MEDIUM, BORDER_WIDTH_THIN};

// =============================================================================
// THEME CREATION
// =============================================================================

/// Build the application theme for the given mode.
pub fn invoice_theme(theme_mode: ThemeMode, system_is_dark: bool) -> Theme {
    let is_dark = theme_mode.is_dark(system_is_dark);
    let name = if is_dark {
        "Invoice Hub Dark"
    } else {
        "Invoice Hub Light"
    };
    Theme::custom(name.to_string(), invoice_palette(theme_mode, system_is_dark))
}

// =============================================================================
// BUTTON STYLES
// =============================================================================

fn flat(background: Option<Color>, text_color: Color, border: Border, shadow: Shadow) -> button::Style {
    button::Style {
        background: background.map(Background::from),
        text_color,
        border,
        shadow,
        ..Default::default()
    }
}

fn radius_only() -> Border {
    Border {
        radius: BORDER_RADIUS_SM.into(),
        width: 0.0,
        color: Color::TRANSPARENT,
    }
}

/// Primary button style - main actions.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let colors = theme.invoice();

    match status {
        button::Status::Active => flat(
            Some(palette.primary.base.color),
            colors.text_on_accent,
            radius_only(),
            Shadow {
                color: colors.shadow,
                offset: Vector::new(0.0, 1.0),
                blur_radius: 2.0,
            },
        ),
        button::Status::Hovered => flat(
            Some(colors.accent_hover),
            colors.text_on_accent,
            radius_only(),
            Shadow {
                color: colors.shadow_strong,
                offset: Vector::new(0.0, 2.0),
                blur_radius: 4.0,
            },
        ),
        button::Status::Pressed => flat(
            Some(colors.accent_pressed),
            colors.text_on_accent,
            radius_only(),
            Shadow::default(),
        ),
        button::Status::Disabled => flat(
            Some(colors.accent_disabled),
            colors.text_muted,
            radius_only(),
            Shadow::default(),
        ),
    }
}

/// Secondary button style - cancel, navigation.
pub fn button_secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let colors = theme.invoice();
    let bordered = |color: Color| Border {
        radius: BORDER_RADIUS_SM.into(),
        width: BORDER_WIDTH_THIN,
        color,
    };

    match status {
        button::Status::Active => flat(
            Some(colors.background_elevated),
            colors.text_secondary,
            bordered(colors.border_default),
            Shadow::default(),
        ),
        button::Status::Hovered => flat(
            Some(palette.background.base.color),
            colors.text_secondary,
            bordered(colors.text_disabled),
            Shadow::default(),
        ),
        button::Status::Pressed => flat(
            Some(colors.background_secondary),
            colors.text_secondary,
            bordered(colors.border_default),
            Shadow::default(),
        ),
        button::Status::Disabled => flat(
            Some(colors.background_secondary),
            colors.text_disabled,
            bordered(colors.border_subtle),
            Shadow::default(),
        ),
    }
}

/// Ghost button style - icon actions in tables and headers.
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let colors = theme.invoice();

    match status {
        button::Status::Active => flat(
            None,
            palette.primary.base.color,
            radius_only(),
            Shadow::default(),
        ),
        button::Status::Hovered => flat(
            Some(colors.accent_light),
            palette.primary.base.color,
            radius_only(),
            Shadow::default(),
        ),
        button::Status::Pressed => flat(
            Some(colors.accent_medium),
            colors.accent_pressed,
            radius_only(),
            Shadow::default(),
        ),
        button::Status::Disabled => flat(None, colors.text_disabled, radius_only(), Shadow::default()),
    }
}

/// Ghost button tinted with the danger color.
pub fn button_ghost_danger(theme: &Theme, status: button::Status) -> button::Style {
    let danger = theme.extended_palette().danger.base.color;
    let mut style = button_ghost(theme, status);
    if !matches!(status, button::Status::Disabled) {
        style.text_color = danger;
    }
    style
}

/// Navigation button in the header; `active` marks the current view.
pub fn button_nav(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        if active {
            button_primary(theme, status)
        } else {
            button_ghost(theme, status)
        }
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Elevated card with a subtle border.
pub fn card(theme: &Theme) -> container::Style {
    let colors = theme.invoice();
    container::Style {
        background: Some(colors.background_elevated.into()),
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            width: BORDER_WIDTH_THIN,
            color: colors.border_subtle,
        },
        shadow: Shadow {
            color: colors.shadow,
            offset: Vector::new(0.0, 1.0),
            blur_radius: 3.0,
        },
        ..Default::default()
    }
}

/// Header row of a table.
pub fn table_header(theme: &Theme) -> container::Style {
    let colors = theme.invoice();
    container::Style {
        background: Some(colors.background_secondary.into()),
        text_color: Some(colors.text_muted),
        ..Default::default()
    }
}

// =============================================================================
// TEXT INPUT STYLES
// =============================================================================

fn input_style(theme: &Theme, status: text_input::Status, idle_border: Color) -> text_input::Style {
    let palette = theme.extended_palette();
    let colors = theme.invoice();

    let (width, color) = match status {
        text_input::Status::Active => (BORDER_WIDTH_THIN, idle_border),
        text_input::Status::Hovered => (BORDER_WIDTH_THIN, colors.text_disabled),
        text_input::Status::Focused { .. } => (BORDER_WIDTH_MEDIUM, colors.border_focused),
        text_input::Status::Disabled => (BORDER_WIDTH_THIN, colors.border_subtle),
    };

    text_input::Style {
        background: colors.background_elevated.into(),
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width,
            color,
        },
        icon: colors.text_muted,
        placeholder: colors.text_disabled,
        value: palette.background.base.text,
        selection: colors.accent_medium,
    }
}

/// Standard text input.
pub fn text_input_default(theme: &Theme, status: text_input::Status) -> text_input::Style {
    input_style(theme, status, theme.invoice().border_default)
}

/// Input holding a value that does not parse.
pub fn text_input_flagged(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let mut style = input_style(theme, status, theme.invoice().border_error);
    if !matches!(status, text_input::Status::Focused { .. }) {
        style.border.width = BORDER_WIDTH_MEDIUM;
    }
    style.border.color = theme.invoice().border_error;
    style
}
