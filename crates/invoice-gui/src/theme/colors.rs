//! Application color extension trait.
//!
//! Adds [`InvoiceColors::invoice`] to Iced's `Theme` for colors the built-in
//! `ExtendedPalette` does not cover. Use it inside style closures:
//!
//! ```rust,ignore
//! container(content).style(|theme: &Theme| container::Style {
//!     background: Some(theme.invoice().background_elevated.into()),
//!     ..Default::default()
//! })
//! ```

use iced::{Color, Theme};
use invoice_model::InvoiceStatus;

// =============================================================================
// COLOR SET
// =============================================================================

#[derive(Debug, Clone, Copy)]
pub struct InvoiceColorSet {
    // === Text ===
    pub text_secondary: Color,
    /// Descriptions, hints, table headers
    pub text_muted: Color,
    pub text_disabled: Color,
    pub text_on_accent: Color,

    // === Borders ===
    pub border_default: Color,
    pub border_subtle: Color,
    pub border_focused: Color,
    pub border_error: Color,

    // === Backgrounds ===
    /// Cards, modals, inputs. White in light mode.
    pub background_elevated: Color,
    /// Table header and total rows
    pub background_secondary: Color,

    // === Interactive ===
    pub accent_hover: Color,
    pub accent_pressed: Color,
    pub accent_disabled: Color,
    /// Light tint of the accent, ghost button hover
    pub accent_light: Color,
    pub accent_medium: Color,

    // === Special ===
    pub shadow: Color,
    pub shadow_strong: Color,
    /// Modal backdrop overlay
    pub backdrop: Color,
}

/// Badge foreground and background for an invoice status.
#[derive(Debug, Clone, Copy)]
pub struct StatusColors {
    pub text: Color,
    pub background: Color,
}

// =============================================================================
// EXTENSION TRAIT
// =============================================================================

pub trait InvoiceColors {
    fn invoice(&self) -> InvoiceColorSet;

    fn status(&self, status: InvoiceStatus) -> StatusColors;
}

impl InvoiceColors for Theme {
    fn invoice(&self) -> InvoiceColorSet {
        let palette = self.extended_palette();
        let is_dark = palette.is_dark;
        let primary = palette.primary.base.color;
        let danger = palette.danger.base.color;

        InvoiceColorSet {
            text_secondary: if is_dark {
                Color::from_rgb(0.80, 0.82, 0.86)
            } else {
                Color::from_rgb(0.28, 0.33, 0.41)
            },
            text_muted: if is_dark {
                Color::from_rgb(0.58, 0.64, 0.72)
            } else {
                Color::from_rgb(0.39, 0.45, 0.55)
            },
            text_disabled: if is_dark {
                Color::from_rgb(0.40, 0.44, 0.50)
            } else {
                Color::from_rgb(0.70, 0.73, 0.78)
            },
            text_on_accent: Color::WHITE,

            border_default: palette.background.strong.color,
            border_subtle: if is_dark {
                Color::from_rgb(0.18, 0.22, 0.30)
            } else {
                Color::from_rgb(0.89, 0.91, 0.94)
            },
            border_focused: primary,
            border_error: danger,

            background_elevated: if is_dark {
                Color::from_rgb(0.12, 0.16, 0.23)
            } else {
                Color::WHITE
            },
            background_secondary: palette.background.weak.color,

            accent_hover: palette.primary.strong.color,
            accent_pressed: blend_color(primary, Color::BLACK, if is_dark { 0.20 } else { 0.15 }),
            accent_disabled: if is_dark {
                Color::from_rgb(0.30, 0.32, 0.38)
            } else {
                Color::from_rgb(0.80, 0.82, 0.87)
            },
            accent_light: tint(primary, is_dark, 0.15, 0.88),
            accent_medium: tint(primary, is_dark, 0.25, 0.70),

            shadow: Color::from_rgba(0.0, 0.0, 0.0, if is_dark { 0.25 } else { 0.08 }),
            shadow_strong: Color::from_rgba(0.0, 0.0, 0.0, if is_dark { 0.40 } else { 0.16 }),
            backdrop: Color::from_rgba(0.0, 0.0, 0.0, if is_dark { 0.70 } else { 0.50 }),
        }
    }

    fn status(&self, status: InvoiceStatus) -> StatusColors {
        let palette = self.extended_palette();
        let base = match status {
            InvoiceStatus::Paid => palette.success.base.color,
            InvoiceStatus::Pending => palette.warning.base.color,
            InvoiceStatus::Overdue => palette.danger.base.color,
        };
        StatusColors {
            text: base,
            background: tint(base, palette.is_dark, 0.18, 0.85),
        }
    }
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Translucent tint in dark mode, blend toward white in light mode.
fn tint(color: Color, is_dark: bool, dark_alpha: f32, light_factor: f32) -> Color {
    if is_dark {
        Color::from_rgba(color.r, color.g, color.b, dark_alpha)
    } else {
        blend_color(color, Color::WHITE, light_factor)
    }
}

/// Blend two colors together.
///
/// `factor` of 0.0 returns `base`, 1.0 returns `blend`.
fn blend_color(base: Color, blend: Color, factor: f32) -> Color {
    Color::from_rgb(
        base.r + (blend.r - base.r) * factor,
        base.g + (blend.g - base.g) * factor,
        base.b + (blend.b - base.b) * factor,
    )
}
