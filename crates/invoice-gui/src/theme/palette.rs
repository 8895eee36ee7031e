//! Color palettes for light and dark appearance.

use iced::Color;
use iced::theme::Palette;
use serde::{Deserialize, Serialize};

// =============================================================================
// THEME MODE
// =============================================================================

/// Theme mode for light/dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    System,
}

impl ThemeMode {
    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }

    /// All available modes for UI picker.
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::System];

    /// Check if this is a dark mode (or resolves to dark).
    pub fn is_dark(&self, system_is_dark: bool) -> bool {
        match self {
            Self::Light => false,
            Self::Dark => true,
            Self::System => system_is_dark,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// PALETTE CREATION
// =============================================================================

/// Iced palette for the given mode.
pub fn invoice_palette(theme_mode: ThemeMode, system_is_dark: bool) -> Palette {
    if theme_mode.is_dark(system_is_dark) {
        dark()
    } else {
        light()
    }
}

/// Light palette: slate text on near-white, indigo accent.
fn light() -> Palette {
    Palette {
        background: Color::from_rgb(0.97, 0.98, 0.99), // Slate 50
        text: Color::from_rgb(0.06, 0.09, 0.16),       // Slate 900
        primary: Color::from_rgb(0.31, 0.27, 0.90),    // Indigo 600
        success: Color::from_rgb(0.09, 0.64, 0.29),    // Green 600
        warning: Color::from_rgb(0.79, 0.54, 0.02),    // Yellow 600
        danger: Color::from_rgb(0.86, 0.15, 0.15),     // Red 600
    }
}

fn dark() -> Palette {
    Palette {
        background: Color::from_rgb(0.06, 0.09, 0.16),
        text: Color::from_rgb(0.95, 0.96, 0.98),
        primary: Color::from_rgb(0.51, 0.55, 0.97), // Indigo 400
        success: Color::from_rgb(0.29, 0.87, 0.50),
        warning: Color::from_rgb(0.98, 0.80, 0.08),
        danger: Color::from_rgb(0.97, 0.44, 0.44),
    }
}
