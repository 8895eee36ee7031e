//! Theme module for Invoice Hub.
//!
//! - Color palettes for light and dark mode (`palette`)
//! - App-specific colors on top of Iced's extended palette (`colors`)
//! - Widget style functions (`styles`)
//! - Spacing constants (`spacing`)

pub mod colors;
pub mod palette;
pub mod spacing;
pub mod styles;

pub use colors::{InvoiceColorSet, InvoiceColors, StatusColors};
pub use palette::ThemeMode;
pub use spacing::{
    BORDER_RADIUS_FULL, BORDER_RADIUS_LG, BORDER_RADIUS_MD, BORDER_RADIUS_SM, CONTENT_MAX_WIDTH,
    MODAL_WIDTH_LG, MODAL_WIDTH_SM, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, SPACING_XS,
};
pub use styles::{
    button_ghost, button_ghost_danger, button_nav, button_primary, button_secondary, card,
    invoice_theme, table_header, text_input_default, text_input_flagged,
};
