//! Spacing constants for consistent layout throughout the application.
//!
//! All values are in pixels.

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Icon margins, small gaps
pub const SPACING_SM: f32 = 8.0;

/// Default padding and gaps
pub const SPACING_MD: f32 = 16.0;

/// Section padding
pub const SPACING_LG: f32 = 24.0;

/// Page margins
pub const SPACING_XL: f32 = 32.0;

// =============================================================================
// BORDERS
// =============================================================================

/// Buttons, inputs
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Cards, panels
pub const BORDER_RADIUS_MD: f32 = 8.0;

/// Modals
pub const BORDER_RADIUS_LG: f32 = 12.0;

/// Pills and badges
pub const BORDER_RADIUS_FULL: f32 = 9999.0;

pub const BORDER_WIDTH_THIN: f32 = 1.0;

pub const BORDER_WIDTH_MEDIUM: f32 = 2.0;

// =============================================================================
// COMPONENT SIZES
// =============================================================================

pub const MODAL_WIDTH_SM: f32 = 420.0;

/// Invoice preview sheet
pub const MODAL_WIDTH_LG: f32 = 760.0;

/// Content column of the dashboard and form
pub const CONTENT_MAX_WIDTH: f32 = 1100.0;
