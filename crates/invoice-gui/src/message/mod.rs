//! Message types for the Elm architecture.
//!
//! Top-level [`Message`] routes to per-view message enums, each handled by its
//! own handler in `crate::handler`.

mod dashboard;
mod form;
mod preview;

pub use dashboard::DashboardMessage;
pub use form::FormMessage;
pub use preview::PreviewMessage;

pub use crate::component::toast::ToastMessage;
use crate::theme::ThemeMode;

/// Root message type.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Navigation
    // =========================================================================
    /// Header "Dashboard" button
    ShowDashboard,
    /// Header "New Invoice" button
    NewInvoice,

    // =========================================================================
    // View-specific messages
    // =========================================================================
    Dashboard(DashboardMessage),
    Form(FormMessage),
    Preview(PreviewMessage),

    // =========================================================================
    // Appearance
    // =========================================================================
    ThemeModeSelected(ThemeMode),
    /// OS light/dark preference changed
    SystemThemeChanged(iced::theme::Mode),

    // =========================================================================
    // Feedback
    // =========================================================================
    Toast(ToastMessage),
    /// Acknowledge the blocking alert
    DismissAlert,
}
