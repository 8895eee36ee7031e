//! Invoice Hub - Desktop GUI Application
//!
//! Create, edit, search and preview invoices held in memory for the session.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message, Update, View).

use iced::Size;
use iced::window;

use invoice_gui::app::App;
use invoice_gui::logging::{LogConfig, init_logging};

/// Application entry point.
pub fn main() -> iced::Result {
    init_logging(&LogConfig::default());

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Invoice Hub");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .font(iced_fonts::LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(1200.0, 800.0),
            min_size: Some(Size::new(900.0, 600.0)),
            ..Default::default()
        })
        .run()
}
