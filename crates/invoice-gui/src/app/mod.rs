//! Main application module for Invoice Hub.
//!
//! Implements the Iced 0.14.0 application using the builder pattern:
//! State → Message → Update → View.
//!
//! All state changes happen in `update()`. Views are pure functions of
//! [`AppState`], and invoice logic is delegated to the workspace through the
//! handlers in `crate::handler`.

use iced::widget::{Space, column, container, row, scrollable, stack};
use iced::{Element, Length, Subscription, Task, Theme};
use invoice_workspace::{Command, View};

use crate::component::{ToastMessage, alert_modal, view_toast};
use crate::handler::{DashboardHandler, FormHandler, MessageHandler, PreviewHandler};
use crate::message::Message;
use crate::state::{AppState, Settings};
use crate::theme::{CONTENT_MAX_WIDTH, SPACING_LG, SPACING_XL, invoice_theme};
use crate::view::{view_dashboard, view_form, view_header, with_preview};

// =============================================================================
// APPLICATION
// =============================================================================

/// Root of the Iced application.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create the application with settings loaded from disk.
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let app = Self::with_state(AppState::new(settings, Settings::config_path()));
        (app, Task::none())
    }

    pub fn with_state(state: AppState) -> Self {
        tracing::debug!(
            invoices = state.workspace.invoices().len(),
            id_policy = %state.settings.workspace.id_policy,
            "Workspace ready"
        );
        Self { state }
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Navigation
            // =================================================================
            Message::ShowDashboard => {
                self.state.run(Command::ShowDashboard);
                Task::none()
            }

            Message::NewInvoice => {
                self.state.run(Command::NewInvoice);
                Task::none()
            }

            // =================================================================
            // View-specific messages
            // =================================================================
            Message::Dashboard(msg) => DashboardHandler.handle(&mut self.state, msg),
            Message::Form(msg) => FormHandler.handle(&mut self.state, msg),
            Message::Preview(msg) => PreviewHandler.handle(&mut self.state, msg),

            // =================================================================
            // Appearance
            // =================================================================
            Message::ThemeModeSelected(mode) => {
                if self.state.settings.display.theme_mode != mode {
                    tracing::info!(%mode, "Theme mode changed");
                    self.state.settings.display.theme_mode = mode;
                    self.state.save_settings();
                }
                Task::none()
            }

            Message::SystemThemeChanged(mode) => {
                self.state.system_is_dark = matches!(mode, iced::theme::Mode::Dark);
                Task::none()
            }

            // =================================================================
            // Feedback
            // =================================================================
            Message::Toast(ToastMessage::Dismiss) => {
                self.state.toast = None;
                Task::none()
            }

            Message::DismissAlert => {
                self.state.alert = None;
                Task::none()
            }
        }
    }

    /// Render the window: header, active panel, then overlays.
    pub fn view(&self) -> Element<'_, Message> {
        let body: Element<'_, Message> = match self.state.workspace.view() {
            View::Dashboard => view_dashboard(&self.state),
            View::Create(mode) => view_form(&self.state, mode),
        };

        let page = scrollable(
            container(container(body).max_width(CONTENT_MAX_WIDTH))
                .center_x(Length::Fill)
                .padding([SPACING_LG, SPACING_XL]),
        )
        .height(Length::Fill);

        let content: Element<'_, Message> = column![view_header(&self.state), page].into();
        let content = with_preview(&self.state, content);

        let content = match &self.state.alert {
            Some(alert) => alert_modal(
                content,
                &alert.title,
                &alert.message,
                alert.suggestion.as_deref(),
                Message::DismissAlert,
            ),
            None => content,
        };

        // Toast sits at the bottom-right, above every other layer
        if let Some(toast) = &self.state.toast {
            let toast_row = row![
                Space::new().width(Length::Fill),
                container(view_toast(toast)).padding([0.0, SPACING_LG]),
            ];
            let toast_container = column![Space::new().height(Length::Fill), toast_row]
                .padding([SPACING_LG, 0.0]);

            return stack![
                container(content)
                    .width(Length::Fill)
                    .height(Length::Fill),
                toast_container,
            ]
            .into();
        }

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    pub fn title(&self) -> String {
        match self.state.workspace.view() {
            View::Dashboard => "InvoiceHub".to_string(),
            View::Create(mode) => format!("{} - InvoiceHub", mode.title()),
        }
    }

    pub fn theme(&self) -> Theme {
        invoice_theme(
            self.state.settings.display.theme_mode,
            self.state.system_is_dark,
        )
    }

    /// Subscribe to runtime events.
    pub fn subscription(&self) -> Subscription<Message> {
        use iced::{system, time};
        use std::time::Duration;

        // System theme changes (for ThemeMode::System)
        let system_theme_sub = system::theme_changes().map(Message::SystemThemeChanged);

        // Toast auto-dismiss timer (5 seconds)
        let toast_sub = if self.state.toast.is_some() {
            time::every(Duration::from_secs(5)).map(|_| Message::Toast(ToastMessage::Dismiss))
        } else {
            Subscription::none()
        };

        Subscription::batch([system_theme_sub, toast_sub])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ToastType;
    use crate::message::{DashboardMessage, FormMessage, PreviewMessage};
    use crate::theme::ThemeMode;
    use invoice_model::InvoiceId;
    use invoice_workspace::{DraftField, FormMode, ItemField};
    use tempfile::TempDir;

    fn app_in(dir: &TempDir) -> App {
        App::with_state(AppState::new(
            Settings::default(),
            dir.path().join("settings.toml"),
        ))
    }

    fn fill_valid_draft(app: &mut App) {
        let edits = [
            FormMessage::FieldChanged(DraftField::ClientName, "Globex".to_string()),
            FormMessage::FieldChanged(DraftField::ClientEmail, "ap@globex.com".to_string()),
            FormMessage::FieldChanged(DraftField::DueDate, "2025-12-01".to_string()),
            FormMessage::ItemChanged {
                index: 0,
                field: ItemField::Description,
                value: "Audit".to_string(),
            },
            FormMessage::ItemChanged {
                index: 0,
                field: ItemField::Rate,
                value: "250".to_string(),
            },
        ];
        for edit in edits {
            let _ = app.update(Message::Form(edit));
        }
    }

    #[test]
    fn submit_creates_invoice_and_shows_success_toast() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        let _ = app.update(Message::NewInvoice);
        assert_eq!(app.title(), "Create New Invoice - InvoiceHub");
        fill_valid_draft(&mut app);
        let _ = app.update(Message::Form(FormMessage::Submit));

        let toast = app.state.toast.clone().unwrap();
        assert_eq!(toast.toast_type, ToastType::Success);
        assert_eq!(toast.message, "Invoice #003 created");
        assert_eq!(app.state.workspace.invoices().len(), 3);
        assert_eq!(app.state.workspace.view(), View::Dashboard);
        assert_eq!(app.title(), "InvoiceHub");
    }

    #[test]
    fn invalid_submit_raises_alert_and_keeps_form() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        let _ = app.update(Message::NewInvoice);
        let _ = app.update(Message::Form(FormMessage::Submit));

        let alert = app.state.alert.clone().unwrap();
        assert_eq!(alert.title, "Cannot save invoice");
        assert!(alert.message.starts_with("Please fill in all required fields"));
        assert_eq!(app.state.workspace.view(), View::Create(FormMode::New));
        assert_eq!(app.state.workspace.invoices().len(), 2);

        let _ = app.update(Message::DismissAlert);
        assert!(app.state.alert.is_none());
    }

    #[test]
    fn overflowing_amount_raises_alert_instead_of_committing() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        let _ = app.update(Message::NewInvoice);
        fill_valid_draft(&mut app);
        for (field, value) in [
            (ItemField::Quantity, "79228162514264337593543950335"),
            (ItemField::Rate, "2"),
        ] {
            let _ = app.update(Message::Form(FormMessage::ItemChanged {
                index: 0,
                field,
                value: value.to_string(),
            }));
        }
        assert!(!app.state.workspace.draft().items()[0].amount_in_range());

        let _ = app.update(Message::Form(FormMessage::Submit));
        let alert = app.state.alert.clone().unwrap();
        assert!(alert.message.contains("item 1: amount is too large"));
        assert_eq!(app.state.workspace.invoices().len(), 2);
    }

    #[test]
    fn dashboard_download_shows_placeholder_notice() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        let _ = app.update(Message::Dashboard(DashboardMessage::Download(
            InvoiceId::new(1),
        )));

        let toast = app.state.toast.clone().unwrap();
        assert_eq!(toast.toast_type, ToastType::Info);
        assert_eq!(
            toast.message,
            "PDF download for Invoice #001 would be generated here."
        );
    }

    #[test]
    fn preview_download_targets_previewed_invoice() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        let _ = app.update(Message::Dashboard(DashboardMessage::Preview(
            InvoiceId::new(2),
        )));
        assert_eq!(app.state.workspace.preview_id(), Some(InvoiceId::new(2)));

        let _ = app.update(Message::Preview(PreviewMessage::Download));
        assert!(app.state.toast.as_ref().unwrap().message.contains("#002"));

        let _ = app.update(Message::Preview(PreviewMessage::Close));
        assert_eq!(app.state.workspace.preview_id(), None);
    }

    #[test]
    fn deleting_unknown_invoice_is_a_transient_error() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        let _ = app.update(Message::Dashboard(DashboardMessage::Delete(InvoiceId::new(
            42,
        ))));

        assert!(app.state.alert.is_none());
        let toast = app.state.toast.clone().unwrap();
        assert_eq!(toast.toast_type, ToastType::Error);
        assert_eq!(toast.message, "Invoice #042 not found");

        let _ = app.update(Message::Toast(ToastMessage::Dismiss));
        assert!(app.state.toast.is_none());
    }

    #[test]
    fn theme_choice_is_saved() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        let _ = app.update(Message::ThemeModeSelected(ThemeMode::Dark));

        let saved = Settings::load_from(&dir.path().join("settings.toml"));
        assert_eq!(saved.display.theme_mode, ThemeMode::Dark);
        assert!(app.state.toast.is_none());
    }

    #[test]
    fn system_theme_follows_os_mode() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        let _ = app.update(Message::SystemThemeChanged(iced::theme::Mode::Dark));
        assert!(app.state.system_is_dark);
        let _ = app.update(Message::SystemThemeChanged(iced::theme::Mode::Light));
        assert!(!app.state.system_is_dark);
    }

    #[test]
    fn malformed_settings_fall_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "display = [not toml").unwrap();

        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn settings_round_trip_through_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let mut settings = Settings::default();
        settings.display.currency_symbol = "€".to_string();
        settings.display.theme_mode = ThemeMode::System;
        settings.save_to(&path).unwrap();

        assert_eq!(Settings::load_from(&path), settings);
    }
}
