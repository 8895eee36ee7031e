//! Root application state.

use std::path::PathBuf;

use invoice_workspace::{Command, Notice, NoticeLevel, Workspace};

use crate::component::toast::ToastState;
use crate::error::GuiError;
use crate::state::Settings;

/// Blocking alert shown over the whole window until acknowledged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertState {
    pub title: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl From<&GuiError> for AlertState {
    fn from(err: &GuiError) -> Self {
        Self {
            title: err.title().to_string(),
            message: err.to_string(),
            suggestion: err.suggestion().map(str::to_string),
        }
    }
}

/// Everything the GUI holds.
///
/// Invoice data and navigation live in the [`Workspace`]; this struct adds the
/// preferences and the feedback overlays around it.
#[derive(Debug)]
pub struct AppState {
    pub workspace: Workspace,
    pub settings: Settings,
    /// Where settings are written when changed.
    pub settings_path: PathBuf,
    pub toast: Option<ToastState>,
    pub alert: Option<AlertState>,
    /// OS appearance, used when the theme mode is `System`.
    pub system_is_dark: bool,
}

impl AppState {
    pub fn new(settings: Settings, settings_path: PathBuf) -> Self {
        let workspace = Workspace::new(&settings.workspace);
        Self {
            workspace,
            settings,
            settings_path,
            toast: None,
            alert: None,
            system_is_dark: false,
        }
    }

    /// Send a command to the workspace and surface its outcome.
    pub fn run(&mut self, command: Command) {
        match self.workspace.dispatch(command) {
            Ok(events) => {
                for notice in events.iter().filter_map(|event| event.notice()) {
                    self.notify(notice);
                }
            }
            Err(err) => self.report(err.into()),
        }
    }

    /// Show an error as an alert or a toast depending on its severity.
    pub fn report(&mut self, err: GuiError) {
        if err.is_blocking() {
            tracing::debug!(error = %err, "Showing alert");
            self.alert = Some(AlertState::from(&err));
        } else {
            tracing::warn!(error = %err, "Operation failed");
            self.toast = Some(ToastState::error(err.to_string()));
        }
    }

    fn notify(&mut self, notice: Notice) {
        self.toast = Some(match notice.level {
            NoticeLevel::Success => ToastState::success(notice.message),
            NoticeLevel::Info => ToastState::info(notice.message),
        });
    }

    /// Persist the current settings, reporting failures as a toast.
    pub fn save_settings(&mut self) {
        if let Err(err) = self.settings.save_to(&self.settings_path) {
            self.report(err);
        }
    }

    pub fn currency(&self) -> &str {
        &self.settings.display.currency_symbol
    }
}
