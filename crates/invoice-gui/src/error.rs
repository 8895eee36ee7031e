//! GUI-specific error types.
//!
//! Every failure the user can see passes through [`GuiError`], which decides
//! whether it is shown as a blocking alert or a transient toast.

use invoice_model::InvoiceId;
use invoice_workspace::{RenderError, WorkspaceError};
use thiserror::Error;

/// GUI-specific errors.
///
/// # Display Behavior
///
/// - **Blocking**: validation failures, shown in an alert that must be
///   acknowledged (the form stays as it is)
/// - **Transient**: everything else, shown as an auto-dismissing toast
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuiError {
    // =========================================================================
    // INVOICE OPERATIONS
    // =========================================================================
    /// The invoice form failed validation.
    #[error("{message}")]
    Validation { message: String },

    /// An action referenced an invoice that no longer exists.
    #[error("Invoice #{id} not found")]
    InvoiceNotFound { id: InvoiceId },

    /// Document rendering failed.
    #[error("Download failed: {reason}")]
    Document { reason: String },

    // =========================================================================
    // SETTINGS
    // =========================================================================
    #[error("Failed to load settings: {reason}")]
    SettingsLoad { reason: String },

    #[error("Failed to save settings: {reason}")]
    SettingsSave { reason: String },

    /// Internal error (should not normally occur).
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl GuiError {
    /// Shown as an auto-dismissing toast.
    pub fn is_transient(&self) -> bool {
        !self.is_blocking()
    }

    /// Requires acknowledgment before continuing.
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Title for the alert dialog.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "Cannot save invoice",
            Self::InvoiceNotFound { .. } => "Invoice not found",
            Self::Document { .. } => "Download failed",
            Self::SettingsLoad { .. } | Self::SettingsSave { .. } => "Settings",
            Self::Internal { .. } => "Error",
        }
    }

    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Validation { .. } => Some("Correct the highlighted fields and submit again."),
            Self::InvoiceNotFound { .. } => Some("The invoice may have been deleted."),
            Self::Document { .. } => None,
            Self::SettingsLoad { .. } => {
                Some("Settings will be reset to defaults if the file is corrupted.")
            }
            Self::SettingsSave { .. } => {
                Some("Check file permissions for the application config directory.")
            }
            Self::Internal { .. } => None,
        }
    }

    // =========================================================================
    // FACTORY METHODS
    // =========================================================================

    pub fn settings_load(err: impl std::fmt::Display) -> Self {
        Self::SettingsLoad {
            reason: err.to_string(),
        }
    }

    pub fn settings_save(err: impl std::fmt::Display) -> Self {
        Self::SettingsSave {
            reason: err.to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Convert from workspace errors.
impl From<WorkspaceError> for GuiError {
    fn from(err: WorkspaceError) -> Self {
        match err {
            WorkspaceError::Draft(draft) => Self::Validation {
                message: draft.to_string(),
            },
            WorkspaceError::UnknownInvoice(id) => Self::InvoiceNotFound { id },
            WorkspaceError::Render(render) => render.into(),
            WorkspaceError::FormClosed | WorkspaceError::IdsExhausted => {
                Self::internal(err.to_string())
            }
        }
    }
}

impl From<RenderError> for GuiError {
    fn from(err: RenderError) -> Self {
        Self::Document {
            reason: err.to_string(),
        }
    }
}
