//! Application settings - persisted user preferences.
//!
//! Only preferences are stored; invoices live for the session. Settings are
//! loaded at startup and saved whenever the user changes one.

use std::path::{Path, PathBuf};

use anyhow::Context;
use invoice_workspace::WorkspaceConfig;
use serde::{Deserialize, Serialize};

use crate::error::GuiError;
use crate::theme::ThemeMode;

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Application settings.
///
/// Serialized to TOML and stored in the user's config directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Id policy and sample seeding.
    pub workspace: WorkspaceConfig,

    pub display: DisplaySettings,
}

impl Settings {
    /// Load settings from the default path.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific path.
    ///
    /// A missing file gives the defaults. An unreadable or malformed file is
    /// logged and also gives the defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            return Self::default();
        }
        match Self::read(path) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "Loaded settings");
                settings
            }
            Err(err) => {
                let err = GuiError::settings_load(format!("{err:#}"));
                tracing::warn!(error = %err, "Falling back to default settings");
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), GuiError> {
        self.write(path)
            .map_err(|err| GuiError::settings_save(format!("{err:#}")))
    }

    fn write(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("creating config directory")?;
        }
        let content = toml::to_string_pretty(self).context("serializing settings")?;
        std::fs::write(path, content).with_context(|| format!("writing {}", path.display()))
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "InvoiceHub", "Invoice Hub")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}

// =============================================================================
// DISPLAY SETTINGS
// =============================================================================

/// Display settings for the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Theme mode (light/dark/system).
    pub theme_mode: ThemeMode,
    /// Symbol prefixed to every amount.
    pub currency_symbol: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::Light,
            currency_symbol: "$".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invoice_workspace::IdPolicy;

    #[test]
    fn parses_documented_layout() {
        let settings: Settings = toml::from_str(
            r#"
            [workspace]
            id_policy = "list_length"
            seed_samples = false

            [display]
            theme_mode = "dark"
            currency_symbol = "€"
            "#,
        )
        .unwrap();
        assert_eq!(settings.workspace.id_policy, IdPolicy::ListLength);
        assert!(!settings.workspace.seed_samples);
        assert_eq!(settings.display.theme_mode, ThemeMode::Dark);
        assert_eq!(settings.display.currency_symbol, "€");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let settings: Settings = toml::from_str("[display]\ntheme_mode = \"system\"\n").unwrap();
        assert_eq!(settings.display.theme_mode, ThemeMode::System);
        assert_eq!(settings.display.currency_symbol, "$");
        assert_eq!(settings.workspace, WorkspaceConfig::default());
    }
}
