//! Composition root: clock mode plus the two stores.
//!
//! The shell owns exactly one active [`ClockMode`] and one active
//! background. The mode deliberately is not persisted -- every session
//! starts on the digital display.

use serde::{Deserialize, Serialize};

use crate::background::{self, Background};
use crate::error::{StorageError, ValidationError};
use crate::settings::SettingsStore;
use crate::storage::KvStore;
use crate::tasks::TaskStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockMode {
    #[default]
    Digital,
    Analog,
}

pub struct Shell {
    mode: ClockMode,
    settings: SettingsStore,
    tasks: TaskStore,
}

impl Shell {
    /// Open against the default data directory.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be created.
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self::with_store(KvStore::open()?))
    }

    /// Open against an explicit store. Settings and tasks share the
    /// directory but own disjoint keys.
    pub fn with_store(kv: KvStore) -> Self {
        Self {
            mode: ClockMode::default(),
            settings: SettingsStore::load(kv.clone()),
            tasks: TaskStore::load(kv),
        }
    }

    pub fn mode(&self) -> ClockMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ClockMode) {
        self.mode = mode;
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SettingsStore {
        &mut self.settings
    }

    pub fn tasks(&self) -> &TaskStore {
        &self.tasks
    }

    pub fn tasks_mut(&mut self) -> &mut TaskStore {
        &mut self.tasks
    }

    pub fn toggle_format(&mut self) {
        let use_24_hour = !self.settings.use_24_hour();
        self.settings.set_use_24_hour(use_24_hour);
    }

    /// Select a preset by position (1-based, as listed in the selector).
    pub fn select_preset(&mut self, index: usize) -> Result<(), ValidationError> {
        let count = background::PRESET_BACKGROUNDS.len();
        let value = index
            .checked_sub(1)
            .and_then(|i| background::PRESET_BACKGROUNDS.get(i).copied())
            .ok_or(ValidationError::UnknownPreset { index, count })?;
        self.settings.set_background(Background::from_value(value));
        Ok(())
    }

    /// Select any background value (preset token or search result URL).
    pub fn select_background(&mut self, value: &str) {
        self.settings.set_background(Background::from_value(value));
    }

    /// Validate and select a user-supplied image URL.
    pub fn select_custom_url(&mut self, url: &str) -> Result<(), ValidationError> {
        let bg = background::validate_custom_url(url)?;
        self.settings.set_background(bg);
        Ok(())
    }

    /// Accept an uploaded image (already read into a data URI).
    pub fn accept_upload(&mut self, data_uri: String) {
        self.settings.set_uploaded_background(data_uri);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell_at(dir: &std::path::Path) -> Shell {
        Shell::with_store(KvStore::at(dir))
    }

    #[test]
    fn mode_starts_digital_and_is_not_persisted() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut shell = shell_at(dir.path());
            assert_eq!(shell.mode(), ClockMode::Digital);
            shell.set_mode(ClockMode::Analog);
            assert_eq!(shell.mode(), ClockMode::Analog);
        }
        // A fresh session resets to digital even on the same store.
        assert_eq!(shell_at(dir.path()).mode(), ClockMode::Digital);
    }

    #[test]
    fn toggle_format_flips_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell_at(dir.path());
        shell.toggle_format();
        assert!(!shell.settings().use_24_hour());
        assert!(!shell_at(dir.path()).settings().use_24_hour());
    }

    #[test]
    fn preset_selection_bounds() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell_at(dir.path());
        assert!(shell.select_preset(1).is_ok());
        assert!(shell.select_preset(8).is_ok());
        assert!(matches!(
            shell.select_preset(0),
            Err(ValidationError::UnknownPreset { .. })
        ));
        assert!(matches!(
            shell.select_preset(9),
            Err(ValidationError::UnknownPreset { .. })
        ));
    }

    #[test]
    fn custom_url_rejection_leaves_background_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell_at(dir.path());
        let before = shell.settings().background().clone();
        assert!(shell.select_custom_url("notanimage").is_err());
        assert_eq!(shell.settings().background(), &before);

        assert!(shell.select_custom_url("https://x.com/a.jpg").is_ok());
        assert_eq!(shell.settings().background().value(), "https://x.com/a.jpg");
    }
}
