// QR Baghdad Settings Engine
// Manages the QR generation settings record: loading, wholesale updates,
// and resetting to defaults. Settings are stored as a JSON blob under the
// `qr-settings` key in the durable key-value store.

use std::sync::Arc;

use crate::database::Database;
use crate::types::errors::SettingsError;
use crate::types::settings::QrSettings;

/// Storage key for the serialized settings record.
pub const SETTINGS_KEY: &str = "qr-settings";

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<QrSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get(&self) -> &QrSettings;
    fn update(
        &mut self,
        size: u32,
        dark_color: &str,
        light_color: &str,
    ) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
}

/// Settings engine that persists the record through the key-value store.
pub struct SettingsEngine {
    db: Arc<Database>,
    settings: QrSettings,
}

impl SettingsEngine {
    /// Creates a new engine with default settings; call `load` to pick up
    /// the persisted record.
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            db,
            settings: QrSettings::default(),
        }
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from storage.
    ///
    /// A missing key yields the documented defaults; a malformed blob is a
    /// serialization error.
    fn load(&mut self) -> Result<QrSettings, SettingsError> {
        match self
            .db
            .get_value(SETTINGS_KEY)
            .map_err(|e| SettingsError::StorageError(e.to_string()))?
        {
            Some(blob) => {
                self.settings = serde_json::from_str(&blob)
                    .map_err(|e| SettingsError::SerializationError(e.to_string()))?;
            }
            None => self.settings = QrSettings::default(),
        }
        Ok(self.settings.clone())
    }

    /// Persists the current record as a JSON blob.
    fn save(&self) -> Result<(), SettingsError> {
        let blob = serde_json::to_string(&self.settings)
            .map_err(|e| SettingsError::SerializationError(e.to_string()))?;
        self.db
            .set_value(SETTINGS_KEY, &blob)
            .map_err(|e| SettingsError::StorageError(e.to_string()))
    }

    /// Returns a reference to the current in-memory settings.
    fn get(&self) -> &QrSettings {
        &self.settings
    }

    /// Overwrites the record wholesale and persists it.
    ///
    /// The in-memory record keeps the new values even if the durable write
    /// fails, so the session continues with them until storage succeeds.
    fn update(
        &mut self,
        size: u32,
        dark_color: &str,
        light_color: &str,
    ) -> Result<(), SettingsError> {
        self.settings = QrSettings {
            size,
            dark_color: dark_color.to_string(),
            light_color: light_color.to_string(),
        };
        self.save()
    }

    /// Resets the record to factory defaults and persists it.
    fn reset(&mut self) -> Result<(), SettingsError> {
        self.settings = QrSettings::default();
        self.save()
    }
}
