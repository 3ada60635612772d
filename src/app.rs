//! App Core for QR Baghdad.
//!
//! Central struct wiring the history manager, settings engine, renderer,
//! and notifier together, and implementing the user-facing flows: every
//! failure degrades to "notify and continue", never a crash.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::RgbaImage;
use log::warn;

use crate::database::Database;
use crate::managers::history_manager::{
    ClearOutcome, HistoryManager, HistoryManagerTrait, RemoveOutcome,
};
use crate::services::notifier::{ConsoleNotifier, NoticeLevel, Notifier};
use crate::services::qr_renderer::{BarcodeDetector, QrRenderer, QrRendererTrait};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::history::HistoryItem;

/// Central application struct.
pub struct App {
    pub db: Arc<Database>,
    pub history_manager: HistoryManager,
    pub settings_engine: SettingsEngine,
    pub renderer: QrRenderer,
    notifier: Box<dyn Notifier>,
}

impl App {
    /// Opens the store at `db_path` and initializes all components with a
    /// console notifier.
    pub fn new(db_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open(db_path)?);
        Self::with_notifier(db, Box::new(ConsoleNotifier))
    }

    /// Initializes all components over an existing store. Used by tests to
    /// inject an in-memory database and a recording notifier.
    pub fn with_notifier(
        db: Arc<Database>,
        notifier: Box<dyn Notifier>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let history_manager = HistoryManager::load(db.clone())?;
        let mut settings_engine = SettingsEngine::new(db.clone());
        settings_engine.load()?;
        Ok(Self {
            db,
            history_manager,
            settings_engine,
            renderer: QrRenderer::new(),
            notifier,
        })
    }

    fn notify(&self, message: &str, level: NoticeLevel) {
        self.notifier.notify(message, level);
    }

    /// Generates a QR code from `text` and records it into history.
    ///
    /// Returns whether an artifact was produced.
    pub fn generate(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            self.notify("Please enter text or a link", NoticeLevel::Warning);
            return false;
        }

        let settings = self.settings_engine.get().clone();
        if let Err(e) = self.renderer.render(text, &settings) {
            warn!("render failed: {}", e);
            self.notify("Error generating the code", NoticeLevel::Error);
            return false;
        }

        // A failed durable write is recoverable: the in-memory list keeps
        // the new state and the session continues. The error stays the
        // visible notice, so success is only announced on a clean record.
        match self.history_manager.record(text) {
            Ok(_) => self.notify("QR code generated successfully!", NoticeLevel::Success),
            Err(e) => {
                warn!("history persist failed: {}", e);
                self.notify("Could not save history", NoticeLevel::Error);
            }
        }
        true
    }

    /// Writes the current artifact into `dir`; warns if nothing has been
    /// generated yet.
    pub fn download(&self, dir: &Path) -> Option<PathBuf> {
        match self.renderer.download(dir) {
            Ok(path) => {
                self.notify("Image downloaded successfully!", NoticeLevel::Success);
                Some(path)
            }
            Err(crate::types::errors::RenderError::NoArtifact) => {
                self.notify("No code to download", NoticeLevel::Warning);
                None
            }
            Err(e) => {
                warn!("download failed: {}", e);
                self.notify("Error saving the image", NoticeLevel::Error);
                None
            }
        }
    }

    /// Re-injects a history item's text and re-triggers generation. The
    /// history list itself is unchanged (re-recording is a duplicate no-op).
    pub fn recall(&mut self, id: i64) -> bool {
        let text = match self.history_manager.recall(id) {
            Some(item) => item.text.clone(),
            None => return false,
        };
        if self.generate(&text) {
            self.notify("Text loaded from history", NoticeLevel::Success);
            true
        } else {
            false
        }
    }

    /// Removes one history item by id.
    pub fn remove(&mut self, id: i64) {
        match self.history_manager.remove(id) {
            Ok(RemoveOutcome::Removed) => self.notify("Item deleted", NoticeLevel::Success),
            Ok(RemoveOutcome::NotFound) => {}
            Err(e) => {
                warn!("history persist failed: {}", e);
                self.notify("Could not save history", NoticeLevel::Error);
            }
        }
    }

    /// Clears the history; `confirmed` is the user's answer to the
    /// confirmation prompt collected by the front end.
    pub fn clear_history(&mut self, confirmed: bool) {
        match self.history_manager.clear(confirmed) {
            Ok(ClearOutcome::AlreadyEmpty) => {
                self.notify("History is already empty", NoticeLevel::Warning)
            }
            Ok(ClearOutcome::NotConfirmed) => {}
            Ok(ClearOutcome::Cleared) => {
                self.notify("History cleared completely", NoticeLevel::Success)
            }
            Err(e) => {
                warn!("history persist failed: {}", e);
                self.notify("Could not save history", NoticeLevel::Error);
            }
        }
    }

    /// Overwrites the settings record and, if a QR code is currently
    /// displayed, re-renders it so the change applies live.
    pub fn update_settings(&mut self, size: u32, dark_color: &str, light_color: &str) {
        if let Err(e) = self.settings_engine.update(size, dark_color, light_color) {
            warn!("settings persist failed: {}", e);
            self.notify("Could not save settings", NoticeLevel::Error);
        }

        let current_text = self.renderer.current().map(|a| a.text.clone());
        if let Some(text) = current_text {
            self.generate(&text);
        }
    }

    /// Decodes a QR code from a captured frame via the host detector, if
    /// one is available, and returns the decoded text.
    pub fn scan(&mut self, detector: Option<&dyn BarcodeDetector>, frame: &RgbaImage) -> Option<String> {
        let detector = match detector {
            Some(d) => d,
            None => {
                self.notify(
                    "Your environment does not support QR scanning",
                    NoticeLevel::Warning,
                );
                return None;
            }
        };
        match detector.detect(frame) {
            Some(text) => {
                self.notify("Code scanned successfully!", NoticeLevel::Success);
                Some(text)
            }
            None => None,
        }
    }

    /// Read-only view of the history list for rendering.
    pub fn history(&self) -> &[HistoryItem] {
        self.history_manager.items()
    }
}
