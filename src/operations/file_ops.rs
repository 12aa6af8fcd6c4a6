use std::path::Path;

use crate::errors::{map_file_load_error, map_reload_error};
use crate::state::{AppState, UiState};
use crate::ui::{show_error, StatusLevel};

/// File operations orchestration
/// Handles catalog I/O with error mapping and status updates
pub struct FileOperations<'a> {
    state: &'a mut AppState,
    ui: &'a mut UiState,
}

impl<'a> FileOperations<'a> {
    pub fn new(state: &'a mut AppState, ui: &'a mut UiState) -> Self {
        Self { state, ui }
    }

    /// Load a catalog file, leaving error reporting to the caller
    pub fn try_load(&mut self, path: &Path) -> anyhow::Result<()> {
        self.state.load_from_file(path.to_path_buf())?;

        let count = self.state.catalog.as_ref().map_or(0, |c| c.len());
        self.ui.set_status(
            format!("Loaded {} products from {}", count, path.display()),
            StatusLevel::Success,
        );
        Ok(())
    }

    /// Load a catalog file from the given path, showing an error dialog on failure
    pub fn load_file(&mut self, path: &Path) -> anyhow::Result<()> {
        match self.try_load(path) {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %format!("{:#}", e), "catalog load failed");
                let (title, message, details) = map_file_load_error(&e, path);
                show_error(title, message, details);
                self.ui.set_status("Catalog not loaded", StatusLevel::Error);
                Err(e)
            }
        }
    }

    /// Reload the current catalog from disk
    pub fn reload(&mut self) -> anyhow::Result<()> {
        match self.state.reload() {
            Ok(()) => {
                self.ui.set_status("Reloaded catalog from disk", StatusLevel::Success);
                Ok(())
            }
            Err(e) => {
                let path = self.state.current_file.clone();
                let (title, message, details) = map_reload_error(&e, path.as_deref());
                show_error(title, message, details);
                self.ui.set_status("Reload failed", StatusLevel::Error);
                Err(e)
            }
        }
    }
}
