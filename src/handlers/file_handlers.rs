use crate::operations::{validate_path_input, FileOperations};
use crate::state::{AppState, UiState};
use crate::ui::StatusLevel;

/// Open another catalog; the current one stays loaded if this fails
pub fn handle_open(state: &mut AppState, ui: &mut UiState, input: &str) {
    match validate_path_input(input) {
        Ok(path) => {
            // Errors are already reported to the user
            let _ = FileOperations::new(state, ui).load_file(&path);
        }
        Err(err) => ui.set_status(err.to_string(), StatusLevel::Warning),
    }
}

/// Reload the current catalog from disk
pub fn handle_reload(state: &mut AppState, ui: &mut UiState) {
    let _ = FileOperations::new(state, ui).reload();
}
