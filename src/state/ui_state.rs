use crate::ui::{StatusLevel, StatusMessage, ViewMode};

/// UI flow state management
/// This struct contains only presentation state (layout, status line)
#[derive(Debug, Default)]
pub struct UiState {
    /// Current layout of the variants view
    pub view_mode: ViewMode,
    /// Last status message, shown once after the next render
    pub status: Option<StatusMessage>,
}

impl UiState {
    pub fn new(view_mode: ViewMode) -> Self {
        Self {
            view_mode,
            status: None,
        }
    }

    /// Set the status line
    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
        });
    }

    /// Take and consume the status line
    pub fn take_status(&mut self) -> Option<StatusMessage> {
        self.status.take()
    }
}
