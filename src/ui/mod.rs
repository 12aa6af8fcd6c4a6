pub mod dialogs;
pub mod formatting;
pub mod types;
pub mod updates;

pub use dialogs::{show_error, write_status};
pub use formatting::format_active_filters;
pub use types::{OutputFormat, StatusLevel, StatusMessage, ViewMode};
pub use updates::{render_dashboard, render_json};
