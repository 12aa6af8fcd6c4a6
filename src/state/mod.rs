pub mod app_state;
pub mod ui_state;

pub use app_state::{AppState, DashboardView};
pub use ui_state::UiState;
