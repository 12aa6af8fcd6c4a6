use crate::state::UiState;
use crate::ui::{StatusLevel, ViewMode};

pub const HELP_TEXT: &str = "\
Commands:
  search <text>      filter by name or SKU (empty clears the search)
  stock <bucket>     all | inStock | outOfStock | lowStock
  price <bucket>     all | under50 | 50to100 | over100
  sort <field>       name | price | quantity | sku | none
  view <mode>        grid | table
  clear              reset search, stock and price filters
  open <path>        load another catalog
  reload             reload the current catalog
  show               render the variants view again
  help               show this help
  quit               exit";

/// Switch between grid and table layouts
pub fn handle_view(ui: &mut UiState, input: &str) {
    match ViewMode::parse(input) {
        Some(mode) => {
            ui.view_mode = mode;
            ui.set_status(format!("View: {}", mode.as_str()), StatusLevel::Info);
        }
        None => ui.set_status(
            format!("Unknown view '{}', expected grid or table", input.trim()),
            StatusLevel::Warning,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_switch() {
        let mut ui = UiState::new(ViewMode::Grid);

        handle_view(&mut ui, "table");
        assert_eq!(ui.view_mode, ViewMode::Table);
        assert_eq!(ui.take_status().unwrap().text, "View: table");

        handle_view(&mut ui, "carousel");
        assert_eq!(ui.view_mode, ViewMode::Table);
        assert_eq!(ui.take_status().unwrap().level, StatusLevel::Warning);
    }
}
