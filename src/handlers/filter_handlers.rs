use crate::operations::{validate_price_input, validate_sort_input, validate_stock_input};
use crate::state::{AppState, UiState};
use crate::ui::{format_active_filters, StatusLevel};

/// Set the free-text search facet
pub fn handle_search(state: &mut AppState, ui: &mut UiState, text: &str) {
    state.set_search(text);
    report_filters(state, ui);
}

/// Set the stock bucket; unknown names fall back to `all` with a warning
pub fn handle_stock(state: &mut AppState, ui: &mut UiState, input: &str) {
    match validate_stock_input(input) {
        Ok(stock) => {
            state.set_stock_filter(stock);
            report_filters(state, ui);
        }
        Err(err) => {
            state.set_stock_filter(Default::default());
            ui.set_status(format!("{}; showing all stock levels", err), StatusLevel::Warning);
        }
    }
}

/// Set the price bucket; unknown names fall back to `all` with a warning
pub fn handle_price(state: &mut AppState, ui: &mut UiState, input: &str) {
    match validate_price_input(input) {
        Ok(price) => {
            state.set_price_filter(price);
            report_filters(state, ui);
        }
        Err(err) => {
            state.set_price_filter(Default::default());
            ui.set_status(format!("{}; showing all prices", err), StatusLevel::Warning);
        }
    }
}

/// Set or turn off sorting
pub fn handle_sort(state: &mut AppState, ui: &mut UiState, input: &str) {
    match validate_sort_input(input) {
        Ok(Some(field)) => {
            state.set_sort(Some(field));
            ui.set_status(format!("Sorted by {}", field), StatusLevel::Info);
        }
        Ok(None) => {
            state.set_sort(None);
            ui.set_status("Sorting off", StatusLevel::Info);
        }
        Err(err) => ui.set_status(err.to_string(), StatusLevel::Warning),
    }
}

/// Reset search, stock and price facets
pub fn handle_clear(state: &mut AppState, ui: &mut UiState) {
    state.clear_filters();
    ui.set_status("Filters cleared", StatusLevel::Info);
}

fn report_filters(state: &AppState, ui: &mut UiState) {
    let view = state.view();
    let active = format_active_filters(&state.criteria);
    let text = if active.is_empty() {
        format!("No filters: {} variants", view.member_count())
    } else {
        format!("Filters applied: {} variants match ({})", view.member_count(), active)
    };
    ui.set_status(text, StatusLevel::Info);
}
