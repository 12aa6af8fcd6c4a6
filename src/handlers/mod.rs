pub mod file_handlers;
pub mod filter_handlers;
pub mod ui_handlers;

pub use file_handlers::{handle_open, handle_reload};
pub use filter_handlers::{handle_clear, handle_price, handle_search, handle_sort, handle_stock};
pub use ui_handlers::{handle_view, HELP_TEXT};

use crate::state::{AppState, UiState};
use crate::ui::StatusLevel;

/// One line of input in interactive mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Stock(String),
    Price(String),
    Sort(String),
    View(String),
    Open(String),
    Clear,
    Reload,
    Show,
    Help,
    Quit,
}

/// What the loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Re-evaluate and render the variants view
    Redraw,
    /// Print only the status line
    StatusOnly,
    Quit,
}

/// Parse a command line; the verb is case-insensitive, the argument is trimmed
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (verb, arg) = match line.split_once(char::is_whitespace) {
        Some((verb, arg)) => (verb, arg.trim()),
        None => (line, ""),
    };

    let command = match verb.to_lowercase().as_str() {
        "search" | "s" => Command::Search(arg.to_string()),
        "stock" => Command::Stock(arg.to_string()),
        "price" => Command::Price(arg.to_string()),
        "sort" => Command::Sort(arg.to_string()),
        "view" => Command::View(arg.to_string()),
        "open" => Command::Open(arg.to_string()),
        "clear" => Command::Clear,
        "reload" => Command::Reload,
        "show" | "" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("Unknown command '{}'. Type `help` for a list.", other)),
    };

    Ok(command)
}

/// Apply a command to the application state
pub fn handle_command(command: Command, state: &mut AppState, ui: &mut UiState) -> Outcome {
    tracing::debug!(?command, "handling command");

    match command {
        Command::Search(text) => handle_search(state, ui, &text),
        Command::Stock(bucket) => handle_stock(state, ui, &bucket),
        Command::Price(bucket) => handle_price(state, ui, &bucket),
        Command::Sort(field) => handle_sort(state, ui, &field),
        Command::View(mode) => handle_view(ui, &mode),
        Command::Open(path) => handle_open(state, ui, &path),
        Command::Clear => handle_clear(state, ui),
        Command::Reload => handle_reload(state, ui),
        Command::Show => {}
        Command::Help => {
            ui.set_status(HELP_TEXT, StatusLevel::Info);
            return Outcome::StatusOnly;
        }
        Command::Quit => return Outcome::Quit,
    }

    Outcome::Redraw
}
