use anyhow::{bail, Context};
use clap::{ArgAction, Parser};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

mod config;
mod errors;
mod handlers;
mod logging;
mod operations;
mod state;
mod ui;

use config::AppConfig;
use handlers::{handle_command, parse_command, Outcome};
use operations::{validate_price_input, validate_sort_input, validate_stock_input, FileOperations};
use state::{AppState, UiState};
use ui::{render_dashboard, render_json, write_status, OutputFormat, StatusLevel, ViewMode};

/// Product variants dashboard - group catalog products into variants and filter them
///
/// Examples:
///   # Show every variant group
///   stocklens catalog.json
///
///   # Search by name or SKU (case-insensitive)
///   stocklens catalog.json --search red
///
///   # Combine facets (AND between facets)
///   stocklens catalog.json --stock lowStock --price 50to100
///
///   # Table layout sorted by price, or JSON for scripts
///   stocklens catalog.json --view table --sort price
///   stocklens catalog.json --format json
///
///   # Explore interactively
///   stocklens catalog.json --interactive
#[derive(Parser, Debug)]
#[command(name = "stocklens")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Filtering Logic:\n  \
    - Search matches product name or SKU, case-insensitive\n  \
    - Stock buckets: all, inStock (qty > 0), outOfStock (qty <= 0), lowStock (1..=10)\n  \
    - Price buckets: all, under50, 50to100 (inclusive), over100\n  \
    - Facets are combined with AND; groups left empty are hidden\n  \
    - Unknown bucket names are treated as 'all'\n\n\
Grouping:\n  \
    - Products are grouped by base name, e.g. 'Shoe - Red' and 'Shoe - Blue' -> 'Shoe'\n  \
    - A product without siblings forms a group of one")]
struct Cli {
    /// Path to a catalog JSON file (object with products/variants, or a product array)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Filter by name or SKU substring
    #[arg(short, long, value_name = "TEXT")]
    search: Option<String>,

    /// Stock bucket: all, inStock, outOfStock, lowStock
    #[arg(long, value_name = "BUCKET")]
    stock: Option<String>,

    /// Price bucket: all, under50, 50to100, over100
    #[arg(long, value_name = "BUCKET")]
    price: Option<String>,

    /// Sort by name, price, quantity or sku
    #[arg(long = "sort", value_name = "FIELD")]
    sort_by: Option<String>,

    /// Layout of the variants view
    #[arg(long, value_enum, value_name = "MODE")]
    view: Option<ViewMode>,

    /// Output format for a one-shot run
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Read commands from stdin after the first render
    #[arg(short, long)]
    interactive: bool,

    /// Config file (defaults to ./stocklens.toml when present)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    let level = logging::verbosity_level(cli.verbose).unwrap_or(config.logging.level.as_str());
    logging::init(level, config.logging.format);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let Some(file) = cli.file.clone().or_else(|| config.catalog.clone()) else {
        bail!("No catalog file given. Pass FILE or set `catalog` in {}", config::DEFAULT_CONFIG_FILE);
    };

    let mut state = AppState::new();
    let mut ui = UiState::new(cli.view.unwrap_or(config.view));

    apply_cli_filters(&cli, &config, &mut state, &mut ui);

    FileOperations::new(&mut state, &mut ui)
        .try_load(&file)
        .with_context(|| format!("Could not open {}", file.display()))?;

    tracing::info!(
        file = %file.display(),
        view = ui.view_mode.as_str(),
        interactive = cli.interactive,
        "starting dashboard"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.format == OutputFormat::Json && !cli.interactive {
        render_json(&mut out, &state.view())?;
        return Ok(());
    }

    redraw(&mut out, &state, &mut ui)?;

    if cli.interactive {
        interactive_loop(&mut out, &mut state, &mut ui)?;
    }

    Ok(())
}

/// Seed facets and sort from flags, falling back to config for the sort
fn apply_cli_filters(cli: &Cli, config: &AppConfig, state: &mut AppState, ui: &mut UiState) {
    if let Some(search) = &cli.search {
        state.set_search(search);
    }

    if let Some(stock) = &cli.stock {
        match validate_stock_input(stock) {
            Ok(stock) => state.set_stock_filter(stock),
            Err(err) => ui.set_status(format!("{}; showing all stock levels", err), StatusLevel::Warning),
        }
    }

    if let Some(price) = &cli.price {
        match validate_price_input(price) {
            Ok(price) => state.set_price_filter(price),
            Err(err) => ui.set_status(format!("{}; showing all prices", err), StatusLevel::Warning),
        }
    }

    match &cli.sort_by {
        Some(field) => match validate_sort_input(field) {
            Ok(sort_by) => state.set_sort(sort_by),
            Err(err) => ui.set_status(err.to_string(), StatusLevel::Warning),
        },
        None => state.set_sort(config.sort),
    }
}

fn redraw<W: Write>(out: &mut W, state: &AppState, ui: &mut UiState) -> io::Result<()> {
    render_dashboard(out, &state.file_label(), &state.view(), ui.view_mode)?;
    flush_status(out, ui)
}

fn flush_status<W: Write>(out: &mut W, ui: &mut UiState) -> io::Result<()> {
    if let Some(status) = ui.take_status() {
        write_status(out, &status)?;
    }
    out.flush()
}

fn interactive_loop<W: Write>(out: &mut W, state: &mut AppState, ui: &mut UiState) -> anyhow::Result<()> {
    writeln!(out, "Type `help` for commands.")?;

    let stdin = io::stdin();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match parse_command(&line) {
            Ok(command) => match handle_command(command, state, ui) {
                Outcome::Redraw => redraw(out, state, ui)?,
                Outcome::StatusOnly => flush_status(out, ui)?,
                Outcome::Quit => break,
            },
            Err(message) => {
                ui.set_status(message, StatusLevel::Warning);
                flush_status(out, ui)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_flags_seed_state() {
        let cli = Cli::parse_from([
            "stocklens",
            "catalog.json",
            "--search",
            " red ",
            "--stock",
            "inStock",
            "--price",
            "bogus",
            "--view",
            "table",
        ]);
        let config = AppConfig {
            sort: Some(stocklens_core::SortField::Sku),
            ..AppConfig::default()
        };
        let mut state = AppState::new();
        let mut ui = UiState::new(cli.view.unwrap_or(config.view));

        apply_cli_filters(&cli, &config, &mut state, &mut ui);

        assert_eq!(state.criteria.search, " red ");
        assert_eq!(state.criteria.stock, stocklens_core::StockFilter::InStock);
        assert_eq!(state.criteria.price, stocklens_core::PriceFilter::All);
        assert_eq!(state.sort_by, Some(stocklens_core::SortField::Sku));
        assert_eq!(ui.view_mode, ViewMode::Table);
        assert_eq!(ui.take_status().unwrap().level, StatusLevel::Warning);
    }
}
