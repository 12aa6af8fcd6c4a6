use colored::{ColoredString, Colorize};
use stocklens_core::{FilterCriteria, PriceFilter, Product, StockFilter, StockLevel, VariantGroup};

/// Format a currency amount with two decimals
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Format a group's price span, collapsing equal ends
pub fn format_price_range(range: Option<(f64, f64)>) -> String {
    match range {
        Some((lo, hi)) if lo == hi => format_price(lo),
        Some((lo, hi)) => format!("{} - {}", format_price(lo), format_price(hi)),
        None => "-".to_string(),
    }
}

/// Stock badge padded to a fixed width, then colored
pub fn stock_badge(level: StockLevel) -> ColoredString {
    let label = format!("{:<12}", level.label());
    match level {
        StockLevel::InStock => label.green(),
        StockLevel::LowStock => label.yellow(),
        StockLevel::OutOfStock => label.red(),
    }
}

/// Describe the active facets, e.g. `Search: "red"; Stock: inStock`
pub fn format_active_filters(criteria: &FilterCriteria) -> String {
    let mut filter_parts = Vec::new();

    if !criteria.search.is_empty() {
        filter_parts.push(format!("Search: \"{}\"", criteria.search));
    }
    if criteria.stock != StockFilter::All {
        filter_parts.push(format!("Stock: {}", criteria.stock));
    }
    if criteria.price != PriceFilter::All {
        filter_parts.push(format!("Price: {}", criteria.price));
    }

    filter_parts.join("; ")
}

/// Display name for a group; unnamed products still need a heading
pub fn group_title(group: &VariantGroup<'_>) -> String {
    if group.name.is_empty() {
        "(unnamed)".to_string()
    } else {
        group.name.clone()
    }
}

/// Card lines for one group in the grid view
pub fn format_group_card(group: &VariantGroup<'_>) -> Vec<String> {
    let count = group.len();
    let mut lines = vec![
        format!("{}", group_title(group).bold()),
        format!(
            "  {} variant{} | {} in stock | {}",
            count,
            if count == 1 { "" } else { "s" },
            group.total_quantity(),
            format_price_range(group.price_range())
        ),
    ];

    for product in &group.variants {
        lines.push(format!(
            "  - {} [{}] {} {}",
            product.name,
            product.sku,
            stock_badge(product.stock_level()),
            format_price(product.price)
        ));
    }

    lines
}

/// Column header for the table view
pub fn format_table_header() -> String {
    format!(
        "{:<32} {:<14} {:>10} {:>6}  {:<12} {}",
        "Name", "SKU", "Price", "Qty", "Stock", "Status"
    )
}

/// One table row for a variant
pub fn format_table_row(product: &Product) -> String {
    format!(
        "{:<32} {:<14} {:>10} {:>6}  {} {}",
        truncate(&product.name, 32),
        truncate(&product.sku, 14),
        format_price(product.price),
        product.quantity,
        stock_badge(product.stock_level()),
        product.status
    )
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let kept: String = s.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
