use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};
use stocklens_core::{get_sorted_group_names, FilterCriteria, VariantGroup};

use crate::state::DashboardView;
use crate::ui::formatting::{
    format_active_filters, format_group_card, format_table_header, format_table_row, group_title,
};
use crate::ui::types::ViewMode;

/// Why the variants view has nothing to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// Grouping produced nothing: the catalog has no products
    NoVariants,
    /// Groups exist but the active facets excluded every member
    NoMatches,
}

impl EmptyState {
    pub fn of(view: &DashboardView<'_>) -> Option<Self> {
        if view.total_groups == 0 {
            Some(EmptyState::NoVariants)
        } else if view.groups.is_empty() {
            Some(EmptyState::NoMatches)
        } else {
            None
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            EmptyState::NoVariants => "No variants found.",
            EmptyState::NoMatches => {
                "No matching variants. Adjust the filters or use `clear` to reset them."
            }
        }
    }
}

/// Render the variants view as text
pub fn render_dashboard<W: Write>(
    out: &mut W,
    title: &str,
    view: &DashboardView<'_>,
    mode: ViewMode,
) -> io::Result<()> {
    writeln!(out, "{}", format!("# Product Variants: {}", title).bold())?;

    let active = format_active_filters(&view.criteria);
    if !active.is_empty() {
        writeln!(out, "Active filters: {}", active)?;
    }

    writeln!(
        out,
        "Showing {} of {} groups ({} variants)\n",
        view.groups.len(),
        view.total_groups,
        view.member_count()
    )?;

    if let Some(empty) = EmptyState::of(view) {
        writeln!(out, "{}", empty.message().dimmed())?;
        return Ok(());
    }

    match mode {
        ViewMode::Grid => render_grid(out, &view.groups),
        ViewMode::Table => render_table(out, &view.groups),
    }
}

fn render_grid<W: Write>(out: &mut W, groups: &[VariantGroup<'_>]) -> io::Result<()> {
    for group in groups {
        for line in format_group_card(group) {
            writeln!(out, "{}", line)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn render_table<W: Write>(out: &mut W, groups: &[VariantGroup<'_>]) -> io::Result<()> {
    writeln!(out, "{}", format_table_header().underline())?;

    for group in groups {
        writeln!(out, "{} ({})", group_title(group).bold(), group.len())?;
        for product in &group.variants {
            writeln!(out, "{}", format_table_row(product))?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'v, 'a> {
    criteria: &'v FilterCriteria,
    total_groups: usize,
    group_names: Vec<String>,
    groups: &'v [VariantGroup<'a>],
}

/// Render the variants view as pretty JSON
pub fn render_json<W: Write>(out: &mut W, view: &DashboardView<'_>) -> io::Result<()> {
    let report = JsonReport {
        criteria: &view.criteria,
        total_groups: view.total_groups,
        group_names: get_sorted_group_names(&view.groups),
        groups: &view.groups,
    };

    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)
}
