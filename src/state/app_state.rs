use anyhow::{anyhow, Context};
use std::path::PathBuf;
use stocklens_core::*;

/// Application state management - Domain state only
/// Holds the loaded catalog and the facets the user has selected
#[derive(Debug, Default)]
pub struct AppState {
    /// Currently loaded catalog
    pub catalog: Option<Catalog>,
    /// Path to current catalog file
    pub current_file: Option<PathBuf>,
    /// Active facets
    pub criteria: FilterCriteria,
    /// Active sort, if any
    pub sort_by: Option<SortField>,
}

/// One evaluation of the variants view
#[derive(Debug)]
pub struct DashboardView<'a> {
    /// Groups produced before any facet was applied
    pub total_groups: usize,
    /// Groups left after filtering and sorting
    pub groups: Vec<VariantGroup<'a>>,
    pub criteria: FilterCriteria,
}

impl DashboardView<'_> {
    pub fn member_count(&self) -> usize {
        count_members(&self.groups)
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog file (or bare product list) and validate it
    pub fn load_from_file(&mut self, path: PathBuf) -> anyhow::Result<()> {
        let catalog = load_products(&path)?;

        validate_catalog(&catalog).map_err(CatalogError::Invalid)?;

        for id in find_duplicate_ids(&catalog) {
            tracing::warn!(id = %id, "duplicate product id in catalog");
        }

        self.catalog = Some(catalog);
        self.current_file = Some(path);

        Ok(())
    }

    /// Load the current file again
    pub fn reload(&mut self) -> anyhow::Result<()> {
        let path = self
            .current_file
            .clone()
            .ok_or_else(|| anyhow!("No file path set"))?;

        self.load_from_file(path.clone())
            .with_context(|| format!("Failed to reload {}", path.display()))
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.criteria.search = search.into();
    }

    pub fn set_stock_filter(&mut self, stock: StockFilter) {
        self.criteria.stock = stock;
    }

    pub fn set_price_filter(&mut self, price: PriceFilter) {
        self.criteria.price = price;
    }

    pub fn set_sort(&mut self, sort_by: Option<SortField>) {
        self.sort_by = sort_by;
    }

    /// Reset every facet to its default
    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::cleared();
    }

    /// File name of the loaded catalog, for headings
    pub fn file_label(&self) -> String {
        self.current_file
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("No catalog loaded")
            .to_string()
    }

    /// Group, filter and sort the catalog from scratch
    pub fn view(&self) -> DashboardView<'_> {
        let Some(catalog) = self.catalog.as_ref() else {
            return DashboardView {
                total_groups: 0,
                groups: Vec::new(),
                criteria: self.criteria.clone(),
            };
        };

        let grouped = group_catalog(&catalog.products, &catalog.variants);
        let total_groups = grouped.len();

        let mut groups = if has_filters(&self.criteria) {
            apply_filters(&grouped, &self.criteria).into_owned()
        } else {
            grouped
        };

        if let Some(sort_field) = self.sort_by {
            sort_groups(&mut groups, sort_field);
        }

        DashboardView {
            total_groups,
            groups,
            criteria: self.criteria.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CATALOG: &str = r#"{
        "products": [
            {"id": "1", "name": "Shoe - Red", "sku": "S1", "price": 40, "quantity": 5},
            {"id": "2", "name": "Widget", "sku": "W1", "price": 10, "quantity": 3}
        ],
        "variants": [
            {"id": "3", "name": "Shoe - Blue", "sku": "S2", "price": 40, "quantity": 0}
        ]
    }"#;

    fn catalog_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn loaded_state(file: &NamedTempFile) -> AppState {
        let mut state = AppState::new();
        state.load_from_file(file.path().to_path_buf()).unwrap();
        state
    }

    #[test]
    fn test_view_groups_products_with_variants() {
        let file = catalog_file(CATALOG);
        let state = loaded_state(&file);

        let view = state.view();

        assert_eq!(view.total_groups, 2);
        assert_eq!(view.groups[0].name, "Shoe");
        assert_eq!(view.groups[0].len(), 2);
        assert_eq!(view.member_count(), 3);
    }

    #[test]
    fn test_facet_changes_reevaluate_view() {
        let file = catalog_file(CATALOG);
        let mut state = loaded_state(&file);

        state.set_stock_filter(StockFilter::OutOfStock);
        let view = state.view();
        assert_eq!(view.groups.len(), 1);
        assert_eq!(view.groups[0].variants[0].sku, "S2");
        assert_eq!(view.total_groups, 2);

        state.set_search("nomatch");
        assert!(state.view().groups.is_empty());

        state.clear_filters();
        assert_eq!(state.criteria, FilterCriteria::cleared());
        assert_eq!(state.view().groups.len(), 2);
    }

    #[test]
    fn test_sort_applies_after_filtering() {
        let file = catalog_file(CATALOG);
        let mut state = loaded_state(&file);

        state.set_sort(Some(SortField::Price));
        let names: Vec<_> = state.view().groups.iter().map(|g| g.name.clone()).collect();

        assert_eq!(names, vec!["Widget", "Shoe"]);
    }

    #[test]
    fn test_invalid_catalog_is_rejected() {
        let file = catalog_file(
            r#"[{"id": "1", "name": "Mug", "sku": "M1", "price": 3, "quantity": -1}]"#,
        );
        let mut state = AppState::new();

        let err = state.load_from_file(file.path().to_path_buf()).unwrap_err();

        assert!(matches!(err.downcast_ref::<CatalogError>(), Some(CatalogError::Invalid(_))));
        assert!(state.catalog.is_none());
    }

    #[test]
    fn test_reload_without_file_fails() {
        let mut state = AppState::new();
        let err = state.reload().unwrap_err();
        assert_eq!(err.to_string(), "No file path set");
    }

    #[test]
    fn test_empty_state_without_catalog() {
        let state = AppState::new();
        let view = state.view();
        assert_eq!(view.total_groups, 0);
        assert!(view.groups.is_empty());
        assert_eq!(state.file_label(), "No catalog loaded");
    }
}
