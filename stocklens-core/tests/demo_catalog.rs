use std::path::PathBuf;
use stocklens_core::{
    apply_filters, count_members, group_catalog, load_catalog, validate_catalog, FilterCriteria,
    PriceFilter, StockFilter,
};

fn demo_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../demos/catalog.json")
}

fn names(groups: &[stocklens_core::VariantGroup<'_>]) -> Vec<String> {
    groups.iter().map(|g| g.name.clone()).collect()
}

#[test]
fn demo_catalog_groups_by_base_name() {
    let catalog = load_catalog(demo_path()).unwrap();
    assert!(validate_catalog(&catalog).is_ok());

    let groups = group_catalog(&catalog.products, &catalog.variants);

    assert_eq!(
        names(&groups),
        vec!["Running Shoe", "Coffee Mug", "Anti-Slip Mat", "Desk Lamp", "Office Chair", "Water Bottle"]
    );
    assert_eq!(count_members(&groups), catalog.len());
    assert_eq!(groups[0].len(), 3);
    assert_eq!(groups[3].len(), 2);
}

#[test]
fn demo_catalog_filters_combine() {
    let catalog = load_catalog(demo_path()).unwrap();
    let groups = group_catalog(&catalog.products, &catalog.variants);

    let low_stock = apply_filters(
        &groups,
        &FilterCriteria {
            stock: StockFilter::LowStock,
            ..FilterCriteria::default()
        },
    );
    assert_eq!(names(&low_stock), vec!["Running Shoe", "Coffee Mug", "Desk Lamp", "Office Chair"]);

    let mid_price_in_stock = apply_filters(
        &groups,
        &FilterCriteria {
            search: "lamp".to_string(),
            stock: StockFilter::InStock,
            price: PriceFilter::From50To100,
        },
    );
    assert_eq!(mid_price_in_stock.len(), 1);
    assert_eq!(mid_price_in_stock[0].variants[0].sku, "LAMP-BRS");
}
