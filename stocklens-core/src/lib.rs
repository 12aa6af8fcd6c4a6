// Public modules
pub mod error;
pub mod filtering;
pub mod grouping;
pub mod io;
pub mod models;
pub mod naming;
pub mod schema;
pub mod schema_validation;
pub mod sorting;
pub mod validation;

// Re-export commonly used types for convenience
pub use error::CatalogError;
pub use filtering::{apply_filters, count_members, has_filters, matches_filters};
pub use grouping::{get_sorted_group_names, group_catalog, group_products, group_variants};
pub use io::{load_catalog, load_products, save_catalog};
pub use models::{
    Catalog, FilterCriteria, PriceFilter, Product, ProductStatus, StockFilter, StockLevel,
    VariantGroup, LOW_STOCK_THRESHOLD,
};
pub use naming::{candidate_base_names, derive_base_name, normalize_key, VARIANT_QUALIFIER_RULES};
pub use schema::{catalog_schema, product_list_schema, product_schema};
pub use schema_validation::validate_against_schema;
pub use sorting::{normalize_for_sorting, sort_groups, sort_variants, strip_leading_articles, SortField};
pub use validation::{find_duplicate_ids, validate_catalog};
