use crate::models::{Catalog, Product};
use std::collections::HashSet;

/// Validate catalog contents beyond what the JSON schema can express
/// Returns Ok(()) if valid, or Err(Vec<String>) with validation errors
pub fn validate_catalog(catalog: &Catalog) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    validate_products(&catalog.products, "Product", &mut errors);
    validate_products(&catalog.variants, "Variant", &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_products(products: &[Product], label: &str, errors: &mut Vec<String>) {
    for (idx, product) in products.iter().enumerate() {
        let product_ref = format!("{} #{} ('{}')", label, idx + 1, product.name);

        if product.id.trim().is_empty() {
            errors.push(format!("{}: id cannot be empty", product_ref));
        }

        if !product.price.is_finite() {
            errors.push(format!("{}: price must be a finite number", product_ref));
        } else if product.price < 0.0 {
            errors.push(format!(
                "{}: price cannot be negative, found {}",
                product_ref, product.price
            ));
        }

        if product.quantity < 0 {
            errors.push(format!(
                "{}: quantity cannot be negative, found {}",
                product_ref, product.quantity
            ));
        }
    }
}

/// Ids used by more than one product, in first-repeat order.
/// Not an error: grouping and filtering keep duplicates as-is.
pub fn find_duplicate_ids(catalog: &Catalog) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for product in catalog.all_products() {
        if !seen.insert(product.id.as_str()) && reported.insert(product.id.as_str()) {
            duplicates.push(product.id.clone());
        }
    }

    duplicates
}
