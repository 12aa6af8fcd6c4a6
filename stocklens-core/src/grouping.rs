use crate::models::{Product, VariantGroup};
use crate::naming::{candidate_base_names, normalize_key};
use std::collections::HashMap;

/// Group products into variant groups by inferred base name.
/// Every product lands in exactly one group; groups keep first-seen order
/// and a product with no siblings still forms a group of one.
pub fn group_variants(products: &[Product]) -> Vec<VariantGroup<'_>> {
    group_products(products)
}

/// Group catalog products and separately listed variants as one candidate pool
pub fn group_catalog<'a>(products: &'a [Product], variants: &'a [Product]) -> Vec<VariantGroup<'a>> {
    group_products(products.iter().chain(variants))
}

/// Group any sequence of borrowed products, in iteration order
pub fn group_products<'a, I>(products: I) -> Vec<VariantGroup<'a>>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut groups: Vec<VariantGroup<'a>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for product in products {
        let candidates = candidate_base_names(&product.name);

        // Longest candidate that already names a group wins
        let existing = candidates
            .iter()
            .find_map(|candidate| index.get(&normalize_key(candidate)).copied());

        if let Some(position) = existing {
            groups[position].variants.push(product);
            continue;
        }

        let base_name = candidates.last().cloned().unwrap_or_default();
        let key = normalize_key(&base_name);

        // Unnamed products never share a group
        if !key.is_empty() {
            index.insert(key, groups.len());
        }
        groups.push(VariantGroup::new(base_name, product));
    }

    tracing::debug!(
        groups = groups.len(),
        products = groups.iter().map(VariantGroup::len).sum::<usize>(),
        "grouped products into variant groups"
    );

    groups
}

/// Get group names in alphabetical order
pub fn get_sorted_group_names(groups: &[VariantGroup<'_>]) -> Vec<String> {
    let mut group_names: Vec<String> = groups.iter().map(|g| g.name.clone()).collect();
    group_names.sort();
    group_names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductStatus;

    fn product(id: &str, name: &str, sku: &str, price: f64, quantity: i64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            sku: sku.to_string(),
            price,
            quantity,
            status: ProductStatus::Active,
        }
    }

    fn skus<'a>(group: &VariantGroup<'a>) -> Vec<&'a str> {
        group.variants.iter().map(|p| p.sku.as_str()).collect()
    }

    #[test]
    fn test_variants_share_a_group() {
        let products = vec![
            product("1", "Shoe - Red", "S1", 40.0, 5),
            product("2", "Shoe - Blue", "S2", 40.0, 0),
        ];

        let groups = group_variants(&products);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "Shoe");
        assert_eq!(skus(&groups[0]), vec!["S1", "S2"]);
    }

    #[test]
    fn test_single_product_forms_singleton_group() {
        let products = vec![product("w", "Widget", "W1", 10.0, 3)];

        let groups = group_variants(&products);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "Widget");
        assert_eq!(groups[0].len(), 1);
    }

    #[test]
    fn test_empty_input_yields_no_groups() {
        assert!(group_variants(&[]).is_empty());
    }

    #[test]
    fn test_group_order_is_first_seen() {
        let products = vec![
            product("1", "Tee - S", "T1", 15.0, 4),
            product("2", "Cap - Red", "C1", 12.0, 2),
            product("3", "Tee - M", "T2", 15.0, 9),
        ];

        let groups = group_variants(&products);
        let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();

        assert_eq!(names, vec!["Tee", "Cap"]);
        assert_eq!(skus(&groups[0]), vec!["T1", "T2"]);
        assert_eq!(get_sorted_group_names(&groups), vec!["Cap", "Tee"]);
    }

    #[test]
    fn test_base_names_compare_case_and_space_insensitively() {
        let products = vec![
            product("1", "Running  Shoe - Red / 42", "R1", 80.0, 3),
            product("2", "running shoe (Wide)", "R2", 85.0, 1),
        ];

        let groups = group_variants(&products);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "Running Shoe");
    }

    #[test]
    fn test_existing_group_is_preferred_over_deeper_strip() {
        let products = vec![
            product("1", "Red", "R1", 5.0, 1),
            product("2", "Red - Blue", "R2", 5.0, 1),
        ];

        let groups = group_variants(&products);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "Red");
    }

    #[test]
    fn test_unnamed_products_stay_apart() {
        let products = vec![
            product("1", "", "E1", 1.0, 1),
            product("2", "  ", "E2", 1.0, 1),
        ];

        let groups = group_variants(&products);

        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(|g| g.len() == 1 && g.name.is_empty()));
    }

    #[test]
    fn test_duplicate_ids_are_kept() {
        let products = vec![
            product("dup", "Lamp - Oak", "L1", 30.0, 2),
            product("dup", "Lamp - Oak", "L1", 30.0, 2),
        ];

        let groups = group_variants(&products);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].len(), 2);
    }

    #[test]
    fn test_catalog_variants_join_product_groups() {
        let products = vec![product("1", "Desk Lamp", "D1", 45.0, 6)];
        let variants = vec![
            product("2", "Desk Lamp - Black", "D2", 45.0, 2),
            product("3", "Shelf (Pine)", "H1", 70.0, 1),
        ];

        let groups = group_catalog(&products, &variants);

        assert_eq!(groups.len(), 2);
        assert_eq!(skus(&groups[0]), vec!["D1", "D2"]);
        assert_eq!(groups[1].name, "Shelf");
    }

    #[test]
    fn test_grouping_borrows_without_copying() {
        let products = vec![product("1", "Shoe - Red", "S1", 40.0, 5)];

        let groups = group_variants(&products);

        assert!(std::ptr::eq(groups[0].variants[0], &products[0]));
    }
}
