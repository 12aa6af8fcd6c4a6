use crate::models::{FilterCriteria, Product, VariantGroup};
use std::borrow::Cow;

/// Apply filters to variant groups, returning only matching members.
/// With no active facet the input is handed back as-is (`Cow::Borrowed`);
/// otherwise every group is narrowed and groups left empty are dropped.
pub fn apply_filters<'g, 'a>(
    groups: &'g [VariantGroup<'a>],
    criteria: &FilterCriteria,
) -> Cow<'g, [VariantGroup<'a>]> {
    if criteria.is_noop() {
        return Cow::Borrowed(groups);
    }

    let search = criteria.search.to_lowercase();

    let filtered: Vec<VariantGroup<'a>> = groups
        .iter()
        .filter_map(|group| {
            let variants: Vec<&'a Product> = group
                .variants
                .iter()
                .copied()
                .filter(|product| matches_lowered(product, &search, criteria))
                .collect();

            if variants.is_empty() {
                None
            } else {
                Some(VariantGroup {
                    name: group.name.clone(),
                    variants,
                })
            }
        })
        .collect();

    tracing::debug!(
        search = %criteria.search,
        stock = %criteria.stock,
        price = %criteria.price,
        groups_in = groups.len(),
        groups_out = filtered.len(),
        "applied variant filters"
    );

    Cow::Owned(filtered)
}

/// Check if a product satisfies every active facet
/// AND logic between search, stock bucket and price bucket
pub fn matches_filters(product: &Product, criteria: &FilterCriteria) -> bool {
    matches_lowered(product, &criteria.search.to_lowercase(), criteria)
}

fn matches_lowered(product: &Product, search: &str, criteria: &FilterCriteria) -> bool {
    let matches_search = search.is_empty()
        || product.name.to_lowercase().contains(search)
        || product.sku.to_lowercase().contains(search);

    matches_search && criteria.stock.matches(product.quantity) && criteria.price.matches(product.price)
}

/// Check if any facet is active
pub fn has_filters(criteria: &FilterCriteria) -> bool {
    !criteria.is_noop()
}

/// Total number of member products across groups
pub fn count_members(groups: &[VariantGroup<'_>]) -> usize {
    groups.iter().map(VariantGroup::len).sum()
}
