use crate::models::{Product, VariantGroup};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

/// Column a variant table can be sorted by. Unrecognized values parse as `Name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortField {
    #[default]
    Name,
    Price,
    Quantity,
    Sku,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Price => "price",
            SortField::Quantity => "quantity",
            SortField::Sku => "sku",
        }
    }
}

impl FromStr for SortField {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = match s.trim().to_lowercase().as_str() {
            "price" => SortField::Price,
            "quantity" | "stock" | "qty" => SortField::Quantity,
            "sku" => SortField::Sku,
            _ => SortField::Name,
        };
        Ok(field)
    }
}

impl From<String> for SortField {
    fn from(value: String) -> Self {
        value.parse::<SortField>().unwrap_or_default()
    }
}

impl From<SortField> for String {
    fn from(value: SortField) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort groups by the specified field, then sort members within each group.
/// Price orders by a group's cheapest member, quantity by total stock
/// (largest first), sku by the first member's SKU.
pub fn sort_groups(groups: &mut [VariantGroup<'_>], sort_field: SortField) {
    for group in groups.iter_mut() {
        sort_variants(&mut group.variants, sort_field);
    }

    groups.sort_by(|a, b| match sort_field {
        SortField::Name => compare_names(&a.name, &b.name),
        SortField::Price => {
            let a_min = a.price_range().map(|(lo, _)| lo).unwrap_or(f64::INFINITY);
            let b_min = b.price_range().map(|(lo, _)| lo).unwrap_or(f64::INFINITY);
            a_min
                .partial_cmp(&b_min)
                .unwrap_or(Ordering::Equal)
                .then_with(|| compare_names(&a.name, &b.name))
        }
        SortField::Quantity => b
            .total_quantity()
            .cmp(&a.total_quantity())
            .then_with(|| compare_names(&a.name, &b.name)),
        SortField::Sku => {
            let a_sku = a.variants.first().map(|p| p.sku.as_str()).unwrap_or_default();
            let b_sku = b.variants.first().map(|p| p.sku.as_str()).unwrap_or_default();
            a_sku.cmp(b_sku).then_with(|| compare_names(&a.name, &b.name))
        }
    });
}

/// Sort the members of one group
pub fn sort_variants(variants: &mut [&Product], sort_field: SortField) {
    variants.sort_by(|a, b| match sort_field {
        SortField::Name => compare_names(&a.name, &b.name),
        SortField::Price => a
            .price
            .partial_cmp(&b.price)
            .unwrap_or(Ordering::Equal)
            .then_with(|| compare_names(&a.name, &b.name)),
        SortField::Quantity => b
            .quantity
            .cmp(&a.quantity)
            .then_with(|| compare_names(&a.name, &b.name)),
        SortField::Sku => a.sku.cmp(&b.sku),
    });
}

/// Primary sort by normalized name, secondary by raw name for ties
fn compare_names(a: &str, b: &str) -> Ordering {
    normalize_for_sorting(a)
        .cmp(&normalize_for_sorting(b))
        .then_with(|| a.cmp(b))
}

/// Normalize string for library science sorting
/// - Strip leading articles (a, an, the)
/// - Normalize unicode (NFD then lowercase)
/// - Collapse whitespace
pub fn normalize_for_sorting(s: &str) -> String {
    let without_articles = strip_leading_articles(s);

    let normalized: String = without_articles.nfd().collect::<String>().to_lowercase();

    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip leading articles following library science conventions
/// Supports: a, an, the (English) and common articles in other languages
pub fn strip_leading_articles(s: &str) -> String {
    static ARTICLES: OnceLock<Option<Regex>> = OnceLock::new();
    let re = ARTICLES.get_or_init(|| {
        Regex::new(r"^(?i)(the|a|an|der|die|das|le|la|les|el|los|las|il|lo|gli|un|une|een)\s+").ok()
    });

    match re {
        Some(re) => re.replace(s, "").to_string(),
        None => s.to_string(),
    }
}
