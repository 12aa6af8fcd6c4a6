use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Quantity at or below which an in-stock product counts as low stock
pub const LOW_STOCK_THRESHOLD: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    Active,
    Inactive,
    Discontinued,
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProductStatus::Active => "active",
            ProductStatus::Inactive => "inactive",
            ProductStatus::Discontinued => "discontinued",
        };
        f.write_str(label)
    }
}

/// A product record as supplied by the catalog.
/// Read-only to the engines: grouping and filtering only ever borrow it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub price: f64,
    pub quantity: i64,
    #[serde(default)]
    pub status: ProductStatus,
}

impl Product {
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::classify(self.quantity)
    }
}

/// Products and their separately listed variants, as stored in a catalog file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<Product>,
}

impl Catalog {
    /// Iterate over every product, catalog products first, then variants
    pub fn all_products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().chain(self.variants.iter())
    }

    pub fn len(&self) -> usize {
        self.products.len() + self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty() && self.variants.is_empty()
    }
}

/// Products inferred to be variants of the same base product.
/// Holds references into the caller's product list; recomputed on every pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantGroup<'a> {
    pub name: String,
    pub variants: Vec<&'a Product>,
}

impl<'a> VariantGroup<'a> {
    pub fn new(name: impl Into<String>, first: &'a Product) -> Self {
        Self {
            name: name.into(),
            variants: vec![first],
        }
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Sum of stock on hand across all members, saturating at the `i64` bounds
    pub fn total_quantity(&self) -> i64 {
        self.variants
            .iter()
            .fold(0i64, |total, p| total.saturating_add(p.quantity))
    }

    /// Lowest and highest member price, or None for an empty group
    pub fn price_range(&self) -> Option<(f64, f64)> {
        let mut prices = self.variants.iter().map(|p| p.price);
        let first = prices.next()?;
        Some(prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }
}

/// Stock bucket facet. Unrecognized values parse as `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StockFilter {
    #[default]
    All,
    InStock,
    OutOfStock,
    LowStock,
}

impl StockFilter {
    pub const VALUES: [StockFilter; 4] = [
        StockFilter::All,
        StockFilter::InStock,
        StockFilter::OutOfStock,
        StockFilter::LowStock,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StockFilter::All => "all",
            StockFilter::InStock => "inStock",
            StockFilter::OutOfStock => "outOfStock",
            StockFilter::LowStock => "lowStock",
        }
    }

    /// Parse a wire name, returning None for anything unrecognized
    pub fn parse_strict(value: &str) -> Option<Self> {
        Self::VALUES
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(value.trim()))
    }

    pub fn matches(&self, quantity: i64) -> bool {
        match self {
            StockFilter::All => true,
            StockFilter::InStock => quantity > 0,
            StockFilter::OutOfStock => quantity <= 0,
            StockFilter::LowStock => quantity > 0 && quantity <= LOW_STOCK_THRESHOLD,
        }
    }
}

impl FromStr for StockFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_strict(s).unwrap_or_default())
    }
}

impl From<String> for StockFilter {
    fn from(value: String) -> Self {
        Self::parse_strict(&value).unwrap_or_default()
    }
}

impl From<StockFilter> for String {
    fn from(value: StockFilter) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for StockFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Price bucket facet. Unrecognized values parse as `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PriceFilter {
    #[default]
    All,
    Under50,
    From50To100,
    Over100,
}

impl PriceFilter {
    pub const VALUES: [PriceFilter; 4] = [
        PriceFilter::All,
        PriceFilter::Under50,
        PriceFilter::From50To100,
        PriceFilter::Over100,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceFilter::All => "all",
            PriceFilter::Under50 => "under50",
            PriceFilter::From50To100 => "50to100",
            PriceFilter::Over100 => "over100",
        }
    }

    pub fn parse_strict(value: &str) -> Option<Self> {
        Self::VALUES
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(value.trim()))
    }

    /// Both ends of `50to100` are inclusive
    pub fn matches(&self, price: f64) -> bool {
        match self {
            PriceFilter::All => true,
            PriceFilter::Under50 => price < 50.0,
            PriceFilter::From50To100 => (50.0..=100.0).contains(&price),
            PriceFilter::Over100 => price > 100.0,
        }
    }
}

impl FromStr for PriceFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_strict(s).unwrap_or_default())
    }
}

impl From<String> for PriceFilter {
    fn from(value: String) -> Self {
        Self::parse_strict(&value).unwrap_or_default()
    }
}

impl From<PriceFilter> for String {
    fn from(value: PriceFilter) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for PriceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The active facets, owned by the presentation layer and passed in by value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default)]
    pub search: String,
    #[serde(default, rename = "stockFilter")]
    pub stock: StockFilter,
    #[serde(default, rename = "priceFilter")]
    pub price: PriceFilter,
}

impl FilterCriteria {
    /// True when no facet narrows anything
    pub fn is_noop(&self) -> bool {
        self.search.is_empty() && self.stock == StockFilter::All && self.price == PriceFilter::All
    }

    /// The "clear filters" state
    pub fn cleared() -> Self {
        Self::default()
    }
}

/// Stock classification used for badges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StockLevel {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockLevel {
    pub fn classify(quantity: i64) -> Self {
        if quantity <= 0 {
            StockLevel::OutOfStock
        } else if quantity <= LOW_STOCK_THRESHOLD {
            StockLevel::LowStock
        } else {
            StockLevel::InStock
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockLevel::InStock => "In Stock",
            StockLevel::LowStock => "Low Stock",
            StockLevel::OutOfStock => "Out of Stock",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product(quantity: i64, price: f64) -> Product {
        Product {
            id: "p1".to_string(),
            name: "Shoe - Red".to_string(),
            sku: "S1".to_string(),
            price,
            quantity,
            status: ProductStatus::Active,
        }
    }

    #[test]
    fn test_unknown_filter_values_fall_back_to_all() {
        assert_eq!("bogus".parse::<StockFilter>().unwrap(), StockFilter::All);
        assert_eq!("".parse::<PriceFilter>().unwrap(), PriceFilter::All);
        assert_eq!("lowstock".parse::<StockFilter>().unwrap(), StockFilter::LowStock);
        assert_eq!("50to100".parse::<PriceFilter>().unwrap(), PriceFilter::From50To100);
    }

    #[test]
    fn test_criteria_deserialize_with_wire_names() {
        let criteria: FilterCriteria = serde_json::from_value(json!({
            "search": "red",
            "stockFilter": "outOfStock",
            "priceFilter": "nonsense"
        }))
        .unwrap();

        assert_eq!(criteria.search, "red");
        assert_eq!(criteria.stock, StockFilter::OutOfStock);
        assert_eq!(criteria.price, PriceFilter::All);
        assert!(!criteria.is_noop());
        assert!(FilterCriteria::cleared().is_noop());
    }

    #[test]
    fn test_stock_level_classification() {
        assert_eq!(StockLevel::classify(0), StockLevel::OutOfStock);
        assert_eq!(StockLevel::classify(-3), StockLevel::OutOfStock);
        assert_eq!(StockLevel::classify(1), StockLevel::LowStock);
        assert_eq!(StockLevel::classify(10), StockLevel::LowStock);
        assert_eq!(StockLevel::classify(11), StockLevel::InStock);
    }

    #[test]
    fn test_group_price_range_and_total() {
        let a = product(5, 40.0);
        let b = product(7, 65.5);
        let mut group = VariantGroup::new("Shoe", &a);
        group.variants.push(&b);

        assert_eq!(group.total_quantity(), 12);
        assert_eq!(group.price_range(), Some((40.0, 65.5)));

        group.variants.clear();
        assert_eq!(group.price_range(), None);
    }

    #[test]
    fn test_total_quantity_saturates_instead_of_overflowing() {
        let a = product(i64::MAX, 10.0);
        let b = product(1, 10.0);
        let mut group = VariantGroup::new("Crate", &a);
        group.variants.push(&b);

        assert_eq!(group.total_quantity(), i64::MAX);

        let c = product(i64::MIN, 10.0);
        let d = product(-1, 10.0);
        let mut negative = VariantGroup::new("Crate", &c);
        negative.variants.push(&d);

        assert_eq!(negative.total_quantity(), i64::MIN);
    }

    #[test]
    fn test_product_status_defaults_to_active() {
        let p: Product = serde_json::from_value(json!({
            "id": "w1", "name": "Widget", "sku": "W1", "price": 10.0, "quantity": 3
        }))
        .unwrap();
        assert_eq!(p.status, ProductStatus::Active);
        assert_eq!(p.stock_level(), StockLevel::LowStock);
    }
}
