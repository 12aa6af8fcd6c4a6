use std::path::PathBuf;
use stocklens_core::{PriceFilter, SortField, StockFilter};

/// Validation error with field and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validate a stock bucket name
/// An empty input means `all`
pub fn validate_stock_input(input: &str) -> Result<StockFilter, ValidationError> {
    if input.trim().is_empty() {
        return Ok(StockFilter::All);
    }

    StockFilter::parse_strict(input).ok_or_else(|| ValidationError {
        field: "stock".to_string(),
        message: format!(
            "unknown bucket '{}', expected one of: {}",
            input.trim(),
            bucket_names(StockFilter::VALUES.iter().map(StockFilter::as_str))
        ),
    })
}

/// Validate a price bucket name
/// An empty input means `all`
pub fn validate_price_input(input: &str) -> Result<PriceFilter, ValidationError> {
    if input.trim().is_empty() {
        return Ok(PriceFilter::All);
    }

    PriceFilter::parse_strict(input).ok_or_else(|| ValidationError {
        field: "price".to_string(),
        message: format!(
            "unknown bucket '{}', expected one of: {}",
            input.trim(),
            bucket_names(PriceFilter::VALUES.iter().map(PriceFilter::as_str))
        ),
    })
}

/// Validate a sort field; `none` or an empty input turns sorting off
pub fn validate_sort_input(input: &str) -> Result<Option<SortField>, ValidationError> {
    let trimmed = input.trim().to_lowercase();
    match trimmed.as_str() {
        "" | "none" | "off" => Ok(None),
        "name" | "price" | "quantity" | "stock" | "qty" | "sku" => {
            Ok(trimmed.parse::<SortField>().ok())
        }
        _ => Err(ValidationError {
            field: "sort".to_string(),
            message: format!(
                "unknown field '{}', expected one of: name, price, quantity, sku, none",
                input.trim()
            ),
        }),
    }
}

/// Validate a catalog path argument
pub fn validate_path_input(input: &str) -> Result<PathBuf, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError {
            field: "path".to_string(),
            message: "Path cannot be empty".to_string(),
        });
    }
    Ok(PathBuf::from(trimmed))
}

fn bucket_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_input() {
        assert_eq!(validate_stock_input("inStock"), Ok(StockFilter::InStock));
        assert_eq!(validate_stock_input(" "), Ok(StockFilter::All));

        let err = validate_stock_input("plenty").unwrap_err();
        assert_eq!(err.field, "stock");
        assert!(err.message.contains("inStock, outOfStock, lowStock"));
    }

    #[test]
    fn test_price_input() {
        assert_eq!(validate_price_input("50TO100"), Ok(PriceFilter::From50To100));
        assert!(validate_price_input("cheap").is_err());
    }

    #[test]
    fn test_sort_input() {
        assert_eq!(validate_sort_input("price"), Ok(Some(SortField::Price)));
        assert_eq!(validate_sort_input("none"), Ok(None));
        assert!(validate_sort_input("color").is_err());
    }

    #[test]
    fn test_path_input() {
        assert_eq!(validate_path_input(" a.json "), Ok(PathBuf::from("a.json")));
        assert!(validate_path_input("").is_err());
    }
}
