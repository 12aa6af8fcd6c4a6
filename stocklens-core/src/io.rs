use crate::error::CatalogError;
use crate::models::{Catalog, Product};
use crate::schema::{catalog_schema, product_list_schema};
use crate::schema_validation::validate_against_schema;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Load a catalog from a JSON file, checked against the catalog schema
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let value = read_json(path)?;

    validate_against_schema(&catalog_schema(), &value).map_err(CatalogError::Schema)?;

    let catalog: Catalog = serde_json::from_value(value).map_err(|source| CatalogError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        products = catalog.products.len(),
        variants = catalog.variants.len(),
        "loaded catalog"
    );

    Ok(catalog)
}

/// Load products from either a catalog object or a bare product array
pub fn load_products<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let value = read_json(path)?;

    if !value.is_array() {
        return load_catalog(path);
    }

    validate_against_schema(&product_list_schema(), &value).map_err(CatalogError::Schema)?;

    let products: Vec<Product> =
        serde_json::from_value(value).map_err(|source| CatalogError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(path = %path.display(), products = products.len(), "loaded product list");

    Ok(Catalog {
        products,
        variants: Vec::new(),
    })
}

/// Save a catalog to a JSON file with pretty printing
pub fn save_catalog<P: AsRef<Path>>(catalog: &Catalog, path: P) -> Result<(), CatalogError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(catalog).map_err(|source| CatalogError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, json).map_err(|source| CatalogError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn read_json(path: &Path) -> Result<Value, CatalogError> {
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| CatalogError::Json {
        path: path.to_path_buf(),
        source,
    })
}
