use serde_json::{json, Value};

/// JSON Schema for a single product record
pub fn product_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "id": {"type": "string"},
            "name": {"type": "string"},
            "sku": {"type": "string"},
            "price": {"type": "number", "minimum": 0},
            "quantity": {"type": "integer"},
            "status": {
                "type": "string",
                "enum": ["active", "inactive", "discontinued"]
            }
        },
        "required": ["id", "name", "sku", "price", "quantity"]
    })
}

/// JSON Schema for a catalog file: products plus an optional variants list
pub fn catalog_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "$id": "stocklens/catalog",
        "title": "Product catalog",
        "type": "object",
        "properties": {
            "products": {"type": "array", "items": product_schema()},
            "variants": {"type": "array", "items": product_schema()}
        },
        "required": ["products"]
    })
}

/// JSON Schema for a bare array of products
pub fn product_list_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "array",
        "items": product_schema()
    })
}
